/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Traversal iterators (BFS, DFS, with and without predecessor tracking).
- The [`TraversalTree`] extension that turns a traversal with predecessors into a [`SearchTree`]
  holding parent and level arrays.
- A high-level [`Traversal`] trait that exposes traversal algorithms
  directly as methods on graph data structures.

BFS marks a node as visited when it is enqueued; DFS marks a node when it is entered and then
immediately descends into its first unvisited neighbor (pre-order), exactly like the recursive
formulation but with an explicit stack of neighbor iterators.
*/

use super::*;
use std::collections::VecDeque;

/// Gives access to the graph an algorithm operates on.
pub trait WithGraphRef<G> {
    fn graph_ref(&self) -> &G;
}

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item for a traversal root.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)`
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Breadth-first traversal iterator.
///
/// Maintains a FIFO queue of discovered nodes and a bitset of visited nodes.
/// Parameterized by the type of items yielded (either `Node` or `PredecessorOfNode`).
pub struct BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<I>,
    restart_lb: Node,
}

/// A BFS traversal iterator visiting nodes in breadth-first order from a given starting node.
pub type BFS<'a, G> = BreadthFirstSearch<'a, G, Node>;

/// A BFS traversal iterator that records predecessor information.
pub type BFSWithPredecessor<'a, G> = BreadthFirstSearch<'a, G, PredecessorOfNode>;

impl<'a, G, I> BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![I::new_without_predecessor(start)]),
            restart_lb: 0,
        }
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        let visited = &self.visited;
        let unvisited =
            (self.restart_lb..self.graph.number_of_nodes()).find(|&u| !visited.get_bit(u));
        match unvisited {
            None => false,
            Some(u) => {
                self.restart_lb = u + 1;
                self.visited.set_bit(u);
                self.queue.push_back(I::new_without_predecessor(u));
                true
            }
        }
    }
}

impl<G, I> WithGraphRef<G> for BreadthFirstSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, I> Iterator for BreadthFirstSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.queue.len()),
        )
    }
}

/// Depth-first traversal iterator in pre-order.
///
/// Each stack frame keeps the remaining neighbor iterator of a node on the current DFS path, so a
/// node's first unvisited neighbor is always entered before any of its later neighbors.
pub struct DepthFirstSearch<'a, G, I>
where
    G: AdjacencyList + 'a,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<(Node, G::NeighborIter<'a>)>,
    root: Option<I>,
    restart_lb: Node,
}

/// A DFS traversal iterator visiting nodes in depth-first pre-order from a given starting node.
pub type DFS<'a, G> = DepthFirstSearch<'a, G, Node>;

/// A DFS traversal iterator that records predecessor information.
pub type DFSWithPredecessor<'a, G> = DepthFirstSearch<'a, G, PredecessorOfNode>;

impl<'a, G, I> DepthFirstSearch<'a, G, I>
where
    G: AdjacencyList + 'a,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            stack: Vec::new(),
            root: Some(I::new_without_predecessor(start)),
            restart_lb: 0,
        }
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.stack.is_empty() && self.root.is_none());
        let visited = &self.visited;
        let unvisited =
            (self.restart_lb..self.graph.number_of_nodes()).find(|&u| !visited.get_bit(u));
        match unvisited {
            None => false,
            Some(u) => {
                self.restart_lb = u + 1;
                self.visited.set_bit(u);
                self.root = Some(I::new_without_predecessor(u));
                true
            }
        }
    }
}

impl<'a, G, I> WithGraphRef<G> for DepthFirstSearch<'a, G, I>
where
    G: AdjacencyList + 'a,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<'a, G, I> Iterator for DepthFirstSearch<'a, G, I>
where
    G: AdjacencyList + 'a,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            let u = root.item();
            self.stack.push((u, self.graph.neighbors_of(u)));
            return Some(root);
        }

        while let Some((u, neighbors)) = self.stack.last_mut() {
            let u = *u;
            let visited = &self.visited;
            match neighbors.find(|&v| !visited.get_bit(v)) {
                Some(v) => {
                    self.visited.set_bit(v);
                    self.stack.push((v, self.graph.neighbors_of(v)));
                    return Some(I::new_with_predecessor(u, v));
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// Parent and level arrays of a single traversal from `source`.
///
/// Unvisited nodes keep [`INVALID_NODE`] both as parent and as level; the source is the only
/// visited node without parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    source: Node,
    parents: Vec<Node>,
    levels: Vec<Node>,
}

impl SearchTree {
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns *true* if `u` was reached from the source
    /// ** Panics if `u >= n` **
    pub fn is_visited(&self, u: Node) -> bool {
        self.levels[u as usize] != INVALID_NODE
    }

    /// Returns the parent of `u` in the traversal tree
    /// ** Panics if `u >= n` **
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        optional_node(self.parents[u as usize])
    }

    /// Returns the level (number of tree edges from the source) of `u`
    /// ** Panics if `u >= n` **
    pub fn level_of(&self, u: Node) -> Option<Node> {
        optional_node(self.levels[u as usize])
    }

    /// Returns the level of `u`, or `None` if `u` was not visited.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `u >= n`.
    pub fn try_level_of(&self, u: Node) -> Result<Option<Node>> {
        check_node(u, self.levels.len() as NumNodes)?;
        Ok(self.level_of(u))
    }

    /// Parent array with [`INVALID_NODE`] for the source and unvisited nodes
    pub fn parents(&self) -> &[Node] {
        &self.parents
    }

    /// Level array with [`INVALID_NODE`] for unvisited nodes
    pub fn levels(&self) -> &[Node] {
        &self.levels
    }

    /// Returns an iterator over all visited nodes in increasing order
    pub fn visited(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.levels.len() as Node).filter(|&u| self.is_visited(u))
    }

    /// Returns the tree path from the source to `target` or `None` if `target` was not visited
    /// ** Panics if `target >= n` **
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        reconstruct_path(&self.parents, self.source, target)
    }

    /// Returns the tree path from the source to `target` or `None` if `target` was not visited.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `target >= n`.
    pub fn try_path_to(&self, target: Node) -> Result<Option<Vec<Node>>> {
        check_node(target, self.parents.len() as NumNodes)?;
        Ok(self.path_to(target))
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure (parents, depths).
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the parent and depth of each visited node
    /// into the provided slices. Unvisited entries remain unchanged.
    ///
    /// # Requirements
    /// - `parents.len()` and `depths.len()` must be at least `graph.len()`.
    fn tree_into(&mut self, parents: &mut [Node], depths: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            let u = pred_with_item.item() as usize;
            match pred_with_item.predecessor() {
                Some(p) => {
                    parents[u] = p;
                    depths[u] = depths[p as usize] + 1;
                }
                None => depths[u] = 0,
            }
        }
    }

    /// Consumes the iterator and returns the parent array of the implied traversal tree.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = ListGraph::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![INVALID_NODE, 0, 1]);
    /// ```
    fn parent_array(mut self) -> Vec<Node> {
        let n = self.graph_ref().len();
        let mut parents = vec![INVALID_NODE; n];
        let mut depths = vec![INVALID_NODE; n];
        self.tree_into(&mut parents, &mut depths);
        parents
    }

    /// Consumes the iterator and returns the depth of every node in the traversal tree
    /// ([`INVALID_NODE`] for unvisited nodes).
    fn depths(mut self) -> Vec<Node> {
        let n = self.graph_ref().len();
        let mut parents = vec![INVALID_NODE; n];
        let mut depths = vec![INVALID_NODE; n];
        self.tree_into(&mut parents, &mut depths);
        depths
    }

    /// Consumes a traversal started at `source` and returns its [`SearchTree`]
    fn search_tree(mut self, source: Node) -> SearchTree {
        let n = self.graph_ref().len();
        let mut parents = vec![INVALID_NODE; n];
        let mut levels = vec![INVALID_NODE; n];
        self.tree_into(&mut parents, &mut levels);
        SearchTree {
            source,
            parents,
            levels,
        }
    }
}

impl<'a, G> TraversalTree<'a, G> for BreadthFirstSearch<'a, G, PredecessorOfNode> where
    G: AdjacencyList
{
}

impl<'a, G> TraversalTree<'a, G> for DepthFirstSearch<'a, G, PredecessorOfNode> where
    G: AdjacencyList + 'a
{
}

/// Provides convenient traversal methods (BFS, DFS) directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = ListGraph::from_edges(3, [(0, 2), (0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) pre-order**.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Runs a BFS from `source`; levels are minimum hop counts.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `source >= n`.
    fn try_bfs_tree(&self, source: Node) -> Result<SearchTree> {
        self.check_node(source)?;
        Ok(self.bfs_with_predecessor(source).search_tree(source))
    }

    /// Runs a DFS from `source`; levels are depths in the DFS tree.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `source >= n`.
    fn try_dfs_tree(&self, source: Node) -> Result<SearchTree> {
        self.check_node(source)?;
        Ok(self.dfs_with_predecessor(source).search_tree(source))
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
