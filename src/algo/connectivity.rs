use std::{cmp::Reverse, iter::FusedIterator, ops::Index};

use itertools::Itertools;

use super::*;

pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the components in discovery order: the component of node `0`
    /// first, then the one of the smallest node not yet assigned, and so on.
    /// Each component lists its nodes in DFS pre-order.
    ///
    /// For directed graphs, a component is the set of nodes newly reachable via out-edges
    /// from its first node.
    /// ** Panics if the graph has no nodes **
    fn connected_components(&self) -> ConnectedComponents<'_, Self>;

    /// Returns all components sorted by decreasing size; components of equal size keep their
    /// discovery order. A graph without nodes has no components.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = ListGraph::from_edges(5, [(3, 4), (2, 3)]);
    /// let components = g.component_list();
    ///
    /// assert_eq!(components.sizes().collect::<Vec<_>>(), vec![3, 1, 1]);
    /// assert_eq!(components[0], [2, 3, 4]);
    /// ```
    fn component_list(&self) -> ComponentList {
        if self.is_empty() {
            return ComponentList::default();
        }
        ComponentList::from_discovery_order(self.connected_components().collect_vec())
    }

    /// Returns the number of connected components (`0` for a graph without nodes)
    fn number_of_components(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.connected_components().count()
        }
    }

    /// Returns *true* if every node is reachable from node `0`
    fn is_connected(&self) -> bool {
        self.is_empty() || self.dfs(0).count() == self.len()
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }
}

pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + 'a,
{
    dfs: DFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + 'a,
{
    pub fn new(graph: &'a G) -> Self {
        assert!(
            !graph.is_empty(),
            "Can't iterate connected components in a graph with no nodes!"
        );
        Self { dfs: graph.dfs(0) }
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList + 'a,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.dfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.dfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<'a, G> FusedIterator for ConnectedComponents<'a, G> where G: AdjacencyList + 'a {}

/// Components partitioning `0..n`, ordered by decreasing size (stable w.r.t. discovery order)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentList {
    components: Vec<Vec<Node>>,
}

impl ComponentList {
    /// Sorts components given in discovery order by decreasing size
    pub fn from_discovery_order(mut components: Vec<Vec<Node>>) -> Self {
        components.sort_by_key(|c| Reverse(c.len()));
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Node]> + '_ {
        self.components.iter().map(|c| c.as_slice())
    }

    /// Returns the component sizes in list order
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.components.iter().map(|c| c.len())
    }

    /// Returns the largest component
    pub fn largest(&self) -> Option<&[Node]> {
        self.components.first().map(|c| c.as_slice())
    }

    /// Returns for each node the index of its component in this list
    pub fn component_ids(&self, n: NumNodes) -> Vec<Node> {
        let mut ids = vec![INVALID_NODE; n as usize];
        for (i, comp) in self.components.iter().enumerate() {
            for &u in comp {
                ids[u as usize] = i as Node;
            }
        }
        ids
    }
}

impl Index<usize> for ComponentList {
    type Output = [Node];

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{brute_force_component_ids, random_graph};

    #[test]
    fn two_pairs() {
        let graph = ListGraph::from_edges(4, [(0, 1), (2, 3)]);
        let comps = graph.component_list();

        assert_eq!(comps.len(), 2);
        assert_eq!(comps.sizes().collect_vec(), vec![2, 2]);
        assert_eq!(&comps[0], &[0, 1]);
        assert_eq!(&comps[1], &[2, 3]);
        assert!(!graph.is_connected());
        assert_eq!(graph.number_of_components(), 2);
    }

    #[test]
    fn ties_keep_discovery_order() {
        let graph = MatrixGraph::from_edges(6, [(3, 4), (4, 5)]);
        let comps = graph.component_list();

        assert_eq!(comps.len(), 4);
        assert_eq!(comps.largest(), Some(&[3, 4, 5][..]));
        assert_eq!(&comps[1], &[0]);
        assert_eq!(&comps[2], &[1]);
        assert_eq!(&comps[3], &[2]);
    }

    #[test]
    fn components_follow_dfs_order() {
        let graph = ListGraph::from_edges(5, [(0, 2), (0, 4), (2, 4), (1, 3)]);
        let comps = graph.connected_components().collect_vec();
        assert_eq!(comps, vec![vec![0, 2, 4], vec![1, 3]]);
    }

    #[test]
    fn connected_graph() {
        let graph = ListGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert!(graph.is_connected());
        let comps = graph.component_list();
        assert_eq!(comps.len(), 1);
        assert_eq!(comps.component_ids(4), vec![0; 4]);
    }

    #[test]
    fn empty_graph() {
        let graph = ListGraph::from_edges(0, std::iter::empty::<Edge>());
        let comps = graph.component_list();
        assert!(comps.is_empty());
        assert_eq!(comps.iter().flatten().count(), 0);
        assert_eq!(graph.number_of_components(), 0);
    }

    #[test]
    fn components_partition_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for _ in 0..50 {
            let graph: ListGraph = random_graph(rng, 12, 0.12, false);
            let comps = graph.component_list();

            let mut all = comps.iter().flatten().copied().collect_vec();
            all.sort_unstable();
            assert_eq!(all, graph.vertices().collect_vec());

            assert!(comps.sizes().tuple_windows().all(|(a, b)| a >= b));

            // same classes as a brute-force reachability closure
            let ids = comps.component_ids(graph.number_of_nodes());
            let reference = brute_force_component_ids(&graph);
            for u in graph.vertices() {
                for v in graph.vertices() {
                    assert_eq!(
                        ids[u as usize] == ids[v as usize],
                        reference[u as usize] == reference[v as usize]
                    );
                }
            }
        }
    }
}
