/*!
# Node Representation

We choose `Node = u32` as the graphs handled here rarely exceed `2^32` vertices.
This allows us to store parent and level arrays compactly and to use a single reserved value as
the "none"/"unreached" marker instead of wrapping every entry in an `Option`.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid.
///
/// Used as the "no parent" entry of parent arrays and the "unreached" entry of level arrays.
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Converts a sentinel-encoded node into an `Option`
#[inline]
pub const fn optional_node(u: Node) -> Option<Node> {
    if u == INVALID_NODE { None } else { Some(u) }
}
