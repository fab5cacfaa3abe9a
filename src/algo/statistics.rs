use super::*;

/// Structural statistics of a graph as reported by [`crate::io::write_summary`]
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary {
    pub number_of_nodes: NumNodes,
    /// Number of edges as loaded, i.e. including duplicates
    pub number_of_edges: NumEdges,
    /// `sum(degree) / n`, or `0` for a graph without nodes
    pub average_degree: f64,
    /// Pairs `(degree, fraction of nodes with this degree)` sorted by degree
    pub degree_distribution: Vec<(NumNodes, f64)>,
}

impl GraphSummary {
    /// Collects the statistics of `graph`. Degrees are the lengths of the neighbor sequences, so
    /// duplicate edges count repeatedly in list graphs but only once in matrix graphs.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = ListGraph::from_edges(4, [(0, 1), (1, 2), (2, 0)]);
    /// let summary = GraphSummary::of(&g);
    ///
    /// assert_eq!(summary.average_degree, 1.5);
    /// assert_eq!(summary.degree_distribution, vec![(0, 0.25), (2, 0.75)]);
    /// ```
    pub fn of<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphEdgeOrder,
    {
        let n = graph.number_of_nodes();
        if n == 0 {
            return Self {
                number_of_nodes: 0,
                number_of_edges: graph.number_of_edges(),
                average_degree: 0.0,
                degree_distribution: Vec::new(),
            };
        }

        let total: u64 = graph.degrees().map(|d| d as u64).sum();
        let degree_distribution = graph
            .degree_distribution()
            .into_iter()
            .map(|(d, count)| (d, count as f64 / n as f64))
            .collect();

        Self {
            number_of_nodes: n,
            number_of_edges: graph.number_of_edges(),
            average_degree: total as f64 / n as f64,
            degree_distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::cycle_graph;

    #[test]
    fn cycle_summary() {
        let summary = GraphSummary::of(&cycle_graph::<AdjList>(5));
        assert_eq!(summary.number_of_nodes, 5);
        assert_eq!(summary.number_of_edges, 5);
        assert_eq!(summary.average_degree, 2.0);
        assert_eq!(summary.degree_distribution, vec![(2, 1.0)]);
    }

    #[test]
    fn duplicates_count_per_representation() {
        let edges = [(0, 1), (0, 1), (1, 2)];
        let list = GraphSummary::of(&ListGraph::from_edges(3, edges));
        let matrix = GraphSummary::of(&MatrixGraph::from_edges(3, edges));

        assert_eq!(list.number_of_edges, 3);
        assert_eq!(matrix.number_of_edges, 3);
        assert_eq!(list.average_degree, 2.0);
        assert_eq!(matrix.average_degree, 4.0 / 3.0);
    }

    #[test]
    fn directed_degrees_are_out_degrees() {
        let graph: ListGraph = GraphBuilder::new(4)
            .directed(true)
            .edges([(0, 1), (0, 2), (0, 3)])
            .try_build()
            .unwrap();
        let summary = GraphSummary::of(&graph);
        assert_eq!(summary.average_degree, 0.75);
        assert_eq!(summary.degree_distribution, vec![(0, 0.75), (3, 0.25)]);
    }

    #[test]
    fn empty_graph() {
        let summary = GraphSummary::of(&ListGraph::from_edges(0, std::iter::empty::<Edge>()));
        assert_eq!(summary.number_of_nodes, 0);
        assert_eq!(summary.average_degree, 0.0);
        assert!(summary.degree_distribution.is_empty());
    }
}
