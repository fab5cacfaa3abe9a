//! # EdgeList
//!
//! The EdgeList-Format consists of a first non-comment-line `n`, followed by non-comment-lines
//! `u v [w]` representing an edge `Edge(u, v)` with optional weight `w`. Nodes are 0-based.

use std::io::{BufRead, ErrorKind, Lines, Write};

use super::*;
use crate::repr::{AdjacencyView, Graph, GraphBuilder};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Interpret each line as an arc `u -> v` only
    directed: bool,
    /// Parse the optional third token as edge weight
    weighted: bool,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    /// Undirected, unweighted and `#` as comment identifier
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directed(mut self, directed: bool) -> EdgeListReader {
        self.directed = directed;
        self
    }

    /// If *true*, a third token on an edge line is parsed as weight and the graph is weighted
    pub fn weighted(mut self, weighted: bool) -> EdgeListReader {
        self.weighted = weighted;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<A: AdjacencyView> GraphReader<Graph<A>> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph<A>> {
        let mut lines = EdgeListLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines
            .next_content_line()?
            .ok_or(io_error!(ErrorKind::InvalidData, "Header not found"))?;
        let n: NumNodes = parse_next_value!(header.split_whitespace(), "Number of nodes");

        let mut builder = GraphBuilder::new(n)
            .directed(self.directed)
            .weighted(self.weighted);

        while let Some(line) = lines.next_content_line()? {
            let mut parts = line.split_whitespace();

            let u: Node = parse_next_value!(parts, "Source node");
            let v: Node = parse_next_value!(parts, "Target node");

            raise_error_unless!(
                u < n && v < n,
                ErrorKind::InvalidData,
                format!("Edge ({u},{v}) exceeds the number of nodes {n}")
            );

            builder = match parts.next().filter(|_| self.weighted) {
                Some(token) => {
                    let w: Weight = token.parse().map_err(|_| {
                        io_error!(
                            ErrorKind::InvalidData,
                            format!("Invalid value {token:?} found. Cannot parse Edge weight.")
                        )
                    })?;
                    builder.weighted_edge(u, v, w)
                }
                None => builder.edge(u, v),
            };
        }

        Ok(builder.try_build()?)
    }
}

/// Trait for creating graphs with default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<A: AdjacencyView> EdgeListRead for Graph<A> {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

struct EdgeListLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> EdgeListLines<'_, R> {
    /// Returns the next line that is neither blank nor a comment
    fn next_content_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty()
                        || (!self.comment_identifier.is_empty()
                            && trimmed.starts_with(self.comment_identifier))
                    {
                        continue;
                    }
                    return Ok(Some(line));
                }
            }
        }
    }
}

/// A writer for the EdgeList-Format.
///
/// Writes the loaded edges in load order; weights are appended for weighted graphs.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    pub fn new() -> Self {
        Self
    }
}

impl<A: AdjacencyView> GraphWriter<Graph<A>> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &Graph<A>, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;

        for (Edge(u, v), w) in graph.weighted_edges() {
            if graph.is_weighted() {
                writeln!(writer, "{u} {v} {w}")?;
            } else {
                writeln!(writer, "{u} {v}")?;
            }
        }

        Ok(())
    }
}
