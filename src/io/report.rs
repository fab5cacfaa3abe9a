//! # Reports
//!
//! Plain-text renderings of algorithm results. Missing parents and levels are written as `-1`.

use std::{fmt::Display, io::Write};

use itertools::Itertools;

use super::*;
use crate::{
    algo::{ComponentList, Destination, GraphSummary, Route, SearchTree},
    experiment::SuccessRate,
};

struct OrMinusOne(Option<Node>);

impl Display for OrMinusOne {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(u) => write!(f, "{u}"),
            None => write!(f, "-1"),
        }
    }
}

/// Writes vertex and edge counts, the average degree and the degree distribution
pub fn write_summary<W: Write>(mut writer: W, summary: &GraphSummary) -> Result<()> {
    writeln!(writer, "nodes: {}", summary.number_of_nodes)?;
    writeln!(writer, "edges: {}", summary.number_of_edges)?;
    writeln!(writer, "average degree: {:.2}", summary.average_degree)?;
    writeln!(writer, "degree distribution:")?;
    for (degree, fraction) in &summary.degree_distribution {
        writeln!(writer, "degree {degree}: {fraction:.2}")?;
    }
    Ok(())
}

/// Writes one line `vertex parent level` per node
pub fn write_traversal<W: Write>(mut writer: W, tree: &SearchTree) -> Result<()> {
    writeln!(writer, "vertex parent level")?;
    for u in 0..tree.levels().len() as Node {
        writeln!(
            writer,
            "{u} {} {}",
            OrMinusOne(tree.parent_of(u)),
            OrMinusOne(tree.level_of(u))
        )?;
    }
    Ok(())
}

/// Writes the number of components followed by one line per component with its sorted members
pub fn write_components<W: Write>(mut writer: W, components: &ComponentList) -> Result<()> {
    writeln!(writer, "components: {}", components.len())?;
    for (i, comp) in components.iter().enumerate() {
        writeln!(
            writer,
            "component {} (size {}): [{}]",
            i + 1,
            comp.len(),
            comp.iter().sorted_unstable().join(", ")
        )?;
    }
    Ok(())
}

/// Writes one line per destination with distance and path, or `unreachable`
pub fn write_destinations<W: Write>(
    mut writer: W,
    source: Node,
    destinations: &[Destination],
) -> Result<()> {
    for Destination { target, route } in destinations {
        match route {
            Route::Unreachable => writeln!(writer, "{source} -> {target}: unreachable")?,
            Route::Reachable { path, distance } => writeln!(
                writer,
                "{source} -> {target}: distance {distance} path {}",
                path.iter().join(" ")
            )?,
        }
    }
    Ok(())
}

/// Writes one line per `(n, c)` pair with the success percentage
pub fn write_success_rates<W: Write>(mut writer: W, rates: &[SuccessRate]) -> Result<()> {
    for rate in rates {
        writeln!(
            writer,
            "n = {}, c = {}, success = {:.1}%",
            rate.n,
            rate.c,
            rate.percentage()
        )?;
    }
    Ok(())
}
