//! Rendering of pedigrees and inbreeding loops to stdout.
//!
//! JSON output is the serialized engine value, pretty-printed, so a renderer
//! can consume it directly. Human output is a plain listing meant for a
//! terminal.
use std::io::Write;

use herdbook_core::{Edge, Pedigree};

use crate::OutputFormat;
use crate::error::CliError;

/// Writes `pedigree` to stdout.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn print_pedigree(pedigree: &Pedigree, format: OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => write_pedigree_human(&mut out, pedigree),
        OutputFormat::Json => write_json(&mut out, pedigree),
    }
    .map_err(stdout_error)
}

/// Writes the edges of an inbreeding loop to stdout.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn print_loop(edges: &[Edge], format: OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => write_loop_human(&mut out, edges),
        OutputFormat::Json => write_json(
            &mut out,
            &serde_json::json!({ "edges": edges, "count": edges.len() }),
        ),
    }
    .map_err(stdout_error)
}

fn stdout_error(e: std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(w: &mut W, value: &T) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

fn write_pedigree_human<W: Write>(w: &mut W, pedigree: &Pedigree) -> std::io::Result<()> {
    let graph = pedigree.graph();
    writeln!(w, "roots: {}", pedigree.roots().join(", "))?;

    writeln!(w, "nodes ({}):", graph.node_count())?;
    let width = graph.nodes().iter().map(|n| n.id.len()).max().unwrap_or(0);
    for node in graph.nodes() {
        let marker = if pedigree.is_common(&node.id) {
            "  [common]"
        } else {
            ""
        };
        writeln!(w, "  {:<width$}  {}{marker}", node.id, node.label)?;
    }

    writeln!(w, "edges ({}):", graph.edge_count())?;
    for edge in graph.edges() {
        writeln!(w, "  {} -> {}", edge.from, edge.to)?;
    }

    let common: Vec<&str> = pedigree
        .common_ancestors()
        .iter()
        .map(String::as_str)
        .collect();
    if common.is_empty() {
        writeln!(w, "common ancestors: none")
    } else {
        writeln!(w, "common ancestors ({}): {}", common.len(), common.join(", "))
    }
}

fn write_loop_human<W: Write>(w: &mut W, edges: &[Edge]) -> std::io::Result<()> {
    for edge in edges {
        writeln!(w, "{} -> {}", edge.from, edge.to)?;
    }
    Ok(())
}
