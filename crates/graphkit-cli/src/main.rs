//! Demonstration consumer for `graphkit-core`.
//!
//! Assembles a graph from `--node`/`--edge` flags or a JSON description
//! file, validates it, and prints every
//! `<source-payload, edge-payload, target-payload>` triple reachable through
//! outgoing adjacency. With no input at all it runs a built-in sample graph.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use graphkit_core::{Graph, GraphBuilder};

#[derive(Parser)]
#[command(
    name = "graphkit",
    version,
    about = "Build a keyed directed graph and print its edges"
)]
struct Cli {
    /// Node description as `key=payload`; repeatable.
    #[arg(long = "node", value_name = "KEY=PAYLOAD")]
    nodes: Vec<String>,

    /// Edge description as `source,target,payload`; repeatable.
    #[arg(long = "edge", value_name = "SRC,TGT,PAYLOAD")]
    edges: Vec<String>,

    /// JSON graph description: {"nodes": [{"key", "payload"}], "edges":
    /// [{"source", "target", "payload"}]}.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["nodes", "edges"])]
    file: Option<PathBuf>,

    /// Validate the description and exit without printing the graph.
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    nodes: Vec<NodeEntry>,
    #[serde(default)]
    edges: Vec<EdgeEntry>,
}

#[derive(Debug, Deserialize)]
struct NodeEntry {
    key: String,
    payload: String,
}

#[derive(Debug, Deserialize)]
struct EdgeEntry {
    source: String,
    target: String,
    payload: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let builder = assemble(cli)?;
    tracing::info!(
        nodes = builder.pending_node_count(),
        edges = builder.pending_edge_count(),
        "graph description loaded"
    );

    if cli.check {
        return Ok(match builder.validate() {
            Ok(_) => {
                println!("{}", "valid".green());
                ExitCode::SUCCESS
            }
            Err(err) => {
                println!("{} {err}", "invalid:".red());
                ExitCode::FAILURE
            }
        });
    }

    let graph = builder.build().context("graph construction failed")?;
    print_graph(&graph);
    Ok(ExitCode::SUCCESS)
}

/// Collects requests from the file, the flags, or the built-in sample.
fn assemble(cli: &Cli) -> Result<GraphBuilder<String, String, String>> {
    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let description: GraphFile = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        let mut builder = GraphBuilder::with_capacity(
            description.nodes.len(),
            description.edges.len(),
        );
        for NodeEntry { key, payload } in description.nodes {
            builder = builder.add_node(key, payload);
        }
        for EdgeEntry {
            source,
            target,
            payload,
        } in description.edges
        {
            builder = builder.add_edge(source, target, payload);
        }
        return Ok(builder);
    }

    if cli.nodes.is_empty() && cli.edges.is_empty() {
        tracing::debug!("no input given, using the built-in sample graph");
        return Ok(sample());
    }

    let mut builder = GraphBuilder::with_capacity(cli.nodes.len(), cli.edges.len());
    for entry in &cli.nodes {
        let (key, payload) = parse_node(entry)?;
        builder = builder.add_node(key, payload);
    }
    for entry in &cli.edges {
        let (source, target, payload) = parse_edge(entry)?;
        builder = builder.add_edge(source, target, payload);
    }
    Ok(builder)
}

/// The sample graph:
///
/// ```text
/// [A] -{x:=1}-> [B] <-{x:=2}- [C]
/// [D] -{x:=3}-> [E]           [F]
/// ```
fn sample() -> GraphBuilder<String, String, String> {
    let node = |key: &str, payload: &str| (key.to_string(), payload.to_string());
    let edge = |source: &str, target: &str, payload: &str| {
        (source.to_string(), target.to_string(), payload.to_string())
    };
    GraphBuilder::new()
        .add_nodes([
            node("0", "A"),
            node("1", "B"),
            node("2", "C"),
            node("3", "D"),
            node("4", "E"),
            node("5", "F"),
        ])
        .add_edges([
            edge("0", "1", "x:=1"),
            edge("2", "1", "x:=2"),
            edge("3", "4", "x:=3"),
        ])
}

fn parse_node(entry: &str) -> Result<(String, String)> {
    let Some((key, payload)) = entry.split_once('=') else {
        bail!("node `{entry}` is not of the form key=payload");
    };
    Ok((key.to_string(), payload.to_string()))
}

fn parse_edge(entry: &str) -> Result<(String, String, String)> {
    let mut parts = entry.splitn(3, ',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(source), Some(target), Some(payload)) => Ok((
            source.to_string(),
            target.to_string(),
            payload.to_string(),
        )),
        _ => bail!("edge `{entry}` is not of the form source,target,payload"),
    }
}

fn print_graph(graph: &Graph<String, String, String>) {
    for (_, key, node) in graph.nodes() {
        println!("{} ({key}):", node.payload().bold());
        for &edge_id in node.outgoing() {
            let Some(label) = graph.edge_payload(edge_id) else {
                continue;
            };
            let Some((source, target)) = graph.endpoints(edge_id) else {
                continue;
            };
            println!(
                "  <{}, '{}', {}>",
                source.payload(),
                label.yellow(),
                target.payload()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_edge, parse_node, sample};

    #[test]
    fn test_parse_node_entry() {
        assert_eq!(
            parse_node("0=A").unwrap(),
            ("0".to_string(), "A".to_string())
        );
        assert!(parse_node("missing-separator").is_err());
    }

    #[test]
    fn test_parse_edge_entry() {
        assert_eq!(
            parse_edge("0,1,x:=1").unwrap(),
            ("0".to_string(), "1".to_string(), "x:=1".to_string())
        );
        // Payload may itself contain commas; only the first two split.
        assert_eq!(
            parse_edge("0,1,a,b").unwrap().2,
            "a,b".to_string()
        );
        assert!(parse_edge("0,1").is_err());
    }

    #[test]
    fn test_sample_graph_is_valid() {
        let graph = sample().build().unwrap();
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 3);
    }
}
