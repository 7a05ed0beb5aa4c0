//! Read a ticket network and print its minimum spanning tree and two Steiner trees
//! connecting the ticket cities.
//! Results go to stdout, log messages to stderr.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;
use std::{fs, process};
use ticket_routes::{
    greedy_steiner_tree, prim_minimum_spanning_tree, shortest_paths_union, Graph, GraphResult,
    Network,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ticket_routes", version)]
struct Args {
    /// Network file to read, `-` or nothing for stdin
    input: Option<PathBuf>,
    /// Log filter, e.g. `debug` or `ticket_routes=trace`
    #[arg(long = "log-level", env = "TICKET_ROUTES_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .without_time()
        .init();

    let content = read_input(args.input.as_ref())?;
    let network: Network = content.parse()?;
    tracing::info!(
        num_nodes = network.graph.num_nodes(),
        num_tickets = network.tickets.len(),
        "read network"
    );

    let mut failed = false;
    println!("Part A: Prim's minimum spanning tree");
    failed |= !report("MST", prim_minimum_spanning_tree(&network.graph));

    println!();
    println!("Part B: Steiner tree problem");
    println!("Solution 1: Shortest paths combination");
    failed |= !report(
        "shortest paths",
        shortest_paths_union(&network.graph, &network.ticket_pairs()),
    );

    println!();
    println!("Solution 2: Greedy Steiner tree");
    let terminals = network.terminals();
    let steiner = greedy_steiner_tree(&network.graph, &terminals);
    if let Ok(tree) = &steiner {
        if !tree.connects(&terminals)? {
            tracing::warn!("steiner tree does not connect all terminals");
        }
    }
    failed |= !report("Steiner tree", steiner);

    if failed {
        process::exit(1);
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("reading network from {}", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("reading network from stdin")?;
            Ok(content)
        }
    }
}

// print the edges and cost of a result graph, return whether it was built
fn report(name: &str, result: GraphResult<Graph>) -> bool {
    let tree = match result {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{} failed: {}", name, err);
            return false;
        }
    };
    println!("Edges of {}:", name);
    println!("{}", format_edges(&tree));
    match tree.total_weight() {
        Ok(weight) => {
            println!("Total cost of {} = {}", name, weight);
            true
        }
        Err(err) => {
            eprintln!("{} failed: {}", name, err);
            false
        }
    }
}

fn format_edges(graph: &Graph) -> String {
    graph
        .adjacency()
        .flat_map(|(from, edges)| {
            edges
                .iter()
                .map(move |e| format!("{}-{}({})", from, e.to(), e.weight()))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
