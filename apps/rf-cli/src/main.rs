use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rf_graph::Graph;
use rf_project::{NetworkDef, ProjectError};
use rf_solver::{Route, SearchConfig, SolverError, find_path_with, find_paths, shortest_path_tree};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rf-cli")]
#[command(about = "RouteFlow CLI - least-cost routes over weighted networks", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the least-cost route between two nodes
    Route {
        /// Path to the network file (.yaml, .yml or .json)
        network_path: PathBuf,
        /// Start node
        source: String,
        /// Destination node
        target: String,
        /// Print the route as JSON
        #[arg(long)]
        json: bool,
        /// Abort after this many frontier pops
        #[arg(long)]
        max_pops: Option<usize>,
    },
    /// Print the cost to every reachable node from a source
    Tree {
        /// Path to the network file
        network_path: PathBuf,
        /// Start node
        source: String,
    },
    /// Run every query stored in the network file
    Queries {
        /// Path to the network file
        network_path: PathBuf,
    },
    /// Validate network file syntax and structure
    Validate {
        /// Path to the network file
        network_path: PathBuf,
    },
    /// List the nodes of a network with their degree
    Nodes {
        /// Path to the network file
        network_path: PathBuf,
    },
    /// Route over the built-in intercity network
    Demo {
        #[arg(long, default_value = "Kazan")]
        source: String,
        #[arg(long, default_value = "Perm")]
        target: String,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {total} queries failed")]
    QueriesFailed { failed: usize, total: usize },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Route {
            network_path,
            source,
            target,
            json,
            max_pops,
        } => {
            let config = SearchConfig {
                max_pops,
                ..SearchConfig::default()
            };
            cmd_route(&network_path, &source, &target, json, &config)
        }
        Commands::Tree {
            network_path,
            source,
        } => cmd_tree(&network_path, &source),
        Commands::Queries { network_path } => cmd_queries(&network_path),
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Nodes { network_path } => cmd_nodes(&network_path),
        Commands::Demo { source, target } => cmd_demo(&source, &target),
    }
}

/// `RUST_LOG`-style directives when given and valid, else the `-v` level.
fn log_filter(verbose: u8, env: Option<&str>) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| {
            EnvFilter::new(match verbose {
                0 => "warn",
                1 => "debug",
                _ => "trace",
            })
        })
}

fn load_graph(network_path: &Path) -> CliResult<(NetworkDef, Graph)> {
    let network = rf_project::load(network_path)?;
    let graph = network.build_graph()?;
    tracing::info!(
        name = %network.name,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "network ready"
    );
    Ok((network, graph))
}

fn cmd_route(
    network_path: &Path,
    source: &str,
    target: &str,
    json: bool,
    config: &SearchConfig,
) -> CliResult<()> {
    let (_network, graph) = load_graph(network_path)?;

    let start = Instant::now();
    let route = find_path_with(&graph, source, target, config)?;
    tracing::debug!(elapsed_us = start.elapsed().as_micros() as u64, "route found");

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print_route(&graph, &route);
    }
    Ok(())
}

fn cmd_tree(network_path: &Path, source: &str) -> CliResult<()> {
    let (_network, graph) = load_graph(network_path)?;
    let tree = shortest_path_tree(&graph, source, &SearchConfig::default())?;

    println!("Costs from {}:", tree.source());
    for (name, cost) in tree.reachable() {
        match tree.predecessor(name) {
            Some(prev) => println!("  {:<20} {:>12}  via {}", name, cost, prev),
            None => println!("  {:<20} {:>12}", name, cost),
        }
    }

    let unreachable = graph.node_count() - tree.reachable().len();
    if unreachable > 0 {
        println!("  ({} unreachable)", unreachable);
    }
    Ok(())
}

fn cmd_queries(network_path: &Path) -> CliResult<()> {
    let (network, graph) = load_graph(network_path)?;
    let pairs = network.query_pairs();

    if pairs.is_empty() {
        println!("No queries in network");
        return Ok(());
    }

    let results = find_paths(&graph, &pairs);
    let mut failed = 0;
    for ((source, target), result) in pairs.iter().zip(results) {
        match result {
            Ok(route) => println!("✓ {} -> {}: {}", source, target, route),
            Err(e) => {
                failed += 1;
                println!("✗ {} -> {}: {}", source, target, e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::QueriesFailed {
            failed,
            total: pairs.len(),
        });
    }
    Ok(())
}

fn cmd_validate(network_path: &Path) -> CliResult<()> {
    println!("Validating network: {}", network_path.display());
    let (_network, graph) = load_graph(network_path)?;
    println!(
        "✓ Network is valid ({} nodes, {} edges)",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

fn cmd_nodes(network_path: &Path) -> CliResult<()> {
    let (network, graph) = load_graph(network_path)?;

    if graph.is_empty() {
        println!("No nodes in network");
        return Ok(());
    }

    println!("Nodes in {}:", network.name);
    for name in graph.node_names() {
        let degree = graph.node_id(name).map_or(0, |id| graph.degree(id));
        println!("  {} ({} connections)", name, degree);
    }
    Ok(())
}

fn cmd_demo(source: &str, target: &str) -> CliResult<()> {
    let network = rf_project::reference_network();
    let graph = network.build_graph()?;
    let route = find_path_with(&graph, source, target, &SearchConfig::default())?;
    print_route(&graph, &route);
    Ok(())
}

fn print_route(graph: &Graph, route: &Route) {
    println!("{}", route);
    for leg in route.legs(graph) {
        println!("  {:<20} -> {:<20} {:>10}", leg.from, leg.to, leg.cost);
    }
    println!("  Total: {}", route.cost);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn verbosity_sets_default_level() {
        assert_eq!(log_filter(0, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(1, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(5, None).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn rust_log_overrides_verbosity() {
        assert_eq!(
            log_filter(0, Some("trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
        assert_eq!(
            log_filter(2, Some("info")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn invalid_rust_log_falls_back() {
        assert_eq!(
            log_filter(1, Some("rf_solver=loud")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn cli_parses_route_flags() {
        let cli = Cli::try_parse_from([
            "rf-cli", "-vv", "route", "net.yaml", "Kazan", "Perm", "--max-pops", "10",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Route {
                max_pops: Some(10),
                json: false,
                ..
            }
        ));
    }
}
