use std::{env, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use odyssee_paths::{
    graphs::{edge::WeightedEdge, Directedness},
    network::PathNetwork,
    storage::{open_store, EdgeStore},
    utility::get_progressspinner,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Maintains a network of named locations and finds shortest paths in it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge list, `.json` or one `origin,destination,length` line per path
    #[arg(short, long, default_value = ".paths")]
    store: PathBuf,

    /// Treat every stored path as traversable in both directions
    #[arg(short, long)]
    undirected: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a path between two locations
    Add {
        origin: String,
        destination: String,
        length: u32,
        /// Also add the path from destination back to origin
        #[arg(short, long)]
        two_way: bool,
    },
    /// Remove a path, given as origin and destination or as `origin-length->destination`
    Remove {
        origin: String,
        destination: Option<String>,
    },
    /// Set a new length for an existing path
    Change {
        origin: String,
        destination: String,
        length: u32,
    },
    /// List all stored paths
    List,
    /// List locations a search can start from
    Nodes,
    /// List locations reachable from a start location
    Reachable { start: String },
    /// Find the shortest path between two locations
    Route {
        start: String,
        end: String,
        /// Print the path as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ODYSSEE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("odyssee_paths=info,warn"));

    let format = env::var("ODYSSEE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let directedness = if args.undirected {
        Directedness::Undirected
    } else {
        Directedness::Directed
    };

    debug!(store = %args.store.display(), ?directedness, "opening store");
    let mut network = PathNetwork::new(open_store(&args.store), directedness);

    let spinner = get_progressspinner("Working on paths");
    let result = run(&mut network, args.command);
    spinner.finish_and_clear();

    result.with_context(|| format!("failed on {}", args.store.display()))
}

fn run<S: EdgeStore>(network: &mut PathNetwork<S>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Add {
            origin,
            destination,
            length,
            two_way,
        } => {
            for edge in network.add_path(origin.trim(), destination.trim(), length, two_way)? {
                println!("added {}", edge);
            }
        }
        Command::Remove {
            origin,
            destination,
        } => {
            let (origin, destination) = match destination {
                Some(destination) => (origin, destination),
                None => {
                    let edge: WeightedEdge = origin.parse()?;
                    (edge.tail().to_string(), edge.head().to_string())
                }
            };
            let removed = network.remove_path(&origin, &destination)?;
            println!("removed {}", removed);
        }
        Command::Change {
            origin,
            destination,
            length,
        } => {
            let changed = network.change_path(origin.trim(), destination.trim(), length)?;
            println!("changed {}", changed);
        }
        Command::List => {
            for path in network.describe_paths()? {
                println!("{}", path);
            }
        }
        Command::Nodes => {
            for node in network.start_nodes()? {
                println!("{}", node);
            }
        }
        Command::Reachable { start } => {
            for node in network.reachable_from(&start)? {
                println!("{}", node);
            }
        }
        Command::Route { start, end, json } => {
            let path = network.shortest_path(&start, &end)?;
            if json {
                println!("{}", serde_json::to_string(&path)?);
            } else {
                println!(
                    "The shortest path between {} and {} is {} and is {} long",
                    start,
                    end,
                    path.vertices.join(" -> "),
                    path.weight
                );
            }
        }
    }

    Ok(())
}
