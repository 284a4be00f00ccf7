use std::time::{Duration, Instant};

use clap::Parser;
use odyssee_paths::{
    graphs::{graph_factory::GraphFactory, graph_functions::random_edges, Directedness},
    search::dijkstra::{dijkstra, dijkstra_with_queue},
    utility::get_progressbar,
};
use rand::prelude::*;

/// Compares the scanning Dijkstra with the heap backed one on a random graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes of the random graph
    #[arg(long, default_value = "200")]
    number_of_nodes: u32,
    /// Number of edges of the random graph
    #[arg(long, default_value = "1000")]
    number_of_edges: u32,
    /// Largest edge weight
    #[arg(long, default_value = "100")]
    max_weight: u32,
    /// Number of benchmarks to be run.
    #[arg(short, long, default_value = "100")]
    number_of_benchmarks: u32,
    /// Seed of the random graph
    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let edges = random_edges(
        &mut rng,
        args.number_of_nodes,
        args.number_of_edges,
        args.max_weight,
    );
    let graph = GraphFactory::from_edges(&edges, Directedness::Directed);
    let nodes: Vec<_> = graph.nodes().collect();
    if nodes.is_empty() {
        println!("graph has no edges");
        return;
    }

    let mut scan_durations = Vec::new();
    let mut queue_durations = Vec::new();

    let bar = get_progressbar("Benchmarking", args.number_of_benchmarks as u64);
    for _ in 0..args.number_of_benchmarks {
        let Some(&start) = nodes.choose(&mut rng) else {
            break;
        };

        let before = Instant::now();
        let scanned = dijkstra(&graph, start, &edges);
        scan_durations.push(before.elapsed());

        let before = Instant::now();
        let queued = dijkstra_with_queue(&graph, start, &edges);
        queue_durations.push(before.elapsed());

        assert_eq!(scanned, queued, "searches from {} disagree", start);
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!(
        "Value over {} searches on {} nodes and {} edges",
        scan_durations.len(),
        graph.number_of_nodes(),
        graph.number_of_edges()
    );
    println!("Average scanning dijkstra duration is {:?}", average(&scan_durations));
    println!("Average heap dijkstra duration is {:?}", average(&queue_durations));
}

fn average(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::ZERO;
    }
    durations.iter().sum::<Duration>() / durations.len() as u32
}
