//! End-to-end example: generate a grid, plan offline, then roll out
//! baseline policies online and compare what they paid.
//!
//! Set `RUST_LOG=debug` to see per-episode and per-search events.

use std::error::Error;

use fathom_data::{load_environment, LoaderConfig, MemoryReader};
use fathom_env::{rollout, GreedyPolicy, Policy, RandomPolicy};
use fathom_path::{Algorithm, Heuristic, Planner};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("=== Fathom Greedy Rollout Example ===\n");

    let factory = load_environment(&LoaderConfig::standalone(), &MemoryReader::new())?;
    let surface = factory.surface();
    let (start, goal) = (factory.start(), factory.goal());
    println!(
        "Surface {}x{}, start {start}, goal {goal}",
        surface.rows(),
        surface.cols()
    );

    // --- Offline planning ---
    for algorithm in [
        Algorithm::Dijkstra,
        Algorithm::AStar(Heuristic::Zero),
        Algorithm::AStar(Heuristic::Euclidean),
        Algorithm::AStar(Heuristic::Manhattan),
    ] {
        let result = Planner::new(algorithm).plan(&**surface, start, goal)?;
        println!(
            "  {:<16} cost={:>8.4}  cells={:>3}  expanded={:>4}",
            algorithm.to_string(),
            result.total_cost,
            result.len(),
            result.nodes_expanded,
        );
    }

    // --- Online rollouts ---
    println!();
    let policies: Vec<(&str, Box<dyn Policy>)> = vec![
        ("greedy", Box::new(GreedyPolicy::new(42))),
        ("random", Box::new(RandomPolicy::new(42))),
    ];
    for (name, mut policy) in policies {
        let mut world = factory.make()?;
        let summary = rollout(&mut world, policy.as_mut())?;
        println!(
            "  {name:<8} steps={:>4}  reward={:>9.4}  success={}",
            summary.steps, summary.total_reward, summary.success
        );
        println!("  {world}");
    }

    info!("done");
    Ok(())
}
