//! AI Simulator CLI - runs complete games between computer strategies.
//!
//! Every game goes through the real engine without a display, and results
//! are written as JSONL plus a CSV summary for offline comparison.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat};
use wizard::players::registry::by_name;

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Headless Wizard games between computer strategies")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Strategy per seat, comma separated (3 to 6 seats)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "computer,computer,computer,computer"
    )]
    seats: Vec<String>,

    /// Base seed; game N uses seed + N - 1
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    for name in &args.seats {
        if by_name(name).is_none() {
            return Err(format!("Unknown strategy: {name}").into());
        }
    }
    info!(games = args.games, seats = ?args.seats, "Starting simulator");

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let simulator = Simulator::new(args.seats.clone());

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_num - 1)),
            None => rand::random(),
        };

        match simulator.simulate_game(game_seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    simulator.strategies(),
                    &result,
                    duration_ms,
                    args.metrics_level,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                info!(game = game_num, seed = game_seed, scores = ?result.final_scores, "Game completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game = game_num, seed = game_seed, "Game failed: {}", e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, simulator.strategies(), errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    strategies: &[String],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let seats = strategies.len();
    let mut wins = vec![0u32; seats];
    let mut total_scores = vec![0i64; seats];
    let mut max_scores = vec![i32::MIN; seats];
    let mut min_scores = vec![i32::MAX; seats];

    for result in results {
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += i64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
        // Shared top scores all count as wins
        for seat in result.winners() {
            wins[seat] += 1;
        }
    }

    println!("\n=== Results by Seat ===");
    for (seat, strategy) in strategies.iter().enumerate() {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat, strategy, avg_score, min_scores[seat], max_scores[seat], wins[seat], win_rate
        );
    }
}
