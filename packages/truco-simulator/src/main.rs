//! Truco simulator CLI: runs agent-vs-agent matches in memory and writes
//! per-match metrics.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use metrics::{build_match_metrics, Summary};
use output::OutputWriter;
use simulator::{MatchResult, Simulator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use truco::domain::derive_match_seed;
use truco::GameConfig;
use types::{AgentKind, OutputFormat, ResponderKind};

#[derive(Parser)]
#[command(name = "truco-simulator")]
#[command(about = "Fast in-memory Truco match simulator")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Points a team needs to win a match
    #[arg(long)]
    target_points: Option<u32>,

    /// Players per team
    #[arg(long)]
    team_size: Option<usize>,

    /// Agent playing team one (records its trajectory)
    #[arg(long, default_value = "heuristic")]
    agent: AgentKind,

    /// Agent playing team two
    #[arg(long, default_value = "random")]
    opponent: AgentKind,

    /// Base seed; each match derives its own seed from it
    #[arg(long)]
    seed: Option<u64>,

    /// Show teammates' hands to every player
    #[arg(long)]
    show_teammate_cards: bool,

    /// Who answers a truco raise
    #[arg(long)]
    truco_responder: Option<ResponderKind>,

    /// JSON game config; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

impl Args {
    /// Config file (or `TRUCO_*` env) first, then explicit flags.
    fn game_config(&self) -> Result<GameConfig, truco::DomainError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::from_env()?,
        };
        if let Some(target) = self.target_points {
            config.target_points = target;
        }
        if let Some(size) = self.team_size {
            config.team_size = size;
        }
        if self.show_teammate_cards {
            config.show_teammate_cards = true;
        }
        if let Some(kind) = self.truco_responder {
            config.truco_responder = kind.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless asked
    let default_level = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.game_config()?;
    info!(
        matches = args.matches,
        agent = args.agent.name(),
        opponent = args.opponent.name(),
        team_size = config.team_size,
        target_points = config.target_points,
        truco_responder = %config.truco_responder,
        "Starting simulator"
    );

    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;
    let simulator = Simulator::new(config.clone(), args.agent, args.opponent);
    let base_seed = config.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let mut results: Vec<MatchResult> = Vec::new();
    let mut errors = 0u32;

    for match_no in 1..=args.matches {
        let seed = derive_match_seed(base_seed, u64::from(match_no));
        let match_start = Instant::now();

        match simulator.simulate_match(seed) {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(
                    match_no,
                    seed,
                    (args.agent.name(), args.opponent.name()),
                    simulator.config(),
                    args.matches,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!(match_no, error = %e, "Failed to write metrics");
                }
                info!(
                    match_no,
                    winner = %result.winner,
                    team1 = result.scores.team1,
                    team2 = result.scores.team2,
                    "Match completed"
                );
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(match_no, seed, code = %e.code(), error = %e, "Match failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = {
        let (d, c) = output_writer.output_paths();
        (d.to_path_buf(), c.to_path_buf())
    };
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.matches);
    }

    Ok(())
}

fn print_summary(results: &[MatchResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / results.len() as u32
    );

    let summary = Summary::from_results(results);
    println!("\n=== Results ===");
    println!(
        "Team 1 wins: {}/{} ({:.1}%)",
        summary.team1_wins, summary.matches, summary.team1_win_rate
    );
    println!(
        "Average points: team1={:.1}, team2={:.1}",
        summary.avg_team1_points, summary.avg_team2_points
    );
    println!("Average rounds per match: {:.1}", summary.avg_rounds);
}
