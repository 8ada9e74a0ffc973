//! Metrics collection and output for simulated matches.

use serde::Serialize;
use truco::domain::{Resolution, RoundSummary};
use truco::{GameConfig, Team, TrucoResponder, TrucoState};

use crate::simulator::MatchResult;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: MatchConfig,
    pub result: MatchResultMetrics,
    pub rounds: Vec<RoundMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub agent: String,
    pub opponent: String,
    pub team_size: usize,
    pub target_points: u32,
    pub truco_responder: TrucoResponder,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    /// 1 or 2.
    pub winner: u8,
    pub team1_score: u32,
    pub team2_score: u32,
    pub rounds: usize,
    pub truco_rejections: usize,
    pub learner_steps: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: usize,
    pub starting_seat: usize,
    pub winner: u8,
    pub team1_points: u32,
    pub team2_points: u32,
    pub truco_state: TrucoState,
    pub resolution: Resolution,
}

/// Build metrics from a finished match.
pub fn build_match_metrics(
    match_id: u32,
    seed: u64,
    names: (&str, &str),
    config: &GameConfig,
    total_matches: u32,
    result: &MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds = result
        .rounds
        .iter()
        .enumerate()
        .map(|(i, round)| build_round_metrics(i + 1, round))
        .collect();

    MatchMetrics {
        match_id,
        seed,
        timestamp,
        config: MatchConfig {
            agent: names.0.to_string(),
            opponent: names.1.to_string(),
            team_size: config.team_size,
            target_points: config.target_points,
            truco_responder: config.truco_responder,
            total_matches,
        },
        result: MatchResultMetrics {
            winner: result.winner.index(),
            team1_score: result.scores.team1,
            team2_score: result.scores.team2,
            rounds: result.rounds.len(),
            truco_rejections: result.truco_rejections(),
            learner_steps: result.learner_steps,
            duration_ms,
        },
        rounds,
    }
}

fn build_round_metrics(round_no: usize, round: &RoundSummary) -> RoundMetrics {
    RoundMetrics {
        round_no,
        starting_seat: round.starting_seat,
        winner: round.winner.index(),
        team1_points: round.points.team1,
        team2_points: round.points.team2,
        truco_state: round.truco_state,
        resolution: round.resolution,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub winner: u8,
    pub team1_score: u32,
    pub team2_score: u32,
    pub rounds: usize,
    pub truco_rejections: usize,
    pub agent: String,
    pub opponent: String,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        CsvSummaryRow {
            match_id: metrics.match_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            team1_score: metrics.result.team1_score,
            team2_score: metrics.result.team2_score,
            rounds: metrics.result.rounds,
            truco_rejections: metrics.result.truco_rejections,
            agent: metrics.config.agent.clone(),
            opponent: metrics.config.opponent.clone(),
        }
    }
}

/// Aggregate over every completed match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub matches: usize,
    pub team1_wins: usize,
    pub team1_win_rate: f64,
    pub avg_team1_points: f64,
    pub avg_team2_points: f64,
    pub avg_rounds: f64,
}

impl Summary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let matches = results.len();
        let team1_wins = results.iter().filter(|r| r.winner == Team::One).count();
        let avg = |total: f64| {
            if matches == 0 {
                0.0
            } else {
                total / matches as f64
            }
        };
        Summary {
            matches,
            team1_wins,
            team1_win_rate: avg(team1_wins as f64) * 100.0,
            avg_team1_points: avg(results.iter().map(|r| r.scores.team1 as f64).sum()),
            avg_team2_points: avg(results.iter().map(|r| r.scores.team2 as f64).sum()),
            avg_rounds: avg(results.iter().map(|r| r.rounds.len() as f64).sum()),
        }
    }
}
