//! Metrics collection and output for simulation results.

use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub strategies: Vec<String>,
    pub final_scores: Vec<i32>,
    pub winners: Vec<usize>,
    pub duration_ms: f64,
    pub player_metrics: Vec<PlayerMetrics>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u8,
    pub dealer: usize,
    pub trump: Option<String>,
    pub bids: Vec<Option<u8>>,
    pub tricks_won: Vec<u8>,
    pub score_deltas: Vec<Option<i32>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: usize,
    pub strategy: String,
    pub total_score: i32,
    pub exact_bids: u32,
    pub overbids: u32,
    pub underbids: u32,
    pub exact_pct: f64,
}

/// One CSV line per game.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winners: String,
    pub scores: String,
    pub strategies: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        let join = |items: Vec<String>| items.join(";");
        Self {
            game_id: m.game_id,
            seed: m.seed,
            winners: join(m.winners.iter().map(usize::to_string).collect()),
            scores: join(m.final_scores.iter().map(i32::to_string).collect()),
            strategies: join(m.strategies.clone()),
        }
    }
}

pub fn build_game_metrics(
    game_id: u32,
    strategies: &[String],
    result: &GameResult,
    duration_ms: f64,
    level: MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));
    let ctx = &result.context;

    let player_metrics = strategies
        .iter()
        .enumerate()
        .map(|(seat, strategy)| {
            let (mut exact, mut over, mut under) = (0u32, 0u32, 0u32);
            for round in ctx.rounds() {
                let Some(bid) = round.bid(seat) else { continue };
                match bid.cmp(&round.tricks_won(seat)) {
                    std::cmp::Ordering::Equal => exact += 1,
                    std::cmp::Ordering::Greater => over += 1,
                    std::cmp::Ordering::Less => under += 1,
                }
            }
            let played = (exact + over + under).max(1);
            PlayerMetrics {
                seat,
                strategy: strategy.clone(),
                total_score: ctx.score(seat),
                exact_bids: exact,
                overbids: over,
                underbids: under,
                exact_pct: f64::from(exact) * 100.0 / f64::from(played),
            }
        })
        .collect();

    let rounds = if level == MetricsLevel::Detailed {
        ctx.rounds()
            .iter()
            .map(|round| {
                let seats = 0..ctx.player_count();
                RoundMetrics {
                    round_no: round.round_no(),
                    dealer: round.dealer(),
                    trump: round.trump_card().map(|c| c.to_string()),
                    bids: round.bids().to_vec(),
                    tricks_won: seats.clone().map(|s| round.tricks_won(s)).collect(),
                    score_deltas: seats.map(|s| round.score_delta(s)).collect(),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    GameMetrics {
        game_id,
        seed: result.seed,
        timestamp,
        strategies: strategies.to_vec(),
        final_scores: result.final_scores.clone(),
        winners: result.winners(),
        duration_ms,
        player_metrics,
        rounds,
    }
}
