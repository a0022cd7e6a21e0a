//! Season-at-a-glance figures for a single tournament.

use serde::Serialize;

use super::primitives::safe_number;
use super::tournament::{aggregate_tournament, BowlingFigures, TournamentLeaderboardEntry};
use crate::spl::types::Match;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighestScore {
    pub runs: f64,
    pub player: String,
    /// `"Team A vs Team B"`.
    pub match_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestBowlingSpell {
    #[serde(flatten)]
    pub figures: BowlingFigures,
    pub player: String,
    pub match_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerTotal {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentSummary {
    pub total_runs: f64,
    pub total_wickets: f64,
    pub total_sixes: f64,
    pub total_fours: f64,
    pub highest_score: Option<HighestScore>,
    pub best_bowling: Option<BestBowlingSpell>,
    pub top_scorer: Option<PlayerTotal>,
    pub top_wicket_taker: Option<PlayerTotal>,
}

/// Summarise a tournament's matches. Returns `None` when there are no
/// matches at all.
///
/// The highest score only changes hands on a strictly greater innings, so
/// the earliest of several equal scores is kept. Best bowling uses the same
/// wickets-then-runs comparison as the tournament leaderboards. Top scorer
/// and top wicket-taker need a positive total.
pub fn summarize_tournament(matches: &[Match]) -> Option<TournamentSummary> {
    if matches.is_empty() {
        return None;
    }

    let mut total_runs = 0.0;
    let mut total_wickets = 0.0;
    let mut total_sixes = 0.0;
    let mut total_fours = 0.0;
    let mut highest_score: Option<HighestScore> = None;
    let mut best_bowling: Option<BestBowlingSpell> = None;

    for game in matches {
        let Some(scorecard) = &game.detailed_scorecard else {
            continue;
        };
        let label = game.label();

        for innings in scorecard.innings() {
            for batter in &innings.batting_stats {
                let runs = safe_number(batter.runs.as_ref(), 0.0);
                total_runs += runs;
                total_fours += safe_number(batter.fours.as_ref(), 0.0);
                total_sixes += safe_number(batter.sixes.as_ref(), 0.0);

                let current = highest_score.as_ref().map_or(0.0, |h| h.runs);
                if runs > current {
                    highest_score = Some(HighestScore {
                        runs,
                        player: batter.name.clone(),
                        match_label: label.clone(),
                    });
                }
            }

            for bowler in &innings.bowling_stats {
                let figures = BowlingFigures {
                    wickets: safe_number(bowler.wickets.as_ref(), 0.0),
                    runs: safe_number(bowler.runs.as_ref(), 0.0),
                };
                total_wickets += figures.wickets;

                let improves = match &best_bowling {
                    Some(best) => figures.is_better_than(&best.figures),
                    None => figures.wickets > 0.0,
                };
                if improves {
                    best_bowling = Some(BestBowlingSpell {
                        figures,
                        player: bowler.name.clone(),
                        match_label: label.clone(),
                    });
                }
            }
        }
    }

    let aggregate = aggregate_tournament(matches);
    let top_by = |metric: fn(&TournamentLeaderboardEntry) -> f64| {
        aggregate
            .iter()
            .filter(|entry| metric(entry) > 0.0)
            .fold(None::<&TournamentLeaderboardEntry>, |best, entry| match best {
                Some(b) if metric(entry) <= metric(b) => Some(b),
                _ => Some(entry),
            })
            .map(|entry| PlayerTotal {
                name: entry.name.clone(),
                value: metric(entry),
            })
    };

    Some(TournamentSummary {
        total_runs,
        total_wickets,
        total_sixes,
        total_fours,
        highest_score,
        best_bowling,
        top_scorer: top_by(|e| e.runs),
        top_wicket_taker: top_by(|e| e.wickets),
    })
}
