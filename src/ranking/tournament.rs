//! Per-tournament aggregation over match scorecards.
//!
//! Every batting and bowling appearance in a tournament's matches is folded
//! into a running entry per player name. Leaderboards are then cut from the
//! full aggregate, one category at a time.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::category::LeaderboardCategory;
use super::primitives::safe_number;
use crate::spl::types::{BattingEntry, BowlingEntry, Match};

#[cfg(test)]
mod tests;

/// Rows shown per leaderboard unless the caller asks otherwise.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 20;

/// Wickets taken for runs conceded in a single innings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BowlingFigures {
    pub wickets: f64,
    pub runs: f64,
}

impl BowlingFigures {
    /// More wickets wins; equal wickets go to fewer runs.
    pub fn is_better_than(&self, other: &BowlingFigures) -> bool {
        self.wickets > other.wickets || (self.wickets == other.wickets && self.runs < other.runs)
    }

    /// Ordering that puts the better figure first.
    pub fn cmp_best_first(&self, other: &BowlingFigures) -> Ordering {
        other
            .wickets
            .partial_cmp(&self.wickets)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.runs.partial_cmp(&other.runs).unwrap_or(Ordering::Equal))
    }
}

impl fmt::Display for BowlingFigures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.wickets, self.runs)
    }
}

/// One player's accumulated figures within a tournament.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TournamentLeaderboardEntry {
    pub name: String,
    pub runs: f64,
    pub innings: u32,
    pub sixes: f64,
    pub fours: f64,
    pub highest_score: f64,
    pub wickets: f64,
    pub bowling_innings: u32,
    /// `None` until the player has bowled.
    pub best_bowling: Option<BowlingFigures>,
}

impl TournamentLeaderboardEntry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn add_batting(&mut self, batter: &BattingEntry) {
        let runs = safe_number(batter.runs.as_ref(), 0.0);
        self.runs += runs;
        self.innings += 1;
        self.sixes += safe_number(batter.sixes.as_ref(), 0.0);
        self.fours += safe_number(batter.fours.as_ref(), 0.0);
        if runs > self.highest_score {
            self.highest_score = runs;
        }
    }

    fn add_bowling(&mut self, bowler: &BowlingEntry) {
        let figures = BowlingFigures {
            wickets: safe_number(bowler.wickets.as_ref(), 0.0),
            runs: safe_number(bowler.runs.as_ref(), 0.0),
        };
        self.wickets += figures.wickets;
        self.bowling_innings += 1;
        match &self.best_bowling {
            Some(best) if !figures.is_better_than(best) => {}
            _ => self.best_bowling = Some(figures),
        }
    }

    /// Primary value for `category`. Best bowling reports its wicket count.
    pub fn metric(&self, category: LeaderboardCategory) -> f64 {
        match category {
            LeaderboardCategory::Runs => self.runs,
            LeaderboardCategory::Wickets => self.wickets,
            LeaderboardCategory::Sixes => self.sixes,
            LeaderboardCategory::Fours => self.fours,
            LeaderboardCategory::HighestScore => self.highest_score,
            LeaderboardCategory::BestBowling => self.best_bowling.map_or(0.0, |b| b.wickets),
        }
    }

    /// Whether the player belongs on the `category` board at all.
    pub fn qualifies(&self, category: LeaderboardCategory) -> bool {
        self.metric(category) > 0.0
    }
}

/// All entries for one tournament, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentAggregate {
    entries: Vec<TournamentLeaderboardEntry>,
    index: HashMap<String, usize>,
}

impl TournamentAggregate {
    fn entry_mut(&mut self, name: &str) -> &mut TournamentLeaderboardEntry {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.entries.push(TournamentLeaderboardEntry::new(name));
                let idx = self.entries.len() - 1;
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx]
    }

    pub fn get(&self, name: &str) -> Option<&TournamentLeaderboardEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TournamentLeaderboardEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Qualifying players for `category`, best first, capped at `limit`.
    pub fn leaderboard(
        &self,
        category: LeaderboardCategory,
        limit: usize,
    ) -> Vec<&TournamentLeaderboardEntry> {
        let mut board: Vec<&TournamentLeaderboardEntry> = self
            .entries
            .iter()
            .filter(|e| e.qualifies(category))
            .collect();

        match category {
            LeaderboardCategory::BestBowling => board.sort_by(|a, b| {
                let a = a.best_bowling.unwrap_or_default();
                let b = b.best_bowling.unwrap_or_default();
                a.cmp_best_first(&b)
            }),
            _ => board.sort_by(|a, b| {
                b.metric(category)
                    .partial_cmp(&a.metric(category))
                    .unwrap_or(Ordering::Equal)
            }),
        }

        board.truncate(limit);
        board
    }
}

/// Fold every scorecard in `matches` into per-player entries.
///
/// Matches without a detailed scorecard contribute nothing.
pub fn aggregate_tournament(matches: &[Match]) -> TournamentAggregate {
    let mut aggregate = TournamentAggregate::default();

    let scorecards = matches.iter().filter_map(|m| m.detailed_scorecard.as_ref());
    for innings in scorecards.flat_map(|s| s.innings()) {
        for batter in &innings.batting_stats {
            aggregate.entry_mut(&batter.name).add_batting(batter);
        }
        for bowler in &innings.bowling_stats {
            aggregate.entry_mut(&bowler.name).add_bowling(bowler);
        }
    }

    aggregate
}
