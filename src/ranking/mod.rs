//! Ratings, rankings and leaderboards for the league.
//!
//! Everything in here is a pure function over in-memory season data:
//! no I/O, no caching, and no shared state between calls.
//!
//! - `primitives`: numeric coercion and display helpers
//! - `calculator`: batting, bowling and all-rounder points per player
//! - `rank`: competition ranking with shared ranks for ties
//! - `pipeline`: the full league ranking pass
//! - `leaders`: raw-statistic leaders and league totals
//! - `tournament`: per-tournament aggregation and category leaderboards
//! - `summary`: headline figures for one tournament
//! - `roster`: player list search and ordering
//! - `category`, `sort`: leaderboard categories, ranking kinds and sort fields

pub mod calculator;
pub mod category;
pub mod leaders;
pub mod pipeline;
pub mod primitives;
pub mod rank;
pub mod roster;
pub mod sort;
pub mod summary;
pub mod tournament;

pub use calculator::{
    calculate_allrounder_rating, calculate_batting_rating, calculate_bowling_rating,
    BattingRating, BowlingRating,
};
pub use category::{LeaderboardCategory, RankingKind};
pub use leaders::{league_totals, select_leaders, LeagueLeaders, LeagueTotals};
pub use pipeline::{compute_league_rankings, LeagueRankings, RankedPlayer, RatedPlayer};
pub use primitives::{display_string, parse_best_spell, round2, safe_number, BestSpell};
pub use rank::{assign_ranks, rank_positions, RankMap, Rankable};
pub use roster::{search_players, sort_players, sort_players_by_name};
pub use sort::PlayerSort;
pub use summary::{summarize_tournament, TournamentSummary};
pub use tournament::{
    aggregate_tournament, BowlingFigures, TournamentAggregate, TournamentLeaderboardEntry,
    DEFAULT_LEADERBOARD_SIZE,
};
