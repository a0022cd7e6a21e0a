//! SPL Cricket League Board Library
//!
//! Ratings, rankings and leaderboards for the SPL cricket league, computed
//! from the league's published season feed.
//!
//! ## Features
//!
//! - **Player Ratings**: Points-based batting, bowling and all-rounder ratings
//! - **League Rankings**: Competition ranking with shared ranks for ties
//! - **League Leaders**: Raw-statistic leaders and season totals
//! - **Tournament Leaderboards**: Per-tournament category boards and summaries
//! - **Offline Fallback**: Cached and bundled snapshots when the feed is unreachable
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spl_board::{ranking::compute_league_rankings, spl::{load_season_data, DataSource}};
//!
//! # async fn example() -> spl_board::Result<()> {
//! let season = load_season_data(&DataSource::default()).await?;
//! let rankings = compute_league_rankings(&season.data.players);
//!
//! if let Some(top) = &rankings.top_batter {
//!     println!("Top batter: {}", top.name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a different season feed:
//! ```bash
//! export SPL_DATA_URL=https://example.org/spl_data.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod ranking;
pub mod spl;

// Re-export commonly used types
pub use error::{Result, SplError};
pub use ranking::{
    compute_league_rankings, LeaderboardCategory, LeagueRankings, PlayerSort, RankedPlayer,
    RankingKind,
};
pub use spl::{PlayerId, PlayerStatRecord, RankKey, SeasonData, StatValue};

pub const DATA_URL_ENV_VAR: &str = "SPL_DATA_URL";
