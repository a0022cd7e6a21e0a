//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{LeaderboardCategory, PlayerSort, RankingKind};

use crate::ranking::DEFAULT_LEADERBOARD_SIZE;

/// Where season data comes from and how results are printed; shared by
/// every command.
#[derive(Debug, Clone, Default, Args)]
pub struct DataSourceArgs {
    /// Season feed URL (or set `SPL_DATA_URL` env var).
    #[clap(long)]
    pub url: Option<String>,

    /// Skip the live feed and use the cached (or bundled) snapshot.
    #[clap(long)]
    pub offline: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Points-based batting, bowling and all-rounder rankings.
    ///
    /// Only players with a positive score are listed.
    Rankings {
        #[clap(flatten)]
        source: DataSourceArgs,

        /// Show a single ranking (batting, bowling, allrounder).
        #[clap(long, short)]
        kind: Option<RankingKind>,

        /// Rows per ranking.
        #[clap(long, short, default_value_t = 10)]
        limit: usize,
    },

    /// League leaders by raw season totals, plus the #1 ranked players.
    Leaders {
        #[clap(flatten)]
        source: DataSourceArgs,
    },

    /// Search and sort the full player list.
    Players {
        #[clap(flatten)]
        source: DataSourceArgs,

        /// Case-insensitive substring of the player name.
        #[clap(long, short = 'n')]
        search: Option<String>,

        /// Sort field (name, batting, bowling, allrounder, runs, wickets, ...).
        #[clap(long, short, default_value_t = PlayerSort::default())]
        sort: PlayerSort,
    },

    /// Tournament summary and category leaderboards.
    Tournament {
        #[clap(flatten)]
        source: DataSourceArgs,

        /// Tournament name; defaults to the most recent tournament.
        #[clap(long = "name", short = 't')]
        name: Option<String>,

        /// Show a single category (runs, wickets, sixes, fours, highest-score, best-bowling).
        #[clap(long, short)]
        category: Option<LeaderboardCategory>,

        /// Rows per leaderboard.
        #[clap(long, short, default_value_t = DEFAULT_LEADERBOARD_SIZE)]
        limit: usize,

        /// List tournaments (most recent first) and exit.
        #[clap(long)]
        list: bool,
    },

    /// Print a match scorecard, or list a tournament's matches.
    Scorecard {
        #[clap(flatten)]
        source: DataSourceArgs,

        /// Tournament name; defaults to the most recent tournament.
        #[clap(long = "tournament", short = 't')]
        tournament: Option<String>,

        /// Match identifier. Omit to list the tournament's matches.
        match_id: Option<String>,
    },

    /// Show where the season data came from and what it contains.
    Data {
        #[clap(flatten)]
        source: DataSourceArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "spl-board",
    about = "SPL cricket league ratings and leaderboards",
    version
)]
pub struct SPL {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence.
    #[clap(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Commands,
}
