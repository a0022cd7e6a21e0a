//! Leaderboard categories and ranking kinds.

use crate::error::SplError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Category of a per-tournament leaderboard.
///
/// Every category except [`LeaderboardCategory::BestBowling`] sorts by a
/// single counting metric, descending. Best bowling sorts by wickets
/// descending and then by runs conceded ascending.
///
/// # Examples
///
/// ```rust
/// use spl_board::LeaderboardCategory;
///
/// let cat: LeaderboardCategory = "best-bowling".parse().unwrap();
/// assert_eq!(cat, LeaderboardCategory::BestBowling);
/// assert_eq!(cat.to_string(), "best-bowling");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaderboardCategory {
    Runs,
    Wickets,
    Sixes,
    Fours,
    HighestScore,
    BestBowling,
}

impl LeaderboardCategory {
    pub const ALL: [LeaderboardCategory; 6] = [
        LeaderboardCategory::Runs,
        LeaderboardCategory::Wickets,
        LeaderboardCategory::Sixes,
        LeaderboardCategory::Fours,
        LeaderboardCategory::HighestScore,
        LeaderboardCategory::BestBowling,
    ];

    /// Human-readable heading used by the text output.
    pub fn label(&self) -> &'static str {
        match self {
            LeaderboardCategory::Runs => "Runs",
            LeaderboardCategory::Wickets => "Wickets",
            LeaderboardCategory::Sixes => "Sixes",
            LeaderboardCategory::Fours => "Fours",
            LeaderboardCategory::HighestScore => "High Score",
            LeaderboardCategory::BestBowling => "Best Bowling",
        }
    }
}

impl fmt::Display for LeaderboardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeaderboardCategory::Runs => "runs",
            LeaderboardCategory::Wickets => "wickets",
            LeaderboardCategory::Sixes => "sixes",
            LeaderboardCategory::Fours => "fours",
            LeaderboardCategory::HighestScore => "highest-score",
            LeaderboardCategory::BestBowling => "best-bowling",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LeaderboardCategory {
    type Err = SplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "runs" => Ok(LeaderboardCategory::Runs),
            "wickets" | "wkts" => Ok(LeaderboardCategory::Wickets),
            "sixes" | "6s" => Ok(LeaderboardCategory::Sixes),
            "fours" | "4s" => Ok(LeaderboardCategory::Fours),
            "highest-score" | "highestscore" | "high-score" | "hs" => {
                Ok(LeaderboardCategory::HighestScore)
            }
            "best-bowling" | "bestbowling" | "bb" => Ok(LeaderboardCategory::BestBowling),
            _ => Err(SplError::InvalidCategory {
                category: s.to_string(),
            }),
        }
    }
}

/// Which points-based ranking to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingKind {
    Batting,
    Bowling,
    Allrounder,
}

impl RankingKind {
    pub const ALL: [RankingKind; 3] = [
        RankingKind::Batting,
        RankingKind::Bowling,
        RankingKind::Allrounder,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RankingKind::Batting => "Batting",
            RankingKind::Bowling => "Bowling",
            RankingKind::Allrounder => "All-rounder",
        }
    }
}

impl fmt::Display for RankingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RankingKind::Batting => "batting",
            RankingKind::Bowling => "bowling",
            RankingKind::Allrounder => "allrounder",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RankingKind {
    type Err = SplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "batting" | "bat" => Ok(RankingKind::Batting),
            "bowling" | "bowl" => Ok(RankingKind::Bowling),
            "allrounder" | "all-rounder" | "ar" => Ok(RankingKind::Allrounder),
            _ => Err(SplError::InvalidRankingKind {
                kind: s.to_string(),
            }),
        }
    }
}
