//! League-wide rating and ranking pass.
//!
//! [`compute_league_rankings`] rates every player, ranks the whole roster
//! three times (batting, bowling, all-rounder) and returns the ranked
//! players along with a sorted view per ranking. Nothing is cached: every
//! refresh of the season data runs the full pass again.

use serde::Serialize;
use tracing::debug;

use super::calculator::{
    calculate_allrounder_rating, calculate_batting_rating, calculate_bowling_rating,
};
use super::category::RankingKind;
use super::rank::{descending_order, rank_positions, Rankable};
use crate::spl::ids::RankKey;
use crate::spl::types::PlayerStatRecord;


/// Keys written next to the flattened record in JSON output. A feed field
/// with one of these names is dropped so the computed value is the only one.
const DERIVED_KEYS: [&str; 12] = [
    "batting_points",
    "batting_average",
    "batting_strike_rate",
    "bowling_points",
    "bowling_economy",
    "bowling_strike_rate",
    "bowling_overs",
    "allrounder_points",
    "batting_rank",
    "bowling_rank",
    "allrounder_rank",
    "image_url",
];

/// A player record plus the derived rating fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedPlayer {
    #[serde(flatten)]
    pub record: PlayerStatRecord,
    pub batting_points: f64,
    pub batting_average: f64,
    pub batting_strike_rate: f64,
    pub bowling_points: f64,
    pub bowling_economy: f64,
    pub bowling_strike_rate: f64,
    pub bowling_overs: f64,
    pub allrounder_points: f64,
}

impl RatedPlayer {
    /// Rate a single player from its own record.
    pub fn from_record(record: &PlayerStatRecord) -> Self {
        let batting = calculate_batting_rating(record);
        let bowling = calculate_bowling_rating(record);
        let allrounder_points = calculate_allrounder_rating(batting.points, bowling.points);

        let mut record = record.clone();
        for key in DERIVED_KEYS {
            record.extra.remove(key);
        }

        Self {
            record,
            batting_points: batting.points,
            batting_average: batting.average,
            batting_strike_rate: batting.strike_rate,
            bowling_points: bowling.points,
            bowling_economy: bowling.economy,
            bowling_strike_rate: bowling.strike_rate,
            bowling_overs: bowling.overs,
            allrounder_points,
        }
    }

    pub fn points(&self, kind: RankingKind) -> f64 {
        match kind {
            RankingKind::Batting => self.batting_points,
            RankingKind::Bowling => self.bowling_points,
            RankingKind::Allrounder => self.allrounder_points,
        }
    }
}

impl Rankable for RatedPlayer {
    fn rank_key(&self) -> RankKey {
        self.record.rank_key()
    }
}

/// A rated player with its position in each league ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    #[serde(flatten)]
    pub rated: RatedPlayer,
    pub batting_rank: Option<u32>,
    pub bowling_rank: Option<u32>,
    pub allrounder_rank: Option<u32>,
}

impl RankedPlayer {
    pub fn record(&self) -> &PlayerStatRecord {
        &self.rated.record
    }

    pub fn name(&self) -> &str {
        &self.rated.record.name
    }

    pub fn points(&self, kind: RankingKind) -> f64 {
        self.rated.points(kind)
    }

    pub fn rank(&self, kind: RankingKind) -> Option<u32> {
        match kind {
            RankingKind::Batting => self.batting_rank,
            RankingKind::Bowling => self.bowling_rank,
            RankingKind::Allrounder => self.allrounder_rank,
        }
    }
}

impl Rankable for RankedPlayer {
    fn rank_key(&self) -> RankKey {
        self.rated.rank_key()
    }
}

impl AsRef<PlayerStatRecord> for RankedPlayer {
    fn as_ref(&self) -> &PlayerStatRecord {
        self.record()
    }
}

impl AsRef<PlayerStatRecord> for RatedPlayer {
    fn as_ref(&self) -> &PlayerStatRecord {
        &self.record
    }
}

/// Output of one ranking pass over the roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeagueRankings {
    /// Players in input order with all three ranks attached.
    pub ranked_players: Vec<RankedPlayer>,
    pub top_batter: Option<RankedPlayer>,
    pub top_bowler: Option<RankedPlayer>,
    pub top_allrounder: Option<RankedPlayer>,
    pub batting_sorted: Vec<RankedPlayer>,
    pub bowling_sorted: Vec<RankedPlayer>,
    pub allrounder_sorted: Vec<RankedPlayer>,
}

impl LeagueRankings {
    pub fn sorted(&self, kind: RankingKind) -> &[RankedPlayer] {
        match kind {
            RankingKind::Batting => &self.batting_sorted,
            RankingKind::Bowling => &self.bowling_sorted,
            RankingKind::Allrounder => &self.allrounder_sorted,
        }
    }

    pub fn top(&self, kind: RankingKind) -> Option<&RankedPlayer> {
        match kind {
            RankingKind::Batting => self.top_batter.as_ref(),
            RankingKind::Bowling => self.top_bowler.as_ref(),
            RankingKind::Allrounder => self.top_allrounder.as_ref(),
        }
    }

    /// The sorted view restricted to players with a positive score, as shown
    /// on the ranking boards.
    pub fn leaderboard(&self, kind: RankingKind) -> Vec<&RankedPlayer> {
        self.sorted(kind)
            .iter()
            .filter(|p| p.points(kind) > 0.0)
            .collect()
    }
}

fn sorted_view(players: &[RankedPlayer], kind: RankingKind) -> Vec<RankedPlayer> {
    let scores: Vec<f64> = players
        .iter()
        .map(|p| {
            let s = p.points(kind);
            if s.is_finite() {
                s
            } else {
                0.0
            }
        })
        .collect();
    descending_order(&scores)
        .into_iter()
        .map(|idx| players[idx].clone())
        .collect()
}

/// Rate and rank the whole roster.
///
/// Ranks are relative to exactly the players passed in. Players are
/// matched to their ranks by position within this call, so records that
/// share an identifier (or lack one and share a name) still each get
/// their own rank.
pub fn compute_league_rankings(players: &[PlayerStatRecord]) -> LeagueRankings {
    let rated: Vec<RatedPlayer> = players.iter().map(RatedPlayer::from_record).collect();

    let batting_ranks = rank_positions(&rated, |p| p.batting_points, false);
    let bowling_ranks = rank_positions(&rated, |p| p.bowling_points, false);
    let allrounder_ranks = rank_positions(&rated, |p| p.allrounder_points, true);

    let ranked_players: Vec<RankedPlayer> = rated
        .into_iter()
        .enumerate()
        .map(|(idx, rated)| RankedPlayer {
            rated,
            batting_rank: batting_ranks[idx],
            bowling_rank: bowling_ranks[idx],
            allrounder_rank: allrounder_ranks[idx],
        })
        .collect();

    let batting_sorted = sorted_view(&ranked_players, RankingKind::Batting);
    let bowling_sorted = sorted_view(&ranked_players, RankingKind::Bowling);
    let allrounder_sorted = sorted_view(&ranked_players, RankingKind::Allrounder);

    let first_positive = |sorted: &[RankedPlayer], kind: RankingKind| {
        sorted.iter().find(|p| p.points(kind) > 0.0).cloned()
    };

    let rankings = LeagueRankings {
        top_batter: first_positive(&batting_sorted, RankingKind::Batting),
        top_bowler: first_positive(&bowling_sorted, RankingKind::Bowling),
        top_allrounder: first_positive(&allrounder_sorted, RankingKind::Allrounder),
        ranked_players,
        batting_sorted,
        bowling_sorted,
        allrounder_sorted,
    };

    debug!(
        players = rankings.ranked_players.len(),
        allrounders = rankings.leaderboard(RankingKind::Allrounder).len(),
        "computed league rankings"
    );

    rankings
}
