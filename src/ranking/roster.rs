//! Player list search and ordering.

use std::cmp::Ordering;

use super::category::RankingKind;
use super::pipeline::RankedPlayer;
use super::primitives::safe_number;
use super::sort::PlayerSort;
use crate::spl::types::PlayerStatRecord;

/// Copy of `players` ordered by name, ignoring case.
pub fn sort_players_by_name<T>(players: &[T]) -> Vec<T>
where
    T: AsRef<PlayerStatRecord> + Clone,
{
    let mut sorted = players.to_vec();
    sorted.sort_by_cached_key(|p| p.as_ref().name.to_uppercase());
    sorted
}

/// Players whose name contains `query`, ignoring case. A blank query
/// matches everyone.
pub fn search_players<'a>(players: &'a [RankedPlayer], query: &str) -> Vec<&'a RankedPlayer> {
    let query = query.trim().to_lowercase();
    players
        .iter()
        .filter(|p| query.is_empty() || p.name().to_lowercase().contains(&query))
        .collect()
}

/// Value a player is ordered by under `sort`. Not meaningful for
/// [`PlayerSort::Name`].
pub fn sort_value(player: &RankedPlayer, sort: PlayerSort) -> f64 {
    let record = player.record();
    match sort {
        PlayerSort::Name => 0.0,
        PlayerSort::Batting => player.points(RankingKind::Batting),
        PlayerSort::Bowling => player.points(RankingKind::Bowling),
        PlayerSort::Allrounder => player.points(RankingKind::Allrounder),
        PlayerSort::Runs => safe_number(record.total_runs.as_ref(), 0.0),
        PlayerSort::Wickets => safe_number(record.wickets.as_ref(), 0.0),
        PlayerSort::Sixes => safe_number(record.sixes.as_ref(), 0.0),
        PlayerSort::Fours => safe_number(record.fours.as_ref(), 0.0),
        PlayerSort::HighestScore => safe_number(record.highest_score.as_ref(), 0.0),
        PlayerSort::Matches => safe_number(record.matches.as_ref(), 0.0),
        PlayerSort::Average => player.rated.batting_average,
        PlayerSort::StrikeRate => player.rated.batting_strike_rate,
        PlayerSort::Economy => player.rated.bowling_economy,
    }
}

/// Order a player list in place. Names ascend; every numeric field
/// descends. Ties keep their current order.
pub fn sort_players(players: &mut [&RankedPlayer], sort: PlayerSort) {
    match sort {
        PlayerSort::Name => players.sort_by_cached_key(|p| p.name().to_lowercase()),
        _ => players.sort_by(|a, b| {
            sort_value(b, sort)
                .partial_cmp(&sort_value(a, sort))
                .unwrap_or(Ordering::Equal)
        }),
    }
}
