//! Raw-statistic league leaders.
//!
//! These are the "most runs / most wickets / most sixes" cards, chosen by
//! raw season totals. They are independent of the points-based rankings in
//! [`super::pipeline`].

use serde::Serialize;

use super::primitives::safe_number;
use crate::spl::types::{PlayerStatRecord, StatValue};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeagueLeaders<'a, T> {
    pub top_batter: Option<&'a T>,
    pub top_bowler: Option<&'a T>,
    pub top_six_hitter: Option<&'a T>,
    pub top_four_hitter: Option<&'a T>,
}

/// Season-wide totals across the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LeagueTotals {
    pub total_runs: f64,
    pub total_wickets: f64,
    pub total_sixes: f64,
    pub total_fours: f64,
}

/// First player holding the maximum value of `stat`; `None` for an empty
/// roster.
pub fn leader_by<T, F>(players: &[T], stat: F) -> Option<&T>
where
    T: AsRef<PlayerStatRecord>,
    F: Fn(&PlayerStatRecord) -> Option<&StatValue>,
{
    let mut best: Option<(&T, f64)> = None;
    for player in players {
        let value = safe_number(stat(player.as_ref()), 0.0);
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((player, value)),
        }
    }
    best.map(|(player, _)| player)
}

pub fn select_leaders<T>(players: &[T]) -> LeagueLeaders<'_, T>
where
    T: AsRef<PlayerStatRecord>,
{
    LeagueLeaders {
        top_batter: leader_by(players, |p| p.total_runs.as_ref()),
        top_bowler: leader_by(players, |p| p.wickets.as_ref()),
        top_six_hitter: leader_by(players, |p| p.sixes.as_ref()),
        top_four_hitter: leader_by(players, |p| p.fours.as_ref()),
    }
}

pub fn league_totals<T>(players: &[T]) -> LeagueTotals
where
    T: AsRef<PlayerStatRecord>,
{
    let mut totals = LeagueTotals::default();
    for player in players {
        let p: &PlayerStatRecord = player.as_ref();
        totals.total_runs += safe_number(p.total_runs.as_ref(), 0.0);
        totals.total_wickets += safe_number(p.wickets.as_ref(), 0.0);
        totals.total_sixes += safe_number(p.sixes.as_ref(), 0.0);
        totals.total_fours += safe_number(p.fours.as_ref(), 0.0);
    }
    totals
}
