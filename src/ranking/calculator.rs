//! Batting, bowling and all-rounder point formulas.
//!
//! Each rating is a pure function of one player's cumulative record.
//! All-rounder points are derived from that same player's batting and
//! bowling points and nothing else.

use serde::Serialize;

use super::primitives::{parse_best_spell, round2, safe_number};
use crate::spl::types::PlayerStatRecord;


/// Batting weights: runs, average, strike rate, highest score.
const RUN_WEIGHT: f64 = 1.0;
const AVERAGE_WEIGHT: f64 = 18.0;
const BATTING_STRIKE_RATE_WEIGHT: f64 = 0.45;
const HIGHEST_SCORE_WEIGHT: f64 = 2.0;

/// Bowling weights.
const WICKET_WEIGHT: f64 = 24.0;
const BEST_SPELL_WICKET_WEIGHT: f64 = 14.0;
const BEST_SPELL_RUN_PENALTY: f64 = 0.15;
const MAIDEN_WEIGHT: f64 = 7.0;
const THREE_WICKET_HAUL_WEIGHT: f64 = 9.0;
const FOUR_WICKET_HAUL_WEIGHT: f64 = 14.0;
const FIVE_WICKET_HAUL_WEIGHT: f64 = 24.0;
const ECONOMY_PENALTY: f64 = 1.5;

const BALLS_PER_OVER: f64 = 6.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BattingRating {
    pub points: f64,
    pub average: f64,
    pub strike_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BowlingRating {
    pub points: f64,
    /// Runs conceded per six-ball over.
    pub economy: f64,
    /// Balls bowled per wicket.
    pub strike_rate: f64,
    /// Cricket notation: `3.4` is three overs and four balls.
    pub overs: f64,
}

pub fn calculate_batting_rating(p: &PlayerStatRecord) -> BattingRating {
    let runs = safe_number(p.total_runs.as_ref(), 0.0);
    let innings = safe_number(p.innings.as_ref(), 0.0);
    let not_outs = safe_number(p.not_outs.as_ref(), 0.0);
    let balls = safe_number(p.balls_faced.as_ref(), 0.0);
    let highest = safe_number(p.highest_score.as_ref(), 0.0);

    // At least one dismissal so unbeaten or unused batters still get a
    // finite average.
    let outs = (innings - not_outs).max(1.0);
    let average = runs / outs;
    let strike_rate = if balls > 0.0 {
        (runs / balls) * 100.0
    } else {
        0.0
    };

    let points = runs * RUN_WEIGHT
        + average * AVERAGE_WEIGHT
        + strike_rate * BATTING_STRIKE_RATE_WEIGHT
        + highest * HIGHEST_SCORE_WEIGHT;

    BattingRating {
        points: round2(points),
        average: round2(average),
        strike_rate: round2(strike_rate),
    }
}

/// Convert a ball count to overs notation.
pub fn balls_to_overs(balls: f64) -> f64 {
    if balls > 0.0 {
        (balls / BALLS_PER_OVER).floor() + (balls % BALLS_PER_OVER) / 10.0
    } else {
        0.0
    }
}

pub fn calculate_bowling_rating(p: &PlayerStatRecord) -> BowlingRating {
    let wickets = safe_number(p.wickets.as_ref(), 0.0);
    let balls = safe_number(p.total_balls_bowled.as_ref(), 0.0);
    let conceded = safe_number(p.total_runs_conceded.as_ref(), 0.0);
    let maidens = safe_number(p.maidens.as_ref(), 0.0);
    let three_hauls = safe_number(p.three_wicket_hauls.as_ref(), 0.0);
    let four_hauls = safe_number(p.four_wicket_hauls.as_ref(), 0.0);
    let five_hauls = safe_number(p.five_wicket_hauls.as_ref(), 0.0);

    let overs = balls_to_overs(balls);
    let economy = if balls > 0.0 {
        conceded / (balls / BALLS_PER_OVER)
    } else {
        0.0
    };
    let strike_rate = if wickets > 0.0 { balls / wickets } else { 0.0 };

    // The best spell is a bonus on top of the cumulative wicket score.
    let best = parse_best_spell(p.best_spell.as_ref());

    let points = wickets * WICKET_WEIGHT + best.wickets as f64 * BEST_SPELL_WICKET_WEIGHT
        - best.runs as f64 * BEST_SPELL_RUN_PENALTY
        + maidens * MAIDEN_WEIGHT
        + three_hauls * THREE_WICKET_HAUL_WEIGHT
        + four_hauls * FOUR_WICKET_HAUL_WEIGHT
        + five_hauls * FIVE_WICKET_HAUL_WEIGHT
        - economy * ECONOMY_PENALTY;

    BowlingRating {
        points: round2(points),
        economy: round2(economy),
        strike_rate: round2(strike_rate),
        overs,
    }
}

/// Combined rating. Zero unless the player has both a batting and a
/// bowling score.
pub fn calculate_allrounder_rating(batting_points: f64, bowling_points: f64) -> f64 {
    let contributes = |v: f64| v != 0.0 && !v.is_nan();
    if !contributes(batting_points) || !contributes(bowling_points) {
        return 0.0;
    }
    round2((batting_points * bowling_points) / 100.0)
}
