//! Competition ranking with shared ranks for ties.
//!
//! Entities are ordered by score, highest first. An entity whose score
//! equals the previous entity's shares that entity's rank; any other entity
//! takes its 1-based position, so `[50, 50, 30]` ranks as `[1, 1, 3]`.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::spl::ids::RankKey;
use crate::spl::types::PlayerStatRecord;

/// Rank per entity; `None` means unranked.
pub type RankMap = HashMap<RankKey, Option<u32>>;

/// Anything that can be ranked and looked up again by key.
pub trait Rankable {
    fn rank_key(&self) -> RankKey;
}

impl Rankable for PlayerStatRecord {
    fn rank_key(&self) -> RankKey {
        PlayerStatRecord::rank_key(self)
    }
}

/// Non-finite scores count as zero.
fn normalize_score(score: f64) -> f64 {
    if score.is_finite() {
        score
    } else {
        0.0
    }
}

/// Indices of `scores` ordered highest first. Equal scores keep their
/// input order.
pub(crate) fn descending_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });
    order
}

/// Rank every entity, returning ranks indexed by input position.
///
/// With `hide_non_positive`, entities scoring zero or less are left
/// unranked instead of being placed at the bottom.
pub fn rank_positions<T, F>(entities: &[T], score: F, hide_non_positive: bool) -> Vec<Option<u32>>
where
    F: Fn(&T) -> f64,
{
    let scores: Vec<f64> = entities.iter().map(|e| normalize_score(score(e))).collect();
    let mut ranks = vec![None; entities.len()];

    let mut last_score: Option<f64> = None;
    let mut last_rank = 1u32;

    for (position, idx) in descending_order(&scores).into_iter().enumerate() {
        let current = scores[idx];
        let position = position as u32 + 1;

        if hide_non_positive && current <= 0.0 {
            ranks[idx] = None;
        } else if last_score == Some(current) {
            ranks[idx] = Some(last_rank);
        } else {
            ranks[idx] = Some(position);
            last_rank = position;
        }
        last_score = Some(current);
    }

    ranks
}

/// Rank every entity and key the result by [`Rankable::rank_key`].
///
/// The input slice is left untouched. If two entities share a key the one
/// later in the input wins.
pub fn assign_ranks<T, F>(entities: &[T], score: F, hide_non_positive: bool) -> RankMap
where
    T: Rankable,
    F: Fn(&T) -> f64,
{
    let ranks = rank_positions(entities, score, hide_non_positive);
    entities
        .iter()
        .zip(ranks)
        .map(|(entity, rank)| (entity.rank_key(), rank))
        .collect()
}
