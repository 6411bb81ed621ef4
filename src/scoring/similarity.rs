//! Cause-set similarity between two users (or a user and a business).
//!
//! Jaccard overlap of cause ids scaled to 0..100, then pulled towards 50 by
//! how many ids are actually shared. Kinds and weights are ignored.

use std::collections::HashSet;

use super::{round_half_up, to_score};
use crate::model::Cause;

/// Confidence in a Jaccard score given the absolute number of shared ids.
pub fn overlap_confidence(shared: usize) -> f64 {
    match shared {
        0 => 0.0,
        1 => 0.3,
        2 => 0.5,
        3 => 0.7,
        4 => 0.85,
        _ => 1.0,
    }
}

/// Similarity in [0, 100]. Either side empty -> 0.
pub fn similarity(a: &[Cause], b: &[Cause]) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let set_a: HashSet<&str> = a.iter().map(|c| c.id.as_str()).collect();
    let set_b: HashSet<&str> = b.iter().map(|c| c.id.as_str()).collect();

    let shared = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    let jaccard = shared as f64 / union as f64;
    let base = round_half_up(jaccard * 100.0);
    let adjusted = 50.0 + (base - 50.0) * overlap_confidence(shared);
    to_score(adjusted, 0, 100)
}

/// Ids present in both sets, in `a`'s order, without duplicates.
pub fn shared_values<'a>(a: &'a [Cause], b: &[Cause]) -> Vec<&'a str> {
    let set_b: HashSet<&str> = b.iter().map(|c| c.id.as_str()).collect();
    let mut seen = HashSet::new();
    a.iter()
        .map(|c| c.id.as_str())
        .filter(|id| set_b.contains(id) && seen.insert(*id))
        .collect()
}
