//! Median-centered batch normalization.
//!
//! Rescales a batch so its median lands on 50:
//! - `score <= median` maps linearly from `[min, median]` onto `[1, 50]`
//! - `score >  median` maps linearly from `(median, max]` onto `(50, 99]`
//!
//! Roughly half of the batch ends up on each side of 50 however skewed the raw
//! distribution is (plain min-max scaling does not have this property).
//!
//! Not idempotent: normalizing an already-normalized batch generally moves
//! the scores again (the median of the output is not re-anchored).

use serde::{Deserialize, Serialize};

use super::{to_score, NEUTRAL_SCORE};

/// A record carrying one score that the normalizer may overwrite.
pub trait Normalizable {
    fn score(&self) -> f64;
    fn set_score(&mut self, score: u8);
}

/// `{brand, score}` call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandScore<B> {
    pub brand: B,
    pub score: u8,
}

impl<B> BrandScore<B> {
    pub fn new(brand: B, score: u8) -> Self {
        Self { brand, score }
    }
}

impl<B> Normalizable for BrandScore<B> {
    fn score(&self) -> f64 {
        self.score as f64
    }
    fn set_score(&mut self, score: u8) {
        self.score = score;
    }
}

/// `{..., alignmentScore}` call site (businesses, other users).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedEntity<E> {
    pub entity: E,
    #[serde(rename = "alignmentScore")]
    pub alignment_score: u8,
}

impl<E> AlignedEntity<E> {
    pub fn new(entity: E, alignment_score: u8) -> Self {
        Self {
            entity,
            alignment_score,
        }
    }
}

impl<E> Normalizable for AlignedEntity<E> {
    fn score(&self) -> f64 {
        self.alignment_score as f64
    }
    fn set_score(&mut self, score: u8) {
        self.alignment_score = score;
    }
}

/// Normalize a plain batch of scores. Output order matches input order.
///
/// Non-finite scores map to 50 and are left out of the batch statistics.
pub fn normalize_scores(scores: &[f64]) -> Vec<u8> {
    match scores.len() {
        0 => return Vec::new(),
        1 => return vec![NEUTRAL_SCORE],
        _ => {}
    }

    let mut sorted: Vec<f64> = scores.iter().copied().filter(|s| s.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return vec![NEUTRAL_SCORE; scores.len()];
    };

    if min == max {
        return vec![NEUTRAL_SCORE; scores.len()];
    }

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    scores
        .iter()
        .map(|&s| rescale(s, min, median, max))
        .collect()
}

fn rescale(score: f64, min: f64, median: f64, max: f64) -> u8 {
    if !score.is_finite() {
        return NEUTRAL_SCORE;
    }
    let mapped = if score <= median {
        if median == min {
            NEUTRAL_SCORE as f64
        } else {
            1.0 + (score - min) / (median - min) * 49.0
        }
    } else if max == median {
        NEUTRAL_SCORE as f64
    } else {
        50.0 + (score - median) / (max - median) * 49.0
    };
    to_score(mapped, 1, 99)
}

/// Normalize any batch of records in place of their scores, keeping order.
pub fn normalize<T: Normalizable>(mut items: Vec<T>) -> Vec<T> {
    let raw: Vec<f64> = items.iter().map(Normalizable::score).collect();
    for (item, s) in items.iter_mut().zip(normalize_scores(&raw)) {
        item.set_score(s);
    }
    items
}

pub fn normalize_brand_scores<B>(items: Vec<BrandScore<B>>) -> Vec<BrandScore<B>> {
    normalize(items)
}

pub fn normalize_alignment_scores<E>(items: Vec<AlignedEntity<E>>) -> Vec<AlignedEntity<E>> {
    normalize(items)
}
