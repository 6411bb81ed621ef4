// src/scoring/mod.rs
//! Scoring core: brand alignment, batch normalization and cause similarity.
//!
//! All functions here are pure and total. Degenerate input resolves to a
//! documented default instead of an error:
//! - brand scoring with no usable data -> 50
//! - similarity with an empty side -> 0
//! - degenerate normalization batches -> 50

pub mod brand;
pub mod normalize;
pub mod similarity;

pub use brand::{explain_brand, score_brand, BrandBreakdown, Contribution, Listing, Stance};
pub use normalize::{
    normalize, normalize_alignment_scores, normalize_brand_scores, normalize_scores,
    AlignedEntity, BrandScore, Normalizable,
};
pub use similarity::{overlap_confidence, shared_values, similarity};

/// Neutral score shared by the scorer and the normalizer.
pub const NEUTRAL_SCORE: u8 = 50;

/// Round half up (`floor(x + 0.5)`), so 2.5 -> 3 and -2.5 -> -2.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round and clamp into `[lo, hi]`, returning a `u8`. NaN maps to the neutral score.
#[inline]
pub(crate) fn to_score(x: f64, lo: u8, hi: u8) -> u8 {
    if x.is_nan() {
        return NEUTRAL_SCORE;
    }
    round_half_up(x).clamp(lo as f64, hi as f64) as u8
}
