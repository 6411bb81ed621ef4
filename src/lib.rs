// src/lib.rs
// Public library surface for integration tests (and reuse by the app backend).

pub mod config;
pub mod labels;
pub mod logging;
pub mod matrix_reload;
pub mod model;
pub mod ranking;

// Scoring core: brand alignment, median-centered normalization, similarity
pub mod scoring;

// ---- Re-exports for stable public API ----
pub use crate::config::{load_causes_from, load_matrix_from, ScoringConfig};
pub use crate::labels::{
    brand_score_color, brand_score_label, similarity_label, AlignmentLabel, Palette, ScoreColor,
    SimilarityLabel,
};
pub use crate::matrix_reload::HotReloadMatrix;
pub use crate::model::{Cause, CauseCategory, CauseKind, ValueAssociation, ValuesMatrix};
pub use crate::ranking::{rank_brands, rank_by_similarity, Ranking, RankingConfig};
pub use crate::scoring::{
    explain_brand, normalize, normalize_alignment_scores, normalize_brand_scores,
    normalize_scores, score_brand, similarity, AlignedEntity, BrandBreakdown, BrandScore,
    Normalizable,
};
