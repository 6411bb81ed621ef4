//! # Ranking
//! Pure list building on top of the scoring core: score a batch, normalize it,
//! then split it into aligned / unaligned views.
//!
//! No I/O. Partition thresholds come from `RankingConfig` (defaults 60 / 40,
//! top 10), which the config layer can load from TOML.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Cause, ValuesMatrix};
use crate::scoring::{
    normalize_alignment_scores, normalize_brand_scores, score_brand, similarity, AlignedEntity,
    BrandScore, Normalizable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Items scoring at least this much are "aligned".
    pub aligned_min: u8,
    /// Items scoring strictly below this are "unaligned".
    pub unaligned_max: u8,
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            aligned_min: 60,
            unaligned_max: 40,
            top_n: 10,
        }
    }
}

/// A normalized batch plus its aligned / unaligned views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking<T> {
    /// Every item, highest score first (ties keep input order).
    pub all: Vec<T>,
    /// Score >= `aligned_min`, highest first.
    pub aligned: Vec<T>,
    /// Score < `unaligned_max`, lowest first.
    pub unaligned: Vec<T>,
    #[serde(skip)]
    top_n: usize,
}

impl<T: Normalizable + Clone> Ranking<T> {
    /// Partition an already-normalized batch.
    pub fn partition(mut items: Vec<T>, cfg: &RankingConfig) -> Self {
        items.sort_by(|a, b| b.score().total_cmp(&a.score()));

        let aligned: Vec<T> = items
            .iter()
            .filter(|it| it.score() >= cfg.aligned_min as f64)
            .cloned()
            .collect();

        let mut unaligned: Vec<T> = items
            .iter()
            .filter(|it| it.score() < cfg.unaligned_max as f64)
            .cloned()
            .collect();
        unaligned.sort_by(|a, b| a.score().total_cmp(&b.score()));

        Self {
            all: items,
            aligned,
            unaligned,
            top_n: cfg.top_n,
        }
    }
}

impl<T> Ranking<T> {
    pub fn top_aligned(&self) -> &[T] {
        &self.aligned[..self.aligned.len().min(self.top_n)]
    }

    pub fn top_unaligned(&self) -> &[T] {
        &self.unaligned[..self.unaligned.len().min(self.top_n)]
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Score every brand for the user, median-normalize, partition.
pub fn rank_brands<B, I>(
    brands: I,
    causes: &[Cause],
    matrix: &ValuesMatrix,
    cfg: &RankingConfig,
) -> Ranking<BrandScore<B>>
where
    I: IntoIterator<Item = B>,
    B: AsRef<str> + Clone,
{
    let scored: Vec<BrandScore<B>> = brands
        .into_iter()
        .map(|b| {
            let s = score_brand(b.as_ref(), causes, matrix);
            BrandScore::new(b, s)
        })
        .collect();

    let ranking = Ranking::partition(normalize_brand_scores(scored), cfg);
    debug!(
        target: "ranking",
        total = ranking.all.len(),
        aligned = ranking.aligned.len(),
        unaligned = ranking.unaligned.len(),
        causes = causes.len(),
        "ranked brands"
    );
    ranking
}

/// Similarity of each entity's causes to the user's, median-normalized, partitioned.
pub fn rank_by_similarity<E, I, F>(
    entities: I,
    user_causes: &[Cause],
    causes_of: F,
    cfg: &RankingConfig,
) -> Ranking<AlignedEntity<E>>
where
    I: IntoIterator<Item = E>,
    E: Clone,
    F: Fn(&E) -> &[Cause],
{
    let scored: Vec<AlignedEntity<E>> = entities
        .into_iter()
        .map(|e| {
            let s = similarity(user_causes, causes_of(&e));
            AlignedEntity::new(e, s)
        })
        .collect();

    let ranking = Ranking::partition(normalize_alignment_scores(scored), cfg);
    debug!(
        target: "ranking",
        total = ranking.all.len(),
        aligned = ranking.aligned.len(),
        unaligned = ranking.unaligned.len(),
        "ranked by similarity"
    );
    ranking
}
