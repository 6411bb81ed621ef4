//! Brand alignment scorer.
//!
//! For every user cause whose value has matrix data, the brand either:
//! - is absent from both lists: the cause weight only grows the denominator;
//! - is listed: a position-discounted share of the weight is added or
//!   subtracted depending on cause kind and list.
//!
//! Final score = 50 + raw / max * 50, clamped to [0, 100], rounded half up.
//!
//! A brand listed in both `support` and `oppose` of one value gets both
//! adjustments, each from its own rank. That is most likely a data-quality
//! problem upstream and is reproduced literally rather than deduplicated.

use serde::Serialize;

use super::{to_score, NEUTRAL_SCORE};
use crate::model::{fold_name, normalize_weight, Cause, CauseKind, RankList, ValuesMatrix};

/// Which association list a contribution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Listing {
    Support,
    Oppose,
}

/// Whether a contribution pushed the brand towards or away from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Aligned,
    Opposed,
}

impl Stance {
    fn of(kind: CauseKind, listing: Listing) -> Self {
        match (kind, listing) {
            (CauseKind::Support, Listing::Support) | (CauseKind::Avoid, Listing::Oppose) => {
                Stance::Aligned
            }
            (CauseKind::Support, Listing::Oppose) | (CauseKind::Avoid, Listing::Support) => {
                Stance::Opposed
            }
        }
    }
}

/// One signed adjustment applied to the raw score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub value_id: String,
    pub listing: Listing,
    /// 0-based rank inside the list.
    pub position: usize,
    pub position_weight: f64,
    /// Signed amount added to the raw score.
    pub delta: f64,
    pub stance: Stance,
}

/// Score plus the evidence that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandBreakdown {
    pub score: u8,
    pub raw: f64,
    pub max_possible: f64,
    /// Causes whose value had matrix data.
    pub considered: usize,
    pub contributions: Vec<Contribution>,
}

impl BrandBreakdown {
    fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            raw: 0.0,
            max_possible: 0.0,
            considered: 0,
            contributions: Vec::new(),
        }
    }

    /// Distinct value ids with at least one contribution, in cause order.
    pub fn matching_values(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for c in &self.contributions {
            if !out.contains(&c.value_id.as_str()) {
                out.push(c.value_id.as_str());
            }
        }
        out
    }

    pub fn aligned(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions
            .iter()
            .filter(|c| c.stance == Stance::Aligned)
    }

    pub fn opposed(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions
            .iter()
            .filter(|c| c.stance == Stance::Opposed)
    }
}

/// Alignment score in [0, 100] of `brand_name` for a user holding `causes`.
pub fn score_brand(brand_name: &str, causes: &[Cause], matrix: &ValuesMatrix) -> u8 {
    explain_brand(brand_name, causes, matrix).score
}

/// Same computation as [`score_brand`], keeping every applied adjustment.
pub fn explain_brand(brand_name: &str, causes: &[Cause], matrix: &ValuesMatrix) -> BrandBreakdown {
    if brand_name.trim().is_empty() || causes.is_empty() {
        return BrandBreakdown::neutral();
    }

    let brand = fold_name(brand_name);
    let mut raw = 0.0f64;
    let mut max_possible = 0.0f64;
    let mut considered = 0usize;
    let mut contributions = Vec::new();

    for cause in causes {
        // No data for this value: silently contributes nothing.
        let Some(ranks) = matrix.get(&cause.id) else {
            continue;
        };
        considered += 1;

        let weight = normalize_weight(cause.weight);
        max_possible += weight;

        for (listing, list) in [
            (Listing::Support, &ranks.support),
            (Listing::Oppose, &ranks.oppose),
        ] {
            if let Some(c) = contribution(&brand, cause, weight, listing, list) {
                raw += c.delta;
                contributions.push(c);
            }
        }
    }

    if max_possible == 0.0 {
        return BrandBreakdown {
            considered,
            ..BrandBreakdown::neutral()
        };
    }

    let normalized = 50.0 + (raw / max_possible) * 50.0;
    BrandBreakdown {
        score: to_score(normalized, 0, 100),
        raw,
        max_possible,
        considered,
        contributions,
    }
}

fn contribution(
    brand: &str,
    cause: &Cause,
    weight: f64,
    listing: Listing,
    list: &RankList,
) -> Option<Contribution> {
    let position = list.position(brand)?;
    let position_weight = list.position_weight(position);
    let magnitude = weight * position_weight;
    let stance = Stance::of(cause.kind, listing);
    let delta = match stance {
        Stance::Aligned => magnitude,
        Stance::Opposed => -magnitude,
    };
    Some(Contribution {
        value_id: cause.id.clone(),
        listing,
        position,
        position_weight,
        delta,
        stance,
    })
}
