//! # Model
//! Typed inputs for the scorers: user causes and the global values matrix.
//!
//! - `Cause` carries a required `weight`, defaulted to 1.0 once at
//!   construction/deserialization (missing, `null`, `0`, NaN and infinities all
//!   count as "unset").
//! - `ValuesMatrix` lowercases every brand name once and indexes each list as
//!   `name -> rank`, so lookups during scoring are plain hash hits.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Default weight of a cause when none (or a falsy one) is given.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Whether the user wants to support or avoid a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CauseKind {
    Support,
    Avoid,
}

/// Informational grouping of a value. Never read by the scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseCategory {
    SocialIssue,
    Religion,
    Ideology,
    Corporation,
    Nation,
    Organization,
    Person,
}

/// One value preference held by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cause {
    /// Value identifier (key into the `ValuesMatrix`).
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CauseCategory>,
    #[serde(rename = "type")]
    pub kind: CauseKind,
    #[serde(default = "default_weight", deserialize_with = "deserialize_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

fn deserialize_weight<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(de)?;
    Ok(normalize_weight(raw.unwrap_or(0.0)))
}

/// Zero and non-finite weights fall back to the default; anything else is kept.
pub fn normalize_weight(w: f64) -> f64 {
    if w == 0.0 || !w.is_finite() {
        DEFAULT_WEIGHT
    } else {
        w
    }
}

impl Cause {
    pub fn new(id: impl Into<String>, kind: CauseKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: None,
            kind,
            weight: DEFAULT_WEIGHT,
        }
    }

    pub fn support(id: impl Into<String>) -> Self {
        Self::new(id, CauseKind::Support)
    }

    pub fn avoid(id: impl Into<String>) -> Self {
        Self::new(id, CauseKind::Avoid)
    }

    pub fn weighted(mut self, w: f64) -> Self {
        self.weight = normalize_weight(w);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, c: CauseCategory) -> Self {
        self.category = Some(c);
        self
    }
}

/// Raw per-value association lists as stored upstream.
/// Position 0 is the strongest association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueAssociation {
    #[serde(default)]
    pub support: Vec<String>,
    #[serde(default)]
    pub oppose: Vec<String>,
}

impl ValueAssociation {
    pub fn new<S, O>(support: S, oppose: O) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            support: support.into_iter().map(Into::into).collect(),
            oppose: oppose.into_iter().map(Into::into).collect(),
        }
    }
}

/// Single case-folding step shared by brand names and list entries.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// One association list indexed by folded name.
#[derive(Debug, Clone, Default)]
pub struct RankList {
    ranks: HashMap<String, usize>,
    len: usize,
}

impl RankList {
    fn from_names(names: &[String]) -> Self {
        let mut ranks = HashMap::with_capacity(names.len());
        for (i, n) in names.iter().enumerate() {
            // First occurrence wins, like a linear scan would.
            ranks.entry(fold_name(n)).or_insert(i);
        }
        Self {
            ranks,
            len: names.len(),
        }
    }

    /// Rank of an already-folded name.
    pub fn position(&self, folded: &str) -> Option<usize> {
        self.ranks.get(folded).copied()
    }

    /// Length of the original list (duplicates included).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discount for a given rank: 1.0 at index 0 down to ~0.51 at the last index.
    /// Single-entry lists always weigh 1.0.
    pub fn position_weight(&self, index: usize) -> f64 {
        if self.len > 1 {
            1.0 - (index as f64 / self.len as f64) * 0.49
        } else {
            1.0
        }
    }
}

/// Indexed support/oppose lists for one value.
#[derive(Debug, Clone, Default)]
pub struct ValueRanks {
    pub support: RankList,
    pub oppose: RankList,
}

impl From<&ValueAssociation> for ValueRanks {
    fn from(a: &ValueAssociation) -> Self {
        Self {
            support: RankList::from_names(&a.support),
            oppose: RankList::from_names(&a.oppose),
        }
    }
}

/// Mapping value id -> indexed association lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HashMap<String, ValueAssociation>")]
pub struct ValuesMatrix {
    values: HashMap<String, ValueRanks>,
}

impl ValuesMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value_id: impl Into<String>, assoc: &ValueAssociation) {
        self.values.insert(value_id.into(), ValueRanks::from(assoc));
    }

    /// Builder-style insert, handy in tests and fixtures.
    pub fn with_value(mut self, value_id: impl Into<String>, assoc: ValueAssociation) -> Self {
        self.insert(value_id, &assoc);
        self
    }

    pub fn get(&self, value_id: &str) -> Option<&ValueRanks> {
        self.values.get(value_id)
    }

    pub fn contains(&self, value_id: &str) -> bool {
        self.values.contains_key(value_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value_ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl From<HashMap<String, ValueAssociation>> for ValuesMatrix {
    fn from(raw: HashMap<String, ValueAssociation>) -> Self {
        let values = raw
            .into_iter()
            .map(|(id, a)| (id, ValueRanks::from(&a)))
            .collect();
        Self { values }
    }
}

impl FromIterator<(String, ValueAssociation)> for ValuesMatrix {
    fn from_iter<I: IntoIterator<Item = (String, ValueAssociation)>>(iter: I) -> Self {
        let mut m = Self::new();
        for (id, a) in iter {
            m.insert(id, &a);
        }
        m
    }
}
