// src/config.rs
//! Configuration and input loading at the I/O boundary.
//!
//! - `ScoringConfig` (TOML): ranking thresholds + optional matrix path.
//!   Resolution: $SCORING_CONFIG_PATH -> config/scoring.toml -> defaults,
//!   then `SCORING_ALIGNED_MIN` / `SCORING_UNALIGNED_MAX` env overrides.
//! - Values matrix and cause lists from JSON or TOML files.
//!
//! Errors here are `anyhow` with path context; the scorers themselves never fail.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::model::{Cause, ValueAssociation, ValuesMatrix};
use crate::ranking::RankingConfig;

// --- env defaults & names ---
pub const DEFAULT_SCORING_CONFIG_PATH: &str = "config/scoring.toml";

pub const ENV_SCORING_CONFIG_PATH: &str = "SCORING_CONFIG_PATH";
pub const ENV_ALIGNED_MIN: &str = "SCORING_ALIGNED_MIN";
pub const ENV_UNALIGNED_MAX: &str = "SCORING_UNALIGNED_MAX";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub ranking: RankingConfig,
    /// Where the values matrix lives (JSON or TOML). Optional.
    pub matrix_path: Option<PathBuf>,
}

impl ScoringConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: ScoringConfig = toml::from_str(s)?;
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading scoring config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing scoring config {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $SCORING_CONFIG_PATH (must exist)
    /// 2) config/scoring.toml
    /// 3) built-in defaults
    ///
    /// `.env` is read first when present.
    pub fn load_default() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut cfg = if let Ok(p) = std::env::var(ENV_SCORING_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_SCORING_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
            info!(path = %pb.display(), "scoring config from env");
            Self::load_from(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_SCORING_CONFIG_PATH);
            if default_p.exists() {
                info!(path = %default_p.display(), "scoring config from default path");
                Self::load_from(&default_p)?
            } else {
                Self::default()
            }
        };

        cfg.apply_env_overrides();
        Ok(cfg)
    }

    /// Threshold overrides from env; invalid values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = parse_score_env(std::env::var(ENV_ALIGNED_MIN).ok()) {
            self.ranking.aligned_min = v;
        }
        if let Some(v) = parse_score_env(std::env::var(ENV_UNALIGNED_MAX).ok()) {
            self.ranking.unaligned_max = v;
        }
        self.sanitize();
    }

    fn sanitize(&mut self) {
        let r = &mut self.ranking;
        r.aligned_min = r.aligned_min.min(100);
        r.unaligned_max = r.unaligned_max.min(100);
        if r.unaligned_max > r.aligned_min {
            // swap to keep a valid interval
            std::mem::swap(&mut r.aligned_min, &mut r.unaligned_max);
        }
    }

    /// Load the matrix named by `matrix_path`, if any.
    pub fn load_matrix(&self) -> Result<Option<ValuesMatrix>> {
        self.matrix_path
            .as_deref()
            .map(load_matrix_from)
            .transpose()
    }
}

// parse optional integer env and clamp to <0..=100>
fn parse_score_env(raw: Option<String>) -> Option<u8> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map(|v| v.clamp(0, 100) as u8)
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Load a values matrix. Supports JSON (`{"id": {"support": [...], "oppose": [...]}}`)
/// or TOML (`[id]` tables with the same keys).
pub fn load_matrix_from(path: &Path) -> Result<ValuesMatrix> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading values matrix from {}", path.display()))?;
    let matrix = parse_matrix(&content, &extension_of(path))
        .with_context(|| format!("parsing values matrix {}", path.display()))?;
    info!(path = %path.display(), values = matrix.len(), "values matrix loaded");
    Ok(matrix)
}

pub fn parse_matrix(s: &str, hint_ext: &str) -> Result<ValuesMatrix> {
    type Raw = HashMap<String, ValueAssociation>;
    let try_toml = hint_ext == "toml";
    if try_toml {
        if let Ok(v) = toml::from_str::<Raw>(s) {
            return Ok(v.into());
        }
    }
    let json_err = match serde_json::from_str::<Raw>(s) {
        Ok(v) => return Ok(v.into()),
        Err(e) => e,
    };
    if !try_toml {
        if let Ok(v) = toml::from_str::<Raw>(s) {
            return Ok(v.into());
        }
    }
    Err(json_err).context("unsupported values matrix format")
}

/// Load a user's causes. JSON array, or TOML with a `causes` array of tables.
pub fn load_causes_from(path: &Path) -> Result<Vec<Cause>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading causes from {}", path.display()))?;
    parse_causes(&content, &extension_of(path))
        .with_context(|| format!("parsing causes {}", path.display()))
}

pub fn parse_causes(s: &str, hint_ext: &str) -> Result<Vec<Cause>> {
    #[derive(Deserialize)]
    struct TomlCauses {
        causes: Vec<Cause>,
    }
    if hint_ext == "toml" {
        let v: TomlCauses = toml::from_str(s)?;
        return Ok(v.causes);
    }
    Ok(serde_json::from_str(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CauseKind;
    use std::{env, fs};

    #[test]
    fn toml_config_with_partial_ranking() {
        let cfg = ScoringConfig::from_toml_str(
            r#"
matrix_path = "data/values.json"

[ranking]
aligned_min = 70
"#,
        )
        .unwrap();
        assert_eq!(cfg.ranking.aligned_min, 70);
        assert_eq!(cfg.ranking.unaligned_max, 40);
        assert_eq!(cfg.ranking.top_n, 10);
        assert_eq!(cfg.matrix_path, Some(PathBuf::from("data/values.json")));
    }

    #[test]
    fn inverted_thresholds_are_swapped() {
        let cfg = ScoringConfig::from_toml_str(
            r#"
[ranking]
aligned_min = 30
unaligned_max = 70
"#,
        )
        .unwrap();
        assert_eq!(cfg.ranking.aligned_min, 70);
        assert_eq!(cfg.ranking.unaligned_max, 30);
    }

    #[test]
    fn score_env_parsing() {
        assert_eq!(parse_score_env(Some(" 65 ".into())), Some(65));
        assert_eq!(parse_score_env(Some("250".into())), Some(100));
        assert_eq!(parse_score_env(Some("-3".into())), Some(0));
        assert_eq!(parse_score_env(Some("abc".into())), None);
        assert_eq!(parse_score_env(None), None);
    }

    #[test]
    fn matrix_parses_json_and_toml() {
        let json = r#"{"eco":{"support":["Acme"],"oppose":["Oilco"]}}"#;
        let m = parse_matrix(json, "json").unwrap();
        assert_eq!(m.get("eco").unwrap().support.position("acme"), Some(0));

        let toml = r#"
[eco]
support = ["Acme", "Patagonia"]

[labor]
oppose = ["Megamart"]
"#;
        let m = parse_matrix(toml, "toml").unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.get("eco").unwrap().support.position("patagonia"), Some(1));
        assert!(m.get("labor").unwrap().support.is_empty());

        // no hint: falls through JSON to TOML
        assert_eq!(parse_matrix(toml, "").unwrap().len(), 2);
        let err = parse_matrix("not a matrix [", "json").unwrap_err();
        assert!(err.to_string().contains("unsupported values matrix format"));
        // underlying parser error is kept in the chain
        assert!(err.chain().count() >= 2);
        assert!(err.root_cause().is::<serde_json::Error>());
    }

    #[test]
    fn causes_parse_json_and_toml() {
        let json = r#"[{"id":"eco","type":"support","weight":2},{"id":"guns","type":"avoid"}]"#;
        let c = parse_causes(json, "json").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].weight, 2.0);
        assert_eq!(c[1].kind, CauseKind::Avoid);
        assert_eq!(c[1].weight, 1.0);

        let toml = r#"
[[causes]]
id = "eco"
type = "support"
"#;
        let c = parse_causes(toml, "toml").unwrap();
        assert_eq!(c[0].id, "eco");

        let toml_inf = r#"
[[causes]]
id = "eco"
type = "support"
weight = inf
"#;
        assert_eq!(parse_causes(toml_inf, "toml").unwrap()[0].weight, 1.0);
    }

    #[serial_test::serial]
    #[test]
    fn default_uses_env_then_fallbacks() {
        // Isolate CWD so the repo's own config/ is not picked up.
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();

        env::remove_var(ENV_SCORING_CONFIG_PATH);
        env::remove_var(ENV_ALIGNED_MIN);
        env::remove_var(ENV_UNALIGNED_MAX);

        // Nothing on disk -> defaults
        let c = ScoringConfig::load_default().unwrap();
        assert_eq!(c, ScoringConfig::default());

        // Fallback TOML in ./config/
        let cfg_dir = tmp.path().join("config");
        fs::create_dir_all(&cfg_dir).unwrap();
        fs::write(cfg_dir.join("scoring.toml"), "[ranking]\ntop_n = 3\n").unwrap();
        assert_eq!(ScoringConfig::load_default().unwrap().ranking.top_n, 3);

        // Env path wins
        let p_env = tmp.path().join("other.toml");
        fs::write(&p_env, "[ranking]\ntop_n = 7\n").unwrap();
        env::set_var(ENV_SCORING_CONFIG_PATH, p_env.display().to_string());
        assert_eq!(ScoringConfig::load_default().unwrap().ranking.top_n, 7);

        // Threshold override
        env::set_var(ENV_ALIGNED_MIN, "75");
        assert_eq!(ScoringConfig::load_default().unwrap().ranking.aligned_min, 75);
        env::remove_var(ENV_ALIGNED_MIN);

        // Missing env path is an error
        env::set_var(ENV_SCORING_CONFIG_PATH, tmp.path().join("nope.toml").display().to_string());
        assert!(ScoringConfig::load_default().is_err());
        env::remove_var(ENV_SCORING_CONFIG_PATH);

        env::set_current_dir(&old).unwrap();
    }
}
