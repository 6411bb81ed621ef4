//! Human-facing labels and color buckets for normalized scores.
//!
//! Lower bounds are inclusive except for the neutral band, which starts
//! strictly above 40 for alignment and color (`> 40`).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlignmentLabel {
    #[serde(rename = "Highly Aligned")]
    HighlyAligned,
    #[serde(rename = "Aligned")]
    Aligned,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Opposed")]
    Opposed,
    #[serde(rename = "Highly Opposed")]
    HighlyOpposed,
}

impl AlignmentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentLabel::HighlyAligned => "Highly Aligned",
            AlignmentLabel::Aligned => "Aligned",
            AlignmentLabel::Neutral => "Neutral",
            AlignmentLabel::Opposed => "Opposed",
            AlignmentLabel::HighlyOpposed => "Highly Opposed",
        }
    }
}

impl fmt::Display for AlignmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SimilarityLabel {
    #[serde(rename = "Very Similar")]
    VerySimilar,
    #[serde(rename = "Similar")]
    Similar,
    #[serde(rename = "Somewhat Similar")]
    SomewhatSimilar,
    #[serde(rename = "Slightly Similar")]
    SlightlySimilar,
    #[serde(rename = "Different")]
    Different,
}

impl SimilarityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityLabel::VerySimilar => "Very Similar",
            SimilarityLabel::Similar => "Similar",
            SimilarityLabel::SomewhatSimilar => "Somewhat Similar",
            SimilarityLabel::SlightlySimilar => "Slightly Similar",
            SimilarityLabel::Different => "Different",
        }
    }
}

impl fmt::Display for SimilarityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI color bucket for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreColor {
    Success,
    Neutral,
    Danger,
}

impl ScoreColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreColor::Success => "success",
            ScoreColor::Neutral => "neutral",
            ScoreColor::Danger => "danger",
        }
    }

    /// Concrete color for this bucket in `palette`.
    pub fn resolve<'a>(&self, palette: &'a Palette) -> &'a str {
        match self {
            ScoreColor::Success => &palette.success,
            ScoreColor::Neutral => &palette.text_secondary,
            ScoreColor::Danger => &palette.danger,
        }
    }
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subset of the app theme the score colors resolve against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub success: String,
    pub text_secondary: String,
    pub danger: String,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            success: "#1E88E5".into(),
            text_secondary: "#6B7280".into(),
            danger: "#FF1F7A".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            success: "#1E88E5".into(),
            text_secondary: "#D1D5DB".into(),
            danger: "#FF1F7A".into(),
        }
    }
}

pub fn brand_score_label(score: u8) -> AlignmentLabel {
    match score {
        80.. => AlignmentLabel::HighlyAligned,
        60..=79 => AlignmentLabel::Aligned,
        41..=59 => AlignmentLabel::Neutral,
        20..=40 => AlignmentLabel::Opposed,
        _ => AlignmentLabel::HighlyOpposed,
    }
}

pub fn brand_score_color(score: u8) -> ScoreColor {
    match score {
        60.. => ScoreColor::Success,
        41..=59 => ScoreColor::Neutral,
        _ => ScoreColor::Danger,
    }
}

/// Similarity wording; the middle band is inclusive at 40.
pub fn similarity_label(score: u8) -> SimilarityLabel {
    match score {
        80.. => SimilarityLabel::VerySimilar,
        60..=79 => SimilarityLabel::Similar,
        40..=59 => SimilarityLabel::SomewhatSimilar,
        20..=39 => SimilarityLabel::SlightlySimilar,
        _ => SimilarityLabel::Different,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_boundaries() {
        assert_eq!(brand_score_label(100), AlignmentLabel::HighlyAligned);
        assert_eq!(brand_score_label(80), AlignmentLabel::HighlyAligned);
        assert_eq!(brand_score_label(79), AlignmentLabel::Aligned);
        assert_eq!(brand_score_label(60), AlignmentLabel::Aligned);
        assert_eq!(brand_score_label(59), AlignmentLabel::Neutral);
        assert_eq!(brand_score_label(41), AlignmentLabel::Neutral);
        assert_eq!(brand_score_label(40), AlignmentLabel::Opposed);
        assert_eq!(brand_score_label(20), AlignmentLabel::Opposed);
        assert_eq!(brand_score_label(19), AlignmentLabel::HighlyOpposed);
        assert_eq!(brand_score_label(0), AlignmentLabel::HighlyOpposed);
    }

    #[test]
    fn color_boundaries() {
        assert_eq!(brand_score_color(60), ScoreColor::Success);
        assert_eq!(brand_score_color(59), ScoreColor::Neutral);
        assert_eq!(brand_score_color(41), ScoreColor::Neutral);
        assert_eq!(brand_score_color(40), ScoreColor::Danger);
        assert_eq!(brand_score_color(1), ScoreColor::Danger);
    }

    #[test]
    fn similarity_boundaries() {
        assert_eq!(similarity_label(80), SimilarityLabel::VerySimilar);
        assert_eq!(similarity_label(60), SimilarityLabel::Similar);
        assert_eq!(similarity_label(40), SimilarityLabel::SomewhatSimilar);
        assert_eq!(similarity_label(39), SimilarityLabel::SlightlySimilar);
        assert_eq!(similarity_label(20), SimilarityLabel::SlightlySimilar);
        assert_eq!(similarity_label(19), SimilarityLabel::Different);
    }

    #[test]
    fn labels_display_and_serialize() {
        assert_eq!(AlignmentLabel::HighlyOpposed.to_string(), "Highly Opposed");
        assert_eq!(
            serde_json::to_string(&SimilarityLabel::VerySimilar).unwrap(),
            r#""Very Similar""#
        );
        assert_eq!(serde_json::to_string(&ScoreColor::Danger).unwrap(), r#""danger""#);
    }

    #[test]
    fn colors_resolve_against_palette() {
        let p = Palette::light();
        assert_eq!(brand_score_color(90).resolve(&p), "#1E88E5");
        assert_eq!(brand_score_color(50).resolve(&p), "#6B7280");
        assert_eq!(brand_score_color(10).resolve(&p), "#FF1F7A");
    }
}
