//! Scoring profiles
//!
//! Factor weights and the calibration constants of each factor scorer.

use grantdoc_core::{from_yaml, GrantDocError};
use serde::{Deserialize, Serialize};

/// Relative weight of each factor in the total score; sums to 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub completeness: f64,
    pub specificity: f64,
    pub consistency: f64,
    pub compliance: f64,
    pub readability: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            completeness: 0.30,
            specificity: 0.25,
            consistency: 0.15,
            compliance: 0.20,
            readability: 0.10,
        }
    }
}

impl FactorWeights {
    fn as_array(&self) -> [f64; 5] {
        [
            self.completeness,
            self.specificity,
            self.consistency,
            self.compliance,
            self.readability,
        ]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Sentence and paragraph bounds for readability, in characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadabilityBounds {
    /// Average sentence length below this reads as terse fragments
    pub min_sentence_chars: usize,
    /// Average sentence length above this reads as dense
    pub max_sentence_chars: usize,
    /// A paragraph longer than this is a wall of text
    pub max_paragraph_chars: usize,
}

impl Default for ReadabilityBounds {
    fn default() -> Self {
        Self {
            min_sentence_chars: 12,
            max_sentence_chars: 90,
            max_paragraph_chars: 400,
        }
    }
}

/// Profile defining weights and thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    /// Profile name (ex: "standard@1.0")
    pub name: String,

    pub weights: FactorWeights,

    // === Completeness ===

    /// Characters at which a section counts as fully developed
    pub complete_chars: usize,

    // === Specificity ===

    /// Numeric claims per 100 characters for full specificity
    pub target_numeric_density: f64,

    // === Readability ===
    pub readability: ReadabilityBounds,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringProfile {
    /// Calibrated for Japanese application sections of a few hundred characters
    pub fn standard() -> Self {
        Self {
            name: "standard@1.0".to_string(),
            weights: FactorWeights::default(),
            complete_chars: 400,
            target_numeric_density: 2.0,
            readability: ReadabilityBounds::default(),
        }
    }

    /// Programs that expect long, evidence-heavy sections
    pub fn detailed() -> Self {
        Self {
            name: "detailed@1.0".to_string(),
            complete_chars: 800,
            target_numeric_density: 3.0,
            ..Self::standard()
        }
    }

    /// Get profile by name
    pub fn for_name(name: &str) -> Self {
        match name {
            "detailed" => Self::detailed(),
            _ => Self::standard(),
        }
    }

    /// Load profile from YAML; absent fields keep the standard values
    pub fn from_yaml(yaml: &str) -> Result<Self, GrantDocError> {
        let profile: Self = from_yaml(yaml)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), GrantDocError> {
        let weights = self.weights.as_array();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(GrantDocError::Config("factor weights must be non-negative".to_string()));
        }
        if (self.weights.total() - 1.0).abs() > 0.001 {
            return Err(GrantDocError::Config(format!(
                "factor weights must sum to 1.0, got {:.3}",
                self.weights.total()
            )));
        }
        if self.complete_chars == 0 {
            return Err(GrantDocError::Config("complete_chars must be positive".to_string()));
        }
        if !(self.target_numeric_density.is_finite() && self.target_numeric_density > 0.0) {
            return Err(GrantDocError::Config(
                "target_numeric_density must be positive".to_string(),
            ));
        }
        let bounds = &self.readability;
        if bounds.min_sentence_chars == 0 || bounds.min_sentence_chars >= bounds.max_sentence_chars {
            return Err(GrantDocError::Config(
                "readability sentence bounds must satisfy 0 < min < max".to_string(),
            ));
        }
        if bounds.max_paragraph_chars == 0 {
            return Err(GrantDocError::Config("max_paragraph_chars must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_weights() {
        let profile = ScoringProfile::standard();
        assert_eq!(profile.weights.completeness, 0.30);
        assert_eq!(profile.weights.readability, 0.10);
        assert!((profile.weights.total() - 1.0).abs() < 1e-9);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_detailed_profile() {
        let profile = ScoringProfile::for_name("detailed");
        assert_eq!(profile.complete_chars, 800);
        assert_eq!(profile.weights, FactorWeights::default());
        assert_eq!(ScoringProfile::for_name("other").name, "standard@1.0");
    }

    #[test]
    fn test_yaml_overrides() {
        let profile = ScoringProfile::from_yaml(
            "name: custom\ncomplete_chars: 600\nreadability:\n  max_sentence_chars: 120\n",
        )
        .unwrap();
        assert_eq!(profile.name, "custom");
        assert_eq!(profile.complete_chars, 600);
        assert_eq!(profile.readability.max_sentence_chars, 120);
        assert_eq!(profile.readability.min_sentence_chars, 12);
    }

    #[test]
    fn test_yaml_rejects_bad_weights() {
        let yaml = "weights:\n  completeness: 0.5\n  specificity: 0.5\n  consistency: 0.5\n  compliance: 0.0\n  readability: 0.0\n";
        let err = ScoringProfile::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_yaml_rejects_inverted_bounds() {
        let yaml = "readability:\n  min_sentence_chars: 100\n  max_sentence_chars: 50\n";
        assert!(ScoringProfile::from_yaml(yaml).is_err());
    }
}
