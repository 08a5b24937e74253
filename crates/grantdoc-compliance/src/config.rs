//! Compliance thresholds and score penalties

use grantdoc_core::{from_yaml, GrantDocError};
use serde::{Deserialize, Serialize};

use crate::issue::{ComplianceIssue, Severity};

/// Minimum characters (trimmed) a section needs before a reviewer can
/// assess it. 80 characters is roughly two or three Japanese sentences;
/// a one-line stub falls short.
pub const DEFAULT_MIN_CONTENT_CHARS: usize = 80;

/// Tunable thresholds for the compliance rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplianceConfig {
    /// Below this many characters `char_count` fires
    pub min_content_chars: usize,
    /// Penalty units per error
    pub error_penalty: f64,
    /// Penalty units per warning
    pub warning_penalty: f64,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            min_content_chars: DEFAULT_MIN_CONTENT_CHARS,
            error_penalty: 1.0,
            warning_penalty: 0.25,
        }
    }
}

impl ComplianceConfig {
    /// Load from YAML; absent fields keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, GrantDocError> {
        let config: Self = from_yaml(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GrantDocError> {
        let valid = self.error_penalty.is_finite()
            && self.error_penalty > 0.0
            && self.warning_penalty.is_finite()
            && self.warning_penalty >= 0.0;
        if !valid {
            return Err(GrantDocError::Config(
                "penalties must be positive for errors and non-negative for warnings".to_string(),
            ));
        }
        if self.warning_penalty > self.error_penalty {
            return Err(GrantDocError::Config(
                "warning penalty cannot exceed error penalty".to_string(),
            ));
        }
        Ok(())
    }

    /// Penalty units accumulated by a set of issues
    pub fn penalty(&self, issues: &[ComplianceIssue]) -> f64 {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => self.error_penalty,
                Severity::Warning => self.warning_penalty,
            })
            .sum()
    }

    /// Map a penalty spread over `units` evaluated units onto 0-100.
    ///
    /// One error per unit drives the score to 0.
    pub fn score(&self, penalty: f64, units: usize) -> u32 {
        let capacity = units.max(1) as f64 * self.error_penalty;
        let score = 100.0 * (1.0 - penalty / capacity);
        score.round().clamp(0.0, 100.0) as u32
    }
}
