//! Export gate
//!
//! Decides whether a scored document may be exported and produces a
//! verdict (OK, WARN, BLOCK) with the checks behind it.

use serde::{Deserialize, Serialize};

use crate::result::DocumentAnalysis;

/// Single gate check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Ok,
    Warn,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportVerdict {
    Ok,
    Warn,
    Block,
}

/// Gate decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDecision {
    pub allowed: bool,
    pub verdict: ExportVerdict,
    /// Messages of the failing checks
    pub reasons: Vec<String>,
    pub checks: Vec<Check>,
}

/// Export thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportGate {
    pub min_total_score: u32,
    pub require_compliance_pass: bool,
}

impl Default for ExportGate {
    fn default() -> Self {
        Self::standard()
    }
}

impl ExportGate {
    /// Grade D or better and no compliance errors
    pub fn standard() -> Self {
        Self {
            min_total_score: 60,
            require_compliance_pass: true,
        }
    }

    /// Grade B or better and no compliance errors
    pub fn strict() -> Self {
        Self {
            min_total_score: 80,
            require_compliance_pass: true,
        }
    }

    /// Get gate by name
    pub fn for_mode(mode: &str) -> Self {
        match mode {
            "strict" => Self::strict(),
            _ => Self::standard(),
        }
    }

    pub fn evaluate(&self, analysis: &DocumentAnalysis) -> ExportDecision {
        let quality = &analysis.quality;
        let compliance = &analysis.compliance;
        let mut checks = Vec::new();

        // === Score ===
        if quality.total_score < self.min_total_score {
            checks.push(Check {
                name: "total_score".to_string(),
                status: CheckStatus::Fail,
                message: format!(
                    "品質スコア {} が基準 {} を下回っています",
                    quality.total_score, self.min_total_score
                ),
            });
        } else {
            checks.push(Check {
                name: "total_score".to_string(),
                status: CheckStatus::Ok,
                message: format!("品質スコア {}（{}）", quality.total_score, quality.grade),
            });
        }

        // === Compliance ===
        let errors = compliance.errors().count();
        let warnings = compliance.warnings().count();
        if !compliance.overall_passed {
            checks.push(Check {
                name: "compliance".to_string(),
                status: if self.require_compliance_pass {
                    CheckStatus::Fail
                } else {
                    CheckStatus::Warn
                },
                message: format!("要件チェックでエラーが {} 件あります", errors),
            });
        } else if warnings > 0 {
            checks.push(Check {
                name: "compliance".to_string(),
                status: CheckStatus::Warn,
                message: format!("要件チェックで警告が {} 件あります", warnings),
            });
        } else {
            checks.push(Check {
                name: "compliance".to_string(),
                status: CheckStatus::Ok,
                message: compliance.summary(),
            });
        }

        let reasons: Vec<String> = checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
            .map(|c| c.message.clone())
            .collect();
        let allowed = reasons.is_empty();
        let verdict = if !allowed {
            ExportVerdict::Block
        } else if checks.iter().any(|c| c.status == CheckStatus::Warn) {
            ExportVerdict::Warn
        } else {
            ExportVerdict::Ok
        };

        tracing::debug!(
            allowed,
            verdict = ?verdict,
            total_score = quality.total_score,
            "export gate evaluated"
        );

        ExportDecision {
            allowed,
            verdict,
            reasons,
            checks,
        }
    }
}
