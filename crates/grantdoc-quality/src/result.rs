//! Quality score output types

use grantdoc_compliance::ComplianceReport;
use serde::{Deserialize, Serialize};

use crate::grade::Grade;

/// Factor sub-scores, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QualityBreakdown {
    pub completeness: u32,
    pub specificity: u32,
    pub consistency: u32,
    pub compliance: u32,
    pub readability: u32,
}

impl QualityBreakdown {
    pub fn factors(&self) -> [(&'static str, u32); 5] {
        [
            ("completeness", self.completeness),
            ("specificity", self.specificity),
            ("consistency", self.consistency),
            ("compliance", self.compliance),
            ("readability", self.readability),
        ]
    }

    /// Lowest-scoring factor, first in declaration order on ties
    pub fn weakest(&self) -> (&'static str, u32) {
        self.factors()
            .into_iter()
            .fold(("completeness", u32::MAX), |min, f| if f.1 < min.1 { f } else { min })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScore {
    pub section_key: String,
    pub section_title: String,
    /// 0-100
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScoreResult {
    /// 0-100
    pub total_score: u32,
    pub grade: Grade,
    pub breakdown: QualityBreakdown,
    /// One entry per input section, in input order
    pub section_scores: Vec<SectionScore>,
}

/// Compliance report and quality score from one pass over a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub compliance: ComplianceReport,
    pub quality: QualityScoreResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weakest_factor() {
        let breakdown = QualityBreakdown {
            completeness: 52,
            specificity: 100,
            consistency: 85,
            compliance: 40,
            readability: 90,
        };
        assert_eq!(breakdown.weakest(), ("compliance", 40));
    }

    #[test]
    fn test_weakest_prefers_first_on_ties() {
        assert_eq!(QualityBreakdown::default().weakest(), ("completeness", 0));
        let breakdown = QualityBreakdown {
            completeness: 80,
            specificity: 60,
            consistency: 100,
            compliance: 60,
            readability: 70,
        };
        assert_eq!(breakdown.weakest().0, "specificity");
    }
}
