//! Quality scorer
//!
//! Combines the per-section factors, the cross-section consistency pass
//! and the compliance checker's score into a weighted total.

use grantdoc_compliance::{ComplianceChecker, ComplianceReport};
use grantdoc_core::DocumentSection;

use crate::consistency;
use crate::factors::SectionFactors;
use crate::grade::Grade;
use crate::profile::{FactorWeights, ScoringProfile};
use crate::result::{DocumentAnalysis, QualityBreakdown, QualityScoreResult, SectionScore};

/// Scoring profile and compliance checker bundled for evaluation
#[derive(Debug, Clone, Default)]
pub struct QualityScorer {
    profile: ScoringProfile,
    checker: ComplianceChecker,
}

impl QualityScorer {
    pub fn new(profile: ScoringProfile, checker: ComplianceChecker) -> Self {
        Self { profile, checker }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn checker(&self) -> &ComplianceChecker {
        &self.checker
    }

    /// Quality score of a document
    pub fn score(&self, sections: &[DocumentSection], subsidy_type: &str) -> QualityScoreResult {
        self.analyze(sections, subsidy_type).quality
    }

    /// Compliance report and quality score, running the checker once
    pub fn analyze(&self, sections: &[DocumentSection], subsidy_type: &str) -> DocumentAnalysis {
        let compliance = self.checker.check(sections, subsidy_type);
        let quality = self.score_with_report(sections, subsidy_type, &compliance);
        DocumentAnalysis { compliance, quality }
    }

    /// Quality score reusing an existing compliance report of the same
    /// sections and program. A report whose section results do not line up
    /// with `sections` is recomputed.
    pub fn score_with_report(
        &self,
        sections: &[DocumentSection],
        subsidy_type: &str,
        report: &ComplianceReport,
    ) -> QualityScoreResult {
        let rechecked;
        let report = if report_matches(report, sections) {
            report
        } else {
            tracing::debug!(subsidy_type, sections = sections.len(), "compliance report out of step, rechecking");
            rechecked = self.checker.check(sections, subsidy_type);
            &rechecked
        };

        let contents: Vec<&str> = sections.iter().map(DocumentSection::effective_content).collect();
        let factors: Vec<SectionFactors> = contents
            .iter()
            .map(|c| SectionFactors::evaluate(c, &self.profile))
            .collect();

        let consistency = consistency::evaluate(&contents);
        for signal in &consistency.signals {
            tracing::trace!(kind = ?signal.kind, penalty = signal.penalty, "{}", signal.message);
        }

        let breakdown = QualityBreakdown {
            completeness: self.document_completeness(&factors, subsidy_type, report),
            specificity: mean(factors.iter().map(|f| f.specificity)),
            consistency: consistency.score,
            compliance: report.score,
            readability: mean(factors.iter().map(|f| f.readability)),
        };

        let section_scores = sections
            .iter()
            .zip(&factors)
            .zip(&report.section_results)
            .map(|((section, f), result)| {
                let section_breakdown = QualityBreakdown {
                    completeness: f.completeness,
                    specificity: f.specificity,
                    consistency: consistency.score,
                    compliance: self.checker.section_score(result),
                    readability: f.readability,
                };
                let score = weighted_total(&section_breakdown, &self.profile.weights);
                tracing::trace!(
                    section = %section.section_key,
                    completeness = f.completeness,
                    specificity = f.specificity,
                    readability = f.readability,
                    score,
                    "section scored"
                );
                SectionScore {
                    section_key: section.section_key.clone(),
                    section_title: section.section_title.clone(),
                    score,
                }
            })
            .collect();

        let total_score = weighted_total(&breakdown, &self.profile.weights);
        let grade = Grade::from_score(total_score);

        tracing::debug!(
            subsidy_type,
            profile = %self.profile.name,
            sections = sections.len(),
            total_score,
            grade = %grade,
            weakest = breakdown.weakest().0,
            "quality scored"
        );

        QualityScoreResult {
            total_score,
            grade,
            breakdown,
            section_scores,
        }
    }

    /// Mean section completeness scaled by the share of required sections
    /// present. Programs without a section set only use the mean.
    fn document_completeness(
        &self,
        factors: &[SectionFactors],
        subsidy_type: &str,
        report: &ComplianceReport,
    ) -> u32 {
        if factors.is_empty() {
            return 0;
        }
        let mean_completeness = mean(factors.iter().map(|f| f.completeness)) as f64;
        let coverage = match self.checker.catalog().get(subsidy_type) {
            Some(set) if !set.is_empty() => {
                let missing = report.missing_sections().len();
                (set.len() - missing.min(set.len())) as f64 / set.len() as f64
            }
            _ => 1.0,
        };
        (mean_completeness * coverage).round() as u32
    }
}

/// One section result per section, same keys, same order
fn report_matches(report: &ComplianceReport, sections: &[DocumentSection]) -> bool {
    report.section_results.len() == sections.len()
        && report
            .section_results
            .iter()
            .zip(sections)
            .all(|(result, section)| result.section_key == section.section_key)
}

fn mean(values: impl Iterator<Item = u32>) -> u32 {
    let (sum, count) = values.fold((0u64, 0u64), |(s, n), v| (s + v as u64, n + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}

fn weighted_total(breakdown: &QualityBreakdown, weights: &FactorWeights) -> u32 {
    let total = weights.completeness * breakdown.completeness as f64
        + weights.specificity * breakdown.specificity as f64
        + weights.consistency * breakdown.consistency as f64
        + weights.compliance * breakdown.compliance as f64
        + weights.readability * breakdown.readability as f64;
    total.round().clamp(0.0, 100.0) as u32
}
