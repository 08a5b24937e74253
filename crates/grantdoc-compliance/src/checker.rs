//! Compliance checker
//!
//! Runs every section rule over each section's effective content, then
//! applies the program completeness rule and aggregates a report.

use std::collections::HashSet;

use grantdoc_core::DocumentSection;

use crate::config::ComplianceConfig;
use crate::issue::{ComplianceIssue, RuleId, Severity};
use crate::programs::ProgramCatalog;
use crate::report::{ComplianceReport, SectionComplianceResult};
use crate::rule::{default_rules, ComplianceRule};

/// Rules, program catalog and thresholds bundled for evaluation
#[derive(Debug, Clone)]
pub struct ComplianceChecker {
    rules: Vec<ComplianceRule>,
    catalog: ProgramCatalog,
    config: ComplianceConfig,
}

impl Default for ComplianceChecker {
    fn default() -> Self {
        Self::new(ProgramCatalog::builtin(), ComplianceConfig::default())
    }
}

impl ComplianceChecker {
    /// Create a checker with the built-in rules
    pub fn new(catalog: ProgramCatalog, config: ComplianceConfig) -> Self {
        Self {
            rules: default_rules(),
            catalog,
            config,
        }
    }

    /// Append a rule, evaluated after the existing ones
    pub fn with_rule(mut self, rule: ComplianceRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    /// Issues for one section, in rule order
    pub fn check_section(&self, section: &DocumentSection) -> SectionComplianceResult {
        let content = section.effective_content();
        let issues = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(&section.section_key, content, &self.config))
            .collect();
        SectionComplianceResult::new(section.section_key.clone(), issues)
    }

    /// Per-section score on the same scale as the document score
    pub fn section_score(&self, result: &SectionComplianceResult) -> u32 {
        result.score(&self.config)
    }

    /// Check a document against the rules of `subsidy_type`
    pub fn check(&self, sections: &[DocumentSection], subsidy_type: &str) -> ComplianceReport {
        let section_results: Vec<SectionComplianceResult> =
            sections.iter().map(|s| self.check_section(s)).collect();

        let completeness = self.completeness_issues(sections, subsidy_type);

        let mut all_issues: Vec<ComplianceIssue> = section_results
            .iter()
            .flat_map(|r| r.issues.iter().cloned())
            .collect();
        all_issues.extend(completeness.iter().cloned());

        let overall_passed = completeness.is_empty() && section_results.iter().all(|r| r.passed);

        let units = sections.len() + completeness.len();
        let score = self.config.score(self.config.penalty(&all_issues), units);

        tracing::debug!(
            subsidy_type,
            sections = sections.len(),
            issues = all_issues.len(),
            missing = completeness.len(),
            score,
            passed = overall_passed,
            "compliance checked"
        );

        ComplianceReport {
            overall_passed,
            score,
            section_results,
            all_issues,
        }
    }

    /// One `section_completeness` error per required section that is absent.
    /// Programs without a section set contribute nothing.
    fn completeness_issues(&self, sections: &[DocumentSection], subsidy_type: &str) -> Vec<ComplianceIssue> {
        let Some(set) = self.catalog.get(subsidy_type) else {
            return Vec::new();
        };

        let present: HashSet<&str> = sections.iter().map(|s| s.section_key.as_str()).collect();
        set.missing(&present)
            .into_iter()
            .map(|required| {
                ComplianceIssue::new(
                    RuleId::SectionCompleteness,
                    Severity::Error,
                    format!("必須セクション「{}」がありません", required.title),
                )
                .with_section(required.key.clone())
            })
            .collect()
    }
}
