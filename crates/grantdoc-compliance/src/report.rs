//! Compliance report types

use serde::{Deserialize, Serialize};

use crate::config::ComplianceConfig;
use crate::issue::{ComplianceIssue, RuleId, Severity};

/// Rule results for one input section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionComplianceResult {
    pub section_key: String,
    /// No error-severity issue
    pub passed: bool,
    pub issues: Vec<ComplianceIssue>,
}

impl SectionComplianceResult {
    pub fn new(section_key: impl Into<String>, issues: Vec<ComplianceIssue>) -> Self {
        let passed = !issues.iter().any(ComplianceIssue::is_error);
        Self {
            section_key: section_key.into(),
            passed,
            issues,
        }
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    /// 0-100 compliance score of this section alone
    pub fn score(&self, config: &ComplianceConfig) -> u32 {
        config.score(config.penalty(&self.issues), 1)
    }
}

/// Result of checking a whole document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub overall_passed: bool,
    /// 0-100
    pub score: u32,
    /// One entry per input section, in input order
    pub section_results: Vec<SectionComplianceResult>,
    /// Section issues followed by document-level issues
    pub all_issues: Vec<ComplianceIssue>,
}

impl ComplianceReport {
    pub fn errors(&self) -> impl Iterator<Item = &ComplianceIssue> {
        self.all_issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ComplianceIssue> {
        self.all_issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn issues_for(&self, rule: RuleId) -> impl Iterator<Item = &ComplianceIssue> {
        self.all_issues.iter().filter(move |i| i.rule == rule)
    }

    /// Keys of required sections absent from the document
    pub fn missing_sections(&self) -> Vec<&str> {
        self.issues_for(RuleId::SectionCompleteness)
            .filter_map(|i| i.section_key.as_deref())
            .collect()
    }

    pub fn section(&self, section_key: &str) -> Option<&SectionComplianceResult> {
        self.section_results.iter().find(|r| r.section_key == section_key)
    }

    /// One-line summary for logs and badges
    pub fn summary(&self) -> String {
        let errors = self.errors().count();
        let warnings = self.warnings().count();
        if self.overall_passed && warnings == 0 {
            format!("PASSED (score: {})", self.score)
        } else if self.overall_passed {
            format!("PASSED with {} warnings (score: {})", warnings, self.score)
        } else {
            format!(
                "FAILED: {} errors, {} warnings (score: {})",
                errors, warnings, self.score
            )
        }
    }
}
