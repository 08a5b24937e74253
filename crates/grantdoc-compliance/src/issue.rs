//! Compliance issue types
//!
//! A rule hit carries a severity: `error` blocks a section from passing,
//! `warning` is reported but never changes `passed`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a compliance rule
///
/// Serialized as its wire name (ex: `"char_count"`). Rules added by a host
/// application use `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleId {
    ContentRequired,
    CharCount,
    PlaceholderDetection,
    NumericPresence,
    SectionCompleteness,
    Custom(String),
}

impl RuleId {
    pub fn as_str(&self) -> &str {
        match self {
            RuleId::ContentRequired => "content_required",
            RuleId::CharCount => "char_count",
            RuleId::PlaceholderDetection => "placeholder_detection",
            RuleId::NumericPresence => "numeric_presence",
            RuleId::SectionCompleteness => "section_completeness",
            RuleId::Custom(name) => name,
        }
    }
}

impl From<String> for RuleId {
    fn from(name: String) -> Self {
        match name.as_str() {
            "content_required" => RuleId::ContentRequired,
            "char_count" => RuleId::CharCount,
            "placeholder_detection" => RuleId::PlaceholderDetection,
            "numeric_presence" => RuleId::NumericPresence,
            "section_completeness" => RuleId::SectionCompleteness,
            _ => RuleId::Custom(name),
        }
    }
}

impl From<RuleId> for String {
    fn from(id: RuleId) -> Self {
        id.as_str().to_string()
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning = 1,
    Error = 2,
}

impl Severity {
    /// Should this severity fail the section?
    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    pub rule: RuleId,
    pub severity: Severity,
    pub message: String,
    /// Section the issue concerns. For `section_completeness` this is the
    /// missing required key, which has no entry in `section_results`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_key: Option<String>,
}

impl ComplianceIssue {
    pub fn new(rule: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            message: message.into(),
            section_key: None,
        }
    }

    pub fn with_section(mut self, section_key: impl Into<String>) -> Self {
        self.section_key = Some(section_key.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_blocking()
    }
}

impl fmt::Display for ComplianceIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.rule, self.message)
    }
}
