//! Per-section compliance rules
//!
//! Each rule is an independent predicate over a section's effective
//! content. Rules never see each other's results, so a section can collect
//! several issues at once.

use grantdoc_core::text::{char_len, has_digit, is_blank};
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::ComplianceConfig;
use crate::issue::{ComplianceIssue, RuleId, Severity};

lazy_static! {
    /// Unresolved input marker left by generation, ex: `[要入力: 従業員数]`, `【要入力】`
    static ref PLACEHOLDER: Regex =
        Regex::new(r"[\[［【]要入力(?:[:：][^\]］】]*)?[\]］】]").unwrap();
}

/// Returns the issue message when the rule fires
pub type RuleCheck = fn(content: &str, config: &ComplianceConfig) -> Option<String>;

/// A single section rule
#[derive(Clone)]
pub struct ComplianceRule {
    pub id: RuleId,
    pub severity: Severity,
    check: RuleCheck,
}

impl ComplianceRule {
    pub fn new(id: RuleId, severity: Severity, check: RuleCheck) -> Self {
        Self { id, severity, check }
    }

    /// Evaluate the rule against one section's effective content
    pub fn evaluate(
        &self,
        section_key: &str,
        content: &str,
        config: &ComplianceConfig,
    ) -> Option<ComplianceIssue> {
        let message = (self.check)(content, config)?;
        tracing::trace!(rule = %self.id, section = section_key, "rule fired");
        Some(ComplianceIssue::new(self.id.clone(), self.severity, message).with_section(section_key))
    }
}

impl std::fmt::Debug for ComplianceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ComplianceRule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .finish()
    }
}

/// The built-in rule set, in evaluation order
pub fn default_rules() -> Vec<ComplianceRule> {
    vec![
        ComplianceRule::new(RuleId::ContentRequired, Severity::Error, content_required),
        ComplianceRule::new(RuleId::CharCount, Severity::Error, char_count),
        ComplianceRule::new(RuleId::PlaceholderDetection, Severity::Error, placeholder_detection),
        ComplianceRule::new(RuleId::NumericPresence, Severity::Warning, numeric_presence),
    ]
}

fn content_required(content: &str, _config: &ComplianceConfig) -> Option<String> {
    is_blank(content).then(|| "内容が入力されていません".to_string())
}

fn char_count(content: &str, config: &ComplianceConfig) -> Option<String> {
    if is_blank(content) {
        return None;
    }
    let chars = char_len(content.trim());
    (chars < config.min_content_chars).then(|| {
        format!(
            "文字数が不足しています（{}文字、最低{}文字）",
            chars, config.min_content_chars
        )
    })
}

fn placeholder_detection(content: &str, _config: &ComplianceConfig) -> Option<String> {
    let found: Vec<&str> = PLACEHOLDER.find_iter(content).map(|m| m.as_str()).collect();
    if found.is_empty() {
        return None;
    }
    Some(format!("未入力のプレースホルダーが残っています: {}", found.join(", ")))
}

/// Fires alongside `content_required` on blank content
fn numeric_presence(content: &str, _config: &ComplianceConfig) -> Option<String> {
    if has_digit(content) {
        return None;
    }
    Some("具体的な数値が含まれていません".to_string())
}
