//! Grantdoc Compliance: rule-based checks against a program's structure
//!
//! Evaluates each section's effective content against an ordered rule
//! set, checks the document for the sections its grant program requires,
//! and aggregates a report with a 0-100 score.
//!
//! # Architecture
//!
//! ```text
//! sections ──► per-section rules ──► SectionComplianceResult ─┐
//!     │        (content_required, char_count,                 │
//!     │         placeholder_detection, numeric_presence)      ├──► ComplianceReport
//!     └──────► program catalog ──► section_completeness ──────┘
//! ```
//!
//! # Example
//!
//! ```
//! use grantdoc_compliance::{check_compliance, RuleId};
//!
//! let report = check_compliance(&[], "JIZOKUKA");
//! assert!(!report.overall_passed);
//! assert_eq!(report.issues_for(RuleId::SectionCompleteness).count(), 8);
//!
//! let report = check_compliance(&[], "UNKNOWN");
//! assert_eq!(report.issues_for(RuleId::SectionCompleteness).count(), 0);
//! ```

pub mod checker;
pub mod config;
pub mod issue;
pub mod programs;
pub mod report;
pub mod rule;

use grantdoc_core::DocumentSection;
use lazy_static::lazy_static;

pub use checker::ComplianceChecker;
pub use config::{ComplianceConfig, DEFAULT_MIN_CONTENT_CHARS};
pub use issue::{ComplianceIssue, RuleId, Severity};
pub use programs::{ProgramCatalog, ProgramSectionSet, RequiredSection};
pub use report::{ComplianceReport, SectionComplianceResult};
pub use rule::{default_rules, ComplianceRule, RuleCheck};

lazy_static! {
    static ref DEFAULT_CHECKER: ComplianceChecker = ComplianceChecker::default();
}

/// Check a document with the built-in rules and program catalog
pub fn check_compliance(sections: &[DocumentSection], subsidy_type: &str) -> ComplianceReport {
    DEFAULT_CHECKER.check(sections, subsidy_type)
}

/// Whether a document would pass with the built-in configuration
pub fn would_pass(sections: &[DocumentSection], subsidy_type: &str) -> bool {
    check_compliance(sections, subsidy_type).overall_passed
}
