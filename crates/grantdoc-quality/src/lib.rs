//! Grantdoc Quality: weighted quality scoring of application documents
//!
//! Scores a document on five factors, grades the total, and decides
//! whether it may be exported.
//!
//! | Factor       | Weight | Source                                       |
//! |--------------|--------|----------------------------------------------|
//! | completeness | 30%    | section length, required-section coverage    |
//! | specificity  | 25%    | density of numeric claims                    |
//! | consistency  | 15%    | cross-section style, figures and balance     |
//! | compliance   | 20%    | `grantdoc_compliance` report score           |
//! | readability  | 10%    | sentence and paragraph length                |
//!
//! # Example
//!
//! ```
//! use grantdoc_core::DocumentSection;
//! use grantdoc_quality::{calculate_quality_score, get_grade};
//!
//! let sections = vec![DocumentSection::new("company_overview", "企業概要")
//!     .with_final_content("当社は2012年創業の菓子店で、従業員は6名である。")];
//! let result = calculate_quality_score(&sections, "JIZOKUKA");
//! assert_eq!(result.grade, get_grade(result.total_score));
//! assert_eq!(result.section_scores.len(), 1);
//! ```

pub mod consistency;
pub mod factors;
pub mod gate;
pub mod grade;
pub mod profile;
pub mod result;
pub mod scorer;

use grantdoc_core::DocumentSection;
use lazy_static::lazy_static;

pub use consistency::{ConsistencyReport, ConsistencySignal, SignalKind};
pub use factors::SectionFactors;
pub use gate::{Check, CheckStatus, ExportDecision, ExportGate, ExportVerdict};
pub use grade::{get_grade, Grade};
pub use profile::{FactorWeights, ReadabilityBounds, ScoringProfile};
pub use result::{DocumentAnalysis, QualityBreakdown, QualityScoreResult, SectionScore};
pub use scorer::QualityScorer;

lazy_static! {
    static ref DEFAULT_SCORER: QualityScorer = QualityScorer::default();
}

/// Score a document with the standard profile and built-in compliance rules
pub fn calculate_quality_score(sections: &[DocumentSection], subsidy_type: &str) -> QualityScoreResult {
    DEFAULT_SCORER.score(sections, subsidy_type)
}

/// Compliance report and quality score with the default configuration
pub fn analyze_document(sections: &[DocumentSection], subsidy_type: &str) -> DocumentAnalysis {
    DEFAULT_SCORER.analyze(sections, subsidy_type)
}

/// Whether the standard export gate lets a document through
pub fn can_export(sections: &[DocumentSection], subsidy_type: &str) -> bool {
    ExportGate::standard()
        .evaluate(&analyze_document(sections, subsidy_type))
        .allowed
}
