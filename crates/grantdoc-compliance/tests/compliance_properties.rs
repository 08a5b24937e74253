//! Property tests: compliance never panics and stays in bounds.

use grantdoc_compliance::{check_compliance, Severity};
use grantdoc_core::DocumentSection;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn section() -> impl Strategy<Value = DocumentSection> {
    (
        prop_oneof!["company_overview", "strengths", "efficiency", "[a-z_]{1,12}"],
        proptest::option::of("\\PC{0,200}"),
        proptest::option::of("[ 　あ-ん0-9\\[\\]要入力:]{0,120}"),
    )
        .prop_map(|(key, ai, final_content)| {
            let mut section = DocumentSection::new(key.clone(), key);
            section.ai_generated_content = ai;
            section.final_content = final_content;
            section
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn score_is_bounded(
        sections in proptest::collection::vec(section(), 0..10),
        program in prop_oneof!["JIZOKUKA", "MONODUKURI", "UNKNOWN", "\\PC{0,8}"],
    ) {
        let report = check_compliance(&sections, &program);
        prop_assert!(report.score <= 100);
        prop_assert_eq!(report.section_results.len(), sections.len());
    }

    #[test]
    fn passed_matches_error_issues(sections in proptest::collection::vec(section(), 0..10)) {
        let report = check_compliance(&sections, "UNKNOWN");
        for result in &report.section_results {
            let has_error = result.issues.iter().any(|i| i.severity == Severity::Error);
            prop_assert_eq!(result.passed, !has_error);
        }
        prop_assert_eq!(
            report.overall_passed,
            report.section_results.iter().all(|r| r.passed)
        );
        let flattened: usize = report.section_results.iter().map(|r| r.issues.len()).sum();
        prop_assert_eq!(flattened, report.all_issues.len());
    }
}
