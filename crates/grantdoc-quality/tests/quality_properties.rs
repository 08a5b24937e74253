//! Property tests: scores stay in bounds and grades agree with totals.

use grantdoc_core::DocumentSection;
use grantdoc_quality::{calculate_quality_score, factors, get_grade, ScoringProfile};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn section() -> impl Strategy<Value = DocumentSection> {
    (
        prop_oneof!["company_overview", "strengths", "[a-z_]{1,12}"],
        proptest::option::of("\\PC{0,300}"),
        proptest::option::of("[ 　。、\\nあ-ん0-9０-９%円名従業員資本金です]{0,200}"),
    )
        .prop_map(|(key, ai, user)| {
            let mut section = DocumentSection::new(key.clone(), key);
            section.ai_generated_content = ai;
            section.user_edited_content = user;
            section
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn scores_are_bounded(
        sections in proptest::collection::vec(section(), 0..10),
        program in prop_oneof!["JIZOKUKA", "MONODUKURI", "UNKNOWN"],
    ) {
        let result = calculate_quality_score(&sections, &program);
        prop_assert!(result.total_score <= 100);
        for (_, value) in result.breakdown.factors() {
            prop_assert!(value <= 100);
        }
        prop_assert_eq!(result.grade, get_grade(result.total_score));
        prop_assert_eq!(result.section_scores.len(), sections.len());
        for (score, section) in result.section_scores.iter().zip(&sections) {
            prop_assert!(score.score <= 100);
            prop_assert_eq!(&score.section_key, &section.section_key);
        }
    }

    #[test]
    fn numbers_never_lower_specificity(base in "[あ-ん]{20,200}") {
        let profile = ScoringProfile::standard();
        let with_numbers = format!("{}売上を3年で20%増やす", base);
        let without = format!("{}売上を数年で大きく増やす", base);
        prop_assert!(
            factors::specificity(&with_numbers, &profile) >= factors::specificity(&without, &profile)
        );
    }

    #[test]
    fn factors_are_bounded(content in "\\PC{0,600}") {
        let profile = ScoringProfile::standard();
        let f = factors::SectionFactors::evaluate(&content, &profile);
        prop_assert!(f.completeness <= 100);
        prop_assert!(f.specificity <= 100);
        prop_assert!(f.readability <= 100);
    }
}
