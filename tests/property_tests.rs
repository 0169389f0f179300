#![allow(clippy::unwrap_used, clippy::expect_used)]

use mvpgen::classifier::score_all;
use mvpgen::escape::{escape_for_literal, unescaped_backticks};
use mvpgen::{classify, generate_mvp, AnalysisContext, ArchetypeId};
use proptest::prelude::*;

// Printable ASCII plus the characters that matter to JS literals and a few
// Cyrillic letters so keyword stems can show up.
const TEXT: &str = "[ -~\n\r\u{2028}абвгдеиклмнорстуя]{0,60}";

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn escaped_text_never_closes_a_template_literal(raw in TEXT) {
        let literal = format!("`{}`", escape_for_literal(&raw));
        prop_assert_eq!(unescaped_backticks(&literal), 2);
        prop_assert!(!literal.contains('\n'));
    }

    #[test]
    fn generated_pages_stay_balanced(title in TEXT, pain in TEXT) {
        prop_assume!(!title.trim().is_empty());
        let ctx = AnalysisContext::from_title(title.as_str()).with_main_pain(pain.as_str());
        for archetype in ArchetypeId::ALL {
            let project = generate_mvp(&ctx, Some(archetype)).unwrap();
            for (path, content) in &project.files {
                if path.ends_with(".ts") || path.ends_with(".tsx") {
                    prop_assert_eq!(unescaped_backticks(content) % 2, 0, "{}", path);
                }
            }
            let manifest: Result<serde_json::Value, _> =
                serde_json::from_str(&project.files["package.json"]);
            prop_assert!(manifest.is_ok());
        }
    }

    #[test]
    fn classification_is_total(title in TEXT, pain in TEXT) {
        let ctx = AnalysisContext::from_title(title.as_str()).with_main_pain(pain.as_str());
        let classification = classify(&ctx);
        prop_assert!(ArchetypeId::ALL.contains(&classification.archetype));
        prop_assert!(classification.confidence <= 100);
        if score_all(&ctx).iter().all(|s| s.score < 2) {
            prop_assert_eq!(classification.archetype, ArchetypeId::LandingWaitlist);
        }
    }
}
