use super::types::AnalysisContext;
use anyhow::Context;
use std::path::Path;

/// Load an [`AnalysisContext`] from a JSON or YAML file.
///
/// The format is chosen by extension: `.yaml` / `.yml` is YAML, anything else
/// is parsed as JSON.
pub fn load_context(path: &Path) -> anyhow::Result<AnalysisContext> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read analysis context: {}", path.display()))?;
    let is_yaml = path
        .extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false);
    parse_context(&content, is_yaml)
        .with_context(|| format!("Failed to parse analysis context: {}", path.display()))
}

/// Parse an [`AnalysisContext`] from an in-memory document.
pub fn parse_context(content: &str, is_yaml: bool) -> anyhow::Result<AnalysisContext> {
    let ctx = if is_yaml {
        serde_yaml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::context::Insight;
    use std::fs;

    #[test]
    fn test_parse_mixed_insight_shapes() {
        let json = r#"{
            "trend": { "title": "Review tools", "whyTrending": "AI boom" },
            "analysis": {
                "main_pain": "reviews are scattered",
                "key_pain_points": [
                    "no single inbox",
                    { "title": "manual tagging", "description": "hours per week", "severity": "high" },
                    { "pain": "no sentiment trend" }
                ],
                "targetAudience": "support leads"
            },
            "unknown_block": { "ignored": true }
        }"#;
        let ctx = parse_context(json, false).unwrap();
        assert_eq!(ctx.trend.why_trending.as_deref(), Some("AI boom"));
        assert_eq!(
            ctx.pain_points(),
            vec!["no single inbox", "manual tagging", "no sentiment trend"]
        );
        assert!(matches!(
            ctx.analysis.key_pain_points[1],
            Insight::Detailed { .. }
        ));
        assert_eq!(ctx.audience(), Some("support leads"));
        assert!(ctx.product_spec.is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "trend:\n  title: Cost calculator\npitch:\n  company_name: PriceWise\n  tagline: Know your bill\n";
        let ctx = parse_context(yaml, true).unwrap();
        assert_eq!(ctx.title(), "Cost calculator");
        assert_eq!(ctx.company_name(), Some("PriceWise"));
    }

    #[test]
    fn test_missing_trend_parses_with_empty_title() {
        let ctx = parse_context("{}", false).unwrap();
        assert_eq!(ctx.title(), "");
    }

    #[test]
    fn test_load_context_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_context(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));

        let good = dir.path().join("ctx.yml");
        fs::write(&good, "trend:\n  title: Ok\n").unwrap();
        assert_eq!(load_context(&good).unwrap().title(), "Ok");
    }

    #[test]
    fn test_loose_competitor_and_insight_shapes_load() {
        let json = r#"{
            "trend": { "title": "Notes" },
            "analysis": {
                "key_pain_points": [
                    { "description": "slow sync" },
                    { "severity": "low" }
                ]
            },
            "competition": {
                "competitors": [
                    "Notion",
                    { "url": "https://x.io" },
                    { "name": "Obsidian", "weakness": "no web app" }
                ]
            }
        }"#;
        let ctx = parse_context(json, false).unwrap();
        assert_eq!(ctx.pain_points(), vec!["slow sync"]);

        let competitors = &ctx.competition.competitors;
        assert_eq!(competitors.len(), 3);
        assert_eq!(competitors[0].name, "Notion");
        assert_eq!(competitors[0].url, None);
        assert_eq!(competitors[1].name, "");
        assert_eq!(competitors[1].url.as_deref(), Some("https://x.io"));
        assert_eq!(competitors[2].weakness.as_deref(), Some("no web app"));

        let issues = crate::validator::validate_context(&ctx);
        assert!(issues.iter().any(|i| i.kind == "unnamed_competitor"));
        assert!(crate::validator::ensure_valid(&issues).is_ok());
    }
}
