//! # Analysis Context
//!
//! The input bundle produced by the upstream analysis services: a trend, the
//! pain-point analysis, community sources, competitors and a pitch. It is
//! built once (usually by [`load_context`]) and then only ever borrowed.
//!
//! The accessor methods here are the single definition of "the free text of a
//! context". The classifier and every config deriver read through them, so an
//! archetype's deriver specialises on exactly the text it was selected on.

mod load;
mod types;

pub use load::{load_context, parse_context};
pub use types::{
    Analysis, AnalysisContext, Competition, Competitor, Insight, Pitch, ProductSpec, Sources,
    Trend,
};

impl AnalysisContext {
    /// Build a context carrying only a trend title.
    pub fn from_title(title: impl Into<String>) -> Self {
        AnalysisContext {
            trend: Trend {
                title: title.into(),
                ..Trend::default()
            },
            ..AnalysisContext::default()
        }
    }

    /// Builder-style setter for `analysis.main_pain`.
    pub fn with_main_pain(mut self, pain: impl Into<String>) -> Self {
        self.analysis.main_pain = Some(pain.into());
        self
    }

    /// Builder-style setter appending to `analysis.key_pain_points`.
    pub fn with_pain_point(mut self, pain: impl Into<String>) -> Self {
        self.analysis.key_pain_points.push(Insight::Text(pain.into()));
        self
    }

    /// Trimmed trend title.
    pub fn title(&self) -> &str {
        self.trend.title.trim()
    }

    /// Main pain, if present and non-blank.
    pub fn main_pain(&self) -> Option<&str> {
        non_blank(self.analysis.main_pain.as_deref())
    }

    pub fn why_trending(&self) -> Option<&str> {
        non_blank(self.trend.why_trending.as_deref())
    }

    pub fn category(&self) -> Option<&str> {
        non_blank(self.trend.category.as_deref())
    }

    pub fn audience(&self) -> Option<&str> {
        non_blank(self.analysis.target_audience.as_deref())
    }

    pub fn company_name(&self) -> Option<&str> {
        non_blank(self.pitch.company_name.as_deref())
    }

    pub fn tagline(&self) -> Option<&str> {
        non_blank(self.pitch.tagline.as_deref())
    }

    /// Non-blank pain point headlines, in input order.
    pub fn pain_points(&self) -> Vec<&str> {
        insight_texts(&self.analysis.key_pain_points)
    }

    /// Non-blank opportunity headlines, in input order.
    pub fn opportunities(&self) -> Vec<&str> {
        insight_texts(&self.analysis.opportunities)
    }

    /// Name shown to end users: company name when pitched, else the trend title.
    pub fn display_name(&self) -> &str {
        self.company_name().unwrap_or_else(|| self.title())
    }

    /// Lowercased concatenation of main pain, pain points, trend title and
    /// why-trending, space separated. This is the text keyword rules match on.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(pain) = self.main_pain() {
            parts.push(pain);
        }
        parts.extend(self.pain_points());
        if !self.title().is_empty() {
            parts.push(self.title());
        }
        if let Some(why) = self.why_trending() {
            parts.push(why);
        }
        parts.join(" ").to_lowercase()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn insight_texts(items: &[Insight]) -> Vec<&str> {
    items
        .iter()
        .map(|i| i.text().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// True when any of `keywords` occurs as a substring of `text`.
pub(crate) fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_searchable_text_order_and_case() {
        let mut ctx = AnalysisContext::from_title("Review Radar")
            .with_main_pain("Отзывы разбросаны")
            .with_pain_point("Too MANY tabs");
        ctx.trend.why_trending = Some("SaaS boom".into());
        assert_eq!(
            ctx.searchable_text(),
            "отзывы разбросаны too many tabs review radar saas boom"
        );
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let mut ctx = AnalysisContext::from_title("  Idea  ");
        ctx.analysis.main_pain = Some("   ".into());
        ctx.analysis.key_pain_points = vec![Insight::from(""), Insight::from("real")];
        assert_eq!(ctx.title(), "Idea");
        assert_eq!(ctx.main_pain(), None);
        assert_eq!(ctx.pain_points(), vec!["real"]);
        assert_eq!(ctx.searchable_text(), "real idea");
    }

    #[test]
    fn test_display_name_prefers_company() {
        let mut ctx = AnalysisContext::from_title("Trend");
        assert_eq!(ctx.display_name(), "Trend");
        ctx.pitch.company_name = Some("Acme".into());
        assert_eq!(ctx.display_name(), "Acme");
    }

    #[test]
    fn test_insight_detail_falls_back_to_title() {
        let plain = Insight::from("slow onboarding");
        assert_eq!(plain.detail(), "slow onboarding");
        let detailed = Insight::Detailed {
            title: "churn".into(),
            description: Some("users leave after a week".into()),
            severity: None,
        };
        assert_eq!(detailed.text(), "churn");
        assert_eq!(detailed.detail(), "users leave after a week");
    }

    #[test]
    fn test_mentions_any() {
        assert!(mentions_any("читаю reddit каждый день", &["форум", "reddit"]));
        assert!(!mentions_any("nothing here", &["reddit"]));
    }
}
