//! Landing + waitlist config: hero copy, three benefits and six feature cards.
//!
//! Cards have fixed icon/title slots. Slots 1-3 describe pain points, slots
//! 4-6 describe opportunities; both fall back to generic copy so the page is
//! always complete.

use crate::context::AnalysisContext;
use serde::Serialize;

pub const BENEFIT_COUNT: usize = 3;
pub const FEATURE_COUNT: usize = 6;

/// Longest pain/opportunity excerpt placed on a card or bullet.
const MAX_SNIPPET_CHARS: usize = 140;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingConfig {
    pub name: String,
    pub headline: String,
    pub subheadline: String,
    pub audience: String,
    pub benefits: Vec<String>,
    pub features: Vec<FeatureCard>,
    pub cta_label: String,
}

const FEATURE_SLOTS: [(&str, &str); FEATURE_COUNT] = [
    ("⚡", "Instant relief"),
    ("🎯", "Built for the real problem"),
    ("🧭", "Clarity at a glance"),
    ("📈", "Room to grow"),
    ("🤝", "Made with early users"),
    ("🚀", "Ships fast"),
];

const GENERIC_BENEFITS: [&str; BENEFIT_COUNT] = [
    "Get started in minutes, no setup required",
    "Early members get founder pricing",
    "Shape the roadmap with direct feedback",
];

const GENERIC_FEATURE_COPY: [&str; FEATURE_COUNT] = [
    "Removes the busywork that slows you down today.",
    "Designed around interviews with people who have this problem.",
    "Everything important on one screen, nothing you have to dig for.",
    "Starts simple and grows with your needs.",
    "Early access members decide what we build next.",
    "Weekly releases, announced to the waitlist first.",
];

/// Trim `text` to at most [`MAX_SNIPPET_CHARS`] characters on a char boundary.
pub(crate) fn snippet(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= MAX_SNIPPET_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_SNIPPET_CHARS - 1).collect();
    format!("{}…", cut.trim_end())
}

fn benefits(ctx: &AnalysisContext) -> Vec<String> {
    let mut pains: Vec<&str> = Vec::new();
    if let Some(main) = ctx.main_pain() {
        pains.push(main);
    }
    for pain in ctx.pain_points() {
        if !pains.contains(&pain) {
            pains.push(pain);
        }
    }

    let mut out: Vec<String> = pains
        .into_iter()
        .take(BENEFIT_COUNT)
        .map(|p| format!("No more: {}", snippet(p)))
        .collect();
    for generic in GENERIC_BENEFITS.iter().skip(out.len()) {
        out.push((*generic).to_string());
    }
    out
}

fn features(ctx: &AnalysisContext) -> Vec<FeatureCard> {
    let pains = ctx.pain_points();
    let opportunities = ctx.opportunities();
    FEATURE_SLOTS
        .iter()
        .enumerate()
        .map(|(idx, &(icon, title))| {
            let derived = if idx < 3 {
                pains.get(idx).map(|p| format!("Tackles {}", snippet(p)))
            } else {
                opportunities.get(idx - 3).map(|o| snippet(o))
            };
            FeatureCard {
                icon,
                title,
                description: derived.unwrap_or_else(|| GENERIC_FEATURE_COPY[idx].to_string()),
            }
        })
        .collect()
}

/// Derive the landing config for `ctx`. Never fails.
pub fn derive_config(ctx: &AnalysisContext) -> LandingConfig {
    let headline = ctx.tagline().unwrap_or_else(|| ctx.title()).to_string();
    let subheadline = match (ctx.main_pain(), ctx.why_trending()) {
        (Some(pain), _) => format!("Tired of this? {}", snippet(pain)),
        (None, Some(why)) => snippet(why),
        (None, None) => format!(
            "{} is coming soon. Join the waitlist to get early access.",
            ctx.display_name()
        ),
    };
    let audience = ctx
        .audience()
        .map(|a| format!("Built for {a}"))
        .unwrap_or_else(|| "Built for people who want this solved".to_string());

    LandingConfig {
        name: ctx.display_name().to_string(),
        headline,
        subheadline,
        audience,
        benefits: benefits(ctx),
        features: features(ctx),
        cta_label: "Join the waitlist".to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::context::Insight;

    #[test]
    fn test_title_only_is_fully_padded() {
        let cfg = derive_config(&AnalysisContext::from_title("Quiet Launch"));
        assert_eq!(cfg.headline, "Quiet Launch");
        assert_eq!(cfg.benefits, GENERIC_BENEFITS.map(String::from).to_vec());
        assert_eq!(cfg.features.len(), FEATURE_COUNT);
        for (card, generic) in cfg.features.iter().zip(GENERIC_FEATURE_COPY) {
            assert_eq!(card.description, generic);
        }
        assert!(cfg.subheadline.starts_with("Quiet Launch is coming soon"));
    }

    #[test]
    fn test_benefits_prefer_pains_then_pad() {
        let ctx = AnalysisContext::from_title("Idea")
            .with_main_pain("manual invoices")
            .with_pain_point("manual invoices")
            .with_pain_point("late payments");
        let cfg = derive_config(&ctx);
        assert_eq!(
            cfg.benefits,
            vec![
                "No more: manual invoices".to_string(),
                "No more: late payments".to_string(),
                GENERIC_BENEFITS[2].to_string(),
            ]
        );
    }

    #[test]
    fn test_feature_slots_mix_pains_and_opportunities() {
        let mut ctx = AnalysisContext::from_title("Idea")
            .with_pain_point("slow exports")
            .with_pain_point("no audit trail");
        ctx.analysis.opportunities = vec![Insight::from("EU compliance wave")];
        let cfg = derive_config(&ctx);
        let descriptions: Vec<&str> = cfg.features.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(descriptions[0], "Tackles slow exports");
        assert_eq!(descriptions[1], "Tackles no audit trail");
        assert_eq!(descriptions[2], GENERIC_FEATURE_COPY[2]);
        assert_eq!(descriptions[3], "EU compliance wave");
        assert_eq!(descriptions[4], GENERIC_FEATURE_COPY[4]);
        let icons: Vec<&str> = cfg.features.iter().map(|f| f.icon).collect();
        assert_eq!(icons, FEATURE_SLOTS.map(|(icon, _)| icon).to_vec());
    }

    #[test]
    fn test_tagline_wins_headline() {
        let mut ctx = AnalysisContext::from_title("Idea");
        ctx.pitch.tagline = Some("Invoices that chase themselves".into());
        assert_eq!(derive_config(&ctx).headline, "Invoices that chase themselves");
    }

    #[test]
    fn test_snippet_truncates_on_char_boundary() {
        let long = "я".repeat(300);
        let cut = snippet(&long);
        assert_eq!(cut.chars().count(), MAX_SNIPPET_CHARS);
        assert!(cut.ends_with('…'));
        assert_eq!(snippet("  short  "), "short");
    }
}
