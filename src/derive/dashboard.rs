//! Dashboard config. The structure is mostly fixed; the context only decides
//! whether a community polling source is wired in and which category shows
//! up in the category filter.

use crate::context::{mentions_any, AnalysisContext};
use serde::Serialize;
use tracing::debug;

/// Minutes between polls of the community feed source.
pub const POLL_INTERVAL_MINUTES: u32 = 15;

const COMMUNITY_KEYWORDS: &[&str] = &[
    "reddit",
    "форум",
    "forum",
    "сообществ",
    "community",
    "telegram",
    "discord",
    "hacker news",
    "twitter",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Count,
    Chart,
    List,
    Status,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Count => "count",
            MetricKind::Chart => "chart",
            MetricKind::List => "list",
            MetricKind::Status => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricSlot {
    pub key: &'static str,
    pub label: String,
    pub kind: MetricKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceKind {
    Manual,
    Polling { interval_minutes: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSource {
    pub id: &'static str,
    pub label: String,
    pub kind: SourceKind,
    /// Community handles the source reads from (polling only)
    pub channels: Vec<String>,
}

impl DataSource {
    pub fn is_polling(&self) -> bool {
        matches!(self.kind, SourceKind::Polling { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterKind {
    Select { options: Vec<(String, String)> },
    Search { placeholder: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardConfig {
    pub name: String,
    pub description: String,
    /// Noun for the tracked items, e.g. "mentions"
    pub item_noun: String,
    pub metrics: Vec<MetricSlot>,
    pub data_sources: Vec<DataSource>,
    pub filters: Vec<Filter>,
}

impl DashboardConfig {
    pub fn polling_source(&self) -> Option<&DataSource> {
        self.data_sources.iter().find(|s| s.is_polling())
    }
}

/// Whether the context points at community sources worth polling.
pub fn mentions_community(ctx: &AnalysisContext) -> bool {
    !ctx.sources.communities.is_empty() || mentions_any(&ctx.searchable_text(), COMMUNITY_KEYWORDS)
}

fn metric_slots(item_noun: &str) -> Vec<MetricSlot> {
    vec![
        MetricSlot {
            key: "totalItems",
            label: format!("Total {item_noun}"),
            kind: MetricKind::Count,
        },
        MetricSlot {
            key: "trend",
            label: "Trend".to_string(),
            kind: MetricKind::Chart,
        },
        MetricSlot {
            key: "topItems",
            label: format!("Top {item_noun}"),
            kind: MetricKind::List,
        },
        MetricSlot {
            key: "freshness",
            label: "Data freshness".to_string(),
            kind: MetricKind::Status,
        },
    ]
}

fn data_sources(ctx: &AnalysisContext) -> Vec<DataSource> {
    let mut sources = vec![DataSource {
        id: "manual",
        label: "Manual entries".to_string(),
        kind: SourceKind::Manual,
        channels: Vec::new(),
    }];
    if mentions_community(ctx) {
        let channels: Vec<String> = ctx
            .sources
            .communities
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        let label = if channels.is_empty() {
            "Community feed".to_string()
        } else {
            format!("Community feed ({})", channels.join(", "))
        };
        sources.push(DataSource {
            id: "community-feed",
            label,
            kind: SourceKind::Polling {
                interval_minutes: POLL_INTERVAL_MINUTES,
            },
            channels,
        });
    }
    sources
}

fn filters(ctx: &AnalysisContext) -> Vec<Filter> {
    let mut categories = vec![("all".to_string(), "All categories".to_string())];
    if let Some(category) = ctx.category() {
        let value = category.to_lowercase();
        if value != "all" && value != "other" {
            categories.push((value, category.to_string()));
        }
    }
    categories.push(("other".to_string(), "Other".to_string()));

    vec![
        Filter {
            key: "period",
            label: "Period",
            kind: FilterKind::Select {
                options: vec![
                    ("7d".to_string(), "Last 7 days".to_string()),
                    ("30d".to_string(), "Last 30 days".to_string()),
                    ("90d".to_string(), "Last 90 days".to_string()),
                ],
            },
        },
        Filter {
            key: "search",
            label: "Search",
            kind: FilterKind::Search {
                placeholder: "Search items...".to_string(),
            },
        },
        Filter {
            key: "category",
            label: "Category",
            kind: FilterKind::Select {
                options: categories,
            },
        },
    ]
}

/// Derive the dashboard config for `ctx`. Never fails.
pub fn derive_config(ctx: &AnalysisContext) -> DashboardConfig {
    let item_noun = if mentions_community(ctx) {
        "mentions"
    } else {
        "items"
    };
    let data_sources = data_sources(ctx);
    debug!(
        sources = data_sources.len(),
        polling = data_sources.iter().any(DataSource::is_polling),
        "derived dashboard sources"
    );

    let description = ctx
        .tagline()
        .or_else(|| ctx.main_pain())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Live overview of {}", ctx.title()));

    DashboardConfig {
        name: ctx.display_name().to_string(),
        description,
        item_noun: item_noun.to_string(),
        metrics: metric_slots(item_noun),
        data_sources,
        filters: filters(ctx),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_manual_only_without_community() {
        let cfg = derive_config(&AnalysisContext::from_title("Warehouse stock"));
        assert_eq!(cfg.data_sources.len(), 1);
        assert_eq!(cfg.data_sources[0].kind, SourceKind::Manual);
        assert!(cfg.polling_source().is_none());
        assert_eq!(cfg.item_noun, "items");
    }

    #[test]
    fn test_community_text_adds_polling_source() {
        let ctx = AnalysisContext::from_title("Idea")
            .with_main_pain("мониторинг упоминаний бренда на форумах");
        let cfg = derive_config(&ctx);
        let polling = cfg.polling_source().unwrap();
        assert_eq!(
            polling.kind,
            SourceKind::Polling {
                interval_minutes: POLL_INTERVAL_MINUTES
            }
        );
        assert_eq!(polling.label, "Community feed");
        assert_eq!(cfg.data_sources[0].id, "manual");
    }

    #[test]
    fn test_listed_communities_become_channels() {
        let mut ctx = AnalysisContext::from_title("Idea");
        ctx.sources.communities = vec!["r/saas".into(), " ".into(), "r/startups".into()];
        let cfg = derive_config(&ctx);
        let polling = cfg.polling_source().unwrap();
        assert_eq!(polling.channels, vec!["r/saas", "r/startups"]);
        assert_eq!(polling.label, "Community feed (r/saas, r/startups)");
        assert_eq!(cfg.metrics[0].label, "Total mentions");
    }

    #[test]
    fn test_fixed_metrics_and_filters() {
        let mut ctx = AnalysisContext::from_title("Idea");
        ctx.trend.category = Some("FinTech".into());
        let cfg = derive_config(&ctx);
        let kinds: Vec<MetricKind> = cfg.metrics.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MetricKind::Count,
                MetricKind::Chart,
                MetricKind::List,
                MetricKind::Status
            ]
        );
        let keys: Vec<&str> = cfg.filters.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["period", "search", "category"]);
        match &cfg.filters[2].kind {
            FilterKind::Select { options } => {
                assert_eq!(options.len(), 3);
                assert_eq!(options[1], ("fintech".to_string(), "FinTech".to_string()));
            }
            other => panic!("unexpected filter kind {other:?}"),
        }
    }

    #[test]
    fn test_category_matching_fixed_option_is_not_repeated() {
        for category in ["All", "other", " OTHER "] {
            let mut ctx = AnalysisContext::from_title("Idea");
            ctx.trend.category = Some(category.into());
            let cfg = derive_config(&ctx);
            match &cfg.filters[2].kind {
                FilterKind::Select { options } => {
                    let values: Vec<&str> = options.iter().map(|(v, _)| v.as_str()).collect();
                    assert_eq!(values, vec!["all", "other"], "category {category:?}");
                }
                other => panic!("unexpected filter kind {other:?}"),
            }
        }
    }
}
