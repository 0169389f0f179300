use askama::Template;
use tracing::debug;

use super::boilerplate;
use super::readme;
use super::templates::{
    DashboardDataTemplate, DashboardPageTemplate, EnvVar, MetricCardTemplate, MetricView,
};
use super::{insert_file, FileMap, ProjectInput, PAGE};
use crate::derive::dashboard::{DashboardConfig, DataSource, Filter, FilterKind, SourceKind};
use crate::escape::{escape_for_literal, LiteralText};

pub const METRIC_CARD: &str = "src/components/MetricCard.tsx";
pub const DATA_LIB: &str = "src/lib/data.ts";

pub fn env_vars(config: &DashboardConfig, input: &ProjectInput<'_>) -> Vec<EnvVar> {
    let mut vars = vec![boilerplate::app_name_var(input)];
    if config.polling_source().is_some() {
        vars.push(EnvVar::new(
            "NEXT_PUBLIC_FEED_URL",
            "https://example.com/api/feed.json",
            "JSON feed polled by the community source",
        ));
    }
    vars
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{}'", escape_for_literal(item)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn source_literal(source: &DataSource) -> String {
    let kind = match source.kind {
        SourceKind::Manual => "kind: 'manual'".to_string(),
        SourceKind::Polling { interval_minutes } => {
            format!("kind: 'polling', intervalMinutes: {interval_minutes}")
        }
    };
    format!(
        "{{ id: '{}', label: '{}', {kind}, channels: [{}] }}",
        source.id,
        escape_for_literal(&source.label),
        quoted_list(&source.channels)
    )
}

fn filter_literal(filter: &Filter) -> String {
    let body = match &filter.kind {
        FilterKind::Select { options } => {
            let options: Vec<String> = options
                .iter()
                .map(|(value, label)| {
                    format!(
                        "{{ value: '{}', label: '{}' }}",
                        escape_for_literal(value),
                        escape_for_literal(label)
                    )
                })
                .collect();
            format!("type: 'select', options: [{}]", options.join(", "))
        }
        FilterKind::Search { placeholder } => {
            format!(
                "type: 'search', placeholder: '{}'",
                escape_for_literal(placeholder)
            )
        }
    };
    format!(
        "{{ key: '{}', label: '{}', {body} }}",
        filter.key,
        escape_for_literal(filter.label)
    )
}

fn data_lib(config: &DashboardConfig, input: &ProjectInput<'_>) -> anyhow::Result<String> {
    let data = DashboardDataTemplate {
        sources: config.data_sources.iter().map(source_literal).collect(),
        filters: config.filters.iter().map(filter_literal).collect(),
        metrics: config
            .metrics
            .iter()
            .map(|metric| MetricView {
                key: metric.key,
                label: LiteralText::new(&metric.label),
                kind: metric.kind.as_str(),
            })
            .collect(),
        storage_key: format!("{}-items", input.slug),
    };
    Ok(data.render()?)
}

fn page(config: &DashboardConfig) -> anyhow::Result<String> {
    let page = DashboardPageTemplate {
        name: LiteralText::new(&config.name),
        description: LiteralText::new(&config.description),
        item_noun: LiteralText::new(&config.item_noun),
    };
    Ok(page.render()?)
}

fn solution(config: &DashboardConfig) -> String {
    let sources: Vec<&str> = config.data_sources.iter().map(|s| s.label.as_str()).collect();
    format!(
        "{} is a dashboard that tracks {} in one place. Data sources: {}.",
        config.name,
        config.item_noun,
        sources.join(", ")
    )
}

/// Emit the dashboard project: boilerplate, the dashboard page, the metric
/// card component, the data module and the README.
pub fn generate_files(
    config: &DashboardConfig,
    input: &ProjectInput<'_>,
) -> anyhow::Result<FileMap> {
    let env = env_vars(config, input);
    let mut files = boilerplate::render(input, &config.name, &config.description, &env)?;

    insert_file(&mut files, PAGE, page(config)?)?;
    insert_file(&mut files, METRIC_CARD, MetricCardTemplate.render()?)?;
    insert_file(&mut files, DATA_LIB, data_lib(config, input)?)?;

    readme::render_into(
        &mut files,
        input,
        &config.name,
        &config.description,
        &solution(config),
        &env,
    )?;
    debug!(
        files = files.len(),
        sources = config.data_sources.len(),
        "rendered dashboard project"
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_literals() {
        let manual = DataSource {
            id: "manual",
            label: "Manual entries".to_string(),
            kind: SourceKind::Manual,
            channels: Vec::new(),
        };
        assert_eq!(
            source_literal(&manual),
            "{ id: 'manual', label: 'Manual entries', kind: 'manual', channels: [] }"
        );
        let polling = DataSource {
            id: "community-feed",
            label: "Community feed (r/it's)".to_string(),
            kind: SourceKind::Polling {
                interval_minutes: 15,
            },
            channels: vec!["r/it's".to_string()],
        };
        assert_eq!(
            source_literal(&polling),
            "{ id: 'community-feed', label: 'Community feed (r/it\\'s)', kind: 'polling', intervalMinutes: 15, channels: ['r/it\\'s'] }"
        );
    }

    #[test]
    fn test_search_filter_literal() {
        let filter = Filter {
            key: "search",
            label: "Search",
            kind: FilterKind::Search {
                placeholder: "Search items...".to_string(),
            },
        };
        assert_eq!(
            filter_literal(&filter),
            "{ key: 'search', label: 'Search', type: 'search', placeholder: 'Search items...' }"
        );
    }
}
