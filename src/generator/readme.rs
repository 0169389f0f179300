//! README rendering. The README is prose, so context text goes in unescaped.

use askama::Template;

use super::templates::{CompetitorLine, EnvVar, ReadmeTemplate};
use super::{insert_file, FileMap, ProjectInput};

pub const README: &str = "README.md";

/// The problem statement: main pain, then why-trending, then the first pain
/// point, then a sentence built from the title.
pub fn problem_statement(input: &ProjectInput<'_>) -> String {
    let ctx = input.ctx;
    ctx.main_pain()
        .or_else(|| ctx.why_trending())
        .or_else(|| ctx.pain_points().first().copied())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "People following \"{}\" have no simple tool built for it yet.",
                ctx.title()
            )
        })
}

fn competitor_lines(input: &ProjectInput<'_>) -> Vec<CompetitorLine> {
    input
        .ctx
        .competition
        .competitors
        .iter()
        .filter(|c| !c.name.trim().is_empty())
        .map(|c| {
            let note = match (c.weakness.as_deref(), c.url.as_deref()) {
                (Some(weakness), _) if !weakness.trim().is_empty() => {
                    format!(": {}", weakness.trim())
                }
                (_, Some(url)) if !url.trim().is_empty() => format!(" ({})", url.trim()),
                _ => String::new(),
            };
            CompetitorLine {
                name: c.name.trim().to_string(),
                note,
            }
        })
        .collect()
}

/// Render `README.md` and append it to `files`.
pub fn render_into(
    files: &mut FileMap,
    input: &ProjectInput<'_>,
    name: &str,
    summary: &str,
    solution: &str,
    env_vars: &[EnvVar],
) -> anyhow::Result<()> {
    let problem = problem_statement(input);
    let definition = input.definition;
    let readme = ReadmeTemplate {
        name,
        summary,
        archetype_name: definition.name,
        complexity: definition.complexity.to_string(),
        generation_time: definition.generation_time,
        problem: &problem,
        solution,
        audience: input.ctx.audience().unwrap_or_default(),
        features: definition.features,
        tech_stack: definition.tech_stack,
        setup_steps: input.setup_steps,
        env_vars,
        competitors: competitor_lines(input),
    };
    insert_file(files, README, readme.render()?)
}
