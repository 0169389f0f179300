//! # Orchestrator
//!
//! Entry point of the library: classify (unless told which archetype to
//! build), derive the archetype config, render the file tree and package the
//! result as a [`GeneratedProject`].
//!
//! Dispatch goes through a static strategy table mapping each
//! [`ArchetypeId`] to its deriver and generator. Nothing here holds state, so
//! any number of generations can run concurrently.

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use crate::archetype::{self, ArchetypeId};
use crate::classifier::classify;
use crate::context::AnalysisContext;
use crate::derive::{self, ArchetypeConfig};
use crate::generator::{self, boilerplate, readme, FileMap, ProjectInput};
use crate::settings::GeneratorSettings;
use crate::validator::{ensure_valid, validate_context};

/// Slug used when nothing usable is left of the name.
pub const FALLBACK_SLUG: &str = "mvp-project";

type Deriver = fn(&AnalysisContext) -> ArchetypeConfig;
type Generator = fn(&ArchetypeConfig, &ProjectInput<'_>) -> anyhow::Result<FileMap>;

struct Strategy {
    id: ArchetypeId,
    derive: Deriver,
    generate: Generator,
}

static STRATEGIES: [Strategy; 4] = [
    Strategy {
        id: ArchetypeId::AiTool,
        derive: derive::derive_ai_tool,
        generate: generator::generate_ai_tool,
    },
    Strategy {
        id: ArchetypeId::Calculator,
        derive: derive::derive_calculator,
        generate: generator::generate_calculator,
    },
    Strategy {
        id: ArchetypeId::Dashboard,
        derive: derive::derive_dashboard,
        generate: generator::generate_dashboard,
    },
    Strategy {
        id: ArchetypeId::LandingWaitlist,
        derive: derive::derive_landing,
        generate: generator::generate_landing,
    },
];

#[allow(clippy::expect_used)]
static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9\- ]").expect("slug filter regex should be valid"));

#[allow(clippy::expect_used)]
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should be valid"));

#[allow(clippy::expect_used)]
static DASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("dash regex should be valid"));

/// A generated project, ready to be written out or committed.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedProject {
    pub archetype: ArchetypeId,
    pub archetype_name: &'static str,
    /// Slug of the company name, else of the trend title
    pub project_name: String,
    /// Relative path to content: boilerplate, archetype files, README
    pub files: FileMap,
    pub readme: String,
    pub env_example: String,
    pub features: Vec<&'static str>,
    pub tech_stack: Vec<&'static str>,
    pub generation_time: &'static str,
    /// Classifier confidence, `None` when the archetype was given explicitly
    pub confidence: Option<u8>,
    pub config: ArchetypeConfig,
    pub setup_steps: Vec<String>,
}

/// Classification result with a display rationale, for pickers and previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub archetype: ArchetypeId,
    pub confidence: u8,
    pub reason: &'static str,
    /// The other three archetypes, in registry order
    pub alternatives: Vec<ArchetypeId>,
}

/// Slug of `pitch.company_name`, else `trend.title`.
///
/// Characters outside `[A-Za-z0-9- ]` are stripped, whitespace runs become a
/// single `-`, and the result is lowercase.
pub fn project_slug(ctx: &AnalysisContext) -> String {
    slugify(ctx.display_name())
}

fn slugify(name: &str) -> String {
    let kept = DISALLOWED_CHARS.replace_all(name, "");
    let lowered = kept.trim().to_lowercase();
    let dashed = WHITESPACE_RUNS.replace_all(&lowered, "-");
    let collapsed = DASH_RUNS.replace_all(&dashed, "-");
    let slug = collapsed.trim_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Shell steps from clone to a running dev server. Same for every archetype.
pub fn setup_steps(slug: &str, owner: &str) -> Vec<String> {
    vec![
        format!("git clone https://github.com/{owner}/{slug}.git"),
        format!("cd {slug}"),
        "npm install".to_string(),
        "cp .env.example .env.local".to_string(),
        "npm run dev".to_string(),
    ]
}

/// Generate a project with default [`GeneratorSettings`].
pub fn generate_mvp(
    ctx: &AnalysisContext,
    archetype_override: Option<ArchetypeId>,
) -> anyhow::Result<GeneratedProject> {
    generate_mvp_with_settings(ctx, archetype_override, &GeneratorSettings::default())
}

/// Generate a project.
///
/// An override is used verbatim and skips classification. The only failure
/// for a well-formed template set is a context without a usable title.
pub fn generate_mvp_with_settings(
    ctx: &AnalysisContext,
    archetype_override: Option<ArchetypeId>,
    settings: &GeneratorSettings,
) -> anyhow::Result<GeneratedProject> {
    ensure_valid(&validate_context(ctx))?;
    settings.check_single_line()?;

    let (archetype, confidence) = match archetype_override {
        Some(id) => {
            info!(archetype = %id, "using archetype override");
            (id, None)
        }
        None => {
            let classification = classify(ctx);
            info!(
                archetype = %classification.archetype,
                confidence = classification.confidence,
                fallback = classification.fallback,
                "classified context"
            );
            (classification.archetype, Some(classification.confidence))
        }
    };

    let definition = archetype::lookup(archetype)
        .with_context(|| format!("archetype {archetype} is not registered"))?;
    let strategy = STRATEGIES
        .iter()
        .find(|s| s.id == archetype)
        .with_context(|| format!("no generator registered for {archetype}"))?;

    let project_name = project_slug(ctx);
    let steps = setup_steps(&project_name, &settings.repository_owner);
    let config = (strategy.derive)(ctx);
    let input = ProjectInput {
        ctx,
        definition,
        slug: &project_name,
        settings,
        setup_steps: &steps,
    };
    let files = (strategy.generate)(&config, &input)?;
    debug!(files = files.len(), project = %project_name, "generated file tree");

    let readme = files.get(readme::README).cloned().unwrap_or_default();
    let env_example = files
        .get(boilerplate::ENV_EXAMPLE)
        .cloned()
        .unwrap_or_default();

    Ok(GeneratedProject {
        archetype,
        archetype_name: definition.name,
        project_name,
        files,
        readme,
        env_example,
        features: definition.features.to_vec(),
        tech_stack: definition.tech_stack.to_vec(),
        generation_time: definition.generation_time,
        confidence,
        config,
        setup_steps: steps,
    })
}

fn reason_for(id: ArchetypeId) -> &'static str {
    match id {
        ArchetypeId::AiTool => {
            "The problem is about processing or analysing content, which an AI tool can automate end to end."
        }
        ArchetypeId::Calculator => {
            "The problem revolves around numbers and estimates, so an interactive calculator gives instant value."
        }
        ArchetypeId::Dashboard => {
            "The problem is about tracking and monitoring data over time, which a dashboard makes visible."
        }
        ArchetypeId::LandingWaitlist => {
            "The idea needs demand validation first; a landing page with a waitlist tests interest before building."
        }
    }
}

/// Classification plus a canned rationale. Performs no generation.
pub fn recommend(ctx: &AnalysisContext) -> Recommendation {
    let classification = classify(ctx);
    let alternatives = ArchetypeId::ALL
        .iter()
        .copied()
        .filter(|id| *id != classification.archetype)
        .collect();
    Recommendation {
        archetype: classification.archetype,
        confidence: classification.confidence,
        reason: reason_for(classification.archetype),
        alternatives,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Review Radar"), "review-radar");
        assert_eq!(slugify("My `Tool` ${x}"), "my-tool-x");
        assert_eq!(slugify("  Acme -- Labs!  "), "acme-labs");
        assert_eq!(slugify("Отзывы"), FALLBACK_SLUG);
        assert_eq!(slugify("---"), FALLBACK_SLUG);
    }

    #[test]
    fn test_slug_prefers_company_name() {
        let mut ctx = AnalysisContext::from_title("Some Trend");
        assert_eq!(project_slug(&ctx), "some-trend");
        ctx.pitch.company_name = Some("Pain Radar AI".into());
        assert_eq!(project_slug(&ctx), "pain-radar-ai");
    }

    #[test]
    fn test_setup_steps() {
        assert_eq!(
            setup_steps("demo", "acme"),
            vec![
                "git clone https://github.com/acme/demo.git",
                "cd demo",
                "npm install",
                "cp .env.example .env.local",
                "npm run dev",
            ]
        );
    }

    #[test]
    fn test_strategy_table_covers_every_archetype() {
        for id in ArchetypeId::ALL {
            let strategy = STRATEGIES.iter().find(|s| s.id == id).unwrap();
            let ctx = AnalysisContext::from_title("Idea");
            assert_eq!((strategy.derive)(&ctx).archetype(), id);
        }
    }

    #[test]
    fn test_override_skips_classification() {
        let ctx = AnalysisContext::from_title("Idea");
        let project = generate_mvp(&ctx, Some(ArchetypeId::Dashboard)).unwrap();
        assert_eq!(project.archetype, ArchetypeId::Dashboard);
        assert_eq!(project.confidence, None);
        assert_eq!(project.archetype_name, "Dashboard");
        assert!(project.files.contains_key("src/components/MetricCard.tsx"));
    }

    #[test]
    fn test_project_mirrors_definition_and_files() {
        let ctx = AnalysisContext::from_title("Idea");
        let project = generate_mvp(&ctx, None).unwrap();
        let def = project.archetype.definition();
        assert_eq!(project.features, def.features.to_vec());
        assert_eq!(project.generation_time, def.generation_time);
        assert_eq!(project.readme, project.files["README.md"]);
        assert_eq!(project.env_example, project.files[".env.example"]);
        assert_eq!(project.setup_steps[1], "cd idea");
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let ctx = AnalysisContext::from_title("   ");
        let err = generate_mvp(&ctx, None).unwrap_err();
        assert!(format!("{err:#}").contains("missing_title"));
    }

    #[test]
    fn test_settings_flow_into_output() {
        let ctx = AnalysisContext::from_title("Idea");
        let settings = GeneratorSettings {
            ai_model: "gpt-4o".into(),
            next_version: "14.2.9".into(),
            repository_owner: "acme".into(),
        };
        let project =
            generate_mvp_with_settings(&ctx, Some(ArchetypeId::AiTool), &settings).unwrap();
        assert!(project.env_example.contains("OPENAI_MODEL=gpt-4o"));
        assert!(project.files["src/app/api/analyze/route.ts"].contains("?? 'gpt-4o'"));
        assert!(project.files["package.json"].contains("\"next\": \"14.2.9\""));
        assert_eq!(
            project.setup_steps[0],
            "git clone https://github.com/acme/idea.git"
        );
    }

    #[test]
    fn test_recommend_lists_alternatives() {
        let ctx = AnalysisContext::from_title("Idea")
            .with_main_pain("сложно рассчитать стоимость подписки для команды");
        let rec = recommend(&ctx);
        assert_eq!(rec.archetype, ArchetypeId::Calculator);
        assert_eq!(rec.confidence, 40);
        assert_eq!(
            rec.alternatives,
            vec![
                ArchetypeId::AiTool,
                ArchetypeId::Dashboard,
                ArchetypeId::LandingWaitlist
            ]
        );
        assert!(rec.reason.contains("calculator"));
    }

    #[test]
    fn test_multiline_settings_are_rejected() {
        let ctx = AnalysisContext::from_title("Idea");
        let settings = GeneratorSettings {
            ai_model: "gpt-4o\nEXTRA=1".into(),
            ..GeneratorSettings::default()
        };
        let err = generate_mvp_with_settings(&ctx, Some(ArchetypeId::AiTool), &settings)
            .unwrap_err();
        assert!(err.to_string().contains("ai_model"));
    }
}
