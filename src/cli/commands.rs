use crate::archetype::{self, ArchetypeId};
use crate::classifier::{classify, score_all, ArchetypeScore, Classification};
use crate::context::load_context;
use crate::generator::project::{write_project, WriteOptions};
use crate::orchestrator::{generate_mvp_with_settings, recommend};
use crate::settings::{load_settings, resolve_settings_path, GeneratorSettings};
use crate::validator::validate_context;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for mvpgen
///
/// Classifies an analysis context into an MVP archetype and scaffolds the
/// matching Next.js project.
#[derive(Parser, Debug)]
#[command(name = "mvpgen")]
#[command(about = "Scaffold a Next.js MVP from a market analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a project from an analysis context
    Generate {
        /// Path to the analysis context (JSON, or YAML by extension)
        #[arg(short, long)]
        context: PathBuf,

        /// Output directory (default: ./{slug})
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Build this archetype instead of classifying
        /// (ai-tool, calculator, dashboard, landing-waitlist)
        #[arg(short, long)]
        archetype: Option<ArchetypeId>,

        /// Path to generator settings (mvpgen.toml).
        /// If not provided, will auto-detect alongside the context file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Perform a dry run: show what would be written without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Print the generated project as JSON instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Classify a context and show per-archetype keyword scores
    Classify {
        /// Path to the analysis context (JSON, or YAML by extension)
        #[arg(short, long)]
        context: PathBuf,

        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Recommend an archetype with a short rationale
    Recommend {
        /// Path to the analysis context (JSON, or YAML by extension)
        #[arg(short, long)]
        context: PathBuf,

        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check a context for problems; exits non-zero on errors
    Validate {
        /// Path to the analysis context (JSON, or YAML by extension)
        #[arg(short, long)]
        context: PathBuf,
    },
    /// List the archetype registry
    Archetypes {
        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ClassifyOutput {
    #[serde(flatten)]
    classification: Classification,
    scores: Vec<ArchetypeScore>,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

fn settings_for(explicit: Option<&Path>, context_path: &Path) -> anyhow::Result<GeneratorSettings> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("settings file not found: {}", path.display());
        }
    }
    match resolve_settings_path(explicit, context_path) {
        Some(path) => {
            info!(path = %path.display(), "loading generator settings");
            Ok(load_settings(&path)?.unwrap_or_default())
        }
        None => Ok(GeneratorSettings::default()),
    }
}

/// Execute a parsed command line
///
/// # Errors
///
/// Returns an error if:
/// - The context or settings file cannot be read or parsed
/// - The context fails validation
/// - Generated files cannot be written
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            context,
            output,
            archetype,
            config,
            force,
            dry_run,
            json,
        } => {
            let ctx = load_context(&context)?;
            let settings = settings_for(config.as_deref(), &context)?;
            let project = generate_mvp_with_settings(&ctx, archetype, &settings)?;

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&project.project_name));
            let report = write_project(&project, &out_dir, WriteOptions { force, dry_run })?;

            if json {
                return print_json(&project);
            }

            let verb = if dry_run { "Would write" } else { "Wrote" };
            println!(
                "{} MVP \"{}\" ({})",
                project.archetype_name, project.project_name, project.generation_time
            );
            if let Some(confidence) = project.confidence {
                println!("   classifier confidence: {confidence}%");
            }
            println!(
                "   {verb} {} file(s) to {}",
                report.written.len(),
                out_dir.display()
            );
            for path in &report.skipped {
                println!("   skipped existing {path} (use --force to overwrite)");
            }
            println!("\nNext steps:");
            for step in &project.setup_steps {
                println!("   {step}");
            }
            Ok(())
        }
        Commands::Classify { context, json } => {
            let ctx = load_context(&context)?;
            let output = ClassifyOutput {
                classification: classify(&ctx),
                scores: score_all(&ctx),
            };
            if json {
                return print_json(&output);
            }
            let chosen = output.classification;
            println!(
                "{} ({}% confidence{})",
                chosen.archetype.definition().name,
                chosen.confidence,
                if chosen.fallback { ", fallback" } else { "" }
            );
            for score in &output.scores {
                println!("   {:<18} {}", score.archetype.as_str(), score.score);
            }
            Ok(())
        }
        Commands::Recommend { context, json } => {
            let ctx = load_context(&context)?;
            let rec = recommend(&ctx);
            if json {
                return print_json(&rec);
            }
            println!(
                "{} ({}% confidence)",
                rec.archetype.definition().name,
                rec.confidence
            );
            println!("   {}", rec.reason);
            let alternatives: Vec<&str> = rec
                .alternatives
                .iter()
                .map(|id| id.definition().name)
                .collect();
            println!("   alternatives: {}", alternatives.join(", "));
            Ok(())
        }
        Commands::Validate { context } => {
            let ctx = load_context(&context)?;
            let issues = validate_context(&ctx);
            if issues.is_empty() {
                println!("No issues found");
                return Ok(());
            }
            for issue in &issues {
                println!("{issue}");
            }
            let errors = issues.iter().filter(|i| i.is_error()).count();
            if errors > 0 {
                bail!("{} has {errors} error(s)", context.display());
            }
            Ok(())
        }
        Commands::Archetypes { json } => {
            if json {
                return print_json(&archetype::all());
            }
            for def in archetype::all() {
                println!(
                    "{:<18} {} [{} complexity, {}]",
                    def.id.as_str(),
                    def.name,
                    def.complexity,
                    def.generation_time
                );
                println!("   {}", def.description);
            }
            Ok(())
        }
    }
}
