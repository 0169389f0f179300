//! # Generator Module
//!
//! Turns an archetype config into a complete Next.js source tree, as an
//! in-memory map of relative path to file content.
//!
//! ## Overview
//!
//! Every generated project contains:
//! - **Boilerplate** - package manifest, TypeScript, Next.js, Tailwind and
//!   PostCSS configs, `.gitignore`, `.env.example`, global stylesheet, root layout
//! - **Archetype files** - the main page plus the components, library modules
//!   and (for the AI tool) the server handler the archetype needs
//! - **README** - problem, solution, features, tech stack and setup steps
//!
//! ## Architecture
//!
//! ```text
//! Config → escape free text → askama template → FileMap
//! ```
//!
//! Escaping and interpolation are two separate stages. Template structs in
//! [`templates`] only accept [`crate::escape::LiteralText`] or
//! [`crate::escape::JsonText`] for fields that end up inside source literals,
//! so text cannot skip the escaping stage.
//!
//! ## Generated Structure
//!
//! ```text
//! my-mvp/
//! ├── package.json
//! ├── tsconfig.json
//! ├── next.config.js
//! ├── tailwind.config.ts
//! ├── postcss.config.js
//! ├── .gitignore
//! ├── .env.example
//! ├── README.md
//! └── src/
//!     ├── app/
//!     │   ├── globals.css
//!     │   ├── layout.tsx
//!     │   ├── page.tsx
//!     │   └── api/analyze/route.ts     # ai-tool only
//!     ├── components/                  # archetype components
//!     └── lib/                         # calculator / dashboard logic
//! ```
//!
//! ## Usage
//!
//! Generators are normally driven by [`crate::orchestrator::generate_mvp`].
//! Writing the map to disk is a separate step, see [`project::write_project`].
//!
//! ## Template Customization
//!
//! Templates live in the crate's `templates/` directory, one `*.txt` file per
//! generated file, compiled in by askama.

pub mod ai_tool;
pub mod boilerplate;
pub mod calculator;
pub mod dashboard;
pub mod landing;
pub mod project;
pub mod readme;
pub mod templates;

use anyhow::bail;
use indexmap::IndexMap;

use crate::archetype::{ArchetypeDefinition, ArchetypeId};
use crate::context::AnalysisContext;
use crate::derive::ArchetypeConfig;
use crate::settings::GeneratorSettings;

/// Relative path to file content, in assembly order.
pub type FileMap = IndexMap<String, String>;

/// Main page, emitted by every archetype.
pub const PAGE: &str = "src/app/page.tsx";

/// Paths every generated project contains, whatever the archetype.
pub const BASE_FILES: [&str; 11] = [
    boilerplate::PACKAGE_JSON,
    boilerplate::TSCONFIG,
    boilerplate::NEXT_CONFIG,
    boilerplate::TAILWIND_CONFIG,
    boilerplate::POSTCSS_CONFIG,
    boilerplate::GITIGNORE,
    boilerplate::ENV_EXAMPLE,
    boilerplate::GLOBALS_CSS,
    boilerplate::LAYOUT,
    PAGE,
    readme::README,
];

/// Everything a generator needs besides its own config.
#[derive(Debug, Clone, Copy)]
pub struct ProjectInput<'a> {
    pub ctx: &'a AnalysisContext,
    pub definition: &'static ArchetypeDefinition,
    /// Project slug, already restricted to `[a-z0-9-]`
    pub slug: &'a str,
    pub settings: &'a GeneratorSettings,
    pub setup_steps: &'a [String],
}

/// Insert a generated file, refusing to overwrite one already emitted.
pub(crate) fn insert_file(files: &mut FileMap, path: &str, content: String) -> anyhow::Result<()> {
    if files.contains_key(path) {
        bail!("generated path emitted twice: {path}");
    }
    files.insert(path.to_string(), content);
    Ok(())
}

fn mismatch(expected: ArchetypeId, config: &ArchetypeConfig) -> anyhow::Result<FileMap> {
    bail!(
        "{expected} generator received a {} config",
        config.archetype()
    )
}

pub fn generate_ai_tool(config: &ArchetypeConfig, input: &ProjectInput<'_>) -> anyhow::Result<FileMap> {
    match config {
        ArchetypeConfig::AiTool(c) => ai_tool::generate_files(c, input),
        other => mismatch(ArchetypeId::AiTool, other),
    }
}

pub fn generate_calculator(
    config: &ArchetypeConfig,
    input: &ProjectInput<'_>,
) -> anyhow::Result<FileMap> {
    match config {
        ArchetypeConfig::Calculator(c) => calculator::generate_files(c, input),
        other => mismatch(ArchetypeId::Calculator, other),
    }
}

pub fn generate_dashboard(
    config: &ArchetypeConfig,
    input: &ProjectInput<'_>,
) -> anyhow::Result<FileMap> {
    match config {
        ArchetypeConfig::Dashboard(c) => dashboard::generate_files(c, input),
        other => mismatch(ArchetypeId::Dashboard, other),
    }
}

pub fn generate_landing(config: &ArchetypeConfig, input: &ProjectInput<'_>) -> anyhow::Result<FileMap> {
    match config {
        ArchetypeConfig::LandingWaitlist(c) => landing::generate_files(c, input),
        other => mismatch(ArchetypeId::LandingWaitlist, other),
    }
}
