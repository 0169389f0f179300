//! # mvpgen
//!
//! **mvpgen** turns a market-analysis bundle about a trending problem into a
//! ready-to-deploy Next.js MVP. It picks one of four product archetypes by
//! keyword scoring, derives a typed configuration for it, and renders a
//! complete source tree.
//!
//! ## Architecture
//!
//! - **[`context`]** - The analysis bundle and its JSON/YAML loader
//! - **[`validator`]** - Precondition checks run before generation
//! - **[`archetype`]** - Static registry of the four archetypes
//! - **[`classifier`]** - Keyword scoring with a low-confidence fallback
//! - **[`derive`]** - Per-archetype config derivation from the context
//! - **[`escape`]** - Escaping free text for TypeScript and JSON literals
//! - **[`generator`]** - askama templates producing the file tree, and the disk writer
//! - **[`orchestrator`]** - `generate_mvp` and `recommend`
//! - **[`settings`]** - `mvpgen.toml` generator settings
//! - **[`logging`]** - `tracing-subscriber` setup for the binary
//! - **[`cli`]** - The `mvpgen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(mvpgen)
//!     participant Orch as orchestrator
//!     participant Cls as classifier
//!     participant Der as derive
//!     participant Gen as generator
//!     participant FS as File System
//!
//!     User->>CLI: mvpgen generate --context analysis.json
//!     CLI->>Orch: generate_mvp_with_settings(ctx, override, settings)
//!     Orch->>Orch: validate_context(ctx)
//!     alt no override
//!         Orch->>Cls: classify(ctx)
//!         Cls-->>Orch: Classification
//!     end
//!     Orch->>Der: derive_*(ctx)
//!     Der-->>Orch: ArchetypeConfig
//!     Orch->>Gen: generate_*(config, input)
//!     Gen->>Gen: escape, then render askama templates
//!     Gen-->>Orch: FileMap
//!     Orch-->>CLI: GeneratedProject
//!     CLI->>FS: write_project(project, out_dir)
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use mvpgen::{generate_mvp, AnalysisContext};
//!
//! let ctx = AnalysisContext::from_title("Review Radar")
//!     .with_main_pain("отзывы клиентов разбросаны по Reddit и их сложно анализировать");
//! let project = generate_mvp(&ctx, None)?;
//! assert_eq!(project.archetype.as_str(), "ai-tool");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod archetype;
pub mod classifier;
pub mod cli;
pub mod context;
pub mod derive;
pub mod escape;
pub mod generator;
pub mod logging;
pub mod orchestrator;
pub mod settings;
pub mod validator;

pub use archetype::{ArchetypeDefinition, ArchetypeId};
pub use classifier::{classify, Classification};
pub use context::{load_context, AnalysisContext};
pub use derive::ArchetypeConfig;
pub use generator::project::{write_project, WriteOptions, WriteReport};
pub use generator::FileMap;
pub use orchestrator::{
    generate_mvp, generate_mvp_with_settings, recommend, GeneratedProject, Recommendation,
};
pub use settings::GeneratorSettings;
