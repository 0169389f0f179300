//! # Config Derivers
//!
//! One pure function per archetype, mapping an [`AnalysisContext`] to that
//! archetype's configuration. Derivers read the same free text the classifier
//! scored, so an archetype can specialise its own shape further (the AI tool
//! picks an IO shape, the calculator a field schema, and so on).
//!
//! Missing optional data never fails a deriver. Each one pads with generic
//! copy so the config it returns is always structurally complete.
//!
//! Configs hold raw text. Escaping happens in the generators, immediately
//! before text is spliced into a template.

pub mod ai_tool;
pub mod calculator;
pub mod dashboard;
pub mod landing;

pub use ai_tool::{AiToolConfig, InputType, OutputFormat};
pub use calculator::{CalculatorConfig, CalculatorKind};
pub use dashboard::DashboardConfig;
pub use landing::LandingConfig;

use crate::archetype::ArchetypeId;
use crate::context::AnalysisContext;
use serde::Serialize;

/// Archetype-specific configuration, one variant per archetype.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "archetype", rename_all = "kebab-case")]
pub enum ArchetypeConfig {
    AiTool(AiToolConfig),
    Calculator(CalculatorConfig),
    Dashboard(DashboardConfig),
    LandingWaitlist(LandingConfig),
}

impl ArchetypeConfig {
    pub fn archetype(&self) -> ArchetypeId {
        match self {
            ArchetypeConfig::AiTool(_) => ArchetypeId::AiTool,
            ArchetypeConfig::Calculator(_) => ArchetypeId::Calculator,
            ArchetypeConfig::Dashboard(_) => ArchetypeId::Dashboard,
            ArchetypeConfig::LandingWaitlist(_) => ArchetypeId::LandingWaitlist,
        }
    }

    /// Name the generated project presents to its users.
    pub fn display_name(&self) -> &str {
        match self {
            ArchetypeConfig::AiTool(c) => &c.name,
            ArchetypeConfig::Calculator(c) => &c.name,
            ArchetypeConfig::Dashboard(c) => &c.name,
            ArchetypeConfig::LandingWaitlist(c) => &c.name,
        }
    }

    /// One-line description used in metadata and the README.
    pub fn summary(&self) -> &str {
        match self {
            ArchetypeConfig::AiTool(c) => &c.description,
            ArchetypeConfig::Calculator(c) => &c.description,
            ArchetypeConfig::Dashboard(c) => &c.description,
            ArchetypeConfig::LandingWaitlist(c) => &c.subheadline,
        }
    }
}

pub fn derive_ai_tool(ctx: &AnalysisContext) -> ArchetypeConfig {
    ArchetypeConfig::AiTool(ai_tool::derive_config(ctx))
}

pub fn derive_calculator(ctx: &AnalysisContext) -> ArchetypeConfig {
    ArchetypeConfig::Calculator(calculator::derive_config(ctx))
}

pub fn derive_dashboard(ctx: &AnalysisContext) -> ArchetypeConfig {
    ArchetypeConfig::Dashboard(dashboard::derive_config(ctx))
}

pub fn derive_landing(ctx: &AnalysisContext) -> ArchetypeConfig {
    ArchetypeConfig::LandingWaitlist(landing::derive_config(ctx))
}
