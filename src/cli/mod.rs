//! # CLI Module
//!
//! Command-line front end for the `mvpgen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Classify a context (or take `--archetype`) and write the project:
//!
//! ```bash
//! mvpgen generate --context analysis.json --output my-mvp
//! ```
//!
//! Options:
//! - `--context <FILE>` - Analysis context, JSON or YAML (required)
//! - `--output <DIR>` - Output directory (default: `./<slug>`)
//! - `--archetype <ID>` - Skip classification: ai-tool, calculator, dashboard, landing-waitlist
//! - `--config <FILE>` - Generator settings (default: `mvpgen.toml` next to the context)
//! - `--force` - Overwrite existing files
//! - `--dry-run` - Report what would be written
//! - `--json` - Print the generated project as JSON instead of a summary
//!
//! ### `classify`, `recommend`
//!
//! Show the chosen archetype without generating anything:
//!
//! ```bash
//! mvpgen classify --context analysis.json
//! mvpgen recommend --context analysis.json --json
//! ```
//!
//! ### `validate`
//!
//! Print context issues, exiting non-zero when any is an error:
//!
//! ```bash
//! mvpgen validate --context analysis.json
//! ```
//!
//! ### `archetypes`
//!
//! List the archetype registry.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use mvpgen::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
