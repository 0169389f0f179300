use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::{debug, info};

use crate::orchestrator::GeneratedProject;

/// How [`write_project`] treats the output directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Overwrite files that already exist
    pub force: bool,
    /// Report what would be written without touching the disk
    pub dry_run: bool,
}

/// Paths (relative to the output directory) written and skipped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Reject absolute paths and any path that climbs out of the output directory.
pub fn validate_relative_path(path: &str) -> anyhow::Result<()> {
    if path.is_empty() {
        bail!("generated file has an empty path");
    }
    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) => {}
            Component::CurDir => {}
            _ => bail!("generated path escapes the output directory: {path}"),
        }
    }
    Ok(())
}

/// Write every file of `project` under `out_dir`, creating parent directories.
///
/// Existing files are left alone unless `options.force` is set. With
/// `options.dry_run` nothing is created, but the report still lists what
/// would have been written or skipped.
pub fn write_project(
    project: &GeneratedProject,
    out_dir: &Path,
    options: WriteOptions,
) -> anyhow::Result<WriteReport> {
    for path in project.files.keys() {
        validate_relative_path(path)?;
    }

    let mut report = WriteReport::default();
    for (rel, content) in &project.files {
        let target: PathBuf = out_dir.join(rel);
        if target.exists() && !options.force {
            debug!(path = %target.display(), "skipping existing file");
            report.skipped.push(rel.clone());
            continue;
        }
        if !options.dry_run {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory {}", parent.display())
                })?;
            }
            fs::write(&target, content)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            debug!(path = %target.display(), bytes = content.len(), "wrote file");
        }
        report.written.push(rel.clone());
    }

    info!(
        out_dir = %out_dir.display(),
        written = report.written.len(),
        skipped = report.skipped.len(),
        dry_run = options.dry_run,
        "project written"
    );
    Ok(report)
}
