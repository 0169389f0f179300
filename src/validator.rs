//! Precondition checks for an [`AnalysisContext`].
//!
//! A missing trend title is the only hard failure: without it there is no
//! project name and nothing to put in the page headers. Everything else is
//! optional and merely reported as a warning, because the config derivers pad
//! missing data with defaults.

use crate::context::AnalysisContext;
use std::fmt;

/// Severity level for context issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Generation is refused
    Error,
    /// Generation proceeds with defaults
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Error => write!(f, "error"),
            IssueSeverity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
    pub severity: IssueSeverity,
}

impl ValidationIssue {
    pub fn error(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
            severity: IssueSeverity::Error,
        }
    }

    pub fn warning(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            severity: IssueSeverity::Warning,
            ..ValidationIssue::error(location, kind, message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.severity, self.kind, self.location, self.message
        )
    }
}

/// Collect every issue in `ctx`, errors and warnings alike.
pub fn validate_context(ctx: &AnalysisContext) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if ctx.title().is_empty() {
        issues.push(ValidationIssue::error(
            "trend.title",
            "missing_title",
            "trend title is required to derive a project name",
        ));
    }

    if ctx.main_pain().is_none() && ctx.pain_points().is_empty() {
        issues.push(ValidationIssue::warning(
            "analysis",
            "no_pain_points",
            "no pain statements; classification will fall back to landing-waitlist",
        ));
    }

    if ctx.audience().is_none() {
        issues.push(ValidationIssue::warning(
            "analysis.target_audience",
            "no_audience",
            "no target audience; generic audience copy will be used",
        ));
    }

    for (idx, competitor) in ctx.competition.competitors.iter().enumerate() {
        if competitor.name.trim().is_empty() {
            issues.push(ValidationIssue::warning(
                format!("competition.competitors[{idx}]"),
                "unnamed_competitor",
                "competitor without a name is left out of the README",
            ));
        }
    }

    issues
}

/// Fail with every issue listed if any of them is an error.
pub fn ensure_valid(issues: &[ValidationIssue]) -> anyhow::Result<()> {
    let errors: Vec<&ValidationIssue> = issues.iter().filter(|i| i.is_error()).collect();
    if errors.is_empty() {
        return Ok(());
    }
    let listing = errors
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::bail!(
        "analysis context is not usable ({} error(s)):\n{listing}",
        errors.len()
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::context::Competitor;

    #[test]
    fn test_missing_title_is_error() {
        let ctx = AnalysisContext::from_title("   ");
        let issues = validate_context(&ctx);
        assert!(issues.iter().any(|i| i.kind == "missing_title" && i.is_error()));
        let err = ensure_valid(&issues).unwrap_err();
        assert!(err.to_string().contains("missing_title"));
    }

    #[test]
    fn test_title_only_has_warnings() {
        let ctx = AnalysisContext::from_title("Idea");
        let issues = validate_context(&ctx);
        assert!(!issues.is_empty());
        assert!(issues.iter().all(|i| !i.is_error()));
        assert!(ensure_valid(&issues).is_ok());
    }

    #[test]
    fn test_unnamed_competitor_location() {
        let mut ctx = AnalysisContext::from_title("Idea").with_main_pain("pain");
        ctx.analysis.target_audience = Some("founders".into());
        ctx.competition.competitors.push(Competitor {
            name: " ".into(),
            url: None,
            weakness: None,
        });
        let issues = validate_context(&ctx);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "competition.competitors[0]");
        assert_eq!(
            issues[0].to_string(),
            "[warning] unnamed_competitor competition.competitors[0]: competitor without a name is left out of the README"
        );
    }
}
