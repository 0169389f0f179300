//! Askama template bindings for every generated file.
//!
//! Fields that land inside TypeScript literals are [`LiteralText`] and fields
//! that land inside JSON strings are [`JsonText`], so the escaping stage has to
//! run before a template can even be constructed. The README is markdown and
//! takes plain strings.

use askama::Template;

use crate::escape::{JsonText, LiteralText};

/// One line of `.env.example`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub name: &'static str,
    pub value: String,
    pub comment: &'static str,
}

impl EnvVar {
    pub fn new(name: &'static str, value: impl Into<String>, comment: &'static str) -> Self {
        EnvVar {
            name,
            value: value.into(),
            comment,
        }
    }
}

#[derive(Template)]
#[template(path = "package.json.txt", escape = "none")]
pub struct PackageJsonTemplate {
    /// Project slug
    pub name: String,
    pub description: JsonText,
    pub next_version: JsonText,
}

#[derive(Template)]
#[template(path = "tsconfig.json.txt", escape = "none")]
pub struct TsconfigTemplate;

#[derive(Template)]
#[template(path = "next.config.js.txt", escape = "none")]
pub struct NextConfigTemplate;

#[derive(Template)]
#[template(path = "tailwind.config.ts.txt", escape = "none")]
pub struct TailwindConfigTemplate;

#[derive(Template)]
#[template(path = "postcss.config.js.txt", escape = "none")]
pub struct PostcssConfigTemplate;

#[derive(Template)]
#[template(path = "gitignore.txt", escape = "none")]
pub struct GitignoreTemplate;

#[derive(Template)]
#[template(path = "env.example.txt", escape = "none")]
pub struct EnvExampleTemplate<'a> {
    pub vars: &'a [EnvVar],
}

#[derive(Template)]
#[template(path = "globals.css.txt", escape = "none")]
pub struct GlobalsCssTemplate;

/// Root layout, which carries the page metadata
#[derive(Template)]
#[template(path = "layout.tsx.txt", escape = "none")]
pub struct LayoutTemplate {
    pub name: LiteralText,
    pub description: LiteralText,
}

#[derive(Debug, Clone)]
pub struct CompetitorLine {
    pub name: String,
    /// Already prefixed with a separator, empty when there is nothing to add
    pub note: String,
}

#[derive(Template)]
#[template(path = "README.md.txt", escape = "none")]
pub struct ReadmeTemplate<'a> {
    pub name: &'a str,
    pub summary: &'a str,
    pub archetype_name: &'a str,
    pub complexity: String,
    pub generation_time: &'a str,
    pub problem: &'a str,
    pub solution: &'a str,
    /// Empty when the context names no audience
    pub audience: &'a str,
    pub features: &'a [&'static str],
    pub tech_stack: &'a [&'static str],
    pub setup_steps: &'a [String],
    pub env_vars: &'a [EnvVar],
    pub competitors: Vec<CompetitorLine>,
}

// AI tool

pub struct FormFieldView {
    pub name: &'static str,
    pub label: LiteralText,
    pub multiline: bool,
}

#[derive(Template)]
#[template(path = "ai_tool.page.tsx.txt", escape = "none")]
pub struct AiToolPageTemplate {
    pub name: LiteralText,
    pub description: LiteralText,
    pub input_label: LiteralText,
    pub input_placeholder: LiteralText,
    pub submit_label: LiteralText,
    pub input_type: String,
    pub output_format: String,
    pub form_fields: Vec<FormFieldView>,
}

/// Server-side handler: content retrieval plus the completion call
#[derive(Template)]
#[template(path = "ai_tool.route.ts.txt", escape = "none")]
pub struct AnalyzeRouteTemplate {
    pub system_prompt: LiteralText,
    pub model: LiteralText,
    pub output_format: String,
    pub slug: String,
}

#[derive(Template)]
#[template(path = "ai_tool.ResultView.tsx.txt", escape = "none")]
pub struct ResultViewTemplate;

// Calculator

pub struct InputFieldView {
    pub key: &'static str,
    /// Complete TypeScript object literal for the field
    pub literal: String,
    pub default_value: String,
}

pub struct ResultFieldView {
    pub key: &'static str,
    pub label: LiteralText,
    pub format: &'static str,
    pub expression: &'static str,
    pub highlight: bool,
}

#[derive(Template)]
#[template(path = "calculator.page.tsx.txt", escape = "none")]
pub struct CalculatorPageTemplate {
    pub name: LiteralText,
    pub headline: LiteralText,
    pub description: LiteralText,
}

#[derive(Template)]
#[template(path = "calculator.lib.ts.txt", escape = "none")]
pub struct CalculatorLibTemplate {
    pub formula: LiteralText,
    pub inputs: Vec<InputFieldView>,
    pub results: Vec<ResultFieldView>,
    pub prelude: &'static str,
}

// Dashboard

pub struct MetricView {
    pub key: &'static str,
    pub label: LiteralText,
    pub kind: &'static str,
}

#[derive(Template)]
#[template(path = "dashboard.page.tsx.txt", escape = "none")]
pub struct DashboardPageTemplate {
    pub name: LiteralText,
    pub description: LiteralText,
    pub item_noun: LiteralText,
}

#[derive(Template)]
#[template(path = "dashboard.data.ts.txt", escape = "none")]
pub struct DashboardDataTemplate {
    /// TypeScript object literals, one per data source
    pub sources: Vec<String>,
    /// TypeScript object literals, one per filter
    pub filters: Vec<String>,
    pub metrics: Vec<MetricView>,
    pub storage_key: String,
}

#[derive(Template)]
#[template(path = "dashboard.MetricCard.tsx.txt", escape = "none")]
pub struct MetricCardTemplate;

// Landing

pub struct FeatureView {
    pub icon: LiteralText,
    pub title: LiteralText,
    pub description: LiteralText,
}

#[derive(Template)]
#[template(path = "landing.page.tsx.txt", escape = "none")]
pub struct LandingPageTemplate {
    pub name: LiteralText,
    pub headline: LiteralText,
    pub subheadline: LiteralText,
    pub audience: LiteralText,
    pub cta_label: LiteralText,
    pub benefits: Vec<LiteralText>,
    pub features: Vec<FeatureView>,
}

#[derive(Template)]
#[template(path = "landing.WaitlistForm.tsx.txt", escape = "none")]
pub struct WaitlistFormTemplate {
    pub storage_key: String,
}
