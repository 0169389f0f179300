use askama::Template;
use tracing::debug;

use super::boilerplate;
use super::readme;
use super::templates::{EnvVar, FeatureView, LandingPageTemplate, WaitlistFormTemplate};
use super::{insert_file, FileMap, ProjectInput, PAGE};
use crate::derive::LandingConfig;
use crate::escape::LiteralText;

pub const WAITLIST_FORM: &str = "src/components/WaitlistForm.tsx";

pub fn env_vars(input: &ProjectInput<'_>) -> Vec<EnvVar> {
    vec![
        boilerplate::app_name_var(input),
        EnvVar::new(
            "NEXT_PUBLIC_WAITLIST_ENDPOINT",
            "",
            "POST endpoint for signups (Formspree, Supabase...). Empty keeps them in localStorage",
        ),
    ]
}

fn page(config: &LandingConfig) -> anyhow::Result<String> {
    let page = LandingPageTemplate {
        name: LiteralText::new(&config.name),
        headline: LiteralText::new(&config.headline),
        subheadline: LiteralText::new(&config.subheadline),
        audience: LiteralText::new(&config.audience),
        cta_label: LiteralText::new(&config.cta_label),
        benefits: config
            .benefits
            .iter()
            .map(|b| LiteralText::new(b))
            .collect(),
        features: config
            .features
            .iter()
            .map(|f| FeatureView {
                icon: LiteralText::new(f.icon),
                title: LiteralText::new(f.title),
                description: LiteralText::new(&f.description),
            })
            .collect(),
    };
    Ok(page.render()?)
}

fn solution(config: &LandingConfig) -> String {
    format!(
        "{} starts as a landing page with a waitlist: it states the problem, lists what the product will do and collects early signups to validate demand before building.",
        config.name
    )
}

/// Emit the landing project: boilerplate, the landing page, the waitlist
/// form and the README.
pub fn generate_files(config: &LandingConfig, input: &ProjectInput<'_>) -> anyhow::Result<FileMap> {
    let env = env_vars(input);
    let mut files = boilerplate::render(input, &config.name, &config.subheadline, &env)?;

    insert_file(&mut files, PAGE, page(config)?)?;
    let form = WaitlistFormTemplate {
        storage_key: format!("{}-waitlist", input.slug),
    };
    insert_file(&mut files, WAITLIST_FORM, form.render()?)?;

    readme::render_into(
        &mut files,
        input,
        &config.name,
        &config.headline,
        &solution(config),
        &env,
    )?;
    debug!(files = files.len(), "rendered landing project");
    Ok(files)
}
