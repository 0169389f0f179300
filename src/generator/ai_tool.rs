use askama::Template;
use tracing::debug;

use super::boilerplate;
use super::readme;
use super::templates::{
    AiToolPageTemplate, AnalyzeRouteTemplate, EnvVar, FormFieldView, ResultViewTemplate,
};
use super::{insert_file, FileMap, ProjectInput, PAGE};
use crate::derive::AiToolConfig;
use crate::escape::LiteralText;

pub const ANALYZE_ROUTE: &str = "src/app/api/analyze/route.ts";
pub const RESULT_VIEW: &str = "src/components/ResultView.tsx";

pub fn env_vars(input: &ProjectInput<'_>) -> Vec<EnvVar> {
    vec![
        boilerplate::app_name_var(input),
        EnvVar::new(
            "OPENAI_API_KEY",
            "sk-your-key-here",
            "OpenAI API key used by /api/analyze (server only)",
        ),
        EnvVar::new(
            "OPENAI_MODEL",
            input.settings.ai_model.clone(),
            "Chat completion model",
        ),
    ]
}

fn page(config: &AiToolConfig) -> anyhow::Result<String> {
    let form_fields = config
        .form_fields
        .iter()
        .map(|field| FormFieldView {
            name: field.name,
            label: LiteralText::new(field.label),
            multiline: field.multiline,
        })
        .collect();
    let page = AiToolPageTemplate {
        name: LiteralText::new(&config.name),
        description: LiteralText::new(&config.description),
        input_label: LiteralText::new(&config.input_label),
        input_placeholder: LiteralText::new(&config.input_placeholder),
        submit_label: LiteralText::new(&config.submit_label),
        input_type: config.input_type.to_string(),
        output_format: config.output_format.to_string(),
        form_fields,
    };
    Ok(page.render()?)
}

fn route(config: &AiToolConfig, input: &ProjectInput<'_>) -> anyhow::Result<String> {
    let route = AnalyzeRouteTemplate {
        system_prompt: LiteralText::new(&config.system_prompt),
        model: LiteralText::new(&input.settings.ai_model),
        output_format: config.output_format.to_string(),
        slug: input.slug.to_string(),
    };
    Ok(route.render()?)
}

fn solution(config: &AiToolConfig) -> String {
    format!(
        "{} is an AI tool: paste in {} input and get back {} output, produced by a language model primed with the problem below.",
        config.name,
        config.input_type,
        config.output_format
    )
}

/// Emit the AI-tool project: boilerplate, the input page, the analyze
/// handler, the result view and the README.
pub fn generate_files(config: &AiToolConfig, input: &ProjectInput<'_>) -> anyhow::Result<FileMap> {
    let env = env_vars(input);
    let mut files = boilerplate::render(input, &config.name, &config.description, &env)?;

    insert_file(&mut files, PAGE, page(config)?)?;
    insert_file(&mut files, ANALYZE_ROUTE, route(config, input)?)?;
    insert_file(&mut files, RESULT_VIEW, ResultViewTemplate.render()?)?;

    readme::render_into(
        &mut files,
        input,
        &config.name,
        &config.description,
        &solution(config),
        &env,
    )?;
    debug!(files = files.len(), input_type = %config.input_type, "rendered ai-tool project");
    Ok(files)
}
