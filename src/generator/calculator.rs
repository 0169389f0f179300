use askama::Template;
use tracing::debug;

use super::boilerplate;
use super::readme;
use super::templates::{
    CalculatorLibTemplate, CalculatorPageTemplate, EnvVar, InputFieldView, ResultFieldView,
};
use super::{insert_file, FileMap, ProjectInput, PAGE};
use crate::derive::calculator::{format_number, CalculatorConfig, FieldKind, InputField};
use crate::escape::escape_for_literal;
use crate::escape::LiteralText;

pub const CALCULATOR_LIB: &str = "src/lib/calculator.ts";

pub fn env_vars(input: &ProjectInput<'_>) -> Vec<EnvVar> {
    vec![boilerplate::app_name_var(input)]
}

/// TypeScript object literal describing one input field.
fn field_literal(field: &InputField) -> String {
    let mut out = format!(
        "{{ key: '{}', label: '{}'",
        field.key,
        escape_for_literal(field.label)
    );
    if let Some(unit) = field.unit {
        out.push_str(&format!(", unit: '{}'", escape_for_literal(unit)));
    }
    match field.kind {
        FieldKind::Number { min, max, step, .. } => out.push_str(&format!(
            ", type: 'number', min: {}, max: {}, step: {}",
            format_number(min),
            format_number(max),
            format_number(step)
        )),
        FieldKind::Select { options, .. } => {
            let options: Vec<String> = options
                .iter()
                .map(|(value, label)| {
                    format!(
                        "{{ value: '{}', label: '{}' }}",
                        escape_for_literal(value),
                        escape_for_literal(label)
                    )
                })
                .collect();
            out.push_str(&format!(", type: 'select', options: [{}]", options.join(", ")));
        }
        FieldKind::Toggle { .. } => out.push_str(", type: 'toggle'"),
    }
    out.push_str(" }");
    out
}

fn lib(config: &CalculatorConfig) -> anyhow::Result<String> {
    let schema = &config.schema;
    let inputs = schema
        .inputs
        .iter()
        .map(|field| InputFieldView {
            key: field.key,
            literal: field_literal(field),
            default_value: field.default_literal(),
        })
        .collect();
    let results = schema
        .results
        .iter()
        .map(|result| ResultFieldView {
            key: result.key,
            label: LiteralText::new(result.label),
            format: result.format.as_str(),
            expression: result.expression,
            highlight: result.highlight,
        })
        .collect();
    let lib = CalculatorLibTemplate {
        formula: LiteralText::new(schema.formula),
        inputs,
        results,
        prelude: schema.prelude,
    };
    Ok(lib.render()?)
}

fn page(config: &CalculatorConfig) -> anyhow::Result<String> {
    let page = CalculatorPageTemplate {
        name: LiteralText::new(&config.name),
        headline: LiteralText::new(&config.headline),
        description: LiteralText::new(&config.description),
    };
    Ok(page.render()?)
}

fn solution(config: &CalculatorConfig) -> String {
    format!(
        "{} is an interactive {} calculator that updates as you type. {}.",
        config.name,
        config.kind(),
        config.schema.formula
    )
}

/// Emit the calculator project: boilerplate, the calculator page, the
/// computation module and the README.
pub fn generate_files(
    config: &CalculatorConfig,
    input: &ProjectInput<'_>,
) -> anyhow::Result<FileMap> {
    let env = env_vars(input);
    let mut files = boilerplate::render(input, &config.name, &config.description, &env)?;

    insert_file(&mut files, PAGE, page(config)?)?;
    insert_file(&mut files, CALCULATOR_LIB, lib(config)?)?;

    readme::render_into(
        &mut files,
        input,
        &config.name,
        &config.description,
        &solution(config),
        &env,
    )?;
    debug!(files = files.len(), kind = %config.kind(), "rendered calculator project");
    Ok(files)
}
