//! AI-tool config: what the user pastes in, what the model returns, and the
//! system prompt that frames the model.

use crate::context::{mentions_any, AnalysisContext, ProductSpec};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// How the generated tool takes its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Url,
    Form,
}

/// How the generated tool renders the model's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    List,
    Table,
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputType::Text => "text",
            InputType::Url => "url",
            InputType::Form => "form",
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::List => "list",
            OutputFormat::Table => "table",
        })
    }
}

/// Where the input/output shape came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeSource {
    ProductSpec,
    Keywords,
    Default,
}

/// A field of the form input (only used when `input_type` is `Form`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub multiline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiToolConfig {
    pub name: String,
    pub description: String,
    pub input_type: InputType,
    pub output_format: OutputFormat,
    pub shape_source: ShapeSource,
    pub input_label: String,
    pub input_placeholder: String,
    pub form_fields: Vec<FormField>,
    pub submit_label: String,
    /// Raw prompt text. Escaped by the generator, never here.
    pub system_prompt: String,
}

const INPUT_TABLE: &[(&[&str], InputType)] = &[
    (&["text", "textarea", "prompt", "free-text"], InputType::Text),
    (&["url", "link", "website", "page"], InputType::Url),
    (&["form", "fields", "questionnaire", "structured"], InputType::Form),
];

const OUTPUT_TABLE: &[(&[&str], OutputFormat)] = &[
    (&["text", "markdown", "prose"], OutputFormat::Text),
    (&["json", "structured", "object"], OutputFormat::Json),
    (&["list", "bullets", "checklist"], OutputFormat::List),
    (&["table", "grid", "spreadsheet", "csv"], OutputFormat::Table),
];

/// Keyword rules, first match wins.
const KEYWORD_RULES: &[(&[&str], InputType, OutputFormat)] = &[
    (&["отзыв", "review", "feedback"], InputType::Url, OutputFormat::Table),
    (
        &["ссылк", "url", "сайт", "website", "страниц"],
        InputType::Url,
        OutputFormat::Text,
    ),
    (
        &["анкет", "заявк", "бриф", "brief", "form", "questionnaire"],
        InputType::Form,
        OutputFormat::Json,
    ),
    (
        &["список", "идеи", "ideas", "list", "генерир", "generate"],
        InputType::Text,
        OutputFormat::List,
    ),
];

const FORM_FIELDS: [FormField; 3] = [
    FormField {
        name: "subject",
        label: "What are we looking at?",
        multiline: false,
    },
    FormField {
        name: "details",
        label: "Details",
        multiline: true,
    },
    FormField {
        name: "goal",
        label: "What outcome do you want?",
        multiline: false,
    },
];

fn map_declared<T: Copy>(value: Option<&str>, table: &[(&[&str], T)]) -> Option<T> {
    let value = value?.trim().to_lowercase();
    table
        .iter()
        .find(|(names, _)| names.contains(&value.as_str()))
        .map(|(_, mapped)| *mapped)
}

fn shape_from_keywords(text: &str) -> Option<(InputType, OutputFormat)> {
    KEYWORD_RULES
        .iter()
        .find(|(keywords, _, _)| mentions_any(text, keywords))
        .map(|(_, input, output)| (*input, *output))
}

/// Resolve the IO shape: declared product spec first, keyword rules second.
///
/// Each half of the declared shape is honoured independently, so a spec that
/// only declares an output format still gets its input type from keywords.
pub fn resolve_shape(
    spec: Option<&ProductSpec>,
    text: &str,
) -> (InputType, OutputFormat, ShapeSource) {
    let declared_input = spec.and_then(|s| map_declared(s.input_type.as_deref(), INPUT_TABLE));
    let declared_output =
        spec.and_then(|s| map_declared(s.output_format.as_deref(), OUTPUT_TABLE));
    let fallback = shape_from_keywords(text);

    let source = match (declared_input, declared_output, fallback) {
        (Some(_), _, _) | (_, Some(_), _) => ShapeSource::ProductSpec,
        (None, None, Some(_)) => ShapeSource::Keywords,
        (None, None, None) => ShapeSource::Default,
    };
    let (kw_input, kw_output) = fallback.unwrap_or((InputType::Text, OutputFormat::Text));
    (
        declared_input.unwrap_or(kw_input),
        declared_output.unwrap_or(kw_output),
        source,
    )
}

fn output_instruction(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => {
            "Answer in clear, concise prose with short paragraphs and a one-line summary at the end."
        }
        OutputFormat::Json => {
            "Respond with a single JSON object only, no prose. Use descriptive camelCase keys."
        }
        OutputFormat::List => {
            "Respond with a JSON object {\"items\": string[]} containing 5 to 10 concise, actionable items."
        }
        OutputFormat::Table => {
            "Respond with a JSON object {\"columns\": string[], \"rows\": string[][]} where each row matches the columns. Include a sentiment or priority column when relevant."
        }
    }
}

/// Build the raw system prompt: role framing, main pain, audience, numbered
/// pain points, output instruction.
pub fn build_system_prompt(ctx: &AnalysisContext, format: OutputFormat) -> String {
    let audience = ctx.audience().unwrap_or("small teams and solo founders");
    let problem = ctx.main_pain().unwrap_or_else(|| ctx.title());

    let mut prompt = format!(
        "You are an expert analyst assistant built into {}. You help {audience}.\n\nCore problem you solve: {problem}\n",
        ctx.display_name()
    );
    let pains = ctx.pain_points();
    if !pains.is_empty() {
        prompt.push_str("\nKey pain points to keep in mind:\n");
        for (idx, pain) in pains.iter().enumerate() {
            prompt.push_str(&format!("{}. {pain}\n", idx + 1));
        }
    }
    prompt.push('\n');
    prompt.push_str(output_instruction(format));
    prompt
}

fn input_copy(input: InputType) -> (&'static str, &'static str) {
    match input {
        InputType::Text => ("Paste your text", "Paste the text you want analyzed..."),
        InputType::Url => (
            "Link to analyze",
            "https://www.reddit.com/r/... or any public web page",
        ),
        InputType::Form => ("Describe your case", "Fill in the fields below"),
    }
}

/// Derive the AI-tool config for `ctx`. Never fails; missing data is padded.
pub fn derive_config(ctx: &AnalysisContext) -> AiToolConfig {
    let text = ctx.searchable_text();
    let (input_type, output_format, shape_source) =
        resolve_shape(ctx.product_spec.as_ref(), &text);
    debug!(%input_type, %output_format, ?shape_source, "resolved ai-tool shape");

    let (input_label, input_placeholder) = input_copy(input_type);
    let description = ctx
        .tagline()
        .or_else(|| ctx.main_pain())
        .map(str::to_string)
        .unwrap_or_else(|| format!("AI assistant for {}", ctx.title()));
    let submit_label = ctx
        .product_spec
        .as_ref()
        .and_then(|s| s.core_action.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Analyze")
        .to_string();

    AiToolConfig {
        name: ctx.display_name().to_string(),
        description,
        input_type,
        output_format,
        shape_source,
        input_label: input_label.to_string(),
        input_placeholder: input_placeholder.to_string(),
        form_fields: if input_type == InputType::Form {
            FORM_FIELDS.to_vec()
        } else {
            Vec::new()
        },
        submit_label,
        system_prompt: build_system_prompt(ctx, output_format),
    }
}
