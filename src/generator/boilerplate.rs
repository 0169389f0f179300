use askama::Template;

use super::templates::{
    EnvExampleTemplate, EnvVar, GitignoreTemplate, GlobalsCssTemplate, LayoutTemplate,
    NextConfigTemplate, PackageJsonTemplate, PostcssConfigTemplate, TailwindConfigTemplate,
    TsconfigTemplate,
};
use super::{insert_file, FileMap, ProjectInput};
use crate::escape::{JsonText, LiteralText};

pub const PACKAGE_JSON: &str = "package.json";
pub const TSCONFIG: &str = "tsconfig.json";
pub const NEXT_CONFIG: &str = "next.config.js";
pub const TAILWIND_CONFIG: &str = "tailwind.config.ts";
pub const POSTCSS_CONFIG: &str = "postcss.config.js";
pub const GITIGNORE: &str = ".gitignore";
pub const ENV_EXAMPLE: &str = ".env.example";
pub const GLOBALS_CSS: &str = "src/app/globals.css";
pub const LAYOUT: &str = "src/app/layout.tsx";

/// Environment variable every generated project reads.
pub fn app_name_var(input: &ProjectInput<'_>) -> EnvVar {
    EnvVar::new(
        "NEXT_PUBLIC_APP_NAME",
        input.slug,
        "Public app name, used in analytics and emails",
    )
}

/// Render the shared boilerplate set, in its fixed order.
///
/// Only the project name and description vary; both are escaped here, right
/// before they are handed to the templates.
pub fn render(
    input: &ProjectInput<'_>,
    name: &str,
    description: &str,
    env_vars: &[EnvVar],
) -> anyhow::Result<FileMap> {
    let mut files = FileMap::new();

    let package = PackageJsonTemplate {
        name: input.slug.to_string(),
        description: JsonText::new(description),
        next_version: JsonText::new(&input.settings.next_version),
    };
    insert_file(&mut files, PACKAGE_JSON, package.render()?)?;
    insert_file(&mut files, TSCONFIG, TsconfigTemplate.render()?)?;
    insert_file(&mut files, NEXT_CONFIG, NextConfigTemplate.render()?)?;
    insert_file(&mut files, TAILWIND_CONFIG, TailwindConfigTemplate.render()?)?;
    insert_file(&mut files, POSTCSS_CONFIG, PostcssConfigTemplate.render()?)?;
    insert_file(&mut files, GITIGNORE, GitignoreTemplate.render()?)?;
    insert_file(
        &mut files,
        ENV_EXAMPLE,
        EnvExampleTemplate { vars: env_vars }.render()?,
    )?;
    insert_file(&mut files, GLOBALS_CSS, GlobalsCssTemplate.render()?)?;

    let layout = LayoutTemplate {
        name: LiteralText::new(name),
        description: LiteralText::new(description),
    };
    insert_file(&mut files, LAYOUT, layout.render()?)?;

    Ok(files)
}
