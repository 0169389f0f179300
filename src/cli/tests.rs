//! Unit tests for CLI parsing and commands

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::archetype::ArchetypeId;
use crate::cli::{run_cli, Cli, Commands};
use clap::Parser;
use std::fs;

#[test]
fn test_generate_command_defaults() {
    let cli = Cli::try_parse_from(["mvpgen", "generate", "--context", "ctx.json"]).unwrap();

    match cli.command {
        Commands::Generate {
            context,
            output,
            archetype,
            config,
            force,
            dry_run,
            json,
        } => {
            assert_eq!(context.to_string_lossy(), "ctx.json");
            assert!(output.is_none());
            assert!(archetype.is_none());
            assert!(config.is_none());
            assert!(!force && !dry_run && !json);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_command_with_flags() {
    let cli = Cli::try_parse_from([
        "mvpgen",
        "generate",
        "--context",
        "ctx.yaml",
        "--output",
        "out",
        "--archetype",
        "landing-waitlist",
        "--config",
        "mvpgen.toml",
        "--force",
        "--dry-run",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            output,
            archetype,
            config,
            force,
            dry_run,
            ..
        } => {
            assert_eq!(output.unwrap().to_string_lossy(), "out");
            assert_eq!(archetype, Some(ArchetypeId::LandingWaitlist));
            assert_eq!(config.unwrap().to_string_lossy(), "mvpgen.toml");
            assert!(force);
            assert!(dry_run);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_unknown_archetype_rejected() {
    let result = Cli::try_parse_from([
        "mvpgen",
        "generate",
        "--context",
        "ctx.json",
        "--archetype",
        "mobile-app",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["mvpgen", "generate", "--context", "ctx.json", "--json"],
        vec!["mvpgen", "classify", "--context", "ctx.json"],
        vec!["mvpgen", "classify", "--context", "ctx.json", "--json"],
        vec!["mvpgen", "recommend", "--context", "ctx.json"],
        vec!["mvpgen", "validate", "--context", "ctx.json"],
        vec!["mvpgen", "archetypes"],
        vec!["mvpgen", "archetypes", "--json"],
    ];

    for args in commands {
        let result = Cli::try_parse_from(&args);
        assert!(result.is_ok(), "Failed to parse: {:?}", args);
    }
}

#[test]
fn test_context_is_required() {
    assert!(Cli::try_parse_from(["mvpgen", "classify"]).is_err());
    assert!(Cli::try_parse_from(["mvpgen", "validate"]).is_err());
}

#[test]
fn test_generate_writes_project() {
    let dir = tempfile::tempdir().unwrap();
    let context = dir.path().join("ctx.json");
    fs::write(
        &context,
        r#"{"trend": {"title": "Budget Helper"},
            "analysis": {"main_pain": "сложно рассчитать бюджет и стоимость"}}"#,
    )
    .unwrap();
    let out = dir.path().join("out");

    let cli = Cli::try_parse_from([
        "mvpgen",
        "generate",
        "--context",
        context.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();
    run_cli(cli).unwrap();

    assert!(out.join("package.json").exists());
    assert!(out.join("src/lib/calculator.ts").exists());
}

#[test]
fn test_generate_picks_up_settings_next_to_context() {
    let dir = tempfile::tempdir().unwrap();
    let context = dir.path().join("ctx.json");
    fs::write(&context, r#"{"trend": {"title": "Idea"}}"#).unwrap();
    fs::write(dir.path().join("mvpgen.toml"), "next_version = \"14.2.9\"\n").unwrap();
    let out = dir.path().join("out");

    let cli = Cli::try_parse_from([
        "mvpgen",
        "generate",
        "--context",
        context.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();
    run_cli(cli).unwrap();

    let manifest = fs::read_to_string(out.join("package.json")).unwrap();
    assert!(manifest.contains("\"next\": \"14.2.9\""));
}

#[test]
fn test_missing_explicit_settings_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let context = dir.path().join("ctx.json");
    fs::write(&context, r#"{"trend": {"title": "Idea"}}"#).unwrap();

    let cli = Cli::try_parse_from([
        "mvpgen",
        "generate",
        "--context",
        context.to_str().unwrap(),
        "--config",
        dir.path().join("nope.toml").to_str().unwrap(),
        "--dry-run",
    ])
    .unwrap();
    let err = run_cli(cli).unwrap_err();
    assert!(err.to_string().contains("settings file not found"));
}

#[test]
fn test_validate_fails_on_blank_title() {
    let dir = tempfile::tempdir().unwrap();
    let context = dir.path().join("ctx.json");
    fs::write(&context, r#"{"trend": {"title": "  "}}"#).unwrap();

    let cli = Cli::try_parse_from(["mvpgen", "validate", "--context", context.to_str().unwrap()])
        .unwrap();
    let err = run_cli(cli).unwrap_err();
    assert!(err.to_string().contains("1 error(s)"));
}
