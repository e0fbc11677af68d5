//! Parse tests for every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use filefix_core::CasingStyle;
use std::path::PathBuf;

#[test]
fn cli_parse_preview() {
    match parse(&["filefix", "preview", "My File.JPG", "a...b.txt"]) {
        CliCommand::Preview { names, style } => {
            assert_eq!(names, ["My File.JPG", "a...b.txt"]);
            assert!(style.is_none());
        }
        _ => panic!("expected Preview"),
    }
}

#[test]
fn cli_parse_preview_style() {
    match parse(&["filefix", "preview", "x.txt", "--style", "pascal"]) {
        CliCommand::Preview { style, .. } => assert_eq!(style, Some(CasingStyle::Pascal)),
        _ => panic!("expected Preview with --style"),
    }
    match parse(&["filefix", "preview", "x.txt", "-s", "kebab"]) {
        CliCommand::Preview { style, .. } => assert_eq!(style, Some(CasingStyle::Kebab)),
        _ => panic!("expected Preview with -s"),
    }
}

#[test]
fn cli_parse_preview_requires_names() {
    assert!(Cli::try_parse_from(["filefix", "preview"]).is_err());
}

#[test]
fn cli_parse_rejects_unknown_style() {
    assert!(Cli::try_parse_from(["filefix", "preview", "a.txt", "--style", "snake"]).is_err());
}

#[test]
fn cli_parse_zip() {
    match parse(&["filefix", "zip", "a.txt", "b.png"]) {
        CliCommand::Zip {
            paths,
            style,
            output,
            user,
        } => {
            assert_eq!(paths, [PathBuf::from("a.txt"), PathBuf::from("b.png")]);
            assert!(style.is_none());
            assert!(output.is_none());
            assert!(user.is_none());
        }
        _ => panic!("expected Zip"),
    }
}

#[test]
fn cli_parse_zip_all_flags() {
    match parse(&[
        "filefix",
        "zip",
        "a.txt",
        "--style",
        "camel",
        "--output",
        "/tmp/out.zip",
        "--user",
        "me@example.com",
    ]) {
        CliCommand::Zip {
            paths,
            style,
            output,
            user,
        } => {
            assert_eq!(paths, [PathBuf::from("a.txt")]);
            assert_eq!(style, Some(CasingStyle::Camel));
            assert_eq!(output.as_deref(), Some(std::path::Path::new("/tmp/out.zip")));
            assert_eq!(user.as_deref(), Some("me@example.com"));
        }
        _ => panic!("expected Zip with flags"),
    }
}

#[test]
fn cli_parse_usage_and_reset() {
    match parse(&["filefix", "usage"]) {
        CliCommand::Usage { user } => assert!(user.is_none()),
        _ => panic!("expected Usage"),
    }
    match parse(&["filefix", "reset-usage", "--user", "a@b.c"]) {
        CliCommand::ResetUsage { user } => assert_eq!(user.as_deref(), Some("a@b.c")),
        _ => panic!("expected ResetUsage"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["filefix", "checksum", "/path/to/cleaned-files.zip"]) {
        CliCommand::Checksum { path } => assert_eq!(path, "/path/to/cleaned-files.zip"),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["filefix", "usage", "--config", "/etc/filefix.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/filefix.toml")));
}
