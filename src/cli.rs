//! Command-line interface for the showcase profile editor.
//!
//! This module handles CLI argument parsing and the `catalog` and
//! `check-profile` subcommands.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use showcase_config::{Config, UserProfile};
use showcase_widgets::validate_profile;
use std::path::{Path, PathBuf};

/// showcase - edit your project showcase profile
#[derive(Parser)]
#[command(name = "showcase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed the profile store from a YAML or JSON file
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Use this config file instead of ~/.config/showcase/config.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Debug log verbosity (overrides RUST_LOG and the config file)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<CliLogLevel>,

    /// Route to open at startup (default: config start_route)
    #[arg(long, value_name = "ROUTE")]
    pub route: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective skill catalog
    Catalog {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Validate a profile file and report any errors
    CheckProfile {
        /// Profile file to check
        path: PathBuf,
    },
}

/// `--log-level` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliLogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliLogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            CliLogLevel::Off => log::LevelFilter::Off,
            CliLogLevel::Error => log::LevelFilter::Error,
            CliLogLevel::Warn => log::LevelFilter::Warn,
            CliLogLevel::Info => log::LevelFilter::Info,
            CliLogLevel::Debug => log::LevelFilter::Debug,
            CliLogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Profile file used to seed the store
    pub profile: Option<PathBuf>,
    /// Explicit config file path
    pub config: Option<PathBuf>,
    /// Log level from `--log-level`
    pub log_level: Option<log::LevelFilter>,
    /// Startup route override
    pub route: Option<String>,
}

impl RuntimeOptions {
    /// Load the config named by `--config`, or the default one
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    process_args(Cli::parse())
}

/// Handle already-parsed arguments
pub fn process_args(cli: Cli) -> CliResult {
    let options = RuntimeOptions {
        profile: cli.profile,
        config: cli.config,
        log_level: cli.log_level.map(CliLogLevel::to_level_filter),
        route: cli.route,
    };

    match cli.command {
        Some(Commands::Catalog { json }) => {
            let result = options
                .load_config()
                .and_then(|config| print_catalog(&config.skill_catalog, json));
            exit_with(result)
        }
        Some(Commands::CheckProfile { path }) => match check_profile(&path) {
            Ok(true) => CliResult::Exit(0),
            Ok(false) => CliResult::Exit(1),
            Err(e) => exit_with(Err(e)),
        },
        None => CliResult::Continue(options),
    }
}

fn exit_with(result: anyhow::Result<()>) -> CliResult {
    match result {
        Ok(()) => CliResult::Exit(0),
        Err(e) => {
            eprintln!("showcase: error: {e:#}");
            CliResult::Exit(1)
        }
    }
}

/// Print catalog entries one per line, or as JSON
fn print_catalog(catalog: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
    } else {
        for entry in catalog {
            println!("{entry}");
        }
    }
    Ok(())
}

/// Validate a profile file, printing each error.
///
/// Returns whether the profile passed.
fn check_profile(path: &Path) -> anyhow::Result<bool> {
    let profile = UserProfile::load_from_file(path)
        .with_context(|| format!("Failed to load profile from {}", path.display()))?;
    let report = profile_report(&profile);
    for line in &report {
        println!("{line}");
    }
    Ok(report.is_empty())
}

/// One `field: message` line per validation error
pub fn profile_report(profile: &UserProfile) -> Vec<String> {
    validate_profile(profile)
        .iter()
        .map(|(field, message)| format!("{}: {}", field.name(), message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_continue() {
        let cli = Cli::parse_from(["showcase"]);
        match process_args(cli) {
            CliResult::Continue(options) => {
                assert!(options.profile.is_none());
                assert!(options.log_level.is_none());
                assert!(options.route.is_none());
            }
            CliResult::Exit(_) => panic!("no subcommand should continue"),
        }
    }

    #[test]
    fn test_flags_reach_runtime_options() {
        let cli = Cli::parse_from([
            "showcase",
            "--profile",
            "me.yaml",
            "--log-level",
            "debug",
            "--route",
            "/profile",
        ]);
        let CliResult::Continue(options) = process_args(cli) else {
            panic!("expected Continue");
        };
        assert_eq!(options.profile, Some(PathBuf::from("me.yaml")));
        assert_eq!(options.log_level, Some(log::LevelFilter::Debug));
        assert_eq!(options.route.as_deref(), Some("/profile"));
    }

    #[test]
    fn test_profile_report_lists_errors_in_form_order() {
        let profile = UserProfile {
            email: "nope".into(),
            ..Default::default()
        };
        assert_eq!(
            profile_report(&profile),
            vec![
                "name: Name is required",
                "title: Title is required",
                "email: Email is invalid",
            ]
        );
    }
}
