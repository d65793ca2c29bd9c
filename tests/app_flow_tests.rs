//! End-to-end page flow tests: config and profile files on disk through the
//! form to the store, without a GPU window.

use showcase::cli::{Cli, CliResult, RuntimeOptions, process_args};
use showcase::{PROFILE_ROUTE, Pages};
use showcase_config::{MemoryProfileStore, ProfileStore, UserProfile};
use showcase_widgets::{FormField, SubmitOutcome};
use std::fs;
use tempfile::TempDir;

use clap::Parser;

#[test]
fn test_seeded_profile_edit_and_save() {
    let dir = TempDir::new().unwrap();
    let profile_path = dir.path().join("me.yaml");
    fs::write(
        &profile_path,
        "name: Ada Lovelace\ntitle: Analyst\nemail: ada@example.com\nskills:\n  - Python\n",
    )
    .unwrap();

    let profile = UserProfile::load_from_file(&profile_path).unwrap();
    let options = RuntimeOptions {
        config: Some(dir.path().join("config.yaml")),
        ..Default::default()
    };
    let config = options.load_config().unwrap();

    let mut pages = Pages::new(
        config,
        MemoryProfileStore::with_profile(profile),
        PROFILE_ROUTE,
    );
    let form = pages.form_mut().unwrap();
    assert_eq!(form.field(FormField::Name), "Ada Lovelace");
    form.set_field(FormField::Location, "London");

    assert_eq!(pages.submit_form(), Some(SubmitOutcome::Saved));
    let saved = pages.store().profile().unwrap();
    assert_eq!(saved.location, "London");
    assert_eq!(saved.skills, vec!["Python"]);
    assert_eq!(pages.store().revision(), 1);
}

#[test]
fn test_config_routes_drive_navigation() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, "submit_route: /gallery\ncancel_route: /home\n").unwrap();

    let options = RuntimeOptions {
        config: Some(config_path),
        ..Default::default()
    };
    let config = options.load_config().unwrap();

    let mut pages = Pages::new(config.clone(), MemoryProfileStore::new(), PROFILE_ROUTE);
    pages.cancel_form();
    assert_eq!(pages.router().current(), "/home");

    let mut pages = Pages::new(config, MemoryProfileStore::new(), PROFILE_ROUTE);
    let form = pages.form_mut().unwrap();
    form.set_field(FormField::Name, "Ada");
    form.set_field(FormField::Title, "Analyst");
    form.set_field(FormField::Email, "ada@example.com");
    pages.submit_form();
    assert_eq!(pages.router().current(), "/gallery");
}

#[test]
fn test_invalid_submit_stays_on_form() {
    let mut pages = Pages::new(
        Default::default(),
        MemoryProfileStore::new(),
        PROFILE_ROUTE,
    );
    let outcome = pages.submit_form();
    assert!(matches!(outcome, Some(SubmitOutcome::Invalid(_))));
    assert_eq!(pages.router().current(), PROFILE_ROUTE);
    assert!(pages.form().unwrap().errors().get(FormField::Email).is_some());
}

#[test]
fn test_check_profile_exit_codes() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.yaml");
    let bad = dir.path().join("bad.yaml");
    fs::write(&good, "name: A\ntitle: B\nemail: a@b.co\n").unwrap();
    fs::write(&bad, "name: A\nemail: not-an-email\n").unwrap();

    let run = |path: &std::path::Path| {
        let cli = Cli::parse_from(["showcase", "check-profile", path.to_str().unwrap()]);
        match process_args(cli) {
            CliResult::Exit(code) => code,
            CliResult::Continue(_) => panic!("subcommand should exit"),
        }
    };

    assert_eq!(run(&good), 0);
    assert_eq!(run(&bad), 1);
    assert_eq!(run(&dir.path().join("missing.yaml")), 1);
}

#[test]
fn test_repeated_skills_in_profile_file_are_not_saved() {
    let dir = TempDir::new().unwrap();
    let profile_path = dir.path().join("me.yaml");
    fs::write(
        &profile_path,
        "name: Ada\ntitle: Analyst\nemail: ada@example.com\nskills: [Rust, Rust, Go]\n",
    )
    .unwrap();

    let profile = UserProfile::load_from_file(&profile_path).unwrap();
    let mut pages = Pages::new(
        Default::default(),
        MemoryProfileStore::with_profile(profile),
        PROFILE_ROUTE,
    );
    assert_eq!(pages.form().unwrap().skills(), ["Rust", "Go"]);

    assert_eq!(pages.submit_form(), Some(SubmitOutcome::Saved));
    assert_eq!(pages.store().profile().unwrap().skills, vec!["Rust", "Go"]);
}
