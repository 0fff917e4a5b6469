// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for loading and validating plugin options.

use alchemist_config::{
    ContextMode, OptionsError, PluginOptions, load_and_validate_path, load_and_validate_str,
};
use alchemist_core::ManifestSource;
use figment::Jail;
use std::path::Path;

/// A location manifest with a label filter loads and normalizes.
#[test]
fn toml_options_validate_and_normalize() {
    let options = load_and_validate_str(
        r#"
manifest = "manifest.yml"
context_mode = "filtered"

[included]
env = "prod"
region = ["eu-west-1", "us-east-1"]
"#,
    )
    .expect("options should validate");

    assert_eq!(
        options.manifest,
        ManifestSource::Location("manifest.yml".into())
    );
    assert_eq!(options.context_mode, ContextMode::Filtered);
    assert_eq!(options.included["env"], vec!["prod"]);
    assert_eq!(options.included["region"], vec!["eu-west-1", "us-east-1"]);
}

/// An inline manifest table is kept as an object.
#[test]
fn inline_manifest_table_is_accepted() {
    let options = load_and_validate_str(
        r#"
[manifest]
steps = []
name = "inline"
"#,
    )
    .expect("options should validate");

    match options.manifest {
        ManifestSource::Inline(document) => {
            assert_eq!(document["name"], serde_json::json!("inline"));
            assert_eq!(document["steps"], serde_json::json!([]));
        }
        other => panic!("expected inline manifest, got {other:?}"),
    }
}

/// Options without a manifest fail before anything else happens.
#[test]
fn missing_manifest_fails_validation() {
    let err = load_and_validate_str(
        r#"
[included]
env = "prod"
"#,
    )
    .expect_err("manifest is required");

    assert!(
        err.issues
            .iter()
            .any(|issue| matches!(issue, OptionsError::MissingKey { key } if key == "manifest"))
    );
}

/// Malformed TOML is reported as a diagnostic rather than a panic.
#[test]
fn malformed_toml_is_reported() {
    let err = load_and_validate_str("manifest = ").expect_err("invalid TOML");
    assert!(!err.issues.is_empty());
}

/// Environment variables fill in options missing from the file.
#[test]
fn env_supplies_manifest_location() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "alchemist.toml",
            r#"
[included]
env = ["prod", "staging"]
"#,
        )?;
        jail.set_env("ALCHEMIST_MANIFEST", "build/manifest.yml");

        let options: PluginOptions =
            load_and_validate_path(Path::new("alchemist.toml")).expect("options should validate");
        assert_eq!(
            options.manifest,
            ManifestSource::Location("build/manifest.yml".into())
        );
        assert_eq!(options.included["env"], vec!["prod", "staging"]);
        Ok(())
    });
}

/// Label filters set through the environment survive validation as strings.
#[test]
fn env_supplies_label_filter() {
    Jail::expect_with(|jail| {
        jail.create_file("alchemist.toml", r#"manifest = "manifest.yml""#)?;
        jail.set_env("ALCHEMIST_CONTEXT_MODE", "filtered");
        jail.set_env("ALCHEMIST_INCLUDED_ENV", "prod");
        jail.set_env("ALCHEMIST_INCLUDED_TIER", "1");

        let options =
            load_and_validate_path(Path::new("alchemist.toml")).expect("options should validate");
        assert_eq!(options.context_mode, ContextMode::Filtered);
        assert_eq!(options.included["env"], vec!["prod"]);
        assert_eq!(options.included["tier"], vec!["1"]);
        Ok(())
    });
}
