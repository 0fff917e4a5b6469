// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option validation errors rendered as miette diagnostics.
//!
//! Every issue found while validating options becomes one [`OptionsError`];
//! the issues are collected into a single [`ValidationError`] whose related
//! diagnostics list them all.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use alchemist_core::AlchemistError;
use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A single problem with the plugin options.
#[derive(Debug, Error, Diagnostic)]
pub enum OptionsError {
    /// A required option is absent.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(alchemist::options::missing_key),
        help("add `{key}` to the alchemist plugin options")
    )]
    MissingKey { key: String },

    /// An option value has the wrong type.
    #[error("invalid type for key `{key}`: found {found}, expected {expected}")]
    #[diagnostic(code(alchemist::options::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        found: String,
        expected: String,
    },

    /// An option value has the right type but an unacceptable value.
    #[error("invalid value for key `{key}`: {message}")]
    #[diagnostic(code(alchemist::options::invalid_value))]
    InvalidValue { key: String, message: String },

    /// Options could not be read from their source.
    #[error("configuration error: {0}")]
    #[diagnostic(code(alchemist::options::other))]
    Other(String),
}

/// Plugin options failed validation; the plugin must not run.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid plugin options: {}", join_issues(.issues))]
#[diagnostic(code(alchemist::options::invalid))]
pub struct ValidationError {
    #[related]
    pub issues: Vec<OptionsError>,
}

impl ValidationError {
    pub fn new(issues: Vec<OptionsError>) -> Self {
        Self { issues }
    }

    pub fn single(issue: OptionsError) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

impl From<ValidationError> for AlchemistError {
    fn from(err: ValidationError) -> Self {
        AlchemistError::Validation(join_issues(&err.issues))
    }
}

fn join_issues(issues: &[OptionsError]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert a `figment::Error` into option diagnostics, one per contained error.
pub fn figment_to_options_errors(err: figment::Error) -> Vec<OptionsError> {
    use figment::error::Kind;

    let mut errors = Vec::new();
    for error in err {
        let key = error
            .path
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(".");
        let options_error = match &error.kind {
            Kind::MissingField(field) => OptionsError::MissingKey {
                key: field.clone().into_owned(),
            },
            Kind::InvalidType(actual, expected) => OptionsError::InvalidType {
                key,
                found: actual.to_string(),
                expected: expected.to_string(),
            },
            _ => OptionsError::Other(format!("{error}")),
        };
        errors.push(options_error);
    }
    errors
}

/// Suggest a similar key name using Jaro-Winkler string similarity.
///
/// Returns the best match above the similarity threshold, or `None` if
/// no valid key is close enough to the unknown key.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    let mut best_score = SUGGESTION_THRESHOLD;
    let mut best_match = None;

    for &key in valid_keys {
        let score = strsim::jaro_winkler(unknown, key);
        if score > best_score {
            best_score = score;
            best_match = Some(key.to_string());
        }
    }

    best_match
}

/// Render a validation error to stderr using miette's graphical handler.
pub fn render_errors(error: &ValidationError) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    let diagnostic: &dyn Diagnostic = error;
    if handler.render_report(&mut buf, diagnostic).is_ok() {
        eprint!("{buf}");
    } else {
        eprintln!("Error: {error}");
    }
}
