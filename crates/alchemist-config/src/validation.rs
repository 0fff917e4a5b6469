// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation and normalization of raw plugin options.
//!
//! Options arrive from the host as an arbitrary value. Validation checks the
//! shape `{ manifest: string-or-object, included?: map<string, string-or-string[]>,
//! context_mode?: string }`, collects every issue instead of failing fast, and
//! normalizes `included` values into non-empty string sequences.

use std::str::FromStr;

use alchemist_core::types::value_kind;
use alchemist_core::ManifestSource;
use serde_json::{Map, Value};

use crate::diagnostic::{OptionsError, ValidationError, suggest_key};
use crate::model::{ContextMode, IncludedLabels, PluginOptions};

const MANIFEST_KEY: &str = "manifest";
const INCLUDED_KEY: &str = "included";
const CONTEXT_MODE_KEY: &str = "context_mode";

/// Option keys the plugin understands.
pub const KNOWN_KEYS: &[&str] = &[MANIFEST_KEY, INCLUDED_KEY, CONTEXT_MODE_KEY];

/// Validate raw plugin options and normalize them into [`PluginOptions`].
///
/// Returns every issue found, not just the first. Unknown keys are ignored
/// with a warning.
pub fn validate_options(raw: &Value) -> Result<PluginOptions, ValidationError> {
    let Some(object) = raw.as_object() else {
        return Err(ValidationError::single(OptionsError::InvalidType {
            key: "<options>".to_string(),
            found: value_kind(raw).to_string(),
            expected: "an object".to_string(),
        }));
    };

    let mut issues = Vec::new();

    let manifest = validate_manifest(object.get(MANIFEST_KEY), &mut issues);
    let included = validate_included(object.get(INCLUDED_KEY), &mut issues);
    let context_mode = validate_context_mode(object.get(CONTEXT_MODE_KEY), &mut issues);
    warn_unknown_keys(object);

    match manifest {
        Some(manifest) if issues.is_empty() => Ok(PluginOptions {
            manifest,
            included,
            context_mode,
        }),
        _ => Err(ValidationError::new(issues)),
    }
}

fn validate_manifest(
    value: Option<&Value>,
    issues: &mut Vec<OptionsError>,
) -> Option<ManifestSource> {
    match value {
        None => {
            issues.push(OptionsError::MissingKey {
                key: MANIFEST_KEY.to_string(),
            });
            None
        }
        Some(Value::String(location)) if location.trim().is_empty() => {
            issues.push(OptionsError::InvalidValue {
                key: MANIFEST_KEY.to_string(),
                message: "manifest location must not be empty".to_string(),
            });
            None
        }
        Some(Value::String(location)) => Some(ManifestSource::Location(location.clone())),
        Some(Value::Object(document)) => Some(ManifestSource::Inline(document.clone())),
        Some(other) => {
            issues.push(OptionsError::InvalidType {
                key: MANIFEST_KEY.to_string(),
                found: value_kind(other).to_string(),
                expected: "a manifest location string or an inline manifest object".to_string(),
            });
            None
        }
    }
}

fn validate_included(value: Option<&Value>, issues: &mut Vec<OptionsError>) -> IncludedLabels {
    let mut included = IncludedLabels::new();

    let entries = match value {
        None => return included,
        Some(Value::Object(entries)) => entries,
        Some(other) => {
            issues.push(OptionsError::InvalidType {
                key: INCLUDED_KEY.to_string(),
                found: value_kind(other).to_string(),
                expected: "a mapping of label keys to label values".to_string(),
            });
            return included;
        }
    };

    for (label, accepted) in entries {
        let key = format!("{INCLUDED_KEY}.{label}");
        if let Some(values) = normalize_label_values(&key, accepted, issues) {
            included.insert(label.clone(), values);
        }
    }

    included
}

/// Coerce a string-or-list label value into a non-empty sequence of strings.
fn normalize_label_values(
    key: &str,
    value: &Value,
    issues: &mut Vec<OptionsError>,
) -> Option<Vec<String>> {
    match value {
        Value::String(single) => Some(vec![single.clone()]),
        Value::Array(items) if items.is_empty() => {
            issues.push(OptionsError::InvalidValue {
                key: key.to_string(),
                message: "must list at least one label value".to_string(),
            });
            None
        }
        Value::Array(items) => {
            let mut values = Vec::with_capacity(items.len());
            let mut valid = true;
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => values.push(s.clone()),
                    other => {
                        valid = false;
                        issues.push(OptionsError::InvalidType {
                            key: format!("{key}[{i}]"),
                            found: value_kind(other).to_string(),
                            expected: "a string".to_string(),
                        });
                    }
                }
            }
            valid.then_some(values)
        }
        other => {
            issues.push(OptionsError::InvalidType {
                key: key.to_string(),
                found: value_kind(other).to_string(),
                expected: "a string or a list of strings".to_string(),
            });
            None
        }
    }
}

fn validate_context_mode(value: Option<&Value>, issues: &mut Vec<OptionsError>) -> ContextMode {
    match value {
        None => ContextMode::default(),
        Some(Value::String(mode)) => ContextMode::from_str(mode).unwrap_or_else(|_| {
            issues.push(OptionsError::InvalidValue {
                key: CONTEXT_MODE_KEY.to_string(),
                message: format!(
                    "unknown context mode `{mode}`, expected `recursive` or `filtered`"
                ),
            });
            ContextMode::default()
        }),
        Some(other) => {
            issues.push(OptionsError::InvalidType {
                key: CONTEXT_MODE_KEY.to_string(),
                found: value_kind(other).to_string(),
                expected: "a string".to_string(),
            });
            ContextMode::default()
        }
    }
}

fn warn_unknown_keys(object: &Map<String, Value>) {
    for key in object.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
        match suggest_key(key, KNOWN_KEYS) {
            Some(suggestion) => tracing::warn!(
                key = %key,
                suggestion = %suggestion,
                "ignoring unknown plugin option, did you mean `{suggestion}`?"
            ),
            None => tracing::warn!(key = %key, "ignoring unknown plugin option"),
        }
    }
}
