// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw option loading using Figment for layered config merging.
//!
//! Hosts that keep the plugin's options in their own configuration pass the
//! raw value straight to the validator. Hosts that keep them in a separate
//! TOML file use these loaders, with `ALCHEMIST_*` environment overrides.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde_json::Value;

/// Load raw options from a TOML string only (no environment overrides).
pub fn load_options_from_str(toml_content: &str) -> Result<Value, figment::Error> {
    Figment::new().merge(Toml::string(toml_content)).extract()
}

/// Load raw options from a TOML file with environment overrides.
///
/// Merge order (later overrides earlier):
/// 1. The TOML file at `path` (a missing file contributes nothing)
/// 2. `ALCHEMIST_*` environment variables
///
/// Label values set through the environment stay strings even when they look
/// like numbers or booleans: `ALCHEMIST_INCLUDED_TIER=1` yields `"1"`.
pub fn load_options_from_path(path: &Path) -> Result<Value, figment::Error> {
    let mut raw: Value = build_figment(path).extract()?;
    restore_env_label_text(&mut raw);
    Ok(raw)
}

/// Build the Figment used for path-based loading (exposed for diagnostic use).
pub fn build_figment(path: &Path) -> Figment {
    Figment::new().merge(Toml::file(path)).merge(env_provider())
}

/// Environment provider mapping `ALCHEMIST_` variables onto option keys.
///
/// Uses an explicit `map()` rather than `split("_")` because `context_mode`
/// itself contains an underscore. `ALCHEMIST_INCLUDED_ENV` maps to
/// `included.env`. The closure sees the key before figment lowercases it.
fn env_provider() -> Env {
    Env::prefixed("ALCHEMIST_").map(|key| {
        key.as_str()
            .to_ascii_lowercase()
            .replacen("included_", "included.", 1)
            .into()
    })
}

/// Figment parses environment values, so a numeric or boolean label value
/// arrives as a number or a boolean. Put the variable's text back.
fn restore_env_label_text(raw: &mut Value) {
    let Some(included) = raw.get_mut("included").and_then(Value::as_object_mut) else {
        return;
    };
    for (key, text) in env_provider().iter() {
        let Some(label) = key.as_str().strip_prefix("included.") else {
            continue;
        };
        if let Some(value) = included.get_mut(label) {
            if matches!(value, Value::Number(_) | Value::Bool(_)) {
                *value = Value::String(text.trim().to_string());
            }
        }
    }
}
