// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option handling for the Alchemist workflow plugin.
//!
//! Raw options are validated into [`PluginOptions`]: the manifest source, the
//! label filter (every value normalized to a non-empty list), and the context
//! mode. Validation collects every issue and reports them as a miette
//! diagnostic.
//!
//! # Usage
//!
//! ```
//! use alchemist_config::validate_options;
//!
//! let raw = serde_json::json!({ "manifest": "manifest.yml", "included": { "env": "prod" } });
//! let options = validate_options(&raw).expect("valid options");
//! assert_eq!(options.included["env"], vec!["prod"]);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{OptionsError, ValidationError, render_errors};
pub use loader::{load_options_from_path, load_options_from_str};
pub use model::{ContextMode, IncludedLabels, PluginOptions};
pub use validation::validate_options;

/// Load options from a TOML file (plus `ALCHEMIST_*` overrides) and validate them.
pub fn load_and_validate_path(path: &Path) -> Result<PluginOptions, ValidationError> {
    match loader::load_options_from_path(path) {
        Ok(raw) => validation::validate_options(&raw),
        Err(err) => Err(ValidationError::new(diagnostic::figment_to_options_errors(
            err,
        ))),
    }
}

/// Load options from a TOML string and validate them.
pub fn load_and_validate_str(toml_content: &str) -> Result<PluginOptions, ValidationError> {
    match loader::load_options_from_str(toml_content) {
        Ok(raw) => validation::validate_options(&raw),
        Err(err) => Err(ValidationError::new(diagnostic::figment_to_options_errors(
            err,
        ))),
    }
}
