// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated plugin options.

use std::collections::BTreeMap;

use alchemist_core::ManifestSource;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Accepted label values per label key. Every sequence is non-empty.
pub type IncludedLabels = BTreeMap<String, Vec<String>>;

/// How the context handed to the transmutation engine is built.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ContextMode {
    /// The whole configuration tree, children nested under `configs`.
    #[default]
    Recursive,
    /// `{ configs: [...] }` holding every flattened node that passes the label filter.
    Filtered,
}

/// Plugin options after validation and normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginOptions {
    /// Manifest location or inline manifest object.
    pub manifest: ManifestSource,
    /// Label filter; empty means every node is included.
    pub included: IncludedLabels,
    pub context_mode: ContextMode,
}

impl PluginOptions {
    /// Options with the given manifest and all other fields at their defaults.
    pub fn new(manifest: ManifestSource) -> Self {
        Self {
            manifest,
            included: IncludedLabels::new(),
            context_mode: ContextMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn context_mode_defaults_to_recursive() {
        assert_eq!(ContextMode::default(), ContextMode::Recursive);
    }

    #[test]
    fn context_mode_parses_case_insensitively() {
        assert_eq!(ContextMode::from_str("filtered").unwrap(), ContextMode::Filtered);
        assert_eq!(ContextMode::from_str("Recursive").unwrap(), ContextMode::Recursive);
        assert!(ContextMode::from_str("flat").is_err());
        assert_eq!(ContextMode::Filtered.to_string(), "filtered");
    }

    #[test]
    fn new_options_have_empty_filter() {
        let options = PluginOptions::new(ManifestSource::Location("manifest.yml".into()));
        assert!(options.included.is_empty());
        assert_eq!(options.context_mode, ContextMode::Recursive);
    }
}
