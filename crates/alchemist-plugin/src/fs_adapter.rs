// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem data adapter.
//!
//! Loads manifest documents from disk for hosts that do not bring their own
//! adapter. The format is picked by file extension: `.yml`/`.yaml`, `.json`,
//! or `.toml`.

use std::error::Error;
use std::path::{Path, PathBuf};

use alchemist_core::types::value_kind;
use alchemist_core::{AlchemistError, Context, DataAdapter, LoadedManifest};
use async_trait::async_trait;
use serde_json::Value;

/// Data adapter reading manifests relative to a root directory.
///
/// The manifest base path is the directory containing the manifest file.
#[derive(Debug, Clone)]
pub struct FileDataAdapter {
    root: PathBuf,
}

impl FileDataAdapter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `location` against the root. Absolute locations are kept.
    pub fn resolve(&self, location: &str) -> PathBuf {
        let path = Path::new(location);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for FileDataAdapter {
    fn default() -> Self {
        Self::new(".")
    }
}

#[async_trait]
impl DataAdapter for FileDataAdapter {
    async fn load_manifest(
        &self,
        location: &str,
        context: &Context,
    ) -> Result<(LoadedManifest, PathBuf), AlchemistError> {
        let path = self.resolve(location);
        tracing::debug!(path = %path.display(), "reading manifest file");

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| AlchemistError::manifest_load(location, e))?;
        let document = parse_document(&path, &content)
            .map_err(|e| AlchemistError::manifest_load(location, e))?;
        let document = match document {
            Value::Object(document) => document,
            other => {
                return Err(AlchemistError::manifest_load(
                    location,
                    format!("manifest must be an object, found {}", value_kind(&other)),
                ));
            }
        };

        let base_path = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        Ok((LoadedManifest::with_context(document, context), base_path))
    }
}

fn parse_document(path: &Path, content: &str) -> Result<Value, Box<dyn Error + Send + Sync>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yml") | Some("yaml") => Ok(serde_yaml::from_str(content)?),
        Some("json") => Ok(serde_json::from_str(content)?),
        Some("toml") => Ok(toml::from_str(content)?),
        other => Err(format!(
            "unsupported manifest format `{}`, expected .yml, .yaml, .json, or .toml",
            other.unwrap_or("")
        )
        .into()),
    }
}
