// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data adapter trait for resolving manifest locations.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::AlchemistError;
use crate::types::{Context, LoadedManifest};

/// Resolves and loads manifests on behalf of the transmutation engine.
///
/// The same adapter instance is handed to the engine with every request so
/// the engine can load any further resources relative to the manifest.
#[async_trait]
pub trait DataAdapter: Send + Sync {
    /// Loads the manifest at `location`, embedding `context` into it.
    ///
    /// Returns the manifest together with the base path that relative
    /// references inside it resolve against.
    async fn load_manifest(
        &self,
        location: &str,
        context: &Context,
    ) -> Result<(LoadedManifest, PathBuf), AlchemistError>;
}
