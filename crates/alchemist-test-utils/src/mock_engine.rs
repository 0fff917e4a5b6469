// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock transmutation engine for deterministic testing.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use alchemist_core::{
    AlchemistError, Context, LoadedManifest, TransmutationEngine, TransmuteRequest,
};

/// The owned parts of a [`TransmuteRequest`] the engine received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub manifest_base_path: Option<PathBuf>,
    pub loaded_manifest: LoadedManifest,
    pub context_values: Context,
}

/// A transmutation engine that records requests instead of running them.
#[derive(Default)]
pub struct MockEngine {
    failure: Option<String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every run with a `Transmutation` error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl TransmutationEngine for MockEngine {
    async fn transmute(&self, request: TransmuteRequest<'_>) -> Result<(), AlchemistError> {
        tracing::debug!(base_path = ?request.manifest_base_path, "mock engine received request");
        self.requests.lock().await.push(RecordedRequest {
            manifest_base_path: request.manifest_base_path,
            loaded_manifest: request.loaded_manifest,
            context_values: request.context_values,
        });

        match &self.failure {
            Some(message) => Err(AlchemistError::Transmutation {
                message: message.clone(),
                source: None,
            }),
            None => Ok(()),
        }
    }
}
