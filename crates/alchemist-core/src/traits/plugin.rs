// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host plugin lifecycle traits.
//!
//! The host owns the lifecycle: it creates plugins through a
//! [`PluginFactory`], calls the hooks, and dispatches registered commands.

use async_trait::async_trait;

use crate::error::AlchemistError;
use crate::traits::command::PluginCommand;
use crate::traits::node::ConfigurationNode;

/// State the host passes to lifecycle hooks.
pub struct HostContext<'a> {
    /// The host's top-level project configuration.
    pub config: &'a dyn ConfigurationNode,
}

/// A plugin as seen by the host.
#[async_trait]
pub trait HostPlugin: Send + Sync {
    fn name(&self) -> &str;

    /// Called once while the host initializes a project.
    async fn init(&self, ctx: &HostContext<'_>) -> Result<(), AlchemistError>;

    /// Called when the host bumps the project version.
    async fn update_version(
        &self,
        old_version: &semver::Version,
        new_version: &semver::Version,
        ctx: &HostContext<'_>,
    ) -> Result<(), AlchemistError>;

    /// Commands this plugin contributes to the host.
    fn register_commands(&self) -> Vec<Box<dyn PluginCommand>>;
}

/// Creates plugins from the raw options found in the host's configuration.
pub trait PluginFactory: Send + Sync {
    fn create(&self, options: &serde_json::Value) -> Result<Box<dyn HostPlugin>, AlchemistError>;
}
