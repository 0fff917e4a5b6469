// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command registration contract between the plugin and its host.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AlchemistError;
use crate::traits::node::ConfigurationNode;
use crate::types::CommandUsage;

/// Host capability for loading the active project configuration.
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    async fn load_config(&self) -> Result<Arc<dyn ConfigurationNode>, AlchemistError>;
}

/// Everything the host hands to a command when it runs.
pub struct CommandContext<'a> {
    /// Trailing arguments after the command path.
    pub args: Vec<String>,
    pub config_loader: &'a dyn ConfigLoader,
}

/// A subcommand contributed to the host's command-line surface.
#[async_trait]
pub trait PluginCommand: Send + Sync {
    /// Command paths this command answers to, e.g. `[["alchemist"]]`.
    fn paths(&self) -> Vec<Vec<String>>;

    fn usage(&self) -> CommandUsage;

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<(), AlchemistError>;
}
