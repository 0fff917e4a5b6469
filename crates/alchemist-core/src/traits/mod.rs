// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the plugin's host and its external collaborators.
//!
//! Async traits use `#[async_trait]` so hosts can hold collaborators as
//! trait objects.

pub mod command;
pub mod data_adapter;
pub mod engine;
pub mod node;
pub mod plugin;

pub use command::{CommandContext, ConfigLoader, PluginCommand};
pub use data_adapter::DataAdapter;
pub use engine::{TransmutationEngine, TransmuteRequest};
pub use node::{ConfigurationNode, flatten_configs};
pub use plugin::{HostContext, HostPlugin, PluginFactory};
