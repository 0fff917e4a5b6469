// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Alchemist workflow plugin.
//!
//! This crate provides the error type, the shared value types, and the
//! traits that describe the plugin's host and its external collaborators
//! (configuration nodes, data adapter, transmutation engine).

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AlchemistError;
pub use types::{
    CommandUsage, ConfigTree, Context, Labels, LoadedManifest, ManifestSource, OneOrMany,
};

pub use traits::{
    CommandContext, ConfigLoader, ConfigurationNode, DataAdapter, HostContext, HostPlugin,
    PluginCommand, PluginFactory, TransmutationEngine, TransmuteRequest, flatten_configs,
};
