// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context construction from project configuration.
//!
//! Two shapes are supported, selected by [`ContextMode`]:
//!
//! - recursive: the root node's hash, with each node's children nested under
//!   `configs`, down the whole tree.
//! - filtered: `{ "configs": [...] }` with one flat hash per node of the
//!   pre-order flattened tree that passes the label filter.

use alchemist_config::{ContextMode, PluginOptions};
use alchemist_core::{ConfigurationNode, Context, flatten_configs};
use serde_json::{Map, Value};

use crate::filter::filter_by_labels;

/// Key holding child hashes (recursive) or the node list (filtered).
pub const CONFIGS_KEY: &str = "configs";

/// Key used when a node's hash is not an object and has to be wrapped.
pub const VALUE_KEY: &str = "value";

/// Build the context for `root` according to the options' context mode.
pub fn build_context(root: &dyn ConfigurationNode, options: &PluginOptions) -> Context {
    match options.context_mode {
        ContextMode::Recursive => {
            if !options.included.is_empty() {
                tracing::warn!(
                    mode = %options.context_mode,
                    "label filter is ignored when building a recursive context"
                );
            }
            build_recursive_context(root)
        }
        ContextMode::Filtered => {
            let flattened = flatten_configs(root);
            let filtered = filter_by_labels(&flattened, &options.included);
            tracing::debug!(
                node_count = flattened.len(),
                retained = filtered.len(),
                "filtered configuration nodes"
            );
            build_filtered_context(&filtered)
        }
    }
}

/// The whole tree under `root` as one nested value.
pub fn build_recursive_context(root: &dyn ConfigurationNode) -> Context {
    Context::new(recursive_hash(root))
}

/// `{ "configs": [hash, ...] }` for the given nodes, in order.
pub fn build_filtered_context<N>(nodes: &[&N]) -> Context
where
    N: ConfigurationNode + ?Sized,
{
    let configs = nodes.iter().map(|node| node.to_hash()).collect();
    let mut context = Map::new();
    context.insert(CONFIGS_KEY.to_string(), Value::Array(configs));
    Context::new(Value::Object(context))
}

fn recursive_hash(node: &dyn ConfigurationNode) -> Value {
    let mut hash = match node.to_hash() {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert(VALUE_KEY.to_string(), other);
            map
        }
    };
    let children = node.children().into_iter().map(recursive_hash).collect();
    hash.insert(CONFIGS_KEY.to_string(), Value::Array(children));
    Value::Object(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alchemist_core::{ConfigTree, Labels, ManifestSource};
    use serde_json::json;
    use tracing_test::traced_test;

    fn project() -> ConfigTree {
        ConfigTree::new("root")
            .with_label("env", ["prod"])
            .with_value("version", json!("1.2.0"))
            .with_child(
                ConfigTree::new("api")
                    .with_label("env", ["prod"])
                    .with_child(ConfigTree::new("worker").with_label("env", ["dev"])),
            )
            .with_child(ConfigTree::new("web").with_label("env", ["dev"]))
    }

    fn options(mode: ContextMode, included: &[(&str, &str)]) -> PluginOptions {
        let mut options = PluginOptions::new(ManifestSource::Location("manifest.yml".into()));
        options.context_mode = mode;
        options.included = included
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect();
        options
    }

    #[test]
    fn recursive_context_nests_the_whole_tree() {
        let context = build_recursive_context(&project());
        assert_eq!(
            context.into_value(),
            json!({
                "name": "root",
                "labels": { "env": ["prod"] },
                "version": "1.2.0",
                "configs": [
                    {
                        "name": "api",
                        "labels": { "env": ["prod"] },
                        "configs": [
                            { "name": "worker", "labels": { "env": ["dev"] }, "configs": [] }
                        ]
                    },
                    { "name": "web", "labels": { "env": ["dev"] }, "configs": [] }
                ]
            })
        );
    }

    #[test]
    fn filtered_context_lists_matching_nodes_flat() {
        let tree = project();
        let context = build_context(&tree, &options(ContextMode::Filtered, &[("env", "prod")]));
        let value = context.into_value();
        let names: Vec<&str> = value["configs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["root", "api"]);
        // Flat hashes carry no nested children.
        assert!(value["configs"][1].get("configs").is_none());
    }

    #[test]
    fn filtered_context_without_filter_lists_every_node() {
        let tree = project();
        let context = build_context(&tree, &options(ContextMode::Filtered, &[]));
        assert_eq!(context.as_value()["configs"].as_array().unwrap().len(), 4);
    }

    #[test]
    #[traced_test]
    fn recursive_mode_ignores_filter_with_warning() {
        let tree = project();
        let context = build_context(&tree, &options(ContextMode::Recursive, &[("env", "dev")]));
        assert_eq!(context, build_recursive_context(&tree));
        assert!(logs_contain("label filter is ignored"));
    }

    struct ScalarNode;

    impl ConfigurationNode for ScalarNode {
        fn identifier(&self) -> &str {
            "scalar"
        }

        fn normalize_labels(&self) -> Labels {
            Labels::new()
        }

        fn to_hash(&self) -> Value {
            json!(42)
        }

        fn children(&self) -> Vec<&dyn ConfigurationNode> {
            Vec::new()
        }
    }

    #[test]
    fn non_object_hash_is_wrapped() {
        let context = build_recursive_context(&ScalarNode);
        assert_eq!(context.into_value(), json!({ "value": 42, "configs": [] }));
    }
}
