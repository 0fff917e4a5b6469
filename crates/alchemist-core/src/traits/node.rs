// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration node trait and tree traversal.

use serde_json::{Map, Value};

use crate::types::{ConfigTree, Labels};

/// One node of the host's hierarchical project configuration.
///
/// Nodes are owned by the host; the plugin only reads them.
pub trait ConfigurationNode: Send + Sync {
    /// Identifier of the node, used in logs.
    fn identifier(&self) -> &str;

    /// Labels attached to this node, each key mapped to its values.
    fn normalize_labels(&self) -> Labels;

    /// Plain serializable representation of this node alone.
    fn to_hash(&self) -> Value;

    /// Direct child nodes, in configuration order.
    fn children(&self) -> Vec<&dyn ConfigurationNode>;
}

/// Flattens a configuration tree in pre-order (parent before children).
pub fn flatten_configs(root: &dyn ConfigurationNode) -> Vec<&dyn ConfigurationNode> {
    let mut flattened = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        flattened.push(node);
        // Reverse so the first child is visited next.
        stack.extend(node.children().into_iter().rev());
    }
    flattened
}

impl ConfigurationNode for ConfigTree {
    fn identifier(&self) -> &str {
        &self.name
    }

    fn normalize_labels(&self) -> Labels {
        self.labels
            .iter()
            .map(|(key, values)| (key.clone(), values.to_vec()))
            .collect()
    }

    /// Free-form values plus `name` and normalized `labels`. Children are
    /// not included.
    fn to_hash(&self) -> Value {
        let mut hash: Map<String, Value> = self.values.clone();
        hash.insert("name".to_string(), Value::String(self.name.clone()));
        let labels = self
            .normalize_labels()
            .into_iter()
            .map(|(key, values)| {
                let values = values.into_iter().map(Value::String).collect();
                (key, Value::Array(values))
            })
            .collect();
        hash.insert("labels".to_string(), Value::Object(labels));
        Value::Object(hash)
    }

    fn children(&self) -> Vec<&dyn ConfigurationNode> {
        self.children
            .iter()
            .map(|child| child as &dyn ConfigurationNode)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> ConfigTree {
        ConfigTree::new("root")
            .with_child(
                ConfigTree::new("a")
                    .with_child(ConfigTree::new("a1"))
                    .with_child(ConfigTree::new("a2")),
            )
            .with_child(ConfigTree::new("b"))
    }

    #[test]
    fn flatten_is_pre_order() {
        let tree = sample_tree();
        let names: Vec<&str> = flatten_configs(&tree)
            .into_iter()
            .map(|node| node.identifier())
            .collect();
        assert_eq!(names, vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn flatten_single_node() {
        let tree = ConfigTree::new("only");
        assert_eq!(flatten_configs(&tree).len(), 1);
    }

    #[test]
    fn to_hash_includes_name_labels_and_values() {
        let tree = ConfigTree::new("svc")
            .with_label("env", ["prod"])
            .with_value("port", json!(8080))
            .with_child(ConfigTree::new("ignored"));

        assert_eq!(
            tree.to_hash(),
            json!({
                "name": "svc",
                "labels": { "env": ["prod"] },
                "port": 8080
            })
        );
    }

    #[test]
    fn name_and_labels_win_over_same_named_values() {
        let tree = ConfigTree::new("svc").with_value("name", json!("shadow"));
        assert_eq!(tree.to_hash()["name"], json!("svc"));
    }

    #[test]
    fn normalize_labels_wraps_single_values() {
        let tree: ConfigTree = serde_json::from_value(json!({
            "name": "svc",
            "labels": { "env": "prod", "region": ["eu", "us"] }
        }))
        .unwrap();
        let labels = tree.normalize_labels();
        assert_eq!(labels["env"], vec!["prod"]);
        assert_eq!(labels["region"], vec!["eu", "us"]);
    }
}
