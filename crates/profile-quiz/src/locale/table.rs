use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CatalogError;

/// Label and description attached to a resolved key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub label: String,
    pub description: String,
}

/// Nested key/text document for a single locale.
///
/// Leaves are either `{ "label": .., "description": .. }` objects or bare strings. Lookups
/// walk the nesting one key at a time and report a miss at any depth as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleTable {
    root: Value,
}

impl LocaleTable {
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Default::default()),
        }
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
            origin: "inline".to_string(),
            source,
        })?;
        Self::checked(root, "inline")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: origin.clone(),
            source,
        })?;
        let root: Value = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            origin: origin.clone(),
            source,
        })?;
        Self::checked(root, &origin)
    }

    fn checked(root: Value, origin: &str) -> Result<Self, CatalogError> {
        if root.is_object() {
            Ok(Self { root })
        } else {
            Err(CatalogError::NotAnObject {
                origin: origin.to_string(),
            })
        }
    }

    fn node(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.root, |node, key| node.as_object()?.get(*key))
    }

    /// Resolve `path` to an interpretation; a bare string leaf becomes the label.
    pub fn lookup(&self, path: &[&str]) -> Option<Interpretation> {
        match self.node(path)? {
            Value::String(label) => Some(Interpretation {
                label: label.clone(),
                description: String::new(),
            }),
            Value::Object(fields) => {
                let field = |name: &str| {
                    fields
                        .get(name)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                };
                if !fields.contains_key("label") && !fields.contains_key("description") {
                    return None;
                }
                Some(Interpretation {
                    label: field("label"),
                    description: field("description"),
                })
            }
            _ => None,
        }
    }

    /// Short text at `path`: a bare string leaf or the `label` of an interpretation.
    pub fn text(&self, path: &[&str]) -> Option<&str> {
        match self.node(path)? {
            Value::String(text) => Some(text.as_str()),
            Value::Object(fields) => fields.get("label").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Dot-joined path of every leaf in the table.
    pub fn key_paths(&self) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        collect_paths(&self.root, String::new(), &mut paths);
        paths
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::empty()
    }
}

fn collect_paths(node: &Value, prefix: String, paths: &mut BTreeSet<String>) {
    match node {
        Value::Object(fields) => {
            for (key, child) in fields {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_paths(child, path, paths);
            }
        }
        _ => {
            if !prefix.is_empty() {
                paths.insert(prefix);
            }
        }
    }
}

/// Nested lookup over `table`; any miss yields `None`.
pub fn lookup(table: &LocaleTable, key_parts: &[&str]) -> Option<Interpretation> {
    table.lookup(key_parts)
}
