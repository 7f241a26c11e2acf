//! Filter Store Module
//!
//! Holds the current filter selections and renders them as a query string.

use std::collections::HashMap;

use crate::error::{ApiError, Result};
use crate::filters::encode::{encode_component, normalize_value};

/// Filter fields the dashboard server binds: file, project, repository, person.
pub const DEFAULT_FIELDS: [&str; 4] = ["file", "proj", "repo", "person"];

/// Rename table from filter field to query parameter name.
pub type FieldMapping = HashMap<String, String>;

// == Filter Store ==
/// Fixed set of named filter slots, each unset or holding one value.
///
/// The field set is declared at construction and never changes; only the
/// values do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterStore {
    /// Declared fields in declaration order
    fields: Vec<(String, Option<String>)>,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(DEFAULT_FIELDS)
    }
}

impl FilterStore {
    // == Constructor ==
    /// Declares the field set. Repeated names are declared once.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut declared: Vec<(String, Option<String>)> = Vec::new();
        for name in fields {
            let name = name.into();
            if !declared.iter().any(|(n, _)| *n == name) {
                declared.push((name, None));
            }
        }
        Self { fields: declared }
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n == field)
    }

    // == Patch ==
    /// Overwrites each field named in `partial`; unnamed fields keep their
    /// values. `None` unsets a field.
    ///
    /// Fails with [`ApiError::UnknownFilter`] if any name is undeclared, in
    /// which case nothing is changed.
    pub fn patch<I, K, V>(&mut self, partial: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let updates = partial
            .into_iter()
            .map(|(field, value)| {
                let field = field.as_ref();
                self.position(field)
                    .map(|idx| (idx, value.map(Into::into)))
                    .ok_or_else(|| ApiError::UnknownFilter(field.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        for (idx, value) in updates {
            self.fields[idx].1 = value;
        }
        Ok(())
    }

    /// Sets a single field.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        self.patch([(field, Some(value.into()))])
    }

    // == Clear ==
    /// Unsets every declared field.
    pub fn clear(&mut self) {
        for (_, value) in self.fields.iter_mut() {
            *value = None;
        }
    }

    // == Query String ==
    /// Renders the set filters as `key=value` pairs joined by `&`.
    ///
    /// Fields are visited in declaration order. Values are whitespace
    /// collapsed, trimmed and lowercased; a field whose value normalizes to
    /// empty is skipped. `mapping` renames fields it contains and leaves
    /// the rest as declared. Keys and values are percent-encoded.
    pub fn to_query_string(&self, mapping: Option<&FieldMapping>) -> String {
        self.fields
            .iter()
            .filter_map(|(field, value)| {
                let value = normalize_value(value.as_deref()?);
                if value.is_empty() {
                    return None;
                }
                let key = mapping
                    .and_then(|m| m.get(field))
                    .map(String::as_str)
                    .unwrap_or(field.as_str());
                Some(format!(
                    "{}={}",
                    encode_component(key),
                    encode_component(&value)
                ))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    // == Accessors ==
    pub fn get(&self, field: &str) -> Option<&str> {
        self.position(field)
            .and_then(|idx| self.fields[idx].1.as_deref())
    }

    pub fn is_declared(&self, field: &str) -> bool {
        self.position(field).is_some()
    }

    /// Snapshot of every declared field and its value.
    pub fn values(&self) -> Vec<(&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_deref()))
            .collect()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> FieldMapping {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_fields_start_unset() {
        let store = FilterStore::default();
        assert!(store.is_empty());
        assert_eq!(
            store.values(),
            vec![("file", None), ("proj", None), ("repo", None), ("person", None)]
        );
    }

    #[test]
    fn test_duplicate_declarations_collapse() {
        let store = FilterStore::new(["repo", "repo", "person"]);
        assert_eq!(store.values().len(), 2);
    }

    #[test]
    fn test_patch_merges() {
        let mut store = FilterStore::default();
        store.patch([("repo", Some("archer"))]).unwrap();
        store.patch([("person", Some("ana"))]).unwrap();

        assert_eq!(store.get("repo"), Some("archer"));
        assert_eq!(store.get("person"), Some("ana"));
        assert_eq!(store.get("file"), None);
    }

    #[test]
    fn test_patch_none_unsets() {
        let mut store = FilterStore::default();
        store.patch([("repo", Some("a")), ("proj", Some("b"))]).unwrap();
        store.patch([("repo", None::<String>)]).unwrap();

        assert_eq!(store.get("repo"), None);
        assert_eq!(store.get("proj"), Some("b"));
    }

    #[test]
    fn test_patch_unknown_field_changes_nothing() {
        let mut store = FilterStore::default();
        store.set("repo", "a").unwrap();

        let result = store.patch([("repo", Some("b")), ("branch", Some("main"))]);
        assert_eq!(result, Err(ApiError::UnknownFilter("branch".to_string())));
        assert_eq!(store.get("repo"), Some("a"));
        assert!(!store.is_declared("branch"));
    }

    #[test]
    fn test_clear_unsets_everything() {
        let mut store = FilterStore::default();
        store
            .patch([("file", Some("x")), ("repo", Some("y"))])
            .unwrap();
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.to_query_string(None), "");
        assert_eq!(store.to_query_string(Some(&mapping(&[("repo", "r")]))), "");
    }

    #[test]
    fn test_query_string_normalizes_values() {
        let mut store = FilterStore::new(["repo_name"]);
        store.set("repo_name", "Foo  Bar").unwrap();

        assert_eq!(store.to_query_string(None), "repo_name=foo%20bar");
        assert_eq!(
            store.to_query_string(Some(&FieldMapping::new())),
            "repo_name=foo%20bar"
        );
    }

    #[test]
    fn test_query_string_declaration_order() {
        let mut store = FilterStore::default();
        store
            .patch([("person", Some("Ana")), ("file", Some("main.go"))])
            .unwrap();

        assert_eq!(store.to_query_string(None), "file=main.go&person=ana");
    }

    #[test]
    fn test_query_string_renames_mapped_fields_only() {
        let mut store = FilterStore::default();
        store
            .patch([("repo", Some("archer")), ("person", Some("ana"))])
            .unwrap();
        let rename = mapping(&[("person", "person.name")]);

        assert_eq!(
            store.to_query_string(Some(&rename)),
            "repo=archer&person.name=ana"
        );
    }

    #[test]
    fn test_query_string_encodes_keys_and_values() {
        let mut store = FilterStore::default();
        store.set("file", "src/a&b.go").unwrap();
        let rename = mapping(&[("file", "file path")]);

        assert_eq!(
            store.to_query_string(Some(&rename)),
            "file%20path=src%2Fa%26b.go"
        );
    }

    #[test]
    fn test_query_string_skips_empty_values() {
        let mut store = FilterStore::default();
        store
            .patch([("file", Some("")), ("proj", Some("   ")), ("repo", Some("x"))])
            .unwrap();

        assert_eq!(store.to_query_string(None), "repo=x");
    }
}
