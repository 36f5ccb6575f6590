use itertools::Itertools;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// The HTTP methods that count as operations under a path item.
/// Anything else (`parameters`, `summary`, `trace`, `x-*` extensions) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
    Put,
    Head,
    Options,
}

impl Method {
    pub fn from_key(key: &str) -> Option<Self> {
        let method = match key.to_lowercase().as_str() {
            "get" => Method::Get,
            "post" => Method::Post,
            "patch" => Method::Patch,
            "delete" => Method::Delete,
            "put" => Method::Put,
            "head" => Method::Head,
            "options" => Method::Options,
            _ => return None,
        };
        Some(method)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Put => "PUT",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the index, e.g. `GET /users/{id}`.
///
/// Entries compare by the whole line, so `DELETE /b` sorts before `GET /a`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexEntry(String);

impl IndexEntry {
    pub fn new(method: Method, path: &str) -> Self {
        Self(format!("{} {}", method, path))
    }
}

impl fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Walk `paths` of an OpenAPI document and return the sorted index entries.
/// A missing or non-object `paths` gives an empty index.
pub fn collect_entries(spec: &Value) -> Vec<IndexEntry> {
    let Some(paths) = spec.get("paths").and_then(Value::as_object) else {
        debug!("Document has no paths object");
        return Vec::new();
    };
    paths
        .iter()
        .flat_map(|(path, item)| path_entries(path, item))
        .sorted()
        .collect()
}

fn path_entries(path: &str, item: &Value) -> Vec<IndexEntry> {
    let Some(ops) = item.as_object() else {
        warn!(path, "Path item is not an object, skipping");
        return Vec::new();
    };
    ops.keys()
        .filter_map(|key| Method::from_key(key))
        .map(|method| IndexEntry::new(method, path))
        .collect()
}

pub fn render(entries: &[IndexEntry]) -> String {
    let mut s = entries.iter().join("\n");
    s.push('\n');
    s
}
