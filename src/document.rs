use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load an OpenAPI document as an untyped value tree. No schema validation is done.
pub fn read_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        bail!("Missing spec file: {}", path.display());
    }
    let s = fs::read_to_string(path)
        .with_context(|| format!("{}: Failed to read file.", path.display()))?;
    let value = if is_yaml(path) {
        serde_yaml::from_str(&s)
            .with_context(|| format!("{}: Failed to parse YAML.", path.display()))?
    } else {
        serde_json::from_str(&s)
            .with_context(|| format!("{}: Failed to parse JSON.", path.display()))?
    };
    debug!(path = %path.display(), "Read spec");
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.json");
        let err = read_document(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Missing spec file: {}", path.display())
        );
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.json");
        fs::write(&path, "{\"paths\": ").unwrap();
        let err = read_document(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest.json");
        fs::write(&path, r#"{"paths": {"/health": {"get": {}}}}"#).unwrap();
        let value = read_document(&path).unwrap();
        assert_eq!(value, json!({"paths": {"/health": {"get": {}}}}));
    }

    #[test]
    fn test_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, "paths:\n  /health:\n    get: {}\n").unwrap();
        let value = read_document(&path).unwrap();
        assert_eq!(value, json!({"paths": {"/health": {"get": {}}}}));
    }
}
