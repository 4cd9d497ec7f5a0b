//! On-disk dump of the last response

use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Write `value` as pretty-printed JSON, replacing any previous dump
pub async fn write_json(path: impl AsRef<Path>, value: &Value) -> dq_core::Result<()> {
    let path = path.as_ref();
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');
    tokio::fs::write(path, contents).await?;
    info!("Saved response to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_write_json_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_response.json");

        write_json(&path, &json!({"first": true})).await.unwrap();
        write_json(&path, &json!({"name": "File", "nodes": [1, 2]})).await.unwrap();

        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, json!({"name": "File", "nodes": [1, 2]}));
    }

    #[tokio::test]
    async fn test_write_json_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_json(&path, &json!({})).await.unwrap_err();
        assert!(matches!(err, dq_core::Error::Io(_)));
    }
}
