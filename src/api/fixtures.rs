// Fixture loading: one JSON file per endpoint, re-read on every request

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use super::document::ResourceDocument;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse `<seeds_dir>/<name>`
pub async fn load_document(seeds_dir: &Path, name: &str) -> Result<ResourceDocument, FixtureError> {
    let path = seeds_dir.join(name);
    let bytes = fs::read(&path).await.map_err(|source| FixtureError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| FixtureError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("candidates.json"),
            r#"{"data":[{"type":"candidate","id":"c1","attributes":{}}]}"#,
        )
        .unwrap();

        let doc = load_document(dir.path(), "candidates.json").await.unwrap();
        assert_eq!(doc.data.len(), 1);
        assert_eq!(doc.data[0].id(), Some(&serde_json::json!("c1")));
    }

    #[tokio::test]
    async fn test_missing_fixture_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path(), "topics.json").await.unwrap_err();
        assert!(matches!(err, FixtureError::Read { .. }));
        assert!(err.to_string().contains("topics.json"));
    }

    #[tokio::test]
    async fn test_malformed_fixture_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("topics.json"), "{\"data\": [").unwrap();
        let err = load_document(dir.path(), "topics.json").await.unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
    }
}
