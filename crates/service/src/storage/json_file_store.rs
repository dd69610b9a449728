use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::records::domain::Collection;
use crate::storage::record_store::RecordStore;

/// JSON file-backed record store.
///
/// Persists the collection as `{"records": [...]}`. Every `load` re-reads the file;
/// every `save` writes a sibling temp file and renames it over the target so the
/// previous or the new state is visible, never a partial one.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Initialize the store from a path. Creates the file with an empty collection if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let store = Self { file_path: path.into() };
        if let Some(parent) = store.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(ServiceError::storage)?;
        }
        if fs::metadata(&store.file_path).await.is_err() {
            store.write(&Collection::default()).await?;
            info!(path = %store.file_path.display(), "initialized empty record file");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", uuid::Uuid::new_v4()));
        self.file_path.with_file_name(name)
    }

    async fn write(&self, collection: &Collection) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(collection).map_err(ServiceError::storage)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, data).await.map_err(ServiceError::storage)?;
        if let Err(e) = fs::rename(&tmp, &self.file_path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(ServiceError::storage(e));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Result<Collection, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Storage(format!("{}: malformed record file: {e}", self.file_path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = Collection::default();
                self.write(&empty).await?;
                Ok(empty)
            }
            Err(e) => Err(ServiceError::storage(e)),
        }
    }

    async fn save(&self, collection: &Collection) -> Result<(), ServiceError> {
        self.write(collection).await?;
        debug!(path = %self.file_path.display(), count = collection.records.len(), "record file saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::domain::{Record, Shift};

    fn tmp_file() -> PathBuf {
        std::env::temp_dir().join(format!("ledger_store_{}", uuid::Uuid::new_v4())).join("records.json")
    }

    #[tokio::test]
    async fn new_creates_empty_file() -> Result<(), anyhow::Error> {
        let path = tmp_file();
        let store = JsonFileStore::new(&path).await?;
        let raw = tokio::fs::read_to_string(store.path()).await?;
        let v: serde_json::Value = serde_json::from_str(&raw)?;
        assert_eq!(v, serde_json::json!({"records": []}));
        assert!(store.load().await?.records.is_empty());
        let _ = tokio::fs::remove_dir_all(path.parent().unwrap_or(&path)).await;
        Ok(())
    }

    #[tokio::test]
    async fn save_then_reload_persists() -> Result<(), anyhow::Error> {
        let path = tmp_file();
        let store = JsonFileStore::new(&path).await?;
        let col = Collection {
            records: vec![Record {
                id: 10,
                date: "2024-05-01".into(),
                time: "06:00:00".into(),
                shift: Shift::Morning,
                name: "Kumar".into(),
                phone: "9000".into(),
                quantity: 500.0,
                amount: 20.0,
            }],
        };
        store.save(&col).await?;

        let reopened = JsonFileStore::new(&path).await?;
        assert_eq!(reopened.load().await?, col);

        // no temp files left behind
        let mut entries = tokio::fs::read_dir(path.parent().unwrap_or(&path)).await?;
        let mut names = Vec::new();
        while let Some(e) = entries.next_entry().await? {
            names.push(e.file_name());
        }
        assert_eq!(names.len(), 1);
        let _ = tokio::fs::remove_dir_all(path.parent().unwrap_or(&path)).await;
        Ok(())
    }

    #[tokio::test]
    async fn load_reinitializes_deleted_file() -> Result<(), anyhow::Error> {
        let path = tmp_file();
        let store = JsonFileStore::new(&path).await?;
        tokio::fs::remove_file(&path).await?;
        assert!(store.load().await?.records.is_empty());
        assert!(tokio::fs::metadata(&path).await.is_ok());
        let _ = tokio::fs::remove_dir_all(path.parent().unwrap_or(&path)).await;
        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_fails_fast() -> Result<(), anyhow::Error> {
        let path = tmp_file();
        let store = JsonFileStore::new(&path).await?;
        tokio::fs::write(&path, br#"{"records": [{"id": "x"}]}"#).await?;
        assert!(matches!(store.load().await, Err(ServiceError::Storage(_))));
        let _ = tokio::fs::remove_dir_all(path.parent().unwrap_or(&path)).await;
        Ok(())
    }
}
