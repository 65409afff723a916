//! File-backed item store
//!
//! Holds host item documents as a JSON array (or a single object). Used by
//! the operator binary to re-run syncs outside the host and write the
//! resulting product IDs back.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::ItemStore;
use crate::core::HostError;

pub struct JsonItemStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the file
    write_lock: Mutex<()>,
}

impl JsonItemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<Value, HostError> {
        let raw = tokio::fs::read(&self.path).await?;
        match serde_json::from_slice(&raw)? {
            value @ (Value::Array(_) | Value::Object(_)) => Ok(value),
            _ => Err(HostError::Storage(format!(
                "{} must contain an item object or an array of items",
                self.path.display()
            ))),
        }
    }

    /// Load all item documents
    pub async fn load_documents(&self) -> Result<Vec<Value>, HostError> {
        Ok(match self.read_file().await? {
            Value::Array(docs) => docs,
            doc => vec![doc],
        })
    }
}

fn find_item<'a>(
    root: &'a mut Value,
    item_code: &str,
) -> Option<&'a mut serde_json::Map<String, Value>> {
    let is_target = |doc: &Value| doc.get("item_code").and_then(Value::as_str) == Some(item_code);
    match root {
        Value::Array(docs) => docs.iter_mut().find(|d| is_target(&**d))?.as_object_mut(),
        doc if is_target(&*doc) => doc.as_object_mut(),
        _ => None,
    }
}

#[async_trait]
impl ItemStore for JsonItemStore {
    async fn set_remote_product_id(
        &self,
        item_code: &str,
        remote_id: &str,
    ) -> Result<(), HostError> {
        let _guard = self.write_lock.lock().await;

        let mut root = self.read_file().await?;
        find_item(&mut root, item_code)
            .ok_or_else(|| HostError::ItemNotFound(item_code.to_string()))?
            .insert("wix_product_id".into(), Value::String(remote_id.to_string()));

        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&root)?).await?;
        tracing::debug!(item_code, remote_id, path = %self.path.display(), "Stored Wix product ID");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_writes_remote_id_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        let docs = json!([
            { "item_code": "A", "item_name": "Apple", "custom_field": 7 },
            { "item_code": "B", "item_name": "Banana" }
        ]);
        std::fs::write(&path, serde_json::to_vec(&docs).unwrap()).unwrap();

        let store = JsonItemStore::new(&path);
        store.set_remote_product_id("B", "prod_b").await.unwrap();

        let saved = store.load_documents().await.unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1]["wix_product_id"], "prod_b");
        assert!(saved[0].get("wix_product_id").is_none());
        assert_eq!(saved[0]["custom_field"], 7);
    }

    #[tokio::test]
    async fn test_single_object_file_stays_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("item.json");
        std::fs::write(&path, r#"{"item_code": "A"}"#).unwrap();

        let store = JsonItemStore::new(&path);
        store.set_remote_product_id("A", "prod_a").await.unwrap();

        let raw: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw, json!({ "item_code": "A", "wix_product_id": "prod_a" }));
    }

    #[tokio::test]
    async fn test_unknown_item() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"[{"item_code": "A"}]"#).unwrap();

        let err = JsonItemStore::new(&path)
            .set_remote_product_id("Z", "prod_z")
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::ItemNotFound(code) if code == "Z"));
    }
}
