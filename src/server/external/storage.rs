//! File storage on an S3-compatible bucket.
//!
//! Objects are stored under `{root}/{folder}/{name}` and exposed through
//! `{public_url}/{key}`. Read permission on uploaded objects is governed by the
//! bucket policy rather than per-object ACLs.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use chrono::Utc;
use object_store::{
    aws::AmazonS3Builder, path::Path, Attribute, Attributes, ObjectStore, PutOptions, PutPayload,
};
use rand::{distr::Alphanumeric, Rng};

use crate::server::{config::StorageConfig, error::storage::StorageError};

/// How the stored file is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNaming {
    /// `{timestamp}_{random8}.{ext}`
    Generated,
    /// `{timestamp}_{original}`
    KeepOriginal,
}

#[derive(Debug, Clone)]
pub struct FileUpload {
    pub folder: String,
    pub original_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
    pub naming: FileNaming,
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Stores the file and returns its public URL.
    async fn upload(&self, upload: FileUpload) -> Result<String, StorageError>;

    /// Deletes the object a previously returned URL points to.
    async fn delete_by_url(&self, folder: &str, url: &str) -> Result<(), StorageError>;
}

/// Builds the object file name for an upload at `timestamp` (milliseconds).
pub fn file_name(naming: FileNaming, original_name: &str, timestamp: i64) -> String {
    let original = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name)
        .replace(' ', "_");

    match naming {
        FileNaming::KeepOriginal => format!("{}_{}", timestamp, original),
        FileNaming::Generated => {
            let suffix: String = rand::rng()
                .sample_iter(&Alphanumeric)
                .take(8)
                .map(char::from)
                .collect();

            match original.rsplit_once('.') {
                Some((_, extension)) if !extension.is_empty() => format!(
                    "{}_{}.{}",
                    timestamp,
                    suffix,
                    extension.to_ascii_lowercase()
                ),
                _ => format!("{}_{}", timestamp, suffix),
            }
        }
    }
}

pub struct ObjectFileStorage {
    store: Arc<dyn ObjectStore>,
    root_path: String,
    public_url: String,
}

impl ObjectFileStorage {
    pub fn new(store: Arc<dyn ObjectStore>, root_path: &str, public_url: &str) -> Self {
        Self {
            store,
            root_path: root_path.trim_matches('/').to_string(),
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    /// S3 (or S3-compatible when an endpoint is configured) backed storage.
    pub fn s3(config: &StorageConfig) -> Result<Self, StorageError> {
        let mut builder = AmazonS3Builder::new()
            .with_bucket_name(&config.bucket)
            .with_region(&config.region)
            .with_access_key_id(&config.access_key)
            .with_secret_access_key(&config.secret_key);

        if let Some(endpoint) = &config.endpoint {
            builder = builder
                .with_endpoint(endpoint)
                .with_allow_http(endpoint.starts_with("http://"));
        }

        Ok(Self::new(
            Arc::new(builder.build()?),
            &config.root_path,
            &config.public_url,
        ))
    }

    pub fn key(&self, folder: &str, name: &str) -> String {
        [self.root_path.as_str(), folder.trim_matches('/'), name]
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }
}

#[async_trait]
impl FileStorage for ObjectFileStorage {
    async fn upload(&self, upload: FileUpload) -> Result<String, StorageError> {
        let name = file_name(
            upload.naming,
            &upload.original_name,
            Utc::now().timestamp_millis(),
        );
        let key = self.key(&upload.folder, &name);

        let mut attributes = Attributes::new();
        if let Some(content_type) = upload.content_type {
            attributes.insert(Attribute::ContentType, content_type.into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.store
            .put_opts(&Path::from(key.as_str()), PutPayload::from(upload.bytes), options)
            .await?;

        tracing::debug!("Stored object {}", key);

        Ok(self.url_for(&key))
    }

    async fn delete_by_url(&self, folder: &str, url: &str) -> Result<(), StorageError> {
        let name = url
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| StorageError::InvalidUrl(url.to_string()))?;
        let key = self.key(folder, name);

        self.store.delete(&Path::from(key.as_str())).await?;

        tracing::debug!("Deleted object {}", key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    fn storage(store: Arc<InMemory>) -> ObjectFileStorage {
        ObjectFileStorage::new(store, "/files/", "https://cdn.example.com/")
    }

    #[test]
    fn names_files_by_strategy() {
        let generated = file_name(FileNaming::Generated, "Acta Final.PDF", 1700000000000);
        assert!(generated.starts_with("1700000000000_"));
        assert!(generated.ends_with(".pdf"));
        assert_eq!(generated.len(), "1700000000000_".len() + 8 + ".pdf".len());

        let kept = file_name(FileNaming::KeepOriginal, "C:\\docs\\acta final.pdf", 42);
        assert_eq!(kept, "42_acta_final.pdf");
    }

    #[test]
    fn builds_keys_and_urls() {
        let storage = storage(Arc::new(InMemory::new()));

        let key = storage.key("proceeding_files", "1_a.pdf");
        assert_eq!(key, "files/proceeding_files/1_a.pdf");
        assert_eq!(
            storage.url_for(&key),
            "https://cdn.example.com/files/proceeding_files/1_a.pdf"
        );
    }

    #[tokio::test]
    async fn uploads_and_deletes_by_url() {
        let store = Arc::new(InMemory::new());
        let storage = storage(store.clone());

        let url = storage
            .upload(FileUpload {
                folder: "proceeding_files".to_string(),
                original_name: "acta.pdf".to_string(),
                content_type: Some("application/pdf".to_string()),
                bytes: Bytes::from_static(b"%PDF-1.4"),
                naming: FileNaming::Generated,
            })
            .await
            .unwrap();

        let key = url.trim_start_matches("https://cdn.example.com/");
        let stored = store.get(&Path::from(key)).await.unwrap().bytes().await.unwrap();
        assert_eq!(stored.as_ref(), b"%PDF-1.4");

        storage.delete_by_url("proceeding_files", &url).await.unwrap();
        assert!(store.head(&Path::from(key)).await.is_err());
    }
}
