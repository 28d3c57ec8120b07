use anyhow::Result;
use chrono::Utc;
use serde_json::Value;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::api::dto::file_dto::{DownloadQuery, DownloadUrlResponse};
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::PaginationQuery;
use crate::config;
use crate::core::persistence::files::file_record_api_repository_trait::FileRecordApiRepository;
use crate::core::persistence::files::file_record_entity::{FileRecordEntity, ProcessingStatus};
use crate::core::persistence::files::file_record_repository::FileRecordRepository;
use crate::core::storage::object_store::{create_object_store, ObjectStore};
use crate::errors::AppError;

const DEFAULT_PAGE_SIZE: usize = 50;

/// How long a signed download link stays valid.
const DOWNLOAD_URL_TTL_SECS: u64 = 300;

pub async fn upload_file(
    original_filename: String,
    content_type: String,
    data: Vec<u8>,
) -> Result<FileRecordEntity> {
    let repo = FileRecordRepository::new();
    let store = create_object_store();
    upload_file_with(
        &repo,
        store.as_ref(),
        &config::upload_bucket(),
        original_filename,
        content_type,
        data,
    )
    .await
}

pub async fn list_files(q: PaginationQuery) -> Result<PaginatedResponse<FileRecordEntity>> {
    let repo = FileRecordRepository::new();
    list_files_with(&repo, q).await
}

pub async fn get_file(file_key: String) -> Result<FileRecordEntity> {
    let repo = FileRecordRepository::new();
    get_file_with(&repo, &file_key).await
}

pub async fn get_download_url(file_key: String) -> Result<DownloadUrlResponse> {
    let repo = FileRecordRepository::new();
    get_download_url_with(&repo, &config::download_secret(), &file_key).await
}

pub async fn get_file_content(
    file_key: String,
    q: DownloadQuery,
) -> Result<(FileRecordEntity, Vec<u8>)> {
    let repo = FileRecordRepository::new();
    let store = create_object_store();
    get_file_content_with(
        &repo,
        store.as_ref(),
        &config::download_secret(),
        &file_key,
        q,
    )
    .await
}

pub async fn delete_file(file_key: String) -> Result<Value> {
    let repo = FileRecordRepository::new();
    let store = create_object_store();
    delete_file_with(&repo, store.as_ref(), &file_key).await
}

async fn upload_file_with<R: FileRecordApiRepository>(
    repo: &R,
    store: &dyn ObjectStore,
    bucket: &str,
    original_filename: String,
    content_type: String,
    data: Vec<u8>,
) -> Result<FileRecordEntity> {
    let original_filename = original_filename.trim().to_string();
    if original_filename.is_empty() {
        return Err(AppError::ValidationError("file name must not be empty".into()).into());
    }
    if original_filename.len() > 255 {
        return Err(AppError::ValidationError("file name too long".into()).into());
    }

    store
        .ensure_bucket(bucket)
        .map_err(|e| AppError::StorageError(e.to_string()))?;

    let file_key = Uuid::new_v4().to_string();
    let etag = hex::encode(Sha256::digest(&data));
    store
        .put_object(bucket, &file_key, &data)
        .map_err(|e| AppError::StorageError(e.to_string()))?;

    let mut record = FileRecordEntity::new(
        file_key,
        original_filename,
        content_type,
        data.len() as u64,
        bucket.to_string(),
        store.provider().to_string(),
        Some(etag),
    );
    record.processing_status = ProcessingStatus::Completed;
    repo.insert(&record)?;

    Ok(record)
}

async fn list_files_with<R: FileRecordApiRepository>(
    repo: &R,
    q: PaginationQuery,
) -> Result<PaginatedResponse<FileRecordEntity>> {
    let mut records = repo.list()?;
    records.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

    let total = records.len();
    let limit = q.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = q.offset.unwrap_or(0);
    let items = records.into_iter().skip(offset).take(limit).collect();

    Ok(PaginatedResponse {
        items,
        total,
        limit,
        offset,
    })
}

async fn get_file_with<R: FileRecordApiRepository>(
    repo: &R,
    file_key: &str,
) -> Result<FileRecordEntity> {
    repo.read(file_key)?
        .ok_or_else(|| AppError::NotFound(format!("file {file_key} not found")).into())
}

async fn get_download_url_with<R: FileRecordApiRepository>(
    repo: &R,
    secret: &str,
    file_key: &str,
) -> Result<DownloadUrlResponse> {
    let record = get_file_with(repo, file_key).await?;

    let expires = Utc::now().timestamp() + DOWNLOAD_URL_TTL_SECS as i64;
    let sig = sign_download(secret, &record.file_key, expires);

    Ok(DownloadUrlResponse {
        download_url: format!(
            "/api/v1/files/{}/content?expires={expires}&sig={sig}",
            record.file_key
        ),
        expires_in: DOWNLOAD_URL_TTL_SECS,
    })
}

async fn get_file_content_with<R: FileRecordApiRepository>(
    repo: &R,
    store: &dyn ObjectStore,
    secret: &str,
    file_key: &str,
    q: DownloadQuery,
) -> Result<(FileRecordEntity, Vec<u8>)> {
    let record = get_file_with(repo, file_key).await?;

    if q.expires < Utc::now().timestamp() {
        return Err(AppError::ValidationError("download link expired".into()).into());
    }

    let expected = sign_download(secret, &record.file_key, q.expires);
    if q.sig != expected {
        return Err(AppError::ValidationError("invalid download signature".into()).into());
    }

    let data = store.get_object(&record.bucket, &record.file_key)?;
    Ok((record, data))
}

async fn delete_file_with<R: FileRecordApiRepository>(
    repo: &R,
    store: &dyn ObjectStore,
    file_key: &str,
) -> Result<Value> {
    let record = get_file_with(repo, file_key).await?;

    // Object first: a record without its object must not survive.
    store.delete_object(&record.bucket, &record.file_key)?;
    repo.delete(&record.file_key)?;

    Ok(serde_json::json!({
        "message": "File deleted successfully",
        "file_key": record.file_key,
    }))
}

/// Hex SHA-256 over `secret|file_key|expires`.
pub fn sign_download(secret: &str, file_key: &str, expires: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b"|");
    hasher.update(file_key.as_bytes());
    hasher.update(b"|");
    hasher.update(expires.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::files::file_record_entity::FileType;
    use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockFileRecordAdapter {
        state: Mutex<HashMap<String, FileRecordEntity>>,
    }

    impl RecordFsAdapterTrait<FileRecordEntity> for MockFileRecordAdapter {
        fn read(&self, key: &str) -> Result<Option<FileRecordEntity>> {
            Ok(self.state.lock().unwrap().get(key).cloned())
        }

        fn insert(&self, key: &str, data: &FileRecordEntity) -> Result<()> {
            self.state
                .lock()
                .unwrap()
                .insert(key.to_string(), data.clone());
            Ok(())
        }

        fn update(&self, key: &str, data: &FileRecordEntity) -> Result<()> {
            self.insert(key, data)
        }

        fn delete(&self, key: &str) -> Result<()> {
            self.state.lock().unwrap().remove(key);
            Ok(())
        }

        fn list(&self) -> Result<Vec<FileRecordEntity>> {
            Ok(self.state.lock().unwrap().values().cloned().collect())
        }
    }

    #[derive(Default)]
    struct MockFileRecordRepository {
        adapter: MockFileRecordAdapter,
    }

    impl FileRecordApiRepository for MockFileRecordRepository {
        fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<FileRecordEntity> {
            &self.adapter
        }
    }

    #[derive(Default)]
    struct MockObjectStore {
        objects: Mutex<HashMap<(String, String), Vec<u8>>>,
    }

    impl ObjectStore for MockObjectStore {
        fn ensure_bucket(&self, _bucket: &str) -> Result<()> {
            Ok(())
        }

        fn put_object(&self, bucket: &str, object_name: &str, data: &[u8]) -> Result<()> {
            self.objects
                .lock()
                .unwrap()
                .insert((bucket.to_string(), object_name.to_string()), data.to_vec());
            Ok(())
        }

        fn get_object(&self, bucket: &str, object_name: &str) -> Result<Vec<u8>> {
            self.objects
                .lock()
                .unwrap()
                .get(&(bucket.to_string(), object_name.to_string()))
                .cloned()
                .ok_or_else(|| {
                    AppError::NotFound(format!("object {bucket}/{object_name} not found")).into()
                })
        }

        fn delete_object(&self, bucket: &str, object_name: &str) -> Result<()> {
            self.objects
                .lock()
                .unwrap()
                .remove(&(bucket.to_string(), object_name.to_string()));
            Ok(())
        }

        fn provider(&self) -> &'static str {
            "mock"
        }
    }

    #[tokio::test]
    async fn upload_stores_object_and_record() {
        let repo = MockFileRecordRepository::default();
        let store = MockObjectStore::default();

        let record = upload_file_with(
            &repo,
            &store,
            "uploads",
            "report.pdf".into(),
            "application/pdf".into(),
            b"%PDF-1.7".to_vec(),
        )
        .await
        .expect("upload should succeed");

        assert_eq!(record.file_type, FileType::Pdf);
        assert_eq!(record.file_size, 8);
        assert_eq!(record.processing_status, ProcessingStatus::Completed);
        assert_eq!(record.storage_provider, "mock");
        assert_eq!(
            record.etag.as_deref(),
            Some(hex::encode(Sha256::digest(b"%PDF-1.7")).as_str())
        );

        let stored = store.get_object("uploads", &record.file_key).unwrap();
        assert_eq!(stored, b"%PDF-1.7");
        assert!(repo.read(&record.file_key).unwrap().is_some());
    }

    #[tokio::test]
    async fn upload_rejects_empty_filename() {
        let repo = MockFileRecordRepository::default();
        let store = MockObjectStore::default();

        let err = upload_file_with(
            &repo,
            &store,
            "uploads",
            "   ".into(),
            "text/plain".into(),
            b"x".to_vec(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn download_url_round_trips_through_content_check() {
        let repo = MockFileRecordRepository::default();
        let store = MockObjectStore::default();
        let secret = "test-secret";

        let record = upload_file_with(
            &repo,
            &store,
            "uploads",
            "a.txt".into(),
            "text/plain".into(),
            b"hello".to_vec(),
        )
        .await
        .unwrap();

        let url = get_download_url_with(&repo, secret, &record.file_key)
            .await
            .unwrap();
        assert!(url
            .download_url
            .starts_with(&format!("/api/v1/files/{}/content?", record.file_key)));

        // Reuse the same parameters the URL carries.
        let expires = Utc::now().timestamp() + 60;
        let q = DownloadQuery {
            expires,
            sig: sign_download(secret, &record.file_key, expires),
        };
        let (fetched, data) = get_file_content_with(&repo, &store, secret, &record.file_key, q)
            .await
            .unwrap();
        assert_eq!(fetched.content_type, "text/plain");
        assert_eq!(data, b"hello");
    }

    #[tokio::test]
    async fn content_rejects_expired_and_forged_links() {
        let repo = MockFileRecordRepository::default();
        let store = MockObjectStore::default();
        let secret = "test-secret";

        let record = upload_file_with(
            &repo,
            &store,
            "uploads",
            "a.txt".into(),
            "text/plain".into(),
            b"hello".to_vec(),
        )
        .await
        .unwrap();

        let expired = Utc::now().timestamp() - 10;
        let q = DownloadQuery {
            expires: expired,
            sig: sign_download(secret, &record.file_key, expired),
        };
        let err = get_file_content_with(&repo, &store, secret, &record.file_key, q)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::ValidationError(_))
        ));

        let expires = Utc::now().timestamp() + 60;
        let q = DownloadQuery {
            expires,
            sig: sign_download("wrong-secret", &record.file_key, expires),
        };
        let err = get_file_content_with(&repo, &store, secret, &record.file_key, q)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn delete_removes_object_and_record() {
        let repo = MockFileRecordRepository::default();
        let store = MockObjectStore::default();

        let record = upload_file_with(
            &repo,
            &store,
            "uploads",
            "a.txt".into(),
            "text/plain".into(),
            b"hello".to_vec(),
        )
        .await
        .unwrap();

        delete_file_with(&repo, &store, &record.file_key)
            .await
            .unwrap();

        assert!(repo.read(&record.file_key).unwrap().is_none());
        assert!(store.get_object("uploads", &record.file_key).is_err());

        let err = delete_file_with(&repo, &store, &record.file_key)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotFound(_))
        ));
    }
}
