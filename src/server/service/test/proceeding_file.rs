use std::sync::Arc;

use axum::body::Bytes;
use object_store::{memory::InMemory, path::Path, ObjectStore};

use super::*;

use crate::{
    model::proceeding_file::{CreateProceedingFileDto, UpdateProceedingFileDto},
    server::{
        external::storage::ObjectFileStorage,
        model::proceeding_file::ProceedingFileSubmission,
        service::proceeding_file::ProceedingFileService,
        util::multipart::UploadedFile,
    },
};

const PUBLIC_URL: &str = "https://cdn.example.com";

fn storage(store: Arc<InMemory>) -> ObjectFileStorage {
    ObjectFileStorage::new(store, "files", PUBLIC_URL)
}

fn key_of(url: &str) -> Path {
    Path::from(url.trim_start_matches(PUBLIC_URL).trim_start_matches('/'))
}

fn pdf(name: &str) -> UploadedFile {
    UploadedFile {
        file_name: name.to_string(),
        content_type: Some("application/pdf".to_string()),
        bytes: Bytes::from_static(b"%PDF-1.4"),
    }
}

fn record(employee_id: i32, description: Option<&str>) -> CreateProceedingFileDto {
    CreateProceedingFileDto {
        employee_id,
        name: "Contrato".to_string(),
        description: description.map(str::to_string),
        file_url: None,
        expiration_at: None,
    }
}

/// Tests that a text-only proceeding file is accepted without touching storage.
#[tokio::test]
async fn creates_text_only_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();
    let store = Arc::new(InMemory::new());
    let storage = storage(store.clone());

    let (_, employee) = factory::helpers::create_employee_with_dependencies(db).await?;

    let created = ProceedingFileService::new(db, &cipher, &storage, Locale::Es)
        .create(
            ProceedingFileSubmission {
                record: record(employee.id, Some("Firmado en sitio")),
                file: None,
            },
            None,
        )
        .await?;

    assert!(created.file_url.is_none());
    assert_eq!(created.description.as_deref(), Some("Firmado en sitio"));

    Ok(())
}

/// Tests that a request with neither description nor file is a bad request.
#[tokio::test]
async fn requires_description_or_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();
    let storage = storage(Arc::new(InMemory::new()));

    let (_, employee) = factory::helpers::create_employee_with_dependencies(db).await?;

    let result = ProceedingFileService::new(db, &cipher, &storage, Locale::Es)
        .create(
            ProceedingFileSubmission {
                record: record(employee.id, None),
                file: None,
            },
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that uploads with a file type outside the accepted list are refused
/// before anything is stored.
#[tokio::test]
async fn rejects_disallowed_file_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();
    let storage = storage(Arc::new(InMemory::new()));

    let (_, employee) = factory::helpers::create_employee_with_dependencies(db).await?;

    let result = ProceedingFileService::new(db, &cipher, &storage, Locale::Es)
        .create(
            ProceedingFileSubmission {
                record: record(employee.id, None),
                file: Some(pdf("payload.exe")),
            },
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that the uploaded object is removed when the record cannot be created.
#[tokio::test]
async fn discards_upload_when_create_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();
    let store = Arc::new(InMemory::new());
    let storage = storage(store.clone());

    let result = ProceedingFileService::new(db, &cipher, &storage, Locale::Es)
        .create(
            ProceedingFileSubmission {
                record: record(999, None),
                file: Some(pdf("acta.pdf")),
            },
            None,
        )
        .await;

    assert_eq!(result.as_ref().err().and_then(status_of), Some(404));

    let prefix = Path::from("files/proceeding_files");
    let listed = store.list_with_delimiter(Some(&prefix)).await.unwrap();
    assert!(listed.objects.is_empty());

    Ok(())
}

/// Tests that replacing the document stores the new one and deletes the old.
#[tokio::test]
async fn replaces_document_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();
    let store = Arc::new(InMemory::new());
    let storage = storage(store.clone());

    let (_, employee) = factory::helpers::create_employee_with_dependencies(db).await?;
    let service = ProceedingFileService::new(db, &cipher, &storage, Locale::Es);

    let created = service
        .create(
            ProceedingFileSubmission {
                record: record(employee.id, None),
                file: Some(pdf("acta.pdf")),
            },
            None,
        )
        .await?;
    let old_url = created.file_url.clone().expect("file url should be set");
    assert!(old_url.starts_with("https://cdn.example.com/files/proceeding_files/"));
    assert!(store.head(&key_of(&old_url)).await.is_ok());

    let updated = service
        .update(
            created.id,
            ProceedingFileSubmission {
                record: UpdateProceedingFileDto::default(),
                file: Some(pdf("acta-firmada.pdf")),
            },
            None,
        )
        .await?;
    let new_url = updated.file_url.clone().expect("file url should be set");

    assert_ne!(new_url, old_url);
    assert_eq!(updated.name, created.name);
    assert!(store.head(&key_of(&new_url)).await.is_ok());
    assert!(store.head(&key_of(&old_url)).await.is_err());

    Ok(())
}

/// Tests that an update without a file keeps the stored document.
#[tokio::test]
async fn keeps_document_when_no_file_sent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();
    let store = Arc::new(InMemory::new());
    let storage = storage(store.clone());

    let (_, employee) = factory::helpers::create_employee_with_dependencies(db).await?;
    let service = ProceedingFileService::new(db, &cipher, &storage, Locale::Es);

    let created = service
        .create(
            ProceedingFileSubmission {
                record: record(employee.id, None),
                file: Some(pdf("acta.pdf")),
            },
            None,
        )
        .await?;

    let updated = service
        .update(
            created.id,
            ProceedingFileSubmission {
                record: UpdateProceedingFileDto {
                    name: Some("Contrato 2024".to_string()),
                    ..Default::default()
                },
                file: None,
            },
            None,
        )
        .await?;

    assert_eq!(updated.name, "Contrato 2024");
    assert_eq!(updated.file_url, created.file_url);
    assert!(store
        .head(&key_of(created.file_url.as_deref().unwrap()))
        .await
        .is_ok());

    Ok(())
}
