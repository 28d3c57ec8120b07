use anyhow::Result;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::PaginationQuery;
use crate::core::persistence::notes::note_api_repository_trait::NoteApiRepository;
use crate::core::persistence::notes::note_entity::NoteEntity;
use crate::core::persistence::notes::note_repository::NoteRepository;
use crate::domain::note::dto::note_upsert_request::{NoteCreateRequest, NoteUpdateRequest};
use crate::errors::AppError;

const DEFAULT_PAGE_SIZE: usize = 50;

pub async fn create_note(req: NoteCreateRequest) -> Result<NoteEntity> {
    let repo = NoteRepository::new();
    create_note_with_repo(&repo, req).await
}

pub async fn list_notes(q: PaginationQuery) -> Result<PaginatedResponse<NoteEntity>> {
    let repo = NoteRepository::new();
    list_notes_with_repo(&repo, q).await
}

pub async fn get_note(id: String) -> Result<NoteEntity> {
    let repo = NoteRepository::new();
    get_note_with_repo(&repo, &id).await
}

pub async fn update_note(id: String, req: NoteUpdateRequest) -> Result<NoteEntity> {
    let repo = NoteRepository::new();
    update_note_with_repo(&repo, &id, req).await
}

pub async fn delete_note(id: String) -> Result<Value> {
    let repo = NoteRepository::new();
    delete_note_with_repo(&repo, &id).await
}

async fn create_note_with_repo<R: NoteApiRepository>(
    repo: &R,
    req: NoteCreateRequest,
) -> Result<NoteEntity> {
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let title = req.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::ValidationError("title must not be blank".into()).into());
    }

    let note = NoteEntity::new(
        Uuid::new_v4().to_string(),
        title,
        req.content,
        req.tags,
        req.created_by,
        req.metadata,
    );
    repo.insert(&note)?;

    Ok(note)
}

async fn list_notes_with_repo<R: NoteApiRepository>(
    repo: &R,
    q: PaginationQuery,
) -> Result<PaginatedResponse<NoteEntity>> {
    let mut notes = repo.list()?;
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = notes.len();
    let limit = q.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = q.offset.unwrap_or(0);
    let items = notes.into_iter().skip(offset).take(limit).collect();

    Ok(PaginatedResponse {
        items,
        total,
        limit,
        offset,
    })
}

async fn get_note_with_repo<R: NoteApiRepository>(repo: &R, id: &str) -> Result<NoteEntity> {
    repo.read(id)?
        .ok_or_else(|| AppError::NotFound(format!("note {id} not found")).into())
}

async fn update_note_with_repo<R: NoteApiRepository>(
    repo: &R,
    id: &str,
    req: NoteUpdateRequest,
) -> Result<NoteEntity> {
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    if let Some(title) = &req.title {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError("title must not be blank".into()).into());
        }
    }

    let mut note = get_note_with_repo(repo, id).await?;
    note.apply_update(req);
    repo.update(&note)?;

    Ok(note)
}

async fn delete_note_with_repo<R: NoteApiRepository>(repo: &R, id: &str) -> Result<Value> {
    // Read first so deleting an unknown id is a 404, not a silent no-op.
    let note = get_note_with_repo(repo, id).await?;
    repo.delete(&note.id)?;

    Ok(serde_json::json!({
        "message": "Note deleted successfully",
        "id": note.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockNoteAdapter {
        state: Mutex<HashMap<String, NoteEntity>>,
    }

    impl RecordFsAdapterTrait<NoteEntity> for MockNoteAdapter {
        fn read(&self, key: &str) -> Result<Option<NoteEntity>> {
            Ok(self.state.lock().unwrap().get(key).cloned())
        }

        fn insert(&self, key: &str, data: &NoteEntity) -> Result<()> {
            self.state
                .lock()
                .unwrap()
                .insert(key.to_string(), data.clone());
            Ok(())
        }

        fn update(&self, key: &str, data: &NoteEntity) -> Result<()> {
            self.insert(key, data)
        }

        fn delete(&self, key: &str) -> Result<()> {
            self.state.lock().unwrap().remove(key);
            Ok(())
        }

        fn list(&self) -> Result<Vec<NoteEntity>> {
            Ok(self.state.lock().unwrap().values().cloned().collect())
        }
    }

    #[derive(Default)]
    struct MockNoteRepository {
        adapter: MockNoteAdapter,
    }

    impl NoteApiRepository for MockNoteRepository {
        fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<NoteEntity> {
            &self.adapter
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = MockNoteRepository::default();
        let req: NoteCreateRequest = serde_json::from_value(json!({
            "title": "  standup  ",
            "content": "ship the release",
            "tags": ["work"]
        }))
        .unwrap();

        let created = create_note_with_repo(&repo, req)
            .await
            .expect("create should succeed");
        assert_eq!(created.title, "standup");

        let fetched = get_note_with_repo(&repo, &created.id).await.unwrap();
        assert_eq!(fetched.content, "ship the release");
        assert_eq!(fetched.tags, Some(vec!["work".to_string()]));
    }

    #[tokio::test]
    async fn create_rejects_empty_title() {
        let repo = MockNoteRepository::default();
        let req: NoteCreateRequest = serde_json::from_value(json!({
            "title": "",
            "content": "body"
        }))
        .unwrap();

        let err = create_note_with_repo(&repo, req).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn update_changes_only_provided_fields() {
        let repo = MockNoteRepository::default();
        let req: NoteCreateRequest = serde_json::from_value(json!({
            "title": "draft",
            "content": "v1"
        }))
        .unwrap();
        let created = create_note_with_repo(&repo, req).await.unwrap();

        let update: NoteUpdateRequest = serde_json::from_value(json!({
            "content": "v2"
        }))
        .unwrap();
        let updated = update_note_with_repo(&repo, &created.id, update)
            .await
            .unwrap();

        assert_eq!(updated.title, "draft");
        assert_eq!(updated.content, "v2");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn missing_note_is_not_found() {
        let repo = MockNoteRepository::default();

        let err = get_note_with_repo(&repo, "nope").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotFound(_))
        ));

        let err = delete_note_with_repo(&repo, "nope").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_paginates_newest_first() {
        let repo = MockNoteRepository::default();
        for i in 0..5 {
            let req: NoteCreateRequest = serde_json::from_value(json!({
                "title": format!("note {i}"),
                "content": "body"
            }))
            .unwrap();
            create_note_with_repo(&repo, req).await.unwrap();
        }

        let page = list_notes_with_repo(
            &repo,
            PaginationQuery {
                limit: Some(2),
                offset: Some(1),
            },
        )
        .await
        .unwrap();

        assert_eq!(page.total, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.limit, 2);
        assert_eq!(page.offset, 1);
        assert!(page.items[0].created_at >= page.items[1].created_at);
    }
}
