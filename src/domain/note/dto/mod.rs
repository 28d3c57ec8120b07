pub mod note_upsert_request;
