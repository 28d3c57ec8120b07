//! API route declarations (e.g., /api/v1/*)

pub mod file_routes;
pub mod note_routes;
pub mod system_routes;
