//! Environment-driven configuration shared by both binaries.
//!
//! Every setting has a development default so `cargo run` works without a
//! `.env` file. The binaries call `dotenvy::dotenv()` before reading any of
//! these.

use std::env;
use std::path::PathBuf;

const DEFAULT_API_PORT: u16 = 3001;
const DEFAULT_SERVICES_PORT: u16 = 8000;
const DEFAULT_API_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";
const DEFAULT_SERVICES_CORS_ORIGINS: &str = "http://localhost:3001";
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_UPLOAD_BUCKET: &str = "uploads";

// Development-only fallback; set SCIMUS_DOWNLOAD_SECRET in any real deployment.
const DEV_DOWNLOAD_SECRET: &str = "scimus-dev-download-secret";

/// Port for the backend API gateway.
pub fn api_port() -> u16 {
    env_port("SCIMUS_API_PORT", DEFAULT_API_PORT)
}

/// Port for the processing services host.
pub fn services_port() -> u16 {
    env_port("SCIMUS_SERVICES_PORT", DEFAULT_SERVICES_PORT)
}

/// Origins the gateway accepts cross-origin requests from.
pub fn api_cors_origins() -> Vec<String> {
    env_list("SCIMUS_CORS_ORIGINS", DEFAULT_API_CORS_ORIGINS)
}

/// Origins the processing services host accepts cross-origin requests from.
pub fn services_cors_origins() -> Vec<String> {
    env_list("SCIMUS_SERVICES_CORS_ORIGINS", DEFAULT_SERVICES_CORS_ORIGINS)
}

/// Root directory for file records, notes, buckets and logs.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env_or("SCIMUS_DATA_DIR", DEFAULT_DATA_DIR))
}

/// Object store backend selector (only `local` is implemented).
pub fn storage_type() -> String {
    env_or("SCIMUS_STORAGE_TYPE", "local")
}

/// Bucket uploaded files land in.
pub fn upload_bucket() -> String {
    env_or("SCIMUS_UPLOAD_BUCKET", DEFAULT_UPLOAD_BUCKET)
}

/// Secret used to sign time-limited download links.
pub fn download_secret() -> String {
    env_or("SCIMUS_DOWNLOAD_SECRET", DEV_DOWNLOAD_SECRET)
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_port(key: &str, default: u16) -> u16 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_list(key: &str, default: &str) -> Vec<String> {
    env_or(key, default)
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
