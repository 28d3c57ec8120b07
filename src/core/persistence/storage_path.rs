//! Data-directory layout helpers.
//!
//! Everything the gateway persists lives under one root:
//! `data/{files,notes,buckets,logs}`.

use std::path::PathBuf;

use crate::config;

pub fn data_root() -> PathBuf {
    config::data_dir()
}

/// File record metadata documents.
pub fn files_meta_dir() -> PathBuf {
    data_root().join("files")
}

/// Note documents.
pub fn notes_dir() -> PathBuf {
    data_root().join("notes")
}

/// Object store buckets (one directory per bucket).
pub fn buckets_dir() -> PathBuf {
    data_root().join("buckets")
}

/// Daily log files written by the rolling appender.
pub fn logs_dir() -> PathBuf {
    data_root().join("logs")
}
