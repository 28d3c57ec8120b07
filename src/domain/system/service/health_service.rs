use anyhow::Result;
use serde_json::{json, Value};

use crate::core::persistence::storage_path;

/// Component-level health, used by `/api/v1/system/health`.
///
/// The plain `/health` stub stays a literal body; this one actually probes
/// the data directory.
pub async fn health() -> Result<Value> {
    let storage = match probe_data_dir() {
        Ok(()) => "ok",
        Err(_) => "unavailable",
    };

    let status = if storage == "ok" { "healthy" } else { "degraded" };

    Ok(json!({
        "status": status,
        "components": {
            "storage": storage,
        },
    }))
}

fn probe_data_dir() -> Result<()> {
    let root = storage_path::data_root();
    std::fs::create_dir_all(&root)?;

    let probe = root.join(".health-probe");
    std::fs::write(&probe, b"ok")?;
    std::fs::remove_file(&probe)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_storage_component() {
        let value = health().await.unwrap();
        let storage = value
            .pointer("/components/storage")
            .and_then(|v| v.as_str());
        assert!(matches!(storage, Some("ok") | Some("unavailable")));
    }
}
