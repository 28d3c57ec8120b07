use anyhow::Result;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::time::Instant;

static STARTED_AT: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);
static STARTED_INSTANT: Lazy<Instant> = Lazy::new(Instant::now);

/// Pin the process start time. Called once from `main` before serving.
pub fn mark_started() {
    Lazy::force(&STARTED_AT);
    Lazy::force(&STARTED_INSTANT);
}

pub async fn status() -> Result<Value> {
    Ok(json!({
        "service": "scimus-api",
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": STARTED_AT.to_rfc3339(),
        "uptime_seconds": STARTED_INSTANT.elapsed().as_secs(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn status_reports_version_and_uptime() {
        mark_started();
        let value = status().await.unwrap();

        assert_eq!(
            value.get("version").and_then(|v| v.as_str()),
            Some(env!("CARGO_PKG_VERSION"))
        );
        assert!(value.get("uptime_seconds").and_then(|v| v.as_u64()).is_some());
    }
}
