//! Static payloads served by the processing services host.
//!
//! The `/ml` and `/pdf` routes are placeholders for capabilities that are not
//! implemented yet; every payload here is a constant.

use serde_json::{json, Value};

pub fn index_payload() -> Value {
    json!({
        "service": "Scimus Processing Services",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "ml": "/ml",
            "pdf": "/pdf",
        },
    })
}

pub fn health_payload() -> Value {
    json!({ "status": "healthy" })
}

pub fn ml_info_payload() -> Value {
    json!({
        "service": "Machine Learning",
        "status": "ready",
    })
}

pub fn pdf_info_payload() -> Value {
    json!({
        "service": "PDF Processing",
        "status": "ready",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_are_the_advertised_literals() {
        assert_eq!(
            ml_info_payload(),
            json!({"service": "Machine Learning", "status": "ready"})
        );
        assert_eq!(
            pdf_info_payload(),
            json!({"service": "PDF Processing", "status": "ready"})
        );
        assert_eq!(health_payload(), json!({"status": "healthy"}));

        let index = index_payload();
        assert_eq!(
            index.pointer("/endpoints/ml").and_then(|v| v.as_str()),
            Some("/ml")
        );
        assert_eq!(
            index.pointer("/endpoints/pdf").and_then(|v| v.as_str()),
            Some("/pdf")
        );
    }
}
