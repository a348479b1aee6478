use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl HealthStatus {
    pub fn alive() -> Self {
        Self {
            service: "ok".to_string(),
            database: None,
        }
    }

    pub fn with_database(ok: bool) -> Self {
        Self {
            service: "ok".to_string(),
            database: Some(if ok { "ok" } else { "error" }.to_string()),
        }
    }
}
