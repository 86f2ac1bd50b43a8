use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload returned by `GET /health`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthStatus {
    /// Server reports itself as ready to analyze
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some("healthy")
    }
}
