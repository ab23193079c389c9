use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    /// A missing parameter resolves like an empty link.
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLinkRequest {
    pub active_link: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
