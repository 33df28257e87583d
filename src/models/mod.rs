//! Boundary representations: JSON bodies exchanged with the backend REST
//! API and the application configuration model. Conversions into domain
//! types live next to each model.

pub mod author;
pub mod book;
pub mod config;
pub mod product;

use serde::Deserialize;

/// Minimal response envelope for write endpoints. The backend reports
/// application-level failure through `success`, not the HTTP status.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
