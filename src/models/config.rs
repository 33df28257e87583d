//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the panel binaries.
pub struct AppConfig {
    /// Base URL of the backend REST service, e.g. `http://127.0.0.1:5000`.
    pub api_base_url: String,
    /// Base URL of the products backend; the products panel is skipped when
    /// unset.
    #[serde(default)]
    pub products_base_url: Option<String>,
}
