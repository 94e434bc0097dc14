//! Shared application state and JSON endpoints.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;
use crate::nav::Breakpoints;

/// Presentation settings the page handlers need.
#[derive(Debug, Clone, PartialEq)]
pub struct UiSettings {
    pub title: String,
    pub breakpoints: Breakpoints,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for UiSettings {
    fn from(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            breakpoints: config.breakpoints,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<UiSettings>,
}

impl AppState {
    pub fn new(settings: UiSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    /// Configured dashboard title
    pub title: String,
}

/// GET /status - Health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "admin-portal",
        version: env!("PORTAL_VERSION"),
        git_sha: env!("PORTAL_GIT_SHA"),
        title: state.settings.title.clone(),
    })
}
