//! Application state for the web server

use std::sync::Arc;

use crate::config::AppSettings;

use super::renderer::PageRenderer;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer>,
    pub settings: AppSettings,
}
