//! Server-rendered page handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;
use serde::Serialize;
use tracing::error;

use super::state::AppState;

/// Severity of a flash message
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// One entry in the flash-message panel
#[derive(Debug, Clone, Serialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

/// GET / - the landing page
pub async fn landing(State(state): State<AppState>) -> Response {
    let ctx = context! {
        app_name => state.settings.name,
        app_description => state.settings.description,
        website_url => state.settings.url,
        locale => state.settings.locale,
        messages => Vec::<FlashMessage>::new(),
    };

    match state.renderer.render("frontend/index.html", ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render landing page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppSettings, RenderMode};
    use crate::infrastructure::i18n::Translator;
    use crate::web::renderer::PageRenderer;
    use axum::body::to_bytes;
    use std::sync::Arc;

    fn state(description: &str) -> AppState {
        let translator =
            Arc::new(Translator::from_embedded("en", RenderMode::Strict).unwrap());
        let renderer =
            Arc::new(PageRenderer::new(RenderMode::Strict, translator).unwrap());

        AppState {
            renderer,
            settings: AppSettings {
                name: "Acme".to_string(),
                description: description.to_string(),
                ..AppSettings::default()
            },
        }
    }

    #[tokio::test]
    async fn test_landing_renders_trusted_description() {
        let response = landing(State(state("<b>Hi</b>"))).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();

        assert!(html.contains("<b>Hi</b>"));
        assert!(html.contains("Acme"));
    }
}
