//! Page rendering over minijinja
//!
//! Templates are embedded at build time. `.html` names keep minijinja's
//! auto-escaping on, so everything in the context is escaped except values a
//! template explicitly marks `| safe` - the landing page does that for the
//! app description, which callers must supply pre-sanitized.

use std::sync::Arc;

use minijinja::{Environment, UndefinedBehavior};

use crate::config::RenderMode;
use crate::domain::DomainError;
use crate::infrastructure::i18n::Translator;

const TEMPLATES: [(&str, &str); 3] = [
    ("frontend/layout.html", include_str!("templates/layout.html")),
    ("frontend/index.html", include_str!("templates/index.html")),
    (
        "frontend/includes/messages.html",
        include_str!("templates/includes/messages.html"),
    ),
];

/// Renders named templates with a translation function in scope
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new(mode: RenderMode, translator: Arc<Translator>) -> Result<Self, DomainError> {
        let mut env = Environment::new();

        env.set_undefined_behavior(match mode {
            RenderMode::Strict => UndefinedBehavior::Strict,
            RenderMode::Lenient => UndefinedBehavior::Lenient,
        });

        for (name, source) in TEMPLATES {
            env.add_template(name, source).map_err(|e| {
                DomainError::template(format!("Failed to register template '{}': {}", name, e))
            })?;
        }

        env.add_function("t", move |key: String| {
            translator.translate(&key).map_err(|e| {
                minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, e.to_string())
            })
        });

        Ok(Self { env })
    }

    /// Render a named template with the given context
    pub fn render(&self, template: &str, ctx: minijinja::Value) -> Result<String, DomainError> {
        let tmpl = self.env.get_template(template).map_err(|_| {
            DomainError::template(format!("Template '{}' not found", template))
        })?;

        tmpl.render(ctx).map_err(|e| {
            DomainError::template(format!("Failed to render '{}': {}", template, e))
        })
    }
}
