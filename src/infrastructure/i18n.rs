//! Localized string resolution
//!
//! Catalogs are TOML files embedded at build time; nested tables flatten
//! into dotted keys (`[home] website = ...` becomes `home.website`).

use std::collections::HashMap;

use crate::config::RenderMode;
use crate::domain::DomainError;

const EN_CATALOG: &str = include_str!("../../locales/en.toml");

/// Translation lookup over a flattened catalog
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: HashMap<String, String>,
    locale: String,
    mode: RenderMode,
}

impl Translator {
    /// Load the embedded catalog for a locale
    pub fn from_embedded(locale: &str, mode: RenderMode) -> Result<Self, DomainError> {
        let raw = match locale {
            "en" => EN_CATALOG,
            other => {
                return Err(DomainError::configuration(format!(
                    "No catalog for locale '{}'",
                    other
                )));
            }
        };

        let table: toml::Table = raw.parse().map_err(|e| {
            DomainError::configuration(format!("Invalid catalog for locale '{}': {}", locale, e))
        })?;

        let mut catalog = HashMap::new();
        flatten_table(&table, "", &mut catalog);

        Ok(Self {
            catalog,
            locale: locale.to_string(),
            mode,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Resolve a localized string by dotted key
    pub fn translate(&self, key: &str) -> Result<String, DomainError> {
        match self.catalog.get(key) {
            Some(value) => Ok(value.clone()),
            None => match self.mode {
                RenderMode::Strict => Err(DomainError::template(format!(
                    "Missing translation '{}' for locale '{}'",
                    key, self.locale
                ))),
                RenderMode::Lenient => {
                    tracing::warn!(key, locale = %self.locale, "Missing translation");
                    Ok(key.to_string())
                }
            },
        }
    }
}

fn flatten_table(table: &toml::Table, prefix: &str, out: &mut HashMap<String, String>) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            toml::Value::String(s) => {
                out.insert(full_key, s.clone());
            }
            toml::Value::Table(nested) => flatten_table(nested, &full_key, out),
            other => {
                out.insert(full_key, other.to_string());
            }
        }
    }
}
