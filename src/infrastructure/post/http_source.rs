//! HTTP implementation of the legacy post source

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::DomainError;
use crate::domain::post::{LegacyPage, LegacyPostSource};

/// Legacy source reading `GET {base_url}/posts?page=N&per_page=M`
pub struct HttpLegacyPostSource {
    client: Client,
    base_url: String,
    page_size: u32,
}

impl HttpLegacyPostSource {
    pub fn new(base_url: impl Into<String>, page_size: u32) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DomainError::source(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size,
        })
    }
}

#[async_trait]
impl LegacyPostSource for HttpLegacyPostSource {
    async fn fetch_page(&self, page: u32) -> Result<LegacyPage, DomainError> {
        let url = format!("{}/posts", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("per_page", self.page_size)])
            .send()
            .await
            .map_err(|e| DomainError::source(format!("Failed to reach legacy source: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::source(format!(
                "Legacy source returned {} for page {}",
                response.status(),
                page
            )));
        }

        response
            .json::<LegacyPage>()
            .await
            .map_err(|e| DomainError::source(format!("Malformed legacy page {}: {}", page, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_page_parses_feed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "posts": [
                    { "id": 10, "title": "First post", "content": "hello" },
                    { "id": 11, "title": "Second post", "content": "world" }
                ],
                "next_page": 2
            })))
            .mount(&server)
            .await;

        let source = HttpLegacyPostSource::new(server.uri(), 50).unwrap();
        let page = source.fetch_page(1).await.unwrap();

        assert_eq!(page.posts.len(), 2);
        assert_eq!(page.posts[0].id, 10);
        assert_eq!(page.next_page, Some(2));
    }

    #[tokio::test]
    async fn test_fetch_page_last_page_has_no_next() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "posts": []
            })))
            .mount(&server)
            .await;

        let source = HttpLegacyPostSource::new(server.uri(), 50).unwrap();
        let page = source.fetch_page(1).await.unwrap();

        assert!(page.posts.is_empty());
        assert_eq!(page.next_page, None);
    }

    #[tokio::test]
    async fn test_fetch_page_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = HttpLegacyPostSource::new(server.uri(), 50).unwrap();
        let result = source.fetch_page(1).await;

        assert!(matches!(result, Err(DomainError::Source { .. })));
    }

    #[tokio::test]
    async fn test_fetch_page_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let source = HttpLegacyPostSource::new(server.uri(), 50).unwrap();
        let result = source.fetch_page(1).await;

        assert!(matches!(result, Err(DomainError::Source { .. })));
    }
}
