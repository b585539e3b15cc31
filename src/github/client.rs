// file: src/github/client.rs
// description: single-request client for the GitHub code search endpoint
// reference: https://docs.github.com/en/rest/search/search#search-code

use crate::config::SearchConfig;
use crate::error::{Result, UtilError};
use crate::github::query::SearchQuery;
use crate::models::CodeSearchResponse;
use crate::utils::validation::Validator;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

const SEARCH_PATH: &str = "/search/code";
const BODY_PREVIEW_CHARS: usize = 200;

pub struct CodeSearchClient {
    client: Client,
    endpoint: String,
    accept: String,
    token: Option<String>,
}

impl CodeSearchClient {
    /// `token` is sent as `Authorization: token <value>` when present and non-empty.
    pub fn new(config: &SearchConfig, token: Option<String>) -> Result<Self> {
        Validator::validate_url(&config.api_base_url)?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| UtilError::Request(format!("failed to create client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                config.api_base_url.trim_end_matches('/'),
                SEARCH_PATH
            ),
            accept: config.accept.clone(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        Url::parse_with_params(&self.endpoint, &[("q", query.expression())])
            .map_err(|e| UtilError::Request(format!("failed to create request: {}", e)))
    }

    /// Fetch the first page of matches. Any failure is returned as-is; nothing is retried.
    pub async fn search(&self, query: &SearchQuery) -> Result<CodeSearchResponse> {
        let url = self.search_url(query)?;
        debug!("GET {}", url);

        let mut request = self.client.get(url).header(ACCEPT, &self.accept);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| UtilError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UtilError::Request(format!("failed to read response: {}", e)))?;

        debug!(
            "Response status {}: {}",
            status,
            Validator::truncate_text(&body, BODY_PREVIEW_CHARS)
        );

        if status != StatusCode::OK {
            return Err(UtilError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| UtilError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;

    const ONE_MATCH: &str = r#"{
        "total_count": 1,
        "incomplete_results": false,
        "items": [{
            "name": "config.yml",
            "path": ".github/config.yml",
            "html_url": "https://github.com/testuser/app/blob/main/.github/config.yml",
            "repository": {
                "full_name": "testuser/app",
                "html_url": "https://github.com/testuser/app"
            }
        }]
    }"#;

    fn config_for(base_url: &str) -> SearchConfig {
        SearchConfig {
            api_base_url: base_url.to_string(),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_search_url_encodes_expression() {
        let client = CodeSearchClient::new(&SearchConfig::default(), None).unwrap();
        let query = SearchQuery::new("config.yml", Some("testuser")).unwrap();

        let url = client.search_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/search/code?q=filename%3Aconfig.yml+user%3Atestuser"
        );
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let client = CodeSearchClient::new(&config_for("http://localhost:8080/"), None).unwrap();
        let query = SearchQuery::new("README.md", None).unwrap();

        let url = client.search_url(&query).unwrap();
        assert_eq!(url.path(), "/search/code");
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let client =
            CodeSearchClient::new(&SearchConfig::default(), Some(String::new())).unwrap();
        assert!(!client.has_token());
    }

    #[tokio::test]
    async fn test_search_success_with_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search/code")
            .match_query(Matcher::UrlEncoded(
                "q".into(),
                "filename:config.yml user:testuser".into(),
            ))
            .match_header("accept", "application/vnd.github.v3+json")
            .match_header("authorization", "token ghp_test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ONE_MATCH)
            .create_async()
            .await;

        let client =
            CodeSearchClient::new(&config_for(&server.url()), Some("ghp_test".into())).unwrap();
        let query = SearchQuery::new("config.yml", Some("testuser")).unwrap();

        let response = client.search(&query).await.unwrap();
        mock.assert_async().await;

        assert_eq!(response.total_count, 1);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].repository.full_name, "testuser/app");
    }

    #[tokio::test]
    async fn test_search_without_token_sends_no_authorization() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search/code")
            .match_query(Matcher::Any)
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"total_count": 0, "items": []}"#)
            .create_async()
            .await;

        let client = CodeSearchClient::new(&config_for(&server.url()), None).unwrap();
        let query = SearchQuery::new("nothing-here.txt", None).unwrap();

        let response = client.search(&query).await.unwrap();
        mock.assert_async().await;

        assert!(response.is_empty());
        assert!(response.items.is_empty());
    }

    #[tokio::test]
    async fn test_non_200_surfaces_status_and_body() {
        let body = r#"{"message":"API rate limit exceeded"}"#;
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/code")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(body)
            .create_async()
            .await;

        let client = CodeSearchClient::new(&config_for(&server.url()), None).unwrap();
        let query = SearchQuery::new("README.md", None).unwrap();

        let err = client.search(&query).await.unwrap_err();
        match &err {
            UtilError::Api { status, body: got } => {
                assert_eq!(*status, 403);
                assert_eq!(got, body);
            }
            other => panic!("expected API error, got {:?}", other),
        }
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains(body));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/code")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{\"total_count\": ")
            .create_async()
            .await;

        let client = CodeSearchClient::new(&config_for(&server.url()), None).unwrap();
        let query = SearchQuery::new("README.md", None).unwrap();

        let err = client.search(&query).await.unwrap_err();
        assert!(matches!(err, UtilError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let client = CodeSearchClient::new(&config_for("http://127.0.0.1:1"), None).unwrap();
        let query = SearchQuery::new("README.md", None).unwrap();

        let err = client.search(&query).await.unwrap_err();
        assert!(matches!(err, UtilError::Request(_)));
    }
}
