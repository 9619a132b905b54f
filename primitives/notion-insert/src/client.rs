//! Page submitter backed by the Notion HTTP API.

use crate::{error::SubmitError, page::NewPage};
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use std::future::Future;

/// Default endpoint for creating pages.
pub const DEFAULT_API_URL: &str = "https://api.notion.com/v1/pages";

/// API version sent in the `Notion-Version` header.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Creates one page per call.
pub trait PageSubmitter {
    /// Creates a page titled `title` and returns the response status.
    ///
    /// Any HTTP status counts as success; only failing to build or send the
    /// request is an error.
    fn create_page(&self, title: &str) -> impl Future<Output = Result<StatusCode, SubmitError>>;
}

/// Notion API client targeting a single database.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
    api_url: String,
    token: String,
    database_id: String,
    notion_version: String,
}

impl NotionClient {
    pub fn new(http: Client, token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            http,
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
            database_id: database_id.into(),
            notion_version: NOTION_VERSION.to_string(),
        }
    }

    /// Overrides the page-creation endpoint.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    #[must_use]
    pub fn with_notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }
}

impl PageSubmitter for NotionClient {
    async fn create_page(&self, title: &str) -> Result<StatusCode, SubmitError> {
        let page = NewPage::new(&self.database_id, title);
        let body = serde_json::to_vec(&page).map_err(SubmitError::Json)?;

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .header("Notion-Version", &self.notion_version)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        tracing::info!(title, status = status.as_u16(), "{title}: response Status: {status}");

        Ok(status)
    }
}
