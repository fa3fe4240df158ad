use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared::{Announcement, Metadata};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Subset of a GitHub issue used as an announcement.
#[derive(Debug, Clone, Deserialize)]
struct IssueSummary {
    number: u64,
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

impl From<IssueSummary> for Announcement {
    fn from(issue: IssueSummary) -> Self {
        Announcement {
            id: issue.number,
            title: issue.title,
            body: issue.body.filter(|body| !body.trim().is_empty()),
            url: issue.html_url,
        }
    }
}

pub struct ApiClient;

impl ApiClient {
    async fn get_json<T: DeserializeOwned>(url: &str, with_credentials: bool) -> Result<T, FetchError> {
        let mut request = Request::get(url).header("Accept", "application/json");

        if with_credentials {
            request = request.credentials(web_sys::RequestCredentials::Include);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_json(&body)
    }

    /// Site metadata, including the signed-in user if the session cookie is valid.
    pub async fn get_metadata(url: &str) -> Result<Metadata, FetchError> {
        Self::get_json(url, true).await
    }

    /// Newest open announcement, or `None` when nothing is announced.
    pub async fn latest_announcement(url: &str) -> Result<Option<Announcement>, FetchError> {
        let issues: Vec<IssueSummary> = Self::get_json(url, false).await?;
        Ok(first_announcement(issues))
    }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

fn first_announcement(issues: Vec<IssueSummary>) -> Option<Announcement> {
    issues.into_iter().next().map(Announcement::from)
}
