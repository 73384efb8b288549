use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::error::{RedmineError, Result};
use crate::types::{Issue, IssueDetail};

/// Page size Redmine is asked for; the viewer never paginates past it.
pub const DEFAULT_LIMIT: u32 = 50;

const API_KEY_HEADER: &str = "X-Redmine-API-Key";

pub struct RedmineClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct IssueListEnvelope {
    issues: Vec<Issue>,
}

#[derive(Deserialize)]
struct IssueDetailEnvelope {
    issue: IssueDetail,
}

impl RedmineClient {
    /// Builds a client for one server. Empty or unparseable settings are
    /// rejected here, before any request goes out.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(RedmineError::MissingBaseUrl);
        }

        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(RedmineError::MissingApiKey);
        }

        Url::parse(&base_url).map_err(|_| RedmineError::InvalidUrl(base_url.clone()))?;

        Ok(Self {
            http: Client::new(),
            base_url,
            api_key,
        })
    }

    /// Fetches the current user's open issues, in server order.
    pub async fn fetch_assigned_issues(&self, limit: u32) -> Result<Vec<Issue>> {
        let url = format!("{}/issues.json", self.base_url);
        let envelope: IssueListEnvelope = self
            .get(
                &url,
                &[
                    ("assigned_to_id", "me".to_string()),
                    ("status_id", "open".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(envelope.issues)
    }

    /// Fetches one issue's full detail by id. Not cached; every call goes
    /// to the server.
    pub async fn fetch_issue_detail(&self, id: u64) -> Result<IssueDetail> {
        let url = format!("{}/issues/{id}.json", self.base_url);
        let envelope: IssueDetailEnvelope = self.get(&url, &[]).await?;

        Ok(envelope.issue)
    }

    /// The issue's human-facing web page, for opening in a browser.
    pub fn issue_web_url(&self, id: u64) -> String {
        format!("{}/issues/{id}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await?;

        check_status(response.status())?;

        let body = response.text().await?;
        decode_body(&body)
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(RedmineError::Http {
            status: status.as_u16(),
        })
    }
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| RedmineError::Decode {
        message: e.to_string(),
    })
}
