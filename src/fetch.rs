use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::TldrError;

// Document retrieval capability, one method per supported kind
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch_pep_text(&self, canonical_key: &str) -> Result<String, TldrError>;
    async fn fetch_issue_discussion(&self, number: u32) -> Result<String, TldrError>;
}

#[derive(Deserialize)]
struct Issue {
    title: String,
    body: Option<String>,
}

#[derive(Deserialize)]
struct Comment {
    body: Option<String>,
}

// Fetches PEPs from peps.python.org and issue threads from the GitHub API
pub struct HttpFetcher {
    client: reqwest::Client,
    github_token: Option<String>,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client, github_token: Option<String>) -> Self {
        Self { client, github_token }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TldrError> {
        // github rejects requests without a user-agent
        let mut req = self.client.get(url).header("user-agent", "tldr-gateway");
        if let Some(token) = &self.github_token {
            req = req.bearer_auth(token);
        }
        Ok(req.send().await?.error_for_status()?.json::<T>().await?)
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch_pep_text(&self, canonical_key: &str) -> Result<String, TldrError> {
        let url = format!("https://peps.python.org/{canonical_key}/");
        debug!(url = %url, "fetching pep");
        let res = self.client.get(&url).send().await?.error_for_status()?;
        Ok(res.text().await?)
    }

    async fn fetch_issue_discussion(&self, number: u32) -> Result<String, TldrError> {
        let base = format!("https://api.github.com/repos/python/cpython/issues/{number}");
        debug!(url = %base, "fetching issue discussion");

        // issue body first, then the comment thread in posting order
        let issue: Issue = self.get_json(&base).await?;
        let comments: Vec<Comment> = self.get_json(&format!("{base}/comments")).await?;

        let mut text = issue.title;
        text.push('\n');
        text.push_str(&issue.body.unwrap_or_default());
        for comment in comments {
            text.push('\n');
            text.push_str(&comment.body.unwrap_or_default());
        }
        Ok(text)
    }
}
