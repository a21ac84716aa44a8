// API client module: a small blocking HTTP client for the comment-thread
// listing endpoint, plus the typed subset of the response we read.

use crate::config::Config;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Parts requested from the listing endpoint.
pub const COMMENT_THREAD_PARTS: &str = "id,snippet,replies";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("comment listing failed: {status} - {message}")]
    Status { status: StatusCode, message: String },
    #[error("malformed comment listing response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One page of the comment-thread listing.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadPage {
    pub items: Vec<CommentThread>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl CommentThreadPage {
    /// Continuation token for the following page. Empty tokens count as none.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

/// The fields of a single comment that end up in the export.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_display_name: String,
    pub text_original: String,
    pub published_at: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Decode a listing response body.
pub fn parse_page(body: &str) -> Result<CommentThreadPage, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Pull the service's `error.message` out of a failure body, falling back to
/// the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(env) => env.error.message,
        Err(_) => body.trim().to_string(),
    }
}

/// Anything that can hand out comment-thread pages for a video.
pub trait CommentSource {
    fn list_comment_threads(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadPage, ApiError>;
}

/// Blocking client bound to one API key and base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(ApiClient { client, config })
    }

    fn threads_url(&self) -> String {
        format!("{}/commentThreads", self.config.base_url)
    }
}

impl CommentSource for ApiClient {
    fn list_comment_threads(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadPage, ApiError> {
        let mut query = vec![
            ("part", COMMENT_THREAD_PARTS),
            ("videoId", video_id),
            ("key", self.config.api_key.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let res = self.client.get(self.threads_url()).query(&query).send()?;
        let status = res.status();
        let body = res.text()?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                message: error_message(&body),
            });
        }
        parse_page(&body)
    }
}
