use anyhow::Result;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder,
};
use serde::Deserialize;
use std::ops::Deref;
use thiserror::Error;

const GITHUB_API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("vercel-preview-url/", env!("CARGO_PKG_VERSION"));

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, CLIENT_USER_AGENT)
    }
}

/// Turns a sent request into its body text, failing on non-2xx statuses
pub trait ResponseHandler {
    async fn handle(self) -> Result<String>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|error| error.message)
                .unwrap_or(text);

            let error = Error::GenericResponseError {
                status: status.as_u16(),
                message,
            };

            log::debug!("{}", error.describe());
            return Err(error.into());
        }

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Failed to send request: {cause}")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}

impl Error {
    /// One-line summary for debug logs, carrying the HTTP status when there is one
    pub fn describe(&self) -> String {
        match self {
            Error::GenericResponseError { status, message } => {
                format!("request failed with status {}: {}", status, message)
            }
            other => other.to_string(),
        }
    }
}
