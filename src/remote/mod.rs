//! Client for the remote serverless function behind `/say`.
//!
//! The keyword is forwarded as a query parameter and the reply is handed back
//! untouched. There is no retry; the only timeout is the configured one.

use crate::config::RemoteConfig;
use crate::constants::KEYWORD_PARAM;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};
use url::Url;

/// Failures while calling the remote function
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Invalid function URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Remote request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Body and content type relayed from the remote function
#[derive(Debug, Clone)]
pub struct RemoteReply {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// HTTP client bound to one remote function URL
#[derive(Debug, Clone)]
pub struct RemoteFunction {
    client: reqwest::Client,
    function_url: Url,
}

impl RemoteFunction {
    /// Creates a client for the configured function URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client cannot be built
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let function_url = Url::parse(&config.function_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(RemoteFunction {
            client: builder.build()?,
            function_url,
        })
    }

    /// Builds the request URL for `keyword`, keeping any query already on the function URL
    pub fn url_for(&self, keyword: &str) -> Url {
        let mut url = self.function_url.clone();
        url.query_pairs_mut().append_pair(KEYWORD_PARAM, keyword);
        url
    }

    /// Calls the remote function with `keyword`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status
    pub async fn call(&self, keyword: &str) -> Result<RemoteReply, RemoteError> {
        let url = self.url_for(keyword);
        debug!("Calling remote function at {}", url);

        let resp = self.client.get(url.clone()).send().await?.error_for_status()?;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = resp.bytes().await?.to_vec();

        info!("GET {} -> status: {}", url, status);
        Ok(RemoteReply { content_type, body })
    }
}
