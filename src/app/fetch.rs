//! Page retrieval.
//!
//! [`PageSource`] is the seam between the scrape loop and the network so
//! the loop can run against canned HTML in tests.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode, Url};
use thiserror::Error;

/// Why a page could not be retrieved.  Either way the city is skipped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not fetch {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Anything that can hand back the HTML behind a URL.
pub trait PageSource {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, FetchError>>;
}

/// Live HTTP source with a browser-like user agent and a request timeout.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        Self::from_builder(Client::builder(), user_agent, timeout)
    }

    fn from_builder(
        builder: ClientBuilder,
        user_agent: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = builder
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let request_err = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_err)?;
        let status = response.status();
        tracing::debug!(%url, %status, "response received");
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        response.text().await.map_err(request_err)
    }
}
