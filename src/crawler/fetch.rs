//! Page fetching
//!
//! The scheduler talks to the network through the [`PageFetcher`] trait so
//! crawl-loop tests can run against canned HTML instead of a live site.
//! [`HttpFetcher`] is the production implementation over `reqwest`.

use async_trait::async_trait;
use tracing::debug;

use super::config::CrawlerConfig;
use super::error::CrawlError;

/// Fetch collaborator for the crawl loop
#[async_trait]
pub trait PageFetcher {
    /// Fetch a URL and return its HTML body
    async fn fetch(&self, url: &str) -> Result<String, CrawlError>;
}

/// HTTP fetcher backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the config's timeout and user agent
    pub fn new(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        debug!(url, "fetching page");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn test_config() -> CrawlerConfig {
        CrawlerConfig::default()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/en/academic")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body><h1>Academics</h1></body></html>")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(&test_config()).unwrap();
        let body = fetcher
            .fetch(&format!("{}/en/academic", server.url()))
            .await
            .unwrap();

        assert!(body.contains("<h1>Academics</h1>"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(&test_config()).unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();

        match err {
            CrawlError::Fetch { status, .. } => assert_eq!(status, 404),
            other => panic!("expected a fetch error, got {other:?}"),
        }
    }
}
