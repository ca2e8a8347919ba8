use crate::error::Result;
use reqwest::Url;
use std::future::Future;

/// Default user agent string for requests
pub const DEFAULT_USER_AGENT: &str = concat!("catapi/", env!("CARGO_PKG_VERSION"));

/// Issues the GET request for a fully built URL and returns the body text.
pub trait Transport: Send + Sync {
    fn get(&self, url: Url) -> impl Future<Output = Result<String>> + Send;
}

/// `reqwest`-backed transport. Transport failures surface unchanged as
/// [`crate::error::CatApiError::NetworkError`]. The status code is not
/// inspected: the service reports failures inside the XML body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<String> {
        let response = self.client.get(url).send().await?;
        Ok(response.text().await?)
    }
}
