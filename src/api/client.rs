use crate::api::params::{
    FavouriteParams, GetImageParams, Query, ReportParams, SubIdParams, VoteParams,
};
use crate::api::response;
use crate::api::transport::{HttpTransport, Transport};
use crate::error::{CatApiError, Result};
use reqwest::Url;
use serde_json::Value;

/// The default base URL for the cat API
pub const DEFAULT_BASE_URL: &str = "http://thecatapi.com/api/";

/// Remote operations, one per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GetImage,
    Vote,
    GetVotes,
    Favourite,
    GetFavourites,
    Report,
    ListCategories,
    GetOverview,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GetImage => "images/get",
            Endpoint::Vote => "images/vote",
            Endpoint::GetVotes => "images/getvotes",
            Endpoint::Favourite => "images/favourite",
            Endpoint::GetFavourites => "images/getfavourites",
            Endpoint::Report => "images/report",
            Endpoint::ListCategories => "categories/list",
            Endpoint::GetOverview => "stats/getoverview",
        }
    }

    /// Operation name used in error messages.
    pub fn operation(&self) -> &'static str {
        match self {
            Endpoint::GetImage => "get_image",
            Endpoint::Vote => "vote",
            Endpoint::GetVotes => "get_votes",
            Endpoint::Favourite => "favourite",
            Endpoint::GetFavourites => "get_favourites",
            Endpoint::Report => "report",
            Endpoint::ListCategories => "list_categories",
            Endpoint::GetOverview => "get_overview",
        }
    }

    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Endpoint::GetImage | Endpoint::ListCategories)
    }
}

/// Client settings, fixed for the lifetime of a [`CatClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: Option<String>,
    base_url: String,
}

impl ClientConfig {
    /// An empty key is treated as no key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Client for the cat API.
///
/// Every operation validates its options first and fails without touching
/// the network when they are rejected.
#[derive(Debug, Clone)]
pub struct CatClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl CatClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }
}

impl<T: Transport> CatClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn require_api_key(&self, endpoint: Endpoint) -> Result<()> {
        if endpoint.requires_api_key() && self.config.api_key().is_none() {
            log::debug!("{} rejected: no API key configured", endpoint.operation());
            return Err(CatApiError::MissingApiKey {
                operation: endpoint.operation(),
            });
        }
        Ok(())
    }

    /// Build the request URL: `format=xml` for image lookups, then the API
    /// key when configured, then the operation's own parameters.
    pub fn build_url(&self, endpoint: Endpoint, query: &Query) -> Result<Url> {
        let base_url = self.config.base_url();
        let base = Url::parse(base_url).map_err(|e| {
            CatApiError::Config(format!("invalid base URL '{}': {}", base_url, e))
        })?;
        let mut url = base
            .join(endpoint.path())
            .map_err(|e| CatApiError::Config(format!("invalid endpoint path: {}", e)))?;

        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if endpoint == Endpoint::GetImage {
            pairs.push(("format", "xml"));
        }
        if let Some(key) = self.config.api_key() {
            pairs.push(("api_key", key));
        }
        pairs.extend(query.iter().map(|(k, v)| (*k, v.as_str())));

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    async fn dispatch(&self, endpoint: Endpoint, query: Query) -> Result<Value> {
        let url = self.build_url(endpoint, &query)?;
        log::debug!("GET {}", redact(&url));
        let body = self.transport.get(url).await?;
        response::normalize(&body)
    }

    fn validated(&self, endpoint: Endpoint, query: Result<Query>) -> Result<Query> {
        query.inspect_err(|e| log::debug!("{} rejected: {}", endpoint.operation(), e))
    }

    /// Fetch one or more random images, or a specific one by id.
    pub async fn get_image(&self, params: &GetImageParams) -> Result<Value> {
        let query = self.validated(Endpoint::GetImage, params.to_query())?;
        self.dispatch(Endpoint::GetImage, query).await
    }

    pub async fn vote(&self, params: &VoteParams) -> Result<Value> {
        self.require_api_key(Endpoint::Vote)?;
        let query = self.validated(Endpoint::Vote, params.to_query())?;
        self.dispatch(Endpoint::Vote, query).await
    }

    pub async fn get_votes(&self, params: &SubIdParams) -> Result<Value> {
        self.require_api_key(Endpoint::GetVotes)?;
        let query = self.validated(Endpoint::GetVotes, params.to_query())?;
        self.dispatch(Endpoint::GetVotes, query).await
    }

    /// Favourite or unfavourite an image.
    pub async fn favourite(&self, params: &FavouriteParams) -> Result<Value> {
        self.require_api_key(Endpoint::Favourite)?;
        let query = self.validated(Endpoint::Favourite, params.to_query())?;
        self.dispatch(Endpoint::Favourite, query).await
    }

    pub async fn get_favourites(&self, params: &SubIdParams) -> Result<Value> {
        self.require_api_key(Endpoint::GetFavourites)?;
        let query = self.validated(Endpoint::GetFavourites, params.to_query())?;
        self.dispatch(Endpoint::GetFavourites, query).await
    }

    pub async fn report(&self, params: &ReportParams) -> Result<Value> {
        self.require_api_key(Endpoint::Report)?;
        let query = self.validated(Endpoint::Report, params.to_query())?;
        self.dispatch(Endpoint::Report, query).await
    }

    pub async fn list_categories(&self) -> Result<Value> {
        self.dispatch(Endpoint::ListCategories, Query::new()).await
    }

    /// Request, vote and favourite counters for the configured API key.
    pub async fn get_overview(&self) -> Result<Value> {
        self.require_api_key(Endpoint::GetOverview)?;
        self.dispatch(Endpoint::GetOverview, Query::new()).await
    }
}

/// Render a URL for logs with the API key value masked.
pub fn redact(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    if !pairs.is_empty() {
        masked.query_pairs_mut().clear().extend_pairs(pairs);
    }
    masked.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080/api");
        assert_eq!(config.base_url(), "http://localhost:8080/api/");
    }

    #[test]
    fn empty_api_key_is_no_key() {
        assert_eq!(ClientConfig::new(Some(String::new())).api_key(), None);
    }

    #[test]
    fn redact_masks_only_the_key() {
        let url =
            Url::parse("http://x/api/images/vote?api_key=secret&image_id=a1&score=5").unwrap();
        assert_eq!(
            redact(&url),
            "http://x/api/images/vote?api_key=***&image_id=a1&score=5"
        );
    }

    #[test]
    fn endpoints_needing_no_key() {
        assert!(!Endpoint::GetImage.requires_api_key());
        assert!(!Endpoint::ListCategories.requires_api_key());
        assert!(Endpoint::GetOverview.requires_api_key());
    }
}
