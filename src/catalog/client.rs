//! HTTP client for the catalog JSON endpoints.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::error::CatalogError;
use super::model::{Conference, ConferenceDetail, ConferenceList, Event, EventDetail};
use crate::http::{HttpTimeouts, build_client};
use crate::user_agent;

/// Default catalog source host.
pub const DEFAULT_SOURCE: &str = "media.ccc.de";

/// Resolves the `--source` value into the catalog API base URL.
///
/// A bare host `h` maps to `https://api.h/public` (host lower-cased). A value
/// that already carries an `http://` or `https://` scheme is used as-is, minus
/// any trailing slash, so the tool can be pointed at a mirror.
#[must_use]
pub fn resolve_api_base(source: &str) -> String {
    let source = source.trim();
    let lower = source.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return source.trim_end_matches('/').to_string();
    }
    format!("https://api.{}/public", lower.trim_end_matches('/'))
}

/// Client for the conference → event → recording hierarchy.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    api_base: String,
}

impl CatalogClient {
    /// Creates a client rooted at `api_base` (see [`resolve_api_base`]).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] if `api_base` is not an absolute URL
    /// and [`CatalogError::Client`] if the HTTP client cannot be built.
    pub fn new(api_base: impl Into<String>, timeouts: HttpTimeouts) -> Result<Self, CatalogError> {
        let api_base = api_base.into();
        Url::parse(&api_base).map_err(|_| CatalogError::invalid_url(api_base.clone()))?;
        let client = build_client(user_agent::default_catalog_user_agent(), timeouts, true)
            .map_err(|source| CatalogError::Client { source })?;
        debug!(api_base = %api_base, "created catalog client");
        Ok(Self { client, api_base })
    }

    /// Returns the API base URL this client was created with.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Lists all conferences in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport, status or decode failure.
    #[instrument(skip(self), fields(api_base = %self.api_base))]
    pub async fn list_conferences(&self) -> Result<Vec<Conference>, CatalogError> {
        let url = format!("{}/conferences", self.api_base);
        let list: ConferenceList = self.get_json(&url).await?;
        debug!(count = list.conferences.len(), "fetched conferences");
        Ok(list.conferences)
    }

    /// Fetches a conference's event listing from its catalog URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport, status or decode failure.
    #[instrument(skip(self, conference), fields(acronym = %conference.acronym))]
    pub async fn conference_events(
        &self,
        conference: &Conference,
    ) -> Result<ConferenceDetail, CatalogError> {
        let detail: ConferenceDetail = self.get_json(&conference.url).await?;
        debug!(count = detail.events.len(), "fetched events");
        Ok(detail)
    }

    /// Fetches an event's recordings from its catalog URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport, status or decode failure.
    #[instrument(skip(self, event), fields(event = %event.title))]
    pub async fn event_recordings(&self, event: &Event) -> Result<EventDetail, CatalogError> {
        let detail: EventDetail = self.get_json(&event.url).await?;
        debug!(count = detail.recordings.len(), "fetched recordings");
        Ok(detail)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        Url::parse(url).map_err(|_| CatalogError::invalid_url(url))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::http_status(url, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::network(url, e))?;
        serde_json::from_slice(&body).map_err(|e| CatalogError::decode(url, e))
    }
}
