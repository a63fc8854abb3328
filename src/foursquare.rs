use http::HeaderMap;
use log::debug;
use serde::de::DeserializeOwned;

use crate::credentials::Credentials;
use crate::envelope::ResponseEnvelope;
use crate::errors::{Error, Result};
use crate::http_client::{HaveHttpClient, HttpClient};
use crate::hyper_client::HyperClient;

/// The API root every request is issued against.
pub static DEFAULT_API_BASE: &str = "https://api.foursquare.com/v2/";

/// Handle to the remote Foursquare API
#[derive(Debug)]
pub struct Foursquare<C = HyperClient> {
    /// http client
    client: C,
    /// http headers used for any requests
    headers: HeaderMap,
}

/// Deserialize from json response body
///
/// Foursquare reports errors inside the `meta` envelope, so the body is
/// decoded regardless of the status line.
fn api_result<D: DeserializeOwned>(res: http::Response<Vec<u8>>) -> Result<D> {
    if !res.status().is_success() {
        debug!("non-success status {}, decoding envelope anyway", res.status());
    }
    Ok(serde_json::from_slice::<D>(res.body())?)
}

impl Foursquare<HyperClient> {
    /// Connect to the production API endpoint.
    pub fn connect_with_defaults() -> Result<Self> {
        let client = HyperClient::connect_with_https(DEFAULT_API_BASE)?;
        Ok(Foursquare::new(client))
    }
}

impl<C> Foursquare<C>
where
    C: HttpClient<Err = Error>,
{
    pub fn new(client: C) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
        }
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Events at a venue
    ///
    /// # API
    /// GET /venues/{id}/events
    pub async fn venue_events(
        &self,
        venue_id: &str,
        credentials: &Credentials,
    ) -> Result<ResponseEnvelope> {
        let path = format!("venues/{}/events?{}", venue_id, credentials.to_url_params());
        let res = self.http_client().get(self.headers(), &path).await?;
        api_result(res)
    }
}

impl<C: HttpClient> HaveHttpClient for Foursquare<C> {
    type Client = C;
    fn http_client(&self) -> &C {
        &self.client
    }
}
