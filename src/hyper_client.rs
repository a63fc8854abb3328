use std::str::FromStr;

use async_trait::async_trait;
use http::{HeaderMap, Request, Response};
use hyper::Uri;
use log::debug;

use crate::errors::Error;
use crate::http_client::HttpClient;

/// Http client using hyper
#[derive(Debug, Clone)]
pub struct HyperClient {
    /// http client
    client: hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
    /// base connection address
    base: Uri,
}

fn join_uri(uri: &Uri, path: &str) -> Result<Uri, Error> {
    let joined = format!("{uri}{path}");
    Uri::from_str(&joined).map_err(|err| Error::InvalidUri {
        var: joined,
        source: err,
    })
}

async fn fetch_body(resp: Response<hyper::Body>) -> Result<Response<Vec<u8>>, Error> {
    let (p, b) = resp.into_parts();
    let b = hyper::body::to_bytes(b).await?.to_vec();
    Ok(Response::from_parts(p, b))
}

impl HyperClient {
    /// Connect over https to `base`, e.g. the Foursquare API root.
    pub fn connect_with_https(base: &str) -> Result<Self, Error> {
        let base = Uri::from_str(base).map_err(|err| Error::InvalidUri {
            var: base.to_string(),
            source: err,
        })?;
        let https = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .https_only()
            .enable_http1()
            .build();
        let client = hyper::Client::builder().build::<_, hyper::Body>(https);
        Ok(Self { client, base })
    }
}

#[async_trait]
impl HttpClient for HyperClient {
    type Err = Error;

    async fn get(&self, headers: &HeaderMap, path: &str) -> Result<Response<Vec<u8>>, Self::Err> {
        let url = join_uri(&self.base, path)?;
        // The query string carries credentials; keep it out of logs.
        debug!("GET {}", url.path());

        let mut request = Request::builder().method(http::Method::GET).uri(&url);
        for (name, value) in headers.iter() {
            request = request.header(name, value);
        }
        let res = self.client.request(request.body(hyper::Body::empty())?).await?;
        fetch_body(res).await
    }
}
