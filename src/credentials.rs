//! Access credentials for the Foursquare API.
//!
//! Either a user-scoped OAuth token or an application id/secret pair;
//! exactly one form goes on the wire, always together with the fixed
//! protocol parameters.

use url::form_urlencoded;

use crate::step::Environment;

/// API version date sent with every request.
pub const API_VERSION: &str = "20140806";
/// Caller identity tag sent with every request.
pub const CALLER_TAG: &str = "foursquare";

pub const OAUTH_TOKEN_VAR: &str = "FOURSQUARE_OAUTH_TOKEN";
pub const CLIENT_ID_VAR: &str = "FOURSQUARE_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "FOURSQUARE_CLIENT_SECRET";

/// Access credential
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Credentials {
    /// user-scoped OAuth token
    OauthToken(String),
    /// application id and secret
    ClientPair {
        client_id: String,
        client_secret: String,
    },
}

impl Credentials {
    pub fn with_token<S: Into<String>>(token: S) -> Self {
        Credentials::OauthToken(token.into())
    }

    pub fn with_client_pair<S: Into<String>>(client_id: S, client_secret: S) -> Self {
        Credentials::ClientPair {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read the credential form from the host environment.
    ///
    /// The OAuth token takes precedence over the id/secret pair. Empty
    /// variables count as unset.
    pub fn from_env(env: &dyn Environment) -> Option<Self> {
        let lookup = |name: &str| env.environment(name).filter(|v| !v.is_empty());

        if let Some(token) = lookup(OAUTH_TOKEN_VAR) {
            return Some(Credentials::OauthToken(token));
        }
        match (lookup(CLIENT_ID_VAR), lookup(CLIENT_SECRET_VAR)) {
            (Some(client_id), Some(client_secret)) => Some(Credentials::ClientPair {
                client_id,
                client_secret,
            }),
            _ => None,
        }
    }

    /// Convert to URL parameters.
    ///
    /// The fixed protocol parameters are appended after the credential
    /// pairs; no key appears twice.
    pub fn to_url_params(&self) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        match self {
            Credentials::OauthToken(token) => {
                params.append_pair("oauth_token", token);
            }
            Credentials::ClientPair {
                client_id,
                client_secret,
            } => {
                params.append_pair("client_id", client_id);
                params.append_pair("client_secret", client_secret);
            }
        }
        params.append_pair("v", API_VERSION);
        params.append_pair("m", CALLER_TAG);
        params.finish()
    }
}
