//! Host seam for running the adapter as a workflow step.
//!
//! The host supplies the step inputs and environment through the two
//! traits here and receives exactly one terminal [`Outcome`] per run.

use log::debug;

use crate::credentials::{Credentials, CLIENT_ID_VAR, CLIENT_SECRET_VAR, OAUTH_TOKEN_VAR};
use crate::errors::{Error, Result};
use crate::foursquare::Foursquare;
use crate::http_client::HttpClient;
use crate::hyper_client::HyperClient;
use crate::projection::{pick_result, ProjectedResult};

/// Required step input carrying the venue identifier.
pub const VENUE_ID_INPUT: &str = "VENUE_ID";

/// Step configuration supplied by the host.
pub trait StepInput {
    /// First value configured for the named input, if any.
    fn input(&self, name: &str) -> Option<String>;
}

/// Environment lookups supplied by the host.
pub trait Environment {
    fn environment(&self, name: &str) -> Option<String>;
}

/// Environment backed by process environment variables.
#[derive(Debug, Default, Clone)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn environment(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Terminal outcome of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed(ProjectedResult),
    Failed(String),
}

fn env_requirement() -> String {
    format!("{OAUTH_TOKEN_VAR} or ({CLIENT_ID_VAR} and {CLIENT_SECRET_VAR})")
}

/// Validate the step configuration before any network call.
///
/// `None` means every requirement is satisfied. Otherwise the message
/// lists each missing input and the missing environment requirement,
/// semicolon-joined; both appear when both are missing.
pub fn check_inputs(step: &dyn StepInput, env: &dyn Environment) -> Option<String> {
    let mut missing_inputs = Vec::new();
    if step.input(VENUE_ID_INPUT).is_none() {
        missing_inputs.push(VENUE_ID_INPUT);
    }

    let mut err = String::new();
    if !missing_inputs.is_empty() {
        err.push_str(&format!(
            "Inputs [{}] required for this module; ",
            missing_inputs.join(",")
        ));
    }
    if Credentials::from_env(env).is_none() {
        err.push_str(&format!(
            "Environment [{}] required for this module; ",
            env_requirement()
        ));
    }

    if err.is_empty() {
        None
    } else {
        Some(err)
    }
}

/// Runs one fetch-and-project invocation against host-provided
/// configuration.
#[derive(Debug)]
pub struct EventFetcher<C = HyperClient> {
    api: Foursquare<C>,
}

impl EventFetcher<HyperClient> {
    /// Fetcher wired to the production API endpoint.
    pub fn connect_with_defaults() -> Result<Self> {
        Ok(EventFetcher::new(Foursquare::connect_with_defaults()?))
    }
}

impl<C> EventFetcher<C>
where
    C: HttpClient<Err = Error>,
{
    pub fn new(api: Foursquare<C>) -> Self {
        Self { api }
    }

    /// Run the step to its single terminal outcome.
    ///
    /// Transport failures are reported through [`Outcome::Failed`] before
    /// any envelope inspection; nothing in here panics on remote or
    /// network misbehavior.
    pub async fn run(&self, step: &dyn StepInput, env: &dyn Environment) -> Outcome {
        if let Some(reason) = check_inputs(step, env) {
            return Outcome::Failed(reason);
        }
        // check_inputs verified both of these; the fallbacks keep the
        // lookups panic-free regardless.
        let venue_id = match step.input(VENUE_ID_INPUT) {
            Some(venue_id) => venue_id,
            None => {
                return Outcome::Failed(format!(
                    "Inputs [{VENUE_ID_INPUT}] required for this module; "
                ))
            }
        };
        let credentials = match Credentials::from_env(env) {
            Some(credentials) => credentials,
            None => {
                return Outcome::Failed(format!(
                    "Environment [{}] required for this module; ",
                    env_requirement()
                ))
            }
        };

        let envelope = match self.api.venue_events(&venue_id, &credentials).await {
            Ok(envelope) => envelope,
            Err(err) => {
                debug!("transport failure for venue {venue_id}: {err}");
                return Outcome::Failed(err.to_string());
            }
        };

        match envelope.api_error() {
            Some(reason) => Outcome::Failed(reason),
            None => Outcome::Completed(pick_result(&envelope)),
        }
    }
}
