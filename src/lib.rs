//! Foursquare venue-events adapter
//!
//! Fetches the events listed for a Foursquare venue and reshapes the
//! response into a reduced, whitelisted projection. Designed to run as a
//! single step inside a workflow host: the host supplies the step inputs
//! and environment, and receives exactly one terminal [`step::Outcome`]
//! per invocation.

pub mod credentials;
mod envelope;
pub mod errors;
mod foursquare;
mod http_client;
mod hyper_client;
pub mod projection;
pub mod step;

pub use crate::credentials::Credentials;
pub use crate::envelope::{Meta, ResponseEnvelope, VenueEvent, VenueEvents, VenueEventsResponse};
pub use crate::foursquare::{Foursquare, DEFAULT_API_BASE};
pub use crate::http_client::{HaveHttpClient, HttpClient};
pub use crate::hyper_client::HyperClient;
pub use crate::projection::{pick_result, ProjectedResult};
pub use crate::step::{
    check_inputs, Environment, EventFetcher, Outcome, ProcessEnvironment, StepInput,
};
