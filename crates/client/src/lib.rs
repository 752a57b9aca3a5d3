//! `lumx-client` -- HTTP transport for the appliance REST API.
//!
//! [`ApiClient`] wraps the appliance's REST endpoints behind typed methods
//! using [`reqwest`].  The [`Transport`] trait is the seam the state layer
//! programs against, so store logic can be exercised without a live
//! appliance.

pub mod api;
pub mod error;
pub mod transport;

pub use api::{ApiClient, IntegrationsResponse, VirtualsResponse};
pub use error::ApiError;
pub use transport::Transport;
