//! REST-to-GraphQL gateway between the energy dashboard and the Kraken API.
//!
//! The five dashboard operations live in [`application::gateway_service`] and
//! [`application::tariff_service`]. Two adapters expose them over HTTP: the
//! axum router in [`presentation::router`] for the standalone server, and
//! [`presentation::edge::handle`] for hosts that pass whole buffered requests.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use presentation::app_state::AppState;
pub use presentation::edge::handle as handle_edge_request;
