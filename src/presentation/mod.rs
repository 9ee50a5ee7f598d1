// Presentation layer - HTTP adapters over the gateway operations
pub mod app_state;
pub mod edge;
pub mod endpoints;
pub mod handlers;
pub mod query_string;
pub mod router;
