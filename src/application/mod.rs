// Application layer - Gateway operations and the upstream port they use
pub mod gateway_error;
pub mod gateway_service;
pub mod graphql_documents;
pub mod response_normalizer;
pub mod tariff_service;
pub mod upstream_payloads;
pub mod upstream_transport;
