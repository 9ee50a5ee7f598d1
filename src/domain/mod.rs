// Domain layer - Transient values exchanged with the dashboard and upstream
pub mod account;
pub mod auth;
pub mod measurement;
pub mod nullable;
pub mod tariff;
