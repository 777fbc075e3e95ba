//! Agent dashboard demo: a catalog/chat gateway over axum plus the session
//! machinery for the terminal dashboard client.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod messages;
pub mod platform;
pub mod routes;
pub mod state;
