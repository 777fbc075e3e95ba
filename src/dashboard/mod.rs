//! Client side of the dashboard: gateway API client, catalog cache, and the
//! per-session transcript state machine driven by the terminal binary.

pub mod cache;
pub mod client;
pub mod session;
