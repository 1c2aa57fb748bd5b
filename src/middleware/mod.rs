//! HTTP middleware and request-derived extractors

pub mod client_ip;
pub mod logging;

pub use client_ip::ClientIp;
pub use logging::logging_middleware;
