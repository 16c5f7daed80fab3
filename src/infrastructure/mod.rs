//! Infrastructure Layer
//!
//! Inbound HTTP adapter and outbound provider adapters.

pub mod adapters;
pub mod http;
