//! Middleware
//!
//! Tower middleware for request processing.

pub mod logging;
pub mod metrics;

pub use logging::create_trace_layer;
pub use metrics::track_requests;
