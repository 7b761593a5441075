//! HTTP middleware for request processing.
//!
//! - [`tracing`] - per-request spans and response logging
//! - [`panic`] - converts handler panics into 500 responses

pub mod panic;
pub mod tracing;
