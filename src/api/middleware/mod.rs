//! HTTP middleware.
//!
//! Only request tracing: the proxy has no authentication or rate limiting.

pub mod tracing;
