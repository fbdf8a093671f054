//! HTTP middleware and request extractors.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. CORS
//! 3. `TraceLayer` (`http_request` span)
//! 4. Request ID (recorded on the span above)

pub mod identity;
pub mod json;
pub mod request_id;

pub use identity::{ActingUser, USER_EMAIL_HEADER};
pub use json::JsonBody;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
