//! Standard decorators for responder chains.
//!
//! Each function returns a fresh [`Decorator`] to be composed with
//! [`respond`](crate::respond) or [`Chain`](crate::Chain). Decorators are
//! applied in the order received, so the last one in the list is the
//! outermost: its pre-action runs first and its post-action runs last.
//!
//! | Decorator | Post-action |
//! |-----------|-------------|
//! | [`ignore`] | none |
//! | [`close_body`] | closes the body |
//! | [`close_body_on_error`] | closes the body if the chain failed |
//! | [`decode_json`] | decodes the body into a target |
//! | [`require_status`] | rejects unexpected status codes |
//! | [`require_ok`] | rejects anything but `200 OK` |
//! | [`log_response`] | logs the outcome using `tracing` |
//!
//! # Example
//!
//! ```
//! use responder::decorators::{close_body, decode_json, require_ok};
//! use responder::{Response, StatusCode, respond};
//!
//! #[derive(Debug, Default, serde::Deserialize)]
//! struct User {
//!     id: u64,
//! }
//!
//! let mut response = Response::builder(StatusCode::OK)
//!     .bytes(r#"{"id":42}"#)
//!     .build()
//!     .expect("response");
//!
//! let mut user = User::default();
//! respond(
//!     Some(&mut response),
//!     [require_ok(), decode_json(&mut user), close_body()],
//! )
//! .expect("respond");
//!
//! assert_eq!(user.id, 42);
//! ```

mod close;
mod json;
mod logging;
mod status;

pub use close::{close_body, close_body_on_error};
pub use json::decode_json;
pub use logging::{LogLevel, log_response};
pub use status::{has_status, require_ok, require_status};

use crate::Decorator;

/// Decorator passing the response unexamined to the responder it wraps.
#[must_use]
pub fn ignore<'a>() -> Decorator<'a> {
    Decorator::wrap(|inner, response| inner.respond(response))
}
