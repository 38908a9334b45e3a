//! Composable decorators for processing HTTP client responses.
//!
//! Build a chain of behaviors (validate the status, decode JSON, close the
//! body, log the outcome) and apply it once to a received response.
//!
//! # Example
//!
//! ```
//! use responder::prelude::*;
//!
//! #[derive(Debug, Default, serde::Deserialize)]
//! pub struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! let mut response = Response::builder(StatusCode::OK)
//!     .header("ETag", "\"v1\"")
//!     .bytes(r#"{"id":42,"name":"Alice"}"#)
//!     .build()?;
//!
//! let mut user = User::default();
//! respond(
//!     Some(&mut response),
//!     [require_ok(), decode_json(&mut user), close_body()],
//! )?;
//!
//! assert_eq!(user.name, "Alice");
//! assert_eq!(header_value("etag", Some(&response)), "\"v1\"");
//! # Ok::<(), responder::Error>(())
//! ```
//!
//! # Ordering
//!
//! Decorators are applied in the order received, so the last one is the
//! outermost wrapper. Post-actions such as closing the body run after
//! everything they wrap, which makes [`close_body`](decorators::close_body)
//! safe anywhere in the chain.

mod chain;
pub mod decorators;
mod headers;
pub mod prelude;

pub use chain::Chain;
pub use headers::{header_value, header_values};

// Re-export core types
pub use responder_core::{
    Body, BoxResponder, BufferedBody, Decorator, Error, Noop, RequestLine, Responder, ResponderFn,
    Response, ResponseBuilder, Result, StatusError, TeeReader, create_responder, decorate,
    from_json_reader, respond, responder_fn,
};

// Re-export http types for status codes, methods and headers
pub use responder_core::{HeaderMap, Method, StatusCode, header};
