//! Core types and traits for composing HTTP response decorators.
//!
//! This crate provides the foundational types used by responder:
//! - [`Responder`] - Unit of work reacting to a received response
//! - [`Decorator`] - Transformation wrapping one responder into another
//! - [`decorate`], [`create_responder`] and [`respond`] - Chain composition
//! - [`Response`] and [`ResponseBuilder`] - Received HTTP response model
//! - [`Body`] - Response body stream with explicit closing
//! - [`Error`] and [`Result`] - Error handling
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod error;
pub mod prelude;
mod responder;
mod response;

pub use body::{TeeReader, from_json_reader};
pub use error::{Error, Result, StatusError};
pub use responder::{
    BoxResponder, Decorator, Noop, Responder, ResponderFn, create_responder, decorate, respond,
    responder_fn,
};
pub use response::{Body, BufferedBody, RequestLine, Response, ResponseBuilder};

// Re-export http crate types for status codes, methods and headers
pub use http::{HeaderMap, Method, StatusCode, header};
