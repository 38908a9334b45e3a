//! Prelude module for convenient imports.
//!
//! ```ignore
//! use responder::prelude::*;
//! ```

pub use crate::decorators::{
    LogLevel, close_body, close_body_on_error, decode_json, ignore, log_response, require_ok,
    require_status,
};
pub use crate::{
    Body, BoxResponder, Chain, Decorator, Error, Responder, Response, Result, StatusCode,
    create_responder, header_value, header_values, respond, responder_fn,
};
