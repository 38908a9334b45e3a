//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use responder_core::prelude::*;
//! ```

pub use crate::{
    Body, BoxResponder, Decorator, Error, Responder, Response, Result, StatusCode,
    create_responder, decorate, respond, responder_fn,
};
