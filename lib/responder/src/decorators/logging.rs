//! Response logging decorator.
//!
//! This decorator logs the outcome of a responder chain using the `tracing` crate.

use std::time::Instant;

use tracing::{Level, debug, info, span, warn};

use crate::Decorator;

/// Log level for the logging decorator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level (status line and headers).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

/// Decorator logging the outcome of the responder it wraps.
///
/// Successful outcomes are logged at the requested level, failures as
/// warnings. The outcome itself is returned unchanged.
///
/// # Example
///
/// ```
/// use responder::decorators::{LogLevel, close_body, log_response, require_ok};
/// use responder::{Response, StatusCode, respond};
///
/// let mut response = Response::builder(StatusCode::OK).build().expect("response");
/// respond(
///     Some(&mut response),
///     [require_ok(), close_body(), log_response(LogLevel::Debug)],
/// )
/// .expect("respond");
/// ```
#[must_use]
pub fn log_response<'a>(level: LogLevel) -> Decorator<'a> {
    Decorator::wrap(move |inner, mut response| {
        let status = response.as_deref().map(|response| response.status().as_u16());
        let span = span!(Level::INFO, "http_response", status);
        let _entered = span.enter();

        let start = Instant::now();
        let result = inner.respond(response.as_deref_mut());

        // Saturating conversion to u64 (truncates after ~584 million years)
        let elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        match (&result, response.as_deref()) {
            (Ok(()), Some(response)) => match level {
                LogLevel::Debug => debug!(
                    status_line = response.status_line(),
                    headers = ?response.headers(),
                    elapsed_us,
                    "response handled"
                ),
                LogLevel::Info => info!(elapsed_us, "response handled"),
            },
            (Ok(()), None) => debug!(elapsed_us, "no response to handle"),
            (Err(err), _) => warn!(error = %err, elapsed_us, "response handling failed"),
        }

        result
    })
}
