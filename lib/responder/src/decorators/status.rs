//! Status code validation decorators.

use http::StatusCode;
use tracing::debug;

use crate::{Decorator, Error, Response, StatusError};

/// Returns `true` if `response` is present and its status is one of `codes`.
#[must_use]
pub fn has_status(response: Option<&Response>, codes: &[StatusCode]) -> bool {
    response.is_some_and(|response| codes.contains(&response.status()))
}

/// Decorator rejecting responses whose status is not one of `codes`.
///
/// The check runs after the wrapped responder succeeded; its errors are
/// returned untouched. The rejection is an
/// [`Error::UnexpectedStatus`] describing the request and the status line.
/// An absent response has nothing to validate and passes.
///
/// The body is left open: combine with [`close_body`](super::close_body) or
/// [`close_body_on_error`](super::close_body_on_error).
#[must_use]
pub fn require_status<'a>(codes: impl IntoIterator<Item = StatusCode>) -> Decorator<'a> {
    let codes: Vec<StatusCode> = codes.into_iter().collect();
    Decorator::wrap(move |inner, mut response| {
        inner.respond(response.as_deref_mut())?;

        let Some(response) = response.as_deref() else {
            return Ok(());
        };
        if has_status(Some(response), &codes) {
            return Ok(());
        }

        let request = response.request();
        debug!(
            status = %response.status(),
            expected = ?codes,
            "rejecting response with unexpected status"
        );
        Err(Error::unexpected_status(StatusError::new(
            request.map(|request| request.method().clone()),
            request.map(|request| request.url().clone()),
            response.status(),
            response.status_line(),
        )))
    })
}

/// Decorator rejecting any response but `200 OK`.
#[must_use]
pub fn require_ok<'a>() -> Decorator<'a> {
    require_status([StatusCode::OK])
}
