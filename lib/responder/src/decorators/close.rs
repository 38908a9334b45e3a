//! Body-closing decorators.

use tracing::debug;

use crate::{Decorator, Response};

/// Decorator closing the response body once the wrapped responder returns.
///
/// Since the body is closed after the wrapped responder has run, this
/// decorator may appear anywhere in the chain. The wrapped outcome is
/// returned unchanged.
#[must_use]
pub fn close_body<'a>() -> Decorator<'a> {
    Decorator::wrap(|inner, mut response| {
        let result = inner.respond(response.as_deref_mut());
        if let Some(response) = response {
            close_quietly(response);
        }
        result
    })
}

/// Decorator closing the response body only if the wrapped responder failed.
///
/// Use it when a successful chain hands the body over to the caller.
#[must_use]
pub fn close_body_on_error<'a>() -> Decorator<'a> {
    Decorator::wrap(|inner, mut response| {
        let result = inner.respond(response.as_deref_mut());
        if let (Err(_), Some(response)) = (&result, response) {
            close_quietly(response);
        }
        result
    })
}

fn close_quietly(response: &mut Response) {
    if let Err(err) = response.close_body() {
        debug!(error = %err, status = %response.status(), "failed to close response body");
    }
}
