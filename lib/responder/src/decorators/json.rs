//! JSON decoding decorator.

use std::io;
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;

use crate::{Decorator, Response, from_json_reader};

/// Decorator decoding the response body as a JSON document into `target`.
///
/// Decoding happens after the wrapped responder succeeded; its errors are
/// returned untouched. On a decoding failure the returned
/// [`Error::JsonDecode`](crate::Error::JsonDecode) carries the raw payload
/// read so far, and `target` is left as it was.
///
/// A response without a body decodes as an empty document, which fails.
///
/// Bytes are pulled from the body one at a time so that nothing past the
/// document is consumed; hand in a buffered [`Body`](crate::Body) when reads
/// on the underlying stream are costly.
///
/// The decorator borrows `target` for as long as the composed responder lives,
/// so build a fresh one for every response. The mutex only exists to write the
/// target from a shared (`Fn`) responder.
#[must_use]
pub fn decode_json<'a, T>(target: &'a mut T) -> Decorator<'a>
where
    T: DeserializeOwned + Send,
{
    let target = Mutex::new(target);
    Decorator::wrap(move |inner, mut response| {
        inner.respond(response.as_deref_mut())?;

        let decoded: T = match response.and_then(Response::body_mut) {
            Some(body) => from_json_reader(body)?,
            None => from_json_reader(io::empty())?,
        };
        **target.lock().unwrap_or_else(PoisonError::into_inner) = decoded;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::{Error, Responder, StatusCode, create_responder, respond};

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Sample {
        a: u32,
    }

    fn response_with(body: &'static str) -> Response {
        Response::builder(StatusCode::OK)
            .bytes(body)
            .build()
            .expect("response")
    }

    #[test]
    fn decode_json_fills_target() {
        let mut sample = Sample::default();
        let result = respond(Some(&mut response_with(r#"{"a":1}"#)), [decode_json(&mut sample)]);

        check!(result.is_ok());
        check!(sample == Sample { a: 1 });
    }

    #[test]
    fn decode_json_reports_payload() {
        let mut sample = Sample { a: 7 };
        let result = respond(Some(&mut response_with(r#"{"a":"#)), [decode_json(&mut sample)]);

        let_assert!(Err(err) = result);
        check!(err.is_json_decode());
        check!(err.to_string().contains(r#"{"a":"#));
        check!(sample == Sample { a: 7 });
    }

    #[test]
    fn decode_json_skipped_on_inner_error() {
        let mut sample = Sample::default();
        let reject = crate::Decorator::wrap(|_inner, _response| Err(Error::custom("rejected")));
        let result = respond(
            Some(&mut response_with("not json")),
            [reject, decode_json(&mut sample)],
        );

        let_assert!(Err(Error::Custom(message)) = result);
        check!(message == "rejected");
    }

    #[test]
    fn decode_json_without_response() {
        let mut sample = Sample { a: 3 };
        let result = create_responder([decode_json(&mut sample)]).respond(None);

        let_assert!(Err(err) = result);
        check!(err.is_json_decode());
        check!(err.payload() == Some(""));
        check!(sample == Sample { a: 3 });
    }

    #[test]
    fn decode_json_without_body() {
        let mut sample = Sample::default();
        let mut response = Response::builder(StatusCode::NO_CONTENT)
            .build()
            .expect("response");
        let result = respond(Some(&mut response), [decode_json(&mut sample)]);

        let_assert!(Err(err) = result);
        check!(err.payload() == Some(""));
    }
}
