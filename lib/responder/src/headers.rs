//! Read-only header accessors.
//!
//! Header names are matched case-insensitively. Missing responses, missing
//! header maps and absent headers all read as "no value".

use crate::Response;

/// All values of header `name`, in received order.
///
/// Returns an empty vector if `response` is absent, has no header map, or
/// lacks the header. Values that are not valid UTF-8 are converted lossily.
///
/// # Example
///
/// ```
/// use responder::{Response, StatusCode, header_values};
///
/// let response = Response::builder(StatusCode::OK)
///     .header("X-Test", "v1")
///     .header("X-Test", "v2")
///     .build()
///     .expect("response");
///
/// assert_eq!(header_values("x-test", Some(&response)), ["v1", "v2"]);
/// ```
#[must_use]
pub fn header_values(name: &str, response: Option<&Response>) -> Vec<String> {
    response
        .and_then(Response::headers)
        .map(|headers| {
            headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect()
        })
        .unwrap_or_default()
}

/// First value of header `name`, or an empty string if there is none.
#[must_use]
pub fn header_value(name: &str, response: Option<&Response>) -> String {
    header_values(name, response)
        .into_iter()
        .next()
        .unwrap_or_default()
}
