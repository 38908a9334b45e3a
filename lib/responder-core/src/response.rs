//! HTTP response model consumed by responders.
//!
//! A [`Response`] is produced by a transport and handed to a responder chain.
//! Its body is a [`Body`]: a readable stream with a single owner responsible
//! for closing it.
//!
//! # Example
//!
//! ```
//! use responder_core::{Response, StatusCode};
//!
//! let response = Response::builder(StatusCode::OK)
//!     .header("Content-Type", "application/json")
//!     .bytes(r#"{"id":1}"#)
//!     .build()
//!     .expect("response");
//!
//! assert!(response.is_success());
//! assert_eq!(response.status_line(), "200 OK");
//! ```

use std::io::{self, Cursor, Read};

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use url::Url;

use crate::{Error, Result};

// ============================================================================
// Body
// ============================================================================

/// A response body stream that must be closed by its owner.
pub trait Body: Read + Send {
    /// Release the underlying stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream could not be released.
    fn close(&mut self) -> io::Result<()>;
}

/// In-memory [`Body`] backed by [`Bytes`].
#[derive(Debug, Clone, Default)]
pub struct BufferedBody {
    reader: Cursor<Bytes>,
    closed: bool,
}

impl BufferedBody {
    /// Creates a new buffered body.
    #[must_use]
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            reader: Cursor::new(bytes.into()),
            closed: false,
        }
    }

    /// Returns `true` once [`Body::close`] has been called.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Read for BufferedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.closed {
            return Err(io::Error::other("read on closed body"));
        }
        self.reader.read(buf)
    }
}

impl Body for BufferedBody {
    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}

// ============================================================================
// Request Line
// ============================================================================

/// Method and URL of the request a response answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: Method,
    url: Url,
}

impl RequestLine {
    /// Creates a new request line.
    #[must_use]
    pub const fn new(method: Method, url: Url) -> Self {
        Self { method, url }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Request URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl std::fmt::Display for RequestLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

// ============================================================================
// Response
// ============================================================================

/// An already-received HTTP response.
pub struct Response {
    status: StatusCode,
    status_line: String,
    headers: Option<HeaderMap>,
    body: Option<Box<dyn Body>>,
    request: Option<RequestLine>,
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("status_line", &self.status_line)
            .field("headers", &self.headers)
            .field("has_body", &self.body.is_some())
            .field("request", &self.request)
            .finish()
    }
}

impl Response {
    /// Creates a new [`ResponseBuilder`].
    #[must_use]
    pub fn builder(status: StatusCode) -> ResponseBuilder {
        ResponseBuilder::new(status)
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Status line, e.g. `404 Not Found`.
    #[must_use]
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Response headers, if the transport provided any.
    #[must_use]
    pub const fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    /// The request this response answers, if known.
    #[must_use]
    pub const fn request(&self) -> Option<&RequestLine> {
        self.request.as_ref()
    }

    /// Returns `true` if the response carries a body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Mutable access to the body stream.
    pub fn body_mut(&mut self) -> Option<&mut (dyn Body + 'static)> {
        self.body.as_deref_mut()
    }

    /// Take ownership of the body stream, leaving the response without one.
    pub fn take_body(&mut self) -> Option<Box<dyn Body>> {
        self.body.take()
    }

    /// Close the body stream if there is one.
    ///
    /// The body stays attached; closing twice is left to the [`Body`]
    /// implementation.
    ///
    /// # Errors
    ///
    /// Returns an error if the body failed to close.
    pub fn close_body(&mut self) -> io::Result<()> {
        match self.body.as_deref_mut() {
            Some(body) => body.close(),
            None => Ok(()),
        }
    }

    /// Status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Status is 4xx.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// Status is 5xx.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl From<http::Response<Bytes>> for Response {
    fn from(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        Self {
            status: parts.status,
            status_line: default_status_line(parts.status),
            headers: Some(parts.headers),
            body: Some(Box::new(BufferedBody::new(body))),
            request: None,
        }
    }
}

fn default_status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_str()),
        None => status.as_str().to_string(),
    }
}

// ============================================================================
// Response Builder
// ============================================================================

/// Builder for constructing [`Response`] instances.
///
/// Header errors are deferred until [`ResponseBuilder::build`].
pub struct ResponseBuilder {
    status: StatusCode,
    status_line: Option<String>,
    headers: Option<HeaderMap>,
    body: Option<Box<dyn Body>>,
    request: Option<RequestLine>,
    error: Option<Error>,
}

impl ResponseBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            status_line: None,
            headers: Some(HeaderMap::new()),
            body: None,
            request: None,
            error: None,
        }
    }

    /// Overrides the status line derived from the status code.
    #[must_use]
    pub fn status_line(mut self, status_line: impl Into<String>) -> Self {
        self.status_line = Some(status_line.into());
        self
    }

    /// Appends a header value.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers
                    .get_or_insert_with(HeaderMap::new)
                    .append(name, value);
            }
            (Err(err), _) => self.error = Some(Error::invalid_header(format!("{name}: {err}"))),
            (_, Err(err)) => self.error = Some(Error::invalid_header(format!("{name}: {err}"))),
        }
        self
    }

    /// Replaces all headers.
    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Builds a response without any header map.
    #[must_use]
    pub fn without_headers(mut self) -> Self {
        self.headers = None;
        self
    }

    /// Sets the body stream.
    #[must_use]
    pub fn body(mut self, body: impl Body + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    /// Sets an in-memory body.
    #[must_use]
    pub fn bytes(self, bytes: impl Into<Bytes>) -> Self {
        self.body(BufferedBody::new(bytes))
    }

    /// Records the request this response answers.
    #[must_use]
    pub fn request(mut self, method: Method, url: Url) -> Self {
        self.request = Some(RequestLine::new(method, url));
        self
    }

    /// Builds the response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeader`] if a header name or value was invalid.
    pub fn build(self) -> Result<Response> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(Response {
            status: self.status,
            status_line: self
                .status_line
                .unwrap_or_else(|| default_status_line(self.status)),
            headers: self.headers,
            body: self.body,
            request: self.request,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn response_basic() {
        let response = Response::builder(StatusCode::OK)
            .header("Content-Type", "application/json")
            .bytes(r#"{"id":1}"#)
            .build()
            .expect("response");

        check!(response.status() == StatusCode::OK);
        check!(response.status_line() == "200 OK");
        check!(response.has_body());
        check!(response.is_success());
        check!(!response.is_client_error());
        check!(!response.is_server_error());

        let_assert!(Some(headers) = response.headers());
        check!(headers.get("content-type").map(HeaderValue::as_bytes) == Some(&b"application/json"[..]));
    }

    #[test]
    fn response_status_line() {
        let response = Response::builder(StatusCode::NOT_FOUND).build().expect("response");
        check!(response.status_line() == "404 Not Found");
        check!(response.is_client_error());

        let response = Response::builder(StatusCode::INTERNAL_SERVER_ERROR)
            .status_line("500 Kaboom")
            .build()
            .expect("response");
        check!(response.status_line() == "500 Kaboom");
        check!(response.is_server_error());

        let status = StatusCode::from_u16(599).expect("status");
        let response = Response::builder(status).build().expect("response");
        check!(response.status_line() == "599");
    }

    #[test]
    fn response_without_headers() {
        let response = Response::builder(StatusCode::OK)
            .without_headers()
            .build()
            .expect("response");
        check!(response.headers().is_none());
        check!(!response.has_body());
    }

    #[test]
    fn response_invalid_header() {
        let result = Response::builder(StatusCode::OK)
            .header("bad header", "value")
            .build();
        let_assert!(Err(Error::InvalidHeader(message)) = result);
        check!(message.starts_with("bad header"));
    }

    #[test]
    fn response_repeated_header() {
        let response = Response::builder(StatusCode::OK)
            .header("X-Test", "v1")
            .header("x-test", "v2")
            .build()
            .expect("response");
        let_assert!(Some(headers) = response.headers());
        check!(headers.get_all("X-TEST").iter().count() == 2);
    }

    #[test]
    fn response_request_line() {
        let url = Url::parse("https://api.example.com/items").expect("url");
        let response = Response::builder(StatusCode::OK)
            .request(Method::POST, url)
            .build()
            .expect("response");
        let_assert!(Some(request) = response.request());
        check!(request.to_string() == "POST https://api.example.com/items");
        check!(*request.method() == Method::POST);
    }

    #[test]
    fn buffered_body_read_and_close() {
        let mut body = BufferedBody::new("hello");
        let mut text = String::new();
        body.read_to_string(&mut text).expect("read");
        check!(text == "hello");
        check!(!body.is_closed());

        body.close().expect("close");
        check!(body.is_closed());
        check!(body.read(&mut [0_u8; 4]).is_err());
    }

    #[test]
    fn response_close_body() {
        let mut response = Response::builder(StatusCode::OK)
            .bytes("payload")
            .build()
            .expect("response");
        response.close_body().expect("close");

        let_assert!(Some(body) = response.body_mut());
        check!(body.read(&mut [0_u8; 4]).is_err());

        let mut empty = Response::builder(StatusCode::NO_CONTENT)
            .build()
            .expect("response");
        check!(empty.close_body().is_ok());
    }

    #[test]
    fn response_take_body() {
        let mut response = Response::builder(StatusCode::OK)
            .bytes("payload")
            .build()
            .expect("response");
        let_assert!(Some(mut body) = response.take_body());
        check!(!response.has_body());

        let mut text = String::new();
        body.read_to_string(&mut text).expect("read");
        check!(text == "payload");
    }

    #[test]
    fn response_from_http() {
        let http_response = http::Response::builder()
            .status(StatusCode::CREATED)
            .header("Location", "/items/7")
            .body(Bytes::from_static(b"{}"))
            .expect("http response");

        let response = Response::from(http_response);
        check!(response.status() == StatusCode::CREATED);
        check!(response.status_line() == "201 Created");
        check!(response.has_body());
        check!(response.request().is_none());
        let_assert!(Some(headers) = response.headers());
        check!(headers.contains_key("location"));
    }
}
