//! Builder for decorator chains.
//!
//! [`Chain`] collects decorators in list order, with helper methods for the
//! standard decorators, and composes them with the same rules as
//! [`create_responder`]: the last decorator added is the outermost.

use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::decorators::{
    LogLevel, close_body, close_body_on_error, decode_json, log_response, require_ok,
    require_status,
};
use crate::{BoxResponder, Decorator, Response, Result, create_responder, respond};

/// Ordered list of decorators.
///
/// # Example
///
/// ```
/// use responder::{Chain, Response, StatusCode};
///
/// #[derive(Debug, Default, serde::Deserialize)]
/// struct Item {
///     name: String,
/// }
///
/// let mut response = Response::builder(StatusCode::CREATED)
///     .bytes(r#"{"name":"widget"}"#)
///     .build()
///     .expect("response");
///
/// let mut item = Item::default();
/// Chain::new()
///     .expect_status([StatusCode::OK, StatusCode::CREATED])
///     .decode_json(&mut item)
///     .closing()
///     .respond(Some(&mut response))
///     .expect("respond");
///
/// assert_eq!(item.name, "widget");
/// ```
#[derive(Debug, Default)]
pub struct Chain<'a> {
    decorators: Vec<Decorator<'a>>,
}

impl<'a> Chain<'a> {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decorator.
    #[must_use]
    pub fn with(mut self, decorator: Decorator<'a>) -> Self {
        self.decorators.push(decorator);
        self
    }

    /// Append [`close_body`].
    #[must_use]
    pub fn closing(self) -> Self {
        self.with(close_body())
    }

    /// Append [`close_body_on_error`].
    #[must_use]
    pub fn closing_on_error(self) -> Self {
        self.with(close_body_on_error())
    }

    /// Append [`log_response`].
    #[must_use]
    pub fn logging(self, level: LogLevel) -> Self {
        self.with(log_response(level))
    }

    /// Append [`require_status`].
    #[must_use]
    pub fn expect_status(self, codes: impl IntoIterator<Item = StatusCode>) -> Self {
        self.with(require_status(codes))
    }

    /// Append [`require_ok`].
    #[must_use]
    pub fn expect_ok(self) -> Self {
        self.with(require_ok())
    }

    /// Append [`decode_json`].
    #[must_use]
    pub fn decode_json<T>(self, target: &'a mut T) -> Self
    where
        T: DeserializeOwned + Send,
    {
        self.with(decode_json(target))
    }

    /// Number of decorators in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    /// Returns `true` if no decorator was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Compose the chain into a single responder.
    #[must_use]
    pub fn build(self) -> BoxResponder<'a> {
        create_responder(self.decorators)
    }

    /// Compose the chain and invoke it once on `response`.
    ///
    /// An absent response short-circuits to success.
    ///
    /// # Errors
    ///
    /// Returns the error produced by the composed chain.
    pub fn respond(self, response: Option<&mut Response>) -> Result<()> {
        respond(response, self.decorators)
    }
}

impl<'a> Extend<Decorator<'a>> for Chain<'a> {
    fn extend<I: IntoIterator<Item = Decorator<'a>>>(&mut self, iter: I) {
        self.decorators.extend(iter);
    }
}

impl<'a> FromIterator<Decorator<'a>> for Chain<'a> {
    fn from_iter<I: IntoIterator<Item = Decorator<'a>>>(iter: I) -> Self {
        Self {
            decorators: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for Chain<'a> {
    type Item = Decorator<'a>;
    type IntoIter = std::vec::IntoIter<Decorator<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.decorators.into_iter()
    }
}
