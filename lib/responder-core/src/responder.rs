//! Responder trait and decorator composition.
//!
//! A [`Responder`] reacts to a [`Response`] and reports success or an
//! [`Error`](crate::Error). A [`Decorator`] turns one responder into another,
//! running its own logic before delegating (pre-action), after delegating
//! (post-action), or both.
//!
//! # Ordering
//!
//! Decorators are applied in the order received: each one wraps the responder
//! built so far, so the last decorator of the list is the outermost wrapper.
//! At invocation time, pre-actions therefore run last-to-first and
//! post-actions run first-to-last.
//!
//! ```
//! use responder_core::{Decorator, Response, StatusCode, respond};
//!
//! let mut response = Response::builder(StatusCode::OK).build().expect("response");
//!
//! // Post-action only: runs after the rest of the chain has answered.
//! let audit = Decorator::wrap(|inner, mut response| {
//!     let result = inner.respond(response.as_deref_mut());
//!     assert!(response.is_some());
//!     result
//! });
//!
//! respond(Some(&mut response), [audit]).expect("respond");
//! ```

use crate::{Response, Result};

/// Reacts to a received HTTP response.
///
/// Implementations must not hold per-response state: responders may be shared
/// and invoked for unrelated responses, possibly from several threads.
pub trait Responder: Send + Sync {
    /// React to the response, which may be absent.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by this responder or the ones it
    /// delegates to.
    fn respond(&self, response: Option<&mut Response>) -> Result<()>;
}

/// A boxed responder, as produced by decorator composition.
pub type BoxResponder<'a> = Box<dyn Responder + 'a>;

impl<R: Responder + ?Sized> Responder for Box<R> {
    fn respond(&self, response: Option<&mut Response>) -> Result<()> {
        (**self).respond(response)
    }
}

impl<R: Responder + ?Sized> Responder for &R {
    fn respond(&self, response: Option<&mut Response>) -> Result<()> {
        (**self).respond(response)
    }
}

/// Responder that accepts every response unexamined.
///
/// This is the base every composed chain starts from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

impl Responder for Noop {
    fn respond(&self, _response: Option<&mut Response>) -> Result<()> {
        Ok(())
    }
}

/// Adapter turning a function into a [`Responder`].
///
/// Created with [`responder_fn`].
#[derive(Clone, Copy)]
pub struct ResponderFn<F>(F);

impl<F> std::fmt::Debug for ResponderFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponderFn").finish_non_exhaustive()
    }
}

impl<F> Responder for ResponderFn<F>
where
    F: Fn(Option<&mut Response>) -> Result<()> + Send + Sync,
{
    fn respond(&self, response: Option<&mut Response>) -> Result<()> {
        (self.0)(response)
    }
}

/// Wrap a function into a [`Responder`].
///
/// # Example
///
/// ```
/// use responder_core::{Error, Responder, responder_fn};
///
/// let reject = responder_fn(|_response| Err(Error::custom("rejected")));
/// assert!(reject.respond(None).is_err());
/// ```
pub const fn responder_fn<F>(f: F) -> ResponderFn<F>
where
    F: Fn(Option<&mut Response>) -> Result<()> + Send + Sync,
{
    ResponderFn(f)
}

// ============================================================================
// Decorator
// ============================================================================

type DecorateFn<'a> = dyn FnOnce(BoxResponder<'a>) -> BoxResponder<'a> + Send + 'a;

/// Transformation from one responder into another.
///
/// A decorator is consumed when applied: composing a chain yields one
/// responder, which can then be invoked any number of times.
pub struct Decorator<'a> {
    decorate: Box<DecorateFn<'a>>,
}

impl std::fmt::Debug for Decorator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decorator").finish_non_exhaustive()
    }
}

impl<'a> Decorator<'a> {
    /// Create a decorator from an arbitrary responder transformation.
    pub fn new<F>(decorate: F) -> Self
    where
        F: FnOnce(BoxResponder<'a>) -> BoxResponder<'a> + Send + 'a,
    {
        Self {
            decorate: Box::new(decorate),
        }
    }

    /// Create a decorator whose responder calls `f` with the wrapped (inner)
    /// responder and the response.
    ///
    /// `f` decides whether and when to delegate to the inner responder.
    pub fn wrap<F>(f: F) -> Self
    where
        F: Fn(&dyn Responder, Option<&mut Response>) -> Result<()> + Send + Sync + 'a,
    {
        Self::new(move |inner| Box::new(Wrapped { inner, f }))
    }

    /// Apply this decorator to `inner`.
    #[must_use]
    pub fn apply(self, inner: BoxResponder<'a>) -> BoxResponder<'a> {
        (self.decorate)(inner)
    }
}

struct Wrapped<'a, F> {
    inner: BoxResponder<'a>,
    f: F,
}

impl<F> Responder for Wrapped<'_, F>
where
    F: Fn(&dyn Responder, Option<&mut Response>) -> Result<()> + Send + Sync,
{
    fn respond(&self, response: Option<&mut Response>) -> Result<()> {
        (self.f)(&*self.inner, response)
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Apply `decorators` to `base`, in the order received.
///
/// Each decorator wraps the responder accumulated so far, so the last one is
/// the outermost. Nothing runs until the returned responder is invoked.
pub fn decorate<'a, I>(base: BoxResponder<'a>, decorators: I) -> BoxResponder<'a>
where
    I: IntoIterator<Item = Decorator<'a>>,
{
    decorators
        .into_iter()
        .fold(base, |responder, decorator| decorator.apply(responder))
}

/// Compose `decorators` over a [`Noop`] base.
///
/// Without decorators the result accepts every response. Whether the result
/// may be shared depends on the decorators: closing a body is fine to repeat,
/// decoding into a caller-supplied target is not.
///
/// At least one decorator should close the response body.
pub fn create_responder<'a, I>(decorators: I) -> BoxResponder<'a>
where
    I: IntoIterator<Item = Decorator<'a>>,
{
    decorate(Box::new(Noop), decorators)
}

/// Compose `decorators` and invoke the result once on `response`.
///
/// An absent response short-circuits to success without running any
/// decorator.
///
/// # Errors
///
/// Returns the error produced by the composed chain.
pub fn respond<'a, I>(response: Option<&mut Response>, decorators: I) -> Result<()>
where
    I: IntoIterator<Item = Decorator<'a>>,
{
    let Some(response) = response else {
        return Ok(());
    };
    create_responder(decorators).respond(Some(response))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use assert2::{check, let_assert};
    use http::StatusCode;

    use super::*;
    use crate::Error;

    type Trace = Arc<Mutex<Vec<String>>>;

    /// Decorator recording its pre- and post-actions under `name`.
    fn traced(name: &'static str, trace: &Trace) -> Decorator<'static> {
        let trace = Arc::clone(trace);
        Decorator::wrap(move |inner, response| {
            trace.lock().expect("lock").push(format!("{name}:pre"));
            let result = inner.respond(response);
            trace.lock().expect("lock").push(format!("{name}:post"));
            result
        })
    }

    fn failing(message: &'static str) -> Decorator<'static> {
        Decorator::wrap(move |inner, response| {
            inner.respond(response)?;
            Err(Error::custom(message))
        })
    }

    fn ok_response() -> Response {
        Response::builder(StatusCode::OK).build().expect("response")
    }

    #[test]
    fn noop_accepts_everything() {
        check!(Noop.respond(None).is_ok());
        check!(Noop.respond(Some(&mut ok_response())).is_ok());
    }

    #[test]
    fn responder_fn_sees_response() {
        let responder = responder_fn(|response| match response {
            Some(response) if response.is_success() => Ok(()),
            _ => Err(Error::custom("no success")),
        });

        check!(responder.respond(Some(&mut ok_response())).is_ok());
        check!(responder.respond(None).is_err());
    }

    #[test]
    fn last_decorator_is_outermost() {
        let trace = Trace::default();
        let chain = [traced("a", &trace), traced("b", &trace), traced("c", &trace)];

        respond(Some(&mut ok_response()), chain).expect("respond");

        let recorded = trace.lock().expect("lock").clone();
        check!(
            recorded
                == [
                    "c:pre", "b:pre", "a:pre", "a:post", "b:post", "c:post"
                ]
        );
    }

    #[test]
    fn decorate_applies_to_given_base() {
        let trace = Trace::default();
        let base_trace = Arc::clone(&trace);
        let base: BoxResponder<'_> = Box::new(responder_fn(move |_| {
            base_trace.lock().expect("lock").push("base".to_string());
            Ok(())
        }));

        let responder = decorate(base, [traced("a", &trace)]);
        responder.respond(None).expect("respond");

        let recorded = trace.lock().expect("lock").clone();
        check!(recorded == ["a:pre", "base", "a:post"]);
    }

    #[test]
    fn composition_has_no_side_effects() {
        let trace = Trace::default();
        let responder = create_responder([traced("a", &trace), traced("b", &trace)]);
        check!(trace.lock().expect("lock").is_empty());

        responder.respond(None).expect("respond");
        check!(trace.lock().expect("lock").len() == 4);
    }

    #[test]
    fn missing_response_short_circuits() {
        let trace = Trace::default();
        let result = respond(None, [traced("a", &trace), failing("never")]);

        check!(result.is_ok());
        check!(trace.lock().expect("lock").is_empty());
    }

    #[test]
    fn empty_chain_succeeds() {
        check!(respond(Some(&mut ok_response()), []).is_ok());
        check!(create_responder([]).respond(None).is_ok());
    }

    #[test]
    fn inner_error_propagates_through_post_actions() {
        let trace = Trace::default();
        let result = respond(
            Some(&mut ok_response()),
            [failing("inner"), traced("outer", &trace)],
        );

        let_assert!(Err(Error::Custom(message)) = result);
        check!(message == "inner");
        let recorded = trace.lock().expect("lock").clone();
        check!(recorded == ["outer:pre", "outer:post"]);
    }

    #[test]
    fn pre_action_can_skip_inner() {
        let trace = Trace::default();
        let stop = Decorator::wrap(|_inner, _response| Err(Error::custom("stopped")));
        let result = respond(Some(&mut ok_response()), [traced("a", &trace), stop]);

        check!(result.is_err());
        check!(trace.lock().expect("lock").is_empty());
    }

    #[test]
    fn composed_responder_is_reusable() {
        let trace = Trace::default();
        let responder = create_responder([traced("a", &trace)]);

        responder.respond(Some(&mut ok_response())).expect("first");
        responder.respond(Some(&mut ok_response())).expect("second");

        check!(trace.lock().expect("lock").len() == 4);
    }

    #[test]
    fn composed_responder_is_shareable_across_threads() {
        let trace = Trace::default();
        let responder: Arc<BoxResponder<'static>> =
            Arc::new(create_responder([traced("shared", &trace)]));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let responder = Arc::clone(&responder);
                std::thread::spawn(move || responder.respond(Some(&mut ok_response())).is_ok())
            })
            .collect();

        for handle in handles {
            check!(handle.join().expect("join"));
        }
        check!(trace.lock().expect("lock").len() == 8);
    }

    #[test]
    fn decorator_new_replaces_responder() {
        let replace = Decorator::new(|_inner| {
            Box::new(responder_fn(|_| Err(Error::custom("replaced"))))
        });
        let result = respond(Some(&mut ok_response()), [replace]);
        let_assert!(Err(Error::Custom(message)) = result);
        check!(message == "replaced");
    }
}
