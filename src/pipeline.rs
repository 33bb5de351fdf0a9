//! Filter-then-validate transform chain for free-text answers.
//!
//! Filters and validators may complete immediately or hand back a future;
//! both conventions collapse into [`Transform`], which the pipeline awaits
//! uniformly. Rejection is control flow: the pipeline never fails upward,
//! it only reports accept or reject and keeps a rejection counter.

use std::future::Future;
use std::pin::Pin;

use tracing::debug;

/// Result of a filter or validator call: ready now, or ready later.
pub enum Transform<T> {
    Immediate(T),
    Deferred(Pin<Box<dyn Future<Output = T> + Send>>),
}

impl<T> Transform<T> {
    /// Box a future into the deferred convention.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }

    /// Await the value regardless of which convention produced it.
    pub async fn resolve(self) -> T {
        match self {
            Self::Immediate(value) => value,
            Self::Deferred(future) => future.await,
        }
    }
}

impl<T> std::fmt::Debug for Transform<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Immediate(_) => f.write_str("Transform::Immediate"),
            Self::Deferred(_) => f.write_str("Transform::Deferred"),
        }
    }
}

/// Validator decision: accept the value or reject with an optional message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(Option<String>),
}

impl Verdict {
    /// Rejection carrying a message shown on re-prompt.
    pub fn reject(message: impl Into<String>) -> Self {
        Self::Reject(Some(message.into()))
    }
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok {
            Self::Accept
        } else {
            Self::Reject(None)
        }
    }
}

/// Value filter following the immediate-or-deferred calling convention.
pub type FilterFn = Box<dyn FnMut(String) -> Transform<String> + Send>;

/// Value validator following the immediate-or-deferred calling convention.
pub type ValidateFn = Box<dyn FnMut(&str) -> Transform<Verdict> + Send>;

/// Outcome of one filter/validate cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The (possibly filtered) value the run resolves with.
    Accepted(String),
    /// Re-prompt; the run does not resolve.
    Rejected {
        message: Option<String>,
        /// Total rejections seen by this pipeline instance.
        rejections: u32,
    },
}

/// Shared async transform chain for one prompt.
///
/// At most one cycle may be in flight; the event source must not submit
/// again while a cycle is pending. The pipeline holds no per-value state
/// beyond the rejection counter, so identical raw values can be resubmitted
/// and are processed identically.
#[derive(Default)]
pub struct Pipeline {
    filter: Option<FilterFn>,
    validate: Option<ValidateFn>,
    rejections: u32,
}

impl Pipeline {
    pub fn new(filter: Option<FilterFn>, validate: Option<ValidateFn>) -> Self {
        Self {
            filter,
            validate,
            rejections: 0,
        }
    }

    /// Run one filter/validate cycle over a raw submission.
    pub async fn process(&mut self, raw: &str) -> Outcome {
        let filtered = match self.filter.as_mut() {
            Some(filter) => filter(raw.to_string()).resolve().await,
            None => raw.to_string(),
        };

        let verdict = match self.validate.as_mut() {
            Some(validate) => validate(&filtered).resolve().await,
            None => Verdict::Accept,
        };

        match verdict {
            Verdict::Accept => {
                debug!(rejections = self.rejections, "pipeline accepted value");
                Outcome::Accepted(filtered)
            }
            Verdict::Reject(message) => {
                self.rejections += 1;
                debug!(rejections = self.rejections, "pipeline rejected value");
                Outcome::Rejected {
                    message,
                    rejections: self.rejections,
                }
            }
        }
    }

    /// Total rejections recorded by this instance.
    pub fn rejections(&self) -> u32 {
        self.rejections
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("filter", &self.filter.is_some())
            .field("validate", &self.validate.is_some())
            .field("rejections", &self.rejections)
            .finish()
    }
}
