//! Crate-specific error and result types, plus common conversions.

use ::std::fmt::{self, Display};
use ::thiserror::Error as ThisError;

/// Result type returned by operations that reach into the host platform's
/// input-method service.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Error type for calls into the host platform's input-method service. The
/// error attempts to pro-actively capture as much context as possible (the
/// operation that was requested, what was happening at the time).
///
/// These errors never cross the public command surface: the bridge's
/// show/hide commands are fire-and-forget and downgrade any failure to a
/// logged no-op. The type exists so host adapters and the bridge internals
/// share one vocabulary for what went wrong.
#[derive(Clone, Debug)]
pub struct Error {
    /// The underlying service error. Implements [`Display`] to conveniently
    /// print the failure reported by the host adapter.
    ///
    /// [`Display`]: std::fmt::Display
    underlying_error: ServiceError,

    /// The name of the input-method operation which failed.
    operation: Option<&'static str>,

    /// An optional context information which describes what was happening
    /// at the time of the error.
    context: Option<String>,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            underlying_error,
            operation,
            context,
        } = &self;

        if let Some(context) = context {
            write!(f, "{context}\nCaused by:\n    {underlying_error}")?;
        } else {
            write!(f, "{underlying_error}")?;
        }

        if let Some(operation) = operation {
            write!(f, " ({operation})")?;
        }

        Ok(())
    }
}

impl ::std::error::Error for Error {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        Some(&self.underlying_error)
    }
}

impl Error {
    /// Returns the underlying error reported by the host's service adapter.
    pub fn service_error(&self) -> &ServiceError {
        &self.underlying_error
    }
}

/// Failures a host input-method service adapter can report.
///
/// A host adapter returns these from [`InputMethodService`] calls. The
/// bridge consumes them internally and logs them; an unavailable or failing
/// service is by design not observable through the command API.
///
/// [`InputMethodService`]: crate::input::InputMethodService
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ServiceError {
    /// No input-method service is reachable from the current window.
    #[error("input-method service is unavailable")]
    Unavailable,

    /// The window the service was bound to is no longer attached to the
    /// host display.
    #[error("window is detached from the host display")]
    WindowDetached,

    /// The service was reached but refused the request.
    #[error("input-method service rejected the request: {0}")]
    Rejected(String),
}

/// A crate-private trait which allows context information to be attached to
/// fallible types.
///
/// This is useful to attach high level context information and track which
/// particular input-method operation failed, something that might not be
/// obvious when relying on the inner service error alone.
pub(crate) trait Context<T> {
    /// Attach the name of the operation which failed to the error as
    /// additional context.
    fn operation(self, operation: &'static str) -> Result<T>
    where
        Self: Sized;

    /// Attach a context message to a fallible type and return crate error.
    fn context(self, ctx: impl AsRef<str>) -> Result<T>
    where
        Self: Sized;
}

impl<T> Context<T> for Result<T> {
    fn operation(mut self, op: &'static str) -> Result<T>
    where
        Self: Sized,
    {
        if let Err(err) = &mut self {
            err.operation = Some(op);
        }
        self
    }

    fn context(mut self, ctx: impl AsRef<str>) -> Result<T>
    where
        Self: Sized,
    {
        if let Err(err) = &mut self {
            err.context = Some(ctx.as_ref().to_owned());
        }
        self
    }
}

impl<T> Context<T> for ::std::result::Result<T, ServiceError> {
    fn operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| Error {
            underlying_error: source,
            context: None,
            operation: Some(operation),
        })
    }

    fn context(self, ctx: impl AsRef<str>) -> Result<T> {
        self.map_err(|source| Error {
            underlying_error: source,
            context: Some(ctx.as_ref().to_owned()),
            operation: None,
        })
    }
}
