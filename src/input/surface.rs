//! Control of the platform's on-screen text input surface.

use ::tracing::debug;

use crate::errors::{Context, ServiceError};

/// The seam to the host platform's input-method service.
///
/// Implemented by the host adapter and bound, by the adapter, to whatever
/// the platform considers "the current window". The bridge itself holds no
/// window handle and performs no service lookup; both are host
/// responsibilities.
///
/// Both commands may be invoked repeatedly and in any order. The adapter
/// should simply forward each request to the platform and report failures
/// through [`ServiceError`]; the bridge decides what to do with them
/// (currently: log and move on).
///
/// # Example
///
/// ```
/// use ::keybridge::{errors::ServiceError, input::InputMethodService};
///
/// /// Adapter for a host whose input surface cannot be controlled.
/// struct Headless;
///
/// impl InputMethodService for Headless {
///     fn show(&self) -> Result<(), ServiceError> {
///         Err(ServiceError::Unavailable)
///     }
///
///     fn hide(&self) -> Result<(), ServiceError> {
///         Err(ServiceError::Unavailable)
///     }
/// }
/// ```
pub trait InputMethodService: Send {
    /// Ask the platform to present its on-screen text input surface for the
    /// current window.
    fn show(&self) -> ::std::result::Result<(), ServiceError>;

    /// Ask the platform to dismiss its on-screen text input surface.
    fn hide(&self) -> ::std::result::Result<(), ServiceError>;
}

/// Stateless pass-through of show/hide commands to an optional service.
///
/// No visibility flag is tracked: every command issues one request and
/// forgets it, relying on the platform's own idempotency. A missing or
/// failing service downgrades the command to a logged no-op.
pub(crate) struct SurfaceController {
    service: Option<Box<dyn InputMethodService>>,
}

impl SurfaceController {
    pub(crate) fn new(service: Option<Box<dyn InputMethodService>>) -> Self {
        Self { service }
    }

    /// Requests that the input surface be shown.
    pub(crate) fn show(&self) {
        let Some(service) = &self.service else {
            debug!("No input-method service bound, ignoring show request");
            return;
        };

        if let Err(e) = service
            .show()
            .context("Failed to show the input surface")
            .operation("show")
        {
            debug!(error = %e, "Input-method service dropped the request");
        }
    }

    /// Requests that the input surface be dismissed.
    pub(crate) fn hide(&self) {
        let Some(service) = &self.service else {
            debug!("No input-method service bound, ignoring hide request");
            return;
        };

        if let Err(e) = service
            .hide()
            .context("Failed to hide the input surface")
            .operation("hide")
        {
            debug!(error = %e, "Input-method service dropped the request");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    /// Records how often each command reached the service, optionally
    /// failing every request.
    struct RecordingService {
        shows: Arc<AtomicUsize>,
        hides: Arc<AtomicUsize>,
        fail: bool,
    }

    impl InputMethodService for RecordingService {
        fn show(&self) -> ::std::result::Result<(), ServiceError> {
            self.shows.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ServiceError::Unavailable)
            } else {
                Ok(())
            }
        }

        fn hide(&self) -> ::std::result::Result<(), ServiceError> {
            self.hides.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ServiceError::WindowDetached)
            } else {
                Ok(())
            }
        }
    }

    /// Each command issues exactly one request to the bound service, with
    /// no state tracked in between: repeated and alternating calls all pass
    /// straight through.
    #[test]
    fn test_commands_pass_through() {
        let shows = Arc::new(AtomicUsize::new(0));
        let hides = Arc::new(AtomicUsize::new(0));
        let controller = SurfaceController::new(Some(Box::new(RecordingService {
            shows: Arc::clone(&shows),
            hides: Arc::clone(&hides),
            fail: false,
        })));

        controller.show();
        controller.show();
        controller.hide();
        controller.show();
        controller.hide();

        assert_eq!(shows.load(Ordering::SeqCst), 3);
        assert_eq!(hides.load(Ordering::SeqCst), 2);
    }

    /// An absent service downgrades both commands to no-ops.
    #[test]
    fn test_missing_service_is_noop() {
        let controller = SurfaceController::new(None);

        controller.show();
        controller.hide();
    }

    /// A failing service is swallowed; the command surface never observes
    /// the error and keeps issuing subsequent requests.
    #[test]
    fn test_failing_service_is_swallowed() {
        let shows = Arc::new(AtomicUsize::new(0));
        let hides = Arc::new(AtomicUsize::new(0));
        let controller = SurfaceController::new(Some(Box::new(RecordingService {
            shows: Arc::clone(&shows),
            hides: Arc::clone(&hides),
            fail: true,
        })));

        controller.show();
        controller.hide();
        controller.show();

        assert_eq!(shows.load(Ordering::SeqCst), 2);
        assert_eq!(hides.load(Ordering::SeqCst), 1);
    }
}
