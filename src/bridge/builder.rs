//! Builder object which constructs [`InputBridge`]s
//!
//! [`InputBridge`]: crate::bridge::InputBridge

use crate::{
    bridge::InputBridge,
    input::{CharQueue, InputMethodService, SurfaceController, DEFAULT_QUEUE_CAPACITY},
};

use ::std::sync::Arc;
use ::tap::Pipe;

/// A builder pattern object which simplifies the process of creating an
/// [`InputBridge`].
///
/// Construction cannot fail: a bridge built without an input-method service
/// is fully functional, with show/hide downgraded to no-ops.
///
/// ```
/// use ::keybridge::bridge::Builder;
///
/// let bridge = Builder::new()
///     .with_queue_capacity(64)
///     .build();
///
/// assert!(!bridge.has_pending());
/// ```
///
/// [`InputBridge`]: crate::bridge::InputBridge
pub struct Builder {
    input_method: Option<Box<dyn InputMethodService>>,
    queue_capacity: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Construct a new builder. Default values will be used for all
    /// properties until explicitly set.
    pub fn new() -> Self {
        Self {
            input_method: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Bind the host's input-method service, already attached by the host
    /// adapter to the current window.
    ///
    /// Defaults to none, in which case the bridge's show/hide commands are
    /// silent no-ops.
    pub fn with_input_method(self, service: impl InputMethodService + 'static) -> Self {
        Self {
            input_method: Some(Box::new(service)),
            ..self
        }
    }

    /// Set the initial allocation of the character queue.
    ///
    /// This is an allocation hint, not a bound - the queue grows past it
    /// freely and never drops input.
    ///
    /// Defaults to [`DEFAULT_QUEUE_CAPACITY`] if not set.
    ///
    /// [`DEFAULT_QUEUE_CAPACITY`]: crate::input::DEFAULT_QUEUE_CAPACITY
    pub fn with_queue_capacity(self, capacity: usize) -> Self {
        Self {
            queue_capacity: capacity,
            ..self
        }
    }

    /// Gets the currently set initial queue capacity.
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Returns `true` if an input-method service has been bound.
    pub fn has_input_method(&self) -> bool {
        self.input_method.is_some()
    }

    /// Build a new [`InputBridge`] with the properties of the builder.
    ///
    /// Consumes the builder, since the bound input-method service moves
    /// into the bridge.
    ///
    /// [`InputBridge`]: crate::bridge::InputBridge
    pub fn build(self) -> InputBridge {
        CharQueue::with_capacity(self.queue_capacity)
            .pipe(Arc::new)
            .pipe(|queue| InputBridge::new(queue, SurfaceController::new(self.input_method)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::errors::ServiceError;
    use ::pretty_assertions::assert_eq;

    struct NoopService;

    impl InputMethodService for NoopService {
        fn show(&self) -> ::std::result::Result<(), ServiceError> {
            Ok(())
        }

        fn hide(&self) -> ::std::result::Result<(), ServiceError> {
            Ok(())
        }
    }

    /// A fresh builder carries the documented defaults.
    #[test]
    fn test_defaults() {
        let builder = Builder::new();

        assert!(!builder.has_input_method());
        assert_eq!(builder.queue_capacity(), DEFAULT_QUEUE_CAPACITY);
    }

    /// Setters are reflected by the accessors.
    #[test]
    fn test_setters() {
        let builder = Builder::new()
            .with_queue_capacity(128)
            .with_input_method(NoopService);

        assert!(builder.has_input_method());
        assert_eq!(builder.queue_capacity(), 128);
    }

    /// A built bridge starts with an empty queue, service or not.
    #[test]
    fn test_built_bridge_starts_empty() {
        let bridge = Builder::new().with_input_method(NoopService).build();

        assert!(!bridge.has_pending());
        assert_eq!(bridge.poll_unicode_char(), 0);
    }
}
