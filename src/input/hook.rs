//! Producer-side hook which taps platform key events into the character
//! queue.

use ::std::sync::Arc;
use ::tracing::trace;

use super::{CharQueue, KeyAction, KeyEvent};

/// The hook a platform adapter installs on its key-event dispatch path.
///
/// Obtained from [`InputBridge::dispatch_hook`] and handed to whichever
/// callback the host platform invokes for key events. The hook is cheap to
/// clone and safe to move to the platform's dispatch thread; every clone
/// feeds the same queue.
///
/// The hook observes events, it never consumes them: after dispatching, the
/// caller must still deliver the original event to the platform's default
/// dispatch chain.
///
/// # Example
///
/// ```
/// use ::keybridge::{bridge::Builder, input::KeyEvent};
///
/// let bridge = Builder::new().build();
/// let hook = bridge.dispatch_hook();
///
/// // Inside the platform's key callback:
/// let consumed = hook.dispatch(KeyEvent::down('q' as u32));
/// assert!(!consumed); // always forward to the default dispatch chain
///
/// assert_eq!(bridge.poll_unicode_char(), 'q' as u32);
/// ```
///
/// [`InputBridge::dispatch_hook`]: crate::bridge::InputBridge::dispatch_hook
#[derive(Clone)]
pub struct DispatchHook {
    /// The bridge-owned queue this hook feeds.
    queue: Arc<CharQueue>,
}

impl DispatchHook {
    pub(crate) fn new(queue: Arc<CharQueue>) -> Self {
        Self { queue }
    }

    /// Handles one platform key notification.
    ///
    /// On a key-down, the resolved code point is queued unconditionally,
    /// including `0` for keys with no printable mapping. Every other action
    /// leaves the queue untouched. Exactly one queue mutation happens per
    /// key-down, synchronously on the calling thread.
    ///
    /// ## Return Value
    ///
    /// Always `false`: the hook taps the event on its way through and never
    /// consumes it. The caller must still deliver the event to the
    /// platform's default dispatch continuation, whether or not it was
    /// queued.
    pub fn dispatch(&self, event: KeyEvent) -> bool {
        if event.action == KeyAction::Down {
            self.queue.push(event.code_point);
        } else {
            trace!(?event, "Ignoring non-down key event");
        }

        false
    }
}
