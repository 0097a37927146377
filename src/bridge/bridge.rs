//! Top-level bridge object which owns the character queue and issues
//! input-surface commands.

use ::std::{char::REPLACEMENT_CHARACTER, sync::Arc};
use ::tracing::debug;

use crate::input::{CharQueue, DispatchHook, SurfaceController};

/// The central object which buffers platform text input for a poll-driven
/// application loop.
///
/// # Text Input
///
/// Platforms communicate text input by invoking callbacks on their own
/// dispatch thread. Most applications aren't prepared to handle those
/// callbacks immediately as they come in: a typical game loop has a
/// well-defined location in an update loop where input is looked at and
/// appropriate actions are taken for the next iteration. The bridge makes
/// that possible by owning a [`CharQueue`] of the unicode code points the
/// platform resolved, filled from the dispatch thread through a
/// [`DispatchHook`] and drained from the application loop through
/// [`poll_unicode_char`] or [`drain_input`].
///
/// # Input Surface
///
/// On-screen keyboards are raised and dismissed through the platform's
/// input-method service, which the bridge reaches through the
/// [`InputMethodService`] seam. [`show_soft_input`] and [`hide_soft_input`]
/// are fire-and-forget: no visibility state is tracked, repeated calls are
/// safe, and a missing or failing service is a silent no-op by design.
///
/// # Lifecycle
///
/// The bridge is constructed explicitly via [`Builder`] and owned by
/// whatever composition root drives the application. Dropping the bridge
/// and every hook handed out reclaims the queue; there is no global state.
///
/// # Example
///
/// ```
/// use ::keybridge::{bridge::Builder, input::KeyEvent};
///
/// let bridge = Builder::new().build();
///
/// // Handed to the platform adapter, which calls it for every key event.
/// let hook = bridge.dispatch_hook();
/// hook.dispatch(KeyEvent::down('h' as u32));
/// hook.dispatch(KeyEvent::down('i' as u32));
///
/// // In the application loop:
/// let typed: String = bridge.drain_input().collect();
/// assert_eq!(typed, "hi");
/// ```
///
/// [`poll_unicode_char`]: Self::poll_unicode_char
/// [`drain_input`]: Self::drain_input
/// [`show_soft_input`]: Self::show_soft_input
/// [`hide_soft_input`]: Self::hide_soft_input
/// [`CharQueue`]: crate::input::CharQueue
/// [`DispatchHook`]: crate::input::DispatchHook
/// [`InputMethodService`]: crate::input::InputMethodService
/// [`Builder`]: crate::bridge::Builder
pub struct InputBridge {
    /// The queue instance shared with every dispatch hook handed out.
    queue: Arc<CharQueue>,
    /// Pass-through for show/hide commands to the host's input-method
    /// service.
    surface: SurfaceController,
}

impl InputBridge {
    pub(super) fn new(queue: Arc<CharQueue>, surface: SurfaceController) -> Self {
        debug!("Creating input bridge");
        Self { queue, surface }
    }

    /// A producer-side hook for the platform's key-event dispatch path.
    ///
    /// Every hook returned here feeds this bridge's queue. Hooks are cheap
    /// to clone and safe to move to the platform's dispatch thread.
    pub fn dispatch_hook(&self) -> DispatchHook {
        DispatchHook::new(Arc::clone(&self.queue))
    }

    /// Removes and returns the oldest pending code point, or `0` when none
    /// is pending. Never blocks.
    ///
    /// Intended to be called once per application loop iteration, though
    /// any number of calls per iteration is fine - each call drains at most
    /// one character.
    ///
    /// `0` is deliberately ambiguous: it is returned both for "nothing
    /// pending" and for a genuinely queued NUL (a key-down whose key mapped
    /// to no character). Callers which must tell the two apart should read
    /// the queue through [`CharQueue::pop`] instead; this method preserves
    /// the classic polling contract unchanged.
    ///
    /// [`CharQueue::pop`]: crate::input::CharQueue::pop
    pub fn poll_unicode_char(&self) -> u32 {
        self.queue.pop().unwrap_or(0)
    }

    /// Drains pending input, yielding validated characters.
    ///
    /// Polls repeatedly until the queue reports empty, converting each code
    /// point to a [`char`] on the way out. Code points which are not valid
    /// unicode scalar values are replaced with U+FFFD rather than dropped.
    /// A queued NUL terminates the drain exactly as it terminates the raw
    /// polling loop it replaces - the sentinel ambiguity of
    /// [`poll_unicode_char`] applies here too.
    ///
    /// [`poll_unicode_char`]: Self::poll_unicode_char
    pub fn drain_input(&self) -> impl Iterator<Item = char> + '_ {
        ::std::iter::from_fn(|| match self.poll_unicode_char() {
            0 => None,
            raw => Some(char::from_u32(raw).unwrap_or(REPLACEMENT_CHARACTER)),
        })
    }

    /// The number of characters waiting to be polled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if at least one character is waiting to be polled.
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Asks the platform to present its on-screen text input surface.
    ///
    /// Fire-and-forget: if no input-method service is bound, or the service
    /// refuses the request, the call is a silent no-op. The queue is not
    /// touched.
    pub fn show_soft_input(&self) {
        debug!("Requesting input surface show");
        self.surface.show();
    }

    /// Asks the platform to dismiss its on-screen text input surface.
    ///
    /// Fire-and-forget, with the same no-op semantics as
    /// [`show_soft_input`].
    ///
    /// [`show_soft_input`]: Self::show_soft_input
    pub fn hide_soft_input(&self) {
        debug!("Requesting input surface hide");
        self.surface.hide();
    }
}

impl Drop for InputBridge {
    fn drop(&mut self) {
        debug!(pending = self.queue.len(), "Dropping input bridge");
    }
}
