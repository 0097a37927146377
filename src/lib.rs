//! Lightweight bridging of asynchronous platform text input into a
//! synchronous, poll-driven application loop.
//!
//! Platforms deliver text input by invoking callbacks on their own UI
//! thread, usually in the middle of a dispatch chain the application does
//! not control. Game-style applications would rather ask for input at a
//! well-defined point in their own update loop. This crate buffers the
//! unicode characters which the platform's key mapping resolved on the
//! dispatch thread, and hands them to the application loop one poll at a
//! time. It also carries the two fire-and-forget commands such applications
//! need to raise and dismiss the platform's on-screen input surface.
//!
//! The [`bridge::InputBridge`] owns the character queue and is constructed
//! explicitly via [`bridge::Builder`]. The platform adapter installs an
//! [`input::DispatchHook`] on its key-event path; the application loop
//! polls the bridge. Key-to-character mapping, window lifecycle, and the
//! input-method service itself remain host responsibilities, reached only
//! through the [`input::InputMethodService`] seam.
//!
//! # Example
//!
//! ```
//! use ::keybridge::{bridge::Builder, input::KeyEvent};
//! use ::std::thread;
//!
//! let bridge = Builder::new().build();
//! let hook = bridge.dispatch_hook();
//!
//! // Platform input thread: tap each key event into the bridge. The hook
//! // never consumes the event, so the platform's own dispatch continues.
//! let platform = thread::spawn(move || {
//!     for ch in "hi".chars() {
//!         let consumed = hook.dispatch(KeyEvent::down(ch as u32));
//!         assert!(!consumed);
//!     }
//! });
//! platform.join().unwrap();
//!
//! // Application loop thread: drain at most one character per iteration.
//! assert_eq!(bridge.poll_unicode_char(), 'h' as u32);
//! assert_eq!(bridge.poll_unicode_char(), 'i' as u32);
//! assert_eq!(bridge.poll_unicode_char(), 0);
//! ```

pub mod bridge;
pub mod errors;
pub mod input;
