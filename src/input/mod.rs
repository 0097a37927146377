//! Interception and buffering of platform key events.

mod event;
mod hook;
mod queue;
mod surface;

pub use event::*;
pub use hook::*;
pub use queue::*;
pub use surface::InputMethodService;
pub(crate) use surface::SurfaceController;
