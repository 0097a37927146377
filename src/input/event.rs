//! Strongly-typed model of the key notifications a platform adapter feeds
//! into the bridge.

use ::strum::EnumIter;

/// The action half of a platform key notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum KeyAction {
    /// A key transitioned to pressed. Platforms deliver auto-repeat of a
    /// held key as further down notifications.
    Down,
    /// A key was released.
    Up,
}

/// A single platform key notification, as handed to
/// [`DispatchHook::dispatch`].
///
/// The code point must already be resolved by the platform's
/// key-to-character mapping for the keyboard's current modifier state
/// (shift/alt/ctrl combinations applied). The bridge performs no mapping of
/// its own.
///
/// [`DispatchHook::dispatch`]: crate::input::DispatchHook::dispatch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Whether the key went down or came back up.
    pub action: KeyAction,
    /// The unicode code point resolved for the event, or `0` if the key
    /// maps to no character under the current modifier state.
    pub code_point: u32,
}

impl KeyEvent {
    /// A key-down notification carrying the given resolved code point.
    pub const fn down(code_point: u32) -> Self {
        Self {
            action: KeyAction::Down,
            code_point,
        }
    }

    /// A key-up notification carrying the given resolved code point.
    pub const fn up(code_point: u32) -> Self {
        Self {
            action: KeyAction::Up,
            code_point,
        }
    }
}
