//! Open hints: where and how a triggered navigation should open.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Mouse button that triggered a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Modifier keys held during a navigation click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardModifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyboardModifiers {
    pub const NONE: KeyboardModifiers = KeyboardModifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };
}

/// A combination of open-hint flags.
///
/// `DEFAULT` (no bits set) means "open in the current tab, as usual".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenHints(u8);

impl OpenHints {
    pub const DEFAULT: OpenHints = OpenHints(0);
    pub const PRIVATE: OpenHints = OpenHints(1);
    pub const CURRENT_TAB: OpenHints = OpenHints(2);
    pub const NEW_TAB: OpenHints = OpenHints(4);
    pub const NEW_WINDOW: OpenHints = OpenHints(8);
    pub const BACKGROUND: OpenHints = OpenHints(16);
    pub const END: OpenHints = OpenHints(32);

    /// Returns true if every flag in `other` is set in `self`.
    pub fn contains(self, other: OpenHints) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_default(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for OpenHints {
    type Output = OpenHints;

    fn bitor(self, rhs: OpenHints) -> OpenHints {
        OpenHints(self.0 | rhs.0)
    }
}

impl BitOrAssign for OpenHints {
    fn bitor_assign(&mut self, rhs: OpenHints) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OpenHints {
    type Output = OpenHints;

    fn bitand(self, rhs: OpenHints) -> OpenHints {
        OpenHints(self.0 & rhs.0)
    }
}

/// Maps a mouse button and held modifiers to the hints a navigation should
/// use. Deterministic table lookup with no side effects:
///
/// - middle button + Alt opens a background tab appended at the end
/// - middle button or Ctrl opens a new tab; adding Shift keeps it in the
///   background
/// - Shift alone opens a new window
/// - anything else passes the incoming hints through unchanged
///
/// The `PRIVATE` bit of the incoming hints is always preserved.
pub fn calculate_open_hints(
    hints: OpenHints,
    button: MouseButton,
    modifiers: KeyboardModifiers,
) -> OpenHints {
    let private = hints & OpenHints::PRIVATE;

    if button == MouseButton::Middle && modifiers.alt {
        return OpenHints::NEW_TAB | OpenHints::BACKGROUND | OpenHints::END | private;
    }

    if button == MouseButton::Middle || modifiers.ctrl {
        let mut result = OpenHints::NEW_TAB | private;

        if modifiers.shift {
            result |= OpenHints::BACKGROUND;
        }

        return result;
    }

    if modifiers.shift {
        return OpenHints::NEW_WINDOW | private;
    }

    hints
}
