// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcut mapping.
//!
//! The host translates its native key events into [`Key`] and [`Modifiers`];
//! [`Shortcut::from_key`] decides what, if anything, the editor does with them.

use crate::config::defaults;
use kurbo::Vec2;

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Character(char),
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    /// Command on macOS, Super elsewhere.
    pub logo: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        logo: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
        logo: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        control: true,
        logo: false,
    };
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        shift: true,
        control: true,
        logo: false,
    };

    /// Platform command modifier (Ctrl or Cmd).
    #[must_use]
    pub fn command(self) -> bool {
        self.control || self.logo
    }
}

/// Editor action bound to a key combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortcut {
    DeleteSelection,
    /// Cancel the gesture in flight, or clear the selection when idle.
    Cancel,
    Undo,
    Redo,
    SelectAll,
    Group,
    Ungroup,
    Duplicate,
    /// Move the selection by a canvas offset.
    Nudge(Vec2),
}

impl Shortcut {
    /// Resolves a key press; `None` when the combination is unbound.
    #[must_use]
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Shortcut> {
        let step = if modifiers.shift {
            defaults::NUDGE_LARGE_STEP
        } else {
            defaults::NUDGE_STEP
        };

        match key {
            Key::Delete | Key::Backspace => Some(Shortcut::DeleteSelection),
            Key::Escape => Some(Shortcut::Cancel),
            Key::ArrowUp => Some(Shortcut::Nudge(Vec2::new(0.0, -step))),
            Key::ArrowDown => Some(Shortcut::Nudge(Vec2::new(0.0, step))),
            Key::ArrowLeft => Some(Shortcut::Nudge(Vec2::new(-step, 0.0))),
            Key::ArrowRight => Some(Shortcut::Nudge(Vec2::new(step, 0.0))),
            Key::Character(c) if modifiers.command() => {
                match (c.to_ascii_lowercase(), modifiers.shift) {
                    ('z', false) => Some(Shortcut::Undo),
                    ('z', true) | ('y', _) => Some(Shortcut::Redo),
                    ('a', false) => Some(Shortcut::SelectAll),
                    ('g', false) => Some(Shortcut::Group),
                    ('g', true) => Some(Shortcut::Ungroup),
                    ('d', false) => Some(Shortcut::Duplicate),
                    _ => None,
                }
            }
            Key::Character(_) => None,
        }
    }
}
