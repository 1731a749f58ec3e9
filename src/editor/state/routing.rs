// SPDX-License-Identifier: MPL-2.0
//! Keyboard routing helpers that keep the editor facade slim.

use crate::editor::{Event, Key, Modifiers, Shortcut, State};

impl State {
    pub(crate) fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Event {
        match Shortcut::from_key(key, modifiers) {
            Some(shortcut) => self.handle_shortcut(shortcut),
            None => Event::None,
        }
    }

    pub(crate) fn handle_shortcut(&mut self, shortcut: Shortcut) -> Event {
        match shortcut {
            Shortcut::DeleteSelection => {
                if self.selection.is_empty() {
                    return Event::None;
                }
                let ids = self.selection.clone();
                self.delete_layers(&ids)
            }
            Shortcut::Cancel => {
                if self.cancel_gesture() {
                    Event::None
                } else {
                    self.clear_selection()
                }
            }
            Shortcut::Undo => {
                self.cancel_gesture();
                self.undo()
            }
            Shortcut::Redo => {
                self.cancel_gesture();
                self.redo()
            }
            Shortcut::SelectAll => self.select_all(),
            Shortcut::Group => {
                let ids = self.selection.clone();
                self.group_layers(&ids)
            }
            Shortcut::Ungroup => self.ungroup_selection(),
            Shortcut::Duplicate => {
                if self.selection.is_empty() {
                    return Event::None;
                }
                let ids = self.selection.clone();
                self.duplicate(&ids)
            }
            Shortcut::Nudge(delta) => {
                if self.gesture.is_some() {
                    return Event::None;
                }
                self.nudge(delta)
            }
        }
    }
}
