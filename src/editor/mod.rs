// SPDX-License-Identifier: MPL-2.0
//! Editor state store.
//!
//! [`State`] owns the layer collection, selection, viewport, active tool and
//! undo history of one editing session. Every change goes through
//! [`State::update`], which applies a [`Message`] synchronously and reports an
//! [`Event`]. Invalid requests never fail: they are logged and reported as
//! [`Event::Ignored`].
//!
//! ```
//! use productify_canvas::config::EditorSettings;
//! use productify_canvas::domain::layer::LayerDraft;
//! use productify_canvas::editor::{Event, Message, State};
//!
//! let mut state = State::new(EditorSettings::default());
//! let Event::LayerAdded(id) = state.update(Message::AddLayer(LayerDraft::shape(0.0, 0.0, 100.0, 100.0))) else {
//!     panic!("layer not added");
//! };
//! assert_eq!(state.selection(), &[id]);
//!
//! state.update(Message::Undo);
//! assert!(state.layers().is_empty());
//! ```

mod gesture;
mod history;
mod messages;
mod shortcuts;
mod state;
mod tools;
mod viewport;

#[cfg(test)]
mod tests;

pub use gesture::Gesture;
pub use history::{History, Snapshot};
pub use messages::{Event, Message, Refusal, UpdateMode};
pub use shortcuts::{Key, Modifiers, Shortcut};
pub use tools::{Interaction, Tool};
pub use viewport::Viewport;

use crate::config::EditorSettings;
use crate::domain::layer::{Layer, LayerId};
use crate::geometry::Guide;

/// Session state of the canvas editor.
#[derive(Debug, Clone)]
pub struct State {
    /// Layers in sequence order. `z_index` decides paint order.
    layers: Vec<Layer>,
    /// Selected layer ids, in selection order.
    selection: Vec<LayerId>,
    viewport: Viewport,
    tool: Tool,
    history: History,
    /// Pointer gesture in flight, if any.
    gesture: Option<Gesture>,
    settings: EditorSettings,
}

impl State {
    /// Creates an empty session.
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        Self::with_layers(Vec::new(), settings)
    }

    /// Creates a session over an already validated layer collection.
    pub(crate) fn with_layers(layers: Vec<Layer>, settings: EditorSettings) -> Self {
        Self {
            history: History::new(layers.clone(), settings.history_limit),
            layers,
            selection: Vec::new(),
            viewport: Viewport::new(settings.zoom_range),
            tool: Tool::default(),
            gesture: None,
            settings,
        }
    }

    /// Update the state and emit an [`Event`] describing the outcome.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::AddLayer(draft) => self.add_layer(draft),
            Message::UpdateLayer { id, patch, mode } => self.update_layer(id, &patch, mode),
            Message::CommitTransient => self.commit_transient(),
            Message::DeleteLayers(ids) => self.delete_layers(&ids),
            Message::SelectLayers(ids) => self.select_layers(&ids),
            Message::ToggleSelect(id) => self.toggle_select(id),
            Message::ClearSelection => self.clear_selection(),
            Message::SelectAll => self.select_all(),
            Message::GroupLayers(ids) => self.group_layers(&ids),
            Message::Ungroup(id) => self.ungroup(id),
            Message::Duplicate(ids) => self.duplicate(&ids),
            Message::Nudge(delta) => self.nudge(delta),
            Message::BringToFront(ids) => self.bring_to_front(&ids),
            Message::SendToBack(ids) => self.send_to_back(&ids),
            Message::Undo => self.undo(),
            Message::Redo => self.redo(),
            Message::SetZoom(zoom) => {
                self.viewport.set_zoom(zoom);
                Event::None
            }
            Message::ZoomIn => {
                self.viewport.zoom_in(self.settings.zoom_step);
                Event::None
            }
            Message::ZoomOut => {
                self.viewport.zoom_out(self.settings.zoom_step);
                Event::None
            }
            Message::ZoomAt { position, zoom } => {
                self.viewport.zoom_at(position, zoom);
                Event::None
            }
            Message::SetPan(pan) => {
                self.viewport.set_pan(pan);
                Event::None
            }
            Message::SetTool(tool) => self.set_tool(tool),
            Message::PointerDown { position, shift } => self.pointer_down(position, shift),
            Message::PointerMoved { position } => self.pointer_moved(position),
            Message::PointerUp { position } => self.pointer_up(position),
            Message::KeyPressed { key, modifiers } => self.handle_key(key, modifiers),
        }
    }

    /// Layers in sequence order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Layers sorted for painting: ascending `z_index`, sequence order on ties.
    #[must_use]
    pub fn paint_order(&self) -> Vec<&Layer> {
        let mut ordered: Vec<&Layer> = self.layers.iter().collect();
        ordered.sort_by_key(|layer| layer.z_index);
        ordered
    }

    #[must_use]
    pub fn selection(&self) -> &[LayerId] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: LayerId) -> bool {
        self.selection.contains(&id)
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Alignment guides matched by the current move gesture.
    #[must_use]
    pub fn active_guides(&self) -> &[Guide] {
        self.gesture.as_ref().map_or(&[][..], Gesture::guides)
    }

    /// Whether the layers differ from the snapshot under the history cursor.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.layers.as_slice() != self.history.current_layers()
    }

    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

/// Reducer form of [`State::update`]: consumes the state and returns the next one.
#[must_use]
pub fn reduce(mut state: State, message: Message) -> (State, Event) {
    let event = state.update(message);
    (state, event)
}
