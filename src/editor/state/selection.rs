// SPDX-License-Identifier: MPL-2.0
//! Selection changes. Selection is not part of the undo history.

use crate::domain::layer::LayerId;
use crate::editor::{Event, Refusal, State};

impl State {
    /// Replaces the selection; unknown ids are dropped.
    pub(crate) fn select_layers(&mut self, ids: &[LayerId]) -> Event {
        let unknown = ids.iter().filter(|id| self.layer(**id).is_none()).count();
        if unknown > 0 {
            tracing::warn!(unknown, "dropping unknown ids from selection");
        }
        self.selection = self.existing_ids(ids);
        Event::None
    }

    pub(crate) fn toggle_select(&mut self, id: LayerId) -> Event {
        if self.layer(id).is_none() {
            return Event::ignored(Refusal::UnknownLayer(id));
        }
        if let Some(position) = self.selection.iter().position(|selected| *selected == id) {
            self.selection.remove(position);
        } else {
            self.selection.push(id);
        }
        Event::None
    }

    pub(crate) fn clear_selection(&mut self) -> Event {
        self.selection.clear();
        Event::None
    }

    /// Selects every top-level layer that is not hidden.
    pub(crate) fn select_all(&mut self) -> Event {
        self.selection = self
            .layers
            .iter()
            .filter(|layer| layer.group_id.is_none() && !layer.hidden)
            .map(|layer| layer.id)
            .collect();
        Event::None
    }
}
