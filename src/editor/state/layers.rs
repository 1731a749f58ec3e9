// SPDX-License-Identifier: MPL-2.0
//! Layer creation, updates and deletion.

use crate::domain::layer::{LayerContent, LayerDraft, LayerId, LayerKind, LayerPatch};
use crate::editor::{Event, Refusal, State, UpdateMode};
use std::collections::HashSet;

impl State {
    /// Adds a layer above all others (unless the draft sets `z_index`) and selects it.
    ///
    /// A container draft always starts empty. Children only join a group
    /// through grouping, which keeps both sides of the link in step.
    pub(crate) fn add_layer(&mut self, mut draft: LayerDraft) -> Event {
        if let LayerContent::Container { children } = &mut draft.content {
            if !children.is_empty() {
                tracing::warn!(count = children.len(), "dropping children listed in a new group");
                children.clear();
            }
        }
        let id = LayerId::new();
        let z_index = draft.z_index.unwrap_or_else(|| self.next_z_index());
        self.layers.push(draft.into_layer(id, z_index));
        self.selection = vec![id];
        self.record_snapshot("add layer");
        Event::LayerAdded(id)
    }

    pub(crate) fn update_layer(&mut self, id: LayerId, patch: &LayerPatch, mode: UpdateMode) -> Event {
        let Some(layer) = self.layer_mut(id) else {
            return Event::ignored(Refusal::UnknownLayer(id));
        };

        if let Some(content) = &patch.content {
            if layer.is_group() || content.kind() == LayerKind::Container {
                return Event::ignored(Refusal::HierarchyChange(id));
            }
        }

        let changed = patch.apply(layer);
        match mode {
            UpdateMode::Transient => {
                tracing::trace!(layer = %id, changed, "transient update");
                Event::None
            }
            UpdateMode::Commit => self.commit_if_changed("update layer"),
        }
    }

    pub(crate) fn commit_transient(&mut self) -> Event {
        self.commit_if_changed("commit transient")
    }

    /// Deletes layers together with their descendants.
    pub(crate) fn delete_layers(&mut self, ids: &[LayerId]) -> Event {
        let existing = self.existing_ids(ids);
        if existing.is_empty() {
            return self.unknown_or_none(ids);
        }
        for id in ids.iter().filter(|id| !existing.contains(id)) {
            tracing::warn!(layer = %id, "skipping unknown layer in delete");
        }

        let doomed: HashSet<LayerId> = existing
            .iter()
            .flat_map(|id| self.subtree(*id))
            .collect();

        self.layers.retain(|layer| !doomed.contains(&layer.id));
        for layer in &mut self.layers {
            if let Some(children) = layer.children_mut() {
                children.retain(|child| !doomed.contains(child));
            }
        }
        self.gesture = None;
        self.record_snapshot("delete layers");
        Event::Committed
    }
}
