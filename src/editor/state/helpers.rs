// SPDX-License-Identifier: MPL-2.0
//! Lookup and bookkeeping helpers shared by the state handlers.

use crate::domain::layer::{Layer, LayerId};
use crate::editor::{Event, Refusal, State};
use std::collections::HashSet;

impl State {
    pub(crate) fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id == id)
    }

    pub(crate) fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }

    /// `id` followed by all of its descendants, depth first.
    pub(crate) fn subtree(&self, id: LayerId) -> Vec<LayerId> {
        let mut ids = Vec::new();
        let mut stack = vec![id];
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            ids.push(current);
            if let Some(layer) = self.layer(current) {
                stack.extend(layer.children().iter().rev().copied());
            }
        }
        ids
    }

    /// Whether `ancestor` is a strict ancestor of `id`.
    pub(crate) fn is_ancestor(&self, ancestor: LayerId, id: LayerId) -> bool {
        let mut seen = HashSet::new();
        let mut current = self.layer(id).and_then(|layer| layer.group_id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            if !seen.insert(parent) {
                return false;
            }
            current = self.layer(parent).and_then(|layer| layer.group_id);
        }
        false
    }

    /// Distinct ids that exist, in request order.
    pub(crate) fn existing_ids(&self, ids: &[LayerId]) -> Vec<LayerId> {
        let mut seen = HashSet::new();
        ids.iter()
            .copied()
            .filter(|id| self.layer(*id).is_some() && seen.insert(*id))
            .collect()
    }

    /// Drops ids whose ancestor is also in `ids`; acting on the ancestor covers them.
    pub(crate) fn topmost_ids(&self, ids: &[LayerId]) -> Vec<LayerId> {
        ids.iter()
            .copied()
            .filter(|id| !ids.iter().any(|other| self.is_ancestor(*other, *id)))
            .collect()
    }

    /// Subtrees of `ids` without duplicates. Locked layers stay put, and so
    /// does everything under a locked group.
    pub(crate) fn movable_ids(&self, ids: &[LayerId]) -> Vec<LayerId> {
        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| self.layer(**id).is_some_and(|layer| !layer.locked))
            .flat_map(|id| self.subtree(*id))
            .filter(|id| seen.insert(*id))
            .filter(|id| self.layer(*id).is_some_and(|layer| !layer.locked))
            .collect()
    }

    /// Parent chain of `id`, nearest first.
    pub(crate) fn ancestors(&self, id: LayerId) -> Vec<LayerId> {
        let mut chain = Vec::new();
        let mut current = self.layer(id).and_then(|layer| layer.group_id);
        while let Some(parent) = current {
            if chain.contains(&parent) || parent == id {
                break;
            }
            chain.push(parent);
            current = self.layer(parent).and_then(|layer| layer.group_id);
        }
        chain
    }

    /// Outermost group containing `id`, or `id` itself at the root.
    pub(crate) fn root_of(&self, id: LayerId) -> LayerId {
        self.ancestors(id).last().copied().unwrap_or(id)
    }

    /// Paint order slot above every layer.
    pub(crate) fn next_z_index(&self) -> i32 {
        self.layers
            .iter()
            .map(|layer| layer.z_index)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    pub(crate) fn prune_selection(&mut self) {
        let layers = &self.layers;
        self.selection
            .retain(|id| layers.iter().any(|layer| layer.id == *id));
    }

    /// Records the current layers as a new history snapshot.
    pub(crate) fn record_snapshot(&mut self, action: &'static str) {
        self.prune_selection();
        self.history.record(self.layers.clone());
        tracing::debug!(
            action,
            layers = self.layers.len(),
            index = self.history.index(),
            "recorded snapshot"
        );
    }

    /// Records a snapshot when the layers differ from the current one.
    pub(crate) fn commit_if_changed(&mut self, action: &'static str) -> Event {
        if self.has_pending_changes() {
            self.record_snapshot(action);
            Event::Committed
        } else {
            Event::None
        }
    }

    /// Refusal for a request whose ids all turned out unknown.
    pub(crate) fn unknown_or_none(&self, ids: &[LayerId]) -> Event {
        match ids.first() {
            Some(id) => Event::ignored(Refusal::UnknownLayer(*id)),
            None => Event::None,
        }
    }
}
