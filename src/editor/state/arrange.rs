// SPDX-License-Identifier: MPL-2.0
//! Duplicate, nudge and z-order changes.

use crate::config::defaults;
use crate::domain::layer::{Layer, LayerId};
use crate::editor::{Event, State};
use kurbo::Vec2;
use std::collections::HashMap;

impl State {
    /// Copies `ids` with their subtrees, offset down-right and painted on top.
    pub(crate) fn duplicate(&mut self, ids: &[LayerId]) -> Event {
        let roots = self.topmost_ids(&self.existing_ids(ids));
        if roots.is_empty() {
            return self.unknown_or_none(ids);
        }

        let mut next_z = self.next_z_index();
        let mut copies = Vec::new();
        let mut new_roots = Vec::with_capacity(roots.len());

        for root in &roots {
            let subtree = self.subtree(*root);
            let mapping: HashMap<LayerId, LayerId> =
                subtree.iter().map(|id| (*id, LayerId::new())).collect();

            for old_id in &subtree {
                let (Some(original), Some(new_id)) = (self.layer(*old_id), mapping.get(old_id))
                else {
                    continue;
                };
                let mut copy = original.clone();
                copy.id = *new_id;
                copy.x += defaults::DUPLICATE_OFFSET;
                copy.y += defaults::DUPLICATE_OFFSET;
                copy.z_index = next_z;
                next_z = next_z.saturating_add(1);
                if old_id != root {
                    copy.group_id = original
                        .group_id
                        .and_then(|parent| mapping.get(&parent).copied());
                }
                if let Some(children) = copy.children_mut() {
                    for child in children.iter_mut() {
                        if let Some(mapped) = mapping.get(child) {
                            *child = *mapped;
                        }
                    }
                }
                copies.push(copy);
            }

            if let Some(new_root) = mapping.get(root) {
                new_roots.push(*new_root);
            }
        }

        for (root, new_root) in roots.iter().zip(&new_roots) {
            let Some(parent) = self.layer(*root).and_then(|layer| layer.group_id) else {
                continue;
            };
            if let Some(children) = self.layer_mut(parent).and_then(Layer::children_mut) {
                let at = children
                    .iter()
                    .position(|child| child == root)
                    .map_or(children.len(), |i| i + 1);
                children.insert(at, *new_root);
            }
        }

        self.layers.extend(copies);
        self.selection = new_roots.clone();
        self.record_snapshot("duplicate");
        Event::LayersDuplicated(new_roots)
    }

    /// Moves the selected, unlocked layers (and their subtrees) by `delta`.
    pub(crate) fn nudge(&mut self, delta: Vec2) -> Event {
        if !delta.is_finite() {
            return Event::None;
        }
        let ids = self.movable_ids(&self.selection);
        for layer in &mut self.layers {
            if ids.contains(&layer.id) {
                layer.x += delta.x;
                layer.y += delta.y;
            }
        }
        self.commit_if_changed("nudge")
    }

    /// Paints `ids` (with their subtrees) above every other layer, keeping
    /// their relative order.
    pub(crate) fn bring_to_front(&mut self, ids: &[LayerId]) -> Event {
        let ordered = self.in_paint_order(ids);
        if ordered.is_empty() {
            return self.unknown_or_none(ids);
        }
        let base = self.next_z_index();
        self.assign_z_indices(&ordered, base);
        self.commit_if_changed("bring to front")
    }

    /// Paints `ids` (with their subtrees) below every other layer, keeping
    /// their relative order.
    pub(crate) fn send_to_back(&mut self, ids: &[LayerId]) -> Event {
        let ordered = self.in_paint_order(ids);
        if ordered.is_empty() {
            return self.unknown_or_none(ids);
        }
        let min = self
            .layers
            .iter()
            .map(|layer| layer.z_index)
            .min()
            .unwrap_or_default();
        let count = i32::try_from(ordered.len()).unwrap_or(i32::MAX);
        self.assign_z_indices(&ordered, min.saturating_sub(count));
        self.commit_if_changed("send to back")
    }

    /// Topmost existing ids of `ids` in their current paint order, each
    /// followed by its descendants so a group paints below its children.
    fn in_paint_order(&self, ids: &[LayerId]) -> Vec<LayerId> {
        let mut found: Vec<(i32, usize, LayerId)> = self
            .topmost_ids(&self.existing_ids(ids))
            .into_iter()
            .filter_map(|id| {
                let index = self.index_of(id)?;
                Some((self.layers[index].z_index, index, id))
            })
            .collect();
        found.sort_unstable();
        found
            .into_iter()
            .flat_map(|(_, _, id)| self.subtree(id))
            .collect()
    }

    fn assign_z_indices(&mut self, ordered: &[LayerId], base: i32) {
        let mut z_index = base;
        for id in ordered {
            if let Some(layer) = self.layer_mut(*id) {
                layer.z_index = z_index;
            }
            z_index = z_index.saturating_add(1);
        }
    }
}
