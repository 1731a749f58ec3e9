// SPDX-License-Identifier: MPL-2.0
//! Grouping and ungrouping.

use crate::domain::layer::{Layer, LayerContent, LayerDraft, LayerId};
use crate::editor::{Event, Refusal, State};
use crate::geometry::union_bounds;

impl State {
    /// Wraps `ids` in a new group sized to their union bounds.
    ///
    /// The group joins the members' common parent, or the root when they
    /// have different parents. A former parent left without children is
    /// removed. Requests naming fewer than two distinct
    /// layers, unknown layers, or a layer together with one of its ancestors
    /// are refused.
    pub(crate) fn group_layers(&mut self, ids: &[LayerId]) -> Event {
        let mut members: Vec<LayerId> = Vec::with_capacity(ids.len());
        for id in ids {
            if self.layer(*id).is_none() {
                return Event::ignored(Refusal::UnknownLayer(*id));
            }
            if !members.contains(id) {
                members.push(*id);
            }
        }
        if members.len() < 2 {
            return Event::ignored(Refusal::TooFewLayers);
        }
        for ancestor in &members {
            if members.iter().any(|id| self.is_ancestor(*ancestor, *id)) {
                return Event::ignored(Refusal::WouldCycle(*ancestor));
            }
        }

        let member_layers: Vec<&Layer> = members.iter().filter_map(|id| self.layer(*id)).collect();
        let Some(bounds) = union_bounds(member_layers.iter().copied()) else {
            return Event::ignored(Refusal::TooFewLayers);
        };
        let first_parent = member_layers[0].group_id;
        let parent = if member_layers.iter().all(|layer| layer.group_id == first_parent) {
            first_parent
        } else {
            None
        };
        let z_index = member_layers
            .iter()
            .map(|layer| layer.z_index)
            .max()
            .unwrap_or_default();
        let insert_at = members
            .iter()
            .filter_map(|id| self.index_of(*id))
            .min()
            .unwrap_or(self.layers.len());

        let group_id = LayerId::new();
        let mut group = LayerDraft::new(
            LayerContent::Container {
                children: members.clone(),
            },
            bounds,
        )
        .into_layer(group_id, z_index);
        group.group_id = parent;

        // Detach members from their old parents; the new group takes the
        // slot of the first member in a shared parent.
        let mut slot = None;
        let mut emptied = Vec::new();
        for layer in &mut self.layers {
            let is_parent = Some(layer.id) == parent;
            let id = layer.id;
            let Some(children) = layer.children_mut() else {
                continue;
            };
            if is_parent {
                slot = children.iter().position(|child| members.contains(child));
            }
            let before = children.len();
            children.retain(|child| !members.contains(child));
            if !is_parent && before > 0 && children.is_empty() {
                emptied.push(id);
            }
        }
        if let Some(parent_id) = parent {
            if let Some(children) = self.layer_mut(parent_id).and_then(|p| p.children_mut()) {
                let at = slot.unwrap_or(children.len()).min(children.len());
                children.insert(at, group_id);
            }
        }

        for layer in &mut self.layers {
            if members.contains(&layer.id) {
                layer.group_id = Some(group_id);
            }
        }
        self.layers.insert(insert_at, group);
        for id in emptied {
            self.remove_empty_group(id);
        }
        self.selection = vec![group_id];
        self.record_snapshot("group layers");
        Event::GroupCreated(group_id)
    }

    /// Removes a group, handing its children to the group's parent (or the root).
    pub(crate) fn ungroup(&mut self, group_id: LayerId) -> Event {
        let Some(children) = self.dissolve_group(group_id) else {
            return Event::ignored(Refusal::NotAGroup(group_id));
        };
        self.selection = children;
        self.record_snapshot("ungroup");
        Event::Committed
    }

    /// Ungroups every selected group as a single history step.
    pub(crate) fn ungroup_selection(&mut self) -> Event {
        let groups: Vec<LayerId> = self
            .selection
            .iter()
            .copied()
            .filter(|id| self.layer(*id).is_some_and(Layer::is_group))
            .collect();
        let Some(first) = groups.first().copied() else {
            return match self.selection.first() {
                Some(id) => Event::ignored(Refusal::NotAGroup(*id)),
                None => Event::None,
            };
        };
        if groups.len() == 1 {
            return self.ungroup(first);
        }

        let mut released = Vec::new();
        for group_id in groups {
            if let Some(children) = self.dissolve_group(group_id) {
                released.extend(children);
            }
        }
        self.selection = released;
        self.record_snapshot("ungroup");
        Event::Committed
    }

    /// Removes `id` if it is a group without children, then repeats for its
    /// parent, which may have just lost its last child.
    fn remove_empty_group(&mut self, id: LayerId) {
        let mut current = Some(id);
        while let Some(group_id) = current {
            let Some(group) = self
                .layer(group_id)
                .filter(|layer| layer.is_group() && layer.children().is_empty())
            else {
                return;
            };
            let parent = group.group_id;
            if let Some(siblings) = parent
                .and_then(|parent_id| self.layer_mut(parent_id))
                .and_then(Layer::children_mut)
            {
                siblings.retain(|child| *child != group_id);
            }
            self.layers.retain(|layer| layer.id != group_id);
            tracing::debug!(group = %group_id, "removed emptied group");
            current = parent;
        }
    }

    fn dissolve_group(&mut self, group_id: LayerId) -> Option<Vec<LayerId>> {
        let group = self.layer(group_id).filter(|layer| layer.is_group())?;
        let children = group.children().to_vec();
        let parent = group.group_id;

        for layer in &mut self.layers {
            if children.contains(&layer.id) {
                layer.group_id = parent;
            }
        }
        if let Some(siblings) = parent
            .and_then(|parent_id| self.layer_mut(parent_id))
            .and_then(Layer::children_mut)
        {
            if let Some(at) = siblings.iter().position(|id| *id == group_id) {
                siblings.splice(at..=at, children.iter().copied());
            }
        }
        self.layers.retain(|layer| layer.id != group_id);
        Some(children)
    }
}
