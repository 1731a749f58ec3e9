// SPDX-License-Identifier: MPL-2.0
//! Pointer gestures driven by the active tool.
//!
//! Positions arrive in screen space and are mapped to canvas space from the
//! viewport on every event. Moves and resizes are computed from the state at
//! press time, never accumulated from previous moves.

use crate::config::defaults;
use crate::domain::layer::{LayerContent, LayerDraft, LayerId, LayerKind};
use crate::editor::{Event, Gesture, Interaction, State, Tool};
use crate::geometry::{handle_at, hit_test, resize_rect, snap, snap_resize, union_bounds};
use kurbo::{Point, Rect};

impl State {
    /// Switches tool. A gesture in flight is discarded without a snapshot.
    pub(crate) fn set_tool(&mut self, tool: Tool) -> Event {
        if self.cancel_gesture() {
            tracing::debug!(?tool, "tool switch cancelled gesture");
        }
        self.tool = tool;
        Event::None
    }

    /// Discards the gesture in flight. Returns whether there was one.
    pub(crate) fn cancel_gesture(&mut self) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        match gesture {
            Gesture::Move { .. } | Gesture::Resize { .. } => self.restore_current_snapshot(),
            Gesture::Pan { start_pan, .. } => self.viewport.set_pan(start_pan),
            Gesture::Create { .. } => {}
        }
        true
    }

    pub(crate) fn pointer_down(&mut self, position: Point, shift: bool) -> Event {
        self.cancel_gesture();
        let canvas = self.viewport.to_canvas(position);

        match self.tool.interaction() {
            Interaction::Pan => {
                self.gesture = Some(Gesture::Pan {
                    origin: position,
                    start_pan: self.viewport.pan(),
                });
            }
            Interaction::Create(kind) => {
                self.gesture = Some(Gesture::Create {
                    kind,
                    origin: canvas,
                    current: canvas,
                });
            }
            Interaction::Transform => self.begin_transform(canvas, shift),
        }
        Event::None
    }

    pub(crate) fn pointer_moved(&mut self, position: Point) -> Event {
        let Some(gesture) = self.gesture.take() else {
            return Event::None;
        };
        let canvas = self.viewport.to_canvas(position);

        let gesture = match gesture {
            Gesture::Move {
                origin,
                starts,
                start_bounds,
                exclude,
                ..
            } => {
                let mut delta = canvas - origin;
                let mut guides = Vec::new();
                if self.settings.snap_enabled {
                    let snapped = snap(
                        start_bounds + delta,
                        &self.layers,
                        &exclude,
                        self.settings.snap_tolerance,
                    );
                    delta += snapped.offset;
                    guides = snapped.guides();
                }
                for (id, start) in &starts {
                    if let Some(layer) = self.layer_mut(*id) {
                        layer.x = start.x + delta.x;
                        layer.y = start.y + delta.y;
                    }
                }
                tracing::trace!(dx = delta.x, dy = delta.y, guides = guides.len(), "move");
                Gesture::Move {
                    origin,
                    starts,
                    start_bounds,
                    exclude,
                    guides,
                }
            }
            Gesture::Resize {
                id,
                handle,
                origin,
                start,
                exclude,
                ..
            } => {
                let mut rect = resize_rect(start, handle, canvas - origin, defaults::MIN_LAYER_SIZE);
                let mut guides = Vec::new();
                if self.settings.snap_enabled {
                    (rect, guides) = snap_resize(
                        rect,
                        handle,
                        &self.layers,
                        &exclude,
                        self.settings.snap_tolerance,
                        defaults::MIN_LAYER_SIZE,
                    );
                }
                if let Some(layer) = self.layer_mut(id) {
                    layer.set_bounds(rect);
                }
                Gesture::Resize {
                    id,
                    handle,
                    origin,
                    start,
                    exclude,
                    guides,
                }
            }
            Gesture::Create { kind, origin, .. } => Gesture::Create {
                kind,
                origin,
                current: canvas,
            },
            Gesture::Pan { origin, start_pan } => {
                self.viewport.set_pan(start_pan + (position - origin));
                Gesture::Pan { origin, start_pan }
            }
        };

        self.gesture = Some(gesture);
        Event::None
    }

    /// Ends the gesture. Moves and resizes commit one snapshot if anything
    /// changed; creation adds the new layer.
    pub(crate) fn pointer_up(&mut self, position: Point) -> Event {
        self.pointer_moved(position);
        let Some(gesture) = self.gesture.take() else {
            return Event::None;
        };

        match gesture {
            Gesture::Move { .. } => self.commit_if_changed("move"),
            Gesture::Resize { .. } => self.commit_if_changed("resize"),
            Gesture::Create {
                kind,
                origin,
                current,
            } => self.finish_create(kind, origin, current),
            Gesture::Pan { .. } => Event::None,
        }
    }

    fn begin_transform(&mut self, canvas: Point, shift: bool) {
        if let Some(gesture) = self.resize_gesture_at(canvas) {
            self.gesture = Some(gesture);
            return;
        }

        let Some(hit) = hit_test(&self.layers, canvas) else {
            if !shift {
                self.selection.clear();
            }
            return;
        };
        let target = self.root_of(hit);

        if shift {
            self.toggle_select(target);
        } else if !self.is_selected(target) {
            self.selection = vec![target];
        }
        if self.is_selected(target) {
            self.begin_move(canvas);
        }
    }

    /// Resize gesture when `canvas` is on a handle of the single selected layer.
    fn resize_gesture_at(&self, canvas: Point) -> Option<Gesture> {
        let [id] = *self.selection.as_slice() else {
            return None;
        };
        let layer = self
            .layer(id)
            .filter(|layer| !layer.locked && !layer.hidden && !layer.is_group())?;
        let radius = self.settings.handle_radius / self.viewport.zoom();
        let handle = handle_at(layer.bounds(), canvas, radius)?;
        let mut exclude = vec![id];
        exclude.extend(self.ancestors(id));
        Some(Gesture::Resize {
            id,
            handle,
            origin: canvas,
            start: layer.bounds(),
            exclude,
            guides: Vec::new(),
        })
    }

    fn begin_move(&mut self, canvas: Point) {
        let moved = self.movable_ids(&self.selection);
        let Some(start_bounds) = union_bounds(moved.iter().filter_map(|id| self.layer(*id)))
        else {
            return;
        };
        let starts = moved
            .iter()
            .filter_map(|id| self.layer(*id).map(|layer| (*id, Point::new(layer.x, layer.y))))
            .collect();

        let mut exclude: Vec<LayerId> = moved.clone();
        for id in &moved {
            for ancestor in self.ancestors(*id) {
                if !exclude.contains(&ancestor) {
                    exclude.push(ancestor);
                }
            }
        }

        self.gesture = Some(Gesture::Move {
            origin: canvas,
            starts,
            start_bounds,
            exclude,
            guides: Vec::new(),
        });
    }

    fn finish_create(&mut self, kind: LayerKind, origin: Point, current: Point) -> Event {
        let travel = self.viewport.to_screen(origin).distance(self.viewport.to_screen(current));
        let rect = if travel < defaults::CLICK_SLOP {
            Rect::from_origin_size(origin, self.settings.default_layer_size)
        } else {
            Rect::from_points(origin, current)
        };
        self.add_layer(LayerDraft::new(LayerContent::placeholder(kind), rect))
    }
}
