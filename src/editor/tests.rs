// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::config::Config;
use crate::domain::editing::HistoryLimit;
use crate::domain::layer::{LayerContent, LayerDraft, LayerKind, LayerPatch};
use crate::error::{Error, ProjectError};
use crate::persistence::Project;
use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, F64_EPSILON};
use kurbo::{Point, Rect, Vec2};
use std::collections::HashSet;

fn editor() -> State {
    State::new(EditorSettings::default())
}

fn add(state: &mut State, draft: LayerDraft) -> LayerId {
    match state.update(Message::AddLayer(draft)) {
        Event::LayerAdded(id) => id,
        other => panic!("expected LayerAdded, got {other:?}"),
    }
}

fn group(state: &mut State, ids: &[LayerId]) -> LayerId {
    match state.update(Message::GroupLayers(ids.to_vec())) {
        Event::GroupCreated(id) => id,
        other => panic!("expected GroupCreated, got {other:?}"),
    }
}

fn layer(state: &State, id: LayerId) -> &Layer {
    state.layer(id).expect("layer exists")
}

fn ids(state: &State) -> HashSet<LayerId> {
    state.layers().iter().map(|layer| layer.id).collect()
}

fn press(state: &mut State, x: f64, y: f64) -> Event {
    state.update(Message::PointerDown {
        position: Point::new(x, y),
        shift: false,
    })
}

fn drag_to(state: &mut State, x: f64, y: f64) -> Event {
    state.update(Message::PointerMoved {
        position: Point::new(x, y),
    })
}

fn release(state: &mut State, x: f64, y: f64) -> Event {
    state.update(Message::PointerUp {
        position: Point::new(x, y),
    })
}

fn key(state: &mut State, key: Key, modifiers: Modifiers) -> Event {
    state.update(Message::KeyPressed { key, modifiers })
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_editor_is_empty() {
    let state = editor();

    assert!(state.layers().is_empty());
    assert!(state.selection().is_empty());
    assert_eq!(state.tool(), Tool::Select);
    assert_eq!(state.history().len(), 1);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.has_pending_changes());
    assert!(state.gesture().is_none());
}

#[test]
fn reduce_threads_state_through() {
    let (state, event) = reduce(State::default(), Message::AddLayer(LayerDraft::shape(0.0, 0.0, 10.0, 10.0)));

    assert!(matches!(event, Event::LayerAdded(_)));
    assert_eq!(state.layers().len(), 1);
}

// =============================================================================
// Layers
// =============================================================================

#[test]
fn added_layer_is_selected_and_on_top() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(5.0, 5.0, 10.0, 10.0));

    assert_eq!(state.selection(), &[b]);
    assert!(layer(&state, b).z_index > layer(&state, a).z_index);
    assert_eq!(state.history().len(), 3);
}

#[test]
fn draft_z_index_is_kept() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0).with_z_index(-4));
    assert_eq!(layer(&state, id).z_index, -4);
}

#[test]
fn adding_then_deleting_leaves_the_expected_ids() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::text("hello", 20.0, 0.0, 80.0, 20.0));
    let c = add(&mut state, LayerDraft::image("cover.png", 0.0, 40.0, 60.0, 60.0));

    assert_eq!(ids(&state), HashSet::from([a, b, c]));

    assert_eq!(state.update(Message::DeleteLayers(vec![b])), Event::Committed);
    assert_eq!(ids(&state), HashSet::from([a, c]));
    assert!(state.selection().is_empty());
}

#[test]
fn update_patches_and_commits() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));

    let event = state.update(Message::UpdateLayer {
        id,
        patch: LayerPatch::position(40.0, 50.0),
        mode: UpdateMode::Commit,
    });

    assert_eq!(event, Event::Committed);
    assert_eq!(layer(&state, id).bounds(), Rect::new(40.0, 50.0, 50.0, 60.0));
    assert_eq!(state.history().len(), 3);
}

#[test]
fn no_op_update_records_nothing() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));

    let event = state.update(Message::UpdateLayer {
        id,
        patch: LayerPatch::position(0.0, 0.0),
        mode: UpdateMode::Commit,
    });

    assert_eq!(event, Event::None);
    assert_eq!(state.history().len(), 2);
}

#[test]
fn transient_updates_share_one_snapshot() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));

    for x in [1.0, 2.0, 3.0] {
        let event = state.update(Message::UpdateLayer {
            id,
            patch: LayerPatch::position(x, 0.0),
            mode: UpdateMode::Transient,
        });
        assert_eq!(event, Event::None);
    }
    assert!(state.has_pending_changes());
    assert_eq!(state.history().len(), 2);

    assert_eq!(state.update(Message::CommitTransient), Event::Committed);
    assert_eq!(state.history().len(), 3);
    assert!(!state.has_pending_changes());
    assert_eq!(state.update(Message::CommitTransient), Event::None);

    state.update(Message::Undo);
    assert_eq!(layer(&state, id).x, 0.0);
}

#[test]
fn unknown_layer_is_ignored() {
    let mut state = editor();
    add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let before = state.layers().to_vec();
    let ghost = LayerId::new();

    let event = state.update(Message::UpdateLayer {
        id: ghost,
        patch: LayerPatch::position(1.0, 1.0),
        mode: UpdateMode::Commit,
    });

    assert_eq!(event, Event::Ignored(Refusal::UnknownLayer(ghost)));
    assert_eq!(state.layers(), before.as_slice());
    assert_eq!(
        state.update(Message::DeleteLayers(vec![ghost])),
        Event::Ignored(Refusal::UnknownLayer(ghost))
    );
    assert_eq!(state.history().len(), 2);
}

#[test]
fn content_patch_cannot_create_or_break_groups() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));

    let into_container = state.update(Message::UpdateLayer {
        id: a,
        patch: LayerPatch {
            content: Some(LayerContent::placeholder(LayerKind::Container)),
            ..LayerPatch::default()
        },
        mode: UpdateMode::Commit,
    });
    assert_eq!(into_container, Event::Ignored(Refusal::HierarchyChange(a)));

    let g = group(&mut state, &[a, b]);
    let out_of_container = state.update(Message::UpdateLayer {
        id: g,
        patch: LayerPatch {
            content: Some(LayerContent::Text { text: "x".into() }),
            ..LayerPatch::default()
        },
        mode: UpdateMode::Commit,
    });
    assert_eq!(out_of_container, Event::Ignored(Refusal::HierarchyChange(g)));
    assert_eq!(layer(&state, g).children(), &[a, b]);
}

#[test]
fn new_container_never_claims_existing_layers() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let draft = LayerDraft::new(
        LayerContent::Container {
            children: vec![a, LayerId::new()],
        },
        Rect::new(0.0, 0.0, 50.0, 50.0),
    );

    let g = add(&mut state, draft);

    assert!(layer(&state, g).children().is_empty());
    assert_eq!(layer(&state, a).group_id, None);
    assert!(state.to_project().validate().is_ok());

    state.update(Message::DeleteLayers(vec![g]));
    assert_eq!(ids(&state), HashSet::from([a]));
}

#[test]
fn content_patch_between_leaf_kinds_is_allowed() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::text("before", 0.0, 0.0, 10.0, 10.0));

    state.update(Message::UpdateLayer {
        id,
        patch: LayerPatch {
            content: Some(LayerContent::Text { text: "after".into() }),
            ..LayerPatch::default()
        },
        mode: UpdateMode::Commit,
    });

    assert_eq!(
        layer(&state, id).content,
        LayerContent::Text { text: "after".into() }
    );
}

// =============================================================================
// History
// =============================================================================

#[test]
fn undo_then_redo_restores_identical_layers() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 100.0, 100.0));
    let b = add(&mut state, LayerDraft::shape(150.0, 50.0, 100.0, 50.0));
    group(&mut state, &[a, b]);
    let after = state.layers().to_vec();

    for _ in 0..3 {
        assert!(matches!(state.update(Message::Undo), Event::HistoryMoved(_)));
    }
    assert!(state.layers().is_empty());
    assert!(!state.can_undo());

    for _ in 0..3 {
        state.update(Message::Redo);
    }
    assert_eq!(state.layers(), after.as_slice());
    assert!(!state.can_redo());
}

#[test]
fn undo_and_redo_at_the_boundaries_do_nothing() {
    let mut state = editor();
    assert_eq!(state.update(Message::Undo), Event::None);

    add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    assert_eq!(state.update(Message::Redo), Event::None);
    assert_eq!(state.history().index(), 1);
}

#[test]
fn new_edit_after_undo_discards_redo() {
    let mut state = editor();
    add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));

    assert_eq!(state.update(Message::Undo), Event::HistoryMoved(1));
    assert!(state.can_redo());

    let c = add(&mut state, LayerDraft::shape(40.0, 0.0, 10.0, 10.0));
    assert!(!state.can_redo());
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.layers().len(), 2);
    assert!(state.layer(c).is_some());
}

#[test]
fn history_drops_oldest_snapshot_past_the_limit() {
    let config = Config {
        history_limit: Some(3),
        ..Config::default()
    };
    let settings = EditorSettings::from_config(&config);
    assert_eq!(settings.history_limit, HistoryLimit::new(3));
    let mut state = State::new(settings);

    for i in 0..5 {
        add(&mut state, LayerDraft::shape(f64::from(i) * 20.0, 0.0, 10.0, 10.0));
    }
    assert_eq!(state.history().len(), 3);

    state.update(Message::Undo);
    state.update(Message::Undo);
    assert!(!state.can_undo());
    assert_eq!(state.layers().len(), 3);
}

#[test]
fn undo_prunes_selection() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    state.update(Message::SelectLayers(vec![a, b]));

    state.update(Message::Undo);

    assert_eq!(state.selection(), &[a]);
}

#[test]
fn selection_changes_are_not_undoable() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let len = state.history().len();

    state.update(Message::ClearSelection);
    state.update(Message::ToggleSelect(a));
    state.update(Message::SelectAll);

    assert_eq!(state.history().len(), len);
    assert!(!state.has_pending_changes());
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn select_layers_drops_unknown_ids() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));

    state.update(Message::SelectLayers(vec![LayerId::new(), a, a]));

    assert_eq!(state.selection(), &[a]);
}

#[test]
fn toggle_select_adds_and_removes() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));

    state.update(Message::ToggleSelect(a));
    assert_eq!(state.selection(), &[b, a]);
    state.update(Message::ToggleSelect(b));
    assert_eq!(state.selection(), &[a]);

    let ghost = LayerId::new();
    assert_eq!(
        state.update(Message::ToggleSelect(ghost)),
        Event::Ignored(Refusal::UnknownLayer(ghost))
    );
}

#[test]
fn select_all_takes_visible_top_level_layers() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let hidden = add(&mut state, LayerDraft::shape(40.0, 0.0, 10.0, 10.0));
    state.update(Message::UpdateLayer {
        id: hidden,
        patch: LayerPatch {
            hidden: Some(true),
            ..LayerPatch::default()
        },
        mode: UpdateMode::Commit,
    });
    let g = group(&mut state, &[a, b]);
    let c = add(&mut state, LayerDraft::shape(60.0, 0.0, 10.0, 10.0));

    state.update(Message::SelectAll);

    assert_eq!(state.selection().len(), 2);
    assert!(state.is_selected(g));
    assert!(state.is_selected(c));
}

// =============================================================================
// Grouping
// =============================================================================

#[test]
fn grouping_links_both_directions() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 100.0, 100.0));
    let b = add(&mut state, LayerDraft::shape(150.0, 50.0, 100.0, 50.0));

    let g = group(&mut state, &[a, b]);

    let group_layer = layer(&state, g);
    assert!(group_layer.is_group());
    assert_eq!(group_layer.children(), &[a, b]);
    assert_eq!(group_layer.bounds(), Rect::new(0.0, 0.0, 250.0, 100.0));
    assert_eq!(group_layer.group_id, None);
    assert_eq!(group_layer.z_index, layer(&state, b).z_index);
    assert_eq!(layer(&state, a).group_id, Some(g));
    assert_eq!(layer(&state, b).group_id, Some(g));
    assert_eq!(state.selection(), &[g]);
}

#[test]
fn group_bounds_cover_both_members() {
    let mut state = editor();
    let first = add(&mut state, LayerDraft::shape(0.0, 0.0, 100.0, 100.0));
    let second = add(&mut state, LayerDraft::shape(200.0, 0.0, 50.0, 50.0));

    let g = group(&mut state, &[first, second]);

    let groups: Vec<&Layer> = state.layers().iter().filter(|l| l.is_group()).collect();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, g);
    assert_eq!(groups[0].bounds(), Rect::new(0.0, 0.0, 250.0, 100.0));
}

#[test]
fn ungroup_releases_children() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let g = group(&mut state, &[a, b]);

    assert_eq!(state.update(Message::Ungroup(g)), Event::Committed);

    assert!(state.layer(g).is_none());
    assert_eq!(layer(&state, a).group_id, None);
    assert_eq!(layer(&state, b).group_id, None);
    assert_eq!(state.selection(), &[a, b]);
}

#[test]
fn grouping_refusals() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let ghost = LayerId::new();

    assert_eq!(
        state.update(Message::GroupLayers(vec![a])),
        Event::Ignored(Refusal::TooFewLayers)
    );
    assert_eq!(
        state.update(Message::GroupLayers(vec![a, a])),
        Event::Ignored(Refusal::TooFewLayers)
    );
    assert_eq!(
        state.update(Message::GroupLayers(vec![a, ghost])),
        Event::Ignored(Refusal::UnknownLayer(ghost))
    );

    let g = group(&mut state, &[a, b]);
    assert_eq!(
        state.update(Message::GroupLayers(vec![g, a])),
        Event::Ignored(Refusal::WouldCycle(g))
    );
    assert_eq!(
        state.update(Message::Ungroup(a)),
        Event::Ignored(Refusal::NotAGroup(a))
    );
    assert_eq!(layer(&state, g).children(), &[a, b]);
}

#[test]
fn nested_group_stays_under_common_parent() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let c = add(&mut state, LayerDraft::shape(40.0, 0.0, 10.0, 10.0));
    let outer = group(&mut state, &[a, b, c]);

    let inner = group(&mut state, &[a, b]);

    assert_eq!(layer(&state, inner).group_id, Some(outer));
    assert_eq!(layer(&state, outer).children(), &[inner, c]);

    state.update(Message::Ungroup(inner));
    assert_eq!(layer(&state, outer).children(), &[a, b, c]);
    assert_eq!(layer(&state, a).group_id, Some(outer));
}

#[test]
fn grouping_across_parents_goes_to_root() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let c = add(&mut state, LayerDraft::shape(40.0, 0.0, 10.0, 10.0));
    let first = group(&mut state, &[a, b]);

    let mixed = group(&mut state, &[b, c]);

    assert_eq!(layer(&state, mixed).group_id, None);
    assert_eq!(layer(&state, first).children(), &[a]);
    assert_eq!(layer(&state, b).group_id, Some(mixed));
}

#[test]
fn regrouping_every_child_removes_the_old_group() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let c = add(&mut state, LayerDraft::shape(40.0, 0.0, 10.0, 10.0));
    let inner = group(&mut state, &[a, b]);
    let outer = group(&mut state, &[inner, c]);

    let mixed = group(&mut state, &[a, b, c]);

    assert!(state.layer(inner).is_none());
    assert!(state.layer(outer).is_none());
    assert_eq!(ids(&state), HashSet::from([a, b, c, mixed]));
    assert_eq!(layer(&state, mixed).group_id, None);
    assert!(state.to_project().validate().is_ok());

    state.update(Message::Undo);
    assert_eq!(layer(&state, inner).children(), &[a, b]);
}

#[test]
fn deleting_a_group_deletes_its_subtree() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let c = add(&mut state, LayerDraft::shape(40.0, 0.0, 10.0, 10.0));
    let d = add(&mut state, LayerDraft::shape(60.0, 0.0, 10.0, 10.0));
    let inner = group(&mut state, &[a, b]);
    let outer = group(&mut state, &[inner, c]);

    state.update(Message::DeleteLayers(vec![outer]));

    assert_eq!(ids(&state), HashSet::from([d]));
}

#[test]
fn deleting_a_child_updates_its_parent() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let g = group(&mut state, &[a, b]);

    state.update(Message::DeleteLayers(vec![a]));

    assert_eq!(layer(&state, g).children(), &[b]);
}

// =============================================================================
// Arrange
// =============================================================================

#[test]
fn duplicate_copies_subtree_with_offset() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let g = group(&mut state, &[a, b]);
    let top_before = state.layers().iter().map(|l| l.z_index).max().unwrap_or_default();

    let Event::LayersDuplicated(copies) = state.update(Message::Duplicate(vec![g])) else {
        panic!("expected duplicate");
    };

    assert_eq!(copies.len(), 1);
    assert_eq!(state.layers().len(), 6);
    assert_eq!(state.selection(), copies.as_slice());

    let copy = layer(&state, copies[0]);
    assert!(copy.is_group());
    assert_eq!(copy.bounds(), layer(&state, g).bounds() + Vec2::new(10.0, 10.0));
    assert!(copy.z_index > top_before);
    for child in copy.children() {
        assert!(*child != a && *child != b);
        let child_layer = layer(&state, *child);
        assert_eq!(child_layer.group_id, Some(copies[0]));
    }
    assert_eq!(layer(&state, g).children(), &[a, b]);
}

#[test]
fn duplicate_inside_group_joins_the_same_parent() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let g = group(&mut state, &[a, b]);

    let Event::LayersDuplicated(copies) = state.update(Message::Duplicate(vec![a])) else {
        panic!("expected duplicate");
    };

    assert_eq!(layer(&state, copies[0]).group_id, Some(g));
    assert_eq!(layer(&state, g).children(), &[a, copies[0], b]);
}

#[test]
fn nudge_moves_unlocked_selection() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let locked = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    state.update(Message::UpdateLayer {
        id: locked,
        patch: LayerPatch {
            locked: Some(true),
            ..LayerPatch::default()
        },
        mode: UpdateMode::Commit,
    });
    state.update(Message::SelectLayers(vec![a, locked]));

    assert_eq!(state.update(Message::Nudge(Vec2::new(5.0, -2.0))), Event::Committed);

    assert_eq!((layer(&state, a).x, layer(&state, a).y), (5.0, -2.0));
    assert_eq!(layer(&state, locked).x, 20.0);
}

#[test]
fn nudging_a_group_moves_its_children() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    let g = group(&mut state, &[a, b]);

    state.update(Message::Nudge(Vec2::new(0.0, 7.0)));

    assert_eq!(layer(&state, g).y, 7.0);
    assert_eq!(layer(&state, a).y, 7.0);
    assert_eq!(layer(&state, b).y, 7.0);
}

#[test]
fn z_order_moves_update_paint_order() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let c = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));

    assert_eq!(state.update(Message::BringToFront(vec![a])), Event::Committed);
    let order: Vec<LayerId> = state.paint_order().iter().map(|l| l.id).collect();
    assert_eq!(order, vec![b, c, a]);

    state.update(Message::SendToBack(vec![c]));
    let order: Vec<LayerId> = state.paint_order().iter().map(|l| l.id).collect();
    assert_eq!(order, vec![c, b, a]);

    assert_eq!(state.update(Message::BringToFront(vec![a])), Event::Committed);
    assert_eq!(state.update(Message::BringToFront(vec![])), Event::None);
}

#[test]
fn z_order_moves_carry_group_members() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let c = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let g = group(&mut state, &[a, b]);

    assert_eq!(state.update(Message::BringToFront(vec![g, a])), Event::Committed);
    let order: Vec<LayerId> = state.paint_order().iter().map(|l| l.id).collect();
    assert_eq!(order, vec![c, g, a, b]);

    state.update(Message::SendToBack(vec![g]));
    let order: Vec<LayerId> = state.paint_order().iter().map(|l| l.id).collect();
    assert_eq!(order, vec![g, a, b, c]);
}

#[test]
fn paint_order_breaks_ties_by_sequence() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0).with_z_index(3));
    let b = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0).with_z_index(3));
    let c = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0).with_z_index(1));

    let order: Vec<LayerId> = state.paint_order().iter().map(|l| l.id).collect();
    assert_eq!(order, vec![c, a, b]);
}

// =============================================================================
// Viewport
// =============================================================================

#[test]
fn zoom_is_clamped_to_range() {
    let mut state = editor();

    state.update(Message::SetZoom(0.1));
    assert_abs_diff_eq!(state.viewport().zoom(), 0.25, epsilon = F64_EPSILON);

    state.update(Message::SetZoom(100.0));
    assert_abs_diff_eq!(state.viewport().zoom(), 4.0, epsilon = F64_EPSILON);

    state.update(Message::SetZoom(1.0));
    state.update(Message::ZoomIn);
    assert_relative_eq!(state.viewport().zoom(), 1.25);
    state.update(Message::ZoomOut);
    assert_relative_eq!(state.viewport().zoom(), 1.0);
}

#[test]
fn zoom_at_keeps_point_under_cursor() {
    let mut state = editor();
    let cursor = Point::new(300.0, 200.0);
    let before = state.viewport().to_canvas(cursor);

    state.update(Message::ZoomAt {
        position: cursor,
        zoom: 2.0,
    });

    let after = state.viewport().to_canvas(cursor);
    assert_abs_diff_eq!(after.x, before.x, epsilon = F64_EPSILON);
    assert_abs_diff_eq!(after.y, before.y, epsilon = F64_EPSILON);
}

// =============================================================================
// Pointer gestures
// =============================================================================

#[test]
fn clicking_empty_canvas_clears_selection() {
    let mut state = editor();
    add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));

    press(&mut state, 500.0, 500.0);
    release(&mut state, 500.0, 500.0);

    assert!(state.selection().is_empty());
}

#[test]
fn shift_click_extends_selection() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 50.0, 50.0));
    let b = add(&mut state, LayerDraft::shape(100.0, 0.0, 50.0, 50.0));
    state.update(Message::SelectLayers(vec![a]));

    state.update(Message::PointerDown {
        position: Point::new(125.0, 25.0),
        shift: true,
    });
    release(&mut state, 125.0, 25.0);

    assert_eq!(state.selection(), &[a, b]);
}

#[test]
fn clicking_a_child_selects_its_group() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 50.0, 50.0));
    let b = add(&mut state, LayerDraft::shape(100.0, 0.0, 50.0, 50.0));
    let g = group(&mut state, &[a, b]);
    state.update(Message::ClearSelection);

    press(&mut state, 25.0, 25.0);
    assert_eq!(release(&mut state, 25.0, 25.0), Event::None);

    assert_eq!(state.selection(), &[g]);
}

#[test]
fn hidden_and_locked_layers_are_not_hit() {
    let mut state = editor();
    let hidden = add(&mut state, LayerDraft::shape(0.0, 0.0, 50.0, 50.0));
    let locked = add(&mut state, LayerDraft::shape(100.0, 0.0, 50.0, 50.0));
    for (id, patch) in [
        (
            hidden,
            LayerPatch {
                hidden: Some(true),
                ..LayerPatch::default()
            },
        ),
        (
            locked,
            LayerPatch {
                locked: Some(true),
                ..LayerPatch::default()
            },
        ),
    ] {
        state.update(Message::UpdateLayer {
            id,
            patch,
            mode: UpdateMode::Commit,
        });
    }

    press(&mut state, 25.0, 25.0);
    assert!(state.selection().is_empty());
    press(&mut state, 125.0, 25.0);
    assert!(state.selection().is_empty());
}

#[test]
fn drag_snaps_to_nearby_edge_and_commits_once() {
    let mut state = editor();
    add(&mut state, LayerDraft::shape(100.0, 0.0, 50.0, 50.0));
    let moving = add(&mut state, LayerDraft::shape(300.0, 300.0, 40.0, 40.0));
    let len = state.history().len();

    press(&mut state, 320.0, 320.0);
    // Proposed left edge 102 sits 2 units from the other layer's left edge.
    drag_to(&mut state, 122.0, 420.0);

    assert_eq!(layer(&state, moving).x, 100.0);
    assert_eq!(layer(&state, moving).y, 400.0);
    assert_eq!(state.active_guides().len(), 1);
    assert_eq!(state.history().len(), len);

    assert_eq!(release(&mut state, 122.0, 420.0), Event::Committed);
    assert_eq!(state.history().len(), len + 1);
    assert!(state.active_guides().is_empty());

    state.update(Message::Undo);
    assert_eq!(layer(&state, moving).bounds(), Rect::new(300.0, 300.0, 340.0, 340.0));
}

#[test]
fn drag_without_snapping_follows_pointer() {
    let config = Config {
        snap_enabled: Some(false),
        ..Config::default()
    };
    let mut state = State::new(EditorSettings::from_config(&config));
    add(&mut state, LayerDraft::shape(100.0, 0.0, 50.0, 50.0));
    let moving = add(&mut state, LayerDraft::shape(300.0, 300.0, 40.0, 40.0));

    press(&mut state, 320.0, 320.0);
    release(&mut state, 122.0, 420.0);

    assert_eq!(layer(&state, moving).x, 102.0);
}

#[test]
fn drag_is_measured_in_canvas_units() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::shape(0.0, 0.0, 100.0, 100.0));
    state.update(Message::SetZoom(2.0));

    press(&mut state, 100.0, 100.0);
    release(&mut state, 160.0, 100.0);

    assert_eq!(layer(&state, id).x, 30.0);
}

#[test]
fn tool_switch_mid_drag_discards_the_drag() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::shape(0.0, 0.0, 100.0, 100.0));
    let before = state.layers().to_vec();
    let len = state.history().len();

    press(&mut state, 50.0, 50.0);
    drag_to(&mut state, 250.0, 250.0);
    assert!(state.has_pending_changes());

    state.update(Message::SetTool(Tool::Hand));

    assert_eq!(state.tool(), Tool::Hand);
    assert!(state.gesture().is_none());
    assert_eq!(state.layers(), before.as_slice());
    assert_eq!(state.history().len(), len);
    assert_eq!(release(&mut state, 250.0, 250.0), Event::None);
    assert_eq!(layer(&state, id).x, 0.0);
}

#[test]
fn escape_cancels_drag_then_clears_selection() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::shape(0.0, 0.0, 100.0, 100.0));

    press(&mut state, 50.0, 50.0);
    drag_to(&mut state, 80.0, 90.0);
    key(&mut state, Key::Escape, Modifiers::NONE);

    assert_eq!(layer(&state, id).x, 0.0);
    assert_eq!(state.selection(), &[id]);

    key(&mut state, Key::Escape, Modifiers::NONE);
    assert!(state.selection().is_empty());
}

#[test]
fn resize_handle_drag_resizes_from_opposite_corner() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::shape(0.0, 0.0, 100.0, 100.0));

    press(&mut state, 100.0, 100.0);
    assert!(matches!(state.gesture(), Some(Gesture::Resize { .. })));
    drag_to(&mut state, 150.0, 120.0);
    assert_eq!(layer(&state, id).bounds(), Rect::new(0.0, 0.0, 150.0, 120.0));

    assert_eq!(release(&mut state, 150.0, 120.0), Event::Committed);
}

#[test]
fn resize_never_collapses_the_layer() {
    let mut state = editor();
    let id = add(&mut state, LayerDraft::shape(0.0, 0.0, 100.0, 100.0));

    press(&mut state, 100.0, 100.0);
    release(&mut state, -50.0, -50.0);

    let resized = layer(&state, id);
    assert_eq!(resized.bounds(), Rect::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn resize_snaps_the_dragged_edge() {
    let mut state = editor();
    add(&mut state, LayerDraft::shape(200.0, 0.0, 50.0, 50.0));
    let id = add(&mut state, LayerDraft::shape(0.0, 300.0, 100.0, 100.0));

    press(&mut state, 100.0, 350.0);
    drag_to(&mut state, 197.0, 350.0);

    assert_eq!(layer(&state, id).bounds(), Rect::new(0.0, 300.0, 200.0, 400.0));
    assert_eq!(state.active_guides().len(), 1);
    assert_eq!(release(&mut state, 197.0, 350.0), Event::Committed);
    assert!(state.active_guides().is_empty());
}

#[test]
fn click_with_creation_tool_uses_default_size() {
    let mut state = editor();
    state.update(Message::SetTool(Tool::Shape));

    press(&mut state, 50.0, 60.0);
    let Event::LayerAdded(id) = release(&mut state, 51.0, 60.0) else {
        panic!("expected a new layer");
    };

    let created = layer(&state, id);
    assert_eq!(created.kind(), LayerKind::Shape);
    assert_eq!(created.bounds(), Rect::new(50.0, 60.0, 250.0, 180.0));
    assert_eq!(state.selection(), &[id]);
}

#[test]
fn drag_with_creation_tool_spans_the_drag() {
    let mut state = editor();
    state.update(Message::SetTool(Tool::Text));
    state.update(Message::SetZoom(2.0));

    press(&mut state, 220.0, 120.0);
    assert_eq!(
        state.gesture().and_then(Gesture::preview_rect),
        Some(Rect::new(110.0, 60.0, 110.0, 60.0))
    );
    let Event::LayerAdded(id) = release(&mut state, 20.0, 20.0) else {
        panic!("expected a new layer");
    };

    let created = layer(&state, id);
    assert_eq!(created.kind(), LayerKind::Text);
    assert_eq!(created.bounds(), Rect::new(10.0, 10.0, 110.0, 60.0));
}

#[test]
fn hand_tool_pans_the_viewport() {
    let mut state = editor();
    state.update(Message::SetTool(Tool::Hand));

    press(&mut state, 100.0, 100.0);
    drag_to(&mut state, 150.0, 80.0);
    assert_eq!(state.viewport().pan(), Vec2::new(50.0, -20.0));
    assert_eq!(release(&mut state, 150.0, 80.0), Event::None);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn escape_during_pan_restores_the_viewport() {
    let mut state = editor();
    state.update(Message::SetTool(Tool::Hand));

    press(&mut state, 100.0, 100.0);
    drag_to(&mut state, 300.0, 300.0);
    key(&mut state, Key::Escape, Modifiers::NONE);

    assert_eq!(state.viewport().pan(), Vec2::ZERO);
}

// =============================================================================
// Shortcuts
// =============================================================================

#[test]
fn keyboard_shortcuts_drive_the_editor() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));

    key(&mut state, Key::Character('a'), Modifiers::CTRL);
    assert_eq!(state.selection(), &[a, b]);

    assert!(matches!(
        key(&mut state, Key::Character('g'), Modifiers::CTRL),
        Event::GroupCreated(_)
    ));
    assert_eq!(
        key(&mut state, Key::Character('g'), Modifiers::CTRL_SHIFT),
        Event::Committed
    );
    assert_eq!(state.selection(), &[a, b]);

    key(&mut state, Key::ArrowRight, Modifiers::SHIFT);
    assert_eq!(layer(&state, a).x, 10.0);
    key(&mut state, Key::ArrowDown, Modifiers::NONE);
    assert_eq!(layer(&state, b).y, 1.0);

    key(&mut state, Key::Delete, Modifiers::NONE);
    assert!(state.layers().is_empty());

    assert!(matches!(
        key(&mut state, Key::Character('z'), Modifiers::CTRL),
        Event::HistoryMoved(_)
    ));
    assert_eq!(state.layers().len(), 2);
    key(&mut state, Key::Character('y'), Modifiers::CTRL);
    assert!(state.layers().is_empty());
}

#[test]
fn ctrl_d_duplicates_selection() {
    let mut state = editor();
    add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));

    assert!(matches!(
        key(&mut state, Key::Character('d'), Modifiers::CTRL),
        Event::LayersDuplicated(_)
    ));
    assert_eq!(state.layers().len(), 2);
}

#[test]
fn shortcuts_with_empty_selection_do_nothing() {
    let mut state = editor();
    add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    state.update(Message::ClearSelection);
    let len = state.history().len();

    assert_eq!(key(&mut state, Key::Delete, Modifiers::NONE), Event::None);
    assert_eq!(key(&mut state, Key::Character('d'), Modifiers::CTRL), Event::None);
    assert_eq!(key(&mut state, Key::ArrowLeft, Modifiers::NONE), Event::None);
    assert_eq!(key(&mut state, Key::Character('q'), Modifiers::NONE), Event::None);
    assert_eq!(state.history().len(), len);
}

// =============================================================================
// Projects
// =============================================================================

#[test]
fn project_round_trip_restores_session() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let b = add(&mut state, LayerDraft::shape(20.0, 0.0, 10.0, 10.0));
    group(&mut state, &[a, b]);
    state.update(Message::SetZoom(2.0));
    state.update(Message::SetPan(Vec2::new(15.0, -5.0)));

    let project = state.to_project();
    let restored = State::from_project(project, EditorSettings::default()).expect("valid project");

    assert_eq!(restored.layers(), state.layers());
    assert_abs_diff_eq!(restored.viewport().zoom(), 2.0, epsilon = F64_EPSILON);
    assert_eq!(restored.viewport().pan(), Vec2::new(15.0, -5.0));
    assert_eq!(restored.history().len(), 1);
    assert!(!restored.can_undo());
    assert!(restored.selection().is_empty());
}

#[test]
fn invalid_project_is_rejected() {
    let mut state = editor();
    let a = add(&mut state, LayerDraft::shape(0.0, 0.0, 10.0, 10.0));
    let mut project = state.to_project();
    let missing = LayerId::new();
    project.layers[0].group_id = Some(missing);

    let result = State::from_project(project, EditorSettings::default());

    assert!(matches!(
        result,
        Err(Error::Project(ProjectError::MissingParent { layer, parent }))
            if layer == a && parent == missing
    ));
}

#[test]
fn project_default_is_empty_and_valid() {
    let state = State::from_project(Project::default(), EditorSettings::default()).expect("empty project");
    assert!(state.layers().is_empty());
}
