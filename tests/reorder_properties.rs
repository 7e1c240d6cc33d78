//! Ordering guarantees of `compute_reorder`, checked over every move a
//! small board allows.

use pretty_assertions::assert_eq;

use typeboard::model::{Color, GroupId, TaskGroup, TaskType, TypeId};
use typeboard::ops::grouping::{container_types, is_contiguous, sorted_groups, types_by_container};
use typeboard::ops::reorder::{MoveEvent, ReorderError, compute_reorder};

fn group(id: u64, name: &str, order: usize) -> TaskGroup {
    TaskGroup {
        id: GroupId(id),
        name: name.to_string(),
        color: None,
        order,
    }
}

fn task_type(id: u64, name: &str, group: Option<u64>, order: usize) -> TaskType {
    TaskType {
        id: TypeId(id),
        name: name.to_string(),
        color: Color::parse("#3788D8").unwrap(),
        description: None,
        group_id: group.map(GroupId),
        order,
    }
}

/// G1 = [A, B, C], G2 = [D, E], ungrouped = [F], G3 empty.
/// Input sequence is deliberately not sorted by order.
fn board() -> (Vec<TaskGroup>, Vec<TaskType>) {
    let groups = vec![group(2, "G2", 1), group(1, "G1", 0), group(3, "G3", 2)];
    let types = vec![
        task_type(3, "C", Some(1), 2),
        task_type(1, "A", Some(1), 0),
        task_type(4, "D", Some(2), 0),
        task_type(6, "F", None, 0),
        task_type(2, "B", Some(1), 1),
        task_type(5, "E", Some(2), 1),
    ];
    (groups, types)
}

fn containers() -> Vec<Option<GroupId>> {
    vec![Some(GroupId(1)), Some(GroupId(2)), Some(GroupId(3)), None]
}

/// Every item move the board accepts
fn valid_item_moves(types: &[TaskType]) -> Vec<MoveEvent> {
    let mut events = Vec::new();
    for source in containers() {
        let source_len = container_types(types, source).len();
        for destination in containers() {
            let dest_len = container_types(types, destination).len();
            let max_to = if source == destination {
                dest_len
            } else {
                dest_len + 1
            };
            for from in 0..source_len {
                for to in 0..max_to {
                    events.push(MoveEvent::Item {
                        source,
                        destination,
                        from,
                        to,
                    });
                }
            }
        }
    }
    events
}

fn names(types: &[TaskType]) -> Vec<&str> {
    types.iter().map(|t| t.name.as_str()).collect()
}

fn sorted_names(types: &[TaskType], container: Option<u64>) -> Vec<String> {
    container_types(types, container.map(GroupId))
        .into_iter()
        .map(|t| t.name)
        .collect()
}

#[test]
fn group_moves_keep_groups_contiguous() {
    let (groups, types) = board();
    for from in 0..groups.len() {
        for to in 0..groups.len() {
            let out = compute_reorder(&groups, &types, &MoveEvent::Group { from, to }).unwrap();
            assert_eq!(out.groups.len(), groups.len());
            assert!(is_contiguous(&out.groups), "group move {} -> {}", from, to);
            assert_eq!(out.types, types);
        }
    }
}

#[test]
fn item_moves_keep_every_container_contiguous() {
    let (groups, types) = board();
    for event in valid_item_moves(&types) {
        let out = compute_reorder(&groups, &types, &event).unwrap();
        assert_eq!(out.types.len(), types.len(), "{:?}", event);
        for (container, siblings) in types_by_container(&out.types) {
            assert!(
                is_contiguous(&siblings),
                "{:?} left {:?} non-contiguous",
                event,
                container
            );
        }
    }
}

#[test]
fn noop_returns_input() {
    let (groups, types) = board();
    let events = [
        MoveEvent::Group { from: 1, to: 1 },
        MoveEvent::Item {
            source: Some(GroupId(1)),
            destination: Some(GroupId(1)),
            from: 2,
            to: 2,
        },
        MoveEvent::Item {
            source: None,
            destination: None,
            from: 0,
            to: 0,
        },
    ];
    for event in events {
        let out = compute_reorder(&groups, &types, &event).unwrap();
        assert_eq!(out.groups, groups);
        assert_eq!(out.types, types);
    }
}

#[test]
fn move_and_back_restores_order() {
    let (groups, types) = board();
    let container = Some(GroupId(1));
    for from in 0..3 {
        for to in 0..3 {
            let there = MoveEvent::Item {
                source: container,
                destination: container,
                from,
                to,
            };
            let back = MoveEvent::Item {
                source: container,
                destination: container,
                from: to,
                to: from,
            };
            let once = compute_reorder(&groups, &types, &there).unwrap();
            let twice = compute_reorder(&once.groups, &once.types, &back).unwrap();
            assert_eq!(sorted_names(&twice.types, Some(1)), ["A", "B", "C"]);
        }
    }

    // Across containers and back
    let there = MoveEvent::Item {
        source: Some(GroupId(1)),
        destination: None,
        from: 1,
        to: 0,
    };
    let back = MoveEvent::Item {
        source: None,
        destination: Some(GroupId(1)),
        from: 0,
        to: 1,
    };
    let once = compute_reorder(&groups, &types, &there).unwrap();
    let twice = compute_reorder(&once.groups, &once.types, &back).unwrap();
    assert_eq!(sorted_names(&twice.types, Some(1)), ["A", "B", "C"]);
    assert_eq!(sorted_names(&twice.types, None), ["F"]);
}

#[test]
fn cross_move_reassigns_exactly_one_item() {
    let (groups, types) = board();
    for event in valid_item_moves(&types) {
        let MoveEvent::Item {
            source,
            destination,
            ..
        } = event
        else {
            continue;
        };
        if source == destination {
            continue;
        }
        let out = compute_reorder(&groups, &types, &event).unwrap();
        let changed: Vec<TypeId> = types
            .iter()
            .filter(|before| {
                let after = out.types.iter().find(|t| t.id == before.id).unwrap();
                after.group_id != before.group_id
            })
            .map(|t| t.id)
            .collect();
        assert_eq!(changed.len(), 1, "{:?}", event);
    }
}

#[test]
fn move_first_to_last_within_group() {
    let groups = vec![group(1, "G1", 0)];
    let types = vec![
        task_type(1, "A", Some(1), 0),
        task_type(2, "B", Some(1), 1),
        task_type(3, "C", Some(1), 2),
    ];
    let event = MoveEvent::Item {
        source: Some(GroupId(1)),
        destination: Some(GroupId(1)),
        from: 0,
        to: 2,
    };
    let out = compute_reorder(&groups, &types, &event).unwrap();

    assert_eq!(names(&out.types), ["B", "C", "A"]);
    let orders: Vec<usize> = out.types.iter().map(|t| t.order).collect();
    assert_eq!(orders, [0, 1, 2]);
    assert!(out.types.iter().all(|t| t.group_id == Some(GroupId(1))));
}

#[test]
fn move_into_head_of_other_group() {
    let groups = vec![group(1, "G1", 0), group(2, "G2", 1)];
    let types = vec![
        task_type(1, "A", Some(1), 0),
        task_type(2, "B", Some(1), 1),
        task_type(3, "C", Some(2), 0),
        task_type(4, "D", Some(2), 1),
    ];
    let event = MoveEvent::Item {
        source: Some(GroupId(1)),
        destination: Some(GroupId(2)),
        from: 0,
        to: 0,
    };
    let out = compute_reorder(&groups, &types, &event).unwrap();

    let g1 = container_types(&out.types, Some(GroupId(1)));
    let g2 = container_types(&out.types, Some(GroupId(2)));
    assert_eq!(
        g1.iter().map(|t| (t.name.as_str(), t.order)).collect::<Vec<_>>(),
        [("B", 0)]
    );
    assert_eq!(
        g2.iter().map(|t| (t.name.as_str(), t.order)).collect::<Vec<_>>(),
        [("A", 0), ("C", 1), ("D", 2)]
    );
}

#[test]
fn invalid_source_leaves_inputs_untouched() {
    let groups = vec![group(1, "G1", 0)];
    let types = vec![task_type(1, "A", Some(1), 0), task_type(2, "B", Some(1), 1)];
    let groups_before = groups.clone();
    let types_before = types.clone();

    let event = MoveEvent::Item {
        source: Some(GroupId(1)),
        destination: Some(GroupId(1)),
        from: 5,
        to: 0,
    };
    let err = compute_reorder(&groups, &types, &event).unwrap_err();

    assert!(matches!(
        err,
        ReorderError::SourceOutOfRange {
            index: 5,
            len: 2,
            ..
        }
    ));
    assert_eq!(groups, groups_before);
    assert_eq!(types, types_before);
}

#[test]
fn unknown_group_is_invalid() {
    let (groups, types) = board();
    let event = MoveEvent::Item {
        source: Some(GroupId(1)),
        destination: Some(GroupId(42)),
        from: 0,
        to: 0,
    };
    assert_eq!(
        compute_reorder(&groups, &types, &event),
        Err(ReorderError::UnknownGroup(GroupId(42)))
    );
}

#[test]
fn ties_keep_input_sequence() {
    let groups = vec![group(1, "G1", 0), group(2, "G2", 0)];
    assert_eq!(
        sorted_groups(&groups)
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>(),
        ["G1", "G2"]
    );

    let types = vec![
        task_type(1, "A", None, 1),
        task_type(2, "B", None, 1),
        task_type(3, "C", None, 0),
    ];
    let event = MoveEvent::Item {
        source: None,
        destination: None,
        from: 0,
        to: 1,
    };
    let out = compute_reorder(&groups, &types, &event).unwrap();
    assert_eq!(names(&out.types), ["A", "C", "B"]);
}
