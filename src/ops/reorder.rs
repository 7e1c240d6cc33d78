//! Reordering of groups and task types after a drag-and-drop move.
//!
//! Everything here is pure: the inputs are borrowed, the result is a fresh
//! pair of lists with `order` renumbered for every sibling set the move
//! touched. Persisting the result is the caller's job.

use serde::{Deserialize, Serialize};

use super::grouping::{container_types, renumber, sorted_groups};
use crate::model::group::{GroupId, TaskGroup};
use crate::model::task_type::{Container, TaskType, container_label};

/// A completed drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveEvent {
    /// A whole group dragged to a new position among groups
    Group { from: usize, to: usize },
    /// A task type dragged within or across containers
    Item {
        source: Container,
        destination: Container,
        from: usize,
        to: usize,
    },
}

impl MoveEvent {
    /// Dropped where it started: same container, same index.
    pub fn is_noop(&self) -> bool {
        match *self {
            MoveEvent::Group { from, to } => from == to,
            MoveEvent::Item {
                source,
                destination,
                from,
                to,
            } => source == destination && from == to,
        }
    }
}

/// Lists produced by a move, ready to hand to persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    pub groups: Vec<TaskGroup>,
    pub types: Vec<TaskType>,
}

/// Error type for reorder computation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("invalid move: source index {index} out of range for {container} ({len} entries)")]
    SourceOutOfRange {
        container: String,
        index: usize,
        len: usize,
    },
    #[error("invalid move: destination index {index} out of range for {container} (max {max})")]
    DestinationOutOfRange {
        container: String,
        index: usize,
        max: usize,
    },
    #[error("invalid move: unknown group {0}")]
    UnknownGroup(GroupId),
}

/// Apply `event` to the full group and type collections.
///
/// The event's groups and source index are checked first; a valid no-op
/// event then returns the inputs unchanged. On error nothing is produced
/// and the inputs are untouched.
pub fn compute_reorder(
    groups: &[TaskGroup],
    types: &[TaskType],
    event: &MoveEvent,
) -> Result<Reordered, ReorderError> {
    ensure_source(groups, types, event)?;
    if event.is_noop() {
        return Ok(Reordered {
            groups: groups.to_vec(),
            types: types.to_vec(),
        });
    }

    match *event {
        MoveEvent::Group { from, to } => Ok(Reordered {
            groups: move_group(groups, from, to)?,
            types: types.to_vec(),
        }),
        MoveEvent::Item {
            source,
            destination,
            from,
            to,
        } => {
            let types = if source == destination {
                move_within(types, source, from, to)?
            } else {
                move_across(types, source, destination, from, to)?
            };
            Ok(Reordered {
                groups: groups.to_vec(),
                types,
            })
        }
    }
}

/// Containers must exist and `from` must name an entry of the source.
fn ensure_source(
    groups: &[TaskGroup],
    types: &[TaskType],
    event: &MoveEvent,
) -> Result<(), ReorderError> {
    let (container, from, len) = match *event {
        MoveEvent::Group { from, .. } => ("groups".to_string(), from, groups.len()),
        MoveEvent::Item {
            source,
            destination,
            from,
            ..
        } => {
            ensure_container(groups, source)?;
            ensure_container(groups, destination)?;
            let len = types.iter().filter(|t| t.group_id == source).count();
            (container_label(source), from, len)
        }
    };
    if from >= len {
        return Err(ReorderError::SourceOutOfRange {
            container,
            index: from,
            len,
        });
    }
    Ok(())
}

fn ensure_container(groups: &[TaskGroup], container: Container) -> Result<(), ReorderError> {
    match container {
        Some(id) if !groups.iter().any(|g| g.id == id) => Err(ReorderError::UnknownGroup(id)),
        _ => Ok(()),
    }
}

fn move_group(groups: &[TaskGroup], from: usize, to: usize) -> Result<Vec<TaskGroup>, ReorderError> {
    let mut sorted = sorted_groups(groups);
    // `from` is in range, so len >= 1; after removal the group lands in 0..len.
    if to >= sorted.len() {
        return Err(ReorderError::DestinationOutOfRange {
            container: "groups".into(),
            index: to,
            max: sorted.len() - 1,
        });
    }

    let moved = sorted.remove(from);
    sorted.insert(to, moved);
    renumber(&mut sorted);
    Ok(sorted)
}

fn move_within(
    types: &[TaskType],
    container: Container,
    from: usize,
    to: usize,
) -> Result<Vec<TaskType>, ReorderError> {
    let mut siblings = container_types(types, container);
    if to >= siblings.len() {
        return Err(ReorderError::DestinationOutOfRange {
            container: container_label(container),
            index: to,
            max: siblings.len() - 1,
        });
    }

    let moved = siblings.remove(from);
    siblings.insert(to, moved);
    renumber(&mut siblings);

    let mut result: Vec<TaskType> = types
        .iter()
        .filter(|t| t.group_id != container)
        .cloned()
        .collect();
    result.extend(siblings);
    Ok(result)
}

fn move_across(
    types: &[TaskType],
    source: Container,
    destination: Container,
    from: usize,
    to: usize,
) -> Result<Vec<TaskType>, ReorderError> {
    let mut source_types = container_types(types, source);
    let mut dest_types = container_types(types, destination);
    // Appending after the last entry is allowed.
    if to > dest_types.len() {
        return Err(ReorderError::DestinationOutOfRange {
            container: container_label(destination),
            index: to,
            max: dest_types.len(),
        });
    }

    let mut moved = source_types.remove(from);
    moved.group_id = destination;
    dest_types.insert(to, moved);
    renumber(&mut source_types);
    renumber(&mut dest_types);

    let mut result: Vec<TaskType> = types
        .iter()
        .filter(|t| t.group_id != source && t.group_id != destination)
        .cloned()
        .collect();
    result.extend(source_types);
    result.extend(dest_types);
    Ok(result)
}
