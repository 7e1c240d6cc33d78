use std::collections::HashSet;

use super::form::{FormError, GroupForm, TypeForm};
use super::grouping::{container_types, is_contiguous, renumber, sort_by_order};
use crate::model::catalog::Catalog;
use crate::model::group::{GroupId, TaskGroup};
use crate::model::task_type::{Container, TaskType, TypeId, container_label};

/// Error type for catalog operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("task type not found: {0}")]
    TypeNotFound(TypeId),
    #[error("group not found: {0}")]
    GroupNotFound(GroupId),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("rejected layout: {0}")]
    InvalidLayout(String),
}

// ---------------------------------------------------------------------------
// Task types
// ---------------------------------------------------------------------------

/// Add a task type at the end of its container. Returns the assigned ID.
pub fn add_type(catalog: &mut Catalog, form: &TypeForm) -> Result<TypeId, CatalogError> {
    form.validate()?;
    ensure_group(catalog, form.group_id)?;

    let id = TypeId(catalog.types.iter().map(|t| t.id.0).max().map_or(1, |max| max + 1));
    let order = container_len(&catalog.types, form.group_id);
    catalog.types.push(TaskType {
        id,
        name: form.name.trim().to_string(),
        color: form.color.clone(),
        description: form.description_value(),
        group_id: form.group_id,
        order,
    });
    Ok(id)
}

/// Update a task type's fields. Changing its group moves it to the end of
/// the new container and closes the gap it left behind.
pub fn edit_type(catalog: &mut Catalog, id: TypeId, form: &TypeForm) -> Result<(), CatalogError> {
    form.validate()?;
    ensure_group(catalog, form.group_id)?;

    let old_group = catalog
        .find_type(id)
        .ok_or(CatalogError::TypeNotFound(id))?
        .group_id;
    let regrouped = old_group != form.group_id;
    let new_order = container_len(&catalog.types, form.group_id);

    let task_type = catalog
        .find_type_mut(id)
        .ok_or(CatalogError::TypeNotFound(id))?;
    task_type.name = form.name.trim().to_string();
    task_type.color = form.color.clone();
    task_type.description = form.description_value();
    if regrouped {
        task_type.group_id = form.group_id;
        task_type.order = new_order;
        renumber_container(&mut catalog.types, old_group);
    }
    Ok(())
}

/// Remove a task type and renumber its former siblings.
pub fn remove_type(catalog: &mut Catalog, id: TypeId) -> Result<TaskType, CatalogError> {
    let idx = catalog
        .types
        .iter()
        .position(|t| t.id == id)
        .ok_or(CatalogError::TypeNotFound(id))?;
    let removed = catalog.types.remove(idx);
    renumber_container(&mut catalog.types, removed.group_id);
    Ok(removed)
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// Add a group after all existing groups. Returns the assigned ID.
pub fn add_group(catalog: &mut Catalog, form: &GroupForm) -> Result<GroupId, CatalogError> {
    form.validate()?;
    let id = GroupId(catalog.groups.iter().map(|g| g.id.0).max().map_or(1, |max| max + 1));
    catalog.groups.push(TaskGroup {
        id,
        name: form.name.trim().to_string(),
        color: form.color.clone(),
        order: catalog.groups.len(),
    });
    Ok(id)
}

pub fn edit_group(catalog: &mut Catalog, id: GroupId, form: &GroupForm) -> Result<(), CatalogError> {
    form.validate()?;
    let group = catalog
        .find_group_mut(id)
        .ok_or(CatalogError::GroupNotFound(id))?;
    group.name = form.name.trim().to_string();
    group.color = form.color.clone();
    Ok(())
}

/// Remove a group. Its task types move to the end of the ungrouped
/// container, keeping their relative order.
pub fn remove_group(catalog: &mut Catalog, id: GroupId) -> Result<TaskGroup, CatalogError> {
    let idx = catalog
        .groups
        .iter()
        .position(|g| g.id == id)
        .ok_or(CatalogError::GroupNotFound(id))?;
    let removed = catalog.groups.remove(idx);
    sort_by_order(&mut catalog.groups);
    renumber(&mut catalog.groups);

    let base = container_len(&catalog.types, None);
    let mut orphans = container_indices(&catalog.types, Some(id));
    orphans.sort_by_key(|&i| catalog.types[i].order);
    for (offset, i) in orphans.into_iter().enumerate() {
        catalog.types[i].group_id = None;
        catalog.types[i].order = base + offset;
    }
    Ok(removed)
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

/// Replace both lists with a reordered layout.
///
/// The new lists must hold exactly the same groups and types. Every sibling
/// set whose contents or positions changed must be contiguous, and moved
/// types must point at existing groups. Sets the layout leaves alone are
/// accepted as they are, ties included. On error the catalog is left as it
/// was.
pub fn apply_reorder(
    catalog: &mut Catalog,
    groups: &[TaskGroup],
    types: &[TaskType],
) -> Result<(), CatalogError> {
    let old_types: HashSet<TypeId> = catalog.types.iter().map(|t| t.id).collect();
    let new_types: HashSet<TypeId> = types.iter().map(|t| t.id).collect();
    let old_groups: HashSet<GroupId> = catalog.groups.iter().map(|g| g.id).collect();
    let new_groups: HashSet<GroupId> = groups.iter().map(|g| g.id).collect();
    if old_types != new_types
        || old_groups != new_groups
        || types.len() != catalog.types.len()
        || groups.len() != catalog.groups.len()
    {
        return Err(CatalogError::InvalidLayout(
            "a reorder may not add or remove groups or types".into(),
        ));
    }

    let groups_moved = groups.iter().any(|g| {
        catalog
            .find_group(g.id)
            .map_or(true, |old| old.order != g.order)
    });
    if groups_moved && !is_contiguous(groups) {
        return Err(CatalogError::InvalidLayout(
            "groups have non-contiguous order".into(),
        ));
    }

    let mut touched: Vec<Container> = Vec::new();
    for t in types {
        if let Some(old) = catalog.find_type(t.id)
            && (old.group_id != t.group_id || old.order != t.order)
        {
            for container in [old.group_id, t.group_id] {
                if !touched.contains(&container) {
                    touched.push(container);
                }
            }
        }
    }
    for container in touched {
        if let Some(id) = container
            && !new_groups.contains(&id)
        {
            return Err(CatalogError::GroupNotFound(id));
        }
        if !is_contiguous(&container_types(types, container)) {
            return Err(CatalogError::InvalidLayout(format!(
                "{} has non-contiguous order",
                container_label(container)
            )));
        }
    }

    *catalog = Catalog::new(groups.to_vec(), types.to_vec());
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ensure_group(catalog: &Catalog, container: Container) -> Result<(), CatalogError> {
    match container {
        Some(id) if !catalog.has_group(id) => Err(CatalogError::GroupNotFound(id)),
        _ => Ok(()),
    }
}

fn container_len(types: &[TaskType], container: Container) -> usize {
    types.iter().filter(|t| t.group_id == container).count()
}

fn container_indices(types: &[TaskType], container: Container) -> Vec<usize> {
    types
        .iter()
        .enumerate()
        .filter(|(_, t)| t.group_id == container)
        .map(|(i, _)| i)
        .collect()
}

/// Close gaps in one container's `order`, keeping the current relative order.
fn renumber_container(types: &mut [TaskType], container: Container) {
    let mut indices = container_indices(types, container);
    indices.sort_by_key(|&i| types[i].order);
    for (order, i) in indices.into_iter().enumerate() {
        types[i].order = order;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
