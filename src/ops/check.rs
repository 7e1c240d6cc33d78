use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::grouping::{is_contiguous, types_by_container};
use crate::model::catalog::Catalog;
use crate::model::group::GroupId;
use crate::model::task_type::{TypeId, container_label};

/// Structured result from `tb check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A validation error (an ordering or reference invariant is broken).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// Two task types share an ID
    #[serde(rename = "duplicate_type_id")]
    DuplicateTypeId { type_id: TypeId },
    /// Two groups share an ID
    #[serde(rename = "duplicate_group_id")]
    DuplicateGroupId { group_id: GroupId },
    /// A task type points at a group that doesn't exist
    #[serde(rename = "dangling_group")]
    DanglingGroup { type_id: TypeId, group_id: GroupId },
    /// `order` values of a sibling set are not exactly 0..n
    #[serde(rename = "order_gap")]
    OrderGap {
        container: String,
        orders: Vec<usize>,
    },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::DuplicateTypeId { type_id } => {
                write!(f, "task type ID {} is used more than once", type_id)
            }
            CheckError::DuplicateGroupId { group_id } => {
                write!(f, "group ID {} is used more than once", group_id)
            }
            CheckError::DanglingGroup { type_id, group_id } => {
                write!(f, "type {} references missing group {}", type_id, group_id)
            }
            CheckError::OrderGap { container, orders } => {
                let list: Vec<String> = orders.iter().map(|o| o.to_string()).collect();
                write!(f, "{} has non-contiguous order: [{}]", container, list.join(", "))
            }
        }
    }
}

/// A validation warning (non-critical issue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    #[serde(rename = "empty_type_name")]
    EmptyTypeName { type_id: TypeId },
    #[serde(rename = "empty_group_name")]
    EmptyGroupName { group_id: GroupId },
}

impl fmt::Display for CheckWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckWarning::EmptyTypeName { type_id } => write!(f, "type {} has no name", type_id),
            CheckWarning::EmptyGroupName { group_id } => {
                write!(f, "group {} has no name", group_id)
            }
        }
    }
}

/// Validate a catalog. Read-only.
///
/// Checks performed:
/// 1. No duplicate type or group IDs
/// 2. Every group reference resolves
/// 3. Group `order` values, and each container's type `order` values, are contiguous from 0
/// 4. Warnings for blank names
pub fn check_catalog(catalog: &Catalog) -> CheckResult {
    let mut result = CheckResult::default();

    let mut seen_types = HashSet::new();
    for t in &catalog.types {
        if !seen_types.insert(t.id) {
            result
                .errors
                .push(CheckError::DuplicateTypeId { type_id: t.id });
        }
    }

    let mut seen_groups = HashSet::new();
    for g in &catalog.groups {
        if !seen_groups.insert(g.id) {
            result
                .errors
                .push(CheckError::DuplicateGroupId { group_id: g.id });
        }
    }

    for t in &catalog.types {
        if let Some(group_id) = t.group_id
            && !seen_groups.contains(&group_id)
        {
            result.errors.push(CheckError::DanglingGroup {
                type_id: t.id,
                group_id,
            });
        }
    }

    if !is_contiguous(&catalog.groups) {
        result.errors.push(CheckError::OrderGap {
            container: "groups".to_string(),
            orders: sorted_orders(catalog.groups.iter().map(|g| g.order)),
        });
    }

    for (container, list) in types_by_container(&catalog.types) {
        if !is_contiguous(&list) {
            result.errors.push(CheckError::OrderGap {
                container: container_label(container),
                orders: sorted_orders(list.iter().map(|t| t.order)),
            });
        }
    }

    for t in &catalog.types {
        if t.name.trim().is_empty() {
            result
                .warnings
                .push(CheckWarning::EmptyTypeName { type_id: t.id });
        }
    }
    for g in &catalog.groups {
        if g.name.trim().is_empty() {
            result
                .warnings
                .push(CheckWarning::EmptyGroupName { group_id: g.id });
        }
    }

    result.valid = result.errors.is_empty();
    result
}

fn sorted_orders(orders: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut list: Vec<usize> = orders.collect();
    list.sort_unstable();
    list
}
