use indexmap::IndexMap;

use crate::model::group::{GroupId, TaskGroup};
use crate::model::task_type::{Container, TaskType, TypeId};

/// Anything carrying a zero-based sibling position
pub trait Ordered {
    fn order(&self) -> usize;
    fn set_order(&mut self, order: usize);
}

impl Ordered for TaskGroup {
    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

impl Ordered for TaskType {
    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

/// Stable sort by `order`: equal values keep their input position.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| item.order());
}

/// Rewrite `order` to each entry's index.
pub fn renumber<T: Ordered>(items: &mut [T]) {
    for (idx, item) in items.iter_mut().enumerate() {
        item.set_order(idx);
    }
}

/// True when the `order` values are exactly `0..len` in some permutation.
pub fn is_contiguous<T: Ordered>(items: &[T]) -> bool {
    let mut orders: Vec<usize> = items.iter().map(Ordered::order).collect();
    orders.sort_unstable();
    orders.iter().enumerate().all(|(idx, &order)| idx == order)
}

/// Groups in display order.
pub fn sorted_groups(groups: &[TaskGroup]) -> Vec<TaskGroup> {
    let mut sorted = groups.to_vec();
    sort_by_order(&mut sorted);
    sorted
}

/// Task types partitioned by container, each partition in display order.
///
/// Keys appear in the order their first type appears in `types`. The
/// ungrouped partition is the `None` key.
pub fn types_by_container(types: &[TaskType]) -> IndexMap<Container, Vec<TaskType>> {
    let mut by_container: IndexMap<Container, Vec<TaskType>> = IndexMap::new();
    for t in types {
        by_container.entry(t.group_id).or_default().push(t.clone());
    }
    for list in by_container.values_mut() {
        sort_by_order(list);
    }
    by_container
}

/// The types of one container, in display order.
pub fn container_types(types: &[TaskType], container: Container) -> Vec<TaskType> {
    let mut list: Vec<TaskType> = types
        .iter()
        .filter(|t| t.group_id == container)
        .cloned()
        .collect();
    sort_by_order(&mut list);
    list
}

/// Container and display index of a task type.
pub fn locate_type(types: &[TaskType], id: TypeId) -> Option<(Container, usize)> {
    let container = types.iter().find(|t| t.id == id)?.group_id;
    container_types(types, container)
        .iter()
        .position(|t| t.id == id)
        .map(|idx| (container, idx))
}

/// Display index of a group.
pub fn locate_group(groups: &[TaskGroup], id: GroupId) -> Option<usize> {
    sorted_groups(groups).iter().position(|g| g.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    fn tt(id: u64, group: Option<u64>, order: usize) -> TaskType {
        TaskType {
            id: TypeId(id),
            name: format!("type {}", id),
            color: Color::parse("#3788D8").unwrap(),
            description: None,
            group_id: group.map(GroupId),
            order,
        }
    }

    fn ids(list: &[TaskType]) -> Vec<u64> {
        list.iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn test_types_by_container_sorts_each_partition() {
        let types = vec![tt(1, Some(1), 1), tt(2, None, 0), tt(3, Some(1), 0), tt(4, Some(2), 0)];
        let by = types_by_container(&types);
        assert_eq!(by.len(), 3);
        assert_eq!(ids(&by[&Some(GroupId(1))]), vec![3, 1]);
        assert_eq!(ids(&by[&None]), vec![2]);
        assert_eq!(ids(&by[&Some(GroupId(2))]), vec![4]);
    }

    #[test]
    fn test_ungrouped_is_its_own_key() {
        let types = vec![tt(1, None, 0), tt(2, Some(0), 0)];
        let by = types_by_container(&types);
        assert_eq!(ids(&by[&None]), vec![1]);
        assert_eq!(ids(&by[&Some(GroupId(0))]), vec![2]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let types = vec![tt(7, None, 1), tt(8, None, 0), tt(9, None, 1)];
        assert_eq!(ids(&container_types(&types, None)), vec![8, 7, 9]);
    }

    #[test]
    fn test_locate_type() {
        let types = vec![tt(1, Some(1), 1), tt(2, Some(1), 0), tt(3, None, 0)];
        assert_eq!(locate_type(&types, TypeId(1)), Some((Some(GroupId(1)), 1)));
        assert_eq!(locate_type(&types, TypeId(3)), Some((None, 0)));
        assert_eq!(locate_type(&types, TypeId(99)), None);
    }

    #[test]
    fn test_is_contiguous() {
        assert!(is_contiguous(&[tt(1, None, 1), tt(2, None, 0)]));
        assert!(!is_contiguous(&[tt(1, None, 0), tt(2, None, 2)]));
        assert!(!is_contiguous(&[tt(1, None, 0), tt(2, None, 0)]));
        assert!(is_contiguous::<TaskType>(&[]));
    }
}
