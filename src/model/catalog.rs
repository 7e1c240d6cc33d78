use serde::{Deserialize, Serialize};

use super::group::{GroupId, TaskGroup};
use super::task_type::{TaskType, TypeId};

/// Every group and task type known to a board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub groups: Vec<TaskGroup>,
    #[serde(default)]
    pub types: Vec<TaskType>,
}

impl Catalog {
    pub fn new(groups: Vec<TaskGroup>, types: Vec<TaskType>) -> Self {
        Catalog { groups, types }
    }

    pub fn find_type(&self, id: TypeId) -> Option<&TaskType> {
        self.types.iter().find(|t| t.id == id)
    }

    pub fn find_type_mut(&mut self, id: TypeId) -> Option<&mut TaskType> {
        self.types.iter_mut().find(|t| t.id == id)
    }

    pub fn find_group(&self, id: GroupId) -> Option<&TaskGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn find_group_mut(&mut self, id: GroupId) -> Option<&mut TaskGroup> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    pub fn has_group(&self, id: GroupId) -> bool {
        self.find_group(id).is_some()
    }
}
