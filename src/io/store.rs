use std::path::{Path, PathBuf};

use crate::io::project_io::{self, ProjectError};
use crate::model::catalog::Catalog;
use crate::model::group::{GroupId, TaskGroup};
use crate::model::task_type::{TaskType, TypeId};
use crate::ops::catalog_ops;
use crate::ops::form::{GroupForm, TypeForm};
use crate::shell::persistence::{PersistError, Persistence};

/// Persistence backed by `.typeboard/catalog.toml`.
///
/// Every hook works on a copy of the catalog and writes it atomically; the
/// in-memory catalog only changes once the write has succeeded.
#[derive(Debug)]
pub struct FileStore {
    board_dir: PathBuf,
    catalog: Catalog,
    last_type: Option<TypeId>,
    last_group: Option<GroupId>,
}

impl FileStore {
    pub fn open(board_dir: &Path) -> Result<Self, ProjectError> {
        let catalog = project_io::read_catalog(board_dir)?;
        Ok(Self::new(board_dir, catalog))
    }

    pub fn new(board_dir: &Path, catalog: Catalog) -> Self {
        FileStore {
            board_dir: board_dir.to_path_buf(),
            catalog,
            last_type: None,
            last_group: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// ID assigned by the most recent `create_type`
    pub fn last_created_type(&self) -> Option<TypeId> {
        self.last_type
    }

    /// ID assigned by the most recent `create_group`
    pub fn last_created_group(&self) -> Option<GroupId> {
        self.last_group
    }

    fn commit(&mut self, next: Catalog) -> Result<(), PersistError> {
        project_io::save_catalog(&self.board_dir, &next)?;
        self.catalog = next;
        Ok(())
    }
}

impl Persistence for FileStore {
    fn create_type(&mut self, form: &TypeForm) -> Result<(), PersistError> {
        let mut next = self.catalog.clone();
        let id = catalog_ops::add_type(&mut next, form)?;
        self.commit(next)?;
        self.last_type = Some(id);
        Ok(())
    }

    fn update_type(&mut self, id: TypeId, form: &TypeForm) -> Result<(), PersistError> {
        let mut next = self.catalog.clone();
        catalog_ops::edit_type(&mut next, id, form)?;
        self.commit(next)
    }

    fn delete_type(&mut self, id: TypeId) -> Result<(), PersistError> {
        let mut next = self.catalog.clone();
        catalog_ops::remove_type(&mut next, id)?;
        self.commit(next)
    }

    fn reorder(&mut self, groups: &[TaskGroup], types: &[TaskType]) -> Result<(), PersistError> {
        let mut next = self.catalog.clone();
        catalog_ops::apply_reorder(&mut next, groups, types)?;
        self.commit(next)
    }

    fn create_group(&mut self, form: &GroupForm) -> Result<(), PersistError> {
        let mut next = self.catalog.clone();
        let id = catalog_ops::add_group(&mut next, form)?;
        self.commit(next)?;
        self.last_group = Some(id);
        Ok(())
    }

    fn update_group(&mut self, id: GroupId, form: &GroupForm) -> Result<(), PersistError> {
        let mut next = self.catalog.clone();
        catalog_ops::edit_group(&mut next, id, form)?;
        self.commit(next)
    }

    fn delete_group(&mut self, id: GroupId) -> Result<(), PersistError> {
        let mut next = self.catalog.clone();
        catalog_ops::remove_group(&mut next, id)?;
        self.commit(next)
    }
}
