use crate::io::project_io::ProjectError;
use crate::model::catalog::Catalog;
use crate::model::group::{GroupId, TaskGroup};
use crate::model::task_type::{TaskType, TypeId};
use crate::ops::catalog_ops::{self, CatalogError};
use crate::ops::form::{GroupForm, TypeForm};

/// Error type for persistence hooks
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("{0} is not supported by this backend")]
    Unsupported(&'static str),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("storage error: {0}")]
    Storage(#[from] ProjectError),
}

/// Host-supplied persistence. The shell invokes these hooks and never
/// implements them itself.
///
/// Group hooks are optional; backends that don't manage groups keep the
/// defaults.
pub trait Persistence {
    fn create_type(&mut self, form: &TypeForm) -> Result<(), PersistError>;

    fn update_type(&mut self, id: TypeId, form: &TypeForm) -> Result<(), PersistError>;

    fn delete_type(&mut self, id: TypeId) -> Result<(), PersistError>;

    /// Store a full reordered layout
    fn reorder(&mut self, groups: &[TaskGroup], types: &[TaskType]) -> Result<(), PersistError>;

    fn create_group(&mut self, _form: &GroupForm) -> Result<(), PersistError> {
        Err(PersistError::Unsupported("creating groups"))
    }

    fn update_group(&mut self, _id: GroupId, _form: &GroupForm) -> Result<(), PersistError> {
        Err(PersistError::Unsupported("editing groups"))
    }

    fn delete_group(&mut self, _id: GroupId) -> Result<(), PersistError> {
        Err(PersistError::Unsupported("deleting groups"))
    }
}

/// Persistence kept in memory. Useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub catalog: Catalog,
}

impl MemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        MemoryStore { catalog }
    }
}

impl Persistence for MemoryStore {
    fn create_type(&mut self, form: &TypeForm) -> Result<(), PersistError> {
        catalog_ops::add_type(&mut self.catalog, form)?;
        Ok(())
    }

    fn update_type(&mut self, id: TypeId, form: &TypeForm) -> Result<(), PersistError> {
        catalog_ops::edit_type(&mut self.catalog, id, form)?;
        Ok(())
    }

    fn delete_type(&mut self, id: TypeId) -> Result<(), PersistError> {
        catalog_ops::remove_type(&mut self.catalog, id)?;
        Ok(())
    }

    fn reorder(&mut self, groups: &[TaskGroup], types: &[TaskType]) -> Result<(), PersistError> {
        catalog_ops::apply_reorder(&mut self.catalog, groups, types)?;
        Ok(())
    }

    fn create_group(&mut self, form: &GroupForm) -> Result<(), PersistError> {
        catalog_ops::add_group(&mut self.catalog, form)?;
        Ok(())
    }

    fn update_group(&mut self, id: GroupId, form: &GroupForm) -> Result<(), PersistError> {
        catalog_ops::edit_group(&mut self.catalog, id, form)?;
        Ok(())
    }

    fn delete_group(&mut self, id: GroupId) -> Result<(), PersistError> {
        catalog_ops::remove_group(&mut self.catalog, id)?;
        Ok(())
    }
}
