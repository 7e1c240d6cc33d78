use serde::Serialize;

use super::dialog::{GroupDialog, TypeDialog};
use super::persistence::{PersistError, Persistence};
use crate::model::catalog::Catalog;
use crate::model::color::Color;
use crate::model::config::{BoardConfig, UiText, UpdateMode};
use crate::model::group::{GroupId, TaskGroup};
use crate::model::task_type::{Container, TaskType, TypeId};
use crate::ops::form::FormError;
use crate::ops::grouping::{container_types, sorted_groups};
use crate::ops::reorder::{MoveEvent, ReorderError, compute_reorder};

/// Error type for shell actions
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Reorder(#[from] ReorderError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("persistence failed: {0}")]
    Persist(#[from] PersistError),
    #[error("dialog is not open")]
    DialogClosed,
}

/// Result of a completed drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dropped where it started; nothing was persisted
    Ignored,
    /// Persisted; `applied` tells whether the displayed lists changed
    Persisted { applied: bool },
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// One rendered block of the manager: a group, or the ungrouped tail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub container: Container,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub types: Vec<TaskType>,
}

/// The task type manager: displayed lists plus the host's persistence.
///
/// Create/update/delete never touch the displayed lists; the host pushes
/// fresh lists with [`Manager::replace`] once its data changes. Reorders
/// follow the configured [`UpdateMode`].
pub struct Manager<P> {
    groups: Vec<TaskGroup>,
    types: Vec<TaskType>,
    config: BoardConfig,
    persistence: P,
}

impl<P: Persistence> Manager<P> {
    pub fn new(catalog: Catalog, config: BoardConfig, persistence: P) -> Self {
        Manager {
            groups: catalog.groups,
            types: catalog.types,
            config,
            persistence,
        }
    }

    pub fn groups(&self) -> &[TaskGroup] {
        &self.groups
    }

    pub fn types(&self) -> &[TaskType] {
        &self.types
    }

    pub fn text(&self) -> &UiText {
        &self.config.text
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Swap in lists supplied by the host.
    pub fn replace(&mut self, groups: Vec<TaskGroup>, types: Vec<TaskType>) {
        self.groups = groups;
        self.types = types;
    }

    /// Groups in display order, each with its types, then the ungrouped section.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections: Vec<Section> = sorted_groups(&self.groups)
            .into_iter()
            .map(|g| Section {
                container: Some(g.id),
                types: container_types(&self.types, Some(g.id)),
                title: g.name,
                color: g.color,
            })
            .collect();
        sections.push(Section {
            container: None,
            title: self.config.text.ungrouped_title.clone(),
            color: None,
            types: container_types(&self.types, None),
        });
        sections
    }

    // -----------------------------------------------------------------------
    // Drag and drop
    // -----------------------------------------------------------------------

    /// Handle a finished drag: compute the new layout and persist it with a
    /// single `reorder` call.
    pub fn drag_end(&mut self, event: MoveEvent) -> Result<DragOutcome, ShellError> {
        if event.is_noop() {
            return Ok(DragOutcome::Ignored);
        }
        let next = compute_reorder(&self.groups, &self.types, &event)?;

        match self.config.shell.update_mode {
            UpdateMode::Confirmed => {
                self.persistence.reorder(&next.groups, &next.types)?;
                self.groups = next.groups;
                self.types = next.types;
                Ok(DragOutcome::Persisted { applied: true })
            }
            UpdateMode::Optimistic => {
                let previous_groups = std::mem::replace(&mut self.groups, next.groups);
                let previous_types = std::mem::replace(&mut self.types, next.types);
                if let Err(e) = self.persistence.reorder(&self.groups, &self.types) {
                    self.groups = previous_groups;
                    self.types = previous_types;
                    return Err(e.into());
                }
                Ok(DragOutcome::Persisted { applied: true })
            }
            UpdateMode::External => {
                self.persistence.reorder(&next.groups, &next.types)?;
                Ok(DragOutcome::Persisted { applied: false })
            }
        }
    }

    // -----------------------------------------------------------------------
    // Task types
    // -----------------------------------------------------------------------

    /// Save the dialog's form. The dialog closes only when the save succeeds.
    pub fn save_type(&mut self, dialog: &mut TypeDialog) -> Result<(), ShellError> {
        if !dialog.is_open() {
            return Err(ShellError::DialogClosed);
        }
        dialog.form().validate()?;
        match dialog.editing() {
            Some(id) => self.persistence.update_type(id, dialog.form())?,
            None => self.persistence.create_type(dialog.form())?,
        }
        dialog.close();
        Ok(())
    }

    /// Delete a task type after `confirm` approves the configured prompt.
    pub fn delete_type(
        &mut self,
        id: TypeId,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<DeleteOutcome, ShellError> {
        if !confirm(&self.config.text.confirm_delete) {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.persistence.delete_type(id)?;
        Ok(DeleteOutcome::Deleted)
    }

    // -----------------------------------------------------------------------
    // Groups
    // -----------------------------------------------------------------------

    pub fn save_group(&mut self, dialog: &mut GroupDialog) -> Result<(), ShellError> {
        if !dialog.is_open() {
            return Err(ShellError::DialogClosed);
        }
        dialog.form().validate()?;
        match dialog.editing() {
            Some(id) => self.persistence.update_group(id, dialog.form())?,
            None => self.persistence.create_group(dialog.form())?,
        }
        dialog.close();
        Ok(())
    }

    pub fn delete_group(
        &mut self,
        id: GroupId,
        prompt: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<DeleteOutcome, ShellError> {
        if !confirm(prompt) {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.persistence.delete_group(id)?;
        Ok(DeleteOutcome::Deleted)
    }
}
