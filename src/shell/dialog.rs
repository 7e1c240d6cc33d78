use crate::model::color::Color;
use crate::model::config::{PaletteConfig, UiText};
use crate::model::group::{GroupId, TaskGroup};
use crate::model::task_type::{Container, TaskType, TypeId};
use crate::ops::color_picker::ColorPicker;
use crate::ops::form::{GroupForm, TypeForm};

/// Create/edit dialog for a task type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDialog {
    open: bool,
    editing: Option<TypeId>,
    form: TypeForm,
}

impl TypeDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.form = TypeForm::default();
        self.open = true;
    }

    pub fn open_edit(&mut self, task_type: &TaskType) {
        self.editing = Some(task_type.id);
        self.form = TypeForm::from_type(task_type);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing(&self) -> Option<TypeId> {
        self.editing
    }

    pub fn form(&self) -> &TypeForm {
        &self.form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    pub fn set_color(&mut self, color: Color) {
        self.form.color = color;
    }

    pub fn set_group(&mut self, group: Container) {
        self.form.group_id = group;
    }

    pub fn title<'a>(&self, text: &'a UiText) -> &'a str {
        if self.editing.is_some() {
            &text.dialog_title_edit
        } else {
            &text.dialog_title_create
        }
    }
}

/// Create/edit dialog for a task group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDialog {
    open: bool,
    editing: Option<GroupId>,
    form: GroupForm,
}

impl GroupDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.form = GroupForm::default();
        self.open = true;
    }

    pub fn open_edit(&mut self, group: &TaskGroup) {
        self.editing = Some(group.id);
        self.form = GroupForm::from_group(group);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing(&self) -> Option<GroupId> {
        self.editing
    }

    pub fn form(&self) -> &GroupForm {
        &self.form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    /// A color picker primed with the form's color
    pub fn picker(&self, palette: &PaletteConfig) -> ColorPicker {
        ColorPicker::new(palette).with_value(self.form.color.clone())
    }

    /// Take the result of a picker selection
    pub fn pick(&mut self, picker: &mut ColorPicker, color: &Color) {
        if let Some(picked) = picker.select(color) {
            self.form.color = Some(picked);
        }
    }

    pub fn clear_color(&mut self) {
        self.form.color = None;
    }
}
