use serde::{Deserialize, Serialize};

use crate::model::color::Color;
use crate::model::config::{UiText, default_color};
use crate::model::group::{GroupId, TaskGroup};
use crate::model::task_type::{Container, TaskType};

/// Error type for form validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("name is required")]
    NameRequired,
}

/// Editable fields of a task type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeForm {
    pub name: String,
    pub color: Color,
    pub description: String,
    pub group_id: Container,
}

impl Default for TypeForm {
    fn default() -> Self {
        TypeForm {
            name: String::new(),
            color: default_color(),
            description: String::new(),
            group_id: None,
        }
    }
}

impl TypeForm {
    /// Prefill from an existing type
    pub fn from_type(task_type: &TaskType) -> Self {
        TypeForm {
            name: task_type.name.clone(),
            color: task_type.color.clone(),
            description: task_type.description.clone().unwrap_or_default(),
            group_id: task_type.group_id,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        validate_name(&self.name)
    }

    /// Description as stored: blank becomes `None`
    pub fn description_value(&self) -> Option<String> {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Editable fields of a task group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupForm {
    pub name: String,
    pub color: Option<Color>,
}

impl GroupForm {
    pub fn from_group(group: &TaskGroup) -> Self {
        GroupForm {
            name: group.name.clone(),
            color: group.color.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<(), FormError> {
    if name.trim().is_empty() {
        Err(FormError::NameRequired)
    } else {
        Ok(())
    }
}

/// Group choices for the type dialog's group select: `None` first, then groups in display order
pub fn group_choices(groups: &[TaskGroup], text: &UiText) -> Vec<(Option<GroupId>, String)> {
    let mut choices = vec![(None, text.dialog_group_none.clone())];
    choices.extend(
        super::grouping::sorted_groups(groups)
            .into_iter()
            .map(|g| (Some(g.id), g.name)),
    );
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeId;

    #[test]
    fn test_default_form() {
        let form = TypeForm::default();
        assert_eq!(form.name, "");
        assert_eq!(form.color.as_str(), "#3788D8");
        assert_eq!(form.group_id, None);
        assert_eq!(form.validate(), Err(FormError::NameRequired));
    }

    #[test]
    fn test_blank_name_rejected() {
        let form = TypeForm {
            name: "   ".into(),
            ..TypeForm::default()
        };
        assert_eq!(form.validate(), Err(FormError::NameRequired));
        let group = GroupForm {
            name: "\t".into(),
            color: None,
        };
        assert_eq!(group.validate(), Err(FormError::NameRequired));
    }

    #[test]
    fn test_from_type() {
        let task_type = TaskType {
            id: TypeId(5),
            name: "Call".into(),
            color: Color::parse("#f44336").unwrap(),
            description: Some("Phone call".into()),
            group_id: Some(GroupId(1)),
            order: 3,
        };
        let form = TypeForm::from_type(&task_type);
        assert_eq!(form.name, "Call");
        assert_eq!(form.color.as_str(), "#f44336");
        assert_eq!(form.description, "Phone call");
        assert_eq!(form.group_id, Some(GroupId(1)));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_description_value() {
        let mut form = TypeForm::default();
        assert_eq!(form.description_value(), None);
        form.description = "  notes ".into();
        assert_eq!(form.description_value(), Some("notes".to_string()));
    }

    #[test]
    fn test_group_choices_start_with_none() {
        let groups = vec![
            TaskGroup {
                id: GroupId(2),
                name: "Personal".into(),
                color: None,
                order: 1,
            },
            TaskGroup {
                id: GroupId(1),
                name: "Work".into(),
                color: None,
                order: 0,
            },
        ];
        let choices = group_choices(&groups, &UiText::default());
        assert_eq!(
            choices,
            vec![
                (None, "Нет".to_string()),
                (Some(GroupId(1)), "Work".to_string()),
                (Some(GroupId(2)), "Personal".to_string()),
            ]
        );

        let text = UiText {
            dialog_group_none: "None".into(),
            ..UiText::default()
        };
        assert_eq!(group_choices(&groups, &text)[0], (None, "None".to_string()));
    }
}
