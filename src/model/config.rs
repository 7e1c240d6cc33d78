use serde::{Deserialize, Serialize};

use super::color::Color;

/// Built-in swatches offered by the color picker
pub const DEFAULT_PALETTE: [&str; 13] = [
    "#FF0000", "#009900", "#0000FF", "#FF00FF", "#A52A2A", "#000080", "#800000", "#808000",
    "#800080", "#008080", "#FFA500", "#DFD030", "#3788D8",
];

/// Color used when nothing has been picked yet
pub const DEFAULT_COLOR: &str = "#3788D8";

/// Configuration from board.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub text: UiText,
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_palette")]
    pub colors: Vec<Color>,
    #[serde(default = "default_color")]
    pub default_color: Color,
    #[serde(default = "default_picker_label")]
    pub label: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig {
            colors: default_palette(),
            default_color: default_color(),
            label: default_picker_label(),
        }
    }
}

pub fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.into_iter().map(Color::from_static).collect()
}

pub fn default_color() -> Color {
    Color::from_static(DEFAULT_COLOR)
}

fn default_picker_label() -> String {
    "Color".to_string()
}

/// When the shell applies a computed reorder to the lists it displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Apply only after the persistence call succeeds
    #[default]
    Confirmed,
    /// Apply before the call, roll back if it fails
    Optimistic,
    /// Never apply; the host pushes fresh lists back
    External,
}

impl UpdateMode {
    pub fn parse_mode(s: &str) -> Option<Self> {
        match s {
            "confirmed" => Some(UpdateMode::Confirmed),
            "optimistic" => Some(UpdateMode::Optimistic),
            "external" => Some(UpdateMode::External),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UpdateMode::Confirmed => "confirmed",
            UpdateMode::Optimistic => "optimistic",
            UpdateMode::External => "external",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub update_mode: UpdateMode,
}

/// Display strings. Any field left out of board.toml keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiText {
    pub manager_title: String,
    pub create_button: String,
    pub ungrouped_title: String,
    pub confirm_delete: String,
    pub dialog_title_create: String,
    pub dialog_title_edit: String,
    pub dialog_label_name: String,
    pub dialog_label_description: String,
    pub dialog_label_color: String,
    pub dialog_label_group: String,
    pub dialog_group_none: String,
    pub dialog_button_cancel: String,
    pub dialog_button_save: String,
}

impl Default for UiText {
    fn default() -> Self {
        UiText {
            manager_title: "Типы задач".into(),
            create_button: "Создать тип".into(),
            ungrouped_title: "Без группы".into(),
            confirm_delete: "Удалить тип задачи?".into(),
            dialog_title_create: "Создать тип".into(),
            dialog_title_edit: "Редактировать тип".into(),
            dialog_label_name: "Название".into(),
            dialog_label_description: "Описание".into(),
            dialog_label_color: "Цвет".into(),
            dialog_label_group: "Группа".into(),
            dialog_group_none: "Нет".into(),
            dialog_button_cancel: "Отмена".into(),
            dialog_button_save: "Сохранить".into(),
        }
    }
}

impl UiText {
    /// Field names accepted by `tb config label`
    pub const KEYS: [&'static str; 13] = [
        "manager_title",
        "create_button",
        "ungrouped_title",
        "confirm_delete",
        "dialog_title_create",
        "dialog_title_edit",
        "dialog_label_name",
        "dialog_label_description",
        "dialog_label_color",
        "dialog_label_group",
        "dialog_group_none",
        "dialog_button_cancel",
        "dialog_button_save",
    ];
}
