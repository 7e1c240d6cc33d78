use serde::Serialize;

use crate::model::color::Color;
use crate::model::config::UiText;
use crate::model::task_type::TaskType;
use crate::ops::check::CheckResult;
use crate::ops::color_picker::ColorPicker;
use crate::shell::manager::Section;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson<'a> {
    pub title: &'a str,
    pub sections: &'a [Section],
}

#[derive(Serialize)]
pub struct PaletteJson<'a> {
    pub label: &'a str,
    pub default_color: &'a Color,
    pub rows: Vec<&'a [Color]>,
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Render the whole board: each group with its types, then the ungrouped section.
pub fn render_sections(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    for section in sections {
        out.push('\n');
        match section.container {
            Some(id) => out.push_str(&format!("[{}] {}", id, section.title)),
            None => out.push_str(&section.title),
        }
        if let Some(ref color) = section.color {
            out.push_str(&format!(" {}", color));
        }
        out.push('\n');

        if section.types.is_empty() {
            out.push_str("  -\n");
        }
        for t in &section.types {
            out.push_str(&format!("  {}. {} ({}) {}\n", t.order, t.name, t.id, t.color));
            if let Some(ref description) = t.description {
                out.push_str(&format!("     {}\n", description));
            }
        }
    }
    out
}

/// Render one task type with the dialog labels.
pub fn render_type(t: &TaskType, group_name: Option<&str>, text: &UiText) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", t.name, t.id));
    out.push_str(&format!("  {}: {}\n", text.dialog_label_name, t.name));
    out.push_str(&format!("  {}: {}\n", text.dialog_label_color, t.color));
    out.push_str(&format!(
        "  {}: {}\n",
        text.dialog_label_group,
        group_name.unwrap_or(&text.dialog_group_none)
    ));
    if let Some(ref description) = t.description {
        out.push_str(&format!("  {}: {}\n", text.dialog_label_description, description));
    }
    out.push_str(&format!("  order: {}\n", t.order));
    out
}

/// Render the palette as the picker's swatch grid.
pub fn render_palette(picker: &ColorPicker) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} (default {})\n", picker.label, picker.default_color));
    for row in picker.rows() {
        let cells: Vec<&str> = row.iter().map(|c| c.as_str()).collect();
        out.push_str(&format!("  {}\n", cells.join("  ")));
    }
    out
}

pub fn render_check(result: &CheckResult) -> String {
    let mut out = String::new();
    if !result.errors.is_empty() {
        out.push_str("Errors:\n");
        for err in &result.errors {
            out.push_str(&format!("  {}\n", err));
        }
    }
    if !result.warnings.is_empty() {
        if !result.errors.is_empty() {
            out.push('\n');
        }
        out.push_str("Warnings:\n");
        for warn in &result.warnings {
            out.push_str(&format!("  {}\n", warn));
        }
    }
    if !out.is_empty() {
        out.push('\n');
    }
    if result.valid {
        out.push_str("✓ board is valid\n");
    } else {
        out.push_str("✗ board has errors\n");
    }
    out
}
