use std::fs;
use std::path::Path;

use crate::io::project_io::{CONFIG_FILE, ProjectError, atomic_write};
use crate::model::color::Color;
use crate::model::config::{BoardConfig, UpdateMode};

/// Read board.toml, returning both the parsed config and the raw toml_edit
/// document for round-trip-safe editing. A missing file yields an empty
/// document.
pub fn read_config_doc(
    board_dir: &Path,
) -> Result<(BoardConfig, toml_edit::DocumentMut), ProjectError> {
    let path = board_dir.join(CONFIG_FILE);
    let text = if path.exists() {
        fs::read_to_string(&path).map_err(|e| ProjectError::ReadError {
            path: path.clone(),
            source: e,
        })?
    } else {
        String::new()
    };
    let config: BoardConfig = toml::from_str(&text).map_err(|e| ProjectError::ParseError {
        path: path.clone(),
        source: e,
    })?;
    let doc = text
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| ProjectError::ParseError {
            path,
            source: serde::de::Error::custom(e.to_string()),
        })?;
    Ok((config, doc))
}

/// Write the config document back to disk, preserving formatting.
pub fn write_config_doc(board_dir: &Path, doc: &toml_edit::DocumentMut) -> Result<(), ProjectError> {
    let path = board_dir.join(CONFIG_FILE);
    atomic_write(&path, doc.to_string().as_bytes())
        .map_err(|e| ProjectError::WriteError { path, source: e })
}

fn ensure_table(doc: &mut toml_edit::DocumentMut, name: &str) {
    if !doc.contains_key(name) {
        doc[name] = toml_edit::Item::Table(toml_edit::Table::new());
    }
}

/// Override one UI label
pub fn set_label(doc: &mut toml_edit::DocumentMut, key: &str, value: &str) {
    ensure_table(doc, "text");
    doc["text"][key] = toml_edit::value(value);
}

pub fn set_update_mode(doc: &mut toml_edit::DocumentMut, mode: UpdateMode) {
    ensure_table(doc, "shell");
    doc["shell"]["update_mode"] = toml_edit::value(mode.as_str());
}

/// Replace the picker palette
pub fn set_palette(doc: &mut toml_edit::DocumentMut, colors: &[Color]) {
    ensure_table(doc, "palette");
    let mut array = toml_edit::Array::new();
    for color in colors {
        array.push(color.as_str());
    }
    doc["palette"]["colors"] = toml_edit::value(array);
}

/// Drop the palette override, falling back to the built-in colors
pub fn reset_palette(doc: &mut toml_edit::DocumentMut) {
    if let Some(table) = doc.get_mut("palette").and_then(|t| t.as_table_mut()) {
        table.remove("colors");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r#"# Board settings
[text]
ungrouped_title = "No group" # shown last

[shell]
update_mode = "confirmed"
"#
    }

    #[test]
    fn test_round_trip_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, sample_config()).unwrap();

        let (config, doc) = read_config_doc(tmp.path()).unwrap();
        assert_eq!(config.text.ungrouped_title, "No group");
        write_config_doc(tmp.path(), &doc).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), sample_config());
    }

    #[test]
    fn test_missing_file_is_empty_doc() {
        let tmp = TempDir::new().unwrap();
        let (config, doc) = read_config_doc(tmp.path()).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(doc.to_string(), "");
    }

    #[test]
    fn test_set_label_keeps_comments() {
        let mut doc: toml_edit::DocumentMut = sample_config().parse().unwrap();
        set_label(&mut doc, "manager_title", "Task types");
        let result = doc.to_string();
        assert!(result.contains("# shown last"));
        let config: BoardConfig = toml::from_str(&result).unwrap();
        assert_eq!(config.text.manager_title, "Task types");
        assert_eq!(config.text.ungrouped_title, "No group");
    }

    #[test]
    fn test_set_update_mode() {
        let mut doc: toml_edit::DocumentMut = sample_config().parse().unwrap();
        set_update_mode(&mut doc, UpdateMode::Optimistic);
        let config: BoardConfig = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(config.shell.update_mode, UpdateMode::Optimistic);
    }

    #[test]
    fn test_set_and_reset_palette() {
        let mut doc = toml_edit::DocumentMut::new();
        let colors = vec![
            Color::parse("#111111").unwrap(),
            Color::parse("#222222").unwrap(),
        ];
        set_palette(&mut doc, &colors);
        let config: BoardConfig = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(config.palette.colors, colors);

        reset_palette(&mut doc);
        let config: BoardConfig = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(config.palette.colors.len(), 13);
    }
}
