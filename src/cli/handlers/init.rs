use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::commands::InitArgs;
use crate::io::project_io::{self, BOARD_DIR, CONFIG_FILE};
use crate::model::catalog::Catalog;
use crate::ops::catalog_ops;
use crate::ops::form::{GroupForm, TypeForm};

const BOARD_TOML_TEMPLATE: &str = r##"# typeboard settings. Every key is optional; remove a line to get the default.

[shell]
# When a reorder updates the displayed lists:
#   "confirmed"  - after the save succeeds
#   "optimistic" - immediately, rolled back if the save fails
#   "external"   - never; the list is re-read from disk
update_mode = "confirmed"

# --- Color picker ---
# [palette]
# label = "Color"
# default_color = "#3788D8"
# colors = ["#FF0000", "#009900", "#0000FF", "#FF00FF", "#A52A2A", "#000080",
#           "#800000", "#808000", "#800080", "#008080", "#FFA500", "#DFD030",
#           "#3788D8"]

# --- UI labels ---
# Uncomment and edit to override.
#
# [text]
# manager_title = "Типы задач"
# create_button = "Создать тип"
# ungrouped_title = "Без группы"
# confirm_delete = "Удалить тип задачи?"
"##;

/// Sample groups and types written by `tb init --sample`.
const SAMPLE_GROUPS: &[(&str, &str)] = &[("Work", "#FFA500"), ("Personal", "#008080")];

const SAMPLE_TYPES: &[(&str, &str, &str, Option<usize>)] = &[
    ("Call", "#FF0000", "Phone or video call", Some(0)),
    ("Report", "#0000FF", "", Some(0)),
    ("Meeting", "#800080", "", Some(0)),
    ("Sport", "#009900", "Workout or run", Some(1)),
    ("Errand", "#A52A2A", "", None),
];

fn sample_catalog() -> Result<Catalog, Box<dyn std::error::Error>> {
    let mut catalog = Catalog::default();
    let mut group_ids = Vec::new();
    for (name, color) in SAMPLE_GROUPS {
        let form = GroupForm {
            name: name.to_string(),
            color: Some(color.parse()?),
        };
        group_ids.push(catalog_ops::add_group(&mut catalog, &form)?);
    }
    for (name, color, description, group) in SAMPLE_TYPES {
        let form = TypeForm {
            name: name.to_string(),
            color: color.parse()?,
            description: description.to_string(),
            group_id: group.map(|i| group_ids[i]),
        };
        catalog_ops::add_type(&mut catalog, &form)?;
    }
    Ok(catalog)
}

fn resolve_root(project_dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match project_dir {
        Some(dir) => Ok(fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?),
        None => Ok(std::env::current_dir()?),
    }
}

pub fn cmd_init(args: InitArgs, project_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let root = resolve_root(project_dir)?;
    let board_dir = root.join(BOARD_DIR);

    if board_dir.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to reinitialize)",
            board_dir.display()
        )
        .into());
    }

    init_board(&board_dir, args.sample)?;

    println!("Initialized typeboard in {}", board_dir.display());
    Ok(())
}

fn init_board(board_dir: &Path, sample: bool) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(board_dir)?;

    let catalog = if sample {
        sample_catalog()?
    } else {
        Catalog::default()
    };
    project_io::save_catalog(board_dir, &catalog)?;

    let config_path = board_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        project_io::atomic_write(&config_path, BOARD_TOML_TEMPLATE.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::project_io::load_project;
    use crate::model::config::{BoardConfig, UiText, UpdateMode};
    use crate::ops::check::check_catalog;
    use tempfile::TempDir;

    #[test]
    fn template_parses_to_defaults() {
        let config: BoardConfig = toml::from_str(BOARD_TOML_TEMPLATE).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.shell.update_mode, UpdateMode::Confirmed);
    }

    #[test]
    fn template_labels_match_defaults() {
        let text = UiText::default();
        for (key, value) in [
            ("manager_title", &text.manager_title),
            ("create_button", &text.create_button),
            ("ungrouped_title", &text.ungrouped_title),
            ("confirm_delete", &text.confirm_delete),
        ] {
            let line = format!("# {} = \"{}\"", key, value);
            assert!(BOARD_TOML_TEMPLATE.contains(&line), "missing {}", line);
        }
    }

    #[test]
    fn sample_catalog_is_valid() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.groups.len(), 2);
        assert_eq!(catalog.types.len(), 5);
        assert!(check_catalog(&catalog).valid);
    }

    #[test]
    fn init_writes_loadable_board() {
        let tmp = TempDir::new().unwrap();
        init_board(&tmp.path().join(BOARD_DIR), true).unwrap();
        let project = load_project(tmp.path()).unwrap();
        assert_eq!(project.catalog, sample_catalog().unwrap());
    }
}
