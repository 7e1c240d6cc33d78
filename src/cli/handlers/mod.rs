mod init;
pub use init::cmd_init;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Global override for project directory (set by -C flag)
static PROJECT_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::failure_log::{self, FailureCategory, FailureEntry};
use crate::io::project_io::{self, ProjectError};
use crate::io::store::FileStore;
use crate::model::color::Color;
use crate::model::config::{PaletteConfig, UiText, UpdateMode};
use crate::model::group::GroupId;
use crate::model::project::Project;
use crate::model::task_type::{TypeId, container_label};
use crate::ops::check;
use crate::ops::color_picker::ColorPicker;
use crate::ops::form::group_choices;
use crate::ops::grouping::{locate_group, locate_type};
use crate::ops::reorder::MoveEvent;
use crate::shell::{
    DeleteOutcome, DragOutcome, GroupDialog, Manager, PersistError, ShellError, TypeDialog,
};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;

    // Store -C override for load_project_cwd()
    if let Some(ref dir) = cli.project_dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        PROJECT_DIR_OVERRIDE
            .lock()
            .map_err(|_| "project directory override is poisoned")?
            .replace(abs);
    }

    match cli.command {
        Commands::Init(args) => cmd_init(args, cli.project_dir.as_deref()),

        // Read commands
        Commands::List => cmd_list(json),
        Commands::Show(args) => cmd_show(args, json),
        Commands::Palette => cmd_palette(json),
        Commands::Check => cmd_check(json),
        Commands::Failures => cmd_failures(json),

        // Write commands
        Commands::Add(args) => cmd_add(args),
        Commands::Edit(args) => cmd_edit(args),
        Commands::Rm(args) => cmd_rm(args),
        Commands::Mv(args) => cmd_mv(args),
        Commands::Group(cmd) => cmd_group(cmd.action),
        Commands::Config(cmd) => cmd_config(cmd.action, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_project_cwd() -> Result<Project, ProjectError> {
    let override_dir = PROJECT_DIR_OVERRIDE
        .lock()
        .ok()
        .and_then(|dir| dir.as_ref().cloned());
    let start = match override_dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(ProjectError::IoError)?,
    };
    let root = project_io::discover_project(&start)?;
    project_io::load_project(&root)
}

/// Build the shell over the project's catalog file.
fn open_manager(project: Project) -> (PathBuf, Manager<FileStore>) {
    let store = FileStore::new(&project.board_dir, project.catalog.clone());
    let manager = Manager::new(project.catalog, project.config, store);
    (project.board_dir, manager)
}

/// Parse a color and pick it in the palette picker. Only palette colors
/// can be chosen.
fn pick_color(picker: &mut ColorPicker, raw: &str) -> Result<Color, Box<dyn std::error::Error>> {
    let color: Color = raw.parse()?;
    picker.open();
    picker
        .select(&color)
        .ok_or_else(|| format!("{} is not in the palette (see `tb palette`)", color).into())
}

/// Append a failed write to the failure log. Rejected input is reported
/// but not logged.
fn log_if_persist_failure(
    board_dir: &Path,
    category: FailureCategory,
    description: &str,
    fields: &[(&str, String)],
    err: &ShellError,
) {
    if let ShellError::Persist(PersistError::Storage(source)) = err {
        let mut entry = FailureEntry::new(category, description);
        for (key, value) in fields {
            entry = entry.field(key, value.clone());
        }
        failure_log::log_failure(board_dir, entry.body(source.to_string()));
    }
}

/// Ask on stdin; anything but `y`/`yes` declines.
fn confirm_stdin(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// The group select label for a container, as the type dialog shows it.
fn group_name(project: &Project, id: Option<GroupId>) -> Option<String> {
    group_choices(&project.catalog.groups, &project.config.text)
        .into_iter()
        .find(|(choice, _)| *choice == id)
        .map(|(_, name)| name)
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(json: bool) -> CmdResult {
    let project = load_project_cwd()?;
    let (_, manager) = open_manager(project);
    let sections = manager.sections();
    let title = &manager.text().manager_title;

    if json {
        let out = ListJson {
            title,
            sections: &sections,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_sections(title, &sections));
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, json: bool) -> CmdResult {
    let project = load_project_cwd()?;
    let id = TypeId(args.id);
    let task_type = project
        .catalog
        .find_type(id)
        .ok_or_else(|| format!("task type not found: {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(task_type)?);
    } else {
        let group = group_name(&project, task_type.group_id);
        print!(
            "{}",
            render_type(task_type, group.as_deref(), &project.config.text)
        );
    }
    Ok(())
}

fn cmd_palette(json: bool) -> CmdResult {
    let project = load_project_cwd()?;
    let picker = ColorPicker::new(&project.config.palette);

    if json {
        let out = PaletteJson {
            label: &picker.label,
            default_color: &picker.default_color,
            rows: picker.rows(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_palette(&picker));
    }
    Ok(())
}

fn cmd_check(json: bool) -> CmdResult {
    let project = load_project_cwd()?;
    let result = check::check_catalog(&project.catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_check(&result));
    }
    Ok(())
}

fn cmd_failures(json: bool) -> CmdResult {
    let project = load_project_cwd()?;
    let log = failure_log::read_log(&project.board_dir)?;

    if json {
        let count = log.as_deref().map_or(0, failure_log::count_entries);
        let out = serde_json::json!({ "count": count, "log": log });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    match log {
        Some(text) => print!("{}", text),
        None => println!("No failures logged."),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Task type commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs) -> CmdResult {
    let project = load_project_cwd()?;
    let mut picker = ColorPicker::new(&project.config.palette);
    let (board_dir, mut manager) = open_manager(project);

    let mut dialog = TypeDialog::new();
    dialog.open_create();
    dialog.set_name(args.name.clone());
    let color = match args.color {
        Some(ref raw) => pick_color(&mut picker, raw)?,
        None => picker.selected().clone(),
    };
    dialog.set_color(color);
    if let Some(description) = args.description {
        dialog.set_description(description);
    }
    dialog.set_group(args.group.map(GroupId));

    if let Err(e) = manager.save_type(&mut dialog) {
        log_if_persist_failure(
            &board_dir,
            FailureCategory::Save,
            "create task type",
            &[("name", args.name)],
            &e,
        );
        return Err(e.into());
    }

    match manager.persistence().last_created_type() {
        Some(id) => println!("Created task type {}: {}", id, dialog.form().name),
        None => println!("Created task type: {}", dialog.form().name),
    }
    Ok(())
}

fn cmd_edit(args: EditArgs) -> CmdResult {
    let project = load_project_cwd()?;
    let id = TypeId(args.id);
    let task_type = project
        .catalog
        .find_type(id)
        .ok_or_else(|| format!("task type not found: {}", id))?
        .clone();
    let mut picker =
        ColorPicker::new(&project.config.palette).with_value(Some(task_type.color.clone()));
    let (board_dir, mut manager) = open_manager(project);

    let mut dialog = TypeDialog::new();
    dialog.open_edit(&task_type);
    if let Some(name) = args.name {
        dialog.set_name(name);
    }
    if let Some(ref raw) = args.color {
        dialog.set_color(pick_color(&mut picker, raw)?);
    }
    if let Some(description) = args.description {
        dialog.set_description(description);
    }
    if args.ungrouped {
        dialog.set_group(None);
    } else if let Some(group) = args.group {
        dialog.set_group(Some(GroupId(group)));
    }

    if let Err(e) = manager.save_type(&mut dialog) {
        log_if_persist_failure(
            &board_dir,
            FailureCategory::Save,
            "update task type",
            &[("id", id.to_string())],
            &e,
        );
        return Err(e.into());
    }
    println!("Updated task type {}", id);
    Ok(())
}

fn cmd_rm(args: RmArgs) -> CmdResult {
    let project = load_project_cwd()?;
    let id = TypeId(args.id);
    if project.catalog.find_type(id).is_none() {
        return Err(format!("task type not found: {}", id).into());
    }
    let (board_dir, mut manager) = open_manager(project);

    let yes = args.yes;
    match manager.delete_type(id, |prompt| yes || confirm_stdin(prompt)) {
        Ok(DeleteOutcome::Deleted) => println!("Deleted task type {}", id),
        Ok(DeleteOutcome::Cancelled) => println!("Cancelled"),
        Err(e) => {
            log_if_persist_failure(
                &board_dir,
                FailureCategory::Delete,
                "delete task type",
                &[("id", id.to_string())],
                &e,
            );
            return Err(e.into());
        }
    }
    Ok(())
}

fn cmd_mv(args: MvArgs) -> CmdResult {
    let project = load_project_cwd()?;
    let (board_dir, mut manager) = open_manager(project);
    move_type(&board_dir, &mut manager, &args)
}

fn move_type(board_dir: &Path, manager: &mut Manager<FileStore>, args: &MvArgs) -> CmdResult {
    let id = TypeId(args.id);

    let (source, from) = locate_type(manager.types(), id)
        .ok_or_else(|| format!("task type not found: {}", id))?;
    let destination = if args.ungrouped {
        None
    } else if let Some(group) = args.group {
        Some(GroupId(group))
    } else {
        source
    };
    let event = MoveEvent::Item {
        source,
        destination,
        from,
        to: args.index,
    };

    let outcome = manager.drag_end(event).inspect_err(|e| {
        log_if_persist_failure(
            board_dir,
            FailureCategory::Reorder,
            "move task type",
            &[
                ("id", id.to_string()),
                ("from", format!("{} #{}", container_label(source), from)),
                ("to", format!("{} #{}", container_label(destination), args.index)),
            ],
            e,
        )
    })?;
    let moved = format!(
        "Moved task type {} to {} position {}",
        id,
        container_label(destination),
        args.index
    );
    report_drag(outcome, &moved);
    Ok(())
}

fn report_drag(outcome: DragOutcome, moved: &str) {
    match outcome {
        DragOutcome::Ignored => println!("Already in place"),
        DragOutcome::Persisted { .. } => println!("{}", moved),
    }
}

// ---------------------------------------------------------------------------
// Group commands
// ---------------------------------------------------------------------------

fn cmd_group(action: GroupAction) -> CmdResult {
    match action {
        GroupAction::Add { name, color } => cmd_group_add(name, color),
        GroupAction::Edit {
            id,
            name,
            color,
            no_color,
        } => cmd_group_edit(GroupId(id), name, color, no_color),
        GroupAction::Rm { id, yes } => cmd_group_rm(GroupId(id), yes),
        GroupAction::Mv { id, index } => cmd_group_mv(GroupId(id), index),
    }
}

fn cmd_group_add(name: String, color: Option<String>) -> CmdResult {
    let project = load_project_cwd()?;
    let palette = project.config.palette.clone();
    let (board_dir, mut manager) = open_manager(project);

    let mut dialog = GroupDialog::new();
    dialog.open_create();
    dialog.set_name(name.clone());
    if let Some(ref raw) = color {
        pick_group_color(&mut dialog, &palette, raw)?;
    }

    if let Err(e) = manager.save_group(&mut dialog) {
        log_if_persist_failure(
            &board_dir,
            FailureCategory::Save,
            "create group",
            &[("name", name)],
            &e,
        );
        return Err(e.into());
    }

    match manager.persistence().last_created_group() {
        Some(id) => println!("Created group {}: {}", id, dialog.form().name),
        None => println!("Created group: {}", dialog.form().name),
    }
    Ok(())
}

fn cmd_group_edit(
    id: GroupId,
    name: Option<String>,
    color: Option<String>,
    no_color: bool,
) -> CmdResult {
    let project = load_project_cwd()?;
    let group = project
        .catalog
        .find_group(id)
        .ok_or_else(|| format!("group not found: {}", id))?
        .clone();
    let palette = project.config.palette.clone();
    let (board_dir, mut manager) = open_manager(project);

    let mut dialog = GroupDialog::new();
    dialog.open_edit(&group);
    if let Some(name) = name {
        dialog.set_name(name);
    }
    if no_color {
        dialog.clear_color();
    } else if let Some(ref raw) = color {
        pick_group_color(&mut dialog, &palette, raw)?;
    }

    if let Err(e) = manager.save_group(&mut dialog) {
        log_if_persist_failure(
            &board_dir,
            FailureCategory::Save,
            "update group",
            &[("id", id.to_string())],
            &e,
        );
        return Err(e.into());
    }
    println!("Updated group {}", id);
    Ok(())
}

fn pick_group_color(dialog: &mut GroupDialog, palette: &PaletteConfig, raw: &str) -> CmdResult {
    let mut picker = dialog.picker(palette);
    let color = pick_color(&mut picker, raw)?;
    dialog.pick(&mut picker, &color);
    Ok(())
}

fn cmd_group_rm(id: GroupId, yes: bool) -> CmdResult {
    let project = load_project_cwd()?;
    let group = project
        .catalog
        .find_group(id)
        .ok_or_else(|| format!("group not found: {}", id))?;
    let prompt = format!(
        "Delete group \"{}\"? Its task types become ungrouped.",
        group.name
    );
    let (board_dir, mut manager) = open_manager(project);

    match manager.delete_group(id, &prompt, |prompt| yes || confirm_stdin(prompt)) {
        Ok(DeleteOutcome::Deleted) => println!("Deleted group {}", id),
        Ok(DeleteOutcome::Cancelled) => println!("Cancelled"),
        Err(e) => {
            log_if_persist_failure(
                &board_dir,
                FailureCategory::Delete,
                "delete group",
                &[("id", id.to_string())],
                &e,
            );
            return Err(e.into());
        }
    }
    Ok(())
}

fn cmd_group_mv(id: GroupId, index: usize) -> CmdResult {
    let project = load_project_cwd()?;
    let (board_dir, mut manager) = open_manager(project);

    let from =
        locate_group(manager.groups(), id).ok_or_else(|| format!("group not found: {}", id))?;
    let event = MoveEvent::Group { from, to: index };

    let outcome = manager.drag_end(event).inspect_err(|e| {
        log_if_persist_failure(
            &board_dir,
            FailureCategory::Reorder,
            "move group",
            &[
                ("id", id.to_string()),
                ("from", from.to_string()),
                ("to", index.to_string()),
            ],
            e,
        )
    })?;
    report_drag(outcome, &format!("Moved group {} to position {}", id, index));
    Ok(())
}

// ---------------------------------------------------------------------------
// Config commands
// ---------------------------------------------------------------------------

fn cmd_config(action: ConfigAction, json: bool) -> CmdResult {
    let project = load_project_cwd()?;
    let board_dir = project.board_dir;

    match action {
        ConfigAction::Show => {
            if json {
                println!("{}", serde_json::to_string_pretty(&project.config)?);
            } else {
                print!("{}", toml::to_string_pretty(&project.config)?);
            }
            return Ok(());
        }
        ConfigAction::Label { key, value } => {
            if !UiText::KEYS.contains(&key.as_str()) {
                return Err(format!(
                    "unknown label '{}' (expected one of: {})",
                    key,
                    UiText::KEYS.join(", ")
                )
                .into());
            }
            let (_, mut doc) = config_io::read_config_doc(&board_dir)?;
            config_io::set_label(&mut doc, &key, &value);
            write_config(&board_dir, &doc, "set label", &key)?;
            println!("Set {} = \"{}\"", key, value);
        }
        ConfigAction::Mode { mode } => {
            let parsed = UpdateMode::parse_mode(&mode).ok_or_else(|| {
                format!(
                    "invalid update mode '{}' (expected confirmed, optimistic, or external)",
                    mode
                )
            })?;
            let (_, mut doc) = config_io::read_config_doc(&board_dir)?;
            config_io::set_update_mode(&mut doc, parsed);
            write_config(&board_dir, &doc, "set update mode", parsed.as_str())?;
            println!("Update mode: {}", parsed.as_str());
        }
        ConfigAction::Palette { colors, reset } => {
            let (_, mut doc) = config_io::read_config_doc(&board_dir)?;
            if reset {
                config_io::reset_palette(&mut doc);
                write_config(&board_dir, &doc, "reset palette", "")?;
                println!("Palette reset to defaults");
            } else {
                if colors.is_empty() {
                    return Err("give at least one color, or --reset".into());
                }
                let parsed = colors
                    .iter()
                    .map(|c| c.parse::<Color>())
                    .collect::<Result<Vec<_>, _>>()?;
                config_io::set_palette(&mut doc, &parsed);
                write_config(&board_dir, &doc, "set palette", &colors.join(" "))?;
                println!("Palette set ({} colors)", parsed.len());
            }
        }
    }
    Ok(())
}

fn write_config(
    board_dir: &Path,
    doc: &toml_edit::DocumentMut,
    description: &str,
    detail: &str,
) -> Result<(), ProjectError> {
    config_io::write_config_doc(board_dir, doc).inspect_err(|e| {
        let entry = FailureEntry::new(FailureCategory::Config, description)
            .field("value", detail)
            .body(e.to_string());
        failure_log::log_failure(board_dir, entry);
    })
}
