use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tb", about = concat!("typeboard v", env!("CARGO_PKG_VERSION"), " - task types and groups, kept in order"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different project directory
    #[arg(short = 'C', long = "project-dir", global = true)]
    pub project_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new board in the current directory
    Init(InitArgs),
    /// List groups and their task types in display order
    List,
    /// Show one task type
    Show(ShowArgs),
    /// Create a task type (appended to its group)
    Add(AddArgs),
    /// Edit a task type
    Edit(EditArgs),
    /// Delete a task type
    Rm(RmArgs),
    /// Move a task type to a position, optionally into another group
    Mv(MvArgs),
    /// Group management
    Group(GroupCmd),
    /// Show the color palette
    Palette,
    /// Validate ordering and group references
    Check,
    /// Edit board.toml settings
    Config(ConfigCmd),
    /// Show changes that could not be saved
    Failures,
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Seed the board with a few example groups and types
    #[arg(long)]
    pub sample: bool,
    /// Reinitialize even if .typeboard/ already exists
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Task type args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ShowArgs {
    /// Task type ID
    pub id: u64,
}

#[derive(Args)]
pub struct AddArgs {
    /// Name of the new type
    pub name: String,
    /// Color as #RRGGBB (default: the palette default)
    #[arg(long)]
    pub color: Option<String>,
    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,
    /// Group ID to put the type in (default: ungrouped)
    #[arg(long)]
    pub group: Option<u64>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task type ID
    pub id: u64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Move into this group (appended at the end)
    #[arg(long, conflicts_with = "ungrouped")]
    pub group: Option<u64>,
    /// Take the type out of its group
    #[arg(long)]
    pub ungrouped: bool,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task type ID
    pub id: u64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct MvArgs {
    /// Task type ID
    pub id: u64,
    /// Zero-based destination index
    pub index: usize,
    /// Destination group (default: the type's current container)
    #[arg(long, conflicts_with = "ungrouped")]
    pub group: Option<u64>,
    /// Move into the ungrouped section
    #[arg(long)]
    pub ungrouped: bool,
}

// ---------------------------------------------------------------------------
// Group args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct GroupCmd {
    #[command(subcommand)]
    pub action: GroupAction,
}

#[derive(Subcommand)]
pub enum GroupAction {
    /// Create a group (appended after the others)
    Add {
        name: String,
        /// Color as #RRGGBB
        #[arg(long)]
        color: Option<String>,
    },
    /// Rename or recolor a group
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, conflicts_with = "no_color")]
        color: Option<String>,
        /// Remove the group's color
        #[arg(long)]
        no_color: bool,
    },
    /// Delete a group; its types become ungrouped
    Rm {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Move a group to a zero-based position
    Mv { id: u64, index: usize },
}

// ---------------------------------------------------------------------------
// Config args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Override a UI label
    Label { key: String, value: String },
    /// When reorders update the displayed lists: confirmed, optimistic, external
    Mode { mode: String },
    /// Replace the palette (no colors with --reset restores the defaults)
    Palette {
        colors: Vec<String>,
        #[arg(long, conflicts_with = "colors")]
        reset: bool,
    },
}
