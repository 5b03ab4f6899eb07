use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Display-ready views of user profile snapshots
///
/// Reads a user snapshot (JSON, `-` for stdin) and prints the values a
/// profile page shows: display name, timezone and UTC offset, latest status
/// markup, incomplete fields, and contributions to followed projects.
#[derive(Parser)]
#[command(version, about, name = "profilefmt")]
pub struct Args {
    /// Path to the presenter configuration file. Defaults to
    /// $XDG_CONFIG_HOME/profilefmt/config.json when it exists
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown rendered for the terminal
    Markdown,
    /// Pretty-printed JSON
    Json,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the full profile card
    Show(ContributionsArgs),
    /// Print the display name
    Name(SnapshotArgs),
    /// Print the resolved timezone
    #[command(alias = "tz")]
    Timezone(SnapshotArgs),
    /// Print the UTC offset of the resolved timezone
    Offset(SnapshotArgs),
    /// Print the latest status as HTML markup, with the text HTML-escaped
    ///
    /// Characters such as `&` and `<` in the status text come out as
    /// entities, so `R&D` prints as `<span>R&amp;D</span>`.
    Status(SnapshotArgs),
    /// List profile fields that are still blank
    BlankFields(SnapshotArgs),
    /// List contributions to followed projects
    Contributions(ContributionsArgs),
    /// Print the JSON schema of the snapshot format
    Schema,
}

/// Arguments for commands reading one snapshot
#[derive(ClapArgs)]
pub struct SnapshotArgs {
    /// User snapshot JSON file, `-` for stdin
    pub user: PathBuf,
}

/// Arguments for commands that may read contribution records
#[derive(ClapArgs)]
pub struct ContributionsArgs {
    /// User snapshot JSON file, `-` for stdin
    pub user: PathBuf,

    /// JSON array of contribution records
    #[arg(short, long)]
    pub contributions: Option<PathBuf>,
}
