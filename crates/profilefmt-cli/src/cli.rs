//! Command handlers.
//!
//! Each command loads a snapshot, formats it through a presenter built from
//! the loaded configuration, and prints either markdown (through the
//! terminal renderer) or JSON.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use log::debug;
use profilefmt_core::{
    InMemoryContributions, Presenter, PresenterBuilder, PresenterConfig, UserSnapshot,
};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::{
    args::{Commands, ContributionsArgs, OutputFormat, SnapshotArgs},
    renderer::TerminalRenderer,
};

/// Command dispatcher bound to one configuration and output format.
pub struct Cli {
    config: PresenterConfig,
    renderer: TerminalRenderer,
    format: OutputFormat,
}

impl Cli {
    pub fn new(config: PresenterConfig, renderer: TerminalRenderer, format: OutputFormat) -> Self {
        Self {
            config,
            renderer,
            format,
        }
    }

    /// Run a single command.
    pub fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Show(args) => self.show(&args),
            Commands::Name(args) => self.name(&args),
            Commands::Timezone(args) => self.timezone(&args),
            Commands::Offset(args) => self.offset(&args),
            Commands::Status(args) => self.status(&args),
            Commands::BlankFields(args) => self.blank_fields(&args),
            Commands::Contributions(args) => self.contributions(&args),
            Commands::Schema => self.schema(),
        }
    }

    fn show(&self, args: &ContributionsArgs) -> Result<()> {
        let user = load_snapshot(&args.user)?;
        let presenter = self.presenter(args.contributions.as_deref())?;
        let card = presenter.format(&user).card();
        match self.format {
            OutputFormat::Markdown => {
                self.renderer.render(&card.to_string());
                Ok(())
            }
            OutputFormat::Json => print_json(&card),
        }
    }

    fn name(&self, args: &SnapshotArgs) -> Result<()> {
        let user = load_snapshot(&args.user)?;
        let presenter = self.presenter(None)?;
        self.print_value("display_name", presenter.format(&user).display_name())
    }

    fn timezone(&self, args: &SnapshotArgs) -> Result<()> {
        let user = load_snapshot(&args.user)?;
        let presenter = self.presenter(None)?;
        let timezone = presenter
            .format(&user)
            .timezone()
            .context("Failed to resolve timezone")?;
        self.print_value("timezone", timezone)
    }

    fn offset(&self, args: &SnapshotArgs) -> Result<()> {
        let user = load_snapshot(&args.user)?;
        let presenter = self.presenter(None)?;
        let offset = presenter
            .format(&user)
            .timezone_formatted_offset()
            .context("Failed to format UTC offset")?;
        self.print_value("utc_offset", offset)
    }

    fn status(&self, args: &SnapshotArgs) -> Result<()> {
        let user = load_snapshot(&args.user)?;
        let presenter = self.presenter(None)?;
        let status = presenter
            .format(&user)
            .status()
            .context("Failed to render status")?;
        self.print_value("status", status.into_string())
    }

    fn blank_fields(&self, args: &SnapshotArgs) -> Result<()> {
        let user = load_snapshot(&args.user)?;
        let presenter = self.presenter(None)?;
        let formatter = presenter.format(&user);
        match self.format {
            OutputFormat::Markdown => {
                println!("{}", formatter.blank_fields());
                Ok(())
            }
            OutputFormat::Json => print_json(&json!({
                "blank_fields": formatter.blank_field_list(),
                "sentence": formatter.blank_fields(),
            })),
        }
    }

    fn contributions(&self, args: &ContributionsArgs) -> Result<()> {
        let user = load_snapshot(&args.user)?;
        let presenter = self.presenter(args.contributions.as_deref())?;
        let contributions = presenter
            .format(&user)
            .contributions()
            .context("Failed to load contributions")?;
        match self.format {
            OutputFormat::Markdown => {
                self.renderer.render(&contributions.to_string());
                Ok(())
            }
            OutputFormat::Json => print_json(&contributions),
        }
    }

    fn schema(&self) -> Result<()> {
        print_json(&schemars::schema_for!(UserSnapshot))
    }

    fn presenter(&self, contributions: Option<&Path>) -> Result<Presenter> {
        let builder = PresenterBuilder::from_config(&self.config);
        let builder = match contributions {
            Some(path) => {
                debug!("Loading contributions from {}", path.display());
                let source = InMemoryContributions::from_json_file(path).with_context(|| {
                    format!("Failed to load contributions from {}", path.display())
                })?;
                builder.with_contribution_source(source)
            }
            None => builder,
        };
        Ok(builder.build())
    }

    fn print_value(&self, key: &str, value: String) -> Result<()> {
        match self.format {
            OutputFormat::Markdown => {
                println!("{value}");
                Ok(())
            }
            OutputFormat::Json => {
                let mut object = Map::new();
                object.insert(key.to_string(), Value::String(value));
                print_json(&object)
            }
        }
    }
}

/// Reads a snapshot from a file, or from stdin when the path is `-`.
fn load_snapshot(path: &Path) -> Result<UserSnapshot> {
    let contents = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read snapshot from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?
    };
    serde_json::from_str(&contents).context("Failed to parse user snapshot")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{output}");
    Ok(())
}
