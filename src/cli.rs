use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::editor::{EditorCommand, DEFAULT_EDITOR};
use crate::error::{InputError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "test-toggle")]
#[command(version)]
#[command(
    about = "Toggle between source and test files in a Ruby project",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the alternate file and open it
    #[command(after_help = "Examples:\n  \
        test-toggle lookup -p lib/user.rb -r /path/to/project\n  \
        test-toggle lookup --path=\"$ZED_RELATIVE_FILE\" --root=\"$ZED_WORKTREE_ROOT\"")]
    Lookup(LookupArgs),
    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Path to the file, relative to the project root
    #[arg(short, long, value_name = "PATH")]
    pub path: String,

    /// Project root directory (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Editor command used to open the alternate file
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_EDITOR)]
    pub editor: String,

    /// Print the alternate file instead of opening it
    #[arg(long)]
    pub print: bool,

    /// Format used with --print
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Everything one lookup needs, fixed before any resolution starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub root: PathBuf,
    pub path: String,
    pub editor: EditorCommand,
    pub print: Option<OutputFormat>,
}

impl LookupArgs {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(InputError::MissingPath.into());
        }
        Ok(())
    }

    pub fn into_config(self) -> Result<LookupConfig> {
        self.validate()?;
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().map_err(InputError::root_unavailable)?,
        };
        Ok(LookupConfig {
            root,
            path: self.path,
            editor: EditorCommand::new(self.editor),
            print: self.print.then_some(self.format),
        })
    }
}
