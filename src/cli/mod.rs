//! CLI parsing and action dispatch.

use crate::constants;
use crate::core::paths::StorePaths;
use crate::util::console::{self, Palette};
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{debug, Level};
use std::io::{self, Write};
use std::path::PathBuf;

pub mod delete;
pub mod init;
pub mod read;

use read::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "userdb",
    version,
    about = "Inspect or delete the Tomcat credential store."
)]
pub struct Cli {
    /// Read usernames in credential file
    #[arg(long)]
    pub read: bool,

    /// Read usernames with their stored keys
    #[arg(long)]
    pub read_keys: bool,

    /// Delete credential file
    #[arg(long)]
    pub delete: bool,

    /// Skip confirmation prompts
    #[arg(long)]
    pub force: bool,

    /// Path to userDatabase.properties
    /// (default: ~/libraries/apache-tomcat-10.1.41/bin/data/userDatabase.properties)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Create an empty userDatabase.properties at the default path
    #[arg(long)]
    pub init_db: bool,

    /// Output format for --read-keys: text|table|json
    #[arg(long, value_parser = read::parse_format)]
    pub format: Option<OutputFormat>,

    /// With --read-keys, check each hash against its public key
    #[arg(long)]
    pub verify: bool,
}

/// The single action selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InitDb,
    Read,
    ReadKeys { format: OutputFormat, verify: bool },
    Delete { force: bool },
}

impl Cli {
    /// Pick the action. `--init-db` wins over everything else; otherwise
    /// exactly one of `--read`, `--read-keys`, `--delete` is required.
    pub fn action(&self) -> Result<Action, clap::Error> {
        if self.init_db {
            return Ok(Action::InitDb);
        }

        let selected = [self.read, self.read_keys, self.delete]
            .iter()
            .filter(|&&flag| flag)
            .count();
        if selected != 1 {
            let kind = if selected == 0 {
                ErrorKind::MissingRequiredArgument
            } else {
                ErrorKind::ArgumentConflict
            };
            return Err(Cli::command().error(
                kind,
                "Choose exactly one of --read, --read-keys, or --delete.",
            ));
        }

        if !self.read_keys && (self.format.is_some() || self.verify) {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--format and --verify can only be used with --read-keys.",
            ));
        }

        Ok(if self.read {
            Action::Read
        } else if self.read_keys {
            Action::ReadKeys {
                format: self.format.unwrap_or_default(),
                verify: self.verify,
            }
        } else {
            Action::Delete { force: self.force }
        })
    }

    pub fn run(self) -> Result<()> {
        let action = match self.action() {
            Ok(action) => action,
            Err(e) => e.exit(),
        };

        console::init(Palette::detect(), Level::DEBUG)?;
        let paths = StorePaths::resolve(self.file)?;
        let mut out = io::stdout();

        if action != Action::InitDb {
            debug!("Resolved credential file path: {}", paths);
        }

        match action {
            Action::InitDb => init::run(&paths.default_store, &mut out),
            Action::Read => read::run_read(&paths.store, &mut out),
            Action::ReadKeys { format, verify } => {
                read::run_read_keys(&paths.store, format, verify, &mut out)
            }
            Action::Delete { force } => {
                delete::run(&paths.store, force, &mut io::stdin().lock(), &mut out)
            }
        }
    }
}

/// Print the Ctrl+C notice and return the process exit status.
pub fn report_interrupt<W: Write>(out: &mut W) -> i32 {
    let _ = writeln!(out, "\nInterrupted by user.");
    let _ = out.flush();
    constants::EXIT_INTERRUPTED
}
