//! CLI for inspecting filenames, folders and file URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pathutils_core::config;

use commands::{run_inspect, run_join, run_split, Output};

/// Top-level CLI for pathutils.
#[derive(Debug, Parser)]
#[command(name = "pathutils")]
#[command(about = "pathutils: split, inspect and join file names and file URLs", long_about = None)]
pub struct Cli {
    /// Pretty-print JSON output (overrides the config file).
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a name into filename and extension at its last period.
    Split {
        /// Name such as "archive.tar.gz" or ".hidden".
        name: String,
    },

    /// Decompose a file URL into folder, basename and filename.
    Inspect {
        /// A `file:` URL, or a path when --from-path is set.
        target: String,
        /// Accept plain filesystem paths in addition to URLs.
        #[arg(long)]
        from_path: bool,
        /// Folder (URL or absolute path) that relative paths resolve against.
        #[arg(long, value_name = "DIR")]
        base: Option<String>,
    },

    /// Join a folder with a name and print the resulting path and URL.
    Join {
        /// Folder as a `file:` URL or an absolute path.
        folder: String,
        /// Name to place inside the folder.
        name: String,
        /// Treat the name as a filename without splitting off an extension.
        #[arg(long)]
        literal: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_default()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let out = Output {
            pretty: cli.pretty || cfg.pretty_json,
        };

        match cli.command {
            CliCommand::Split { name } => run_split(&out, &name)?,
            CliCommand::Inspect {
                target,
                from_path,
                base,
            } => run_inspect(&out, &cfg.decode, &target, from_path, base.as_deref())?,
            CliCommand::Join {
                folder,
                name,
                literal,
            } => run_join(&out, &folder, &name, literal)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
