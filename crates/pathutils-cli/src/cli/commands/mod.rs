//! CLI command handlers. Each command is in its own file.

mod inspect;
mod join;
mod split;

pub use inspect::run_inspect;
pub use join::run_join;
pub use split::run_split;

use anyhow::{Context, Result};
use pathutils_core::{Folder, Url};
use serde::Serialize;

/// JSON printing settings shared by all commands.
pub struct Output {
    pub pretty: bool,
}

impl Output {
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{json}");
        Ok(())
    }
}

/// Parses a folder argument given either as a `file:` URL or as an absolute path.
pub(crate) fn parse_folder(arg: &str) -> Result<Folder> {
    let folder = match Url::parse(arg) {
        Ok(url) => Folder::new(url),
        Err(_) => Folder::from_path(arg),
    };
    folder.with_context(|| format!("not a folder URL or absolute directory path: {arg}"))
}
