//! `pathutils split <name>` – split a name at its last period.

use super::Output;
use anyhow::{Context, Result};
use pathutils_core::Basename;
use serde::Serialize;

/// JSON shape printed by `split`.
#[derive(Debug, Serialize)]
pub struct SplitReport<'a> {
    pub filename: &'a str,
    /// `null` when there is no extension, `""` for a trailing period.
    pub extension: Option<&'a str>,
}

impl<'a> SplitReport<'a> {
    pub fn new(basename: &'a Basename) -> Self {
        Self {
            filename: basename.filename().as_str(),
            extension: basename.extension(),
        }
    }
}

pub fn run_split(out: &Output, name: &str) -> Result<()> {
    let basename = Basename::parse(name).context("name must not be empty")?;
    out.print(&SplitReport::new(&basename))
}
