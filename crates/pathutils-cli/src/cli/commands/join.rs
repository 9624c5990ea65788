//! `pathutils join <folder> <name>` – place a name inside a folder.

use super::{parse_folder, Output};
use anyhow::{Context, Result};
use pathutils_core::{join, Basename, Filename, FileUrl, Folder};
use serde::Serialize;

/// JSON shape printed by `join`.
#[derive(Debug, Serialize)]
pub struct JoinReport {
    pub path: String,
    pub url: String,
}

/// Joins `name` into `folder`; `literal` keeps periods in the name as part of the filename.
pub(crate) fn join_name(folder: &Folder, name: &str, literal: bool) -> Result<JoinReport> {
    let file: FileUrl = if literal {
        let filename = Filename::parse(name).context("name must not be empty")?;
        join::filename_file_url(folder, &filename)?
    } else {
        let basename = Basename::parse(name).context("name must not be empty")?;
        join::basename_file_url(folder, &basename)?
    };
    Ok(JoinReport {
        path: file.path(),
        url: file.url().to_string(),
    })
}

pub fn run_join(out: &Output, folder: &str, name: &str, literal: bool) -> Result<()> {
    let folder = parse_folder(folder)?;
    out.print(&join_name(&folder, name, literal)?)
}
