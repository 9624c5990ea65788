//! Filename plus path extension, and the splitting rule between the two.

use crate::file_url::{FileUrl, FileUrlError};
use crate::filename::{canonical_form, with_extension, Filename};
use crate::folder::Folder;
use crate::url_model::last_path_component;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// Splits a path component into its file stem and extension at the last period.
///
/// - Components made only of periods (`"."`, `".."`, `"....."`) have no extension.
/// - A single leading period marks a hidden file, not an extension:
///   `".hidden"` has no extension, `".hidden.file"` splits into `(".hidden", "file")`.
/// - A trailing period yields an empty extension: `"file."` splits into `("file", "")`.
pub fn split_basename(raw: &str) -> (&str, Option<&str>) {
    if raw.chars().all(|c| c == '.') {
        return (raw, None);
    }
    match raw.rfind('.') {
        None | Some(0) => (raw, None),
        Some(idx) => (&raw[..idx], Some(&raw[idx + 1..])),
    }
}

/// A path component with its extension: `"/path/to/foo.txt"` becomes `"foo.txt"`.
///
/// The extension is three-state: `None` (no extension), `Some("")` (trailing
/// period, as in `"foo."`) or `Some("txt")`. It never starts with a period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Basename {
    filename: Filename,
    extension: Option<String>,
}

impl Basename {
    /// Leading periods of `extension` are stripped: `Some(".txt")` is stored as `Some("txt")`.
    pub fn new(filename: Filename, extension: Option<&str>) -> Self {
        Self {
            filename,
            extension: extension.map(|ext| ext.trim_start_matches('.').to_string()),
        }
    }

    pub fn without_extension(filename: Filename) -> Self {
        Self {
            filename,
            extension: None,
        }
    }

    /// Returns `None` only for empty input.
    pub fn parse(raw: &str) -> Option<Self> {
        let (stem, extension) = split_basename(raw);
        let filename = Filename::parse(stem)?;
        Some(Self {
            filename,
            extension: extension.map(str::to_string),
        })
    }

    /// Basename of the last path component of `url`. Returns `None` for the root.
    pub fn from_url(url: &Url) -> Option<Self> {
        let component = last_path_component(url)?;
        let (stem, extension) = split_basename(&component);
        let filename = Filename::parse(&canonical_form(stem))?;
        Some(Self {
            filename,
            extension: extension.map(str::to_string),
        })
    }

    pub fn filename(&self) -> &Filename {
        &self.filename
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// The extension with "none" and "empty" collapsed into `""`.
    pub fn extension_str(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    /// `None` for `"."` and `".."`, which cannot name a file.
    pub fn url_relative_to(&self, base: &Url) -> Option<Url> {
        self.filename.url_relative_to(base, self.extension())
    }

    pub fn url_in(&self, folder: &Folder) -> Option<Url> {
        self.filename.url_in(folder, self.extension())
    }

    pub fn file_url_in(&self, folder: &Folder) -> Result<FileUrl, FileUrlError> {
        folder.file_url(self)
    }
}

impl From<Filename> for Basename {
    fn from(filename: Filename) -> Self {
        Self::without_extension(filename)
    }
}

impl fmt::Display for Basename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&with_extension(self.filename.as_str(), self.extension()))
    }
}

impl Serialize for Basename {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Basename {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Basename::parse(&s).ok_or_else(|| serde::de::Error::custom("basename must not be empty"))
    }
}
