//! Filename without path extension.

use crate::basename::split_basename;
use crate::folder::Folder;
use crate::non_empty::NonEmptyString;
use crate::url_model::{append_component, last_path_component};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use url::Url;

/// A path component sans extension: `"/path/to/foo.txt"` becomes `"foo"`.
///
/// See [`Basename`](crate::Basename) for the component including its extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Filename(NonEmptyString);

impl Filename {
    pub fn new(value: NonEmptyString) -> Self {
        Self(value)
    }

    /// Returns `None` if `raw` is empty.
    pub fn parse(raw: &str) -> Option<Self> {
        NonEmptyString::new(raw).map(Self)
    }

    /// Filename of the last path component of `url`, extension stripped.
    ///
    /// The result is NFC-normalized so that precomposed and decomposed
    /// spellings of the same name compare equal. Returns `None` for the root.
    pub fn from_url(url: &Url) -> Option<Self> {
        let component = last_path_component(url)?;
        let (stem, _) = split_basename(&component);
        Self::parse(&canonical_form(stem))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn value(&self) -> &NonEmptyString {
        &self.0
    }

    pub fn appending(&self, suffix: &str) -> Self {
        Self(self.0.appending(suffix))
    }

    /// Appends this filename plus `extension` as a path component of `base`.
    ///
    /// `None` adds no extension; `Some("")` adds a bare trailing period.
    /// Returns `None` when the result is a `.` or `..` component, which
    /// would resolve to a directory instead of a file.
    pub fn url_relative_to(&self, base: &Url, extension: Option<&str>) -> Option<Url> {
        append_component(base, &with_extension(self.as_str(), extension))
    }

    pub fn url_in(&self, folder: &Folder, extension: Option<&str>) -> Option<Url> {
        self.url_relative_to(folder.url(), extension)
    }
}

/// Joins a file stem and optional extension into a path component.
pub(crate) fn with_extension(stem: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem.to_string(),
    }
}

/// Canonical composition (NFC), favoring precomposed characters.
pub(crate) fn canonical_form(s: &str) -> String {
    s.nfc().collect()
}

impl From<NonEmptyString> for Filename {
    fn from(value: NonEmptyString) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Filename {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Filename {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Filename {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Filename::parse(&s).ok_or_else(|| serde::de::Error::custom("filename must not be empty"))
    }
}
