//! Directory URLs on the local file system.

use crate::basename::Basename;
use crate::file_url::{FileUrl, FileUrlError};
use crate::filename::Filename;
use crate::url_model::{
    decoded_path, encode_relative_path, has_directory_path, is_file_url, url_from_file_path,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use url::Url;

/// A `file:` URL with a directory path (trailing separator).
///
/// Equality compares the absolute URL string rather than how the URL was
/// built, so `/path/to/folder/` and `../../folder/` resolved from
/// `/path/to/nested/folder/inside` are the same folder.
#[derive(Debug, Clone)]
pub struct Folder {
    url: Url,
}

impl Folder {
    /// Returns `None` unless `url` is a `file:` URL whose path ends with a separator.
    pub fn new(url: Url) -> Option<Self> {
        if !is_file_url(&url) {
            tracing::debug!(url = %url, "folder rejected: not a file URL");
            return None;
        }
        if !has_directory_path(&url) {
            tracing::debug!(url = %url, "folder rejected: not a directory path");
            return None;
        }
        Some(Self { url })
    }

    /// Folder for an absolute filesystem path; the trailing separator is implied.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        url_from_file_path(path.as_ref(), true).and_then(Self::new)
    }

    /// Resolves a relative directory reference such as `"../../folder/"` against this folder.
    ///
    /// A missing trailing separator on `relative` is added, since the result
    /// always names a directory.
    pub fn join_dir(&self, relative: &str) -> Option<Self> {
        let mut encoded = encode_relative_path(relative);
        if !encoded.ends_with('/') {
            encoded.push('/');
        }
        let url = self.url.join(&encoded).ok()?;
        Self::new(url)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_url(self) -> Url {
        self.url
    }

    /// Percent-decoded filesystem path, without the trailing separator (except for `/`).
    pub fn path(&self) -> String {
        decoded_path(&self.url)
    }

    /// Platform path of this folder, if the URL maps onto one.
    pub fn to_path_buf(&self) -> Option<PathBuf> {
        self.url.to_file_path().ok()
    }

    /// Fails only for the basenames `.` and `..`.
    pub fn file_url(&self, basename: &Basename) -> Result<FileUrl, FileUrlError> {
        FileUrl::new(self.clone(), basename.clone())
    }

    pub fn file_url_for(
        &self,
        filename: &Filename,
        extension: Option<&str>,
    ) -> Result<FileUrl, FileUrlError> {
        self.file_url(&Basename::new(filename.clone(), extension))
    }
}

impl PartialEq for Folder {
    fn eq(&self, other: &Self) -> bool {
        self.url.as_str() == other.url.as_str()
    }
}

impl Eq for Folder {}

impl Hash for Folder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.as_str().hash(state);
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Folder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.url.as_str())
    }
}

impl<'de> Deserialize<'de> for Folder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let url = Url::parse(&s).map_err(serde::de::Error::custom)?;
        Folder::new(url).ok_or_else(|| {
            serde::de::Error::custom(format!("not a file directory URL: {s}"))
        })
    }
}
