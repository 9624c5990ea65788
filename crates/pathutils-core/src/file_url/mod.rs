//! File URLs: a [`Folder`] plus a [`Basename`].
//!
//! A [`FileUrl`] always points at a non-directory resource on the local
//! file system. It is either composed from already validated parts or
//! derived from an arbitrary [`Url`]. Both fail with a [`FileUrlError`]:
//! composition only for the basenames `.` and `..`.

mod error;

pub use error::{FileUrlError, Unexpected};

use crate::basename::Basename;
use crate::decode::{resolve_path, DecodeError, DecodeOptions};
use crate::filename::Filename;
use crate::folder::Folder;
use crate::url_model::{decoded_path, has_directory_path, is_file_url, parent_directory};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

/// A `file:` URL that names a file, split into its folder and basename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileUrl {
    folder: Folder,
    basename: Basename,
    url: Url,
}

impl FileUrl {
    /// Places `basename` inside `folder`.
    ///
    /// Fails with [`FileUrlError::DotSegment`] for `"."` and `".."`: URL
    /// resolution would turn them into the folder itself or its parent.
    pub fn new(folder: Folder, basename: Basename) -> Result<Self, FileUrlError> {
        match basename.url_in(&folder) {
            Some(url) => Ok(Self {
                folder,
                basename,
                url,
            }),
            None => Err(FileUrlError::DotSegment {
                name: basename.to_string(),
                folder: folder.into_url(),
            }),
        }
    }

    /// Splits `url` into folder and basename.
    ///
    /// Fails for non-`file:` URLs and for directory paths (including the
    /// root). Query and fragment are not kept.
    pub fn try_from_url(url: Url) -> Result<Self, FileUrlError> {
        if !is_file_url(&url) {
            tracing::debug!(url = %url, "file URL rejected: scheme is {}", url.scheme());
            return Err(FileUrlError::NotFileUrl(url));
        }
        if has_directory_path(&url) {
            tracing::debug!(url = %url, "file URL rejected: directory path");
            return Err(FileUrlError::IsDirectory(url));
        }
        // A non-directory path always has a last component; only `/` lacks one.
        let basename = match Basename::from_url(&url) {
            Some(basename) => basename,
            None => return Err(FileUrlError::Unexpected(Unexpected::BasenameExtraction, url)),
        };
        let folder = match parent_directory(&url).and_then(Folder::new) {
            Some(folder) => folder,
            None => return Err(FileUrlError::Unexpected(Unexpected::FolderExtraction, url)),
        };
        tracing::trace!(url = %url, folder = %folder, basename = %basename, "derived file URL");
        // URL parsing already resolved `.` and `..`, so the last component is never one.
        Self::new(folder, basename)
            .map_err(|_| FileUrlError::Unexpected(Unexpected::BasenameExtraction, url))
    }

    /// Interprets `path` as a filesystem path; relative paths resolve against `base`.
    pub fn from_path(path: &str, base: Option<&Folder>) -> Result<Self, DecodeError> {
        let url = resolve_path(path, base)?;
        Ok(Self::try_from_url(url)?)
    }

    pub fn folder(&self) -> &Folder {
        &self.folder
    }

    pub fn basename(&self) -> &Basename {
        &self.basename
    }

    pub fn filename(&self) -> &Filename {
        self.basename.filename()
    }

    /// Absolute URL of the file.
    pub fn url(&self) -> Url {
        self.url.clone()
    }

    /// Percent-decoded filesystem path of the file.
    pub fn path(&self) -> String {
        decoded_path(&self.url)
    }

    pub fn to_path_buf(&self) -> Option<PathBuf> {
        self.url.to_file_path().ok()
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    pub fn into_parts(self) -> (Folder, Basename) {
        (self.folder, self.basename)
    }
}

impl TryFrom<Url> for FileUrl {
    type Error = FileUrlError;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        Self::try_from_url(url)
    }
}

impl FromStr for FileUrl {
    type Err = DecodeError;

    /// Strict parsing: the string must be a URL with a scheme.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecodeOptions::default().decode(s)
    }
}

impl fmt::Display for FileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

impl Serialize for FileUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.url.as_str())
    }
}

/// Decodes strictly; use [`WithDecodeOptions`](crate::decode::WithDecodeOptions)
/// to accept plain paths.
impl<'de> Deserialize<'de> for FileUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DecodeOptions::default()
            .decode(&s)
            .map_err(serde::de::Error::custom)
    }
}
