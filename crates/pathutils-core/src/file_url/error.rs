//! Error type for building a [`FileUrl`](super::FileUrl) from an arbitrary URL.

use url::Url;

/// Extraction step that failed although the URL passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unexpected {
    BasenameExtraction,
    FolderExtraction,
}

impl std::fmt::Display for Unexpected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unexpected::BasenameExtraction => write!(f, "basename extraction"),
            Unexpected::FolderExtraction => write!(f, "folder extraction"),
        }
    }
}

/// Why a URL cannot be represented as a [`FileUrl`](super::FileUrl).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileUrlError {
    /// Scheme is not `file:` (web, ssh, custom app schemes, ...).
    #[error("not a file URL: {0}")]
    NotFileUrl(Url),
    /// Path ends with a separator; includes the root `/`.
    #[error("URL points to a directory: {0}")]
    IsDirectory(Url),
    /// Basename is `.` or `..`; placed in `folder` it would name a directory.
    #[error("`{name}` cannot name a file in {folder}")]
    DotSegment { name: String, folder: Url },
    /// A derivation step failed for a URL that passed validation.
    #[error("unexpected failure during {0} for {1}")]
    Unexpected(Unexpected, Url),
}

impl FileUrlError {
    pub fn url(&self) -> &Url {
        match self {
            FileUrlError::NotFileUrl(url)
            | FileUrlError::IsDirectory(url)
            | FileUrlError::Unexpected(_, url) => url,
            FileUrlError::DotSegment { folder, .. } => folder,
        }
    }
}
