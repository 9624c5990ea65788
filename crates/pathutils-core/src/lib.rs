//! Immutable value types for path components.
//!
//! - [`NonEmptyString`]: the validation primitive every name type builds on.
//! - [`Filename`]: a path component without extension (`"foo"`).
//! - [`Basename`]: a filename with its extension (`"foo.txt"`).
//! - [`Folder`]: a `file:` URL naming a directory.
//! - [`FileUrl`]: a [`Folder`] plus a [`Basename`], i.e. a `file:` URL naming a file.
//!
//! No filesystem access happens here; only path strings and URLs are modeled.

pub mod config;
pub mod logging;

pub mod basename;
pub mod decode;
pub mod file_url;
pub mod filename;
pub mod folder;
pub mod join;
pub mod non_empty;
pub mod url_model;

pub use basename::{split_basename, Basename};
pub use decode::{DecodeError, DecodeOptions, WithDecodeOptions};
pub use file_url::{FileUrl, FileUrlError, Unexpected};
pub use filename::Filename;
pub use folder::Folder;
pub use non_empty::{contentful, contentful_all, NonEmptyString};
pub use url::Url;
