//! URL modeling for local file references.
//!
//! Thin helpers over [`url::Url`] that the value types build on: last path
//! component extraction, directory detection (trailing separator), parent
//! directory resolution, and percent-encoding of appended components.

mod encode;
mod path;

pub use encode::{append_component, encode_component, encode_relative_path, is_unaddressable};
pub use path::{
    decoded_path, has_directory_path, is_file_url, last_path_component, parent_directory,
    FILE_SCHEME,
};

use std::path::Path;
use url::Url;

/// Builds a `file:` URL from an absolute filesystem path.
///
/// When `directory` is set the URL gets a trailing separator. Returns `None`
/// for relative paths.
pub fn url_from_file_path(path: &Path, directory: bool) -> Option<Url> {
    let url = if directory {
        Url::from_directory_path(path)
    } else {
        Url::from_file_path(path)
    };
    url.ok()
}
