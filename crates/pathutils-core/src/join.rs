//! Concatenating a [`Folder`] with a [`Filename`] or [`Basename`].
//!
//! Each combination comes in two forms: a percent-decoded path string and a
//! structured [`FileUrl`]. `&folder + &filename` is shorthand for the
//! [`FileUrl`] form. A name of `.` or `..` cannot be placed inside a folder,
//! so every form is fallible.

use crate::basename::Basename;
use crate::file_url::{FileUrl, FileUrlError};
use crate::filename::Filename;
use crate::folder::Folder;
use crate::url_model::decoded_path;
use std::ops::Add;

/// Path of `filename` inside `folder`; no extension is added.
pub fn filename_path(folder: &Folder, filename: &Filename) -> Option<String> {
    filename.url_in(folder, None).map(|url| decoded_path(&url))
}

pub fn filename_file_url(folder: &Folder, filename: &Filename) -> Result<FileUrl, FileUrlError> {
    folder.file_url_for(filename, None)
}

/// Path of `basename` inside `folder`, extension included.
pub fn basename_path(folder: &Folder, basename: &Basename) -> Option<String> {
    basename.url_in(folder).map(|url| decoded_path(&url))
}

pub fn basename_file_url(folder: &Folder, basename: &Basename) -> Result<FileUrl, FileUrlError> {
    folder.file_url(basename)
}

impl Add<&Filename> for &Folder {
    type Output = Result<FileUrl, FileUrlError>;

    fn add(self, filename: &Filename) -> Self::Output {
        filename_file_url(self, filename)
    }
}

impl Add<&Basename> for &Folder {
    type Output = Result<FileUrl, FileUrlError>;

    fn add(self, basename: &Basename) -> Self::Output {
        basename_file_url(self, basename)
    }
}
