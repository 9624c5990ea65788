//! Decoding configuration for [`FileUrl`].
//!
//! By default a decoded string must already be a URL with a scheme.
//! [`DecodeOptions::read_from_path`] additionally accepts schemeless strings
//! as filesystem paths (`"/tmp/doc.txt"` becomes `file:///tmp/doc.txt`), with
//! relative paths resolved against [`DecodeOptions::base`].
//!
//! The options are passed explicitly, either to [`DecodeOptions::decode`] or
//! to serde through the [`WithDecodeOptions`] seed:
//!
//! ```
//! use pathutils_core::decode::{DecodeOptions, WithDecodeOptions};
//! use pathutils_core::FileUrl;
//! use serde::de::DeserializeSeed;
//!
//! let options = DecodeOptions::from_paths(None);
//! let mut de = serde_json::Deserializer::from_str("\"/tmp/doc.txt\"");
//! let file: FileUrl = WithDecodeOptions(&options).deserialize(&mut de).unwrap();
//! assert_eq!(file.url().as_str(), "file:///tmp/doc.txt");
//! ```

use crate::file_url::{FileUrl, FileUrlError};
use crate::folder::Folder;
use crate::url_model::{encode_relative_path, FILE_SCHEME};
use serde::de::DeserializeSeed;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// Failure to turn a decoded string into a [`FileUrl`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("relative path {0:?} needs a base folder")]
    RelativePathWithoutBase(String),
    #[error(transparent)]
    FileUrl(#[from] FileUrlError),
}

/// How schemeless strings are treated when decoding a [`FileUrl`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Treat strings without a scheme as filesystem paths instead of failing.
    #[serde(default)]
    pub read_from_path: bool,
    /// Folder that relative paths resolve against when `read_from_path` is set.
    #[serde(default)]
    pub base: Option<Folder>,
}

impl DecodeOptions {
    /// Strings must be URLs with a scheme. Same as `Default`.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Accepts plain paths, resolving relative ones against `base`.
    pub fn from_paths(base: Option<Folder>) -> Self {
        Self {
            read_from_path: true,
            base,
        }
    }

    /// Turns `raw` into a URL according to these options, without validating it as a file.
    pub fn resolve(&self, raw: &str) -> Result<Url, DecodeError> {
        match Url::parse(raw) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) if self.read_from_path => {
                resolve_path(raw, self.base.as_ref())
            }
            Err(source) => Err(DecodeError::InvalidUrl {
                input: raw.to_string(),
                source,
            }),
        }
    }

    pub fn decode(&self, raw: &str) -> Result<FileUrl, DecodeError> {
        let url = self.resolve(raw)?;
        Ok(FileUrl::try_from_url(url)?)
    }
}

/// Maps a filesystem path onto a `file:` URL.
///
/// Absolute paths map directly; relative paths need `base`. A trailing
/// separator is kept, so directories stay recognizable.
pub(crate) fn resolve_path(path: &str, base: Option<&Folder>) -> Result<Url, DecodeError> {
    let encoded = encode_relative_path(path);
    let parsed = if path.starts_with('/') {
        Url::parse(&format!("{FILE_SCHEME}://{encoded}"))
    } else {
        match base {
            Some(base) => base.url().join(&encoded),
            None => return Err(DecodeError::RelativePathWithoutBase(path.to_string())),
        }
    };
    parsed.map_err(|source| DecodeError::InvalidUrl {
        input: path.to_string(),
        source,
    })
}

/// Deserializes a [`FileUrl`] with explicit [`DecodeOptions`].
pub struct WithDecodeOptions<'a>(pub &'a DecodeOptions);

impl<'de> DeserializeSeed<'de> for WithDecodeOptions<'_> {
    type Value = FileUrl;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        self.0.decode(&s).map_err(serde::de::Error::custom)
    }
}
