//! Non-empty string primitive shared by all name types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// A `String` that is guaranteed to contain at least one character.
///
/// Equality, hashing and ordering are those of the wrapped string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Returns `None` if `candidate` is empty.
    pub fn new(candidate: impl Into<String>) -> Option<Self> {
        let value = candidate.into();
        if value.is_empty() {
            return None;
        }
        Some(Self(value))
    }

    /// Builds a value from a string literal.
    ///
    /// # Panics
    ///
    /// Panics if `literal` is empty.
    pub fn from_literal(literal: &'static str) -> Self {
        assert!(
            !literal.is_empty(),
            "NonEmptyString literal must not be empty"
        );
        Self(literal.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn prepending(&self, prefix: &str) -> Self {
        Self(format!("{}{}", prefix, self.0))
    }

    pub fn appending(&self, suffix: &str) -> Self {
        Self(format!("{}{}", self.0, suffix))
    }

    pub fn concat(&self, other: &NonEmptyString) -> Self {
        self.appending(other.as_str())
    }

    /// Like [`concat`](Self::concat), returning a copy of `self` when `other` is `None`.
    pub fn concat_opt(&self, other: Option<&NonEmptyString>) -> Self {
        match other {
            Some(other) => self.concat(other),
            None => self.clone(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Lower-casing never removes characters, so the result stays non-empty.
    pub fn to_lowercase(&self) -> Self {
        Self(self.0.to_lowercase())
    }
}

/// Wraps an optional string, treating `None` and `""` alike.
pub fn contentful(candidate: Option<&str>) -> Option<NonEmptyString> {
    candidate.and_then(NonEmptyString::new)
}

/// Wraps every non-empty string of `candidates`, dropping empty ones.
pub fn contentful_all<I, S>(candidates: I) -> Vec<NonEmptyString>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    candidates
        .into_iter()
        .filter_map(NonEmptyString::new)
        .collect()
}

impl Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl Serialize for NonEmptyString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NonEmptyString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        NonEmptyString::new(s).ok_or_else(|| serde::de::Error::custom("string must not be empty"))
    }
}
