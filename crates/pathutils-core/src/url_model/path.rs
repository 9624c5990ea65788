//! Path inspection for `file:` URLs.

use percent_encoding::percent_decode_str;
use url::Url;

/// URL scheme of references that point to the local file system.
pub const FILE_SCHEME: &str = "file";

/// Returns the last path component of `url`, percent-decoded.
///
/// A trailing separator does not produce an empty component, so both
/// `file:///what/where/` and `file:///what/where` yield `"where"`.
/// Returns `None` for the root path, a URL without a path, or a component
/// whose escapes do not decode to UTF-8.
pub fn last_path_component(url: &Url) -> Option<String> {
    let segment = url.path().split('/').filter(|s| !s.is_empty()).last()?;
    let decoded = percent_decode_str(segment).decode_utf8().ok()?;
    if decoded.is_empty() {
        return None;
    }
    Some(decoded.into_owned())
}

/// True when the URL path ends with a separator, i.e. the URL names a directory.
///
/// The root path `/` always counts as a directory.
pub fn has_directory_path(url: &Url) -> bool {
    url.path().ends_with('/')
}

/// True when the URL uses the `file:` scheme.
pub fn is_file_url(url: &Url) -> bool {
    url.scheme() == FILE_SCHEME
}

/// Percent-decoded path of `url`, with the trailing separator removed
/// unless the path is the root itself.
pub fn decoded_path(url: &Url) -> String {
    let raw = url.path();
    let trimmed = if raw.len() > 1 {
        raw.strip_suffix('/').unwrap_or(raw)
    } else {
        raw
    };
    percent_decode_str(trimmed).decode_utf8_lossy().into_owned()
}

/// URL of the directory containing the last path component of `url`.
///
/// Query and fragment are dropped. `file:///tmp/foo.bar` becomes `file:///tmp/`.
pub fn parent_directory(url: &Url) -> Option<Url> {
    url.join("./").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn last_component_normal() {
        assert_eq!(
            last_path_component(&url("file:///a/b/file.deb")).as_deref(),
            Some("file.deb")
        );
        assert_eq!(
            last_path_component(&url("file:///test/foo")).as_deref(),
            Some("foo")
        );
        assert_eq!(
            last_path_component(&url("file:///shmoo/.test/bazz")).as_deref(),
            Some("bazz")
        );
    }

    #[test]
    fn last_component_of_directory() {
        assert_eq!(
            last_path_component(&url("file:///what/where/")).as_deref(),
            Some("where")
        );
        assert_eq!(
            last_path_component(&url("file:///test/")).as_deref(),
            Some("test")
        );
    }

    #[test]
    fn last_component_root_or_empty() {
        assert_eq!(last_path_component(&url("file:///")), None);
        assert_eq!(last_path_component(&url("file:////")), None);
        assert_eq!(last_path_component(&url("https://example.com")), None);
    }

    #[test]
    fn last_component_is_decoded() {
        assert_eq!(
            last_path_component(&url("file:///tmp/the%20file.txt")).as_deref(),
            Some("the file.txt")
        );
    }

    #[test]
    fn last_component_rejects_invalid_utf8() {
        assert_eq!(last_path_component(&url("file:///tmp/%FF.txt")), None);
        assert_eq!(
            last_path_component(&url("file:///tmp/%C3%A9.txt")).as_deref(),
            Some("\u{e9}.txt")
        );
    }

    #[test]
    fn directory_detection() {
        assert!(has_directory_path(&url("file:///")));
        assert!(has_directory_path(&url("file:///xyz/")));
        assert!(!has_directory_path(&url("file:///xyz")));
    }

    #[test]
    fn decoded_path_trims_trailing_separator() {
        assert_eq!(decoded_path(&url("file:///tmp/")), "/tmp");
        assert_eq!(decoded_path(&url("file:///")), "/");
        assert_eq!(decoded_path(&url("file:///a%20b/c.txt")), "/a b/c.txt");
    }

    #[test]
    fn parent_of_file() {
        assert_eq!(
            parent_directory(&url("file:///tmp/foo.bar?x=1#frag"))
                .unwrap()
                .as_str(),
            "file:///tmp/"
        );
        assert_eq!(
            parent_directory(&url("file:///root.xyz")).unwrap().as_str(),
            "file:///"
        );
    }
}
