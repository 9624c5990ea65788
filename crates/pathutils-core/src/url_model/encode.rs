//! Appending encoded path components to URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

/// Characters escaped inside a single path component.
///
/// Mirrors the URL path encode set and additionally escapes `/`, `\` and `%`,
/// so a component can never introduce a separator or a stray escape sequence.
/// `file:` URLs treat a raw backslash as a separator.
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped when a filesystem path is spliced into a URL.
/// `/` separators are kept; a backslash is part of a Unix filename.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes one path component.
pub fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// Percent-encodes a relative filesystem path, keeping its separators.
pub fn encode_relative_path(path: &str) -> String {
    utf8_percent_encode(path, PATH).to_string()
}

/// True for components that URL parsing resolves away instead of keeping.
///
/// `.` and `..` are dot segments and an empty component is just a
/// separator, so none of them can name a file.
pub fn is_unaddressable(component: &str) -> bool {
    matches!(component, "" | "." | "..")
}

/// Returns a copy of `base` with `component` appended as its last path component.
///
/// A missing trailing separator on `base` is added first, so appending `b` to
/// both `file:///a` and `file:///a/` gives `file:///a/b`. Query and fragment
/// of `base` are dropped. Returns `None` when `component` is
/// [unaddressable](is_unaddressable).
pub fn append_component(base: &Url, component: &str) -> Option<Url> {
    if is_unaddressable(component) {
        return None;
    }
    let mut url = base.clone();
    let encoded = encode_component(component);
    let path = if base.path().ends_with('/') {
        format!("{}{}", base.path(), encoded)
    } else {
        format!("{}/{}", base.path(), encoded)
    };
    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_space_and_separator() {
        assert_eq!(encode_component("the file.txt"), "the%20file.txt");
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component("100%"), "100%25");
        assert_eq!(encode_component("a\\b.txt"), "a%5Cb.txt");
    }

    #[test]
    fn relative_path_keeps_separators() {
        assert_eq!(encode_relative_path("sub dir/a#b.txt"), "sub%20dir/a%23b.txt");
        assert_eq!(encode_relative_path("sub/a\\b"), "sub/a%5Cb");
    }

    #[test]
    fn append_to_directory_and_plain_url() {
        let dir = Url::parse("file:///base/path/").unwrap();
        assert_eq!(
            append_component(&dir, "file.ext").unwrap().as_str(),
            "file:///base/path/file.ext"
        );
        let plain = Url::parse("file:///base/path").unwrap();
        assert_eq!(
            append_component(&plain, "file.ext").unwrap().as_str(),
            "file:///base/path/file.ext"
        );
    }

    #[test]
    fn append_drops_query_and_fragment() {
        let dir = Url::parse("file:///base/?q=1#top").unwrap();
        assert_eq!(append_component(&dir, "x").unwrap().as_str(), "file:///base/x");
    }

    #[test]
    fn backslash_stays_inside_component() {
        let dir = Url::parse("file:///base/path/").unwrap();
        let url = append_component(&dir, "a\\b.txt").unwrap();
        assert_eq!(url.as_str(), "file:///base/path/a%5Cb.txt");
        assert_eq!(url.path_segments().unwrap().count(), 3);
    }

    #[test]
    fn dot_segments_are_not_appended() {
        let dir = Url::parse("file:///base/path/").unwrap();
        assert_eq!(append_component(&dir, "."), None);
        assert_eq!(append_component(&dir, ".."), None);
        assert_eq!(append_component(&dir, ""), None);
        assert_eq!(
            append_component(&dir, "...").unwrap().as_str(),
            "file:///base/path/..."
        );
    }
}
