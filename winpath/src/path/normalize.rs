//! Lexical normalization of Windows-style path strings.
//!
//! This works purely on strings and never touches the filesystem, so it
//! behaves the same on every host platform:
//! - `/` is treated as `\`
//! - Redundant separators collapse
//! - `.` segments are dropped
//! - `..` removes the previous segment, never climbing above a drive or UNC
//!   root; leading `..` segments of relative paths are kept
//! - A trailing separator is removed, except on a bare root such as `c:\`

/// Windows path separator.
pub const SEPARATOR: char = '\\';

/// The root portion of a path, split off before segment processing.
#[derive(Debug, PartialEq, Eq)]
struct Root<'a> {
    /// Drive (`c:`) or UNC share (`\\server\share`) prefix, if any.
    prefix: &'a str,
    /// Whether segments hang off an absolute root.
    absolute: bool,
    /// Whatever follows the root.
    rest: &'a str,
}

fn split_root(path: &str) -> Root<'_> {
    // UNC: \\server\share\...
    if let Some(after) = path.strip_prefix(r"\\") {
        let mut end = after.len();
        let mut seen = 0;
        for (i, c) in after.char_indices() {
            if c == SEPARATOR {
                seen += 1;
                if seen == 2 {
                    end = i;
                    break;
                }
            }
        }
        let prefix_len = 2 + end;
        return Root {
            prefix: &path[..prefix_len],
            absolute: true,
            rest: &path[prefix_len..],
        };
    }

    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let rest = &path[2..];
        return Root {
            prefix: &path[..2],
            absolute: rest.starts_with(SEPARATOR),
            rest,
        };
    }

    Root {
        prefix: "",
        absolute: path.starts_with(SEPARATOR),
        rest: path,
    }
}

/// Normalize a Windows-style path string without consulting the filesystem.
///
/// Letter case is preserved; callers that need case-insensitive identity
/// lowercase first.
///
/// # Examples
///
/// ```
/// use winpath::path::normalize::normalize_lexical;
///
/// assert_eq!(normalize_lexical(r"C:\Program Files\"), r"C:\Program Files");
/// assert_eq!(normalize_lexical("c:/a/./b/../c"), r"c:\a\c");
/// assert_eq!(normalize_lexical(r"c:\"), r"c:\");
/// assert_eq!(normalize_lexical(r"\\server\share\dir\\"), r"\\server\share\dir");
/// assert_eq!(normalize_lexical(r"..\x\..\y"), r"..\y");
/// ```
#[must_use]
pub fn normalize_lexical(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let unified = path.replace('/', r"\");
    let root = split_root(&unified);

    let mut segments: Vec<&str> = Vec::new();
    for segment in root.rest.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if root.absolute => {}
                _ => segments.push(".."),
            },
            normal => segments.push(normal),
        }
    }

    let joined = segments.join(r"\");
    let is_unc = root.prefix.starts_with(r"\\");

    if is_unc {
        if joined.is_empty() {
            root.prefix.to_string()
        } else {
            format!(r"{}\{joined}", root.prefix)
        }
    } else if root.absolute {
        format!(r"{}\{joined}", root.prefix)
    } else if joined.is_empty() {
        if root.prefix.is_empty() {
            ".".to_string()
        } else {
            root.prefix.to_string()
        }
    } else {
        format!("{}{joined}", root.prefix)
    }
}
