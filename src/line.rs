//! Line preprocessing.
//!
//! Every physical line of an INI document goes through this module before the
//! decoder sees it: comments are erased, then the remainder is classified as a
//! section header, a key-value pair, a blank line, or something invalid.
//!
//! All functions are pure and borrow from their input.
//!
//! ```rust
//! use inifile::line::{classify, Line};
//!
//! assert_eq!(classify("  [ Server ] ; main"), Line::Section("Server"));
//! assert_eq!(
//!     classify("port = 8080 # default"),
//!     Line::KeyValue { key: "port", value: "8080" }
//! );
//! assert_eq!(classify("; only a comment"), Line::Blank);
//! assert_eq!(classify("garbage"), Line::Invalid);
//! ```

/// Characters removed by [`trim`] and accepted by [`is_blank`].
pub const BLANK_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Characters that start a comment, anywhere in a line.
pub const COMMENT_CHARS: [char; 2] = ['#', ';'];

/// The classification of a single line after comment erasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Nothing but blank characters (or nothing at all).
    Blank,
    /// `[name]` with a non-empty trimmed name.
    Section(&'a str),
    /// `key = value` with a non-empty trimmed key.
    KeyValue { key: &'a str, value: &'a str },
    /// Anything else.
    Invalid,
}

/// Erases comments and classifies the line.
///
/// A section header wins over a key-value pair, so `[a=b]` is the section
/// `a=b`. A pair whose key trims to nothing (`= value`) is not a pair and
/// therefore classifies as [`Line::Invalid`].
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    let line = erase_comments(line);

    if let Some(name) = extract_section_name(line) {
        return Line::Section(name);
    }

    match extract_key_value(line) {
        Some((key, value)) if !key.is_empty() => Line::KeyValue { key, value },
        _ if is_blank(line) => Line::Blank,
        _ => Line::Invalid,
    }
}

/// Truncates the line at the first `#` or `;`.
///
/// There is no escaping: a literal `#` or `;` inside a value also starts a
/// comment.
///
/// ```rust
/// use inifile::line::erase_comments;
///
/// assert_eq!(erase_comments("# 100008 ;"), "");
/// assert_eq!(erase_comments("key: value # 1000"), "key: value ");
/// ```
#[must_use]
pub fn erase_comments(line: &str) -> &str {
    match line.find(COMMENT_CHARS) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Returns `true` if the line holds only space, tab, CR or LF.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(|c| BLANK_CHARS.contains(&c))
}

/// Removes leading and trailing space, tab, CR and LF.
///
/// Other whitespace (form feed, vertical tab, Unicode spaces) is kept.
#[must_use]
pub fn trim(line: &str) -> &str {
    line.trim_matches(BLANK_CHARS)
}

/// Returns the trimmed name if the trimmed line reads `[name]`.
#[must_use]
pub fn extract_section_name(line: &str) -> Option<&str> {
    let line = trim(line);
    if line.len() <= 2 {
        return None;
    }

    let name = trim(line.strip_prefix('[')?.strip_suffix(']')?);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Splits the line at its first `=` and trims both sides.
///
/// The key may come back empty; rejecting that is up to the caller.
///
/// ```rust
/// use inifile::line::extract_key_value;
///
/// assert_eq!(extract_key_value(" industry =s=j"), Some(("industry", "s=j")));
/// assert_eq!(extract_key_value("= 100\r "), Some(("", "100")));
/// assert_eq!(extract_key_value("A Happy"), None);
/// ```
#[must_use]
pub fn extract_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((trim(key), trim(value)))
}
