//! Configuration options for INI decoding and encoding.
//!
//! - [`IniOptions`]: main configuration struct
//! - [`Separator`]: how `key` and `value` are joined on encode
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{decode_with_options, to_string_with_options, IniOptions, Separator};
//!
//! let options = IniOptions::new()
//!     .with_keep_empty_sections(true)
//!     .with_separator(Separator::Compact);
//!
//! let doc = decode_with_options("[empty]\n[full]\nk = v\n", &options).unwrap();
//! assert_eq!(doc.len(), 2);
//!
//! let ini = to_string_with_options(&doc, &options);
//! assert_eq!(ini, "[empty]\n\n[full]\nk=v\n\n");
//! ```

/// Separator written between a key and its value.
///
/// Decoding accepts any amount of blank space around `=`, so both forms
/// read back identically.
///
/// # Examples
///
/// ```rust
/// use inifile::Separator;
///
/// assert_eq!(Separator::Spaced.as_str(), " = ");
/// assert_eq!(Separator::Compact.as_str(), "=");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Separator {
    /// `key = value`
    #[default]
    Spaced,
    /// `key=value`
    Compact,
}

impl Separator {
    /// Returns the literal written between key and value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Separator::Spaced => " = ",
            Separator::Compact => "=",
        }
    }
}

/// Configuration options for decoding and encoding.
///
/// The defaults reproduce the canonical behavior: header-only sections are
/// dropped and pairs are written as `key = value`.
///
/// # Examples
///
/// ```rust
/// use inifile::IniOptions;
///
/// let options = IniOptions::new();
/// assert!(!options.keep_empty_sections);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniOptions {
    /// Keep sections that have a header but no keys, on decode and on encode.
    pub keep_empty_sections: bool,
    pub separator: Separator,
}

impl IniOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether header-only sections survive decode and encode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inifile::IniOptions;
    ///
    /// let options = IniOptions::new().with_keep_empty_sections(true);
    /// assert!(options.keep_empty_sections);
    /// ```
    #[must_use]
    pub fn with_keep_empty_sections(mut self, keep: bool) -> Self {
        self.keep_empty_sections = keep;
        self
    }

    /// Sets the key-value separator used on encode.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = IniOptions::default();
        assert!(!options.keep_empty_sections);
        assert_eq!(options.separator, Separator::Spaced);
        assert_eq!(options, IniOptions::new());
    }

    #[test]
    fn test_builders_chain() {
        let options = IniOptions::new()
            .with_separator(Separator::Compact)
            .with_keep_empty_sections(true);
        assert!(options.keep_empty_sections);
        assert_eq!(options.separator.as_str(), "=");
    }
}
