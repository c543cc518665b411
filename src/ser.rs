//! INI encoding.
//!
//! This module provides the [`Encoder`], which writes a [`Document`] in its
//! canonical text form:
//!
//! ```text
//! [alpha]
//! a = 1
//! b = 2
//!
//! [beta]
//! c = 3
//!
//! ```
//!
//! - sections in ascending name order, keys in ascending key order
//! - one blank line after every section, the last one included
//! - sections without keys are skipped unless
//!   [`IniOptions::keep_empty_sections`] is set
//!
//! Decoding canonical output and encoding it again gives the same bytes.
//!
//! ## Usage
//!
//! ```rust
//! use inifile::{encode, Document};
//!
//! let mut doc = Document::new();
//! doc.set("beta", "c", "3");
//! doc.set("alpha", "b", "2");
//! doc.set("alpha", "a", "1");
//!
//! assert_eq!(encode(&doc), "[alpha]\na = 1\nb = 2\n\n[beta]\nc = 3\n\n");
//! ```

use crate::{Document, IniOptions, Section};

/// The INI encoder.
///
/// Accumulates output in an internal buffer; see [`Encoder::into_inner`].
pub struct Encoder<'a> {
    output: String,
    options: &'a IniOptions,
}

impl<'a> Encoder<'a> {
    #[must_use]
    pub fn new(options: &'a IniOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Appends the encoding of every section of `document`.
    pub fn encode_document(&mut self, document: &Document) {
        for (name, section) in document {
            self.encode_section(name, section);
        }
    }

    /// Appends one `[name]` block followed by a blank line.
    ///
    /// Does nothing for an empty section unless empty sections are kept.
    pub fn encode_section(&mut self, name: &str, section: &Section) {
        if section.is_empty() && !self.options.keep_empty_sections {
            return;
        }

        self.output.push('[');
        self.output.push_str(name);
        self.output.push_str("]\n");

        let separator = self.options.separator.as_str();
        for (key, value) in section {
            self.output.push_str(key);
            self.output.push_str(separator);
            self.output.push_str(value.as_str());
            self.output.push('\n');
        }

        self.output.push('\n');
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Separator;

    fn encode_with(doc: &Document, options: &IniOptions) -> String {
        let mut encoder = Encoder::new(options);
        encoder.encode_document(doc);
        encoder.into_inner()
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(encode_with(&Document::new(), &IniOptions::default()), "");
    }

    #[test]
    fn test_sorted_regardless_of_insertion_order() {
        let mut doc = Document::new();
        doc.set("b", "z", "1");
        doc.set("b", "a", "2");
        doc.set("a", "m", "3");

        assert_eq!(
            encode_with(&doc, &IniOptions::default()),
            "[a]\nm = 3\n\n[b]\na = 2\nz = 1\n\n"
        );
    }

    #[test]
    fn test_empty_section_suppressed() {
        let mut doc = Document::new();
        doc.section_mut("empty");
        doc.set("full", "k", "v");

        assert_eq!(
            encode_with(&doc, &IniOptions::default()),
            "[full]\nk = v\n\n"
        );
    }

    #[test]
    fn test_empty_section_kept() {
        let mut doc = Document::new();
        doc.section_mut("empty");
        doc.set("full", "k", "v");

        let options = IniOptions::new().with_keep_empty_sections(true);
        assert_eq!(encode_with(&doc, &options), "[empty]\n\n[full]\nk = v\n\n");
    }

    #[test]
    fn test_compact_separator() {
        let mut doc = Document::new();
        doc.set("s", "k", "");
        doc.set("s", "url", "http://git.github.com");

        let options = IniOptions::new().with_separator(Separator::Compact);
        assert_eq!(
            encode_with(&doc, &options),
            "[s]\nk=\nurl=http://git.github.com\n\n"
        );
    }
}
