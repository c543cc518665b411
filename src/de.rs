//! INI decoding.
//!
//! This module provides the [`Decoder`], the line-by-line state machine that
//! turns INI text into a [`Document`].
//!
//! ## Overview
//!
//! Decoding is a single pass over the physical lines of the input:
//!
//! - **Comment erasure**: everything from the first `#` or `;` is dropped
//! - **Section headers** switch the current section
//! - **Key-value pairs** are stored under the current section (last write wins)
//! - **Blank lines** are skipped
//! - **Anything else** aborts with a [`SyntaxError`] carrying the line number
//!
//! Decoding is all-or-nothing: on the first error the partially built
//! document is discarded.
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use inifile::decode;
//!
//! let doc = decode("[Section 1]\nname=git\n\n[ Section 2 ]\nuser = suni").unwrap();
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc["Section 2"]["user"], "suni");
//! ```
//!
//! ## Direct Decoder Usage
//!
//! ```rust
//! use inifile::{Decoder, IniOptions};
//!
//! let options = IniOptions::new().with_keep_empty_sections(true);
//! let doc = Decoder::with_options("[empty]\n", &options).decode().unwrap();
//! assert!(doc.contains_section("empty"));
//! ```

use crate::line::{self, Line};
use crate::{Document, IniOptions, SyntaxError};

/// The INI decoder.
///
/// Holds the decode state: the current section, the current line number and
/// the document being built. Consumed by [`Decoder::decode`].
pub struct Decoder<'de> {
    input: &'de str,
    line: usize,
    current_section: Option<&'de str>,
    keep_empty_sections: bool,
    document: Document,
}

impl<'de> Decoder<'de> {
    /// Creates a decoder with default options.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, &IniOptions::default())
    }

    /// Creates a decoder with the given options.
    #[must_use]
    pub fn with_options(input: &'de str, options: &IniOptions) -> Self {
        Decoder {
            input,
            line: 0,
            current_section: None,
            keep_empty_sections: options.keep_empty_sections,
            document: Document::new(),
        }
    }

    /// Runs the decoder to completion.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] for the first line that is a key-value pair
    /// outside of any section, or that is not blank, a header or a pair.
    pub fn decode(mut self) -> Result<Document, SyntaxError> {
        let input = self.input;
        for raw in input.lines() {
            self.line += 1;
            self.process(raw).map_err(|err| {
                log::debug!("decode aborted: {err}");
                err
            })?;
        }

        log::debug!(
            "decoded {} section(s) from {} line(s)",
            self.document.len(),
            self.line
        );
        Ok(self.document)
    }

    /// Folds one physical line into the decode state.
    fn process(&mut self, raw: &'de str) -> Result<(), SyntaxError> {
        let classified = line::classify(raw);
        log::trace!("line {}: {:?}", self.line, classified);

        match classified {
            Line::Section(name) => {
                self.current_section = Some(name);
                if self.keep_empty_sections {
                    self.document.section_mut(name);
                }
            }
            Line::KeyValue { key, value } => {
                let section = self
                    .current_section
                    .ok_or_else(|| SyntaxError::missing_section(self.line))?;
                self.document.set(section, key, value);
            }
            Line::Blank => {}
            Line::Invalid => return Err(SyntaxError::unrecognized(self.line)),
        }

        Ok(())
    }
}
