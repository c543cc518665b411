//! # inifile
//!
//! A small library for reading and writing INI configuration files.
//!
//! ## What it does
//!
//! - **Decodes** INI text into a [`Document`]: sections of `key = value` pairs,
//!   with `#`/`;` comments stripped and surrounding blanks trimmed
//! - **Encodes** a [`Document`] back to canonical text: sections and keys sorted,
//!   one blank line after every section
//! - **Converts** raw values to integers, floats and booleans on demand
//! - **Reports** malformed input with the offending line number
//!
//! ## Quick Start
//!
//! ```rust
//! use inifile::{decode, encode};
//!
//! let text = "\
//! ## This is a test comment.
//! [Section 1]
//! name=git ; inline comment
//! blog=http://git.github.com
//!
//! [ Section 2  ]
//! user = suni
//!     money = 100# inline comment without space
//!     industry =s=j
//! ";
//!
//! let mut doc = decode(text).unwrap();
//! assert_eq!(doc["Section 1"]["name"], "git");
//! assert_eq!(doc["Section 2"]["industry"], "s=j");
//! assert_eq!(doc["Section 2"]["money"].to::<u32>(), Ok(100));
//!
//! doc["Section 3"]["new"] = "try".into();
//! doc["Section 3"]["Happy"] = "yes".into();
//!
//! assert_eq!(encode(&doc), "\
//! [Section 1]
//! blog = http://git.github.com
//! name = git
//!
//! [Section 2]
//! industry = s=j
//! money = 100
//! user = suni
//!
//! [Section 3]
//! Happy = yes
//! new = try
//!
//! ");
//! ```
//!
//! ## Files and Streams
//!
//! ```rust,no_run
//! use inifile::{read_file, write_file};
//!
//! let mut doc = read_file("settings.ini")?;
//! doc.set("window", "width", 1280);
//! write_file("settings.ini", &doc)?;
//! # Ok::<(), inifile::Error>(())
//! ```
//!
//! ## Known Limitations
//!
//! - No escape sequences: `#` and `;` always start a comment, the first `=`
//!   always splits key from value
//! - No nested sections and no multi-line values
//! - Comment characters are fixed
//! - [`encode`] does not check its input: a document with an empty key, `=`
//!   in a key, a comment character or line break in a value, or surrounding
//!   blanks is written anyway and does not decode back to the same content
//!
//! See the [`format`] module for the full description of the dialect.

pub mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod line;
pub mod macros;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Decoder;
pub use document::{Document, Section};
pub use error::{DecodeError, Error, Result, SyntaxError, SyntaxErrorKind};
pub use options::{IniOptions, Separator};
pub use ser::Encoder;
pub use value::{FromValue, Value};

use std::fs;
use std::io;
use std::path::Path;

/// Decodes INI text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// let doc = inifile::decode("[Hello World]\nkey = value").unwrap();
/// assert_eq!(doc["Hello World"]["key"], "value");
/// ```
///
/// # Errors
///
/// Returns a [`SyntaxError`] for the first malformed line. No partial
/// document is returned.
pub fn decode(input: &str) -> std::result::Result<Document, SyntaxError> {
    Decoder::from_str(input).decode()
}

/// Decodes INI text with custom options.
///
/// # Errors
///
/// Returns a [`SyntaxError`] for the first malformed line.
pub fn decode_with_options(
    input: &str,
    options: &IniOptions,
) -> std::result::Result<Document, SyntaxError> {
    Decoder::with_options(input, options).decode()
}

/// Encodes a document in canonical form.
///
/// # Examples
///
/// ```rust
/// let doc = inifile::ini! { "b" => { "k" => "v" }, "a" => { "x" => 1 } };
/// assert_eq!(inifile::encode(&doc), "[a]\nx = 1\n\n[b]\nk = v\n\n");
/// ```
///
/// # Limitations
///
/// Text is written as is, with no escaping. The output only decodes back to
/// the same document when every key is non-empty and free of `=`, `#` and
/// `;`, every value is free of `#`, `;` and line breaks, and no key or value
/// starts or ends with a blank. Otherwise the output decodes to different
/// content or fails to decode:
///
/// ```rust
/// let mut doc = inifile::Document::new();
/// doc.set("s", "k", "a#b");
/// assert_eq!(inifile::decode(&inifile::encode(&doc)).unwrap()["s"]["k"], "a");
/// ```
#[must_use]
pub fn encode(document: &Document) -> String {
    encode_with_options(document, &IniOptions::default())
}

/// Encodes a document with custom options.
#[must_use]
pub fn encode_with_options(document: &Document, options: &IniOptions) -> String {
    let mut encoder = Encoder::new(options);
    encoder.encode_document(document);
    encoder.into_inner()
}

/// Decodes a document from a string.
///
/// Same as [`decode`] but returns the crate-level [`Error`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the input is malformed.
pub fn from_str(input: &str) -> Result<Document> {
    Ok(decode(input)?)
}

/// Decodes a document from a string with custom options.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the input is malformed.
pub fn from_str_with_options(input: &str, options: &IniOptions) -> Result<Document> {
    Ok(decode_with_options(input, options)?)
}

/// Decodes a document from UTF-8 bytes.
///
/// # Examples
///
/// ```rust
/// let doc = inifile::from_slice(b"[s]\nk = v").unwrap();
/// assert_eq!(doc["s"]["k"], "v");
/// ```
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not UTF-8, or [`Error::Syntax`]
/// if the text is malformed.
pub fn from_slice(bytes: &[u8]) -> Result<Document> {
    let text = std::str::from_utf8(bytes)?;
    from_str(text)
}

/// Reads a whole stream, then decodes it.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let doc = inifile::from_reader(Cursor::new("[s]\nk = v")).unwrap();
/// assert_eq!(doc["s"]["k"], "v");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or [`Error::Syntax`] if the text
/// is malformed.
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text)
}

/// Reads and decodes the file at `path`.
///
/// # Errors
///
/// Returns [`Error::File`] if the file cannot be read, or [`Error::Syntax`]
/// if its content is malformed.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| Error::file(path, source))?;
    from_str(&text)
}

/// Encodes a document in canonical form.
///
/// Equivalent to [`encode`]; provided for symmetry with [`from_str`].
#[must_use]
pub fn to_string(document: &Document) -> String {
    encode(document)
}

/// Encodes a document with custom options.
#[must_use]
pub fn to_string_with_options(document: &Document, options: &IniOptions) -> String {
    encode_with_options(document, options)
}

/// Encodes a document and writes it to `writer` in one piece.
///
/// # Examples
///
/// ```rust
/// let doc = inifile::ini! { "s" => { "k" => "v" } };
/// let mut buffer = Vec::new();
/// inifile::to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[s]\nk = v\n\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W>(mut writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(encode(document).as_bytes())?;
    Ok(())
}

/// Encodes a document and writes it to the file at `path`, replacing it.
///
/// # Errors
///
/// Returns [`Error::File`] if the file cannot be written.
pub fn write_file<P: AsRef<Path>>(path: P, document: &Document) -> Result<()> {
    let path = path.as_ref();
    log::debug!("writing {} section(s) to {}", document.len(), path.display());
    fs::write(path, encode(document)).map_err(|source| Error::file(path, source))
}
