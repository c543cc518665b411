//! INI Format Reference
//!
//! This module documents the INI dialect read and written by this library.
//! It contains no code.
//!
//! # Overview
//!
//! A document is a sequence of sections. Each section starts with a header
//! and holds `key = value` pairs. Lines are independent of each other: there
//! are no continuation lines and no multi-line values.
//!
//! # Grammar
//!
//! ```text
//! file      := (section)*
//! section   := header (kv_line | blank_or_comment)*
//! header    := '[' WS* name WS* ']' WS* comment? NEWLINE     ; name non-empty after trim
//! kv_line   := WS* key WS* '=' WS* value WS* comment? NEWLINE
//! comment   := ('#' | ';') ANY*
//! ```
//!
//! `WS` is space, tab, carriage return or line feed. No other character counts
//! as blank: a form feed before a header makes the line invalid.
//!
//! ## Comments
//!
//! A comment starts at the **first** `#` or `;` anywhere on the line and runs
//! to its end:
//!
//! ```text
//! # whole-line comment
//! ; also a whole-line comment
//! [Section] # trailing comment
//! money = 100# no space needed
//! url = http://example.com/#top   ; value is "http://example.com/"
//! ```
//!
//! There is no escape syntax. A value cannot contain `#` or `;`, and the
//! encoder writes such values unchanged, so they come back truncated.
//!
//! ## Section Headers
//!
//! After trimming, the line must start with `[`, end with `]`, and the text
//! between them must be non-empty once trimmed. `[ Section 2 ]` names the
//! section `Section 2`. `[]` and `[   ]` are not headers (and, not being
//! blank or pairs, are syntax errors).
//!
//! A header is checked before a pair, so `[a=b]` is the section `a=b`.
//!
//! Repeating a header continues the same section.
//!
//! ## Key-Value Pairs
//!
//! The line is split at its **first** `=`; both halves are trimmed:
//!
//! ```text
//! industry =s=j       ; key "industry", value "s=j"
//! ke y2= va lue       ; key "ke y2", value "va lue"
//! empty =             ; key "empty", value ""
//! ```
//!
//! The key must be non-empty. A line such as `= value` is a syntax error.
//! A pair before the first header is a syntax error. A repeated key keeps
//! the last value.
//!
//! ## Empty Sections
//!
//! A header followed by no pairs produces no section, unless
//! [`IniOptions::keep_empty_sections`](crate::IniOptions::keep_empty_sections)
//! is set.
//!
//! # Canonical Output
//!
//! Encoding writes sections in ascending byte order of their names and keys in
//! ascending byte order within each section. Each section is followed by one
//! blank line:
//!
//! ```text
//! [Section 1]
//! blog = http://git.github.com
//! name = git
//!
//! [Section 2]
//! industry = s=j
//! money = 100
//! user = suni
//!
//! ```
//!
//! Byte order means uppercase letters sort before lowercase ones: `Happy`
//! comes before `new`.
//!
//! # Errors
//!
//! | Situation | Error |
//! |-----------|-------|
//! | pair before any header | `syntax error at line N: expected a section header` |
//! | line that is not blank, a header or a pair | `syntax error at line N: unrecognized syntax` |
//!
//! Line numbers are 1-based and count every physical line, comments and
//! blank lines included.
//!
//! # Typed Values
//!
//! Values are stored as strings. [`Value::to`](crate::Value::to) reads them
//! as numbers or booleans on demand; see the [`value`](crate::value) module
//! for the exact rules.
