//! The in-memory INI document.
//!
//! A [`Document`] maps section names to [`Section`]s and a [`Section`] maps
//! keys to [`Value`]s. Both wrap a [`BTreeMap`] so iteration is always in
//! ascending byte-wise key order, which is what makes encoding deterministic
//! across runs and platforms.
//!
//! ## Why BTreeMap?
//!
//! INI output is canonical: sections and keys are written sorted, whatever
//! order they were inserted or decoded in. Keeping the maps sorted means the
//! encoder never has to sort anything itself.
//!
//! ## Indexing
//!
//! Reading through `[]` never panics: a missing section reads as an empty
//! section and a missing key reads as the empty value. Writing through `[]`
//! creates whatever is missing.
//!
//! ```rust
//! use inifile::{Document, Value};
//!
//! let mut doc = Document::new();
//! doc["server"]["port"] = Value::from(8080);
//!
//! assert_eq!(doc["server"]["port"], "8080");
//! assert!(doc["client"]["port"].is_empty());
//! assert!(doc.find("client").is_none());
//! ```

use crate::Value;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Empty section returned when indexing a missing section.
static EMPTY_SECTION: Section = Section::new();

/// Empty value returned when indexing a missing key.
static EMPTY_VALUE: Value = Value::EMPTY;

/// An ordered set of `key = value` pairs under one `[header]`.
///
/// # Examples
///
/// ```rust
/// use inifile::{Section, Value};
///
/// let mut section = Section::new();
/// section.insert("b", "2");
/// section.insert("a", "1");
///
/// // Iteration is always sorted by key
/// let keys: Vec<_> = section.keys().cloned().collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section(BTreeMap<String, Value>);

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub const fn new() -> Self {
        Section(BTreeMap::new())
    }

    /// Inserts a pair, returning the previous value of the key if any.
    ///
    /// ```rust
    /// use inifile::Section;
    ///
    /// let mut section = Section::new();
    /// assert!(section.insert("key", "a").is_none());
    /// assert_eq!(section.insert("key", "b").unwrap(), "a");
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Looks a value up by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Looks a value up by key for modification, without creating it.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the section holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in ascending order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in ascending key order.
    pub fn values(&self) -> btree_map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the pairs, in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Index<&str> for Section {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&EMPTY_VALUE)
    }
}

/// Creates the key with an empty value if it is missing.
///
/// The same encoding limitations as [`Document::set`] apply to the key and
/// to whatever value is stored.
impl IndexMut<&str> for Section {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.0.entry(key.to_string()).or_default()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Section {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Section {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Section(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Section {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(&self.0)
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<String, Value>::deserialize(deserializer).map(Section)
    }
}

/// A decoded INI document: sections by name.
///
/// Created empty with [`Document::new`], by [`decode`](crate::decode), or by
/// the [`ini!`](crate::ini) macro.
///
/// # Examples
///
/// ```rust
/// use inifile::Document;
///
/// let mut doc = Document::new();
/// doc.set("Section 3", "new", "try");
/// doc.set("Section 3", "Happy", "yes");
///
/// assert_eq!(doc.to_string(), "[Section 3]\nHappy = yes\nnew = try\n\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document(BTreeMap<String, Section>);

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Document(BTreeMap::new())
    }

    /// Looks a section up without creating it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.0.get(name)
    }

    /// Alias of [`Document::get`].
    ///
    /// ```rust
    /// let doc = inifile::decode("[Name]\nkey=value").unwrap();
    /// assert!(doc.find("Name").is_some());
    /// assert!(doc.find("Other").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Section> {
        self.get(name)
    }

    /// Looks a section up for modification, without creating it.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.0.get_mut(name)
    }

    /// Returns the named section, creating it empty if it does not exist.
    pub fn section_mut(&mut self, name: impl Into<String>) -> &mut Section {
        self.0.entry(name.into()).or_default()
    }

    /// Looks a value up without creating anything.
    ///
    /// ```rust
    /// let doc = inifile::decode("[a]\nk = v").unwrap();
    /// assert_eq!(doc.get_value("a", "k").map(|v| v.as_str()), Some("v"));
    /// assert!(doc.get_value("a", "missing").is_none());
    /// ```
    #[must_use]
    pub fn get_value(&self, section: &str, key: &str) -> Option<&Value> {
        self.0.get(section).and_then(|s| s.get(key))
    }

    /// Sets `section.key = value`, creating the section if needed.
    ///
    /// Returns the previous value of the key if any.
    ///
    /// # Limitations
    ///
    /// Any key and value are accepted, but [`encode`](crate::encode) only
    /// writes them back faithfully when the key is non-empty and free of `=`,
    /// `#` and `;`, the value is free of `#`, `;` and line breaks, and neither
    /// starts or ends with a blank.
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.section_mut(section).insert(key, value)
    }

    /// Inserts a whole section, returning the one it replaced if any.
    pub fn insert_section(&mut self, name: impl Into<String>, section: Section) -> Option<Section> {
        self.0.insert(name.into(), section)
    }

    /// Removes a section, returning it if it was present.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.0.remove(name)
    }

    /// Returns `true` if the section exists, even when it is empty.
    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of sections, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over section names, in ascending order.
    pub fn sections(&self) -> btree_map::Keys<'_, String, Section> {
        self.0.keys()
    }

    /// Returns an iterator over `(name, section)`, in ascending name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Section> {
        self.0.iter()
    }
}

impl Index<&str> for Document {
    type Output = Section;

    fn index(&self, name: &str) -> &Section {
        self.0.get(name).unwrap_or(&EMPTY_SECTION)
    }
}

impl IndexMut<&str> for Document {
    fn index_mut(&mut self, name: &str) -> &mut Section {
        self.section_mut(name)
    }
}

impl fmt::Display for Document {
    /// Writes the canonical encoding with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode(self))
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Section);
    type IntoIter = btree_map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Document {
    type Item = (String, Section);
    type IntoIter = btree_map::IntoIter<String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Section)> for Document {
    fn from_iter<T: IntoIterator<Item = (K, Section)>>(iter: T) -> Self {
        Document(iter.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }
}

/// Merges sections into the document.
///
/// A section that already exists keeps its other keys; keys present in both
/// take the incoming value.
impl<K: Into<String>> Extend<(K, Section)> for Document {
    fn extend<T: IntoIterator<Item = (K, Section)>>(&mut self, iter: T) {
        for (name, section) in iter {
            self.section_mut(name).extend(section);
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(&self.0)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = Document;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of section names to key-value maps")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut doc = Document::new();
                while let Some(entry) = map.next_entry::<String, Section>()? {
                    // Repeated names merge, the same way repeated headers do.
                    doc.extend(Some(entry));
                }
                Ok(doc)
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
