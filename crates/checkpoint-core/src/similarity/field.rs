//! Extracting the compared text from caller records
//!
//! The engine never looks at a record beyond one text value. A [`TextField`]
//! decides which value that is:
//!
//! - a `str` key, for records implementing [`FieldLookup`]
//! - [`field_fn`], wrapping an accessor function
//! - [`AsText`], for records that are text themselves

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use checkpoint_domain::CaseRecord;

/// Records that expose text attributes by name
pub trait FieldLookup {
    /// The attribute's text, or `None` when it is absent or not text
    fn field(&self, key: &str) -> Option<&str>;
}

/// Pulls the text to compare out of a record
pub trait TextField<T: ?Sized> {
    fn text<'a>(&self, item: &'a T) -> Option<Cow<'a, str>>;
}

impl<T: FieldLookup + ?Sized> TextField<T> for str {
    fn text<'a>(&self, item: &'a T) -> Option<Cow<'a, str>> {
        item.field(self).map(Cow::Borrowed)
    }
}

impl<T: FieldLookup + ?Sized> TextField<T> for String {
    fn text<'a>(&self, item: &'a T) -> Option<Cow<'a, str>> {
        item.field(self).map(Cow::Borrowed)
    }
}

/// Accessor-function field; build with [`field_fn`]
#[derive(Debug, Clone, Copy)]
pub struct FieldFn<F>(F);

/// Wrap an accessor function as a [`TextField`].
///
/// ```
/// use checkpoint_core::similarity::{field_fn, find_match};
///
/// struct Person { full_name: String }
///
/// let people = vec![Person { full_name: "Juan Pérez".into() }];
/// let by_name = field_fn(|p: &Person| Some(p.full_name.as_str()));
/// assert!(find_match(&people, &by_name, "juan perez").is_some());
/// ```
pub fn field_fn<T: ?Sized, F>(accessor: F) -> FieldFn<F>
where
    F: Fn(&T) -> Option<&str>,
{
    FieldFn(accessor)
}

impl<T: ?Sized, F> TextField<T> for FieldFn<F>
where
    F: Fn(&T) -> Option<&str>,
{
    fn text<'a>(&self, item: &'a T) -> Option<Cow<'a, str>> {
        (self.0)(item).map(Cow::Borrowed)
    }
}

/// Compares the record itself, for slices of strings
#[derive(Debug, Clone, Copy, Default)]
pub struct AsText;

impl<T: AsRef<str> + ?Sized> TextField<T> for AsText {
    fn text<'a>(&self, item: &'a T) -> Option<Cow<'a, str>> {
        Some(Cow::Borrowed(item.as_ref()))
    }
}

impl FieldLookup for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldLookup for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// JSON objects; non-string values are not text
impl FieldLookup for serde_json::Value {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(serde_json::Value::as_str)
    }
}

impl FieldLookup for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(serde_json::Value::as_str)
    }
}

impl FieldLookup for CaseRecord {
    fn field(&self, key: &str) -> Option<&str> {
        self.attribute(key)
    }
}
