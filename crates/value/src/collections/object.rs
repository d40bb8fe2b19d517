//! Object type for tessera-value
//!
//! Insertion-ordered map from unique names to [`Value`]s. Equality and
//! hashing ignore insertion order; rendering follows it.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::core::value::Value;
use crate::scalar::{IntoNumber, IntoText};

/// Name/value container with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    inner: IndexMap<String, Value>,
}

impl Object {
    /// Create an empty object
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Insert or replace a member, returning the previous value.
    /// `None` is stored as `Value::Null`. A replaced member keeps its position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Option<Value>>,
    ) -> Option<Value> {
        self.inner.insert(key.into(), value.into().unwrap_or_default())
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl IntoText) -> Option<Value> {
        self.insert(key, value.into_text().map(Value::String))
    }

    pub fn insert_number(&mut self, key: impl Into<String>, value: impl IntoNumber) -> Option<Value> {
        self.insert(key, value.into_number().map(Value::Number))
    }

    pub fn insert_boolean(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Option<bool>>,
    ) -> Option<Value> {
        self.insert(key, value.into().map(Value::Boolean))
    }

    pub fn insert_char(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Option<char>>,
    ) -> Option<Value> {
        self.insert(key, value.into().map(Value::from))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.inner.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Remove a member; the remaining members keep their relative order
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.inner.iter_mut()
    }

    /// Copy with every nested container freshly allocated
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.inner
            .iter()
            .map(|(k, v)| (k.clone(), v.deep_copy()))
            .collect()
    }
}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Sum of per-entry hashes, so member order does not matter
        let mut sum = 0u64;
        for (key, value) in &self.inner {
            let mut entry = DefaultHasher::new();
            key.hash(&mut entry);
            value.hash(&mut entry);
            sum = sum.wrapping_add(entry.finish());
        }
        self.len().hash(state);
        sum.hash(state);
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::core::display::write_object(f, self)
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for Object {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(o: &Object) -> u64 {
        let mut h = DefaultHasher::new();
        o.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_insert_keeps_names_unique() {
        let mut obj = Object::new();
        assert_eq!(obj.insert_number("a", 1), None);
        assert_eq!(obj.insert_number("a", 2), Some(Value::from(1)));
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("a"), Some(&Value::from(2)));
    }

    #[test]
    fn test_absent_becomes_null() {
        let mut obj = Object::new();
        obj.insert("x", None);
        obj.insert_string("y", None::<&str>);
        obj.insert_boolean("z", None);
        assert!(obj.values().all(Value::is_null));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: Object = [("k1", 1), ("k2", 2)]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), Value::from(v)))
            .collect();
        let b: Object = [("k2", 2), ("k1", 1)]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), Value::from(v)))
            .collect();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_string(), r#"{"k1":1,"k2":2}"#);
        assert_eq!(b.to_string(), r#"{"k2":2,"k1":1}"#);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut obj = Object::new();
        obj.insert_char("a", 'a');
        obj.insert_char("b", 'b');
        obj.insert_char("c", 'c');
        assert_eq!(obj.remove("a"), Some(Value::from("a")));
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["b", "c"]);
        assert!(!obj.contains_key("a"));
    }

    #[test]
    fn test_deep_copy_isolated() {
        let mut obj = Object::new();
        obj.insert("list", Value::array_empty());
        let copy = obj.deep_copy();
        if let Some(list) = obj.get_mut("list") {
            list.as_array_mut().unwrap().add_number(1);
        }
        assert_eq!(copy.to_string(), r#"{"list":[]}"#);
        assert_eq!(obj.to_string(), r#"{"list":[1]}"#);
    }
}
