//! Array type for tessera-value
//!
//! A mutable, index-addressable sequence of [`Value`]s. Storage is a
//! persistent `im::Vector`, so `clone` is cheap and copy-on-write while
//! [`Array::deep_copy`] rebuilds every nested container.
//!
//! Typed insertion helpers take nullable arguments and store `Value::Null`
//! for `None`; the array never contains an absent slot.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use im::Vector;

use crate::core::value::Value;
use crate::error::{ValueError, ValueResult};
use crate::scalar::{IntoNumber, IntoText, Number};

/// Ordered, duplicate-permitting sequence of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Array {
    inner: Vector<Value>,
}

impl Array {
    /// Create an empty array
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Vector::new(),
        }
    }

    /// Create from a Vec
    #[must_use]
    pub fn from_vec(vec: Vec<Value>) -> Self {
        Self {
            inner: Vector::from(vec),
        }
    }

    /// Get the length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    // ==================== Insertion ====================

    /// Append an element; `None` is stored as `Value::Null`
    pub fn add_element(&mut self, element: impl Into<Option<Value>>) {
        self.inner.push_back(element.into().unwrap_or_default());
    }

    /// Append anything convertible to a value
    pub fn push(&mut self, value: impl Into<Value>) {
        self.inner.push_back(value.into());
    }

    /// Append a boolean, or null for `None`
    pub fn add_boolean(&mut self, value: impl Into<Option<bool>>) {
        self.add_element(value.into().map(Value::Boolean));
    }

    /// Append a one-character string, or null for `None`
    pub fn add_char(&mut self, value: impl Into<Option<char>>) {
        self.add_element(value.into().map(Value::from));
    }

    /// Append a string, or null for `None`
    ///
    /// ```
    /// use tessera_value::Array;
    ///
    /// let mut array = Array::new();
    /// array.add_string("Hello");
    /// array.add_string(None::<&str>);
    /// assert_eq!(array.to_string(), r#"["Hello",null]"#);
    /// ```
    pub fn add_string(&mut self, value: impl IntoText) {
        self.add_element(value.into_text().map(Value::String));
    }

    /// Append a number, or null for `None`
    ///
    /// ```
    /// use tessera_value::Array;
    ///
    /// let mut array = Array::new();
    /// array.add_number(1);
    /// array.add_number(2.5);
    /// array.add_number(None::<i32>);
    /// assert_eq!(array.to_string(), "[1,2.5,null]");
    /// ```
    pub fn add_number(&mut self, value: impl IntoNumber) {
        self.add_element(value.into_number().map(Value::Number));
    }

    /// Insert at `index`, shifting later elements up. `index == len` appends.
    pub fn insert(&mut self, index: usize, element: impl Into<Option<Value>>) -> ValueResult<()> {
        if index > self.len() {
            return Err(ValueError::index_out_of_bounds(index, self.len()));
        }
        self.inner.insert(index, element.into().unwrap_or_default());
        Ok(())
    }

    // ==================== Access ====================

    /// Get element at index
    pub fn get(&self, index: usize) -> ValueResult<&Value> {
        self.inner
            .get(index)
            .ok_or_else(|| ValueError::index_out_of_bounds(index, self.len()))
    }

    /// Get a mutable reference to the element at index
    pub fn get_mut(&mut self, index: usize) -> ValueResult<&mut Value> {
        let length = self.len();
        self.inner
            .get_mut(index)
            .ok_or_else(|| ValueError::index_out_of_bounds(index, length))
    }

    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.inner.front()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.inner.back()
    }

    /// Structural membership test
    pub fn contains(&self, value: &Value) -> bool {
        self.inner.iter().any(|v| v == value)
    }

    // ==================== Mutation ====================

    /// Replace the element at `index`, returning the previous one.
    /// `None` is stored as `Value::Null`.
    pub fn set(&mut self, index: usize, element: impl Into<Option<Value>>) -> ValueResult<Value> {
        if index >= self.len() {
            return Err(ValueError::index_out_of_bounds(index, self.len()));
        }
        Ok(self.inner.set(index, element.into().unwrap_or_default()))
    }

    /// Remove and return the element at `index`; later elements shift down.
    pub fn remove(&mut self, index: usize) -> ValueResult<Value> {
        if index >= self.len() {
            return Err(ValueError::index_out_of_bounds(index, self.len()));
        }
        Ok(self.inner.remove(index))
    }

    /// Remove the first element equal to `value`.
    /// Returns `false` when there is none.
    pub fn remove_element(&mut self, value: &Value) -> bool {
        match self.inner.index_of(value) {
            Some(index) => {
                self.inner.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Copy with every nested container freshly allocated
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.inner.iter().map(Value::deep_copy).collect()
    }

    // ==================== Iteration ====================

    pub fn iter(&self) -> im::vector::Iter<'_, Value> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> im::vector::IterMut<'_, Value> {
        self.inner.iter_mut()
    }

    /// Convert to Vec (allocates)
    pub fn to_vec(&self) -> Vec<Value> {
        self.inner.iter().cloned().collect()
    }

    // ==================== Single-element coercions ====================

    /// The only element, for reading a one-element array as a scalar
    pub fn sole(&self) -> ValueResult<&Value> {
        if self.len() == 1 {
            self.get(0)
        } else {
            Err(ValueError::array_size(self.len()))
        }
    }

    pub fn to_boolean(&self) -> ValueResult<bool> {
        self.sole()?.to_boolean()
    }

    pub fn to_text(&self) -> ValueResult<String> {
        self.sole()?.to_text()
    }

    pub fn to_number(&self) -> ValueResult<Number> {
        self.sole()?.to_number()
    }

    pub fn to_f64(&self) -> ValueResult<f64> {
        self.sole()?.to_f64()
    }

    pub fn to_f32(&self) -> ValueResult<f32> {
        self.sole()?.to_f32()
    }

    pub fn to_i64(&self) -> ValueResult<i64> {
        self.sole()?.to_i64()
    }

    pub fn to_i32(&self) -> ValueResult<i32> {
        self.sole()?.to_i32()
    }

    pub fn to_i16(&self) -> ValueResult<i16> {
        self.sole()?.to_i16()
    }

    pub fn to_i8(&self) -> ValueResult<i8> {
        self.sole()?.to_i8()
    }
}

impl Hash for Array {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in &self.inner {
            item.hash(state);
        }
    }
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::core::display::write_array(f, self)
    }
}

impl From<Vec<Value>> for Array {
    fn from(vec: Vec<Value>) -> Self {
        Self::from_vec(vec)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for Array {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

// ==================== IntoIterator ====================

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = im::vector::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter_mut()
    }
}
