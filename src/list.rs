use std::io::{Read, Write};

use crate::{
    ByteOrder, Error, NBTKind, Plain, Reader, Result, TagID, Value, Writer, cold_path,
};

/// A homogeneous, ordered sequence of unnamed values.
///
/// Every element has the kind given by [`element`](Self::element). A fresh
/// list has element type [`TagID::End`] and adopts the kind of the first
/// value pushed into it. Clearing a list keeps its element type, so an
/// emptied `List<Int>` is still written as a list of Int.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct List {
    element: TagID,
    items: Vec<Value>,
}

impl List {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list that only accepts values of kind `element`.
    #[inline]
    pub fn with_element(element: TagID) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Builds a list from `values`, failing on the first value whose kind
    /// differs from the first one.
    pub fn from_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Result<Self> {
        let mut list = Self::new();
        for value in values {
            list.push(value)?;
        }
        Ok(list)
    }

    #[inline]
    pub fn element(&self) -> TagID {
        self.element
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Typed element access; see [`Compound::get_as`](crate::Compound::get_as).
    pub fn get_as<T: NBTKind>(&self, index: usize) -> Option<&T> {
        self.items.get(index).and_then(T::from_value)
    }

    /// Mutable typed element access. Only a `T` matching the element type can
    /// be borrowed, so the list stays homogeneous.
    pub fn get_as_mut<T: NBTKind>(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index).and_then(T::from_value_mut)
    }

    fn check(&mut self, value: &Value) -> Result<()> {
        let actual = value.tag_id();
        if self.element == TagID::End && self.items.is_empty() {
            self.element = actual;
        } else if self.element != actual {
            cold_path();
            return Err(Error::TagMismatch(self.element as u8, actual as u8));
        }
        Ok(())
    }

    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.check(&value)?;
        self.items.push(value);
        Ok(())
    }

    /// Inserts at `index`, shifting later elements. Panics if `index > len`,
    /// like [`Vec::insert`].
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.check(&value)?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Replaces the element at `index`, returning the old one. Out of range
    /// indices are reported as `Ok(None)` and leave the list untouched.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Option<Value>> {
        let value = value.into();
        if index >= self.items.len() {
            return Ok(None);
        }
        if value.tag_id() != self.element {
            cold_path();
            return Err(Error::TagMismatch(self.element as u8, value.tag_id() as u8));
        }
        Ok(Some(std::mem::replace(&mut self.items[index], value)))
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn to_plain(&self) -> Vec<Plain> {
        self.items.iter().map(Value::to_plain).collect()
    }

    /// Decodes a list payload (element type, length, elements) from `reader`,
    /// replacing the current contents.
    pub fn read_payload<R: Read, O: ByteOrder>(&mut self, reader: &mut Reader<R, O>) -> Result<()> {
        let element = reader.read_tag_id()?;
        let len = reader.read_len()?;
        if element == TagID::End && len != 0 {
            cold_path();
            return Err(Error::InvalidTagType(TagID::End as u8));
        }
        self.element = element;
        self.items.clear();
        self.items.reserve(len.min(Reader::<R, O>::PREALLOC_LIMIT));
        for _ in 0..len {
            let value = reader.read_value(element)?;
            self.items.push(value);
        }
        Ok(())
    }

    /// Encodes this list's payload to `writer`.
    pub fn write_payload<W: Write, O: ByteOrder>(&self, writer: &mut Writer<W, O>) -> Result<()> {
        writer.write_tag_id(self.element)?;
        writer.write_len(self.items.len())?;
        for value in &self.items {
            writer.write_value(value)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
