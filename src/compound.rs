use std::io::{Read, Write};

use indexmap::IndexMap;

use crate::{
    ByteOrder, Error, NBTKind, PlainCompound, ReadOptions, Reader, Result, Tag, Value, Writer,
    cold_path,
};

/// An insertion-ordered map from name to [`Value`]: one level of the tree.
///
/// The key of an entry is the child's name; there is no other copy of it.
/// [`put`](Self::put) stores a [`Tag`] under its own name and
/// [`remove`](Self::remove) hands the name back with the value. Names are
/// unique among the direct children of one compound, and putting a tag whose
/// name already exists replaces that entry in place, keeping its position.
///
/// A compound carries no name of its own. The named form, such as a document
/// root or a compound that has been taken out of its parent, is a [`Tag`]
/// whose value is a `Compound`; cloning that `Tag` copies the name as well.
///
/// Children are owned. `clone` is a deep copy, and the only way to change
/// the entries is through `&mut self`, so a borrowed iterator can never
/// observe a concurrent mutation. Equality compares entries in order.
///
/// On the wire a compound payload is its children written as full tags in
/// order, followed by a single END (`0x00`) byte. There is no length prefix.
#[derive(Clone, Debug, Default)]
pub struct Compound {
    entries: IndexMap<String, Value>,
}

impl Compound {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the child stored under `key`, whatever its kind.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns the child stored under `key` as a `T`.
    ///
    /// Fails with [`Error::KeyNotFound`] if there is no such child and with
    /// [`Error::TagMismatch`] if the child is of another kind.
    ///
    /// ```
    /// use nbt_tree::{Compound, Error};
    ///
    /// let mut player = Compound::new();
    /// player.insert("age", 30i32);
    ///
    /// assert_eq!(*player.get_as::<i32>("age").unwrap(), 30);
    /// assert!(matches!(player.get_as::<String>("age"), Err(Error::TagMismatch(8, 3))));
    /// assert!(matches!(player.get_as::<i32>("name"), Err(Error::KeyNotFound(_))));
    /// ```
    pub fn get_as<T: NBTKind>(&self, key: &str) -> Result<&T> {
        let value = self.get(key).ok_or_else(|| {
            cold_path();
            Error::KeyNotFound(key.to_owned())
        })?;
        let actual = value.tag_id();
        T::from_value(value).ok_or_else(|| {
            cold_path();
            Error::TagMismatch(T::TAG_ID as u8, actual as u8)
        })
    }

    pub fn get_as_mut<T: NBTKind>(&mut self, key: &str) -> Result<&mut T> {
        let value = self.get_mut(key).ok_or_else(|| {
            cold_path();
            Error::KeyNotFound(key.to_owned())
        })?;
        let actual = value.tag_id();
        T::from_value_mut(value).ok_or_else(|| {
            cold_path();
            Error::TagMismatch(T::TAG_ID as u8, actual as u8)
        })
    }

    /// Stores `tag` under its own name and returns the entry it replaced.
    ///
    /// ```
    /// use nbt_tree::{Compound, Tag};
    ///
    /// let mut compound = Compound::new();
    /// assert_eq!(compound.put(Tag::new("hp", 20i16)), None);
    /// let old = compound.put(Tag::new("hp", 18i16)).unwrap();
    /// assert_eq!(old.name(), "hp");
    /// assert_eq!(compound.len(), 1);
    /// ```
    pub fn put(&mut self, tag: Tag) -> Option<Tag> {
        let (name, value) = tag.into_parts();
        match self.entries.get_mut(&name) {
            Some(slot) => {
                let old = std::mem::replace(slot, value);
                Some(Tag::new(name, old))
            }
            None => {
                self.entries.insert(name, value);
                None
            }
        }
    }

    /// Shorthand for `put(Tag::new(key, value))` that returns only the
    /// replaced value.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.put(Tag::new(key, value)).map(Tag::into_value)
    }

    /// Removes the entry named `key`, shifting later entries down so the
    /// remaining order is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.entries
            .shift_remove_entry(key)
            .map(|(name, value)| Tag::new(name, value))
    }

    /// Removes the entry named `key` and returns its payload as a `T`.
    ///
    /// Fails like [`get_as`](Self::get_as); on failure the compound is left
    /// unchanged.
    ///
    /// ```
    /// use nbt_tree::{Compound, Error};
    ///
    /// let mut item = Compound::new();
    /// item.insert("id", "minecraft:stone");
    /// assert!(matches!(item.remove_as::<i32>("id"), Err(Error::TagMismatch(3, 8))));
    /// assert_eq!(item.remove_as::<String>("id").unwrap(), "minecraft:stone");
    /// assert!(item.is_empty());
    /// ```
    pub fn remove_as<T: NBTKind>(&mut self, key: &str) -> Result<T> {
        self.get_as::<T>(key)?;
        let value = self.entries.shift_remove(key).ok_or_else(|| {
            cold_path();
            Error::KeyNotFound(key.to_owned())
        })?;
        T::try_from_value(value).map_err(|value| {
            cold_path();
            Error::TagMismatch(T::TAG_ID as u8, value.tag_id() as u8)
        })
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.keys().map(String::as_str)
    }

    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.values()
    }

    /// Iterates over `(name, value)` in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }

    /// Deep copy of every child as a named [`Tag`], in order. The result is
    /// independent of `self`.
    pub fn entries(&self) -> Vec<Tag> {
        self.iter()
            .map(|(name, value)| Tag::new(name, value.clone()))
            .collect()
    }

    /// Replaces every entry with `tags`, applying [`put`](Self::put) to each
    /// so that duplicate names collapse to the last one.
    pub fn set_entries(&mut self, tags: impl IntoIterator<Item = Tag>) {
        self.entries.clear();
        self.extend(tags);
    }

    /// Recursively projects this compound into plain data, keeping the
    /// insertion order of keys.
    pub fn to_plain(&self) -> PlainCompound {
        self.iter()
            .map(|(name, value)| (name.to_owned(), value.to_plain()))
            .collect()
    }

    /// Decodes a compound payload from `reader` into `self`.
    ///
    /// Entries are replaced by what is decoded. Each child is stored with
    /// [`put`](Self::put), so duplicate sibling names resolve to the last one.
    /// If decoding fails part way, the children read before the failure stay
    /// inserted and the error is returned unchanged.
    ///
    /// This does not count a nesting level for `self`; the caller does.
    /// [`Reader::read_value`] and [`read_from`](Self::read_from) both count
    /// the payload as one level, so the children of a top-level compound
    /// start at depth 2 either way.
    pub fn read_payload<R: Read, O: ByteOrder>(&mut self, reader: &mut Reader<R, O>) -> Result<()> {
        self.entries.clear();
        while let Some(tag) = reader.read_sibling()? {
            self.put(tag);
        }
        Ok(())
    }

    /// Encodes each child as a full tag in order, then the END byte.
    pub fn write_payload<W: Write, O: ByteOrder>(&self, writer: &mut Writer<W, O>) -> Result<()> {
        for (name, value) in &self.entries {
            writer.write_tag(name, value)?;
        }
        writer.write_end()
    }

    /// [`read_payload`](Self::read_payload) straight from a byte stream,
    /// counting this compound as depth 1.
    #[inline]
    pub fn read_from<O: ByteOrder>(&mut self, source: impl Read) -> Result<()> {
        self.read_from_with_options::<O>(source, ReadOptions::default())
    }

    pub fn read_from_with_options<O: ByteOrder>(
        &mut self,
        source: impl Read,
        options: ReadOptions,
    ) -> Result<()> {
        let mut reader = Reader::<_, O>::with_options(source, options);
        reader.nested(|reader| self.read_payload(reader))
    }

    /// [`write_payload`](Self::write_payload) straight to a byte stream.
    pub fn write_to<O: ByteOrder>(&self, sink: impl Write) -> Result<()> {
        self.write_payload(&mut Writer::<_, O>::new(sink))
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Extend<Tag> for Compound {
    fn extend<T: IntoIterator<Item = Tag>>(&mut self, iter: T) {
        for tag in iter {
            self.put(tag);
        }
    }
}

impl FromIterator<Tag> for Compound {
    fn from_iter<T: IntoIterator<Item = Tag>>(iter: T) -> Self {
        let mut compound = Self::new();
        compound.extend(iter);
        compound
    }
}

impl From<Vec<Tag>> for Compound {
    fn from(tags: Vec<Tag>) -> Self {
        let mut compound = Self::with_capacity(tags.len());
        compound.extend(tags);
        compound
    }
}

/// Borrowing iterator over a [`Compound`], see [`Compound::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Mutable iterator over a [`Compound`]. Names are read-only.
pub struct IterMut<'a> {
    inner: indexmap::map::IterMut<'a, String, Value>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IterMut<'_> {}

/// Owning iterator over a [`Compound`], yielding named tags in order.
pub struct IntoIter {
    inner: indexmap::map::IntoIter<String, Value>,
}

impl Iterator for IntoIter {
    type Item = Tag;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| Tag::new(name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Compound {
    type Item = Tag;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Compound {
    type Item = (&'a str, &'a mut Value);
    type IntoIter = IterMut<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
