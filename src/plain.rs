//! Plain-data projection of a tag tree.
//!
//! [`Compound::to_plain`](crate::Compound::to_plain) turns a tree into values
//! that no longer carry NBT bookkeeping: lists lose their element type and
//! become plain vectors, compounds become ordered string-keyed maps.
//!
//! Key order in a [`PlainCompound`] follows the insertion order of the source
//! compound, so comparing two projections is order sensitive.

/// One projected value.
#[derive(Clone, Debug, PartialEq)]
pub enum Plain {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<Plain>),
    Compound(PlainCompound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// An insertion-ordered map from name to [`Plain`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlainCompound {
    entries: Vec<(String, Plain)>,
}

impl PlainCompound {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Plain> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Plain)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl FromIterator<(String, Plain)> for PlainCompound {
    /// Source compounds have unique keys, so no deduplication happens here.
    fn from_iter<T: IntoIterator<Item = (String, Plain)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PlainCompound {
    type Item = (String, Plain);
    type IntoIter = std::vec::IntoIter<(String, Plain)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
