use std::io::{Read, Write};

use crate::{ByteOrder, Reader, Result, TagID, Value, Writer};

/// A named node of the tree: the unit that [`Compound::put`](crate::Compound::put)
/// stores and that a document's root is made of.
///
/// Inside a compound the name *is* the entry's key, so a stored child has no
/// second copy of its name that could drift out of sync.
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    name: String,
    value: Value,
}

impl Tag {
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    #[inline]
    pub fn tag_id(&self) -> TagID {
        self.value.tag_id()
    }

    #[inline]
    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Reads one full tag (type id, name, payload) from `source`.
    ///
    /// An END byte where the tag should start is reported as
    /// [`Error::InvalidTagType(0)`](crate::Error::InvalidTagType).
    pub fn read_from<O: ByteOrder>(source: impl Read) -> Result<Self> {
        Reader::<_, O>::new(source).read_root()
    }

    /// Writes this tag (type id, name, payload) to `sink`.
    pub fn write_to<O: ByteOrder>(&self, sink: impl Write) -> Result<()> {
        Writer::<_, O>::new(sink).write_tag(&self.name, &self.value)
    }
}

impl<N: Into<String>, V: Into<Value>> From<(N, V)> for Tag {
    #[inline]
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
