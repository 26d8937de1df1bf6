use std::{io::Read, marker::PhantomData};

use zerocopy::{FromBytes, byteorder};

use crate::{
    ByteOrder, Compound, Error, List, ReadOptions, Result, Tag, TagID, Value, cold_path,
};

macro_rules! read_primitive {
    ($self:ident, $type:ident, $size:literal) => {{
        let bytes = $self.read_array::<$size>()?;
        byteorder::$type::<O>::from_bytes(bytes).get()
    }};
}

macro_rules! read_array {
    ($self:ident, $type:ident, $size:literal) => {{
        let len = $self.read_len()?;
        let byte_len = len.checked_mul($size).ok_or_else(|| {
            cold_path();
            Error::ListTooLong(len)
        })?;
        let bytes = $self.read_bytes(byte_len)?;
        let values = <[byteorder::$type<O>]>::ref_from_bytes(&bytes).map_err(|_| {
            cold_path();
            Error::EndOfFile
        })?;
        values.iter().map(|value| value.get()).collect()
    }};
}

/// The tag-stream decoder.
///
/// Reads tag headers (type id and modified UTF-8 name) and dispatches on the
/// type id to decode payloads, recursing through [`List::read_payload`] and
/// [`Compound::read_payload`]. Every list or compound payload counts one
/// level against [`ReadOptions::max_depth`].
pub struct Reader<R, O: ByteOrder> {
    inner: R,
    depth: usize,
    options: ReadOptions,
    _marker: PhantomData<O>,
}

impl<R: Read, O: ByteOrder> Reader<R, O> {
    /// Upper bound on capacity reserved up front from a length prefix, so a
    /// forged length cannot force a huge allocation before the bytes exist.
    pub(crate) const PREALLOC_LIMIT: usize = 4096;

    #[inline]
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, ReadOptions::default())
    }

    #[inline]
    pub fn with_options(inner: R, options: ReadOptions) -> Self {
        Self {
            inner,
            depth: 0,
            options,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }

    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(Self::PREALLOC_LIMIT));
        let read = (&mut self.inner).take(len as u64).read_to_end(&mut buf)?;
        if read != len {
            cold_path();
            return Err(Error::EndOfFile);
        }
        Ok(buf)
    }

    #[inline]
    pub fn read_tag_id(&mut self) -> Result<TagID> {
        let [tag_id] = self.read_array::<1>()?;
        TagID::try_from(tag_id)
    }

    /// Reads an `i32` length prefix.
    pub fn read_len(&mut self) -> Result<usize> {
        let len = read_primitive!(self, I32, 4);
        if len < 0 {
            cold_path();
            return Err(Error::NegativeLength(len));
        }
        Ok(len as usize)
    }

    /// Reads a `u16`-prefixed modified UTF-8 string.
    ///
    /// Bytes that are not valid modified UTF-8 fail with
    /// [`Error::InvalidString`], so a decoded name always encodes back to the
    /// same bytes.
    pub fn read_string(&mut self) -> Result<String> {
        let len = read_primitive!(self, U16, 2) as usize;
        let bytes = self.read_bytes(len)?;
        let decoded = simd_cesu8::mutf8::decode_strict(&bytes).map_err(|_| {
            cold_path();
            Error::InvalidString
        })?;
        Ok(decoded.into_owned())
    }

    /// Runs `f` one nesting level deeper.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.options.max_depth {
            cold_path();
            return Err(Error::DepthLimitExceeded(self.options.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Decodes the payload of a value of kind `tag_id`.
    pub fn read_value(&mut self, tag_id: TagID) -> Result<Value> {
        Ok(match tag_id {
            TagID::End => {
                cold_path();
                return Err(Error::InvalidTagType(TagID::End as u8));
            }
            TagID::Byte => Value::Byte(self.read_array::<1>()?[0] as i8),
            TagID::Short => Value::Short(read_primitive!(self, I16, 2)),
            TagID::Int => Value::Int(read_primitive!(self, I32, 4)),
            TagID::Long => Value::Long(read_primitive!(self, I64, 8)),
            TagID::Float => Value::Float(read_primitive!(self, F32, 4)),
            TagID::Double => Value::Double(read_primitive!(self, F64, 8)),
            TagID::ByteArray => {
                let len = self.read_len()?;
                let bytes = self.read_bytes(len)?;
                Value::ByteArray(bytes.into_iter().map(|b| b as i8).collect())
            }
            TagID::String => Value::String(self.read_string()?),
            TagID::IntArray => Value::IntArray(read_array!(self, I32, 4)),
            TagID::LongArray => Value::LongArray(read_array!(self, I64, 8)),
            TagID::List => Value::List(self.nested(|reader| {
                let mut list = List::new();
                list.read_payload(reader)?;
                Ok(list)
            })?),
            TagID::Compound => Value::Compound(self.nested(|reader| {
                let mut compound = Compound::new();
                compound.read_payload(reader)?;
                Ok(compound)
            })?),
        })
    }

    /// Reads the next child of the compound being decoded, or `None` once the
    /// END byte that closes it has been consumed.
    pub fn read_sibling(&mut self) -> Result<Option<Tag>> {
        let tag_id = self.read_tag_id()?;
        if tag_id == TagID::End {
            return Ok(None);
        }
        let name = self.read_string()?;
        let value = self.read_value(tag_id)?;
        Ok(Some(Tag::new(name, value)))
    }

    /// Reads sibling tags up to and including the END byte.
    pub fn read_siblings_until_end(&mut self) -> Result<Vec<Tag>> {
        let mut tags = Vec::new();
        while let Some(tag) = self.read_sibling()? {
            tags.push(tag);
        }
        Ok(tags)
    }

    /// Reads one complete named tag, as found at the root of a document.
    pub fn read_root(&mut self) -> Result<Tag> {
        match self.read_sibling()? {
            Some(tag) => Ok(tag),
            None => {
                cold_path();
                Err(Error::InvalidTagType(TagID::End as u8))
            }
        }
    }
}
