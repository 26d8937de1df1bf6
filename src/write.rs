use std::{io::Write, marker::PhantomData};

use zerocopy::byteorder;

use crate::{ByteOrder, Error, Result, TagID, Value, cold_path};

macro_rules! write_array {
    ($self:ident, $values:expr, $type:ident, $size:literal) => {{
        let values = $values;
        $self.write_len(values.len())?;
        let mut buf = Vec::with_capacity(values.len() * $size);
        for value in values {
            buf.extend_from_slice(&byteorder::$type::<O>::new(*value).to_bytes());
        }
        $self.put_bytes(&buf)?;
    }};
}

/// The tag-stream encoder, the mirror image of [`Reader`](crate::Reader).
pub struct Writer<W, O: ByteOrder> {
    inner: W,
    _marker: PhantomData<O>,
}

impl<W: Write, O: ByteOrder> Writer<W, O> {
    #[inline]
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Sink errors are always [`Error::IO`], even `UnexpectedEof`; the
    /// `From<io::Error>` mapping to [`Error::EndOfFile`] is for the read side.
    #[inline]
    fn put_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes).map_err(Error::IO)
    }

    #[inline]
    pub fn write_tag_id(&mut self, tag_id: TagID) -> Result<()> {
        self.put_bytes(&[tag_id as u8])
    }

    /// Writes the END byte that closes a compound payload.
    #[inline]
    pub fn write_end(&mut self) -> Result<()> {
        self.write_tag_id(TagID::End)
    }

    /// Writes an `i32` length prefix.
    pub fn write_len(&mut self, len: usize) -> Result<()> {
        if len > i32::MAX as usize {
            cold_path();
            return Err(Error::ListTooLong(len));
        }
        self.put_bytes(&byteorder::I32::<O>::new(len as i32).to_bytes())
    }

    /// Writes a `u16`-prefixed modified UTF-8 string.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        let encoded = simd_cesu8::mutf8::encode(value);
        if encoded.len() > u16::MAX as usize {
            cold_path();
            return Err(Error::StringTooLong(encoded.len()));
        }
        self.put_bytes(&byteorder::U16::<O>::new(encoded.len() as u16).to_bytes())?;
        self.put_bytes(&encoded)
    }

    /// Writes one full tag: type id, name, payload.
    pub fn write_tag(&mut self, name: &str, value: &Value) -> Result<()> {
        self.write_tag_id(value.tag_id())?;
        self.write_string(name)?;
        self.write_value(value)
    }

    /// Writes the payload of `value`, recursing into lists and compounds.
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Byte(value) => self.put_bytes(&[*value as u8])?,
            Value::Short(value) => self.put_bytes(&byteorder::I16::<O>::new(*value).to_bytes())?,
            Value::Int(value) => self.put_bytes(&byteorder::I32::<O>::new(*value).to_bytes())?,
            Value::Long(value) => self.put_bytes(&byteorder::I64::<O>::new(*value).to_bytes())?,
            Value::Float(value) => self.put_bytes(&byteorder::F32::<O>::new(*value).to_bytes())?,
            Value::Double(value) => self.put_bytes(&byteorder::F64::<O>::new(*value).to_bytes())?,
            Value::ByteArray(values) => {
                self.write_len(values.len())?;
                let bytes: Vec<u8> = values.iter().map(|b| *b as u8).collect();
                self.put_bytes(&bytes)?;
            }
            Value::String(value) => self.write_string(value)?,
            Value::List(list) => list.write_payload(self)?,
            Value::Compound(compound) => compound.write_payload(self)?,
            Value::IntArray(values) => write_array!(self, values, I32, 4),
            Value::LongArray(values) => write_array!(self, values, I64, 8),
        }
        Ok(())
    }
}
