//! Whole-document entry points.
//!
//! A document is a single named root tag, normally a compound. Compression
//! is not handled here; wrap the stream in a decoder before calling these.

use std::io::{Read, Write};

use log::{debug, trace};

use crate::{
    ByteOrder, Compound, Error, ReadOptions, Reader, Result, Tag, TagID, Value, Writer, cold_path,
};

/// Reads the root tag of a document from `source`.
#[inline]
pub fn read_tag<O: ByteOrder>(source: impl Read) -> Result<Tag> {
    read_tag_with_options::<O>(source, ReadOptions::default())
}

pub fn read_tag_with_options<O: ByteOrder>(source: impl Read, options: ReadOptions) -> Result<Tag> {
    let mut reader = Reader::<_, O>::with_options(source, options);
    match reader.read_root() {
        Ok(tag) => {
            trace!("read root {:?} tag {:?}", tag.tag_id(), tag.name());
            Ok(tag)
        }
        Err(e) => {
            debug!("failed to read NBT document: {e}");
            Err(e)
        }
    }
}

/// Reads a document whose root must be a compound, returning the root's name
/// and contents.
pub fn read_compound<O: ByteOrder>(source: impl Read) -> Result<(String, Compound)> {
    let (name, value) = read_tag::<O>(source)?.into_parts();
    match value {
        Value::Compound(compound) => Ok((name, compound)),
        other => {
            cold_path();
            Err(Error::TagMismatch(TagID::Compound as u8, other.tag_id() as u8))
        }
    }
}

/// Reads a document from a byte slice, requiring that nothing follows the
/// root tag.
///
/// ```
/// use nbt_tree::{BigEndian, Error, from_slice};
///
/// let tag = from_slice::<BigEndian>(&[0x0A, 0x00, 0x00, 0x00]).unwrap();
/// assert_eq!(tag.name(), "");
///
/// let err = from_slice::<BigEndian>(&[0x0A, 0x00, 0x00, 0x00, 0xFF]).unwrap_err();
/// assert!(matches!(err, Error::TrailingData(1)));
/// ```
pub fn from_slice<O: ByteOrder>(data: &[u8]) -> Result<Tag> {
    let mut reader = Reader::<_, O>::new(data);
    let tag = reader.read_root()?;
    let rest = reader.into_inner();
    if !rest.is_empty() {
        cold_path();
        return Err(Error::TrailingData(rest.len()));
    }
    trace!("read root {:?} tag {:?} from slice", tag.tag_id(), tag.name());
    Ok(tag)
}

/// Writes `tag` as the root of a document.
pub fn write_tag<O: ByteOrder>(sink: impl Write, tag: &Tag) -> Result<()> {
    trace!("writing root {:?} tag {:?}", tag.tag_id(), tag.name());
    Writer::<_, O>::new(sink).write_tag(tag.name(), tag.value())
}

/// Writes a compound as a document root named `name`.
pub fn write_compound<O: ByteOrder>(sink: impl Write, name: &str, compound: &Compound) -> Result<()> {
    trace!("writing root compound {name:?}");
    let mut writer = Writer::<_, O>::new(sink);
    writer.write_tag_id(TagID::Compound)?;
    writer.write_string(name)?;
    compound.write_payload(&mut writer)
}

pub fn to_vec<O: ByteOrder>(tag: &Tag) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_tag::<O>(&mut buf, tag)?;
    Ok(buf)
}

#[cfg(feature = "shared")]
pub fn from_bytes<O: ByteOrder>(data: bytes::Bytes) -> Result<Tag> {
    from_slice::<O>(&data)
}

#[cfg(feature = "shared")]
pub fn to_bytes<O: ByteOrder>(tag: &Tag) -> Result<bytes::Bytes> {
    to_vec::<O>(tag).map(bytes::Bytes::from)
}
