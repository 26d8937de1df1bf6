//! Owned tree codec for NBT (Named Binary Tag) data.
//!
//! A document is one named root [`Tag`], normally holding a [`Compound`]. A
//! compound is an insertion-ordered, uniquely-keyed set of children of any
//! kind, including other compounds and [`List`]s. Every tag carries its type
//! id inline, so a document decodes without a schema.
//!
//! Byte order is a type parameter: [`BigEndian`] for the Java edition
//! format, [`LittleEndian`] for Bedrock.
//!
//! ```
//! use nbt_tree::{BigEndian, Compound, Tag, from_slice, to_vec};
//!
//! let mut player = Compound::new();
//! player.insert("name", "Steve");
//! player.insert("age", 30i32);
//!
//! let bytes = to_vec::<BigEndian>(&Tag::new("", player.clone())).unwrap();
//! let root = from_slice::<BigEndian>(&bytes).unwrap();
//! assert_eq!(root.value().as_compound(), Some(&player));
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;

pub mod compound;
mod document;
mod error;
mod index;
mod list;
mod nbt;
pub mod plain;
mod read;
#[cfg(feature = "serde")]
mod ser;
mod tag;
mod util;
mod value;
mod write;

pub use compound::Compound;
pub use document::*;
pub use error::*;
pub use index::*;
pub use list::*;
pub use nbt::*;
pub use plain::{Plain, PlainCompound};
pub use read::*;
pub use tag::*;
pub use util::*;
pub use value::*;
pub use write::*;
