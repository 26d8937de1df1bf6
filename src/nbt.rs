use crate::{Compound, Error, List, Value};

/// The one-byte type id written in front of every tag on the wire.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum TagID {
    #[default]
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TryFrom<u8> for TagID {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::End,
            1 => Self::Byte,
            2 => Self::Short,
            3 => Self::Int,
            4 => Self::Long,
            5 => Self::Float,
            6 => Self::Double,
            7 => Self::ByteArray,
            8 => Self::String,
            9 => Self::List,
            10 => Self::Compound,
            11 => Self::IntArray,
            12 => Self::LongArray,
            _ => return Err(Error::InvalidTagType(value)),
        })
    }
}

/// A Rust payload type that corresponds to exactly one tag kind.
///
/// This is what makes typed access possible: [`Compound::get_as`] and
/// [`List::get_as`] check the stored kind against `TAG_ID` and hand back a
/// reference of the right type, or report a [`Error::TagMismatch`].
pub trait NBTKind: Sized + Into<Value> {
    const TAG_ID: TagID;

    /// Borrows the payload if `value` is of this kind.
    fn from_value(value: &Value) -> Option<&Self>;

    /// Mutably borrows the payload if `value` is of this kind.
    fn from_value_mut(value: &mut Value) -> Option<&mut Self>;

    /// Takes the payload out of `value`, handing it back unchanged on a
    /// kind mismatch.
    fn try_from_value(value: Value) -> Result<Self, Value>;
}

macro_rules! impl_nbt_kind {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl NBTKind for $ty {
                const TAG_ID: TagID = TagID::$variant;

                #[inline]
                fn from_value(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[inline]
                fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[inline]
                fn try_from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }

            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_nbt_kind!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    List => List,
    Compound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
);

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<bool> for Value {
    /// Booleans are stored as bytes, `1` for true and `0` for false.
    #[inline]
    fn from(value: bool) -> Self {
        Value::Byte(value as i8)
    }
}
