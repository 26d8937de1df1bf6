use crate::{Compound, Index, List, NBTKind, Plain, TagID};

/// The payload of one tag, without its name.
///
/// There is one variant per concrete tag kind. The End kind has no variant
/// because it only ever appears on the wire as a terminator or as the element
/// type of an empty [`List`].
///
/// Cloning a `Value` is a deep copy: lists and compounds own their children.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Value {
    #[inline]
    pub const fn tag_id(&self) -> TagID {
        match self {
            Value::Byte(_) => TagID::Byte,
            Value::Short(_) => TagID::Short,
            Value::Int(_) => TagID::Int,
            Value::Long(_) => TagID::Long,
            Value::Float(_) => TagID::Float,
            Value::Double(_) => TagID::Double,
            Value::ByteArray(_) => TagID::ByteArray,
            Value::String(_) => TagID::String,
            Value::List(_) => TagID::List,
            Value::Compound(_) => TagID::Compound,
            Value::IntArray(_) => TagID::IntArray,
            Value::LongArray(_) => TagID::LongArray,
        }
    }

    /// Borrows the payload as `T`, or `None` if this value is another kind.
    ///
    /// ```
    /// use nbt_tree::Value;
    ///
    /// let value = Value::Int(30);
    /// assert_eq!(value.as_::<i32>(), Some(&30));
    /// assert_eq!(value.as_::<i64>(), None);
    /// ```
    #[inline]
    pub fn as_<T: NBTKind>(&self) -> Option<&T> {
        T::from_value(self)
    }

    #[inline]
    pub fn as_mut_<T: NBTKind>(&mut self) -> Option<&mut T> {
        T::from_value_mut(self)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&List> {
        self.as_()
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&Compound> {
        self.as_()
    }

    #[inline]
    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        self.as_mut_()
    }

    /// Widens any integer kind to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(value) => Some(value as i64),
            Value::Short(value) => Some(value as i64),
            Value::Int(value) => Some(value as i64),
            Value::Long(value) => Some(value),
            _ => None,
        }
    }

    /// Widens any numeric kind to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(value) => Some(value as f64),
            Value::Double(value) => Some(value),
            _ => self.as_i64().map(|value| value as f64),
        }
    }

    /// Gets a list element (by `usize`) or a compound entry (by string).
    ///
    /// ```
    /// use nbt_tree::{Compound, List, Value};
    ///
    /// let mut inner = Compound::new();
    /// inner.insert("x", 3i32);
    /// let mut list = List::new();
    /// list.push(inner).unwrap();
    /// let mut root = Compound::new();
    /// root.insert("points", list);
    /// let root = Value::Compound(root);
    ///
    /// let x = root.get("points").and_then(|v| v.get(0usize)).and_then(|v| v.get("x"));
    /// assert_eq!(x, Some(&Value::Int(3)));
    /// ```
    #[inline]
    pub fn get<I: Index>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    /// Mutable counterpart of [`get`](Self::get). Only compound entries can be
    /// borrowed mutably this way, because replacing a list element through a
    /// `&mut Value` could break the list's element type.
    #[inline]
    pub fn get_mut<I: Index>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }

    /// Recursively projects this value into plain data. See [`Plain`].
    pub fn to_plain(&self) -> Plain {
        match self {
            Value::Byte(value) => Plain::Byte(*value),
            Value::Short(value) => Plain::Short(*value),
            Value::Int(value) => Plain::Int(*value),
            Value::Long(value) => Plain::Long(*value),
            Value::Float(value) => Plain::Float(*value),
            Value::Double(value) => Plain::Double(*value),
            Value::ByteArray(value) => Plain::ByteArray(value.clone()),
            Value::String(value) => Plain::String(value.clone()),
            Value::List(list) => Plain::List(list.to_plain()),
            Value::Compound(compound) => Plain::Compound(compound.to_plain()),
            Value::IntArray(value) => Plain::IntArray(value.clone()),
            Value::LongArray(value) => Plain::LongArray(value.clone()),
        }
    }
}
