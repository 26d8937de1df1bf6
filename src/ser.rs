//! [`serde::Serialize`] for the tree types.
//!
//! Compounds become maps in insertion order, lists and arrays become
//! sequences, and scalars map onto the matching serde primitive. A [`Tag`]
//! becomes a one-entry map from its name to its value. The NBT kind is not
//! preserved, so this is a one-way projection meant for dumping trees into
//! formats like JSON.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{Compound, List, Plain, PlainCompound, Tag, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Byte(value) => serializer.serialize_i8(*value),
            Value::Short(value) => serializer.serialize_i16(*value),
            Value::Int(value) => serializer.serialize_i32(*value),
            Value::Long(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f32(*value),
            Value::Double(value) => serializer.serialize_f64(*value),
            Value::ByteArray(values) => serializer.collect_seq(values),
            Value::String(value) => serializer.serialize_str(value),
            Value::List(list) => list.serialize(serializer),
            Value::Compound(compound) => compound.serialize(serializer),
            Value::IntArray(values) => serializer.collect_seq(values),
            Value::LongArray(values) => serializer.collect_seq(values),
        }
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl Serialize for Compound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name(), self.value())?;
        map.end()
    }
}

impl Serialize for Plain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Plain::Byte(value) => serializer.serialize_i8(*value),
            Plain::Short(value) => serializer.serialize_i16(*value),
            Plain::Int(value) => serializer.serialize_i32(*value),
            Plain::Long(value) => serializer.serialize_i64(*value),
            Plain::Float(value) => serializer.serialize_f32(*value),
            Plain::Double(value) => serializer.serialize_f64(*value),
            Plain::ByteArray(values) => serializer.collect_seq(values),
            Plain::String(value) => serializer.serialize_str(value),
            Plain::List(values) => serializer.collect_seq(values),
            Plain::Compound(compound) => compound.serialize(serializer),
            Plain::IntArray(values) => serializer.collect_seq(values),
            Plain::LongArray(values) => serializer.collect_seq(values),
        }
    }
}

impl Serialize for PlainCompound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
