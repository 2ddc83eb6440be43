/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

//! Serde integration: this is how tuples plug into a host JSON data-binding
//! pipeline (`serde_json` or anything else Serde-shaped) as one
//! (de)serializable type among many. The wire form is the same positional
//! array the token-level decoder speaks, so a tuple field inside a larger
//! struct round-trips through `{"key":[...]}` with no extra ceremony.

use core::fmt;
use core::marker::PhantomData;

use alloc::{string::String, vec::Vec};

use serde::de::{Error, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Tuple, TupsonValue, MAX_TUPLE_ARITY};

impl<V: Serialize> Serialize for Tuple<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.arity()))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct TupleVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for TupleVisitor<V> {
    type Value = Tuple<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an array of at most {} elements", MAX_TUPLE_ARITY)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values: Vec<V> = Vec::new();
        while let Some(value) = seq.next_element()? {
            if values.len() == MAX_TUPLE_ARITY {
                return Err(A::Error::invalid_length(MAX_TUPLE_ARITY + 1, &self));
            }
            values.push(value);
        }
        match Tuple::from_vec(values) {
            Some(tuple) => Ok(tuple),
            None => Err(A::Error::invalid_length(MAX_TUPLE_ARITY + 1, &self)),
        }
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Tuple<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TupleVisitor(PhantomData))
    }
}

impl Serialize for TupsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TupsonValue::Null => serializer.serialize_unit(),
            TupsonValue::Boolean(v) => serializer.serialize_bool(*v),
            TupsonValue::Integer(v) => serializer.serialize_i64(*v),
            TupsonValue::Float(v) => serializer.serialize_f64(*v),
            TupsonValue::String(v) => serializer.serialize_str(v),
            TupsonValue::Array(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            TupsonValue::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (key, value) in members {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = TupsonValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E: Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(TupsonValue::Boolean(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(TupsonValue::Integer(v))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        // Integers only go up to i64; the rest lose precision like any other
        // big number.
        if v <= i64::MAX as u64 {
            Ok(TupsonValue::Integer(v as i64))
        } else {
            Ok(TupsonValue::Float(v as f64))
        }
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(TupsonValue::Float(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(TupsonValue::String(String::from(v)))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(TupsonValue::String(v))
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(TupsonValue::Null)
    }

    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        Ok(TupsonValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut elements = Vec::new();
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(TupsonValue::Array(elements))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut members = Vec::new();
        while let Some(entry) = map.next_entry()? {
            members.push(entry);
        }
        Ok(TupsonValue::Object(members))
    }
}

impl<'de> Deserialize<'de> for TupsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
