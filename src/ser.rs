//! Serde support for [`Key`] and [`Package`], enabled by the `serde` feature.
//!
//! Keys serialize untagged: integer keys as integers, named keys as strings.
//! A package serializes as a map in iteration order. Formats that stringify
//! map keys (JSON among them) will hand integer keys back as strings on
//! deserialization; the key-space distinction survives only in formats that
//! keep integer map keys.

use crate::{Key, Package};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or string key")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Key, E> {
        Ok(Key::Int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Key, E> {
        i64::try_from(value)
            .map(Key::Int)
            .map_err(|_| E::custom(format!("integer key {} out of range", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Key, E> {
        Ok(Key::Str(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Key, E> {
        Ok(Key::Str(value))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Key, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

impl<V: Serialize> Serialize for Package<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct PackageVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for PackageVisitor<V> {
    type Value = Package<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map with integer or string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Package<V>, A::Error> {
        let mut package = Package::new();
        while let Some((key, value)) = access.next_entry::<Key, V>()? {
            package.pack(key, value);
        }
        Ok(package)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Package<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Package<V>, D::Error> {
        deserializer.deserialize_map(PackageVisitor(PhantomData))
    }
}
