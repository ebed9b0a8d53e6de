// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Loosely-typed values read from `AlbumData.xml`.
//!
//! iPhoto guarantees very little about which keys a record carries, so records
//! are kept as a mapping from key to `Field` rather than a fixed struct.
//! Typed access to the well-known keys lives on `Image` and `Album`.

use std::{
  collections::BTreeMap,
  fmt::{self, Display, Formatter},
  time::SystemTime,
};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// All timestamps are rendered in this format (ISO 8601, with fractional
/// seconds only when present).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A single dictionary from the property list, ordered by key.
pub type Record = BTreeMap<String, Field>;

/// A property list value, plus `Timestamp` for dates (either native `<date>`
/// values or converted timer intervals).
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
  Array(Vec<Field>),
  Boolean(bool),
  Data(Vec<u8>),
  Dictionary(Record),
  Integer(i64),
  Real(f64),
  String(String),
  Timestamp(NaiveDateTime),
}

impl Field {
  pub fn as_array(&self) -> Option<&[Field]> {
    match self {
      Field::Array(a) => Some(a),
      _ => None,
    }
  }

  /// Numeric value as a float, accepting both reals and integers.
  #[allow(clippy::cast_precision_loss)]
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Field::Real(r) => Some(*r),
      Field::Integer(i) => Some(*i as f64),
      _ => None,
    }
  }

  pub fn as_i64(&self) -> Option<i64> {
    match self {
      Field::Integer(i) => Some(*i),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Field::String(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
    match self {
      Field::Timestamp(t) => Some(*t),
      _ => None,
    }
  }
}

impl TryFrom<plist::Value> for Field {
  type Error = Error;

  fn try_from(value: plist::Value) -> Result<Self> {
    Ok(match value {
      plist::Value::Array(a) => {
        Field::Array(a.into_iter().map(Field::try_from).collect::<Result<_>>()?)
      }
      plist::Value::Dictionary(d) => Field::Dictionary(
        d.into_iter()
          .map(|(k, v)| Ok((k, Field::try_from(v)?)))
          .collect::<Result<_>>()?,
      ),
      plist::Value::Boolean(b) => Field::Boolean(b),
      plist::Value::Data(d) => Field::Data(d),
      plist::Value::Date(d) => {
        Field::Timestamp(DateTime::<Utc>::from(SystemTime::from(d)).naive_utc())
      }
      plist::Value::Real(r) => Field::Real(r),
      plist::Value::Integer(i) => Field::Integer(
        i.as_signed()
          .ok_or_else(|| Error::Schema(format!("Integer {i:?} does not fit in 64 bits.")))?,
      ),
      plist::Value::String(s) => Field::String(s),
      other => {
        return Err(Error::Schema(format!(
          "Unsupported property list value: {other:?}."
        )));
      }
    })
  }
}

impl Display for Field {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Field::Array(a) => {
        write!(f, "[")?;
        for (i, field) in a.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{field}")?;
        }
        write!(f, "]")
      }
      Field::Boolean(b) => write!(f, "{b}"),
      Field::Data(d) => write!(f, "<{} bytes>", d.len()),
      Field::Dictionary(d) => {
        write!(f, "{{")?;
        for (i, (key, field)) in d.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{key}: {field}")?;
        }
        write!(f, "}}")
      }
      Field::Integer(i) => write!(f, "{i}"),
      Field::Real(r) => write!(f, "{r}"),
      Field::String(s) => write!(f, "{s}"),
      Field::Timestamp(t) => write!(f, "{}", t.format(TIMESTAMP_FORMAT)),
    }
  }
}

impl Serialize for Field {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    match self {
      Field::Array(a) => a.serialize(serializer),
      Field::Boolean(b) => serializer.serialize_bool(*b),
      Field::Data(d) => d.serialize(serializer),
      Field::Dictionary(d) => d.serialize(serializer),
      Field::Integer(i) => serializer.serialize_i64(*i),
      Field::Real(r) => serializer.serialize_f64(*r),
      Field::String(s) => serializer.serialize_str(s),
      Field::Timestamp(t) => serializer.collect_str(&t.format(TIMESTAMP_FORMAT)),
    }
  }
}
