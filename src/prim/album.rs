// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Entries from the "List of Albums".

use serde::Serialize;

use super::{Field, Record};
use crate::{Error, Result};

/// An album and the ids of the images it contains, in album order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Album {
  pub name:   String,
  /// `AlbumId`, which iPhoto writes as an integer. Kept as text since it's
  /// only ever used as an opaque identifier.
  pub id:     String,
  /// `PhotoCount`. Always equal to `photos.len()`.
  pub count:  u64,
  /// `KeyList`.
  pub photos: Vec<String>,
}

impl Album {
  /// Reads an album from its raw dictionary, checking that `PhotoCount`
  /// matches the number of ids in `KeyList`.
  ///
  /// # Errors
  ///
  /// `Error::Schema` if a required key is missing or of the wrong type, and
  /// `Error::Consistency` if `PhotoCount` disagrees with `KeyList`.
  pub fn from_raw(raw: &Record) -> Result<Self> {
    let name = raw
      .get("AlbumName")
      .and_then(Field::as_str)
      .ok_or_else(|| Error::Schema("Album is missing `AlbumName`.".to_string()))?
      .to_string();

    let id = match raw.get("AlbumId") {
      Some(Field::Integer(i)) => i.to_string(),
      Some(Field::String(s)) => s.clone(),
      _ => {
        return Err(Error::Schema(format!(
          "{name}: Album is missing `AlbumId`."
        )));
      }
    };

    let count = raw
      .get("PhotoCount")
      .and_then(Field::as_i64)
      .ok_or_else(|| Error::Schema(format!("{name}: Album is missing `PhotoCount`.")))?;

    let photos = raw
      .get("KeyList")
      .and_then(Field::as_array)
      .ok_or_else(|| Error::Schema(format!("{name}: Album is missing `KeyList`.")))?
      .iter()
      .map(|key| {
        key
          .as_str()
          .map(ToString::to_string)
          .ok_or_else(|| Error::Schema(format!("{name}: `KeyList` contains {key}.")))
      })
      .collect::<Result<Vec<_>>>()?;

    let count = match u64::try_from(count) {
      Ok(c) if usize::try_from(c).ok() == Some(photos.len()) => c,
      _ => {
        return Err(Error::Consistency {
          album:    name,
          declared: count,
          listed:   photos.len(),
        });
      }
    };

    Ok(Self {
      name,
      id,
      count,
      photos,
    })
  }
}
