// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Entries from the "Master Image List". Despite the name, these may be movies
//! as well.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::{Field, Record, normalize_record};
use crate::Result;

/// A normalized image record. All `*AsTimerInterval` fields have been
/// converted, e.g. `DateAsTimerIntervalGMT` is available as `DateGMT`.
///
/// Serializes as its fields only; the id is the key it was listed under.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Image {
  #[serde(skip)]
  id:     String,
  #[serde(flatten)]
  fields: Record,
}

impl Image {
  /// Normalizes `raw` into an image with id `id`.
  ///
  /// # Errors
  ///
  /// As for `normalize_record`.
  pub fn from_raw(id: impl Into<String>, raw: Record) -> Result<Self> {
    Ok(Self {
      id:     id.into(),
      fields: normalize_record(raw)?,
    })
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn fields(&self) -> &Record {
    &self.fields
  }

  pub fn get(&self, key: &str) -> Option<&Field> {
    self.fields.get(key)
  }

  /// Usually the file name without extension.
  pub fn caption(&self) -> Option<&str> {
    self.get_str("Caption")
  }

  pub fn comment(&self) -> Option<&str> {
    self.get_str("Comment")
  }

  pub fn guid(&self) -> Option<&str> {
    self.get_str("GUID")
  }

  /// Path to the (possibly edited) image, relative to the library.
  pub fn image_path(&self) -> Option<&str> {
    self.get_str("ImagePath")
  }

  pub fn thumb_path(&self) -> Option<&str> {
    self.get_str("ThumbPath")
  }

  /// E.g. "Image" or "Movie".
  pub fn media_type(&self) -> Option<&str> {
    self.get_str("MediaType")
  }

  /// Path to the camera original. Only set for RAW photos.
  pub fn original_path(&self) -> Option<&str> {
    self.get_str("OriginalPath")
  }

  pub fn rating(&self) -> Option<f64> {
    self.get("Rating").and_then(Field::as_f64)
  }

  pub fn roll(&self) -> Option<i64> {
    self.get("Roll").and_then(Field::as_i64)
  }

  pub fn date(&self) -> Option<NaiveDateTime> {
    self.get_timestamp("Date")
  }

  pub fn date_gmt(&self) -> Option<NaiveDateTime> {
    self.get_timestamp("DateGMT")
  }

  pub fn mod_date(&self) -> Option<NaiveDateTime> {
    self.get_timestamp("ModDate")
  }

  pub fn meta_mod_date(&self) -> Option<NaiveDateTime> {
    self.get_timestamp("MetaModDate")
  }

  /// iPhoto sets `OriginalPath` on photos derived from a RAW original. Only the
  /// presence of the key matters, not its value.
  pub fn is_raw(&self) -> bool {
    self.fields.contains_key("OriginalPath")
  }

  fn get_str(&self, key: &str) -> Option<&str> {
    self.get(key).and_then(Field::as_str)
  }

  fn get_timestamp(&self, key: &str) -> Option<NaiveDateTime> {
    self.get(key).and_then(Field::as_timestamp)
  }
}

#[cfg(test)]
mod test_from_raw {
  use super::*;
  use crate::testing::*;

  fn raw() -> Record {
    Record::from([
      ("Caption".to_string(), Field::String("IMG_0042".to_string())),
      ("Comment".to_string(), Field::String(" ".to_string())),
      ("DateAsTimerInterval".to_string(), Field::Real(360_962_921.0)),
      ("DateAsTimerIntervalGMT".to_string(), Field::Real(360_948_521.0)),
      ("GUID".to_string(), Field::String("yl3pNTzYQ4GXlHzXcHMmPg".to_string())),
      ("ImagePath".to_string(), Field::String("Masters/IMG_0042.JPG".to_string())),
      ("MediaType".to_string(), Field::String("Image".to_string())),
      ("Rating".to_string(), Field::Integer(3)),
      ("Roll".to_string(), Field::Integer(55)),
    ])
  }

  #[test]
  fn exposes_known_fields() {
    let image = Image::from_raw("42", raw()).unwrap();

    assert_eq!(image.id(), "42");
    assert_eq!(image.caption(), Some("IMG_0042"));
    assert_eq!(image.comment(), Some(" "));
    assert_eq!(image.guid(), Some("yl3pNTzYQ4GXlHzXcHMmPg"));
    assert_eq!(image.image_path(), Some("Masters/IMG_0042.JPG"));
    assert_eq!(image.media_type(), Some("Image"));
    assert_eq!(image.rating(), Some(3.0));
    assert_eq!(image.roll(), Some(55));
    assert_eq!(image.thumb_path(), None);
    assert_eq!(image.date(), Some(make_date_naive(2012, 6, 9, 19, 28, 41, 0)));
    assert_eq!(image.date_gmt(), Some(make_date_naive(2012, 6, 9, 15, 28, 41, 0)));
    assert_eq!(image.mod_date(), None);
    assert_eq!(image.meta_mod_date(), None);
  }

  #[test]
  fn is_raw_when_original_path_present_even_if_empty() {
    let mut raw = raw();
    raw.insert("OriginalPath".to_string(), Field::String(String::new()));

    let image = Image::from_raw("42", raw).unwrap();

    assert!(image.is_raw());
    assert_eq!(image.original_path(), Some(""));
  }

  #[test]
  fn is_not_raw_without_original_path() {
    let image = Image::from_raw("42", raw()).unwrap();

    assert!(!image.is_raw());
  }

  #[test]
  fn serializes_fields_without_id() {
    let image = Image::from_raw(
      "7",
      Record::from([
        ("Caption".to_string(), Field::String("beach".to_string())),
        ("ModDateAsTimerInterval".to_string(), Field::Real(377_914_153.0)),
      ]),
    )
    .unwrap();

    assert_eq!(
      serde_json::to_value(&image).unwrap(),
      serde_json::json!({ "Caption": "beach", "ModDate": "2012-12-23T00:09:13" })
    );
  }
}
