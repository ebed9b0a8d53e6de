// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Conversion of iPhoto's "timer interval" fields into calendar timestamps.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use super::{Field, Record};
use crate::{Error, Result};

/// Any key containing this is a number of seconds since `MAC_EPOCH`.
pub const TIMER_INTERVAL_MARKER: &str = "AsTimerInterval";

/// Zero point for timer intervals: 2001-01-01T00:00:00, in whatever time zone
/// the interval itself was recorded.
pub static MAC_EPOCH: LazyLock<NaiveDateTime> = LazyLock::new(|| {
  NaiveDate::from_ymd_opt(2001, 1, 1)
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .unwrap()
});

/// Converts an offset in seconds from `MAC_EPOCH` into a timestamp, rounded to
/// the nearest microsecond. No time zone conversion is performed.
///
/// Returns `None` if `seconds` is not finite, or the result can't be
/// represented.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn epoch_to_timestamp(seconds: f64) -> Option<NaiveDateTime> {
  if !seconds.is_finite() {
    return None;
  }

  let micros = (seconds * 1_000_000.0).round_ties_even();
  if micros.abs() >= i64::MAX as f64 {
    return None;
  }

  MAC_EPOCH.checked_add_signed(TimeDelta::microseconds(micros as i64))
}

/// Rewrites every `XAsTimerIntervalY` key in `record` as `XY`, converting its
/// value to a timestamp. All other keys are passed through unchanged.
///
/// If a record somehow holds both `XAsTimerInterval` and `X`, the converted
/// value wins.
///
/// # Errors
///
/// `Error::Schema` if a timer interval isn't a number, or can't be
/// represented as a timestamp.
pub fn normalize_record(record: Record) -> Result<Record> {
  let mut normalized = Record::new();

  for (key, value) in record {
    if !key.contains(TIMER_INTERVAL_MARKER) {
      normalized.entry(key).or_insert(value);
      continue;
    }

    let seconds = value
      .as_f64()
      .ok_or_else(|| Error::Schema(format!("`{key}` is not a number ({value}).")))?;
    let timestamp = epoch_to_timestamp(seconds)
      .ok_or_else(|| Error::Schema(format!("`{key}` is out of range ({seconds}).")))?;

    normalized.insert(strip_marker(&key), Field::Timestamp(timestamp));
  }

  Ok(normalized)
}

/// Removes every occurrence of `TIMER_INTERVAL_MARKER` from `key`, including
/// any that only appear once an inner occurrence is removed.
fn strip_marker(key: &str) -> String {
  let mut stripped = key.replace(TIMER_INTERVAL_MARKER, "");
  while stripped.contains(TIMER_INTERVAL_MARKER) {
    stripped = stripped.replace(TIMER_INTERVAL_MARKER, "");
  }
  stripped
}
