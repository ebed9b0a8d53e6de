use chrono::{NaiveDate, NaiveDateTime};

/// Builds a timestamp, where `sec_frac` is the digits after the decimal point
/// (e.g. `656_490` for `.656490`).
pub fn make_date_naive(
  year: i32,
  month: u32,
  day: u32,
  hour: u32,
  min: u32,
  sec: u32,
  mut sec_frac: u32,
) -> NaiveDateTime {
  let nano = if sec_frac == 0 {
    0
  } else {
    while sec_frac < 100_000_000 {
      sec_frac *= 10;
    }
    sec_frac
  };

  NaiveDate::from_ymd_opt(year, month, day)
    .and_then(|d| d.and_hms_nano_opt(hour, min, sec, nano))
    .unwrap_or_else(|| {
      panic!("Invalid naive date & time: {year}-{month}-{day}T{hour}:{min}:{sec}.{sec_frac}")
    })
}
