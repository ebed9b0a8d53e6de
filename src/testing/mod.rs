// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Test-only utilities.

mod asserts;
mod dates;
mod test_dir;

pub use dates::*;
pub use test_dir::*;

pub use crate::{assert_err, test_dir, test_path};

/// Wraps `body` in an XML property list document.
pub fn plist_xml(body: &str) -> String {
  format!(
    r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
{body}
</plist>
"#
  )
}

/// Album data with the given `<key>id</key><dict>..</dict>` image entries and
/// `<dict>..</dict>` album entries.
pub fn album_data_xml(images: &str, albums: &str) -> String {
  plist_xml(&format!(
    "<dict>
  <key>Application Version</key><string>9.5.1 (9.5.1)</string>
  <key>List of Albums</key><array>{albums}</array>
  <key>Master Image List</key><dict>{images}</dict>
</dict>"
  ))
}

/// A single album entry for `album_data_xml`.
pub fn album_xml(name: &str, id: i64, count: i64, keys: &[&str]) -> String {
  let keys = keys
    .iter()
    .map(|k| format!("<string>{k}</string>"))
    .collect::<String>();

  format!(
    "<dict>
  <key>AlbumId</key><integer>{id}</integer>
  <key>AlbumName</key><string>{name}</string>
  <key>KeyList</key><array>{keys}</array>
  <key>PhotoCount</key><integer>{count}</integer>
</dict>"
  )
}

/// A single image entry for `album_data_xml`. `extra` is spliced into the
/// image's dictionary.
pub fn image_xml(id: &str, caption: &str, extra: &str) -> String {
  format!(
    "<key>{id}</key>
<dict>
  <key>Caption</key><string>{caption}</string>
  <key>Comment</key><string> </string>
  <key>DateAsTimerInterval</key><real>360962921</real>
  <key>DateAsTimerIntervalGMT</key><real>360948521</real>
  <key>GUID</key><string>guid-{id}</string>
  <key>ImagePath</key><string>Masters/{caption}.jpg</string>
  <key>MediaType</key><string>Image</string>
  <key>MetaModDateAsTimerInterval</key><real>409536614.113663</real>
  <key>ModDateAsTimerInterval</key><real>377914153</real>
  <key>Rating</key><integer>0</integer>
  <key>Roll</key><integer>55</integer>
  <key>ThumbPath</key><string>Thumbnails/{caption}.jpg</string>
  {extra}
</dict>"
  )
}

/// One album, "album1", holding images "1" and "2".
pub fn simple_album_data() -> String {
  album_data_xml(
    &[image_xml("1", "joke", ""), image_xml("2", "obe", "")].concat(),
    &album_xml("album1", 1, 2, &["1", "2"]),
  )
}

/// Parses an XML property list held in memory.
pub fn document(xml: &str) -> plist::Value {
  plist::Value::from_reader_xml(xml.as_bytes()).unwrap()
}

pub fn type_of<T>(_: T) -> &'static str {
  std::any::type_name::<T>()
}
