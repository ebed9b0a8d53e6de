// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Errors raised while loading or querying a library.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The album data file is missing, unreadable, or not a property list.
  #[error("{}: Failed to read property list ({source}).", path.display())]
  Document {
    path:   PathBuf,
    #[source]
    source: plist::Error,
  },

  /// The property list was read, but isn't shaped like iPhoto album data.
  #[error("Unexpected album data: {0}")]
  Schema(String),

  /// An album's `PhotoCount` disagrees with its `KeyList`.
  #[error("{album}: PhotoCount ({declared}) != length of KeyList ({listed}).")]
  Consistency {
    album:    String,
    declared: i64,
    listed:   usize,
  },

  #[error("{0}: No such album.")]
  AlbumNotFound(String),

  /// An album refers to an image that isn't in the "Master Image List".
  #[error("{album}: Image `{image}` not found in master image list.")]
  ImageNotFound { album: String, image: String },
}

impl Error {
  /// Lookup failures leave the library usable; everything else happens while
  /// loading.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::AlbumNotFound(_) | Error::ImageNotFound { .. })
  }
}
