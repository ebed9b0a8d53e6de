// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Where to find a library's album data.

use std::path::PathBuf;

use crate::io;

pub(crate) mod constants;

pub use constants::{DEFAULT_ALBUM_DATA, DEFAULT_LIBRARY};

/// Location of an iPhoto library. The home directory is given explicitly so
/// that `~` expansion never depends on the process environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  /// Library root. May start with `~`.
  pub library:    PathBuf,
  /// File name of the album data, relative to `library`.
  pub album_data: String,
  /// Used to expand `~` in `library`. Without it, `library` is used as is.
  pub home:       Option<PathBuf>,
}

impl Config {
  pub fn new(library: impl Into<PathBuf>) -> Self {
    Self {
      library:    library.into(),
      album_data: DEFAULT_ALBUM_DATA.to_string(),
      home:       None,
    }
  }

  #[must_use]
  pub fn with_album_data(mut self, album_data: impl Into<String>) -> Self {
    self.album_data = album_data.into();
    self
  }

  #[must_use]
  pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
    self.home = home;
    self
  }

  /// Library root with `~` expanded.
  pub fn library_path(&self) -> PathBuf {
    io::expand_home(&self.library, self.home.as_deref())
  }

  /// Full path to the album data file.
  pub fn album_data_path(&self) -> PathBuf {
    self.library_path().join(&self.album_data)
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(DEFAULT_LIBRARY)
  }
}
