// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Functions for locating and reading album data on disk.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Expands a leading `~` in `path` to `home`. Paths not starting with `~`, or
/// any path when `home` is `None`, are returned unchanged. `~user` forms are
/// not supported.
pub fn expand_home(path: impl AsRef<Path>, home: Option<&Path>) -> PathBuf {
  let path = path.as_ref();

  let (Some(home), Ok(rest)) = (home, path.strip_prefix("~")) else {
    return path.to_path_buf();
  };

  if rest.as_os_str().is_empty() {
    home.to_path_buf()
  } else {
    home.join(rest)
  }
}

/// Reads the property list at `path`. Both XML and binary formats are
/// accepted.
///
/// # Errors
///
/// `Error::Document` if the file is missing, unreadable, or malformed.
pub fn read_document(path: impl AsRef<Path>) -> Result<plist::Value> {
  let path = path.as_ref();
  log::debug!("{}: Reading property list.", path.display());

  plist::Value::from_file(path).map_err(|source| Error::Document {
    path: path.to_path_buf(),
    source,
  })
}
