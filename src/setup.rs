//! Program setup functions.
//!
//! Copyright 2023-5 Seth Pendergrass. See LICENSE.

use std::{
  fs,
  io::Write,
  path::{Path, PathBuf},
};

use env_logger::Builder;
use iphoto_db::{config::DEFAULT_LIBRARY, io};
use log::LevelFilter;

/// File under `XDG_CONFIG_HOME/iphoto_db` remembering the last library used.
const LIBRARY_FILE: &str = "library";

/// Sets up `env_logger` with the format "ERROR_LEVEL message" (e.g. "WARN
/// something went wrong").
///
/// Log levels:
/// Error: Load failures and albums that could not be printed.
/// Info: General program flow.
/// Debug: Files read and record counts.
/// Trace: Per-record detail.
pub fn configure_logging(verbosity: u8) {
  let level = match verbosity {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };

  Builder::new()
    .filter_level(level)
    .format(|buf, record| {
      let style = buf.default_level_style(record.level());
      writeln!(buf, "{style}{}{style:#}\t{}", record.level(), record.args())
    })
    .init();
}

/// Get library root from provided arg, if present, and write to
/// `XDG_CONFIG_HOME/iphoto_db/library`. Else, read library root from there,
/// falling back to iPhoto's default location.
pub fn get_or_update_library(path: Option<PathBuf>, home: Option<&Path>) -> Result<PathBuf, String> {
  let xdg_dirs = xdg::BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"))
    .map_err(|e| format!("Failed to get XDG directories ({e})."))?;

  match path {
    Some(path) => {
      if !io::expand_home(&path, home).is_dir() {
        return Err(format!("{}: Library path is not a directory.", path.display()));
      }
      let config_path = xdg_dirs
        .place_config_file(LIBRARY_FILE)
        .map_err(|e| format!("Failed to create config directory ({e})."))?;
      fs::write(config_path, path.to_str().ok_or("Invalid library path.")?)
        .map_err(|e| format!("Failed to write library path ({e})."))?;
      Ok(path)
    }
    None => match xdg_dirs.find_config_file(LIBRARY_FILE) {
      Some(config_path) => Ok(PathBuf::from(
        fs::read_to_string(config_path)
          .map_err(|e| format!("Failed to read library path ({e})."))?
          .trim(),
      )),
      None => Ok(PathBuf::from(DEFAULT_LIBRARY)),
    },
  }
}
