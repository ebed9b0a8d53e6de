// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Read-only access to the albums and photos recorded in an iPhoto library's
//! `AlbumData.xml`.
//!
//! ```no_run
//! use iphoto_db::{Config, Library};
//!
//! let config = Config::default().with_home(Some("/Users/me".into()));
//! let library = Library::open(&config)?;
//! for album in library.albums() {
//!   for photo in library.photos(album, false)? {
//!     println!("{:?}", photo?.image_path());
//!   }
//! }
//! # Ok::<(), iphoto_db::Error>(())
//! ```

#![allow(clippy::must_use_candidate)]

pub mod commands;
pub mod config;
mod error;
pub mod io;
mod library;
pub mod prim;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{Error, Result};
pub use library::Library;
