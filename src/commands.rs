// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Program subcommands for printing the contents of an iPhoto library.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Map;

use crate::{
  Library,
  prim::{Album, Image},
};

/// How results are written to the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
  /// One value per line.
  #[default]
  Text,
  /// Pretty-printed JSON, with timestamps as ISO 8601 strings.
  Json,
}

/// Prints the name of every album, in library order.
pub fn albums(library: &Library, format: Format, out: &mut impl Write) -> io::Result<()> {
  match format {
    Format::Text => {
      for name in library.albums() {
        writeln!(out, "{name}")?;
      }
      Ok(())
    }
    Format::Json => write_json(out, &library.albums().collect::<Vec<_>>()),
  }
}

/// Prints the record for each album in `names`. Albums that can't be found are
/// logged and skipped. Returns whether every album was printed.
pub fn info(
  library: &Library,
  names: &[String],
  format: Format,
  out: &mut impl Write,
) -> io::Result<bool> {
  let mut all_found = true;
  let mut json = Map::new();

  for name in names {
    let album = match library.album(name) {
      Ok(album) => album,
      Err(e) => {
        log::error!("{e}");
        all_found = false;
        continue;
      }
    };

    match format {
      Format::Text => write_album(out, album)?,
      Format::Json => {
        json.insert(name.clone(), serde_json::to_value(album)?);
      }
    }
  }

  if format == Format::Json {
    write_json(out, &json)?;
  }

  Ok(all_found)
}

/// Prints the images in each album in `names`, skipping RAW images unless
/// `include_raw` is set. An album that can't be found, or that refers to a
/// missing image, is logged and skipped as a whole. Returns whether every
/// album was printed.
pub fn photos(
  library: &Library,
  names: &[String],
  include_raw: bool,
  format: Format,
  out: &mut impl Write,
) -> io::Result<bool> {
  let mut all_found = true;
  let mut json = Map::new();

  for name in names {
    let photos = match library
      .photos(name, include_raw)
      .and_then(|photos| photos.collect::<crate::Result<Vec<_>>>())
    {
      Ok(photos) => photos,
      Err(e) => {
        log::error!("{e}");
        all_found = false;
        continue;
      }
    };
    log::debug!("{name}: {} photos.", photos.len());

    match format {
      Format::Text => {
        for image in photos {
          write_image(out, image)?;
        }
      }
      Format::Json => {
        json.insert(name.clone(), serde_json::to_value(&photos)?);
      }
    }
  }

  if format == Format::Json {
    write_json(out, &json)?;
  }

  Ok(all_found)
}

fn write_album(out: &mut impl Write, album: &Album) -> io::Result<()> {
  writeln!(out, "{}", album.name)?;
  writeln!(out, "  id: {}", album.id)?;
  writeln!(out, "  count: {}", album.count)?;
  writeln!(out, "  photos: {}", album.photos.join(", "))
}

fn write_image(out: &mut impl Write, image: &Image) -> io::Result<()> {
  writeln!(out, "ImageId: {}", image.id())?;
  for (key, field) in image.fields() {
    writeln!(out, "{key}: {field}")?;
  }
  writeln!(out)
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
  serde_json::to_writer_pretty(&mut *out, value)?;
  writeln!(out)
}
