// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! In-memory, read-only view of an iPhoto library's album data.

use std::path::{Path, PathBuf};

use crate::{
  Config, Error, Result,
  config::constants::{LIST_OF_ALBUMS, MASTER_IMAGE_LIST},
  io,
  prim::{Album, EntryMap, Field, Image},
};

/// All images and albums from `AlbumData.xml`. Built once when loaded and
/// never modified afterwards.
#[derive(Debug)]
pub struct Library {
  album_data_path: Option<PathBuf>,
  images:          EntryMap<Image>,
  albums:          EntryMap<Album>,
}

impl Library {
  /// Reads and loads the album data described by `config`.
  ///
  /// # Errors
  ///
  /// `Error::Document` if the file can't be read or parsed, otherwise as for
  /// `from_document`.
  pub fn open(config: &Config) -> Result<Self> {
    let path = config.album_data_path();
    log::info!("Loading {}.", path.display());

    let mut library = Self::from_document(io::read_document(&path)?)?;
    library.album_data_path = Some(path);
    Ok(library)
  }

  /// Loads an already-parsed album data document. Every image is normalized,
  /// and every album checked for consistency, before this returns.
  ///
  /// # Errors
  ///
  /// `Error::Schema` if the document isn't shaped like album data, and
  /// `Error::Consistency` if an album's `PhotoCount` disagrees with its
  /// `KeyList`.
  pub fn from_document(document: plist::Value) -> Result<Self> {
    let mut root = document
      .into_dictionary()
      .ok_or_else(|| Error::Schema("Root is not a dictionary.".to_string()))?;

    let master_image_list = root
      .remove(MASTER_IMAGE_LIST)
      .and_then(plist::Value::into_dictionary)
      .ok_or_else(|| Error::Schema(format!("Missing `{MASTER_IMAGE_LIST}` dictionary.")))?;

    let mut images = EntryMap::new();
    for (id, raw) in master_image_list {
      let Field::Dictionary(raw) = Field::try_from(raw)? else {
        return Err(Error::Schema(format!("Image `{id}` is not a dictionary.")));
      };
      log::trace!("Normalizing image `{id}`.");
      let image = Image::from_raw(id.clone(), raw)?;
      images.insert(id, image);
    }

    let list_of_albums = root
      .remove(LIST_OF_ALBUMS)
      .and_then(plist::Value::into_array)
      .ok_or_else(|| Error::Schema(format!("Missing `{LIST_OF_ALBUMS}` array.")))?;

    let mut albums = EntryMap::new();
    for raw in list_of_albums {
      let Field::Dictionary(raw) = Field::try_from(raw)? else {
        return Err(Error::Schema("Album is not a dictionary.".to_string()));
      };
      let album = Album::from_raw(&raw)?;
      log::trace!("{}: {} photos.", album.name, album.count);
      if albums.insert(album.name.clone(), album).is_some() {
        log::debug!("Album name declared more than once; keeping the last.");
      }
    }

    if images.is_empty() {
      log::warn!("Library has no images.");
    }
    log::debug!("Loaded {} images and {} albums.", images.len(), albums.len());

    Ok(Self {
      album_data_path: None,
      images,
      albums,
    })
  }

  /// The file this library was loaded from, if it was read from disk.
  pub fn album_data_path(&self) -> Option<&Path> {
    self.album_data_path.as_deref()
  }

  /// Iterates over album names, in the order they were declared.
  pub fn albums(&self) -> impl Iterator<Item = &str> {
    self.albums.keys()
  }

  /// Looks up an album by name.
  ///
  /// # Errors
  ///
  /// `Error::AlbumNotFound` if there is no album called `name`.
  pub fn album(&self, name: &str) -> Result<&Album> {
    self
      .albums
      .get(name)
      .ok_or_else(|| Error::AlbumNotFound(name.to_string()))
  }

  /// Iterates over every image in the library, in the order they were
  /// declared.
  pub fn images(&self) -> impl Iterator<Item = &Image> {
    self.images.values()
  }

  pub fn image(&self, id: &str) -> Option<&Image> {
    self.images.get(id)
  }

  /// Iterates over the images in `album`, in album order. RAW images are
  /// skipped unless `include_raw` is set.
  ///
  /// Fails immediately if the album doesn't exist. An image id missing from
  /// the library is reported as an `Err` item when reached.
  ///
  /// # Errors
  ///
  /// `Error::AlbumNotFound` if there is no album called `album`. Items are
  /// `Error::ImageNotFound` for dangling image ids.
  pub fn photos<'a>(
    &'a self,
    album: &str,
    include_raw: bool,
  ) -> Result<impl Iterator<Item = Result<&'a Image>> + use<'a>> {
    let album = self.album(album)?;

    Ok(album.photos.iter().filter_map(move |id| match self.images.get(id) {
      None => Some(Err(Error::ImageNotFound {
        album: album.name.clone(),
        image: id.clone(),
      })),
      Some(image) if image.is_raw() && !include_raw => None,
      Some(image) => Some(Ok(image)),
    }))
  }
}
