// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Default locations and the top-level keys read from album data.

/// Where iPhoto keeps its library unless told otherwise.
pub const DEFAULT_LIBRARY: &str = "~/Pictures/iPhoto Library.photolibrary";

/// Album data file name, relative to the library root.
pub const DEFAULT_ALBUM_DATA: &str = "AlbumData.xml";

/// Dictionary of image id -> image record. Includes movies.
pub const MASTER_IMAGE_LIST: &str = "Master Image List";

/// Array of album records.
pub const LIST_OF_ALBUMS: &str = "List of Albums";
