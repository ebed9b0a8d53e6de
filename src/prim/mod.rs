// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Primitive types for representing an iPhoto library's images and albums,
//! and the conversions applied while reading them.

mod album;
mod conv;
mod entry_map;
mod field;
mod image;

pub use album::*;
pub use conv::*;
pub use entry_map::*;
pub use field::*;
pub use image::*;
