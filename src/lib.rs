// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A seam is a connected one-pixel-wide path running across the
//! image; removing the one with the least gradient energy shrinks
//! the image by a row or column while leaving the interesting parts
//! alone.  [`SeamCarver`] drives the loop; the energy and seam
//! modules are public for callers who want the intermediate maps.

pub mod carver;
pub mod energy;
pub mod error;
pub mod grid;
pub mod seam;
mod ternary;

pub use carver::{Carved, Direction, SeamCarver, MIN_EXTENT};
pub use energy::{energy_to_image, gradient_energy};
pub use error::CarveError;
pub use grid::Grid;
pub use seam::{horizontal_seam, vertical_seam};
