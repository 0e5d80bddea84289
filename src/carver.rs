// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main carving loop
//!
//! Repeatedly finds the cheapest seam in the requested direction and
//! removes it, shrinking the image by one row or column per pass.
//! The energy map and cost table are rebuilt from scratch on every
//! pass; the image that just lost a seam is a different image.

use crate::cq;
use crate::energy::gradient_energy;
use crate::error::CarveError;
use crate::grid::Grid;
use crate::seam::{horizontal_seam, vertical_seam};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use std::str::FromStr;

/// The floor for the shrinking dimension.  The cost recurrence looks
/// at three neighboring cells; below this extent the search space
/// degenerates, so the driver stops removing seams before crossing
/// it.
pub const MIN_EXTENT: u32 = 3;

/// Which way seams run.  Vertical seams run top to bottom and their
/// removal narrows the image; horizontal seams run left to right and
/// shorten it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
}

impl FromStr for Direction {
    type Err = CarveError;

    fn from_str(flag: &str) -> Result<Self, CarveError> {
        if flag.eq_ignore_ascii_case("vertical") {
            Ok(Direction::Vertical)
        } else if flag.eq_ignore_ascii_case("horizontal") {
            Ok(Direction::Horizontal)
        } else {
            Err(CarveError::UnknownDirection(flag.to_string()))
        }
    }
}

/// The result of a carve: the resized image plus the bookkeeping a
/// caller needs to learn whether the request was clamped.
pub struct Carved<P: Pixel> {
    /// The resized image.
    pub image: ImageBuffer<P, Vec<P::Subpixel>>,
    /// How many seams the caller asked for.
    pub requested: u32,
    /// How many seams actually came out.  Less than `requested` when
    /// the shrinking dimension would otherwise have dropped below
    /// [`MIN_EXTENT`].
    pub completed: u32,
}

// Copy every pixel except the seam pixel into a buffer one column
// narrower; pixels right of the seam shift left by one.
fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in 0..width {
            if x == cut {
                continue;
            }
            imgbuf.put_pixel(cq!(x < cut, x, x - 1), y, image.get_pixel(x, y));
        }
    }
    imgbuf
}

// Same again, one row shorter; pixels below the seam shift up by one.
fn remove_horizontal_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut imgbuf = ImageBuffer::new(width, height - 1);
    for y in 0..height {
        for x in 0..width {
            let cut = seam[x as usize];
            if y == cut {
                continue;
            }
            imgbuf.put_pixel(x, cq!(y < cut, y, y - 1), image.get_pixel(x, y));
        }
    }
    imgbuf
}

// Paint the removed seam into the energy map at full energy, for the
// observer to render.  Purely cosmetic.
fn mark_seam(energy: &mut Grid<f64>, seam: &[u32], direction: Direction) {
    match direction {
        Direction::Vertical => {
            for (y, &x) in seam.iter().enumerate() {
                energy[(x, y as u32)] = 1.0;
            }
        }
        Direction::Horizontal => {
            for (x, &y) in seam.iter().enumerate() {
                energy[(x as u32, y)] = 1.0;
            }
        }
    }
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I> {
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver borrowing the image to be carved.
    pub fn new(image: &'a I) -> Self {
        SeamCarver { image }
    }

    /// Remove up to `iterations` seams in the given direction.
    ///
    /// The request is clamped so the shrinking dimension never drops
    /// below [`MIN_EXTENT`]; the returned [`Carved`] carries both the
    /// requested and the completed count.  Asking for zero seams is
    /// fine and returns a pixel-identical copy.
    pub fn carve(&self, direction: Direction, iterations: u32) -> Result<Carved<P>, CarveError> {
        self.carve_with_observer(direction, iterations, |_, _, _| ())
    }

    /// Like [`carve`](Self::carve), but invokes `observe` after every
    /// completed pass with the pass ordinal (counting from 1), the
    /// shrunken image, and the energy map the seam was chosen from,
    /// with the removed seam painted in at full energy.  The hook is
    /// for progress display and debugging; carving never depends on
    /// it.
    pub fn carve_with_observer<F>(
        &self,
        direction: Direction,
        iterations: u32,
        mut observe: F,
    ) -> Result<Carved<P>, CarveError>
    where
        F: FnMut(u32, &ImageBuffer<P, Vec<S>>, &Grid<f64>),
    {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage { width, height });
        }

        let extent = cq!(direction == Direction::Vertical, width, height);
        let completed = iterations.min(extent.saturating_sub(MIN_EXTENT));
        if completed < iterations {
            log::debug!(
                "clamping {} requested seams to {} (extent {}, floor {})",
                iterations,
                completed,
                extent,
                MIN_EXTENT
            );
        }

        let mut scratch = ImageBuffer::new(width, height);
        self.image
            .pixels()
            .for_each(|(x, y, pixel)| scratch.put_pixel(x, y, pixel));

        for pass in 1..=completed {
            let mut energy = gradient_energy(&scratch);
            let seam = match direction {
                Direction::Vertical => vertical_seam(&energy),
                Direction::Horizontal => horizontal_seam(&energy),
            };
            mark_seam(&mut energy, &seam, direction);
            scratch = match direction {
                Direction::Vertical => remove_vertical_seam(&scratch, &seam),
                Direction::Horizontal => remove_horizontal_seam(&scratch, &seam),
            };
            log::debug!(
                "pass {}/{}: image is now {}x{}",
                pass,
                completed,
                scratch.width(),
                scratch.height()
            );
            observe(pass, &scratch, &energy);
        }

        Ok(Carved {
            image: scratch,
            requested: iterations,
            completed,
        })
    }
}
