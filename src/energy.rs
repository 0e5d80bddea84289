// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is a proxy for how much the eye would miss
//! it: the magnitude of the local intensity gradient, taken with a
//! 3×3 Sobel operator over the luma channel.  Low-energy paths are
//! where the carver cuts.

use crate::grid::Grid;
use image::{GenericImageView, GrayImage, Luma, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

// Sum of the positive taps of either kernel.  With intensities in
// [0, 1], |Gx| and |Gy| can reach 4.0 and no further, so dividing the
// averaged magnitudes by this keeps the energy inside [0, 1].
const KERNEL_GAIN: f64 = 4.0;

// Image -> intensity field, one luma value per pixel, rescaled from
// whatever the subpixel type's range is down to [0, 1].
fn intensity_grid<I, P, S>(image: &I) -> Grid<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let scale: f64 = NumCast::from(S::DEFAULT_MAX_VALUE).unwrap();
    let mut intensity = Grid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let Luma([luma]) = image.get_pixel(x, y).to_luma();
        let luma: f64 = NumCast::from(luma).unwrap();
        intensity[(x, y)] = luma / scale;
    }
    intensity
}

/// Compute the energy of every pixel in an image.  Generic over the
/// image type; color images are collapsed to luma first.  Border
/// pixels read their missing neighbors from the nearest edge cell, so
/// every cell of the result is defined, and every value sits in
/// [0, 1].
pub fn gradient_energy<I, P, S>(image: &I) -> Grid<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let intensity = intensity_grid(image);
    let (width, height) = intensity.dimensions();
    let mut energy = Grid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let (mut gx, mut gy) = (0.0, 0.0);
        for (ky, kx) in iproduct!(0..3usize, 0..3usize) {
            let sample =
                intensity.get_clamped(x as i64 + kx as i64 - 1, y as i64 + ky as i64 - 1);
            gx += SOBEL_X[ky][kx] * sample;
            gy += SOBEL_Y[ky][kx] * sample;
        }
        energy[(x, y)] = (0.5 * gx.abs() + 0.5 * gy.abs()) / KERNEL_GAIN;
    }
    energy
}

/// Render an energy map as a greyscale image, brightest value pinned
/// to white.  Strictly a debugging/visualization aid.
pub fn energy_to_image(energy: &Grid<f64>) -> GrayImage {
    let (width, height) = energy.dimensions();
    let mut out = GrayImage::new(width, height);
    let peak = energy.cells().iter().copied().fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return out;
    }
    for (y, x) in iproduct!(0..height, 0..width) {
        let level = (energy[(x, y)] / peak * 255.0).round() as u8;
        out.put_pixel(x, y, Luma([level]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::GrayImage;

    #[test]
    fn flat_image_has_zero_energy() {
        let buf = GrayImage::from_pixel(5, 4, Luma([77]));
        let energy = gradient_energy(&buf);
        assert_eq!(energy.dimensions(), (5, 4));
        assert!(energy.cells().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn single_bright_pixel_energy() {
        // 3x3 black image with a full-intensity center pixel.  Worked
        // through the kernels by hand: the center cancels out, the
        // edge midpoints and corners each see half a unit of averaged
        // gradient.
        let mut buf = GrayImage::from_pixel(3, 3, Luma([0]));
        buf.put_pixel(1, 1, Luma([255]));
        let energy = gradient_energy(&buf);
        assert_relative_eq!(energy[(1, 1)], 0.0);
        assert_relative_eq!(energy[(0, 1)], 0.25);
        assert_relative_eq!(energy[(1, 0)], 0.25);
        assert_relative_eq!(energy[(0, 0)], 0.25);
    }

    #[test]
    fn energy_stays_in_unit_range() {
        let buf = GrayImage::from_fn(16, 16, |x, y| Luma([((x * 83 + y * 131) % 256) as u8]));
        let energy = gradient_energy(&buf);
        assert!(energy.cells().iter().all(|&e| (0.0..=1.0).contains(&e)));
    }

    #[test]
    fn vertical_edge_shows_up_in_the_map() {
        // Left half black, right half white: the two columns
        // straddling the boundary carry all the energy.
        let buf = GrayImage::from_fn(8, 8, |x, _| Luma([if x < 4 { 0 } else { 255 }]));
        let energy = gradient_energy(&buf);
        for y in 0..8 {
            assert!(energy[(3, y)] > 0.0);
            assert!(energy[(4, y)] > 0.0);
            assert_relative_eq!(energy[(1, y)], 0.0);
            assert_relative_eq!(energy[(6, y)], 0.0);
        }
    }

    #[test]
    fn rendering_scales_peak_to_white() {
        let energy = Grid::from_raw(2, 1, vec![0.125, 0.25]).unwrap();
        let rendered = energy_to_image(&energy);
        assert_eq!(rendered.get_pixel(1, 0), &Luma([255]));
        assert_eq!(rendered.get_pixel(0, 0), &Luma([128]));
    }
}
