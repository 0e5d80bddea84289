// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Minimum-energy seam search
//!
//! A single forward sweep folds the energy map into a table of
//! cumulative path costs, one row depending only on the row before
//! it; a backward walk then reads the cheapest connected path out of
//! the table.  Only the top-to-bottom orientation is implemented
//! here: the left-to-right case is the same computation run over the
//! transposed energy map.

use crate::grid::Grid;

/// One cell of the cumulative cost table: the cheapest total energy
/// of any connected path from the top row to this cell, and the
/// column that path came through in the row above.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Cell {
    pub cost: f64,
    pub parent: u32,
}

/// Fold an energy map into the cumulative cost table, top row first.
/// Each cell adds its own energy to the cheapest of the (up to three)
/// cells reachable in the row above.
///
/// Ties are settled once, here, by the candidate order: straight
/// above wins over above-left, above-left over above-right; a later
/// candidate displaces an earlier one only by being strictly cheaper.
/// The backtrace follows the stored parents, so both phases always
/// agree on the path.
pub fn accumulate(energy: &Grid<f64>) -> Grid<Cell> {
    let (width, height) = energy.dimensions();
    let mut table = Grid::new(width, height);

    // The top row has no predecessors and copies straight over.
    for x in 0..width {
        table[(x, 0)] = Cell {
            cost: energy[(x, 0)],
            parent: x,
        };
    }

    for y in 1..height {
        for x in 0..width {
            let mut parent = x;
            let mut best = table[(x, y - 1)].cost;
            if x > 0 && table[(x - 1, y - 1)].cost < best {
                parent = x - 1;
                best = table[(x - 1, y - 1)].cost;
            }
            if x + 1 < width && table[(x + 1, y - 1)].cost < best {
                parent = x + 1;
                best = table[(x + 1, y - 1)].cost;
            }
            table[(x, y)] = Cell {
                cost: energy[(x, y)] + best,
                parent,
            };
        }
    }
    table
}

// Walk the parent pointers up from the cheapest cell in the bottom
// row.  Ties in the bottom row go to the smallest column.
fn trace(table: &Grid<Cell>) -> Vec<u32> {
    let (width, height) = table.dimensions();
    let mut seam_col = 0;
    for x in 1..width {
        if table[(x, height - 1)].cost < table[(seam_col, height - 1)].cost {
            seam_col = x;
        }
    }
    // Collect bottom-up, then reverse into top-down order.
    (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = table[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Given an energy map, return the column index of the cheapest
/// top-to-bottom seam for every row.  Adjacent entries never differ
/// by more than one.  The map must be at least one cell tall and
/// wide; the carver driver guarantees this.
pub fn vertical_seam(energy: &Grid<f64>) -> Vec<u32> {
    trace(&accumulate(energy))
}

/// Given an energy map, return the row index of the cheapest
/// left-to-right seam for every column.  Runs the vertical search
/// over the transposed map; the energy estimate is symmetric under
/// transposition, so the result is exact, not an approximation.
pub fn horizontal_seam(energy: &Grid<f64>) -> Vec<u32> {
    trace(&accumulate(&energy.transposed()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 4-wide, 3-tall map with a single cheap staircase running
    // from the top-left corner down to column 2.  Every value is an
    // exact binary fraction so the cumulative sums compare exactly.
    fn staircase() -> Grid<f64> {
        Grid::from_raw(
            4,
            3,
            vec![
                0.125, 0.875, 0.875, 0.125, //
                0.875, 0.125, 0.875, 0.875, //
                0.875, 0.875, 0.125, 0.875,
            ],
        )
        .unwrap()
    }

    #[test]
    fn table_accumulates_cheapest_paths() {
        let table = accumulate(&staircase());
        assert_eq!(table[(1, 1)], Cell { cost: 0.25, parent: 0 });
        assert_eq!(table[(2, 2)], Cell { cost: 0.375, parent: 1 });
        // Cell (0, 1) has no above-left neighbor; its best
        // predecessor is straight up.
        assert_eq!(table[(0, 1)].parent, 0);
    }

    #[test]
    fn vertical_seam_follows_the_staircase() {
        assert_eq!(vertical_seam(&staircase()), vec![0, 1, 2]);
    }

    #[test]
    fn horizontal_seam_is_vertical_on_the_transpose() {
        let energy = staircase();
        assert_eq!(horizontal_seam(&energy.transposed()), vec![0, 1, 2]);
    }

    #[test]
    fn uniform_energy_pins_the_seam_to_column_zero() {
        // Every path costs the same; the straight-above preference
        // and the leftmost-minimum start must pick column 0 in every
        // row, deterministically.
        let energy = Grid::from_raw(5, 4, vec![0.5; 20]).unwrap();
        assert_eq!(vertical_seam(&energy), vec![0, 0, 0, 0]);
    }

    #[test]
    fn seams_are_always_connected() {
        let energy = Grid::from_raw(
            6,
            5,
            (0..30)
                .map(|i| ((i * 37) % 11) as f64 / 11.0)
                .collect::<Vec<_>>(),
        )
        .unwrap();
        let seam = vertical_seam(&energy);
        assert_eq!(seam.len(), 5);
        for pair in seam.windows(2) {
            assert!(pair[0].abs_diff(pair[1]) <= 1);
        }
    }

    #[test]
    fn single_column_map_degenerates_cleanly() {
        let energy = Grid::from_raw(1, 3, vec![0.2, 0.4, 0.6]).unwrap();
        assert_eq!(vertical_seam(&energy), vec![0, 0, 0]);
    }
}
