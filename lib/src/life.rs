//! The transition rule of Conway's Game of Life, `B3/S23`.

use crate::{
    cells::{cell_index, Cell},
    world::Universe,
};
use log::trace;
use std::mem;

/// The state of a cell in the next generation, given its current state
/// and the number of living cells among its eight neighbors.
///
/// A living cell survives with 2 or 3 living neighbors;
/// a dead cell becomes alive with exactly 3.
#[inline]
pub fn next_state(cell: Cell, alive_neighbors: u8) -> Cell {
    match (cell, alive_neighbors) {
        (Cell::Alive, 2) | (_, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// The coordinate before `i` on a ring of length `len`.
#[inline]
fn wrap_dec(i: u32, len: u32) -> u32 {
    if i == 0 {
        len - 1
    } else {
        i - 1
    }
}

/// The coordinate after `i` on a ring of length `len`.
#[inline]
fn wrap_inc(i: u32, len: u32) -> u32 {
    if i + 1 == len {
        0
    } else {
        i + 1
    }
}

/// Number of living cells in the Moore neighborhood of `(x, y)`.
///
/// The world is a torus: the neighbors of a cell on an edge are
/// taken from the opposite edge.
fn live_neighbor_count(cells: &[Cell], width: u32, height: u32, x: u32, y: u32) -> u8 {
    let columns = [wrap_dec(x, width), x, wrap_inc(x, width)];
    let rows = [wrap_dec(y, height), y, wrap_inc(y, height)];
    let mut count = 0;
    for (j, &ny) in rows.iter().enumerate() {
        for (i, &nx) in columns.iter().enumerate() {
            if i == 1 && j == 1 {
                continue;
            }
            count += cells[cell_index(nx, ny, width)] as u8;
        }
    }
    count
}

impl Universe {
    /// Computes the next generation.
    ///
    /// The whole next generation is read from an untouched copy
    /// of the current one, and replaces it at once.
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        let cells = &self.cells;
        let scratch = &mut self.scratch;
        for y in 0..height {
            for x in 0..width {
                let idx = cell_index(x, y, width);
                let count = live_neighbor_count(cells, width, height, x, y);
                scratch[idx] = next_state(cells[idx], count);
            }
        }
        mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
        trace!("Generation {}", self.generation);
    }

    /// Computes `n` generations.
    pub fn advance(&mut self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }
}
