//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// Stored one byte per cell, so that a row-major `Vec<Cell>` is as compact
/// as a `Vec<u8>`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    /// The Dead state.
    #[default]
    Dead = 0,
    /// The Alive state.
    Alive = 1,
}

impl Cell {
    /// Whether the cell is [`Alive`](Cell::Alive).
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// Flips the state.
impl Not for Cell {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

impl From<Cell> for u8 {
    #[inline]
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, both 0-indexed from the top-left corner.
pub type Coord = (u32, u32);

/// The position of the cell at `(x, y)` in a row-major cell vector
/// of the given `width`.
///
/// Only meaningful when `x < width`.
#[inline]
pub fn cell_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}
