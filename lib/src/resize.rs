//! Resizing the world.

use crate::{
    cells::{cell_index, Cell},
    world::Universe,
};
use log::debug;

impl Universe {
    /// Changes the size of the world.
    ///
    /// The cells in the common top-left rectangle of the old and the new
    /// world are kept; new cells are dead. The geometry is not changed.
    pub fn resize_to(&mut self, width: u32, height: u32) {
        let size = width as usize * height as usize;
        let mut cells = vec![Cell::Dead; size];
        let kept_width = self.width.min(width) as usize;
        for y in 0..self.height.min(height) {
            let old = cell_index(0, y, self.width);
            let new = cell_index(0, y, width);
            cells[new..new + kept_width].copy_from_slice(&self.cells[old..old + kept_width]);
        }
        debug!(
            "Resized the world from {}x{} to {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        self.cells = cells;
        self.scratch = vec![Cell::Dead; size];
    }
}
