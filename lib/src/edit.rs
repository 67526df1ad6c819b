//! Interactive editing.

use crate::{
    cells::{cell_index, Coord},
    error::Error,
    world::Universe,
};

/// Points of the digital line between two points, both ends included,
/// computed with Bresenham's algorithm.
///
/// Consecutive points are 8-connected, and the line has exactly
/// `max(|dx|, |dy|) + 1` points.
struct Line {
    x: i64,
    y: i64,
    x_end: i64,
    y_end: i64,
    dx: i64,
    dy: i64,
    step_x: i64,
    step_y: i64,
    err: i64,
    done: bool,
}

impl Line {
    fn new((x1, y1): Coord, (x2, y2): Coord) -> Self {
        let (x, y, x_end, y_end) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        let dx = (x_end - x).abs();
        let dy = -(y_end - y).abs();
        Line {
            x,
            y,
            x_end,
            y_end,
            dx,
            dy,
            step_x: if x < x_end { 1 } else { -1 },
            step_y: if y < y_end { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }

    /// Number of steps from one end to the other.
    fn len(&self) -> u64 {
        self.dx.max(-self.dy) as u64
    }
}

impl Iterator for Line {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if self.x == self.x_end && self.y == self.y_end {
            self.done = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.step_x;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.step_y;
        }
        Some(point)
    }
}

impl Universe {
    /// Flips the state of the cell at `(x, y)`.
    pub fn toggle_cell_at(&mut self, x: u32, y: u32) -> Result<(), Error> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Flips the state of the cell at `(x, y)` if it lies inside the world.
    fn toggle_if_inside(&mut self, x: i64, y: i64) {
        if 0 <= x && x < self.width as i64 && 0 <= y && y < self.height as i64 {
            let idx = cell_index(x as u32, y as u32, self.width);
            self.cells[idx] = !self.cells[idx];
        }
    }

    /// Flips all the cells on the line between `(x1, y1)` and `(x2, y2)`,
    /// except the two ends themselves.
    ///
    /// Points of the line outside the world are skipped.
    pub fn toggle_cells_between(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        let line = Line::new((x1, y1), (x2, y2));
        let interior = line.len().saturating_sub(1) as usize;
        for (x, y) in line.skip(1).take(interior) {
            self.toggle_if_inside(x, y);
        }
    }
}

/// A freehand stroke on the world.
///
/// Every cell the pointer passes through is flipped exactly once,
/// including the cells between two consecutive pointer positions.
///
/// ```
/// use lifecanvas_lib::{Cell, Stroke, Universe};
///
/// let mut universe = Universe::new(8, 8);
/// let mut stroke = Stroke::begin(&mut universe, 0, 0);
/// stroke.extend(&mut universe, 4, 0);
/// assert_eq!(universe.population(), 5);
/// assert_eq!(universe.get_cell_at(2, 0), Ok(Cell::Alive));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    /// The last pointer position.
    last: Coord,
}

impl Stroke {
    /// Starts a stroke at `(x, y)`, flipping the cell there.
    pub fn begin(universe: &mut Universe, x: u32, y: u32) -> Self {
        universe.toggle_if_inside(x as i64, y as i64);
        Stroke { last: (x, y) }
    }

    /// Moves the stroke to `(x, y)`, flipping the cell there
    /// and the cells between it and the last position.
    ///
    /// Does nothing if the pointer has not left the last cell.
    pub fn extend(&mut self, universe: &mut Universe, x: u32, y: u32) {
        if (x, y) == self.last {
            return;
        }
        let (last_x, last_y) = self.last;
        universe.toggle_if_inside(x as i64, y as i64);
        universe.toggle_cells_between(last_x, last_y, x, y);
        self.last = (x, y);
    }

    /// The last pointer position.
    pub fn last(&self) -> Coord {
        self.last
    }
}
