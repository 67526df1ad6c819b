//! The world.

use crate::{
    cells::{cell_index, Cell, Coord},
    config::Seed,
    error::Error,
    render::Geometry,
};
use log::debug;
use rand::{thread_rng, Rng};
use std::fmt::{self, Debug, Display, Formatter};

/// The world.
///
/// A `width` × `height` torus of cells, stored in row-major order,
/// together with the geometry used to draw it.
#[derive(Clone)]
pub struct Universe {
    /// Width, in cells.
    pub(crate) width: u32,

    /// Height, in cells.
    pub(crate) height: u32,

    /// The current generation.
    ///
    /// The cell at `(x, y)` is at [`cell_index(x, y, width)`](cell_index).
    /// Its length is always `width * height`.
    pub(crate) cells: Vec<Cell>,

    /// The buffer the next generation is written into.
    ///
    /// It has the same length as `cells`, and its content is meaningless
    /// outside of [`tick`](Self::tick).
    pub(crate) scratch: Vec<Cell>,

    /// How the cells are laid out on a drawing surface.
    pub(crate) geometry: Geometry,

    /// Number of generations computed since the world was created,
    /// cleared or seeded.
    pub(crate) generation: u64,
}

impl Universe {
    /// Creates a new world where every cell is dead.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Universe {
            width,
            height,
            cells: vec![Cell::Dead; size],
            scratch: vec![Cell::Dead; size],
            geometry: Geometry::default(),
            generation: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All the cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of generations computed since the world was created,
    /// cleared or seeded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether `(x, y)` lies inside the world.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// The index of `(x, y)` in [`cells`](Self::cells),
    /// or an error if it lies outside the world.
    pub(crate) fn checked_index(&self, x: u32, y: u32) -> Result<usize, Error> {
        if self.contains(x, y) {
            Ok(cell_index(x, y, self.width))
        } else {
            Err(Error::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Gets the state of the cell at `(x, y)`.
    pub fn get_cell_at(&self, x: u32, y: u32) -> Result<Cell, Error> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Sets the state of the cell at `(x, y)`.
    pub fn set_cell_at(&mut self, x: u32, y: u32, cell: Cell) -> Result<(), Error> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.generation = 0;
        debug!("Cleared a {}x{} world", self.width, self.height);
    }

    /// Refills every cell according to the seed,
    /// using the thread-local random number generator.
    pub fn seed(&mut self, seed: Seed) {
        self.seed_with_rng(seed, &mut thread_rng());
    }

    /// Refills every cell according to the seed,
    /// using the given random number generator for [`Seed::Random`].
    pub fn seed_with_rng<R: Rng + ?Sized>(&mut self, seed: Seed, rng: &mut R) {
        match seed {
            Seed::Empty => self.cells.fill(Cell::Dead),
            Seed::Stripes => {
                for (i, cell) in self.cells.iter_mut().enumerate() {
                    *cell = Cell::from(i % 2 == 0 || i % 7 == 0);
                }
            }
            Seed::Random => {
                for cell in self.cells.iter_mut() {
                    *cell = Cell::from(rng.gen_bool(0.5));
                }
            }
        }
        self.generation = 0;
        debug!(
            "Seeded a {}x{} world with {}: {} living cells",
            self.width,
            self.height,
            seed,
            self.population()
        );
    }

    /// Coordinates of all the cells in the given state, row by row.
    pub fn coords_of(&self, cell_type: Cell) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == cell_type)
            .map(move |(i, _)| ((i % width as usize) as u32, (i / width as usize) as u32))
    }

    /// Displays the whole world in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self) -> String {
        self.to_string()
    }
}

impl Display for Universe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width as usize) {
            for cell in row {
                match cell {
                    Cell::Dead => f.write_str(".")?,
                    Cell::Alive => f.write_str("o")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl Debug for Universe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("geometry", &self.geometry)
            .field("generation", &self.generation)
            .field("population", &self.population())
            .finish()
    }
}
