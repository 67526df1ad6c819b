//! World configuration.

use crate::world::Universe;
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to fill the cells of a fresh world.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Seed {
    /// Every cell is dead.
    #[educe(Default)]
    Empty,

    /// The cell at row-major index `i` is alive
    /// if and only if `i` is a multiple of 2 or 7.
    ///
    /// On a world whose width is odd this gives a busy diagonal
    /// pattern that keeps evolving for a long time.
    Stripes,

    /// Random.
    ///
    /// The probability of either state is `1/2`.
    Random,
}

impl FromStr for Seed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" | "e" => Ok(Seed::Empty),
            "stripes" | "s" => Ok(Seed::Stripes),
            "random" | "r" => Ok(Seed::Random),
            _ => Err(String::from("invalid seed")),
        }
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Seed::Empty => "empty",
            Seed::Stripes => "stripes",
            Seed::Random => "random",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}

/// World configuration.
///
/// The world will be generated from this configuration.
/// Missing fields in a configuration file take their default values.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width, in cells.
    #[educe(Default = 64)]
    pub width: u32,

    /// Height, in cells.
    #[educe(Default = 64)]
    pub height: u32,

    /// Side length of a rendered cell, in pixels.
    #[educe(Default = 8)]
    pub square_size: u32,

    /// Gap between two rendered cells, in pixels.
    #[educe(Default = 1)]
    pub square_spacing: u32,

    /// How to fill the cells of the new world.
    pub seed: Seed,

    /// How many generations a host advances per animation frame.
    #[educe(Default = 1)]
    pub ticks_per_frame: u32,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: u32, height: u32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the width and the height.
    pub fn set_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the side length of a rendered cell.
    pub fn set_square_size(mut self, square_size: u32) -> Self {
        self.square_size = square_size;
        self
    }

    /// Sets the gap between two rendered cells.
    pub fn set_square_spacing(mut self, square_spacing: u32) -> Self {
        self.square_spacing = square_spacing;
        self
    }

    /// Sets how to fill the cells of the new world.
    pub fn set_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Sets how many generations a host advances per animation frame.
    pub fn set_ticks_per_frame(mut self, ticks_per_frame: u32) -> Self {
        self.ticks_per_frame = ticks_per_frame;
        self
    }

    /// Creates a new world from the configuration.
    pub fn world(&self) -> Universe {
        let mut universe = Universe::new(self.width, self.height);
        universe.set_square_size(self.square_size);
        universe.set_square_spacing(self.square_spacing);
        if self.seed != Seed::Empty {
            universe.seed(self.seed);
        }
        universe
    }
}
