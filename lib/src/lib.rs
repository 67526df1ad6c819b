//! __Lifecanvas__ is an interactive
//! [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! engine.
//!
//! A [`Universe`] is a toroidal grid of [`Cell`]s. It can be evolved with
//! [`tick`](Universe::tick), edited cell by cell or with freehand
//! [`Stroke`]s, resized, and drawn onto any [`Surface`] that can fill
//! rectangles and blit RGBA images.
//!
//! # Example
//!
//! ```rust
//! use lifecanvas_lib::{Cell, Universe};
//!
//! // A blinker.
//! let mut universe = Universe::new(5, 5);
//! for x in 1..=3 {
//!     universe.set_cell_at(x, 2, Cell::Alive).unwrap();
//! }
//!
//! universe.tick();
//! assert_eq!(
//!     universe.plaintext(),
//!     String::from(
//!         ".....\n\
//!          ..o..\n\
//!          ..o..\n\
//!          ..o..\n\
//!          .....\n"
//!     )
//! );
//! ```

#![cfg_attr(docs_rs, feature(doc_cfg))]

mod cells;
mod color;
mod config;
mod edit;
mod error;
pub mod life;
mod render;
mod resize;
mod world;

pub use cells::{cell_index, Cell, Coord};
pub use color::Color;
pub use config::{Config, Seed};
pub use edit::Stroke;
pub use error::{Error, RenderError};
pub use render::{Geometry, Surface};
pub use world::Universe;
