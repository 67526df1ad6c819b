//! Browser bindings for lifecanvas.
//!
//! The page owns the canvas, the buttons and the animation loop;
//! everything here is called from JavaScript once per event or frame.

mod canvas;
mod universe;

pub use canvas::CanvasSurface;
pub use universe::{Cell, Color, Universe};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}
