use crate::canvas::CanvasSurface;
use lifecanvas_lib::{Config, RenderError, Seed, Stroke};
use log::info;
use std::fmt::Display;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// Turns an error into a JavaScript `Error`, to be thrown.
fn js_error<E: Display>(e: E) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl From<Cell> for lifecanvas_lib::Cell {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Dead => lifecanvas_lib::Cell::Dead,
            Cell::Alive => lifecanvas_lib::Cell::Alive,
        }
    }
}

impl From<lifecanvas_lib::Cell> for Cell {
    fn from(cell: lifecanvas_lib::Cell) -> Self {
        match cell {
            lifecanvas_lib::Cell::Dead => Cell::Dead,
            lifecanvas_lib::Cell::Alive => Cell::Alive,
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct Color(lifecanvas_lib::Color);

#[wasm_bindgen]
impl Color {
    #[wasm_bindgen(constructor)]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color(lifecanvas_lib::Color::new(r, g, b, a))
    }
}

/// The world, as seen from JavaScript.
#[wasm_bindgen]
pub struct Universe {
    world: lifecanvas_lib::Universe,
    /// The freehand stroke in progress, if the pointer is down.
    stroke: Option<Stroke>,
    ticks_per_frame: u32,
}

#[wasm_bindgen]
impl Universe {
    /// Creates a new world where every cell is dead.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Universe {
        Universe::from(&Config::new(width, height))
    }

    /// Creates a new world from a JSON configuration.
    ///
    /// Missing fields take their default values.
    pub fn from_config(json: &str) -> Result<Universe, JsValue> {
        let config: Config = serde_json::from_str(json).map_err(js_error)?;
        Ok(Universe::from(&config))
    }

    /// Computes the next generation.
    pub fn tick(&mut self) {
        self.world.tick();
    }

    /// Computes `n` generations.
    pub fn ticks(&mut self, n: u32) {
        self.world.advance(n);
    }

    /// Computes as many generations as an animation frame should show.
    pub fn frame(&mut self) {
        self.world.advance(self.ticks_per_frame);
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }

    pub fn set_ticks_per_frame(&mut self, ticks_per_frame: u32) {
        self.ticks_per_frame = ticks_per_frame;
    }

    pub fn get_cell_at(&self, x: u32, y: u32) -> Result<Cell, JsValue> {
        self.world.get_cell_at(x, y).map(Cell::from).map_err(js_error)
    }

    pub fn set_cell_at(&mut self, x: u32, y: u32, cell: Cell) -> Result<(), JsValue> {
        self.world.set_cell_at(x, y, cell.into()).map_err(js_error)
    }

    pub fn toggle_cell_at(&mut self, x: u32, y: u32) -> Result<(), JsValue> {
        self.world.toggle_cell_at(x, y).map_err(js_error)
    }

    /// Toggles all cells on the line between (x1, y1) and (x2, y2),
    /// but cells at (x1, y1) and (x2, y2) remain the same.
    pub fn toggle_cells_between(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        self.world.toggle_cells_between(x1, y1, x2, y2);
    }

    /// Starts a freehand stroke on pointer down.
    pub fn stroke_begin(&mut self, x: u32, y: u32) {
        self.stroke = Some(Stroke::begin(&mut self.world, x, y));
    }

    /// Extends the current stroke on pointer move.
    ///
    /// Starts a new one if the pointer was not down.
    pub fn stroke_to(&mut self, x: u32, y: u32) {
        if let Some(stroke) = &mut self.stroke {
            stroke.extend(&mut self.world, x, y);
        } else {
            self.stroke = Some(Stroke::begin(&mut self.world, x, y));
        }
    }

    /// Ends the current stroke on pointer up.
    pub fn stroke_end(&mut self) {
        self.stroke = None;
    }

    pub fn clear(&mut self) {
        self.world.clear();
    }

    pub fn seed_random(&mut self) {
        self.world.seed(Seed::Random);
    }

    pub fn seed_stripes(&mut self) {
        self.world.seed(Seed::Stripes);
    }

    pub fn resize_to(&mut self, width: u32, height: u32) {
        self.stroke = None;
        self.world.resize_to(width, height);
    }

    pub fn width(&self) -> u32 {
        self.world.width()
    }

    pub fn height(&self) -> u32 {
        self.world.height()
    }

    pub fn get_square_size(&self) -> u32 {
        self.world.get_square_size()
    }

    pub fn set_square_size(&mut self, size: u32) {
        self.world.set_square_size(size);
    }

    pub fn get_square_spacing(&self) -> u32 {
        self.world.get_square_spacing()
    }

    pub fn set_square_spacing(&mut self, spacing: u32) {
        self.world.set_square_spacing(spacing);
    }

    /// Width of the canvas needed to show the whole world.
    pub fn frame_width(&self) -> u32 {
        self.world.frame_size().0
    }

    /// Height of the canvas needed to show the whole world.
    pub fn frame_height(&self) -> u32 {
        self.world.frame_size().1
    }

    pub fn population(&self) -> u32 {
        self.world.population() as u32
    }

    /// Number of generations since the world was created, cleared or seeded.
    pub fn generation(&self) -> f64 {
        self.world.generation() as f64
    }

    pub fn plaintext(&self) -> String {
        self.world.plaintext()
    }

    /// Draws the cells in state `cell_type` with one `fillRect` each,
    /// in the current `fillStyle` of `ctx`.
    pub fn fill_cells(
        &self,
        cell_type: Cell,
        ctx: &CanvasRenderingContext2d,
    ) -> Result<(), JsValue> {
        self.world
            .fill_cells(cell_type.into(), &mut CanvasSurface::new(ctx))
    }

    /// Draws the cells in state `cell_type` in `color`
    /// with a single `putImageData`.
    pub fn render_cells(
        &self,
        cell_type: Cell,
        color: &Color,
        ctx: &CanvasRenderingContext2d,
    ) -> Result<(), JsValue> {
        self.world
            .render_cells(cell_type.into(), color.0, &mut CanvasSurface::new(ctx))
            .map_err(|e| match e {
                RenderError::Surface(e) => e,
                e @ RenderError::FrameTooLarge { .. } => js_error(e),
            })
    }
}

impl From<&Config> for Universe {
    fn from(config: &Config) -> Self {
        info!(
            "Creating a {}x{} universe with seed {}",
            config.width, config.height, config.seed
        );
        Universe {
            world: config.world(),
            stroke: None,
            ticks_per_frame: config.ticks_per_frame,
        }
    }
}
