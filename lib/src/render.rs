//! Drawing the world onto a raster surface.

use crate::{cells::Cell, color::Color, error::RenderError, world::Universe};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D drawing surface, e.g. an HTML canvas.
///
/// The world never creates or owns a surface; it only issues
/// draw calls against one that the host supplies.
pub trait Surface {
    /// The error a draw call may fail with.
    type Error;

    /// Fills a `width` × `height` rectangle whose top-left corner is at
    /// `(x, y)`, using the surface's current fill color.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) -> Result<(), Self::Error>;

    /// Copies a `width` × `height` RGBA image to `(x, y)`.
    ///
    /// `rgba` holds 4 bytes per pixel, row by row,
    /// so its length is `width * height * 4`.
    fn put_image(
        &mut self,
        rgba: &[u8],
        width: u32,
        height: u32,
        x: u32,
        y: u32,
    ) -> Result<(), Self::Error>;
}

/// How the cells are laid out on a surface.
///
/// The cell at `(x, y)` is drawn as a `square_size` × `square_size` square
/// whose top-left corner is at `(x * pitch, y * pitch)`,
/// where `pitch = square_size + square_spacing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    /// Side length of a square, in pixels.
    pub square_size: u32,
    /// Gap between two squares, in pixels.
    pub square_spacing: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            square_size: 8,
            square_spacing: 1,
        }
    }
}

impl Geometry {
    /// Distance between the corners of two adjacent squares.
    #[inline]
    pub fn pitch(&self) -> u64 {
        self.square_size as u64 + self.square_spacing as u64
    }

    /// Top-left corner of the square of the cell at `(x, y)`,
    /// or `None` if it lies beyond `u32::MAX` pixels.
    #[inline]
    pub fn square_origin(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        Some((self.offset(x)?, self.offset(y)?))
    }

    /// Size in pixels of a world of `width` × `height` cells,
    /// or `None` if either side exceeds `u32::MAX` pixels.
    #[inline]
    pub fn checked_frame_size(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        Some((self.offset(width)?, self.offset(height)?))
    }

    /// Size in pixels of a world of `width` × `height` cells,
    /// each side saturating at `u32::MAX`.
    #[inline]
    pub fn frame_size(&self, width: u32, height: u32) -> (u32, u32) {
        let side = |n: u32| (n as u64).saturating_mul(self.pitch()).min(u32::MAX as u64) as u32;
        (side(width), side(height))
    }

    fn offset(&self, n: u32) -> Option<u32> {
        (n as u64)
            .checked_mul(self.pitch())
            .and_then(|offset| u32::try_from(offset).ok())
    }
}

impl Universe {
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn get_square_size(&self) -> u32 {
        self.geometry.square_size
    }

    pub fn set_square_size(&mut self, square_size: u32) {
        self.geometry.square_size = square_size;
    }

    pub fn get_square_spacing(&self) -> u32 {
        self.geometry.square_spacing
    }

    pub fn set_square_spacing(&mut self, square_spacing: u32) {
        self.geometry.square_spacing = square_spacing;
    }

    /// Size in pixels of the image drawn by [`render_cells`](Self::render_cells).
    ///
    /// Each side saturates at `u32::MAX`.
    pub fn frame_size(&self) -> (u32, u32) {
        self.geometry.frame_size(self.width, self.height)
    }

    /// Draws every cell in state `cell_type` with its own
    /// [`fill_rect`](Surface::fill_rect) call, in the surface's fill color.
    ///
    /// Cells whose square starts beyond `u32::MAX` pixels are skipped.
    ///
    /// Suited for small worlds or sparse states.
    pub fn fill_cells<S: Surface + ?Sized>(
        &self,
        cell_type: Cell,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        let size = self.geometry.square_size;
        let origins = self
            .coords_of(cell_type)
            .filter_map(|(x, y)| self.geometry.square_origin(x, y));
        for (px, py) in origins {
            surface.fill_rect(px, py, size, size)?;
        }
        Ok(())
    }

    /// Draws every cell in state `cell_type` in the given color,
    /// with a single [`put_image`](Surface::put_image) call
    /// covering the whole [`frame_size`](Self::frame_size).
    ///
    /// Pixels outside these cells are left fully transparent.
    /// Suited for large worlds or dense states.
    ///
    /// Fails with [`RenderError::FrameTooLarge`] if the image cannot be
    /// addressed or allocated, without calling the surface.
    pub fn render_cells<S: Surface + ?Sized>(
        &self,
        cell_type: Cell,
        color: Color,
        surface: &mut S,
    ) -> Result<(), RenderError<S::Error>> {
        let too_large = || RenderError::<S::Error>::FrameTooLarge {
            width: self.width,
            height: self.height,
            pitch: self.geometry.pitch(),
        };
        let (frame_width, frame_height) = self
            .geometry
            .checked_frame_size(self.width, self.height)
            .ok_or_else(too_large)?;
        let stride = (frame_width as usize)
            .checked_mul(4)
            .ok_or_else(too_large)?;
        let len = stride
            .checked_mul(frame_height as usize)
            .ok_or_else(too_large)?;
        let mut pixels: Vec<u8> = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large())?;
        pixels.resize(len, 0);

        let size = self.geometry.square_size as usize;
        if size > 0 {
            let rgba = color.to_rgba();
            let origins = self
                .coords_of(cell_type)
                .filter_map(|(x, y)| self.geometry.square_origin(x, y));
            for (px, py) in origins {
                let (px, py) = (px as usize, py as usize);
                for row in pixels.chunks_exact_mut(stride).skip(py).take(size) {
                    for pixel in row[px * 4..(px + size) * 4].chunks_exact_mut(4) {
                        pixel.copy_from_slice(&rgba);
                    }
                }
            }
        }

        surface
            .put_image(&pixels, frame_width, frame_height, 0, 0)
            .map_err(RenderError::Surface)
    }
}
