//! All kinds of errors in this crate.

use displaydoc::Display;
use std::{error::Error as StdError, fmt};
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Cell ({x}, {y}) is outside of the {width}x{height} world.
    IndexOutOfRange {
        /// The x-coordinate that was requested.
        x: u32,
        /// The y-coordinate that was requested.
        y: u32,
        /// Width of the world.
        width: u32,
        /// Height of the world.
        height: u32,
    },
}

/// Errors when drawing the world onto a [`Surface`](crate::Surface).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError<E> {
    /// The surface refused a draw call.
    Surface(E),
    /// The whole world does not fit in a single image.
    FrameTooLarge {
        /// Width of the world, in cells.
        width: u32,
        /// Height of the world, in cells.
        height: u32,
        /// Distance between the corners of two adjacent squares, in pixels.
        pitch: u64,
    },
}

impl<E> fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Surface(_) => write!(f, "The drawing surface refused a draw call."),
            RenderError::FrameTooLarge {
                width,
                height,
                pitch,
            } => write!(
                f,
                "A {}x{} world with squares {} pixels apart is too large to draw as one image.",
                width, height, pitch
            ),
        }
    }
}

impl<E: StdError + 'static> StdError for RenderError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            RenderError::Surface(e) => Some(e),
            RenderError::FrameTooLarge { .. } => None,
        }
    }
}
