use lifecanvas_lib::Surface;
use std::convert::Infallible;

/// A character grid standing in for a raster surface:
/// one terminal cell per pixel.
pub(crate) struct Screen {
    width: u32,
    height: u32,
    lit: Vec<bool>,
}

impl Screen {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Screen {
            width,
            height,
            lit: vec![false; width as usize * height as usize],
        }
    }

    /// Changes the size and turns every pixel off.
    pub(crate) fn reset(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.lit.clear();
        self.lit.resize(width as usize * height as usize, false);
    }

    fn light(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.lit[y as usize * self.width as usize + x as usize] = true;
        }
    }

    /// The rows of the screen, lit pixels drawn as `█`.
    pub(crate) fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lit
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|&on| if on { '█' } else { ' ' }).collect())
    }
}

impl Surface for Screen {
    type Error = Infallible;

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) -> Result<(), Infallible> {
        for py in y..y.saturating_add(height).min(self.height) {
            for px in x..x.saturating_add(width).min(self.width) {
                self.light(px, py);
            }
        }
        Ok(())
    }

    fn put_image(
        &mut self,
        rgba: &[u8],
        width: u32,
        _height: u32,
        x: u32,
        y: u32,
    ) -> Result<(), Infallible> {
        if width == 0 {
            return Ok(());
        }
        for (row, pixels) in rgba.chunks_exact(width as usize * 4).enumerate() {
            for (col, pixel) in pixels.chunks_exact(4).enumerate() {
                // Transparent pixels leave the screen untouched.
                if pixel[3] != 0 {
                    self.light(x + col as u32, y + row as u32);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifecanvas_lib::{Cell, Color, Universe};

    fn world() -> Universe {
        let mut universe = Universe::new(4, 3);
        universe.set_square_size(1);
        universe.set_square_spacing(0);
        for (x, y) in [(0, 0), (3, 0), (1, 1), (2, 2)] {
            universe.set_cell_at(x, y, Cell::Alive).unwrap();
        }
        universe
    }

    #[test]
    fn fill_cells() {
        let universe = world();
        let mut screen = Screen::new(4, 3);
        universe.fill_cells(Cell::Alive, &mut screen).unwrap();
        let lines: Vec<String> = screen.lines().collect();
        assert_eq!(lines, vec!["█  █", " █  ", "  █ "]);
    }

    #[test]
    fn render_cells_matches_fill_cells() {
        let universe = world();
        let mut filled = Screen::new(4, 3);
        let mut blitted = Screen::new(4, 3);
        universe.fill_cells(Cell::Alive, &mut filled).unwrap();
        universe
            .render_cells(Cell::Alive, Color::new(255, 255, 255, 255), &mut blitted)
            .unwrap();
        assert!(filled.lines().eq(blitted.lines()));
    }

    #[test]
    fn clipped() {
        let mut screen = Screen::new(2, 2);
        screen.fill_rect(1, 1, 5, 5).unwrap();
        screen.put_image(&[9, 9, 9, 9, 0, 0, 0, 0], 2, 1, 1, 0).unwrap();
        let lines: Vec<String> = screen.lines().collect();
        assert_eq!(lines, vec![" █", " █"]);

        screen.reset(3, 1);
        assert_eq!(screen.lines().collect::<Vec<_>>(), vec!["   "]);
    }
}
