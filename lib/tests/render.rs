use lifecanvas_lib::{Cell, Color, RenderError, Surface, Universe};
use std::{convert::Infallible, error::Error};

/// A surface that only records the draw calls.
#[derive(Debug, Default)]
struct Recorder {
    rects: Vec<(u32, u32, u32, u32)>,
    images: Vec<Image>,
}

#[derive(Debug)]
struct Image {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
    at: (u32, u32),
}

impl Image {
    fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = ((y * self.width + x) * 4) as usize;
        &self.rgba[start..start + 4]
    }
}

impl Surface for Recorder {
    type Error = Infallible;

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) -> Result<(), Infallible> {
        self.rects.push((x, y, width, height));
        Ok(())
    }

    fn put_image(
        &mut self,
        rgba: &[u8],
        width: u32,
        height: u32,
        x: u32,
        y: u32,
    ) -> Result<(), Infallible> {
        self.images.push(Image {
            rgba: rgba.to_vec(),
            width,
            height,
            at: (x, y),
        });
        Ok(())
    }
}

/// A surface that refuses to draw.
struct Broken;

impl Surface for Broken {
    type Error = &'static str;

    fn fill_rect(&mut self, _: u32, _: u32, _: u32, _: u32) -> Result<(), Self::Error> {
        Err("broken")
    }

    fn put_image(&mut self, _: &[u8], _: u32, _: u32, _: u32, _: u32) -> Result<(), Self::Error> {
        Err("broken")
    }
}

#[test]
fn fill_one_rect_per_cell() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(4, 3);
    universe.set_square_size(5);
    universe.set_square_spacing(2);
    universe.set_cell_at(0, 0, Cell::Alive)?;
    universe.set_cell_at(3, 1, Cell::Alive)?;
    universe.set_cell_at(1, 2, Cell::Alive)?;

    let mut surface = Recorder::default();
    universe.fill_cells(Cell::Alive, &mut surface)?;
    assert_eq!(
        surface.rects,
        vec![(0, 0, 5, 5), (21, 7, 5, 5), (7, 14, 5, 5)]
    );
    assert!(surface.images.is_empty());

    let mut surface = Recorder::default();
    universe.fill_cells(Cell::Dead, &mut surface)?;
    assert_eq!(surface.rects.len(), 9);
    Ok(())
}

#[test]
fn render_one_image() -> Result<(), Box<dyn Error>> {
    let color = Color::new(10, 20, 30, 40);
    let mut universe = Universe::new(2, 2);
    universe.set_square_size(2);
    universe.set_square_spacing(1);
    universe.set_cell_at(1, 0, Cell::Alive)?;

    let mut surface = Recorder::default();
    universe.render_cells(Cell::Alive, color, &mut surface)?;
    assert!(surface.rects.is_empty());
    assert_eq!(surface.images.len(), 1);

    let image = &surface.images[0];
    assert_eq!((image.width, image.height), universe.frame_size());
    assert_eq!((image.width, image.height), (6, 6));
    assert_eq!(image.at, (0, 0));
    assert_eq!(image.rgba.len(), 6 * 6 * 4);

    for y in 0..6 {
        for x in 0..6 {
            let expected = if (3..5).contains(&x) && y < 2 {
                color.to_rgba()
            } else {
                [0; 4]
            };
            assert_eq!(image.pixel(x, y), expected, "pixel ({}, {})", x, y);
        }
    }
    Ok(())
}

#[test]
fn render_is_a_single_call() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(16, 16);
    let mut surface = Recorder::default();
    universe.render_cells(Cell::Alive, Color::new(0, 0, 0, 255), &mut surface)?;
    universe.render_cells(Cell::Dead, Color::new(0, 0, 0, 255), &mut surface)?;
    assert_eq!(surface.images.len(), 2);
    assert!(surface.images[0].rgba.iter().all(|&b| b == 0));
    assert!(surface.images[1].rgba.iter().any(|&b| b == 255));

    universe.set_cell_at(3, 3, Cell::Alive)?;
    let before = universe.clone();
    universe.render_cells(Cell::Alive, Color::new(1, 1, 1, 1), &mut surface)?;
    assert_eq!(universe.cells(), before.cells());
    Ok(())
}

#[test]
fn degenerate_geometry() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(3, 3);
    universe.set_cell_at(1, 1, Cell::Alive)?;
    universe.set_square_size(0);
    universe.set_square_spacing(0);

    let mut surface = Recorder::default();
    universe.fill_cells(Cell::Alive, &mut surface)?;
    universe.render_cells(Cell::Alive, Color::new(1, 2, 3, 4), &mut surface)?;
    assert_eq!(surface.rects, vec![(0, 0, 0, 0)]);
    assert_eq!(surface.images.len(), 1);
    assert_eq!((surface.images[0].width, surface.images[0].height), (0, 0));

    let empty = Universe::new(0, 7);
    let mut surface = Recorder::default();
    empty.fill_cells(Cell::Dead, &mut surface)?;
    empty.render_cells(Cell::Dead, Color::default(), &mut surface)?;
    assert!(surface.rects.is_empty());
    assert!(surface.images[0].rgba.is_empty());
    Ok(())
}

#[test]
fn spacing_only() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(2, 1);
    universe.set_cell_at(0, 0, Cell::Alive)?;
    universe.set_square_size(0);
    universe.set_square_spacing(3);

    let mut surface = Recorder::default();
    universe.render_cells(Cell::Alive, Color::new(9, 9, 9, 9), &mut surface)?;
    assert_eq!((surface.images[0].width, surface.images[0].height), (6, 3));
    assert!(surface.images[0].rgba.iter().all(|&b| b == 0));
    Ok(())
}

#[test]
fn surface_errors_are_returned() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(2, 2);
    universe.set_cell_at(0, 1, Cell::Alive)?;
    assert_eq!(universe.fill_cells(Cell::Alive, &mut Broken), Err("broken"));
    assert_eq!(
        universe.render_cells(Cell::Alive, Color::default(), &mut Broken),
        Err(RenderError::Surface("broken"))
    );
    // Nothing to draw, nothing to fail.
    assert_eq!(Universe::new(2, 2).fill_cells(Cell::Alive, &mut Broken), Ok(()));
    Ok(())
}

#[test]
fn huge_squares() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(3, 1);
    universe.set_cell_at(0, 0, Cell::Alive)?;
    universe.set_cell_at(2, 0, Cell::Alive)?;
    universe.set_square_size(3_000_000_000);

    // The second square would start past u32::MAX.
    let mut surface = Recorder::default();
    universe.fill_cells(Cell::Alive, &mut surface)?;
    assert_eq!(surface.rects, vec![(0, 0, 3_000_000_000, 3_000_000_000)]);

    assert_eq!(universe.frame_size(), (u32::MAX, 3_000_000_001));
    assert_eq!(
        universe.render_cells(Cell::Alive, Color::default(), &mut surface),
        Err(RenderError::FrameTooLarge {
            width: 3,
            height: 1,
            pitch: 3_000_000_001,
        })
    );
    assert!(surface.images.is_empty());
    Ok(())
}

#[test]
fn wide_frame_saturates() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(70_000, 1);
    universe.set_square_size(70_000);
    assert_eq!(universe.frame_size(), (u32::MAX, 70_001));

    let mut surface = Recorder::default();
    let err = universe
        .render_cells(Cell::Dead, Color::default(), &mut surface)
        .unwrap_err();
    assert!(matches!(err, RenderError::FrameTooLarge { .. }));
    assert!(err.to_string().contains("70000x1"));

    // Fits in u32 on both sides but not in memory.
    let mut universe = Universe::new(1, 1);
    universe.set_square_size(u32::MAX - 1);
    let err = universe.render_cells(Cell::Dead, Color::default(), &mut surface);
    assert!(matches!(err, Err(RenderError::FrameTooLarge { .. })));
    assert!(surface.images.is_empty());
    Ok(())
}
