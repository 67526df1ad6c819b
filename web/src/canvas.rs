use lifecanvas_lib::Surface;
use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

/// A [`Surface`] backed by the 2D context of an HTML canvas.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        CanvasSurface { ctx }
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) -> Result<(), JsValue> {
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
        Ok(())
    }

    fn put_image(
        &mut self,
        rgba: &[u8],
        width: u32,
        height: u32,
        x: u32,
        y: u32,
    ) -> Result<(), JsValue> {
        // `ImageData` refuses zero-sized images.
        if width == 0 || height == 0 {
            return Ok(());
        }
        let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(rgba), width, height)?;
        self.ctx.put_image_data(&image, x as f64, y as f64)
    }
}
