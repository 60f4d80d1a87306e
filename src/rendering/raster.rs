/// Rasterizer: executes paint commands into an RGB buffer and encodes PNG

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgb, RgbImage};

use crate::rendering::font::{GlyphAtlas, ASCENT_ROWS, GLYPH_COLS, GLYPH_ROWS};
use crate::rendering::paint::{FontSpec, PaintCommand};
use crate::rendering::RenderedImage;
use crate::{ColorValue, Error, Result};

/// Draw `commands` in order onto a `width`×`height` canvas.
///
/// The canvas starts black; anything drawn outside it is clipped.
pub fn paint(commands: &[PaintCommand], width: u32, height: u32, atlas: &GlyphAtlas) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);
    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect { x, y, width, height, color } => {
                fill_rect(&mut canvas, *x, *y, *width, *height, *color);
            }
            PaintCommand::Text { x, y, text, font, color } => {
                draw_text(&mut canvas, atlas, *x, *y, text, *font, *color);
            }
        }
    }
    canvas
}

/// Paint and PNG-encode in one step.
pub fn rasterize(
    commands: &[PaintCommand],
    width: u32,
    height: u32,
    atlas: &GlyphAtlas,
) -> Result<RenderedImage> {
    if width == 0 || height == 0 {
        return Err(Error::RenderError(format!("empty canvas {}x{}", width, height)));
    }
    let canvas = paint(commands, width, height, atlas);
    let png_data = encode_png(&canvas)?;
    Ok(RenderedImage { width, height, png_data })
}

pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgb8,
    )?;
    Ok(out)
}

fn fill_rect(canvas: &mut RgbImage, x: i32, y: i32, width: u32, height: u32, color: ColorValue) {
    let x0 = x.max(0) as i64;
    let y0 = y.max(0) as i64;
    let x1 = (x as i64 + width as i64).min(canvas.width() as i64);
    let y1 = (y as i64 + height as i64).min(canvas.height() as i64);
    let rgb = Rgb(color.rgb());
    for row in y0..y1 {
        for col in x0..x1 {
            canvas.put_pixel(col as u32, row as u32, rgb);
        }
    }
}

/// Left-aligned text with `baseline` under the glyphs' ascent rows.
fn draw_text(
    canvas: &mut RgbImage,
    atlas: &GlyphAtlas,
    x: i32,
    baseline: i32,
    text: &str,
    font: FontSpec,
    color: ColorValue,
) {
    let scale = font.scale() as i32;
    let top = baseline - ASCENT_ROWS as i32 * scale;
    let advance = GLYPH_COLS as i32 * scale;
    // bold is a second strike shifted to the right
    let strikes = if font.bold { 2 } else { 1 };
    let bold_shift = (scale / 2).max(1);

    let mut pen_x = x;
    for c in text.chars() {
        let bits = atlas.glyph(c);
        for strike in 0..strikes {
            draw_glyph(canvas, &bits, pen_x + strike * bold_shift, top, scale, color);
        }
        pen_x += advance;
    }
}

fn draw_glyph(canvas: &mut RgbImage, bits: &[u8; 8], x: i32, y: i32, scale: i32, color: ColorValue) {
    for row in 0..GLYPH_ROWS as i32 {
        let line = bits[row as usize];
        for col in 0..GLYPH_COLS as i32 {
            if line & (1 << col) != 0 {
                fill_rect(canvas, x + col * scale, y + row * scale, scale as u32, scale as u32, color);
            }
        }
    }
}
