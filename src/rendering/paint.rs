/// Paint command set produced by layout and executed by the rasterizer

use crate::ColorValue;

/// Font selection for a `Text` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    /// Cell height in pixels; the bitmap face is scaled by `px / 8`
    pub px: u32,
    pub bold: bool,
}

impl FontSpec {
    pub const fn regular(px: u32) -> Self {
        Self { px, bold: false }
    }

    pub const fn bold(px: u32) -> Self {
        Self { px, bold: true }
    }

    /// Integer glyph scale; never below 1.
    pub fn scale(&self) -> u32 {
        (self.px / 8).max(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: ColorValue,
    },
    /// Left-aligned text; `y` is the baseline.
    Text {
        x: i32,
        y: i32,
        text: String,
        font: FontSpec,
        color: ColorValue,
    },
}
