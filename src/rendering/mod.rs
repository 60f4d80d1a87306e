//! Rendering: story layout → paint commands → raster → PNG

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::story::StoryRecord;
use crate::Result;

/// An encoded raster image (PNG bytes plus dimensions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl RenderedImage {
    /// `data:` URL suitable for embedding in HTML or CSS.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png_data))
    }

    /// Hex SHA-256 of the PNG bytes.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Render a story card once the glyph atlas is ready.
pub async fn render_story(record: &StoryRecord) -> Result<RenderedImage> {
    let commands = layout::compose_story(record);
    let atlas = font::fonts_ready().await;
    raster::rasterize(&commands, layout::CANVAS_SIZE, layout::CANVAS_SIZE, atlas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_wraps_base64_png() {
        let img = RenderedImage { width: 1, height: 1, png_data: vec![1, 2, 3] };
        assert_eq!(img.to_data_url(), "data:image/png;base64,AQID");
    }

    #[test]
    fn digest_is_hex_sha256() {
        let img = RenderedImage { width: 0, height: 0, png_data: Vec::new() };
        assert_eq!(
            img.digest(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
