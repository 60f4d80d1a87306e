//! Built-in 8×8 bitmap face.
//!
//! Glyphs come from the `font8x8` basic and latin tables. The atlas is built
//! once per process; story generation awaits [`fonts_ready`] before drawing
//! text, which is the only suspension point in a generation.

use std::collections::HashMap;

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use log::debug;
use tokio::sync::OnceCell;

/// Rows in a glyph cell.
pub const GLYPH_ROWS: u32 = 8;
/// Columns in a glyph cell (also the unscaled advance).
pub const GLYPH_COLS: u32 = 8;
/// Glyph rows that sit above the baseline; the last row is the descender.
pub const ASCENT_ROWS: u32 = 7;

const FALLBACK: char = '?';

static ATLAS: OnceCell<GlyphAtlas> = OnceCell::const_new();

/// Wait until the glyph atlas is available.
pub async fn fonts_ready() -> &'static GlyphAtlas {
    ATLAS
        .get_or_init(|| async {
            let atlas = GlyphAtlas::build();
            debug!("glyph atlas ready ({} glyphs)", atlas.len());
            atlas
        })
        .await
}

/// Lookup table from character to 8×8 bitmap (bit 0 of each row is leftmost).
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    glyphs: HashMap<char, [u8; 8]>,
}

impl GlyphAtlas {
    pub fn build() -> Self {
        let mut glyphs = HashMap::new();
        let printable = (0x20u32..0x7F).chain(0xA0u32..=0xFF);
        for c in printable.filter_map(char::from_u32) {
            if let Some(bits) = BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c)) {
                glyphs.insert(c, bits);
            }
        }
        Self { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Bitmap for `c`, falling back to `?` for characters the face lacks.
    pub fn glyph(&self, c: char) -> [u8; 8] {
        self.glyphs
            .get(&c)
            .or_else(|| self.glyphs.get(&FALLBACK))
            .copied()
            .unwrap_or([0; 8])
    }
}
