//! 24-bit story colors.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::Error;

/// Largest representable color (`#FFFFFF`).
pub const MAX_COLOR: u32 = 0xFF_FFFF;

/// A 24-bit RGB value, displayed as `#RRGGBB` with upper-case hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorValue(u32);

impl ColorValue {
    pub const WHITE: ColorValue = ColorValue(MAX_COLOR);
    pub const BLACK: ColorValue = ColorValue(0);

    /// Build a color from its packed value. Bits above the low 24 are dropped.
    pub fn new(value: u32) -> Self {
        Self(value & MAX_COLOR)
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b))
    }

    /// Draw a uniformly random color from the full `0..=0xFFFFFF` range.
    pub fn random_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..=MAX_COLOR))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn rgb(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for ColorValue {
    type Err = Error;

    /// Accepts `#RRGGBB` or `RRGGBB`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::ConfigError(format!("invalid color '{}'", s)));
        }
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|e| Error::ConfigError(format!("invalid color '{}': {}", s, e)))
    }
}
