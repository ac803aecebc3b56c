// Simple color struct, created from an unsigned 32 representing 0xRRGGBB

use crate::config::{COLOR_BASE, COLOR_SPREAD};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = (num >> 0) as u8;

        Color { r, g, b }
    }

    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    // Warm palette: base red plus a random offset, truncated to an integer.
    // The offset lands in the green and blue channels, giving reds through
    // oranges, yellows and pinks.
    pub fn random_warm<R: Rng + ?Sized>(rng: &mut R) -> Color {
        let num = rng.gen::<f64>() * COLOR_SPREAD as f64 + COLOR_BASE as f64;
        Color::from_u32(num as u32)
    }

    // CSS hex string, lowercase and unpadded like Number.toString(16)
    pub fn to_hex(self) -> String {
        format!("#{:x}", self.to_u32())
    }
}
