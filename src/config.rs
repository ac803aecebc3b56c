// Compile-time settings for the dot field. Nothing here is read from the page.

pub const QUANTITY: usize = 100;
pub const PARTICLE_SIZE: f64 = 10.0;
pub const SPEED: f64 = 2.0;

// Alpha of the black overlay painted each frame, controls trail length
pub const TRAIL_ALPHA: f64 = 0.2;

pub const CANVAS_SELECTOR: &str = ".canvas-background";

// Fill colors are sampled from [COLOR_BASE, COLOR_BASE + COLOR_SPREAD]
pub const COLOR_BASE: u32 = 0xff0000;
pub const COLOR_SPREAD: u32 = 0x00eaff;

// Degree draws that are thrown away when a particle picks a new direction.
// 360 can never be drawn from [0, 360) but stays in the set.
pub const REJECTED_DEGREES: [u32; 4] = [0, 90, 180, 360];

pub const LOG_LEVEL: log::Level = log::Level::Warn;
