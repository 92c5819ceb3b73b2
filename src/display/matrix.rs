//! 8×8 LED matrix framebuffer and bar-graph rendering.
//!
//! Three vertical bars show the current reading against the sensor range,
//! with a magenta pixel marking each setpoint:
//!
//! ```text
//!   col   0  1  2  3  4  5  6  7
//!                  P     H     T
//!   row 7 .  .  .  .  .  .  .  #      # = reading (green)
//!   row 6 .  .  .  #  .  M  .  #      M = setpoint (magenta)
//!   ...
//!   row 0 .  .  .  #  .  #  .  #
//! ```
//!
//! Level 0 lights only the bottom pixel of a bar; level 7 fills it.

use core::fmt;

use log::debug;

use crate::config::{Range, SimulationConfig};
use crate::control::Setpoint;
use crate::error::DisplayError;
use crate::sensors::Reading;

/// Colour as (R, G, B) tuple, each 0 to 255.
pub type Rgb = (u8, u8, u8);

pub const BLACK: Rgb = (0, 0, 0);
pub const GREEN: Rgb = (0, 255, 0);
pub const MAGENTA: Rgb = (255, 0, 255);

pub const SIZE: usize = 8;
/// Highest valid bar level.
pub const MAX_LEVEL: i32 = SIZE as i32 - 1;

/// Column of the temperature bar.
pub const TEMPERATURE_BAR: i32 = 7;
/// Column of the humidity bar.
pub const HUMIDITY_BAR: i32 = 5;
/// Column of the pressure bar.
pub const PRESSURE_BAR: i32 = 3;

/// Row-major framebuffer; `pixels[row][col]`, row 0 at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix {
    pixels: [[Rgb; SIZE]; SIZE],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Matrix {
    /// All pixels dark.
    pub const fn new() -> Self {
        Self {
            pixels: [[BLACK; SIZE]; SIZE],
        }
    }

    pub fn wipe(&mut self, colour: Rgb) {
        self.pixels = [[colour; SIZE]; SIZE];
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<Rgb> {
        self.pixels.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn set_pixel(&mut self, row: i32, col: i32, colour: Rgb) -> Result<(), DisplayError> {
        let (r, c) = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < SIZE && c < SIZE => (r, c),
            _ => return Err(DisplayError::PixelOutOfRange { row, col }),
        };
        self.pixels[r][c] = colour;
        Ok(())
    }

    /// Light rows `0..=level` of column `bar` in `colour`, the rest dark.
    ///
    /// Levels above [`MAX_LEVEL`] are clamped. A bar outside `0..8` or a
    /// negative level is rejected and leaves the matrix untouched.
    pub fn set_vertical_bar(&mut self, bar: i32, colour: Rgb, level: i32) -> Result<(), DisplayError> {
        let level = level.min(MAX_LEVEL);
        let col = match usize::try_from(bar) {
            Ok(c) if c < SIZE => c,
            _ => return Err(DisplayError::BarOutOfRange(bar)),
        };
        let lit = match usize::try_from(level) {
            Ok(l) => l,
            Err(_) => return Err(DisplayError::LevelOutOfRange(level)),
        };
        for (row, line) in self.pixels.iter_mut().enumerate() {
            line[col] = if row <= lit { colour } else { BLACK };
        }
        Ok(())
    }
}

/// Scale `value` within `range` onto a bar level.
///
/// `trunc(8 * ((v - lo) / (hi - lo) + 0.05) - 1)`. The result may be
/// negative or above [`MAX_LEVEL`]; [`Matrix::set_vertical_bar`] decides.
pub fn bar_level(value: f32, range: Range) -> i32 {
    let fraction = (value - range.low) / (range.high - range.low);
    (SIZE as f32 * (fraction + 0.05) - 1.0) as i32
}

/// Draw readings as green bars and setpoints as magenta markers.
///
/// A reading below its range leaves that bar dark. A setpoint that maps
/// outside the matrix is not drawn.
pub fn render_matrix(reading: &Reading, setpoint: &Setpoint, scale: &SimulationConfig) -> Matrix {
    let mut m = Matrix::new();

    let bars = [
        (TEMPERATURE_BAR, reading.temperature, scale.temperature),
        (HUMIDITY_BAR, reading.humidity, scale.humidity),
        (PRESSURE_BAR, reading.pressure, scale.pressure),
    ];
    for (bar, value, range) in bars {
        if let Err(e) = m.set_vertical_bar(bar, GREEN, bar_level(value, range)) {
            debug!("bar {bar} not drawn: {e}");
        }
    }

    let marks = [
        (TEMPERATURE_BAR, setpoint.temperature, scale.temperature),
        (HUMIDITY_BAR, setpoint.humidity, scale.humidity),
    ];
    for (bar, value, range) in marks {
        if let Err(e) = m.set_pixel(bar_level(value, range), bar, MAGENTA) {
            debug!("setpoint marker skipped: {e}");
        }
    }

    m
}

/// ASCII rendition, top row first. `.` dark, `#` green, `M` magenta,
/// `*` any other colour.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.pixels.iter().rev() {
            for (col, px) in line.iter().enumerate() {
                let ch = match *px {
                    BLACK => '.',
                    GREEN => '#',
                    MAGENTA => 'M',
                    _ => '*',
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
