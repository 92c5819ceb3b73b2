//! Presentation helpers: console text lines and the 8×8 LED matrix.
//!
//! Nothing here feeds back into control or alarm logic.

pub mod matrix;
pub mod text;

pub use matrix::{Matrix, bar_level, render_matrix};
