//! Custom glyphs and axis legends for bar-graph gauges on HD44780 character LCDs.
//!
//! A 16x2 panel shows a gauge as one row of 16 bar cells with an axis legend
//! beneath it. Each cell is five pixel columns wide, so the row resolves 80
//! steps. Empty and full cells use ROM characters; the four partial cells and
//! four condensed scale numerals (0, 5, 10, 15) live in the eight CGRAM slots.
//!
//! - [`config`]: Panel geometry, full scales and slot assignments
//! - [`glyph`]: CGRAM row encoding, slots and character codes
//! - [`table`]: The custom glyph set and bar level / label lookups
//! - [`axis`]: The 16 A and 400 W legend rows
//! - [`gauge`]: Measured value to bar row
//! - [`display`]: Driver trait, CGRAM loading and gauge drawing
//! - [`preview`]: `embedded-graphics` rendering of glyphs for simulators
//! - [`error`]: Error types
//!
//! # Usage
//!
//! ```ignore
//! use lcd_bargraph_glyphs::{BarGraphDisplay, Gauge};
//!
//! let mut gauge_lcd = BarGraphDisplay::new(lcd);
//! gauge_lcd.load_custom_glyphs()?;
//!
//! loop {
//!     let amps = read_current();
//!     gauge_lcd.draw_gauge(&Gauge::CURRENT_16A, amps)?;
//! }
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while firmware builds stay `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod log;

pub mod axis;
pub mod config;
pub mod display;
pub mod error;
pub mod gauge;
pub mod glyph;
pub mod preview;
pub mod table;

// Re-export commonly used items
pub use axis::{AXIS_16_AMP, AXIS_400_WATT, AxisLabel};
pub use display::{BarGraphDisplay, CharacterDisplay, load_custom_glyphs};
pub use error::{GlyphError, LoadError, RenderError};
pub use gauge::{BarRow, Gauge};
pub use glyph::{BLANK_CHAR, CharCode, FULL_BLOCK_CHAR, Glyph, GlyphRow, GlyphSlot};
pub use table::{BarLevel, ScaleLabel, glyph_for_bar_level, glyph_for_label};
