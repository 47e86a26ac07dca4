//! Display driver seam, CGRAM loading and gauge drawing.
//!
//! The crate never talks to a bus. Anything that can program a CGRAM slot,
//! move the cursor and write a character code implements
//! [`CharacterDisplay`]; an HD44780 driver over I2C or a parallel port, or a
//! host-side fake.
//!
//! # Loading
//!
//! [`load_custom_glyphs`] writes all eight slots of
//! [`CUSTOM_GLYPHS`](crate::table::CUSTOM_GLYPHS) every time it is called.
//! Loading is an overwrite, so calling it again (for example after the panel
//! was power cycled) leaves CGRAM exactly as a single load would.
//!
//! [`BarGraphDisplay`] wraps a driver and remembers whether the last load
//! succeeded. It refuses to draw bars or axes until then, so slot codes are
//! never shown over uninitialized CGRAM.

use crate::axis::AxisLabel;
use crate::config::{DISPLAY_COLUMNS, DISPLAY_ROWS, GLYPH_HEIGHT};
use crate::error::{LoadError, RenderError};
use crate::gauge::{BarRow, Gauge};
use crate::glyph::{CharCode, GlyphSlot};
use crate::log::{log_debug, log_info, log_warn};
use crate::table::CUSTOM_GLYPHS;

// =============================================================================
// Driver Trait
// =============================================================================

/// Minimal character LCD interface needed to load glyphs and draw gauges.
pub trait CharacterDisplay {
    /// Driver error (bus NACK, timeout, ...).
    type Error;

    /// Program CGRAM `slot` with eight row bytes, top row first.
    fn define_glyph(
        &mut self,
        slot: GlyphSlot,
        rows: &[u8; GLYPH_HEIGHT],
    ) -> Result<(), Self::Error>;

    /// Move the cursor to (`col`, `row`), zero based.
    fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) -> Result<(), Self::Error>;

    /// Write one character code at the cursor and advance it.
    fn write_code(
        &mut self,
        code: CharCode,
    ) -> Result<(), Self::Error>;

    /// Write a run of character codes starting at the cursor.
    fn write_codes(
        &mut self,
        codes: &[CharCode],
    ) -> Result<(), Self::Error> {
        for &code in codes {
            self.write_code(code)?;
        }
        Ok(())
    }
}

impl<T: CharacterDisplay + ?Sized> CharacterDisplay for &mut T {
    type Error = T::Error;

    fn define_glyph(
        &mut self,
        slot: GlyphSlot,
        rows: &[u8; GLYPH_HEIGHT],
    ) -> Result<(), Self::Error> {
        (**self).define_glyph(slot, rows)
    }

    fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) -> Result<(), Self::Error> {
        (**self).set_cursor(col, row)
    }

    fn write_code(
        &mut self,
        code: CharCode,
    ) -> Result<(), Self::Error> {
        (**self).write_code(code)
    }

    fn write_codes(
        &mut self,
        codes: &[CharCode],
    ) -> Result<(), Self::Error> {
        (**self).write_codes(codes)
    }
}

// =============================================================================
// CGRAM Loading
// =============================================================================

/// Write every custom glyph into its CGRAM slot.
///
/// Stops at the first driver error and reports the slot that failed. CGRAM is
/// then partly written and must be treated as unloaded.
pub fn load_custom_glyphs<D: CharacterDisplay + ?Sized>(display: &mut D) -> Result<(), LoadError<D::Error>> {
    for (slot, glyph) in &CUSTOM_GLYPHS {
        let slot = *slot;
        display.define_glyph(slot, &glyph.to_cgram()).map_err(|error| {
            log_warn!("CGRAM load failed at slot {}", slot.index());
            LoadError::Device { slot, error }
        })?;
        log_debug!("CGRAM slot {} loaded", slot.index());
    }
    Ok(())
}

// =============================================================================
// Bar Graph Display
// =============================================================================

/// A character display with load tracking for the bar graph glyphs.
pub struct BarGraphDisplay<D> {
    display: D,
    loaded: bool,
}

impl<D: CharacterDisplay> BarGraphDisplay<D> {
    /// Wrap a driver. Glyphs start out unloaded.
    pub const fn new(display: D) -> Self {
        Self {
            display,
            loaded: false,
        }
    }

    /// Load the custom glyph set. On failure the display counts as unloaded.
    pub fn load_custom_glyphs(&mut self) -> Result<(), LoadError<D::Error>> {
        self.loaded = false;
        load_custom_glyphs(&mut self.display)?;
        self.loaded = true;
        log_info!("Bar graph glyphs loaded");
        Ok(())
    }

    /// Whether the last load succeeded.
    #[inline]
    pub const fn is_loaded(&self) -> bool { self.loaded }

    /// Forget the loaded state, e.g. after the panel was reset.
    #[inline]
    pub fn invalidate(&mut self) { self.loaded = false; }

    /// Draw a bar row across the first columns of display `row`.
    pub fn draw_bar(
        &mut self,
        row: u8,
        bar: &BarRow,
    ) -> Result<(), RenderError<D::Error>> {
        self.check_ready(row)?;
        self.display.set_cursor(0, row)?;
        self.display.write_codes(&bar.codes())?;
        Ok(())
    }

    /// Draw a legend on display `row`. Positions past the panel width are dropped.
    pub fn draw_axis(
        &mut self,
        row: u8,
        axis: &AxisLabel,
    ) -> Result<(), RenderError<D::Error>> {
        self.check_ready(row)?;
        let visible = axis.codes().len().min(DISPLAY_COLUMNS as usize);
        self.display.set_cursor(0, row)?;
        self.display.write_codes(&axis.codes()[..visible])?;
        Ok(())
    }

    /// Draw `value` on `gauge`: bar on the top row, legend beneath it.
    pub fn draw_gauge(
        &mut self,
        gauge: &Gauge,
        value: f32,
    ) -> Result<(), RenderError<D::Error>> {
        self.draw_bar(0, &gauge.bar_row(value))?;
        self.draw_axis(1, gauge.axis())
    }

    /// Borrow the wrapped driver.
    #[inline]
    pub const fn display(&self) -> &D { &self.display }

    /// Give back the wrapped driver.
    pub fn release(self) -> D { self.display }

    fn check_ready(
        &self,
        row: u8,
    ) -> Result<(), RenderError<D::Error>> {
        if !self.loaded {
            return Err(RenderError::GlyphsNotLoaded);
        }
        if row >= DISPLAY_ROWS {
            return Err(RenderError::RowOutOfRange(row));
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
