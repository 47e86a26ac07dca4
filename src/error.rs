//! Error types for glyph lookup, CGRAM loading and gauge rendering.

use core::fmt;

use crate::glyph::GlyphSlot;

/// Caller contract violations when converting raw values into glyph types.
///
/// Out-of-range values are rejected, never clamped: a clamped bar level would
/// show a wrong reading with no sign that anything went wrong.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphError {
    /// Bar level above 5.
    InvalidBarLevel(u8),
    /// Scale label other than 0, 5, 10 or 15.
    UnsupportedLabel(u8),
    /// CGRAM slot index above 7.
    InvalidSlot(u8),
    /// CGRAM row byte with bits set above the 5 pixel columns.
    InvalidRow {
        /// Row index within the glyph.
        row: u8,
        /// Offending byte.
        bits: u8,
    },
}

impl fmt::Display for GlyphError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::InvalidBarLevel(level) => write!(f, "bar level {level} out of range 0..=5"),
            Self::UnsupportedLabel(value) => write!(f, "no scale label glyph for {value}"),
            Self::InvalidSlot(slot) => write!(f, "CGRAM slot {slot} out of range 0..=7"),
            Self::InvalidRow { row, bits } => write!(f, "row {row} has bits outside the 5-pixel mask: {bits:#04x}"),
        }
    }
}

/// Failure while writing the custom glyph set into CGRAM.
///
/// A failed load leaves CGRAM in an unknown state; none of the slots should be
/// rendered until a later load succeeds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError<E> {
    /// The display driver rejected the write for `slot`.
    Device {
        /// Slot being written when the driver failed.
        slot: GlyphSlot,
        /// Driver error.
        error: E,
    },
}

impl<E: fmt::Debug> fmt::Display for LoadError<E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Device { slot, error } => write!(f, "loading CGRAM slot {} failed: {error:?}", slot.index()),
        }
    }
}

/// Failure while drawing a gauge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    /// Custom glyphs have not been loaded (or the last load failed).
    GlyphsNotLoaded,
    /// Row index outside the panel.
    RowOutOfRange(u8),
    /// The display driver failed.
    Device(E),
}

impl<E> From<E> for RenderError<E> {
    fn from(error: E) -> Self { Self::Device(error) }
}

impl<E: fmt::Debug> fmt::Display for RenderError<E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::GlyphsNotLoaded => f.write_str("custom glyphs are not loaded"),
            Self::RowOutOfRange(row) => write!(f, "display row {row} out of range"),
            Self::Device(error) => write!(f, "display write failed: {error:?}"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
