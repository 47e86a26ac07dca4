//! CGRAM glyph encoding.
//!
//! A custom character on an HD44780 panel is eight row bytes, one per pixel
//! row, top to bottom. Only the low five bits of each byte are pixels and the
//! leftmost pixel is bit 4, so `0b10000` lights the left edge of the cell.
//!
//! - [`GlyphRow`]: one validated 5-pixel row
//! - [`Glyph`]: a full 5x8 cell
//! - [`GlyphSlot`]: a CGRAM index (0-7)
//! - [`CharCode`]: the byte written to DDRAM to show a character

use crate::config::{BLANK_CODE, CGRAM_SLOTS, FULL_BLOCK_CODE, GLYPH_HEIGHT, GLYPH_WIDTH, ROW_MASK};
use crate::error::GlyphError;

// =============================================================================
// Glyph Row
// =============================================================================

/// One pixel row of a glyph. Bits above bit 4 are never set.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphRow(u8);

impl GlyphRow {
    /// Row with no pixels lit.
    pub const EMPTY: Self = Self(0);

    /// Row with all five pixels lit.
    pub const FULL: Self = Self(ROW_MASK);

    /// Build a row from a bit literal, leftmost pixel first (`0b10000` = left edge).
    ///
    /// Only for the crate's `const` tables, where a bad literal fails the build.
    /// Runtime input goes through [`GlyphRow::try_from`].
    pub(crate) const fn new(bits: u8) -> Self {
        assert!(bits & !ROW_MASK == 0, "glyph row uses more than 5 pixel columns");
        Self(bits)
    }

    /// Row with the `count` leftmost pixels lit. `count` above 5 saturates.
    pub const fn left_filled(count: u8) -> Self {
        if count as usize >= GLYPH_WIDTH {
            Self::FULL
        } else {
            Self((ROW_MASK << (GLYPH_WIDTH as u8 - count)) & ROW_MASK)
        }
    }

    /// Raw CGRAM byte.
    #[inline]
    pub const fn bits(self) -> u8 { self.0 }

    /// Whether pixel column `col` (0 = leftmost) is lit.
    #[inline]
    pub const fn is_lit(
        self,
        col: usize,
    ) -> bool {
        col < GLYPH_WIDTH && self.0 & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    }

    /// Number of lit pixels.
    #[inline]
    pub const fn lit_count(self) -> u32 { self.0.count_ones() }
}

impl TryFrom<u8> for GlyphRow {
    type Error = u8;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        if bits & !ROW_MASK == 0 { Ok(Self(bits)) } else { Err(bits) }
    }
}

// =============================================================================
// Glyph
// =============================================================================

/// A 5x8 custom character.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    rows: [GlyphRow; GLYPH_HEIGHT],
}

impl Glyph {
    /// Glyph with no pixels lit.
    pub const BLANK: Self = Self {
        rows: [GlyphRow::EMPTY; GLYPH_HEIGHT],
    };

    /// Build a glyph from eight bit literals, top row first.
    ///
    /// Only for the crate's `const` tables. Runtime input goes through
    /// [`Glyph::from_cgram`].
    pub(crate) const fn from_bits(bits: [u8; GLYPH_HEIGHT]) -> Self {
        let mut rows = [GlyphRow::EMPTY; GLYPH_HEIGHT];
        let mut i = 0;
        while i < GLYPH_HEIGHT {
            rows[i] = GlyphRow::new(bits[i]);
            i += 1;
        }
        Self { rows }
    }

    /// Decode eight CGRAM bytes, rejecting any row with bits above the pixel mask.
    pub fn from_cgram(bytes: &[u8; GLYPH_HEIGHT]) -> Result<Self, GlyphError> {
        let mut rows = [GlyphRow::EMPTY; GLYPH_HEIGHT];
        for (i, (row, &bits)) in rows.iter_mut().zip(bytes).enumerate() {
            *row = GlyphRow::try_from(bits).map_err(|bits| GlyphError::InvalidRow { row: i as u8, bits })?;
        }
        Ok(Self { rows })
    }

    /// Encode as the eight bytes written to CGRAM.
    pub const fn to_cgram(&self) -> [u8; GLYPH_HEIGHT] {
        let mut bytes = [0u8; GLYPH_HEIGHT];
        let mut i = 0;
        while i < GLYPH_HEIGHT {
            bytes[i] = self.rows[i].bits();
            i += 1;
        }
        bytes
    }

    /// All rows, top first.
    #[inline]
    pub const fn rows(&self) -> &[GlyphRow; GLYPH_HEIGHT] { &self.rows }

    /// Row `row`, or `None` past the bottom of the cell.
    #[inline]
    pub fn row(
        &self,
        row: usize,
    ) -> Option<GlyphRow> {
        self.rows.get(row).copied()
    }

    /// Number of lit pixels in `row` (0 past the bottom of the cell).
    pub fn lit_columns(
        &self,
        row: usize,
    ) -> u32 {
        self.row(row).map_or(0, GlyphRow::lit_count)
    }

    /// Whether pixel (`col`, `row`) is lit.
    pub fn is_lit(
        &self,
        col: usize,
        row: usize,
    ) -> bool {
        self.row(row).is_some_and(|r| r.is_lit(col))
    }
}

// =============================================================================
// Glyph Slot / Character Code
// =============================================================================

/// CGRAM index of a programmable character (0-7).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphSlot(u8);

impl GlyphSlot {
    /// Validate a slot index.
    pub const fn new(index: u8) -> Result<Self, GlyphError> {
        if (index as usize) < CGRAM_SLOTS {
            Ok(Self(index))
        } else {
            Err(GlyphError::InvalidSlot(index))
        }
    }

    /// Slot index for `const` tables. Panics past the last slot.
    pub(crate) const fn fixed(index: u8) -> Self {
        assert!((index as usize) < CGRAM_SLOTS, "CGRAM slot out of range");
        Self(index)
    }

    /// Raw slot index.
    #[inline]
    pub const fn index(self) -> u8 { self.0 }

    /// Character code that shows this slot's glyph.
    #[inline]
    pub const fn code(self) -> CharCode { CharCode(self.0) }

    /// All CGRAM slots in order.
    pub fn all() -> impl Iterator<Item = Self> { (0..CGRAM_SLOTS as u8).map(GlyphSlot) }
}

/// Byte written to display RAM to show one character cell.
///
/// Codes 0-7 show CGRAM glyphs, printable ASCII shows ROM text, and
/// [`BLANK_CHAR`] / [`FULL_BLOCK_CHAR`] are the ROM cells used for empty and
/// full bar columns.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharCode(u8);

/// Built-in empty cell (bar level 0).
pub const BLANK_CHAR: CharCode = CharCode(BLANK_CODE);

/// Built-in full block (bar level 5).
pub const FULL_BLOCK_CHAR: CharCode = CharCode(FULL_BLOCK_CODE);

/// ASCII space, used for unmarked axis positions.
pub const SPACE_CHAR: CharCode = CharCode::ascii(' ');

impl CharCode {
    /// Code for an ASCII character in a `const` table.
    pub(crate) const fn ascii(c: char) -> Self {
        assert!(c.is_ascii(), "character code must be ASCII");
        Self(c as u8)
    }

    /// Code for an ASCII character, or `None` for anything outside ASCII.
    pub const fn try_ascii(c: char) -> Option<Self> {
        if c.is_ascii() { Some(Self(c as u8)) } else { None }
    }

    /// Raw code byte.
    #[inline]
    pub const fn value(self) -> u8 { self.0 }

    /// The CGRAM slot this code shows, if it is a custom glyph.
    pub const fn slot(self) -> Option<GlyphSlot> {
        if (self.0 as usize) < CGRAM_SLOTS { Some(GlyphSlot(self.0)) } else { None }
    }
}

impl From<GlyphSlot> for CharCode {
    fn from(slot: GlyphSlot) -> Self { slot.code() }
}

impl From<CharCode> for u8 {
    fn from(code: CharCode) -> Self { code.0 }
}

// =============================================================================
// Unit Tests
// =============================================================================
