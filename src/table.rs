//! The custom glyph set for bar-graph gauges and its lookups.
//!
//! Eight CGRAM slots are used:
//!
//! | Slot | Glyph |
//! |------|-------|
//! | 0 | condensed "0" |
//! | 1-4 | partial bar, 1-4 columns lit from the left |
//! | 5 | condensed "5" |
//! | 6 | condensed "10" |
//! | 7 | condensed "15" |
//!
//! Empty and full bar cells use the ROM characters [`BLANK_CHAR`] and
//! [`FULL_BLOCK_CHAR`], so they need no slot.
//!
//! # Precondition
//!
//! The codes returned for bar levels 1-4 and for scale labels only show the
//! right pixels after [`load_custom_glyphs`](crate::display::load_custom_glyphs)
//! has written this table to the panel. Before that the slots hold whatever
//! the controller powered up with.

use crate::config::{
    GLYPH_DRAWN_ROWS,
    GLYPH_HEIGHT,
    SLOT_BAR_1,
    SLOT_BAR_2,
    SLOT_BAR_3,
    SLOT_BAR_4,
    SLOT_NUM_0,
    SLOT_NUM_5,
    SLOT_NUM_10,
    SLOT_NUM_15,
    SUB_COLUMNS,
};
use crate::error::GlyphError;
use crate::glyph::{BLANK_CHAR, CharCode, FULL_BLOCK_CHAR, Glyph, GlyphRow, GlyphSlot};

// =============================================================================
// Bar Level
// =============================================================================

/// Lit sub-columns in one bar graph cell.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BarLevel {
    /// Nothing lit (ROM blank).
    #[default]
    Empty = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    /// All five columns lit (ROM full block).
    Full = 5,
}

impl BarLevel {
    /// All levels, empty to full.
    pub const ALL: [Self; 6] = [Self::Empty, Self::One, Self::Two, Self::Three, Self::Four, Self::Full];

    /// Number of lit columns.
    #[inline]
    pub const fn columns(self) -> u8 { self as u8 }

    /// Level for a column count that is already known to be in range.
    pub(crate) const fn from_columns_saturating(columns: u8) -> Self {
        match columns {
            0 => Self::Empty,
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            _ => Self::Full,
        }
    }

    /// Whether this level needs a custom glyph (levels 1-4).
    #[inline]
    pub const fn is_partial(self) -> bool { !matches!(self, Self::Empty | Self::Full) }
}

impl TryFrom<u8> for BarLevel {
    type Error = GlyphError;

    fn try_from(columns: u8) -> Result<Self, Self::Error> {
        if columns > SUB_COLUMNS {
            Err(GlyphError::InvalidBarLevel(columns))
        } else {
            Ok(Self::from_columns_saturating(columns))
        }
    }
}

// =============================================================================
// Scale Label
// =============================================================================

/// Scale marks that have a condensed numeral glyph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaleLabel {
    Zero,
    Five,
    Ten,
    Fifteen,
}

impl ScaleLabel {
    /// All labels in ascending order.
    pub const ALL: [Self; 4] = [Self::Zero, Self::Five, Self::Ten, Self::Fifteen];

    /// Numeric value of the mark.
    pub const fn value(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
        }
    }
}

impl TryFrom<u8> for ScaleLabel {
    type Error = GlyphError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            15 => Ok(Self::Fifteen),
            other => Err(GlyphError::UnsupportedLabel(other)),
        }
    }
}

// =============================================================================
// Glyph Bitmaps
// =============================================================================

/// Partial bar with `columns` lit from the left in the drawn rows.
///
/// `columns` above 5 saturates to a full-width bar.
pub const fn bar_glyph(columns: u8) -> Glyph {
    let row = GlyphRow::left_filled(columns).bits();
    let mut bits = [0u8; GLYPH_HEIGHT];
    let mut i = 0;
    while i < GLYPH_DRAWN_ROWS {
        bits[i] = row;
        i += 1;
    }
    Glyph::from_bits(bits)
}

/// Condensed "0".
pub const NUM_0_GLYPH: Glyph = Glyph::from_bits([
    0b00100, //
    0b01010, //
    0b01010, //
    0b01010, //
    0b01010, //
    0b00100, //
    0b00000, //
    0b00000,
]);

/// Condensed "5".
pub const NUM_5_GLYPH: Glyph = Glyph::from_bits([
    0b01110, //
    0b01000, //
    0b01100, //
    0b00010, //
    0b01010, //
    0b00100, //
    0b00000, //
    0b00000,
]);

/// Condensed "10" (narrow 1 in column 0, narrow 0 in columns 2-4).
pub const NUM_10_GLYPH: Glyph = Glyph::from_bits([
    0b10010, //
    0b10101, //
    0b10101, //
    0b10101, //
    0b10101, //
    0b10010, //
    0b00000, //
    0b00000,
]);

/// Condensed "15" (narrow 1 in column 0, narrow 5 in columns 2-4).
pub const NUM_15_GLYPH: Glyph = Glyph::from_bits([
    0b10111, //
    0b10100, //
    0b10110, //
    0b10001, //
    0b10101, //
    0b10010, //
    0b00000, //
    0b00000,
]);

/// Partial bars for levels 1-4, indexed by `level - 1`.
pub const BAR_GLYPHS: [Glyph; 4] = [bar_glyph(1), bar_glyph(2), bar_glyph(3), bar_glyph(4)];

/// Numeral glyphs in [`ScaleLabel::ALL`] order.
pub const NUMERAL_GLYPHS: [Glyph; 4] = [NUM_0_GLYPH, NUM_5_GLYPH, NUM_10_GLYPH, NUM_15_GLYPH];

/// Every custom glyph with the slot it is loaded into, in slot order.
pub static CUSTOM_GLYPHS: [(GlyphSlot, Glyph); 8] = [
    (GlyphSlot::fixed(SLOT_NUM_0), NUM_0_GLYPH),
    (GlyphSlot::fixed(SLOT_BAR_1), BAR_GLYPHS[0]),
    (GlyphSlot::fixed(SLOT_BAR_2), BAR_GLYPHS[1]),
    (GlyphSlot::fixed(SLOT_BAR_3), BAR_GLYPHS[2]),
    (GlyphSlot::fixed(SLOT_BAR_4), BAR_GLYPHS[3]),
    (GlyphSlot::fixed(SLOT_NUM_5), NUM_5_GLYPH),
    (GlyphSlot::fixed(SLOT_NUM_10), NUM_10_GLYPH),
    (GlyphSlot::fixed(SLOT_NUM_15), NUM_15_GLYPH),
];

// =============================================================================
// Lookups
// =============================================================================

/// Character code that draws one bar graph cell at `level`.
///
/// Levels 0 and 5 are ROM characters and always valid. Levels 1-4 are CGRAM
/// slots and need the glyphs loaded first.
pub const fn glyph_for_bar_level(level: BarLevel) -> CharCode {
    match level {
        BarLevel::Empty => BLANK_CHAR,
        BarLevel::One => GlyphSlot::fixed(SLOT_BAR_1).code(),
        BarLevel::Two => GlyphSlot::fixed(SLOT_BAR_2).code(),
        BarLevel::Three => GlyphSlot::fixed(SLOT_BAR_3).code(),
        BarLevel::Four => GlyphSlot::fixed(SLOT_BAR_4).code(),
        BarLevel::Full => FULL_BLOCK_CHAR,
    }
}

/// Slot holding the condensed numeral for `label`.
pub const fn glyph_for_label(label: ScaleLabel) -> GlyphSlot {
    match label {
        ScaleLabel::Zero => GlyphSlot::fixed(SLOT_NUM_0),
        ScaleLabel::Five => GlyphSlot::fixed(SLOT_NUM_5),
        ScaleLabel::Ten => GlyphSlot::fixed(SLOT_NUM_10),
        ScaleLabel::Fifteen => GlyphSlot::fixed(SLOT_NUM_15),
    }
}

/// [`glyph_for_bar_level`] for a raw column count. Rejects counts above 5.
pub fn bar_level_code(columns: u8) -> Result<CharCode, GlyphError> {
    BarLevel::try_from(columns).map(glyph_for_bar_level)
}

/// [`glyph_for_label`] for a raw scale value. Rejects anything but 0, 5, 10, 15.
pub fn label_slot(value: u8) -> Result<GlyphSlot, GlyphError> {
    ScaleLabel::try_from(value).map(glyph_for_label)
}

/// The glyph loaded into `slot`.
pub fn glyph_in_slot(slot: GlyphSlot) -> Glyph {
    // CUSTOM_GLYPHS is in slot order and covers every slot
    CUSTOM_GLYPHS[slot.index() as usize].1
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CGRAM_SLOTS, GLYPH_WIDTH};

    #[test]
    fn test_bar_levels_have_leftmost_columns_lit() {
        for columns in 1..=4u8 {
            let code = bar_level_code(columns).unwrap();
            let slot = code.slot().expect("partial bar must be a custom glyph");
            let glyph = glyph_in_slot(slot);

            for row in 0..GLYPH_DRAWN_ROWS {
                assert_eq!(glyph.lit_columns(row), u32::from(columns), "level {columns} row {row}");
                for col in 0..GLYPH_WIDTH {
                    assert_eq!(glyph.is_lit(col, row), col < columns as usize);
                }
            }
            for row in GLYPH_DRAWN_ROWS..GLYPH_HEIGHT {
                assert_eq!(glyph.lit_columns(row), 0, "level {columns} row {row} should be blank");
            }
        }
    }

    #[test]
    fn test_bar_level_builtin_codes() {
        assert_eq!(glyph_for_bar_level(BarLevel::Empty).value(), 254);
        assert_eq!(glyph_for_bar_level(BarLevel::Full).value(), 255);
        assert_eq!(glyph_for_bar_level(BarLevel::Empty), BLANK_CHAR);
        assert_eq!(glyph_for_bar_level(BarLevel::Full), FULL_BLOCK_CHAR);
    }

    #[test]
    fn test_bar_level_rejects_out_of_range() {
        assert_eq!(bar_level_code(6), Err(GlyphError::InvalidBarLevel(6)));
        assert_eq!(BarLevel::try_from(255), Err(GlyphError::InvalidBarLevel(255)));
        assert_eq!(BarLevel::try_from(5), Ok(BarLevel::Full));
    }

    #[test]
    fn test_partial_levels_map_to_distinct_glyphs() {
        let partial: Vec<_> = BarLevel::ALL.iter().copied().filter(|l| l.is_partial()).collect();
        assert_eq!(partial.len(), 4);
        for (i, a) in partial.iter().enumerate() {
            for b in &partial[i + 1..] {
                assert_ne!(glyph_for_bar_level(*a), glyph_for_bar_level(*b));
            }
        }
    }

    #[test]
    fn test_bar_table_matches_generator() {
        for (i, glyph) in BAR_GLYPHS.iter().enumerate() {
            let level = i as u32 + 1;
            let expected = (0b11111u32 << (5 - level)) & 0b11111;
            for row in 0..GLYPH_DRAWN_ROWS {
                assert_eq!(u32::from(glyph.rows()[row].bits()), expected);
            }
        }
    }

    #[test]
    fn test_label_glyphs_match_literal_rows() {
        let expected: [(u8, [u8; 8]); 4] = [
            (0, [0b00100, 0b01010, 0b01010, 0b01010, 0b01010, 0b00100, 0, 0]),
            (5, [0b01110, 0b01000, 0b01100, 0b00010, 0b01010, 0b00100, 0, 0]),
            (10, [0b10010, 0b10101, 0b10101, 0b10101, 0b10101, 0b10010, 0, 0]),
            (15, [0b10111, 0b10100, 0b10110, 0b10001, 0b10101, 0b10010, 0, 0]),
        ];
        for (value, rows) in expected {
            let slot = label_slot(value).unwrap();
            let glyph = glyph_in_slot(slot);
            assert_eq!(glyph.to_cgram(), rows, "label {value}");
            assert_eq!(Glyph::from_cgram(&glyph.to_cgram()), Ok(glyph));
        }
    }

    #[test]
    fn test_label_rejects_unsupported_value() {
        assert_eq!(label_slot(20), Err(GlyphError::UnsupportedLabel(20)));
        assert_eq!(label_slot(1), Err(GlyphError::UnsupportedLabel(1)));
    }

    #[test]
    fn test_label_slots() {
        assert_eq!(glyph_for_label(ScaleLabel::Zero).index(), 0);
        assert_eq!(glyph_for_label(ScaleLabel::Five).index(), 5);
        assert_eq!(glyph_for_label(ScaleLabel::Ten).index(), 6);
        assert_eq!(glyph_for_label(ScaleLabel::Fifteen).index(), 7);
        for label in ScaleLabel::ALL {
            assert_eq!(ScaleLabel::try_from(label.value()), Ok(label));
        }
    }

    #[test]
    fn test_custom_glyph_table_in_slot_order() {
        assert_eq!(CUSTOM_GLYPHS.len(), CGRAM_SLOTS);
        for (i, (slot, glyph)) in CUSTOM_GLYPHS.iter().enumerate() {
            assert_eq!(slot.index() as usize, i);
            for row in GLYPH_DRAWN_ROWS..GLYPH_HEIGHT {
                assert_eq!(glyph.lit_columns(row), 0, "slot {i} row {row} must stay blank");
            }
        }
    }

    #[test]
    fn test_numeral_table_order() {
        for (label, glyph) in ScaleLabel::ALL.iter().zip(NUMERAL_GLYPHS.iter()) {
            assert_eq!(glyph_in_slot(glyph_for_label(*label)), *glyph);
        }
    }
}
