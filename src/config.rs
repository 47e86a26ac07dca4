//! Panel geometry, gauge scales and CGRAM slot assignments.
//!
//! Everything here is a compile-time constant. Each group carries `const`
//! assertions so a bad edit (a slot past CGRAM, a scale that does not match
//! the axis pitch) fails the build instead of garbling the gauge.

// =============================================================================
// Panel Geometry (HD44780 16x2 with 5x8 font)
// =============================================================================

/// Visible character columns on the panel.
pub const DISPLAY_COLUMNS: u8 = 16;

/// Visible character rows on the panel.
pub const DISPLAY_ROWS: u8 = 2;

/// Pixel columns per character cell.
pub const GLYPH_WIDTH: usize = 5;

/// Pixel rows per character cell (and CGRAM bytes per glyph).
pub const GLYPH_HEIGHT: usize = 8;

/// Rows of a custom glyph that carry pixels. The remaining rows stay blank
/// to keep the cursor line and the gap to the next text row clear.
pub const GLYPH_DRAWN_ROWS: usize = 6;

/// Number of programmable characters in CGRAM (5x8 mode).
pub const CGRAM_SLOTS: usize = 8;

/// Mask of the pixel bits in a CGRAM row byte.
pub const ROW_MASK: u8 = (1 << GLYPH_WIDTH) - 1;

const _: () = assert!(GLYPH_DRAWN_ROWS <= GLYPH_HEIGHT);
const _: () = assert!(GLYPH_WIDTH < 8);

// =============================================================================
// Built-in Character Codes (HD44780 A00 ROM)
// =============================================================================

/// ROM code that renders as an empty cell.
pub const BLANK_CODE: u8 = 254;

/// ROM code that renders as a fully lit 5x8 block.
pub const FULL_BLOCK_CODE: u8 = 255;

// =============================================================================
// Bar Graph Geometry
// =============================================================================

/// Character cells used by one bar graph row.
pub const BAR_COLUMNS: usize = 16;

/// Vertical sub-columns per character cell (one per pixel column).
pub const SUB_COLUMNS: u8 = GLYPH_WIDTH as u8;

/// Total resolution of one bar graph row.
pub const BAR_RESOLUTION: u16 = BAR_COLUMNS as u16 * SUB_COLUMNS as u16;

/// Length of an axis label row: 16 positions under the bar cells plus one
/// off-panel position. Position 0 (under the first cell) holds the unit symbol.
pub const AXIS_LENGTH: usize = BAR_COLUMNS + 1;

const _: () = assert!(BAR_COLUMNS <= DISPLAY_COLUMNS as usize);
const _: () = assert!(BAR_RESOLUTION == 80);

// =============================================================================
// Gauge Full Scales
// =============================================================================

/// Full scale of the current gauge in amps (1 A per cell).
pub const CURRENT_FULL_SCALE_A: f32 = 16.0;

/// Full scale of the power gauge in watts (25 W per cell).
pub const POWER_FULL_SCALE_W: f32 = 400.0;

const _: () = assert!(CURRENT_FULL_SCALE_A > 0.0);
const _: () = assert!(POWER_FULL_SCALE_W > 0.0);

// =============================================================================
// CGRAM Slot Assignments
// =============================================================================

/// Slot of the condensed numeral "0".
pub const SLOT_NUM_0: u8 = 0;

/// Slots of the partial bars with 1 through 4 lit columns.
pub const SLOT_BAR_1: u8 = 1;
pub const SLOT_BAR_2: u8 = 2;
pub const SLOT_BAR_3: u8 = 3;
pub const SLOT_BAR_4: u8 = 4;

/// Slot of the condensed numeral "5".
pub const SLOT_NUM_5: u8 = 5;

/// Slot of the condensed numeral "10".
pub const SLOT_NUM_10: u8 = 6;

/// Slot of the condensed numeral "15".
pub const SLOT_NUM_15: u8 = 7;

// Bar slots mirror their level so a level 1-4 is its own character code.
const _: () = assert!(SLOT_BAR_1 == 1 && SLOT_BAR_2 == 2 && SLOT_BAR_3 == 3 && SLOT_BAR_4 == 4);
const _: () = assert!((SLOT_NUM_15 as usize) < CGRAM_SLOTS);
const _: () = assert!(SLOT_NUM_0 != SLOT_NUM_5 && SLOT_NUM_5 != SLOT_NUM_10 && SLOT_NUM_10 != SLOT_NUM_15);

// =============================================================================
// Unit Tests
// =============================================================================
