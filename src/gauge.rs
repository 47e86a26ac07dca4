//! Measured value to bar graph row.
//!
//! A row is [`BAR_COLUMNS`] cells of [`SUB_COLUMNS`] pixel columns each, 80
//! steps in all. The reading is scaled against the gauge's full scale,
//! rounded to the nearest step and drawn left to right: full blocks, at most
//! one partial cell, then blanks.
//!
//! Readings off the gauge face are pinned: NaN and negative values draw an
//! empty row, values past full scale draw a full row. This only applies to raw
//! measurements; [`BarLevel`] itself still rejects out-of-range levels.

use crate::axis::{AXIS_16_AMP, AXIS_400_WATT, AxisLabel};
use crate::config::{BAR_COLUMNS, BAR_RESOLUTION, CURRENT_FULL_SCALE_A, POWER_FULL_SCALE_W, SUB_COLUMNS};
use crate::glyph::CharCode;
use crate::table::{BarLevel, glyph_for_bar_level};

// =============================================================================
// Bar Row
// =============================================================================

/// One bar graph row, leftmost cell first.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarRow {
    cells: [BarLevel; BAR_COLUMNS],
}

impl BarRow {
    /// Row with nothing lit.
    pub const EMPTY: Self = Self {
        cells: [BarLevel::Empty; BAR_COLUMNS],
    };

    /// Row with `sub_columns` pixel columns lit from the left.
    ///
    /// Counts past [`BAR_RESOLUTION`] fill the whole row.
    pub fn from_sub_columns(sub_columns: u16) -> Self {
        let lit = sub_columns.min(BAR_RESOLUTION);
        let mut cells = [BarLevel::Empty; BAR_COLUMNS];
        for (i, cell) in cells.iter_mut().enumerate() {
            let start = i as u16 * u16::from(SUB_COLUMNS);
            let in_cell = lit.saturating_sub(start).min(u16::from(SUB_COLUMNS));
            *cell = BarLevel::from_columns_saturating(in_cell as u8);
        }
        Self { cells }
    }

    /// Cell levels, leftmost first.
    #[inline]
    pub const fn cells(&self) -> &[BarLevel; BAR_COLUMNS] { &self.cells }

    /// Total lit pixel columns.
    pub fn sub_columns(&self) -> u16 { self.cells.iter().map(|c| u16::from(c.columns())).sum() }

    /// Character codes to write for this row.
    pub fn codes(&self) -> [CharCode; BAR_COLUMNS] { self.cells.map(glyph_for_bar_level) }
}

// =============================================================================
// Gauge
// =============================================================================

/// A bar graph gauge: full-scale value plus the legend drawn under it.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gauge {
    full_scale: f32,
    axis: &'static AxisLabel,
}

impl Gauge {
    /// 0-16 A current gauge, 1 A per cell.
    pub const CURRENT_16A: Self = Self {
        full_scale: CURRENT_FULL_SCALE_A,
        axis: &AXIS_16_AMP,
    };

    /// 0-400 W power gauge, 25 W per cell.
    pub const POWER_400W: Self = Self {
        full_scale: POWER_FULL_SCALE_W,
        axis: &AXIS_400_WATT,
    };

    /// Value represented by a full row.
    #[inline]
    pub const fn full_scale(&self) -> f32 { self.full_scale }

    /// Legend row for this gauge.
    #[inline]
    pub const fn axis(&self) -> &'static AxisLabel { self.axis }

    /// Lit pixel columns for `value`, rounded to the nearest step.
    pub fn sub_columns(
        &self,
        value: f32,
    ) -> u16 {
        if value.is_nan() || value <= 0.0 {
            return 0;
        }
        if value >= self.full_scale {
            return BAR_RESOLUTION;
        }
        // Split off the fraction instead of adding 0.5, which rounds
        // values just under a half step up in f32
        let steps = value / self.full_scale * f32::from(BAR_RESOLUTION);
        let whole = micromath::F32(steps).floor().0;
        let rounded = if steps - whole >= 0.5 { whole as u16 + 1 } else { whole as u16 };
        rounded.min(BAR_RESOLUTION)
    }

    /// Bar row for `value`.
    pub fn bar_row(
        &self,
        value: f32,
    ) -> BarRow {
        BarRow::from_sub_columns(self.sub_columns(value))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{BLANK_CHAR, FULL_BLOCK_CHAR};

    #[test]
    fn test_from_sub_columns_partial_cell() {
        let row = BarRow::from_sub_columns(12);
        assert_eq!(row.cells()[0], BarLevel::Full);
        assert_eq!(row.cells()[1], BarLevel::Full);
        assert_eq!(row.cells()[2], BarLevel::Two);
        assert!(row.cells()[3..].iter().all(|c| *c == BarLevel::Empty));
        assert_eq!(row.sub_columns(), 12);
    }

    #[test]
    fn test_from_sub_columns_bounds() {
        assert_eq!(BarRow::from_sub_columns(0), BarRow::EMPTY);
        assert!(BarRow::from_sub_columns(80).cells().iter().all(|c| *c == BarLevel::Full));
        assert_eq!(BarRow::from_sub_columns(500), BarRow::from_sub_columns(80));
    }

    #[test]
    fn test_row_codes() {
        let codes = BarRow::from_sub_columns(7).codes();
        assert_eq!(codes[0], FULL_BLOCK_CHAR);
        assert_eq!(codes[1].value(), 2);
        assert!(codes[2..].iter().all(|c| *c == BLANK_CHAR));
    }

    #[test]
    fn test_current_gauge_scale() {
        let gauge = Gauge::CURRENT_16A;
        // 1 A per cell, 0.2 A per step
        assert_eq!(gauge.sub_columns(1.0), 5);
        assert_eq!(gauge.sub_columns(5.0), 25);
        assert_eq!(gauge.sub_columns(5.25), 26);
        assert_eq!(gauge.sub_columns(16.0), 80);

        let row = gauge.bar_row(5.0);
        // The "5" marker at axis position 4 sits under the last full cell
        assert_eq!(row.cells()[4], BarLevel::Full);
        assert_eq!(row.cells()[5], BarLevel::Empty);
        assert_eq!(gauge.axis().get(4), gauge.axis().markers().next().map(|(_, c)| c));
    }

    #[test]
    fn test_power_gauge_scale() {
        let gauge = Gauge::POWER_400W;
        assert_eq!(gauge.sub_columns(100.0), 20);
        assert_eq!(gauge.sub_columns(25.0), 5);
        assert_eq!(gauge.sub_columns(12.5), 3, "2.5 steps rounds half away from zero");

        let row = gauge.bar_row(100.0);
        assert_eq!(row.cells()[3], BarLevel::Full);
        assert_eq!(row.cells()[4], BarLevel::Empty);
        assert_eq!(gauge.axis().unit().value(), b'W');
    }

    #[test]
    fn test_just_below_half_step_rounds_down() {
        let gauge = Gauge::CURRENT_16A;
        // 0.099999994 A is 0.49999997 steps
        assert_eq!(gauge.sub_columns(0.099_999_994), 0);
        assert_eq!(gauge.sub_columns(0.1), 1);
        assert_eq!(gauge.sub_columns(0.299_999_98), 1);
        assert_eq!(gauge.sub_columns(0.3), 2);
    }

    #[test]
    fn test_off_scale_readings_are_pinned() {
        let gauge = Gauge::CURRENT_16A;
        assert_eq!(gauge.bar_row(-3.0), BarRow::EMPTY);
        assert_eq!(gauge.bar_row(f32::NAN), BarRow::EMPTY);
        assert_eq!(gauge.sub_columns(40.0), 80);
        assert_eq!(gauge.sub_columns(f32::INFINITY), 80);
    }
}
