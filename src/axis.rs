//! Axis legends drawn beneath the bar graph row.
//!
//! An axis is [`AXIS_LENGTH`] codes. Position 0 holds the unit symbol; position
//! `k` marks the value reached when bar cell `k` fills completely, so markers
//! sit directly under the cell they label.

use crate::config::AXIS_LENGTH;
use crate::glyph::{CharCode, SPACE_CHAR};
use crate::table::{ScaleLabel, glyph_for_label};

const fn num(label: ScaleLabel) -> CharCode { glyph_for_label(label).code() }

const fn ch(c: char) -> CharCode { CharCode::ascii(c) }

const SP: CharCode = SPACE_CHAR;

/// Static legend row for one gauge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisLabel {
    codes: [CharCode; AXIS_LENGTH],
}

impl AxisLabel {
    /// Wrap a legend row.
    pub const fn new(codes: [CharCode; AXIS_LENGTH]) -> Self { Self { codes } }

    /// All codes, unit symbol first.
    #[inline]
    pub const fn codes(&self) -> &[CharCode; AXIS_LENGTH] { &self.codes }

    /// The unit symbol at position 0.
    #[inline]
    pub const fn unit(&self) -> CharCode { self.codes[0] }

    /// Code at `index`, or `None` past the end.
    #[inline]
    pub fn get(
        &self,
        index: usize,
    ) -> Option<CharCode> {
        self.codes.get(index).copied()
    }

    /// Scale markers after the unit symbol as `(position, code)`.
    pub fn markers(&self) -> impl Iterator<Item = (usize, CharCode)> + '_ {
        self.codes
            .iter()
            .copied()
            .enumerate()
            .skip(1)
            .filter(|&(_, code)| code != SPACE_CHAR)
    }
}

/// Legend for the 16 A current gauge: amps with condensed 5, 10 and 15.
pub static AXIS_16_AMP: AxisLabel = AxisLabel::new([
    ch('A'),
    SP,
    SP,
    SP,
    num(ScaleLabel::Five),
    SP,
    SP,
    SP,
    SP,
    num(ScaleLabel::Ten),
    SP,
    SP,
    SP,
    SP,
    num(ScaleLabel::Fifteen),
    SP,
    SP,
]);

/// Legend for the 400 W power gauge: watts with hundreds marked 1 to 4.
pub static AXIS_400_WATT: AxisLabel = AxisLabel::new([
    ch('W'),
    SP,
    SP,
    ch('1'),
    SP,
    SP,
    SP,
    ch('2'),
    SP,
    SP,
    SP,
    ch('3'),
    SP,
    SP,
    SP,
    ch('4'),
    SP,
]);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphSlot;

    #[test]
    fn test_axis_16_amp_layout() {
        assert_eq!(AXIS_16_AMP.codes().len(), 17);
        assert_eq!(AXIS_16_AMP.unit(), CharCode::ascii('A'));

        let markers: Vec<_> = AXIS_16_AMP.markers().collect();
        assert_eq!(
            markers,
            [
                (4, glyph_for_label(ScaleLabel::Five).code()),
                (9, glyph_for_label(ScaleLabel::Ten).code()),
                (14, glyph_for_label(ScaleLabel::Fifteen).code()),
            ]
        );
        assert_eq!(AXIS_16_AMP.get(9).and_then(CharCode::slot), GlyphSlot::new(6).ok());
    }

    #[test]
    fn test_axis_400_watt_layout() {
        assert_eq!(AXIS_400_WATT.codes().len(), 17);
        assert_eq!(AXIS_400_WATT.unit(), CharCode::ascii('W'));

        let markers: Vec<_> = AXIS_400_WATT.markers().collect();
        assert_eq!(
            markers,
            [
                (3, CharCode::ascii('1')),
                (7, CharCode::ascii('2')),
                (11, CharCode::ascii('3')),
                (15, CharCode::ascii('4')),
            ]
        );
    }

    #[test]
    fn test_unmarked_positions_are_spaces() {
        for axis in [&AXIS_16_AMP, &AXIS_400_WATT] {
            let marked: Vec<usize> = axis.markers().map(|(i, _)| i).collect();
            for (i, code) in axis.codes().iter().enumerate().skip(1) {
                if !marked.contains(&i) {
                    assert_eq!(*code, SPACE_CHAR, "position {i}");
                }
            }
            assert_eq!(axis.get(17), None);
        }
    }

    #[test]
    fn test_markers_evenly_spaced() {
        for axis in [&AXIS_16_AMP, &AXIS_400_WATT] {
            let positions: Vec<usize> = axis.markers().map(|(i, _)| i).collect();
            let pitch = positions[1] - positions[0];
            assert!(positions.windows(2).all(|w| w[1] - w[0] == pitch));
        }
    }
}
