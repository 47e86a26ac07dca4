//! Pixel previews of glyphs and character rows on an `embedded-graphics` target.
//!
//! Useful for a desktop simulator of the gauge or for checking bitmaps in
//! tests. Each glyph pixel is drawn as a `scale x scale` square, lit pixels in
//! the `on` color and unlit ones in `off`. Cells in a row are separated by one
//! untouched pixel column, like the gap on a real panel.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::config::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::glyph::{BLANK_CHAR, CharCode, FULL_BLOCK_CHAR, Glyph};
use crate::table::glyph_in_slot;

/// Pixels between the left edges of neighbouring cells (at scale 1).
pub const CELL_PITCH: u32 = GLYPH_WIDTH as u32 + 1;

/// ROM full block: every pixel of the cell lit.
const FULL_BLOCK_GLYPH: Glyph = Glyph::from_bits([0b11111; GLYPH_HEIGHT]);

/// Bitmap shown for `code`, if this crate knows it.
///
/// CGRAM slots resolve to the custom glyph table; the ROM blank and full
/// block are built in. ROM text characters have no bitmap here.
pub fn cell_glyph(code: CharCode) -> Option<Glyph> {
    if let Some(slot) = code.slot() {
        Some(glyph_in_slot(slot))
    } else if code == BLANK_CHAR {
        Some(Glyph::BLANK)
    } else if code == FULL_BLOCK_CHAR {
        Some(FULL_BLOCK_GLYPH)
    } else {
        None
    }
}

// =============================================================================
// Glyph Preview
// =============================================================================

/// Draws one glyph.
#[derive(Clone, Copy, Debug)]
pub struct GlyphPreview<C> {
    pub glyph: Glyph,
    pub top_left: Point,
    pub scale: u32,
    pub on: C,
    pub off: C,
}

impl<C: PixelColor> GlyphPreview<C> {
    /// Preview at scale 1.
    pub const fn new(
        glyph: Glyph,
        top_left: Point,
        on: C,
        off: C,
    ) -> Self {
        Self {
            glyph,
            top_left,
            scale: 1,
            on,
            off,
        }
    }

    /// Change the pixel scale. Zero is treated as 1.
    pub const fn with_scale(
        mut self,
        scale: u32,
    ) -> Self {
        self.scale = if scale == 0 { 1 } else { scale };
        self
    }
}

impl<C: PixelColor> Drawable for GlyphPreview<C> {
    type Color = C;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let pixel = Size::new_equal(self.scale);
        for (y, row) in self.glyph.rows().iter().enumerate() {
            for x in 0..GLYPH_WIDTH {
                let color = if row.is_lit(x) { self.on } else { self.off };
                let origin = self.top_left + Point::new((x as u32 * self.scale) as i32, (y as u32 * self.scale) as i32);
                Rectangle::new(origin, pixel)
                    .into_styled(PrimitiveStyle::with_fill(color))
                    .draw(target)?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Row Preview
// =============================================================================

/// Draws a run of character cells left to right.
///
/// Cells without a known bitmap (ROM text) are drawn unlit.
#[derive(Clone, Copy, Debug)]
pub struct RowPreview<'a, C> {
    pub codes: &'a [CharCode],
    pub top_left: Point,
    pub scale: u32,
    pub on: C,
    pub off: C,
}

impl<'a, C: PixelColor> RowPreview<'a, C> {
    /// Preview at scale 1.
    pub const fn new(
        codes: &'a [CharCode],
        top_left: Point,
        on: C,
        off: C,
    ) -> Self {
        Self {
            codes,
            top_left,
            scale: 1,
            on,
            off,
        }
    }

    /// Change the pixel scale. Zero is treated as 1.
    pub const fn with_scale(
        mut self,
        scale: u32,
    ) -> Self {
        self.scale = if scale == 0 { 1 } else { scale };
        self
    }
}

impl<C: PixelColor> Drawable for RowPreview<'_, C> {
    type Color = C;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let pitch = (CELL_PITCH * self.scale) as i32;
        for (i, &code) in self.codes.iter().enumerate() {
            let glyph = cell_glyph(code).unwrap_or(Glyph::BLANK);
            GlyphPreview::new(glyph, self.top_left + Point::new(i as i32 * pitch, 0), self.on, self.off)
                .with_scale(self.scale)
                .draw(target)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;

    use super::*;
    use crate::gauge::BarRow;
    use crate::table::{NUM_5_GLYPH, NUM_15_GLYPH, ScaleLabel, bar_glyph, glyph_for_label};

    #[test]
    fn test_numeral_five_bitmap() {
        let mut display = MockDisplay::new();
        GlyphPreview::new(NUM_5_GLYPH, Point::zero(), BinaryColor::On, BinaryColor::Off)
            .draw(&mut display)
            .unwrap();

        display.assert_pattern(&[
            ".###.", //
            ".#...", //
            ".##..", //
            "...#.", //
            ".#.#.", //
            "..#..", //
            ".....", //
            ".....",
        ]);
    }

    #[test]
    fn test_numeral_fifteen_bitmap() {
        let mut display = MockDisplay::new();
        GlyphPreview::new(NUM_15_GLYPH, Point::zero(), BinaryColor::On, BinaryColor::Off)
            .draw(&mut display)
            .unwrap();

        display.assert_pattern(&[
            "#.###", //
            "#.#..", //
            "#.##.", //
            "#...#", //
            "#.#.#", //
            "#..#.", //
            ".....", //
            ".....",
        ]);
    }

    #[test]
    fn test_scaled_bar_glyph() {
        let mut display = MockDisplay::new();
        GlyphPreview::new(bar_glyph(2), Point::new(1, 0), BinaryColor::On, BinaryColor::Off)
            .with_scale(2)
            .draw(&mut display)
            .unwrap();

        let lit = display.get_pixel(Point::new(4, 11));
        let unlit = display.get_pixel(Point::new(5, 11));
        let baseline = display.get_pixel(Point::new(1, 12));
        assert_eq!(lit, Some(BinaryColor::On));
        assert_eq!(unlit, Some(BinaryColor::Off));
        assert_eq!(baseline, Some(BinaryColor::Off));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None, "left of the origin stays untouched");
    }

    #[test]
    fn test_bar_row_preview() {
        let codes = BarRow::from_sub_columns(6).codes();
        let mut display = MockDisplay::new();
        RowPreview::new(&codes[..2], Point::zero(), BinaryColor::On, BinaryColor::Off)
            .draw(&mut display)
            .unwrap();

        display.assert_pattern(&[
            "##### #....", //
            "##### #....", //
            "##### #....", //
            "##### #....", //
            "##### #....", //
            "##### #....", //
            "##### .....", //
            "##### .....",
        ]);
    }

    #[test]
    fn test_cell_glyph_lookup() {
        assert_eq!(cell_glyph(BLANK_CHAR), Some(Glyph::BLANK));
        assert_eq!(cell_glyph(FULL_BLOCK_CHAR).map(|g| g.lit_columns(7)), Some(5));
        assert_eq!(cell_glyph(CharCode::ascii('W')), None);
        assert_eq!(cell_glyph(glyph_for_label(ScaleLabel::Five).code()), Some(NUM_5_GLYPH));
    }
}
