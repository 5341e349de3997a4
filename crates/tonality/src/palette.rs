//! Tonal palettes, i.e., colors of constant hue and chroma across all tones.

use crate::{Float, Hct};

/// The tones of a Material tonal palette's shades, from lightest to darkest.
pub const SHADE_TONES: [u8; 13] = [100, 99, 95, 90, 80, 70, 60, 50, 40, 30, 20, 10, 0];

/// A tonal palette.
///
/// A tonal palette fixes hue and chroma and produces colors at any tone. Since
/// colors at very low and very high tones cannot have much chroma, the actual
/// chroma of a palette's colors varies. The key color is the palette's color
/// closest to tone 50 that still has the requested chroma.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TonalPalette {
    hue: Float,
    chroma: Float,
    key_color: Hct,
}

impl TonalPalette {
    /// Create the tonal palette with the hue and chroma of the ARGB color.
    pub fn from_argb(argb: u32) -> Self {
        Self::from_hct(Hct::from_argb(argb))
    }

    /// Create the tonal palette with the hue and chroma of the HCT color, which
    /// also becomes the key color.
    pub fn from_hct(hct: Hct) -> Self {
        Self {
            hue: hct.hue(),
            chroma: hct.chroma(),
            key_color: hct,
        }
    }

    /// Create the tonal palette with the given hue and chroma.
    pub fn from_hue_and_chroma(hue: Float, chroma: Float) -> Self {
        Self {
            hue,
            chroma,
            key_color: find_key_color(hue, chroma),
        }
    }

    /// Get the palette's hue.
    #[inline]
    pub fn hue(&self) -> Float {
        self.hue
    }

    /// Get the palette's chroma.
    #[inline]
    pub fn chroma(&self) -> Float {
        self.chroma
    }

    /// Get the palette's key color.
    #[inline]
    pub fn key_color(&self) -> Hct {
        self.key_color
    }

    /// Get the palette's color at the given tone as ARGB.
    #[inline]
    pub fn tone(&self, tone: Float) -> u32 {
        self.hct(tone).argb()
    }

    /// Get the palette's color at the given tone as HCT.
    #[inline]
    pub fn hct(&self, tone: Float) -> Hct {
        Hct::new(self.hue, self.chroma, tone)
    }

    /// Get the palette's 13 shades, in the order of [`SHADE_TONES`].
    pub fn shades(&self) -> [u32; 13] {
        SHADE_TONES.map(|tone| self.tone(tone as Float))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The chroma requested when probing for a tone's maximum chroma.
const MAX_CHROMA_VALUE: Float = 200.0;

fn max_chroma(hue: Float, tone: u8) -> Float {
    Hct::new(hue, MAX_CHROMA_VALUE, tone as Float).chroma()
}

/// Find the color closest to tone 50 that has the hue and chroma.
///
/// The maximum chroma across tones is unimodal for a fixed hue. This function
/// performs a binary search over integral tones that moves towards the peak
/// when chroma is insufficient and towards the pivot tone 50 otherwise.
fn find_key_color(hue: Float, chroma: Float) -> Hct {
    const PIVOT_TONE: i32 = 50;
    const EPSILON: Float = 0.01;

    let mut lower: u8 = 0;
    let mut upper: u8 = 100;

    while lower < upper {
        let middle = (lower + upper) / 2;
        let middle_chroma = max_chroma(hue, middle);
        let is_ascending = middle_chroma < max_chroma(hue, middle + 1);

        if middle_chroma >= chroma - EPSILON {
            // Chroma is sufficient: Move towards the pivot.
            if (lower as i32 - PIVOT_TONE).abs() < (upper as i32 - PIVOT_TONE).abs() {
                upper = middle;
            } else {
                if lower == middle {
                    return Hct::new(hue, chroma, lower as Float);
                }
                lower = middle;
            }
        } else if is_ascending {
            lower = middle + 1;
        } else {
            upper = middle;
        }
    }

    Hct::new(hue, chroma, lower as Float)
}
