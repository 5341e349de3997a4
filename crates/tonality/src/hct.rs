use crate::core::{lstar_from_argb, solve_to_argb, Cam16};
use crate::Float;

/// A color in the HCT color space.
///
/// HCT combines the hue and chroma of CAM16 with the tone of CIE Lab. Tone
/// equals L* and hence has a direct relationship with contrast ratios. Every
/// HCT color is backed by an opaque ARGB color, which is the ground truth.
/// Converting from ARGB to HCT is exact. Converting from hue, chroma, and tone
/// to ARGB goes through a gamut-constrained solver, which may reduce chroma
/// to fit into sRGB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hct {
    hue: Float,
    chroma: Float,
    tone: Float,
    argb: u32,
}

impl Hct {
    /// Create a new HCT color.
    ///
    /// If the requested chroma is not achievable for the hue and tone, the
    /// resulting color has the maximum achievable chroma instead.
    pub fn new(hue: Float, chroma: Float, tone: Float) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    /// Convert an ARGB color to HCT.
    pub fn from_argb(argb: u32) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue(),
            chroma: cam.chroma(),
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Get the hue in degrees `0.0..360.0`.
    #[inline]
    pub fn hue(&self) -> Float {
        self.hue
    }

    /// Get the chroma.
    #[inline]
    pub fn chroma(&self) -> Float {
        self.chroma
    }

    /// Get the tone `0.0..=100.0`.
    #[inline]
    pub fn tone(&self) -> Float {
        self.tone
    }

    /// Get the backing ARGB color.
    #[inline]
    pub fn argb(&self) -> u32 {
        self.argb
    }

    /// Create a new color with the given hue but this color's chroma and tone.
    pub fn with_hue(&self, hue: Float) -> Self {
        Self::new(hue, self.chroma, self.tone)
    }

    /// Create a new color with the given chroma but this color's hue and tone.
    pub fn with_chroma(&self, chroma: Float) -> Self {
        Self::new(self.hue, chroma, self.tone)
    }

    /// Create a new color with the given tone but this color's hue and chroma.
    pub fn with_tone(&self, tone: Float) -> Self {
        Self::new(self.hue, self.chroma, tone)
    }
}

impl From<u32> for Hct {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Hct> for u32 {
    fn from(hct: Hct) -> Self {
        hct.argb
    }
}

impl std::fmt::Display for Hct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hct({:.2}, {:.2}, {:.2})",
            self.hue, self.chroma, self.tone
        )
    }
}

/// Convert the ARGB color to HCT.
#[inline]
pub fn hct_from_argb(argb: u32) -> Hct {
    Hct::from_argb(argb)
}

/// Convert the hue, chroma, and tone to an opaque ARGB color, reducing chroma
/// as necessary to stay within gamut.
#[inline]
pub fn hct_to_argb(hue: Float, chroma: Float, tone: Float) -> u32 {
    solve_to_argb(hue, chroma, tone)
}

#[cfg(test)]
mod test {
    use super::{hct_from_argb, hct_to_argb, Hct};
    use crate::core::assert_within;

    #[test]
    fn test_from_argb() {
        let hct = Hct::from_argb(0xff00_00ff);
        assert_within!(hct.hue(), 282.788, 1e-2);
        assert_within!(hct.chroma(), 87.230, 1e-2);
        assert_within!(hct.tone(), 32.302, 1e-2);
        assert_eq!(hct.argb(), 0xff00_00ff);
        assert_eq!(format!("{}", hct), "hct(282.79, 87.23, 32.30)");
    }

    #[test]
    fn test_round_trip() {
        // Sample the RGB cube, including its surfaces.
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let argb = crate::core::argb_from_rgb(r, g, b);
                    let hct = hct_from_argb(argb);
                    let solved = hct_to_argb(hct.hue(), hct.chroma(), hct.tone());
                    let again = hct_from_argb(solved);
                    assert_within!(again.tone(), hct.tone(), 0.5);
                    assert_within!(again.chroma(), hct.chroma(), 2.5);
                }
            }
        }
    }

    #[test]
    fn test_exact_round_trip() {
        for rgb in (0..0x0100_0000_u32).step_by(257) {
            let argb = 0xff00_0000 | rgb;
            let hct = hct_from_argb(argb);
            assert_eq!(
                hct_to_argb(hct.hue(), hct.chroma(), hct.tone()),
                argb,
                "{} does not round-trip",
                hct
            );
        }
    }

    #[test]
    fn test_clamping() {
        let hct = Hct::new(-30.0, -10.0, 150.0);
        assert_eq!(hct.argb(), 0xffff_ffff);

        let hct = Hct::new(390.0, 400.0, 50.0);
        assert!(hct.chroma() < 400.0, "chroma {} is out of gamut", hct.chroma());
        assert_within!(hct.tone(), 50.0, 0.5);
        let hue_error = 180.0 - ((hct.hue() - 30.0).abs() - 180.0).abs();
        assert!(hue_error < 10.0, "hue {} strays from 30", hct.hue());
    }

    #[test]
    fn test_with_tone() {
        let base = Hct::new(120.0, 30.0, 50.0);
        let darker = base.with_tone(20.0);
        assert_within!(darker.tone(), 20.0, 0.5);
        assert!(darker.chroma() <= 30.5, "chroma {} exceeds request", darker.chroma());
        assert_eq!(u32::from(base), base.argb());
        assert_eq!(Hct::from(base.argb()), base);
    }
}
