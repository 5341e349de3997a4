//! Blending colors in HCT and CAM16-UCS.

use crate::core::{
    difference_degrees, lerp, lstar_from_argb, rotation_direction, sanitize_degrees, Cam16,
};
use crate::{Float, Hct};

/// Shift the design color's hue towards the source color's hue.
///
/// The hue rotates by half the difference between the two hues, but at most
/// 15 degrees. Chroma and tone of the design color are preserved, so that the
/// result still serves the same role in a user interface.
pub fn harmonize(design: u32, source: u32) -> u32 {
    let from = Hct::from_argb(design);
    let to = Hct::from_argb(source);
    let rotation = (difference_degrees(from.hue(), to.hue()) * 0.5).min(15.0);
    let hue = sanitize_degrees(from.hue() + rotation * rotation_direction(from.hue(), to.hue()));
    Hct::new(hue, from.chroma(), from.tone()).argb()
}

/// Blend the hue of `from` towards `to` in CAM16-UCS, while preserving the
/// chroma and tone of `from`.
pub fn hct_hue(from: u32, to: u32, amount: Float) -> u32 {
    let ucs = Cam16::from_argb(cam16_ucs(from, to, amount));
    let from_cam = Cam16::from_argb(from);
    Hct::new(ucs.hue(), from_cam.chroma(), lstar_from_argb(from)).argb()
}

/// Blend two colors by linearly interpolating their CAM16-UCS coordinates.
///
/// An amount of 0 yields `from` and 1 yields `to`.
pub fn cam16_ucs(from: u32, to: u32, amount: Float) -> u32 {
    let [j1, a1, b1] = Cam16::from_argb(from).ucs();
    let [j2, a2, b2] = Cam16::from_argb(to).ucs();

    Cam16::from_ucs(
        lerp(j1, j2, amount),
        lerp(a1, a2, amount),
        lerp(b1, b2, amount),
    )
    .to_argb()
}

#[cfg(test)]
mod test {
    use super::{cam16_ucs, harmonize, hct_hue};
    use crate::core::{assert_within, lstar_from_argb};
    use crate::Hct;

    const RED: u32 = 0xffff_0000;
    const BLUE: u32 = 0xff00_00ff;
    const GREEN: u32 = 0xff00_ff00;
    const YELLOW: u32 = 0xffff_ff00;

    #[test]
    fn test_harmonize() {
        assert_eq!(harmonize(RED, BLUE), 0xfffb_0057);
        assert_eq!(harmonize(RED, GREEN), 0xffd8_5600);
        assert_eq!(harmonize(BLUE, RED), 0xff57_00dc);
        assert_eq!(harmonize(YELLOW, RED), 0xffff_f6e3);
    }

    #[test]
    fn test_harmonize_rotation_limit() {
        let design = Hct::from_argb(RED);
        let harmonized = Hct::from_argb(harmonize(RED, BLUE));
        let rotation = 180.0 - ((harmonized.hue() - design.hue()).abs() - 180.0).abs();
        assert!(rotation <= 15.5, "rotation {} exceeds limit", rotation);
        assert_within!(harmonized.tone(), design.tone(), 0.5);
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(cam16_ucs(RED, BLUE, 0.0), RED);
        assert_eq!(cam16_ucs(RED, BLUE, 1.0), BLUE);

        let blended = hct_hue(RED, BLUE, 0.5);
        assert_within!(lstar_from_argb(blended), lstar_from_argb(RED), 0.6);
    }
}
