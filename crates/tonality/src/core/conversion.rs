use super::multiply;
use crate::Float;

/// Assemble an opaque ARGB color from its red, green, and blue components.
#[inline]
pub const fn argb_from_rgb(red: u8, green: u8, blue: u8) -> u32 {
    0xff00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

/// Get the alpha component of an ARGB color.
#[inline]
pub const fn alpha(argb: u32) -> u8 {
    (argb >> 24) as u8
}

/// Get the red component of an ARGB color.
#[inline]
pub const fn red(argb: u32) -> u8 {
    (argb >> 16) as u8
}

/// Get the green component of an ARGB color.
#[inline]
pub const fn green(argb: u32) -> u8 {
    (argb >> 8) as u8
}

/// Get the blue component of an ARGB color.
#[inline]
pub const fn blue(argb: u32) -> u8 {
    argb as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a gamma-encoded sRGB component to a linear component in `0..=100`.
#[inline]
pub(crate) fn linearized(component: u8) -> Float {
    let normalized = component as Float / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Convert a linear component in `0..=100` to a gamma-encoded sRGB component.
///
/// Out-of-range values are clamped to `0x00..=0xff`.
#[inline]
pub(crate) fn delinearized(component: Float) -> u8 {
    let normalized = component / 100.0;
    let encoded = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        normalized.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    };

    (encoded * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert an ARGB color to linear RGB coordinates in `0..=100`.
#[inline]
pub(crate) fn linrgb_from_argb(argb: u32) -> [Float; 3] {
    [
        linearized(red(argb)),
        linearized(green(argb)),
        linearized(blue(argb)),
    ]
}

/// Convert linear RGB coordinates in `0..=100` to an opaque ARGB color.
#[inline]
pub(crate) fn argb_from_linrgb(linrgb: &[Float; 3]) -> u32 {
    argb_from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41233895, 0.35762064, 0.18051042 ],
    [ 0.2126,     0.7152,     0.0722     ],
    [ 0.01932141, 0.11916382, 0.95034478 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_SRGB: [[Float; 3]; 3] = [
    [  3.2413774792388685, -1.5376652402851851, -0.49885366846268053 ],
    [ -0.9691452513005321,  1.8758853451067872,  0.04156585616912061 ],
    [  0.05562093689691305, -0.20395524564742123, 1.0571799111220335 ],
];

/// The D65 white point in XYZ, scaled to `Y = 100`.
const WHITE_POINT_D65: [Float; 3] = [95.047, 100.0, 108.883];

/// Convert an ARGB color to XYZ coordinates scaled to `0..=100`.
pub(crate) fn xyz_from_argb(argb: u32) -> [Float; 3] {
    multiply(&SRGB_TO_XYZ, &linrgb_from_argb(argb))
}

/// Convert XYZ coordinates scaled to `0..=100` to an opaque ARGB color.
pub(crate) fn argb_from_xyz(xyz: &[Float; 3]) -> u32 {
    argb_from_linrgb(&multiply(&XYZ_TO_SRGB, xyz))
}

// --------------------------------------------------------------------------------------------------------------------

const EPSILON: Float = 216.0 / 24389.0;
const KAPPA: Float = 24389.0 / 27.0;

#[inline]
fn lab_f(t: Float) -> Float {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_invf(ft: Float) -> Float {
    let ft3 = ft * ft * ft;
    if ft3 > EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// Convert an ARGB color to CIE Lab.
pub(crate) fn lab_from_argb(argb: u32) -> [Float; 3] {
    let [x, y, z] = xyz_from_argb(argb);
    let fx = lab_f(x / WHITE_POINT_D65[0]);
    let fy = lab_f(y / WHITE_POINT_D65[1]);
    let fz = lab_f(z / WHITE_POINT_D65[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIE Lab to an opaque ARGB color, clamping out-of-gamut colors.
pub(crate) fn argb_from_lab(lab: &[Float; 3]) -> u32 {
    let [l, a, b] = *lab;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    argb_from_xyz(&[
        lab_invf(fx) * WHITE_POINT_D65[0],
        lab_invf(fy) * WHITE_POINT_D65[1],
        lab_invf(fz) * WHITE_POINT_D65[2],
    ])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert CIE L* to relative luminance Y in `0..=100`.
#[inline]
pub fn y_from_lstar(lstar: Float) -> Float {
    100.0 * lab_invf((lstar + 16.0) / 116.0)
}

/// Convert relative luminance Y in `0..=100` to CIE L*.
#[inline]
pub fn lstar_from_y(y: Float) -> Float {
    lab_f(y / 100.0) * 116.0 - 16.0
}

/// Determine the CIE L* of an ARGB color.
#[inline]
pub fn lstar_from_argb(argb: u32) -> Float {
    lstar_from_y(xyz_from_argb(argb)[1])
}

/// Create the gray ARGB color with the given CIE L*.
pub fn argb_from_lstar(lstar: Float) -> u32 {
    let component = delinearized(y_from_lstar(lstar));
    argb_from_rgb(component, component, component)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_within;

    #[test]
    fn test_components() {
        let argb = 0x80_12_34_56;
        assert_eq!(alpha(argb), 0x80);
        assert_eq!(red(argb), 0x12);
        assert_eq!(green(argb), 0x34);
        assert_eq!(blue(argb), 0x56);
        assert_eq!(argb_from_rgb(0x12, 0x34, 0x56), 0xff12_3456);
    }

    #[test]
    fn test_linearization() {
        for component in 0..=255_u8 {
            assert_eq!(delinearized(linearized(component)), component);
        }
    }

    #[test]
    fn test_lstar() {
        assert_within!(lstar_from_argb(0xffff_ffff), 100.0, 1e-3);
        assert_within!(lstar_from_argb(0xff00_0000), 0.0, 1e-9);
        assert_eq!(argb_from_lstar(100.0), 0xffff_ffff);
        assert_eq!(argb_from_lstar(0.0), 0xff00_0000);
        assert_eq!(argb_from_lstar(-50.0), 0xff00_0000);

        for lstar in [3.0, 8.0, 25.0, 50.0, 75.0, 99.0] {
            assert_within!(lstar_from_y(y_from_lstar(lstar)), lstar, 1e-9);
        }
    }

    #[test]
    fn test_lab() {
        for argb in [0xff00_0000, 0xffff_ffff, 0xffff_0000, 0xff00_ff00, 0xff00_00ff, 0xff6a_816e] {
            assert_eq!(argb_from_lab(&lab_from_argb(argb)), argb);
        }
    }
}
