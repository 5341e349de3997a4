//! The CAM16 color appearance model and its uniform color space CAM16-UCS.
//!
//! CAM16 predicts the perceived hue, chroma, and lightness J of a color under
//! specific viewing conditions. This crate only ever uses one set of viewing
//! conditions, those of the sRGB standard: a D65 white point, an adapting
//! luminance of 11.72 cd/m² (200 lux), a background with L* = 50, and an
//! average surround. The conditions are precomputed and folded into the
//! matrices converting between linear sRGB and the scaled, discounted cone
//! responses the model operates on.

use super::{argb_from_linrgb, linrgb_from_argb, multiply, sanitize_degrees};
use crate::Float;

/// The viewing conditions for CAM16.
///
/// All derived coefficients are precomputed. There is exactly one instance,
/// [`ViewingConditions::DEFAULT`], which is shared by reference and never
/// mutated.
#[derive(Debug, PartialEq)]
pub struct ViewingConditions {
    /// The achromatic response to white.
    pub aw: Float,
    /// The background induction factor.
    pub nbb: Float,
    /// The chromatic induction factor.
    pub ncb: Float,
    /// The exponential nonlinearity.
    pub c: Float,
    /// The chromatic surround induction factor.
    pub nc: Float,
    /// The ratio of background to white luminance.
    pub n: Float,
    /// The degree of adaptation per cone response.
    pub rgb_d: [Float; 3],
    /// The luminance-level adaptation factor.
    pub fl: Float,
    /// The fourth root of `fl`.
    pub fl_root: Float,
    /// The base exponential nonlinearity.
    pub z: Float,
    /// The chroma scaling `(1.64 - 0.29ⁿ)^0.73`.
    pub alpha_coefficient: Float,
}

impl ViewingConditions {
    /// The sRGB standard viewing conditions.
    #[allow(clippy::excessive_precision)]
    pub const DEFAULT: ViewingConditions = ViewingConditions {
        aw: 29.980997194447333,
        nbb: 1.0169191804458755,
        ncb: 1.0169191804458755,
        c: 0.69,
        nc: 1.0,
        n: 0.18418651851244416,
        rgb_d: [1.02117770275752, 0.9863077294280124, 0.9339605082802299],
        fl: 0.3884814537800353,
        fl_root: 0.7894826179304937,
        z: 1.909169568483652,
        alpha_coefficient: 0.8834525670408592,
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert linear sRGB in `0..=100` to scaled, discounted cone responses.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const SCALED_DISCOUNT_FROM_LINRGB: [[Float; 3]; 3] = [
    [ 0.001200833568784504,  0.002389694492170889,  0.0002795742885861124 ],
    [ 0.0005891086651375999, 0.0029785502573438758, 0.0003270666104008398 ],
    [ 0.00010146692491640572, 0.0005364214359186694, 0.0032979401770712076 ],
];

/// Convert scaled, discounted cone responses to linear sRGB in `0..=100`.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINRGB_FROM_SCALED_DISCOUNT: [[Float; 3]; 3] = [
    [ 1373.2198709594231,  -1100.4251190754821,  -7.278681089101213 ],
    [ -271.815969077903,     559.6580465940733, -32.46047482791194  ],
    [    1.9622899599665666, -57.173814538844006, 308.7233197812385  ],
];

/// Apply the nonlinear chromatic adaptation to a scaled, discounted cone
/// response.
#[inline]
pub(crate) fn adapt(component: Float) -> Float {
    let af = component.abs().powf(0.42);
    (400.0 * af / (af + 27.13)).copysign(component)
}

/// Undo [`adapt`].
#[inline]
pub(crate) fn unadapt(adapted: Float) -> Float {
    let magnitude = adapted.abs();
    let base = (27.13 * magnitude / (400.0 - magnitude)).max(0.0);
    base.powf(1.0 / 0.42).copysign(adapted)
}

/// Compute the opponent color dimensions a (red-green) and b (yellow-blue) for
/// adapted cone responses.
#[inline]
pub(crate) fn opponents(adapted: &[Float; 3]) -> (Float, Float) {
    let [ra, ga, ba] = *adapted;
    let a = ra - ga + (ba - ga) / 11.0;
    let b = (ra + ga - 2.0 * ba) / 9.0;
    (a, b)
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in the CAM16 color appearance model.
///
/// Besides hue, chroma, and lightness J, a color also carries its coordinates
/// in CAM16-UCS, which are used for measuring perceptual distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cam16 {
    hue: Float,
    chroma: Float,
    j: Float,
    jstar: Float,
    astar: Float,
    bstar: Float,
}

impl Cam16 {
    /// Convert the ARGB color to CAM16. The alpha channel is ignored.
    pub fn from_argb(argb: u32) -> Self {
        if argb & 0x00ff_ffff == 0 {
            return Self::from_jch(0.0, 0.0, 0.0);
        }

        let vc = &ViewingConditions::DEFAULT;
        let scaled = multiply(&SCALED_DISCOUNT_FROM_LINRGB, &linrgb_from_argb(argb));
        let adapted = [adapt(scaled[0]), adapt(scaled[1]), adapt(scaled[2])];
        let [ra, ga, ba] = adapted;
        let (a, b) = opponents(&adapted);

        // Auxiliary components
        let u = ra + ga + ba + ba / 20.0;
        let p2 = 2.0 * ra + ga + ba / 20.0;

        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let j = 100.0 * (vc.nbb / vc.aw * p2).powf(vc.c * vc.z);

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = (hue_prime.to_radians() + 2.0).cos() + 3.8;
        let p1 = 12500.0 / 13.0 * vc.nc * vc.ncb * e_hue;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = vc.alpha_coefficient * t.powf(0.9);
        let chroma = alpha * (j / 100.0).sqrt();

        Self::from_jch(j, chroma, hue)
    }

    /// Create a new CAM16 color from lightness J, chroma, and hue.
    pub fn from_jch(j: Float, chroma: Float, hue: Float) -> Self {
        let m = chroma * ViewingConditions::DEFAULT.fl_root;
        let jstar = 1.7 * j / (1.0 + 0.007 * j);
        let mstar = (0.0228 * m).ln_1p() / 0.0228;
        let radians = hue.to_radians();

        Self {
            hue,
            chroma,
            j,
            jstar,
            astar: mstar * radians.cos(),
            bstar: mstar * radians.sin(),
        }
    }

    /// Create a new CAM16 color from its coordinates in CAM16-UCS.
    pub fn from_ucs(jstar: Float, astar: Float, bstar: Float) -> Self {
        let m = astar.hypot(bstar);
        let m2 = (m * 0.0228).exp_m1() / 0.0228;
        let chroma = m2 / ViewingConditions::DEFAULT.fl_root;
        let hue = sanitize_degrees(bstar.atan2(astar).to_degrees());
        let j = jstar / (1.0 - (jstar - 100.0) * 0.007);

        Self::from_jch(j, chroma, hue)
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

    /// Get the lightness J.
    #[inline]
    pub fn j(&self) -> Float {
        self.j
    }

    /// Get the CAM16-UCS coordinates J*, a*, b*.
    #[inline]
    pub fn ucs(&self) -> [Float; 3] {
        [self.jstar, self.astar, self.bstar]
    }

    /// Determine the perceptual distance between two colors.
    ///
    /// The distance is the Euclidean distance in CAM16-UCS, with the
    /// correction `1.41 * ΔE'^0.63`.
    pub fn distance(&self, other: &Self) -> Float {
        let delta_j = self.jstar - other.jstar;
        let delta_a = self.astar - other.astar;
        let delta_b = self.bstar - other.bstar;
        let delta_e = delta_j.mul_add(delta_j, delta_a.mul_add(delta_a, delta_b * delta_b)).sqrt();
        1.41 * delta_e.powf(0.63)
    }

    /// Convert this color back to ARGB.
    ///
    /// Since CAM16 covers colors outside the sRGB gamut, the result is clamped
    /// to the gamut component-wise. Use the HCT solver for gamut-aware
    /// conversions.
    pub fn to_argb(&self) -> u32 {
        if self.j <= 0.0 {
            return 0xff00_0000;
        }

        let vc = &ViewingConditions::DEFAULT;
        let alpha = if self.chroma == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };
        let t = (alpha / vc.alpha_coefficient).powf(1.0 / 0.9);
        let radians = self.hue.to_radians();
        let (sin, cos) = radians.sin_cos();

        let e_hue = 0.25 * ((radians + 2.0).cos() + 3.8);
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
        let p2 = vc.aw * (self.j / 100.0).powf(1.0 / vc.c / vc.z) / vc.nbb;

        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * cos + 108.0 * t * sin);
        let linrgb = linrgb_from_opponents(p2, gamma * cos, gamma * sin);
        argb_from_linrgb(&linrgb)
    }
}

/// Convert the achromatic response `p2` and the opponent dimensions back to
/// linear sRGB in `0..=100`.
#[inline]
pub(crate) fn linrgb_from_opponents(p2: Float, a: Float, b: Float) -> [Float; 3] {
    let ra = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
    let ga = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
    let ba = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

    multiply(
        &LINRGB_FROM_SCALED_DISCOUNT,
        &[unadapt(ra), unadapt(ga), unadapt(ba)],
    )
}

#[cfg(test)]
mod test {
    use super::Cam16;
    use crate::core::assert_within;

    #[test]
    fn test_black_and_white() {
        let black = Cam16::from_argb(0xff00_0000);
        assert_eq!(black.hue(), 0.0);
        assert_eq!(black.chroma(), 0.0);
        assert_eq!(black.j(), 0.0);

        let white = Cam16::from_argb(0xffff_ffff);
        assert_within!(white.j(), 100.0, 1e-3);
        assert!(white.chroma() < 3.0, "white has chroma {}", white.chroma());
    }

    #[test]
    fn test_red() {
        let red = Cam16::from_argb(0xffff_0000);
        assert_within!(red.hue(), 27.408, 1e-2);
        assert_within!(red.chroma(), 113.358, 1e-2);
        assert_within!(red.j(), 46.445, 1e-2);
    }

    #[test]
    fn test_round_trip() {
        for argb in [0xff62_00ee_u32, 0xff03_dac6, 0xffff_0000, 0xff00_ff00, 0xff00_00ff, 0xff80_8080] {
            let cam = Cam16::from_argb(argb);
            assert_eq!(cam.to_argb(), argb);

            let [jstar, astar, bstar] = cam.ucs();
            let from_ucs = Cam16::from_ucs(jstar, astar, bstar);
            assert_within!(cam.distance(&from_ucs), 0.0, 1e-3);
            assert_eq!(from_ucs.to_argb(), argb);
        }
    }

    #[test]
    fn test_distance() {
        let red = Cam16::from_argb(0xffff_0000);
        let blue = Cam16::from_argb(0xff00_00ff);
        assert_within!(red.distance(&red), 0.0, 1e-9);
        assert_within!(red.distance(&blue), blue.distance(&red), 1e-9);
        assert!(red.distance(&blue) > 10.0, "red and blue are far apart");
    }
}
