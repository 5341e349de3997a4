//! Solving for the sRGB color with a given HCT hue, chroma, and tone.
//!
//! Tone fixes relative luminance Y, and the colors with the same Y form a plane
//! that cuts through the RGB cube. Hence, the solver first tries to find the
//! exact color by iterating on CAM16 lightness J with Newton's method. If that
//! color is outside the gamut, the solver instead walks the polygon formed by
//! the plane's intersection with the cube. It first bisects the polygon's
//! vertices for the edge that straddles the requested hue, and then bisects
//! that edge along the sRGB critical planes, i.e., the linear values halfway
//! between two adjacent 8-bit components, for the color with maximum chroma.

use super::cam16::{
    adapt, linrgb_from_opponents, opponents, ViewingConditions, SCALED_DISCOUNT_FROM_LINRGB,
};
use super::{argb_from_linrgb, argb_from_lstar, multiply, sanitize_degrees, y_from_lstar, Cam16};
use crate::Float;

const PI: Float = std::f64::consts::PI as Float;
const TAU: Float = std::f64::consts::TAU as Float;

/// The coefficients for relative luminance Y.
const Y_FROM_LINRGB: [Float; 3] = [0.2126, 0.7152, 0.0722];

#[inline]
fn sanitize_radians(angle: Float) -> Float {
    (angle + 4.0 * TAU).rem_euclid(TAU)
}

/// Convert a linear component in `0..=100` to a gamma-encoded component in
/// `0..=255`, without rounding or clamping.
#[inline]
fn true_delinearized(component: Float) -> Float {
    let normalized = component / 100.0;
    let encoded = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        normalized.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    };
    encoded * 255.0
}

/// Get the linear value of the critical plane halfway between the 8-bit
/// components `index` and `index + 1`.
#[inline]
fn critical_plane(index: i32) -> Float {
    let normalized = (index as Float + 0.5) / 255.0;
    let linear = if normalized <= 0.040449936 {
        normalized / 12.92
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4)
    };
    linear * 100.0
}

#[inline]
fn critical_plane_below(x: Float) -> i32 {
    (x - 0.5).floor() as i32
}

#[inline]
fn critical_plane_above(x: Float) -> i32 {
    (x - 0.5).ceil() as i32
}

/// Compute the CAM16 hue in radians of linear sRGB.
fn hue_of(linrgb: &[Float; 3]) -> Float {
    let scaled = multiply(&SCALED_DISCOUNT_FROM_LINRGB, linrgb);
    let (a, b) = opponents(&[adapt(scaled[0]), adapt(scaled[1]), adapt(scaled[2])]);
    b.atan2(a)
}

#[inline]
fn are_in_cyclic_order(a: Float, b: Float, c: Float) -> bool {
    sanitize_radians(b - a) < sanitize_radians(c - a)
}

#[inline]
fn is_bounded(x: Float) -> bool {
    (0.0..=100.0).contains(&x)
}

/// Interpolate between source and target so that the result has the given
/// coordinate on the axis.
fn set_coordinate(source: &[Float; 3], coordinate: Float, target: &[Float; 3], axis: usize) -> [Float; 3] {
    let t = (coordinate - source[axis]) / (target[axis] - source[axis]);
    [
        t.mul_add(target[0] - source[0], source[0]),
        t.mul_add(target[1] - source[1], source[1]),
        t.mul_add(target[2] - source[2], source[2]),
    ]
}

#[inline]
fn midpoint(a: &[Float; 3], b: &[Float; 3]) -> [Float; 3] {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0, (a[2] + b[2]) / 2.0]
}

/// Get the nth of the 12 candidate vertices where the plane with relative
/// luminance Y intersects the edges of the RGB cube, if it exists.
fn nth_vertex(y: Float, n: usize) -> Option<[Float; 3]> {
    let [kr, kg, kb] = Y_FROM_LINRGB;
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };

    let vertex = if n < 4 {
        let (g, b) = (coord_a, coord_b);
        [(y - g * kg - b * kb) / kr, g, b]
    } else if n < 8 {
        let (b, r) = (coord_a, coord_b);
        [r, (y - r * kr - b * kb) / kg, b]
    } else {
        let (r, g) = (coord_a, coord_b);
        [r, g, (y - r * kr - g * kg) / kb]
    };

    let index = if n < 4 { 0 } else if n < 8 { 1 } else { 2 };
    is_bounded(vertex[index]).then_some(vertex)
}

/// Find the two vertices of the constant-luminance polygon whose edge
/// straddles the target hue.
fn bisect_to_segment(y: Float, target_hue: Float) -> ([Float; 3], [Float; 3]) {
    let mut segment: Option<([Float; 3], Float, [Float; 3], Float)> = None;
    let mut uncut = true;

    for n in 0..12 {
        let Some(mid) = nth_vertex(y, n) else {
            continue;
        };
        let mid_hue = hue_of(&mid);

        let Some((left, left_hue, right, right_hue)) = segment.as_mut() else {
            segment = Some((mid, mid_hue, mid, mid_hue));
            continue;
        };

        if uncut || are_in_cyclic_order(*left_hue, mid_hue, *right_hue) {
            uncut = false;
            if are_in_cyclic_order(*left_hue, target_hue, mid_hue) {
                *right = mid;
                *right_hue = mid_hue;
            } else {
                *left = mid;
                *left_hue = mid_hue;
            }
        }
    }

    segment.map_or(([0.0; 3], [0.0; 3]), |(left, _, right, _)| (left, right))
}

/// Find the color on the gamut boundary with the given relative luminance and
/// hue by bisecting along critical planes.
fn bisect_to_limit(y: Float, target_hue: Float) -> [Float; 3] {
    let (mut left, mut right) = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(&left);

    for axis in 0..3 {
        if left[axis] == right[axis] {
            continue;
        }

        let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
            (
                critical_plane_below(true_delinearized(left[axis])),
                critical_plane_above(true_delinearized(right[axis])),
            )
        } else {
            (
                critical_plane_above(true_delinearized(left[axis])),
                critical_plane_below(true_delinearized(right[axis])),
            )
        };

        for _ in 0..8 {
            if (r_plane - l_plane).abs() <= 1 {
                break;
            }

            let m_plane = (l_plane + r_plane).div_euclid(2);
            let mid = set_coordinate(&left, critical_plane(m_plane), &right, axis);
            let mid_hue = hue_of(&mid);
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                r_plane = m_plane;
            } else {
                left = mid;
                left_hue = mid_hue;
                l_plane = m_plane;
            }
        }
    }

    midpoint(&left, &right)
}

/// Try finding the exact in-gamut color by iterating on CAM16 lightness J.
fn find_result_by_j(hue_radians: Float, chroma: Float, y: Float) -> Option<u32> {
    let vc = &ViewingConditions::DEFAULT;

    // Initial estimate of J
    let mut j = y.sqrt() * 11.0;

    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let (sin, cos) = hue_radians.sin_cos();

    for round in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha / vc.alpha_coefficient).powf(1.0 / 0.9);
        let p2 = vc.aw * j_normalized.powf(1.0 / vc.c / vc.z) / vc.nbb;
        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * cos + 108.0 * t * sin);

        let linrgb = linrgb_from_opponents(p2, gamma * cos, gamma * sin);
        if linrgb.iter().any(|c| *c < 0.0) {
            return None;
        }

        let [kr, kg, kb] = Y_FROM_LINRGB;
        let fnj = kr.mul_add(linrgb[0], kg.mul_add(linrgb[1], kb * linrgb[2]));
        if fnj <= 0.0 {
            return None;
        }

        if round == 4 || (fnj - y).abs() < 0.002 {
            if linrgb.iter().any(|c| *c > 100.01) {
                return None;
            }
            return Some(argb_from_linrgb(&linrgb));
        }

        // Newton's method, with 2 * fn(j) / j approximating fn'(j)
        j -= (fnj - y) * j / (2.0 * fnj);
    }

    None
}

/// Find the sRGB color with the given hue, chroma, and tone.
///
/// The hue is taken modulo 360, chroma is clamped to be non-negative, and tone
/// is clamped to `0..=100`. If the requested color is outside the sRGB gamut,
/// this function returns the color with the same hue and tone that has the
/// maximum achievable chroma. This function is total, deterministic, and
/// continuous in its arguments.
pub fn solve_to_argb(hue: Float, chroma: Float, tone: Float) -> u32 {
    let chroma = chroma.max(0.0);
    let tone = tone.clamp(0.0, 100.0);
    if chroma < 0.0001 || tone < 0.0001 || tone > 99.9999 {
        return argb_from_lstar(tone);
    }

    let hue_radians = sanitize_degrees(hue) / 180.0 * PI;
    let y = y_from_lstar(tone);
    find_result_by_j(hue_radians, chroma, y)
        .unwrap_or_else(|| argb_from_linrgb(&bisect_to_limit(y, hue_radians)))
}

/// Find the chroma actually achievable at the given hue and tone, up to the
/// requested chroma.
pub fn find_chroma(hue: Float, chroma: Float, tone: Float) -> Float {
    Cam16::from_argb(solve_to_argb(hue, chroma, tone)).chroma()
}
