//! WCAG contrast ratios between tones.
//!
//! Since tone is CIE L*, every tone maps to exactly one relative luminance Y,
//! and the contrast ratio `(Y1 + 5) / (Y2 + 5)` between two tones is a simple
//! function of the tones. That makes it possible to solve for the lighter or
//! darker tone that has a given contrast ratio against another tone.

use super::{lstar_from_y, y_from_lstar};
use crate::Float;

/// The smallest possible contrast ratio.
pub const RATIO_MIN: Float = 1.0;

/// The largest possible contrast ratio, i.e., black against white.
pub const RATIO_MAX: Float = 21.0;

/// Tones returned by [`lighter`] and [`darker`] are pushed this far beyond the
/// exact solution, since gamut mapping may shift luminance a little.
const LUMINANCE_GAMUT_MAP_TOLERANCE: Float = 0.4;

/// The largest tolerated shortfall of a computed contrast ratio.
const CONTRAST_RATIO_EPSILON: Float = 0.04;

/// Compute the contrast ratio between two relative luminances in `0..=100`.
#[inline]
pub fn ratio_of_ys(y1: Float, y2: Float) -> Float {
    let lighter = y1.max(y2);
    let darker = y1.min(y2);
    (lighter + 5.0) / (darker + 5.0)
}

/// Compute the contrast ratio between two tones.
///
/// Both tones are clamped to `0..=100` first. The result is in `1..=21`.
#[inline]
pub fn ratio_of_tones(tone1: Float, tone2: Float) -> Float {
    ratio_of_ys(
        y_from_lstar(tone1.clamp(0.0, 100.0)),
        y_from_lstar(tone2.clamp(0.0, 100.0)),
    )
}

/// Find the darkest tone that is lighter than the given tone and has at least
/// the given contrast ratio against it.
///
/// This function returns `None` if the tone is out of range or no such tone
/// exists.
pub fn lighter(tone: Float, ratio: Float) -> Option<Float> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }

    let dark_y = y_from_lstar(tone);
    let light_y = ratio * (dark_y + 5.0) - 5.0;
    if !(0.0..=100.0).contains(&light_y) {
        return None;
    }

    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return None;
    }

    let answer = lstar_from_y(light_y) + LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&answer).then_some(answer)
}

/// Find the lightest tone that is darker than the given tone and has at least
/// the given contrast ratio against it.
///
/// This function returns `None` if the tone is out of range or no such tone
/// exists.
pub fn darker(tone: Float, ratio: Float) -> Option<Float> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }

    let light_y = y_from_lstar(tone);
    let dark_y = (light_y + 5.0) / ratio - 5.0;
    if !(0.0..=100.0).contains(&dark_y) {
        return None;
    }

    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return None;
    }

    let answer = lstar_from_y(dark_y) - LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&answer).then_some(answer)
}

/// Like [`lighter`], but falling back on white (100) instead of failing.
#[inline]
pub fn lighter_unsafe(tone: Float, ratio: Float) -> Float {
    lighter(tone, ratio).unwrap_or(100.0)
}

/// Like [`darker`], but falling back on black (0) instead of failing.
#[inline]
pub fn darker_unsafe(tone: Float, ratio: Float) -> Float {
    darker(tone, ratio).unwrap_or(0.0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_within;

    #[test]
    fn test_ratio() {
        assert_within!(ratio_of_tones(0.0, 100.0), RATIO_MAX, 1e-9);
        assert_within!(ratio_of_tones(100.0, 0.0), RATIO_MAX, 1e-9);
        assert_within!(ratio_of_tones(42.0, 42.0), RATIO_MIN, 1e-9);
        assert_within!(ratio_of_tones(-10.0, 120.0), RATIO_MAX, 1e-9);
    }

    #[test]
    fn test_lighter_and_darker() {
        let light = lighter(40.0, 4.5).expect("lighter tone exists");
        assert!(light > 40.0, "{} should be lighter than 40", light);
        assert!(ratio_of_tones(light, 40.0) >= 4.5, "{} should contrast", light);

        let dark = darker(60.0, 4.5).expect("darker tone exists");
        assert!(dark < 60.0, "{} should be darker than 60", dark);
        assert!(ratio_of_tones(dark, 60.0) >= 4.5, "{} should contrast", dark);

        assert_eq!(lighter(90.0, 4.5), None);
        assert_eq!(darker(10.0, 4.5), None);
        assert_eq!(lighter(-1.0, 1.0), None);
        assert_within!(lighter_unsafe(90.0, 4.5), 100.0, 0.0);
        assert_within!(darker_unsafe(10.0, 4.5), 0.0, 0.0);
    }
}
