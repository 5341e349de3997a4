//! The catalogue of Material color roles.
//!
//! Each role has a recipe, i.e., a [`DynamicColor`], which is created by the
//! function with the role's name. Backgrounds and tone delta pairs refer to
//! other roles through these functions, so that roles are only ever resolved
//! against a concrete scheme.

use super::{ContrastCurve, DynamicColor, DynamicScheme, ToneDeltaPair, TonePolarity};
use crate::core::find_chroma;
use crate::error::UnknownRoleError;
use crate::{fix_if_disliked, Float};

/// Pick the tone for dark or light mode.
#[inline]
fn by_mode(scheme: &DynamicScheme, dark: Float, light: Float) -> Float {
    if scheme.is_dark() {
        dark
    } else {
        light
    }
}

/// Pick the tone for monochrome schemes or all others.
#[inline]
fn by_monochrome(scheme: &DynamicScheme, monochrome: Float, other: Float) -> Float {
    if scheme.is_monochrome() {
        monochrome
    } else {
        other
    }
}

/// Pick a tone from the contrast curve for the scheme's contrast level.
#[inline]
fn by_level(scheme: &DynamicScheme, low: Float, normal: Float, medium: Float, high: Float) -> Float {
    ContrastCurve::new(low, normal, medium, high).get(scheme.contrast_level())
}

/// Find the tone closest to the given tone that has the desired chroma.
///
/// This function walks the tone in unit steps towards black or white until
/// the achievable chroma comes within 0.4 of the desired chroma, starts to
/// decrease again, or the tone reaches its bounds.
pub(crate) fn find_desired_chroma_by_tone(
    hue: Float,
    chroma: Float,
    tone: Float,
    by_decreasing_tone: bool,
) -> Float {
    let mut answer = tone;
    let mut closest_chroma = find_chroma(hue, chroma, tone);
    if chroma <= closest_chroma {
        return answer;
    }

    let step = if by_decreasing_tone { -1.0 } else { 1.0 };
    let mut chroma_peak = closest_chroma;
    while closest_chroma < chroma {
        let next = answer + step;
        if !(0.0..=100.0).contains(&next) {
            break;
        }
        answer = next;

        let potential = find_chroma(hue, chroma, answer);
        if potential < chroma_peak || (potential - chroma).abs() < 0.4 {
            break;
        }

        if (potential - chroma).abs() < (closest_chroma - chroma).abs() {
            closest_chroma = potential;
        }
        chroma_peak = chroma_peak.max(potential);
    }

    answer
}

// --------------------------------------------------------------------------------------------------------------------
// Palette key colors

fn primary_palette_key_color() -> DynamicColor {
    DynamicColor::new(
        "primary_palette_key_color",
        |s| s.primary_palette(),
        |s| s.primary_palette().key_color().tone(),
    )
}

fn secondary_palette_key_color() -> DynamicColor {
    DynamicColor::new(
        "secondary_palette_key_color",
        |s| s.secondary_palette(),
        |s| s.secondary_palette().key_color().tone(),
    )
}

fn tertiary_palette_key_color() -> DynamicColor {
    DynamicColor::new(
        "tertiary_palette_key_color",
        |s| s.tertiary_palette(),
        |s| s.tertiary_palette().key_color().tone(),
    )
}

fn neutral_palette_key_color() -> DynamicColor {
    DynamicColor::new(
        "neutral_palette_key_color",
        |s| s.neutral_palette(),
        |s| s.neutral_palette().key_color().tone(),
    )
}

fn neutral_variant_palette_key_color() -> DynamicColor {
    DynamicColor::new(
        "neutral_variant_palette_key_color",
        |s| s.neutral_variant_palette(),
        |s| s.neutral_variant_palette().key_color().tone(),
    )
}

// --------------------------------------------------------------------------------------------------------------------
// Surfaces

/// The highest surface, which is the background for most accents.
fn highest_surface(scheme: &DynamicScheme) -> DynamicColor {
    if scheme.is_dark() {
        surface_bright()
    } else {
        surface_dim()
    }
}

fn background() -> DynamicColor {
    DynamicColor::new("background", |s| s.neutral_palette(), |s| by_mode(s, 6.0, 98.0))
        .as_background()
}

fn on_background() -> DynamicColor {
    DynamicColor::new("on_background", |s| s.neutral_palette(), |s| by_mode(s, 90.0, 10.0))
        .with_background(|_| background())
        .with_contrast_curve(ContrastCurve::new(3.0, 3.0, 4.5, 7.0))
}

fn surface() -> DynamicColor {
    DynamicColor::new("surface", |s| s.neutral_palette(), |s| by_mode(s, 6.0, 98.0))
        .as_background()
}

fn surface_dim() -> DynamicColor {
    DynamicColor::new(
        "surface_dim",
        |s| s.neutral_palette(),
        |s| {
            if s.is_dark() {
                6.0
            } else {
                by_level(s, 87.0, 87.0, 80.0, 75.0)
            }
        },
    )
    .as_background()
}

fn surface_bright() -> DynamicColor {
    DynamicColor::new(
        "surface_bright",
        |s| s.neutral_palette(),
        |s| {
            if s.is_dark() {
                by_level(s, 24.0, 24.0, 29.0, 34.0)
            } else {
                98.0
            }
        },
    )
    .as_background()
}

fn surface_container_lowest() -> DynamicColor {
    DynamicColor::new(
        "surface_container_lowest",
        |s| s.neutral_palette(),
        |s| {
            if s.is_dark() {
                by_level(s, 4.0, 4.0, 2.0, 0.0)
            } else {
                100.0
            }
        },
    )
    .as_background()
}

fn surface_container_low() -> DynamicColor {
    DynamicColor::new(
        "surface_container_low",
        |s| s.neutral_palette(),
        |s| {
            if s.is_dark() {
                by_level(s, 10.0, 10.0, 11.0, 12.0)
            } else {
                by_level(s, 96.0, 96.0, 96.0, 95.0)
            }
        },
    )
    .as_background()
}

fn surface_container() -> DynamicColor {
    DynamicColor::new(
        "surface_container",
        |s| s.neutral_palette(),
        |s| {
            if s.is_dark() {
                by_level(s, 12.0, 12.0, 16.0, 20.0)
            } else {
                by_level(s, 94.0, 94.0, 92.0, 90.0)
            }
        },
    )
    .as_background()
}

fn surface_container_high() -> DynamicColor {
    DynamicColor::new(
        "surface_container_high",
        |s| s.neutral_palette(),
        |s| {
            if s.is_dark() {
                by_level(s, 17.0, 17.0, 21.0, 25.0)
            } else {
                by_level(s, 92.0, 92.0, 88.0, 85.0)
            }
        },
    )
    .as_background()
}

fn surface_container_highest() -> DynamicColor {
    DynamicColor::new(
        "surface_container_highest",
        |s| s.neutral_palette(),
        |s| {
            if s.is_dark() {
                by_level(s, 22.0, 22.0, 26.0, 30.0)
            } else {
                by_level(s, 90.0, 90.0, 84.0, 80.0)
            }
        },
    )
    .as_background()
}

fn on_surface() -> DynamicColor {
    DynamicColor::new("on_surface", |s| s.neutral_palette(), |s| by_mode(s, 90.0, 10.0))
        .with_background(highest_surface)
        .with_contrast_curve(ContrastCurve::ON_ACCENT)
}

fn surface_variant() -> DynamicColor {
    DynamicColor::new(
        "surface_variant",
        |s| s.neutral_variant_palette(),
        |s| by_mode(s, 30.0, 90.0),
    )
    .as_background()
}

fn on_surface_variant() -> DynamicColor {
    DynamicColor::new(
        "on_surface_variant",
        |s| s.neutral_variant_palette(),
        |s| by_mode(s, 80.0, 30.0),
    )
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::ON_CONTAINER)
}

fn inverse_surface() -> DynamicColor {
    DynamicColor::new("inverse_surface", |s| s.neutral_palette(), |s| by_mode(s, 90.0, 20.0))
}

fn inverse_on_surface() -> DynamicColor {
    DynamicColor::new(
        "inverse_on_surface",
        |s| s.neutral_palette(),
        |s| by_mode(s, 20.0, 95.0),
    )
    .with_background(|_| inverse_surface())
    .with_contrast_curve(ContrastCurve::ON_ACCENT)
}

fn outline() -> DynamicColor {
    DynamicColor::new("outline", |s| s.neutral_variant_palette(), |s| by_mode(s, 60.0, 50.0))
        .with_background(highest_surface)
        .with_contrast_curve(ContrastCurve::new(1.5, 3.0, 4.5, 7.0))
}

fn outline_variant() -> DynamicColor {
    DynamicColor::new(
        "outline_variant",
        |s| s.neutral_variant_palette(),
        |s| by_mode(s, 30.0, 80.0),
    )
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::CONTAINER)
}

fn shadow() -> DynamicColor {
    DynamicColor::new("shadow", |s| s.neutral_palette(), |_| 0.0)
}

fn scrim() -> DynamicColor {
    DynamicColor::new("scrim", |s| s.neutral_palette(), |_| 0.0)
}

fn surface_tint() -> DynamicColor {
    DynamicColor::new("surface_tint", |s| s.primary_palette(), |s| by_mode(s, 80.0, 40.0))
        .as_background()
}

// --------------------------------------------------------------------------------------------------------------------
// Primary

fn primary_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(
        primary_container(),
        primary(),
        10.0,
        TonePolarity::Nearer,
        false,
    )
}

fn primary() -> DynamicColor {
    DynamicColor::new(
        "primary",
        |s| s.primary_palette(),
        |s| {
            if s.is_monochrome() {
                by_mode(s, 100.0, 0.0)
            } else {
                by_mode(s, 80.0, 40.0)
            }
        },
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::ACCENT)
    .with_tone_delta_pair(primary_pair)
}

fn on_primary() -> DynamicColor {
    DynamicColor::new(
        "on_primary",
        |s| s.primary_palette(),
        |s| {
            if s.is_monochrome() {
                by_mode(s, 10.0, 90.0)
            } else {
                by_mode(s, 20.0, 100.0)
            }
        },
    )
    .with_background(|_| primary())
    .with_contrast_curve(ContrastCurve::ON_ACCENT)
}

fn primary_container() -> DynamicColor {
    DynamicColor::new(
        "primary_container",
        |s| s.primary_palette(),
        |s| {
            if s.is_fidelity() {
                s.source_color_hct().tone()
            } else if s.is_monochrome() {
                by_mode(s, 85.0, 25.0)
            } else {
                by_mode(s, 30.0, 90.0)
            }
        },
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::CONTAINER)
    .with_tone_delta_pair(primary_pair)
}

fn on_primary_container() -> DynamicColor {
    DynamicColor::new(
        "on_primary_container",
        |s| s.primary_palette(),
        |s| {
            if s.is_fidelity() {
                DynamicColor::foreground_tone(primary_container().raw_tone(s), 4.5)
            } else if s.is_monochrome() {
                by_mode(s, 0.0, 100.0)
            } else {
                by_mode(s, 90.0, 30.0)
            }
        },
    )
    .with_background(|_| primary_container())
    .with_contrast_curve(ContrastCurve::ON_CONTAINER)
}

fn inverse_primary() -> DynamicColor {
    DynamicColor::new("inverse_primary", |s| s.primary_palette(), |s| by_mode(s, 40.0, 80.0))
        .with_background(|_| inverse_surface())
        .with_contrast_curve(ContrastCurve::ACCENT)
}

// --------------------------------------------------------------------------------------------------------------------
// Secondary

fn secondary_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(
        secondary_container(),
        secondary(),
        10.0,
        TonePolarity::Nearer,
        false,
    )
}

fn secondary() -> DynamicColor {
    DynamicColor::new("secondary", |s| s.secondary_palette(), |s| by_mode(s, 80.0, 40.0))
        .as_background()
        .with_background(highest_surface)
        .with_contrast_curve(ContrastCurve::ACCENT)
        .with_tone_delta_pair(secondary_pair)
}

fn on_secondary() -> DynamicColor {
    DynamicColor::new(
        "on_secondary",
        |s| s.secondary_palette(),
        |s| {
            if s.is_monochrome() {
                by_mode(s, 10.0, 100.0)
            } else {
                by_mode(s, 20.0, 100.0)
            }
        },
    )
    .with_background(|_| secondary())
    .with_contrast_curve(ContrastCurve::ON_ACCENT)
}

fn secondary_container() -> DynamicColor {
    DynamicColor::new(
        "secondary_container",
        |s| s.secondary_palette(),
        |s| {
            let initial = by_mode(s, 30.0, 90.0);
            if s.is_monochrome() {
                by_mode(s, 30.0, 85.0)
            } else if !s.is_fidelity() {
                initial
            } else {
                let palette = s.secondary_palette();
                find_desired_chroma_by_tone(palette.hue(), palette.chroma(), initial, !s.is_dark())
            }
        },
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::CONTAINER)
    .with_tone_delta_pair(secondary_pair)
}

fn on_secondary_container() -> DynamicColor {
    DynamicColor::new(
        "on_secondary_container",
        |s| s.secondary_palette(),
        |s| {
            if s.is_monochrome() {
                by_mode(s, 90.0, 10.0)
            } else if !s.is_fidelity() {
                by_mode(s, 90.0, 30.0)
            } else {
                DynamicColor::foreground_tone(secondary_container().raw_tone(s), 4.5)
            }
        },
    )
    .with_background(|_| secondary_container())
    .with_contrast_curve(ContrastCurve::ON_CONTAINER)
}

// --------------------------------------------------------------------------------------------------------------------
// Tertiary

fn tertiary_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(
        tertiary_container(),
        tertiary(),
        10.0,
        TonePolarity::Nearer,
        false,
    )
}

fn tertiary() -> DynamicColor {
    DynamicColor::new(
        "tertiary",
        |s| s.tertiary_palette(),
        |s| {
            if s.is_monochrome() {
                by_mode(s, 90.0, 25.0)
            } else {
                by_mode(s, 80.0, 40.0)
            }
        },
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::ACCENT)
    .with_tone_delta_pair(tertiary_pair)
}

fn on_tertiary() -> DynamicColor {
    DynamicColor::new(
        "on_tertiary",
        |s| s.tertiary_palette(),
        |s| {
            if s.is_monochrome() {
                by_mode(s, 10.0, 90.0)
            } else {
                by_mode(s, 20.0, 100.0)
            }
        },
    )
    .with_background(|_| tertiary())
    .with_contrast_curve(ContrastCurve::ON_ACCENT)
}

fn tertiary_container() -> DynamicColor {
    DynamicColor::new(
        "tertiary_container",
        |s| s.tertiary_palette(),
        |s| {
            if s.is_monochrome() {
                by_mode(s, 60.0, 49.0)
            } else if !s.is_fidelity() {
                by_mode(s, 30.0, 90.0)
            } else {
                let proposed = s.tertiary_palette().hct(s.source_color_hct().tone());
                fix_if_disliked(proposed).tone()
            }
        },
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::CONTAINER)
    .with_tone_delta_pair(tertiary_pair)
}

fn on_tertiary_container() -> DynamicColor {
    DynamicColor::new(
        "on_tertiary_container",
        |s| s.tertiary_palette(),
        |s| {
            if s.is_monochrome() {
                by_mode(s, 0.0, 100.0)
            } else if !s.is_fidelity() {
                by_mode(s, 90.0, 30.0)
            } else {
                DynamicColor::foreground_tone(tertiary_container().raw_tone(s), 4.5)
            }
        },
    )
    .with_background(|_| tertiary_container())
    .with_contrast_curve(ContrastCurve::ON_CONTAINER)
}

// --------------------------------------------------------------------------------------------------------------------
// Error

fn error_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(
        error_container(),
        error(),
        10.0,
        TonePolarity::Nearer,
        false,
    )
}

fn error() -> DynamicColor {
    DynamicColor::new("error", |s| s.error_palette(), |s| by_mode(s, 80.0, 40.0))
        .as_background()
        .with_background(highest_surface)
        .with_contrast_curve(ContrastCurve::ACCENT)
        .with_tone_delta_pair(error_pair)
}

fn on_error() -> DynamicColor {
    DynamicColor::new("on_error", |s| s.error_palette(), |s| by_mode(s, 20.0, 100.0))
        .with_background(|_| error())
        .with_contrast_curve(ContrastCurve::ON_ACCENT)
}

fn error_container() -> DynamicColor {
    DynamicColor::new("error_container", |s| s.error_palette(), |s| by_mode(s, 30.0, 90.0))
        .as_background()
        .with_background(highest_surface)
        .with_contrast_curve(ContrastCurve::CONTAINER)
        .with_tone_delta_pair(error_pair)
}

fn on_error_container() -> DynamicColor {
    DynamicColor::new(
        "on_error_container",
        |s| s.error_palette(),
        |s| {
            if s.is_monochrome() {
                by_mode(s, 90.0, 10.0)
            } else {
                by_mode(s, 90.0, 30.0)
            }
        },
    )
    .with_background(|_| error_container())
    .with_contrast_curve(ContrastCurve::ON_CONTAINER)
}

// --------------------------------------------------------------------------------------------------------------------
// Fixed accents, which keep their tones in dark mode

fn primary_fixed_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(
        primary_fixed(),
        primary_fixed_dim(),
        10.0,
        TonePolarity::Lighter,
        true,
    )
}

fn primary_fixed() -> DynamicColor {
    DynamicColor::new("primary_fixed", |s| s.primary_palette(), |s| by_monochrome(s, 40.0, 90.0))
        .as_background()
        .with_background(highest_surface)
        .with_contrast_curve(ContrastCurve::CONTAINER)
        .with_tone_delta_pair(primary_fixed_pair)
}

fn primary_fixed_dim() -> DynamicColor {
    DynamicColor::new(
        "primary_fixed_dim",
        |s| s.primary_palette(),
        |s| by_monochrome(s, 30.0, 80.0),
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::CONTAINER)
    .with_tone_delta_pair(primary_fixed_pair)
}

fn on_primary_fixed() -> DynamicColor {
    DynamicColor::new(
        "on_primary_fixed",
        |s| s.primary_palette(),
        |s| by_monochrome(s, 100.0, 10.0),
    )
    .with_background(|_| primary_fixed_dim())
    .with_second_background(|_| primary_fixed())
    .with_contrast_curve(ContrastCurve::ON_ACCENT)
}

fn on_primary_fixed_variant() -> DynamicColor {
    DynamicColor::new(
        "on_primary_fixed_variant",
        |s| s.primary_palette(),
        |s| by_monochrome(s, 90.0, 30.0),
    )
    .with_background(|_| primary_fixed_dim())
    .with_second_background(|_| primary_fixed())
    .with_contrast_curve(ContrastCurve::ON_CONTAINER)
}

fn secondary_fixed_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(
        secondary_fixed(),
        secondary_fixed_dim(),
        10.0,
        TonePolarity::Lighter,
        true,
    )
}

fn secondary_fixed() -> DynamicColor {
    DynamicColor::new(
        "secondary_fixed",
        |s| s.secondary_palette(),
        |s| by_monochrome(s, 80.0, 90.0),
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::CONTAINER)
    .with_tone_delta_pair(secondary_fixed_pair)
}

fn secondary_fixed_dim() -> DynamicColor {
    DynamicColor::new(
        "secondary_fixed_dim",
        |s| s.secondary_palette(),
        |s| by_monochrome(s, 70.0, 80.0),
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::CONTAINER)
    .with_tone_delta_pair(secondary_fixed_pair)
}

fn on_secondary_fixed() -> DynamicColor {
    DynamicColor::new("on_secondary_fixed", |s| s.secondary_palette(), |_| 10.0)
        .with_background(|_| secondary_fixed_dim())
        .with_second_background(|_| secondary_fixed())
        .with_contrast_curve(ContrastCurve::ON_ACCENT)
}

fn on_secondary_fixed_variant() -> DynamicColor {
    DynamicColor::new(
        "on_secondary_fixed_variant",
        |s| s.secondary_palette(),
        |s| by_monochrome(s, 25.0, 30.0),
    )
    .with_background(|_| secondary_fixed_dim())
    .with_second_background(|_| secondary_fixed())
    .with_contrast_curve(ContrastCurve::ON_CONTAINER)
}

fn tertiary_fixed_pair(_: &DynamicScheme) -> ToneDeltaPair {
    ToneDeltaPair::new(
        tertiary_fixed(),
        tertiary_fixed_dim(),
        10.0,
        TonePolarity::Lighter,
        true,
    )
}

fn tertiary_fixed() -> DynamicColor {
    DynamicColor::new(
        "tertiary_fixed",
        |s| s.tertiary_palette(),
        |s| by_monochrome(s, 40.0, 90.0),
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::CONTAINER)
    .with_tone_delta_pair(tertiary_fixed_pair)
}

fn tertiary_fixed_dim() -> DynamicColor {
    DynamicColor::new(
        "tertiary_fixed_dim",
        |s| s.tertiary_palette(),
        |s| by_monochrome(s, 30.0, 80.0),
    )
    .as_background()
    .with_background(highest_surface)
    .with_contrast_curve(ContrastCurve::CONTAINER)
    .with_tone_delta_pair(tertiary_fixed_pair)
}

fn on_tertiary_fixed() -> DynamicColor {
    DynamicColor::new(
        "on_tertiary_fixed",
        |s| s.tertiary_palette(),
        |s| by_monochrome(s, 100.0, 10.0),
    )
    .with_background(|_| tertiary_fixed_dim())
    .with_second_background(|_| tertiary_fixed())
    .with_contrast_curve(ContrastCurve::ON_ACCENT)
}

fn on_tertiary_fixed_variant() -> DynamicColor {
    DynamicColor::new(
        "on_tertiary_fixed_variant",
        |s| s.tertiary_palette(),
        |s| by_monochrome(s, 90.0, 30.0),
    )
    .with_background(|_| tertiary_fixed_dim())
    .with_second_background(|_| tertiary_fixed())
    .with_contrast_curve(ContrastCurve::ON_CONTAINER)
}

// --------------------------------------------------------------------------------------------------------------------
// Legacy platform roles

fn control_activated() -> DynamicColor {
    DynamicColor::new("control_activated", |s| s.primary_palette(), |s| by_mode(s, 30.0, 90.0))
}

fn control_normal() -> DynamicColor {
    DynamicColor::new(
        "control_normal",
        |s| s.neutral_variant_palette(),
        |s| by_mode(s, 80.0, 30.0),
    )
}

fn control_highlight() -> DynamicColor {
    DynamicColor::new(
        "control_highlight",
        |s| s.neutral_palette(),
        |s| by_mode(s, 100.0, 0.0),
    )
    .with_opacity(|s| by_mode(s, 0.20, 0.12))
}

fn text_primary_inverse() -> DynamicColor {
    DynamicColor::new(
        "text_primary_inverse",
        |s| s.neutral_palette(),
        |s| by_mode(s, 10.0, 90.0),
    )
}

fn text_secondary_and_tertiary_inverse() -> DynamicColor {
    DynamicColor::new(
        "text_secondary_and_tertiary_inverse",
        |s| s.neutral_variant_palette(),
        |s| by_mode(s, 30.0, 80.0),
    )
}

fn text_primary_inverse_disable_only() -> DynamicColor {
    DynamicColor::new(
        "text_primary_inverse_disable_only",
        |s| s.neutral_palette(),
        |s| by_mode(s, 10.0, 90.0),
    )
}

fn text_secondary_and_tertiary_inverse_disabled() -> DynamicColor {
    DynamicColor::new(
        "text_secondary_and_tertiary_inverse_disabled",
        |s| s.neutral_palette(),
        |s| by_mode(s, 10.0, 90.0),
    )
}

fn text_hint_inverse() -> DynamicColor {
    DynamicColor::new("text_hint_inverse", |s| s.neutral_palette(), |s| by_mode(s, 10.0, 90.0))
}

// ====================================================================================================================

macro_rules! material_roles {
    ($($variant:ident => $recipe:ident,)*) => {
        /// A Material color role.
        ///
        /// Every role has a recipe, a stable snake_case name, and can be looked
        /// up by that name.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum MaterialRole {
            $($variant,)*
        }

        impl MaterialRole {
            /// All color roles in canonical order.
            pub const ALL: &'static [MaterialRole] = &[$(MaterialRole::$variant,)*];

            /// Get this role's snake_case name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(MaterialRole::$variant => stringify!($recipe),)*
                }
            }

            /// Get this role's recipe.
            pub fn recipe(&self) -> DynamicColor {
                match self {
                    $(MaterialRole::$variant => $recipe(),)*
                }
            }
        }
    };
}

material_roles! {
    PrimaryPaletteKeyColor => primary_palette_key_color,
    SecondaryPaletteKeyColor => secondary_palette_key_color,
    TertiaryPaletteKeyColor => tertiary_palette_key_color,
    NeutralPaletteKeyColor => neutral_palette_key_color,
    NeutralVariantPaletteKeyColor => neutral_variant_palette_key_color,
    Background => background,
    OnBackground => on_background,
    Surface => surface,
    SurfaceDim => surface_dim,
    SurfaceBright => surface_bright,
    SurfaceContainerLowest => surface_container_lowest,
    SurfaceContainerLow => surface_container_low,
    SurfaceContainer => surface_container,
    SurfaceContainerHigh => surface_container_high,
    SurfaceContainerHighest => surface_container_highest,
    OnSurface => on_surface,
    SurfaceVariant => surface_variant,
    OnSurfaceVariant => on_surface_variant,
    InverseSurface => inverse_surface,
    InverseOnSurface => inverse_on_surface,
    Outline => outline,
    OutlineVariant => outline_variant,
    Shadow => shadow,
    Scrim => scrim,
    SurfaceTint => surface_tint,
    Primary => primary,
    OnPrimary => on_primary,
    PrimaryContainer => primary_container,
    OnPrimaryContainer => on_primary_container,
    InversePrimary => inverse_primary,
    Secondary => secondary,
    OnSecondary => on_secondary,
    SecondaryContainer => secondary_container,
    OnSecondaryContainer => on_secondary_container,
    Tertiary => tertiary,
    OnTertiary => on_tertiary,
    TertiaryContainer => tertiary_container,
    OnTertiaryContainer => on_tertiary_container,
    Error => error,
    OnError => on_error,
    ErrorContainer => error_container,
    OnErrorContainer => on_error_container,
    PrimaryFixed => primary_fixed,
    PrimaryFixedDim => primary_fixed_dim,
    OnPrimaryFixed => on_primary_fixed,
    OnPrimaryFixedVariant => on_primary_fixed_variant,
    SecondaryFixed => secondary_fixed,
    SecondaryFixedDim => secondary_fixed_dim,
    OnSecondaryFixed => on_secondary_fixed,
    OnSecondaryFixedVariant => on_secondary_fixed_variant,
    TertiaryFixed => tertiary_fixed,
    TertiaryFixedDim => tertiary_fixed_dim,
    OnTertiaryFixed => on_tertiary_fixed,
    OnTertiaryFixedVariant => on_tertiary_fixed_variant,
    ControlActivated => control_activated,
    ControlNormal => control_normal,
    ControlHighlight => control_highlight,
    TextPrimaryInverse => text_primary_inverse,
    TextSecondaryAndTertiaryInverse => text_secondary_and_tertiary_inverse,
    TextPrimaryInverseDisableOnly => text_primary_inverse_disable_only,
    TextSecondaryAndTertiaryInverseDisabled => text_secondary_and_tertiary_inverse_disabled,
    TextHintInverse => text_hint_inverse,
}

impl std::fmt::Display for MaterialRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MaterialRole {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialRole::ALL
            .iter()
            .find(|role| role.name() == s)
            .copied()
            .ok_or_else(|| UnknownRoleError::new(s))
    }
}

impl TryFrom<&str> for MaterialRole {
    type Error = UnknownRoleError;

    fn try_from(value: &str) -> Result<Self, UnknownRoleError> {
        value.parse()
    }
}

#[cfg(test)]
mod test {
    use super::{find_desired_chroma_by_tone, MaterialRole};
    use crate::dynamic::{DynamicScheme, Variant};
    use crate::error::UnknownRoleError;
    use crate::Hct;
    use std::collections::HashSet;

    #[test]
    fn test_names() {
        assert_eq!(MaterialRole::ALL.len(), 62);

        let names: HashSet<&str> = MaterialRole::ALL.iter().map(|role| role.name()).collect();
        assert_eq!(names.len(), MaterialRole::ALL.len());

        for role in MaterialRole::ALL {
            assert_eq!(role.recipe().name(), role.name());
            assert_eq!(role.name().parse::<MaterialRole>(), Ok(*role));
        }

        assert_eq!(MaterialRole::OnPrimaryContainer.to_string(), "on_primary_container");
        assert_eq!(
            MaterialRole::try_from("primery"),
            Err(UnknownRoleError::new("primery"))
        );
    }

    #[test]
    fn test_backgrounds() {
        assert!(MaterialRole::Surface.recipe().is_background());
        assert!(MaterialRole::PrimaryContainer.recipe().is_background());
        assert!(!MaterialRole::InverseSurface.recipe().is_background());
        assert!(!MaterialRole::OnSurface.recipe().is_background());
    }

    #[test]
    fn test_background_chains_are_short() {
        let scheme = DynamicScheme::new(Hct::from_argb(0xff47_5d92), Variant::TonalSpot, true, 0.0);

        for role in MaterialRole::ALL {
            let mut depth = 0;
            let mut current = role.recipe().background(&scheme);
            while let Some(background) = current {
                depth += 1;
                assert!(depth <= 3, "{} has a long background chain", role);
                current = background.background(&scheme);
            }
        }
    }

    #[test]
    fn test_desired_chroma() {
        // Achievable chroma means at most one step, since solved colors may
        // fall a hair short of the requested chroma.
        let tone = find_desired_chroma_by_tone(270.0, 10.0, 50.0, true);
        assert!((49.0..=50.0).contains(&tone), "tone {} should barely move", tone);
        assert_eq!(find_desired_chroma_by_tone(270.0, 0.0, 50.0, true), 50.0);

        // Yellows only reach high chroma at high tones.
        let tone = find_desired_chroma_by_tone(100.0, 70.0, 30.0, false);
        assert!(30.0 < tone && tone <= 100.0, "tone {} should be lighter", tone);

        // Stop at black.
        let tone = find_desired_chroma_by_tone(100.0, 150.0, 3.0, true);
        assert!((0.0..=3.0).contains(&tone), "tone {} out of bounds", tone);
    }
}
