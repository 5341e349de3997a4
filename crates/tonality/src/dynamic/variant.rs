//! Scheme variants and their palettes.

use crate::core::sanitize_degrees;
use crate::dynamic::DynamicScheme;
use crate::error::UnknownVariantError;
use crate::{fix_if_disliked, Float, Hct, TemperatureCache, TonalPalette};

/// A scheme variant.
///
/// A variant determines how the five key palettes of a scheme derive from
/// the source color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// All palettes are grayscale.
    Monochrome,
    /// Close to grayscale, with a hint of chroma.
    Neutral,
    /// Pastel tokens with low chroma, the default.
    #[default]
    TonalSpot,
    /// A maximally colorful primary palette, with rotated secondary and
    /// tertiary hues.
    Vibrant,
    /// A primary palette that departs from the source hue.
    Expressive,
    /// Palettes that stay true to the source color, including its chroma.
    Fidelity,
    /// Like fidelity, but with an analogous tertiary palette.
    Content,
    /// A playful theme with grayscale neutrals.
    Rainbow,
    /// A playful theme with rotated primary and secondary hues.
    FruitSalad,
}

impl Variant {
    /// All variants.
    pub const ALL: [Variant; 9] = [
        Variant::Monochrome,
        Variant::Neutral,
        Variant::TonalSpot,
        Variant::Vibrant,
        Variant::Expressive,
        Variant::Fidelity,
        Variant::Content,
        Variant::Rainbow,
        Variant::FruitSalad,
    ];

    /// Get this variant's name.
    pub fn name(&self) -> &'static str {
        use Variant::*;

        match self {
            Monochrome => "monochrome",
            Neutral => "neutral",
            TonalSpot => "tonal_spot",
            Vibrant => "vibrant",
            Expressive => "expressive",
            Fidelity => "fidelity",
            Content => "content",
            Rainbow => "rainbow",
            FruitSalad => "fruit_salad",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Variant {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .iter()
            .find(|variant| variant.name() == s)
            .copied()
            .ok_or_else(|| UnknownVariantError::new(s))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The five key palettes of a scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palettes {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
}

const VIBRANT_HUES: [Float; 9] = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
const VIBRANT_SECONDARY_ROTATIONS: [Float; 9] = [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];
const VIBRANT_TERTIARY_ROTATIONS: [Float; 9] = [35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0];

const EXPRESSIVE_HUES: [Float; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
const EXPRESSIVE_SECONDARY_ROTATIONS: [Float; 9] =
    [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
const EXPRESSIVE_TERTIARY_ROTATIONS: [Float; 9] =
    [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0];

/// Derive the five key palettes for the variant from the source color.
pub fn variant_to_palettes(variant: Variant, source: &Hct) -> Palettes {
    use Variant::*;

    let hue = source.hue();
    let chroma = source.chroma();
    let palette = TonalPalette::from_hue_and_chroma;
    let rotated = |hues: &[Float], rotations: &[Float]| DynamicScheme::rotated_hue(source, hues, rotations);

    match variant {
        Monochrome => Palettes {
            primary: palette(hue, 0.0),
            secondary: palette(hue, 0.0),
            tertiary: palette(hue, 0.0),
            neutral: palette(hue, 0.0),
            neutral_variant: palette(hue, 0.0),
        },
        Neutral => Palettes {
            primary: palette(hue, 12.0),
            secondary: palette(hue, 8.0),
            tertiary: palette(hue, 16.0),
            neutral: palette(hue, 2.0),
            neutral_variant: palette(hue, 2.0),
        },
        TonalSpot => Palettes {
            primary: palette(hue, 36.0),
            secondary: palette(hue, 16.0),
            tertiary: palette(sanitize_degrees(hue + 60.0), 24.0),
            neutral: palette(hue, 6.0),
            neutral_variant: palette(hue, 8.0),
        },
        Vibrant => Palettes {
            primary: palette(hue, 200.0),
            secondary: palette(rotated(&VIBRANT_HUES, &VIBRANT_SECONDARY_ROTATIONS), 24.0),
            tertiary: palette(rotated(&VIBRANT_HUES, &VIBRANT_TERTIARY_ROTATIONS), 32.0),
            neutral: palette(hue, 10.0),
            neutral_variant: palette(hue, 12.0),
        },
        Expressive => Palettes {
            primary: palette(sanitize_degrees(hue + 240.0), 40.0),
            secondary: palette(
                rotated(&EXPRESSIVE_HUES, &EXPRESSIVE_SECONDARY_ROTATIONS),
                24.0,
            ),
            tertiary: palette(
                rotated(&EXPRESSIVE_HUES, &EXPRESSIVE_TERTIARY_ROTATIONS),
                32.0,
            ),
            neutral: palette(sanitize_degrees(hue + 15.0), 8.0),
            neutral_variant: palette(sanitize_degrees(hue + 15.0), 12.0),
        },
        Fidelity | Content => {
            let cache = TemperatureCache::new(*source);
            let tertiary = if variant == Fidelity {
                cache.complement()
            } else {
                let analogous = cache.analogous(3, 6);
                analogous.get(2).copied().unwrap_or(*source)
            };

            Palettes {
                primary: palette(hue, chroma),
                secondary: palette(hue, (chroma - 32.0).max(chroma * 0.5)),
                tertiary: TonalPalette::from_hct(fix_if_disliked(tertiary)),
                neutral: palette(hue, chroma / 8.0),
                neutral_variant: palette(hue, chroma / 8.0 + 4.0),
            }
        }
        Rainbow => Palettes {
            primary: palette(hue, 48.0),
            secondary: palette(hue, 16.0),
            tertiary: palette(sanitize_degrees(hue + 60.0), 24.0),
            neutral: palette(hue, 0.0),
            neutral_variant: palette(hue, 0.0),
        },
        FruitSalad => Palettes {
            primary: palette(sanitize_degrees(hue - 50.0), 48.0),
            secondary: palette(sanitize_degrees(hue - 50.0), 36.0),
            tertiary: palette(hue, 36.0),
            neutral: palette(hue, 10.0),
            neutral_variant: palette(hue, 16.0),
        },
    }
}

#[cfg(test)]
mod test {
    use super::{variant_to_palettes, Variant};
    use crate::core::assert_within;
    use crate::Hct;

    #[test]
    fn test_names() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
        }
        assert_eq!(Variant::default(), Variant::TonalSpot);
        assert!("spotty".parse::<Variant>().is_err());
    }

    #[test]
    fn test_tonal_spot() {
        let source = Hct::from_argb(0xff00_00ff);
        let palettes = variant_to_palettes(Variant::TonalSpot, &source);
        assert_within!(palettes.primary.hue(), source.hue(), 1e-9);
        assert_within!(palettes.primary.chroma(), 36.0, 1e-9);
        assert_within!(palettes.tertiary.hue(), (source.hue() + 60.0) % 360.0, 1e-9);
        assert_within!(palettes.neutral.chroma(), 6.0, 1e-9);
    }

    #[test]
    fn test_vibrant_rotation() {
        // Blue's hue 282.8 falls between 251 and 301.
        let source = Hct::from_argb(0xff00_00ff);
        let palettes = variant_to_palettes(Variant::Vibrant, &source);
        assert_within!(palettes.secondary.hue(), source.hue() + 15.0, 1e-9);
        assert_within!(palettes.tertiary.hue(), source.hue() + 30.0, 1e-9);
        assert_within!(palettes.primary.chroma(), 200.0, 1e-9);
    }

    #[test]
    fn test_fidelity() {
        let source = Hct::from_argb(0xffbd_5a3c);
        let palettes = variant_to_palettes(Variant::Fidelity, &source);
        assert_within!(palettes.primary.chroma(), source.chroma(), 1e-9);
        assert_within!(
            palettes.secondary.chroma(),
            (source.chroma() - 32.0).max(source.chroma() * 0.5),
            1e-9
        );

        let palettes = variant_to_palettes(Variant::Monochrome, &source);
        assert_eq!(palettes.tertiary.chroma(), 0.0);
    }
}
