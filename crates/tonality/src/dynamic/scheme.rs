use super::{variant_to_palettes, DynamicColor, MaterialRole, Variant};
use crate::core::sanitize_degrees;
use crate::{Float, Hct, TonalPalette};

/// A dynamic color scheme.
///
/// A scheme combines a source color with a variant, dark or light mode, and a
/// contrast level. The variant determines five key palettes. Together with a
/// fixed error palette, they are the palettes all color roles draw from. The
/// scheme is immutable and resolves roles on demand, without caching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicScheme {
    source_color_hct: Hct,
    variant: Variant,
    is_dark: bool,
    contrast_level: Float,
    primary_palette: TonalPalette,
    secondary_palette: TonalPalette,
    tertiary_palette: TonalPalette,
    neutral_palette: TonalPalette,
    neutral_variant_palette: TonalPalette,
    error_palette: TonalPalette,
}

impl DynamicScheme {
    /// Create a new dynamic scheme.
    ///
    /// The contrast level is clamped to `-1..=1`, with 0 the default, 0.5
    /// medium, and 1 high contrast. Negative levels decrease contrast.
    pub fn new(source_color_hct: Hct, variant: Variant, is_dark: bool, contrast_level: Float) -> Self {
        let contrast_level = if contrast_level.is_nan() {
            0.0
        } else {
            contrast_level.clamp(-1.0, 1.0)
        };
        let palettes = variant_to_palettes(variant, &source_color_hct);

        log::debug!(
            "created {} {} scheme for {} at contrast level {}",
            if is_dark { "dark" } else { "light" },
            variant,
            source_color_hct,
            contrast_level
        );

        Self {
            source_color_hct,
            variant,
            is_dark,
            contrast_level,
            primary_palette: palettes.primary,
            secondary_palette: palettes.secondary,
            tertiary_palette: palettes.tertiary,
            neutral_palette: palettes.neutral,
            neutral_variant_palette: palettes.neutral_variant,
            error_palette: TonalPalette::from_hue_and_chroma(25.0, 84.0),
        }
    }

    /// Create a new dynamic scheme for the ARGB source color.
    pub fn from_argb(source: u32, variant: Variant, is_dark: bool, contrast_level: Float) -> Self {
        Self::new(Hct::from_argb(source), variant, is_dark, contrast_level)
    }

    /// Rotate the source color's hue.
    ///
    /// With a single rotation, this function rotates the hue by that amount.
    /// Otherwise, it finds the range between adjacent hues that strictly
    /// contains the source hue and rotates by the corresponding amount. If no
    /// range contains the hue, it is returned unchanged.
    pub fn rotated_hue(source: &Hct, hues: &[Float], rotations: &[Float]) -> Float {
        let hue = source.hue();
        if rotations.len() == 1 {
            return sanitize_degrees(hue + rotations[0]);
        }

        hues.windows(2)
            .zip(rotations)
            .find(|(range, _)| range[0] < hue && hue < range[1])
            .map_or(hue, |(_, rotation)| sanitize_degrees(hue + rotation))
    }

    pub fn source_color_hct(&self) -> Hct {
        self.source_color_hct
    }

    pub fn source_color_argb(&self) -> u32 {
        self.source_color_hct.argb()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn contrast_level(&self) -> Float {
        self.contrast_level
    }

    /// Determine whether this scheme reduces contrast below the default.
    pub fn is_decreasing_contrast(&self) -> bool {
        self.contrast_level < 0.0
    }

    /// Determine whether this scheme is monochrome.
    pub fn is_monochrome(&self) -> bool {
        self.variant == Variant::Monochrome
    }

    /// Determine whether this scheme stays true to the source color.
    pub fn is_fidelity(&self) -> bool {
        matches!(self.variant, Variant::Fidelity | Variant::Content)
    }

    pub fn primary_palette(&self) -> TonalPalette {
        self.primary_palette
    }

    pub fn secondary_palette(&self) -> TonalPalette {
        self.secondary_palette
    }

    pub fn tertiary_palette(&self) -> TonalPalette {
        self.tertiary_palette
    }

    pub fn neutral_palette(&self) -> TonalPalette {
        self.neutral_palette
    }

    pub fn neutral_variant_palette(&self) -> TonalPalette {
        self.neutral_variant_palette
    }

    pub fn error_palette(&self) -> TonalPalette {
        self.error_palette
    }

    /// Resolve the dynamic color to its tone and ARGB color.
    pub fn resolve(&self, color: &DynamicColor) -> (Float, u32) {
        (color.tone(self), color.argb(self))
    }

    /// Resolve the role to its ARGB color.
    pub fn argb(&self, role: MaterialRole) -> u32 {
        role.recipe().argb(self)
    }

    /// Resolve the role to its HCT color.
    pub fn hct(&self, role: MaterialRole) -> Hct {
        role.recipe().hct(self)
    }

    /// Resolve the role to its tone.
    pub fn tone(&self, role: MaterialRole) -> Float {
        role.recipe().tone(self)
    }
}

/// Resolve the dynamic color against the scheme, returning its tone and ARGB
/// color.
pub fn resolve_role(color: &DynamicColor, scheme: &DynamicScheme) -> (Float, u32) {
    scheme.resolve(color)
}

/// Build a dynamic scheme for the ARGB source color.
pub fn build_scheme(source: u32, variant: Variant, is_dark: bool, contrast_level: Float) -> DynamicScheme {
    DynamicScheme::from_argb(source, variant, is_dark, contrast_level)
}

// ====================================================================================================================

macro_rules! color_scheme {
    ($($field:ident => $role:ident,)*) => {
        /// A color scheme with the 36 color roles used by user interface
        /// toolkits, resolved to ARGB colors.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct ColorScheme {
            $(pub $field: u32,)*
        }

        impl ColorScheme {
            /// The roles of a color scheme in field order.
            pub const ROLES: [MaterialRole; 36] = [$(MaterialRole::$role,)*];

            /// Resolve all roles of the dynamic scheme.
            pub fn new(scheme: &DynamicScheme) -> Self {
                Self {
                    $($field: scheme.argb(MaterialRole::$role),)*
                }
            }

            /// Get the roles and their colors in field order.
            pub fn entries(&self) -> [(MaterialRole, u32); 36] {
                [$((MaterialRole::$role, self.$field),)*]
            }
        }
    };
}

color_scheme! {
    primary => Primary,
    on_primary => OnPrimary,
    primary_container => PrimaryContainer,
    on_primary_container => OnPrimaryContainer,
    secondary => Secondary,
    on_secondary => OnSecondary,
    secondary_container => SecondaryContainer,
    on_secondary_container => OnSecondaryContainer,
    tertiary => Tertiary,
    on_tertiary => OnTertiary,
    tertiary_container => TertiaryContainer,
    on_tertiary_container => OnTertiaryContainer,
    error => Error,
    on_error => OnError,
    error_container => ErrorContainer,
    on_error_container => OnErrorContainer,
    background => Background,
    on_background => OnBackground,
    surface => Surface,
    on_surface => OnSurface,
    surface_variant => SurfaceVariant,
    on_surface_variant => OnSurfaceVariant,
    outline => Outline,
    outline_variant => OutlineVariant,
    shadow => Shadow,
    scrim => Scrim,
    inverse_surface => InverseSurface,
    inverse_on_surface => InverseOnSurface,
    inverse_primary => InversePrimary,
    surface_bright => SurfaceBright,
    surface_dim => SurfaceDim,
    surface_container => SurfaceContainer,
    surface_container_high => SurfaceContainerHigh,
    surface_container_highest => SurfaceContainerHighest,
    surface_container_low => SurfaceContainerLow,
    surface_container_lowest => SurfaceContainerLowest,
}

impl From<&DynamicScheme> for ColorScheme {
    fn from(scheme: &DynamicScheme) -> Self {
        Self::new(scheme)
    }
}

#[cfg(test)]
mod test {
    use super::{build_scheme, resolve_role, ColorScheme, DynamicScheme};
    use crate::core::{assert_within, lstar_from_argb, ratio_of_tones};
    use crate::dynamic::{MaterialRole, Variant};
    use crate::Hct;

    #[test]
    fn test_rotated_hue() {
        let hues = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
        let rotations = [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];

        let source = Hct::new(50.0, 40.0, 50.0);
        let rotated = DynamicScheme::rotated_hue(&source, &hues, &rotations);
        assert_within!(rotated, source.hue() + 15.0, 1e-9);

        let single = DynamicScheme::rotated_hue(&Hct::new(350.0, 40.0, 50.0), &hues, &[20.0]);
        assert!(single < 20.0, "hue {} should wrap around", single);

        // Hues on a boundary are not rotated.
        let red = Hct::from_argb(0xffff_0000);
        let boundary = [0.0, red.hue(), 360.0];
        assert_eq!(DynamicScheme::rotated_hue(&red, &boundary, &[10.0, 20.0, 30.0]), red.hue());
    }

    #[test]
    fn test_contrast_level_is_clamped() {
        let scheme = build_scheme(0xff47_5d92, Variant::TonalSpot, false, 3.0);
        assert_eq!(scheme.contrast_level(), 1.0);
        let scheme = build_scheme(0xff47_5d92, Variant::TonalSpot, false, -3.0);
        assert_eq!(scheme.contrast_level(), -1.0);
        assert!(scheme.is_decreasing_contrast());
    }

    #[test]
    fn test_light_tonal_spot() {
        let scheme = build_scheme(0xff47_5d92, Variant::TonalSpot, false, 0.0);
        assert_within!(scheme.tone(MaterialRole::Primary), 40.0, 1e-9);
        assert_within!(scheme.tone(MaterialRole::PrimaryContainer), 90.0, 1e-9);
        assert_within!(scheme.tone(MaterialRole::OnPrimary), 100.0, 1e-9);
        assert_within!(scheme.tone(MaterialRole::Surface), 98.0, 1e-9);
        assert_within!(scheme.tone(MaterialRole::OnSurface), 10.0, 1e-9);
        assert_eq!(scheme.argb(MaterialRole::OnPrimary), 0xffff_ffff);
        assert_eq!(scheme.argb(MaterialRole::Shadow), 0xff00_0000);
    }

    #[test]
    fn test_dark_tonal_spot() {
        let scheme = build_scheme(0xff47_5d92, Variant::TonalSpot, true, 0.0);
        assert_within!(scheme.tone(MaterialRole::Primary), 80.0, 1e-9);
        assert_within!(scheme.tone(MaterialRole::PrimaryContainer), 30.0, 1e-9);
        assert_within!(scheme.tone(MaterialRole::Surface), 6.0, 1e-9);
        assert_within!(scheme.tone(MaterialRole::OnSurface), 90.0, 1e-9);
    }

    #[test]
    fn test_monochrome() {
        let scheme = build_scheme(0xff00_00ff, Variant::Monochrome, false, 0.0);
        assert_eq!(scheme.argb(MaterialRole::Primary), 0xff00_0000);
        let scheme = build_scheme(0xff00_00ff, Variant::Monochrome, true, 0.0);
        assert_eq!(scheme.argb(MaterialRole::Primary), 0xffff_ffff);
        for role in [MaterialRole::Secondary, MaterialRole::Tertiary, MaterialRole::Surface] {
            assert!(scheme.hct(role).chroma() < 3.0, "{} is not gray", role);
        }
    }

    #[test]
    fn test_fidelity_keeps_source_tone() {
        let source = 0xffe8_a87c;
        let scheme = build_scheme(source, Variant::Fidelity, false, 0.0);
        let container = scheme.tone(MaterialRole::PrimaryContainer);
        assert_within!(container, lstar_from_argb(source), 1e-9);
    }

    #[test]
    fn test_every_variant_resolves() {
        for variant in Variant::ALL {
            for is_dark in [false, true] {
                for level in [-1.0, 0.0, 1.0] {
                    let scheme = build_scheme(0xffbd_5a3c, variant, is_dark, level);
                    for role in MaterialRole::ALL {
                        let (tone, argb) = resolve_role(&role.recipe(), &scheme);
                        assert!((0.0..=100.0).contains(&tone), "{} has tone {}", role, tone);
                        if *role != MaterialRole::ControlHighlight {
                            assert_eq!(argb >> 24, 0xff);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_color_scheme() {
        let dynamic = build_scheme(0xff47_5d92, Variant::TonalSpot, false, 0.0);
        let scheme = ColorScheme::from(&dynamic);
        assert_eq!(scheme.primary, dynamic.argb(MaterialRole::Primary));
        assert_eq!(scheme.surface_container_lowest, 0xffff_ffff);

        for (role, argb) in scheme.entries() {
            assert_eq!(argb, dynamic.argb(role));
        }

        let on_surface = lstar_from_argb(scheme.on_surface);
        let surface = lstar_from_argb(scheme.surface);
        assert!(4.5 <= ratio_of_tones(on_surface, surface));
    }
}
