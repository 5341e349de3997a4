use super::{ContrastCurve, DynamicScheme};
use crate::core::{darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones, RATIO_MIN};
use crate::{Float, Hct, TonalPalette};

/// The maximum length of a chain of background roles.
///
/// The role graph is acyclic, with the longest background chain having length
/// three. Exceeding this limit indicates a cycle.
const MAX_BACKGROUND_DEPTH: usize = 16;

/// The polarity of a tone delta pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TonePolarity {
    /// Role A is darker than role B.
    Darker,
    /// Role A is lighter than role B.
    Lighter,
    /// Role A is closer to the background than role B.
    Nearer,
    /// Role A is further away from the background than role B.
    Farther,
}

/// A constraint between two color roles.
///
/// The tones of the two roles differ by at least `delta`, with the polarity
/// and the scheme's dark mode determining which role is nearer to the
/// background. If `stay_together` is set, both roles move together when
/// escaping the awkward zone of tones `50..60`.
#[derive(Clone, Copy, Debug)]
pub struct ToneDeltaPair {
    role_a: DynamicColor,
    role_b: DynamicColor,
    delta: Float,
    polarity: TonePolarity,
    stay_together: bool,
}

impl ToneDeltaPair {
    /// Create a new tone delta pair.
    pub fn new(
        role_a: DynamicColor,
        role_b: DynamicColor,
        delta: Float,
        polarity: TonePolarity,
        stay_together: bool,
    ) -> Self {
        Self {
            role_a,
            role_b,
            delta: delta.max(0.0),
            polarity,
            stay_together,
        }
    }

    /// Get role A.
    pub fn role_a(&self) -> &DynamicColor {
        &self.role_a
    }

    /// Get role B.
    pub fn role_b(&self) -> &DynamicColor {
        &self.role_b
    }

    /// Get the minimum tone difference.
    pub fn delta(&self) -> Float {
        self.delta
    }

    /// Get the polarity.
    pub fn polarity(&self) -> TonePolarity {
        self.polarity
    }

    /// Determine whether the roles move together.
    pub fn stay_together(&self) -> bool {
        self.stay_together
    }
}

// ====================================================================================================================

/// A dynamic color.
///
/// A dynamic color is a recipe for a color role. It selects a tonal palette
/// and a preferred tone from a [`DynamicScheme`] and optionally declares the
/// backgrounds it must contrast with, a contrast curve for the ratio, and a
/// tone delta pair. All parts are plain functions of the scheme, and
/// backgrounds are other recipes. Hence a dynamic color never holds any
/// computed state and resolving it is a pure function of the scheme.
#[derive(Clone, Copy, Debug)]
pub struct DynamicColor {
    name: &'static str,
    palette: fn(&DynamicScheme) -> TonalPalette,
    tone: fn(&DynamicScheme) -> Float,
    is_background: bool,
    background: Option<fn(&DynamicScheme) -> DynamicColor>,
    second_background: Option<fn(&DynamicScheme) -> DynamicColor>,
    contrast_curve: Option<ContrastCurve>,
    tone_delta_pair: Option<fn(&DynamicScheme) -> ToneDeltaPair>,
    opacity: Option<fn(&DynamicScheme) -> Float>,
}

impl DynamicColor {
    /// Create a new dynamic color with the given name, palette, and tone.
    pub const fn new(
        name: &'static str,
        palette: fn(&DynamicScheme) -> TonalPalette,
        tone: fn(&DynamicScheme) -> Float,
    ) -> Self {
        Self {
            name,
            palette,
            tone,
            is_background: false,
            background: None,
            second_background: None,
            contrast_curve: None,
            tone_delta_pair: None,
            opacity: None,
        }
    }

    /// Mark this dynamic color as a background for other colors.
    pub const fn as_background(mut self) -> Self {
        self.is_background = true;
        self
    }

    /// Set the background to contrast with.
    pub const fn with_background(mut self, background: fn(&DynamicScheme) -> DynamicColor) -> Self {
        self.background = Some(background);
        self
    }

    /// Set the second background to contrast with.
    pub const fn with_second_background(
        mut self,
        background: fn(&DynamicScheme) -> DynamicColor,
    ) -> Self {
        self.second_background = Some(background);
        self
    }

    /// Set the contrast curve.
    pub const fn with_contrast_curve(mut self, curve: ContrastCurve) -> Self {
        self.contrast_curve = Some(curve);
        self
    }

    /// Set the tone delta pair.
    pub const fn with_tone_delta_pair(mut self, pair: fn(&DynamicScheme) -> ToneDeltaPair) -> Self {
        self.tone_delta_pair = Some(pair);
        self
    }

    /// Set the opacity.
    pub const fn with_opacity(mut self, opacity: fn(&DynamicScheme) -> Float) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Get the name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Determine whether this dynamic color serves as background.
    pub fn is_background(&self) -> bool {
        self.is_background
    }

    /// Get the contrast curve.
    pub fn contrast_curve(&self) -> Option<ContrastCurve> {
        self.contrast_curve
    }

    /// Select the tonal palette from the scheme.
    pub fn palette(&self, scheme: &DynamicScheme) -> TonalPalette {
        (self.palette)(scheme)
    }

    /// Get the preferred tone, before accounting for contrast.
    pub fn raw_tone(&self, scheme: &DynamicScheme) -> Float {
        (self.tone)(scheme)
    }

    /// Get the background, if any.
    pub fn background(&self, scheme: &DynamicScheme) -> Option<DynamicColor> {
        self.background.map(|f| f(scheme))
    }

    /// Get the second background, if any.
    pub fn second_background(&self, scheme: &DynamicScheme) -> Option<DynamicColor> {
        self.second_background.map(|f| f(scheme))
    }

    /// Get the tone delta pair, if any.
    pub fn tone_delta_pair(&self, scheme: &DynamicScheme) -> Option<ToneDeltaPair> {
        self.tone_delta_pair.map(|f| f(scheme))
    }

    /// Resolve this dynamic color to an ARGB color, including any opacity.
    pub fn argb(&self, scheme: &DynamicScheme) -> u32 {
        let argb = self.hct(scheme).argb();
        match self.opacity {
            None => argb,
            Some(opacity) => {
                let alpha = (opacity(scheme) * 255.0).round().clamp(0.0, 255.0) as u32;
                (argb & 0x00ff_ffff) | (alpha << 24)
            }
        }
    }

    /// Resolve this dynamic color to an HCT color.
    ///
    /// The color is solved afresh from the palette at the resolved tone, so
    /// that it regains chroma when contrast pushes its tone away from the
    /// preferred one.
    pub fn hct(&self, scheme: &DynamicScheme) -> Hct {
        self.palette(scheme).hct(self.tone(scheme))
    }

    /// Resolve this dynamic color's tone.
    pub fn tone(&self, scheme: &DynamicScheme) -> Float {
        let tone = self.resolve_tone(scheme, 0);
        log::trace!("resolved {} to tone {:.2}", self.name, tone);
        tone
    }

    fn resolve_tone(&self, scheme: &DynamicScheme, depth: usize) -> Float {
        debug_assert!(
            depth < MAX_BACKGROUND_DEPTH,
            "background chain of {} is cyclic",
            self.name
        );
        if MAX_BACKGROUND_DEPTH <= depth {
            return self.raw_tone(scheme);
        }

        match self.tone_delta_pair(scheme) {
            Some(pair) => self.resolve_paired_tone(scheme, &pair, depth),
            None => self.resolve_single_tone(scheme, depth),
        }
    }

    fn resolve_paired_tone(&self, scheme: &DynamicScheme, pair: &ToneDeltaPair, depth: usize) -> Float {
        let Some(background) = self.background(scheme) else {
            return self.raw_tone(scheme);
        };
        let background_tone = background.resolve_tone(scheme, depth + 1);

        let is_dark = scheme.is_dark();
        let a_is_nearer = match pair.polarity {
            TonePolarity::Nearer => true,
            TonePolarity::Lighter => !is_dark,
            TonePolarity::Darker => is_dark,
            TonePolarity::Farther => false,
        };
        let (nearer, farther) = if a_is_nearer {
            (&pair.role_a, &pair.role_b)
        } else {
            (&pair.role_b, &pair.role_a)
        };
        let am_nearer = self.name == nearer.name;
        let expansion = if is_dark { 1.0 } else { -1.0 };
        let delta = pair.delta;

        let level = scheme.contrast_level();
        let n_contrast = nearer.desired_ratio(level);
        let f_contrast = farther.desired_ratio(level);

        // Start from tones that meet the contrast requirements.
        let mut n_tone = contrasting_tone(background_tone, nearer.raw_tone(scheme), n_contrast);
        let mut f_tone = contrasting_tone(background_tone, farther.raw_tone(scheme), f_contrast);
        if scheme.is_decreasing_contrast() {
            n_tone = Self::foreground_tone(background_tone, n_contrast);
            f_tone = Self::foreground_tone(background_tone, f_contrast);
        }

        // Enforce the delta, preferring to expand over to contract.
        if (f_tone - n_tone) * expansion < delta {
            f_tone = delta.mul_add(expansion, n_tone).clamp(0.0, 100.0);
            if (f_tone - n_tone) * expansion < delta {
                n_tone = (-delta).mul_add(expansion, f_tone).clamp(0.0, 100.0);
            }
        }

        // Avoid the awkward zone.
        let n_is_awkward = (50.0..60.0).contains(&n_tone);
        let f_is_awkward = (50.0..60.0).contains(&f_tone);
        if n_is_awkward || (f_is_awkward && pair.stay_together) {
            if 0.0 < expansion {
                n_tone = 60.0;
                f_tone = f_tone.max(delta.mul_add(expansion, n_tone));
            } else {
                n_tone = 49.0;
                f_tone = f_tone.min(delta.mul_add(expansion, n_tone));
            }
        } else if f_is_awkward {
            f_tone = if 0.0 < expansion { 60.0 } else { 49.0 };
        }

        if am_nearer {
            n_tone
        } else {
            f_tone
        }
    }

    fn resolve_single_tone(&self, scheme: &DynamicScheme, depth: usize) -> Float {
        let tone = self.raw_tone(scheme);
        let (Some(background), Some(curve)) = (self.background(scheme), self.contrast_curve) else {
            return tone;
        };

        let background_tone = background.resolve_tone(scheme, depth + 1);
        let desired = curve.get(scheme.contrast_level());

        let mut answer = if scheme.is_decreasing_contrast() {
            Self::foreground_tone(background_tone, desired)
        } else {
            contrasting_tone(background_tone, tone, desired)
        };

        if self.is_background && (50.0..60.0).contains(&answer) {
            answer = if desired <= ratio_of_tones(49.0, background_tone) {
                49.0
            } else {
                60.0
            };
        }

        let Some(second_background) = self.second_background(scheme) else {
            return answer;
        };

        // Contrast with both backgrounds, which requires tones beyond either.
        let tone1 = background_tone;
        let tone2 = second_background.resolve_tone(scheme, depth + 1);
        let upper = tone1.max(tone2);
        let lower = tone1.min(tone2);

        if desired <= ratio_of_tones(upper, answer) && desired <= ratio_of_tones(lower, answer) {
            return answer;
        }

        let light_option = lighter(upper, desired);
        let dark_option = darker(lower, desired);
        let prefers_light =
            Self::tone_prefers_light_foreground(tone1) || Self::tone_prefers_light_foreground(tone2);

        if prefers_light {
            return light_option.unwrap_or(100.0);
        }
        match (light_option, dark_option) {
            (Some(light), None) => light,
            (None, Some(dark)) => dark,
            (_, dark) => dark.unwrap_or(0.0),
        }
    }

    fn desired_ratio(&self, level: Float) -> Float {
        self.contrast_curve.map_or(RATIO_MIN, |curve| curve.get(level))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Find the tone with the given contrast ratio against the background tone,
    /// preferring lighter tones for darker backgrounds and vice versa.
    ///
    /// If neither direction achieves the ratio, the direction with the higher
    /// ratio wins.
    pub fn foreground_tone(background_tone: Float, ratio: Float) -> Float {
        let lighter_tone = lighter_unsafe(background_tone, ratio);
        let darker_tone = darker_unsafe(background_tone, ratio);
        let lighter_ratio = ratio_of_tones(lighter_tone, background_tone);
        let darker_ratio = ratio_of_tones(darker_tone, background_tone);

        if Self::tone_prefers_light_foreground(background_tone) {
            // Lighter is preferred when both fall short by about the same.
            let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
                && lighter_ratio < ratio
                && darker_ratio < ratio;
            if ratio <= lighter_ratio || darker_ratio <= lighter_ratio || negligible_difference {
                lighter_tone
            } else {
                darker_tone
            }
        } else if ratio <= darker_ratio || lighter_ratio <= darker_ratio {
            darker_tone
        } else {
            lighter_tone
        }
    }

    /// Adjust the tone so that light foregrounds achieve contrast.
    ///
    /// Tones in `49.5..59.5` prefer light foregrounds but do not allow them to
    /// reach a contrast ratio of 4.5. This function moves them to tone 49.
    pub fn enable_light_foreground(tone: Float) -> Float {
        if Self::tone_prefers_light_foreground(tone) && !Self::tone_allows_light_foreground(tone) {
            49.0
        } else {
            tone
        }
    }

    /// Determine whether the background tone prefers light foregrounds.
    pub fn tone_prefers_light_foreground(tone: Float) -> bool {
        tone < 59.5
    }

    /// Determine whether the background tone allows light foregrounds with a
    /// contrast ratio of 4.5.
    pub fn tone_allows_light_foreground(tone: Float) -> bool {
        tone <= 49.5
    }
}

/// Keep the tone if it contrasts enough with the background, otherwise find a
/// foreground tone that does.
fn contrasting_tone(background_tone: Float, tone: Float, ratio: Float) -> Float {
    if ratio <= ratio_of_tones(background_tone, tone) {
        tone
    } else {
        DynamicColor::foreground_tone(background_tone, ratio)
    }
}

#[cfg(test)]
mod test {
    use super::{DynamicColor, ToneDeltaPair, TonePolarity};
    use crate::core::{assert_within, ratio_of_tones};
    use crate::dynamic::{ContrastCurve, DynamicScheme, MaterialRole, Variant};
    use crate::{Float, Hct};

    fn scheme(is_dark: bool, contrast_level: Float) -> DynamicScheme {
        DynamicScheme::new(
            Hct::from_argb(0xff47_5d92),
            Variant::TonalSpot,
            is_dark,
            contrast_level,
        )
    }

    #[test]
    fn test_foreground_tone() {
        let light = DynamicColor::foreground_tone(20.0, 4.5);
        assert!(20.0 < light, "{} is lighter than 20", light);
        assert!(4.5 <= ratio_of_tones(light, 20.0));

        let dark = DynamicColor::foreground_tone(90.0, 4.5);
        assert!(dark < 90.0, "{} is darker than 90", dark);
        assert!(4.5 <= ratio_of_tones(dark, 90.0));

        // Neither direction achieves 21, so black on a mid tone wins.
        assert_within!(DynamicColor::foreground_tone(60.0, 21.0), 0.0, 0.0);
    }

    #[test]
    fn test_light_foreground() {
        assert!(DynamicColor::tone_prefers_light_foreground(59.0));
        assert!(!DynamicColor::tone_prefers_light_foreground(60.0));
        assert!(DynamicColor::tone_allows_light_foreground(49.0));
        assert!(!DynamicColor::tone_allows_light_foreground(50.0));

        assert!(DynamicColor::tone_prefers_light_foreground(59.49));
        assert!(!DynamicColor::tone_prefers_light_foreground(59.5));
        assert!(DynamicColor::tone_allows_light_foreground(49.5));
        assert!(!DynamicColor::tone_allows_light_foreground(49.51));
        assert_eq!(DynamicColor::enable_light_foreground(49.5), 49.5);
        assert_eq!(DynamicColor::enable_light_foreground(59.49), 49.0);
        assert_eq!(DynamicColor::enable_light_foreground(59.5), 59.5);
        assert_eq!(DynamicColor::enable_light_foreground(55.0), 49.0);
        assert_eq!(DynamicColor::enable_light_foreground(40.0), 40.0);
        assert_eq!(DynamicColor::enable_light_foreground(70.0), 70.0);
    }

    #[test]
    fn test_raw_tone_without_background() {
        let scrim = MaterialRole::Scrim.recipe();
        assert_eq!(scrim.tone(&scheme(false, 1.0)), 0.0);
        assert_eq!(scrim.tone(&scheme(true, -1.0)), 0.0);
    }

    #[test]
    fn test_contrast_with_background() {
        for is_dark in [false, true] {
            for level in [-1.0, -0.5, 0.0, 0.5, 1.0] {
                let scheme = scheme(is_dark, level);
                for role in [
                    MaterialRole::OnSurface,
                    MaterialRole::OnPrimary,
                    MaterialRole::OnPrimaryContainer,
                    MaterialRole::OnSecondaryContainer,
                    MaterialRole::OnErrorContainer,
                    MaterialRole::InverseOnSurface,
                ] {
                    let recipe = role.recipe();
                    let curve = recipe.contrast_curve().expect("role has contrast curve");
                    let background = recipe.background(&scheme).expect("role has background");

                    let tone = recipe.tone(&scheme);
                    let background_tone = background.tone(&scheme);
                    let ratio = ratio_of_tones(tone, background_tone);
                    let desired = curve.get(scheme.contrast_level());
                    let at_extreme = tone == 0.0 || tone == 100.0;
                    assert!(
                        desired - 0.05 <= ratio || at_extreme,
                        "{} at level {} has ratio {} < {}",
                        role,
                        level,
                        ratio,
                        desired
                    );
                }
            }
        }
    }

    #[test]
    fn test_tone_delta_pair() {
        let pairs = [
            (MaterialRole::PrimaryContainer, MaterialRole::Primary),
            (MaterialRole::SecondaryContainer, MaterialRole::Secondary),
            (MaterialRole::TertiaryContainer, MaterialRole::Tertiary),
            (MaterialRole::ErrorContainer, MaterialRole::Error),
            (MaterialRole::PrimaryFixed, MaterialRole::PrimaryFixedDim),
        ];

        for is_dark in [false, true] {
            for level in [-1.0, 0.0, 0.5, 1.0] {
                let scheme = scheme(is_dark, level);
                for (a, b) in pairs {
                    let difference = (a.recipe().tone(&scheme) - b.recipe().tone(&scheme)).abs();
                    assert!(
                        9.999 <= difference,
                        "{} and {} at level {} differ by {}",
                        a,
                        b,
                        level,
                        difference
                    );
                }
            }
        }
    }

    #[test]
    fn test_awkward_zone() {
        for is_dark in [false, true] {
            for level in [-1.0, 0.0, 1.0] {
                let scheme = scheme(is_dark, level);
                for role in MaterialRole::ALL {
                    let recipe = role.recipe();
                    if recipe.is_background() && recipe.background(&scheme).is_some() {
                        let tone = recipe.tone(&scheme);
                        assert!(
                            !(50.0..60.0).contains(&tone),
                            "{} has awkward tone {}",
                            role,
                            tone
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_custom_pair() {
        fn lighter_role(_: &DynamicScheme) -> DynamicColor {
            DynamicColor::new("lighter", |s| s.neutral_palette(), |_| 72.0)
                .with_background(|_| MaterialRole::Surface.recipe())
                .with_contrast_curve(ContrastCurve::CONTAINER)
                .with_tone_delta_pair(|s| {
                    ToneDeltaPair::new(lighter_role(s), darker_role(s), 15.0, TonePolarity::Lighter, false)
                })
        }

        fn darker_role(_: &DynamicScheme) -> DynamicColor {
            DynamicColor::new("darker", |s| s.neutral_palette(), |_| 70.0)
                .with_background(|_| MaterialRole::Surface.recipe())
                .with_contrast_curve(ContrastCurve::CONTAINER)
                .with_tone_delta_pair(|s| {
                    ToneDeltaPair::new(lighter_role(s), darker_role(s), 15.0, TonePolarity::Lighter, false)
                })
        }

        for is_dark in [false, true] {
            let scheme = scheme(is_dark, 0.0);
            let light = lighter_role(&scheme).tone(&scheme);
            let dark = darker_role(&scheme).tone(&scheme);
            assert!(15.0 <= light - dark, "{} should exceed {} by 15", light, dark);
            assert!(!(50.0..60.0).contains(&dark), "{} is awkward", dark);
        }
    }

    #[test]
    fn test_opacity() {
        let light = scheme(false, 0.0);
        let dark = scheme(true, 0.0);
        let highlight = MaterialRole::ControlHighlight.recipe();
        assert_eq!(highlight.argb(&light) >> 24, 31);
        assert_eq!(highlight.argb(&dark) >> 24, 51);
        assert_eq!(highlight.argb(&light) & 0x00ff_ffff, 0);
        assert_eq!(highlight.argb(&dark) & 0x00ff_ffff, 0x00ff_ffff);
    }
}
