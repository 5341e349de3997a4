//! Options for building schemes and quantizing images.
//!
//! This module provides the options for a dynamic scheme and for the
//! quantizer, each with a corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use tonality::opt::SchemeOptions;
//! # use tonality::dynamic::Variant;
//! let options = SchemeOptions::builder()
//!     .source(0xff00_00ff)
//!     .variant(Variant::Vibrant)
//!     .dark(true)
//!     .build();
//!
//! assert_eq!(options.source(), 0xff00_00ff);
//! let scheme = options.to_scheme();
//! assert!(scheme.is_dark());
//! ```

use crate::dynamic::{DynamicScheme, Variant};
use crate::Float;

#[derive(Clone, Debug)]
struct SchemeOptionData {
    source: u32,
    variant: Variant,
    is_dark: bool,
    contrast_level: Float,
}

impl SchemeOptionData {
    pub const fn new() -> Self {
        Self {
            source: 0xff47_5d92,
            variant: Variant::TonalSpot,
            is_dark: false,
            contrast_level: 0.0,
        }
    }
}

/// A builder of scheme options.
#[derive(Debug)]
pub struct SchemeOptionBuilder(SchemeOptionData);

impl SchemeOptionBuilder {
    /// Set the source color.
    pub fn source(&mut self, argb: u32) -> &mut Self {
        self.0.source = argb;
        self
    }

    /// Set the variant.
    pub fn variant(&mut self, variant: Variant) -> &mut Self {
        self.0.variant = variant;
        self
    }

    /// Set dark or light mode.
    pub fn dark(&mut self, is_dark: bool) -> &mut Self {
        self.0.is_dark = is_dark;
        self
    }

    /// Set the contrast level.
    ///
    /// The level is clamped to `-1..=1`, with 0 the default, 0.5 medium, and 1
    /// high contrast. Not-a-number becomes 0.
    pub fn contrast_level(&mut self, level: Float) -> &mut Self {
        self.0.contrast_level = if level.is_nan() {
            0.0
        } else {
            level.clamp(-1.0, 1.0)
        };
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> SchemeOptions {
        SchemeOptions(self.0.clone())
    }
}

/// The options for a dynamic scheme.
#[derive(Clone, Debug)]
pub struct SchemeOptions(SchemeOptionData);

impl Default for SchemeOptions {
    fn default() -> Self {
        SchemeOptions(SchemeOptionData::new())
    }
}

impl SchemeOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> SchemeOptionBuilder {
        SchemeOptionBuilder(SchemeOptionData::new())
    }

    /// Get the source color.
    pub fn source(&self) -> u32 {
        self.0.source
    }

    /// Get the variant.
    pub fn variant(&self) -> Variant {
        self.0.variant
    }

    /// Determine whether the scheme is dark.
    pub fn is_dark(&self) -> bool {
        self.0.is_dark
    }

    /// Get the contrast level.
    pub fn contrast_level(&self) -> Float {
        self.0.contrast_level
    }

    /// Build the dynamic scheme.
    pub fn to_scheme(&self) -> DynamicScheme {
        DynamicScheme::from_argb(
            self.0.source,
            self.0.variant,
            self.0.is_dark,
            self.0.contrast_level,
        )
    }
}

// ====================================================================================================================

#[derive(Clone, Debug)]
struct QuantizerOptionData {
    max_colors: usize,
    max_iterations: usize,
    min_movement: Float,
}

impl QuantizerOptionData {
    pub const fn new() -> Self {
        Self {
            max_colors: 128,
            max_iterations: 10,
            min_movement: 3.0,
        }
    }
}

/// A builder of quantizer options.
#[derive(Debug)]
pub struct QuantizerOptionBuilder(QuantizerOptionData);

impl QuantizerOptionBuilder {
    /// Set the maximum number of colors.
    pub fn max_colors(&mut self, max_colors: usize) -> &mut Self {
        self.0.max_colors = max_colors;
        self
    }

    /// Set the maximum number of iterations when refining clusters.
    pub fn max_iterations(&mut self, max_iterations: usize) -> &mut Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Set the minimum distance in CIELAB a color must move by when
    /// refining clusters.
    pub fn min_movement(&mut self, distance: Float) -> &mut Self {
        self.0.min_movement = distance.max(0.0);
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> QuantizerOptions {
        QuantizerOptions(self.0.clone())
    }
}

/// The options for quantization.
#[derive(Clone, Debug)]
pub struct QuantizerOptions(QuantizerOptionData);

impl Default for QuantizerOptions {
    fn default() -> Self {
        QuantizerOptions(QuantizerOptionData::new())
    }
}

impl QuantizerOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> QuantizerOptionBuilder {
        QuantizerOptionBuilder(QuantizerOptionData::new())
    }

    /// Get the maximum number of colors.
    pub fn max_colors(&self) -> usize {
        self.0.max_colors
    }

    /// Get the maximum number of iterations.
    pub fn max_iterations(&self) -> usize {
        self.0.max_iterations
    }

    /// Get the minimum movement.
    pub fn min_movement(&self) -> Float {
        self.0.min_movement
    }
}

#[cfg(test)]
mod test {
    use super::{QuantizerOptions, SchemeOptions};
    use crate::dynamic::Variant;

    #[test]
    fn test_scheme_defaults() {
        let options = SchemeOptions::default();
        assert_eq!(options.source(), 0xff47_5d92);
        assert_eq!(options.variant(), Variant::TonalSpot);
        assert!(!options.is_dark(), "default is light");
        assert_eq!(options.contrast_level(), 0.0);
    }

    #[test]
    fn test_scheme_builder() {
        let options = SchemeOptions::builder()
            .source(0xffbd_5a3c)
            .variant(Variant::Expressive)
            .dark(true)
            .contrast_level(7.0)
            .build();
        assert_eq!(options.contrast_level(), 1.0);

        let scheme = options.to_scheme();
        assert_eq!(scheme.source_color_argb(), 0xffbd_5a3c);
        assert_eq!(scheme.variant(), Variant::Expressive);
        assert!(scheme.is_dark(), "built scheme is dark");
        assert_eq!(scheme.contrast_level(), 1.0);

        let options = SchemeOptions::builder().contrast_level(-0.5).build();
        assert_eq!(options.contrast_level(), -0.5);
    }

    #[test]
    fn test_quantizer_options() {
        let options = QuantizerOptions::default();
        assert_eq!(options.max_colors(), 128);
        assert_eq!(options.max_iterations(), 10);
        assert_eq!(options.min_movement(), 3.0);

        let options = QuantizerOptions::builder()
            .max_colors(8)
            .min_movement(-1.0)
            .build();
        assert_eq!(options.max_colors(), 8);
        assert_eq!(options.min_movement(), 0.0);
    }
}
