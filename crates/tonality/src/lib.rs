//! # Tonality
//!
//! Tonality brings perceptual color science to user interface theming. It
//! derives complete, contrast-aware color schemes from a single source color,
//! which may itself be extracted from an image.
//!
//!
//! ## 1. Overview
//!
//! Tonality's main abstractions are:
//!
//!   * [`Hct`] implements the **HCT color space**, which combines hue and
//!     chroma from the CAM16 color appearance model ([`Cam16`]) with tone,
//!     i.e., CIELAB's perceptual lightness L*. Tone is what determines
//!     contrast. Creating an HCT color from hue, chroma, and tone solves for
//!     the closest sRGB color, reducing chroma where necessary.
//!   * [`TonalPalette`] fixes hue and chroma and produces colors at any tone.
//!   * The [`dynamic`] module implements **dynamic color**. A
//!     [`DynamicScheme`](dynamic::DynamicScheme) derives palettes from a
//!     source color according to a [`Variant`](dynamic::Variant), and
//!     [`DynamicColor`](dynamic::DynamicColor)s resolve color roles to tones
//!     that meet contrast requirements for a given contrast level.
//!   * The [`quantize`] module **extracts representative colors** from an
//!     image's pixels.
//!   * [`TemperatureCache`] models **color temperature** to find complementary
//!     and analogous colors.
//!
//! Colors travel as `u32` values with 8 bits each for alpha, red, green, and
//! blue, i.e., as ARGB values.
//!
//!
//! ## 2. From Source Color to Scheme
//!
//! ```
//! # use tonality::{format_argb, Hct};
//! # use tonality::dynamic::{ColorScheme, MaterialRole};
//! # use tonality::opt::SchemeOptions;
//! let blue = Hct::from_argb(0xff00_00ff);
//! assert_eq!(blue.hue().round(), 283.0);
//!
//! let scheme = SchemeOptions::builder()
//!     .source(blue.argb())
//!     .dark(true)
//!     .contrast_level(0.5)
//!     .build()
//!     .to_scheme();
//!
//! let colors = ColorScheme::from(&scheme);
//! assert_eq!(colors.primary, scheme.argb(MaterialRole::Primary));
//! assert_eq!(format_argb(colors.shadow), "#000000");
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Tonality supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!
//!
//! ## 4. Logging
//!
//! Tonality logs through the [`log`](https://docs.rs/log) facade. It emits
//! summaries of quantization and scheme construction at debug level and each
//! role's resolved tone at trace level. It never installs a logger.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod blend;
mod core;
mod dislike;
pub mod dynamic;
pub mod error;
mod hct;
pub mod opt;
mod palette;
pub mod quantize;
mod temperature;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use blend::{cam16_ucs, harmonize, hct_hue};
pub use core::{
    alpha, argb_from_lstar, argb_from_rgb, blue, darker, darker_unsafe, difference_degrees,
    find_chroma, format_argb, green, lighter, lighter_unsafe, lstar_from_argb, lstar_from_y,
    parse_argb, ratio_of_tones, ratio_of_ys, red, rotation_direction, sanitize_degrees,
    sanitize_degrees_int, solve_to_argb, y_from_lstar, Cam16, ViewingConditions, RATIO_MAX,
    RATIO_MIN,
};
pub use dislike::{fix_if_disliked, is_disliked};
pub use hct::{hct_from_argb, hct_to_argb, Hct};
pub use palette::{TonalPalette, SHADE_TONES};
pub use temperature::{raw_temperature, TemperatureCache};
