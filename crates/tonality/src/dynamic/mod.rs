//! Dynamic color schemes.
//!
//! A [`DynamicScheme`] derives five key palettes from a source color according
//! to its [`Variant`]. A [`DynamicColor`] is a recipe for one color role: it
//! picks a palette and a preferred tone from the scheme and then adjusts that
//! tone so that the role contrasts sufficiently with its backgrounds and stays
//! sufficiently apart from its paired role. [`MaterialRole`] enumerates the
//! standard roles and [`ColorScheme`] collects the 36 roles most user interface
//! toolkits use.
//!
//! ```
//! # use tonality::dynamic::{build_scheme, ColorScheme, MaterialRole, Variant};
//! let scheme = build_scheme(0xff47_5d92, Variant::TonalSpot, false, 0.0);
//! assert_eq!(scheme.argb(MaterialRole::OnPrimary), 0xffff_ffff);
//!
//! let colors = ColorScheme::from(&scheme);
//! assert_eq!(colors.primary, scheme.argb(MaterialRole::Primary));
//! ```

mod color;
mod curve;
mod roles;
mod scheme;
mod variant;

pub use color::{DynamicColor, ToneDeltaPair, TonePolarity};
pub use curve::ContrastCurve;
pub use roles::MaterialRole;
pub use scheme::{build_scheme, resolve_role, ColorScheme, DynamicScheme};
pub use variant::{variant_to_palettes, Palettes, Variant};
