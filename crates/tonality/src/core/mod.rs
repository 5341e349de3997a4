mod cam16;
mod contrast;
mod conversion;
mod equality;
mod math;
mod solver;
mod string;

// cam16
pub use cam16::{Cam16, ViewingConditions};

// contrast
pub use contrast::{
    darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones, ratio_of_ys, RATIO_MAX,
    RATIO_MIN,
};

// conversion
pub use conversion::{
    alpha, argb_from_lstar, argb_from_rgb, blue, green, lstar_from_argb, lstar_from_y, red,
    y_from_lstar,
};
pub(crate) use conversion::{argb_from_lab, argb_from_linrgb, lab_from_argb, linrgb_from_argb};

// equality
#[cfg(test)]
pub(crate) use equality::assert_within;
pub use equality::to_eq_bits;

// math
pub(crate) use math::{lerp, multiply, FloatExt};
pub use math::{difference_degrees, rotation_direction, sanitize_degrees, sanitize_degrees_int};

// solver
pub use solver::{find_chroma, solve_to_argb};

// string
pub use string::{format_argb, parse_argb};
