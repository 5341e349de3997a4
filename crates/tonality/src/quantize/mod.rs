//! Color quantization.
//!
//! Quantization reduces the colors of an image to a small number of
//! representative colors, each with its population, i.e., the number of pixels
//! it represents. The most populous or suitable color then seeds a
//! [`DynamicScheme`](crate::dynamic::DynamicScheme).
//!
//! [`quantize`] combines two algorithms. Wu's box-cutting quantizer, available
//! as [`quantize_wu`], quickly finds a good initial set of colors. The weighted
//! square means quantizer, available as [`quantize_wsmeans`], then refines
//! them by clustering in CIELAB. Both are deterministic.
//!
//! ```
//! # use tonality::quantize::quantize;
//! let pixels = [0xffff_0000, 0xffff_0000, 0xff00_ff00, 0xff00_ff00, 0xff00_ff00];
//! let result = quantize(&pixels, 256);
//! assert_eq!(result.get(&0xff00_ff00), Some(&3));
//! assert_eq!(result.get(&0xffff_0000), Some(&2));
//! ```

mod wsmeans;
mod wu;

use std::collections::BTreeMap;

use crate::opt::QuantizerOptions;

/// The result of quantization, mapping ARGB colors to their populations.
pub type QuantizerResult = BTreeMap<u32, u32>;

/// Quantize the pixels to at most `max_colors` colors.
///
/// The result may have fewer colors. Its populations sum to at most the
/// number of pixels.
pub fn quantize(pixels: &[u32], max_colors: usize) -> QuantizerResult {
    quantize_with_options(pixels, &QuantizerOptions::builder().max_colors(max_colors).build())
}

/// Quantize the pixels with the given options.
pub fn quantize_with_options(pixels: &[u32], options: &QuantizerOptions) -> QuantizerResult {
    let seeds = quantize_wu(pixels, options.max_colors());
    wsmeans::wsmeans(
        pixels,
        &seeds,
        options.max_colors(),
        options.max_iterations(),
        options.min_movement(),
    )
}

/// Quantize the pixels with Wu's box-cutting algorithm.
///
/// This function returns the average colors of up to `max_colors` boxes. The
/// colors are not necessarily distinct and lack populations.
pub fn quantize_wu(pixels: &[u32], max_colors: usize) -> Vec<u32> {
    wu::WuQuantizer::new().quantize(pixels, max_colors)
}

/// Quantize the pixels with the weighted square means algorithm, starting
/// from the given clusters.
pub fn quantize_wsmeans(pixels: &[u32], starting_clusters: &[u32], max_colors: usize) -> QuantizerResult {
    let options = QuantizerOptions::default();
    wsmeans::wsmeans(
        pixels,
        starting_clusters,
        max_colors,
        options.max_iterations(),
        options.min_movement(),
    )
}
