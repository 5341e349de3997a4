//! Wu's box-cutting quantizer.
//!
//! The quantizer builds a histogram over an RGB cube with 5 bits per channel,
//! turns the histogram into cumulative moments, and then repeatedly splits the
//! box with the largest variance along the axis that best separates its
//! colors. See Xiaolin Wu, "Efficient Statistical Computations for Optimal
//! Color Quantization," in *Graphics Gems II*, 1991.

use crate::core::{argb_from_rgb, blue, green, red};
use crate::Float;

const INDEX_BITS: u32 = 5;
const SIDE_LENGTH: usize = (1 << INDEX_BITS) + 1;
const TOTAL_SIZE: usize = SIDE_LENGTH * SIDE_LENGTH * SIDE_LENGTH;

#[inline]
const fn index(r: usize, g: usize, b: usize) -> usize {
    (r << (2 * INDEX_BITS)) + (r << (INDEX_BITS + 1)) + r + (g << INDEX_BITS) + g + b
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Red,
    Green,
    Blue,
}

/// A box within the RGB cube, exclusive of its lower and inclusive of its
/// upper bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cube {
    r0: usize,
    r1: usize,
    g0: usize,
    g1: usize,
    b0: usize,
    b1: usize,
    volume: usize,
}

impl Cube {
    fn whole() -> Self {
        Self {
            r1: SIDE_LENGTH - 1,
            g1: SIDE_LENGTH - 1,
            b1: SIDE_LENGTH - 1,
            ..Self::default()
        }
    }

    fn update_volume(&mut self) {
        self.volume = (self.r1 - self.r0) * (self.g1 - self.g0) * (self.b1 - self.b0);
    }
}

/// A three-dimensional array of cumulative moments.
trait Moment: Copy + Default + std::ops::Add<Output = Self> + std::ops::Sub<Output = Self> {}

impl Moment for i64 {}
impl Moment for Float {}

fn volume<T: Moment>(cube: &Cube, moment: &[T]) -> T {
    moment[index(cube.r1, cube.g1, cube.b1)] - moment[index(cube.r1, cube.g1, cube.b0)]
        - moment[index(cube.r1, cube.g0, cube.b1)]
        + moment[index(cube.r1, cube.g0, cube.b0)]
        - moment[index(cube.r0, cube.g1, cube.b1)]
        + moment[index(cube.r0, cube.g1, cube.b0)]
        + moment[index(cube.r0, cube.g0, cube.b1)]
        - moment[index(cube.r0, cube.g0, cube.b0)]
}

fn bottom(cube: &Cube, direction: Direction, moment: &[i64]) -> i64 {
    match direction {
        Direction::Red => {
            -moment[index(cube.r0, cube.g1, cube.b1)]
                + moment[index(cube.r0, cube.g1, cube.b0)]
                + moment[index(cube.r0, cube.g0, cube.b1)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
        Direction::Green => {
            -moment[index(cube.r1, cube.g0, cube.b1)]
                + moment[index(cube.r1, cube.g0, cube.b0)]
                + moment[index(cube.r0, cube.g0, cube.b1)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
        Direction::Blue => {
            -moment[index(cube.r1, cube.g1, cube.b0)]
                + moment[index(cube.r1, cube.g0, cube.b0)]
                + moment[index(cube.r0, cube.g1, cube.b0)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
    }
}

fn top(cube: &Cube, direction: Direction, position: usize, moment: &[i64]) -> i64 {
    match direction {
        Direction::Red => {
            moment[index(position, cube.g1, cube.b1)] - moment[index(position, cube.g1, cube.b0)]
                - moment[index(position, cube.g0, cube.b1)]
                + moment[index(position, cube.g0, cube.b0)]
        }
        Direction::Green => {
            moment[index(cube.r1, position, cube.b1)] - moment[index(cube.r1, position, cube.b0)]
                - moment[index(cube.r0, position, cube.b1)]
                + moment[index(cube.r0, position, cube.b0)]
        }
        Direction::Blue => {
            moment[index(cube.r1, cube.g1, position)] - moment[index(cube.r1, cube.g0, position)]
                - moment[index(cube.r0, cube.g1, position)]
                + moment[index(cube.r0, cube.g0, position)]
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The sums of a box's weights and per-channel moments.
#[derive(Clone, Copy, Debug, Default)]
struct Sums {
    r: i64,
    g: i64,
    b: i64,
    w: i64,
}

impl Sums {
    fn score(&self) -> Float {
        let (r, g, b) = (self.r as Float, self.g as Float, self.b as Float);
        b.mul_add(b, r.mul_add(r, g * g)) / self.w as Float
    }
}

/// The result of maximizing the variance between the two halves of a box.
#[derive(Clone, Copy, Debug)]
struct Maximum {
    cut: Option<usize>,
    score: Float,
}

/// Wu's quantizer.
///
/// The quantizer's working buffers are allocated per instance and sized for
/// the reduced RGB cube.
#[derive(Debug)]
pub(crate) struct WuQuantizer {
    weights: Vec<i64>,
    moments_r: Vec<i64>,
    moments_g: Vec<i64>,
    moments_b: Vec<i64>,
    moments: Vec<Float>,
    cubes: Vec<Cube>,
}

impl WuQuantizer {
    pub fn new() -> Self {
        Self {
            weights: vec![0; TOTAL_SIZE],
            moments_r: vec![0; TOTAL_SIZE],
            moments_g: vec![0; TOTAL_SIZE],
            moments_b: vec![0; TOTAL_SIZE],
            moments: vec![0.0; TOTAL_SIZE],
            cubes: Vec::new(),
        }
    }

    /// Quantize the pixels to at most `max_colors` colors.
    ///
    /// The result contains each box's average color, in the order the boxes
    /// were created. Boxes without pixels do not contribute a color.
    pub fn quantize(mut self, pixels: &[u32], max_colors: usize) -> Vec<u32> {
        if pixels.is_empty() || max_colors == 0 {
            return Vec::new();
        }

        let histogram_size = self.construct_histogram(pixels);
        self.create_moments();
        let box_count = self.create_boxes(max_colors);
        let colors = self.create_result(box_count);

        log::debug!(
            "wu quantizer: {} distinct colors, {} boxes, {} colors",
            histogram_size,
            box_count,
            colors.len()
        );
        colors
    }

    fn construct_histogram(&mut self, pixels: &[u32]) -> usize {
        let mut distinct = std::collections::HashSet::new();
        let shift = 8 - INDEX_BITS;

        for &pixel in pixels {
            distinct.insert(pixel);

            let (r, g, b) = (red(pixel), green(pixel), blue(pixel));
            let i = index(
                (r >> shift) as usize + 1,
                (g >> shift) as usize + 1,
                (b >> shift) as usize + 1,
            );
            let (r, g, b) = (r as i64, g as i64, b as i64);

            self.weights[i] += 1;
            self.moments_r[i] += r;
            self.moments_g[i] += g;
            self.moments_b[i] += b;
            self.moments[i] += (r * r + g * g + b * b) as Float;
        }

        distinct.len()
    }

    /// Convert the histogram into cumulative moments, so that the moments of
    /// any box follow from its eight corners.
    fn create_moments(&mut self) {
        for r in 1..SIDE_LENGTH {
            let mut area = [0_i64; SIDE_LENGTH];
            let mut area_r = [0_i64; SIDE_LENGTH];
            let mut area_g = [0_i64; SIDE_LENGTH];
            let mut area_b = [0_i64; SIDE_LENGTH];
            let mut area2 = [0.0; SIDE_LENGTH];

            for g in 1..SIDE_LENGTH {
                let mut line = 0;
                let mut line_r = 0;
                let mut line_g = 0;
                let mut line_b = 0;
                let mut line2 = 0.0;

                for b in 1..SIDE_LENGTH {
                    let i = index(r, g, b);
                    line += self.weights[i];
                    line_r += self.moments_r[i];
                    line_g += self.moments_g[i];
                    line_b += self.moments_b[i];
                    line2 += self.moments[i];

                    area[b] += line;
                    area_r[b] += line_r;
                    area_g[b] += line_g;
                    area_b[b] += line_b;
                    area2[b] += line2;

                    let previous = index(r - 1, g, b);
                    self.weights[i] = self.weights[previous] + area[b];
                    self.moments_r[i] = self.moments_r[previous] + area_r[b];
                    self.moments_g[i] = self.moments_g[previous] + area_g[b];
                    self.moments_b[i] = self.moments_b[previous] + area_b[b];
                    self.moments[i] = self.moments[previous] + area2[b];
                }
            }
        }
    }

    /// Split boxes until there are `max_colors` or no box can be split. This
    /// method returns the number of boxes.
    fn create_boxes(&mut self, max_colors: usize) -> usize {
        self.cubes = vec![Cube::default(); max_colors];
        self.cubes[0] = Cube::whole();
        let mut variances = vec![0.0; max_colors];

        let mut next = 0;
        let mut i = 1;
        while i < max_colors {
            match self.cut(self.cubes[next]) {
                Some((one, two)) => {
                    self.cubes[next] = one;
                    self.cubes[i] = two;
                    variances[next] = if one.volume > 1 { self.variance(&one) } else { 0.0 };
                    variances[i] = if two.volume > 1 { self.variance(&two) } else { 0.0 };
                }
                None => {
                    variances[next] = 0.0;
                    i -= 1;
                }
            }

            next = 0;
            let mut largest = variances[0];
            for (j, variance) in variances.iter().enumerate().take(i + 1).skip(1) {
                if largest < *variance {
                    largest = *variance;
                    next = j;
                }
            }

            if largest <= 0.0 {
                return i + 1;
            }
            i += 1;
        }

        max_colors
    }

    fn create_result(&self, box_count: usize) -> Vec<u32> {
        let mut colors = Vec::with_capacity(box_count);
        for cube in &self.cubes[..box_count] {
            let weight = volume(cube, &self.weights);
            if weight <= 0 {
                continue;
            }

            let average = |moment: &[i64]| {
                (volume(cube, moment) as Float / weight as Float).round().clamp(0.0, 255.0) as u8
            };
            colors.push(argb_from_rgb(
                average(&self.moments_r),
                average(&self.moments_g),
                average(&self.moments_b),
            ));
        }
        colors
    }

    fn sums(&self, cube: &Cube) -> Sums {
        Sums {
            r: volume(cube, &self.moments_r),
            g: volume(cube, &self.moments_g),
            b: volume(cube, &self.moments_b),
            w: volume(cube, &self.weights),
        }
    }

    fn variance(&self, cube: &Cube) -> Float {
        let sums = self.sums(cube);
        let xx = volume(cube, &self.moments);
        xx - sums.score()
    }

    fn cut(&self, mut one: Cube) -> Option<(Cube, Cube)> {
        let whole = self.sums(&one);

        let max_r = self.maximize(&one, Direction::Red, one.r0 + 1, one.r1, &whole);
        let max_g = self.maximize(&one, Direction::Green, one.g0 + 1, one.g1, &whole);
        let max_b = self.maximize(&one, Direction::Blue, one.b0 + 1, one.b1, &whole);

        let (direction, cut) = if max_r.score >= max_g.score && max_r.score >= max_b.score {
            (Direction::Red, max_r.cut?)
        } else if max_g.score >= max_r.score && max_g.score >= max_b.score {
            (Direction::Green, max_g.cut?)
        } else {
            (Direction::Blue, max_b.cut?)
        };

        let mut two = Cube {
            r1: one.r1,
            g1: one.g1,
            b1: one.b1,
            ..Cube::default()
        };

        match direction {
            Direction::Red => {
                one.r1 = cut;
                two.r0 = cut;
                two.g0 = one.g0;
                two.b0 = one.b0;
            }
            Direction::Green => {
                one.g1 = cut;
                two.r0 = one.r0;
                two.g0 = cut;
                two.b0 = one.b0;
            }
            Direction::Blue => {
                one.b1 = cut;
                two.r0 = one.r0;
                two.g0 = one.g0;
                two.b0 = cut;
            }
        }

        one.update_volume();
        two.update_volume();
        Some((one, two))
    }

    fn maximize(
        &self,
        cube: &Cube,
        direction: Direction,
        first: usize,
        last: usize,
        whole: &Sums,
    ) -> Maximum {
        let base = Sums {
            r: bottom(cube, direction, &self.moments_r),
            g: bottom(cube, direction, &self.moments_g),
            b: bottom(cube, direction, &self.moments_b),
            w: bottom(cube, direction, &self.weights),
        };

        let mut maximum = Maximum {
            cut: None,
            score: 0.0,
        };

        for position in first..last {
            let half = Sums {
                r: base.r + top(cube, direction, position, &self.moments_r),
                g: base.g + top(cube, direction, position, &self.moments_g),
                b: base.b + top(cube, direction, position, &self.moments_b),
                w: base.w + top(cube, direction, position, &self.weights),
            };
            if half.w == 0 {
                continue;
            }

            let other = Sums {
                r: whole.r - half.r,
                g: whole.g - half.g,
                b: whole.b - half.b,
                w: whole.w - half.w,
            };
            if other.w == 0 {
                continue;
            }

            let score = half.score() + other.score();
            if maximum.score < score {
                maximum = Maximum {
                    cut: Some(position),
                    score,
                };
            }
        }

        maximum
    }
}

#[cfg(test)]
mod test {
    use super::{index, WuQuantizer, SIDE_LENGTH, TOTAL_SIZE};

    #[test]
    fn test_index() {
        assert_eq!(index(0, 0, 0), 0);
        assert_eq!(index(0, 0, 1), 1);
        assert_eq!(index(0, 1, 0), SIDE_LENGTH);
        assert_eq!(index(1, 0, 0), SIDE_LENGTH * SIDE_LENGTH);
        assert_eq!(index(32, 32, 32), TOTAL_SIZE - 1);
    }

    #[test]
    fn test_single_color() {
        let colors = WuQuantizer::new().quantize(&[0xff14_1e28; 7], 16);
        assert_eq!(colors, vec![0xff14_1e28]);
    }

    #[test]
    fn test_two_colors() {
        let pixels = [0xffff_0000, 0xffff_0000, 0xff00_ff00, 0xff00_ff00, 0xff00_ff00];
        let mut colors = WuQuantizer::new().quantize(&pixels, 256);
        colors.sort_unstable();
        assert_eq!(colors, vec![0xff00_ff00, 0xffff_0000]);
    }

    #[test]
    fn test_max_colors() {
        let pixels: Vec<u32> = (0..64_u32)
            .map(|n| 0xff00_0000 | ((n * 4) << 16) | ((255 - n * 4) << 8) | (n * 2))
            .collect();
        let colors = WuQuantizer::new().quantize(&pixels, 4);
        assert!(!colors.is_empty());
        assert!(colors.len() <= 4);

        assert!(WuQuantizer::new().quantize(&pixels, 0).is_empty());
        assert!(WuQuantizer::new().quantize(&[], 4).is_empty());
    }
}
