//! Color temperature and the complementary and analogous colors it implies.

use crate::core::{lab_from_argb, sanitize_degrees, sanitize_degrees_int};
use crate::{Float, Hct};

/// A cache of the temperatures of all hues at the chroma and tone of an input
/// color.
///
/// The cache samples all 361 integral hues `0..=360` at the input's chroma and
/// tone. Its coldest and warmest colors span the range for relative
/// temperatures. Since sampling is eager, the cache is immutable and can be
/// queried repeatedly.
#[derive(Clone, Debug)]
pub struct TemperatureCache {
    input: Hct,
    input_temperature: Float,
    hcts_by_hue: Vec<Hct>,
    temperatures_by_hue: Vec<Float>,
    coldest: (Hct, Float),
    warmest: (Hct, Float),
}

impl TemperatureCache {
    /// Create a new temperature cache for the given color.
    pub fn new(input: Hct) -> Self {
        let hcts_by_hue: Vec<Hct> = (0..=360)
            .map(|hue| Hct::new(hue as Float, input.chroma(), input.tone()))
            .collect();
        let temperatures_by_hue: Vec<Float> = hcts_by_hue
            .iter()
            .map(|hct| raw_temperature(hct.argb()))
            .collect();

        // The input holds on to ties, otherwise the lowest hue wins.
        let input_temperature = raw_temperature(input.argb());
        let mut coldest = (input, input_temperature);
        let mut warmest = coldest;
        for (hct, temperature) in hcts_by_hue.iter().zip(temperatures_by_hue.iter()) {
            if *temperature < coldest.1 {
                coldest = (*hct, *temperature);
            }
            if warmest.1 < *temperature {
                warmest = (*hct, *temperature);
            }
        }

        Self {
            input,
            input_temperature,
            hcts_by_hue,
            temperatures_by_hue,
            coldest,
            warmest,
        }
    }

    /// Get the input color.
    pub fn input(&self) -> Hct {
        self.input
    }

    /// Get the coldest color with the input's chroma and tone.
    pub fn coldest(&self) -> Hct {
        self.coldest.0
    }

    /// Get the warmest color with the input's chroma and tone.
    pub fn warmest(&self) -> Hct {
        self.warmest.0
    }

    fn range(&self) -> Float {
        self.warmest.1 - self.coldest.1
    }

    fn relative(&self, temperature: Float) -> Float {
        let range = self.range();
        if range == 0.0 {
            0.5
        } else {
            (temperature - self.coldest.1) / range
        }
    }

    /// Determine the temperature of the color relative to the cache's coldest
    /// and warmest colors.
    ///
    /// The result is 0 for the coldest and 1 for the warmest color. If all
    /// sampled colors have the same temperature, e.g., because the input is
    /// white, the result is 0.5.
    pub fn relative_temperature(&self, hct: &Hct) -> Float {
        self.relative(raw_temperature(hct.argb()))
    }

    fn hct_at(&self, hue: Float) -> Hct {
        self.hcts_by_hue[hue.round() as usize]
    }

    /// Find the complement of the input color.
    ///
    /// The complement is on the other side of the hue circle, as split by the
    /// coldest and warmest colors, and has the opposite relative temperature.
    pub fn complement(&self) -> Hct {
        let coldest_hue = self.coldest.0.hue();
        let warmest_hue = self.warmest.0.hue();
        let (start_hue, end_hue) = if is_between(self.input.hue(), coldest_hue, warmest_hue) {
            (warmest_hue, coldest_hue)
        } else {
            (coldest_hue, warmest_hue)
        };

        let target = 1.0 - self.relative(self.input_temperature);
        let mut smallest_error = 1000.0;
        let mut answer = self.hct_at(self.input.hue());

        for addend in 0..=360 {
            let hue = sanitize_degrees(start_hue + addend as Float);
            if !is_between(hue, start_hue, end_hue) {
                continue;
            }

            let index = hue.round() as usize;
            let error = (target - self.relative(self.temperatures_by_hue[index])).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = self.hcts_by_hue[index];
            }
        }

        answer
    }

    /// Find five analogous colors with the input color in the middle, from
    /// twelve divisions of the hue circle.
    pub fn analogous_colors(&self) -> Vec<Hct> {
        self.analogous(5, 12)
    }

    /// Find analogous colors.
    ///
    /// This method divides the hue circle into the given number of divisions
    /// of equal temperature change, not equal hue angle. It then returns
    /// `count` colors, with the input color in the middle, colors with
    /// decreasing hues before, and colors with increasing hues after.
    pub fn analogous(&self, count: usize, divisions: usize) -> Vec<Hct> {
        let divisions = divisions.max(1);
        let start_hue = self.input.hue().round() as i32;
        let start_hct = self.hcts_by_hue[start_hue as usize];
        let start_temperature = self.relative(self.temperatures_by_hue[start_hue as usize]);

        // Measure the total temperature change around the circle.
        let mut last_temperature = start_temperature;
        let mut total_delta = 0.0;
        for offset in 0..360 {
            let hue = sanitize_degrees_int(start_hue + offset) as usize;
            let temperature = self.relative(self.temperatures_by_hue[hue]);
            total_delta += (temperature - last_temperature).abs();
            last_temperature = temperature;
        }

        // Pick colors at even steps of temperature change.
        let step = total_delta / divisions as Float;
        let mut all_colors = vec![start_hct];
        let mut accumulated_delta = 0.0;
        let mut last_temperature = start_temperature;
        let mut hue_addend = 1;

        while all_colors.len() < divisions {
            let hue = sanitize_degrees_int(start_hue + hue_addend) as usize;
            let hct = self.hcts_by_hue[hue];
            let temperature = self.relative(self.temperatures_by_hue[hue]);
            accumulated_delta += (temperature - last_temperature).abs();

            let mut desired = all_colors.len() as Float * step;
            let mut index_addend = 1;
            while accumulated_delta >= desired && all_colors.len() < divisions {
                all_colors.push(hct);
                desired = (all_colors.len() + index_addend) as Float * step;
                index_addend += 1;
            }

            last_temperature = temperature;
            hue_addend += 1;
            if 360 < hue_addend {
                while all_colors.len() < divisions {
                    all_colors.push(hct);
                }
                break;
            }
        }

        let length = all_colors.len();
        let increase_count = count.saturating_sub(1) / 2;
        let decrease_count = count.saturating_sub(1) - increase_count;

        let mut answers = Vec::with_capacity(count.max(1));
        for offset in (1..=increase_count).rev() {
            answers.push(all_colors[(length - offset % length) % length]);
        }
        answers.push(self.input);
        for offset in 1..=decrease_count {
            answers.push(all_colors[offset % length]);
        }

        answers
    }
}

/// Compute the raw temperature of the color.
///
/// Warm colors have positive values and cold colors negative ones. The
/// formula, from Ou, Woodcock, and Wright, operates on the CIE Lab hue angle
/// and chroma, with its zero crossing near hue 50.
pub fn raw_temperature(argb: u32) -> Float {
    let [_, a, b] = lab_from_argb(argb);
    let hue = sanitize_degrees(b.atan2(a).to_degrees());
    let chroma = a.hypot(b);
    -0.5 + 0.02 * chroma.powf(1.07) * sanitize_degrees(hue - 50.0).to_radians().cos()
}

/// Determine whether the angle is on the arc from `a` to `b` in increasing
/// direction.
fn is_between(angle: Float, a: Float, b: Float) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}

#[cfg(test)]
mod test {
    use super::{raw_temperature, TemperatureCache};
    use crate::core::assert_within;
    use crate::Hct;

    #[test]
    fn test_raw_temperature() {
        assert_within!(raw_temperature(0xff00_00ff), -1.393, 1e-3);
        assert_within!(raw_temperature(0xffff_0000), 2.351, 1e-3);
        assert_within!(raw_temperature(0xff00_ff00), -0.267, 1e-3);
        assert_within!(raw_temperature(0xffff_ffff), -0.5, 1e-3);
        assert_within!(raw_temperature(0xff00_0000), -0.5, 1e-3);
    }

    #[test]
    fn test_extremes() {
        // All hues of white have the same temperature as the input.
        let white = Hct::from_argb(0xffff_ffff);
        let cache = TemperatureCache::new(white);
        assert_eq!(cache.coldest(), white);
        assert_eq!(cache.warmest(), white);

        let blue = Hct::from_argb(0xff00_00ff);
        let cache = TemperatureCache::new(blue);
        let coldest = raw_temperature(cache.coldest().argb());
        let warmest = raw_temperature(cache.warmest().argb());
        assert!(coldest <= raw_temperature(blue.argb()), "coldest {} too warm", coldest);
        assert!(raw_temperature(blue.argb()) < warmest, "warmest {} too cold", warmest);
        assert_eq!(cache.relative_temperature(&cache.coldest()), 0.0);
        assert_eq!(cache.relative_temperature(&cache.warmest()), 1.0);
    }

    #[test]
    fn test_relative_temperature_of_white() {
        let cache = TemperatureCache::new(Hct::from_argb(0xffff_ffff));
        for hue in [0.0, 90.0, 180.0, 270.0] {
            let hct = Hct::new(hue, 40.0, 100.0);
            assert_eq!(cache.relative_temperature(&hct), 0.5);
        }
    }

    #[test]
    fn test_complement() {
        let complement = |argb| TemperatureCache::new(Hct::from_argb(argb)).complement().argb();
        assert_eq!(complement(0xff00_00ff), 0xff9d_0002);
        assert_eq!(complement(0xffff_0000), 0xff00_7bfc);
        assert_eq!(complement(0xff00_ff00), 0xffff_d2c9);
        assert_eq!(complement(0xffff_ffff), 0xffff_ffff);
        assert_eq!(complement(0xff00_0000), 0xff00_0000);
    }

    #[test]
    fn test_complement_moves_back() {
        let input = Hct::from_argb(0xff47_5d92);
        let complement = TemperatureCache::new(input).complement();
        let back = TemperatureCache::new(complement).complement();
        let distance = 180.0 - ((back.hue() - input.hue()).abs() - 180.0).abs();
        let away = 180.0 - ((complement.hue() - input.hue()).abs() - 180.0).abs();
        assert!(distance < away, "{} should be closer than {}", distance, away);
    }

    #[test]
    fn test_analogous() {
        let analogous: Vec<u32> = TemperatureCache::new(Hct::from_argb(0xff00_00ff))
            .analogous_colors()
            .iter()
            .map(|hct| hct.argb())
            .collect();
        assert_eq!(
            analogous,
            vec![0xff00_590c, 0xff00_564e, 0xff00_00ff, 0xff67_00cc, 0xff81_009f]
        );

        let cache = TemperatureCache::new(Hct::from_argb(0xffff_0000));
        assert_eq!(cache.analogous(0, 12), vec![cache.input()]);
        assert_eq!(cache.analogous(3, 6).len(), 3);
    }
}
