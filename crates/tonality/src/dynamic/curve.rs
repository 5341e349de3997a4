use crate::core::lerp;
use crate::Float;

/// A contrast curve.
///
/// A curve maps a scheme's contrast level in `-1..=1` to a desired contrast
/// ratio. It is anchored at the levels -1, 0, 0.5, and 1 and interpolates
/// linearly between adjacent anchors. Levels outside the range clamp to the
/// first or last anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContrastCurve {
    low: Float,
    normal: Float,
    medium: Float,
    high: Float,
}

impl ContrastCurve {
    /// The curve for accent colors against surfaces.
    pub const ACCENT: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 7.0);

    /// The curve for text and icons on accent colors and surfaces.
    pub const ON_ACCENT: ContrastCurve = ContrastCurve::new(4.5, 7.0, 11.0, 21.0);

    /// The curve for containers against surfaces.
    pub const CONTAINER: ContrastCurve = ContrastCurve::new(1.0, 1.0, 3.0, 4.5);

    /// The curve for text and icons on containers.
    pub const ON_CONTAINER: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);

    /// Create a new contrast curve from its values at contrast levels -1, 0,
    /// 0.5, and 1.
    pub const fn new(low: Float, normal: Float, medium: Float, high: Float) -> Self {
        Self {
            low,
            normal,
            medium,
            high,
        }
    }

    /// Get the value at the given contrast level.
    pub fn get(&self, level: Float) -> Float {
        if level <= -1.0 {
            self.low
        } else if level < 0.0 {
            lerp(self.low, self.normal, level + 1.0)
        } else if level < 0.5 {
            lerp(self.normal, self.medium, level / 0.5)
        } else if level < 1.0 {
            lerp(self.medium, self.high, (level - 0.5) / 0.5)
        } else {
            self.high
        }
    }
}

#[cfg(test)]
mod test {
    use super::ContrastCurve;
    use crate::assert_close_enough;

    #[test]
    fn test_anchors() {
        let curve = ContrastCurve::new(1.0, 2.0, 3.0, 5.0);
        assert_close_enough!(curve.get(-2.0), 1.0);
        assert_close_enough!(curve.get(-1.0), 1.0);
        assert_close_enough!(curve.get(0.0), 2.0);
        assert_close_enough!(curve.get(0.5), 3.0);
        assert_close_enough!(curve.get(1.0), 5.0);
        assert_close_enough!(curve.get(2.0), 5.0);
    }

    #[test]
    fn test_interpolation() {
        let curve = ContrastCurve::new(1.0, 2.0, 3.0, 5.0);
        assert_close_enough!(curve.get(-0.5), 1.5);
        assert_close_enough!(curve.get(0.25), 2.5);
        assert_close_enough!(curve.get(0.75), 4.0);
        assert_close_enough!(ContrastCurve::ON_ACCENT.get(0.75), 16.0);
    }
}
