use std::f32::consts::{FRAC_PI_2, PI};

use crate::cycle::clock::DayPhase;

/// Head-plane rotation about `X` shared by every flower, `|π - angle| + π/2`.
///
/// The absolute value mirrors the motion at half a day instead of easing it.
pub fn flower_tilt(phase: DayPhase) -> f32 {
    (-phase.angle() + PI).abs() + FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn tilt_at(fraction: f64) -> f32 {
        flower_tilt(DayPhase::at(fraction, 1.0).unwrap())
    }

    /// Half a day gives the smallest tilt of the cycle.
    #[test]
    fn tilt_is_smallest_at_half_day() {
        let noon = tilt_at(0.5);
        assert_relative_eq!(noon, FRAC_PI_2, epsilon = 1e-5);
        for step in 0..1_000 {
            let fraction = step as f64 / 1_000.0;
            if step == 500 {
                continue;
            }
            assert!(tilt_at(fraction) > noon, "fraction={fraction}");
        }
    }

    /// The cycle starts at the largest tilt, `3π/2`.
    #[test]
    fn tilt_starts_at_three_half_pi() {
        assert_relative_eq!(tilt_at(0.0), 3.0 * FRAC_PI_2, epsilon = 1e-5);
    }

    /// The tilt mirrors around half a day.
    #[test]
    fn tilt_mirrors_around_half_day() {
        for fraction in [0.1, 0.2, 0.3, 0.45] {
            assert_relative_eq!(tilt_at(fraction), tilt_at(1.0 - fraction), epsilon = 1e-4);
        }
    }
}
