use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::error::SceneError;

/// Normalized position within one day/night cycle, always in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DayPhase(f32);

impl DayPhase {
    /// Compute the phase of `sim_clock` seconds inside a day of `day_length` seconds.
    ///
    /// Uses floored modulo, so clocks before the epoch still map into `[0, 1)`.
    pub fn at(sim_clock: f64, day_length: f64) -> Result<Self, SceneError> {
        validate_day_length(day_length)?;
        if !sim_clock.is_finite() {
            return Err(SceneError::MalformedTimestamp(sim_clock));
        }
        let fraction = (sim_clock.rem_euclid(day_length) / day_length) as f32;
        // Rounding can land exactly on 1.0 just before a wrap.
        if fraction >= 1.0 {
            return Ok(Self(0.0));
        }
        Ok(Self(fraction))
    }

    /// Angular position on the orbit in radians, `phase * 2π`.
    pub fn angle(self) -> f32 {
        self.0 * TAU
    }
}

/// Reject day lengths that cannot describe a cycle.
fn validate_day_length(day_length: f64) -> Result<(), SceneError> {
    if day_length.is_finite() && day_length > 0.0 {
        return Ok(());
    }
    Err(SceneError::InvalidConfiguration(format!(
        "day length must be a positive number of seconds, got {day_length}"
    )))
}

/// Validated day/night cycle constants shared by the per-frame updaters.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DayCycle {
    /// Seconds per full sun revolution.
    pub day_length: f64,
    /// Distance of the visible sun sphere from the origin.
    pub sun_radius: f32,
    /// Distance of the sun's point light from the origin.
    pub light_radius: f32,
}

impl DayCycle {
    /// Build cycle parameters, rejecting a non-positive day or non-finite radii.
    pub fn new(day_length: f64, sun_radius: f32, light_radius: f32) -> Result<Self, SceneError> {
        validate_day_length(day_length)?;
        if !sun_radius.is_finite() || !light_radius.is_finite() {
            return Err(SceneError::InvalidConfiguration(format!(
                "orbit radii must be finite, got sun={sun_radius} light={light_radius}"
            )));
        }
        Ok(Self {
            day_length,
            sun_radius,
            light_radius,
        })
    }

    /// Phase of the cycle at `sim_clock` seconds.
    pub fn phase_at(&self, sim_clock: f64) -> Result<DayPhase, SceneError> {
        DayPhase::at(sim_clock, self.day_length)
    }
}

/// Lifecycle of the frame driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverState {
    /// No frame has been processed yet.
    #[default]
    Idle,
    /// Steady per-frame loop.
    Running,
}

/// Simulation clock owned and advanced by the frame driver.
#[derive(Resource, Debug, Default)]
pub struct SimClock {
    /// Elapsed simulation time in seconds; never decreases.
    elapsed_secs: f64,
    /// Whether the first tick has happened.
    state: DriverState,
    /// Number of accepted ticks.
    ticks: u64,
}

impl SimClock {
    /// Host timestamps arrive in milliseconds.
    pub(crate) const MILLIS_PER_SEC: f64 = 1000.0;

    /// Elapsed simulation time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Current driver lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Number of ticks accepted so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance from a host timestamp in milliseconds.
    ///
    /// Non-finite timestamps are rejected and leave the clock untouched. A
    /// timestamp earlier than the current clock holds the clock in place.
    pub fn advance_from_millis(&mut self, timestamp_ms: f64) -> Result<(), SceneError> {
        if !timestamp_ms.is_finite() {
            return Err(SceneError::MalformedTimestamp(timestamp_ms));
        }
        let secs = timestamp_ms / Self::MILLIS_PER_SEC;
        self.elapsed_secs = self.elapsed_secs.max(secs);
        self.state = DriverState::Running;
        self.ticks += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    /// Phase stays inside `[0, 1)` for clocks across many cycles.
    #[test]
    fn phase_stays_in_unit_range() {
        let day = 15.0;
        for step in 0..2_000 {
            let t = step as f64 * 0.173;
            let phase = DayPhase::at(t, day).unwrap().0;
            assert!((0.0..1.0).contains(&phase), "t={t} phase={phase}");
        }
    }

    /// Clocks before the epoch use floored modulo and stay in range.
    #[test]
    fn negative_clock_wraps_forward() {
        let phase = DayPhase::at(-3.75, 15.0).unwrap().0;
        assert_relative_eq!(phase, 0.75, epsilon = 1e-6);

        let tiny = DayPhase::at(-1e-18, 15.0).unwrap().0;
        assert!((0.0..1.0).contains(&tiny));
    }

    /// Adding one day length leaves the phase unchanged.
    #[test]
    fn phase_is_periodic() {
        let day = 15.0;
        for t in [0.0, 1.3, 3.75, 7.5, 14.9, 100.25] {
            let a = DayPhase::at(t, day).unwrap().0;
            let b = DayPhase::at(t + day, day).unwrap().0;
            assert_relative_eq!(a, b, epsilon = 1e-5);
        }
    }

    /// Small clock steps away from a wrap point give small phase steps.
    #[test]
    fn phase_is_continuous_between_wraps() {
        let day = 15.0;
        let t = 4.2;
        let base = DayPhase::at(t, day).unwrap().0;
        let near = DayPhase::at(t + 1e-4, day).unwrap().0;
        assert!((near - base).abs() < 1e-4);
    }

    /// Phase resets to zero exactly at a multiple of the day length.
    #[test]
    fn phase_wraps_at_day_boundary() {
        let before = DayPhase::at(15.0 - 1e-3, 15.0).unwrap().0;
        let at = DayPhase::at(15.0, 15.0).unwrap().0;
        assert!(before > 0.99);
        assert_eq!(at, 0.0);
    }

    /// Quarter and half day map to the expected orbit angles.
    #[test]
    fn phase_angle_matches_day_fractions() {
        let quarter = DayPhase::at(3.75, 15.0).unwrap();
        assert_relative_eq!(quarter.0, 0.25, epsilon = 1e-6);
        assert_relative_eq!(quarter.angle(), std::f32::consts::FRAC_PI_2, epsilon = 1e-5);

        let half = DayPhase::at(7.5, 15.0).unwrap();
        assert_relative_eq!(half.angle(), std::f32::consts::PI, epsilon = 1e-5);
    }

    /// Zero, negative, and non-finite day lengths are configuration errors.
    #[test]
    fn non_positive_day_length_is_rejected() {
        for day in [0.0, -15.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                DayPhase::at(1.0, day),
                Err(SceneError::InvalidConfiguration(_))
            ));
            assert!(matches!(
                DayCycle::new(day, 35.0, 25.0),
                Err(SceneError::InvalidConfiguration(_))
            ));
        }
    }

    /// First accepted tick moves the driver from idle to running.
    #[test]
    fn first_tick_starts_driver() {
        let mut clock = SimClock::default();
        assert_eq!(clock.state(), DriverState::Idle);

        clock.advance_from_millis(1_500.0).unwrap();
        assert_eq!(clock.state(), DriverState::Running);
        assert_eq!(clock.ticks(), 1);
        assert_relative_eq!(clock.elapsed_secs(), 1.5);
    }

    /// Malformed timestamps are rejected and regressions hold the clock.
    #[test]
    fn clock_rejects_nan_and_never_runs_backwards() {
        let mut clock = SimClock::default();
        clock.advance_from_millis(2_000.0).unwrap();

        assert!(matches!(
            clock.advance_from_millis(f64::NAN),
            Err(SceneError::MalformedTimestamp(_))
        ));
        assert_relative_eq!(clock.elapsed_secs(), 2.0);
        assert_eq!(clock.ticks(), 1);

        clock.advance_from_millis(1_000.0).unwrap();
        assert_relative_eq!(clock.elapsed_secs(), 2.0);
    }
}
