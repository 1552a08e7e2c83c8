//! Synthetic sensor source
//!
//! Deterministic triangle wave so demo runs are reproducible without
//! hardware attached.

use crate::settings::SourceSettings;

pub struct SyntheticSource {
    baseline: f32,
    swing: f32,
    period: u32,
    tick: u32,
}

impl SyntheticSource {
    pub fn new(settings: &SourceSettings) -> Self {
        Self {
            baseline: settings.baseline,
            swing: settings.swing,
            // A period below 2 would degenerate to a flat line at best and
            // divide by zero at worst
            period: settings.period.max(2),
            tick: 0,
        }
    }

    /// Next reading: `baseline` plus a triangle wave spanning `swing`.
    pub fn next_reading(&mut self) -> f32 {
        let phase = self.tick % self.period;
        self.tick = self.tick.wrapping_add(1);

        let half = self.period / 2;
        let ramp = if phase < half { phase } else { self.period - phase };
        self.baseline + self.swing * (ramp as f32 / half as f32 - 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(baseline: f32, swing: f32, period: u32) -> SyntheticSource {
        SyntheticSource::new(&SourceSettings {
            baseline,
            swing,
            period,
        })
    }

    #[test]
    fn test_readings_stay_within_swing() {
        let mut src = source(20.0, 4.0, 8);
        for _ in 0..32 {
            let v = src.next_reading();
            assert!(v >= 18.0 && v <= 22.0);
        }
    }

    #[test]
    fn test_wave_is_periodic() {
        let mut a = source(0.0, 2.0, 8);
        let mut b = source(0.0, 2.0, 8);
        for _ in 0..8 {
            b.next_reading();
        }
        for _ in 0..8 {
            assert_eq!(a.next_reading(), b.next_reading());
        }
    }
}
