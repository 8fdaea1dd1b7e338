//! Fixed timestep accumulator

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame we accept before clamping (a backgrounded tab)
const MAX_FRAME_DT: f32 = 0.1;

/// Turns variable frame times into a whole number of fixed ticks
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_substeps,
        }
    }

    /// Add one frame's elapsed seconds. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            self.accumulator -= self.dt;
            steps += 1;
        }
        // Drop whatever the substep cap left behind
        if steps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.dt);
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_step_exact() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.accumulate(SIM_DT), 1);
    }

    #[test]
    fn test_accumulates_partial() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut ts = FixedTimestep::new(1.0 / 32.0, 100);
        // 1s would be 32 steps, clamped to 0.1s
        assert_eq!(ts.accumulate(1.0), 3);
    }

    #[test]
    fn test_substep_cap() {
        let mut ts = FixedTimestep::new(0.01, 4);
        assert_eq!(ts.accumulate(0.1), 4);
        // At most one step carried into the next frame
        assert!(ts.accumulate(0.0) <= 1);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.accumulate(SIM_DT), 1);
    }
}
