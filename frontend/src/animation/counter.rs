/// Time between counter frames.
pub const TICK_MS: u32 = 50;
/// Frames it takes a counter to reach its target.
pub const STEPS: u32 = 60;

/// A number that climbs from zero to `target` in `STEPS` equal increments.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    target: u32,
    current: f64,
}

impl StatCounter {
    pub fn new(target: u32) -> Self {
        Self { target, current: 0.0 }
    }

    /// Moves one frame forward. Returns true while more frames remain.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.current += f64::from(self.target) / f64::from(STEPS);
        if self.current >= f64::from(self.target) {
            self.current = f64::from(self.target);
        }
        !self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.current >= f64::from(self.target)
    }

    pub fn value(&self) -> u32 {
        self.current.floor() as u32
    }
}

/// Ticks every counter together; true while any is still running.
pub fn tick_all(counters: &mut [StatCounter]) -> bool {
    counters.iter_mut().fold(false, |running, c| c.tick() | running)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reaches_target_exactly_and_never_overshoots() {
        for target in [24, 25, 50, 95, 7, 1] {
            let mut counter = StatCounter::new(target);
            let mut last = counter.value();
            let mut frames = 0;
            while counter.tick() {
                frames += 1;
                assert!(counter.value() >= last);
                assert!(counter.value() <= target);
                last = counter.value();
            }
            assert_eq!(counter.value(), target, "target {target}");
            assert!(frames < STEPS + 1);
        }
    }

    #[test]
    fn shows_floored_values() {
        let mut counter = StatCounter::new(50);
        counter.tick();
        // 50 / 60 = 0.83
        assert_eq!(counter.value(), 0);
        counter.tick();
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn zero_target_is_already_done() {
        let mut counter = StatCounter::new(0);
        assert!(counter.is_done());
        assert!(!counter.tick());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn tick_all_runs_until_the_slowest_finishes() {
        let mut counters = vec![StatCounter::new(50), StatCounter::new(95)];
        let mut frames = 1;
        while tick_all(&mut counters) {
            frames += 1;
        }
        assert!(frames <= STEPS + 1);
        assert_eq!(counters.iter().map(StatCounter::value).collect::<Vec<_>>(), vec![50, 95]);
    }
}
