use std::time::Duration;

// ---------------------------------------------------------------------------
// Animation driver
// ---------------------------------------------------------------------------

/// Steps through the distinct years at a fixed interval, wrapping back to the
/// first year after the last.
///
/// The driver owns no clock: the caller feeds it elapsed time, so the UI loop
/// and tests advance it the same way.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    years: Vec<i32>,
    position: usize,
    interval: Duration,
    /// Time accumulated towards the next frame.
    pending: Duration,
}

impl AnimationDriver {
    /// `years` must already be distinct and ascending.
    pub fn new(years: Vec<i32>, interval: Duration) -> Self {
        Self {
            years,
            position: 0,
            interval,
            pending: Duration::ZERO,
        }
    }

    /// Year currently on screen, `None` if there is nothing to animate.
    pub fn current_year(&self) -> Option<i32> {
        self.years.get(self.position).copied()
    }

    /// Index of the current frame within one loop.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn frame_count(&self) -> usize {
        self.years.len()
    }

    /// Move to the next year, wrapping at the end.
    pub fn step(&mut self) -> Option<i32> {
        if self.years.is_empty() {
            return None;
        }
        self.position = (self.position + 1) % self.years.len();
        self.current_year()
    }

    /// Account for `elapsed` wall time and return how many frames were
    /// advanced. Runs in constant time however long the pause was.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if self.years.is_empty() || self.interval.is_zero() {
            return 0;
        }
        let pending = (self.pending + elapsed).as_nanos();
        let interval = self.interval.as_nanos();

        let steps = pending / interval;
        self.pending = Duration::from_nanos((pending % interval) as u64);

        let len = self.years.len();
        let offset = (steps % len as u128) as usize;
        self.position = (self.position + offset) % len;

        let steps = usize::try_from(steps).unwrap_or(usize::MAX);
        if steps > 0 {
            log::debug!("advanced {steps} frame(s) to {:?}", self.current_year());
        }
        steps
    }

    /// Time left before the next frame is due.
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.pending)
    }

    /// Endless sequence of years in playback order, starting from the first.
    #[cfg(test)]
    pub fn frames(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().copied().cycle()
    }
}
