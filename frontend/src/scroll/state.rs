/// Distance (px) below which the smoother snaps onto its target.
const SNAP_DISTANCE_PX: f64 = 0.5;

/// A time constant of lag/3 covers ~95% of a jump within `lag` seconds.
const LAG_TIME_CONSTANTS: f64 = 3.0;

/// Vertical scroll position and viewport height, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub offset_y: f64,
    pub viewport_height: f64,
}

impl ScrollState {
    /// Builds a sanitised sample. Overscroll (negative or non-finite offsets)
    /// reads as the top of the page; a viewport without height is no sample.
    pub fn new(offset_y: f64, viewport_height: f64) -> Option<Self> {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            return None;
        }
        let offset_y = if offset_y.is_finite() { offset_y.max(0.0) } else { 0.0 };
        Some(Self {
            offset_y,
            viewport_height,
        })
    }

    pub fn look_ahead(&self, fraction: f64) -> f64 {
        self.offset_y + self.viewport_height * fraction
    }
}

/// Source of scroll samples. `None` means there is no viewport to read,
/// e.g. during teardown or outside a browser.
pub trait Viewport {
    fn sample(&self) -> Option<ScrollState>;
}

/// Coalesces a raw scroll/resize event stream into at most one sample per
/// rendered frame.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    current: Option<ScrollState>,
    pending: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event. Returns true only for the first event since the
    /// last flush, which is when the caller should request a frame.
    pub fn notify(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Samples the viewport if anything changed since the previous frame.
    pub fn flush<V: Viewport + ?Sized>(&mut self, viewport: &V) -> Option<ScrollState> {
        if self.pending || self.current.is_none() {
            self.pending = false;
            if let Some(state) = viewport.sample() {
                self.current = Some(state);
            }
        }
        self.current
    }

    pub fn offset_y(&self) -> f64 {
        self.current.map(|state| state.offset_y).unwrap_or(0.0)
    }
}

/// Lagging copy of the scroll offset that drives scrubbed timelines.
#[derive(Debug, Clone)]
pub struct ScrollSmoother {
    lag_secs: f64,
    value: Option<f64>,
    target: f64,
}

impl ScrollSmoother {
    pub fn new(lag_secs: f64) -> Self {
        Self {
            lag_secs: if lag_secs.is_finite() { lag_secs.max(0.0) } else { 0.0 },
            value: None,
            target: 0.0,
        }
    }

    pub fn advance(&mut self, target: f64, dt_secs: f64) -> f64 {
        self.target = target;
        let next = match self.value {
            Some(value) if self.lag_secs > 0.0 => {
                let dt = if dt_secs.is_finite() { dt_secs.max(0.0) } else { 0.0 };
                let tau = self.lag_secs / LAG_TIME_CONSTANTS;
                let alpha = 1.0 - (-dt / tau).exp();
                let stepped = value + (target - value) * alpha;
                if (target - stepped).abs() < SNAP_DISTANCE_PX {
                    target
                } else {
                    stepped
                }
            }
            _ => target,
        };
        self.value = Some(next);
        next
    }

    pub fn is_settled(&self) -> bool {
        self.value.map_or(true, |value| value == self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeViewport {
        offset: Cell<f64>,
        height: f64,
        reads: Cell<u32>,
    }

    impl FakeViewport {
        fn new(offset: f64, height: f64) -> Self {
            Self {
                offset: Cell::new(offset),
                height,
                reads: Cell::new(0),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn sample(&self) -> Option<ScrollState> {
            self.reads.set(self.reads.get() + 1);
            ScrollState::new(self.offset.get(), self.height)
        }
    }

    struct Headless;

    impl Viewport for Headless {
        fn sample(&self) -> Option<ScrollState> {
            None
        }
    }

    #[test]
    fn sanitises_samples() {
        assert_eq!(ScrollState::new(-20.0, 800.0).unwrap().offset_y, 0.0);
        assert_eq!(ScrollState::new(f64::NAN, 800.0).unwrap().offset_y, 0.0);
        assert!(ScrollState::new(10.0, 0.0).is_none());
        assert!(ScrollState::new(10.0, f64::INFINITY).is_none());
    }

    #[test]
    fn look_ahead_sits_in_upper_third() {
        let state = ScrollState::new(300.0, 900.0).unwrap();
        assert_eq!(state.look_ahead(1.0 / 3.0), 600.0);
    }

    #[test]
    fn bursts_coalesce_into_one_sample_per_frame() {
        let viewport = FakeViewport::new(0.0, 1000.0);
        let mut tracker = ScrollTracker::new();
        tracker.flush(&viewport);
        assert_eq!(viewport.reads.get(), 1);

        assert!(tracker.notify());
        for offset in [10.0, 20.0, 30.0, 40.0] {
            viewport.offset.set(offset);
            assert!(!tracker.notify());
        }

        let state = tracker.flush(&viewport).unwrap();
        assert_eq!(state.offset_y, 40.0);
        assert_eq!(viewport.reads.get(), 2);

        // Nothing new happened, so the next frame reuses the sample.
        tracker.flush(&viewport);
        assert_eq!(viewport.reads.get(), 2);
        assert!(tracker.notify());
    }

    #[test]
    fn missing_viewport_is_a_no_op() {
        let mut tracker = ScrollTracker::new();
        tracker.notify();
        assert_eq!(tracker.flush(&Headless), None);
        assert_eq!(tracker.offset_y(), 0.0);

        let viewport = FakeViewport::new(250.0, 1000.0);
        tracker.notify();
        tracker.flush(&viewport);
        tracker.notify();
        assert_eq!(tracker.flush(&Headless).unwrap().offset_y, 250.0);
    }

    #[test]
    fn smoother_snaps_on_first_sample() {
        let mut smoother = ScrollSmoother::new(0.6);
        assert_eq!(smoother.advance(400.0, 0.016), 400.0);
        assert!(smoother.is_settled());
    }

    #[test]
    fn smoother_catches_up_within_lag() {
        let mut smoother = ScrollSmoother::new(0.6);
        smoother.advance(0.0, 0.0);
        let halfway = smoother.advance(1000.0, 0.1);
        assert!(halfway > 0.0 && halfway < 1000.0);
        assert!(!smoother.is_settled());

        let mut value = halfway;
        for _ in 0..120 {
            value = smoother.advance(1000.0, 1.0 / 60.0);
        }
        assert_eq!(value, 1000.0);
        assert!(smoother.is_settled());
    }

    #[test]
    fn zero_lag_tracks_exactly() {
        let mut smoother = ScrollSmoother::new(0.0);
        smoother.advance(0.0, 0.0);
        assert_eq!(smoother.advance(730.0, 0.016), 730.0);
    }
}
