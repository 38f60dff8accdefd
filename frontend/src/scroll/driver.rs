use super::resolver::ActiveSectionResolver;
use super::section::{LayoutProbe, SectionRegistry};
use super::state::{ScrollSmoother, ScrollState, ScrollTracker, Viewport};
use crate::config::SiteConfig;

/// Longest step the smoother takes in one frame. The loop sleeps while
/// settled, so the first frame after a pause would otherwise see the whole
/// idle gap and jump straight to the target.
const MAX_FRAME_SECS: f64 = 1.0 / 30.0;

/// What every reader sees for one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub state: ScrollState,
    /// Lagging offset for scrubbed timelines.
    pub smoothed_offset: f64,
    pub active: Option<String>,
    /// False while the smoothed offset is still catching up.
    pub settled: bool,
}

/// Runs the per-frame pipeline: the tracker writes the scroll state first,
/// then section bounds are refreshed and the resolver reads both.
pub struct ScrollDriver {
    tracker: ScrollTracker,
    smoother: ScrollSmoother,
    registry: SectionRegistry,
    resolver: ActiveSectionResolver,
    last_frame_ms: Option<f64>,
}

impl ScrollDriver {
    pub fn new(config: &SiteConfig, registry: SectionRegistry) -> Self {
        let initial = registry.iter().next().map(|section| section.id.clone());
        Self {
            tracker: ScrollTracker::new(),
            smoother: ScrollSmoother::new(config.scrub_lag_secs),
            resolver: ActiveSectionResolver::new(config.look_ahead_fraction, initial.as_deref()),
            registry,
            last_frame_ms: None,
        }
    }

    /// Call for every scroll or resize event. True when a frame should be
    /// requested.
    pub fn notify(&mut self) -> bool {
        self.tracker.notify()
    }

    pub fn frame<V, P>(&mut self, now_ms: f64, viewport: &V, layout: &P) -> Option<ScrollFrame>
    where
        V: Viewport + ?Sized,
        P: LayoutProbe + ?Sized,
    {
        let state = self.tracker.flush(viewport)?;

        let dt_secs = self
            .last_frame_ms
            .map(|last| ((now_ms - last) / 1000.0).min(MAX_FRAME_SECS))
            .unwrap_or(0.0);
        self.last_frame_ms = Some(now_ms);
        let smoothed_offset = self.smoother.advance(self.tracker.offset_y(), dt_secs);

        self.registry.refresh(layout);
        let active = self.resolver.resolve(&state, &self.registry).map(str::to_string);

        Some(ScrollFrame {
            state,
            smoothed_offset,
            active,
            settled: self.smoother.is_settled(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::section::{Bounds, MeasureError};
    use std::cell::Cell;

    struct FakeViewport {
        offset: Cell<f64>,
    }

    impl Viewport for FakeViewport {
        fn sample(&self) -> Option<ScrollState> {
            ScrollState::new(self.offset.get(), 900.0)
        }
    }

    struct Stacked;

    impl LayoutProbe for Stacked {
        fn measure(&self, id: &str) -> Result<Bounds, MeasureError> {
            match id {
                "home" => Ok(Bounds { top: 0.0, height: 1000.0 }),
                "services" => Ok(Bounds { top: 1000.0, height: 1000.0 }),
                _ => Err(MeasureError::Missing(id.to_string())),
            }
        }
    }

    fn driver(lag: f64) -> ScrollDriver {
        let config = SiteConfig {
            scrub_lag_secs: lag,
            ..SiteConfig::default()
        };
        let registry =
            SectionRegistry::from_entries([("home", "Home"), ("services", "Services")]).unwrap();
        ScrollDriver::new(&config, registry)
    }

    #[test]
    fn starts_on_the_first_section() {
        let viewport = FakeViewport { offset: Cell::new(0.0) };
        let mut driver = driver(0.0);
        let frame = driver.frame(0.0, &viewport, &Stacked).unwrap();
        assert_eq!(frame.active.as_deref(), Some("home"));
        assert!(frame.settled);
    }

    #[test]
    fn resolver_reads_the_state_written_this_frame() {
        let viewport = FakeViewport { offset: Cell::new(0.0) };
        let mut driver = driver(0.0);
        driver.frame(0.0, &viewport, &Stacked);

        viewport.offset.set(800.0);
        assert!(driver.notify());
        let frame = driver.frame(16.0, &viewport, &Stacked).unwrap();
        assert_eq!(frame.state.offset_y, 800.0);
        assert_eq!(frame.active.as_deref(), Some("services"));
    }

    #[test]
    fn smoothed_offset_lags_until_settled() {
        let viewport = FakeViewport { offset: Cell::new(0.0) };
        let mut driver = driver(0.6);
        driver.frame(0.0, &viewport, &Stacked);

        viewport.offset.set(1200.0);
        driver.notify();
        let frame = driver.frame(16.0, &viewport, &Stacked).unwrap();
        assert!(frame.smoothed_offset < 1200.0);
        assert!(!frame.settled);

        let mut now = 16.0;
        let mut last = frame;
        while !last.settled {
            now += 16.0;
            last = driver.frame(now, &viewport, &Stacked).unwrap();
            assert!(now < 5000.0, "smoother never settled");
        }
        assert_eq!(last.smoothed_offset, 1200.0);
    }

    #[test]
    fn scrub_lag_survives_an_idle_pause() {
        let viewport = FakeViewport { offset: Cell::new(0.0) };
        let mut driver = driver(0.6);
        assert!(driver.frame(0.0, &viewport, &Stacked).unwrap().settled);

        // The frame loop slept for three seconds before this jump.
        viewport.offset.set(1200.0);
        driver.notify();
        let frame = driver.frame(3000.0, &viewport, &Stacked).unwrap();
        assert!(frame.smoothed_offset > 0.0);
        assert!(frame.smoothed_offset < 1200.0 * 0.5, "{}", frame.smoothed_offset);
        assert!(!frame.settled);
    }
}
