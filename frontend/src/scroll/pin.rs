use log::debug;

use super::timeline::clamp_unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPhase {
    /// The section has not reached the viewport top yet.
    Before,
    /// The section is held in place while its timeline plays.
    Pinned,
    /// The span is used up and the section scrolls away with the page.
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinTransition {
    pub from: PinPhase,
    pub to: PinPhase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinFrame {
    pub phase: PinPhase,
    pub progress: f64,
    /// Scroll distance the pin lasts, in px. Zero until a valid measurement.
    pub span: f64,
}

impl PinFrame {
    /// Where the section sits inside its pin spacer when it is not fixed.
    pub fn spacer_offset(&self) -> f64 {
        match self.phase {
            PinPhase::After => self.span,
            PinPhase::Before | PinPhase::Pinned => 0.0,
        }
    }
}

/// `BEFORE -> PINNED -> AFTER` state machine for one pinned section. It is
/// a function of the scroll offset, so scrolling back up replays every
/// transition in reverse.
#[derive(Debug, Clone)]
pub struct PinningController {
    label: String,
    span_ratio: f64,
    anchor: Option<Anchor>,
    frame: PinFrame,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Anchor {
    top: f64,
    span: f64,
}

impl PinningController {
    pub fn new(label: impl Into<String>, span_ratio: f64) -> Self {
        Self {
            label: label.into(),
            span_ratio,
            anchor: None,
            frame: PinFrame {
                phase: PinPhase::Before,
                progress: 0.0,
                span: 0.0,
            },
        }
    }

    #[cfg(test)]
    pub fn frame(&self) -> PinFrame {
        self.frame
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Re-anchors on the pin spacer's document top and moves the state
    /// machine to `offset_y`. Without a usable top or span the controller
    /// keeps its last frame and waits for a valid measurement.
    pub fn update(
        &mut self,
        offset_y: f64,
        spacer_top: Option<f64>,
        viewport_height: f64,
    ) -> (PinFrame, Option<PinTransition>) {
        let span = self.span_ratio * viewport_height;
        match spacer_top {
            Some(top) if top.is_finite() && span.is_finite() && span > 0.0 => {
                self.anchor = Some(Anchor { top, span });
            }
            _ => {
                if self.anchor.is_some() {
                    debug!("Pin `{}` lost its measurement, holding", self.label);
                }
                return (self.frame, None);
            }
        }

        let previous = self.frame.phase;
        self.frame = self.frame_at(offset_y);
        let transition = (previous != self.frame.phase).then(|| PinTransition {
            from: previous,
            to: self.frame.phase,
        });
        if let Some(transition) = transition {
            debug!(
                "Pin `{}`: {:?} -> {:?}",
                self.label, transition.from, transition.to
            );
        }
        (self.frame, transition)
    }

    /// Timeline progress for an arbitrary offset, e.g. a smoothed playhead.
    /// Zero until the controller is armed.
    pub fn progress_at(&self, offset_y: f64) -> f64 {
        self.frame_at(offset_y).progress
    }

    fn frame_at(&self, offset_y: f64) -> PinFrame {
        let Some(Anchor { top, span }) = self.anchor else {
            return PinFrame {
                phase: PinPhase::Before,
                progress: 0.0,
                span: 0.0,
            };
        };
        let scrolled = offset_y - top;
        let phase = if scrolled < 0.0 {
            PinPhase::Before
        } else if scrolled <= span {
            PinPhase::Pinned
        } else {
            PinPhase::After
        };
        PinFrame {
            phase,
            progress: clamp_unit(scrolled / span),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::timeline::{evaluate, PhaseTimeline, Unit};

    const VIEWPORT: f64 = 1000.0;
    const TOP: f64 = 2000.0;

    fn controller() -> PinningController {
        PinningController::new("showcase", 1.3)
    }

    #[test]
    fn span_of_130_percent_maps_to_progress() {
        let mut pin = controller();
        for (scrolled, expected) in [(0.0, 0.0), (650.0, 0.5), (1300.0, 1.0), (1950.0, 1.0)] {
            let (frame, _) = pin.update(TOP + scrolled, Some(TOP), VIEWPORT);
            assert!((frame.progress - expected).abs() < 1e-9, "{scrolled}");
            assert!((frame.span - 1300.0).abs() < 1e-9);
        }
    }

    #[test]
    fn walks_through_every_phase_and_back() {
        let mut pin = controller();
        let offsets = [TOP - 10.0, TOP, TOP + 1300.0, TOP + 1301.0];
        let phases: Vec<_> = offsets
            .iter()
            .map(|offset| pin.update(*offset, Some(TOP), VIEWPORT).0.phase)
            .collect();
        assert_eq!(
            phases,
            [PinPhase::Before, PinPhase::Pinned, PinPhase::Pinned, PinPhase::After]
        );

        let (_, transition) = pin.update(TOP + 600.0, Some(TOP), VIEWPORT);
        assert_eq!(
            transition,
            Some(PinTransition {
                from: PinPhase::After,
                to: PinPhase::Pinned
            })
        );
        let (frame, transition) = pin.update(TOP - 1.0, Some(TOP), VIEWPORT);
        assert_eq!(frame.phase, PinPhase::Before);
        assert_eq!(frame.progress, 0.0);
        assert_eq!(transition.map(|t| t.to), Some(PinPhase::Before));
    }

    #[test]
    fn forward_then_back_restores_progress() {
        let mut pin = controller();
        let start = TOP + 400.0;
        let (before, _) = pin.update(start, Some(TOP), VIEWPORT);
        pin.update(start + 275.0, Some(TOP), VIEWPORT);
        let (after, _) = pin.update(start, Some(TOP), VIEWPORT);
        assert_eq!(before, after);
    }

    #[test]
    fn defers_until_measured() {
        let mut pin = controller();
        let (frame, transition) = pin.update(TOP + 500.0, None, VIEWPORT);
        assert_eq!(frame.phase, PinPhase::Before);
        assert_eq!(transition, None);
        assert!(!pin.is_armed());
        assert_eq!(pin.progress_at(TOP + 500.0), 0.0);

        let (frame, transition) = pin.update(TOP + 500.0, Some(TOP), VIEWPORT);
        assert_eq!(frame.phase, PinPhase::Pinned);
        assert!(transition.is_some());
    }

    #[test]
    fn never_pins_with_an_empty_span() {
        let mut pin = controller();
        let (frame, _) = pin.update(TOP + 10.0, Some(TOP), 0.0);
        assert_eq!(frame.phase, PinPhase::Before);
        assert!(!pin.is_armed());

        let mut collapsed = PinningController::new("collapsed", 0.0);
        let (frame, _) = collapsed.update(TOP + 10.0, Some(TOP), VIEWPORT);
        assert_eq!(frame.phase, PinPhase::Before);
    }

    #[test]
    fn holds_last_frame_when_measurement_drops() {
        let mut pin = controller();
        let (pinned, _) = pin.update(TOP + 300.0, Some(TOP), VIEWPORT);
        let (held, transition) = pin.update(TOP + 900.0, None, VIEWPORT);
        assert_eq!(held, pinned);
        assert_eq!(transition, None);
    }

    #[test]
    fn spacer_offset_follows_phase() {
        let mut pin = controller();
        assert_eq!(pin.update(TOP + 10.0, Some(TOP), VIEWPORT).0.spacer_offset(), 0.0);
        assert_eq!(pin.update(TOP + 5000.0, Some(TOP), VIEWPORT).0.spacer_offset(), 1300.0);
    }

    #[test]
    fn reverse_scroll_reproduces_entrance_styles() {
        let timeline = PhaseTimeline::new()
            .enter_from("headline", -55.0, 0.0, Unit::Vw, 0.0)
            .exit_to("headline", -8.0, -10.0, Unit::Vw);
        let mut pin = controller();

        let (start, _) = pin.update(TOP, Some(TOP), VIEWPORT);
        let entrance = evaluate(start.progress, &timeline);
        for scrolled in [300.0, 900.0, 1300.0, 1800.0, 700.0, 0.0] {
            pin.update(TOP + scrolled, Some(TOP), VIEWPORT);
        }
        let replayed = evaluate(pin.frame().progress, &timeline);
        assert_eq!(replayed, entrance);
        assert_eq!(replayed["headline"].opacity, Some(0.0));
    }
}
