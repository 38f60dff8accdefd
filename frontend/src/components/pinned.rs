use std::rc::Rc;

use yew::prelude::*;

use crate::components::scroll_provider::{use_scroll_frame, use_site_config};
use crate::dom::measure_node;
use crate::scroll::pin::{PinPhase, PinningController};
use crate::scroll::timeline::{evaluate, PhaseTimeline, StyleMap, ENTRANCE_END, EXIT_START};

/// Progress shown when no scroll frame is available: the middle of the
/// settle phase, where every element sits at rest.
const STATIC_PROGRESS: f64 = (ENTRANCE_END + EXIT_START) / 2.0;

pub struct PinView {
    /// Style for the pin spacer, which reserves the scroll distance.
    pub spacer_style: String,
    /// Style for the section inside the spacer.
    pub stage_style: String,
    pub phase: PinPhase,
    pub styles: StyleMap,
}

impl PinView {
    pub fn style(&self, target: &str) -> String {
        self.styles
            .get(target)
            .map(|style| style.to_css())
            .unwrap_or_default()
    }
}

/// Pins the section inside `spacer` for its span and plays `timeline`
/// against the scrubbed playhead.
#[hook]
pub fn use_pin(label: &'static str, spacer: NodeRef, timeline: Rc<PhaseTimeline>) -> PinView {
    let config = use_site_config();
    let frame = use_scroll_frame();
    let controller = use_mut_ref(|| PinningController::new(label, config.pin_span_ratio));

    let Some(frame) = frame else {
        return PinView {
            spacer_style: "min-height: 100vh;".to_string(),
            stage_style: "position: relative;".to_string(),
            phase: PinPhase::Before,
            styles: evaluate(STATIC_PROGRESS, &timeline),
        };
    };

    let mut controller = controller.borrow_mut();
    let spacer_top = measure_node(&spacer).map(|bounds| bounds.top);
    let (pin, _) = controller.update(
        frame.state.offset_y,
        spacer_top,
        frame.state.viewport_height,
    );
    let progress = controller.progress_at(frame.smoothed_offset);

    let stage_style = match pin.phase {
        PinPhase::Pinned => "position: fixed; top: 0; left: 0; right: 0;".to_string(),
        PinPhase::Before | PinPhase::After => format!(
            "position: absolute; top: {}px; left: 0; right: 0;",
            pin.spacer_offset()
        ),
    };

    PinView {
        spacer_style: format!(
            "position: relative; height: {}px;",
            frame.state.viewport_height + pin.span
        ),
        stage_style,
        phase: pin.phase,
        styles: evaluate(progress, &timeline),
    }
}
