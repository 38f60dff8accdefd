use yew::prelude::*;

use crate::components::scroll_provider::{use_scroll_frame, use_site_config};
use crate::dom::measure_node;
use crate::scroll::reveal::RevealTrigger;
use crate::scroll::timeline::{evaluate, Easing, PhaseTimeline, Unit};

const ITEM: &str = "item";

/// Timed entrance for elements that are revealed rather than scrubbed. The
/// hidden and shown states come from an entrance timeline; the browser
/// transitions between them.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealMotion {
    timeline: PhaseTimeline,
    duration_secs: f64,
    stagger_secs: f64,
    easing: Easing,
}

impl RevealMotion {
    pub fn from_offset(dx: f64, dy: f64, unit: Unit) -> Self {
        Self {
            timeline: PhaseTimeline::new().enter_from(ITEM, dx, dy, unit, 0.0),
            duration_secs: 0.8,
            stagger_secs: 0.0,
            easing: Easing::EaseOutCubic,
        }
    }

    pub fn fade() -> Self {
        Self::from_offset(0.0, 0.0, Unit::Px)
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger_secs = secs;
        self
    }

    /// Inline style for the `index`-th element of a revealed group.
    pub fn style(&self, index: usize, revealed: bool) -> String {
        let progress = if revealed { 1.0 } else { 0.0 };
        let state = evaluate(progress, &self.timeline)
            .remove(ITEM)
            .map(|style| style.to_css())
            .unwrap_or_default();
        let delay = if revealed {
            self.stagger_secs * index as f64
        } else {
            0.0
        };
        let timing = format!("{}s {} {}s", self.duration_secs, self.easing.css(), delay);
        format!("{} transition: transform {}, opacity {};", state, timing, timing)
    }
}

/// Whether the element behind `node` has crossed the reveal line. Renders
/// revealed when there is no scroll frame to go on.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let config = use_site_config();
    let frame = use_scroll_frame();
    let trigger = use_mut_ref(|| RevealTrigger::new(config.reveal_start_fraction));

    match frame {
        Some(frame) => trigger
            .borrow_mut()
            .update(&frame.state, measure_node(&node).map(|bounds| bounds.top)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_is_the_entrance_start() {
        let motion = RevealMotion::from_offset(0.0, 40.0, Unit::Px);
        let hidden = motion.style(0, false);
        assert!(hidden.starts_with("transform: translate(0px, 40px); opacity: 0;"));
        let shown = motion.style(0, true);
        assert!(shown.starts_with("transform: translate(0px, 0px); opacity: 1;"));
    }

    #[test]
    fn stagger_only_delays_the_way_in() {
        let motion = RevealMotion::from_offset(0.0, 30.0, Unit::Px)
            .duration(0.6)
            .stagger(0.1);
        assert!(motion.style(2, true).contains("0.6s cubic-bezier(0.33, 1, 0.68, 1) 0.2s"));
        assert!(motion.style(2, false).contains(" 0s"));
    }

    #[test]
    fn fade_has_no_transform() {
        let style = RevealMotion::fade().style(0, false);
        assert!(style.starts_with("opacity: 0;"));
    }
}
