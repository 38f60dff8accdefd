use log::debug;

use super::state::ScrollState;

/// Play-on-enter, reverse-on-leave-back toggle for sections that animate
/// on a timer instead of being scrubbed by the scrollbar.
#[derive(Debug, Clone)]
pub struct RevealTrigger {
    start_fraction: f64,
    revealed: bool,
}

impl RevealTrigger {
    pub fn new(start_fraction: f64) -> Self {
        Self {
            start_fraction,
            revealed: false,
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Revealed once the element's top is at or above the trigger line.
    /// Without a measurement the previous answer stands.
    pub fn update(&mut self, state: &ScrollState, element_top: Option<f64>) -> bool {
        let Some(top) = element_top.filter(|top| top.is_finite()) else {
            return self.revealed;
        };
        let revealed = top <= state.look_ahead(self.start_fraction);
        if revealed != self.revealed {
            debug!(
                "Reveal at {:.0}px {}",
                top,
                if revealed { "plays" } else { "reverses" }
            );
            self.revealed = revealed;
        }
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: f64) -> ScrollState {
        ScrollState::new(offset, 1000.0).unwrap()
    }

    #[test]
    fn plays_when_top_crosses_eighty_percent() {
        let mut trigger = RevealTrigger::new(0.8);
        assert!(!trigger.update(&at(0.0), Some(1200.0)));
        assert!(!trigger.update(&at(399.0), Some(1200.0)));
        assert!(trigger.update(&at(400.0), Some(1200.0)));
        assert!(trigger.update(&at(3000.0), Some(1200.0)));
    }

    #[test]
    fn reverses_when_scrolling_back_above() {
        let mut trigger = RevealTrigger::new(0.8);
        trigger.update(&at(900.0), Some(1200.0));
        assert!(trigger.is_revealed());
        assert!(!trigger.update(&at(100.0), Some(1200.0)));
    }

    #[test]
    fn unmeasured_element_keeps_state() {
        let mut trigger = RevealTrigger::new(0.8);
        trigger.update(&at(900.0), Some(1200.0));
        assert!(trigger.update(&at(0.0), None));
        assert!(trigger.update(&at(0.0), Some(f64::NAN)));
    }
}
