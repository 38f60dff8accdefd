use log::debug;

use super::section::SectionRegistry;
use super::state::ScrollState;

/// Picks the section under the look-ahead point for the navigation highlight.
#[derive(Debug, Clone)]
pub struct ActiveSectionResolver {
    look_ahead_fraction: f64,
    active: Option<String>,
}

impl ActiveSectionResolver {
    pub fn new(look_ahead_fraction: f64, initial: Option<&str>) -> Self {
        Self {
            look_ahead_fraction,
            active: initial.map(str::to_string),
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Later sections win where reported bounds overlap, and a point that
    /// falls in a gap goes to the section below it. Above the first or
    /// below the last measured section the previous answer is kept.
    pub fn resolve(&mut self, state: &ScrollState, registry: &SectionRegistry) -> Option<&str> {
        let point = state.look_ahead(self.look_ahead_fraction);

        let mut hit = None;
        let mut previous_bottom = None;
        for section in registry.iter() {
            let Some(bounds) = section.bounds else {
                continue;
            };
            if bounds.contains(point) {
                hit = Some(section);
            } else if hit.is_none()
                && previous_bottom.map_or(false, |bottom| bottom <= point)
                && point < bounds.top
            {
                hit = Some(section);
            }
            previous_bottom = Some(bounds.bottom());
        }

        if let Some(section) = hit {
            if self.active.as_deref() != Some(section.id.as_str()) {
                debug!("Active section: {}", section.label);
                self.active = Some(section.id.clone());
            }
        }
        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::section::Bounds;

    fn registry(layout: &[(&str, f64, f64)]) -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        for (id, top, height) in layout {
            registry.register(id, id).unwrap();
            registry.set_bounds(id, Bounds::new(*top, *height));
        }
        registry
    }

    // Zero look-ahead makes the offset itself the probe point.
    fn at(offset: f64) -> ScrollState {
        ScrollState::new(offset, 900.0).unwrap()
    }

    #[test]
    fn touching_bounds_resolve_to_the_later_section() {
        let registry = registry(&[("a", 0.0, 100.0), ("b", 100.0, 100.0)]);
        let mut resolver = ActiveSectionResolver::new(0.0, None);
        assert_eq!(resolver.resolve(&at(100.0), &registry), Some("b"));
        assert_eq!(resolver.resolve(&at(99.0), &registry), Some("a"));
    }

    #[test]
    fn overlap_prefers_the_later_section() {
        let registry = registry(&[("a", 0.0, 150.0), ("b", 100.0, 100.0)]);
        let mut resolver = ActiveSectionResolver::new(0.0, None);
        assert_eq!(resolver.resolve(&at(120.0), &registry), Some("b"));
    }

    #[test]
    fn gap_prefers_the_section_below() {
        let registry = registry(&[("a", 0.0, 100.0), ("b", 140.0, 100.0)]);
        let mut resolver = ActiveSectionResolver::new(0.0, Some("a"));
        assert_eq!(resolver.resolve(&at(120.0), &registry), Some("b"));
    }

    #[test]
    fn extremes_retain_the_previous_section() {
        let registry = registry(&[("a", 200.0, 100.0), ("b", 300.0, 100.0)]);
        let mut resolver = ActiveSectionResolver::new(0.0, Some("a"));
        assert_eq!(resolver.resolve(&at(50.0), &registry), Some("a"));
        assert_eq!(resolver.resolve(&at(350.0), &registry), Some("b"));
        assert_eq!(resolver.resolve(&at(5000.0), &registry), Some("b"));
    }

    #[test]
    fn uses_the_upper_third_of_the_viewport() {
        let registry = registry(&[("home", 0.0, 1000.0), ("services", 1000.0, 1000.0)]);
        let mut resolver = ActiveSectionResolver::new(1.0 / 3.0, Some("home"));
        let state = ScrollState::new(700.0, 900.0).unwrap();
        assert_eq!(resolver.resolve(&state, &registry), Some("services"));
    }

    #[test]
    fn unmeasured_sections_are_skipped() {
        let mut registry = registry(&[("a", 0.0, 100.0), ("b", 100.0, 100.0)]);
        registry.set_bounds("b", None);
        let mut resolver = ActiveSectionResolver::new(0.0, Some("a"));
        assert_eq!(resolver.resolve(&at(150.0), &registry), Some("a"));
    }
}
