//! Progress-driven keyframe timelines.
//!
//! A [`PhaseTimeline`] is built once per animated section and then evaluated
//! as a pure function of progress. Every section uses the same three phases:
//!
//! * entrance, `[0.0, 0.3]`: elements travel in from a large offset and fade in;
//! * settle, `[0.3, 0.7]`: background drift only, transforms stay near identity;
//! * exit, `[0.7, 1.0]`: elements accelerate away and fade out.
//!
//! Keyframes for the same element and property compose per channel: of the
//! keyframes that have started, the last declared wins. Before any of them
//! has started the channel holds the `from` value of the one that starts
//! first, so an exit declared after an entrance never hides the entrance's
//! initial state.

use std::collections::BTreeMap;
use std::fmt::Write;

use log::warn;

pub const ENTRANCE_END: f64 = 0.3;
pub const EXIT_START: f64 = 0.7;
/// Largest scale the settle phase may reach.
pub const MAX_SETTLE_SCALE: f64 = 1.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    TranslateX,
    TranslateY,
    Opacity,
    Scale,
}

impl Property {
    /// Value of the property when nothing animates it.
    pub fn identity(self) -> f64 {
        match self {
            Property::TranslateX | Property::TranslateY => 0.0,
            Property::Opacity | Property::Scale => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutCubic,
    EaseInCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp_unit(t);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInCubic => t * t * t,
        }
    }

    /// Equivalent CSS timing function, for transitions the browser plays.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::EaseInCubic => "cubic-bezier(0.32, 0, 0.67, 0)",
        }
    }
}

/// Length unit of a translate value. Opacity and scale ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Px,
    Vw,
    Vh,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
        }
    }
}

/// Clamps to `[0, 1]`, reading NaN as 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub target: String,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub end: f64,
    pub easing: Easing,
    pub unit: Unit,
}

impl Keyframe {
    /// A linear, whole-span keyframe; narrow it with [`Keyframe::over`].
    pub fn new(target: impl Into<String>, property: Property, from: f64, to: f64) -> Self {
        Self {
            target: target.into(),
            property,
            from,
            to,
            start: 0.0,
            end: 1.0,
            easing: Easing::Linear,
            unit: Unit::Px,
        }
    }

    pub fn over(mut self, start: f64, end: f64) -> Self {
        let (mut start, mut end) = (clamp_unit(start), clamp_unit(end));
        if start > end {
            warn!(
                "Keyframe for `{}` runs backwards ({} > {}), swapping",
                self.target, start, end
            );
            std::mem::swap(&mut start, &mut end);
        }
        self.start = start;
        self.end = end;
        self
    }

    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn in_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    fn has_started(&self, progress: f64) -> bool {
        progress >= self.start
    }

    /// Value at `progress`: held at `from` before the interval, at `to` after.
    pub fn value_at(&self, progress: f64) -> f64 {
        if progress < self.start {
            return self.from;
        }
        if progress >= self.end {
            return self.to;
        }
        let t = (progress - self.start) / (self.end - self.start);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

/// A translate component with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    fn css(self) -> String {
        format!("{}{}", round(self.value), self.unit.suffix())
    }
}

/// Animated properties of one element. Unset properties stay at identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStyle {
    pub translate_x: Option<Length>,
    pub translate_y: Option<Length>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
}

impl ElementStyle {
    fn set(&mut self, property: Property, value: f64, unit: Unit) {
        match property {
            Property::TranslateX => self.translate_x = Some(Length { value, unit }),
            Property::TranslateY => self.translate_y = Some(Length { value, unit }),
            Property::Opacity => self.opacity = Some(clamp_unit(value)),
            Property::Scale => self.scale = Some(value),
        }
    }

    #[cfg(test)]
    pub fn get(&self, property: Property) -> f64 {
        match property {
            Property::TranslateX => self.translate_x.map(|l| l.value),
            Property::TranslateY => self.translate_y.map(|l| l.value),
            Property::Opacity => self.opacity,
            Property::Scale => self.scale,
        }
        .unwrap_or_else(|| property.identity())
    }

    /// Inline CSS declarations, e.g. `transform: translate(-55vw, 0px); opacity: 0;`.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if self.translate_x.is_some() || self.translate_y.is_some() || self.scale.is_some() {
            let zero = Length {
                value: 0.0,
                unit: Unit::Px,
            };
            let _ = write!(
                css,
                "transform: translate({}, {})",
                self.translate_x.unwrap_or(zero).css(),
                self.translate_y.unwrap_or(zero).css()
            );
            if let Some(scale) = self.scale {
                let _ = write!(css, " scale({})", round(scale));
            }
            css.push_str("; ");
        }
        if let Some(opacity) = self.opacity {
            let _ = write!(css, "opacity: {}; ", round(opacity));
        }
        css.trim_end().to_string()
    }
}

fn round(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

pub type StyleMap = BTreeMap<String, ElementStyle>;

/// Ordered keyframes for the elements of one section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseTimeline {
    keyframes: Vec<Keyframe>,
}

impl PhaseTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyframe(mut self, keyframe: Keyframe) -> Self {
        self.keyframes.push(keyframe);
        self
    }

    /// Travel in from `(dx, dy)` and fade in, starting at `start` and
    /// finishing when the entrance phase ends.
    pub fn enter_from(self, target: &str, dx: f64, dy: f64, unit: Unit, start: f64) -> Self {
        self.enter_from_eased(target, dx, dy, unit, start, Easing::Linear)
    }

    pub fn enter_from_eased(
        mut self,
        target: &str,
        dx: f64,
        dy: f64,
        unit: Unit,
        start: f64,
        easing: Easing,
    ) -> Self {
        let end = ENTRANCE_END.max(start);
        for (property, from) in [(Property::TranslateX, dx), (Property::TranslateY, dy)] {
            if from != 0.0 {
                self.keyframes.push(
                    Keyframe::new(target, property, from, 0.0)
                        .over(start, end)
                        .eased(easing)
                        .in_unit(unit),
                );
            }
        }
        self.keyframes.push(
            Keyframe::new(target, Property::Opacity, 0.0, 1.0)
                .over(start, end)
                .eased(easing),
        );
        self
    }

    /// One entrance per target, each starting `stagger` after the previous.
    pub fn enter_staggered<'a, I>(
        mut self,
        targets: I,
        dx: f64,
        dy: f64,
        unit: Unit,
        first_start: f64,
        stagger: f64,
    ) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for (index, target) in targets.into_iter().enumerate() {
            self = self.enter_from(target, dx, dy, unit, first_start + stagger * index as f64);
        }
        self
    }

    /// Subtle drift across the settle phase. Scale targets are capped.
    pub fn settle(mut self, target: &str, property: Property, to: f64, unit: Unit) -> Self {
        let to = if property == Property::Scale && to > MAX_SETTLE_SCALE {
            warn!("Settle scale {} for `{}` capped at {}", to, target, MAX_SETTLE_SCALE);
            MAX_SETTLE_SCALE
        } else {
            to
        };
        self.keyframes.push(
            Keyframe::new(target, property, property.identity(), to)
                .over(ENTRANCE_END, EXIT_START)
                .in_unit(unit),
        );
        self
    }

    /// Accelerate away by `(dx, dy)` and fade out over the exit phase.
    pub fn exit_to(mut self, target: &str, dx: f64, dy: f64, unit: Unit) -> Self {
        for (property, to) in [(Property::TranslateX, dx), (Property::TranslateY, dy)] {
            if to != 0.0 {
                self = self.exit_drift(target, property, to, unit);
            }
        }
        self.keyframes.push(
            Keyframe::new(target, Property::Opacity, 1.0, 0.0)
                .over(EXIT_START, 1.0)
                .eased(Easing::EaseInCubic),
        );
        self
    }

    /// Move one property away from identity over the exit phase, no fade.
    pub fn exit_drift(mut self, target: &str, property: Property, to: f64, unit: Unit) -> Self {
        self.keyframes.push(
            Keyframe::new(target, property, property.identity(), to)
                .over(EXIT_START, 1.0)
                .eased(Easing::EaseInCubic)
                .in_unit(unit),
        );
        self
    }
}

struct Channel {
    started: Option<(f64, Unit)>,
    pending: Option<(f64, f64, Unit)>,
}

/// Styles for every element the timeline animates at `progress`.
pub fn evaluate(progress: f64, timeline: &PhaseTimeline) -> StyleMap {
    let progress = clamp_unit(progress);

    let mut channels: BTreeMap<(&str, Property), Channel> = BTreeMap::new();
    for keyframe in &timeline.keyframes {
        let channel = channels
            .entry((keyframe.target.as_str(), keyframe.property))
            .or_insert(Channel {
                started: None,
                pending: None,
            });
        if keyframe.has_started(progress) {
            channel.started = Some((keyframe.value_at(progress), keyframe.unit));
        } else if channel
            .pending
            .map_or(true, |(start, _, _)| keyframe.start <= start)
        {
            channel.pending = Some((keyframe.start, keyframe.from, keyframe.unit));
        }
    }

    let mut styles = StyleMap::new();
    for ((target, property), channel) in channels {
        let value = channel
            .started
            .or(channel.pending.map(|(_, from, unit)| (from, unit)));
        if let Some((value, unit)) = value {
            styles
                .entry(target.to_string())
                .or_default()
                .set(property, value, unit);
        }
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn value(styles: &StyleMap, target: &str, property: Property) -> f64 {
        styles[target].get(property)
    }

    fn showcase() -> PhaseTimeline {
        PhaseTimeline::new()
            .enter_from("headline", -55.0, 0.0, Unit::Vw, 0.0)
            .enter_from("card", 55.0, 0.0, Unit::Vw, 0.06)
            .settle("background", Property::TranslateY, -2.0, Unit::Vh)
            .exit_to("headline", -8.0, -10.0, Unit::Vw)
            .exit_to("card", 8.0, 10.0, Unit::Vw)
            .exit_drift("background", Property::Scale, 1.05, Unit::Px)
    }

    #[test]
    fn linear_interpolation_inside_interval() {
        let timeline = PhaseTimeline::new()
            .keyframe(Keyframe::new("a", Property::TranslateX, 0.0, 100.0).over(0.2, 0.6));
        assert!(approx(value(&evaluate(0.4, &timeline), "a", Property::TranslateX), 50.0));
        assert!(approx(value(&evaluate(0.1, &timeline), "a", Property::TranslateX), 0.0));
        assert!(approx(value(&evaluate(0.9, &timeline), "a", Property::TranslateX), 100.0));
    }

    #[test]
    fn easing_curves() {
        assert!(approx(Easing::EaseInCubic.apply(0.5), 0.125));
        assert!(approx(Easing::EaseOutCubic.apply(0.5), 0.875));
        for easing in [Easing::Linear, Easing::EaseInCubic, Easing::EaseOutCubic] {
            assert!(approx(easing.apply(0.0), 0.0));
            assert!(approx(easing.apply(1.0), 1.0));
        }
    }

    #[test]
    fn progress_is_clamped_before_evaluation() {
        let timeline = showcase();
        assert_eq!(evaluate(-0.1, &timeline), evaluate(0.0, &timeline));
        assert_eq!(evaluate(1.1, &timeline), evaluate(1.0, &timeline));
        assert_eq!(evaluate(f64::NAN, &timeline), evaluate(0.0, &timeline));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let timeline = showcase();
        for step in 0..=20 {
            let p = step as f64 / 20.0;
            assert_eq!(evaluate(p, &timeline), evaluate(p, &timeline));
        }
    }

    #[test]
    fn linear_keyframes_are_continuous_inside_their_interval() {
        let timeline = PhaseTimeline::new()
            .keyframe(Keyframe::new("a", Property::TranslateY, 40.0, -20.0).over(0.1, 0.9));
        let mut previous = value(&evaluate(0.1, &timeline), "a", Property::TranslateY);
        for step in 1..=800 {
            let p = 0.1 + step as f64 * 0.001;
            let current = value(&evaluate(p, &timeline), "a", Property::TranslateY);
            assert!((current - previous).abs() <= 60.0 * 0.001 / 0.8 + EPSILON);
            previous = current;
        }
    }

    #[test]
    fn entrance_starts_hidden_and_offset() {
        let styles = evaluate(0.0, &showcase());
        assert!(approx(value(&styles, "headline", Property::Opacity), 0.0));
        assert!(approx(value(&styles, "headline", Property::TranslateX), -55.0));
        assert!(approx(value(&styles, "card", Property::Opacity), 0.0));
        assert!(approx(value(&styles, "card", Property::TranslateX), 55.0));
        assert_eq!(styles["headline"].translate_x.unwrap().unit, Unit::Vw);
    }

    #[test]
    fn settle_is_near_identity() {
        let styles = evaluate(0.5, &showcase());
        assert!(approx(value(&styles, "headline", Property::Opacity), 1.0));
        assert!(approx(value(&styles, "headline", Property::TranslateX), 0.0));
        assert!(approx(value(&styles, "background", Property::TranslateY), -1.0));
        assert!(approx(value(&styles, "background", Property::Scale), 1.0));
    }

    #[test]
    fn exit_accelerates_and_fades() {
        let timeline = showcase();
        let early = evaluate(0.775, &timeline);
        let done = evaluate(1.0, &timeline);
        // A quarter into the exit an ease-in curve has covered 1/64 of the way.
        assert!(approx(value(&early, "headline", Property::TranslateX), -8.0 / 64.0));
        assert!(approx(value(&done, "headline", Property::Opacity), 0.0));
        assert!(approx(value(&done, "card", Property::TranslateY), 10.0));
        assert!(approx(value(&done, "background", Property::Scale), 1.05));
    }

    #[test]
    fn later_declared_keyframe_wins_on_overlap() {
        let timeline = PhaseTimeline::new()
            .keyframe(Keyframe::new("a", Property::Opacity, 0.0, 1.0).over(0.0, 1.0))
            .keyframe(Keyframe::new("a", Property::Opacity, 1.0, 0.5).over(0.4, 0.8));
        assert!(approx(value(&evaluate(0.2, &timeline), "a", Property::Opacity), 0.2));
        assert!(approx(value(&evaluate(0.6, &timeline), "a", Property::Opacity), 0.75));
        assert!(approx(value(&evaluate(0.9, &timeline), "a", Property::Opacity), 0.5));
    }

    #[test]
    fn channel_holds_earliest_from_before_anything_starts() {
        let timeline = PhaseTimeline::new()
            .keyframe(Keyframe::new("a", Property::Opacity, 0.2, 1.0).over(0.3, 0.5))
            .keyframe(Keyframe::new("a", Property::Opacity, 1.0, 0.0).over(0.7, 1.0));
        assert!(approx(value(&evaluate(0.1, &timeline), "a", Property::Opacity), 0.2));
    }

    #[test]
    fn staggered_entrances_start_in_sequence() {
        let timeline =
            PhaseTimeline::new().enter_staggered(["b0", "b1", "b2"], 0.0, 24.0, Unit::Px, 0.14, 0.02);
        let styles = evaluate(0.16, &timeline);
        assert!(value(&styles, "b0", Property::Opacity) > 0.0);
        assert!(approx(value(&styles, "b1", Property::Opacity), 0.0));
        assert!(approx(value(&styles, "b2", Property::Opacity), 0.0));
        assert!(approx(value(&styles, "b2", Property::TranslateY), 24.0));
        let settled = evaluate(ENTRANCE_END, &timeline);
        assert!(approx(value(&settled, "b2", Property::Opacity), 1.0));
    }

    #[test]
    fn backwards_interval_is_swapped() {
        let keyframe = Keyframe::new("a", Property::Scale, 1.0, 2.0).over(0.8, 1.4);
        assert_eq!((keyframe.start, keyframe.end), (0.8, 1.0));
        let keyframe = Keyframe::new("a", Property::Scale, 1.0, 2.0).over(0.6, 0.2);
        assert_eq!((keyframe.start, keyframe.end), (0.2, 0.6));
    }

    #[test]
    fn settle_scale_is_capped() {
        let timeline = PhaseTimeline::new().settle("bg", Property::Scale, 1.3, Unit::Px);
        assert!(approx(value(&evaluate(1.0, &timeline), "bg", Property::Scale), MAX_SETTLE_SCALE));
    }

    #[test]
    fn renders_inline_css() {
        let styles = evaluate(0.0, &showcase());
        assert_eq!(
            styles["headline"].to_css(),
            "transform: translate(-55vw, 0vw); opacity: 0;"
        );
        let done = evaluate(1.0, &showcase());
        assert_eq!(
            done["background"].to_css(),
            "transform: translate(0px, -2vh) scale(1.05);"
        );
        assert_eq!(ElementStyle::default().to_css(), "");
    }
}
