use yew::prelude::*;

use crate::components::pinned::use_pin;
use crate::dom::scroll_to_section;
use crate::scroll::timeline::{PhaseTimeline, Property, Unit};

#[derive(Clone, Copy, PartialEq)]
pub enum ItemLayout {
    Bullets,
    Rows,
    Tags,
}

impl ItemLayout {
    fn class(self) -> &'static str {
        match self {
            ItemLayout::Bullets => "showcase-items bullets",
            ItemLayout::Rows => "showcase-items rows",
            ItemLayout::Tags => "showcase-items tags",
        }
    }
}

pub struct ShowcaseItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: Option<&'static str>,
}

pub struct Showcase {
    pub key: &'static str,
    pub title: &'static str,
    pub accent: &'static str,
    pub lede: &'static str,
    pub card_intro: Option<&'static str>,
    pub items: &'static [ShowcaseItem],
    pub layout: ItemLayout,
    pub cta: Option<&'static str>,
    pub background: &'static str,
    pub z_index: u8,
}

const BUILT_TO_WORK: Showcase = Showcase {
    key: "built-to-work",
    title: "Built to",
    accent: "Work",
    lede: "Reliable motion, consistent precision, and safe collaboration, designed for real production environments.",
    card_intro: None,
    items: &[
        ShowcaseItem {
            icon: "◎",
            title: "Repeatable sub-millimeter accuracy",
            detail: Some("Precision positioning for delicate assembly tasks"),
        },
        ShowcaseItem {
            icon: "⛉",
            title: "Collision-aware motion planning",
            detail: Some("Real-time obstacle detection and path optimization"),
        },
        ShowcaseItem {
            icon: "∿",
            title: "24/7 operational monitoring",
            detail: Some("Continuous health checks and predictive maintenance"),
        },
    ],
    layout: ItemLayout::Bullets,
    cta: Some("Explore capabilities →"),
    background: "/built_to_work_bg.jpg",
    z_index: 20,
};

const HUMAN_CENTERED: Showcase = Showcase {
    key: "human-centered",
    title: "Human‑Centered",
    accent: "Design",
    lede: "Safety isn't a layer, it's the foundation. Every motion is planned around people.",
    card_intro: Some("Real-time proximity sensing, force-limited actuation, and predictive stop behaviors keep workspaces safe without sacrificing throughput."),
    items: &[
        ShowcaseItem { icon: "⌖", title: "Proximity sensing", detail: None },
        ShowcaseItem { icon: "◔", title: "Force limits", detail: None },
        ShowcaseItem { icon: "⯃", title: "Predictive stop", detail: None },
    ],
    layout: ItemLayout::Rows,
    cta: None,
    background: "/human_centered_bg.jpg",
    z_index: 30,
};

const MODULAR: Showcase = Showcase {
    key: "modular",
    title: "Modular",
    accent: "Architecture",
    lede: "Swap end-effectors, add sensors, and integrate with your stack without rebuilding the core.",
    card_intro: Some("A message-based control layer and well-defined APIs let your team extend capabilities in days, not months."),
    items: &[
        ShowcaseItem { icon: "✥", title: "Gripper SDK", detail: None },
        ShowcaseItem { icon: "◉", title: "Sensor bridge", detail: None },
        ShowcaseItem { icon: "▤", title: "Fleet API", detail: None },
    ],
    layout: ItemLayout::Tags,
    cta: None,
    background: "/modular_arch_bg.jpg",
    z_index: 50,
};

fn item_targets(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("item-{}", index)).collect()
}

#[derive(Clone, Copy, PartialEq)]
pub enum ShowcaseKind {
    BuiltToWork,
    HumanCentered,
    Modular,
}

impl ShowcaseKind {
    pub fn content(self) -> &'static Showcase {
        match self {
            ShowcaseKind::BuiltToWork => &BUILT_TO_WORK,
            ShowcaseKind::HumanCentered => &HUMAN_CENTERED,
            ShowcaseKind::Modular => &MODULAR,
        }
    }

    pub fn timeline(self) -> PhaseTimeline {
        let items = item_targets(self.content().items.len());
        let items = items.iter().map(String::as_str);
        match self {
            ShowcaseKind::BuiltToWork => PhaseTimeline::new()
                .enter_from("headline", -55.0, 0.0, Unit::Vw, 0.0)
                .enter_from("card", 55.0, 0.0, Unit::Vw, 0.06)
                .enter_staggered(items, 0.0, 24.0, Unit::Px, 0.14, 0.02)
                .settle("background", Property::TranslateY, -2.0, Unit::Vh)
                .exit_drift("headline", Property::TranslateY, -10.0, Unit::Vh)
                .exit_to("headline", -8.0, 0.0, Unit::Vw)
                .exit_drift("card", Property::TranslateY, 10.0, Unit::Vh)
                .exit_to("card", 8.0, 0.0, Unit::Vw)
                .exit_drift("background", Property::Scale, 1.05, Unit::Px)
                .exit_drift("background", Property::TranslateX, 4.0, Unit::Vw),
            ShowcaseKind::HumanCentered => PhaseTimeline::new()
                .enter_from("headline", 0.0, 60.0, Unit::Vh, 0.0)
                .enter_from("card", 0.0, -60.0, Unit::Vh, 0.06)
                .enter_staggered(items, 20.0, 0.0, Unit::Px, 0.16, 0.02)
                .exit_to("headline", -12.0, 0.0, Unit::Vw)
                .exit_to("card", 12.0, 0.0, Unit::Vw)
                .exit_drift("background", Property::TranslateY, 2.0, Unit::Vh)
                .exit_drift("background", Property::Scale, 1.04, Unit::Px),
            ShowcaseKind::Modular => PhaseTimeline::new()
                .enter_from("headline", 0.0, 60.0, Unit::Vh, 0.0)
                .enter_from("card", 0.0, -60.0, Unit::Vh, 0.06)
                .enter_staggered(items, 18.0, 0.0, Unit::Px, 0.16, 0.02)
                .exit_to("headline", -10.0, 0.0, Unit::Vw)
                .exit_to("card", 10.0, 0.0, Unit::Vw)
                .exit_drift("background", Property::Scale, 1.05, Unit::Px)
                .exit_drift("background", Property::TranslateY, 1.0, Unit::Vh),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub kind: ShowcaseKind,
}

#[function_component(ShowcaseSection)]
pub fn showcase_section(props: &ShowcaseProps) -> Html {
    let showcase = props.kind.content();
    let spacer = use_node_ref();
    let timeline = use_memo(|kind| kind.timeline(), props.kind);
    let view = use_pin(showcase.key, spacer.clone(), timeline);

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });

    html! {
        <div ref={spacer} class="pin-spacer" style={view.spacer_style.clone()}>
            <section
                class={classes!("showcase", showcase.key)}
                style={format!("{} z-index: {};", view.stage_style, showcase.z_index)}
            >
                <div
                    class="showcase-backdrop"
                    style={format!("background-image: url({}); {}", showcase.background, view.style("background"))}
                ></div>
                <div class="showcase-overlay"></div>
                <div class="showcase-glow"></div>

                <div class="showcase-content">
                    <div class="showcase-headline" style={view.style("headline")}>
                        <h2>{showcase.title}{" "}<span class="text-gradient">{showcase.accent}</span></h2>
                        <p>{showcase.lede}</p>
                    </div>

                    <div class="showcase-card" style={view.style("card")}>
                        {
                            if let Some(intro) = showcase.card_intro {
                                html! { <p class="showcase-card-intro">{intro}</p> }
                            } else {
                                html! {}
                            }
                        }
                        <div class={showcase.layout.class()}>
                            { for showcase.items.iter().enumerate().map(|(index, item)| html! {
                                <div class="showcase-item" style={view.style(&format!("item-{}", index))}>
                                    <span class="showcase-item-icon">{item.icon}</span>
                                    <div>
                                        <h4>{item.title}</h4>
                                        {
                                            if let Some(detail) = item.detail {
                                                html! { <p>{detail}</p> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                </div>
                            }) }
                        </div>
                        {
                            if let Some(cta) = showcase.cta {
                                html! {
                                    <button class="showcase-cta" onclick={to_contact}>{cta}</button>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </section>
            <style>
                {r#"
                    .pin-spacer {
                        position: relative;
                        min-height: 100vh;
                    }

                    .showcase {
                        height: 100vh;
                        overflow: hidden;
                        background: #000;
                    }

                    .showcase-backdrop {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        will-change: transform;
                    }

                    .showcase-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, rgba(0, 0, 0, 0.85), rgba(0, 0, 0, 0.4));
                    }

                    .showcase-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(ellipse at 70% 50%, rgba(139, 92, 246, 0.18), transparent 60%);
                    }

                    .showcase-content {
                        position: relative;
                        z-index: 10;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        gap: 2rem;
                        padding: 0 1.5rem;
                    }

                    @media (min-width: 1024px) {
                        .showcase-content {
                            flex-direction: row;
                            align-items: center;
                            justify-content: space-between;
                            padding: 0 8vw;
                        }
                    }

                    .showcase-headline {
                        max-width: 44vw;
                        will-change: transform, opacity;
                    }

                    .showcase-headline h2 {
                        font-family: 'Sora', sans-serif;
                        font-size: clamp(32px, 4.5vw, 56px);
                        line-height: 1.05;
                        margin: 0 0 1.5rem;
                    }

                    .showcase-headline p {
                        font-size: 1.125rem;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.65);
                    }

                    .text-gradient {
                        background: linear-gradient(90deg, #a78bfa, #7c3aed);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .showcase-card {
                        width: 100%;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        backdrop-filter: blur(20px);
                        will-change: transform, opacity;
                    }

                    @media (min-width: 1024px) {
                        .showcase-card {
                            width: 36vw;
                        }
                    }

                    .human-centered .showcase-card {
                        animation: breathe 6s ease-in-out infinite;
                    }

                    @keyframes breathe {
                        0%, 100% { box-shadow: 0 0 0 rgba(139, 92, 246, 0); }
                        50% { box-shadow: 0 0 40px rgba(139, 92, 246, 0.15); }
                    }

                    .showcase-card-intro {
                        color: rgba(255, 255, 255, 0.65);
                        line-height: 1.6;
                        margin: 0 0 2rem;
                    }

                    .showcase-items {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .showcase-items.rows {
                        gap: 1rem;
                    }

                    .showcase-items.tags {
                        flex-direction: row;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }

                    .showcase-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }

                    .showcase-items.rows .showcase-item {
                        align-items: center;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                    }

                    .showcase-items.tags .showcase-item {
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 1.25rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                    }

                    .showcase-item-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 0.75rem;
                        background: rgba(139, 92, 246, 0.15);
                        color: #a78bfa;
                    }

                    .showcase-items.tags .showcase-item-icon {
                        width: auto;
                        height: auto;
                        background: none;
                    }

                    .showcase-item h4 {
                        margin: 0 0 0.25rem;
                        font-family: 'Sora', sans-serif;
                        font-weight: 600;
                    }

                    .showcase-items.rows h4,
                    .showcase-items.tags h4 {
                        margin: 0;
                        font-weight: 500;
                    }

                    .showcase-item p {
                        margin: 0;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    .showcase-cta {
                        margin-top: 2rem;
                        border: none;
                        background: none;
                        color: #a78bfa;
                        font-weight: 500;
                        cursor: pointer;
                    }

                    .showcase-cta:hover {
                        color: #c4b5fd;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::timeline::evaluate;

    const KINDS: [ShowcaseKind; 3] = [
        ShowcaseKind::BuiltToWork,
        ShowcaseKind::HumanCentered,
        ShowcaseKind::Modular,
    ];

    #[test]
    fn every_element_is_hidden_at_the_start_and_gone_at_the_end() {
        for kind in KINDS {
            let timeline = kind.timeline();
            let start = evaluate(0.0, &timeline);
            let end = evaluate(1.0, &timeline);
            let mut targets = vec!["headline".to_string(), "card".to_string()];
            targets.extend(item_targets(kind.content().items.len()));
            for target in &targets {
                assert_eq!(start[target].opacity, Some(0.0), "{target}");
            }
            assert_eq!(end["headline"].opacity, Some(0.0));
            assert_eq!(end["card"].opacity, Some(0.0));
        }
    }

    #[test]
    fn everything_rests_during_settle() {
        for kind in KINDS {
            let styles = evaluate(0.5, &kind.timeline());
            for (target, style) in &styles {
                if target == "background" {
                    assert!(style.get(Property::Scale) <= 1.06);
                    continue;
                }
                assert_eq!(style.get(Property::Opacity), 1.0, "{target}");
                assert_eq!(style.get(Property::TranslateX), 0.0, "{target}");
                assert_eq!(style.get(Property::TranslateY), 0.0, "{target}");
            }
        }
    }
}
