use yew::prelude::*;

use crate::components::reveal::{use_reveal, RevealMotion};
use crate::components::scroll_provider::use_site_config;
use crate::dom::scroll_container_to;

/// Card width plus the gap between cards, in px.
const CARD_STRIDE: f64 = 280.0 + 16.0;

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const SERVICES: [Service; 5] = [
    Service {
        id: "code",
        title: "Code",
        subtitle: "Development",
        description: "Clean, efficient, scalable code architecture for modern applications.",
        image: "/code_card.jpg",
        icon: "</>",
        color: "#3B82F6",
    },
    Service {
        id: "apps",
        title: "Apps",
        subtitle: "Applications",
        description: "Native and cross-platform apps that deliver exceptional user experiences.",
        image: "/apps_card.jpg",
        icon: "▯",
        color: "#10B981",
    },
    Service {
        id: "ai",
        title: "AI Models",
        subtitle: "Artificial Intelligence",
        description: "Custom-trained models for computer vision, NLP, and predictive analytics.",
        image: "/ai_card.jpg",
        icon: "◈",
        color: "#8B5CF6",
    },
    Service {
        id: "mcp",
        title: "MCP",
        subtitle: "Model Context Protocol",
        description: "Advanced context management for large language models and AI systems.",
        image: "/mcp_card.jpg",
        icon: "⬡",
        color: "#F59E0B",
    },
    Service {
        id: "robotics",
        title: "Robotics",
        subtitle: "Automation",
        description: "Intelligent robotic systems for manufacturing and logistics.",
        image: "/robotics_card.jpg",
        icon: "⬡",
        color: "#EF4444",
    },
];

#[derive(Clone, Copy, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

/// Next carousel index, clamped to the ends.
pub fn step(index: usize, direction: Direction, len: usize) -> usize {
    match direction {
        Direction::Left => index.saturating_sub(1),
        Direction::Right => (index + 1).min(len.saturating_sub(1)),
    }
}

/// Fill of the progress bar under the detail panel, in percent.
pub fn progress_percent(index: usize, len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        (index + 1) as f64 / len as f64 * 100.0
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let config = use_site_config();
    let section = use_node_ref();
    let track = use_node_ref();
    let active_index = use_state(|| 0usize);
    let revealed = use_reveal(section.clone());
    let motion = use_memo(|_| RevealMotion::fade(), ());

    let scroll = |direction: Direction| {
        let active_index = active_index.clone();
        let track = track.clone();
        Callback::from(move |_: MouseEvent| {
            let next = step(*active_index, direction, SERVICES.len());
            active_index.set(next);
            scroll_container_to(&track, next as f64 * CARD_STRIDE);
        })
    };

    let current = *active_index;
    let selected = &SERVICES[current];
    let at_start = current == 0;
    let at_end = current == SERVICES.len() - 1;

    html! {
        <section id="services" ref={section} class="services" style={motion.style(0, revealed)}>
            <div class="services-inner">
                <div class="services-header">
                    <h2 class="section-heading">{"Services"}</h2>
                    <div class="carousel-controls">
                        <button class="carousel-arrow" disabled={at_start} onclick={scroll(Direction::Left)}>
                            {"‹"}
                        </button>
                        <button class="carousel-arrow" disabled={at_end} onclick={scroll(Direction::Right)}>
                            {"›"}
                        </button>
                    </div>
                </div>

                <div ref={track} class="carousel-track">
                    { for SERVICES.iter().enumerate().map(|(index, service)| {
                        let select = {
                            let active_index = active_index.clone();
                            Callback::from(move |_: MouseEvent| active_index.set(index))
                        };
                        html! {
                            <button
                                key={service.id}
                                class={classes!("service-card", (index == current).then(|| "active"))}
                                onclick={select}
                            >
                                <img src={service.image} alt={service.title} loading="lazy" />
                                <div class="service-card-shade"></div>
                                <div class="service-card-body">
                                    <span class="service-card-icon" style={format!("color: {};", service.color)}>
                                        {service.icon}
                                    </span>
                                    <h3>{service.title}</h3>
                                    <p>{service.subtitle}</p>
                                </div>
                                {
                                    if index == current {
                                        html! { <span class="service-card-dot"></span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </button>
                        }
                    }) }
                </div>

                <div class="activity-card service-detail">
                    <div class="service-detail-row">
                        <div
                            class="service-detail-icon"
                            style={format!("background: {}20; color: {};", selected.color, selected.color)}
                        >
                            {selected.icon}
                        </div>
                        <div class="service-detail-copy">
                            <h3>{selected.title}</h3>
                            <p class="service-detail-subtitle">{selected.subtitle}</p>
                            <p>{selected.description}</p>
                        </div>
                        <a class="pill-link" href={format!("mailto:{}", config.contact_email)}>
                            {"Learn more ›"}
                        </a>
                    </div>

                    <div class="service-progress">
                        <span>{current + 1}</span>
                        <div class="service-progress-track">
                            <div
                                class="service-progress-fill"
                                style={format!(
                                    "width: {}%; background: {};",
                                    progress_percent(current, SERVICES.len()),
                                    selected.color
                                )}
                            ></div>
                        </div>
                        <span>{SERVICES.len()}</span>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .services {
                        position: relative;
                        min-height: 100vh;
                        padding: 5rem 0;
                    }

                    .services-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 2rem;
                    }

                    .carousel-controls {
                        display: flex;
                        gap: 0.5rem;
                    }

                    .carousel-arrow {
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }

                    .carousel-arrow:disabled {
                        color: rgba(255, 255, 255, 0.3);
                        cursor: default;
                    }

                    .carousel-track {
                        display: flex;
                        gap: 16px;
                        overflow-x: auto;
                        padding-bottom: 1.5rem;
                        scrollbar-width: none;
                    }

                    .carousel-track::-webkit-scrollbar {
                        display: none;
                    }

                    .service-card {
                        position: relative;
                        flex-shrink: 0;
                        width: 280px;
                        aspect-ratio: 3 / 4;
                        padding: 0;
                        border: none;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        opacity: 0.6;
                        cursor: pointer;
                        text-align: left;
                        transition: all 0.3s ease;
                    }

                    .service-card:hover {
                        opacity: 0.8;
                    }

                    .service-card.active {
                        opacity: 1;
                        transform: scale(1.05);
                        box-shadow: 0 0 0 2px rgba(255, 255, 255, 0.4);
                    }

                    .service-card img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .service-card-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.5), transparent);
                    }

                    .service-card-body {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1rem;
                        color: #fff;
                    }

                    .service-card-body h3 {
                        margin: 0.5rem 0 0;
                        font-family: 'Sora', sans-serif;
                        font-size: 1.25rem;
                    }

                    .service-card-body p {
                        margin: 0;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .service-card-dot {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #fff;
                    }

                    .service-detail {
                        margin-top: 2rem;
                    }

                    .service-detail-row {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .service-detail-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                    }

                    .service-detail-copy {
                        flex: 1;
                    }

                    .service-detail-copy h3 {
                        margin: 0 0 0.25rem;
                        font-family: 'Sora', sans-serif;
                        font-size: 1.5rem;
                    }

                    .service-detail-copy p {
                        margin: 0;
                        max-width: 42rem;
                        color: rgba(255, 255, 255, 0.7);
                        line-height: 1.6;
                    }

                    .service-detail-copy .service-detail-subtitle {
                        margin-bottom: 0.75rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .service-progress {
                        margin-top: 1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.4);
                    }

                    .service-progress-track {
                        flex: 1;
                        height: 4px;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        overflow: hidden;
                    }

                    .service-progress-fill {
                        height: 100%;
                        border-radius: 9999px;
                        transition: all 0.3s ease;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_stops_at_both_ends() {
        assert_eq!(step(0, Direction::Left, SERVICES.len()), 0);
        assert_eq!(step(0, Direction::Right, SERVICES.len()), 1);
        assert_eq!(step(4, Direction::Right, SERVICES.len()), 4);
        assert_eq!(step(3, Direction::Left, SERVICES.len()), 2);
        assert_eq!(step(0, Direction::Right, 0), 0);
    }

    #[test]
    fn progress_bar_fills_with_selection() {
        assert_eq!(progress_percent(0, 5), 20.0);
        assert_eq!(progress_percent(4, 5), 100.0);
        assert_eq!(progress_percent(0, 0), 0.0);
    }
}
