use yew::prelude::*;

use crate::components::reveal::{use_reveal, RevealMotion};
use crate::components::scroll_provider::use_site_config;
use crate::scroll::timeline::Unit;

struct Stat {
    value: &'static str,
    label: &'static str,
}

struct Capability {
    icon: &'static str,
    label: &'static str,
    desc: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: "10k+", label: "Sim hours" },
    Stat { value: "99.9%", label: "Uptime" },
    Stat { value: "<50ms", label: "Latency" },
    Stat { value: "24/7", label: "Support" },
];

const TECH_STACK: [Capability; 6] = [
    Capability { icon: "⚡", label: "High Performance", desc: "Sub-50ms inference" },
    Capability { icon: "⛨", label: "Enterprise Security", desc: "SOC 2 compliant" },
    Capability { icon: "◷", label: "Real-time", desc: "Live processing" },
    Capability { icon: "≡", label: "Scalable", desc: "Cloud-native" },
    Capability { icon: "▤", label: "API First", desc: "REST & GraphQL" },
    Capability { icon: "⟳", label: "Automated", desc: "CI/CD pipeline" },
];

#[function_component(TechnologySection)]
pub fn technology_section() -> Html {
    let config = use_site_config();
    let cards = use_node_ref();
    let revealed = use_reveal(cards.clone());
    let motion = use_memo(
        |_| {
            RevealMotion::from_offset(0.0, 30.0, Unit::Px)
                .duration(0.6)
                .stagger(0.1)
        },
        (),
    );

    html! {
        <section id="technology" class="technology">
            <div class="section-inner">
                <h2 class="section-heading">{"Technology"}</h2>

                <div class="technology-grid">
                    <div class="activity-card">
                        <h3 class="activity-title">{"Research & Development"}</h3>
                        <p class="activity-lead">
                            {"Simulation-first validation. Real-world data. Continuous learning."}
                        </p>
                        <div class="stat-grid">
                            { for STATS.iter().map(|stat| html! {
                                <div class="stat" key={stat.label}>
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                        <p class="activity-note">
                            {"We train policies in high-fidelity simulation, validate in controlled environments, and deploy with live telemetry, feeding insights back into the next model iteration."}
                        </p>
                    </div>

                    <div ref={cards} class="tech-cards">
                        { for TECH_STACK.iter().enumerate().map(|(index, tech)| html! {
                            <div class="tech-card" key={tech.label} style={motion.style(index, revealed)}>
                                <span class="tech-card-icon">{tech.icon}</span>
                                <h4>{tech.label}</h4>
                                <p>{tech.desc}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="activity-card deploy-banner">
                    <div>
                        <h4>{"Ready to deploy?"}</h4>
                        <p>{"Connect to your stack in days, not months."}</p>
                    </div>
                    <a class="solid-link" href={format!("mailto:{}", config.contact_email)}>
                        {"Get started"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .technology {
                        position: relative;
                        padding: 5rem 0;
                    }

                    .technology-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }

                    @media (min-width: 1024px) {
                        .technology-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .activity-title {
                        margin: 0 0 0.5rem;
                        font-family: 'Sora', sans-serif;
                        font-size: 1.5rem;
                    }

                    .activity-lead {
                        margin: 0 0 1.5rem;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .activity-note {
                        margin: 0;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.6);
                    }

                    .stat-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }

                    .stat {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                    }

                    .stat-value {
                        font-family: 'Sora', sans-serif;
                        font-weight: 700;
                        font-size: 1.5rem;
                        margin-bottom: 0.25rem;
                    }

                    .stat-label {
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.4);
                    }

                    .tech-cards {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.75rem;
                    }

                    .tech-card {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                    }

                    .tech-card:hover {
                        background: rgba(255, 255, 255, 0.06);
                        border-color: rgba(255, 255, 255, 0.1);
                    }

                    .tech-card-icon {
                        display: block;
                        margin-bottom: 0.75rem;
                        font-size: 1.5rem;
                        color: rgba(255, 255, 255, 0.4);
                    }

                    .tech-card h4 {
                        margin: 0 0 0.25rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    .tech-card p {
                        margin: 0;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.4);
                    }

                    .deploy-banner {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }

                    .deploy-banner h4 {
                        margin: 0 0 0.25rem;
                        font-family: 'Sora', sans-serif;
                        font-weight: 600;
                    }

                    .deploy-banner p {
                        margin: 0;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.5);
                    }
                "#}
            </style>
        </section>
    }
}
