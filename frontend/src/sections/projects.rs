use yew::prelude::*;

use crate::components::reveal::{use_reveal, RevealMotion};
use crate::components::scroll_provider::use_site_config;
use crate::scroll::timeline::Unit;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Live,
    Beta,
    Alpha,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Live => "Live",
            Status::Beta => "Beta",
            Status::Alpha => "Alpha",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub status: Status,
    /// Completion in percent, 0..=100.
    pub progress: u8,
    pub color: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "NeuralFlow",
        category: "AI Framework",
        description: "Real-time neural network optimization engine.",
        status: Status::Live,
        progress: 100,
        color: "#3B82F6",
    },
    Project {
        title: "ContextOS",
        category: "MCP Platform",
        description: "Advanced model context protocol implementation.",
        status: Status::Beta,
        progress: 85,
        color: "#8B5CF6",
    },
    Project {
        title: "AutoDeploy",
        category: "DevOps Tool",
        description: "Automated deployment pipeline for ML models.",
        status: Status::Live,
        progress: 100,
        color: "#10B981",
    },
    Project {
        title: "VisionX",
        category: "Computer Vision",
        description: "Industrial inspection and quality control.",
        status: Status::Alpha,
        progress: 60,
        color: "#F59E0B",
    },
];

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let config = use_site_config();
    let grid = use_node_ref();
    let revealed = use_reveal(grid.clone());
    let motion = use_memo(
        |_| {
            RevealMotion::from_offset(0.0, 40.0, Unit::Px)
                .duration(0.6)
                .stagger(0.15)
        },
        (),
    );

    html! {
        <section id="projects" class="projects">
            <div class="section-inner">
                <div class="projects-header">
                    <h2 class="section-heading">{"Projects"}</h2>
                    <a class="projects-source" href="https://github.com" target="_blank" rel="noopener noreferrer">
                        {"View on GitHub"}
                    </a>
                </div>

                <div ref={grid} class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <div
                            class="project-card"
                            key={project.title}
                            style={format!(
                                "{} --glow: {}40;",
                                motion.style(index, revealed),
                                project.color
                            )}
                        >
                            <div class="project-card-top">
                                <span
                                    class="project-status"
                                    style={format!("background: {}20; color: {};", project.color, project.color)}
                                >
                                    {project.status.label()}
                                </span>
                                <span class="project-link">{"↗"}</span>
                            </div>
                            <h3>{project.title}</h3>
                            <p class="project-category">{project.category}</p>
                            <p class="project-description">{project.description}</p>
                            <div class="project-progress">
                                <div class="project-progress-label">
                                    <span>{"Progress"}</span>
                                    <span>{format!("{}%", project.progress)}</span>
                                </div>
                                <div class="project-progress-track">
                                    <div
                                        class="project-progress-fill"
                                        style={format!("width: {}%; background: {};", project.progress, project.color)}
                                    ></div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="projects-cta">
                    <a class="pill-link" href={format!("mailto:{}", config.contact_email)}>
                        {"Explore all projects ↗"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .projects {
                        position: relative;
                        padding: 5rem 0;
                    }

                    .projects-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 2rem;
                    }

                    .projects-header .section-heading {
                        margin-bottom: 0;
                    }

                    .projects-source {
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.5);
                        text-decoration: none;
                    }

                    .projects-source:hover {
                        color: #fff;
                    }

                    .project-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                    }

                    @media (min-width: 640px) {
                        .project-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (min-width: 1024px) {
                        .project-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }

                    .project-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 1.25rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        cursor: pointer;
                    }

                    .project-card:hover {
                        background: rgba(255, 255, 255, 0.06);
                        box-shadow: inset 0 0 0 1px var(--glow);
                    }

                    .project-card-top {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 1rem;
                    }

                    .project-status {
                        padding: 0.25rem 0.625rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 500;
                    }

                    .project-link {
                        color: rgba(255, 255, 255, 0.3);
                    }

                    .project-card h3 {
                        margin: 0 0 0.25rem;
                        font-family: 'Sora', sans-serif;
                        font-size: 1.125rem;
                    }

                    .project-category {
                        margin: 0 0 0.75rem;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.4);
                    }

                    .project-description {
                        margin: 0 0 1rem;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .project-progress {
                        margin-top: auto;
                    }

                    .project-progress-label {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 0.375rem;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.3);
                    }

                    .project-progress-track {
                        height: 6px;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        overflow: hidden;
                    }

                    .project-progress-fill {
                        height: 100%;
                        border-radius: 9999px;
                        transition: width 0.5s ease;
                    }

                    .projects-cta {
                        margin-top: 2rem;
                        text-align: center;
                    }
                "#}
            </style>
        </section>
    }
}
