use yew::prelude::*;
use yew_hooks::use_raf;

use crate::components::scroll_provider::use_site_config;
use crate::dom::scroll_to_section;
use crate::scroll::timeline::{evaluate, Easing, Keyframe, PhaseTimeline, Property, StyleMap};

fn intro_timeline() -> PhaseTimeline {
    PhaseTimeline::new()
        .keyframe(Keyframe::new("backdrop", Property::Opacity, 0.0, 1.0).eased(Easing::EaseOutCubic))
        .keyframe(Keyframe::new("backdrop", Property::Scale, 1.1, 1.0).eased(Easing::EaseOutCubic))
        .keyframe(Keyframe::new("content", Property::Opacity, 0.0, 1.0).eased(Easing::EaseOutCubic))
        .keyframe(Keyframe::new("content", Property::TranslateY, 40.0, 0.0).eased(Easing::EaseOutCubic))
}

fn style_of(styles: &StyleMap, target: &str) -> String {
    styles.get(target).map(|style| style.to_css()).unwrap_or_default()
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let config = use_site_config();
    let timeline = use_memo(|_| intro_timeline(), ());
    // The backdrop settles over 1.5s, the copy over 1s after a short beat.
    let backdrop_progress = use_raf(1500, 0);
    let content_progress = use_raf(1000, 300);

    let backdrop = evaluate(backdrop_progress, &timeline);
    let content = evaluate(content_progress, &timeline);

    let explore = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("services");
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-backdrop" style={style_of(&backdrop, "backdrop")}></div>
            <div class="hero-shade"></div>
            <div class="hero-gradient"></div>

            <div class="hero-content" style={style_of(&content, "content")}>
                <div class="hero-tags">
                    <span class="hero-tag">{"STARTUP"}</span>
                    <span class="hero-tag">{"AI & AUTOMATION"}</span>
                </div>
                <h1 class="hero-title">{"Xertai"}</h1>
                <p class="hero-subtitle">{"Code. Apps. AI Models. MCP."}</p>
                <p class="hero-description">
                    {"Building the future of intelligent automation. From cutting-edge AI models to seamless applications, we craft technology that works for you."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={explore}>{"▶ Explore"}</button>
                    <a class="hero-cta secondary" href={format!("mailto:{}", config.contact_email)}>
                        {"Contact ›"}
                    </a>
                </div>
            </div>

            <div class="hero-fade"></div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: flex-end;
                        padding-bottom: 5rem;
                        overflow: hidden;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background-image: url(/logo.png);
                        background-size: cover;
                        background-position: center;
                        background-attachment: fixed;
                        will-change: opacity, transform;
                    }

                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.35);
                    }

                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        z-index: 1;
                        background:
                            linear-gradient(to top, #000, rgba(0, 0, 0, 0.5), transparent),
                            linear-gradient(to right, rgba(0, 0, 0, 0.6), transparent);
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 48rem;
                        padding: 0 1.5rem;
                        will-change: opacity, transform;
                    }

                    @media (min-width: 1024px) {
                        .hero-content {
                            padding: 0 4rem;
                        }
                    }

                    .hero-tags {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }

                    .hero-tag {
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 500;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .hero-title {
                        font-family: 'Sora', sans-serif;
                        font-size: clamp(3rem, 8vw, 4.5rem);
                        font-weight: 700;
                        margin: 0 0 1rem;
                        line-height: 1.1;
                    }

                    .hero-subtitle {
                        font-size: 1.5rem;
                        font-weight: 300;
                        color: rgba(255, 255, 255, 0.7);
                        margin: 0 0 0.5rem;
                    }

                    .hero-description {
                        max-width: 32rem;
                        color: rgba(255, 255, 255, 0.5);
                        line-height: 1.6;
                        margin: 0 0 2rem;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #fff;
                        color: #000;
                        font-weight: 500;
                        text-decoration: none;
                        cursor: pointer;
                        transition: transform 0.2s ease, background 0.2s ease;
                    }

                    .hero-cta:hover {
                        transform: scale(1.05);
                    }

                    .hero-cta.secondary {
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                    }

                    .hero-cta.secondary:hover {
                        background: rgba(255, 255, 255, 0.2);
                        transform: none;
                    }

                    .hero-fade {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 8rem;
                        z-index: 2;
                        background: linear-gradient(to top, #000, transparent);
                    }
                "#}
            </style>
        </section>
    }
}
