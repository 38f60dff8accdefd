use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::reveal::{use_reveal, RevealMotion};
use crate::components::scroll_provider::use_site_config;
use crate::scroll::timeline::Unit;

fn copyright(year: i32) -> String {
    format!("© {} Xertai Inc. All rights reserved.", year)
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let config = use_site_config();
    let content = use_node_ref();
    let revealed = use_reveal(content.clone());
    let motion = use_memo(|_| RevealMotion::from_offset(0.0, 40.0, Unit::Px), ());
    let year = Local::now().year();

    html! {
        <section id="contact" class="contact">
            <div class="section-inner">
                <div ref={content} class="contact-content" style={motion.style(0, revealed)}>
                    <div class="activity-card contact-card">
                        <h2>{"Let's build together"}</h2>
                        <p class="contact-lead">
                            {"Tell us what you're automating. We'll map a deployment plan to your environment and constraints."}
                        </p>

                        <div class="contact-options">
                            <a class="contact-option" href={format!("mailto:{}", config.contact_email)}>
                                <span class="contact-option-icon">{"✉"}</span>
                                <span class="contact-option-text">
                                    <span class="contact-option-label">{"Email"}</span>
                                    <span class="contact-option-value">{config.contact_email.clone()}</span>
                                </span>
                                <span class="contact-option-arrow">{"↗"}</span>
                            </a>
                            <div class="contact-option">
                                <span class="contact-option-icon">{"⌖"}</span>
                                <span class="contact-option-text">
                                    <span class="contact-option-label">{"Location"}</span>
                                    <span class="contact-option-value">{"San Francisco / Remote"}</span>
                                </span>
                            </div>
                        </div>

                        <div class="contact-support">
                            {"For support inquiries: "}
                            <a href={format!("mailto:{}", config.support_email)}>
                                {config.support_email.clone()}
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <footer class="site-footer">
                <span class="site-footer-brand">{"Xertai"}</span>
                <p>{copyright(year)}</p>
                <div class="site-footer-links">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                </div>
            </footer>
            <style>
                {r#"
                    .contact {
                        position: relative;
                        min-height: 60vh;
                        display: flex;
                        align-items: center;
                        padding: 5rem 0 8rem;
                    }

                    .contact .section-inner {
                        width: 100%;
                    }

                    .contact-content {
                        max-width: 56rem;
                        margin: 0 auto;
                    }

                    .contact-card {
                        padding: 3rem 2rem;
                        text-align: center;
                    }

                    .contact-card h2 {
                        margin: 0 0 1rem;
                        font-family: 'Sora', sans-serif;
                        font-size: clamp(1.875rem, 4vw, 3rem);
                    }

                    .contact-lead {
                        max-width: 32rem;
                        margin: 0 auto 2.5rem;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .contact-options {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                        max-width: 36rem;
                        margin: 0 auto 2.5rem;
                    }

                    @media (min-width: 640px) {
                        .contact-options {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    .contact-option {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        text-decoration: none;
                        text-align: left;
                    }

                    a.contact-option:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .contact-option-icon {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .contact-option-text {
                        flex: 1;
                        min-width: 0;
                        display: flex;
                        flex-direction: column;
                    }

                    .contact-option-label {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.4);
                    }

                    .contact-option-value {
                        font-weight: 500;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    }

                    .contact-option-arrow {
                        color: rgba(255, 255, 255, 0.3);
                    }

                    .contact-support {
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.4);
                    }

                    .contact-support a {
                        color: rgba(255, 255, 255, 0.6);
                        text-decoration: none;
                    }

                    .contact-support a:hover {
                        color: #fff;
                    }

                    .site-footer {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 1.5rem 4rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }

                    .site-footer-brand {
                        font-family: 'Sora', sans-serif;
                        font-weight: 700;
                    }

                    .site-footer p {
                        margin: 0;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.3);
                    }

                    .site-footer-links {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .site-footer-links a {
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.3);
                        text-decoration: none;
                    }

                    .site-footer-links a:hover {
                        color: rgba(255, 255, 255, 0.6);
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
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 Xertai Inc. All rights reserved.");
    }
}
