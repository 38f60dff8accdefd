use yew::prelude::*;

use crate::components::scroll_provider::{use_scroll_frame, use_site_config};
use crate::dom::scroll_to_section;

pub struct NavItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { id: "home", icon: "⌂", label: "Home" },
    NavItem { id: "services", icon: "</>", label: "Services" },
    NavItem { id: "technology", icon: "⚙", label: "Tech" },
    NavItem { id: "projects", icon: "▣", label: "Projects" },
    NavItem { id: "contact", icon: "✉", label: "Contact" },
];

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let config = use_site_config();
    let frame = use_scroll_frame();

    let visible = frame
        .as_ref()
        .map_or(false, |frame| frame.state.offset_y > config.nav_reveal_offset);
    let active = frame
        .as_ref()
        .and_then(|frame| frame.active.clone())
        .unwrap_or_else(|| NAV_ITEMS[0].id.to_string());

    html! {
        <nav class={classes!("section-nav", visible.then(|| "visible"))}>
            <div class="section-nav-bar">
                { for NAV_ITEMS.iter().map(|item| {
                    let id = item.id;
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section(id);
                    });
                    html! {
                        <button
                            class={classes!("section-nav-item", (active == item.id).then(|| "active"))}
                            onclick={onclick}
                        >
                            <span class="section-nav-icon">{item.icon}</span>
                            <span class="section-nav-label">{item.label}</span>
                        </button>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .section-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        opacity: 0;
                        transform: translateY(-100%);
                        pointer-events: none;
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }

                    .section-nav.visible {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }

                    .section-nav-bar {
                        margin: 1rem 1rem 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1rem;
                        border-radius: 1rem;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(24px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }

                    .section-nav-item {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: transparent;
                        color: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }

                    .section-nav-item:hover {
                        color: #fff;
                        background: rgba(255, 255, 255, 0.05);
                    }

                    .section-nav-item.active {
                        color: #fff;
                        background: rgba(255, 255, 255, 0.15);
                    }

                    .section-nav-label {
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    @media (max-width: 640px) {
                        .section-nav-label {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
