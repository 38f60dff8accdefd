use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod scroll;
mod components {
    pub mod nav;
    pub mod pinned;
    pub mod reveal;
    pub mod scroll_provider;
}
mod sections {
    pub mod contact;
    pub mod hero;
    pub mod projects;
    pub mod services;
    pub mod showcase;
    pub mod technology;
}

use components::{
    nav::{Navigation, NAV_ITEMS},
    scroll_provider::ScrollProvider,
};
use config::SiteConfig;
use scroll::section::SectionRegistry;
use sections::{
    contact::ContactSection,
    hero::HeroSection,
    projects::ProjectsSection,
    services::ServicesSection,
    showcase::{ShowcaseKind, ShowcaseSection},
    technology::TechnologySection,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

fn section_registry() -> SectionRegistry {
    let entries = NAV_ITEMS.iter().map(|item| (item.id, item.label));
    match SectionRegistry::from_entries(entries) {
        Ok(registry) => registry,
        Err(err) => {
            warn!("Section navigation disabled: {}", err);
            SectionRegistry::new()
        }
    }
}

#[function_component]
fn Landing() -> Html {
    let registry = use_memo(|_| section_registry(), ());

    html! {
        <ScrollProvider registry={(*registry).clone()}>
            <Navigation />
            <main class="landing">
                <HeroSection />
                <ShowcaseSection kind={ShowcaseKind::BuiltToWork} />
                <ShowcaseSection kind={ShowcaseKind::HumanCentered} />
                <ShowcaseSection kind={ShowcaseKind::Modular} />
                <ServicesSection />
                <TechnologySection />
                <ProjectsSection />
                <ContactSection />
            </main>
        </ScrollProvider>
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::load(), ());

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>
                {r#"
                    html, body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: 'Inter', system-ui, sans-serif;
                        -webkit-font-smoothing: antialiased;
                    }

                    *, *::before, *::after {
                        box-sizing: border-box;
                    }

                    .landing {
                        position: relative;
                        overflow-x: clip;
                    }

                    .section-inner {
                        padding: 0 1.5rem;
                    }

                    @media (min-width: 1024px) {
                        .section-inner {
                            padding: 0 4rem;
                        }
                    }

                    .section-heading {
                        margin: 0 0 2rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .activity-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: linear-gradient(180deg, rgba(255, 255, 255, 0.06), rgba(255, 255, 255, 0.02));
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        backdrop-filter: blur(12px);
                    }

                    .pill-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.875rem;
                        text-decoration: none;
                        white-space: nowrap;
                        transition: all 0.3s ease;
                    }

                    .pill-link:hover {
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                    }

                    .solid-link {
                        padding: 0.625rem 1.5rem;
                        border-radius: 9999px;
                        background: #fff;
                        color: #000;
                        font-weight: 500;
                        text-decoration: none;
                        white-space: nowrap;
                    }

                    .solid-link:hover {
                        background: rgba(255, 255, 255, 0.9);
                    }
                "#}
            </style>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_navigation_order() {
        let registry = section_registry();
        let ids: Vec<_> = registry.iter().map(|section| section.id.as_str()).collect();
        assert_eq!(ids, ["home", "services", "technology", "projects", "contact"]);
    }
}
