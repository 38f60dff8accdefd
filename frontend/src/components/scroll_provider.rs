use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::window;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::{AnimationFrameLoop, DocumentLayout, EventListenerGuard, WindowViewport};
use crate::scroll::driver::{ScrollDriver, ScrollFrame};
use crate::scroll::section::SectionRegistry;

/// Layout keeps moving for a moment after a resize (media queries, images),
/// so sections are measured once more after it settles.
const RESIZE_REMEASURE_MS: u32 = 150;

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    pub registry: SectionRegistry,
    #[prop_or_default]
    pub children: Children,
}

/// Latest frame published by the enclosing [`ScrollProvider`]. `None`
/// before the first frame or outside a browser.
#[hook]
pub fn use_scroll_frame() -> Option<ScrollFrame> {
    use_context::<Option<ScrollFrame>>().flatten()
}

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

/// Owns the scroll driver for as long as it is mounted: the scroll and
/// resize listeners, the frame loop and the resize re-measure timer are all
/// released by the effect cleanup.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let config = use_site_config();
    let frame = use_state_eq(|| None::<ScrollFrame>);

    {
        let frame = frame.clone();
        let registry = props.registry.clone();
        use_effect_with_deps(
            move |config: &Rc<SiteConfig>| {
                let driver = Rc::new(RefCell::new(ScrollDriver::new(config, registry)));
                let frame_loop = AnimationFrameLoop::new({
                    let driver = driver.clone();
                    move |now_ms| {
                        let next = driver
                            .borrow_mut()
                            .frame(now_ms, &WindowViewport, &DocumentLayout);
                        match next {
                            Some(next) => {
                                let keep_going = !next.settled;
                                frame.set(Some(next));
                                keep_going
                            }
                            None => false,
                        }
                    }
                })
                .map(Rc::new);

                let resize_timer: Rc<RefCell<Option<Timeout>>> = Rc::default();
                let mut guards = Vec::new();
                if let (Some(window), Some(frame_loop)) = (window(), frame_loop.clone()) {
                    let schedule = {
                        let driver = driver.clone();
                        move || {
                            if driver.borrow_mut().notify() {
                                frame_loop.request();
                            }
                        }
                    };

                    match EventListenerGuard::passive(&window, "scroll", schedule.clone()) {
                        Ok(guard) => guards.push(guard),
                        Err(err) => warn!("Failed to listen for scroll: {:?}", err),
                    }

                    let on_resize = {
                        let resize_timer = resize_timer.clone();
                        let schedule = schedule.clone();
                        move || {
                            schedule();
                            // Replacing the timer cancels the previous one.
                            let schedule = schedule.clone();
                            resize_timer
                                .borrow_mut()
                                .replace(Timeout::new(RESIZE_REMEASURE_MS, schedule));
                        }
                    };
                    match EventListenerGuard::passive(&window, "resize", on_resize) {
                        Ok(guard) => guards.push(guard),
                        Err(err) => warn!("Failed to listen for resize: {:?}", err),
                    }

                    schedule();
                }

                move || {
                    drop(guards);
                    resize_timer.borrow_mut().take();
                    drop(frame_loop);
                }
            },
            config,
        );
    }

    html! {
        <ContextProvider<Option<ScrollFrame>> context={(*frame).clone()}>
            { for props.children.iter() }
        </ContextProvider<Option<ScrollFrame>>>
    }
}
