//! Browser side of the scroll engine: window/document adapters, listener
//! registration tied to a value's lifetime, and a requestAnimationFrame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Element, EventTarget, ScrollBehavior, ScrollToOptions, Window,
};
use yew::NodeRef;

use crate::scroll::section::{Bounds, LayoutProbe, MeasureError};
use crate::scroll::state::{ScrollState, Viewport};

pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn sample(&self) -> Option<ScrollState> {
        let window = window()?;
        let offset = window.scroll_y().ok()?;
        let height = window.inner_height().ok()?.as_f64()?;
        ScrollState::new(offset, height)
    }
}

/// Measures elements by id in document coordinates.
pub struct DocumentLayout;

impl LayoutProbe for DocumentLayout {
    fn measure(&self, id: &str) -> Result<Bounds, MeasureError> {
        let element = window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .ok_or_else(|| MeasureError::Missing(id.to_string()))?;
        measure_element(&element).ok_or_else(|| MeasureError::Unsized(id.to_string()))
    }
}

fn measure_element(element: &Element) -> Option<Bounds> {
    let scroll_y = window()?.scroll_y().ok()?;
    let rect = element.get_bounding_client_rect();
    // A detached or display:none element reports an all-zero rect.
    if rect.width() == 0.0 && rect.height() == 0.0 {
        return None;
    }
    Bounds::new(rect.top() + scroll_y, rect.height())
}

/// Document-space bounds of whatever `node` is attached to, if anything.
pub fn measure_node(node: &NodeRef) -> Option<Bounds> {
    measure_element(&node.cast::<Element>()?)
}

/// Smooth-scrolls the window so the section's top meets the viewport top.
pub fn scroll_to_section(id: &str) {
    match DocumentLayout.measure(id) {
        Ok(bounds) => {
            if let Some(window) = window() {
                let options = ScrollToOptions::new();
                options.set_top(bounds.top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
        Err(err) => warn!("Cannot jump to section: {}", err),
    }
}

/// Smooth-scrolls a horizontal container to `left`.
pub fn scroll_container_to(container: &NodeRef, left: f64) {
    if let Some(element) = container.cast::<Element>() {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_to_with_scroll_to_options(&options);
    }
}

/// A passive event listener that is removed when the guard is dropped.
pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventListenerGuard {
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove `{}` listener: {:?}", self.event, err);
        }
    }
}

struct FrameShared {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
}

impl FrameShared {
    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        if let Some(callback) = self.callback.borrow().as_ref() {
            match self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())
            {
                Ok(handle) => self.pending.set(Some(handle)),
                Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
            }
        }
    }
}

/// At most one outstanding animation frame. The callback gets the frame
/// timestamp in ms and returns whether it wants another frame. Dropping the
/// loop cancels the outstanding frame.
pub struct AnimationFrameLoop {
    shared: Rc<FrameShared>,
}

impl AnimationFrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let shared = Rc::new(FrameShared {
            window: window()?,
            callback: RefCell::new(None),
            pending: Cell::new(None),
        });
        let weak = Rc::downgrade(&shared);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            shared.pending.set(None);
            if on_frame(timestamp) {
                shared.request();
            }
        });
        *shared.callback.borrow_mut() = Some(callback);
        Some(Self { shared })
    }

    pub fn request(&self) {
        self.shared.request();
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.shared.pending.take() {
            if let Err(err) = self.shared.window.cancel_animation_frame(handle) {
                warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        self.shared.callback.borrow_mut().take();
    }
}
