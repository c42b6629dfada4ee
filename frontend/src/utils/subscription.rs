//! Browser event subscriptions that detach themselves when dropped.
//!
//! Components keep these inside a `use_effect_with_deps` and return a
//! destructor that drops them, so nothing keeps firing after unmount.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// A listener registered on `window`, removed on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn Fn()>::new(handler);
        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::error!("Failed to add {} listener: {:?}", event, e);
            return None;
        }
        Some(Self { event, callback })
    }

    /// Scroll listener that also runs once immediately with the current offset.
    pub fn on_scroll(handler: impl Fn(f64) + 'static) -> Option<Self> {
        handler(scroll_y());
        Self::new("scroll", move || handler(scroll_y()))
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) =
                window.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", self.event, e);
            }
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Watches one element and calls `on_visible` the first time it crosses
/// `threshold`. The observer disconnects after that, or on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn once(target: &Element, threshold: f64, on_visible: impl FnOnce(Element) + 'static) -> Option<Self> {
        let mut on_visible = Some(on_visible);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    if let Some(f) = on_visible.take() {
                        f(target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
