use crate::core::Bounds;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn viewport_bounds(window: &web::Window) -> Bounds {
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Bounds::new(px(window.inner_width()), px(window.inner_height()))
}

/// Value of `data-{key}` on `el`, if present.
#[inline]
pub fn data_attribute(el: &web::Element, key: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", key))
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|q| q.matches())
        .unwrap_or(false)
}

pub fn is_touch_capable(window: &web::Window) -> bool {
    if window.navigator().max_touch_points() > 0 {
        return true;
    }
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Largest scroll offset the document allows.
pub fn scroll_limit(window: &web::Window, document: &web::Document) -> f64 {
    let content = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (content - viewport).max(0.0)
}

/// A registered DOM listener. Dropping it detaches the callback.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    /// Attach `handler` for `kind` on `target`, downcasting the event to `E`.
    /// Events of another type are ignored.
    pub fn new<E, F>(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        mut handler: F,
    ) -> Result<Self, JsValue>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Every listener one mount registered; dropped together on teardown.
#[derive(Default)]
pub struct Listeners(Vec<EventListener>);

impl Listeners {
    pub fn push(&mut self, listener: EventListener) {
        self.0.push(listener);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
