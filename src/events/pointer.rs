use crate::core::{classify, BackdropState, HitElement};
use crate::dom::{self, EventListener, Listeners};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// DOM element as seen by the interaction classifier.
pub struct DomHit(pub web::Element);

impl HitElement for DomHit {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(DomHit)
    }
}

pub fn wire_pointer_handlers(
    window: &web::Window,
    document: &web::Document,
    state: &Rc<RefCell<BackdropState>>,
    listeners: &mut Listeners,
) -> Result<(), JsValue> {
    let target: &web::EventTarget = window.as_ref();

    {
        let state = state.clone();
        let document = document.clone();
        listeners.push(EventListener::new(
            target,
            "pointermove",
            true,
            move |ev: web::PointerEvent| {
                let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
                let now = instant::now();
                let hit = document.element_from_point(x, y).map(DomHit);
                let kind = classify(hit);
                let mut st = state.borrow_mut();
                st.pointer_moved(x, y, now);
                if let Some(next) = st.hover(kind) {
                    log::debug!("[pointer] hovering {:?}", next);
                }
            },
        )?);
    }

    {
        let state = state.clone();
        listeners.push(EventListener::new(
            target,
            "pointerdown",
            true,
            move |ev: web::PointerEvent| {
                let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
                state.borrow_mut().pointer_down(x, y, instant::now());
            },
        )?);
    }

    {
        let state = state.clone();
        listeners.push(EventListener::new(
            target,
            "pointerup",
            true,
            move |_: web::PointerEvent| state.borrow_mut().pointer_up(),
        )?);
    }

    {
        let state = state.clone();
        listeners.push(EventListener::new(
            target,
            "focus",
            true,
            move |_: web::FocusEvent| state.borrow_mut().pointer_entered(),
        )?);
    }

    if let Some(root) = document.document_element() {
        let root: &web::EventTarget = root.as_ref();
        {
            let state = state.clone();
            listeners.push(EventListener::new(
                root,
                "pointerenter",
                true,
                move |_: web::PointerEvent| state.borrow_mut().pointer_entered(),
            )?);
        }
        {
            let state = state.clone();
            listeners.push(EventListener::new(
                root,
                "pointerleave",
                true,
                move |_: web::PointerEvent| state.borrow_mut().pointer_left(),
            )?);
        }
    }

    {
        let state = state.clone();
        let window_for_cb = window.clone();
        listeners.push(EventListener::new(
            target,
            "resize",
            true,
            move |_: web::Event| {
                let bounds = dom::viewport_bounds(&window_for_cb);
                state.borrow_mut().viewport_resized(bounds, instant::now());
            },
        )?);
    }

    Ok(())
}
