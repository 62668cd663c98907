use crate::core::BackdropState;
use crate::dom::{self, EventListener, Listeners};
use crate::frame::FrameContext;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

// WheelEvent.deltaMode values
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;
const LINE_HEIGHT_PX: f64 = 16.0;

/// Wheel delta in pixels regardless of the reporting mode.
fn wheel_delta_px(ev: &web::WheelEvent, viewport_height: f64) -> f64 {
    match ev.delta_mode() {
        DOM_DELTA_LINE => ev.delta_y() * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => ev.delta_y() * viewport_height,
        _ => ev.delta_y(),
    }
}

fn first_touch_y(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_y() as f64)
}

/// Smooth scrolling: wheel and touch drive the scroller, native scrolls
/// re-sync it.
pub fn wire_scroll_handlers(
    window: &web::Window,
    document: &web::Document,
    state: &Rc<RefCell<BackdropState>>,
    listeners: &mut Listeners,
) -> Result<(), JsValue> {
    let target: &web::EventTarget = window.as_ref();

    {
        let state = state.clone();
        let window = window.clone();
        let document = document.clone();
        listeners.push(EventListener::new(
            target,
            "wheel",
            false,
            move |ev: web::WheelEvent| {
                if ev.ctrl_key() {
                    // pinch zoom
                    return;
                }
                let viewport_h = dom::viewport_bounds(&window).height as f64;
                let mut st = state.borrow_mut();
                if !st.scroller.is_enabled() {
                    return;
                }
                ev.prevent_default();
                st.scroller.set_limit(dom::scroll_limit(&window, &document));
                st.scroller
                    .on_wheel(wheel_delta_px(&ev, viewport_h), instant::now());
            },
        )?);
    }

    let last_touch_y: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
    {
        let last = last_touch_y.clone();
        listeners.push(EventListener::new(
            target,
            "touchstart",
            true,
            move |ev: web::TouchEvent| last.set(first_touch_y(&ev)),
        )?);
    }
    {
        let state = state.clone();
        let window = window.clone();
        let document = document.clone();
        let last = last_touch_y.clone();
        listeners.push(EventListener::new(
            target,
            "touchmove",
            false,
            move |ev: web::TouchEvent| {
                let Some(y) = first_touch_y(&ev) else {
                    return;
                };
                let Some(prev) = last.replace(Some(y)) else {
                    return;
                };
                let mut st = state.borrow_mut();
                if !st.scroller.is_enabled() {
                    return;
                }
                ev.prevent_default();
                st.scroller.set_limit(dom::scroll_limit(&window, &document));
                st.scroller.on_touch(y - prev, instant::now());
            },
        )?);
    }
    {
        let last = last_touch_y;
        listeners.push(EventListener::new(
            target,
            "touchend",
            true,
            move |_: web::TouchEvent| last.set(None),
        )?);
    }

    wire_native_scroll(window, state, listeners)
}

/// Keep the scroller in step with scrollbar and keyboard scrolling.
pub fn wire_native_scroll(
    window: &web::Window,
    state: &Rc<RefCell<BackdropState>>,
    listeners: &mut Listeners,
) -> Result<(), JsValue> {
    let state = state.clone();
    let window_for_cb = window.clone();
    listeners.push(EventListener::new(
        window.as_ref(),
        "scroll",
        true,
        move |_: web::Event| {
            state
                .borrow_mut()
                .scroller
                .sync(dom::scroll_y(&window_for_cb));
        },
    )?);
    Ok(())
}

/// Without a frame loop, keep reveals and the back-to-top button in step
/// from the scroll and resize events themselves.
pub fn wire_static_sync(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
    listeners: &mut Listeners,
) -> Result<(), JsValue> {
    let target: &web::EventTarget = window.as_ref();
    let on_scroll = {
        let ctx = ctx.clone();
        EventListener::new(target, "scroll", true, move |_: web::Event| {
            ctx.borrow_mut().sync_scroll_dependent(false);
        })?
    };
    let on_resize = {
        let ctx = ctx.clone();
        EventListener::new(target, "resize", true, move |_: web::Event| {
            ctx.borrow_mut().sync_scroll_dependent(true);
        })?
    };
    listeners.push(on_scroll);
    listeners.push(on_resize);
    Ok(())
}

/// Clicking `[data-back-to-top]` returns to the top of the page, eased when
/// the scroller is on.
pub fn wire_back_to_top(
    window: &web::Window,
    document: &web::Document,
    state: &Rc<RefCell<BackdropState>>,
    listeners: &mut Listeners,
) -> Result<(), JsValue> {
    let Some(button) = document.query_selector("[data-back-to-top]")? else {
        return Ok(());
    };
    let state = state.clone();
    let window = window.clone();
    let document = document.clone();
    listeners.push(EventListener::new(
        button.as_ref(),
        "click",
        true,
        move |_: web::MouseEvent| {
            let mut st = state.borrow_mut();
            if st.scroller.is_enabled() {
                st.scroller.set_limit(dom::scroll_limit(&window, &document));
                st.scroller.scroll_to(0.0, instant::now());
            } else {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        },
    )?);
    Ok(())
}
