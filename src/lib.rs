pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod follower;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod presentation;
#[cfg(target_arch = "wasm32")]
mod reveal;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::canvas::Canvas2dSurface;
    use crate::core::{BackdropConfig, BackdropState};
    use crate::dom;
    use crate::events;
    use crate::follower::FollowerView;
    use crate::frame::{FrameContext, FrameLoop};
    use crate::presentation::PresentationPolicy;
    use crate::reveal::RevealBindings;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    const CANVAS_ID: &str = "backdrop-canvas";
    const FOLLOWER_ID: &str = "mouse-follower";

    /// Everything one mount created; [`Backdrop::teardown`] releases it in
    /// order.
    struct Backdrop {
        state: Rc<RefCell<BackdropState>>,
        frame_ctx: Rc<RefCell<FrameContext>>,
        frame_loop: FrameLoop,
        listeners: dom::Listeners,
        policy: PresentationPolicy,
        document: web::Document,
    }

    impl Backdrop {
        fn teardown(self) {
            self.frame_loop.stop();
            drop(self.listeners);
            self.state.borrow_mut().teardown();
            self.frame_ctx.borrow_mut().teardown();
            self.policy.revert(&self.document);
            log::info!("[backdrop] unmounted");
        }
    }

    thread_local! {
        static MOUNTED: RefCell<Option<Backdrop>> = const { RefCell::new(None) };
    }

    fn load_config(canvas: &web::HtmlCanvasElement) -> BackdropConfig {
        let mut config = BackdropConfig::default();
        if let Err(e) = config.apply_overrides(|key| dom::data_attribute(canvas, key)) {
            log::warn!("[config] {}; falling back to defaults", e);
            config = BackdropConfig::default();
        }
        config
    }

    fn mount() -> anyhow::Result<Backdrop> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let config = load_config(&canvas);
        let bounds = dom::viewport_bounds(&window);
        let reduced_motion = dom::prefers_reduced_motion(&window);

        // Missing 2D context: keep simulating, skip painting.
        let surface = match Canvas2dSurface::new(canvas, bounds) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[canvas] {:?}; painting disabled", e);
                None
            }
        };

        let follower = document
            .get_element_by_id(FOLLOWER_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .filter(|_| {
                config
                    .follower
                    .should_render(bounds.width, dom::is_touch_capable(&window))
            })
            .map(|el| FollowerView::new(el, config.follower.color));

        let mut config = config;
        if reduced_motion {
            config.scroll.enabled = false;
        }
        let policy = PresentationPolicy::new(follower.is_some());
        let state = Rc::new(RefCell::new(BackdropState::new(
            config,
            bounds,
            None,
            follower.is_some(),
        )));
        log::info!(
            "[backdrop] {} particles in {}x{}, follower={}, reduced_motion={}",
            state.borrow().field.len(),
            bounds.width,
            bounds.height,
            follower.is_some(),
            reduced_motion
        );

        let reveals = {
            let mut st = state.borrow_mut();
            st.scroller.set_limit(dom::scroll_limit(&window, &document));
            st.scroller.sync(dom::scroll_y(&window));
            let default_region = st.config.reveal;
            RevealBindings::bind_all(&document, &mut st.reveal, default_region)
        };

        // All-or-nothing: a failed registration detaches the ones before it.
        let (mut listeners, listening) = match events::wire_all(&window, &document, &state) {
            Ok(l) => (l, true),
            Err(e) => {
                log::warn!("[events] {:?}; input disabled", e);
                (dom::Listeners::default(), false)
            }
        };
        policy.apply(&document);

        let back_to_top = document
            .query_selector("[data-back-to-top]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            window: window.clone(),
            state: state.clone(),
            surface,
            follower,
            reveals,
            back_to_top,
            last_scroll_y: None,
        }));
        let frame_loop = FrameLoop::new(frame_ctx.clone());

        let animating = if !listening || reduced_motion {
            log::info!("[loop] animation off, rendering a static frame");
            false
        } else if let Err(e) = frame_loop.start() {
            log::warn!("[loop] {:?}; rendering a static frame", e);
            false
        } else {
            true
        };
        if !animating {
            state.borrow_mut().scroller.disable();
            frame_ctx.borrow_mut().render_static(instant::now());
            let synced = listening
                && events::scroll::wire_static_sync(&window, &frame_ctx, &mut listeners)
                    .map_err(|e| log::warn!("[events] static scroll sync: {:?}", e))
                    .is_ok();
            if !synced {
                frame_ctx.borrow_mut().show_resting_reveals();
            }
        }

        Ok(Backdrop {
            state,
            frame_ctx,
            frame_loop,
            listeners,
            policy,
            document,
        })
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("backdrop-web starting");

        if MOUNTED.with(|m| m.borrow().is_some()) {
            return Ok(());
        }
        match mount() {
            Ok(backdrop) => MOUNTED.with(|m| *m.borrow_mut() = Some(backdrop)),
            Err(e) => log::error!("init error: {:?}", e),
        }
        Ok(())
    }

    /// Stop the loop, detach every listener and restore the page styles.
    #[wasm_bindgen]
    pub fn unmount() {
        if let Some(backdrop) = MOUNTED.with(|m| m.borrow_mut().take()) {
            backdrop.teardown();
        }
    }
}
