use crate::canvas::Canvas2dSurface;
use crate::core::{
    back_to_top_visible, BackdropState, DrawSurface, FrameClock, FrameHandler, FrameTick,
};
use crate::dom;
use crate::follower::FollowerView;
use crate::reveal::RevealBindings;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const BACK_TO_TOP_CLASS: &str = "visible";

/// Everything the render tick touches besides the shared state.
pub struct FrameContext {
    pub window: web::Window,
    pub state: Rc<RefCell<BackdropState>>,
    pub surface: Option<Canvas2dSurface>,
    pub follower: Option<FollowerView>,
    pub reveals: RevealBindings,
    pub back_to_top: Option<web::HtmlElement>,
    pub last_scroll_y: Option<f64>,
}

impl FrameHandler for FrameContext {
    fn frame(&mut self, tick: FrameTick) {
        let out = self
            .state
            .borrow_mut()
            .frame(tick, self.surface.as_mut());

        if let (Some(view), Some(style)) = (self.follower.as_mut(), out.follower) {
            view.apply(style);
        }
        if let Some(y) = out.scroll_to {
            self.window.scroll_to_with_x_and_y(0.0, y);
        }
        self.sync_scroll_dependent(out.resized.is_some());
    }
}

impl FrameContext {
    /// Reveal regions and the back-to-top button only change with the
    /// scroll offset or the viewport size.
    pub fn sync_scroll_dependent(&mut self, force: bool) {
        let y = dom::scroll_y(&self.window);
        if !force && self.last_scroll_y == Some(y) {
            return;
        }
        self.last_scroll_y = Some(y);

        let viewport_h = dom::viewport_bounds(&self.window).height;
        self.reveals.update(&self.state.borrow().reveal, viewport_h);

        if let Some(btn) = &self.back_to_top {
            _ = btn
                .class_list()
                .toggle_with_force(BACK_TO_TOP_CLASS, back_to_top_visible(y));
        }
    }

    /// Paint a single frame without scheduling any more.
    pub fn render_static(&mut self, now_ms: f64) {
        let mut clock = FrameClock::new();
        clock.start();
        clock.drive(now_ms, self);
    }

    /// Without a frame loop or scroll listener, park reveals fully visible.
    pub fn show_resting_reveals(&mut self) {
        self.reveals.show_resting(&self.state.borrow().reveal);
    }

    pub fn teardown(&mut self) {
        if let Some(view) = self.follower.as_mut() {
            view.teardown();
        }
        self.reveals.unbind(&mut self.state.borrow_mut().reveal);
        if let Some(s) = self.surface.as_mut() {
            let b = dom::viewport_bounds(&self.window);
            s.clear(b.width, b.height);
        }
        if let Some(btn) = &self.back_to_top {
            _ = btn.class_list().remove_1(BACK_TO_TOP_CLASS);
        }
        self.last_scroll_y = None;
    }
}

type TickClosure = Closure<dyn FnMut(f64)>;

/// requestAnimationFrame driver for a [`FrameContext`].
///
/// The callback reschedules itself while the clock runs; `stop` cancels the
/// pending request and drops the callback.
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    clock: Rc<RefCell<FrameClock>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameLoop {
    pub fn new(ctx: Rc<RefCell<FrameContext>>) -> Self {
        Self {
            ctx,
            clock: Rc::new(RefCell::new(FrameClock::new())),
            raf_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        }
    }

    pub fn start(&self) -> anyhow::Result<()> {
        if !self.clock.borrow_mut().start() {
            return Ok(());
        }
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

        let ctx = self.ctx.clone();
        let clock = self.clock.clone();
        let raf_id = self.raf_id.clone();
        let tick_clone = self.tick.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            raf_id.set(None);
            let ran = clock
                .borrow_mut()
                .drive(instant::now(), &mut *ctx.borrow_mut());
            if !ran {
                return;
            }
            let Some(w) = web::window() else {
                return;
            };
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => raf_id.set(Some(id)),
                    Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = self
            .tick
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        match first {
            Some(Ok(id)) => {
                self.raf_id.set(Some(id));
                log::info!("[loop] started");
                Ok(())
            }
            Some(Err(e)) => {
                self.stop();
                Err(anyhow::anyhow!("requestAnimationFrame: {:?}", e))
            }
            None => {
                self.stop();
                Err(anyhow::anyhow!("frame callback missing"))
            }
        }
    }

    pub fn stop(&self) {
        if !self.clock.borrow_mut().stop() {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the callback's reference to itself
        self.tick.borrow_mut().take();
        log::info!("[loop] stopped after {} frames", self.clock.borrow().frames());
    }
}
