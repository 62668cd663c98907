use crate::core::{
    parse_quad, scroll_progress, ConfigError, RegionId, RevealRegion, RevealStyle,
    ScrollRevealMapper, ViewLatch,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const IN_VIEW_CLASS: &str = "in-view";

struct Binding {
    el: web::HtmlElement,
    id: RegionId,
    latch: ViewLatch,
}

impl Binding {
    fn apply(&self, style: RevealStyle) {
        let css = self.el.style();
        _ = css.set_property("opacity", &format!("{:.3}", style.opacity));
        _ = css.set_property("transform", &format!("translateY({:.2}px)", style.offset));
    }
}

/// `[data-reveal]` elements bound to regions in a [`ScrollRevealMapper`].
#[derive(Default)]
pub struct RevealBindings {
    bindings: Vec<Binding>,
}

fn region_for(el: &web::Element, default: RevealRegion) -> Result<RevealRegion, ConfigError> {
    let mut region = match dom::data_attribute(el, "reveal").as_deref() {
        Some("fade-in") => RevealRegion::fade_in(),
        _ => default,
    };
    if let Some(v) = dom::data_attribute(el, "reveal-thresholds") {
        region = region.with_thresholds(parse_quad("reveal-thresholds", &v)?);
    }
    if let Some(v) = dom::data_attribute(el, "reveal-offset") {
        region = region.with_offset(parse_quad("reveal-offset", &v)?);
    }
    Ok(region)
}

impl RevealBindings {
    /// Register every `[data-reveal]` element. Elements with invalid
    /// overrides are logged and left alone.
    pub fn bind_all(
        document: &web::Document,
        mapper: &mut ScrollRevealMapper,
        default: RevealRegion,
    ) -> Self {
        let mut out = Self::default();
        let Ok(nodes) = document.query_selector_all("[data-reveal]") else {
            return out;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            match region_for(&el, default).and_then(|r| mapper.register(r)) {
                Ok(id) => out.bindings.push(Binding {
                    el,
                    id,
                    latch: ViewLatch::default(),
                }),
                Err(e) => log::warn!("[reveal] skipping element: {}", e),
            }
        }
        log::info!("[reveal] {} regions bound", out.bindings.len());
        out
    }

    /// Recompute every region for the current scroll position.
    pub fn update(&mut self, mapper: &ScrollRevealMapper, viewport_height: f32) {
        // read all layout first so the style writes below don't force reflows
        let rects: Vec<(f32, f32)> = self
            .bindings
            .iter()
            .map(|b| {
                let r = b.el.get_bounding_client_rect();
                (r.top() as f32, r.height() as f32)
            })
            .collect();

        for (b, (top, height)) in self.bindings.iter_mut().zip(rects) {
            let progress = scroll_progress(top, height, viewport_height);
            let Some(style) = mapper.evaluate(b.id, progress) else {
                continue;
            };
            b.apply(style);
            let was = b.latch.is_in_view();
            if b.latch.update(top, viewport_height) != was {
                _ = b
                    .el
                    .class_list()
                    .toggle_with_force(IN_VIEW_CLASS, b.latch.is_in_view());
            }
        }
    }

    /// Show every region on its visible plateau, for pages where no scroll
    /// listener will ever call [`RevealBindings::update`].
    pub fn show_resting(&mut self, mapper: &ScrollRevealMapper) {
        for b in &self.bindings {
            if let Some(style) = mapper.resting(b.id) {
                b.apply(style);
                _ = b.el.class_list().add_1(IN_VIEW_CLASS);
            }
        }
    }

    /// Unregister everything and drop the inline styles.
    pub fn unbind(&mut self, mapper: &mut ScrollRevealMapper) {
        for b in self.bindings.drain(..) {
            mapper.unregister(b.id);
            let css = b.el.style();
            _ = css.remove_property("opacity");
            _ = css.remove_property("transform");
            _ = b.el.class_list().remove_1(IN_VIEW_CLASS);
        }
    }
}
