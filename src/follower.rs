use crate::core::{FollowerStyle, Rgb};
use web_sys as web;

const STYLED_PROPERTIES: [&str; 6] = [
    "transform",
    "width",
    "height",
    "opacity",
    "background-color",
    "pointer-events",
];

/// The `#mouse-follower` element. Writes inline styles only when the
/// computed style actually changed.
pub struct FollowerView {
    el: web::HtmlElement,
    last: Option<FollowerStyle>,
}

impl FollowerView {
    pub fn new(el: web::HtmlElement, color: Rgb) -> Self {
        let css = el.style();
        _ = css.set_property("pointer-events", "none");
        _ = css.set_property("background-color", &color.to_css());
        Self { el, last: None }
    }

    pub fn apply(&mut self, style: FollowerStyle) {
        if self.last == Some(style) {
            return;
        }
        let css = self.el.style();
        _ = css.set_property(
            "transform",
            &format!(
                "translate({:.2}px, {:.2}px) scale({})",
                style.translate.x, style.translate.y, style.scale
            ),
        );
        if self.last.map(|l| l.size) != Some(style.size) {
            let px = format!("{}px", style.size);
            _ = css.set_property("width", &px);
            _ = css.set_property("height", &px);
        }
        if self.last.map(|l| l.opacity) != Some(style.opacity) {
            _ = css.set_property("opacity", &style.opacity.to_string());
        }
        self.last = Some(style);
    }

    pub fn teardown(&mut self) {
        let css = self.el.style();
        for prop in STYLED_PROPERTIES {
            _ = css.remove_property(prop);
        }
        self.last = None;
    }
}
