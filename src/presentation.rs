use wasm_bindgen::JsCast;
use web_sys as web;

const STYLE_ID: &str = "backdrop-presentation";
const PARKED_TITLE: &str = "data-backdrop-title";

/// Page-wide presentation tweaks, installed as a single `<style>` element.
pub struct PresentationPolicy {
    hide_cursor: bool,
}

impl PresentationPolicy {
    pub fn new(hide_cursor: bool) -> Self {
        Self { hide_cursor }
    }

    pub fn stylesheet(&self) -> String {
        let mut css = String::from(
            "#backdrop-canvas{position:fixed;inset:0;pointer-events:none;z-index:-1}\
             [data-reveal]{will-change:opacity,transform}",
        );
        if self.hide_cursor {
            css.push_str(
                "html,body,a,button,input,textarea,select,[role=button]{cursor:none!important}\
                 #mouse-follower{position:fixed;top:0;left:0;border-radius:50%;z-index:9999;\
                 transition:width .2s,height .2s,opacity .2s}",
            );
        }
        css
    }

    #[inline]
    pub fn is_applied(document: &web::Document) -> bool {
        document.get_element_by_id(STYLE_ID).is_some()
    }

    /// Install the stylesheet. A second call is a no-op.
    pub fn apply(&self, document: &web::Document) {
        if Self::is_applied(document) {
            return;
        }
        let Some(head) = document.head() else {
            log::warn!("[presentation] no <head>, skipping");
            return;
        };
        let Ok(el) = document.create_element("style") else {
            return;
        };
        el.set_id(STYLE_ID);
        el.set_text_content(Some(&self.stylesheet()));
        if head.append_child(&el).is_err() {
            return;
        }
        let parked = if self.hide_cursor {
            park_titles(document)
        } else {
            0
        };
        log::debug!(
            "[presentation] applied (hide_cursor={}, {} titles parked)",
            self.hide_cursor,
            parked
        );
    }

    pub fn revert(&self, document: &web::Document) {
        if let Some(el) = document.get_element_by_id(STYLE_ID) {
            el.remove();
        }
        for el in elements(document, &format!("[{}]", PARKED_TITLE)) {
            if let Some(title) = el.get_attribute(PARKED_TITLE) {
                _ = el.set_attribute("title", &title);
            }
            _ = el.remove_attribute(PARKED_TITLE);
        }
    }
}

fn elements(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Native tooltips would pop up over the follower; move `title` aside.
fn park_titles(document: &web::Document) -> usize {
    let parked = elements(document, "[title]");
    for el in &parked {
        if let Some(title) = el.get_attribute("title") {
            _ = el.set_attribute(PARKED_TITLE, &title);
            _ = el.remove_attribute("title");
        }
    }
    parked.len()
}
