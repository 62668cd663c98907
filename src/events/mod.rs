pub mod pointer;
pub mod scroll;

use crate::core::BackdropState;
use crate::dom::Listeners;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Register every input listener for one mount.
///
/// All-or-nothing: on the first failure the listeners registered so far are
/// dropped (and thereby detached) and the error is returned.
pub fn wire_all(
    window: &web::Window,
    document: &web::Document,
    state: &Rc<RefCell<BackdropState>>,
) -> anyhow::Result<Listeners> {
    let mut listeners = Listeners::default();
    pointer::wire_pointer_handlers(window, document, state, &mut listeners)
        .map_err(|e| anyhow::anyhow!("pointer listeners: {:?}", e))?;
    if state.borrow().scroller.is_enabled() {
        scroll::wire_scroll_handlers(window, document, state, &mut listeners)
            .map_err(|e| anyhow::anyhow!("scroll listeners: {:?}", e))?;
    } else {
        scroll::wire_native_scroll(window, state, &mut listeners)
            .map_err(|e| anyhow::anyhow!("scroll listeners: {:?}", e))?;
    }
    scroll::wire_back_to_top(window, document, state, &mut listeners)
        .map_err(|e| anyhow::anyhow!("back-to-top listener: {:?}", e))?;
    log::info!("[events] {} listeners attached", listeners.len());
    Ok(listeners)
}
