use crate::constants::*;
use crate::core::config::FollowerParams;
use crate::core::pointer::Visibility;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Default,
    Button,
    Link,
    Input,
}

impl InteractionState {
    /// Follower diameter while hovering this kind of element.
    pub fn size(self, base_size: f32) -> f32 {
        match self {
            InteractionState::Button => BUTTON_HOVER_SIZE,
            InteractionState::Link => LINK_HOVER_SIZE,
            InteractionState::Input => INPUT_HOVER_SIZE,
            InteractionState::Default => base_size,
        }
    }

    pub fn is_hovering(self) -> bool {
        self != InteractionState::Default
    }
}

/// Minimal view of a hit-tested element: enough to walk up the tree.
pub trait HitElement: Sized {
    /// Upper-case tag name, as the DOM reports it (`BUTTON`, `A`, ...).
    fn tag_name(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn parent(&self) -> Option<Self>;
}

fn is_button<E: HitElement>(el: &E) -> bool {
    el.tag_name().eq_ignore_ascii_case("BUTTON")
        || el.attribute("role").is_some_and(|r| r == "button")
}

fn is_link<E: HitElement>(el: &E) -> bool {
    el.tag_name().eq_ignore_ascii_case("A")
}

fn is_input<E: HitElement>(el: &E) -> bool {
    let tag = el.tag_name();
    ["INPUT", "TEXTAREA", "SELECT"]
        .iter()
        .any(|t| tag.eq_ignore_ascii_case(t))
}

/// Classify the element under the pointer.
///
/// Buttons win over links anywhere in the ancestor chain; form fields only
/// count when hit directly.
pub fn classify<E: HitElement>(target: Option<E>) -> InteractionState {
    let Some(target) = target else {
        return InteractionState::Default;
    };
    let input = is_input(&target);
    let mut link = false;
    let mut node = Some(target);
    while let Some(el) = node {
        if is_button(&el) {
            return InteractionState::Button;
        }
        link |= is_link(&el);
        node = el.parent();
    }
    if link {
        InteractionState::Link
    } else if input {
        InteractionState::Input
    } else {
        InteractionState::Default
    }
}

/// Memoizes the last classification so unchanged hovers cause no restyle.
#[derive(Debug, Default)]
pub struct InteractionClassifier {
    current: InteractionState,
}

impl InteractionClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new state only when it differs from the previous one.
    pub fn update<E: HitElement>(&mut self, target: Option<E>) -> Option<InteractionState> {
        self.set(classify(target))
    }

    pub fn set(&mut self, next: InteractionState) -> Option<InteractionState> {
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    /// Pointer left every element (e.g. left the window).
    pub fn reset(&mut self) -> Option<InteractionState> {
        self.set(InteractionState::Default)
    }

    pub fn current(&self) -> InteractionState {
        self.current
    }
}

/// Resolved visual state of the follower element for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerStyle {
    /// Top-left translation in px.
    pub translate: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub scale: f32,
    pub visible: bool,
}

pub fn follower_style(
    params: &FollowerParams,
    smoothed: Vec2,
    state: InteractionState,
    clicking: bool,
    visibility: Visibility,
) -> FollowerStyle {
    let hovering = state.is_hovering();
    let size = if clicking {
        params.base_size * CLICK_SIZE_FACTOR
    } else if hovering {
        state.size(params.base_size)
    } else {
        params.base_size
    };
    let visible = visibility == Visibility::Visible;
    let opacity = if !visible {
        0.0
    } else if clicking {
        OPACITY_CLICKING
    } else if hovering {
        OPACITY_HOVERING
    } else {
        OPACITY_IDLE
    };
    let anchor = if hovering {
        HOVER_ANCHOR_OFFSET
    } else {
        params.base_size / 2.0
    };
    FollowerStyle {
        translate: smoothed - Vec2::splat(anchor),
        size,
        opacity,
        scale: if clicking { CLICK_SCALE } else { 1.0 },
        visible,
    }
}
