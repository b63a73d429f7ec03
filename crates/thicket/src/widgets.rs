//! Stock components for building trees.

use std::{
    ops::Deref,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{
    container::Container,
    node::{Component, FocusChange, Interactable, InteractableContainer, NodeState},
};

/// Static text. Never takes focus.
#[derive(Debug, Default)]
pub struct Label {
    /// Identity and parent link.
    state: NodeState,
    /// Displayed text.
    text: String,
}

impl Label {
    /// Create a label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            state: NodeState::new(),
            text: text.into(),
        }
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for Label {
    fn state(&self) -> &NodeState {
        &self.state
    }
}

/// A pressable button. Buttons accept focus and remember whether they hold it.
#[derive(Debug, Default)]
pub struct Button {
    /// Identity and parent link.
    state: NodeState,
    /// Button caption.
    label: String,
    /// Set while this button holds focus.
    focused: AtomicBool,
}

impl Button {
    /// Create a button with a caption.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: NodeState::new(),
            label: label.into(),
            focused: AtomicBool::new(false),
        }
    }

    /// The button caption.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Does this button currently hold focus?
    pub fn is_focused(&self) -> bool {
        self.focused.load(Ordering::Acquire)
    }
}

impl Component for Button {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn as_interactable(&self) -> Option<&dyn Interactable> {
        Some(self)
    }
}

impl Interactable for Button {
    fn on_enter_focus(&self, _change: FocusChange) {
        self.focused.store(true, Ordering::Release);
    }

    fn on_leave_focus(&self, _change: FocusChange) {
        self.focused.store(false, Ordering::Release);
    }
}

/// A plain composite. Panels never take focus themselves, but focus
/// traversal descends into them.
#[derive(Debug, Default)]
pub struct Panel {
    /// Child collection.
    container: Container,
    /// Optional border title.
    title: Option<String>,
}

impl Panel {
    /// Create an empty, untitled panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The panel title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Deref for Panel {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.container
    }
}

impl Component for Panel {
    fn state(&self) -> &NodeState {
        self.container.state()
    }

    fn is_scrollable(&self) -> bool {
        self.container.is_scrollable()
    }

    fn as_container(&self) -> Option<&Container> {
        Some(&self.container)
    }

    fn as_interactable_container(&self) -> Option<&dyn InteractableContainer> {
        Some(&self.container)
    }
}

/// A composite that scrolls its content, so it always reports itself
/// scrollable.
#[derive(Debug, Default)]
pub struct ScrollView {
    /// Child collection.
    container: Container,
}

impl ScrollView {
    /// Create an empty scroll view.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for ScrollView {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.container
    }
}

impl Component for ScrollView {
    fn state(&self) -> &NodeState {
        self.container.state()
    }

    fn is_scrollable(&self) -> bool {
        true
    }

    fn as_container(&self) -> Option<&Container> {
        Some(&self.container)
    }

    fn as_interactable_container(&self) -> Option<&dyn InteractableContainer> {
        Some(&self.container)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{error::Result, node::ComponentRef};

    #[test]
    fn names_follow_type() {
        assert_eq!(Label::new("x").name(), "label");
        assert_eq!(Button::new("x").name(), "button");
        assert_eq!(Panel::new().name(), "panel");
        assert_eq!(ScrollView::new().name(), "scroll_view");
    }

    #[test]
    fn panel_shares_identity_with_container() {
        let panel = Panel::new().with_title("settings");
        assert_eq!(panel.id(), panel.as_container().map(|c| c.id()).unwrap());
        assert_eq!(panel.title(), Some("settings"));
    }

    #[test]
    fn button_tracks_focus() {
        let b = Button::new("ok");
        assert!(!b.is_focused());
        b.on_enter_focus(FocusChange::Next);
        assert!(b.is_focused());
        b.on_leave_focus(FocusChange::Next);
        assert!(!b.is_focused());
        assert_eq!(b.label(), "ok");
    }

    #[test]
    fn scroll_view_is_always_scrollable() -> Result<()> {
        let view = ScrollView::new();
        assert!(view.is_scrollable());

        let panel = Panel::new();
        assert!(!Component::is_scrollable(&panel));
        let label: ComponentRef = Arc::new(Label::new("text"));
        panel.add_component(label)?;
        assert!(!Component::is_scrollable(&panel));
        panel.add_component(Arc::new(ScrollView::new()) as ComponentRef)?;
        assert!(Component::is_scrollable(&panel));
        Ok(())
    }
}
