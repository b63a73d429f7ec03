use std::sync::Arc;

use thicket::{
    Component, ComponentRef, Container, ContainerListener, Focus, FocusConfig, NodeId, Result,
    dump,
    widgets::{Button, Label, Panel, ScrollView},
};
use tracing::info;

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward, pre-order.
    Next,
    /// Backward, reverse pre-order.
    Prev,
}

/// Logs structural changes to the containers it is attached to.
#[derive(Debug, Default)]
pub struct ChangeLog;

impl ContainerListener for ChangeLog {
    fn component_added(&self, container: &Container, component: &ComponentRef) -> Result<()> {
        info!(container = %container.id(), child = %component.id(), name = %component.name(), "added");
        Ok(())
    }

    fn component_removed(&self, container: &Container, component: &ComponentRef) -> Result<()> {
        info!(container = %container.id(), child = %component.id(), name = %component.name(), "removed");
        Ok(())
    }
}

/// A small settings dialog with buttons spread over nested panels and a
/// scroll view:
///
/// ```text
/// dialog
///     label "Focus gym"
///     form: label, button "edit name", label, button "edit email"
///     scroll_view: label, button "clear log"
///     actions: button "ok", button "cancel"
/// ```
pub struct FocusGym {
    /// Root of the tree.
    root: Arc<Panel>,
    /// The panel holding the dialog actions.
    actions: Arc<Panel>,
    /// Every button in the tree, for caption lookup.
    buttons: Vec<Arc<Button>>,
    /// Current focus.
    focus: Focus,
}

impl FocusGym {
    /// Build the demo tree.
    pub fn new(config: FocusConfig) -> Result<Self> {
        let root = Arc::new(Panel::new().with_title("dialog"));
        root.add_container_listener(Arc::new(ChangeLog) as Arc<dyn ContainerListener>);

        let mut buttons = Vec::new();
        let mut button = |caption: &str| {
            let b = Arc::new(Button::new(caption));
            buttons.push(b.clone());
            b as ComponentRef
        };

        let form = Arc::new(Panel::new().with_title("form"));
        form.add_components([
            Arc::new(Label::new("Name")) as ComponentRef,
            button("edit name"),
            Arc::new(Label::new("Email")),
            button("edit email"),
        ])?;

        let log = Arc::new(ScrollView::new());
        log.add_components([
            Arc::new(Label::new("no entries")) as ComponentRef,
            button("clear log"),
        ])?;

        let actions = Arc::new(Panel::new().with_title("actions"));
        actions.add_container_listener(Arc::new(ChangeLog) as Arc<dyn ContainerListener>);
        actions.add_components([button("ok"), button("cancel")])?;

        root.add_components([
            Arc::new(Label::new("Focus gym")) as ComponentRef,
            form,
            log,
            actions.clone(),
        ])?;

        Ok(Self {
            root,
            actions,
            buttons,
            focus: Focus::with_config(config),
        })
    }

    /// The root panel.
    pub fn root(&self) -> &Arc<Panel> {
        &self.root
    }

    /// The focus tracker.
    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Caption of the button with the given id.
    pub fn caption(&self, id: NodeId) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| b.id() == id)
            .map(|b| b.label())
    }

    /// Caption of the focused button.
    pub fn focused_caption(&self) -> Option<&str> {
        self.focus.current_id().and_then(|id| self.caption(id))
    }

    /// Move focus one step. Returns the caption of the new target, or `None`
    /// if focus did not move.
    pub fn step(&mut self, direction: Direction) -> Option<&str> {
        let root: &Container = &self.root;
        let moved = match direction {
            Direction::Next => self.focus.focus_next(root),
            Direction::Prev => self.focus.focus_prev(root),
        };
        if moved { self.focused_caption() } else { None }
    }

    /// Append a button to the actions panel.
    pub fn add_action(&mut self, caption: &str) -> Result<NodeId> {
        let b = Arc::new(Button::new(caption));
        self.actions.add_component(b.clone() as ComponentRef)?;
        let id = b.id();
        self.buttons.push(b);
        Ok(id)
    }

    /// Remove a button from the actions panel, dropping focus if it held it.
    pub fn remove_action(&mut self, id: NodeId) -> bool {
        if self.actions.remove_component(id).is_none() {
            return false;
        }
        self.buttons.retain(|b| b.id() != id);
        let root: &Container = &self.root;
        self.focus.ensure_valid(root);
        true
    }

    /// Render the tree with the focused node marked.
    pub fn dump(&self) -> Result<String> {
        dump::dump_with_focus(&*self.root, self.focus.current_id())
    }
}
