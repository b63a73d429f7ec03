//! Focus tracking on top of container traversal.
//!
//! Containers only answer "what comes after this node"; [`Focus`] owns the
//! current target, decides whether to wrap at the ends of the tree, and runs
//! the enter/leave hooks on the interactables involved.

use tracing::debug;

use crate::{
    error::{Error, Result},
    id::NodeId,
    node::{ComponentRef, FocusChange, InteractableContainer},
};

/// Options for [`Focus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusConfig {
    /// Restart from the other end of the tree when traversal runs out.
    pub wrap: bool,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self { wrap: true }
    }
}

impl FocusConfig {
    /// Default configuration: wrapping enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable wrapping.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// The currently focused interactable, if any.
#[derive(Default)]
pub struct Focus {
    /// Behaviour options.
    config: FocusConfig,
    /// Current focus target.
    current: Option<ComponentRef>,
}

impl Focus {
    /// Create an empty focus tracker with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty focus tracker.
    pub fn with_config(config: FocusConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Active options.
    pub fn config(&self) -> FocusConfig {
        self.config
    }

    /// The focused component.
    pub fn current(&self) -> Option<&ComponentRef> {
        self.current.as_ref()
    }

    /// Identity of the focused component.
    pub fn current_id(&self) -> Option<NodeId> {
        self.current.as_ref().map(|c| c.id())
    }

    /// Does `id` hold focus?
    pub fn is_focused(&self, id: NodeId) -> bool {
        self.current_id() == Some(id)
    }

    /// Focus `component` directly. Only interactables are accepted. Returns
    /// `true` if focus changed.
    pub fn set_focus(&mut self, component: ComponentRef) -> Result<bool> {
        if component.as_interactable().is_none() {
            return Err(Error::Focus(format!(
                "{}{} does not accept focus",
                component.name(),
                component.id()
            )));
        }
        Ok(self.apply(Some(component), FocusChange::Direct))
    }

    /// Drop focus. Returns `true` if something was focused.
    pub fn clear(&mut self) -> bool {
        self.apply(None, FocusChange::Direct)
    }

    /// Move to the next interactable under `root`. Returns `true` if focus
    /// changed; at the end of the tree focus stays put unless wrapping is on.
    pub fn focus_next(&mut self, root: &dyn InteractableContainer) -> bool {
        let current = self.current_id();
        let target = root
            .next_focus(current)
            .or_else(|| self.wrap_from(current, || root.next_focus(None)));
        match target {
            Some(target) => self.apply(Some(target), FocusChange::Next),
            None => false,
        }
    }

    /// Move to the previous interactable under `root`. Mirror of
    /// [`Focus::focus_next`].
    pub fn focus_prev(&mut self, root: &dyn InteractableContainer) -> bool {
        let current = self.current_id();
        let target = root
            .previous_focus(current)
            .or_else(|| self.wrap_from(current, || root.previous_focus(None)));
        match target {
            Some(target) => self.apply(Some(target), FocusChange::Previous),
            None => false,
        }
    }

    /// Drop focus if the focused node is no longer reachable from `root`.
    /// Returns `true` if focus was dropped.
    pub fn ensure_valid(&mut self, root: &dyn InteractableContainer) -> bool {
        match self.current_id() {
            Some(id) if !root.has_interactable(id) => {
                debug!(focus = %id, "focused node left the tree");
                self.clear()
            }
            _ => false,
        }
    }

    /// Restart from the far end, if wrapping applies. A tracker with nothing
    /// focused has already started from the end, so there is nothing to redo.
    fn wrap_from(
        &self,
        current: Option<NodeId>,
        restart: impl FnOnce() -> Option<ComponentRef>,
    ) -> Option<ComponentRef> {
        if self.config.wrap && current.is_some() {
            restart()
        } else {
            None
        }
    }

    /// Swap the focus target, running leave/enter hooks. Returns `true` if
    /// the target changed.
    fn apply(&mut self, target: Option<ComponentRef>, change: FocusChange) -> bool {
        let target_id = target.as_ref().map(|c| c.id());
        if target_id == self.current_id() {
            return false;
        }
        if let Some(old) = self.current.take()
            && let Some(i) = old.as_interactable()
        {
            i.on_leave_focus(change);
        }
        if let Some(i) = target.as_ref().and_then(|c| c.as_interactable()) {
            i.on_enter_focus(change);
        }
        debug!(focus = ?target_id, ?change, "focus changed");
        self.current = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        container::Container,
        node::Component,
        widgets::{Button, Label, Panel},
    };

    struct Tree {
        root: Container,
        a: Arc<Button>,
        b: Arc<Button>,
        c: Arc<Button>,
    }

    // root[ label, a, panel[ b ], c ]
    fn tree() -> Result<Tree> {
        let root = Container::new();
        let a = Arc::new(Button::new("a"));
        let b = Arc::new(Button::new("b"));
        let c = Arc::new(Button::new("c"));
        let panel = Arc::new(Panel::new());
        panel.add_component(b.clone() as ComponentRef)?;
        root.add_components([
            Arc::new(Label::new("title")) as ComponentRef,
            a.clone(),
            panel,
            c.clone(),
        ])?;
        Ok(Tree { root, a, b, c })
    }

    #[test]
    fn next_walks_and_wraps() -> Result<()> {
        let t = tree()?;
        let mut f = Focus::new();
        assert!(f.focus_next(&t.root));
        assert!(f.is_focused(t.a.id()));
        assert!(t.a.is_focused());

        assert!(f.focus_next(&t.root));
        assert!(f.is_focused(t.b.id()));
        assert!(!t.a.is_focused());
        assert!(t.b.is_focused());

        assert!(f.focus_next(&t.root));
        assert!(f.is_focused(t.c.id()));
        assert!(f.focus_next(&t.root));
        assert!(f.is_focused(t.a.id()));
        assert!(!t.c.is_focused());
        Ok(())
    }

    #[test]
    fn prev_walks_and_wraps() -> Result<()> {
        let t = tree()?;
        let mut f = Focus::new();
        assert!(f.focus_prev(&t.root));
        assert!(f.is_focused(t.c.id()));
        assert!(f.focus_prev(&t.root));
        assert!(f.is_focused(t.b.id()));
        assert!(f.focus_prev(&t.root));
        assert!(f.is_focused(t.a.id()));
        assert!(f.focus_prev(&t.root));
        assert!(f.is_focused(t.c.id()));
        Ok(())
    }

    #[test]
    fn no_wrap_stops_at_the_edge() -> Result<()> {
        let t = tree()?;
        let mut f = Focus::with_config(FocusConfig::new().wrap(false));
        assert!(f.set_focus(t.c.clone())?);
        assert!(!f.focus_next(&t.root));
        assert!(f.is_focused(t.c.id()));
        assert!(t.c.is_focused());
        Ok(())
    }

    #[test]
    fn single_target_wraps_to_itself_without_change() -> Result<()> {
        let root = Container::new();
        let only = Arc::new(Button::new("only"));
        root.add_component(only.clone() as ComponentRef)?;
        let mut f = Focus::new();
        assert!(f.focus_next(&root));
        assert!(!f.focus_next(&root));
        assert!(f.is_focused(only.id()));
        assert!(only.is_focused());
        Ok(())
    }

    #[test]
    fn empty_tree_keeps_nothing_focused() {
        let root = Container::new();
        let mut f = Focus::new();
        assert!(!f.focus_next(&root));
        assert!(!f.focus_prev(&root));
        assert!(f.current().is_none());
    }

    #[test]
    fn set_focus_rejects_non_interactables() {
        let mut f = Focus::new();
        let label: ComponentRef = Arc::new(Label::new("nope"));
        assert!(matches!(f.set_focus(label), Err(Error::Focus(_))));
        assert!(f.current().is_none());
    }

    #[test]
    fn ensure_valid_drops_detached_focus() -> Result<()> {
        let t = tree()?;
        let mut f = Focus::new();
        f.set_focus(t.a.clone())?;
        assert!(!f.ensure_valid(&t.root));

        t.root.remove_component(t.a.id());
        assert!(f.ensure_valid(&t.root));
        assert!(f.current().is_none());
        assert!(!t.a.is_focused());
        Ok(())
    }

    #[test]
    fn focus_outside_tree_restarts() -> Result<()> {
        let t = tree()?;
        let stray = Arc::new(Button::new("stray"));
        let mut f = Focus::new();
        f.set_focus(stray.clone())?;
        assert!(f.focus_next(&t.root));
        assert!(f.is_focused(t.a.id()));
        assert!(!stray.is_focused());
        Ok(())
    }
}
