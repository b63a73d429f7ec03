//! Ordered child collections and pre-order focus traversal.

use std::{
    fmt, ptr,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::{debug, trace, warn};

use crate::{
    error::{Error, Result},
    id::NodeId,
    listener::{self, Change, ListenerRef},
    node::{Component, ComponentRef, InteractableContainer, NodeState},
    name::NodeName,
};

/// Direction of a focus search through the child sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    /// Children left to right.
    Forward,
    /// Children right to left.
    Reverse,
}

impl Order {
    /// Continue the search inside a child container.
    fn enter(
        self,
        child: &dyn InteractableContainer,
        previous: Option<NodeId>,
    ) -> Option<ComponentRef> {
        match self {
            Self::Forward => child.next_focus(previous),
            Self::Reverse => child.previous_focus(previous),
        }
    }
}

/// An ordered collection of child components.
///
/// Insertion order is traversal order, and duplicates are not rejected. Each
/// container guards its child sequence with its own lock, held only for the
/// duration of a single mutation or lookup. Traversals and aggregations work
/// on a snapshot taken under that lock, so a concurrent mutation is seen
/// either entirely or not at all at each level, and listeners or nested
/// traversals never run while the lock is held.
pub struct Container {
    /// Identity and parent link.
    state: NodeState,
    /// Direct children in insertion order.
    children: Mutex<Vec<ComponentRef>>,
    /// Structural change observers, guarded separately from the children.
    listeners: Mutex<Vec<ListenerRef>>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            state: NodeState::new(),
            children: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.state.id())
            .field("children", &self.component_count())
            .finish_non_exhaustive()
    }
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `component` to the end of the child sequence and point its
    /// parent link at this container.
    ///
    /// `None` is accepted and ignored. A previous parent link is overwritten
    /// without detaching the component from that parent; callers moving a
    /// component should remove it from its old container first. Fails with
    /// [`Error::WouldCreateCycle`] if the component is this container or
    /// already contains it.
    ///
    /// The cycle check and the append take the lock separately, so two
    /// threads attaching two containers under each other at the same time can
    /// both pass the check. Concurrent callers building nested structure must
    /// serialize those adds themselves.
    pub fn add_component(&self, component: impl Into<Option<ComponentRef>>) -> Result<()> {
        let Some(component) = component.into() else {
            return Ok(());
        };
        let parent = self.id();
        let child = component.id();
        if child == parent
            || component
                .as_container()
                .is_some_and(|c| c.contains(parent))
        {
            return Err(Error::WouldCreateCycle { parent, child });
        }

        self.lock_children().push(Arc::clone(&component));

        if let Some(old) = component.state().set_parent(Some(parent))
            && old != parent
        {
            warn!(%child, %old, new = %parent, "component re-parented without removal");
        }
        debug!(container = %parent, %child, name = %component.name(), "component added");
        listener::notify(&self.listeners(), self, &component, Change::Added);
        Ok(())
    }

    /// Append every component from `components` in order.
    pub fn add_components<I>(&self, components: I) -> Result<()>
    where
        I: IntoIterator<Item = ComponentRef>,
    {
        for component in components {
            self.add_component(component)?;
        }
        Ok(())
    }

    /// The child at `index`.
    pub fn component_at(&self, index: usize) -> Result<ComponentRef> {
        let children = self.lock_children();
        children.get(index).cloned().ok_or(Error::InvalidIndex {
            index,
            count: children.len(),
        })
    }

    /// Number of direct children.
    pub fn component_count(&self) -> usize {
        self.lock_children().len()
    }

    /// Remove the first child whose identity is `component`.
    ///
    /// `None` and ids that are not direct children are ignored. Returns the
    /// removed component.
    pub fn remove_component(&self, component: impl Into<Option<NodeId>>) -> Option<ComponentRef> {
        let id = component.into()?;
        let removed = {
            let mut children = self.lock_children();
            let index = children.iter().position(|c| c.id() == id)?;
            children.remove(index)
        };
        self.detached(&removed);
        Some(removed)
    }

    /// Remove every child, one at a time from the front. Each removal is
    /// committed and announced before the next child is taken, so listeners
    /// see the sequence shrink in the original order.
    pub fn remove_all_components(&self) {
        loop {
            let removed = {
                let mut children = self.lock_children();
                if children.is_empty() {
                    break;
                }
                children.remove(0)
            };
            self.detached(&removed);
        }
    }

    /// A snapshot of the direct children.
    pub fn components(&self) -> Vec<ComponentRef> {
        self.lock_children().clone()
    }

    /// True if any direct child is scrollable. Composite children aggregate
    /// their own descendants, so this covers the whole subtree.
    pub fn is_scrollable(&self) -> bool {
        self.components().iter().any(|c| c.is_scrollable())
    }

    /// Register a listener. `None` is ignored and duplicates are kept.
    pub fn add_container_listener(&self, listener: impl Into<Option<ListenerRef>>) {
        if let Some(listener) = listener.into() {
            self.lock_listeners().push(listener);
        }
    }

    /// Unregister the first registration of `listener`. `None` is ignored.
    pub fn remove_container_listener(&self, listener: impl Into<Option<ListenerRef>>) {
        let Some(listener) = listener.into() else {
            return;
        };
        let mut listeners = self.lock_listeners();
        if let Some(index) = listeners
            .iter()
            .position(|l| ptr::addr_eq(Arc::as_ptr(l), Arc::as_ptr(&listener)))
        {
            listeners.remove(index);
        }
    }

    /// Is `target` anywhere below this container, through any composite?
    pub fn contains(&self, target: NodeId) -> bool {
        self.components().iter().any(|child| {
            child.id() == target || child.as_container().is_some_and(|c| c.contains(target))
        })
    }

    /// Resolve `target` to a component handle if it lies below this container.
    pub fn find(&self, target: NodeId) -> Option<ComponentRef> {
        for child in self.components() {
            if child.id() == target {
                return Some(child);
            }
            if let Some(found) = child.as_container().and_then(|c| c.find(target)) {
                return Some(found);
            }
        }
        None
    }

    /// Every interactable reachable by focus traversal, in the order
    /// [`InteractableContainer::next_focus`] visits them.
    ///
    /// An interactable that is also a composite is listed, but its
    /// descendants are not: traversal lands on the composite itself.
    pub fn focus_order(&self) -> Vec<ComponentRef> {
        let mut out = Vec::new();
        self.collect_focus_order(&mut out);
        out
    }

    /// Append this container's contribution to [`Container::focus_order`].
    fn collect_focus_order(&self, out: &mut Vec<ComponentRef>) {
        for child in self.components() {
            if child.as_interactable().is_some() {
                out.push(child);
            } else if child.as_interactable_container().is_some()
                && let Some(c) = child.as_container()
            {
                c.collect_focus_order(out);
            }
        }
    }

    /// Clean up after `component` has left the child sequence.
    fn detached(&self, component: &ComponentRef) {
        component.state().clear_parent_if(self.id());
        debug!(container = %self.id(), child = %component.id(), "component removed");
        listener::notify(&self.listeners(), self, component, Change::Removed);
    }

    /// A snapshot of the registered listeners.
    fn listeners(&self) -> Vec<ListenerRef> {
        self.lock_listeners().clone()
    }

    /// Lock the child sequence. Every mutation leaves the `Vec` valid, so a
    /// poisoned lock is still safe to use.
    fn lock_children(&self) -> MutexGuard<'_, Vec<ComponentRef>> {
        self.children.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the listener list.
    fn lock_listeners(&self) -> MutexGuard<'_, Vec<ListenerRef>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Find the interactable that follows `previous` when walking the
    /// children in `order`.
    ///
    /// `pending` is the node we still have to pass. While it is set we only
    /// look for it, either as a direct child or inside a child container;
    /// once it is cleared the next interactable found is the answer.
    fn seek(&self, previous: Option<NodeId>, order: Order) -> Option<ComponentRef> {
        trace!(container = %self.id(), ?previous, ?order, "focus search");
        let mut children = self.components();
        if order == Order::Reverse {
            children.reverse();
        }

        let mut pending = previous;
        for child in children {
            let Some(target) = pending else {
                if child.as_interactable().is_some() {
                    return Some(child);
                }
                if let Some(found) = child
                    .as_interactable_container()
                    .and_then(|ic| order.enter(ic, None))
                {
                    return Some(found);
                }
                continue;
            };

            if child.id() == target {
                pending = None;
                continue;
            }

            if let Some(ic) = child.as_interactable_container()
                && ic.has_interactable(target)
            {
                match order.enter(ic, Some(target)) {
                    Some(found) => return Some(found),
                    // `target` was the last interactable in that subtree.
                    None => pending = None,
                }
            }
        }
        None
    }
}

impl InteractableContainer for Container {
    fn has_interactable(&self, target: NodeId) -> bool {
        self.components().iter().any(|child| {
            child.id() == target
                || child
                    .as_interactable_container()
                    .is_some_and(|ic| ic.has_interactable(target))
        })
    }

    fn next_focus(&self, previous: Option<NodeId>) -> Option<ComponentRef> {
        self.seek(previous, Order::Forward)
    }

    fn previous_focus(&self, previous: Option<NodeId>) -> Option<ComponentRef> {
        self.seek(previous, Order::Reverse)
    }
}

impl Component for Container {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn name(&self) -> NodeName {
        NodeName::convert("container")
    }

    fn is_scrollable(&self) -> bool {
        Self::is_scrollable(self)
    }

    fn as_container(&self) -> Option<&Container> {
        Some(self)
    }

    fn as_interactable_container(&self) -> Option<&dyn InteractableContainer> {
        Some(self)
    }
}
