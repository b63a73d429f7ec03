//! Component state and the capability traits that drive focus traversal.

use std::{
    any::type_name,
    mem,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{container::Container, id::NodeId, name::NodeName};

/// Shared handle to a component in the tree. Containers own their children
/// through these handles.
pub type ComponentRef = Arc<dyn Component>;

/// How focus moved onto or away from an interactable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusChange {
    /// Forward traversal (`next_focus`).
    Next,
    /// Backward traversal (`previous_focus`).
    Previous,
    /// Focus was set or cleared explicitly.
    Direct,
}

/// Identity and parent link carried by every component.
///
/// The parent is stored as a [`NodeId`], never as an owning handle: ownership
/// flows strictly from containers down to their children.
#[derive(Debug)]
pub struct NodeState {
    /// Unique identity of the owning component.
    id: NodeId,
    /// Container this component was most recently added to.
    parent: Mutex<Option<NodeId>>,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            id: NodeId::next(),
            parent: Mutex::new(None),
        }
    }
}

impl NodeState {
    /// Create state with a fresh identity and no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// This node's identity.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The container this node was last added to, if any.
    pub fn parent(&self) -> Option<NodeId> {
        *self.lock_parent()
    }

    /// Overwrite the parent link, returning the previous value.
    pub fn set_parent(&self, parent: Option<NodeId>) -> Option<NodeId> {
        let mut slot = self.lock_parent();
        mem::replace(&mut *slot, parent)
    }

    /// Clear the parent link only if it still names `parent`. Returns true if
    /// the link was cleared.
    pub(crate) fn clear_parent_if(&self, parent: NodeId) -> bool {
        let mut slot = self.lock_parent();
        if *slot == Some(parent) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Lock the parent slot. The slot is a plain `Option`, so a poisoned lock
    /// still holds a usable value.
    fn lock_parent(&self) -> MutexGuard<'_, Option<NodeId>> {
        self.parent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A unit in the widget tree.
///
/// Capabilities are exposed through the `as_*` queries rather than type
/// inspection: a component that can hold focus returns itself from
/// [`Component::as_interactable`], a composite returns its [`Container`] from
/// [`Component::as_container`], and so on.
pub trait Component: Send + Sync {
    /// Identity and parent link for this component.
    fn state(&self) -> &NodeState;

    /// Unique identity of this component.
    fn id(&self) -> NodeId {
        self.state().id()
    }

    /// The container this component was most recently added to.
    fn parent(&self) -> Option<NodeId> {
        self.state().parent()
    }

    /// Name used in logs and tree dumps.
    fn name(&self) -> NodeName {
        let name = type_name::<Self>();
        let short = name.rsplit("::").next().unwrap_or(name);
        NodeName::convert(short)
    }

    /// Does this component scroll its content?
    fn is_scrollable(&self) -> bool {
        false
    }

    /// View of this component as something that can hold focus.
    fn as_interactable(&self) -> Option<&dyn Interactable> {
        None
    }

    /// The child collection of this component, if it is a composite.
    fn as_container(&self) -> Option<&Container> {
        None
    }

    /// View of this component as a composite that takes part in focus
    /// traversal.
    fn as_interactable_container(&self) -> Option<&dyn InteractableContainer> {
        None
    }
}

/// A component that can hold input focus.
pub trait Interactable: Component {
    /// Focus arrived at this component.
    fn on_enter_focus(&self, _change: FocusChange) {}

    /// Focus left this component.
    fn on_leave_focus(&self, _change: FocusChange) {}
}

/// A composite that can search its descendants for focus targets.
pub trait InteractableContainer: Send + Sync {
    /// Is `target` a direct child, or in the subtree of a child that is itself
    /// an interactable container? This is reachability only, it says nothing
    /// about whether `target` accepts focus.
    fn has_interactable(&self, target: NodeId) -> bool;

    /// The interactable after `previous` in pre-order, or the first one if
    /// `previous` is `None`. `None` marks the end of this subtree.
    fn next_focus(&self, previous: Option<NodeId>) -> Option<ComponentRef>;

    /// Mirror of [`InteractableContainer::next_focus`] in reverse pre-order.
    fn previous_focus(&self, previous: Option<NodeId>) -> Option<ComponentRef>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        state: NodeState,
    }

    impl Component for Plain {
        fn state(&self) -> &NodeState {
            &self.state
        }
    }

    #[test]
    fn default_capabilities_are_absent() {
        let p = Plain {
            state: NodeState::new(),
        };
        assert!(!p.is_scrollable());
        assert!(p.as_interactable().is_none());
        assert!(p.as_container().is_none());
        assert!(p.as_interactable_container().is_none());
        assert_eq!(p.name(), "plain");
        assert_eq!(p.parent(), None);
    }

    #[test]
    fn parent_link_is_compare_and_clear() {
        let state = NodeState::new();
        let a = NodeId::next();
        let b = NodeId::next();
        assert_eq!(state.set_parent(Some(a)), None);
        assert_eq!(state.set_parent(Some(b)), Some(a));
        assert!(!state.clear_parent_if(a));
        assert_eq!(state.parent(), Some(b));
        assert!(state.clear_parent_if(b));
        assert_eq!(state.parent(), None);
    }
}
