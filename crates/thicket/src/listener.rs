//! Observers of structural change in a container.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use tracing::warn;

use crate::{
    container::Container,
    error::Result,
    node::{Component, ComponentRef},
};

/// Shared handle to a registered listener.
pub type ListenerRef = Arc<dyn ContainerListener>;

/// Receives a notification after each committed change to a container's
/// child sequence.
///
/// Notifications are delivered with no container lock held, in registration
/// order. Errors and panics are logged and dropped: they never undo the
/// mutation and never stop delivery to the remaining listeners.
pub trait ContainerListener: Send + Sync {
    /// `component` was appended to `container`.
    fn component_added(&self, _container: &Container, _component: &ComponentRef) -> Result<()> {
        Ok(())
    }

    /// `component` was removed from `container`.
    fn component_removed(&self, _container: &Container, _component: &ComponentRef) -> Result<()> {
        Ok(())
    }
}

/// Which structural change is being announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Change {
    /// A child was appended.
    Added,
    /// A child was removed.
    Removed,
}

/// Deliver `change` for `component` to every listener, isolating failures.
pub(crate) fn notify(
    listeners: &[ListenerRef],
    container: &Container,
    component: &ComponentRef,
    change: Change,
) {
    for listener in listeners {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match change {
            Change::Added => listener.component_added(container, component),
            Change::Removed => listener.component_removed(container, component),
        }));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(
                container = %container.id(),
                component = %component.id(),
                ?change,
                "container listener failed: {e}"
            ),
            Err(_) => warn!(
                container = %container.id(),
                component = %component.id(),
                ?change,
                "container listener panicked"
            ),
        }
    }
}
