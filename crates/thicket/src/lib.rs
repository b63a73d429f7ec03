//! Thicket: containment and focus traversal for terminal widget trees.
//!
//! A tree is built from [`Component`]s. Composites own an ordered
//! [`Container`] of children, and components advertise what they can do
//! through capability queries rather than type inspection.
//!
//! # Quick Start
//!
//! - [`Container`] - ordered, lock-guarded child collection with
//!   [`InteractableContainer::next_focus`] and
//!   [`InteractableContainer::previous_focus`]
//! - [`Focus`] - tracks the focused interactable and handles wraparound
//! - [`widgets`] - stock labels, buttons, panels and scroll views
//!
//! ```
//! use std::sync::Arc;
//!
//! use thicket::{
//!     Component, ComponentRef, Container, InteractableContainer,
//!     widgets::{Button, Label},
//! };
//!
//! let root = Container::new();
//! let ok: ComponentRef = Arc::new(Button::new("ok"));
//! root.add_component(Arc::new(Label::new("Save?")) as ComponentRef)?;
//! root.add_component(ok.clone())?;
//!
//! assert_eq!(root.next_focus(None).map(|c| c.id()), Some(ok.id()));
//! assert!(root.next_focus(Some(ok.id())).is_none());
//! # Ok::<(), thicket::error::Error>(())
//! ```

#![warn(missing_docs)]

/// Child collections and focus traversal.
pub mod container;
/// Debug dumps of component trees.
pub mod dump;
/// Error types.
pub mod error;
/// Focus tracking.
pub mod focus;
/// Node identity.
pub mod id;
/// Component names.
pub mod name;
/// Structural change listeners.
pub mod listener;
/// Component state and capability traits.
pub mod node;
/// Stock widgets.
pub mod widgets;

pub use container::Container;
pub use error::{Error, Result};
pub use focus::{Focus, FocusConfig};
pub use id::NodeId;
pub use listener::{ContainerListener, ListenerRef};
pub use node::{
    Component, ComponentRef, FocusChange, Interactable, InteractableContainer, NodeState,
};
pub use name::NodeName;
