//! Demonstration trees built with thicket.

/// Focus gym demo tree.
pub mod focusgym;

#[cfg(test)]
mod tests;
