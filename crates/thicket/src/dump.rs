use std::io::Write;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{error::Result, id::NodeId, node::Component};

/// Traverses a component tree and returns a string showing names, ids and
/// capabilities for each node. This is a debug function.
pub fn dump(root: &dyn Component) -> Result<String> {
    dump_with_focus(root, None)
}

/// Like [`dump`], additionally marking the node that holds `focus`.
pub fn dump_with_focus(root: &dyn Component, focus: Option<NodeId>) -> Result<String> {
    let mut buffer = Buffer::ansi();
    dump_node(&mut buffer, root, 0, focus)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Walk a subtree and emit formatted debug output.
fn dump_node(
    buffer: &mut Buffer,
    node: &dyn Component,
    level: usize,
    focus: Option<NodeId>,
) -> Result<()> {
    let indent = "    ".repeat(level);
    write!(buffer, "{indent}")?;

    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(buffer, "{}{}", node.name(), node.id())?;
    buffer.reset()?;

    let mut indicators = Vec::new();
    if focus == Some(node.id()) {
        indicators.push(("FOCUSED", Color::Magenta));
    }
    if node.as_interactable().is_some() {
        indicators.push(("interactable", Color::Green));
    }
    if node.is_scrollable() {
        indicators.push(("scrollable", Color::Yellow));
    }
    for (i, (indicator, color)) in indicators.iter().enumerate() {
        write!(buffer, "{}", if i == 0 { " " } else { ", " })?;
        buffer.set_color(ColorSpec::new().set_fg(Some(*color)))?;
        write!(buffer, "{indicator}")?;
        buffer.reset()?;
    }
    writeln!(buffer)?;

    if let Some(container) = node.as_container() {
        for child in container.components() {
            dump_node(buffer, child.as_ref(), level + 1, focus)?;
        }
    }
    Ok(())
}
