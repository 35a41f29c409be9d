use super::constants::*;
use entrance_core::{Node, Target};

// Inline style text for each surface. Pure string building so it runs on the
// host in tests; `render.rs` owns the DOM writes.

#[inline]
fn display(node: &Node) -> &'static str {
    if node.displayed {
        "block"
    } else {
        "none"
    }
}

#[inline]
fn visibility(node: &Node) -> &'static str {
    if node.displayed {
        "visible"
    } else {
        "hidden"
    }
}

#[inline]
fn pointer_events(node: &Node) -> &'static str {
    if node.interactive {
        "auto"
    } else {
        "none"
    }
}

#[inline]
fn centered_transform(node: &Node) -> String {
    format!(
        "translate(-50%, -50%) translate({:.2}px, {:.2}px) scale({:.4})",
        node.offset.x, node.offset.y, node.scale
    )
}

/// Full inline style for `target` in state `node`.
pub fn node_style(target: Target, node: &Node) -> String {
    match target {
        Target::Container => format!(
            "position:fixed;top:0;left:0;width:100vw;height:100vh;display:{};opacity:{:.4};pointer-events:{}",
            display(node),
            node.opacity,
            pointer_events(node)
        ),
        Target::Left | Target::Right => format!(
            "position:absolute;left:50%;top:50%;transform:{};filter:blur({:.2}px);opacity:{:.4};pointer-events:{};touch-action:none",
            centered_transform(node),
            node.blur,
            node.opacity,
            pointer_events(node)
        ),
        Target::Affordance => format!(
            "position:fixed;left:50%;top:50%;z-index:{};transform:{};display:{};visibility:{};opacity:{:.4};pointer-events:{}",
            AFFORDANCE_Z_INDEX,
            centered_transform(node),
            display(node),
            visibility(node),
            node.opacity,
            pointer_events(node)
        ),
        Target::Message | Target::Content => format!(
            "display:{};visibility:{};opacity:{:.4};pointer-events:{}",
            display(node),
            visibility(node),
            node.opacity,
            pointer_events(node)
        ),
    }
}

/// Class toggled by a node's `active` flag, if the surface has one.
pub fn active_class(target: Target) -> Option<&'static str> {
    match target {
        Target::Affordance => Some(AFFORDANCE_ACTIVE_CLASS),
        Target::Content => Some(CONTENT_VISIBLE_CLASS),
        _ => None,
    }
}
