use crate::Dom;

/// Tag name of the scrollable content element that gets shifted.
pub const SCROLL_CONTENT_TAG: &str = "ion-content";

/// Walks from `start` (inclusive) up through its ancestors and returns the first node for which
/// `pred` holds.
///
/// Stops at the document root and returns `None` if nothing matched.
pub fn find_ancestor<D: Dom>(
    dom: &D,
    start: D::Node,
    mut pred: impl FnMut(&D, D::Node) -> bool,
) -> Option<D::Node> {
    let mut cur = Some(start);
    while let Some(node) = cur {
        if pred(dom, node) {
            return Some(node);
        }
        cur = dom.parent(node);
    }
    None
}

/// Finds the nearest scrollable content container of `node`, starting at `node` itself.
pub fn find_scroll_container<D: Dom>(dom: &D, node: D::Node) -> Option<D::Node> {
    find_ancestor(dom, node, |dom, n| {
        dom.tag_name(n).eq_ignore_ascii_case(SCROLL_CONTENT_TAG)
    })
}
