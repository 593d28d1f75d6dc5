use core::fmt;

use crate::{Bounds, Selection};

/// Read-only view of the host document.
///
/// Nodes are identities only: the engine compares and stores them but never owns what they
/// point at. Geometry is reported as displayed, i.e. including any transform applied to the
/// node or its ancestors and any ancestor scroll position.
pub trait Dom {
    type Node: Copy + Eq + fmt::Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// The element's tag name. Any case is accepted (`INPUT`, `input`).
    fn tag_name(&self, node: Self::Node) -> &str;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    fn bounding_rect(&self, node: Self::Node) -> Bounds;

    /// Height of the webview, i.e. where the keyboard's bottom edge sits.
    fn viewport_height(&self) -> f64;

    fn active_element(&self) -> Option<Self::Node>;

    fn scroll_top(&self, node: Self::Node) -> f64;

    /// Current selection of a text control, if the node has one.
    fn selection_range(&self, node: Self::Node) -> Option<Selection>;
}
