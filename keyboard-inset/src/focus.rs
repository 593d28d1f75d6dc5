use crate::Dom;

/// `<input type=...>` values that bring up the on-screen keyboard.
pub const TEXT_INPUT_TYPES: &[&str] = &[
    "date",
    "datetime",
    "datetime-local",
    "email",
    "month",
    "number",
    "password",
    "search",
    "tel",
    "text",
    "time",
    "url",
    "week",
];

pub fn is_text_input_type(input_type: &str) -> bool {
    TEXT_INPUT_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(input_type))
}

/// Classifies a tag name plus `type` attribute.
///
/// A missing or empty `type` on an `input` is the HTML default, `text`.
pub fn is_keyboard_tag(tag_name: &str, input_type: Option<&str>) -> bool {
    if tag_name.eq_ignore_ascii_case("textarea") {
        return true;
    }
    if !tag_name.eq_ignore_ascii_case("input") {
        return false;
    }
    input_type.is_none_or(|t| t.is_empty() || is_text_input_type(t))
}

/// Returns `true` iff the platform would present a keyboard when `node` is focused.
pub fn is_keyboard_focusable<D: Dom>(dom: &D, node: D::Node) -> bool {
    is_keyboard_tag(dom.tag_name(node), dom.attribute(node, "type"))
}
