use super::*;

/// True when the element carries a `class` attribute with a non-empty value.
/// Non-elements never do.
pub(crate) fn has_class_attribute(dom: &Dom, node_id: NodeId) -> bool {
    class_value(dom, node_id).is_some_and(|value| !value.is_empty())
}

/// Compares the whole class value, so `result wide` is not a `result` marker.
pub(crate) fn marker_equals(dom: &Dom, node_id: NodeId, marker: &str) -> bool {
    class_value(dom, node_id) == Some(marker)
}

fn class_value(dom: &Dom, node_id: NodeId) -> Option<&str> {
    dom.element(node_id)
        .and_then(|element| element.attrs.get("class"))
        .map(String::as_str)
}
