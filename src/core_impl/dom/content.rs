use super::*;

/// One pending step of the serializer.
enum Emit {
    Node(NodeId),
    EndTag(NodeId),
}

impl Dom {
    /// Concatenated text of `node_id` and its descendants, in document order.
    pub(crate) fn text_content(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        let mut pending = vec![node_id];
        while let Some(node) = pending.pop() {
            match &self.nodes[node.0].node_type {
                NodeType::Text(text) => out.push_str(text),
                NodeType::Document | NodeType::Element(_) => {
                    pending.extend(self.children(node).iter().rev());
                }
            }
        }
        out
    }

    /// Character data of a text node; `None` for any other kind of node.
    pub(crate) fn text_data(&self, node_id: NodeId) -> Option<&str> {
        match &self.nodes.get(node_id.0)?.node_type {
            NodeType::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Serializes `node_id` as HTML. Attributes are written in name order.
    pub(crate) fn dump_node(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        let mut pending = vec![Emit::Node(node_id)];
        while let Some(step) = pending.pop() {
            let node = match step {
                Emit::EndTag(node) => {
                    if let Some(tag) = self.tag_name(node) {
                        out.push_str(&format!("</{tag}>"));
                    }
                    continue;
                }
                Emit::Node(node) => node,
            };
            match &self.nodes[node.0].node_type {
                NodeType::Document => {
                    pending.extend(self.children(node).iter().rev().map(|c| Emit::Node(*c)));
                }
                NodeType::Text(text) => {
                    let raw = self.parent(node).is_some_and(|parent| {
                        self.is_tag(parent, "script") || self.is_tag(parent, "style")
                    });
                    if raw {
                        out.push_str(text);
                    } else {
                        push_escaped(&mut out, text, false);
                    }
                }
                NodeType::Element(element) => {
                    out.push('<');
                    out.push_str(&element.tag_name);
                    let mut names = element.attrs.keys().collect::<Vec<_>>();
                    names.sort();
                    for name in names {
                        out.push_str(&format!(" {name}=\""));
                        push_escaped(&mut out, &element.attrs[name], true);
                        out.push('"');
                    }
                    out.push('>');
                    if !is_void_tag(&element.tag_name) {
                        pending.push(Emit::EndTag(node));
                        pending.extend(self.children(node).iter().rev().map(|c| Emit::Node(*c)));
                    }
                }
            }
        }
        out
    }
}

fn push_escaped(out: &mut String, value: &str, in_attribute: bool) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
