use super::*;

impl Node {
    fn unattached(node_type: NodeType) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            node_type,
        }
    }
}

impl Dom {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::unattached(NodeType::Document)],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    /// Adds a node to the arena, as the last child of `parent` if given.
    fn alloc(&mut self, parent: Option<NodeId>, node_type: NodeType) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        let mut node = Node::unattached(node_type);
        node.parent = parent;
        self.nodes.push(node);
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(node_id);
        }
        node_id
    }

    /// Appends a new element under `parent` and indexes its id.
    pub(crate) fn create_element(
        &mut self,
        parent: NodeId,
        tag_name: String,
        attrs: HashMap<String, String>,
    ) -> NodeId {
        let id = attrs.get("id").filter(|id| !id.is_empty()).cloned();
        let node_id = self.alloc(Some(parent), NodeType::Element(Element { tag_name, attrs }));
        if let Some(id) = id {
            self.id_index.entry(id).or_default().push(node_id);
        }
        node_id
    }

    /// An element outside the tree, ready to be inserted.
    pub(crate) fn create_detached_element(&mut self, tag_name: &str) -> NodeId {
        let element = Element {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: HashMap::new(),
        };
        self.alloc(None, NodeType::Element(element))
    }

    pub(crate) fn create_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.alloc(Some(parent), NodeType::Text(text))
    }

    pub(crate) fn element(&self, node_id: NodeId) -> Option<&Element> {
        if let NodeType::Element(element) = &self.nodes.get(node_id.0)?.node_type {
            Some(element)
        } else {
            None
        }
    }

    pub(crate) fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        if let NodeType::Element(element) = &mut self.nodes.get_mut(node_id.0)?.node_type {
            Some(element)
        } else {
            None
        }
    }

    pub(crate) fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id)
            .map(|element| element.tag_name.as_str())
    }

    pub(crate) fn is_tag(&self, node_id: NodeId, tag: &str) -> bool {
        self.tag_name(node_id)
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    pub(crate) fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(node_id.0).and_then(|node| node.parent)
    }

    pub(crate) fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(node_id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// First element in document order carrying `id`.
    pub(crate) fn by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id)?.first().copied()
    }

    pub(crate) fn rebuild_id_index(&mut self) {
        let mut index: HashMap<String, Vec<NodeId>> = HashMap::new();
        for node_id in self.descendant_elements(self.root) {
            let id = self
                .element(node_id)
                .and_then(|element| element.attrs.get("id"))
                .filter(|id| !id.is_empty());
            if let Some(id) = id {
                index.entry(id.clone()).or_default().push(node_id);
            }
        }
        self.id_index = index;
    }
}
