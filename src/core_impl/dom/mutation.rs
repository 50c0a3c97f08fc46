use super::*;

impl Dom {
    pub(crate) fn attr(&self, node_id: NodeId, name: &str) -> Option<String> {
        let element = self.element(node_id)?;
        element.attrs.get(&name.to_ascii_lowercase()).cloned()
    }

    pub(crate) fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let name = name.to_ascii_lowercase();
        let Some(element) = self.element_mut(node_id) else {
            return Err(Error::Dom(format!("cannot set {name} on a non-element")));
        };
        let renames = name == "id";
        element.attrs.insert(name, value.to_string());
        if renames {
            self.rebuild_id_index();
        }
        Ok(())
    }

    pub(crate) fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let first = self.first_child(parent);
        self.attach(parent, child, first, "prepend")
    }

    pub(crate) fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: NodeId,
    ) -> Result<()> {
        if self.parent(reference) != Some(parent) {
            return Err(Error::Dom("insert reference is not a child of the parent".into()));
        }
        self.attach(parent, child, Some(reference), "insert")
    }

    pub(crate) fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.parent(child) != Some(parent) {
            return Err(Error::Dom("node to remove is not a child of the parent".into()));
        }
        self.detach(child);
        if self.element(child).is_some() {
            self.rebuild_id_index();
        }
        Ok(())
    }

    /// Moves `child` under `parent`, before `before` or at the end.
    fn attach(
        &mut self,
        parent: NodeId,
        child: NodeId,
        before: Option<NodeId>,
        op: &str,
    ) -> Result<()> {
        if parent != self.root && self.element(parent).is_none() {
            return Err(Error::Dom(format!("{op} target cannot have children")));
        }
        if child == self.root || child.0 >= self.nodes.len() {
            return Err(Error::Dom(format!("invalid {op} node")));
        }
        if self.ancestors_inclusive(parent).contains(&child) {
            return Err(Error::Dom(format!("{op} would create a cycle")));
        }
        if before == Some(child) {
            return Ok(());
        }

        self.detach(child);
        let siblings = &mut self.nodes[parent.0].children;
        let index = match before {
            Some(reference) => siblings
                .iter()
                .position(|sibling| *sibling == reference)
                .ok_or_else(|| Error::Dom(format!("{op} reference is missing")))?,
            None => siblings.len(),
        };
        siblings.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|sibling| *sibling != child);
        }
    }
}
