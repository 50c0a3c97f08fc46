use super::*;

impl Dom {
    /// Element descendants of `root` in document order, `root` excluded.
    pub(crate) fn descendant_elements(&self, root: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut pending: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(node) = pending.pop() {
            if self.element(node).is_some() {
                found.push(node);
            }
            pending.extend(self.children(node).iter().rev());
        }
        found
    }

    /// Descendants of `root` with the given tag, in document order.
    pub(crate) fn elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        let mut all = self.descendant_elements(root);
        all.retain(|node| self.is_tag(*node, tag));
        all
    }

    pub(crate) fn child_elements(&self, node_id: NodeId) -> Vec<NodeId> {
        self.children(node_id)
            .iter()
            .copied()
            .filter(|child| self.element(*child).is_some())
            .collect()
    }

    pub(crate) fn first_child(&self, node_id: NodeId) -> Option<NodeId> {
        self.children(node_id).first().copied()
    }

    pub(crate) fn first_element_child(&self, node_id: NodeId) -> Option<NodeId> {
        self.children(node_id)
            .iter()
            .copied()
            .find(|child| self.element(*child).is_some())
    }

    pub(crate) fn ancestors_inclusive(&self, node_id: NodeId) -> Vec<NodeId> {
        std::iter::successors(Some(node_id), |node| self.parent(*node)).collect()
    }

    pub(crate) fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    pub(crate) fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let parsed = Selector::parse(selector)?;
        if let Some(id) = parsed.id_only() {
            return Ok(self.id_index.get(id).cloned().unwrap_or_default());
        }
        Ok(self.select_within(self.root, &parsed))
    }

    pub(crate) fn query_selector_all_from(
        &self,
        root: NodeId,
        selector: &str,
    ) -> Result<Vec<NodeId>> {
        let parsed = Selector::parse(selector)?;
        Ok(self.select_within(root, &parsed))
    }

    fn select_within(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut matched = self.descendant_elements(root);
        matched.retain(|node| self.matches_selector(*node, selector));
        matched
    }
}
