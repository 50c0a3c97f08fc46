use super::*;

impl Dom {
    /// Matches right to left. Each ancestor compound binds to the nearest
    /// qualifying element; there is no backtracking.
    pub(crate) fn matches_selector(&self, node_id: NodeId, selector: &Selector) -> bool {
        if !self.matches_compound(node_id, &selector.subject) {
            return false;
        }
        let mut current = node_id;
        for (relation, compound) in &selector.ancestors {
            let next = match relation {
                Relation::Child => self
                    .parent(current)
                    .filter(|parent| self.matches_compound(*parent, compound)),
                Relation::Descendant => std::iter::successors(self.parent(current), |node| {
                    self.parent(*node)
                })
                .find(|ancestor| self.matches_compound(*ancestor, compound)),
            };
            match next {
                Some(node) => current = node,
                None => return false,
            }
        }
        true
    }

    fn matches_compound(&self, node_id: NodeId, compound: &Compound) -> bool {
        let Some(element) = self.element(node_id) else {
            return false;
        };
        if compound
            .tag
            .as_ref()
            .is_some_and(|tag| !element.tag_name.eq_ignore_ascii_case(tag))
        {
            return false;
        }
        if compound
            .id
            .as_ref()
            .is_some_and(|id| element.attrs.get("id") != Some(id))
        {
            return false;
        }
        if !compound.classes.iter().all(|name| element.has_class_token(name)) {
            return false;
        }
        let attrs_match = compound.attrs.iter().all(|filter| {
            match (element.attrs.get(&filter.name), &filter.value) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            }
        });
        if !attrs_match {
            return false;
        }
        !compound.first_child
            || self
                .parent(node_id)
                .and_then(|parent| self.first_element_child(parent))
                == Some(node_id)
    }
}
