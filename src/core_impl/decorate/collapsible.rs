use super::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CollapsibleSummary {
    pub(crate) lists: usize,
    pub(crate) items: usize,
    pub(crate) toggles: usize,
}

/// Turns marked lists into expandable trees: every item gets a leading icon,
/// and items with nested lists get a click handler for them.
pub(crate) struct CollapsibleListBuilder<'a> {
    icons: &'a IconSet,
    markers: &'a Markers,
}

impl<'a> CollapsibleListBuilder<'a> {
    pub(crate) fn new(icons: &'a IconSet, markers: &'a Markers) -> Self {
        Self { icons, markers }
    }

    pub(crate) fn run(
        &self,
        dom: &mut Dom,
        registry: &mut ToggleRegistry,
        trace: &mut TraceState,
    ) -> CollapsibleSummary {
        let mut summary = CollapsibleSummary::default();
        for list in dom.elements_by_tag_name(dom.root, "ul") {
            let Some(state) = self.initial_state(dom, list) else {
                continue;
            };
            if let Err(err) = dom.style_set(list, "list-style", "none") {
                trace.line(format!("[collapsible] skipped list: {err}"));
                continue;
            }

            let items = dom.child_elements(list);
            let mut toggles = 0usize;
            for item in &items {
                match self.build_item(dom, registry, *item, state) {
                    Ok(true) => toggles += 1,
                    Ok(false) => {}
                    Err(err) => trace.line(format!("[collapsible] skipped item: {err}")),
                }
            }
            trace.line(format!(
                "[collapsible] list items={} toggles={toggles} state={}",
                items.len(),
                state.as_str()
            ));
            summary.lists += 1;
            summary.items += items.len();
            summary.toggles += toggles;
        }
        summary
    }

    fn initial_state(&self, dom: &Dom, list: NodeId) -> Option<ToggleState> {
        if marker_equals(dom, list, &self.markers.list_opened) {
            Some(ToggleState::Opened)
        } else if marker_equals(dom, list, &self.markers.list_closed) {
            Some(ToggleState::Closed)
        } else {
            None
        }
    }

    /// Returns whether a toggle handler was registered for the item.
    fn build_item(
        &self,
        dom: &mut Dom,
        registry: &mut ToggleRegistry,
        item: NodeId,
        state: ToggleState,
    ) -> Result<bool> {
        let sub_lists = dom
            .child_elements(item)
            .into_iter()
            .filter(|child| dom.is_tag(*child, "ul") || dom.is_tag(*child, "ol"))
            .collect::<Vec<_>>();
        for sub_list in &sub_lists {
            dom.style_set(*sub_list, "display", state.display())?;
        }

        let icon = dom.create_detached_element("img");
        if sub_lists.is_empty() {
            dom.set_attr(icon, "src", &self.icons.url(Icon::NoChildren))?;
            dom.prepend_child(item, icon)?;
            return Ok(false);
        }

        dom.set_attr(icon, "class", state.icon_class())?;
        dom.set_attr(icon, "src", &self.icons.toggle_url(state))?;
        dom.prepend_child(item, icon)?;
        registry.register(ToggleHandler {
            trigger: icon,
            target: ToggleTarget::SubLists(sub_lists),
            state,
        });
        Ok(true)
    }
}
