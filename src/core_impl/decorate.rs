use super::*;

mod class_attr;
mod collapsible;
mod section_toggle;
mod table_striper;
mod toggle;
mod tree_renderer;

pub(crate) use class_attr::{has_class_attribute, marker_equals};
pub(crate) use collapsible::CollapsibleListBuilder;
pub(crate) use section_toggle::{SectionToggleBinder, section_state};
pub(crate) use table_striper::TableStriper;
pub(crate) use toggle::apply_toggle;
pub(crate) use tree_renderer::TreeRenderer;

/// `table` elements whose class marks them as result tables, in document order.
fn result_tables(dom: &Dom, markers: &Markers) -> Vec<NodeId> {
    dom.elements_by_tag_name(dom.root, "table")
        .into_iter()
        .filter(|table| marker_equals(dom, *table, &markers.result_table))
        .collect()
}
