use super::*;

mod decorate;
mod dom;
mod html;

pub(crate) use decorate::{
    CollapsibleListBuilder, SectionToggleBinder, TableStriper, TreeRenderer, apply_toggle,
    section_state,
};
#[cfg(test)]
pub(crate) use decorate::{has_class_attribute, marker_equals};
pub(crate) use html::parse_html;
