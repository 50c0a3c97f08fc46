use super::*;

/// Makes the DOM reflect `handler.state`. The caller flips the state first.
pub(crate) fn apply_toggle(
    dom: &mut Dom,
    icons: &IconSet,
    handler: &ToggleHandler,
) -> Result<()> {
    let state = handler.state;
    match &handler.target {
        ToggleTarget::SubLists(sub_lists) => {
            dom.set_attr(handler.trigger, "class", state.icon_class())?;
            dom.set_attr(handler.trigger, "src", &icons.toggle_url(state))?;
            for sub_list in sub_lists {
                dom.style_set(*sub_list, "display", state.display())?;
            }
        }
        ToggleTarget::Section(section) => {
            dom.style_set(*section, "display", state.display())?;
            if let Some(image) = dom
                .first_element_child(handler.trigger)
                .filter(|child| dom.is_tag(*child, "img"))
            {
                dom.set_attr(image, "src", &icons.toggle_url(state))?;
            }
        }
    }
    Ok(())
}
