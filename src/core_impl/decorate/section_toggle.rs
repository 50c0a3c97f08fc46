use super::*;
use fancy_regex::Regex;
use std::sync::LazyLock;

/// `hide(this, '<id>')` with either quote style; `\1` pairs the quotes.
static HIDE_CALL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"hide\(\s*this\s*,\s*(['"])(.+?)\1\s*\)"#).ok());

/// Binds elements whose `onclick` reads `hide(this, '<id>')` to the element
/// with that id.
pub(crate) struct SectionToggleBinder;

impl SectionToggleBinder {
    pub(crate) fn run(dom: &Dom, registry: &mut ToggleRegistry, trace: &mut TraceState) -> usize {
        let triggers = match dom.query_selector_all_from(dom.root, "[onclick]") {
            Ok(triggers) => triggers,
            Err(err) => {
                trace.line(format!("[section] {err}"));
                return 0;
            }
        };

        let mut bound = 0usize;
        for trigger in triggers {
            let Some(onclick) = dom.attr(trigger, "onclick") else {
                continue;
            };
            let Some(section_id) = Self::section_id(&onclick) else {
                continue;
            };
            let Some(section) = dom.by_id(&section_id) else {
                trace.line(format!("[section] missing target id={section_id}"));
                continue;
            };
            let state = section_state(dom, section);
            registry.register(ToggleHandler {
                trigger,
                target: ToggleTarget::Section(section),
                state,
            });
            trace.line(format!(
                "[section] bound id={section_id} state={}",
                state.as_str()
            ));
            bound += 1;
        }
        bound
    }

    pub(crate) fn section_id(onclick: &str) -> Option<String> {
        let captures = HIDE_CALL.as_ref()?.captures(onclick).ok()??;
        captures.get(2).map(|m| m.as_str().to_string())
    }
}

/// Read from the section's inline `display`, the way `hide()` decides.
pub(crate) fn section_state(dom: &Dom, section: NodeId) -> ToggleState {
    let display = dom.style_get(section, "display").unwrap_or_default();
    ToggleState::from_display(&display)
}
