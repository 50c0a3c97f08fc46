use super::*;

/// Visibility state carried by a toggle icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleState {
    Opened,
    Closed,
}

impl ToggleState {
    pub fn flipped(self) -> Self {
        match self {
            Self::Opened => Self::Closed,
            Self::Closed => Self::Opened,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
        }
    }

    pub(crate) fn display(self) -> &'static str {
        match self {
            Self::Opened => "block",
            Self::Closed => "none",
        }
    }

    pub(crate) fn icon_class(self) -> &'static str {
        match self {
            Self::Opened => "collapsibleOpened",
            Self::Closed => "collapsibleClosed",
        }
    }

    /// Sections are closed only when explicitly hidden.
    pub(crate) fn from_display(display: &str) -> Self {
        if display.trim().eq_ignore_ascii_case("none") {
            Self::Closed
        } else {
            Self::Opened
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ToggleTarget {
    /// The trigger is the list item's icon; it controls the item's nested lists.
    SubLists(Vec<NodeId>),
    /// The trigger wraps an icon image and controls one section element.
    Section(NodeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ToggleHandler {
    pub(crate) trigger: NodeId,
    pub(crate) target: ToggleTarget,
    /// Owned by the handler for sub-lists. A section's state lives in its
    /// `display`, which other triggers may change, so it is re-read on click.
    pub(crate) state: ToggleState,
}

/// Click dispatch table keyed by the node a handler is bound to.
#[derive(Debug, Default, Clone)]
pub(crate) struct ToggleRegistry {
    pub(crate) map: HashMap<NodeId, ToggleHandler>,
}

impl ToggleRegistry {
    pub(crate) fn register(&mut self, handler: ToggleHandler) {
        // One handler per trigger, like an `onclick` property.
        self.map.insert(handler.trigger, handler);
    }

    pub(crate) fn get(&self, node_id: NodeId) -> Option<&ToggleHandler> {
        self.map.get(&node_id)
    }

    pub(crate) fn get_mut(&mut self, node_id: NodeId) -> Option<&mut ToggleHandler> {
        self.map.get_mut(&node_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}

#[derive(Debug)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) logs: VecDeque<String>,
    pub(crate) log_limit: usize,
    pub(crate) to_stderr: bool,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            logs: VecDeque::new(),
            log_limit: 10_000,
            to_stderr: true,
        }
    }
}

impl TraceState {
    pub(crate) fn line(&mut self, line: String) {
        log::debug!(target: "report_decorator", "{line}");
        if !self.enabled {
            return;
        }
        if self.to_stderr {
            eprintln!("{line}");
        }
        if self.logs.len() >= self.log_limit {
            self.logs.pop_front();
        }
        self.logs.push_back(line);
    }
}
