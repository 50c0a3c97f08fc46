use super::*;
use serde::Deserialize;

/// Settings for decorating a page. Every section falls back to the values
/// used by the report generator, so an empty TOML document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Overrides the base path read from the page's image-base element.
    pub image_base: Option<String>,
    /// Id of the hidden element whose `value` holds the icon base path.
    pub image_base_id: String,
    pub stripe: StripeColors,
    pub icons: IconNames,
    pub markers: Markers,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            image_base: None,
            image_base_id: "imageBase".to_string(),
            stripe: StripeColors::default(),
            icons: IconNames::default(),
            markers: Markers::default(),
        }
    }
}

impl PageConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|err| Error::Config(err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StripeColors {
    /// Color of the first, third, ... row.
    pub odd: String,
    pub even: String,
}

impl Default for StripeColors {
    fn default() -> Self {
        Self {
            odd: "#eee".to_string(),
            even: "#fff".to_string(),
        }
    }
}

impl StripeColors {
    pub(crate) fn for_parity(&self, even: bool) -> &str {
        if even { &self.even } else { &self.odd }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconNames {
    pub fork: String,
    pub empty: String,
    pub corner: String,
    pub line: String,
    pub opened: String,
    pub closed: String,
    pub nochildren: String,
}

impl Default for IconNames {
    fn default() -> Self {
        Self {
            fork: "fork.gif".to_string(),
            empty: "empty.gif".to_string(),
            corner: "corner.gif".to_string(),
            line: "line.gif".to_string(),
            opened: "opened.gif".to_string(),
            closed: "closed.gif".to_string(),
            nochildren: "nochildren.gif".to_string(),
        }
    }
}

/// Class values that select the elements each pass works on. Matching is
/// on the whole attribute value, not on individual class tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub result_table: String,
    pub tree_body: String,
    pub list_opened: String,
    pub list_closed: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            result_table: "result".to_string(),
            tree_body: "tree".to_string(),
            list_opened: "collapsible_opened".to_string(),
            list_closed: "collapsible_closed".to_string(),
        }
    }
}

/// DOM primitives the host document offers. Decoration is skipped entirely
/// unless both are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomCapabilities {
    pub element_lookup: bool,
    pub text_nodes: bool,
}

impl Default for DomCapabilities {
    fn default() -> Self {
        Self {
            element_lookup: true,
            text_nodes: true,
        }
    }
}

impl DomCapabilities {
    pub fn is_supported(&self) -> bool {
        self.element_lookup && self.text_nodes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Icon {
    Fork,
    Empty,
    Corner,
    Line,
    Opened,
    Closed,
    NoChildren,
}

/// Fully resolved icon locations for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IconSet {
    pub(crate) base: String,
    pub(crate) names: IconNames,
}

impl IconSet {
    pub(crate) fn new(base: impl Into<String>, names: &IconNames) -> Self {
        Self {
            base: base.into(),
            names: names.clone(),
        }
    }

    pub(crate) fn url(&self, icon: Icon) -> String {
        let name = match icon {
            Icon::Fork => &self.names.fork,
            Icon::Empty => &self.names.empty,
            Icon::Corner => &self.names.corner,
            Icon::Line => &self.names.line,
            Icon::Opened => &self.names.opened,
            Icon::Closed => &self.names.closed,
            Icon::NoChildren => &self.names.nochildren,
        };
        format!("{}{}", self.base, name)
    }

    pub(crate) fn toggle_url(&self, state: ToggleState) -> String {
        match state {
            ToggleState::Opened => self.url(Icon::Opened),
            ToggleState::Closed => self.url(Icon::Closed),
        }
    }
}
