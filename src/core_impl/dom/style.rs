use super::*;

/// The declarations of a `style` attribute, in source order. Property
/// names are lowercase CSS names such as `background-color`.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub(crate) fn parse(attr: &str) -> Self {
        let mut style = Self::default();
        for chunk in split_declarations(attr) {
            // Property names never contain a colon, so the first one splits.
            let Some((name, value)) = chunk.split_once(':') else {
                continue;
            };
            let name = name.trim();
            if !name.is_empty() {
                style.set(name, value.trim());
            }
        }
        style
    }

    pub(crate) fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// An empty value removes the property.
    pub(crate) fn set(&mut self, property: &str, value: &str) {
        let property = property.to_ascii_lowercase();
        let existing = self.declarations.iter().position(|(name, _)| *name == property);
        match (existing, value.is_empty()) {
            (Some(index), true) => {
                self.declarations.remove(index);
            }
            (Some(index), false) => self.declarations[index].1 = value.to_string(),
            (None, false) => self.declarations.push((property, value.to_string())),
            (None, true) => {}
        }
    }

    pub(crate) fn to_attr(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Splits on `;` outside parentheses, so `url(a;b.gif)` stays whole.
fn split_declarations(attr: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in attr.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => {
                chunks.push(&attr[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    chunks.push(&attr[start..]);
    chunks
}

impl Dom {
    fn inline_style(&self, node_id: NodeId) -> Result<InlineStyle> {
        let element = self
            .element(node_id)
            .ok_or_else(|| Error::Dom("style target is not an element".into()))?;
        Ok(element
            .attrs
            .get("style")
            .map(|attr| InlineStyle::parse(attr))
            .unwrap_or_default())
    }

    /// Value of one inline property; "" when unset.
    pub(crate) fn style_get(&self, node_id: NodeId, property: &str) -> Result<String> {
        let style = self.inline_style(node_id)?;
        Ok(style.get(property).unwrap_or_default().to_string())
    }

    pub(crate) fn style_set(&mut self, node_id: NodeId, property: &str, value: &str) -> Result<()> {
        let mut style = self.inline_style(node_id)?;
        style.set(property, value);
        if let Some(element) = self.element_mut(node_id) {
            element.attrs.insert("style".to_string(), style.to_attr());
        }
        Ok(())
    }
}
