use super::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeSummary {
    pub(crate) rows: usize,
    pub(crate) glyphs: usize,
}

/// Replaces the indentation code in the first cell of tree rows with
/// glyph images.
pub(crate) struct TreeRenderer<'a> {
    icons: &'a IconSet,
    markers: &'a Markers,
}

impl<'a> TreeRenderer<'a> {
    pub(crate) fn new(icons: &'a IconSet, markers: &'a Markers) -> Self {
        Self { icons, markers }
    }

    pub(crate) fn run(&self, dom: &mut Dom, trace: &mut TraceState) -> TreeSummary {
        let mut summary = TreeSummary::default();
        for table in result_tables(dom, self.markers) {
            let bodies = dom
                .elements_by_tag_name(table, "tbody")
                .into_iter()
                .filter(|body| marker_equals(dom, *body, &self.markers.tree_body))
                .collect::<Vec<_>>();
            for body in bodies {
                for row in dom.elements_by_tag_name(body, "tr") {
                    match self.render_row(dom, row) {
                        Ok(Some(glyphs)) => {
                            trace.line(format!("[tree] rendered row glyphs={glyphs}"));
                            summary.rows += 1;
                            summary.glyphs += glyphs;
                        }
                        Ok(None) => {}
                        Err(err) => trace.line(format!("[tree] skipped row: {err}")),
                    }
                }
            }
        }
        summary
    }

    /// Returns `None` when the row has no code text to decode, which is
    /// also the case for rows rendered earlier.
    fn render_row(&self, dom: &mut Dom, row: NodeId) -> Result<Option<usize>> {
        let Some(cell) = dom.first_element_child(row) else {
            return Ok(None);
        };
        let Some(code_node) = dom.first_child(cell) else {
            return Ok(None);
        };
        let Some(code) = dom.text_data(code_node).map(str::to_string) else {
            return Ok(None);
        };

        let mut glyphs = 0usize;
        for ch in code.chars() {
            let Some(icon) = glyph_for(ch) else {
                continue;
            };
            let img = dom.create_detached_element("img");
            dom.set_attr(img, "src", &self.icons.url(icon))?;
            dom.set_attr(img, "alt", &ch.to_string())?;
            dom.insert_before(cell, img, code_node)?;
            glyphs += 1;
        }
        dom.remove_child(cell, code_node)?;
        Ok(Some(glyphs))
    }
}

fn glyph_for(ch: char) -> Option<Icon> {
    match ch {
        '+' => Some(Icon::Fork),
        '.' => Some(Icon::Empty),
        '\\' => Some(Icon::Corner),
        '|' => Some(Icon::Line),
        _ => None,
    }
}
