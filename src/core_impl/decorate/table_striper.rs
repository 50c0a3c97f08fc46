use super::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StripeSummary {
    pub(crate) tables: usize,
    pub(crate) rows: usize,
    pub(crate) rows_colored: usize,
    pub(crate) cells_colored: usize,
}

/// Alternates background colors over the body rows of result tables.
pub(crate) struct TableStriper<'a> {
    colors: &'a StripeColors,
    markers: &'a Markers,
}

impl<'a> TableStriper<'a> {
    pub(crate) fn new(colors: &'a StripeColors, markers: &'a Markers) -> Self {
        Self { colors, markers }
    }

    pub(crate) fn run(&self, dom: &mut Dom, trace: &mut TraceState) -> StripeSummary {
        let mut summary = StripeSummary::default();
        for table in result_tables(dom, self.markers) {
            // Parity restarts with every table and is shared by all its bodies.
            let mut even = false;
            let mut rows = 0usize;
            let mut colored = 0usize;
            for body in dom.elements_by_tag_name(table, "tbody") {
                for row in dom.elements_by_tag_name(body, "tr") {
                    rows += 1;
                    if !is_styled(dom, row) {
                        let color = self.colors.for_parity(even);
                        match stripe_row(dom, row, color) {
                            Ok(cells) => {
                                colored += 1;
                                summary.cells_colored += cells;
                            }
                            Err(err) => trace.line(format!("[stripe] skipped row: {err}")),
                        }
                    }
                    even = !even;
                }
            }
            trace.line(format!("[stripe] table rows={rows} colored={colored}"));
            summary.tables += 1;
            summary.rows += rows;
            summary.rows_colored += colored;
        }
        summary
    }
}

fn stripe_row(dom: &mut Dom, row: NodeId, color: &str) -> Result<usize> {
    dom.style_set(row, "background-color", color)?;
    let mut cells = 0usize;
    for cell in dom.elements_by_tag_name(row, "td") {
        if is_styled(dom, cell) {
            continue;
        }
        dom.style_set(cell, "background-color", color)?;
        cells += 1;
    }
    Ok(cells)
}

/// A class attribute or an inline background exempts an element from striping.
fn is_styled(dom: &Dom, node_id: NodeId) -> bool {
    if has_class_attribute(dom, node_id) {
        return true;
    }
    ["background-color", "background"].iter().any(|prop| {
        dom.style_get(node_id, prop)
            .is_ok_and(|value| !value.is_empty())
    })
}
