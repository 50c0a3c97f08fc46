use super::*;

fn render(html: &str) -> Result<(Dom, usize, usize)> {
    let mut dom = parse_html(html)?;
    let config = PageConfig::default();
    let icons = IconSet::new("/img/", &config.icons);
    let mut trace = TraceState::default();
    let summary = TreeRenderer::new(&icons, &config.markers).run(&mut dom, &mut trace);
    Ok((dom, summary.rows, summary.glyphs))
}

fn code_cell(dom: &Dom, row_id: &str) -> NodeId {
    let row = dom.by_id(row_id).expect("row");
    dom.first_element_child(row).expect("code cell")
}

fn glyphs(dom: &Dom, row_id: &str) -> Vec<(String, String)> {
    dom.child_elements(code_cell(dom, row_id))
        .into_iter()
        .map(|img| {
            (
                dom.attr(img, "src").unwrap_or_default(),
                dom.attr(img, "alt").unwrap_or_default(),
            )
        })
        .collect()
}

fn tree_table(rows: &str) -> String {
    format!(
        r#"<table class="result"><thead><tr><th>Class</th></tr></thead><tbody class="tree">{rows}</tbody></table>"#
    )
}

#[test]
fn each_mapped_character_becomes_one_glyph_in_order() -> Result<()> {
    let (dom, rows, count) = render(&tree_table(
        r#"<tr id="r"><td>+.\|</td><td>java.lang.Object</td></tr>"#,
    ))?;
    assert_eq!(
        glyphs(&dom, "r"),
        vec![
            ("/img/fork.gif".to_string(), "+".to_string()),
            ("/img/empty.gif".to_string(), ".".to_string()),
            ("/img/corner.gif".to_string(), "\\".to_string()),
            ("/img/line.gif".to_string(), "|".to_string()),
        ]
    );
    assert_eq!(dom.text_content(code_cell(&dom, "r")), "");
    assert_eq!((rows, count), (1, 4));
    Ok(())
}

#[test]
fn unmapped_characters_are_skipped_without_stopping() -> Result<()> {
    let (dom, _, count) = render(&tree_table(
        r#"<tr id="r"><td>+X\</td><td>name</td></tr><tr id="s"><td>??</td><td>other</td></tr>"#,
    ))?;
    let alts = glyphs(&dom, "r")
        .into_iter()
        .map(|(_, alt)| alt)
        .collect::<Vec<_>>();
    assert_eq!(alts, vec!["+", "\\"]);
    assert!(glyphs(&dom, "s").is_empty());
    assert_eq!(dom.text_content(code_cell(&dom, "s")), "");
    assert_eq!(count, 2);
    Ok(())
}

#[test]
fn the_cell_keeps_content_after_the_code() -> Result<()> {
    let (dom, _, _) = render(&tree_table(
        r#"<tr id="r"><td>.+<a href="obj?id=1">HashMap</a></td></tr>"#,
    ))?;
    let cell = code_cell(&dom, "r");
    assert_eq!(
        dom.dump_node(cell),
        "<td><img alt=\".\" src=\"/img/empty.gif\"><img alt=\"+\" src=\"/img/fork.gif\"><a href=\"obj?id=1\">HashMap</a></td>"
    );
    Ok(())
}

#[test]
fn rendering_twice_changes_nothing() -> Result<()> {
    let mut dom = parse_html(&tree_table(
        r#"<tr id="r"><td>.\</td><td>name</td></tr>"#,
    ))?;
    let config = PageConfig::default();
    let icons = IconSet::new("/img/", &config.icons);
    let mut trace = TraceState::default();
    let renderer = TreeRenderer::new(&icons, &config.markers);

    renderer.run(&mut dom, &mut trace);
    let first = dom.dump_node(dom.root);
    let again = renderer.run(&mut dom, &mut trace);
    assert_eq!(dom.dump_node(dom.root), first);
    assert_eq!((again.rows, again.glyphs), (0, 0));
    Ok(())
}

#[test]
fn only_tree_bodies_of_result_tables_are_rendered() -> Result<()> {
    let (dom, rows, _) = render(
        r#"
        <table class="result">
          <tbody><tr id="plain"><td>+.</td></tr></tbody>
          <tbody class="tree"><tr id="tree"><td>+.</td></tr></tbody>
        </table>
        <table class="summary">
          <tbody class="tree"><tr id="other"><td>+.</td></tr></tbody>
        </table>
        "#,
    )?;
    assert_eq!(dom.text_content(code_cell(&dom, "plain")), "+.");
    assert_eq!(glyphs(&dom, "tree").len(), 2);
    assert_eq!(dom.text_content(code_cell(&dom, "other")), "+.");
    assert_eq!(rows, 1);
    Ok(())
}

#[test]
fn rows_without_a_leading_code_text_are_skipped() -> Result<()> {
    let (dom, rows, _) = render(&tree_table(
        r#"<tr id="img"><td><img src="x.gif">+</td></tr><tr id="empty"><td></td></tr><tr id="none"></tr>"#,
    ))?;
    assert_eq!(dom.text_content(code_cell(&dom, "img")), "+");
    assert_eq!(rows, 0);
    assert!(dom.by_id("none").is_some());
    Ok(())
}
