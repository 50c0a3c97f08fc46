use super::*;

#[test]
fn rows_placed_directly_in_a_table_get_an_implied_body() -> Result<()> {
    let dom = parse_html(
        "<table id='t'><tr id='a'><td>1</td></tr><tr id='b'><td>2</td></tr></table>",
    )?;
    let table = dom.by_id("t").expect("table");
    let children = dom.child_elements(table);
    assert_eq!(children.len(), 1);
    assert!(dom.is_tag(children[0], "tbody"));
    assert_eq!(dom.child_elements(children[0]).len(), 2);
    assert_eq!(dom.parent(dom.by_id("b").expect("row")), Some(children[0]));
    Ok(())
}

#[test]
fn explicit_sections_are_left_alone() -> Result<()> {
    let dom = parse_html(
        "<table id='t'><thead><tr><th>h</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>",
    )?;
    let table = dom.by_id("t").expect("table");
    let tags = dom
        .child_elements(table)
        .into_iter()
        .filter_map(|child| dom.tag_name(child).map(str::to_string))
        .collect::<Vec<_>>();
    assert_eq!(tags, vec!["thead", "tbody"]);
    Ok(())
}

#[test]
fn optional_end_tags_are_inferred() -> Result<()> {
    let dom = parse_html(
        "<ul id='list'><li>one<li>two<ul><li>nested</ul><li>three</ul>\
         <table><tr id='r1'><td>a<td>b<tr id='r2'><td>c</table>\
         <p id='p1'>para<div id='d'>block</div>",
    )?;

    let list = dom.by_id("list").expect("list");
    assert_eq!(dom.child_elements(list).len(), 3);

    let r1 = dom.by_id("r1").expect("r1");
    let r2 = dom.by_id("r2").expect("r2");
    assert_eq!(dom.child_elements(r1).len(), 2);
    assert_eq!(dom.child_elements(r2).len(), 1);
    assert_eq!(dom.parent(r1), dom.parent(r2));

    let p1 = dom.by_id("p1").expect("p1");
    let d = dom.by_id("d").expect("div");
    assert_ne!(dom.parent(d), Some(p1));
    Ok(())
}

#[test]
fn character_references_are_decoded_in_text_and_attributes() -> Result<()> {
    let dom = parse_html(
        "<p id='p' title='a &amp; b'>&lt;init&gt; &#92; &#x2B; &raquo;</p>",
    )?;
    let p = dom.by_id("p").expect("p");
    assert_eq!(dom.text_content(p), "<init> \\ + \u{bb}");
    assert_eq!(dom.attr(p, "title").as_deref(), Some("a & b"));
    Ok(())
}

#[test]
fn void_and_raw_text_elements() -> Result<()> {
    let dom = parse_html(
        "<div id='d'><img src='a.gif'>after<br/>end</div>\
         <script id='s'>if (a < b) { hide(this, 'x'); }</script>",
    )?;
    let d = dom.by_id("d").expect("div");
    assert_eq!(dom.child_elements(d).len(), 2);
    assert_eq!(dom.text_content(d), "afterend");

    let s = dom.by_id("s").expect("script");
    assert_eq!(dom.text_content(s), "if (a < b) { hide(this, 'x'); }");
    assert_eq!(
        dom.dump_node(s),
        "<script id=\"s\">if (a < b) { hide(this, 'x'); }</script>"
    );
    Ok(())
}

#[test]
fn attributes_are_lowercased_and_first_occurrence_wins() -> Result<()> {
    let dom = parse_html("<INPUT ID='imageBase' Value='/img/' value='ignored' hidden>")?;
    let input = dom.by_id("imageBase").expect("input");
    assert_eq!(dom.tag_name(input), Some("input"));
    assert_eq!(dom.attr(input, "value").as_deref(), Some("/img/"));
    assert_eq!(dom.attr(input, "hidden").as_deref(), Some(""));
    Ok(())
}

#[test]
fn comments_doctype_and_stray_markup_are_tolerated() -> Result<()> {
    let dom = parse_html(
        "<!DOCTYPE html><!-- generated --><p id='p'>1 < 2</span></p>",
    )?;
    let p = dom.by_id("p").expect("p");
    assert_eq!(dom.text_content(p), "1 < 2");
    Ok(())
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(
        parse_html("<p>text<!-- never closed"),
        Err(Error::HtmlParse(_))
    ));
    assert!(matches!(
        parse_html("<img src='a.gif"),
        Err(Error::HtmlParse(_))
    ));
    assert!(matches!(
        parse_html("<script>var x = 1;"),
        Err(Error::HtmlParse(_))
    ));
}

#[test]
fn serialization_escapes_text_and_sorts_attributes() -> Result<()> {
    let dom = parse_html("<td title='&quot;x&quot;' class='c'>a &amp; b</td>")?;
    assert_eq!(
        dom.dump_node(dom.root),
        "<td class=\"c\" title=\"&quot;x&quot;\">a &amp; b</td>"
    );
    Ok(())
}

#[test]
fn block_start_tags_close_only_a_reachable_paragraph() -> Result<()> {
    let dom = parse_html(
        "<p id='outer'>intro<table><tr><td><p id='inner'>cell<div id='d1'>x</div></td></tr></table>\
         <p id='p2'>text<button id='b'><div id='d2'>y</div></button>",
    )?;

    let table = dom.elements_by_tag_name(dom.root, "table")[0];
    assert_eq!(dom.parent(table), Some(dom.root));
    let inner = dom.by_id("inner").expect("inner");
    assert!(dom.is_tag(dom.parent(inner).expect("cell"), "td"));
    assert_eq!(dom.parent(dom.by_id("d1").expect("d1")), dom.parent(inner));

    let button = dom.by_id("b").expect("button");
    assert_eq!(dom.parent(button), dom.by_id("p2"));
    assert_eq!(dom.parent(dom.by_id("d2").expect("d2")), Some(button));
    Ok(())
}

#[test]
fn deep_nesting_parses_and_serializes() -> Result<()> {
    let depth = 100_000;
    let html = format!("{}<b id='leaf'>x</b>{}", "<p><div>".repeat(depth), "</div>".repeat(depth));
    let dom = parse_html(&html)?;
    let leaf = dom.by_id("leaf").expect("leaf");
    assert_eq!(dom.ancestors_inclusive(leaf).len(), depth + 2);
    assert_eq!(dom.text_content(dom.root), "x");
    assert!(dom.dump_node(dom.root).starts_with("<p></p><div><p></p><div>"));
    Ok(())
}
