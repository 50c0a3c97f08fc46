use super::*;

const LISTS: &str = r#"
    <input type="hidden" id="imageBase" value="img/">
    <ul class="collapsible_opened" id="open">
      <li id="o1">with children
        <ul id="o1-a"><li>a</li></ul>
        <ol id="o1-b"><li>b</li></ol>
      </li>
      <li id="o2">leaf</li>
    </ul>
    <ul class="collapsible_closed" id="closed">
      <li id="c1">with child<ul id="c1-a" style="display: block"><li>x</li></ul></li>
    </ul>
    <ul id="plain"><li id="p1">plain<ul><li>y</li></ul></li></ul>
    "#;

#[test]
fn items_get_icons_according_to_their_children() -> Result<()> {
    let page = Page::parse(LISTS)?;

    page.assert_attr("#o1 > img", "src", "img/opened.gif")?;
    page.assert_attr("#o1 > img", "class", "collapsibleOpened")?;
    page.assert_attr("#o2 > img", "src", "img/nochildren.gif")?;
    page.assert_attr("#o2 > img", "class", "<missing>")?;
    page.assert_attr("#c1 > img", "src", "img/closed.gif")?;
    page.assert_attr("#c1 > img", "class", "collapsibleClosed")?;

    page.assert_style("#open", "list-style", "none")?;
    page.assert_style("#closed", "list-style", "none")?;
    page.assert_style("#o1-a", "display", "block")?;
    page.assert_style("#o1-b", "display", "block")?;
    page.assert_style("#c1-a", "display", "none")?;

    assert_eq!(page.toggle_state("#o1 > img")?, Some(ToggleState::Opened));
    assert_eq!(page.toggle_state("#c1 > img")?, Some(ToggleState::Closed));
    assert_eq!(page.toggle_state("#o2 > img")?, None);
    Ok(())
}

#[test]
fn the_icon_is_inserted_as_the_first_child() -> Result<()> {
    let page = Page::parse(LISTS)?;
    let html = page.dump_dom("#o2")?;
    assert_eq!(html, "<li id=\"o2\"><img src=\"img/nochildren.gif\">leaf</li>");
    Ok(())
}

#[test]
fn unmarked_lists_are_untouched() -> Result<()> {
    let page = Page::parse(LISTS)?;
    assert!(page.attr_values("#p1 > img", "src")?.is_empty());
    page.assert_style("#plain", "list-style", "")?;
    Ok(())
}

#[test]
fn clicking_flips_every_sub_list_and_back() -> Result<()> {
    let mut page = Page::parse(LISTS)?;

    page.click("#o1 > img")?;
    assert_eq!(page.toggle_state("#o1 > img")?, Some(ToggleState::Closed));
    page.assert_attr("#o1 > img", "class", "collapsibleClosed")?;
    page.assert_attr("#o1 > img", "src", "img/closed.gif")?;
    page.assert_style("#o1-a", "display", "none")?;
    page.assert_style("#o1-b", "display", "none")?;

    page.click("#o1 > img")?;
    assert_eq!(page.toggle_state("#o1 > img")?, Some(ToggleState::Opened));
    page.assert_attr("#o1 > img", "class", "collapsibleOpened")?;
    page.assert_attr("#o1 > img", "src", "img/opened.gif")?;
    page.assert_style("#o1-a", "display", "block")?;
    page.assert_style("#o1-b", "display", "block")?;
    Ok(())
}

#[test]
fn state_is_tracked_rather_than_read_from_the_dom() -> Result<()> {
    let mut page = Page::parse(LISTS)?;
    // Something else re-opened the list behind the handler's back.
    let sub_list = page.select_one("#c1-a")?;
    page.dom.style_set(sub_list, "display", "block")?;

    page.click("#c1 > img")?;
    page.assert_style("#c1-a", "display", "block")?;
    assert_eq!(page.toggle_state("#c1 > img")?, Some(ToggleState::Opened));
    page.click("#c1 > img")?;
    page.assert_style("#c1-a", "display", "none")?;
    Ok(())
}

#[test]
fn clicks_on_inert_elements_do_nothing() -> Result<()> {
    let mut page = Page::parse(LISTS)?;
    let before = page.to_html();
    page.click("#o2 > img")?;
    page.click("#plain")?;
    assert_eq!(page.to_html(), before);
    Ok(())
}

#[test]
fn builder_reports_lists_items_and_toggles() -> Result<()> {
    let mut dom = parse_html(LISTS)?;
    let config = PageConfig::default();
    let icons = IconSet::new("img/", &config.icons);
    let mut registry = ToggleRegistry::default();
    let mut trace = TraceState {
        enabled: true,
        to_stderr: false,
        ..TraceState::default()
    };

    let summary = CollapsibleListBuilder::new(&icons, &config.markers).run(
        &mut dom,
        &mut registry,
        &mut trace,
    );
    assert_eq!((summary.lists, summary.items, summary.toggles), (2, 3, 2));
    assert_eq!(registry.len(), 2);
    assert!(
        trace
            .logs
            .iter()
            .any(|line| line == "[collapsible] list items=2 toggles=1 state=opened")
    );
    Ok(())
}
