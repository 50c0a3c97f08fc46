use super::*;

/// What one call to [`Page::prepare`] changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecorationReport {
    /// False when preparation was skipped (already prepared or unsupported host).
    pub prepared: bool,
    pub icons_resolved: bool,
    pub tree_rows: usize,
    pub tree_glyphs: usize,
    pub striped_tables: usize,
    pub striped_rows: usize,
    pub striped_cells: usize,
    pub collapsible_lists: usize,
    pub collapsible_items: usize,
    pub list_toggles: usize,
    pub section_toggles: usize,
}

/// A loaded report page.
///
/// ```
/// use report_decorator::Page;
///
/// let html = r#"
///   <input type="hidden" id="imageBase" value="/img/">
///   <ul class="collapsible_closed" id="list">
///     <li id="a">a<ul><li>a.1</li></ul></li>
///   </ul>
/// "#;
/// let mut page = Page::parse(html)?;
/// page.assert_style("#a > ul", "display", "none")?;
/// page.click("#a > img")?;
/// page.assert_style("#a > ul", "display", "block")?;
/// # Ok::<(), report_decorator::Error>(())
/// ```
#[derive(Debug)]
pub struct Page {
    pub(crate) dom: Dom,
    pub(crate) config: PageConfig,
    pub(crate) capabilities: DomCapabilities,
    pub(crate) registry: ToggleRegistry,
    pub(crate) icons: Option<IconSet>,
    pub(crate) trace_state: TraceState,
    pub(crate) prepared: bool,
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_config(html, PageConfig::default())
    }

    pub fn from_html_with_config(html: &str, config: PageConfig) -> Result<Self> {
        let dom = parse_html(html)?;
        Ok(Self {
            dom,
            config,
            capabilities: DomCapabilities::default(),
            registry: ToggleRegistry::default(),
            icons: None,
            trace_state: TraceState::default(),
            prepared: false,
        })
    }

    /// Loads and prepares in one step, like a browser firing the page's
    /// load hook.
    pub fn parse(html: &str) -> Result<Self> {
        let mut page = Self::from_html(html)?;
        page.prepare();
        Ok(page)
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Takes effect on the next [`Page::prepare`] only.
    pub fn set_capabilities(&mut self, capabilities: DomCapabilities) {
        self.capabilities = capabilities;
    }

    /// Runs the decoration passes. Only the first call does any work.
    pub fn prepare(&mut self) -> DecorationReport {
        if self.prepared {
            self.trace_state
                .line("[prepare] skipped: already prepared".to_string());
            return DecorationReport::default();
        }
        self.prepared = true;

        if !self.capabilities.is_supported() {
            self.trace_state.line(format!(
                "[prepare] skipped: unsupported host element_lookup={} text_nodes={}",
                self.capabilities.element_lookup, self.capabilities.text_nodes
            ));
            return DecorationReport::default();
        }

        stacker::grow(32 * 1024 * 1024, || self.run_passes())
    }

    fn run_passes(&mut self) -> DecorationReport {
        let mut report = DecorationReport {
            prepared: true,
            ..DecorationReport::default()
        };

        self.icons = self
            .resolve_image_base()
            .map(|base| IconSet::new(base, &self.config.icons));
        report.icons_resolved = self.icons.is_some();
        if let Some(icons) = &self.icons {
            self.trace_state
                .line(format!("[prepare] image base={}", icons.base));
        } else {
            self.trace_state
                .line("[prepare] no image base; icon passes skipped".to_string());
        }

        if let Some(icons) = &self.icons {
            let tree = TreeRenderer::new(icons, &self.config.markers)
                .run(&mut self.dom, &mut self.trace_state);
            report.tree_rows = tree.rows;
            report.tree_glyphs = tree.glyphs;
        }

        let stripes = TableStriper::new(&self.config.stripe, &self.config.markers)
            .run(&mut self.dom, &mut self.trace_state);
        report.striped_tables = stripes.tables;
        report.striped_rows = stripes.rows_colored;
        report.striped_cells = stripes.cells_colored;

        if let Some(icons) = &self.icons {
            let lists = CollapsibleListBuilder::new(icons, &self.config.markers).run(
                &mut self.dom,
                &mut self.registry,
                &mut self.trace_state,
            );
            report.collapsible_lists = lists.lists;
            report.collapsible_items = lists.items;
            report.list_toggles = lists.toggles;

            report.section_toggles =
                SectionToggleBinder::run(&self.dom, &mut self.registry, &mut self.trace_state);
        }

        report
    }

    fn resolve_image_base(&self) -> Option<String> {
        if let Some(base) = &self.config.image_base {
            return Some(base.clone());
        }
        let holder = self.dom.by_id(&self.config.image_base_id)?;
        self.dom.attr(holder, "value")
    }

    /// Dispatches a click on the first match. Every handler on the path from
    /// the target up to the document runs, target first.
    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(32 * 1024 * 1024, || self.dispatch_click(target))
    }

    fn dispatch_click(&mut self, target: NodeId) -> Result<()> {
        let Some(icons) = &self.icons else {
            return Ok(());
        };
        for node in self.dom.ancestors_inclusive(target) {
            let Some(handler) = self.registry.get_mut(node) else {
                continue;
            };
            handler.state = match handler.target {
                ToggleTarget::Section(section) => section_state(&self.dom, section).flipped(),
                ToggleTarget::SubLists(_) => handler.state.flipped(),
            };
            let handler = handler.clone();
            apply_toggle(&mut self.dom, icons, &handler)?;
            self.trace_state.line(format!(
                "[click] toggle node={} state={}",
                node.0,
                handler.state.as_str()
            ));
        }
        Ok(())
    }

    /// State of the toggle bound to the first match, if it has one.
    pub fn toggle_state(&self, selector: &str) -> Result<Option<ToggleState>> {
        let target = self.select_one(selector)?;
        Ok(self
            .registry
            .get(target)
            .map(|handler| match handler.target {
                ToggleTarget::Section(section) => section_state(&self.dom, section),
                ToggleTarget::SubLists(_) => handler.state,
            }))
    }

    pub fn toggle_count(&self) -> usize {
        self.registry.len()
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        self.expect_equal(selector, target, expected.to_string(), actual)
    }

    /// A missing attribute compares as `<missing>`.
    pub fn assert_attr(&self, selector: &str, name: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.attr(target, name);
        self.expect_equal(
            selector,
            target,
            format!("{name}={expected}"),
            format!("{name}={}", actual.as_deref().unwrap_or("<missing>")),
        )
    }

    /// Compares one inline style property; an unset property reads as "".
    pub fn assert_style(&self, selector: &str, property: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.style_get(target, property)?;
        self.expect_equal(
            selector,
            target,
            format!("{property}: {expected}"),
            format!("{property}: {actual}"),
        )
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    /// Values of `name` on every match that has it, in document order.
    pub fn attr_values(&self, selector: &str, name: &str) -> Result<Vec<String>> {
        Ok(self
            .dom
            .query_selector_all(selector)?
            .into_iter()
            .filter_map(|node| self.dom.attr(node, name))
            .collect())
    }

    /// Inline style `property` of every match, "" where unset.
    pub fn style_values(&self, selector: &str, property: &str) -> Result<Vec<String>> {
        self.dom
            .query_selector_all(selector)?
            .into_iter()
            .map(|node| self.dom.style_get(node, property))
            .collect()
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    /// Serializes the whole document.
    pub fn to_html(&self) -> String {
        self.dom.dump_node(self.dom.root)
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace_state.enabled = enabled;
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace_state.logs).into()
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_state.to_stderr = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::Config(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_state.log_limit = max_entries;
        while self.trace_state.logs.len() > self.trace_state.log_limit {
            self.trace_state.logs.pop_front();
        }
        Ok(())
    }

    pub(crate) fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    fn expect_equal(
        &self,
        selector: &str,
        target: NodeId,
        expected: String,
        actual: String,
    ) -> Result<()> {
        if actual == expected {
            return Ok(());
        }
        Err(Error::AssertionFailed {
            selector: selector.to_string(),
            expected,
            actual,
            dom_snippet: self.node_snippet(target),
        })
    }

    fn node_snippet(&self, node_id: NodeId) -> String {
        shorten(&self.dom.dump_node(node_id), 200)
    }
}
