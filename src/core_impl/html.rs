use super::*;

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr",
];

/// Elements whose body is taken verbatim up to the matching end tag.
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "title"];

/// Start tags that close an open `p`.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "fieldset", "footer", "form", "h1",
    "h2", "h3", "h4", "h5", "h6", "header", "hr", "main", "nav", "ol", "p", "pre", "section",
    "table", "ul",
];

/// Elements an open `p` does not reach through.
const PARAGRAPH_BOUNDARIES: &[&str] = &["button", "caption", "table", "td", "th"];

fn listed(list: &[&str], tag: &str) -> bool {
    list.iter().any(|name| *name == tag)
}

pub(crate) fn is_void_tag(tag: &str) -> bool {
    listed(VOID_TAGS, tag)
}

/// Parses a report page into a fresh document. The parser is tolerant in
/// the way report pages need: optional end tags are inferred, stray end
/// tags are ignored and rows placed directly in a table get a `tbody`.
pub(crate) fn parse_html(html: &str) -> Result<Dom> {
    let mut scanner = Scanner { src: html, pos: 0 };
    let mut builder = TreeBuilder::new();

    while let Some(token) = scanner.next_token()? {
        match token {
            Token::Text(text) => builder.text(&decode_entities(text)),
            Token::End(tag) => builder.close(&tag),
            Token::Start(start) if listed(RAW_TEXT_TAGS, &start.name) && !start.self_closing => {
                let body = scanner.raw_text(&start.name)?;
                let body = if start.name == "title" {
                    decode_entities(body)
                } else {
                    body.to_string()
                };
                let node = builder.element(start.name, start.attrs, false);
                if !body.is_empty() {
                    builder.dom.create_text(node, body);
                }
            }
            Token::Start(start) => {
                let keep_open = !start.self_closing && !is_void_tag(&start.name);
                builder.element(start.name, start.attrs, keep_open);
            }
        }
    }

    let mut dom = builder.dom;
    dom.rebuild_id_index();
    Ok(dom)
}

enum Token<'a> {
    Text(&'a str),
    Start(StartTag),
    End(String),
}

struct StartTag {
    name: String,
    attrs: HashMap<String, String>,
    self_closing: bool,
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn rest(&self) -> &'a str {
        let src = self.src;
        &src[self.pos..]
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|ch: char| !keep(ch)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(|ch| ch.is_ascii_whitespace());
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>> {
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return Ok(None);
            }
            if let Some(body) = rest.strip_prefix("<!--") {
                let end = body
                    .find("-->")
                    .ok_or_else(|| Error::HtmlParse("unclosed HTML comment".into()))?;
                self.pos += "<!--".len() + end + "-->".len();
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                let end = rest
                    .find('>')
                    .ok_or_else(|| Error::HtmlParse("unclosed declaration".into()))?;
                self.pos += end + 1;
                continue;
            }
            let opens_tag = |after: &str| after.starts_with(|ch: char| ch.is_ascii_alphabetic());
            if let Some(after) = rest.strip_prefix("</") {
                if opens_tag(after) {
                    self.pos += 2;
                    return self.end_tag().map(Some);
                }
            } else if let Some(after) = rest.strip_prefix('<') {
                if opens_tag(after) {
                    self.pos += 1;
                    return self.start_tag().map(Some);
                }
            }
            // Text runs to the next `<`; a `<` that opens nothing is text too.
            let first = rest.chars().next().map_or(0, char::len_utf8);
            let len = rest[first..].find('<').map_or(rest.len(), |at| at + first);
            self.pos += len;
            return Ok(Some(Token::Text(&rest[..len])));
        }
    }

    fn tag_name(&mut self) -> String {
        self.take_while(|ch| ch.is_ascii_alphanumeric() || ch == '-')
            .to_ascii_lowercase()
    }

    fn end_tag(&mut self) -> Result<Token<'a>> {
        let name = self.tag_name();
        let close = self
            .rest()
            .find('>')
            .ok_or_else(|| Error::HtmlParse(format!("unclosed end tag </{name}")))?;
        self.pos += close + 1;
        Ok(Token::End(name))
    }

    fn start_tag(&mut self) -> Result<Token<'a>> {
        let name = self.tag_name();
        let mut attrs = HashMap::new();
        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                return Err(Error::HtmlParse(format!("unclosed start tag <{name}")));
            }
            let self_closing = rest.starts_with("/>");
            if self_closing || rest.starts_with('>') {
                self.pos += if self_closing { 2 } else { 1 };
                return Ok(Token::Start(StartTag {
                    name,
                    attrs,
                    self_closing,
                }));
            }

            let attr_name = self
                .take_while(|ch| !ch.is_ascii_whitespace() && !matches!(ch, '=' | '>' | '/'))
                .to_ascii_lowercase();
            if attr_name.is_empty() {
                // A lone `/` or `=`.
                self.pos += 1;
                continue;
            }
            self.skip_whitespace();
            let value = if self.rest().starts_with('=') {
                self.pos += 1;
                self.skip_whitespace();
                self.attr_value()?
            } else {
                String::new()
            };
            attrs.entry(attr_name).or_insert(value);
        }
    }

    fn attr_value(&mut self) -> Result<String> {
        let rest = self.rest();
        let raw = match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let len = rest[1..]
                    .find(quote)
                    .ok_or_else(|| Error::HtmlParse("unclosed attribute value".into()))?;
                self.pos += len + 2;
                &rest[1..=len]
            }
            _ => self.take_while(|ch| !ch.is_ascii_whitespace() && ch != '>'),
        };
        Ok(decode_entities(raw))
    }

    /// Body of a raw text element, consuming its end tag.
    fn raw_text(&mut self, tag: &str) -> Result<&'a str> {
        let rest = self.rest();
        let unclosed = || Error::HtmlParse(format!("unclosed <{tag}>"));
        // ASCII lowercasing keeps byte offsets.
        let body_len = rest
            .to_ascii_lowercase()
            .find(&format!("</{tag}"))
            .ok_or_else(unclosed)?;
        let end_len = rest[body_len..].find('>').ok_or_else(unclosed)?;
        self.pos += body_len + end_len + 1;
        Ok(&rest[..body_len])
    }
}

/// An open element that a new start tag ends, searched for from the top of
/// the stack until a `boundary` element.
struct ImpliedEnd {
    closes: &'static [&'static str],
    boundary: &'static [&'static str],
}

struct OpenElement {
    node: NodeId,
    tag: String,
    /// Stack index of the nearest open `p` this element sits inside.
    paragraph: Option<usize>,
}

struct TreeBuilder {
    dom: Dom,
    open: Vec<OpenElement>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            dom: Dom::new(),
            open: Vec::new(),
        }
    }

    fn current(&self) -> NodeId {
        self.open.last().map_or(self.dom.root, |open| open.node)
    }

    fn current_tag(&self) -> Option<&str> {
        self.open.last().map(|open| open.tag.as_str())
    }

    /// Appends to a trailing text node so adjacent text stays one node.
    fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let parent = self.current();
        if let Some(last) = self.dom.children(parent).last().copied() {
            if let NodeType::Text(existing) = &mut self.dom.nodes[last.0].node_type {
                existing.push_str(text);
                return;
            }
        }
        self.dom.create_text(parent, text.to_string());
    }

    fn element(&mut self, tag: String, attrs: HashMap<String, String>, keep_open: bool) -> NodeId {
        self.close_implied_by(&tag);
        if tag == "tr" && self.current_tag() == Some("table") {
            self.open_element("tbody".to_string(), HashMap::new());
        }
        if keep_open {
            self.open_element(tag, attrs)
        } else {
            let parent = self.current();
            self.dom.create_element(parent, tag, attrs)
        }
    }

    fn open_element(&mut self, tag: String, attrs: HashMap<String, String>) -> NodeId {
        let parent = self.current();
        let node = self.dom.create_element(parent, tag.clone(), attrs);
        let paragraph = if tag == "p" {
            Some(self.open.len())
        } else if listed(PARAGRAPH_BOUNDARIES, &tag) {
            None
        } else {
            self.open.last().and_then(|open| open.paragraph)
        };
        self.open.push(OpenElement {
            node,
            tag,
            paragraph,
        });
        node
    }

    /// Closes what a new `tag` implicitly ends: a sibling list item, cell,
    /// row or table section, and an enclosing paragraph.
    fn close_implied_by(&mut self, tag: &str) {
        let rule = match tag {
            "li" => Some(ImpliedEnd {
                closes: &["li"],
                boundary: &["ul", "ol"],
            }),
            "td" | "th" => Some(ImpliedEnd {
                closes: &["td", "th"],
                boundary: &["tr", "table"],
            }),
            "tr" => Some(ImpliedEnd {
                closes: &["tr"],
                boundary: &["thead", "tbody", "tfoot", "table"],
            }),
            "thead" | "tbody" | "tfoot" => Some(ImpliedEnd {
                closes: &["thead", "tbody", "tfoot"],
                boundary: &["table"],
            }),
            _ => None,
        };
        if let Some(rule) = rule {
            let hit = self.open.iter().rposition(|open| {
                listed(rule.closes, &open.tag) || listed(rule.boundary, &open.tag)
            });
            if let Some(index) = hit.filter(|index| listed(rule.closes, &self.open[*index].tag)) {
                self.open.truncate(index);
            }
        }
        if listed(BLOCK_TAGS, tag) {
            if let Some(index) = self.open.last().and_then(|open| open.paragraph) {
                self.open.truncate(index);
            }
        }
    }

    /// End tags without an open element of that name are ignored.
    fn close(&mut self, tag: &str) {
        if let Some(index) = self.open.iter().rposition(|open| open.tag == tag) {
            self.open.truncate(index);
        }
    }
}

pub(crate) fn decode_entities(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match character_reference(rest) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes the reference at the start of `src`, which begins with `&`.
/// Returns the character and the number of bytes it spans.
fn character_reference(src: &str) -> Option<(char, usize)> {
    let body = &src[1..];
    let len = body
        .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '#'))
        .unwrap_or(body.len());
    let name = &body[..len];
    let ch = match name.strip_prefix('#') {
        Some(number) => {
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)?
        }
        None => match name {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{a0}',
            "laquo" => '\u{ab}',
            "raquo" => '\u{bb}',
            "copy" => '\u{a9}',
            "hellip" => '\u{2026}',
            _ => return None,
        },
    };
    let semicolon = usize::from(body[len..].starts_with(';'));
    Some((ch, 1 + len + semicolon))
}
