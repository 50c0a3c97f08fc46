//! The selector subset used to address report markup: tag, `#id`,
//! `.class`, `[attr]`, `[attr=value]`, `:first-child`, and the descendant
//! and `>` combinators.

use super::*;

/// One compound selector such as `td.name[title]:first-child`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    pub(crate) tag: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<AttrFilter>,
    pub(crate) first_child: bool,
}

/// `[name]` when `value` is `None`, `[name=value]` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttrFilter {
    pub(crate) name: String,
    pub(crate) value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relation {
    Descendant,
    Child,
}

/// A parsed selector, stored from the subject outwards: each entry of
/// `ancestors` says how the previous compound relates to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selector {
    pub(crate) subject: Compound,
    pub(crate) ancestors: Vec<(Relation, Compound)>,
}

impl Selector {
    pub(crate) fn parse(source: &str) -> Result<Self> {
        let unsupported = || Error::UnsupportedSelector(source.to_string());
        let mut cursor = Cursor { source, pos: 0 };

        cursor.skip_spaces();
        let mut compounds = vec![cursor.compound().ok_or_else(unsupported)?];
        let mut relations = Vec::new();
        loop {
            let spaced = cursor.skip_spaces();
            match cursor.peek() {
                None => break,
                Some('>') => {
                    cursor.bump();
                    cursor.skip_spaces();
                    relations.push(Relation::Child);
                }
                Some(_) if spaced => relations.push(Relation::Descendant),
                Some(_) => return Err(unsupported()),
            }
            compounds.push(cursor.compound().ok_or_else(unsupported)?);
        }

        let mut compounds = compounds.into_iter().rev();
        let subject = compounds.next().ok_or_else(unsupported)?;
        let ancestors = relations.into_iter().rev().zip(compounds).collect();
        Ok(Self { subject, ancestors })
    }

    /// The id of a bare `#id` selector, which can be answered from the index.
    pub(crate) fn id_only(&self) -> Option<&str> {
        let subject = &self.subject;
        let bare = self.ancestors.is_empty()
            && subject.tag.is_none()
            && subject.classes.is_empty()
            && subject.attrs.is_empty()
            && !subject.first_child;
        if bare { subject.id.as_deref() } else { None }
    }
}

struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Returns whether anything was skipped.
    fn skip_spaces(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|ch| ch.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn ident(&mut self) -> Option<&'a str> {
        let source = self.source;
        let rest = &source[self.pos..];
        let len = rest
            .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'))
            .unwrap_or(rest.len());
        self.pos += len;
        (len > 0).then(|| &rest[..len])
    }

    /// `None` when nothing selector-like is at the cursor or a part is malformed.
    fn compound(&mut self) -> Option<Compound> {
        let mut compound = Compound::default();
        let start = self.pos;
        if self.peek().is_some_and(|ch| ch.is_ascii_alphabetic()) {
            compound.tag = Some(self.ident()?.to_ascii_lowercase());
        }
        loop {
            match self.peek() {
                Some('#') => {
                    self.bump();
                    compound.id = Some(self.ident()?.to_string());
                }
                Some('.') => {
                    self.bump();
                    compound.classes.push(self.ident()?.to_string());
                }
                Some('[') => {
                    self.bump();
                    compound.attrs.push(self.attr_filter()?);
                }
                Some(':') => {
                    self.bump();
                    if self.ident()? != "first-child" {
                        return None;
                    }
                    compound.first_child = true;
                }
                _ => break,
            }
        }
        (self.pos > start).then_some(compound)
    }

    fn attr_filter(&mut self) -> Option<AttrFilter> {
        self.skip_spaces();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_spaces();
        let value = if self.eat('=') {
            self.skip_spaces();
            let value = self.attr_value()?;
            self.skip_spaces();
            Some(value)
        } else {
            None
        };
        self.eat(']').then_some(AttrFilter { name, value })
    }

    fn attr_value(&mut self) -> Option<String> {
        match self.peek()? {
            quote @ ('"' | '\'') => {
                self.bump();
                let source = self.source;
                let rest = &source[self.pos..];
                let end = rest.find(quote)?;
                self.pos += end + 1;
                Some(rest[..end].to_string())
            }
            _ => self.ident().map(str::to_string),
        }
    }
}
