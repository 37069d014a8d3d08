//! Structural queries over XML documents.
//!
//! Not XPath, just the small subset metadata crosswalks need:
//!
//! - `//name` selects descendants, `/name` selects children, `*` matches any
//!   element
//! - names compare against the element's local name, so `mods:title`,
//!   `title` and `{http://www.loc.gov/mods/v3}title` in a source document are
//!   all `title`
//! - `[@attr="v"]` tests an attribute, `[child="v"]` tests the trimmed text of
//!   some child element, `[child]` tests that such a child exists
//!
//! Results are deduplicated and returned in document order.
//!
//! A query's value for a matched node is the node's trimmed text, unless the
//! query was built with [`Query::joining_children`], in which case it is the
//! trimmed text of the named children joined by a separator. That keeps a
//! multi-part element such as a MODS `name` as one value.

use crate::error::{MappingError, MappingResult};
use roxmltree::{Document, Node};
use std::fmt;

/// A parsed structural query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    source: String,
    steps: Vec<Step>,
    text: TextMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum TextMode {
    #[default]
    Whole,
    JoinChildren { name: String, separator: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    name: NameTest,
    predicates: Vec<Predicate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NameTest {
    Any,
    Local(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Attribute { name: String, value: String },
    ChildText { name: String, value: String },
    HasChild { name: String },
}

impl Query {
    /// Parses query text. Fails with [`MappingError::InvalidQuery`] on
    /// malformed input.
    pub fn parse(source: &str) -> MappingResult<Self> {
        Parser::new(source).parse()
    }

    /// Values come from the children named `name` (local name), trimmed and
    /// joined by `separator`. A node without such children falls back to
    /// its whole text.
    pub fn joining_children(mut self, name: &str, separator: &str) -> Self {
        let name = name.rsplit(':').next().unwrap_or(name).to_string();
        self.text = TextMode::JoinChildren {
            name,
            separator: separator.to_string(),
        };
        self
    }

    /// The value this query yields for one of its matched nodes.
    pub fn value_of(&self, node: Node) -> String {
        match &self.text {
            TextMode::Whole => text_content(node).trim().to_string(),
            TextMode::JoinChildren { name, separator } => {
                let parts: Vec<String> = node
                    .children()
                    .filter(|c| is_named(*c, name))
                    .map(|c| text_content(c).trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect();
                if parts.is_empty() {
                    text_content(node).trim().to_string()
                } else {
                    parts.join(separator)
                }
            }
        }
    }

    /// The query text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Evaluates the query against a document, returning matching elements in
    /// document order.
    pub fn select<'a, 'input>(&self, document: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        let mut context = vec![document.root()];
        for step in &self.steps {
            let mut next = Vec::new();
            for node in &context {
                match step.axis {
                    Axis::Child => next.extend(node.children().filter(|n| step.accepts(*n))),
                    // descendants() yields the node itself first
                    Axis::Descendant => {
                        next.extend(node.descendants().skip(1).filter(|n| step.accepts(*n)))
                    }
                }
            }
            if context.len() > 1 {
                next.sort_by_key(|n| n.id().get());
                next.dedup_by_key(|n| n.id().get());
            }
            if next.is_empty() {
                return next;
            }
            context = next;
        }
        context
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Step {
    fn accepts(&self, node: Node) -> bool {
        let named = match &self.name {
            NameTest::Any => node.is_element(),
            NameTest::Local(name) => is_named(node, name),
        };
        named && self.predicates.iter().all(|p| p.holds(node))
    }
}

impl Predicate {
    fn holds(&self, node: Node) -> bool {
        match self {
            Predicate::Attribute { name, value } => node
                .attributes()
                .any(|a| a.name() == name.as_str() && a.value() == value.as_str()),
            Predicate::ChildText { name, value } => node
                .children()
                .any(|c| is_named(c, name) && text_content(c).trim() == value.as_str()),
            Predicate::HasChild { name } => node.children().any(|c| is_named(c, name)),
        }
    }
}

fn is_named(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Concatenated text of every descendant text node.
fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

struct Parser<'s> {
    source: &'s str,
    rest: &'s str,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            rest: source.trim(),
        }
    }

    fn parse(mut self) -> MappingResult<Query> {
        if self.rest.is_empty() {
            return Err(self.error("empty query"));
        }

        let mut steps = Vec::new();
        while !self.rest.is_empty() {
            let axis = if let Some(rest) = self.rest.strip_prefix("//") {
                self.rest = rest;
                Axis::Descendant
            } else if let Some(rest) = self.rest.strip_prefix('/') {
                self.rest = rest;
                Axis::Child
            } else {
                return Err(self.error("expected `/` or `//`"));
            };

            let name = match self.name()? {
                "*" => NameTest::Any,
                name => NameTest::Local(name.to_string()),
            };

            let mut predicates = Vec::new();
            while self.rest.starts_with('[') {
                predicates.push(self.predicate()?);
            }
            steps.push(Step {
                axis,
                name,
                predicates,
            });
        }

        Ok(Query {
            source: self.source.trim().to_string(),
            steps,
            text: TextMode::Whole,
        })
    }

    /// Element name (local part only) or `*`.
    fn name(&mut self) -> MappingResult<&'s str> {
        if let Some(rest) = self.rest.strip_prefix('*') {
            self.rest = rest;
            return Ok("*");
        }
        let end = self
            .rest
            .find(|c: char| !is_name_char(c))
            .unwrap_or(self.rest.len());
        let (qualified, rest) = self.rest.split_at(end);
        let local = qualified.rsplit(':').next().unwrap_or(qualified);
        if local.is_empty() {
            return Err(self.error("expected element name"));
        }
        self.rest = rest;
        Ok(local)
    }

    fn predicate(&mut self) -> MappingResult<Predicate> {
        self.rest = &self.rest[1..];
        self.skip_whitespace();

        let attribute = match self.rest.strip_prefix('@') {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        };
        let name = match self.name()? {
            "*" => return Err(self.error("wildcard not allowed in predicate")),
            name => name.to_string(),
        };

        self.skip_whitespace();
        let value = match self.rest.strip_prefix('=') {
            Some(rest) => {
                self.rest = rest;
                self.skip_whitespace();
                Some(self.literal()?)
            }
            None => None,
        };

        self.skip_whitespace();
        match self.rest.strip_prefix(']') {
            Some(rest) => self.rest = rest,
            None => return Err(self.error("unterminated predicate")),
        }

        match (attribute, value) {
            (true, Some(value)) => Ok(Predicate::Attribute { name, value }),
            (true, None) => Err(self.error("attribute predicate needs a value")),
            (false, Some(value)) => Ok(Predicate::ChildText { name, value }),
            (false, None) => Ok(Predicate::HasChild { name }),
        }
    }

    fn literal(&mut self) -> MappingResult<String> {
        let quote = match self.rest.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.error("expected quoted value")),
        };
        let body = &self.rest[1..];
        let end = body
            .find(quote)
            .ok_or_else(|| self.error("unterminated string"))?;
        self.rest = &body[end + 1..];
        Ok(body[..end].to_string())
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn error(&self, reason: &str) -> MappingError {
        MappingError::invalid_query(self.source, reason)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')
}
