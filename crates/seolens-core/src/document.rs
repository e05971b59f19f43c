//! Read-only access to a parsed page
//!
//! Evaluators never touch the markup parser directly. They go through
//! [`DocumentAccessor`], which is implemented over `scraper` for real pages
//! ([`HtmlDocument`]) and over plain vectors for fixtures ([`MemoryDocument`]).

use scraper::{Html, Selector};

/// An element snapshot: its text content and attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    text: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Text content with surrounding whitespace removed
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Raw attribute value, exactly as written in the markup
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value with surrounding whitespace removed
    pub fn trimmed_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).map(str::trim)
    }
}

/// Capability interface the evaluators read a page through
pub trait DocumentAccessor {
    /// All elements with the given tag name, in document order
    fn select_all(&self, tag: &str) -> Vec<Element>;

    /// The first element with the given tag name
    fn select_first(&self, tag: &str) -> Option<Element> {
        self.select_all(tag).into_iter().next()
    }

    /// Number of elements with the given tag name
    fn count(&self, tag: &str) -> usize {
        self.select_all(tag).len()
    }

    /// Whole text content of `<body>`, lowercased and untrimmed.
    /// Empty when the page has no body.
    fn body_text(&self) -> String;
}

/// [`DocumentAccessor`] over a `scraper` document
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    fn selector(tag: &str) -> Option<Selector> {
        Selector::parse(tag).ok()
    }
}

fn snapshot(element: scraper::ElementRef<'_>) -> Element {
    Element {
        text: element.text().collect(),
        attributes: element
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    }
}

impl DocumentAccessor for HtmlDocument {
    fn select_all(&self, tag: &str) -> Vec<Element> {
        match Self::selector(tag) {
            Some(selector) => self.html.select(&selector).map(snapshot).collect(),
            None => Vec::new(),
        }
    }

    fn select_first(&self, tag: &str) -> Option<Element> {
        let selector = Self::selector(tag)?;
        self.html.select(&selector).next().map(snapshot)
    }

    fn count(&self, tag: &str) -> usize {
        Self::selector(tag)
            .map(|selector| self.html.select(&selector).count())
            .unwrap_or(0)
    }

    fn body_text(&self) -> String {
        self.select_first("body")
            .map(|body| body.text.to_lowercase())
            .unwrap_or_default()
    }
}

/// In-memory [`DocumentAccessor`] for tests and callers that already hold
/// extracted page data
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<(String, Element)>,
    body: String,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `tag`
    pub fn with(mut self, tag: impl Into<String>, element: Element) -> Self {
        self.elements.push((tag.into().to_ascii_lowercase(), element));
        self
    }

    /// Append `n` copies of `element` under `tag`
    pub fn with_many(mut self, tag: &str, element: Element, n: usize) -> Self {
        for _ in 0..n {
            self = self.with(tag, element.clone());
        }
        self
    }

    /// Set the body text (lowercased on read)
    pub fn with_body(mut self, text: impl Into<String>) -> Self {
        self.body = text.into();
        self
    }
}

impl DocumentAccessor for MemoryDocument {
    fn select_all(&self, tag: &str) -> Vec<Element> {
        let tag = tag.to_ascii_lowercase();
        self.elements
            .iter()
            .filter(|(name, _)| *name == tag)
            .map(|(_, element)| element.clone())
            .collect()
    }

    fn body_text(&self) -> String {
        self.body.to_lowercase()
    }
}
