//! Queryable HTML document with permissive lookups.
//!
//! Every helper here treats a missing node or attribute as an empty value, so
//! extractors never have to branch on absence.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a response body. html5ever recovers from any malformed markup,
    /// so this never fails.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// The `<html>` element, for lookups that are not scoped to a region.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> {
        self.html.select(selector)
    }

    /// First element matching `selector`, if any.
    #[must_use]
    pub fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }
}

/// Concatenated text of every element matching `selector` inside `scope`,
/// exactly as it appears in the markup.
#[must_use]
pub fn raw_text(scope: Option<ElementRef<'_>>, selector: &Selector) -> String {
    scope.map_or_else(String::new, |scope| {
        scope
            .select(selector)
            .flat_map(|element| element.text())
            .collect()
    })
}

/// Like [`raw_text`], with surrounding whitespace removed.
#[must_use]
pub fn text(scope: Option<ElementRef<'_>>, selector: &Selector) -> String {
    raw_text(scope, selector).trim().to_string()
}

/// Value of attribute `name` on the first element matching `selector` inside
/// `scope`; empty if either is absent.
#[must_use]
pub fn attr(scope: Option<ElementRef<'_>>, selector: &Selector, name: &str) -> String {
    scope
        .and_then(|scope| scope.select(selector).next())
        .and_then(|element| element.value().attr(name))
        .unwrap_or_default()
        .to_string()
}
