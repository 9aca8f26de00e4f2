// src/core/html.rs
//
// Thin helpers over `scraper` for the handful of structural queries the specs
// need: all rows, first descendant by selector, trimmed text, attribute access.

use scraper::{ElementRef, Html, Selector};

/// Compile a CSS selector that is a string constant in this crate.
/// Only for literals; user input must go through `Selector::parse` directly.
pub fn css(selector: &'static str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|e| panic!("bad built-in selector {selector:?}: {e}"))
}

/// All text nodes under `el`, concatenated and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    super::sanitize::clean_text(&el.text().collect::<String>())
}

/// First descendant of `scope` matching `sel`.
pub fn find<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// Trimmed text of the first descendant matching `sel`, if any.
pub fn find_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    find(scope, sel).map(text_of)
}

/// All descendants of `scope` matching `sel`, in document order.
pub fn find_all<'a>(scope: ElementRef<'a>, sel: &Selector) -> Vec<ElementRef<'a>> {
    scope.select(sel).collect()
}

/// Every element in the document matching `sel`, in document order.
pub fn select_all<'a>(doc: &'a Html, sel: &Selector) -> Vec<ElementRef<'a>> {
    doc.select(sel).collect()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}
