use std::sync::LazyLock;

use scraper::{Html, Selector};

static INTERLANGUAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.interlanguage-link-target").unwrap());

/// A link from an article to the same article in another language.
/// Either attribute may be missing on malformed pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLink {
    pub lang: Option<String>,
    pub title: Option<String>,
}

pub fn extract(document: &Html) -> Vec<LanguageLink> {
    document
        .select(&INTERLANGUAGE)
        .map(|a| {
            let attrs = a.value();
            LanguageLink {
                lang: attrs.attr("lang").map(str::to_string),
                title: attrs.attr("title").map(str::to_string),
            }
        })
        .collect()
}
