pub mod interlanguage;
pub mod links;
pub mod title;

use scraper::Html;

use crate::sources::Strategy;
use links::LinkCandidate;

/// Parse a list page and pick out its candidate entry links.
pub fn list_page_links(html: &str, strategy: Strategy) -> Vec<LinkCandidate> {
    let document = Html::parse_document(html);
    links::extract(&document, strategy)
}

/// Parse an entry page and return its interlanguage links.
pub fn entry_page_languages(html: &str) -> Vec<interlanguage::LanguageLink> {
    let document = Html::parse_document(html);
    interlanguage::extract(&document)
}
