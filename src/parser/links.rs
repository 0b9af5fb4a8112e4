use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::sources::Strategy;

const ARTICLE_PREFIX: &str = "/wiki/";
const FILE_PREFIX: &str = "/wiki/File";

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static FIRST_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table tr td:nth-of-type(1)").unwrap());
static WIKITABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table.wikitable").unwrap());
static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

/// An article link found on a list page. `title` is the anchor's `title` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
    pub href: String,
    pub title: Option<String>,
}

/// Pull article links out of a list page, in document order.
pub fn extract(document: &Html, strategy: Strategy) -> Vec<LinkCandidate> {
    let anchors: Vec<ElementRef> = match strategy {
        Strategy::FirstColumn => document
            .select(&FIRST_CELL)
            .flat_map(|cell| cell.select(&ANCHOR))
            .collect(),
        Strategy::AllTableLinks => document
            .select(&WIKITABLE)
            .flat_map(|table| table.select(&ANCHOR))
            .collect(),
        Strategy::FirstListItemLink => document
            .select(&LIST_ITEM)
            .filter_map(|li| li.select(&ANCHOR).next())
            .collect(),
        Strategy::AllLinks => document.select(&ANCHOR).collect(),
    };

    anchors.into_iter().filter_map(candidate).collect()
}

fn candidate(anchor: ElementRef) -> Option<LinkCandidate> {
    let attrs = anchor.value();
    let href = attrs.attr("href")?;
    if !is_article(href) {
        return None;
    }
    Some(LinkCandidate {
        href: href.to_string(),
        title: attrs.attr("title").map(str::to_string),
    })
}

/// Internal content page, not a media file.
pub fn is_article(href: &str) -> bool {
    href.starts_with(ARTICLE_PREFIX) && !href.starts_with(FILE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> Html {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap();
        Html::parse_document(&html)
    }

    fn hrefs(found: &[LinkCandidate]) -> Vec<&str> {
        found.iter().map(|c| c.href.as_str()).collect()
    }

    #[test]
    fn article_filter() {
        assert!(is_article("/wiki/Alfred_the_Great"));
        assert!(!is_article("/wiki/File:Alfred.jpg"));
        assert!(!is_article("https://example.com/wiki/Alfred"));
        assert!(!is_article("#cite_note-1"));
        assert!(!is_article("/w/index.php?title=Alfred"));
    }

    #[test]
    fn first_column_only() {
        let doc = fixture("monarchs");
        let found = extract(&doc, Strategy::FirstColumn);
        assert_eq!(
            hrefs(&found),
            vec![
                "/wiki/Alfred_the_Great",
                "/wiki/Edward_the_Elder",
                "/wiki/%C3%86thelred_the_Unready",
                "/wiki/Sweyn_Forkbeard",
                "/wiki/%C3%86thelred_the_Unready",
                "/wiki/Untitled_king",
            ]
        );
        assert_eq!(found[0].title.as_deref(), Some("Alfred the Great"));
        assert_eq!(found[5].title, None);
    }

    #[test]
    fn wikitable_links() {
        let doc = fixture("monarchs");
        let found = extract(&doc, Strategy::AllTableLinks);
        let h = hrefs(&found);
        // second column and other wikitable cells count, plain tables don't
        assert!(h.contains(&"/wiki/House_of_Wessex"));
        assert!(h.contains(&"/wiki/Alfred_the_Great"));
        assert!(!h.contains(&"/wiki/Layout_table_link"));
        assert!(h.iter().all(|x| !x.starts_with("/wiki/File")));
    }

    #[test]
    fn first_link_per_list_item() {
        let doc = fixture("women");
        let found = extract(&doc, Strategy::FirstListItemLink);
        assert_eq!(
            hrefs(&found),
            vec!["/wiki/Hildegard_of_Bingen", "/wiki/Julian_of_Norwich", "/wiki/Catherine_of_Siena"]
        );
    }

    #[test]
    fn all_links() {
        let doc = fixture("women");
        let found = extract(&doc, Strategy::AllLinks);
        let h = hrefs(&found);
        assert!(h.contains(&"/wiki/Rhineland"));
        assert!(h.contains(&"/wiki/Main_Page"));
        assert!(!h.iter().any(|x| x.starts_with("http")));
    }

    #[test]
    fn extraction_is_repeatable() {
        let doc = fixture("monarchs");
        for strategy in [
            Strategy::FirstColumn,
            Strategy::AllTableLinks,
            Strategy::FirstListItemLink,
            Strategy::AllLinks,
        ] {
            assert_eq!(extract(&doc, strategy), extract(&doc, strategy));
        }
    }
}
