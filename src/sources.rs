use std::fmt;

use serde::Deserialize;

/// How candidate entry links are picked out of a list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Anchors in the first cell of each table row.
    FirstColumn,
    /// Every anchor inside a `wikitable`.
    AllTableLinks,
    /// The first anchor of each list item.
    FirstListItemLink,
    /// Every anchor on the page.
    AllLinks,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::FirstColumn => "first-column",
            Strategy::AllTableLinks => "all-table-links",
            Strategy::FirstListItemLink => "first-list-item-link",
            Strategy::AllLinks => "all-links",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One list page to scrape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
    pub strategy: Strategy,
}

impl Source {
    fn wiki(page: &str, strategy: Strategy) -> Self {
        Source {
            name: page.replace('_', " "),
            url: format!("https://en.wikipedia.org/wiki/{}", page),
            strategy,
        }
    }
}

const FIRST_COLUMN: &[&str] = &[
    "List_of_Belgian_monarchs",
    "List_of_Catholic_saints",
    "List_of_Danish_monarchs",
    "List_of_English_monarchs",
    "List_of_monarchs_of_Georgia",
    "List_of_Norwegian_monarchs",
    "List_of_Portuguese_monarchs",
    "List_of_Roman_women",
    "List_of_rulers_of_Iceland",
    "List_of_rulers_of_Monaco",
    "List_of_saints",
    "List_of_Spanish_monarchs",
    "List_of_sultans_of_the_Ottoman_Empire",
];

const ALL_TABLE_LINKS: &[&str] = &[
    "List_of_Coptic_Orthodox_popes_of_Alexandria",
    "List_of_French_monarchs",
    "List_of_German_monarchs",
    "List_of_popes",
];

const FIRST_LIST_ITEM_LINK: &[&str] = &[
    "List_of_female_hereditary_rulers",
    "List_of_female_mystics",
    "List_of_female_scientists_before_the_20th_century",
    "List_of_prostitutes_and_courtesans",
    "List_of_women_in_the_Bible",
    "List_of_Roman_women",
    "List_of_Scottish_royal_mistresses",
    "List_of_Swedish_royal_mistresses",
    "List_of_women_warriors_in_folklore",
    "List_of_women_who_led_a_revolt_or_rebellion",
    "Women_as_theological_figures",
];

const ALL_LINKS: &[&str] = &["List_of_major_biblical_figures"];

/// Built-in list pages, grouped by strategy in scrape order.
pub fn catalog() -> Vec<Source> {
    let groups = [
        (FIRST_COLUMN, Strategy::FirstColumn),
        (ALL_TABLE_LINKS, Strategy::AllTableLinks),
        (FIRST_LIST_ITEM_LINK, Strategy::FirstListItemLink),
        (ALL_LINKS, Strategy::AllLinks),
    ];
    groups
        .iter()
        .flat_map(|(pages, strategy)| pages.iter().map(|p| Source::wiki(p, *strategy)))
        .collect()
}

/// Keep only the sources whose name matches one of `names`, in catalog order.
/// Errors on a name that matches nothing.
pub fn select(sources: Vec<Source>, names: &[String]) -> anyhow::Result<Vec<Source>> {
    if names.is_empty() {
        return Ok(sources);
    }
    for name in names {
        if !sources.iter().any(|s| s.name.eq_ignore_ascii_case(name)) {
            anyhow::bail!("Unknown source: {}", name);
        }
    }
    Ok(sources
        .into_iter()
        .filter(|s| names.iter().any(|n| s.name.eq_ignore_ascii_case(n)))
        .collect())
}

/// Number of distinct source names; decides whether output carries a `Source` column.
pub fn distinct_names(sources: &[Source]) -> usize {
    let mut names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::value::{Error, StrDeserializer};
    use serde::de::IntoDeserializer;

    #[test]
    fn catalog_shape() {
        let all = catalog();
        assert_eq!(all.len(), 29);
        assert_eq!(distinct_names(&all), 28);
        assert_eq!(all[0].name, "List of Belgian monarchs");
        assert_eq!(all[0].url, "https://en.wikipedia.org/wiki/List_of_Belgian_monarchs");
        assert_eq!(all.last().map(|s| s.strategy), Some(Strategy::AllLinks));
    }

    #[test]
    fn roman_women_scraped_twice() {
        let roman: Vec<_> = catalog()
            .into_iter()
            .filter(|s| s.name == "List of Roman women")
            .map(|s| s.strategy)
            .collect();
        assert_eq!(roman, vec![Strategy::FirstColumn, Strategy::FirstListItemLink]);
    }

    #[test]
    fn select_by_name() {
        let picked = select(catalog(), &["list of english monarchs".to_string()]).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].strategy, Strategy::FirstColumn);
        assert_eq!(distinct_names(&picked), 1);
    }

    #[test]
    fn select_unknown_fails() {
        assert!(select(catalog(), &["List of pirates".to_string()]).is_err());
    }

    #[test]
    fn strategy_names() {
        for s in [
            Strategy::FirstColumn,
            Strategy::AllTableLinks,
            Strategy::FirstListItemLink,
            Strategy::AllLinks,
        ] {
            let de: StrDeserializer<'_, Error> = s.as_str().into_deserializer();
            let parsed = Strategy::deserialize(de).unwrap();
            assert_eq!(parsed, s);
        }
    }
}
