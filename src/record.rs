use std::fmt;

pub const ENGLISH: &str = "English";

/// Naming-order convention of a language's biographical titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    Yes,
    No,
    Unknown,
}

impl NameOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            NameOrder::Yes => "Yes",
            NameOrder::No => "No",
            NameOrder::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NameOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row: an entry's name in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub name_english: String,
    pub full_name_english: String,
    pub source_url: String,
    pub language: String,
    pub name: String,
    pub full_name: String,
    pub familiar_script: bool,
    pub given_name_first: NameOrder,
    pub source_list: Option<String>,
}
