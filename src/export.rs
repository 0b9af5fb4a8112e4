use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::EntryRecord;

const BOM: &[u8] = b"\xEF\xBB\xBF";

const HEADERS: [&str; 8] = [
    "Name (English)",
    "Full Name (English)",
    "URL",
    "Language",
    "Name",
    "Full Name",
    "Familiar-ish Script",
    "Given Name Usually First",
];
const SOURCE_HEADER: &str = "Source";

/// Write all records to `path` as UTF-8 (with BOM) CSV.
pub fn write_csv(path: &Path, records: &[EntryRecord], with_source: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_csv_to(&mut out, records, with_source)?;
    out.flush()?;
    Ok(())
}

pub fn write_csv_to<W: Write>(out: &mut W, records: &[EntryRecord], with_source: bool) -> Result<()> {
    out.write_all(BOM)?;

    let mut wtr = csv::Writer::from_writer(out);
    let mut header: Vec<&str> = HEADERS.to_vec();
    if with_source {
        header.push(SOURCE_HEADER);
    }
    wtr.write_record(&header)?;

    for r in records {
        let mut row: Vec<&str> = vec![
            r.name_english.as_str(),
            r.full_name_english.as_str(),
            r.source_url.as_str(),
            r.language.as_str(),
            r.name.as_str(),
            r.full_name.as_str(),
            yes_no(r.familiar_script),
            r.given_name_first.as_str(),
        ];
        if with_source {
            row.push(r.source_list.as_deref().unwrap_or(""));
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NameOrder;

    fn record(lang: &str, name: &str, full: &str, source: Option<&str>) -> EntryRecord {
        EntryRecord {
            name_english: "Alfred".into(),
            full_name_english: "Alfred the Great".into(),
            source_url: "https://en.wikipedia.org/wiki/Alfred_the_Great".into(),
            language: lang.into(),
            name: name.into(),
            full_name: full.into(),
            familiar_script: lang != "Japanese",
            given_name_first: if lang == "Japanese" { NameOrder::Unknown } else { NameOrder::Yes },
            source_list: source.map(str::to_string),
        }
    }

    fn render(records: &[EntryRecord], with_source: bool) -> String {
        let mut buf = Vec::new();
        write_csv_to(&mut buf, records, with_source).unwrap();
        assert!(buf.starts_with(BOM));
        String::from_utf8(buf[BOM.len()..].to_vec()).unwrap()
    }

    #[test]
    fn header_without_source() {
        let text = render(&[], false);
        assert_eq!(
            text,
            "Name (English),Full Name (English),URL,Language,Name,Full Name,Familiar-ish Script,Given Name Usually First\n"
        );
    }

    #[test]
    fn rows_in_order_with_source() {
        let records = vec![
            record("English", "Alfred", "Alfred the Great", Some("List of English monarchs")),
            record("Japanese", "アルフレッド大王", "アルフレッド大王", Some("List of English monarchs")),
        ];
        let text = render(&records, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(",Source"));
        assert_eq!(
            lines[1],
            "Alfred,Alfred the Great,https://en.wikipedia.org/wiki/Alfred_the_Great,English,Alfred,Alfred the Great,Yes,Yes,List of English monarchs"
        );
        assert_eq!(
            lines[2],
            "Alfred,Alfred the Great,https://en.wikipedia.org/wiki/Alfred_the_Great,Japanese,アルフレッド大王,アルフレッド大王,No,Unknown,List of English monarchs"
        );
    }

    #[test]
    fn commas_are_quoted() {
        let records = vec![record("Croatian", "Alfred", "Alfred, kralj", None)];
        let text = render(&records, false);
        assert!(text.contains("\"Alfred, kralj\""));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.csv");
        write_csv(&path, &[record("English", "Alfred", "Alfred the Great", None)], false).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(BOM));
        assert_eq!(String::from_utf8_lossy(&bytes).lines().count(), 2);
    }
}
