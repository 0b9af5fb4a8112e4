use std::collections::HashSet;

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fetch::Fetch;
use crate::languages;
use crate::parser::{self, interlanguage::LanguageLink, title};
use crate::record::{EntryRecord, NameOrder, ENGLISH};
use crate::sources::Source;

/// Why a single link produced no row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("link has no title")]
    MissingTitle,
    #[error("link has no lang attribute")]
    MissingLang,
    #[error("unknown language code {0:?}")]
    UnknownLanguage(String),
    #[error("{0} already recorded for this entry")]
    DuplicateLanguage(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub sources_fetched: usize,
    pub sources_failed: usize,
    pub entries: usize,
    pub entries_untitled: usize,
    pub entry_pages_failed: usize,
    pub variants: usize,
    pub variants_skipped: usize,
}

pub struct RunReport {
    pub records: Vec<EntryRecord>,
    pub stats: RunStats,
}

/// Full run: canonical English rows first, then every entry's language variants.
pub async fn run<F: Fetch>(fetcher: &F, base_url: &str, sources: &[Source]) -> RunReport {
    let mut stats = RunStats::default();

    let mut records = collect_canonical(fetcher, base_url, sources, &mut stats).await;
    let variants = expand_variants(fetcher, &records, &mut stats).await;
    records.extend(variants);

    info!(
        "Run finished: {} entries, {} variants ({} skipped), {}/{} sources ok, {} entry pages failed",
        stats.entries,
        stats.variants,
        stats.variants_skipped,
        stats.sources_fetched,
        stats.sources_fetched + stats.sources_failed,
        stats.entry_pages_failed,
    );
    RunReport { records, stats }
}

// ── Pass 1: list pages → canonical records ──

/// Scrape every source page in order and build one English record per
/// distinct entry URL. The seen-set spans all sources.
pub async fn collect_canonical<F: Fetch>(
    fetcher: &F,
    base_url: &str,
    sources: &[Source],
    stats: &mut RunStats,
) -> Vec<EntryRecord> {
    let base = base_url.trim_end_matches('/');
    let mut seen: HashSet<String> = HashSet::new();
    let mut canonical = Vec::new();

    for source in sources {
        let html = match fetcher.fetch(&source.url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Skipping source {}: {:#}", source.name, e);
                stats.sources_failed += 1;
                continue;
            }
        };
        stats.sources_fetched += 1;

        let candidates = parser::list_page_links(&html, source.strategy);
        let before = canonical.len();

        for link in candidates {
            let url = format!("{}{}", base, link.href);
            // marked seen even when untitled, so a later titled copy is ignored too
            if !seen.insert(url.clone()) {
                continue;
            }
            match canonical_record(url, link.title.as_deref(), &source.name) {
                Ok(record) => canonical.push(record),
                Err(reason) => {
                    debug!("Dropped {} from {}: {}", link.href, source.name, reason);
                    stats.entries_untitled += 1;
                }
            }
        }

        info!(
            "{} ({}): {} new entries",
            source.name,
            source.strategy,
            canonical.len() - before
        );
    }

    stats.entries = canonical.len();
    canonical
}

fn canonical_record(
    source_url: String,
    raw_title: Option<&str>,
    source: &str,
) -> Result<EntryRecord, SkipReason> {
    let t = title::normalize(raw_title.ok_or(SkipReason::MissingTitle)?);
    Ok(EntryRecord {
        name_english: t.short.clone(),
        full_name_english: t.full.clone(),
        source_url,
        language: ENGLISH.to_string(),
        name: t.short,
        full_name: t.full,
        familiar_script: true,
        given_name_first: NameOrder::Yes,
        source_list: Some(source.to_string()),
    })
}

// ── Pass 2: entry pages → language variants ──

/// Fetch each canonical entry's page and emit one record per recognised
/// interlanguage link. A failed page only costs that entry its variants.
pub async fn expand_variants<F: Fetch>(
    fetcher: &F,
    canonical: &[EntryRecord],
    stats: &mut RunStats,
) -> Vec<EntryRecord> {
    let pb = ProgressBar::new(canonical.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
    {
        pb.set_style(style.progress_chars("=> "));
    }

    let mut variants = Vec::new();

    for entry in canonical {
        pb.inc(1);
        let html = match fetcher.fetch(&entry.source_url).await {
            Ok(html) => html,
            Err(e) => {
                pb.suspend(|| warn!("No variants for {}: {:#}", entry.source_url, e));
                stats.entry_pages_failed += 1;
                continue;
            }
        };

        let mut recorded: HashSet<&'static str> = HashSet::from([ENGLISH]);
        for link in parser::entry_page_languages(&html) {
            match variant_record(entry, &link, &mut recorded) {
                Ok(record) => {
                    variants.push(record);
                    stats.variants += 1;
                }
                Err(reason) => {
                    debug!("Skipped variant of {}: {}", entry.source_url, reason);
                    stats.variants_skipped += 1;
                }
            }
        }
    }

    pb.finish_and_clear();
    variants
}

/// Build the row for one interlanguage link of `canonical`.
/// `recorded` holds the languages this entry already has a row for.
pub fn variant_record(
    canonical: &EntryRecord,
    link: &LanguageLink,
    recorded: &mut HashSet<&'static str>,
) -> Result<EntryRecord, SkipReason> {
    let raw_title = link.title.as_deref().ok_or(SkipReason::MissingTitle)?;
    let code = link.lang.as_deref().ok_or(SkipReason::MissingLang)?;
    let language =
        languages::lookup(code).ok_or_else(|| SkipReason::UnknownLanguage(code.to_string()))?;
    if !recorded.insert(language.name) {
        return Err(SkipReason::DuplicateLanguage(language.name.to_string()));
    }

    let t = title::normalize(raw_title);
    Ok(EntryRecord {
        name_english: canonical.name_english.clone(),
        full_name_english: canonical.full_name_english.clone(),
        source_url: canonical.source_url.clone(),
        language: language.name.to_string(),
        name: t.short,
        full_name: t.full,
        familiar_script: language.familiar_script,
        given_name_first: language.given_name_first,
        source_list: canonical.source_list.clone(),
    })
}
