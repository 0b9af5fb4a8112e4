mod export;
mod fetch;
mod languages;
mod parser;
mod pipeline;
mod record;
mod settings;
mod sources;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;

use fetch::HttpFetcher;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "name_translations",
    about = "Names of historical figures across Wikipedia languages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape list pages, follow every entry and write the CSV
    Run {
        /// Output file (default from settings)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Only scrape this list (repeatable, e.g. -s "List of English monarchs")
        #[arg(short, long = "source")]
        sources: Vec<String>,
    },
    /// Show configured list pages and their link strategy
    Sources,
    /// Print the display name a page title normalizes to
    Normalize { title: String },
    /// Look up a Wikipedia language code
    Language { code: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { out, sources: names } => {
            let settings = Settings::load()?;
            let selected = sources::select(settings.sources(), &names)?;
            if selected.is_empty() {
                println!("No sources configured.");
                return Ok(());
            }
            let out = out.unwrap_or_else(|| settings.output.clone());
            let with_source = sources::distinct_names(&selected) > 1;

            info!(
                "Scraping {} list pages from {}",
                selected.len(),
                settings.base_url
            );
            let started = Instant::now();
            let fetcher = HttpFetcher::new(&settings)?;
            let report = pipeline::run(&fetcher, &settings.base_url, &selected).await;

            export::write_csv(&out, &report.records, with_source)?;
            let s = &report.stats;
            println!(
                "Wrote {} rows to {} ({} entries, {} variants, {} skipped links)",
                report.records.len(),
                out.display(),
                s.entries,
                s.variants,
                s.variants_skipped + s.entries_untitled,
            );
            if s.sources_failed > 0 || s.entry_pages_failed > 0 {
                println!(
                    "Failed fetches: {} list pages, {} entry pages",
                    s.sources_failed, s.entry_pages_failed
                );
            }
            info!(
                "Scraped {} list pages in {:.1}s",
                s.sources_fetched,
                started.elapsed().as_secs_f64()
            );
            Ok(())
        }
        Commands::Sources => {
            let settings = Settings::load()?;
            let all = settings.sources();
            println!("{:<22} | {:<50} | URL", "Strategy", "Name");
            println!("{}", "-".repeat(110));
            for s in &all {
                println!("{:<22} | {:<50} | {}", s.strategy, s.name, s.url);
            }
            println!("\n{} list pages", all.len());
            Ok(())
        }
        Commands::Normalize { title } => {
            let t = parser::title::normalize(&title);
            println!("Full name:  {}", t.full);
            println!("Short name: {}", t.short);
            Ok(())
        }
        Commands::Language { code } => match languages::lookup(&code) {
            Some(lang) => {
                println!("Language:         {}", lang.name);
                println!("Familiar script:  {}", if lang.familiar_script { "Yes" } else { "No" });
                println!("Given name first: {}", lang.given_name_first);
                Ok(())
            }
            None => Err(anyhow::anyhow!(
                "Unknown language code {:?} ({} codes known)",
                code,
                languages::len()
            )),
        },
    }
}
