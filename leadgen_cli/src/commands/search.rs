//! The `search` subcommand: turns a keyword into scored, enriched leads.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use leadgen_lib::enrich::load_icp_rules;
use leadgen_lib::export::{write_csv, write_pdf, CsvColumns};
use leadgen_lib::types::PageContent;
use leadgen_lib::validation;
use leadgen_lib::{
    run_pipeline, AssembleOptions, CachedClient, FavoritesStore, FixedEnrichment, Lead,
    LeadRequest, PageFetcher, PageSource, PipelineReport, RandomEnrichment, SimulatedEnrichment,
    SuggestQuery,
};

use crate::output::{
    print_favorites_table, print_json, print_leads_cards, print_leads_csv, print_leads_markdown,
    print_leads_table, print_leads_xml, OutputFormat, ViewStyle,
};

/// Arguments for the `search` subcommand.
#[derive(Args)]
pub struct SearchArgs {
    /// Industry keyword or company name fragment
    pub keyword: String,

    /// Maximum number of suggestions to enrich (1-25)
    #[arg(long, default_value = "10")]
    pub limit: usize,

    /// Drop leads scoring below this value (0-100)
    #[arg(long, default_value = "0")]
    pub min_score: u8,

    /// Result layout in table mode: table or cards
    #[arg(long, default_value = "table")]
    pub view: String,

    /// ICP tagging: all (every matching rule) or first (first match only)
    #[arg(long, default_value = "all")]
    pub tags: String,

    /// Homepages fetched in parallel (1-16); ranks stay in suggestion order
    #[arg(long, default_value = "1")]
    pub concurrency: usize,

    /// Seed for the illustrative tech stack and traffic values
    #[arg(long, conflicts_with = "no_simulated")]
    pub seed: Option<u64>,

    /// Leave tech stack empty and traffic as N/A
    #[arg(long)]
    pub no_simulated: bool,

    /// Write the displayed leads to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Omit pitch and description from the CSV file
    #[arg(long, requires = "csv")]
    pub compact_csv: bool,

    /// Write the displayed leads to a PDF report
    #[arg(long)]
    pub pdf: Option<PathBuf>,

    /// Save the lead with this rank to favorites (repeatable)
    #[arg(long = "save", value_name = "RANK")]
    pub save: Vec<usize>,
}

/// Page source that advances a progress bar once per fetched homepage.
struct ProgressPages<'a> {
    inner: &'a PageFetcher,
    bar: ProgressBar,
}

impl PageSource for ProgressPages<'_> {
    async fn fetch(&self, domain: &str) -> PageContent {
        let page = self.inner.fetch_page(domain).await;
        self.bar.inc(1);
        page
    }
}

pub async fn run(
    args: &SearchArgs,
    client: &CachedClient,
    fetcher: &PageFetcher,
    favorites: &FavoritesStore,
    session: &str,
    format: &OutputFormat,
) -> Result<()> {
    let keyword = validation::validate_keyword(&args.keyword)?;
    let limit = validation::validate_limit(args.limit)?;
    let min_score = validation::validate_min_score(args.min_score)?;
    let concurrency = validation::validate_concurrency(args.concurrency)?;
    let tag_policy = validation::validate_tag_policy(&args.tags)?;
    let view = match args.view.as_str() {
        "table" => ViewStyle::Table,
        "cards" => ViewStyle::Cards,
        other => bail!("Invalid view '{}': expected table or cards", other),
    };

    let options = AssembleOptions::new(load_icp_rules()?)
        .with_tag_policy(tag_policy)
        .with_concurrency(concurrency);
    let request = LeadRequest {
        query: SuggestQuery::new(&keyword).with_limit(limit),
        min_score,
    };
    let simulated: Box<dyn SimulatedEnrichment> = if args.no_simulated {
        Box::new(FixedEnrichment::default())
    } else if let Some(seed) = args.seed {
        Box::new(RandomEnrichment::with_seed(seed))
    } else {
        Box::new(RandomEnrichment::new())
    };

    let bar = if *format == OutputFormat::Table {
        let pb = ProgressBar::new(limit as u64);
        pb.set_style(ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}",
        )?);
        pb.set_message("fetching homepages...");
        pb
    } else {
        ProgressBar::hidden()
    };
    let pages = ProgressPages {
        inner: fetcher,
        bar: bar.clone(),
    };

    let report = run_pipeline(
        client,
        &pages,
        simulated.as_ref(),
        &options,
        &request,
        |lead: &Lead| bar.set_message(lead.company.clone()),
    )
    .await;
    bar.finish_and_clear();

    if !present_report(args, &report, view, format)? {
        return Ok(());
    }

    if !args.save.is_empty() {
        save_favorites(&args.save, &report.leads, favorites, session);
        let saved = favorites.list(session);
        match format {
            OutputFormat::Json => print_json(&saved),
            _ => {
                eprintln!("Favorites ({}):", saved.len());
                print_favorites_table(&saved);
            }
        }
    }

    Ok(())
}

/// Renders the report and writes any requested exports.
///
/// An empty report only prints the no-leads message (plus `[]` in JSON mode)
/// and writes no files. Returns whether any leads were shown.
fn present_report(
    args: &SearchArgs,
    report: &PipelineReport,
    view: ViewStyle,
    format: &OutputFormat,
) -> Result<bool> {
    if report.is_empty() {
        if *format == OutputFormat::Json {
            print_json(&report.leads);
        }
        eprintln!("{}", empty_message(&report.keyword));
        return Ok(false);
    }

    render(report, view, format)?;
    export(args, report)?;
    Ok(true)
}

fn render(report: &PipelineReport, view: ViewStyle, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            match view {
                ViewStyle::Table => print_leads_table(&report.leads),
                ViewStyle::Cards => print_leads_cards(&report.leads),
            }
            eprintln!(
                "{} of {} leads shown for '{}'",
                report.leads.len(),
                report.total,
                report.keyword
            );
        }
        OutputFormat::Json => print_json(&report.leads),
        OutputFormat::Csv => print_leads_csv(&report.leads)?,
        OutputFormat::Markdown => print_leads_markdown(&report.leads),
        OutputFormat::Xml => print_leads_xml(&report.leads)?,
    }
    Ok(())
}

fn export(args: &SearchArgs, report: &PipelineReport) -> Result<()> {
    if let Some(ref path) = args.csv {
        let columns = if args.compact_csv {
            CsvColumns::Compact
        } else {
            CsvColumns::Full
        };
        let file = BufWriter::new(File::create(path)?);
        write_csv(file, &report.leads, columns)?;
        eprintln!("Wrote {} leads to {}", report.leads.len(), path.display());
    }
    if let Some(ref path) = args.pdf {
        write_pdf(path, &pdf_title(&report.keyword), &report.leads)?;
        eprintln!("Wrote PDF report to {}", path.display());
    }
    Ok(())
}

/// Appends each displayed lead whose rank was requested, in request order.
fn save_favorites(ranks: &[usize], leads: &[Lead], favorites: &FavoritesStore, session: &str) {
    for &rank in ranks {
        match leads.iter().find(|lead| lead.rank == rank) {
            Some(lead) => {
                favorites.save(session, lead.clone());
            }
            None => tracing::warn!("No displayed lead with rank {}, nothing saved", rank),
        }
    }
}

fn empty_message(keyword: &str) -> String {
    format!(
        "No leads found for '{}'. Try another keyword or lower the minimum score.",
        keyword
    )
}

fn pdf_title(keyword: &str) -> String {
    format!("Lead report: {}", keyword)
}
