use anyhow::Result;
use leadgen_lib::export::{write_csv, CsvColumns};
use leadgen_lib::Lead;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    /// Unknown names fall back to the table layout.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "md" | "markdown" => OutputFormat::Markdown,
            "xml" => OutputFormat::Xml,
            _ => OutputFormat::Table,
        }
    }
}

/// How leads are laid out in table mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewStyle {
    Table,
    Cards,
}

#[derive(Tabled)]
struct LeadRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Website")]
    website: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Score")]
    score: u8,
    #[tabled(rename = "Traffic")]
    traffic: String,
}

#[derive(Tabled)]
struct FavoriteRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Website")]
    website: String,
    #[tabled(rename = "Score")]
    score: u8,
}

// -- Row builders --

fn build_lead_rows(leads: &[Lead]) -> Vec<LeadRow> {
    leads
        .iter()
        .map(|l| LeadRow {
            rank: l.rank,
            company: l.company.clone(),
            website: l.website.clone(),
            email: l.email.clone(),
            tags: l.tags.join(", "),
            score: l.score,
            traffic: l.traffic.clone(),
        })
        .collect()
}

fn build_favorite_rows(favorites: &[Lead]) -> Vec<FavoriteRow> {
    favorites
        .iter()
        .enumerate()
        .map(|(idx, l)| FavoriteRow {
            position: idx + 1,
            company: l.company.clone(),
            website: l.website.clone(),
            score: l.score,
        })
        .collect()
}

// -- Cards --

/// One block of text per lead, carrying every visible field.
pub fn render_cards(leads: &[Lead]) -> String {
    let mut out = String::new();
    for lead in leads {
        out.push_str(&format!("#{} {} ({})\n", lead.rank, lead.company, lead.score));
        out.push_str(&format!("  Website:     {}\n", lead.website));
        out.push_str(&format!("  Email:       {}\n", lead.email));
        if let Some(logo) = &lead.logo {
            out.push_str(&format!("  Logo:        {}\n", logo));
        }
        out.push_str(&format!("  Tags:        {}\n", lead.tags.join(", ")));
        out.push_str(&format!("  LinkedIn:    {}\n", lead.linkedin));
        out.push_str(&format!("  Twitter:     {}\n", lead.twitter));
        out.push_str(&format!("  Tech stack:  {}\n", display_list(&lead.tech_stack)));
        out.push_str(&format!("  Traffic:     {}\n", lead.traffic));
        out.push_str(&format!("  Description: {}\n", lead.description));
        out.push_str(&format!("  Pitch:       {}\n", lead.pitch));
        out.push_str("  Cold email:\n");
        for line in lead.cold_email.lines() {
            out.push_str(&format!("    {}\n", line));
        }
        out.push('\n');
    }
    out
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "N/A".to_string()
    } else {
        items.join(", ")
    }
}

// -- Table output --

pub fn print_leads_table(leads: &[Lead]) {
    println!("{}", Table::new(build_lead_rows(leads)));
}

pub fn print_leads_cards(leads: &[Lead]) {
    print!("{}", render_cards(leads));
}

pub fn print_favorites_table(favorites: &[Lead]) {
    println!("{}", Table::new(build_favorite_rows(favorites)));
}

// -- Markdown output --

pub fn print_leads_markdown(leads: &[Lead]) {
    let mut table = Table::new(build_lead_rows(leads));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_leads_csv(leads: &[Lead]) -> Result<()> {
    write_csv(std::io::stdout(), leads, CsvColumns::Full)?;
    Ok(())
}

// -- XML output --

pub fn print_leads_xml(leads: &[Lead]) -> Result<()> {
    println!("{}", xml_output::leads_to_xml(leads)?);
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
