use serde::{Deserialize, Serialize};

use super::ExportError;
use crate::lead::Lead;

/// Which lead fields a CSV export carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CsvColumns {
    /// Every visible field, including pitch and description.
    #[default]
    Full,
    /// Omits the long free-text fields (pitch, description).
    Compact,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LeadCsvRow {
    #[serde(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Score")]
    pub score: u8,
    #[serde(rename = "Pitch")]
    pub pitch: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "Twitter")]
    pub twitter: String,
    #[serde(rename = "Description")]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompactLeadCsvRow {
    #[serde(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Score")]
    pub score: u8,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "Twitter")]
    pub twitter: String,
}

// -- Row builders --

pub fn build_csv_rows(leads: &[Lead]) -> Vec<LeadCsvRow> {
    leads
        .iter()
        .map(|l| LeadCsvRow {
            rank: l.rank,
            company: l.company.clone(),
            website: l.website.clone(),
            email: l.email.clone(),
            tags: l.tags.join("; "),
            score: l.score,
            pitch: l.pitch.clone(),
            linkedin: l.linkedin.clone(),
            twitter: l.twitter.clone(),
            description: l.description.clone(),
        })
        .collect()
}

pub fn build_compact_rows(leads: &[Lead]) -> Vec<CompactLeadCsvRow> {
    leads
        .iter()
        .map(|l| CompactLeadCsvRow {
            rank: l.rank,
            company: l.company.clone(),
            website: l.website.clone(),
            email: l.email.clone(),
            tags: l.tags.join("; "),
            score: l.score,
            linkedin: l.linkedin.clone(),
            twitter: l.twitter.clone(),
        })
        .collect()
}

// -- Writers --

/// Writes leads as UTF-8 CSV with a header row. Quoting follows RFC 4180.
pub fn write_csv<W: std::io::Write>(
    writer: W,
    leads: &[Lead],
    columns: CsvColumns,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    match columns {
        CsvColumns::Full => {
            for row in build_csv_rows(leads) {
                wtr.serialize(row)?;
            }
        }
        CsvColumns::Compact => {
            for row in build_compact_rows(leads) {
                wtr.serialize(row)?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Renders leads to an in-memory CSV string.
pub fn leads_to_csv(leads: &[Lead], columns: CsvColumns) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, leads, columns)?;
    String::from_utf8(buf).map_err(|e| ExportError::Io(std::io::Error::other(e)))
}
