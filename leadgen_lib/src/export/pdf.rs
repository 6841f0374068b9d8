use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use super::latin1::to_latin1_safe;
use super::ExportError;
use crate::lead::Lead;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 5.5;
const WRAP_CHARS: usize = 95;
const BODY_SIZE: f32 = 10.0;
const HEADING_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 16.0;

/// One laid-out line of the report.
#[derive(Clone, Debug, PartialEq)]
pub enum PdfLine {
    Title(String),
    Heading(String),
    Body(String),
    Blank,
}

impl PdfLine {
    fn height(&self) -> f32 {
        match self {
            Self::Title(_) => LINE_HEIGHT_MM * 2.0,
            _ => LINE_HEIGHT_MM,
        }
    }
}

/// Lays out the report as pages of lines.
///
/// Every lead becomes a heading plus wrapped body lines for website, email,
/// tags, tech stack, traffic, score and pitch. A new page starts whenever the
/// next line would cross the bottom margin. All text is Latin-1 safe.
pub fn layout_report(title: &str, leads: &[Lead]) -> Vec<Vec<PdfLine>> {
    let mut lines = vec![PdfLine::Title(to_latin1_safe(title)), PdfLine::Blank];
    for lead in leads {
        lines.push(PdfLine::Heading(to_latin1_safe(&format!(
            "{}. {}",
            lead.rank, lead.company
        ))));
        let fields = [
            format!("Website: {}", lead.website),
            format!("Email: {}", lead.email),
            format!("Tags: {}", lead.tags.join(", ")),
            format!("Tech stack: {}", lead.tech_stack.join(", ")),
            format!("Traffic: {}", lead.traffic),
            format!("Score: {}", lead.score),
            format!("Pitch: {}", lead.pitch),
        ];
        for field in fields {
            for wrapped in wrap_text(&to_latin1_safe(&field), WRAP_CHARS) {
                lines.push(PdfLine::Body(wrapped));
            }
        }
        lines.push(PdfLine::Blank);
    }
    paginate(lines)
}

fn paginate(lines: Vec<PdfLine>) -> Vec<Vec<PdfLine>> {
    let usable = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;
    let mut pages = Vec::new();
    let mut current = Vec::new();
    let mut used = 0.0;
    for line in lines {
        let h = line.height();
        if used + h > usable && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            used = 0.0;
        }
        used += h;
        current.push(line);
    }
    if !current.is_empty() {
        pages.push(current);
    }
    pages
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > width {
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            let split_at = word
                .char_indices()
                .nth(width)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            let rest = word.split_off(split_at);
            out.push(word);
            word = rest;
        }
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() || out.is_empty() {
        out.push(line);
    }
    out
}

/// Renders the report to PDF bytes using the built-in Helvetica fonts.
pub fn leads_to_pdf(title: &str, leads: &[Lead]) -> Result<Vec<u8>, ExportError> {
    let pages = layout_report(title, leads);
    let (doc, first_page, first_layer) = PdfDocument::new(
        to_latin1_safe(title),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1".to_string(),
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    for (idx, page_lines) in pages.iter().enumerate() {
        let layer = if idx == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };
        draw_page(&layer, page_lines, &regular, &bold);
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn draw_page(
    layer: &PdfLayerReference,
    lines: &[PdfLine],
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    for line in lines {
        y -= line.height();
        match line {
            PdfLine::Title(text) => layer.use_text(text, TITLE_SIZE, Mm(MARGIN_MM), Mm(y), bold),
            PdfLine::Heading(text) => {
                layer.use_text(text, HEADING_SIZE, Mm(MARGIN_MM), Mm(y), bold)
            }
            PdfLine::Body(text) => {
                layer.use_text(text, BODY_SIZE, Mm(MARGIN_MM + 4.0), Mm(y), regular)
            }
            PdfLine::Blank => {}
        }
    }
}

/// Writes the PDF report to `path`.
pub fn write_pdf(path: &Path, title: &str, leads: &[Lead]) -> Result<(), ExportError> {
    let bytes = leads_to_pdf(title, leads)?;
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}
