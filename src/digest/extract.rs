//! Text extraction from document containers

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};

/// Extracts paragraph text from a `.docx` file. Paragraphs are joined
/// with a newline; empty paragraphs are preserved.
pub fn docx_text(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;
    paragraphs_from_xml(&xml)
}

/// Collects the text runs (`w:t`) of every paragraph (`w:p`) in a
/// WordprocessingML document body.
fn paragraphs_from_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(|e| Error::Xml(e.to_string()))? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) if e.name().as_ref() == b"w:t" => in_text_run = false,
            Event::End(e) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(std::mem::take(&mut current));
            }
            Event::Empty(e) if e.name().as_ref() == b"w:p" => {
                paragraphs.push(String::new());
            }
            Event::Text(t) if in_text_run => {
                let text = t.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                current.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Extracts the text content of a `.pdf` file.
pub fn pdf_text(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path).map_err(|e| Error::Pdf(e.to_string()))
}
