use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Main document part inside a `.docx` package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Plain text of a Word document: one line per paragraph, runs concatenated.
pub fn docx_text(data: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).context("Not a DOCX package")?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .with_context(|| format!("DOCX package has no {DOCUMENT_PART}"))?
        .read_to_string(&mut xml)
        .context("DOCX document part is not UTF-8")?;

    document_text(&xml)
}

/// Collects `w:t` runs; `w:p` ends a line, `w:tab` and `w:br` map to whitespace.
fn document_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event().context("Malformed DOCX document XML")? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => {
                text.push_str(&t.unescape().context("Bad entity in DOCX text")?);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use super::*;

    /// Minimal `.docx` package holding `body` as the document part.
    pub(crate) fn docx_with_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_and_runs() {
        let data = docx_with_body(
            "<w:p><w:r><w:t>Senior </w:t></w:r><w:r><w:t>Data Analyst</w:t></w:r></w:p>\
             <w:p><w:r><w:t>SQL</w:t><w:tab/><w:t>R&amp;D</w:t></w:r></w:p>",
        );
        let text = docx_text(&data).unwrap();
        assert_eq!(text, "Senior Data Analyst\nSQL\tR&D\n");
    }

    #[test]
    fn test_instruction_text_is_ignored() {
        let data = docx_with_body(
            "<w:p><w:r><w:instrText>HYPERLINK x</w:instrText><w:t>Python</w:t></w:r></w:p>",
        );
        assert_eq!(docx_text(&data).unwrap(), "Python\n");
    }

    #[test]
    fn test_not_a_zip() {
        assert!(docx_text(b"plain words").is_err());
    }

    #[test]
    fn test_zip_without_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("readme.txt", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        let data = writer.finish().unwrap().into_inner();

        let err = docx_text(&data).unwrap_err();
        assert!(format!("{err:#}").contains("word/document.xml"));
    }
}
