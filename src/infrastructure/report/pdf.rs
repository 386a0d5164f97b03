use crate::domain::errors::ExportError;
use crate::domain::ports::ReportExporter;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

/// A4 in PostScript points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 40.0;
pub const LINE_HEIGHT: f32 = 14.0;
pub const FONT_SIZE: f32 = 12.0;

/// Plain-text report renderer.
///
/// Each input line becomes exactly one drawn line at the left margin; long
/// lines are not wrapped. A new page starts once the baseline would drop
/// below the bottom margin.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReportExporter;

impl PdfReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Splits text into per-page line groups. Always yields at least one page.
    /// A single trailing newline does not start another line.
    pub fn paginate(text: &str) -> Vec<Vec<&str>> {
        let mut pages = vec![Vec::new()];
        let mut y = PAGE_HEIGHT - MARGIN;

        for line in text.lines() {
            if y < MARGIN {
                pages.push(Vec::new());
                y = PAGE_HEIGHT - MARGIN;
            }
            if let Some(page) = pages.last_mut() {
                page.push(line);
            }
            y -= LINE_HEIGHT;
        }

        pages
    }

    fn page_content(lines: &[&str]) -> Content {
        let mut operations = Vec::with_capacity(lines.len() * 4 + 2);
        let mut y = PAGE_HEIGHT - MARGIN;

        for line in lines {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]));
            operations.push(Operation::new("Td", vec![MARGIN.into(), y.into()]));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(to_latin1(line))],
            ));
            operations.push(Operation::new("ET", vec![]));
            y -= LINE_HEIGHT;
        }

        Content { operations }
    }
}

impl ReportExporter for PdfReportExporter {
    fn render(&self, text: &str) -> Result<Vec<u8>, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<ObjectId> = Vec::new();
        for lines in Self::paginate(text) {
            let encoded = Self::page_content(&lines)
                .encode()
                .map_err(|e| ExportError::Render(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id);
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids.iter().map(|id| Object::from(*id)).collect::<Vec<Object>>(),
            "Count" => kids.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ExportError::Render(e.to_string()))?;
        Ok(bytes)
    }
}

/// Printable Latin-1 only. Under WinAnsiEncoding 0x80..=0x9F draw
/// unrelated glyphs (€, ‚, ƒ), so C1 controls become '?' like everything else.
fn to_latin1(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| match u32::from(c) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            0x09 => b' ',
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_per_page() {
        let text = vec!["line"; 55].join("\n");
        assert_eq!(PdfReportExporter::paginate(&text).len(), 1);

        let text = vec!["line"; 56].join("\n");
        let pages = PdfReportExporter::paginate(&text);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 55);
        assert_eq!(pages[1].len(), 1);
    }

    #[test]
    fn test_trailing_newline_does_not_add_page() {
        let text = vec!["line"; 55].join("\n") + "\n";
        let pages = PdfReportExporter::paginate(&text);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 55);

        let bytes = PdfReportExporter::new().render(&text).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let pages = PdfReportExporter::paginate("Executive Summary\r\nRisks\r\n");
        assert_eq!(pages, vec![vec!["Executive Summary", "Risks"]]);
    }

    #[test]
    fn test_empty_text_single_page() {
        let pages = PdfReportExporter::paginate("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_latin1_fallback() {
        assert_eq!(to_latin1("Café ✓"), vec![b'C', b'a', b'f', 0xE9, b' ', b'?']);
        assert_eq!(to_latin1("a\tb"), b"a b".to_vec());
        // C1 controls and DEL
        assert_eq!(to_latin1("x\u{80}\u{9F}\u{7F}y"), b"x???y".to_vec());
        assert_eq!(to_latin1("\u{A0}\u{FF}"), vec![0xA0, 0xFF]);
    }
}
