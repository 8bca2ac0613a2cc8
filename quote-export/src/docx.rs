//! Word export: a WordprocessingML package authored part by part.
//!
//! Layout mirrors the print view: centered header, borderless From/To/meta
//! block, the line-item table, the totals block in calculation order
//! (subtotal, discount as a negative amount, tax, the two flat costs, grand
//! total), notes, centered footer. Only the three mandatory package parts
//! are emitted; Word fills in defaults for everything else.

use std::io::{self, Cursor, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use quote_core::calculations::{QuoteTotals, document_totals, format_currency};
use quote_core::models::QuoteDocument;

use crate::{ExportArtifact, filename::export_file_name};

const WORDPROCESSINGML_NS: &str =
    "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"</Types>"#,
);

const PACKAGE_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#,
);

/// Failures while producing the .docx package.
#[derive(Debug, Error)]
pub enum DocxExportError {
    #[error("document xml write failed: {0}")]
    Xml(#[from] io::Error),

    #[error("package write failed: {0}")]
    Package(#[from] zip::result::ZipError),
}

/// Builds the Word export for `document`.
pub fn export_docx(document: &QuoteDocument) -> Result<ExportArtifact, DocxExportError> {
    let document_xml = build_document_xml(document)?;
    let bytes = package(&document_xml)?;
    Ok(ExportArtifact {
        file_name: export_file_name(&document.quote_number, "docx"),
        bytes,
    })
}

/// Zips the parts into an OPC package.
fn package(document_xml: &[u8]) -> Result<Vec<u8>, DocxExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;
    zip.start_file("_rels/.rels", options)?;
    zip.write_all(PACKAGE_RELS_XML.as_bytes())?;
    zip.start_file("word/document.xml", options)?;
    zip.write_all(document_xml)?;

    Ok(zip.finish()?.into_inner())
}

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// One styled run of text inside a paragraph.
struct Run<'a> {
    text: &'a str,
    bold: bool,
}

impl<'a> Run<'a> {
    fn plain(text: &'a str) -> Self {
        Self { text, bold: false }
    }

    fn bold(text: &'a str) -> Self {
        Self { text, bold: true }
    }
}

#[derive(Default)]
struct ParagraphStyle {
    align: Option<&'static str>,
    /// Font size in half-points, applied to every run of the paragraph.
    size: Option<u32>,
}

fn write_paragraph(
    xml: &mut XmlWriter,
    style: &ParagraphStyle,
    runs: &[Run<'_>],
) -> io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:p")))?;

    if let Some(align) = style.align {
        xml.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        let mut jc = BytesStart::new("w:jc");
        jc.push_attribute(("w:val", align));
        xml.write_event(Event::Empty(jc))?;
        xml.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    }

    for run in runs {
        xml.write_event(Event::Start(BytesStart::new("w:r")))?;
        if run.bold || style.size.is_some() {
            xml.write_event(Event::Start(BytesStart::new("w:rPr")))?;
            if run.bold {
                xml.write_event(Event::Empty(BytesStart::new("w:b")))?;
            }
            if let Some(size) = style.size {
                let mut sz = BytesStart::new("w:sz");
                sz.push_attribute(("w:val", size.to_string().as_str()));
                xml.write_event(Event::Empty(sz))?;
            }
            xml.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        }
        let mut text = BytesStart::new("w:t");
        text.push_attribute(("xml:space", "preserve"));
        xml.write_event(Event::Start(text))?;
        xml.write_event(Event::Text(BytesText::new(run.text)))?;
        xml.write_event(Event::End(BytesEnd::new("w:t")))?;
        xml.write_event(Event::End(BytesEnd::new("w:r")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

fn text_paragraph(
    xml: &mut XmlWriter,
    text: &str,
) -> io::Result<()> {
    write_paragraph(xml, &ParagraphStyle::default(), &[Run::plain(text)])
}

fn bold_paragraph(
    xml: &mut XmlWriter,
    text: &str,
) -> io::Result<()> {
    write_paragraph(xml, &ParagraphStyle::default(), &[Run::bold(text)])
}

fn empty_paragraph(xml: &mut XmlWriter) -> io::Result<()> {
    write_paragraph(xml, &ParagraphStyle::default(), &[])
}

/// Multi-line free text becomes one paragraph per line.
fn multiline_paragraphs(
    xml: &mut XmlWriter,
    text: &str,
) -> io::Result<()> {
    for line in text.split('\n') {
        text_paragraph(xml, line)?;
    }
    Ok(())
}

struct TableStyle {
    /// Table width in fiftieths of a percent (5000 = full width).
    width_pct: u32,
    bordered: bool,
    align: Option<&'static str>,
}

fn start_table(
    xml: &mut XmlWriter,
    style: &TableStyle,
) -> io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:tbl")))?;
    xml.write_event(Event::Start(BytesStart::new("w:tblPr")))?;

    let mut width = BytesStart::new("w:tblW");
    width.push_attribute(("w:w", style.width_pct.to_string().as_str()));
    width.push_attribute(("w:type", "pct"));
    xml.write_event(Event::Empty(width))?;

    if let Some(align) = style.align {
        let mut jc = BytesStart::new("w:jc");
        jc.push_attribute(("w:val", align));
        xml.write_event(Event::Empty(jc))?;
    }

    if style.bordered {
        xml.write_event(Event::Start(BytesStart::new("w:tblBorders")))?;
        for side in ["w:top", "w:bottom", "w:left", "w:right", "w:insideH", "w:insideV"] {
            let mut border = BytesStart::new(side);
            border.push_attribute(("w:val", "single"));
            border.push_attribute(("w:sz", "4"));
            border.push_attribute(("w:space", "0"));
            border.push_attribute(("w:color", "auto"));
            xml.write_event(Event::Empty(border))?;
        }
        xml.write_event(Event::End(BytesEnd::new("w:tblBorders")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("w:tblPr")))?;
    Ok(())
}

fn end_table(xml: &mut XmlWriter) -> io::Result<()> {
    xml.write_event(Event::End(BytesEnd::new("w:tbl")))
}

fn start_row(xml: &mut XmlWriter) -> io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:tr")))
}

fn end_row(xml: &mut XmlWriter) -> io::Result<()> {
    xml.write_event(Event::End(BytesEnd::new("w:tr")))
}

/// Writes one cell; `content` supplies the paragraphs (at least one).
fn write_cell<F>(
    xml: &mut XmlWriter,
    top_border: bool,
    content: F,
) -> io::Result<()>
where
    F: FnOnce(&mut XmlWriter) -> io::Result<()>,
{
    xml.write_event(Event::Start(BytesStart::new("w:tc")))?;
    if top_border {
        xml.write_event(Event::Start(BytesStart::new("w:tcPr")))?;
        xml.write_event(Event::Start(BytesStart::new("w:tcBorders")))?;
        let mut border = BytesStart::new("w:top");
        border.push_attribute(("w:val", "single"));
        border.push_attribute(("w:sz", "8"));
        border.push_attribute(("w:space", "0"));
        border.push_attribute(("w:color", "auto"));
        xml.write_event(Event::Empty(border))?;
        xml.write_event(Event::End(BytesEnd::new("w:tcBorders")))?;
        xml.write_event(Event::End(BytesEnd::new("w:tcPr")))?;
    }
    content(xml)?;
    xml.write_event(Event::End(BytesEnd::new("w:tc")))?;
    Ok(())
}

fn simple_cell(
    xml: &mut XmlWriter,
    text: &str,
) -> io::Result<()> {
    write_cell(xml, false, |xml| text_paragraph(xml, text))
}

fn aligned_cell(
    xml: &mut XmlWriter,
    text: &str,
    bold: bool,
    align: &'static str,
) -> io::Result<()> {
    write_cell(xml, false, |xml| {
        let run = if bold { Run::bold(text) } else { Run::plain(text) };
        write_paragraph(
            xml,
            &ParagraphStyle {
                align: Some(align),
                size: None,
            },
            &[run],
        )
    })
}

fn build_document_xml(document: &QuoteDocument) -> Result<Vec<u8>, io::Error> {
    let totals = document_totals(document);
    let currency = document.currency.as_str();

    let mut xml = Writer::new(Cursor::new(Vec::new()));
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut root = BytesStart::new("w:document");
    root.push_attribute(("xmlns:w", WORDPROCESSINGML_NS));
    xml.write_event(Event::Start(root))?;
    xml.write_event(Event::Start(BytesStart::new("w:body")))?;

    // Header line, centered, 24pt.
    write_paragraph(
        &mut xml,
        &ParagraphStyle {
            align: Some("center"),
            size: Some(48),
        },
        &[Run::bold(&document.header_text)],
    )?;
    empty_paragraph(&mut xml)?;

    write_parties_block(&mut xml, document)?;
    empty_paragraph(&mut xml)?;

    write_items_table(&mut xml, document)?;
    empty_paragraph(&mut xml)?;

    write_totals_block(&mut xml, document, &totals, currency)?;
    empty_paragraph(&mut xml)?;

    bold_paragraph(&mut xml, "Notes")?;
    multiline_paragraphs(&mut xml, &document.notes)?;
    empty_paragraph(&mut xml)?;
    write_paragraph(
        &mut xml,
        &ParagraphStyle {
            align: Some("center"),
            size: None,
        },
        &[Run::plain(&document.footer_text)],
    )?;

    write_section_properties(&mut xml)?;

    xml.write_event(Event::End(BytesEnd::new("w:body")))?;
    xml.write_event(Event::End(BytesEnd::new("w:document")))?;

    Ok(xml.into_inner().into_inner())
}

/// Borderless three-column block: From, To, quote metadata.
fn write_parties_block(
    xml: &mut XmlWriter,
    document: &QuoteDocument,
) -> io::Result<()> {
    start_table(
        xml,
        &TableStyle {
            width_pct: 5000,
            bordered: false,
            align: None,
        },
    )?;
    start_row(xml)?;

    write_cell(xml, false, |xml| {
        bold_paragraph(xml, "From:")?;
        text_paragraph(xml, &document.company.name)?;
        multiline_paragraphs(xml, &document.company.address)?;
        text_paragraph(xml, &document.company.contact)
    })?;

    write_cell(xml, false, |xml| {
        bold_paragraph(xml, "To:")?;
        text_paragraph(xml, &document.client.name)?;
        text_paragraph(xml, &document.client.company_name)?;
        multiline_paragraphs(xml, &document.client.address)?;
        text_paragraph(xml, &document.client.contact)
    })?;

    let date = document.date.format("%b %d, %Y").to_string();
    write_cell(xml, false, |xml| {
        let style = ParagraphStyle {
            align: Some("right"),
            size: None,
        };
        write_paragraph(
            xml,
            &style,
            &[Run::bold("Quote Number\t"), Run::plain(&document.quote_number)],
        )?;
        write_paragraph(xml, &style, &[Run::bold("Date\t"), Run::plain(&date)])
    })?;

    end_row(xml)?;
    end_table(xml)
}

fn write_items_table(
    xml: &mut XmlWriter,
    document: &QuoteDocument,
) -> io::Result<()> {
    start_table(
        xml,
        &TableStyle {
            width_pct: 5000,
            bordered: true,
            align: None,
        },
    )?;

    start_row(xml)?;
    aligned_cell(xml, "Description", true, "left")?;
    aligned_cell(xml, "Technology", true, "left")?;
    aligned_cell(xml, "Qty", true, "right")?;
    aligned_cell(xml, "Unit Price", true, "right")?;
    aligned_cell(xml, "Total", true, "right")?;
    end_row(xml)?;

    for item in &document.items {
        start_row(xml)?;
        simple_cell(xml, &item.description)?;
        simple_cell(xml, &item.technology)?;
        aligned_cell(xml, &item.quantity.to_string(), false, "right")?;
        aligned_cell(
            xml,
            &format_currency(item.unit_price, &document.currency),
            false,
            "right",
        )?;
        aligned_cell(
            xml,
            &format_currency(item.total(), &document.currency),
            false,
            "right",
        )?;
        end_row(xml)?;
    }

    end_table(xml)
}

/// Totals rows in the exact calculation order; the discount renders as a
/// negative amount, the grand total carries a top rule.
fn write_totals_block(
    xml: &mut XmlWriter,
    document: &QuoteDocument,
    totals: &QuoteTotals,
    currency: &str,
) -> io::Result<()> {
    let rows = [
        (
            "Subtotal".to_string(),
            format_currency(totals.subtotal, currency),
            false,
        ),
        (
            format!("Discount ({}%)", document.discount_percent),
            format_currency(-totals.discount_amount, currency),
            false,
        ),
        (
            format!("Tax ({}%)", document.tax_percent),
            format_currency(totals.tax_amount, currency),
            false,
        ),
        (
            "Hosting Cost".to_string(),
            format_currency(document.hosting_cost, currency),
            false,
        ),
        (
            "Development Cost".to_string(),
            format_currency(document.development_cost, currency),
            false,
        ),
        (
            "Grand Total".to_string(),
            format_currency(totals.grand_total, currency),
            true,
        ),
    ];

    start_table(
        xml,
        &TableStyle {
            width_pct: 2500,
            bordered: false,
            align: Some("right"),
        },
    )?;
    for (label, amount, emphasized) in rows {
        start_row(xml)?;
        write_cell(xml, emphasized, |xml| {
            if emphasized {
                bold_paragraph(xml, &label)
            } else {
                text_paragraph(xml, &label)
            }
        })?;
        write_cell(xml, emphasized, |xml| {
            let run = if emphasized {
                Run::bold(&amount)
            } else {
                Run::plain(&amount)
            };
            write_paragraph(
                xml,
                &ParagraphStyle {
                    align: Some("right"),
                    size: None,
                },
                &[run],
            )
        })?;
        end_row(xml)?;
    }
    end_table(xml)
}

/// A4 portrait with half-inch margins.
fn write_section_properties(xml: &mut XmlWriter) -> io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:sectPr")))?;

    let mut size = BytesStart::new("w:pgSz");
    size.push_attribute(("w:w", "11906"));
    size.push_attribute(("w:h", "16838"));
    xml.write_event(Event::Empty(size))?;

    let mut margins = BytesStart::new("w:pgMar");
    for (side, twips) in [
        ("w:top", "720"),
        ("w:right", "720"),
        ("w:bottom", "720"),
        ("w:left", "720"),
        ("w:header", "720"),
        ("w:footer", "720"),
        ("w:gutter", "0"),
    ] {
        margins.push_attribute((side, twips));
    }
    xml.write_event(Event::Empty(margins))?;

    xml.write_event(Event::End(BytesEnd::new("w:sectPr")))
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::*;
    use quote_core::models::LineItem;
    use quote_core::template::default_document;

    /// The 5200-subtotal scenario with a 10% discount.
    fn scenario_document() -> QuoteDocument {
        let mut document = default_document();
        document.items.push(LineItem {
            id: Uuid::new_v4(),
            description: "Maintenance".to_string(),
            technology: "Docker".to_string(),
            quantity: dec!(2),
            unit_price: dec!(100),
        });
        document.discount_percent = dec!(10);
        document
    }

    fn document_xml_of(artifact: &ExportArtifact) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(artifact.bytes.clone())).unwrap();
        let mut part = archive.by_name("word/document.xml").unwrap();
        let mut xml = String::new();
        part.read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn package_contains_the_mandatory_parts() {
        let artifact = export_docx(&default_document()).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(artifact.bytes)).unwrap();
        for part in ["[Content_Types].xml", "_rels/.rels", "word/document.xml"] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }
    }

    #[test]
    fn file_name_comes_from_the_quote_number() {
        let mut document = default_document();
        document.quote_number = "QT 17/B".to_string();

        let artifact = export_docx(&document).unwrap();

        assert_eq!(artifact.file_name, "qt-17-b.docx");
    }

    #[test]
    fn document_xml_carries_header_parties_and_items() {
        let xml = document_xml_of(&export_docx(&scenario_document()).unwrap());

        assert!(xml.contains("Quotation"));
        assert!(xml.contains("Your Company"));
        assert!(xml.contains("Client Company"));
        assert!(xml.contains("Maintenance"));
        assert!(xml.contains("QT-001"));
    }

    #[test]
    fn totals_rows_appear_in_calculation_order() {
        let xml = document_xml_of(&export_docx(&scenario_document()).unwrap());

        let positions: Vec<usize> = [
            "Subtotal",
            "Discount (10%)",
            "Tax (10%)",
            "Hosting Cost",
            "Development Cost",
            "Grand Total",
        ]
        .iter()
        .map(|label| xml.find(label).unwrap_or_else(|| panic!("missing {label}")))
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn totals_amounts_match_the_known_scenario() {
        let xml = document_xml_of(&export_docx(&scenario_document()).unwrap());

        // 5200 − 520 = 4680; tax 468; grand total 5148.
        assert!(xml.contains("$5200.00"));
        assert!(xml.contains("$-520.00"));
        assert!(xml.contains("$468.00"));
        assert!(xml.contains("$5148.00"));
    }

    #[test]
    fn reserved_xml_characters_are_escaped() {
        let mut document = default_document();
        document.client.company_name = "Smith & Wesson <Ltd>".to_string();

        let xml = document_xml_of(&export_docx(&document).unwrap());

        assert!(xml.contains("Smith &amp; Wesson &lt;Ltd&gt;"));
        assert!(!xml.contains("<Ltd>"));
    }

    #[test]
    fn multiline_notes_become_separate_paragraphs() {
        let mut document = default_document();
        document.notes = "Line one\nLine two".to_string();

        let xml = document_xml_of(&export_docx(&document).unwrap());

        assert!(xml.contains(">Line one<"));
        assert!(xml.contains(">Line two<"));
    }
}
