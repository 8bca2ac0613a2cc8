//! Multi-page A4 PDF assembly from the rasterized preview.
//!
//! The preview surface hands over one tall raster (PNG or JPEG) of the
//! fully rendered quote. The image is scaled to A4 width preserving aspect
//! ratio and drawn once per page at successive vertical offsets until its
//! full height is covered, so page boundaries cut straight through the
//! raster exactly like the on-screen print preview.

use image::GenericImageView;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use thiserror::Error;

use quote_core::models::QuoteDocument;

use crate::{ExportArtifact, filename::export_file_name};

/// A4 portrait in PDF points (210 × 297 mm).
const PAGE_WIDTH: f32 = 595.276;
const PAGE_HEIGHT: f32 = 841.89;

/// Failures while turning the preview raster into a PDF.
#[derive(Debug, Error)]
pub enum PdfExportError {
    #[error("preview raster is not a usable image: {0}")]
    Raster(#[from] image::ImageError),

    #[error("pdf assembly failed: {0}")]
    Assembly(#[from] lopdf::Error),

    #[error("writing pdf bytes failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Assembles the PDF export for `document` from its rasterized preview.
///
/// The document itself only contributes the file name; everything visual
/// is already baked into the raster by the preview surface.
pub fn export_pdf(
    document: &QuoteDocument,
    preview_raster: &[u8],
) -> Result<ExportArtifact, PdfExportError> {
    let bytes = assemble_preview_pdf(preview_raster)?;
    Ok(ExportArtifact {
        file_name: export_file_name(&document.quote_number, "pdf"),
        bytes,
    })
}

/// Scales the raster to A4 width and paginates it into a fresh PDF.
pub fn assemble_preview_pdf(preview_raster: &[u8]) -> Result<Vec<u8>, PdfExportError> {
    let raster = image::load_from_memory(preview_raster)?;
    let (pixel_width, pixel_height) = raster.dimensions();
    let rgb = raster.to_rgb8();

    // Height of the scaled image in points once its width fills the page.
    let image_height = PAGE_WIDTH * pixel_height as f32 / pixel_width as f32;
    let page_count = (image_height / PAGE_HEIGHT).ceil().max(1.0) as usize;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(pixel_width),
            "Height" => i64::from(pixel_height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb.into_raw(),
    ));

    let mut page_ids: Vec<Object> = Vec::with_capacity(page_count);
    for page in 0..page_count {
        // Shift the image up one page height per page so consecutive pages
        // expose consecutive bands; PDF y runs bottom-up.
        let offset_y = PAGE_HEIGHT - image_height + page as f32 * PAGE_HEIGHT;
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        PAGE_WIDTH.into(),
                        0.into(),
                        0.into(),
                        image_height.into(),
                        0.into(),
                        offset_y.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => page_ids.len() as i64,
            "Kids" => page_ids,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
