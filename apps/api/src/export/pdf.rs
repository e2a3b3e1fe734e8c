//! Raster PDF export.
//!
//! The client supplies a PNG/JPEG capture of the rendered preview. The capture
//! is flattened onto white, re-encoded as JPEG and placed at full A4 width
//! (210 mm); its height is `h × 210 / w` mm. Captures taller than one page are
//! continued on further A4 pages by shifting the same image up one page height
//! per page. The document holds one shared DCT image XObject and one content
//! stream per page.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, Rgb, RgbImage};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::export::{ExportError, ExportFormat, ExportedFile};

pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
const PT_PER_MM: f64 = 72.0 / 25.4;
const JPEG_QUALITY: u8 = 92;
const IMAGE_NAME: &str = "Im0";

pub fn encode(capture: &[u8], name: &str) -> Result<ExportedFile, ExportError> {
    let image =
        image::load_from_memory(capture).map_err(|e| ExportError::Capture(e.to_string()))?;
    if image.width() == 0 || image.height() == 0 {
        return Err(ExportError::Capture("capture has no pixels".to_string()));
    }
    let (width, height) = (image.width(), image.height());
    let jpeg = flatten_to_jpeg(image)?;
    let pdf = write_pdf(jpeg, width, height)?;
    Ok(ExportedFile::new(ExportFormat::Pdf, name, pdf))
}

/// Image height in millimetres when scaled to the A4 page width.
pub fn scaled_height_mm(width: u32, height: u32) -> f64 {
    height as f64 * PAGE_WIDTH_MM / width as f64
}

pub fn page_count(image_height_mm: f64) -> usize {
    ((image_height_mm / PAGE_HEIGHT_MM).ceil() as usize).max(1)
}

fn flatten_to_jpeg(image: DynamicImage) -> Result<Vec<u8>, ExportError> {
    let rgba = image.into_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, px) in rgba.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        let blend = |c: u8| -> u8 {
            let a = a as u32;
            ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8
        };
        rgb.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }

    let mut jpeg = Cursor::new(Vec::new());
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY))
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(jpeg.into_inner())
}

fn write_pdf(jpeg: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let page_w = (PAGE_WIDTH_MM * PT_PER_MM) as f32;
    let page_h = (PAGE_HEIGHT_MM * PT_PER_MM) as f32;
    let image_h_mm = scaled_height_mm(width, height);
    let image_h = (image_h_mm * PT_PER_MM) as f32;

    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();
    let image_id = doc.add_object(
        Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width),
                "Height" => i64::from(height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg,
        )
        .with_compression(false),
    );

    let mut kids: Vec<Object> = Vec::new();
    for i in 0..page_count(image_h_mm) {
        // Image top sits at the page top on page 0 and one page higher per page after.
        let y = page_h - image_h + i as f32 * page_h;
        let content = place_image(page_w, image_h, y)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_w.into(), page_h.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { IMAGE_NAME => image_id },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id: ObjectId = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(out)
}

/// Content stream drawing the shared image at full page width, bottom edge at `y`.
fn place_image(width: f32, height: f32, y: f32) -> Result<Vec<u8>, ExportError> {
    Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    width.into(),
                    0.into(),
                    0.into(),
                    height.into(),
                    0.into(),
                    y.into(),
                ],
            ),
            Operation::new("Do", vec![IMAGE_NAME.into()]),
            Operation::new("Q", vec![]),
        ],
    }
    .encode()
    .map_err(|e| ExportError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn png(width: u32, height: u32, pixel: Rgba<u8>) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, pixel);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn image_stream(doc: &Document) -> &Stream {
        doc.objects
            .values()
            .filter_map(|o| o.as_stream().ok())
            .find(|s| matches!(s.dict.get(b"Subtype"), Ok(Object::Name(n)) if n == b"Image"))
            .unwrap()
    }

    /// Vertical offset of the image on each page, read back from the `cm` operator.
    fn image_offsets(doc: &Document) -> Vec<f32> {
        doc.get_pages()
            .values()
            .map(|page_id| {
                let raw = doc.get_page_content(*page_id).unwrap();
                let content = Content::decode(&raw).unwrap();
                let cm = content
                    .operations
                    .iter()
                    .find(|op| op.operator == "cm")
                    .unwrap();
                cm.operands[5].as_float().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_scaled_height_and_pages() {
        assert_eq!(scaled_height_mm(1000, 1414), 296.94);
        assert_eq!(page_count(scaled_height_mm(1000, 1414)), 1);
        assert_eq!(page_count(scaled_height_mm(100, 300)), 3);
        assert_eq!(page_count(0.0), 1);
    }

    #[test]
    fn test_single_page_capture() {
        let file = encode(&png(210, 200, Rgba([10, 20, 30, 255])), "Jane Doe").unwrap();
        assert_eq!(file.filename, "Jane_Doe.pdf");
        assert_eq!(file.content_type, "application/pdf");
        assert!(file.bytes.starts_with(b"%PDF-1.4"));

        let doc = Document::load_mem(&file.bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        let image = image_stream(&doc);
        assert_eq!(image.dict.get(b"Width").unwrap().as_i64().unwrap(), 210);
        assert_eq!(image.dict.get(b"Height").unwrap().as_i64().unwrap(), 200);
        assert_eq!(
            image.dict.get(b"Filter").unwrap().as_name().unwrap(),
            b"DCTDecode"
        );
        assert!(image.content.starts_with(&[0xFF, 0xD8]));
    }

    #[test]
    fn test_tall_capture_is_paginated() {
        let file = encode(&png(100, 300, Rgba([0, 0, 0, 255])), "").unwrap();
        assert_eq!(file.filename, "resume.pdf");

        let doc = Document::load_mem(&file.bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);

        let page_h = (PAGE_HEIGHT_MM * PT_PER_MM) as f32;
        let image_h = (scaled_height_mm(100, 300) * PT_PER_MM) as f32;
        let offsets = image_offsets(&doc);
        assert_eq!(offsets.len(), 3);
        for (i, y) in offsets.into_iter().enumerate() {
            let expected = page_h - image_h + i as f32 * page_h;
            assert!((y - expected).abs() < 0.5, "page {i}: {y} vs {expected}");
        }
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let capture = png(4, 4, Rgba([0, 0, 0, 0]));
        let jpeg = flatten_to_jpeg(image::load_from_memory(&capture).unwrap()).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap().into_rgb8();
        assert!(decoded.pixels().all(|p| p.0.iter().all(|c| *c > 245)));
    }

    #[test]
    fn test_garbage_capture_is_rejected() {
        assert!(matches!(
            encode(b"not an image", "x"),
            Err(ExportError::Capture(_))
        ));
    }
}
