//! Programmatic PDF fixtures for unit tests.
//!
//! Every page gets a distinct MediaBox width so page order can be read back
//! from a merged document.

use lopdf::{Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};

use crate::io::LoadedPdf;

/// Build a document with one page per entry of `widths`.
pub fn test_document(widths: &[i64]) -> Document {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(widths.len());
    for &width in widths {
        let content = format!("BT /F1 12 Tf 10 10 Td (page {width}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write [`test_document`] to `dir/name` and return its path.
pub fn write_test_pdf(dir: &Path, name: &str, widths: &[i64]) -> PathBuf {
    let path = dir.join(name);
    let mut doc = test_document(widths);
    doc.save(&path).unwrap();
    path
}

/// Wrap an in-memory document as if it had been opened from disk.
pub fn loaded(document: Document) -> LoadedPdf {
    LoadedPdf {
        document,
        path: PathBuf::from("in-memory.pdf"),
    }
}

/// MediaBox widths of every page, in page order.
pub fn media_box_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).unwrap();
            let media_box = page.get(b"MediaBox").and_then(Object::as_array).unwrap();
            media_box[2].as_i64().unwrap()
        })
        .collect()
}

/// MediaBox widths of the PDF at `path`.
pub fn output_widths(path: &Path) -> Vec<i64> {
    media_box_widths(&Document::load(path).unwrap())
}
