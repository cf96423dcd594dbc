//! Shared helpers for the integration tests.
//!
//! Fixtures are generated on the fly with lopdf. Each page carries a
//! distinct MediaBox width, which is how tests read page order back out of
//! a merged file.

use lopdf::{Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};

/// Write a PDF with one page per entry of `widths` to `dir/name`.
pub fn write_pdf(dir: &Path, name: &str, widths: &[i64]) -> PathBuf {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = widths
        .iter()
        .map(|&width| {
            let content = format!("BT /F1 10 Tf 20 20 Td (w{width}) Tj ET");
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), 842.into()],
                "Contents" => content_id,
            })
            .into()
        })
        .collect();

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

    let path = dir.join(name);
    doc.save(&path).expect("Failed to write fixture");
    path
}

/// Write a file that has a `.pdf` name but is not a PDF.
pub fn write_garbage(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"this is not a pdf at all").expect("Failed to write fixture");
    path
}

/// MediaBox widths of every page of the PDF at `path`, in page order.
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("Output is not a loadable PDF");
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            doc.get_dictionary(page_id)
                .and_then(|page| page.get(b"MediaBox"))
                .and_then(Object::as_array)
                .and_then(|media_box| media_box[2].as_i64())
                .expect("Page without a numeric MediaBox")
        })
        .collect()
}

/// Names of the entries in `dir`, sorted.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
