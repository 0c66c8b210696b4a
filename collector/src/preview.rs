//! Preview page output.

use std::path::{Path, PathBuf};

use bitmap_engine::{render_pages, BitmapRecord, PreviewLayout};
use tracing::info;

/// Render `records` and save the pages as `page_001.png`, `page_002.png`, … in `dir`.
pub fn write_pages(
    records: &[BitmapRecord],
    layout: &PreviewLayout,
    dir: &Path,
) -> Result<Vec<PathBuf>, image::ImageError> {
    let pages = render_pages(records, layout);
    if pages.is_empty() {
        return Ok(Vec::new());
    }
    std::fs::create_dir_all(dir)?;

    let per_page = layout.tiles_per_page();
    let mut written = Vec::with_capacity(pages.len());
    for (index, page) in pages.iter().enumerate() {
        let path = dir.join(format!("page_{:03}.png", index + 1));
        page.save(&path)?;

        let labels: Vec<&str> = records
            .iter()
            .skip(index * per_page)
            .take(per_page)
            .map(|r| r.label.as_str())
            .collect();
        info!(page = %path.display(), ?labels, "Wrote preview page");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmap_engine::BinaryGrid;

    #[test]
    fn test_write_pages_creates_numbered_files() {
        let dir = std::env::temp_dir().join(format!("bitmap_preview_{}", uuid::Uuid::new_v4()));
        let records: Vec<_> = (0..3)
            .map(|i| {
                BitmapRecord::new(
                    format!("{i}.png"),
                    BinaryGrid::new(2, 2, vec![i % 2 == 0; 4]).unwrap(),
                )
            })
            .collect();
        let layout = PreviewLayout {
            columns: 1,
            rows: 2,
            scale: 2,
            margin: 1,
        };

        let pages = write_pages(&records, &layout, &dir).unwrap();
        assert_eq!(pages, vec![dir.join("page_001.png"), dir.join("page_002.png")]);
        let first = image::open(&pages[0]).unwrap();
        assert_eq!((first.width(), first.height()), (6, 11));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_pages_without_records_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("bitmap_preview_{}", uuid::Uuid::new_v4()));
        let pages = write_pages(&[], &PreviewLayout::default(), &dir).unwrap();
        assert!(pages.is_empty());
        assert!(!dir.exists());
    }
}
