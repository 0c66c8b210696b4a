//! Preview rendering: tiled contact-sheet pages of bitmaps.
//!
//! Rendering only reads grids; it never feeds back into the exported rows.

use image::{GrayImage, Luma};
use tracing::debug;

use crate::pixel::{BinaryGrid, BitmapRecord};

const INK: Luma<u8> = Luma([0]);
const PAPER: Luma<u8> = Luma([255]);
const SEPARATOR: Luma<u8> = Luma([200]);

/// Page geometry for [`render_pages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLayout {
    /// Tiles per row.
    pub columns: u32,
    /// Tile rows per page.
    pub rows: u32,
    /// Pixels per bitmap cell.
    pub scale: u32,
    /// Separator width between tiles.
    pub margin: u32,
}

impl Default for PreviewLayout {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 6,
            scale: 8,
            margin: 4,
        }
    }
}

impl PreviewLayout {
    pub fn tiles_per_page(&self) -> usize {
        (self.columns.max(1) * self.rows.max(1)) as usize
    }
}

/// Render one bitmap, foreground black and background white, `scale` pixels per cell.
pub fn render_bitmap(grid: &BinaryGrid, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let (w, h) = (grid.width() as u32 * scale, grid.height() as u32 * scale);
    GrayImage::from_fn(w, h, |x, y| {
        if grid.is_foreground((y / scale) as usize, (x / scale) as usize) {
            INK
        } else {
            PAPER
        }
    })
}

/// Tile `records` onto pages in the order given.
///
/// Every page has the full `columns × rows` geometry; unused slots stay blank.
/// Tiles are sized by the largest grid in the batch.
pub fn render_pages(records: &[BitmapRecord], layout: &PreviewLayout) -> Vec<GrayImage> {
    if records.is_empty() {
        return Vec::new();
    }

    let scale = layout.scale.max(1);
    let columns = layout.columns.max(1);
    let tile_w = records.iter().map(|r| r.grid.width() as u32).max().unwrap_or(1) * scale;
    let tile_h = records.iter().map(|r| r.grid.height() as u32).max().unwrap_or(1) * scale;
    let page_w = columns * (tile_w + layout.margin) + layout.margin;
    let page_h = layout.rows.max(1) * (tile_h + layout.margin) + layout.margin;

    let pages: Vec<GrayImage> = records
        .chunks(layout.tiles_per_page())
        .map(|chunk| {
            let mut page = GrayImage::from_pixel(page_w, page_h, SEPARATOR);
            for (slot, record) in chunk.iter().enumerate() {
                let slot = slot as u32;
                let x0 = layout.margin + (slot % columns) * (tile_w + layout.margin);
                let y0 = layout.margin + (slot / columns) * (tile_h + layout.margin);
                let tile = render_bitmap(&record.grid, scale);
                for (x, y, pixel) in tile.enumerate_pixels() {
                    page.put_pixel(x0 + x, y0 + y, *pixel);
                }
            }
            page
        })
        .collect();

    debug!(records = records.len(), pages = pages.len(), "Rendered preview pages");
    pages
}
