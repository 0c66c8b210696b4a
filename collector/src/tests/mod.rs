use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use crate::CollectorConfig;

/// Fresh source and destination directories under the system temp dir.
struct TestDirs {
    root: PathBuf,
}

impl TestDirs {
    fn new() -> Self {
        let root = std::env::temp_dir().join(format!("bitmap_collector_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(root.join("images")).expect("Failed to create test dirs");
        std::fs::create_dir_all(root.join("out")).expect("Failed to create test dirs");
        Self { root }
    }

    fn source(&self) -> PathBuf {
        self.root.join("images")
    }

    fn dest(&self) -> PathBuf {
        self.root.join("out")
    }

    fn config(&self) -> CollectorConfig {
        CollectorConfig {
            source_dir: self.source(),
            dest_dir: self.dest(),
            ..CollectorConfig::default()
        }
    }

    fn write_png(&self, name: &str, img: &RgbaImage) {
        img.save(self.source().join(name)).expect("Failed to write test PNG");
    }

    fn export(&self) -> String {
        std::fs::read_to_string(self.dest().join("export.csv")).expect("Failed to read export")
    }
}

impl Drop for TestDirs {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

/// Black square centred on a transparent canvas.
fn glyph_image(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let inside = |v: u32| v >= size / 4 && v < size * 3 / 4;
        if inside(x) && inside(y) {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn data_fields(line: &str) -> Vec<&str> {
    line.split(',').skip(1).collect()
}

fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "{} should exist", path.display());
}
