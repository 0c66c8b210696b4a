//! Row encoding.

use std::borrow::Cow;

use bitmap_engine::BinaryGrid;

/// Field separator.
pub const DELIMITER: char = ',';

/// Record separator, as written by standard CSV writers.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Text written for a foreground (`true`) cell.
pub const FOREGROUND: &str = "1";

/// Text written for a background (`false`) cell.
pub const BACKGROUND: &str = "0";

/// Encode one row without its line terminator.
///
/// The label is written verbatim unless it contains a delimiter, a quote or a
/// line break, in which case it is quoted with embedded quotes doubled.
pub fn encode_row(label: &str, grid: &BinaryGrid) -> String {
    let cells = grid.cells();
    let mut row = String::with_capacity(label.len() + 2 * cells.len() + 2);
    row.push_str(&quote_field(label));
    for &cell in cells {
        row.push(DELIMITER);
        row.push_str(if cell { FOREGROUND } else { BACKGROUND });
    }
    row
}

fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmap_engine::{binarize, GrayscaleGrid};

    #[test]
    fn test_encode_row_polarity() {
        let gray = GrayscaleGrid::from_rows(&[vec![0.0, 0.0], vec![255.0, 255.0]]).unwrap();
        let grid = binarize(&gray).unwrap();
        assert_eq!(encode_row("x.png", &grid), "x.png,1,1,0,0");
    }

    #[test]
    fn test_encode_row_is_row_major() {
        let grid = BinaryGrid::new(2, 3, vec![false, true, false, true, false, false]).unwrap();
        assert_eq!(encode_row("a.png", &grid), "a.png,0,1,0,1,0,0");
    }

    #[test]
    fn test_encode_row_field_count() {
        let grid = BinaryGrid::new(10, 10, vec![false; 100]).unwrap();
        let row = encode_row("name.png", &grid);
        let fields: Vec<&str> = row.split(DELIMITER).collect();
        assert_eq!(fields.len(), 101);
        assert!(fields[1..].iter().all(|f| *f == "0" || *f == "1"));
    }

    #[test]
    fn test_label_with_delimiter_is_quoted() {
        let grid = BinaryGrid::new(1, 1, vec![true]).unwrap();
        assert_eq!(encode_row("a,b.png", &grid), "\"a,b.png\",1");
        assert_eq!(encode_row("say \"hi\",.png", &grid), "\"say \"\"hi\"\",.png\",1");
    }

    #[test]
    fn test_plain_label_is_verbatim() {
        let grid = BinaryGrid::new(1, 1, vec![false]).unwrap();
        assert_eq!(encode_row("Letter A (1).PNG", &grid), "Letter A (1).PNG,0");
    }
}
