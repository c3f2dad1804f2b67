//! Fixed-size output rectangle.

use std::fmt;

use crate::error::ConvertError;

/// Default art box width in columns.
pub const DEFAULT_BOX_WIDTH: u32 = 60;

/// Default art box height in rows.
pub const DEFAULT_BOX_HEIGHT: u32 = 32;

/// Largest accepted art box side, in characters.
pub const MAX_BOX_SIDE: u32 = 1024;

/// The rectangle every rendering is padded or cropped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtBox {
    pub width: u32,
    pub height: u32,
}

impl Default for ArtBox {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOX_WIDTH,
            height: DEFAULT_BOX_HEIGHT,
        }
    }
}

impl ArtBox {
    /// Create an art box with both sides in `1..=MAX_BOX_SIDE`.
    pub fn new(width: u32, height: u32) -> Result<Self, ConvertError> {
        let side = 1..=MAX_BOX_SIDE;
        if !side.contains(&width) || !side.contains(&height) {
            return Err(ConvertError::InvalidArtBox {
                width,
                height,
                max: MAX_BOX_SIDE,
            });
        }
        Ok(Self { width, height })
    }

    /// Pad or truncate `lines` to exactly `width` x `height` characters.
    ///
    /// Short lines are right-padded with spaces, long lines are cut. Missing
    /// rows are filled with blank lines; surplus rows are dropped.
    pub fn fit(&self, lines: Vec<String>) -> AsciiArt {
        let width = self.width as usize;
        let height = self.height as usize;

        let mut rows: Vec<String> = lines
            .into_iter()
            .take(height)
            .map(|line| {
                let mut row: String = line.chars().take(width).collect();
                let len = row.chars().count();
                row.extend(std::iter::repeat(' ').take(width - len));
                row
            })
            .collect();

        rows.resize(height, " ".repeat(width));

        AsciiArt {
            rows,
            art_box: *self,
        }
    }
}

/// A rendering normalized to its art box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    rows: Vec<String>,
    art_box: ArtBox,
}

impl AsciiArt {
    /// The rows, top to bottom, each exactly `art_box().width` characters.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn art_box(&self) -> ArtBox {
        self.art_box
    }

    /// File contents: every row followed by `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.rows.len() * (self.art_box.width as usize + 1));
        for row in &self.rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_short_lines_and_rows() {
        let art = ArtBox::default().fit(vec!["ab".to_string()]);
        assert_eq!(art.rows().len(), 32);
        assert_eq!(art.rows()[0], format!("ab{}", " ".repeat(58)));
        assert!(art.rows()[1..].iter().all(|r| r == &" ".repeat(60)));
    }

    #[test]
    fn test_fit_truncates_long_lines() {
        let art = ArtBox::new(4, 1).unwrap().fit(vec!["abcdefgh".to_string()]);
        assert_eq!(art.rows(), &["abcd".to_string()]);
    }

    #[test]
    fn test_fit_drops_surplus_rows() {
        let lines = vec!["x".to_string(); 5];
        let art = ArtBox::new(2, 3).unwrap().fit(lines);
        assert_eq!(art.rows().len(), 3);
    }

    #[test]
    fn test_fit_empty_input_is_blank_box() {
        let art = ArtBox::new(3, 2).unwrap().fit(Vec::new());
        assert_eq!(art.to_text(), "   \n   \n");
    }

    #[test]
    fn test_to_text_newline_terminated() {
        let art = ArtBox::default().fit(vec!["$".to_string()]);
        let text = art.to_text();
        assert_eq!(text.lines().count(), 32);
        assert!(text.ends_with('\n'));
        assert_eq!(text.len(), 32 * 61);
        assert_eq!(art.to_string(), text);
    }

    #[test]
    fn test_zero_sized_box_rejected() {
        assert!(matches!(
            ArtBox::new(0, 32),
            Err(ConvertError::InvalidArtBox { width: 0, height: 32, .. })
        ));
        assert!(ArtBox::new(60, 0).is_err());
    }

    #[test]
    fn test_oversized_box_rejected() {
        assert!(ArtBox::new(MAX_BOX_SIDE, MAX_BOX_SIDE).is_ok());
        assert!(matches!(
            ArtBox::new(60, 4_000_000_000),
            Err(ConvertError::InvalidArtBox { height: 4_000_000_000, .. })
        ));
        assert!(ArtBox::new(MAX_BOX_SIDE + 1, 32).is_err());
    }
}
