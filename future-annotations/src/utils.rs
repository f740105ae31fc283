use ruff_text_size::TextSize;

/// A utility struct to convert byte offsets to line numbers and back.
///
/// The parser reports positions as byte offsets, while the splice works on
/// whole lines and notices report 1-indexed line numbers.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line, as in Python. Uses byte
    /// iteration since both are single bytes in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        for (i, byte) in bytes.iter().enumerate() {
            match byte {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                _ => {}
            }
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Byte offset where the line after the one containing `offset` begins.
    ///
    /// Returns `None` when `offset` lies on the last line, i.e. there is no
    /// line terminator after it.
    #[must_use]
    pub fn next_line_start(&self, offset: TextSize) -> Option<usize> {
        let line = self.line_index(offset);
        self.line_starts.get(line).copied()
    }
}

/// Returns the line terminator used by `source`, judged by its first line.
///
/// Files without any line break default to `"\n"`.
#[must_use]
pub fn detect_line_ending(source: &str) -> &'static str {
    let bytes = source.as_bytes();
    match bytes.iter().position(|b| matches!(b, b'\n' | b'\r')) {
        Some(pos) if bytes[pos] == b'\n' => "\n",
        Some(pos) if bytes.get(pos + 1) == Some(&b'\n') => "\r\n",
        Some(_) => "\r",
        None => "\n",
    }
}

/// Normalizes a path for display purposes.
///
/// - Converts backslashes to forward slashes
/// - Strips leading "./" prefix
///
/// # Examples
/// ```
/// use std::path::Path;
/// use future_annotations::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new("./pkg/mod.py")), "pkg/mod.py");
/// ```
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_lookup() {
        let idx = LineIndex::new("a\nbb\nccc");
        assert_eq!(idx.line_index(TextSize::from(0)), 1);
        assert_eq!(idx.line_index(TextSize::from(2)), 2);
        assert_eq!(idx.line_index(TextSize::from(4)), 2);
        assert_eq!(idx.line_index(TextSize::from(5)), 3);
    }

    #[test]
    fn test_line_index_carriage_returns() {
        let idx = LineIndex::new("a\rb\r\nc\nd");
        assert_eq!(idx.line_index(TextSize::from(0)), 1);
        assert_eq!(idx.line_index(TextSize::from(2)), 2);
        assert_eq!(idx.line_index(TextSize::from(5)), 3);
        assert_eq!(idx.line_index(TextSize::from(7)), 4);
        assert_eq!(idx.next_line_start(TextSize::from(1)), Some(2));
        assert_eq!(idx.next_line_start(TextSize::from(3)), Some(5));
    }

    #[test]
    fn test_next_line_start() {
        let idx = LineIndex::new("a\nbb\nccc");
        assert_eq!(idx.next_line_start(TextSize::from(1)), Some(2));
        assert_eq!(idx.next_line_start(TextSize::from(3)), Some(5));
        assert_eq!(idx.next_line_start(TextSize::from(6)), None);
    }

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(detect_line_ending("import os\r\nimport sys\r\n"), "\r\n");
        assert_eq!(detect_line_ending("import os\nimport sys\r\n"), "\n");
        assert_eq!(detect_line_ending("import os\rimport sys\r"), "\r");
        assert_eq!(detect_line_ending("import os\rimport sys\n"), "\r");
        assert_eq!(detect_line_ending("import os"), "\n");
        assert_eq!(detect_line_ending(""), "\n");
    }

    #[test]
    fn test_normalize_display_path() {
        use std::path::Path;
        assert_eq!(normalize_display_path(Path::new(".\\pkg\\mod.py")), "pkg/mod.py");
        assert_eq!(normalize_display_path(Path::new("mod.py")), "mod.py");
    }
}
