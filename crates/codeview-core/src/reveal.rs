//! Typewriter reveal frames.
//!
//! A reveal effect shows progressively longer prefixes of a text. This module only computes the
//! prefixes; timing and cancellation belong to whatever drives the effect. Each frame is meant
//! to be re-highlighted from scratch, since scanners keep no state between calls.

use unicode_segmentation::UnicodeSegmentation;

/// Iterator over the reveal prefixes of a text, cut at grapheme cluster boundaries.
///
/// The first frame is `""` and the last is the full text, so a text of N graphemes yields
/// N + 1 frames.
#[derive(Debug, Clone)]
pub struct Typewriter<'a> {
    text: &'a str,
    /// Byte offsets of every frame end, ascending.
    ends: Vec<usize>,
    next: usize,
}

impl<'a> Typewriter<'a> {
    /// Create a typewriter over `text`.
    pub fn new(text: &'a str) -> Self {
        let mut ends = Vec::with_capacity(text.len() + 1);
        ends.push(0);
        ends.extend(
            text.grapheme_indices(true)
                .map(|(offset, grapheme)| offset + grapheme.len()),
        );
        Self { text, ends, next: 0 }
    }

    /// Total number of frames.
    pub fn frame_count(&self) -> usize {
        self.ends.len()
    }

    /// The `index`-th frame, if any.
    pub fn frame(&self, index: usize) -> Option<&'a str> {
        self.ends.get(index).map(|&end| &self.text[..end])
    }

    /// The full text (the last frame).
    pub fn full_text(&self) -> &'a str {
        self.text
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frame(self.next)?;
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ends.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Typewriter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_ascii() {
        let frames: Vec<&str> = Typewriter::new("abc").collect();
        assert_eq!(frames, vec!["", "a", "ab", "abc"]);
    }

    #[test]
    fn test_frames_empty() {
        let frames: Vec<&str> = Typewriter::new("").collect();
        assert_eq!(frames, vec![""]);
    }

    #[test]
    fn test_frames_respect_graphemes() {
        // "é" as e + combining acute, then a CJK char.
        let text = "e\u{301}中";
        let tw = Typewriter::new(text);
        assert_eq!(tw.frame_count(), 3);
        assert_eq!(tw.frame(1), Some("e\u{301}"));
        assert_eq!(tw.frame(2), Some(text));
        assert_eq!(tw.frame(3), None);
    }

    #[test]
    fn test_exact_size() {
        let mut tw = Typewriter::new("ab");
        assert_eq!(tw.len(), 3);
        tw.next();
        assert_eq!(tw.len(), 2);
        assert_eq!(tw.full_text(), "ab");
    }
}
