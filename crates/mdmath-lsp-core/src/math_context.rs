//! Delimiter heuristic for locating the cursor relative to math spans
//!
//! The classification is intentionally shallow: it counts delimiter
//! occurrences rather than parsing markdown. Escaped dollar signs,
//! code fences and nested environments are not recognized; adjacent
//! delimiters such as `$$$$` count as two non-overlapping `$$`
//! matches, so `$$` cannot always be told apart from two inline `$`
//! spans. These limits are accepted behavior, kept stable so the
//! served completions match what users of the original heuristic see.

/// Where the cursor sits relative to math delimiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathContext {
    None,
    Inline,
    Display,
}

/// Classify the cursor position.
///
/// `line_before` is the current line's text strictly before the cursor
/// column; `cursor_offset` is the byte offset of the cursor in
/// `full_text`. Total over its inputs: degenerate positions classify
/// as [`MathContext::None`].
pub fn math_context(full_text: &str, cursor_offset: usize, line_before: &str) -> MathContext {
    // An odd number of `$` earlier on the line means an inline span
    // was opened on this line and not yet closed.
    if count_nonoverlapping(line_before, "$") % 2 == 1 {
        return MathContext::Inline;
    }

    let mut offset = cursor_offset.min(full_text.len());
    while !full_text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &full_text[..offset];
    let after = &full_text[offset..];

    // An odd number of `$$` before the cursor with a closing `$$`
    // somewhere after it means the cursor sits in a display span.
    if count_nonoverlapping(before, "$$") % 2 == 1 && after.contains("$$") {
        MathContext::Display
    } else {
        MathContext::None
    }
}

/// Count non-overlapping occurrences of `needle`, skipping past the
/// full match length each time: `$$$$` counts as two `$$`, not three.
pub fn count_nonoverlapping(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if &haystack[i..i + needle.len()] == needle {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_no_context() {
        assert_eq!(math_context("plain text", 5, "plain"), MathContext::None);
    }

    #[test]
    fn empty_document_is_no_context() {
        assert_eq!(math_context("", 0, ""), MathContext::None);
    }

    #[test]
    fn odd_dollar_count_on_line_is_inline() {
        assert_eq!(math_context("a $x+y$ b", 4, "a $x"), MathContext::Inline);
    }

    #[test]
    fn even_dollar_count_on_line_is_not_inline() {
        assert_eq!(math_context("a $x$ b", 6, "a $x$ "), MathContext::None);
    }

    #[test]
    fn line_parity_wins_over_display_state() {
        // Odd `$` on the line classifies as inline even though the
        // cursor also sits between `$$` marks document-wide.
        let text = "$$\n$x\n$$";
        assert_eq!(math_context(text, 4, "$x"), MathContext::Inline);
    }

    #[test]
    fn between_display_marks_is_display() {
        assert_eq!(math_context("$$x$$", 2, "$$"), MathContext::Display);
    }

    #[test]
    fn multiline_display_span() {
        let text = "before\n$$\nx = y\n$$\nafter";
        // Cursor inside the `x = y` line.
        assert_eq!(math_context(text, 12, "x "), MathContext::Display);
    }

    #[test]
    fn unclosed_display_span_is_no_context() {
        // `$$` opened but never closed after the cursor.
        assert_eq!(math_context("$$x", 3, "$$x"), MathContext::None);
    }

    #[test]
    fn after_closed_display_span_is_no_context() {
        let text = "$$x$$ y";
        assert_eq!(math_context(text, 7, "$$x$$ y"), MathContext::None);
    }

    #[test]
    fn cursor_offset_past_end_is_clamped() {
        assert_eq!(math_context("abc", 99, "abc"), MathContext::None);
    }

    #[test]
    fn counts_skip_past_full_matches() {
        assert_eq!(count_nonoverlapping("$$$$", "$$"), 2);
        assert_eq!(count_nonoverlapping("$$$", "$$"), 1);
        assert_eq!(count_nonoverlapping("$$", "$$"), 1);
        assert_eq!(count_nonoverlapping("$", "$$"), 0);
        assert_eq!(count_nonoverlapping("a$b$c", "$"), 2);
        assert_eq!(count_nonoverlapping("", "$"), 0);
    }

    #[test]
    fn empty_needle_counts_zero() {
        assert_eq!(count_nonoverlapping("abc", ""), 0);
    }
}
