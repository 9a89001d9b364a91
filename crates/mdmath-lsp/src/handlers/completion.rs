use mdmath_lsp_core::{
    get_math_completions, math_context, CompletionEntry as CoreCompletionEntry, CompletionKind,
    MathContext,
};
use once_cell::sync::Lazy;
use tower_lsp::lsp_types::*;

use crate::document::Document;

/// Cached LSP completion items converted from core completion entries
static MATH_COMPLETIONS: Lazy<Vec<CompletionItem>> = Lazy::new(|| {
    get_math_completions()
        .iter()
        .map(convert_to_lsp_completion)
        .collect()
});

/// Convert a core completion entry to an LSP completion item
fn convert_to_lsp_completion(entry: &CoreCompletionEntry) -> CompletionItem {
    let kind = match entry.kind {
        CompletionKind::Command => CompletionItemKind::FUNCTION,
        CompletionKind::Snippet => CompletionItemKind::SNIPPET,
    };

    let insert_text_format = if entry.insert_text.contains('$') {
        InsertTextFormat::SNIPPET
    } else {
        InsertTextFormat::PLAIN_TEXT
    };

    CompletionItem {
        label: entry.label.clone(),
        kind: Some(kind),
        insert_text: Some(entry.insert_text.clone()),
        insert_text_format: Some(insert_text_format),
        sort_text: Some(entry.sort_text.clone()),
        ..Default::default()
    }
}

/// Get completion items for a position in the document.
///
/// `None` means the request was not triggered by a command start and
/// the client keeps whatever it was showing; `Some(vec![])` means the
/// trigger fired outside a math region and the client shows an empty
/// menu. The two are distinct in the protocol.
pub fn provide_completions(doc: &Document, position: Position) -> Option<Vec<CompletionItem>> {
    let line_before = doc.line_prefix(position.line, position.character)?;

    // A command start is an odd-length run of backslashes; an even run
    // is an escaped literal backslash.
    let run = trailing_backslash_run(line_before);
    if run % 2 == 0 {
        return None;
    }

    let offset = doc.offset_from_position(position.line, position.character);
    match math_context(doc.text(), offset, line_before) {
        MathContext::None => Some(Vec::new()),
        MathContext::Inline | MathContext::Display => Some(MATH_COMPLETIONS.clone()),
    }
}

/// Length of the contiguous run of backslashes ending the text.
fn trailing_backslash_run(text: &str) -> usize {
    text.bytes().rev().take_while(|&b| b == b'\\').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::new(text.to_string(), "markdown".to_string())
    }

    #[test]
    fn single_backslash_in_inline_math_serves_full_list() {
        let d = doc("some $x \\");
        let items = provide_completions(&d, Position::new(0, 9));
        let items = items.expect("trigger should fire");
        assert_eq!(items.len(), get_math_completions().len());
    }

    #[test]
    fn single_backslash_in_display_math_serves_full_list() {
        let d = doc("$$\n\\\n$$");
        let items = provide_completions(&d, Position::new(1, 1));
        let items = items.expect("trigger should fire");
        assert!(!items.is_empty());
    }

    #[test]
    fn display_math_detected_in_crlf_document() {
        let d = doc("text\r\n$$\r\n\\\r\n$$\r\n");
        let items = provide_completions(&d, Position::new(2, 1));
        let items = items.expect("trigger should fire");
        assert!(!items.is_empty());
    }

    #[test]
    fn double_backslash_is_not_a_trigger() {
        // Even run: the user typed an escaped backslash.
        let d = doc("some $x \\\\");
        assert!(provide_completions(&d, Position::new(0, 10)).is_none());
    }

    #[test]
    fn triple_backslash_is_a_trigger() {
        let d = doc("some $x \\\\\\");
        assert!(provide_completions(&d, Position::new(0, 11)).is_some());
    }

    #[test]
    fn no_trailing_backslash_is_not_a_trigger() {
        let d = doc("some $x y");
        assert!(provide_completions(&d, Position::new(0, 9)).is_none());
    }

    #[test]
    fn backslash_outside_math_serves_empty_list() {
        let d = doc("plain \\");
        let items = provide_completions(&d, Position::new(0, 7));
        assert_eq!(items, Some(Vec::new()));
    }

    #[test]
    fn unknown_line_is_not_a_trigger() {
        let d = doc("a");
        assert!(provide_completions(&d, Position::new(5, 0)).is_none());
    }

    #[test]
    fn items_carry_sort_text_and_formats() {
        let frac = MATH_COMPLETIONS
            .iter()
            .find(|c| c.label == "\\frac")
            .expect("frac missing");
        assert_eq!(frac.kind, Some(CompletionItemKind::SNIPPET));
        assert_eq!(frac.insert_text.as_deref(), Some("frac{$1}{$2}"));
        assert_eq!(frac.insert_text_format, Some(InsertTextFormat::SNIPPET));
        assert_eq!(frac.sort_text.as_deref(), Some("\\0f0r0a0c"));

        let alpha = MATH_COMPLETIONS
            .iter()
            .find(|c| c.label == "\\alpha")
            .expect("alpha missing");
        assert_eq!(alpha.kind, Some(CompletionItemKind::FUNCTION));
        assert_eq!(alpha.insert_text.as_deref(), Some("alpha"));
        assert_eq!(alpha.insert_text_format, Some(InsertTextFormat::PLAIN_TEXT));
    }

    #[test]
    fn trailing_run_lengths() {
        assert_eq!(trailing_backslash_run(""), 0);
        assert_eq!(trailing_backslash_run("abc"), 0);
        assert_eq!(trailing_backslash_run("a\\"), 1);
        assert_eq!(trailing_backslash_run("a\\\\"), 2);
        assert_eq!(trailing_backslash_run("\\a\\\\\\"), 3);
    }
}
