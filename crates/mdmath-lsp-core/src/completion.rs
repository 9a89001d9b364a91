//! Candidate table for math completion
//!
//! Builds the completion entries offered inside math regions: one
//! deduplicated bucket per command arity, plus the `\begin`
//! environment snippet. The table is built once and shared read-only.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::katex;

/// A completion candidate, protocol-independent.
#[derive(Clone, Debug)]
pub struct CompletionEntry {
    /// Display label, including the leading backslash.
    pub label: String,
    pub kind: CompletionKind,
    /// Literal text for arity-0 commands, a snippet template otherwise.
    pub insert_text: String,
    /// Derived ordering key, see [`sort_key`].
    pub sort_text: String,
}

/// The kind of completion item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Command,
    Snippet,
}

/// Number of placeholder argument groups a command template takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Zero,
    One,
    Two,
}

/// All math completion entries, cached at startup
pub static MATH_COMPLETIONS: Lazy<Vec<CompletionEntry>> = Lazy::new(build_math_completions);

/// Get the full candidate list
pub fn get_math_completions() -> &'static [CompletionEntry] {
    &MATH_COMPLETIONS
}

// Semantic groups per arity bucket. Duplicates across groups of the
// same arity collapse to one candidate.
const GROUPS_0: &[&[&str]] = &[
    katex::DELIMITERS_0,
    katex::DELIMITER_SIZING_0,
    katex::GREEK_LETTERS_0,
    katex::OTHER_LETTERS_0,
    katex::SPACING_0,
    katex::VERTICAL_LAYOUT_0,
    katex::LOGIC_AND_SET_THEORY_0,
    katex::MACROS_0,
    katex::BIG_OPERATORS_0,
    katex::BINARY_OPERATORS_0,
    katex::BINOMIAL_COEFFICIENTS_0,
    katex::FRACTIONS_0,
    katex::MATH_OPERATORS_0,
    katex::RELATIONS_0,
    katex::NEGATED_RELATIONS_0,
    katex::ARROWS_0,
    katex::FONT_0,
    katex::SIZE_0,
    katex::STYLE_0,
    katex::SYMBOLS_AND_PUNCTUATION_0,
    katex::DEBUGGING_0,
];

const GROUPS_1: &[&[&str]] = &[
    katex::ACCENTS_1,
    katex::ANNOTATION_1,
    katex::VERTICAL_LAYOUT_1,
    katex::OVERLAP_1,
    katex::SPACING_1,
    katex::LOGIC_AND_SET_THEORY_1,
    katex::MATH_OPERATORS_1,
    katex::SQRT_1,
    katex::EXTENSIBLE_ARROWS_1,
    katex::FONT_1,
    katex::BRAKET_NOTATION_1,
    katex::CLASS_ASSIGNMENT_1,
];

const GROUPS_2: &[&[&str]] = &[
    katex::VERTICAL_LAYOUT_2,
    katex::BINOMIAL_COEFFICIENTS_2,
    katex::FRACTIONS_2,
    katex::COLOR_2,
];

fn build_math_completions() -> Vec<CompletionEntry> {
    let mut items = Vec::new();

    for name in dedup(GROUPS_0) {
        items.push(command_entry(name, Arity::Zero));
    }
    for name in dedup(GROUPS_1) {
        items.push(command_entry(name, Arity::One));
    }
    for name in dedup(GROUPS_2) {
        items.push(command_entry(name, Arity::Two));
    }
    items.push(environment_entry());

    items
}

/// Concatenate semantic groups into one sequence, keeping the first
/// occurrence of each name.
fn dedup(groups: &[&'static [&'static str]]) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for group in groups {
        for &name in *group {
            if seen.insert(name) {
                names.push(name);
            }
        }
    }
    names
}

/// Build one candidate from a command name and its arity.
pub fn command_entry(name: &str, arity: Arity) -> CompletionEntry {
    let label = format!("\\{name}");
    let (kind, insert_text) = match arity {
        Arity::Zero => (CompletionKind::Command, name.to_string()),
        Arity::One => (CompletionKind::Snippet, format!("{name}{{$1}}")),
        Arity::Two => (CompletionKind::Snippet, format!("{name}{{$1}}{{$2}}")),
    };
    let sort_text = sort_key(&label);

    CompletionEntry {
        label,
        kind,
        insert_text,
        sort_text,
    }
}

/// The `\begin` snippet: a choice placeholder over the environment
/// names, a body placeholder, and an auto-closing `\end` that mirrors
/// the chosen name.
fn environment_entry() -> CompletionEntry {
    let choices = katex::ENVIRONMENTS.join(",");
    let label = "\\begin".to_string();
    let sort_text = sort_key(&label);

    CompletionEntry {
        label,
        kind: CompletionKind::Snippet,
        insert_text: format!("begin{{${{1|{choices}|}}}}$2\\end{{$1}}"),
        sort_text,
    }
}

/// Ordering key: lowercase letters get a `0` prefix, uppercase letters
/// a `1` prefix and are lowercased, everything else passes through.
/// Under lexicographic ordering this clusters lowercase-led commands
/// before uppercase or mixed-case ones.
pub fn sort_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len() * 2);
    for c in label.chars() {
        if c.is_ascii_lowercase() {
            key.push('0');
            key.push(c);
        } else if c.is_ascii_uppercase() {
            key.push('1');
            key.push(c.to_ascii_lowercase());
        } else {
            key.push(c);
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let completions = get_math_completions();
        let mut seen = HashSet::new();
        for entry in completions {
            assert!(seen.insert(&entry.label), "duplicate label {}", entry.label);
        }
    }

    #[test]
    fn duplicate_names_collapse_within_a_bucket() {
        // "to" appears in both the logic group and the arrows group.
        let completions = get_math_completions();
        let count = completions.iter().filter(|e| e.label == "\\to").count();
        assert_eq!(count, 1);

        // "land" is both a binary operator and a logic symbol.
        let count = completions.iter().filter(|e| e.label == "\\land").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn total_matches_deduplicated_buckets() {
        let expected = dedup(GROUPS_0).len() + dedup(GROUPS_1).len() + dedup(GROUPS_2).len() + 1;
        assert_eq!(get_math_completions().len(), expected);
    }

    #[test]
    fn arity_zero_inserts_plain_name() {
        let entry = command_entry("alpha", Arity::Zero);
        assert_eq!(entry.label, "\\alpha");
        assert_eq!(entry.kind, CompletionKind::Command);
        assert_eq!(entry.insert_text, "alpha");
    }

    #[test]
    fn arity_one_inserts_single_placeholder() {
        let entry = command_entry("sqrt", Arity::One);
        assert_eq!(entry.kind, CompletionKind::Snippet);
        assert_eq!(entry.insert_text, "sqrt{$1}");
    }

    #[test]
    fn arity_two_inserts_two_placeholders() {
        let entry = command_entry("frac", Arity::Two);
        assert_eq!(entry.kind, CompletionKind::Snippet);
        assert_eq!(entry.insert_text, "frac{$1}{$2}");
    }

    #[test]
    fn environment_snippet_closes_itself() {
        let completions = get_math_completions();
        let begin = completions
            .iter()
            .find(|e| e.label == "\\begin")
            .expect("begin snippet missing");
        assert_eq!(begin.kind, CompletionKind::Snippet);
        assert!(begin.insert_text.starts_with("begin{${1|"));
        assert!(begin.insert_text.ends_with("|}}$2\\end{$1}"));
        assert!(begin.insert_text.contains("pmatrix"));
    }

    #[test]
    fn sort_key_prefixes_letters() {
        assert_eq!(sort_key("\\frac"), "\\0f0r0a0c");
        assert_eq!(sort_key("\\Gamma"), "\\1g0a0m0m0a");
        assert_eq!(sort_key("\\x2y"), "\\0x20y");
    }

    #[test]
    fn lowercase_led_labels_sort_first() {
        // Identical spellings up to case: lowercase wins.
        assert!(sort_key("\\gamma") < sort_key("\\Gamma"));
        // Lowercase-led names cluster before uppercase-led ones even
        // when the uppercase name would sort earlier alphabetically.
        assert!(sort_key("\\zeta") < sort_key("\\Alpha"));
    }

    #[test]
    fn every_entry_carries_its_sort_key() {
        for entry in get_math_completions() {
            assert_eq!(entry.sort_text, sort_key(&entry.label), "{}", entry.label);
        }
    }
}
