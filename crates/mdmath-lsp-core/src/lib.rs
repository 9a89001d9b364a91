//! Core completion logic for math regions in markdown documents
//!
//! This crate provides the protocol-independent pieces of the math
//! completion feature: the KaTeX command inventory, the candidate
//! table built from it, and the delimiter heuristic that decides
//! whether a cursor position sits inside a math span.
//!
//! # Example
//!
//! ```
//! use mdmath_lsp_core::{get_math_completions, math_context, MathContext};
//!
//! // The candidate table is built once and shared.
//! let completions = get_math_completions();
//! assert!(completions.iter().any(|e| e.label == "\\alpha"));
//!
//! // Context detection is a pure function of the document text.
//! assert_eq!(math_context("$$x$$", 2, "$$"), MathContext::Display);
//! ```

pub mod completion;
pub mod katex;
pub mod math_context;

// Re-export main types for convenience
pub use completion::{
    command_entry, get_math_completions, sort_key, Arity, CompletionEntry, CompletionKind,
};
pub use math_context::{count_nonoverlapping, math_context, MathContext};
