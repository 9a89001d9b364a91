use tower_lsp::lsp_types::*;

use crate::registration;

/// Define the server capabilities for the mdmath LSP
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Full text sync - simplest to implement
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::FULL,
        )),

        // Math command completion, triggered on the escape character
        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(vec![registration::MATH_COMPLETION.trigger.to_string()]),
            ..Default::default()
        }),

        ..Default::default()
    }
}
