use dashmap::DashMap;
use serde::Deserialize;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::capabilities;
use crate::document::Document;
use crate::handlers;
use crate::registration;

/// Workspace settings. Reserved for user-defined macro tables; nothing
/// consumes it yet.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub macros: Vec<String>,
}

pub struct Backend {
    client: Client,
    documents: DashMap<Url, Document>,
    debug: bool,
}

impl Backend {
    pub fn new(client: Client, debug: bool) -> Self {
        Self {
            client,
            documents: DashMap::new(),
            debug,
        }
    }

    async fn log_debug(&self, message: &str) {
        if self.debug {
            self.client
                .log_message(MessageType::INFO, format!("[DEBUG] {}", message))
                .await;
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        self.log_debug("Initializing mdmath LSP server").await;

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "mdmath-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.log_debug("Server initialized successfully").await;
        self.client
            .log_message(MessageType::INFO, "mdmath LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_debug("Shutting down server").await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri.clone();
        let text = params.text_document.text;
        let language_id = params.text_document.language_id;

        self.log_debug(&format!("Document opened: {}", uri)).await;

        self.documents.insert(uri, Document::new(text, language_id));
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        self.log_debug(&format!("Document changed: {}", uri)).await;

        if let Some(mut doc) = self.documents.get_mut(&uri) {
            // Full sync: each change replaces the entire text
            for change in params.content_changes {
                doc.update_text(change.text);
            }
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document closed: {}", uri)).await;
        self.documents.remove(&uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        // Settings are accepted but not consumed yet.
        match serde_json::from_value::<Settings>(params.settings) {
            Ok(settings) => {
                self.log_debug(&format!("Configuration updated: {:?}", settings))
                    .await;
            }
            Err(e) => {
                self.log_debug(&format!("Ignoring malformed configuration: {}", e))
                    .await;
            }
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        self.log_debug(&format!("Completion request at {:?}", position))
            .await;

        if let Some(doc) = self.documents.get(uri) {
            if !registration::MATH_COMPLETION.matches(uri, doc.language_id()) {
                return Ok(None);
            }
            let items = handlers::completion::provide_completions(&doc, position);
            Ok(items.map(CompletionResponse::Array))
        } else {
            Ok(None)
        }
    }
}
