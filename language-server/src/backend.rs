use crate::analysis::document_path;
use crate::completion::completions;
use crate::config::Settings;
use crate::formatter;
use crate::hover::hover;
use crate::registry::SchemaRegistry;
use crate::symbols::{SymbolOccurrence, SymbolStore};
use crate::text::DocumentStore;
use dashmap::{DashMap, DashSet};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

pub struct Backend {
    pub(crate) client: Client,
    pub(crate) registry: Arc<SchemaRegistry>,
    pub(crate) symbols: Arc<SymbolStore>,
    pub(crate) documents: Arc<DocumentStore>,
    pub(crate) document_symbols: Arc<DashMap<String, Vec<SymbolOccurrence>>>,
    pub(crate) open_documents: Arc<DashSet<Url>>,
    pub(crate) workspace_roots: Arc<RwLock<Vec<PathBuf>>>,
    pub(crate) settings: Arc<RwLock<Settings>>,
}

impl Backend {
    pub fn new(client: Client, registry: Arc<SchemaRegistry>) -> Self {
        Self {
            client,
            registry,
            symbols: Arc::new(SymbolStore::default()),
            documents: Arc::new(DocumentStore::default()),
            document_symbols: Arc::new(DashMap::new()),
            open_documents: Arc::new(DashSet::new()),
            workspace_roots: Arc::new(RwLock::new(Vec::new())),
            settings: Arc::new(RwLock::new(Settings::default())),
        }
    }

    async fn apply_settings(&self, value: Option<serde_json::Value>) {
        match Settings::from_value(value) {
            Ok(settings) => {
                tracing::info!(?settings, "settings applied");
                *self.settings.write() = settings;
            }
            Err(err) => {
                tracing::warn!(error = %err, "keeping previous settings");
                self.client
                    .log_message(MessageType::WARNING, format!("CK3: {}", err))
                    .await;
            }
        }
    }

    async fn scan_workspace_for(&self, uri: &Url) {
        if !self.settings.read().scan_workspace {
            return;
        }
        match self.scan_workspace(uri) {
            Ok(0) => {}
            Ok(indexed) => tracing::info!(indexed, "indexed workspace files"),
            Err(err) => tracing::debug!(error = %err, "workspace scan skipped"),
        }
    }

    fn location(&self, uri: &Url, range: Range) -> Location {
        Location {
            uri: uri.clone(),
            range,
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.update_workspace_roots(&params);
        self.apply_settings(params.initialization_options.clone()).await;

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "ck3-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::FULL),
                        save: Some(TextDocumentSyncSaveOptions::Supported(true)),
                        ..Default::default()
                    },
                )),
                definition_provider: Some(OneOf::Left(true)),
                references_provider: Some(OneOf::Left(true)),
                completion_provider: Some(CompletionOptions::default()),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                document_formatting_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("server initialized");
        self.client
            .log_message(MessageType::INFO, "CK3 LSP server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;

        self.analyze_document(&uri, &text);
        self.open_documents.insert(uri.clone());
        self.scan_workspace_for(&uri).await;
        self.check_diagnostics(&uri).await;

        self.client
            .log_message(MessageType::INFO, format!("Opened document: {}", uri))
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        if let Some(change) = params.content_changes.into_iter().last() {
            self.analyze_document(&uri, &change.text);
            self.check_diagnostics(&uri).await;
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        let uri = params.text_document.uri;

        if let Some(text) = params.text {
            self.analyze_document(&uri, &text);
        }
        self.scan_workspace_for(&uri).await;
        self.check_diagnostics(&uri).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        // The file stays indexed; only its diagnostics go away.
        self.open_documents.remove(&uri);
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        self.apply_settings(Some(params.settings)).await;

        let open: Vec<Url> = self
            .open_documents
            .iter()
            .map(|uri| uri.key().clone())
            .collect();
        for uri in open {
            self.check_diagnostics(&uri).await;
        }
    }

    async fn formatting(&self, params: DocumentFormattingParams) -> Result<Option<Vec<TextEdit>>> {
        let uri = params.text_document.uri;
        let uri_str = uri.to_string();

        if let Some(doc) = self.documents.get(&uri_str) {
            let current = doc.text().to_string();
            let range = doc.range();
            drop(doc);

            let formatted = formatter::format_document(&current);
            if formatted == current {
                return Ok(Some(vec![]));
            }

            return Ok(Some(vec![TextEdit {
                range,
                new_text: formatted,
            }]));
        }

        Ok(None)
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(doc) = self.documents.get(uri.as_str()) else {
            return Ok(None);
        };
        let value = hover(
            &self.registry,
            &self.symbols,
            &document_path(&uri),
            &doc,
            position,
        );

        Ok(value.map(|value| Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value,
            }),
            range: None,
        }))
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        if let Some((symbol_type, symbol_id)) = self.get_symbol_at_position(&uri, position) {
            let index = self.symbols.index(symbol_type);
            if let Some(def) = index.definition(&symbol_id) {
                return Ok(Some(GotoDefinitionResponse::Scalar(
                    self.location(&def.location.uri, def.location.range),
                )));
            }
        }

        Ok(None)
    }

    async fn references(&self, params: ReferenceParams) -> Result<Option<Vec<Location>>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        if let Some((symbol_type, symbol_id)) = self.get_symbol_at_position(&uri, position) {
            let mut locations = Vec::new();
            let index = self.symbols.index(symbol_type);

            if params.context.include_declaration {
                if let Some(def) = index.definition(&symbol_id) {
                    locations.push(self.location(&def.location.uri, def.location.range));
                }
            }

            if let Some(refs) = index.references(&symbol_id) {
                for reference in refs.value() {
                    locations.push(self.location(&reference.location.uri, reference.location.range));
                }
            }

            return Ok(Some(locations));
        }

        Ok(None)
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(doc) = self.documents.get(uri.as_str()) else {
            return Ok(None);
        };
        let items = completions(
            &self.registry,
            &self.symbols,
            &document_path(&uri),
            &doc,
            position,
        );

        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(CompletionResponse::Array(items)))
    }
}
