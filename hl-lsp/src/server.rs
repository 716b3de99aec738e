//! Main language server implementation

use std::collections::HashMap;
use std::sync::Arc;

use crate::features::completion::{complete_line, HlCompletion};
use crate::features::diagnostics::collect_diagnostics;
use crate::features::positions::{char_to_utf16, utf16_to_char};
use crate::features::semantic_tokens::{collect_semantic_tokens, token_types, HlSemanticToken};
use hl_config::CompletionConfig;
use hl_lexer::{Highlighter, Lexer, MODE_NAME};
use tokio::sync::RwLock;
use tower_lsp::async_trait;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionOptions, CompletionParams, CompletionResponse,
    CompletionTextEdit, Diagnostic, InitializeParams, InitializeResult, InitializedParams,
    MessageType, Position, Range, SemanticToken, SemanticTokenType, SemanticTokens,
    SemanticTokensFullOptions, SemanticTokensLegend, SemanticTokensOptions, SemanticTokensParams,
    SemanticTokensResult, SemanticTokensServerCapabilities, ServerCapabilities, ServerInfo,
    TextDocumentItem, TextDocumentSyncCapability, TextDocumentSyncKind, TextEdit, Url,
    WorkDoneProgressOptions,
};
use tower_lsp::Client;

pub const SERVER_NAME: &str = "hl-lsp";

#[async_trait]
pub trait LspClient: Send + Sync + Clone + 'static {
    async fn publish_diagnostics(
        &self,
        uri: Url,
        diagnostics: Vec<Diagnostic>,
        version: Option<i32>,
    );

    async fn log_message(&self, kind: MessageType, message: String);
}

#[async_trait]
impl LspClient for Client {
    async fn publish_diagnostics(
        &self,
        uri: Url,
        diagnostics: Vec<Diagnostic>,
        version: Option<i32>,
    ) {
        Client::publish_diagnostics(self, uri, diagnostics, version).await;
    }

    async fn log_message(&self, kind: MessageType, message: String) {
        Client::log_message(self, kind, message).await;
    }
}

pub trait FeatureProvider: Send + Sync + 'static {
    fn semantic_tokens(&self, highlighter: &Highlighter<Lexer>) -> Vec<HlSemanticToken>;
    fn diagnostics(&self, highlighter: &Highlighter<Lexer>) -> Vec<Diagnostic>;
    fn completion(&self, lexer: &Lexer, line: &str, column: usize) -> Vec<HlCompletion>;
}

pub struct DefaultFeatureProvider {
    completion: CompletionConfig,
}

impl DefaultFeatureProvider {
    pub fn new(completion: CompletionConfig) -> Self {
        Self { completion }
    }
}

impl FeatureProvider for DefaultFeatureProvider {
    fn semantic_tokens(&self, highlighter: &Highlighter<Lexer>) -> Vec<HlSemanticToken> {
        collect_semantic_tokens(highlighter)
    }

    fn diagnostics(&self, highlighter: &Highlighter<Lexer>) -> Vec<Diagnostic> {
        collect_diagnostics(highlighter)
    }

    fn completion(&self, lexer: &Lexer, line: &str, column: usize) -> Vec<HlCompletion> {
        complete_line(lexer, &self.completion, line, column)
    }
}

/// Open documents, each with its own line cache so edits only re-lex what they touch.
struct DocumentStore {
    lexer: Lexer,
    entries: RwLock<HashMap<Url, Highlighter<Lexer>>>,
}

impl DocumentStore {
    fn new(lexer: Lexer) -> Self {
        Self {
            lexer,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Stores the new text and runs `inspect` over the refreshed cache.
    async fn upsert<T>(
        &self,
        uri: Url,
        version: i32,
        text: &str,
        inspect: impl FnOnce(&Highlighter<Lexer>) -> T,
    ) -> T {
        let mut entries = self.entries.write().await;
        let highlighter = entries
            .entry(uri)
            .or_insert_with(|| Highlighter::new(self.lexer.clone()));
        let relexed = highlighter.set_text(text);
        tracing::debug!(version, relexed, "document updated");
        inspect(highlighter)
    }

    async fn with<T>(&self, uri: &Url, read: impl FnOnce(&Highlighter<Lexer>) -> T) -> Option<T> {
        self.entries.read().await.get(uri).map(read)
    }

    async fn remove(&self, uri: &Url) -> bool {
        self.entries.write().await.remove(uri).is_some()
    }
}

fn semantic_tokens_legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: token_types()
            .into_iter()
            .map(SemanticTokenType::new)
            .collect(),
        token_modifiers: Vec::new(),
    }
}

pub struct HlLanguageServer<C = Client, P = DefaultFeatureProvider> {
    client: C,
    documents: DocumentStore,
    features: Arc<P>,
}

impl HlLanguageServer<Client, DefaultFeatureProvider> {
    pub fn new(client: Client, lexer: Lexer, completion: CompletionConfig) -> Self {
        Self::with_features(
            client,
            lexer,
            Arc::new(DefaultFeatureProvider::new(completion)),
        )
    }
}

impl<C, P> HlLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    pub fn with_features(client: C, lexer: Lexer, features: Arc<P>) -> Self {
        Self {
            client,
            documents: DocumentStore::new(lexer),
            features,
        }
    }

    async fn update_and_publish(&self, uri: Url, version: i32, text: &str) {
        let features = &self.features;
        let diagnostics = self
            .documents
            .upsert(uri.clone(), version, text, |highlighter| {
                features.diagnostics(highlighter)
            })
            .await;
        self.client
            .publish_diagnostics(uri, diagnostics, Some(version))
            .await;
    }
}

fn encode_semantic_tokens(tokens: &[HlSemanticToken]) -> Vec<SemanticToken> {
    let mut data = Vec::with_capacity(tokens.len());
    let mut prev_line = 0u32;
    let mut prev_start = 0u32;

    for token in tokens {
        if token.length == 0 {
            continue;
        }
        let delta_line = token.line.saturating_sub(prev_line);
        let delta_start = if delta_line == 0 {
            token.start.saturating_sub(prev_start)
        } else {
            token.start
        };
        data.push(SemanticToken {
            delta_line,
            delta_start,
            length: token.length,
            token_type: token.type_index(),
            token_modifiers_bitset: 0,
        });
        prev_line = token.line;
        prev_start = token.start;
    }

    data
}

fn to_completion_item(line: u32, text: &str, completion: HlCompletion) -> CompletionItem {
    let range = Range {
        start: Position::new(line, char_to_utf16(text, completion.from)),
        end: Position::new(line, char_to_utf16(text, completion.to)),
    };
    let kind = if completion.is_invocation {
        CompletionItemKind::FUNCTION
    } else {
        CompletionItemKind::KEYWORD
    };
    CompletionItem {
        label: completion.label.clone(),
        kind: Some(kind),
        text_edit: Some(CompletionTextEdit::Edit(TextEdit {
            range,
            new_text: completion.label,
        })),
        ..CompletionItem::default()
    }
}

#[async_trait]
impl<C, P> tower_lsp::LanguageServer for HlLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            semantic_tokens_provider: Some(
                SemanticTokensServerCapabilities::SemanticTokensOptions(SemanticTokensOptions {
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                    legend: semantic_tokens_legend(),
                    range: None,
                    full: Some(SemanticTokensFullOptions::Bool(true)),
                }),
            ),
            completion_provider: Some(CompletionOptions {
                trigger_characters: Some(vec![".".to_string()]),
                ..CompletionOptions::default()
            }),
            ..ServerCapabilities::default()
        };

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(
                MessageType::INFO,
                format!("{} ready for {} documents", SERVER_NAME, MODE_NAME),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: lsp_types::DidOpenTextDocumentParams) {
        let TextDocumentItem {
            uri, version, text, ..
        } = params.text_document;
        self.update_and_publish(uri, version, &text).await;
    }

    async fn did_change(&self, params: lsp_types::DidChangeTextDocumentParams) {
        if let Some(change) = params.content_changes.into_iter().last() {
            let document = params.text_document;
            self.update_and_publish(document.uri, document.version, &change.text)
                .await;
        }
    }

    async fn did_close(&self, params: lsp_types::DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        if self.documents.remove(&uri).await {
            self.client.publish_diagnostics(uri, Vec::new(), None).await;
        }
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let features = &self.features;
        let tokens = self
            .documents
            .with(&params.text_document.uri, |highlighter| {
                features.semantic_tokens(highlighter)
            })
            .await;
        Ok(tokens.map(|tokens| {
            SemanticTokensResult::Tokens(SemanticTokens {
                result_id: None,
                data: encode_semantic_tokens(&tokens),
            })
        }))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let position = params.text_document_position.position;
        let features = &self.features;
        let items = self
            .documents
            .with(&params.text_document_position.text_document.uri, |highlighter| {
                let text = highlighter.line_text(position.line as usize)?;
                let column = utf16_to_char(text, position.character);
                let completions = features.completion(highlighter.mode(), text, column);
                Some(
                    completions
                        .into_iter()
                        .map(|completion| to_completion_item(position.line, text, completion))
                        .collect::<Vec<_>>(),
                )
            })
            .await
            .flatten();
        Ok(items.map(CompletionResponse::Array))
    }
}
