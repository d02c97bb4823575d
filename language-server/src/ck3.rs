use ck3_lsp::{logging, Backend, SchemaRegistry};
use std::sync::Arc;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    logging::init("ck3_lsp=info");
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting CK3 language server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let registry = Arc::new(SchemaRegistry::default());
    let (service, socket) = LspService::new(|client| Backend::new(client, registry));
    Server::new(stdin, stdout, socket).serve(service).await;
}
