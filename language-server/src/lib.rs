//! Language tooling for Crusader Kings III script.
//!
//! The library holds everything the `ck3-lsp` server and the `ck3-validate`
//! checker share: the field catalog and its path registry, the block
//! resolver, the hover/completion/diagnostics providers and the syntax lint.

pub mod analysis;
pub mod backend;
pub mod blocks;
pub mod catalog;
pub mod completion;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod formatter;
pub mod hover;
pub mod logging;
pub mod registry;
pub mod schema;
pub mod symbols;
pub mod text;
pub mod validator;

pub use backend::Backend;
pub use error::{Error, Result};
pub use registry::SchemaRegistry;
