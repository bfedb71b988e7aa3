use async_trait::async_trait;

use crate::classifier::ParsedEntry;
use crate::errors::CoreError;

/// Trait abstraction for entry parsers.
///
/// A parser turns one free-text utterance into a structured entry. The
/// built-in keyword parser is deterministic and offline; a hosted
/// text-completion service can implement the same trait and be registered
/// ahead of it, with the keyword parser remaining as the fallback so
/// entry logging never depends on the network.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait EntryParser: Send + Sync {
    /// Human-readable name of this parser (for logs/errors).
    fn name(&self) -> &str;

    /// Parse one utterance into a structured entry.
    async fn parse(&self, input: &str) -> Result<ParsedEntry, CoreError>;
}
