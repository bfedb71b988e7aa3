use async_trait::async_trait;

use crate::classifier::{self, ParsedEntry};
use crate::errors::CoreError;

use super::traits::EntryParser;

/// The built-in offline parser: keyword classification plus table-driven
/// nutrition estimates. Total over all inputs, so `parse` never fails.
pub struct KeywordParser;

impl KeywordParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeywordParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl EntryParser for KeywordParser {
    fn name(&self) -> &str {
        "KeywordParser"
    }

    async fn parse(&self, input: &str) -> Result<ParsedEntry, CoreError> {
        Ok(classifier::parse_entry(input))
    }
}
