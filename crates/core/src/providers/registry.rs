use crate::classifier::{self, ParsedEntry};

use super::keyword::KeywordParser;
use super::traits::EntryParser;

/// Registry of entry parsers, tried in registration order.
///
/// External parsers (e.g. a hosted text-completion service) register
/// ahead of the built-in keyword parser. If every registered parser
/// fails, the registry falls back to the deterministic keyword
/// classifier directly, so parsing as a whole never fails.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn EntryParser>>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Create a registry with the built-in keyword parser pre-configured.
    pub fn new_with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(KeywordParser::new()));
        registry
    }

    /// Register a new parser. Earlier registrations take priority.
    pub fn register(&mut self, parser: Box<dyn EntryParser>) {
        self.parsers.push(parser);
    }

    /// Register a parser ahead of everything already present. Used for
    /// external parsers that should be tried before the built-in one.
    pub fn register_primary(&mut self, parser: Box<dyn EntryParser>) {
        self.parsers.insert(0, parser);
    }

    /// Names of all registered parsers, in priority order.
    #[must_use]
    pub fn parser_names(&self) -> Vec<String> {
        self.parsers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Parse an utterance with the first parser that succeeds.
    pub async fn parse(&self, input: &str) -> ParsedEntry {
        for parser in &self.parsers {
            match parser.parse(input).await {
                Ok(entry) => return entry,
                Err(e) => {
                    tracing::warn!(parser = parser.name(), error = %e, "entry parser failed, trying next");
                }
            }
        }

        // Terminal fallback: the offline classifier is total.
        classifier::parse_entry(input)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new_with_defaults()
    }
}
