// Re-export main components
pub mod analyzer;
pub mod corpus;
pub mod document;
pub mod error;
pub mod frequency;
pub mod ngram;
pub mod stopwords;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analysis, Analyzer, NGramSummary};
pub use corpus::Corpus;
pub use document::Document;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use ngram::{ngrams, NGram};
pub use stopwords::{BuiltinStopwords, Language, StopwordProvider, StopwordSet};
pub use tokenizer::{TokenizerPolicy, UnicodeWordTokenizer, WordTokenizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() {
        let analyzer = Analyzer::new(StopwordSet::from_words(&["the"]));
        let analysis = analyzer.analyze("The cat sat. The cat ran!");

        assert_eq!(analysis.total_tokens, 4);
        assert_eq!(analysis.unique_tokens, 3);
        assert_eq!(analysis.top_words[0], ("cat".to_string(), 2));
    }
}
