use serde::Serialize;
use tracing::debug;

use crate::frequency::FrequencyTable;
use crate::ngram::{ngrams, NGram};
use crate::stopwords::{Language, StopwordSet};
use crate::tokenizer::{clean, sentence_count, TokenizerPolicy, WordTokenizer};

/// How many top words a report carries for display.
pub const TOP_WORDS: usize = 10;
/// How many words feed the vocabulary distribution chart.
pub const DISTRIBUTION_SIZE: usize = 20;
/// How many of each n-gram size a report carries.
pub const NGRAM_TOP: usize = 5;
/// N-gram widths extracted per document.
pub const NGRAM_SIZES: [usize; 3] = [2, 3, 4];

/// Per-document report: the cleaned token sequence plus every derived
/// statistic the presentation layer renders. Recomputed from scratch per
/// selection; nothing is cached across documents.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Cleaned tokens in original order, duplicates retained. Kept for
    /// consumers that need the full multiset (word clouds).
    pub tokens: Vec<String>,
    pub total_tokens: usize,
    pub unique_tokens: usize,
    pub sentence_count: usize,
    pub avg_tokens_per_sentence: f64,
    /// Top unigrams for display, `(word, count)` descending.
    pub top_words: Vec<(String, usize)>,
    /// Larger unigram ranking feeding the distribution chart.
    pub distribution: Vec<(String, usize)>,
    /// Top n-grams for each width in [`NGRAM_SIZES`].
    pub top_ngrams: Vec<NGramSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NGramSummary {
    pub n: usize,
    pub top: Vec<(NGram, usize)>,
}

/// The analysis pipeline: a tokenizer policy plus an active stopword
/// set. Stateless across calls; each document gets a fresh derivation.
pub struct Analyzer {
    policy: Box<dyn TokenizerPolicy>,
    stopwords: StopwordSet,
}

impl Analyzer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            policy: Box::new(WordTokenizer),
            stopwords,
        }
    }

    /// Analyzer with the builtin stopword set for a language.
    pub fn for_language(language: Language) -> Self {
        Self::new(StopwordSet::builtin(language))
    }

    pub fn with_policy(mut self, policy: Box<dyn TokenizerPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Normalize one text into its token sequence.
    pub fn clean(&self, text: &str) -> Vec<String> {
        clean(text, &self.stopwords, self.policy.as_ref())
    }

    /// Full single-pass analysis of one document. Total function: an
    /// all-stopword text yields zero counts and empty tables.
    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.clean(text);
        let sentences = sentence_count(text);
        let table = FrequencyTable::from_items(tokens.iter().cloned());

        let total_tokens = table.total();
        let unique_tokens = table.distinct();
        // sentence_count floors at 1, so this never divides by zero.
        let avg_tokens_per_sentence = total_tokens as f64 / sentences as f64;

        let top_ngrams = NGRAM_SIZES
            .iter()
            .map(|&n| NGramSummary {
                n,
                top: FrequencyTable::from_items(ngrams(&tokens, n)).top_k(NGRAM_TOP),
            })
            .collect();

        debug!(total_tokens, unique_tokens, sentences, "analyzed document");

        Analysis {
            total_tokens,
            unique_tokens,
            sentence_count: sentences,
            avg_tokens_per_sentence,
            top_words: table.top_k(TOP_WORDS),
            distribution: table.top_k(DISTRIBUTION_SIZE),
            top_ngrams,
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_scenario() {
        let analyzer = Analyzer::new(StopwordSet::from_words(&["the"]));
        let analysis = analyzer.analyze("The cat sat. The cat ran!");

        assert_eq!(analysis.tokens, vec!["cat", "sat", "cat", "ran"]);
        assert_eq!(analysis.total_tokens, 4);
        assert_eq!(analysis.unique_tokens, 3);
        assert_eq!(analysis.sentence_count, 2);
        assert!((analysis.avg_tokens_per_sentence - 2.0).abs() < f64::EPSILON);
        assert_eq!(analysis.top_words[0], ("cat".to_string(), 2));
    }

    #[test]
    fn test_all_stopwords_degrades_gracefully() {
        let analyzer = Analyzer::new(StopwordSet::from_words(&["la", "el", "de"]));
        let analysis = analyzer.analyze("La el DE la el.");

        assert_eq!(analysis.total_tokens, 0);
        assert_eq!(analysis.unique_tokens, 0);
        assert!(analysis.top_words.is_empty());
        assert!(analysis.distribution.is_empty());
        assert_eq!(analysis.avg_tokens_per_sentence, 0.0);
        for summary in &analysis.top_ngrams {
            assert!(summary.top.is_empty());
        }
    }

    #[test]
    fn test_ngram_summaries_cover_configured_sizes() {
        let analyzer = Analyzer::new(StopwordSet::empty());
        let analysis = analyzer.analyze("one two three four five one two three");

        let sizes: Vec<usize> = analysis.top_ngrams.iter().map(|s| s.n).collect();
        assert_eq!(sizes, NGRAM_SIZES.to_vec());

        let bigrams = &analysis.top_ngrams[0];
        assert_eq!(bigrams.top[0].0.to_string(), "one two");
        assert_eq!(bigrams.top[0].1, 2);
    }

    #[test]
    fn test_spanish_language_pipeline() {
        let analyzer = Analyzer::for_language(Language::Spanish);
        let analysis = analyzer.analyze("El corazón de la canción. ¡La canción!");

        assert!(analysis.tokens.contains(&"corazón".to_string()));
        assert!(analysis.tokens.contains(&"canción".to_string()));
        assert!(!analysis.tokens.contains(&"el".to_string()));
        assert!(!analysis.tokens.contains(&"de".to_string()));
        assert_eq!(analysis.top_words[0], ("canción".to_string(), 2));
    }

    #[test]
    fn test_repeated_analysis_is_deterministic() {
        let analyzer = Analyzer::new(StopwordSet::from_words(&["the", "a"]));
        let text = "The rain falls. A fire burns! The rain returns?";
        let first = analyzer.analyze(text);
        let second = analyzer.analyze(text);

        assert_eq!(first.tokens, second.tokens);
        assert_eq!(first.top_words, second.top_words);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn test_distribution_is_superset_of_top_words() {
        let analyzer = Analyzer::new(StopwordSet::empty());
        let analysis = analyzer.analyze("a b c d a b a");

        assert!(analysis.top_words.len() <= TOP_WORDS);
        assert!(analysis.distribution.len() <= DISTRIBUTION_SIZE);
        assert_eq!(
            analysis.distribution[..analysis.top_words.len()],
            analysis.top_words[..]
        );
    }
}
