use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords::StopwordSet;

/// Capability seam for splitting text into raw token candidates.
/// Implementations only split; case folding and stopword filtering stay
/// in [`clean`].
pub trait TokenizerPolicy {
    fn raw_tokens(&self, text: &str) -> Vec<String>;
}

/// Default splitter. Word characters (Unicode alphanumerics, so `ñ` and
/// `á` survive, plus `_`) accumulate into the current token; whitespace
/// ends it; any other character is deleted in place. Deletion, not
/// splitting: `"don't"` becomes the single token `dont`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl TokenizerPolicy for WordTokenizer {
    fn raw_tokens(&self, text: &str) -> Vec<String> {
        text.chars()
            .fold(vec![String::new()], |mut tokens, c| {
                if c.is_alphanumeric() || c == '_' {
                    if let Some(last) = tokens.last_mut() {
                        last.push(c);
                    }
                } else if c.is_whitespace()
                    && tokens.last().map_or(false, |s| !s.is_empty())
                {
                    tokens.push(String::new());
                }
                tokens
            })
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Alternative policy over Unicode word boundaries. Unlike
/// [`WordTokenizer`] this keeps word-internal apostrophes ("can't" stays
/// `can't`, not `cant`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl TokenizerPolicy for UnicodeWordTokenizer {
    fn raw_tokens(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

/// Normalization pipeline: lowercase the whole text, split with the
/// policy, drop stopwords and empty candidates. Order matches original
/// appearance; duplicates are retained.
pub fn clean(text: &str, stopwords: &StopwordSet, policy: &dyn TokenizerPolicy) -> Vec<String> {
    let lowered = text.to_lowercase();
    policy
        .raw_tokens(&lowered)
        .into_iter()
        .filter(|t| !t.is_empty() && !stopwords.contains(t))
        .collect()
}

/// Sentence count heuristic: occurrences of `.`, `!` and `?`, floored at
/// 1 so downstream averages never divide by zero. Counts characters, not
/// sentences: "wait?!" contributes two, abbreviations inflate the total.
pub fn sentence_count(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count()
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer() {
        let tokens = WordTokenizer.raw_tokens("Hello, World! This is a test.");
        assert_eq!(tokens, vec!["Hello", "World", "This", "is", "a", "test"]);
    }

    #[test]
    fn test_word_tokenizer_keeps_underscore_and_digits() {
        let tokens = WordTokenizer.raw_tokens("track_01 remix 2024");
        assert_eq!(tokens, vec!["track_01", "remix", "2024"]);
    }

    #[test]
    fn test_word_tokenizer_deletes_intra_word_punctuation() {
        let tokens = WordTokenizer.raw_tokens("don't stop believin'");
        assert_eq!(tokens, vec!["dont", "stop", "believin"]);
        assert_eq!(WordTokenizer.raw_tokens("dead-beat"), vec!["deadbeat"]);
    }

    #[test]
    fn test_clean_contractions_collapse_before_filtering() {
        let stopwords = StopwordSet::from_words(&["dont"]);
        let tokens = clean("Don't stop! Don't look back.", &stopwords, &WordTokenizer);
        assert_eq!(tokens, vec!["stop", "look", "back"]);
    }

    #[test]
    fn test_word_tokenizer_keeps_non_ascii() {
        let tokens = WordTokenizer.raw_tokens("corazón, canción");
        assert_eq!(tokens, vec!["corazón", "canción"]);
    }

    #[test]
    fn test_unicode_word_tokenizer() {
        let tokens = UnicodeWordTokenizer.raw_tokens("can't stop won't stop");
        assert_eq!(tokens, vec!["can't", "stop", "won't", "stop"]);
    }

    #[test]
    fn test_clean_lowercases_and_filters() {
        let stopwords = StopwordSet::from_words(&["the"]);
        let tokens = clean("The cat sat. The cat ran!", &stopwords, &WordTokenizer);
        assert_eq!(tokens, vec!["cat", "sat", "cat", "ran"]);
    }

    #[test]
    fn test_clean_properties() {
        let stopwords = StopwordSet::from_words(&["a", "the", "of"]);
        let tokens = clean(
            "A Night OF the Living; dead-beat drums!!",
            &stopwords,
            &WordTokenizer,
        );
        assert!(!tokens.is_empty());
        for token in &tokens {
            assert_eq!(token, &token.to_lowercase());
            assert!(token.chars().all(|c| c.is_alphanumeric() || c == '_'));
            assert!(!stopwords.contains(token));
        }
    }

    #[test]
    fn test_clean_is_idempotent() {
        let stopwords = StopwordSet::from_words(&["the", "and"]);
        let once = clean("The thunder AND the rain...", &stopwords, &WordTokenizer);
        let again = clean(&once.join(" "), &stopwords, &WordTokenizer);
        assert_eq!(once, again);
    }

    #[test]
    fn test_clean_empty_result() {
        let stopwords = StopwordSet::from_words(&["the", "and"]);
        let tokens = clean("the and THE", &stopwords, &WordTokenizer);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count("The cat sat. The cat ran!"), 2);
        assert_eq!(sentence_count("one? two! three."), 3);
        // Floor of 1 even with no terminators at all.
        assert_eq!(sentence_count("no punctuation here"), 1);
        assert_eq!(sentence_count(""), 1);
        // Character counting, not segmentation.
        assert_eq!(sentence_count("what?!"), 2);
    }
}
