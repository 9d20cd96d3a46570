use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

lazy_static::lazy_static! {
    static ref SPANISH: HashSet<String> =
        stop_words::get(stop_words::LANGUAGE::Spanish).into_iter().collect();
    static ref ENGLISH: HashSet<String> =
        stop_words::get(stop_words::LANGUAGE::English).into_iter().collect();
}

/// Stopword language for an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Spanish,
    English,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Language {
    /// Parse a language tag; accepts short codes, English names and the
    /// Spanish-language names of both languages.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "es" | "spanish" | "español" | "espanol" => Some(Language::Spanish),
            "en" | "english" | "inglés" | "ingles" => Some(Language::English),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s).ok_or_else(|| format!("unsupported language: {s}"))
    }
}

/// A set of words excluded from analysis. Built once per selected
/// language and treated as immutable while an analysis runs.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// An empty set: nothing gets filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The builtin NLTK-style list for a language. Lists are lowercase,
    /// matching the cleaning pipeline which lowercases before filtering.
    pub fn builtin(language: Language) -> Self {
        let words = match language {
            Language::Spanish => SPANISH.clone(),
            Language::English => ENGLISH.clone(),
        };
        Self { words }
    }

    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a custom list from a file, one word per line. Blank lines and
    /// `#` comments are skipped; entries are lowercased on load.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        Ok(Self { words })
    }

    pub fn add(&mut self, word: impl Into<String>) {
        self.words.insert(word.into().to_lowercase());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}

/// Capability seam: maps a language tag to its stopword set, so the
/// analyzer never hard-codes where the lists come from.
pub trait StopwordProvider {
    fn stopwords(&self, language: Language) -> StopwordSet;
}

/// Default provider backed by the builtin lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStopwords;

impl StopwordProvider for BuiltinStopwords {
    fn stopwords(&self, language: Language) -> StopwordSet {
        StopwordSet::builtin(language)
    }
}
