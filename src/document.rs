use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One lyric file, read fully into memory. The file name doubles as the
/// display title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub category: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Document {
    pub fn new(category: String, title: String, content: String) -> Self {
        Self {
            category,
            title,
            content,
            path: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builder() {
        let doc = Document::new(
            "Rock".to_string(),
            "anthem.txt".to_string(),
            "We will rock you".to_string(),
        )
        .with_path(PathBuf::from("songs/Rock/anthem.txt"));

        assert_eq!(doc.title, "anthem.txt");
        assert_eq!(doc.category, "Rock");
        assert!(doc.path.is_some());
    }
}
