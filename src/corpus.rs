use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::document::Document;
use crate::error::{Error, Result};

/// File extension a lyric file must carry to be listed.
pub const LYRIC_EXTENSION: &str = "txt";

/// A corpus root: one subdirectory per genre/era category, each holding
/// plain-text lyric files. Holds only the path; every listing is a fresh
/// filesystem scan.
#[derive(Debug)]
pub struct Corpus {
    root: PathBuf,
}

impl Corpus {
    /// Open a corpus root. A missing root is a configuration error the
    /// caller cannot recover from.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::RootNotFound(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Category names, lexicographically sorted.
    pub fn categories(&self) -> Result<Vec<String>> {
        let mut categories = Vec::new();
        for entry in self.read_dir(&self.root)? {
            let entry = entry.map_err(|source| self.io_error(&self.root, source))?;
            if entry.path().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    categories.push(name.to_string());
                }
            }
        }
        categories.sort();
        debug!(count = categories.len(), "scanned corpus categories");
        Ok(categories)
    }

    /// Display title -> path for every `.txt` file in a category, sorted
    /// by name. An empty category yields an empty map, not an error.
    pub fn documents(&self, category: &str) -> Result<BTreeMap<String, PathBuf>> {
        let dir = self.root.join(category);
        if !dir.is_dir() {
            return Err(Error::UnknownCategory(category.to_string()));
        }

        let mut documents = BTreeMap::new();
        for entry in self.read_dir(&dir)? {
            let entry = entry.map_err(|source| self.io_error(&dir, source))?;
            let path = entry.path();
            let is_lyric = path.is_file()
                && path.extension().map_or(false, |ext| ext == LYRIC_EXTENSION);
            if is_lyric {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    documents.insert(name.to_string(), path);
                }
            }
        }
        debug!(category, count = documents.len(), "scanned category");
        Ok(documents)
    }

    /// Read one document by category and display title. I/O and encoding
    /// failures are fatal for this document only; the caller keeps
    /// processing other selections.
    pub fn load(&self, category: &str, name: &str) -> Result<Document> {
        let documents = self.documents(category)?;
        let path = documents.get(name).cloned().ok_or_else(|| Error::DocumentNotFound {
            category: category.to_string(),
            name: name.to_string(),
        })?;

        let content = read_text(&path)?;
        Ok(Document::new(category.to_string(), name.to_string(), content).with_path(path))
    }

    fn read_dir(&self, dir: &Path) -> Result<fs::ReadDir> {
        fs::read_dir(dir).map_err(|source| self.io_error(dir, source))
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> Error {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a file and decode it as UTF-8, keeping encoding failures distinct
/// from I/O failures.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })
}
