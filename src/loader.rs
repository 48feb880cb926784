use std::{fs, path::{Path, PathBuf}};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{config::{Config, Limits, MIN_DOCUMENTS}, vectorizer::CountVectorizer, Error};

/// A discovered text document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    /// path relative to the scanned folder, used as the row label
    pub label: String,
    pub path: PathBuf,
}

/// Whether `path` has one of `extensions` (lowercase, no dot)
pub fn has_text_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| *x == e.to_lowercase()))
        .unwrap_or(false)
}

/// Walk `folder` in file name order and collect up to `limit` text documents.
/// A missing folder is created and yields no documents.
pub fn discover(folder: &Path, extensions: &[String], limit: usize) -> Result<Vec<DocumentSource>, Error> {
    if !folder.exists() {
        fs::create_dir_all(folder).map_err(|source| Error::Io {
            path: folder.to_path_buf(),
            source,
        })?;
        info!(folder = %folder.display(), "created missing document folder");
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(folder).to_path_buf();
            Error::Io { path, source: err.into() }
        })?;
        if !entry.file_type().is_file() || !has_text_extension(entry.path(), extensions) {
            continue;
        }
        let path = entry.into_path();
        let label = path
            .strip_prefix(folder)
            .unwrap_or(&path)
            .to_string_lossy()
            .into_owned();
        debug!(%label, "document found");
        found.push(DocumentSource { label, path });
        if found.len() == limit {
            break;
        }
    }
    Ok(found)
}

/// Read a document, replacing invalid UTF-8
pub fn read_text(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Discover and vectorize the documents named by `config`.
/// Returns the filled vectorizer and the limits adjusted to what was found.
///
/// # Errors
/// `Error::NotEnoughDocuments` below two documents, `Error::Io` on read failure.
pub fn load_corpus(config: &Config) -> Result<(CountVectorizer, Limits), Error> {
    let sources = discover(&config.folder, &config.extensions, config.limits.n)?;
    if sources.len() < MIN_DOCUMENTS {
        return Err(Error::NotEnoughDocuments { found: sources.len() });
    }
    let limits = config.limits.shrink_to(sources.len());

    let mut vectorizer = CountVectorizer::with_policy(config.empty_tokens);
    for source in &sources {
        let text = read_text(&source.path)?;
        vectorizer.insert_text(source.label.clone(), &text);
    }
    info!(
        documents = vectorizer.doc_num(),
        vocabulary = vectorizer.vocabulary().len(),
        "corpus loaded"
    );
    Ok((vectorizer, limits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, text).unwrap();
    }

    fn exts() -> Vec<String> {
        vec!["txt".into(), "log".into(), "md".into()]
    }

    #[test]
    fn filters_by_extension_case_insensitively() {
        assert!(has_text_extension(Path::new("a.TXT"), &exts()));
        assert!(has_text_extension(Path::new("dir/b.md"), &exts()));
        assert!(!has_text_extension(Path::new("c.rs"), &exts()));
        assert!(!has_text_extension(Path::new("README"), &exts()));
    }

    #[test]
    fn discovers_in_name_order_and_stops_at_limit() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "b.txt", "b");
        write(tmp.path(), "a.log", "a");
        write(tmp.path(), "skip.bin", "x");
        write(tmp.path(), "sub/c.md", "c");

        let all = discover(tmp.path(), &exts(), 10).unwrap();
        let labels: Vec<&str> = all.iter().map(|d| d.label.as_str()).collect();
        let nested = Path::new("sub").join("c.md").to_string_lossy().into_owned();
        assert_eq!(labels, vec!["a.log", "b.txt", nested.as_str()]);

        let two = discover(tmp.path(), &exts(), 2).unwrap();
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn missing_folder_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = tmp.path().join("documents");
        let found = discover(&folder, &exts(), 5).unwrap();
        assert!(found.is_empty());
        assert!(folder.is_dir());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.txt");
        fs::write(&path, b"ok \xff word").unwrap();
        let text = read_text(&path).unwrap();
        assert!(text.starts_with("ok "));
        assert!(text.ends_with(" word"));
    }

    #[test]
    fn load_corpus_requires_two_documents() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "only.txt", "alone");
        let config = Config::new(5, 3).with_folder(tmp.path());
        let err = load_corpus(&config).unwrap_err();
        assert!(matches!(err, Error::NotEnoughDocuments { found: 1 }));
    }

    #[test]
    fn load_corpus_shrinks_limits() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "a.txt", "cat dog");
        write(tmp.path(), "b.txt", "cat dog");
        write(tmp.path(), "c.txt", "fish bird");
        let config = Config::new(10, 40).with_folder(tmp.path());
        let (mut vectorizer, limits) = load_corpus(&config).unwrap();
        assert_eq!(limits, Limits { n: 3, k: 2 });
        assert_eq!(vectorizer.doc_num(), 3);

        let ranking = vectorizer.rank(limits.k).unwrap();
        assert_eq!(ranking.to_string(), "a.txt - b.txt | 1.0\na.txt - c.txt | 0.0\n");
    }
}
