use std::fs;

use answer_core::document::{Corpus, CorpusError, Document, DocumentError, DocumentId};
use answer_core::text::Tokenizer;
use tempfile::tempdir;

#[test]
fn loads_only_top_level_txt_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "The cat sat.").unwrap();
    fs::write(dir.path().join("b.txt"), "Dogs run fast.").unwrap();
    fs::write(dir.path().join("notes.md"), "cat cat cat").unwrap();
    fs::create_dir(dir.path().join("nested.txt")).unwrap();
    fs::write(dir.path().join("nested.txt").join("c.txt"), "hidden").unwrap();

    let corpus = Corpus::load_dir(dir.path(), &Tokenizer::english()).unwrap();

    let names: Vec<&str> = corpus.documents().map(|d| d.id.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
    assert_eq!(corpus.get("a.txt").unwrap().tokens, vec!["cat", "sat"]);
    assert_eq!(corpus.get("a.txt").unwrap().content, "The cat sat.");
}

#[test]
fn missing_directory_fails_fast() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let result = Corpus::load_dir(&missing, &Tokenizer::english());
    assert!(matches!(result, Err(CorpusError::NotFound(p)) if p == missing));
}

#[test]
fn file_path_is_not_a_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "text").unwrap();
    let result = Corpus::load_dir(&file, &Tokenizer::english());
    assert!(matches!(result, Err(CorpusError::NotADirectory(_))));
}

#[test]
fn directory_without_documents_is_empty_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "no txt here").unwrap();
    let result = Corpus::load_dir(dir.path(), &Tokenizer::english());
    assert!(matches!(result, Err(CorpusError::Empty)));
}

#[test]
fn invalid_utf8_document_names_the_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.txt"), [0u8, 159, 146, 150]).unwrap();

    let err = Corpus::load_dir(dir.path(), &Tokenizer::english()).unwrap_err();
    match err {
        CorpusError::Document { path, source } => {
            assert!(path.ends_with("bad.txt"));
            assert!(matches!(source, DocumentError::InvalidUtf8(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn in_memory_corpus_rejects_duplicates_and_empty_names() {
    let tokenizer = Tokenizer::english();

    let dup = Corpus::from_texts([("a.txt", "one"), ("a.txt", "two")], &tokenizer);
    assert!(matches!(dup, Err(CorpusError::DuplicateDocumentId(name)) if name == "a.txt"));

    let unnamed = Corpus::from_texts([("", "text")], &tokenizer);
    assert!(matches!(unnamed, Err(CorpusError::DocumentId(_))));

    let none = Corpus::from_texts(Vec::<(String, String)>::new(), &tokenizer);
    assert!(matches!(none, Err(CorpusError::Empty)));
}

#[test]
fn same_content_same_version() {
    let tokenizer = Tokenizer::english();
    let ingest = |name: &str, content: &[u8]| {
        Document::ingest(DocumentId::new(name).unwrap(), content.to_vec(), &tokenizer).unwrap()
    };
    let a = ingest("a.txt", b"Hello world");
    let b = ingest("b.txt", b"Hello world");
    let c = ingest("c.txt", b"Hello world\n");

    assert_eq!(a.version, b.version);
    assert_ne!(a.version, c.version);
    assert!(a.version.as_str().starts_with("sha256:"));
}

#[test]
fn document_id_is_relative_to_root() {
    let root = std::path::Path::new("/corpus");
    let id = DocumentId::from_path(root, &root.join("Guide.txt")).unwrap();
    assert_eq!(id.as_str(), "Guide.txt");

    let outside = DocumentId::from_path(root, std::path::Path::new("/elsewhere/a.txt"));
    assert!(outside.is_err());
}
