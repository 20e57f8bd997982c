use std::collections::BTreeMap;

use answer_core::document::Corpus;
use answer_core::ranking::{compute_idf, rank_documents, tf_idf_score, top_documents, IdfTable};
use answer_core::text::Tokenizer;
use answer_core::types::Query;

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn top_document_for_simple_corpus() {
    let tokenizer = Tokenizer::english();
    let texts = [("a.txt", "The cat sat."), ("b.txt", "Dogs run fast.")];
    let corpus = Corpus::from_texts(texts, &tokenizer).unwrap();

    let idf = compute_idf(corpus.token_units());
    let query = Query::from_terms(["cat"]);

    let top = top_documents(&query, corpus.token_units(), &idf, 1);
    assert_eq!(top, vec!["a.txt"]);
}

#[test]
fn score_is_term_frequency_times_idf() {
    let idf: IdfTable = [("cat", 2.0), ("dog", 0.5)].into_iter().collect();
    let query = Query::from_terms(["cat", "dog", "unknown"]);

    let score = tf_idf_score(&query, &tokens(&["cat", "dog", "cat", "bird", "unknown"]), &idf);
    assert!((score - (2.0 * 2.0 + 1.0 * 0.5)).abs() < 1e-12);
}

#[test]
fn ranks_by_score_then_name() {
    let mut docs = BTreeMap::new();
    docs.insert("zeta".to_string(), tokens(&["cat", "cat"]));
    docs.insert("beta".to_string(), tokens(&["cat"]));
    docs.insert("alpha".to_string(), tokens(&["cat"]));
    docs.insert("omega".to_string(), tokens(&["dog"]));
    let idf: IdfTable = [("cat", 1.0), ("dog", 1.0)].into_iter().collect();

    let ranked = rank_documents(&Query::from_terms(["cat"]), &docs, &idf);
    let names: Vec<&str> = ranked.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "beta", "omega"]);
    assert_eq!(ranked[0].score, 2.0);
    assert_eq!(ranked[3].score, 0.0);
}

#[test]
fn never_returns_more_than_available_or_requested() {
    let mut docs = BTreeMap::new();
    docs.insert("a".to_string(), tokens(&["x"]));
    docs.insert("b".to_string(), tokens(&["y"]));
    let idf = compute_idf(&docs);
    let query = Query::from_terms(["x"]);

    assert_eq!(top_documents(&query, &docs, &idf, 1).len(), 1);
    assert_eq!(top_documents(&query, &docs, &idf, 2).len(), 2);
    assert_eq!(top_documents(&query, &docs, &idf, 10).len(), 2);
    assert!(top_documents(&query, &docs, &idf, 0).is_empty());
}

#[test]
fn disjoint_query_still_returns_n_documents_in_name_order() {
    let mut docs = BTreeMap::new();
    docs.insert("c".to_string(), tokens(&["one"]));
    docs.insert("a".to_string(), tokens(&["two"]));
    docs.insert("b".to_string(), tokens(&["three"]));
    let idf = compute_idf(&docs);

    let top = top_documents(&Query::from_terms(["missing"]), &docs, &idf, 2);
    assert_eq!(top, vec!["a", "b"]);

    let empty = top_documents(&Query::from_terms(Vec::<String>::new()), &docs, &idf, 3);
    assert_eq!(empty, vec!["a", "b", "c"]);
}

#[test]
fn terms_missing_from_idf_are_skipped() {
    let mut docs = BTreeMap::new();
    docs.insert("a".to_string(), tokens(&["cat", "ghost"]));
    docs.insert("b".to_string(), tokens(&["ghost", "ghost"]));
    let idf: IdfTable = [("cat", 1.0)].into_iter().collect();

    let ranked = rank_documents(&Query::from_terms(["cat", "ghost"]), &docs, &idf);
    assert_eq!(ranked[0].name, "a");
    assert_eq!(ranked[0].score, 1.0);
    assert_eq!(ranked[1].score, 0.0);
}
