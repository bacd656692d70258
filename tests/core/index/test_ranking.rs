// BM25 ranking scenarios and AND/OR relationships

use crate::common::scenario_index;
use memlex::core::config::IndexConfig;
use memlex::core::index::InvertedIndex;
use memlex::core::tokenizer::tokenize;

#[test]
fn test_and_scenario() {
    let index = scenario_index();

    let hits = index.search_and(&["hello", "world"], 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document_id, 1);
    assert!(hits[0].score > 0.0);

    assert_eq!(index.search_and(&["test"], 10).len(), 3);
}

#[test]
fn test_term_frequency_scenario() {
    let mut index = InvertedIndex::new(&IndexConfig::default());
    index.add(1, &["test"]).unwrap();
    index.add(2, &["test", "test", "test", "test"]).unwrap();

    let hits = index.search_and(&["test"], 10);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].document_id, 2);
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn test_and_is_subset_of_or() {
    let mut index = InvertedIndex::new(&IndexConfig::default());
    let corpus = [
        "rust borrow checker rules",
        "the borrow checker rejects aliasing",
        "python has no borrow checker",
        "aliasing rules in rust",
        "unrelated words entirely",
    ];
    for (id, text) in corpus.iter().enumerate() {
        index.add(id as u64 + 1, &tokenize(text, 100)).unwrap();
    }

    for query in [
        "borrow checker",
        "rust rules",
        "aliasing",
        "rust python",
        "missing borrow",
    ] {
        let tokens = tokenize(query, 10);
        let and_ids: Vec<_> = index.search_and(&tokens, 100).iter().map(|h| h.document_id).collect();
        let or_ids: Vec<_> = index.search_or(&tokens, 100).iter().map(|h| h.document_id).collect();
        for id in &and_ids {
            assert!(or_ids.contains(id), "AND hit {id} missing from OR for {query:?}");
        }
    }
}

#[test]
fn test_results_sorted_descending() {
    let mut index = InvertedIndex::new(&IndexConfig::default());
    for (id, text) in [
        "cache cache cache",
        "cache miss",
        "a long document that mentions cache only once among many other words",
        "cache hit ratio",
    ]
    .iter()
    .enumerate()
    {
        index.add(id as u64, &tokenize(text, 100)).unwrap();
    }

    let hits = index.search_or(&["cache", "hit"], 10);
    assert_eq!(hits.len(), 4);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_k_caps_results() {
    let index = scenario_index();
    assert_eq!(index.search_or(&["test"], 1).len(), 1);
    assert_eq!(index.search_and(&["test"], 2).len(), 2);
}
