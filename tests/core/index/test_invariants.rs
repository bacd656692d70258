// Index invariants under add/remove sequences

use crate::common::scenario_index;
use memlex::core::config::IndexConfig;
use memlex::core::index::InvertedIndex;
use memlex::core::tokenizer::tokenize;

fn assert_average_consistent(index: &InvertedIndex) {
    let stats = index.statistics();
    let active: Vec<_> = index.records().iter().filter(|r| !r.tombstoned).collect();

    assert_eq!(stats.active_documents, active.len());
    let total: u64 = active.iter().map(|r| u64::from(r.token_count)).sum();
    assert_eq!(stats.total_tokens, total);

    if stats.active_documents == 0 {
        assert_eq!(stats.average_document_length, 0.0);
    } else {
        let expected = stats.total_tokens as f64 / stats.active_documents as f64;
        assert!((stats.average_document_length - expected).abs() < 1e-9);
    }
}

#[test]
fn test_average_consistent_after_mixed_operations() {
    let mut index = InvertedIndex::new(&IndexConfig::default());
    let texts = [
        "the quick brown fox",
        "jumps over the lazy dog",
        "pack my box with five dozen liquor jugs",
        "hello",
        "the end of the story",
    ];

    for (id, text) in texts.iter().enumerate() {
        index.add(id as u64, &tokenize(text, 100)).unwrap();
        assert_average_consistent(&index);
    }

    for id in [1u64, 3, 0] {
        index.remove(id).unwrap();
        assert_average_consistent(&index);
    }

    index.add(1, &tokenize("back again", 100)).unwrap();
    assert_average_consistent(&index);

    for id in [1u64, 2, 4] {
        index.remove(id).unwrap();
    }
    assert_average_consistent(&index);
    assert!(index.is_empty());
}

#[test]
fn test_duplicate_add_leaves_state_unchanged() {
    let mut index = scenario_index();
    let before = index.statistics();
    let vocabulary = index.vocabulary_size();

    let err = index.add(2, &["brand", "new"]).unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(index.statistics(), before);
    assert_eq!(index.vocabulary_size(), vocabulary);
    assert!(index.entry("brand").is_none());
}

#[test]
fn test_removed_documents_never_returned() {
    let mut index = scenario_index();
    index.remove(1).unwrap();

    for query in [
        vec!["hello"],
        vec!["world"],
        vec!["test"],
        vec!["hello", "world", "test"],
    ] {
        assert!(index.search_and(&query, 100).iter().all(|h| h.document_id != 1));
        assert!(index.search_or(&query, 100).iter().all(|h| h.document_id != 1));
    }
}

#[test]
fn test_removal_keeps_remaining_posting_order() {
    let mut index = scenario_index();
    index.remove(2).unwrap();

    let ids: Vec<_> = index
        .entry("test")
        .unwrap()
        .postings()
        .iter()
        .map(|p| p.document_id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(index.entry("everyone").is_none());
}

#[test]
fn test_one_entry_per_token() {
    let mut index = InvertedIndex::new(&IndexConfig::default());
    index.add(1, &["echo", "echo", "echo"]).unwrap();
    index.add(2, &["echo"]).unwrap();

    let entry = index.entry("echo").unwrap();
    assert_eq!(entry.document_frequency(), 2);
    assert_eq!(entry.posting_for(1).unwrap().term_frequency, 3);
    assert_eq!(index.vocabulary_size(), 1);
}
