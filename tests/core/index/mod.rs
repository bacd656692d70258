// Inverted index tests

mod test_invariants;
mod test_ranking;
