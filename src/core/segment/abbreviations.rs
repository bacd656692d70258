//! Abbreviations that do not end a sentence.
//!
//! Entries are stored with a lowercase first letter. A candidate
//! word matches when its first letter, lowercased, followed by the
//! rest of the word verbatim is in the set: `Dr` and `dr` match,
//! `DR` does not.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Titles
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "rev", "gen", "gov", "sen", "rep",
        "capt", "col", "lt", "sgt", "hon", "mt",
        // Latin
        "etc", "e.g", "i.e", "vs", "viz", "cf", "al", "approx", "ca", "a.m", "p.m",
        // Months
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
        // Units
        "kg", "km", "cm", "mm", "lb", "lbs", "oz", "ft", "mi", "hr", "hrs", "min", "sec", "yr",
        "yrs",
        // Misc
        "no", "vol", "fig", "dept", "inc", "ltd", "co", "corp", "est",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` (the text directly before a `.`) is a known
/// abbreviation or a single-letter initial.
pub fn is_abbreviation(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    // Initials: "J. R. R. Tolkien"
    if word.len() == 1 && first.is_ascii_uppercase() {
        return true;
    }

    let mut key = String::with_capacity(word.len());
    key.push(first.to_ascii_lowercase());
    key.push_str(chars.as_str());
    ABBREVIATIONS.contains(key.as_str())
}
