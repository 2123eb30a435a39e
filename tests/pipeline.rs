use std::collections::BTreeSet;

use textprep::document::Record;
use textprep::pipeline::{Lemmatizer, Preprocessor};

fn stop_words(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn stop_words_are_removed() {
    let preprocessor = Preprocessor::new(
        textprep::pipeline::WhitespaceLemmatizer,
        stop_words(&["the", "is"]),
    );

    let tokens = preprocessor.process("the weather is fine");

    assert_eq!(tokens, ["weather", "fine"]);
}

#[test]
fn punctuation_tokens_are_removed() {
    let preprocessor = Preprocessor::default();

    // Consecutive punctuation tokens must all go, not every other one
    let tokens = preprocessor.process("wait !! ?? ... really");

    assert_eq!(tokens, ["wait", "really"]);
}

#[test]
fn abbreviations_keep_their_case() {
    let preprocessor = Preprocessor::default();

    let tokens = preprocessor.process("Reports from UNHCR about Flooding");

    assert_eq!(tokens, ["reports", "from", "UNHCR", "about", "flooding"]);
}

#[test]
fn numerals_are_stripped() {
    let preprocessor = Preprocessor::default();

    // "covid-19" loses the digits and the residual hyphen; "2,000" and
    // "2021" vanish entirely and fall to the length cut
    let tokens = preprocessor.process("covid-19 cases 2,000 in 2021");

    assert_eq!(tokens, ["covid", "cases", "in"]);
}

#[test]
fn short_tokens_are_dropped() {
    let preprocessor = Preprocessor::default();

    let tokens = preprocessor.process("a I of be ok");

    assert_eq!(tokens, ["of", "be", "ok"]);
}

#[test]
fn duplicate_tokens_are_transformed_positionally() {
    let preprocessor = Preprocessor::default();

    // Every occurrence is rewritten, not just the first match by value
    let tokens = preprocessor.process("Flood Flood Flood");

    assert_eq!(tokens, ["flood", "flood", "flood"]);
}

#[test]
fn injected_lemmatizer_is_used() {
    struct SuffixStripper;

    impl Lemmatizer for SuffixStripper {
        fn lemmatize(&self, text: &str) -> Vec<String> {
            text.split_whitespace()
                .map(|w| w.trim_end_matches('s').to_string())
                .collect()
        }
    }

    let preprocessor = Preprocessor::new(SuffixStripper, BTreeSet::new());

    let tokens = preprocessor.process("floods displace families");

    assert_eq!(tokens, ["flood", "displace", "familie"]);
}

#[test]
fn corpus_preserves_record_order() {
    let preprocessor = Preprocessor::default();

    let records = vec![
        Record::parse("1, heavy flooding reported, disaster").unwrap(),
        Record::parse("2, :: ;; !!, noise").unwrap(),
        Record::parse("3, food prices rising, economy").unwrap(),
    ];

    let corpus = preprocessor.process_corpus(&records);

    assert_eq!(corpus.len(), 3);
    assert_eq!(
        corpus.documents[0].tokens,
        ["heavy", "flooding", "reported"]
    );
    assert!(corpus.documents[1].is_empty(), "all-noise rows become empty documents");
    assert_eq!(corpus.documents[2].tokens, ["food", "prices", "rising"]);
}
