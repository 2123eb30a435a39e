/// Seam for the language backend that turns raw text into lemmas.
///
/// Real deployments wrap an external NLP model here; the crate never
/// reaches for one itself.
pub trait Lemmatizer {
    fn lemmatize(&self, text: &str) -> Vec<String>;
}

/// v0: whitespace tokenization, each surface form its own lemma.
#[derive(Debug, Default)]
pub struct WhitespaceLemmatizer;

impl Lemmatizer for WhitespaceLemmatizer {
    fn lemmatize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
