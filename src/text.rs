

// imports
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

pub struct TextPrep {
    word_re: Regex,
    stopwords: HashSet<String>,
    stemmer: Stemmer,
}

impl TextPrep {

    pub fn new() -> TextPrep {

        // the english stopword list comes from the stop-words crate, the
        // lemmatizer is an english snowball stemmer
        let stopwords = stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .collect::<HashSet<String>>();

        Self {
            word_re: Regex::new(r"\w+").expect("word pattern should compile"),
            stopwords: stopwords,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    // cleans a string: keeps word-character runs only, joined by single
    // spaces, lowercased. Idempotent, empty input gives empty output.
    pub fn clean(&self, text: &str) -> String {
        let runs: Vec<&str> = self.word_re.find_iter(text).map(|m| m.as_str()).collect();
        return runs.join(" ").to_lowercase()
    }

    // word tokens reduced to their lemma form, lowercased
    pub fn tokenize_lemmas(&self, text: &str) -> Vec<String> {
        self.word_re.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .map(|tok| self.stemmer.stem(&tok).to_string())
        .collect()
    }

    // removes stopwords from a list of tokens
    pub fn remove_stopwords(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter()
        .filter(|tok| !self.stopwords.contains(*tok))
        .map(|tok| tok.to_owned())
        .collect()
    }

}

// word windows of length n over a space separated string
pub fn ngrams(input: &str, n: usize) -> Vec<Vec<&str>> {
    let tokens: Vec<&str> = input.split(' ').collect();
    if tokens.len() < n {
        return Vec::new()
    }
    tokens.windows(n).map(|window| window.to_vec()).collect()
}

// character windows of length n
pub fn chargrams(input: &str, n: usize) -> Vec<Vec<char>> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() < n {
        return Vec::new()
    }
    chars.windows(n).map(|window| window.to_vec()).collect()
}

// the first n characters of a string, counted in characters and not bytes
// so multi byte text is never split mid character
pub fn char_prefix(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn clean_test() {

        let prep = TextPrep::new();
        assert_eq!(prep.clean("Hello, World!  123"), "hello world 123");
        assert_eq!(prep.clean(""), "");

        // cleaning is idempotent
        let once = prep.clean("Some -- Headline: with punctuation?");
        assert_eq!(prep.clean(&once), once);
    }

    #[test]
    fn remove_stopwords_test() {

        let prep = TextPrep::new();
        let tokens = ["the", "purple", "fox"].map(|t| t.to_string()).to_vec();
        assert_eq!(prep.remove_stopwords(&tokens), vec!["purple", "fox"]);
    }

    #[test]
    fn window_test() {

        // three tokens give two bigram windows
        let grams = ngrams("the quick fox", 2);
        assert_eq!(grams, vec![vec!["the", "quick"], vec!["quick", "fox"]]);

        // window larger than the input gives no windows at all
        assert!(ngrams("the quick fox", 6).is_empty());
        assert!(chargrams("ab", 16).is_empty());

        let grams = chargrams("abc", 2);
        assert_eq!(grams, vec![vec!['a', 'b'], vec!['b', 'c']]);
    }

    #[test]
    fn char_prefix_test() {

        assert_eq!(char_prefix("abcdef", 3), "abc");
        assert_eq!(char_prefix("ab", 100), "ab");
    }

}
