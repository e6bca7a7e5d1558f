

// imports
use crate::config::files_handling;
use crate::text::TextPrep;

use ndarray::Array2;
use std::collections::HashMap;
use std::error::Error;

// headline keyword lists, kept in their legacy slot order
pub const REFUTING_WORDS: [&str; 15] = [
    "fake",
    "fraud",
    "hoax",
    "false",
    "deny", "denies",
    "not",
    "despite",
    "nope",
    "doubt", "doubts",
    "bogus",
    "debunk",
    "pranks",
    "retract",
];

pub const DISCUSS_WORDS: [&str; 15] = [
    "according", "maybe", "reporting", "reports", "say", "says", "claim",
    "claims", "purportedly", "investigating", "told", "tells", "allegedly",
    "validate", "verify",
];

// the lexicon categories consumed from the category mapping
pub const LIWC_CATEGORIES: [&str; 5] = ["pronoun", "anger", "anx", "negate", "quant"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CountPolicy {
    // one 0/1 slot per listed word, over the headline only
    Presence,
    // total hits in the headline, then in the body
    Sum,
    // the two sums folded modulo 2
    ModuloFold,
}

// a single parametrized keyword-count feature. A word list plus a counting
// policy covers the refuting, polarity, discuss and lexicon variants with
// one loop.
pub struct KeywordFeature {
    words: Vec<String>,
    policy: CountPolicy,
}

impl KeywordFeature {

    // the list goes through the same lemmatizer as the text, so both sides
    // of the membership test agree on the token form
    pub fn new(prep: &TextPrep, words: &[&str], policy: CountPolicy) -> KeywordFeature {

        let words = words
        .iter()
        .map(|word| prep.tokenize_lemmas(word).join(" "))
        .collect::<Vec<String>>();

        Self {
            words: words,
            policy: policy,
        }
    }

    pub fn width(&self) -> usize {
        match self.policy {
            CountPolicy::Presence => self.words.len(),
            CountPolicy::Sum | CountPolicy::ModuloFold => 2,
        }
    }

    fn count_hits(&self, lemmas: &[String]) -> u32 {
        lemmas.iter().filter(|tok| self.words.contains(*tok)).count() as u32
    }

    fn row(&self, prep: &TextPrep, headline: &str, body: &str) -> Vec<f32> {

        let headline_lemmas = prep.tokenize_lemmas(&prep.clean(headline));

        match self.policy {
            CountPolicy::Presence => {
                self.words
                .iter()
                .map(|word| if headline_lemmas.contains(word) { 1.0 } else { 0.0 })
                .collect()
            },
            CountPolicy::Sum => {
                let body_lemmas = prep.tokenize_lemmas(&prep.clean(body));
                vec![
                    self.count_hits(&headline_lemmas) as f32,
                    self.count_hits(&body_lemmas) as f32,
                ]
            },
            CountPolicy::ModuloFold => {
                let body_lemmas = prep.tokenize_lemmas(&prep.clean(body));
                vec![
                    (self.count_hits(&headline_lemmas) % 2) as f32,
                    (self.count_hits(&body_lemmas) % 2) as f32,
                ]
            },
        }
    }

    pub fn run(&self, prep: &TextPrep, headlines: &[String], bodies: &[String]) -> Result<Array2<f32>, Box<dyn Error>> {

        assert_eq!(headlines.len(), bodies.len(), "headlines and bodies must be index aligned");

        let mut flat: Vec<f32> = Vec::with_capacity(headlines.len() * self.width());
        for (headline, body) in headlines.iter().zip(bodies.iter()) {
            flat.extend(self.row(prep, headline, body));
        }

        let feats = Array2::from_shape_vec((headlines.len(), self.width()), flat)?;
        Ok(feats)
    }

}

pub fn refuting(prep: &TextPrep) -> KeywordFeature {
    KeywordFeature::new(prep, &REFUTING_WORDS, CountPolicy::Presence)
}

pub fn polarity(prep: &TextPrep) -> KeywordFeature {
    KeywordFeature::new(prep, &REFUTING_WORDS, CountPolicy::Sum)
}

pub fn discuss(prep: &TextPrep) -> KeywordFeature {
    KeywordFeature::new(prep, &DISCUSS_WORDS, CountPolicy::Sum)
}

// a category to trigger-word mapping read from a json file. The dictionary
// file format of the upstream lexicon is out of scope, callers supply the
// mapping directly.
pub struct Lexicon {
    categories: HashMap<String, Vec<String>>,
}

impl Lexicon {

    pub fn from_file(file_path: &str) -> Result<Lexicon, std::io::Error> {
        let categories = files_handling::read_input::<HashMap<String, Vec<String>>>(file_path)?;
        Ok(Self { categories: categories })
    }

    pub fn get(&self, category: &str) -> Option<Vec<&str>> {
        self.categories
        .get(category)
        .map(|words| words.iter().map(|word| word.as_str()).collect())
    }

}
