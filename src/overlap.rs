

// imports
use crate::text::{self, TextPrep};

use ndarray::Array2;
use rayon::prelude::*;
use std::collections::HashSet;
use std::error::Error;

// window sizes are kept in the order the columns are emitted in
pub const CHAR_GRAM_SIZES: [usize; 4] = [2, 8, 4, 16];
pub const WORD_GRAM_SIZES: [usize; 5] = [2, 3, 4, 5, 6];

// how far into the body the truncated scopes reach, in characters
pub const EARLY_CHARS: usize = 255;
pub const FIRST_CHARS: usize = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharGramCounts {
    pub hits: u32,
    pub early_hits: u32,
    pub first_hits: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WordGramCounts {
    pub hits: u32,
    pub early_hits: u32,
}

// one row of the hand-crafted overlap features. The field order here is the
// layout of the flattened vector, consumers address columns by position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlapRow {
    pub co_occurrence: u32,
    pub co_occurrence_early: u32,
    pub co_occurrence_stops: u32,
    pub co_occurrence_early_stops: u32,
    pub chargram_counts: [CharGramCounts; 4], // sizes 2, 8, 4, 16
    pub wordgram_counts: [WordGramCounts; 5], // sizes 2 to 6
}

impl OverlapRow {

    pub const WIDTH: usize = 4 + 4 * 3 + 5 * 2;

    pub fn flatten(&self) -> Vec<f32> {

        let mut row: Vec<f32> = Vec::with_capacity(OverlapRow::WIDTH);
        row.push(self.co_occurrence as f32);
        row.push(self.co_occurrence_early as f32);
        row.push(self.co_occurrence_stops as f32);
        row.push(self.co_occurrence_early_stops as f32);
        for counts in &self.chargram_counts {
            row.push(counts.hits as f32);
            row.push(counts.early_hits as f32);
            row.push(counts.first_hits as f32);
        }
        for counts in &self.wordgram_counts {
            row.push(counts.hits as f32);
            row.push(counts.early_hits as f32);
        }
        return row
    }

}

pub struct HandFeatures {}

impl HandFeatures {

    // counts headline tokens that appear as a substring of the body, anywhere
    // and within the early prefix
    fn binary_co_occurrence(prep: &TextPrep, headline: &str, body: &str) -> (u32, u32) {

        let clean_headline = prep.clean(headline);
        let clean_body = prep.clean(body);
        let early_body = text::char_prefix(&clean_body, EARLY_CHARS);

        let mut count = 0;
        let mut count_early = 0;
        for token in clean_headline.split(' ') {
            if clean_body.contains(token) {
                count += 1;
            }
            if early_body.contains(token) {
                count_early += 1;
            }
        }
        (count, count_early)
    }

    // the same count with stopword tokens dropped from the headline first.
    // The early counter tests the prefix on its own.
    fn binary_co_occurrence_stops(prep: &TextPrep, headline: &str, body: &str) -> (u32, u32) {

        let clean_body = prep.clean(body);
        let early_body = text::char_prefix(&clean_body, EARLY_CHARS);
        let tokens = prep.clean(headline)
        .split(' ')
        .map(|tok| tok.to_string())
        .collect::<Vec<String>>();

        let mut count = 0;
        let mut count_early = 0;
        for token in prep.remove_stopwords(&tokens) {
            if clean_body.contains(&token) {
                count += 1;
            }
            if early_body.contains(&token) {
                count_early += 1;
            }
        }
        (count, count_early)
    }

    // character windows slide over the stopword-filtered headline. Each
    // window is re-joined with spaces between its characters before the
    // substring test, the legacy gram form the downstream columns were
    // built on.
    fn chargram_counts(prep: &TextPrep, clean_headline: &str, clean_body: &str, size: usize) -> CharGramCounts {

        let tokens = clean_headline
        .split(' ')
        .map(|tok| tok.to_string())
        .collect::<Vec<String>>();
        let filtered = prep.remove_stopwords(&tokens).join(" ");

        let early_body = text::char_prefix(clean_body, EARLY_CHARS);
        let first_body = text::char_prefix(clean_body, FIRST_CHARS);

        let mut counts = CharGramCounts::default();
        for window in text::chargrams(&filtered, size) {
            let gram = window
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
            if clean_body.contains(&gram) {
                counts.hits += 1;
            }
            if early_body.contains(&gram) {
                counts.early_hits += 1;
            }
            if first_body.contains(&gram) {
                counts.first_hits += 1;
            }
        }
        counts
    }

    // word windows slide over the unfiltered headline
    fn wordgram_counts(clean_headline: &str, clean_body: &str, size: usize) -> WordGramCounts {

        let early_body = text::char_prefix(clean_body, EARLY_CHARS);

        let mut counts = WordGramCounts::default();
        for window in text::ngrams(clean_headline, size) {
            let gram = window.join(" ");
            if clean_body.contains(&gram) {
                counts.hits += 1;
            }
            if early_body.contains(&gram) {
                counts.early_hits += 1;
            }
        }
        counts
    }

    pub fn extract_row(prep: &TextPrep, headline: &str, body: &str) -> OverlapRow {

        let clean_headline = prep.clean(headline);
        let clean_body = prep.clean(body);

        let mut row = OverlapRow::default();
        let (count, count_early) = HandFeatures::binary_co_occurrence(prep, headline, body);
        row.co_occurrence = count;
        row.co_occurrence_early = count_early;
        let (count, count_early) = HandFeatures::binary_co_occurrence_stops(prep, headline, body);
        row.co_occurrence_stops = count;
        row.co_occurrence_early_stops = count_early;

        for (k, size) in CHAR_GRAM_SIZES.iter().enumerate() {
            row.chargram_counts[k] = HandFeatures::chargram_counts(prep, &clean_headline, &clean_body, *size);
        }
        for (k, size) in WORD_GRAM_SIZES.iter().enumerate() {
            row.wordgram_counts[k] = HandFeatures::wordgram_counts(&clean_headline, &clean_body, *size);
        }

        row
    }

    // one row per aligned pair. The examples are independent of each other
    // so the pass runs on the rayon pool.
    pub fn run(prep: &TextPrep, headlines: &[String], bodies: &[String]) -> Result<Array2<f32>, Box<dyn Error>> {

        assert_eq!(headlines.len(), bodies.len(), "headlines and bodies must be index aligned");

        let rows: Vec<Vec<f32>> = headlines
        .par_iter()
        .zip(bodies.par_iter())
        .map(|(headline, body)| HandFeatures::extract_row(prep, headline, body).flatten())
        .collect();

        let flat: Vec<f32> = rows.into_iter().flatten().collect();
        let feats = Array2::from_shape_vec((headlines.len(), OverlapRow::WIDTH), flat)?;
        Ok(feats)
    }

}

pub struct WordOverlap {}

impl WordOverlap {

    // |intersection| / |union| of the lemma sets of headline and body.
    // An empty union would divide by zero, defined here as 0.0.
    fn ratio(prep: &TextPrep, headline: &str, body: &str) -> f32 {

        let headline_lemmas = prep.tokenize_lemmas(&prep.clean(headline))
        .into_iter()
        .collect::<HashSet<String>>();
        let body_lemmas = prep.tokenize_lemmas(&prep.clean(body))
        .into_iter()
        .collect::<HashSet<String>>();

        let union = headline_lemmas.union(&body_lemmas).count();
        if union == 0 {
            return 0.0
        }
        let intersection = headline_lemmas.intersection(&body_lemmas).count();
        intersection as f32 / union as f32
    }

    pub fn run(prep: &TextPrep, headlines: &[String], bodies: &[String]) -> Result<Array2<f32>, Box<dyn Error>> {

        assert_eq!(headlines.len(), bodies.len(), "headlines and bodies must be index aligned");

        let rows: Vec<f32> = headlines
        .par_iter()
        .zip(bodies.par_iter())
        .map(|(headline, body)| WordOverlap::ratio(prep, headline, body))
        .collect();

        let feats = Array2::from_shape_vec((headlines.len(), 1), rows)?;
        Ok(feats)
    }

}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::text::TextPrep;

    // golden counts here are small enough to verify by hand against the
    // contracts above

    #[test]
    fn word_bigram_test() {

        // windows {"the quick", "quick fox"} both appear in the body, which
        // is shorter than the early prefix so both scopes agree
        let counts = HandFeatures::wordgram_counts("the quick fox", "the quick fox jumps", 2);
        assert_eq!(counts.hits, 2);
        assert_eq!(counts.early_hits, 2);

        // window larger than the headline produces no windows and no counts
        let counts = HandFeatures::wordgram_counts("the quick fox", "the quick fox jumps", 6);
        assert_eq!(counts, WordGramCounts::default());
    }

    #[test]
    fn binary_co_occurrence_test() {

        let prep = TextPrep::new();
        let (count, count_early) = HandFeatures::binary_co_occurrence(&prep, "Fox Jumps", "the quick fox jumps high");
        assert_eq!(count, 2);
        assert_eq!(count_early, 2);
    }

    #[test]
    fn binary_co_occurrence_stops_early_test() {

        let prep = TextPrep::new();

        // the headline token only shows up after the early prefix, so the
        // early counter must stay at zero while the full-body counter hits
        let late_body = "filler ".repeat(50) + "zebra";
        let (count, count_early) = HandFeatures::binary_co_occurrence_stops(&prep, "zebra", &late_body);
        assert_eq!(count, 1);
        assert_eq!(count_early, 0);

        let early_body = "zebra ".to_string() + &"filler ".repeat(50);
        let (count, count_early) = HandFeatures::binary_co_occurrence_stops(&prep, "zebra", &early_body);
        assert_eq!(count, 1);
        assert_eq!(count_early, 1);
    }

    #[test]
    fn chargram_test() {

        let prep = TextPrep::new();

        // bigram windows over "zebra" are re-joined with spaces, so a body
        // spelling the word out letter by letter matches all four of them
        let counts = HandFeatures::chargram_counts(&prep, "zebra", "z e b r a", 2);
        assert_eq!(counts.hits, 4);
        assert_eq!(counts.early_hits, 4);
        assert_eq!(counts.first_hits, 4);

        // stopwords are dropped before the windows are made, otherwise the
        // windows over "the" would match this body
        let counts = HandFeatures::chargram_counts(&prep, "the zebra", "t h e z", 2);
        assert_eq!(counts.hits, 0);

        // window larger than the filtered headline
        let counts = HandFeatures::chargram_counts(&prep, "zebra", "z e b r a", 16);
        assert_eq!(counts, CharGramCounts::default());
    }

    #[test]
    fn row_layout_test() {

        let prep = TextPrep::new();
        let row = HandFeatures::extract_row(&prep, "Fox Jumps", "the quick fox jumps high");
        let flat = row.flatten();
        assert_eq!(flat.len(), OverlapRow::WIDTH);

        // the binary counters occupy the first four columns in order
        assert_eq!(flat[0], 2.0);
        assert_eq!(flat[1], 2.0);
    }

    #[test]
    fn empty_input_test() {

        let prep = TextPrep::new();
        let feats = HandFeatures::run(&prep, &[], &[]).unwrap();
        assert_eq!(feats.dim(), (0, OverlapRow::WIDTH));

        let feats = WordOverlap::run(&prep, &[], &[]).unwrap();
        assert_eq!(feats.dim(), (0, 1));
    }

    #[test]
    fn word_overlap_ratio_test() {

        let prep = TextPrep::new();

        // lemma sets {cat, dog} and {dog, bird} share one of three tokens
        let ratio = WordOverlap::ratio(&prep, "cat dog", "dog bird");
        assert!((ratio - 1.0 / 3.0).abs() < 1e-6);

        // both sides empty is legal input and gives the defined fallback
        let ratio = WordOverlap::ratio(&prep, "", "");
        assert_eq!(ratio, 0.0);
    }

}
