

// imports
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;

// the token standing in for removed words when a short body is padded, a
// plain space carries no content through cleaning
pub const PAD_TOKEN: &str = " ";

#[derive(Debug, Clone, Deserialize)]
pub struct StanceRecord {
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "Body ID")]
    pub body_id: u64,
    #[serde(rename = "Stance")]
    pub stance: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BodyRecord {
    #[serde(rename = "Body ID")]
    body_id: u64,
    #[serde(rename = "articleBody")]
    article_body: String,
}

// the two source tables unified on the body id key. Reading happens only
// through `load` with explicit paths, nothing is read at startup.
pub struct DataSet {
    pub stances: Vec<StanceRecord>,
    pub articles: HashMap<u64, Vec<String>>,
    pub article_lengths: HashMap<u64, usize>,
}

impl DataSet {

    pub fn load(data_dir: &str, stances_file: &str, bodies_file: &str, max_body_words: usize) -> Result<DataSet, Box<dyn Error>> {

        println!("reading dataset from {}", data_dir);
        let stances = DataSet::read_stances(&format!("{}/{}", data_dir, stances_file))?;
        let bodies = DataSet::read_bodies(&format!("{}/{}", data_dir, bodies_file))?;

        let mut articles: HashMap<u64, Vec<String>> = HashMap::new();
        let mut article_lengths: HashMap<u64, usize> = HashMap::new();
        for record in bodies {
            let (tokens, length) = DataSet::truncate_words(&record.article_body, max_body_words);
            articles.insert(record.body_id, tokens);
            article_lengths.insert(record.body_id, length);
        }

        println!("total stances: {}", stances.len());
        println!("total bodies: {}", articles.len());

        Ok(Self {
            stances: stances,
            articles: articles,
            article_lengths: article_lengths,
        })
    }

    fn read_stances(file_path: &str) -> Result<Vec<StanceRecord>, Box<dyn Error>> {
        let mut reader = csv::Reader::from_path(file_path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }

    fn read_bodies(file_path: &str) -> Result<Vec<BodyRecord>, Box<dyn Error>> {
        let mut reader = csv::Reader::from_path(file_path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(rows)
    }

    // caps a body at max_words whitespace tokens and pads shorter bodies up
    // to that length, returning the kept word count alongside
    pub fn truncate_words(text: &str, max_words: usize) -> (Vec<String>, usize) {

        let mut words = text
        .split_whitespace()
        .map(|word| word.to_string())
        .collect::<Vec<String>>();

        let length: usize;
        if words.len() > max_words {
            words.truncate(max_words);
            length = max_words;
        } else {
            length = words.len();
            while words.len() < max_words {
                words.push(PAD_TOKEN.to_string());
            }
        }

        (words, length)
    }

    // index-aligned headline and body sequences in stance order, bodies
    // re-joined from their padded token lists
    pub fn paired(&self) -> Result<(Vec<String>, Vec<String>), Box<dyn Error>> {

        let mut headlines: Vec<String> = Vec::with_capacity(self.stances.len());
        let mut bodies: Vec<String> = Vec::with_capacity(self.stances.len());
        for stance in &self.stances {
            let tokens = match self.articles.get(&stance.body_id) {
                Some(tokens) => tokens,
                None => return Err(format!("stance refers to unknown body id {}", stance.body_id).into()),
            };
            headlines.push(stance.headline.to_owned());
            bodies.push(tokens.join(" "));
        }

        Ok((headlines, bodies))
    }

}
