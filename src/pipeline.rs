

// imports
use crate::config::{files_handling, Config};
use crate::dataset::DataSet;
use crate::keywords::{self, CountPolicy, KeywordFeature, Lexicon};
use crate::overlap::{HandFeatures, WordOverlap};
use crate::sentiment::SentimentDifference;
use crate::text::TextPrep;

use core::panic;
use ndarray::Array2;
use rayon::ThreadPoolBuilder;
use std::env;
use std::error::Error;
use std::time::Instant;

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> configuration of arguments
    // -> dataset reading and pairing
    // -> feature extraction into the output cache

    pub fn run() {

        println!("entering program...");
        let args: Vec<String> = env::args().collect();

        println!("building parameters...");
        let params = match Config::new(&args) {
            Ok(config) => config.get_params(),
            Err(e) => panic!("{}", e)
        };
        println!("{}", params);

        // thread pool for the per-example extraction passes
        if let Err(e) = ThreadPoolBuilder::new().num_threads(params.num_threads).build_global() {
            panic!("{}", e)
        }

        let timer = Instant::now();
        let dataset = match DataSet::load(&params.data_dir, &params.stances_file, &params.bodies_file, params.max_body_words) {
            Ok(dataset) => dataset,
            Err(e) => panic!("{}", e)
        };
        let (headlines, bodies) = match dataset.paired() {
            Ok(pairs) => pairs,
            Err(e) => panic!("{}", e)
        };
        println!("paired {} examples, took {} seconds ...", headlines.len(), timer.elapsed().as_secs());

        let prep = TextPrep::new();

        println!("extracting features...");
        let timer = Instant::now();

        Pipeline::feature(&params.output_dir, "hand", || HandFeatures::run(&prep, &headlines, &bodies));
        Pipeline::feature(&params.output_dir, "overlap", || WordOverlap::run(&prep, &headlines, &bodies));
        Pipeline::feature(&params.output_dir, "refuting", || keywords::refuting(&prep).run(&prep, &headlines, &bodies));
        Pipeline::feature(&params.output_dir, "polarity", || keywords::polarity(&prep).run(&prep, &headlines, &bodies));
        Pipeline::feature(&params.output_dir, "discuss", || keywords::discuss(&prep).run(&prep, &headlines, &bodies));
        Pipeline::feature(&params.output_dir, "sentiment", || SentimentDifference::run(&headlines, &bodies));

        // lexicon driven features only run when a lexicon file was configured
        if let Some(lexicon_file) = &params.lexicon_file {

            let lexicon_path = format!("{}/{}", params.data_dir, lexicon_file);
            let lexicon = match Lexicon::from_file(&lexicon_path) {
                Ok(lexicon) => lexicon,
                Err(e) => panic!("{}", e)
            };

            for category in keywords::LIWC_CATEGORIES {
                let words = match lexicon.get(category) {
                    Some(words) => words,
                    None => {
                        println!("category {} missing from lexicon, skipping...", category);
                        continue
                    }
                };
                let reg = KeywordFeature::new(&prep, &words, CountPolicy::Presence);
                Pipeline::feature(&params.output_dir, &format!("liwc_reg_{}", category), || reg.run(&prep, &headlines, &bodies));
                let fold = KeywordFeature::new(&prep, &words, CountPolicy::ModuloFold);
                Pipeline::feature(&params.output_dir, &format!("liwc_fold_{}", category), || fold.run(&prep, &headlines, &bodies));
            }
        }

        println!("finished extraction, saved features. Took {} seconds ...", timer.elapsed().as_secs());

    }

    // computes one feature family through the cache and logs its shape
    fn feature<F>(output_dir: &str, name: &str, compute: F) -> Array2<f32>
    where F: FnOnce() -> Result<Array2<f32>, Box<dyn Error>> {

        let timer = Instant::now();
        let feats = match files_handling::gen_or_load(output_dir, name, compute) {
            Ok(feats) => feats,
            Err(e) => panic!("{}", e)
        };
        println!("{}: {} rows x {} columns, took {} seconds ...", name, feats.dim().0, feats.dim().1, timer.elapsed().as_secs());
        feats
    }

}
