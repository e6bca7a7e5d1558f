

// imports
use ndarray::Array2;
use std::error::Error;

// score dimensions in column order
pub const SENTIMENT_KEYS: [&str; 4] = ["compound", "neu", "pos", "neg"];

pub struct SentimentDifference {}

impl SentimentDifference {

    // the polarity scoring itself is delegated to the vader analyzer, this
    // feature is only the absolute per-dimension difference between the
    // headline score and the body score
    pub fn run(headlines: &[String], bodies: &[String]) -> Result<Array2<f32>, Box<dyn Error>> {

        assert_eq!(headlines.len(), bodies.len(), "headlines and bodies must be index aligned");

        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();

        let mut flat: Vec<f32> = Vec::with_capacity(headlines.len() * SENTIMENT_KEYS.len());
        for (headline, body) in headlines.iter().zip(bodies.iter()) {

            let headline_scores = analyzer.polarity_scores(headline);
            let body_scores = analyzer.polarity_scores(body);

            for key in SENTIMENT_KEYS {
                let h = headline_scores.get(key).copied().unwrap_or(0.0);
                let b = body_scores.get(key).copied().unwrap_or(0.0);
                flat.push((h - b).abs() as f32);
            }
        }

        let feats = Array2::from_shape_vec((headlines.len(), SENTIMENT_KEYS.len()), flat)?;
        Ok(feats)
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn identical_pair_test() {

        // whatever the analyzer scores, the difference of a pair with the
        // same text on both sides is zero in every dimension
        let headlines = ["The happy dog played outside".to_string()].to_vec();
        let bodies = headlines.clone();

        let feats = SentimentDifference::run(&headlines, &bodies).unwrap();
        assert_eq!(feats.dim(), (1, SENTIMENT_KEYS.len()));
        for value in feats.iter() {
            assert!(value.abs() < 1e-6);
        }
    }

    #[test]
    fn empty_input_test() {

        let feats = SentimentDifference::run(&[], &[]).unwrap();
        assert_eq!(feats.dim(), (0, SENTIMENT_KEYS.len()));
    }

}
