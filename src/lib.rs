
mod config;
mod dataset;
mod keywords;
mod overlap;
mod pipeline;
mod sentiment;
mod text;

pub use config::files_handling;
pub use config::Config;
pub use dataset::DataSet;
pub use keywords::{CountPolicy, KeywordFeature, Lexicon};
pub use overlap::{HandFeatures, OverlapRow, WordOverlap};
pub use pipeline::Pipeline;
pub use sentiment::SentimentDifference;
pub use text::TextPrep;
