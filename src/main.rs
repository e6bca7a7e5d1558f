mod config;
mod dataset;
mod keywords;
mod overlap;
mod pipeline;
mod sentiment;
mod text;

fn main() {
    pipeline::Pipeline::run();
}
