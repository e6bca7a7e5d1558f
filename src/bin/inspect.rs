
use core::panic;
use std::env;
extern crate stance_features;
use ndarray::{Array2, Axis};
use stance_features::files_handling;

// this executable loads a saved feature matrix and prints a small summary,
// so a run can be sanity checked without leaving the terminal.
// treated as a binary so it can be ran independently from main

fn main() {

    // the argument should be a path to a saved feature matrix, without the
    // npy extension. example: ... Output/hand
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 { panic!("input argument should be a path to a saved feature matrix (without extension)"); }

    let feats = match files_handling::read_input::<Array2<f32>>(&args[1]) {
        Ok(feats) => feats,
        Err(e) => panic!("{}", e)
    };

    let (rows, columns) = feats.dim();
    println!("{}: {} rows x {} columns", &args[1], rows, columns);
    if rows == 0 {
        println!("no rows to summarize");
        return;
    }

    // per column mean and max
    let means = feats.mean_axis(Axis(0)).unwrap(); // safe, rows > 0
    for (j, column) in feats.axis_iter(Axis(1)).enumerate() {
        let max = column.iter().cloned().fold(f32::MIN, f32::max);
        println!("column {}: mean {:.4}, max {}", j, means[j], max);
    }

    // the first few rows
    for i in 0..rows.min(5) {
        println!("row {}: {:?}", i, feats.row(i).to_vec());
    }

}
