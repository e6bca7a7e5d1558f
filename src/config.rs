

use serde_json::Value;
use std::error::Error;
use std::fmt::Display;
use std::fs;

#[derive(Clone, Debug)]
pub struct JsonTypes {
    pub data_dir: String,
    pub output_dir: String,
    pub stances_file: String,
    pub bodies_file: String,
    pub lexicon_file: Option<String>,
    pub max_body_words: usize,
    pub num_threads: usize,
}

impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using run parameters:
        data_dir: {}
        output_dir: {}
        stances_file: {}
        bodies_file: {}
        lexicon_file: {:?}
        max_body_words: {}
        num_threads: {}",
        self.data_dir, self.output_dir, self.stances_file, self.bodies_file, self.lexicon_file, self.max_body_words, self.num_threads
        )
    }
}

pub struct Config {
    params: JsonTypes
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        return self.params.clone()
    }

    pub fn new(args: &[String]) -> Result<Config, Box<dyn Error>> {

        if args.len() != 2 {
            return Err(format!("input should be a path to json file only").into());
        }

        // parse input json
        let f = fs::File::open(&args[1]).expect("cannot open json file");
        let json: Value = serde_json::from_reader(f).expect("cannot read json file");

        // validate input and output in json, both are required with no
        // baked-in defaults
        let data_dir = json.get("data_dir").expect("data_dir was not supplied through json").as_str().expect("cannot cast data_dir to string");
        let output_dir = json.get("output_dir").expect("output_dir was not supplied through json").as_str().expect("cannot cast output path to string");

        // handle default vs input parameters
        let stances_file = match json.get("stances_file") {
            Some(stances_file) => stances_file.as_str().expect("panic since given stances_file is not a string").to_owned(),
            None => "train_stances.csv".to_string()
        };
        let bodies_file = match json.get("bodies_file") {
            Some(bodies_file) => bodies_file.as_str().expect("panic since given bodies_file is not a string").to_owned(),
            None => "train_bodies.csv".to_string()
        };
        let lexicon_file = match json.get("lexicon_file") {
            Some(lexicon_file) => Some(lexicon_file.as_str().expect("panic since given lexicon_file is not a string").to_owned()),
            None => None
        };
        let max_body_words = match json.get("max_body_words") {
            Some(max_body_words) => max_body_words.as_i64().expect("panic since given max_body_words is not numeric"),
            None => 200
        };
        let num_threads = match json.get("num_threads") {
            Some(num_threads) => num_threads.as_i64().expect("panic since given num_threads is not numeric"),
            None => 4
        };

        let params = JsonTypes {
            data_dir: data_dir.to_owned(),
            output_dir: output_dir.to_owned(),
            stances_file: stances_file,
            bodies_file: bodies_file,
            lexicon_file: lexicon_file,
            max_body_words: max_body_words as usize,
            num_threads: num_threads as usize,
        };

        Ok (
            Self {
                params: params
            }
        )
    }

}

pub mod files_handling {

    use ndarray::Array2;
    use ndarray_npy::{ReadNpyError, read_npy, write_npy};
    use std::collections::HashMap;
    use std::error::Error;
    use std::fs::{self, File};
    use std::path::Path;

    pub fn read_input<R: ReadFile>(file_path: &str) -> Result<<R as ReadFile>::Item, <R as ReadFile>::Error> {
        let input = <R as ReadFile>::read_file(file_path)?;
        Ok(input)
    }

    pub fn save_output<S: SaveFile>(output_dir: &str, file_name: &str, item: S) -> Result<(), <S as SaveFile>::Error> {

        // create output folder
        if let Err(e) = fs::create_dir_all(output_dir) {
            panic!("{}", e)
        }

        item.save_file(output_dir, file_name)?;
        return Ok(())

    }

    // the feature cache. If a matrix was already saved under this name it is
    // loaded and returned verbatim, the inputs are not consulted at all, so
    // the same path with different inputs returns the first saved result.
    // Staleness is the caller's responsibility.
    pub fn gen_or_load<F>(output_dir: &str, file_name: &str, compute: F) -> Result<Array2<f32>, Box<dyn Error>>
    where F: FnOnce() -> Result<Array2<f32>, Box<dyn Error>> {

        let cache_path = format!("{}/{}.npy", output_dir, file_name);
        if !Path::new(&cache_path).is_file() {
            let feats = compute()?;
            save_output::<Array2<f32>>(output_dir, file_name, feats)?;
        }

        let item = read_input::<Array2<f32>>(&format!("{}/{}", output_dir, file_name))?;
        return Ok(item)
    }

    pub trait ReadFile {
        type Error;
        type Item;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error>;
    }

    impl ReadFile for Array2<f32> {
        type Error = ReadNpyError;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {
            let in_file = file_path.to_string() + ".npy";
            let item = read_npy(in_file)?;
            Ok(item)
        }
    }

    impl ReadFile for HashMap<String, Vec<String>> {
        type Error = std::io::Error;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {
            let in_file = file_path.to_string() + ".json";
            let f = File::open(in_file)?;
            let item = serde_json::from_reader(f)?;
            return Ok(item)
        }
    }

    pub trait SaveFile {
        type Error;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error>;
    }

    impl SaveFile for Array2<f32> {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {
            let out = output_dir.to_string() + "/" + file_name + ".npy";
            write_npy(out, self)?;
            Ok(())
        }
    }

}


#[cfg(test)]
mod tests {

    use super::files_handling;
    use super::Config;
    use ndarray::{array, Array2};
    use std::env;
    use std::error::Error;
    use std::fs;

    #[test]
    fn config_defaults_test() {

        let out_dir = env::temp_dir().join("stance_features_config_test");
        fs::create_dir_all(&out_dir).unwrap();
        let path = out_dir.join("args.json");
        fs::write(&path, r#"{"data_dir": "Data", "output_dir": "Output"}"#).unwrap();

        let args = ["prog".to_string(), path.to_str().unwrap().to_string()].to_vec();
        let params = Config::new(&args).unwrap().get_params();
        assert_eq!(params.stances_file, "train_stances.csv");
        assert_eq!(params.bodies_file, "train_bodies.csv");
        assert_eq!(params.max_body_words, 200);
        assert_eq!(params.num_threads, 4);
        assert!(params.lexicon_file.is_none());

        let _ = fs::remove_dir_all(&out_dir);
    }

    #[test]
    fn missing_args_test() {

        let args = ["prog".to_string()].to_vec();
        assert!(Config::new(&args).is_err());
    }

    #[test]
    fn cache_round_trip_test() {

        let out_dir = env::temp_dir().join("stance_features_cache_test");
        let _ = fs::remove_dir_all(&out_dir);
        let out_dir = out_dir.to_str().unwrap();

        let fresh: Array2<f32> = array![[1.0, 2.0], [3.0, 4.0]];
        let first = files_handling::gen_or_load(out_dir, "feats", || Ok(fresh.clone())).unwrap();
        assert_eq!(first, fresh);

        // the cache is keyed by path alone, a second call with different
        // inputs still returns the first saved result
        let stale: Result<Array2<f32>, Box<dyn Error>> = Ok(array![[9.0, 9.0]]);
        let second = files_handling::gen_or_load(out_dir, "feats", || stale).unwrap();
        assert_eq!(second, fresh);

        let _ = fs::remove_dir_all(out_dir);
    }

}
