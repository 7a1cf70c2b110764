//! A struct with every field shape.

use std::collections::{BTreeMap, HashSet};

use kiln::Builder;

#[derive(Builder, Debug, Clone, PartialEq)]
pub struct Config {
    name: String,
    paths: Vec<String>,
    env: BTreeMap<String, String>,
    features: HashSet<String>,
    retries: Option<u8>,
    #[builder(constant = "1.0")]
    format: String,
}

fn main() {
    let mut builder = ConfigBuilder::new();
    builder
        .name("app".to_string())
        .push_paths("/bin".to_string())
        .insert_env("HOME".to_string(), "/root".to_string())
        .insert_features("fast".to_string())
        .retries(Some(3));
    let config: Result<Config, kiln::BuildError> = builder.build();
    assert!(config.is_ok());
}
