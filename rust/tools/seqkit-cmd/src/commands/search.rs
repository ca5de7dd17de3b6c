use anyhow::Result;
use clap::ValueEnum;

use seqkit::search::{binary_search, linear_search};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Linear,
    Binary,
}

pub fn run(values: Vec<i32>, target: i32, method: Method) -> Result<()> {
    let found = match method {
        Method::Linear => linear_search(&values, target),
        Method::Binary => {
            if !values.is_sorted() {
                log::warn!("binary search over unsorted values; the result is unspecified");
            }
            binary_search(&values, target)
        }
    };

    match found {
        Some(index) => println!("{target} found at index {index}"),
        None => println!("{target} not found"),
    }
    Ok(())
}
