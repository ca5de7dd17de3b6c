use anyhow::{Context, Result};

use seqkit::window::{sliding_window_max, sliding_window_min};

use crate::utils::format_list;

pub fn run(values: Vec<i32>, k: usize, min: bool) -> Result<()> {
    let (label, result) = if min {
        ("minima", sliding_window_min(&values, k))
    } else {
        ("maxima", sliding_window_max(&values, k))
    };
    let extremes = result.with_context(|| {
        format!("Invalid window width {k} for {} values", values.len())
    })?;
    println!("window {k} {label}: {}", format_list(extremes));
    Ok(())
}
