use anyhow::Result;

use seqkit::ranges::{merge_intervals_in_place, Interval};

use crate::utils::format_list;

pub fn run(mut intervals: Vec<Interval>) -> Result<()> {
    if let Some(bad) = intervals.iter().find(|i| i.start > i.end) {
        anyhow::bail!("Interval {bad} has start greater than end");
    }
    // The argument list is ours, so it can be sorted in place.
    merge_intervals_in_place(&mut intervals);
    println!("merged: {}", format_list(intervals));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_reversed_interval() {
        let err = run(vec![Interval::new(1, 3), Interval::new(5, 1)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Interval [5, 1] has start greater than end"
        );
    }

    #[test]
    fn test_accepts_valid_and_empty_input() {
        assert!(run(vec![Interval::new(1, 3), Interval::new(3, 5)]).is_ok());
        assert!(run(vec![Interval::new(4, 4)]).is_ok());
        assert!(run(Vec::new()).is_ok());
    }
}
