//! Coalescing of closed intervals.

use crate::Interval;

/// Merges overlapping or touching intervals into a minimal set of disjoint
/// intervals sorted by `start`.
///
/// The input is copied; `intervals` keeps its original order. The output covers
/// exactly the same set of points as the input, and `[a, b]`, `[b, c]` become
/// `[a, c]`. Merging the output again returns it unchanged.
///
/// # Examples
///
/// ```
/// use seqkit_ranges::{merge_intervals, Interval};
///
/// let input: Vec<Interval> = [(1, 3), (2, 6), (8, 10), (15, 18)]
///     .into_iter()
///     .map(Interval::from)
///     .collect();
/// let merged = merge_intervals(&input);
/// assert_eq!(
///     merged,
///     vec![Interval::new(1, 6), Interval::new(8, 10), Interval::new(15, 18)]
/// );
/// ```
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut merged = intervals.to_vec();
    merge_intervals_in_place(&mut merged);
    merged
}

/// Sorts `intervals` by `start` and coalesces it in place, truncating it to the
/// merged length.
///
/// Use this when the caller owns a scratch buffer and does not need the original
/// order; otherwise prefer [`merge_intervals`].
pub fn merge_intervals_in_place(intervals: &mut Vec<Interval>) {
    if intervals.is_empty() {
        return;
    }
    let input_len = intervals.len();

    // Tie order among equal starts does not affect the merged result.
    intervals.sort_unstable_by_key(|interval| interval.start);

    // `intervals[..=last]` is the merged prefix; `last` is the interval still open
    // for extension.
    let mut last = 0;
    for read in 1..intervals.len() {
        let current = intervals[read];
        if intervals[last].overlaps_or_touches(&current) {
            intervals[last].end = intervals[last].end.max(current.end);
        } else {
            last += 1;
            intervals[last] = current;
        }
    }
    intervals.truncate(last + 1);

    log::trace!(
        "merge_intervals: {input_len} intervals merged into {}",
        intervals.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals(pairs: &[(i32, i32)]) -> Vec<Interval> {
        pairs.iter().copied().map(Interval::from).collect()
    }

    fn covered(intervals: &[Interval], point: i32) -> bool {
        intervals.iter().any(|i| i.contains(point))
    }

    #[test]
    fn test_known_merge() {
        let input = intervals(&[(1, 3), (2, 6), (8, 10), (15, 18)]);
        assert_eq!(
            merge_intervals(&input),
            intervals(&[(1, 6), (8, 10), (15, 18)])
        );
    }

    #[test]
    fn test_touching_intervals_merge() {
        assert_eq!(
            merge_intervals(&intervals(&[(1, 3), (3, 5)])),
            intervals(&[(1, 5)])
        );
        // Adjacent integers that do not share a point stay apart.
        assert_eq!(
            merge_intervals(&intervals(&[(1, 3), (4, 5)])),
            intervals(&[(1, 3), (4, 5)])
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert!(merge_intervals(&[]).is_empty());
        assert_eq!(
            merge_intervals(&intervals(&[(4, 4)])),
            intervals(&[(4, 4)])
        );
    }

    #[test]
    fn test_nested_and_unsorted() {
        assert_eq!(
            merge_intervals(&intervals(&[(8, 9), (1, 10), (2, 3), (12, 12)])),
            intervals(&[(1, 10), (12, 12)])
        );
        assert_eq!(
            merge_intervals(&intervals(&[(15, 18), (8, 10), (2, 6), (1, 3)])),
            intervals(&[(1, 6), (8, 10), (15, 18)])
        );
        assert_eq!(
            merge_intervals(&intervals(&[(5, 7), (5, 6), (5, 9), (5, 5)])),
            intervals(&[(5, 9)])
        );
    }

    #[test]
    fn test_extreme_bounds() {
        assert_eq!(
            merge_intervals(&intervals(&[(i32::MIN, 0), (0, i32::MAX)])),
            intervals(&[(i32::MIN, i32::MAX)])
        );
    }

    #[test]
    fn test_copy_variant_keeps_input_order() {
        let input = intervals(&[(8, 10), (1, 3), (2, 6)]);
        let before = input.clone();
        let _ = merge_intervals(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_in_place_variant() {
        let mut buf = intervals(&[(8, 10), (1, 3), (2, 6), (15, 18)]);
        merge_intervals_in_place(&mut buf);
        assert_eq!(buf, intervals(&[(1, 6), (8, 10), (15, 18)]));

        let mut empty = Vec::new();
        merge_intervals_in_place(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_reversed_interval_does_not_panic() {
        // Behavior on start > end is unspecified; it only has to be safe.
        let out = merge_intervals(&intervals(&[(5, 1), (0, 2), (9, 3)]));
        assert!(!out.is_empty());
        assert!(out.len() <= 3);
    }

    #[test]
    fn test_random_union_preserved_and_idempotent() {
        fastrand::seed(4411);

        for _ in 0..500 {
            let input: Vec<Interval> = (0..fastrand::usize(0..30))
                .map(|_| {
                    let start = fastrand::i32(-40..40);
                    Interval::new(start, start + fastrand::i32(0..12))
                })
                .collect();

            let merged = merge_intervals(&input);

            for pair in merged.windows(2) {
                assert!(pair[0].start <= pair[0].end);
                assert!(pair[0].end < pair[1].start);
            }
            for point in -45..60 {
                assert_eq!(covered(&input, point), covered(&merged, point));
            }
            assert_eq!(merge_intervals(&merged), merged);
            assert!(merged.len() <= input.len());
        }
    }
}
