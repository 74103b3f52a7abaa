//! Chunk-size schedules for the windowed estimators

/// Evenly spaced chunk sizes for the rescaled-range estimator
///
/// Produces `points` values from `min_chunksize` to `max_chunksize + 1`, both
/// ends included, truncated toward zero. Narrow ranges may repeat values.
pub fn rescaled_range_schedule(min_chunksize: usize, max_chunksize: usize, points: usize) -> Vec<usize> {
    let end = max_chunksize.saturating_add(1);
    match points {
        0 => Vec::new(),
        1 => vec![min_chunksize],
        _ => {
            let step = (end as f64 - min_chunksize as f64) / (points - 1) as f64;
            let mut schedule: Vec<usize> = (0..points - 1)
                .map(|i| (min_chunksize as f64 + i as f64 * step) as usize)
                .collect();
            schedule.push(end);
            schedule
        }
    }
}

/// Stepped window lengths for the detrended-moving-average estimator
///
/// `min_chunksize, min_chunksize + step, ...` strictly below `max_chunksize + 1`.
pub fn moving_average_schedule(min_chunksize: usize, max_chunksize: usize, step: usize) -> Vec<usize> {
    if step == 0 {
        return Vec::new();
    }
    (min_chunksize..max_chunksize.saturating_add(1)).step_by(step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rescaled_range_default_schedule() {
        let schedule = rescaled_range_schedule(8, 200, 5);
        assert_eq!(schedule, vec![8, 56, 104, 152, 201]);
    }

    #[test]
    fn test_rescaled_range_narrow_range_repeats() {
        let schedule = rescaled_range_schedule(8, 9, 5);
        assert_eq!(schedule, vec![8, 8, 9, 9, 10]);
    }

    #[test]
    fn test_moving_average_default_schedule() {
        let schedule = moving_average_schedule(8, 200, 5);
        // ceil((201 - 8) / 5)
        assert_eq!(schedule.len(), 39);
        assert_eq!(schedule.first(), Some(&8));
        assert_eq!(schedule.last(), Some(&198));
        assert!(schedule.windows(2).all(|w| w[1] - w[0] == 5));
    }

    #[test]
    fn test_moving_average_includes_adjusted_bound() {
        // 8 + 3 * 64 = 200 < 201, 8 + 4 * 64 = 264 is past the bound
        assert_eq!(moving_average_schedule(8, 200, 64), vec![8, 72, 136, 200]);
        assert_eq!(moving_average_schedule(8, 199, 64), vec![8, 72, 136]);
    }

    #[test]
    fn test_degenerate_counts() {
        assert!(rescaled_range_schedule(8, 200, 0).is_empty());
        assert_eq!(rescaled_range_schedule(8, 200, 1), vec![8]);
        assert!(moving_average_schedule(8, 200, 0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_rescaled_range_schedule_spans_bounds(
            min in 2usize..64,
            span in 0usize..512,
            points in 2usize..32,
        ) {
            let max = min + span;
            let schedule = rescaled_range_schedule(min, max, points);
            prop_assert_eq!(schedule.len(), points);
            prop_assert_eq!(schedule[0], min);
            prop_assert_eq!(*schedule.last().unwrap(), max + 1);
            prop_assert!(schedule.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn prop_moving_average_schedule_is_strictly_increasing(
            min in 2usize..64,
            span in 0usize..512,
            step in 1usize..32,
        ) {
            let max = min + span;
            let schedule = moving_average_schedule(min, max, step);
            prop_assert_eq!(schedule.len(), (max + 1 - min + step - 1) / step);
            prop_assert!(schedule.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(schedule.iter().all(|&n| n >= min && n <= max));
        }
    }
}
