//! Conversion of display ranges into millisecond cutoffs.

use stats_common::GraphRange;

/// Seconds in a scheduling day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Earliest timestamp, in milliseconds, that falls inside `range`.
///
/// `next_day_at_secs` is when the next scheduling day starts. Ranges without
/// a window return 0, meaning no cutoff. Arithmetic wraps instead of
/// panicking on out-of-range inputs.
pub fn millisecond_cutoff_for_range(range: GraphRange, next_day_at_secs: i64) -> i64 {
    let Some(days) = range.window_days() else {
        return 0;
    };

    let window = SECONDS_PER_DAY.wrapping_mul(i64::from(days));
    let start = next_day_at_secs.wrapping_sub(window);
    start.wrapping_mul(1000)
}

/// Like [`millisecond_cutoff_for_range`] for a raw range tag.
///
/// Unknown tags behave like [`GraphRange::AllTime`].
pub fn millisecond_cutoff_for_tag(tag: i32, next_day_at_secs: i64) -> i64 {
    millisecond_cutoff_for_range(GraphRange::from_tag(tag), next_day_at_secs)
}
