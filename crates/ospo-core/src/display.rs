//! Presentation helpers shared by every view of a request list.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Relative age of a timestamp as shown on request cards.
///
/// Days are rounded up: anything under 24h but over zero is "1 day ago".
/// Older than four weeks falls back to the calendar date.
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_millis = (now - created_at).num_milliseconds().abs();
    let days = (diff_millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;

    match days {
        1 => "1 day ago".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => format!("{} weeks ago", (d + 6) / 7),
        _ => created_at.format("%Y-%m-%d").to_string(),
    }
}

/// Slice out one page (1-based) of `items`. Out-of-range pages are empty.
pub fn page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `len` items
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
