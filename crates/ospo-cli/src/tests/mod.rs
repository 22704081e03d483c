mod app;

use chrono::{DateTime, TimeZone, Utc};

/// Fixed clock: three to five days after the seeded requests
pub(crate) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 25, 0, 0, 0).unwrap()
}
