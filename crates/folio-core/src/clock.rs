//! Millisecond wall clock used for message timestamps.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Current time in milliseconds since the Unix epoch.
///
/// Values handed out by one process are strictly increasing, so two messages
/// created within the same millisecond still order correctly.
pub fn now_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_MILLIS.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST_MILLIS.compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}
