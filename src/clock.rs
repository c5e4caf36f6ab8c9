use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of "now" for handlers that stamp their output.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// A clock frozen at `at`. Used to make stamped responses reproducible.
pub fn fixed_clock(at: DateTime<Utc>) -> Clock {
    Arc::new(move || at)
}
