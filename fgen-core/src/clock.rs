use chrono::{DateTime, Utc};

/// Time source for manifest timestamps. Injected so report content can be
/// pinned in tests.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
