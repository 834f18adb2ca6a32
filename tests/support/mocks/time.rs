// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use kawara_core::application::ports::time::Clock;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Deterministic base timestamp for seeded data.
pub static EPOCH: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_epoch() -> Self {
        Self(*EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Advances one second per call, so every store-assigned timestamp is
/// distinct and insertion order equals recency order.
pub struct SteppingClock {
    ticks: Mutex<i64>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            ticks: Mutex::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        *ticks += 1;
        *EPOCH + chrono::Duration::seconds(*ticks)
    }
}
