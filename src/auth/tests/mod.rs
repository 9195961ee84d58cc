//! Unit tests for the auth module.


use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Mutex;

/// Clock pinned to a settable instant.
pub(super) struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub(super) fn new() -> Self {
        Self {
            now: Mutex::new(Utc::now()),
        }
    }

    pub(super) fn advance(&self, by: TimeDelta) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.lock().map(|now| *now).unwrap_or_else(|_| Utc::now())
    }
}
