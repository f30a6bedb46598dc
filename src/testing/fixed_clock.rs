use chrono::{DateTime, TimeZone, Utc};

use crate::ports::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self(Utc.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap())
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(2024, 1, 2, 3, 4, 5)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
