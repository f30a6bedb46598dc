use chrono::{DateTime, Utc};

/// Port for reading the wall clock.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
