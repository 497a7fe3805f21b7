use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Produces a unique identifier on each call. Injected into the
/// session manager so tests can use predictable ids.
pub trait IdSource {
    fn next_id(&mut self) -> Uuid;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Produces the current timestamp for created and completed records.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
