//! Id and Clock Sources
//!
//! Task creation draws ids and "today" from injected sources so boards can be
//! built deterministically in tests.

use chrono::{NaiveDate, Utc};

use crate::domain::TaskId;

/// Produces fresh task ids
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> TaskId;
}

/// Monotonic counter ids with a fixed prefix (`task-1`, `task-2`, ...)
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("task-")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Millisecond timestamp ids, bumped so two ids in the same millisecond never repeat
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: i64,
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> TaskId {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        TaskId::new(self.last.to_string())
    }
}

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Current UTC calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("n");
        assert_eq!(ids.next_id().as_str(), "n1");
        assert_eq!(ids.next_id().as_str(), "n2");
    }

    #[test]
    fn test_timestamp_ids_strictly_increase() {
        let mut ids = TimestampIds::default();
        let a: i64 = ids.next_id().as_str().parse().unwrap();
        let b: i64 = ids.next_id().as_str().parse().unwrap();
        let c: i64 = ids.next_id().as_str().parse().unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_system_clock_uses_utc_date() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(before <= today && today <= after);
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
