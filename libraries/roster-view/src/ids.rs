//! Client-side identifiers for records created in this session.

use chrono::Utc;
use roster_core::UserId;

/// Generates timestamp-based ids that are unique within the session.
///
/// Ids are the current Unix time in milliseconds, bumped past the last id
/// handed out and past any id already in use.
#[derive(Debug, Clone, Default)]
pub struct LocalIdGenerator {
    last: i64,
}

impl LocalIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id not rejected by `in_use`.
    pub fn next_id(&mut self, in_use: impl Fn(UserId) -> bool) -> UserId {
        let mut candidate = Utc::now().timestamp_millis().max(self.last + 1);
        while in_use(UserId::new(candidate)) {
            candidate += 1;
        }
        self.last = candidate;
        UserId::new(candidate)
    }
}
