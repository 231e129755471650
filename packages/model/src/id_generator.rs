use crate::block::BlockId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Timestamp-derived block id generator
///
/// Ids are the creation time in milliseconds, bumped when necessary so that
/// every id is strictly greater than the previous one and than any id the
/// caller says is already taken.
#[derive(Clone)]
pub struct IdGenerator {
    clock: fn() -> u64,
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(current_millis)
    }

    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self { clock, last: 0 }
    }

    /// Generate the next id, greater than `floor` if given
    pub fn next_id(&mut self, floor: Option<BlockId>) -> BlockId {
        let mut candidate = (self.clock)().max(self.last.saturating_add(1));
        if let Some(floor) = floor {
            candidate = candidate.max(floor.get().saturating_add(1));
        }
        self.last = candidate;
        BlockId(candidate)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").field("last", &self.last).finish()
    }
}

fn current_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
