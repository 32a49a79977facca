#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::types::Job;

/// Default page size for the job feed.
pub const PAGE_SIZE: u32 = 10;

/// Progress of the most recent page fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The `(limit, offset)` pair for the next page to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { limit: PAGE_SIZE, offset: 0 }
    }
}

impl Cursor {
    fn advance(&mut self) {
        self.offset += self.limit;
    }
}

/// Accumulated job feed: append-only items plus the fetch state machine.
///
/// The cursor only advances in `apply_page`, so the offset used by the next
/// fetch always reflects the completion of the previous one. Pages are
/// appended in fetch order and never deduplicated.
#[derive(Clone, Debug, Default)]
pub struct JobsState {
    pub items: Vec<Job>,
    pub status: FetchStatus,
    pub cursor: Cursor,
    pub error: Option<String>,
}

impl JobsState {
    /// Begin a fetch if none is in flight.
    ///
    /// Returns `false` while a fetch is already loading; callers must then
    /// issue no request. This guard, not the disabled button, is what
    /// prevents overlapping page fetches.
    pub fn begin_fetch(&mut self) -> bool {
        if self.status == FetchStatus::Loading {
            return false;
        }
        self.status = FetchStatus::Loading;
        self.error = None;
        true
    }

    /// Record a successfully fetched page: append and advance the cursor.
    pub fn apply_page(&mut self, page: Vec<Job>) {
        self.items.extend(page);
        self.status = FetchStatus::Succeeded;
        self.cursor.advance();
    }

    /// Record a failed fetch. Items and cursor are untouched; the feed stays
    /// where it was until the user retries.
    pub fn apply_error(&mut self, message: String) {
        self.status = FetchStatus::Failed;
        self.error = Some(message);
    }
}
