//! Positions of entries pushed by the running operation.
//!
//! Compound operations address their own entries by position without asking
//! git for the stash list again. This only holds while nobody else touches the
//! stash list during the operation.

/// Position of an entry after `later_pushes` newer entries went on top of it.
pub const fn position_after(later_pushes: usize) -> usize {
    later_pushes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEntry(usize);

/// Entries pushed so far, oldest first.
#[derive(Debug, Default, Clone)]
pub struct StashSchedule {
    live: Vec<bool>,
}

impl StashSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a push onto position 0.
    pub fn push(&mut self) -> ScheduledEntry {
        self.live.push(true);
        ScheduledEntry(self.live.len() - 1)
    }

    pub fn position(&self, entry: ScheduledEntry) -> usize {
        let later_pushes = self.live[entry.0 + 1..]
            .iter()
            .filter(|live| **live)
            .count();
        position_after(later_pushes)
    }

    /// Record that `entry` was dropped, entries pushed before it move up.
    pub fn dropped(&mut self, entry: ScheduledEntry) {
        self.live[entry.0] = false;
    }
}
