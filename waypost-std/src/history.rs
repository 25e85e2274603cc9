//! In-memory history.

use std::sync::{Mutex, MutexGuard, PoisonError};
use waypost_core::History;

struct Stack {
    entries: Vec<String>,
    index: usize,
}

/// A history stack kept in memory.
///
/// Stands in for the browser history in tests and non-browser hosts.
/// [`back`](Self::back) and [`forward`](Self::forward) move through the stack
/// and return the new location, which the host then reports to the
/// controller's `on_location_change`.
pub struct MemoryHistory {
    stack: Mutex<Stack>,
}

impl MemoryHistory {
    /// Create a history whose single entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            stack: Mutex::new(Stack {
                entries: vec![initial.into()],
                index: 0,
            }),
        }
    }

    /// Step back one entry.
    pub fn back(&self) -> Option<String> {
        let mut stack = self.lock();
        stack.index = stack.index.checked_sub(1)?;
        Some(stack.entries[stack.index].clone())
    }

    /// Step forward one entry.
    pub fn forward(&self) -> Option<String> {
        let mut stack = self.lock();
        if stack.index + 1 >= stack.entries.len() {
            return None;
        }
        stack.index += 1;
        Some(stack.entries[stack.index].clone())
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lock().entries.clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Always false: a history has at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Stack> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        let stack = self.lock();
        stack.entries[stack.index].clone()
    }

    fn push(&self, location: &str) {
        let mut stack = self.lock();
        let next = stack.index + 1;
        stack.entries.truncate(next);
        stack.entries.push(location.to_string());
        stack.index = next;
    }

    fn replace(&self, location: &str) {
        let mut stack = self.lock();
        let index = stack.index;
        stack.entries[index] = location.to_string();
    }
}
