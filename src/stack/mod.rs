//! Pending resolution stack.
//!
//! Anything that can be interrupted by a player decision is a `Task` on
//! this stack. The top task runs first. A refill that draws a nightmare
//! stays on the stack underneath the nightmare and resumes once the
//! nightmare is resolved, however deeply nightmares nest.
//!
//! ```
//! use onirim::stack::{PendingStack, Task};
//!
//! let mut stack = PendingStack::new();
//! stack.push(Task::Refill);
//! stack.push(Task::AwaitRemedy);
//!
//! assert_eq!(stack.top(), Some(&Task::AwaitRemedy));
//! assert_eq!(stack.depth(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A unit of pending work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Draw until the hand is full, then drain limbo and shuffle.
    Refill,

    /// A nightmare is waiting for a remedy.
    AwaitRemedy,

    /// The key remedy is waiting for a key position.
    AwaitKey,

    /// The door remedy is waiting for a color.
    AwaitDoor,

    /// The five-card remedy still has to discard this many cards.
    Purge { remaining: usize },

    /// A prophecy is waiting for an ordering. The key at `key_position`
    /// is discarded once it resolves.
    AwaitProphecy { revealed: Vec<Card>, key_position: usize },
}

/// LIFO stack of pending tasks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingStack {
    /// Index 0 = bottom, last = top.
    entries: Vec<Task>,

    /// Deepest the stack has been.
    peak: usize,
}

impl PendingStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: Task) {
        self.entries.push(task);
        self.peak = self.peak.max(self.entries.len());
    }

    pub fn pop(&mut self) -> Option<Task> {
        self.entries.pop()
    }

    /// Swap the top task for `task`, or push it onto an empty stack.
    pub fn replace_top(&mut self, task: Task) {
        self.entries.pop();
        self.push(task);
    }

    #[must_use]
    pub fn top(&self) -> Option<&Task> {
        self.entries.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Task> {
        self.entries.last_mut()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn peak_depth(&self) -> usize {
        self.peak
    }

    /// Tasks from bottom to top.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
