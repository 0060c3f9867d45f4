//! Deferred continuations of the layout
//!
//! The engine does not own a clock. It queues [`Deferred`] tasks in an
//! outbox, the host waits for each task's [`Timing`] and hands the task back.
//! A task that is already pending is not queued again, which folds a burst of
//! resize events into a single classification.

/// Delay before the post-navigation auto-collapse fires
pub const AUTO_COLLAPSE_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferred {
    /// Reclassify the viewport after a resize
    Classify,
    /// Clear the first-paint animation guard
    EnableAnimations,
    /// Close the overlay sidebar after navigating
    AutoCollapse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// Next scheduler tick (`setTimeout(_, 0)`)
    NextTick,
    /// Next animation frame
    NextFrame,
    After { millis: u32 },
}

impl Deferred {
    pub const fn timing(self) -> Timing {
        match self {
            Deferred::Classify => Timing::NextTick,
            Deferred::EnableAnimations => Timing::NextFrame,
            Deferred::AutoCollapse => Timing::After {
                millis: AUTO_COLLAPSE_DELAY_MS,
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: Vec<Deferred>,
    outbox: Vec<Deferred>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task`; returns `false` when it is already pending.
    pub fn schedule(&mut self, task: Deferred) -> bool {
        if self.pending.contains(&task) {
            return false;
        }
        self.pending.push(task);
        self.outbox.push(task);
        true
    }

    /// Tasks queued since the last drain, in scheduling order
    pub fn drain(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.outbox)
    }

    /// Mark `task` as fired; returns `false` when it was not pending.
    pub fn take(&mut self, task: Deferred) -> bool {
        match self.pending.iter().position(|t| *t == task) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, task: Deferred) -> bool {
        self.pending.contains(&task)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.outbox.clear();
    }
}
