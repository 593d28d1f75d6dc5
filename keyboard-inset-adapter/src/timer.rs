use alloc::collections::BTreeMap;

use keyboard_inset::Task;

/// Fire-and-forget timer queue for deferred controller tasks.
///
/// Tasks due at the same time fire in the order they were scheduled. Single tasks are never
/// cancelled; the controller drops tasks that went stale while waiting.
#[derive(Clone, Debug)]
pub struct Timers<N> {
    queue: BTreeMap<(u64, u64), Task<N>>,
    seq: u64,
}

impl<N> Default for Timers<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Timers<N> {
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            seq: 0,
        }
    }

    pub fn schedule(&mut self, due_ms: u64, task: Task<N>) {
        self.queue.insert((due_ms, self.seq), task);
        self.seq = self.seq.wrapping_add(1);
    }

    /// Removes and returns the earliest task due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Task<N>> {
        let (&(due_ms, _), _) = self.queue.first_key_value()?;
        if due_ms > now_ms {
            return None;
        }
        self.queue.pop_first().map(|(_, task)| task)
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.first_key_value().map(|(&(due_ms, _), _)| due_ms)
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
