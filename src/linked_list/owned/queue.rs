use core::fmt;

use log::trace;

use super::{
    chain::RawChain,
    error::InsertError,
    iter::{IntoIter, Iter},
    traits::Container,
};

/// A FIFO queue.
///
/// Payloads are enqueued at the tail and dequeued from the head, so both ends
/// are O(1) and the payload that has waited longest always leaves first.
pub struct Queue<T> {
    chain: RawChain<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Queue {
            chain: RawChain::new(),
        }
    }

    /// Creates a new, empty queue that holds at most `limit` payloads.
    pub const fn with_limit(limit: usize) -> Self {
        Queue {
            chain: RawChain::with_limit(limit),
        }
    }

    /// Append a payload at the tail.
    pub fn enqueue(&mut self, data: T) -> Result<(), InsertError<T>> {
        self.chain.push_back(data)?;
        trace!("queue enqueue, len {}", self.chain.len());
        Ok(())
    }

    /// Take the oldest payload from the head.
    ///
    /// Returns `None` and leaves the queue untouched when it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let data = self.chain.pop_front()?;
        trace!("queue dequeue, len {}", self.chain.len());
        Some(data)
    }

    /// Get the payload the next `dequeue` would return
    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Get the number of payloads in the queue
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Get the capacity limit, `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        self.chain.limit()
    }

    /// Free every queued node and payload.
    pub fn teardown(&mut self) -> usize {
        self.chain.clear()
    }

    /// Iterate from the oldest payload to the newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    #[cfg(test)]
    pub(crate) fn chain(&self) -> &RawChain<T> {
        &self.chain
    }
}

impl<T> Container for Queue<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn limit(&self) -> Option<usize> {
        self.chain.limit()
    }

    fn teardown(&mut self) -> usize {
        self.chain.clear()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Yields payloads in dequeue order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
