use core::fmt;

use log::trace;

use super::{
    chain::RawChain,
    error::InsertError,
    iter::{IntoIter, Iter},
    traits::Container,
};

/// A LIFO stack.
///
/// The top of the stack is the head of the chain; the tail tracks the bottom
/// element so the shared head/tail invariants hold here too.
pub struct Stack<T> {
    chain: RawChain<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty stack.
    pub const fn new() -> Self {
        Stack {
            chain: RawChain::new(),
        }
    }

    /// Creates a new, empty stack that holds at most `limit` payloads.
    pub const fn with_limit(limit: usize) -> Self {
        Stack {
            chain: RawChain::with_limit(limit),
        }
    }

    /// Push a payload on top of the stack.
    pub fn push(&mut self, data: T) -> Result<(), InsertError<T>> {
        self.chain.push_front(data)?;
        trace!("stack push, len {}", self.chain.len());
        Ok(())
    }

    /// Pop the most recently pushed payload.
    ///
    /// Returns `None` and leaves the stack untouched when it is empty.
    pub fn pop(&mut self) -> Option<T> {
        let data = self.chain.pop_front()?;
        trace!("stack pop, len {}", self.chain.len());
        Some(data)
    }

    /// Get the top payload without removing it
    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Get the top payload mutably without removing it
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.chain.front_mut()
    }

    /// Get the number of payloads in the stack
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Get the capacity limit, `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        self.chain.limit()
    }

    /// Free every node and payload on the stack.
    pub fn teardown(&mut self) -> usize {
        self.chain.clear()
    }

    /// Iterate from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    #[cfg(test)]
    pub(crate) fn chain(&self) -> &RawChain<T> {
        &self.chain
    }
}

impl<T> Container for Stack<T> {
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

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Yields payloads in pop order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
