use core::fmt;

use log::trace;

use super::{
    chain::RawChain,
    error::{InsertError, NotFound},
    iter::{IntoIter, Iter, IterMut},
    node::{NodeHandle, NodeRef},
    traits::{Container, Keyed},
};

/// A singly linked list with head and tail access.
///
/// Lookups take a caller-supplied predicate `(payload, key) -> bool`; the list never
/// interprets payloads itself. Deletion takes the [`NodeHandle`] of a node found
/// earlier, or a predicate to delete the first match.
pub struct List<T> {
    chain: RawChain<T>,
}

impl<T> List<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        List {
            chain: RawChain::new(),
        }
    }

    /// Creates a new, empty list that holds at most `limit` payloads.
    pub const fn with_limit(limit: usize) -> Self {
        List {
            chain: RawChain::with_limit(limit),
        }
    }

    /// Insert a payload as the new head.
    ///
    /// On failure the payload is handed back and the list is unchanged.
    pub fn add_head(&mut self, data: T) -> Result<NodeHandle<T>, InsertError<T>> {
        let handle = self.chain.push_front(data)?;
        trace!("list add_head, len {}", self.chain.len());
        Ok(handle)
    }

    /// Insert a payload as the new tail.
    ///
    /// On failure the payload is handed back and the list is unchanged.
    pub fn add_tail(&mut self, data: T) -> Result<NodeHandle<T>, InsertError<T>> {
        let handle = self.chain.push_back(data)?;
        trace!("list add_tail, len {}", self.chain.len());
        Ok(handle)
    }

    /// Find the first node, head to tail, whose payload satisfies `predicate(payload, key)`.
    pub fn find<K, F>(&self, predicate: F, key: &K) -> Option<NodeRef<'_, T>>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        self.chain
            .seek(|node| predicate(unsafe { node.as_ref() }.data(), key))
            .map(|position| NodeRef::new(unsafe { &*position.node().as_ptr() }))
    }

    /// Find the first node whose payload key equals `key`.
    pub fn find_key(&self, key: &T::Key) -> Option<NodeRef<'_, T>>
    where
        T: Keyed,
        T::Key: PartialEq,
    {
        self.find(|data: &T, key: &T::Key| data.key() == key, key)
    }

    /// Get the payload of the node behind `handle`, if it is still in this list.
    pub fn get(&self, handle: NodeHandle<T>) -> Option<&T> {
        self.chain
            .locate(handle)
            .map(|position| unsafe { &*position.node().as_ptr() }.data())
    }

    /// Get the payload of the node behind `handle` mutably, if it is still in this list.
    pub fn get_mut(&mut self, handle: NodeHandle<T>) -> Option<&mut T> {
        self.chain
            .locate(handle)
            .map(|position| unsafe { &mut *position.node().as_ptr() }.data_mut())
    }

    /// Remove the node behind `handle` and return its payload.
    pub fn remove(&mut self, handle: NodeHandle<T>) -> Result<T, NotFound> {
        let data = self.chain.remove(handle).inspect_err(|_| {
            trace!("list remove: {:?} not in list", handle);
        })?;
        trace!("list remove, len {}", self.chain.len());
        Ok(data)
    }

    /// Remove the node behind `handle` and drop its payload.
    pub fn delete(&mut self, handle: NodeHandle<T>) -> Result<(), NotFound> {
        self.remove(handle).map(drop)
    }

    /// Remove the first node whose payload satisfies `predicate(payload, key)` and
    /// return its payload.
    pub fn remove_by<K, F>(&mut self, predicate: F, key: &K) -> Result<T, NotFound>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        let position = self
            .chain
            .seek(|node| predicate(unsafe { node.as_ref() }.data(), key))
            .ok_or(NotFound)?;
        let data = unsafe { self.chain.unlink(position) };
        trace!("list remove_by, len {}", self.chain.len());
        Ok(data)
    }

    /// Remove the first node whose payload satisfies `predicate(payload, key)` and
    /// drop its payload.
    pub fn delete_by<K, F>(&mut self, predicate: F, key: &K) -> Result<(), NotFound>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        self.remove_by(predicate, key).map(drop)
    }

    /// Get the head payload
    pub fn head(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Get the tail payload
    pub fn tail(&self) -> Option<&T> {
        self.chain.back()
    }

    /// Get the number of payloads in the list
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Get the capacity limit, `None` when unbounded
    pub fn limit(&self) -> Option<usize> {
        self.chain.limit()
    }

    /// Free every node and payload, leaving the list empty.
    ///
    /// Returns how many nodes were freed; a second call returns `0`.
    pub fn teardown(&mut self) -> usize {
        self.chain.clear()
    }

    /// Call `visit` on every payload, head to tail.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.chain.iter().for_each(visit);
    }

    /// Iterate over the payloads, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    /// Iterate mutably over the payloads, head to tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.chain.iter_mut()
    }

    #[cfg(test)]
    pub(crate) fn chain(&self) -> &RawChain<T> {
        &self.chain
    }
}

impl<T> Container for List<T> {
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

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
