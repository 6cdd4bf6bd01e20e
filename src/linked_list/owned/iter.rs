use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{chain::RawChain, node::Node, traits::Link};

/// An iterator over the payloads of a container, head to tail.
pub struct Iter<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Creates a new iterator starting at `head`.
    ///
    /// # Safety
    ///
    /// `head` must start a chain of exactly `len` nodes that stays borrowed for `'a`.
    pub(crate) unsafe fn new(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            let node = unsafe { &*current.as_ptr() };
            self.current = node.next();
            self.remaining -= 1;
            node.data()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// A mutable iterator over the payloads of a container, head to tail.
pub struct IterMut<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    /// Creates a new mutable iterator starting at `head`.
    ///
    /// # Safety
    ///
    /// `head` must start a chain of exactly `len` nodes that stays exclusively
    /// borrowed for `'a`.
    pub(crate) unsafe fn new(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            let node = unsafe { &mut *current.as_ptr() };
            self.current = node.next();
            self.remaining -= 1;
            node.data_mut()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator that takes payloads from the head until the container is empty.
pub struct IntoIter<T> {
    chain: RawChain<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(chain: RawChain<T>) -> Self {
        Self { chain }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
