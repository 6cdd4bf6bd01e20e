use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ptr::NonNull;

use log::{debug, warn};

use super::{
    error::{InsertError, NotFound},
    iter::{Iter, IterMut},
    node::{Node, NodeHandle},
    traits::Link,
};

/// A node together with the slot that owns it.
///
/// `prev` is `None` when the chain itself (its head) owns the node.
pub(crate) struct Position<T> {
    prev: Option<NonNull<Node<T>>>,
    node: NonNull<Node<T>>,
}

impl<T> Position<T> {
    pub(crate) fn node(&self) -> NonNull<Node<T>> {
        self.node
    }
}

/// The head/tail chain shared by every owned container.
///
/// All linking and unlinking goes through here so the head/tail invariants are
/// kept in one place.
pub(crate) struct RawChain<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    limit: Option<usize>,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> RawChain<T> {
    /// Creates a new, empty, unbounded chain.
    pub(crate) const fn new() -> Self {
        RawChain {
            head: None,
            tail: None,
            len: 0,
            limit: None,
            _marker: PhantomData,
        }
    }

    /// Creates a new, empty chain that refuses to grow past `limit` nodes.
    pub(crate) const fn with_limit(limit: usize) -> Self {
        RawChain {
            head: None,
            tail: None,
            len: 0,
            limit: Some(limit),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub(crate) fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.head.map(|head| unsafe { &*head.as_ptr() }.data())
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|head| unsafe { &mut *head.as_ptr() }.data_mut())
    }

    pub(crate) fn back(&self) -> Option<&T> {
        self.tail.map(|tail| unsafe { &*tail.as_ptr() }.data())
    }

    /// Allocates a node for `data` if the limit allows one more.
    fn reserve(&self, data: T) -> Result<NonNull<Node<T>>, InsertError<T>> {
        if self.limit.is_some_and(|limit| self.len >= limit) {
            warn!("chain at limit {}, rejecting insert", self.len);
            return Err(InsertError::Full(data));
        }
        Node::alloc(data).map_err(|data| {
            warn!("node allocation failed with {} nodes in chain", self.len);
            InsertError::Alloc(data)
        })
    }

    /// Links a new node in front of the head.
    pub(crate) fn push_front(&mut self, data: T) -> Result<NodeHandle<T>, InsertError<T>> {
        let node = self.reserve(data)?;
        unsafe { (*node.as_ptr()).set_next(self.head) };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
        Ok(NodeHandle::new(node))
    }

    /// Links a new node after the tail.
    pub(crate) fn push_back(&mut self, data: T) -> Result<NodeHandle<T>, InsertError<T>> {
        let node = self.reserve(data)?;
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        Ok(NodeHandle::new(node))
    }

    /// Unlinks the head node and returns its payload.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let node = self.head?;
        Some(unsafe { self.unlink(Position { prev: None, node }) })
    }

    /// Walks from the head and returns the first node `hit` accepts.
    pub(crate) fn seek<F>(&self, mut hit: F) -> Option<Position<T>>
    where
        F: FnMut(NonNull<Node<T>>) -> bool,
    {
        let mut prev = None;
        let mut current = self.head;
        while let Some(node) = current {
            if hit(node) {
                return Some(Position { prev, node });
            }
            prev = current;
            current = unsafe { node.as_ref().next() };
        }
        None
    }

    /// Finds the live node `handle` was minted from.
    pub(crate) fn locate(&self, handle: NodeHandle<T>) -> Option<Position<T>> {
        self.seek(|node| unsafe { handle.is(node) })
    }

    /// Unlinks the node behind `handle` and returns its payload.
    pub(crate) fn remove(&mut self, handle: NodeHandle<T>) -> Result<T, NotFound> {
        let position = self.locate(handle).ok_or(NotFound)?;
        Ok(unsafe { self.unlink(position) })
    }

    /// Splices `position.node` out of the chain, repairs `head`/`tail` and frees it.
    ///
    /// # Safety
    ///
    /// `position` must come from [`RawChain::seek`] on this chain with no mutation since.
    pub(crate) unsafe fn unlink(&mut self, position: Position<T>) -> T {
        let Position { prev, node } = position;
        unsafe {
            match prev {
                Some(prev) => detach(&mut *prev.as_ptr(), node),
                None => detach(self, node),
            }
        }
        if self.tail == Some(node) {
            self.tail = prev;
        }
        self.len -= 1;
        unsafe { Node::free(node) }
    }

    /// Frees every node and payload, returning how many nodes were freed.
    pub(crate) fn clear(&mut self) -> usize {
        let mut current = self.head.take();
        self.tail = None;
        self.len = 0;

        let mut freed = 0;
        while let Some(node) = current {
            unsafe {
                current = node.as_ref().next();
                drop(Node::free(node));
            }
            freed += 1;
        }
        if freed > 0 {
            debug!("chain teardown freed {} nodes", freed);
        }
        freed
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        unsafe { Iter::new(self.head, self.len) }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe { IterMut::new(self.head, self.len) }
    }

    /// Walks the chain and panics if any head/tail invariant is broken.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(
            self.head.is_none(),
            self.tail.is_none(),
            "head and tail disagree on emptiness"
        );
        assert_eq!(self.head.is_none(), self.len == 0, "len disagrees with head");

        let mut count = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(node) = current {
            count += 1;
            assert!(count <= self.len, "chain longer than len, possible cycle");
            last = Some(node);
            current = unsafe { node.as_ref().next() };
        }
        assert_eq!(count, self.len, "len disagrees with chain");
        assert_eq!(last, self.tail, "chain does not end at tail");
        if let Some(tail) = self.tail {
            assert!(unsafe { tail.as_ref().next() }.is_none(), "tail has a successor");
        }
    }
}

/// Points `parent` past `node`.
///
/// # Safety
///
/// `parent` must currently own `node`.
unsafe fn detach<T, L>(parent: &mut L, node: NonNull<Node<T>>)
where
    L: Link<T>,
{
    debug_assert_eq!(
        parent.next(),
        Some(node),
        "Parent must be the one that contains this node"
    );
    parent.set_next(unsafe { node.as_ref().next() });
}

impl<T> Link<T> for RawChain<T> {
    #[inline]
    fn next(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.head = next;
    }
}

impl<T> Default for RawChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawChain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for RawChain<T> {}
unsafe impl<T: Sync> Sync for RawChain<T> {}
