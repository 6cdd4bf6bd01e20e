use alloc::alloc::Layout;
use alloc::boxed::Box;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicU64, Ordering};

use super::traits::Link;

/// Source of node stamps. Stamps are never reused, so a handle to a freed node
/// cannot match a later node allocated at the same address.
static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

/// A heap cell holding one payload and the owning edge to its successor.
pub(crate) struct Node<T> {
    next: Option<NonNull<Node<T>>>,
    stamp: u64,
    data: T,
}

impl<T> Node<T> {
    /// Allocates a detached node holding `data`.
    ///
    /// Hands `data` back if the allocator returns null.
    pub(crate) fn alloc(data: T) -> Result<NonNull<Self>, T> {
        let layout = Layout::new::<Self>();
        // SAFETY: `Node<T>` always has a non-zero size because of `stamp`.
        let ptr = unsafe { alloc::alloc::alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(data);
        };
        unsafe {
            ptr.as_ptr().write(Node {
                next: None,
                stamp: NEXT_STAMP.fetch_add(1, Ordering::Relaxed),
                data,
            });
        }
        Ok(ptr)
    }

    /// Frees a node and returns its payload.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must already be unlinked from its chain
    /// and must not be freed twice.
    pub(crate) unsafe fn free(node: NonNull<Self>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        let Node { data, .. } = *node;
        data
    }

    #[inline]
    pub(crate) fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    #[inline]
    pub(crate) fn stamp(&self) -> u64 {
        self.stamp
    }
}

impl<T> Link<T> for Node<T> {
    #[inline]
    fn next(&self) -> Option<NonNull<Node<T>>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.next = next;
    }
}

/// An identity for a node in a container.
///
/// Handles carry no lifetime and are never dereferenced on their own: a container
/// only acts on a handle after finding a live node with the same address and stamp.
/// Handles to removed nodes, or to nodes of another container, are rejected.
pub struct NodeHandle<T> {
    ptr: NonNull<Node<T>>,
    stamp: u64,
}

impl<T> NodeHandle<T> {
    pub(crate) fn new(node: NonNull<Node<T>>) -> Self {
        // SAFETY: handles are only minted from live nodes.
        let stamp = unsafe { node.as_ref().stamp() };
        NodeHandle { ptr: node, stamp }
    }

    /// Check whether `node` is the node this handle was minted from
    ///
    /// # Safety
    ///
    /// `node` must be live.
    pub(crate) unsafe fn is(&self, node: NonNull<Node<T>>) -> bool {
        self.ptr == node && unsafe { node.as_ref().stamp() } == self.stamp
    }
}

impl<T> Clone for NodeHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeHandle<T> {}

impl<T> PartialEq for NodeHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.stamp == other.stamp
    }
}

impl<T> Eq for NodeHandle<T> {}

impl<T> Hash for NodeHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
        self.stamp.hash(state);
    }
}

impl<T> fmt::Debug for NodeHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeHandle")
            .field("ptr", &self.ptr)
            .field("stamp", &self.stamp)
            .finish()
    }
}

// A handle is an address plus a counter; it grants no access by itself.
unsafe impl<T> Send for NodeHandle<T> {}
unsafe impl<T> Sync for NodeHandle<T> {}

/// A borrowed view of a node found in a container.
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        NodeRef { node }
    }

    /// Get the payload stored in the node
    pub fn data(&self) -> &'a T {
        self.node.data()
    }

    /// Get a handle that can be passed back to the container
    pub fn handle(&self) -> NodeHandle<T> {
        NodeHandle::new(NonNull::from(self.node))
    }
}

impl<T> Deref for NodeRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.node.data()
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.node.data()).finish()
    }
}
