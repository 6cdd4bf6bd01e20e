//! # Owned Linked Containers
//!
//! This module provides heap-node containers that own their payloads.
//!
//! ## Core Components
//!
//! - [`list::List`]: A singly linked list with head and tail access, predicate lookup and
//!   single-node deletion.
//! - [`queue::Queue`]: A FIFO queue, enqueue at the tail and dequeue at the head.
//! - [`stack::Stack`]: A LIFO stack, push and pop at the head.
//! - [`node::NodeHandle`]: A lifetime-free identity for a node, returned by insertions and
//!   lookups and accepted by deletions.
//! - [`traits`]: The [`traits::Container`] surface shared by all three and the
//!   [`traits::Keyed`] trait for payloads looked up by a field.
//!
//! ## Invariants
//!
//! Every public operation leaves the container in this shape:
//!
//! - `head` is empty exactly when `tail` is empty, exactly when the length is zero.
//! - Following `next` from `head` ends at `tail`, and `tail` has no successor.
//! - The container owns its head node and each node owns its successor. There are no cycles.
//!
//! Handles are checked against the live nodes of the container before use, so a stale
//! handle or one from another container is reported as [`error::NotFound`].

pub mod traits;
pub mod error;
pub mod node;
pub mod list;
pub mod queue;
pub mod stack;
pub mod iter;

mod chain;

#[cfg(test)]
mod tests;
