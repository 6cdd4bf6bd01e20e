//! Linked containers that own their nodes.
//!
//! Every element lives in its own heap node. The container owns the head node
//! and each node owns its successor, so a payload handed to an insertion belongs
//! to the container until a removal hands it back or a deletion drops it.
//!
//! # Examples
//!
//! ```
//! use mola_linked::{List, Queue, Stack};
//!
//! let mut list = List::new();
//! list.add_tail(1).unwrap();
//! list.add_tail(2).unwrap();
//! list.add_head(0).unwrap();
//!
//! let mut seen = vec![];
//! list.for_each(|v| seen.push(*v));
//! assert_eq!(seen, vec![0, 1, 2]);
//!
//! let two = list.find(|v, k| v == k, &2).map(|n| n.handle()).unwrap();
//! list.delete(two).unwrap();
//! assert_eq!(list.tail(), Some(&1));
//!
//! let mut queue = Queue::new();
//! queue.enqueue("a").unwrap();
//! queue.enqueue("b").unwrap();
//! assert_eq!(queue.dequeue(), Some("a"));
//!
//! let mut stack = Stack::new();
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//! assert_eq!(stack.pop(), Some(2));
//! ```
pub mod owned;
