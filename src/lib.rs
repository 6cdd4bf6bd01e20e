//! Heap-allocated linked containers: a singly linked list, a FIFO queue and
//! a LIFO stack sharing one node layout.
//!
//! See [`linked_list::owned`] for the containers themselves.
#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::owned::{
    error::{InsertError, NotFound},
    list::List,
    node::{NodeHandle, NodeRef},
    queue::Queue,
    stack::Stack,
    traits::{Container, Keyed},
};
pub use mola_linked_derive::Keyed;
