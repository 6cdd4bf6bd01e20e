use core::ptr::NonNull;

use super::node::Node;

/// A trait for the common surface of the owned containers.
pub trait Container {
    /// The payload type stored in each node.
    type Item;

    /// Get the number of nodes in the container
    fn len(&self) -> usize;

    /// Check if the container is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the configured capacity limit, `None` when unbounded
    fn limit(&self) -> Option<usize>;

    /// Free every remaining node and payload
    ///
    /// Returns the number of nodes freed. Calling it on an empty container is a no-op
    /// that returns `0`.
    fn teardown(&mut self) -> usize;
}

/// A trait for payloads that are looked up by one of their fields.
///
/// Usually derived with `#[derive(Keyed)]` and a `#[key]` field attribute.
///
/// ```
/// use mola_linked::{Keyed, List};
///
/// #[derive(Keyed)]
/// struct Entry {
///     #[key]
///     id: u32,
///     label: &'static str,
/// }
///
/// let mut list = List::new();
/// assert!(list.add_tail(Entry { id: 4, label: "four" }).is_ok());
/// assert_eq!(list.find_key(&4).map(|e| e.label), Some("four"));
/// assert_eq!(*list.head().map(Keyed::key).unwrap_or(&0), 4);
/// ```
///
/// The derive needs exactly one `#[key]` field:
///
/// ```compile_fail
/// use mola_linked::Keyed;
///
/// #[derive(Keyed)]
/// struct Entry {
///     id: u32,
/// }
/// ```
///
/// ```compile_fail
/// use mola_linked::Keyed;
///
/// #[derive(Keyed)]
/// struct Entry {
///     #[key]
///     id: u32,
///     #[key]
///     alias: u32,
/// }
/// ```
///
/// Only structs with named fields are accepted:
///
/// ```compile_fail
/// use mola_linked::Keyed;
///
/// #[derive(Keyed)]
/// struct Entry(#[key] u32);
/// ```
///
/// ```compile_fail
/// use mola_linked::Keyed;
///
/// #[derive(Keyed)]
/// enum Entry {
///     Id(u32),
/// }
/// ```
///
/// The container attribute only knows `crate_path`:
///
/// ```compile_fail
/// use mola_linked::Keyed;
///
/// #[derive(Keyed)]
/// #[keyed(path = "mola_linked")]
/// struct Entry {
///     #[key]
///     id: u32,
/// }
/// ```
pub trait Keyed {
    /// The type of the key field.
    type Key: ?Sized;

    /// Get the key of this payload
    fn key(&self) -> &Self::Key;
}

/// A slot that owns the next node of a chain.
///
/// Implemented by [`Node`] and by the chain itself, whose `next` is its head, so
/// splicing a node out is the same operation whichever one owns it.
pub(crate) trait Link<T> {
    /// Get the next pointer
    fn next(&self) -> Option<NonNull<Node<T>>>;

    /// Set the next pointer
    fn set_next(&mut self, next: Option<NonNull<Node<T>>>);
}
