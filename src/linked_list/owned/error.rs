use core::fmt;

/// Error returned when a payload could not be inserted.
///
/// The payload is handed back untouched; the container is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError<T> {
    /// The node for the payload could not be allocated.
    Alloc(T),
    /// The container was built with a limit and is already at it.
    Full(T),
}

impl<T> InsertError<T> {
    /// Returns the payload that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::Alloc(data) | InsertError::Full(data) => data,
        }
    }

    /// Returns `true` if the insertion failed because allocation failed.
    pub fn is_alloc(&self) -> bool {
        matches!(self, InsertError::Alloc(_))
    }

    /// Returns `true` if the insertion failed because the container is at its limit.
    pub fn is_full(&self) -> bool {
        matches!(self, InsertError::Full(_))
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::Alloc(_) => write!(f, "node allocation failed"),
            InsertError::Full(_) => write!(f, "container is at capacity"),
        }
    }
}

impl<T: fmt::Debug> core::error::Error for InsertError<T> {}

/// Error returned when the target node is not in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node not found in container")
    }
}

impl core::error::Error for NotFound {}
