use core::fmt;

/// Recoverable lookup failures surfaced by the keyed map containers.
/// Contract logic decides whether to handle these or abort the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    KeyNotFound,
    EmptyMap,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::KeyNotFound => write!(f, "key not found"),
            MapError::EmptyMap => write!(f, "map contains no element"),
        }
    }
}
