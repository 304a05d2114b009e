use thiserror::Error;

/// Errors caused by a malformed request. A query that is well-formed but has no
/// connecting route is not an error; see [RouteSolver::find_shortest_path](crate::solver::RouteSolver::find_shortest_path).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("({x}, {y}) lies outside the {width}x{height} map")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("({x}, {y}) is impassable terrain")]
    Impassable { x: i32, y: i32 },
    #[error("({x}, {y}) is already occupied")]
    Occupied { x: i32, y: i32 },
    #[error("a {width}x{height} map exceeds the {max_width}x{max_height} limit")]
    TooLarge {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },
}

impl MapError {
    pub(crate) fn invalid(message: impl Into<String>) -> MapError {
        MapError::InvalidArgument(message.into())
    }
}
