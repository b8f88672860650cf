use thiserror::Error;

/// Errors raised while building or querying the route table.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Two modules contributed the same path.
    #[error("route path '{path}' is declared by both '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    /// No entry matches the requested path.
    #[error("no route matches path '{0}'")]
    NoMatch(String),

    /// The table was queried before the router initialized.
    #[error("route table has not been built")]
    TableNotBuilt,
}
