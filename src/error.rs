//! Error types for graph construction, queries and map loading.
//!
//! `GraphError` covers structural failures of the road graph. A search that
//! simply runs out of branches is *not* an error; it is reported as
//! [`SearchOutcome::NotFound`](crate::search::SearchOutcome::NotFound).

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Structural errors raised by [`RoadGraph`](crate::graph::RoadGraph) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An index outside `[0, node_count)`.
    #[error("node {index} does not exist in a graph of {node_count} nodes")]
    InvalidNode {
        /// The offending index, as supplied by the caller.
        index: i64,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// An edge between the two nodes is already present.
    #[error("an edge between nodes {u} and {v} already exists")]
    DuplicateEdge {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
    },

    /// The two nodes are not adjacent.
    #[error("there is no edge between nodes {u} and {v}")]
    NoSuchEdge {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
    },
}

impl GraphError {
    pub(crate) fn invalid_node(index: usize, node_count: usize) -> Self {
        Self::InvalidNode {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            node_count,
        }
    }
}

/// Errors raised while loading a road map description.
///
/// Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum MapError {
    /// The map source could not be read.
    #[error("unable to read road map: {0}")]
    Io(#[from] std::io::Error),

    /// The description ended before the named field.
    #[error("line {line}: missing {field}")]
    MissingLine {
        /// Line where the field was expected.
        line: usize,
        /// What was expected there.
        field: &'static str,
    },

    /// A header line did not hold an integer.
    #[error("line {line}: {field} must be an integer, found {value:?}")]
    InvalidNumber {
        /// Line of the header value.
        line: usize,
        /// Header field name.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// Width or length was zero or negative.
    #[error("line {line}: {field} must be positive, found {value}")]
    InvalidDimension {
        /// Line of the header value.
        line: usize,
        /// Header field name.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A grid row has the wrong number of symbols.
    #[error("line {line}: expected {expected} grid symbols, found {found}")]
    RowLength {
        /// Line of the grid row.
        line: usize,
        /// Required symbol count (`2 * width - 1`).
        expected: usize,
        /// Actual symbol count.
        found: usize,
    },

    /// A grid symbol is not valid at its position.
    #[error("line {line}, column {column}: unexpected symbol {found:?}")]
    UnexpectedSymbol {
        /// Line of the grid row.
        line: usize,
        /// 1-based column.
        column: usize,
        /// The rejected symbol.
        found: char,
    },

    /// The grid described an edge the graph refused.
    #[error("line {line}: {source}")]
    Graph {
        /// Line of the grid row.
        line: usize,
        /// Underlying graph error.
        #[source]
        source: GraphError,
    },
}
