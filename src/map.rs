//! Loader for the line-oriented road map format.
//!
//! ```text
//! 1          scale (kept, unused by the search)
//! 0          start
//! 3          destination
//! 2          width
//! 2          length
//! 4          initial budget
//! 3          toll
//! 1          reward
//! +T+        row 0: nodes 0, 1 and the road between them
//! FXC        roads 0-2 and 1-3
//! +F+        row 1: nodes 2, 3
//! ```
//!
//! Grid rows alternate. Even rows hold `+` for each node with a road symbol
//! (`F` public, `T` toll, `C` reward, `X` none) between horizontal
//! neighbours. Odd rows hold a road symbol under each node column, linking
//! it to the node `width` further on, and `X` between columns.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{GraphResult, MapError};
use crate::graph::{EdgeKind, RoadGraph};
use crate::search::{PathFinder, SearchOutcome, Tariff, Trip};

const NODE_SYMBOL: char = '+';
const BLOCK_SYMBOL: char = 'X';

/// A loaded road map: the graph plus the trip it was written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadMap {
    graph: RoadGraph,
    trip: Trip,
    tariff: Tariff,
    width: usize,
    length: usize,
    scale: String,
}

impl RoadMap {
    /// Opens and parses a map file.
    ///
    /// # Errors
    /// [`MapError::Io`] if the file cannot be read, otherwise any parse error
    /// from [`from_reader`](Self::from_reader).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses a map description.
    ///
    /// # Errors
    /// Returns the first [`MapError`] met; nothing is returned for a
    /// partially valid map.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MapError> {
        let mut lines = NumberedLines::new(reader);

        let (_, scale) = lines.next_line("scale factor")?;
        let start = lines.next_number("start node")?;
        let destination = lines.next_number("destination node")?;
        let width = lines.next_dimension("width")?;
        let length = lines.next_dimension("length")?;
        let budget = lines.next_number("initial budget")?;
        let toll = lines.next_number("toll")?;
        let reward = lines.next_number("reward")?;

        let header_end = lines.line;
        let too_large = |field, value: usize| MapError::InvalidDimension {
            line: header_end,
            field,
            value: i64::try_from(value).unwrap_or(i64::MAX),
        };
        let node_count = width
            .checked_mul(length)
            .ok_or_else(|| too_large("length", length))?;
        let columns = width
            .checked_mul(2)
            .ok_or_else(|| too_large("width", width))?
            - 1;
        let rows = length
            .checked_mul(2)
            .ok_or_else(|| too_large("length", length))?
            - 1;

        // The whole grid is read and checked before the node table is
        // allocated, so a truncated file never costs `width * length`.
        let mut roads = Vec::new();
        for row in 0..rows {
            let (line, text) = lines.next_line("grid row")?;
            let symbols: Vec<char> = text.trim_end().chars().collect();
            if symbols.len() != columns {
                return Err(MapError::RowLength {
                    line,
                    expected: columns,
                    found: symbols.len(),
                });
            }

            let grid_row = row / 2;
            for (col, &symbol) in symbols.iter().enumerate() {
                let unexpected = MapError::UnexpectedSymbol {
                    line,
                    column: col + 1,
                    found: symbol,
                };
                let (even_row, even_col) = (row % 2 == 0, col % 2 == 0);

                if even_row && even_col {
                    if symbol != NODE_SYMBOL {
                        return Err(unexpected);
                    }
                    continue;
                }
                if !even_row && !even_col {
                    if symbol != BLOCK_SYMBOL {
                        return Err(unexpected);
                    }
                    continue;
                }
                if symbol == BLOCK_SYMBOL {
                    continue;
                }

                let kind = EdgeKind::from_symbol(symbol).ok_or(unexpected)?;
                let u = grid_row * width + col / 2;
                let v = if even_row { u + 1 } else { u + width };
                roads.push((line, u, v, kind));
            }
        }

        let mut graph = RoadGraph::new(node_count);
        for (line, u, v, kind) in roads {
            graph
                .insert_edge(u, v, kind)
                .map_err(|source| MapError::Graph { line, source })?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            width,
            length,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "road map loaded"
        );

        Ok(Self {
            graph,
            trip: Trip::new(start, destination, budget),
            tariff: Tariff::new(toll, reward),
            width,
            length,
            scale: scale.trim().to_owned(),
        })
    }

    /// The road graph.
    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    /// Start, destination and initial budget from the header.
    pub fn trip(&self) -> Trip {
        self.trip
    }

    /// Toll and reward amounts from the header.
    pub fn tariff(&self) -> Tariff {
        self.tariff
    }

    /// Nodes per grid row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of grid rows.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The scale line, verbatim.
    pub fn scale(&self) -> &str {
        &self.scale
    }

    /// Searches for the trip described in the header.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`](crate::GraphError::InvalidNode) if the
    /// header's start or destination is not on the grid.
    pub fn find_path(&self) -> GraphResult<SearchOutcome> {
        PathFinder::new(&self.graph, self.tariff).find_trip(&self.trip)
    }

    /// A finder over this map's graph and tariff, for trips other than the
    /// header's.
    pub fn path_finder(&self) -> PathFinder<'_> {
        PathFinder::new(&self.graph, self.tariff)
    }
}

impl FromStr for RoadMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

/// Line reader that remembers the 1-based number of the last line handed out.
struct NumberedLines<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, field: &'static str) -> Result<(usize, String), MapError> {
        self.line += 1;
        match self.lines.next() {
            Some(text) => Ok((self.line, text?)),
            None => Err(MapError::MissingLine {
                line: self.line,
                field,
            }),
        }
    }

    fn next_number(&mut self, field: &'static str) -> Result<i64, MapError> {
        let (line, text) = self.next_line(field)?;
        let value = text.trim();
        value.parse().map_err(|_| MapError::InvalidNumber {
            line,
            field,
            value: value.to_owned(),
        })
    }

    fn next_dimension(&mut self, field: &'static str) -> Result<usize, MapError> {
        let value = self.next_number(field)?;
        usize::try_from(value)
            .ok()
            .filter(|&v| v > 0)
            .ok_or(MapError::InvalidDimension {
                line: self.line,
                field,
                value,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "1\n0\n3\n2\n2\n4\n3\n1\n+T+\nFXC\n+F+\n";

    #[test]
    fn parses_header_and_grid() {
        let map: RoadMap = SQUARE.parse().unwrap();
        assert_eq!(map.scale(), "1");
        assert_eq!((map.width(), map.length()), (2, 2));
        assert_eq!(map.trip(), Trip::new(0, 3, 4));
        assert_eq!(map.tariff(), Tariff::new(3, 1));

        let g = map.graph();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.edge_between(0, 1).unwrap().kind(), EdgeKind::Toll);
        assert_eq!(g.edge_between(0, 2).unwrap().kind(), EdgeKind::Public);
        assert_eq!(g.edge_between(1, 3).unwrap().kind(), EdgeKind::Reward);
        assert_eq!(g.edge_between(2, 3).unwrap().kind(), EdgeKind::Public);
    }

    #[test]
    fn blocked_roads_and_trailing_whitespace() {
        let text = "1\n0\n1\n2\n2\n0\n0\n0\n+X+  \nXXF\n+F+\r\n";
        let map = RoadMap::from_str(text).unwrap();
        let g = map.graph();
        assert!(!g.are_adjacent(0, 1).unwrap());
        assert!(!g.are_adjacent(0, 2).unwrap());
        assert!(g.are_adjacent(1, 3).unwrap());
        assert!(g.are_adjacent(2, 3).unwrap());
    }

    #[test]
    fn header_finds_route() {
        let map: RoadMap = SQUARE.parse().unwrap();
        // 0 -T- 1 costs 3 of the 4; 1 -C- 3 pays it back to 2.
        let route = map.find_path().unwrap().into_route().unwrap();
        assert_eq!(route.indices(), vec![0, 1, 3]);
        assert_eq!(route.budgets(), &[4, 1, 2]);
    }

    #[test]
    fn missing_grid_row() {
        let err = RoadMap::from_str("1\n0\n3\n2\n2\n4\n3\n1\n+T+\nFXC\n").unwrap_err();
        assert!(matches!(err, MapError::MissingLine { line: 11, field: "grid row" }));
    }

    #[test]
    fn bad_header_number() {
        let err = RoadMap::from_str("1\n0\nthree\n").unwrap_err();
        match err {
            MapError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 3);
                assert_eq!(field, "destination node");
                assert_eq!(value, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_positive_dimension() {
        let err = RoadMap::from_str("1\n0\n0\n0\n1\n0\n0\n0\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::InvalidDimension { line: 4, field: "width", value: 0 }
        ));
    }

    #[test]
    fn huge_header_without_grid_is_an_error() {
        let err = RoadMap::from_str("1\n0\n1\n2147483648\n2147483648\n0\n0\n0\n").unwrap_err();
        assert!(matches!(err, MapError::MissingLine { line: 9, field: "grid row" }));
    }

    #[test]
    fn huge_width_with_short_row_is_an_error() {
        let err = RoadMap::from_str("1\n0\n1\n1000000\n1000000\n0\n0\n0\n+F+\n").unwrap_err();
        assert!(matches!(err, MapError::RowLength { line: 9, expected: 1_999_999, found: 3 }));
    }

    #[test]
    fn overflowing_node_count_is_rejected() {
        let err = RoadMap::from_str("1\n0\n1\n4294967296\n4294967296\n0\n0\n0\n").unwrap_err();
        assert!(matches!(err, MapError::InvalidDimension { line: 8, .. }));
    }

    #[test]
    fn row_length_and_symbols_checked() {
        let short = RoadMap::from_str("1\n0\n3\n2\n2\n4\n3\n1\n+T\nFXC\n+F+\n").unwrap_err();
        assert!(matches!(short, MapError::RowLength { line: 9, expected: 3, found: 2 }));

        let bad_node = RoadMap::from_str("1\n0\n3\n2\n2\n4\n3\n1\n+TX\nFXC\n+F+\n").unwrap_err();
        assert!(matches!(
            bad_node,
            MapError::UnexpectedSymbol { line: 9, column: 3, found: 'X' }
        ));

        let bad_road = RoadMap::from_str("1\n0\n3\n2\n2\n4\n3\n1\n+Q+\nFXC\n+F+\n").unwrap_err();
        assert!(matches!(
            bad_road,
            MapError::UnexpectedSymbol { line: 9, column: 2, found: 'Q' }
        ));
    }
}
