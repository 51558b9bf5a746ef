//! Undirected, kind-tagged road segments.

use serde::{Deserialize, Serialize};

use super::Node;

/// What traversing a road does to the traveller's budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Free road, no budget effect.
    Public,
    /// Private road, charges the toll.
    Toll,
    /// Compensation road, pays the reward.
    Reward,
}

impl EdgeKind {
    /// Map symbol for this kind (`F`, `T` or `C`).
    pub const fn symbol(self) -> char {
        match self {
            Self::Public => 'F',
            Self::Toll => 'T',
            Self::Reward => 'C',
        }
    }

    /// Parses a map symbol. `None` for anything that is not a road.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' => Some(Self::Public),
            'T' => Some(Self::Toll),
            'C' => Some(Self::Reward),
            _ => None,
        }
    }
}

/// One direction of an undirected road.
///
/// The graph stores every road as two of these (`a -> b` and `b -> a`) with
/// the same kind, so lookups from either endpoint agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: Node,
    to: Node,
    kind: EdgeKind,
}

impl Edge {
    pub(crate) const fn new(from: Node, to: Node, kind: EdgeKind) -> Self {
        Self { from, to, kind }
    }

    /// The endpoint the edge was looked up from.
    #[inline]
    pub const fn from(&self) -> Node {
        self.from
    }

    /// The opposite endpoint.
    #[inline]
    pub const fn to(&self) -> Node {
        self.to
    }

    /// The road kind.
    #[inline]
    pub const fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// The same road seen from the other endpoint.
    pub const fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for kind in [EdgeKind::Public, EdgeKind::Toll, EdgeKind::Reward] {
            assert_eq!(EdgeKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(EdgeKind::from_symbol('X'), None);
        assert_eq!(EdgeKind::from_symbol('+'), None);
    }

    #[test]
    fn reversed_swaps_endpoints_keeps_kind() {
        let edge = Edge::new(Node::new(2), Node::new(5), EdgeKind::Toll);
        let back = edge.reversed();
        assert_eq!(back.from(), Node::new(5));
        assert_eq!(back.to(), Node::new(2));
        assert_eq!(back.kind(), EdgeKind::Toll);
        assert_eq!(back.reversed(), edge);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&EdgeKind::Reward).unwrap();
        assert_eq!(json, "\"reward\"");
    }
}
