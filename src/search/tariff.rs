//! Trip parameters and the budget rules applied per road kind.

use serde::{Deserialize, Serialize};

use crate::graph::EdgeKind;

/// Fixed amounts charged on toll roads and paid on reward roads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tariff {
    /// Subtracted from the budget when a toll road is taken.
    pub toll: i64,
    /// Added to the budget when a reward road is taken.
    pub reward: i64,
}

impl Tariff {
    /// Creates a tariff.
    pub const fn new(toll: i64, reward: i64) -> Self {
        Self { toll, reward }
    }

    /// Budget change for taking a road of `kind`.
    pub const fn delta(&self, kind: EdgeKind) -> i64 {
        match kind {
            EdgeKind::Public => 0,
            EdgeKind::Toll => self.toll.wrapping_neg(),
            EdgeKind::Reward => self.reward,
        }
    }

    /// Budget after taking a road of `kind` with `budget` in hand, or `None`
    /// if the road may not be taken.
    ///
    /// Public roads are always open and leave the budget alone (even a
    /// negative one). Toll and reward roads are open only when the resulting
    /// budget is non-negative; an `i64` overflow closes the road.
    pub fn charge(&self, kind: EdgeKind, budget: i64) -> Option<i64> {
        match kind {
            EdgeKind::Public => Some(budget),
            EdgeKind::Toll => budget.checked_sub(self.toll).filter(|b| *b >= 0),
            EdgeKind::Reward => budget.checked_add(self.reward).filter(|b| *b >= 0),
        }
    }
}

/// A requested journey: where from, where to, and the money at the start.
///
/// Indices are signed because they usually come from outside (map files,
/// command lines); the search resolves them against the graph and reports
/// anything out of range as [`GraphError::InvalidNode`](crate::GraphError::InvalidNode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trip {
    /// Start node index.
    pub start: i64,
    /// Destination node index.
    pub destination: i64,
    /// Initial budget.
    pub budget: i64,
}

impl Trip {
    /// Creates a trip.
    pub const fn new(start: i64, destination: i64, budget: i64) -> Self {
        Self {
            start,
            destination,
            budget,
        }
    }
}
