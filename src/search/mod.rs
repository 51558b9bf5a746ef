//! Budget-constrained route search.
//!
//! - `tariff`: toll/reward amounts and trip parameters
//! - `path_finder`: the depth-first search with exact budget rollback
//! - `batch`: independent searches over a shared graph

pub mod batch;
pub mod path_finder;
pub mod tariff;

pub use batch::find_paths;
pub use path_finder::{PathFinder, Route, SearchOutcome};
pub use tariff::{Tariff, Trip};
