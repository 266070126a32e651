//! Longest simple path search for the Longest Path Explorer (LPX).
//!
//! Exhaustive depth-first enumeration of simple paths over a [`DiGraph`],
//! pruned with an admissible upper bound on the weight any extension of a
//! partial path can still collect. Longest simple path is NP-hard in
//! general; pruning keeps the search practical on small-to-moderate
//! instances only.
//!
//! [`DiGraph`]: lpx_graph::DiGraph

pub mod bound;
pub mod result;
pub mod searcher;

pub use bound::WeightBound;
pub use result::{BestPath, SearchOutcome, SearchStats};
pub use searcher::{longest_path, ClosingPolicy, SearchConfig};
