//! Cheapest-route planner over a compiled line network.
//!
//! Answers: "what is the cheapest sequence of stations from X to Y, where
//! travel costs a flat fare per station visited plus a flat fare per line
//! change?" Routes are compared by station count first; the fare is the
//! value attached to the winning route, not the ranking key.

mod costs;
mod search;


pub use costs::SearchCosts;
pub use search::shortest_paths;
