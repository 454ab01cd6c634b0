//! Metro line-network compiler and shortest-route planner.
//!
//! Turns a human-authored description of named lines ("Red: A, B, C") into
//! a station graph, then answers: "what is the cheapest sequence of
//! stations from X to Y, paying per station visited and per line change?"
//!
//! The two entry points consumed by a UI layer are
//! [`spec::parse_lines_spec`] and [`network::LineNetwork::shortest_paths`].

pub mod domain;
pub mod network;
pub mod planner;
pub mod spec;
