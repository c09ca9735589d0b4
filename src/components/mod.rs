//! Reusable view components.

pub mod force_graph;
pub mod interaction_table;
