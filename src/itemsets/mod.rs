//! The three stages of one Apriori level: candidate generation, pruning
//! and support counting.

pub mod count;
pub mod prune;
pub mod search;

pub use count::{support, support_counter, HorizontalCounter, SupportCounter, VerticalCounter};
pub use prune::{is_prunable, prune, FrequentLookup};
pub use search::generate_candidates;
