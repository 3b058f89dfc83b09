pub mod constraint;
pub mod frequency;
pub mod matcher;
pub mod prefilter;

// Re-export the types most callers need.
pub use constraint::{Constraint, Position};
pub use frequency::FrequencyTable;
pub use matcher::{match_pattern, match_positions};
