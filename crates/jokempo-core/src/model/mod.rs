pub mod candidates;
pub mod hand;
pub mod outcome;
pub mod roster;
pub mod stats;
