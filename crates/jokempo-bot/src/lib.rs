pub mod policy;
pub mod scoring;

pub use policy::{HeuristicPolicy, Policy, PolicyContext};
pub use scoring::{CandidateScores, choose_computer_hand, score_candidate};
