mod heuristic;

pub use heuristic::HeuristicPolicy;

use jokempo_core::model::candidates::RoundCandidates;
use jokempo_core::model::hand::Hand;

/// What the computer knows when committing: both sides' candidates, not the player's final pick.
pub struct PolicyContext<'a> {
    pub player_name: &'a str,
    pub player: RoundCandidates,
    pub computer: RoundCandidates,
}

/// Decision interface for the computer side.
pub trait Policy: Send {
    /// Pick the final hand. Must return one of `ctx.computer`'s candidates.
    fn choose_final(&mut self, ctx: &PolicyContext) -> Hand;
}
