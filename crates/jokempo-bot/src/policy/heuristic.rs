use super::{Policy, PolicyContext};
use crate::scoring::CandidateScores;
use jokempo_core::model::hand::Hand;
use tracing::{Level, event};

/// Scores both computer candidates and keeps the better one.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for HeuristicPolicy {
    fn choose_final(&mut self, ctx: &PolicyContext) -> Hand {
        let scores = CandidateScores::evaluate(ctx.player, ctx.computer);
        let choice = scores.pick(ctx.computer);
        log_final_decision(ctx, scores, choice);
        choice
    }
}

fn log_final_decision(ctx: &PolicyContext, scores: CandidateScores, choice: Hand) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    let tie = scores.first == scores.second;
    event!(
        target: "jokempo_bot::final",
        Level::DEBUG,
        player = ctx.player_name,
        player_candidates = %ctx.player,
        computer_candidates = %ctx.computer,
        first_score = scores.first,
        second_score = scores.second,
        tie,
        choice = %choice
    );
}

#[cfg(test)]
mod tests {
    use super::HeuristicPolicy;
    use crate::policy::{Policy, PolicyContext};
    use jokempo_core::model::candidates::RoundCandidates;
    use jokempo_core::model::hand::Hand;

    #[test]
    fn picks_the_higher_scoring_candidate() {
        let mut policy = HeuristicPolicy::new();
        let ctx = PolicyContext {
            player_name: "Ana",
            player: RoundCandidates::new(Hand::Rock, Hand::Scissors),
            computer: RoundCandidates::new(Hand::Paper, Hand::Scissors),
        };
        assert_eq!(policy.choose_final(&ctx), Hand::Paper);
    }
}
