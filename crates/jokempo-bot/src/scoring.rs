use jokempo_core::model::candidates::RoundCandidates;
use jokempo_core::model::hand::Hand;

const BEATS_WEIGHT: u8 = 2;
const TIES_WEIGHT: u8 = 1;

/// Scores one computer candidate against the player's pair:
/// +2 when it beats either player hand, +1 when it matches either.
pub fn score_candidate(candidate: Hand, player: RoundCandidates) -> u8 {
    let mut score = 0;
    if player.iter().any(|hand| candidate.beats(hand)) {
        score += BEATS_WEIGHT;
    }
    if player.contains(candidate) {
        score += TIES_WEIGHT;
    }
    score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateScores {
    pub first: u8,
    pub second: u8,
}

impl CandidateScores {
    pub fn evaluate(player: RoundCandidates, computer: RoundCandidates) -> Self {
        Self {
            first: score_candidate(computer.first(), player),
            second: score_candidate(computer.second(), player),
        }
    }

    /// The first candidate only wins on a strictly higher score.
    pub fn pick(&self, computer: RoundCandidates) -> Hand {
        if self.first > self.second {
            computer.first()
        } else {
            computer.second()
        }
    }
}

pub fn choose_computer_hand(player: RoundCandidates, computer: RoundCandidates) -> Hand {
    CandidateScores::evaluate(player, computer).pick(computer)
}

#[cfg(test)]
mod tests {
    use super::{CandidateScores, choose_computer_hand, score_candidate};
    use jokempo_core::model::candidates::RoundCandidates;
    use jokempo_core::model::hand::Hand;

    #[test]
    fn beating_and_tying_add_up() {
        let player = RoundCandidates::new(Hand::Rock, Hand::Paper);
        assert_eq!(score_candidate(Hand::Paper, player), 3);
        assert_eq!(score_candidate(Hand::Scissors, player), 2);
        assert_eq!(score_candidate(Hand::Rock, player), 1);
    }

    #[test]
    fn beating_both_player_hands_counts_once() {
        let player = RoundCandidates::new(Hand::Rock, Hand::Rock);
        assert_eq!(score_candidate(Hand::Paper, player), 2);
    }

    #[test]
    fn paper_wins_against_rock_and_scissors() {
        let player = RoundCandidates::new(Hand::Rock, Hand::Scissors);
        let computer = RoundCandidates::new(Hand::Paper, Hand::Scissors);
        let scores = CandidateScores::evaluate(player, computer);
        assert_eq!(scores, CandidateScores { first: 2, second: 1 });
        assert_eq!(choose_computer_hand(player, computer), Hand::Paper);
    }

    #[test]
    fn ties_favor_second_candidate() {
        let computer = RoundCandidates::new(Hand::Rock, Hand::Paper);
        let scores = CandidateScores { first: 1, second: 1 };
        assert_eq!(scores.pick(computer), Hand::Paper);
    }

    #[test]
    fn higher_score_wins_in_either_slot() {
        let player = RoundCandidates::new(Hand::Rock, Hand::Paper);
        let computer = RoundCandidates::new(Hand::Scissors, Hand::Rock);
        assert_eq!(choose_computer_hand(player, computer), Hand::Scissors);
        let computer = RoundCandidates::new(Hand::Rock, Hand::Paper);
        assert_eq!(choose_computer_hand(player, computer), Hand::Paper);
    }
}
