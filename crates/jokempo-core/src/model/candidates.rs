use crate::model::hand::Hand;
use core::fmt;

/// The two hands a side proposes before committing to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundCandidates {
    hands: [Hand; 2],
}

impl RoundCandidates {
    pub const fn new(first: Hand, second: Hand) -> Self {
        Self {
            hands: [first, second],
        }
    }

    pub const fn first(&self) -> Hand {
        self.hands[0]
    }

    pub const fn second(&self) -> Hand {
        self.hands[1]
    }

    pub const fn as_array(&self) -> [Hand; 2] {
        self.hands
    }

    pub fn contains(&self, hand: Hand) -> bool {
        self.hands.contains(&hand)
    }

    pub fn is_distinct(&self) -> bool {
        self.hands[0] != self.hands[1]
    }

    pub fn iter(&self) -> impl Iterator<Item = Hand> + '_ {
        self.hands.iter().copied()
    }
}

impl From<[Hand; 2]> for RoundCandidates {
    fn from(hands: [Hand; 2]) -> Self {
        Self { hands }
    }
}

impl fmt::Display for RoundCandidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.hands[0], self.hands[1])
    }
}

#[cfg(test)]
mod tests {
    use super::RoundCandidates;
    use crate::model::hand::Hand;

    #[test]
    fn contains_only_its_two_hands() {
        let candidates = RoundCandidates::new(Hand::Rock, Hand::Paper);
        assert!(candidates.contains(Hand::Rock));
        assert!(candidates.contains(Hand::Paper));
        assert!(!candidates.contains(Hand::Scissors));
    }

    #[test]
    fn player_may_repeat_a_hand() {
        let candidates = RoundCandidates::new(Hand::Scissors, Hand::Scissors);
        assert!(!candidates.is_distinct());
        assert_eq!(candidates.first(), candidates.second());
    }

    #[test]
    fn display_joins_both_hands() {
        let candidates = RoundCandidates::from([Hand::Paper, Hand::Rock]);
        assert_eq!(candidates.to_string(), "Paper ✋ and Rock ✊");
    }
}
