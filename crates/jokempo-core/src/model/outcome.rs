use crate::model::hand::Hand;
use core::fmt;

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWins,
    Draw,
    ComputerWins,
}

impl Outcome {
    pub const fn reversed(self) -> Self {
        match self {
            Outcome::PlayerWins => Outcome::ComputerWins,
            Outcome::Draw => Outcome::Draw,
            Outcome::ComputerWins => Outcome::PlayerWins,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::PlayerWins => "player_wins",
            Outcome::Draw => "draw",
            Outcome::ComputerWins => "computer_wins",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares the two final hands.
pub const fn resolve(player: Hand, computer: Hand) -> Outcome {
    if player as u8 == computer as u8 {
        Outcome::Draw
    } else if player.beats(computer) {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}
